use clinical_components::domain::{
    Component, ComponentLocation, ComponentType, ReusePotential,
};

#[test]
fn given_every_taxonomy_name_when_parsing_then_round_trips_through_as_str() {
    for component_type in ComponentType::ALL {
        assert_eq!(ComponentType::parse(component_type.as_str()), Some(component_type));
    }
}

#[test]
fn given_unknown_or_miscased_name_when_parsing_then_returns_none() {
    assert_eq!(ComponentType::parse("obscure_category"), None);
    assert_eq!(ComponentType::parse("Safety"), None);
    assert_eq!(ComponentType::parse(""), None);
}

#[test]
fn given_reuse_potential_with_noise_when_parsing_then_normalizes() {
    assert_eq!(ReusePotential::parse(" High "), Some(ReusePotential::High));
    assert_eq!(ReusePotential::parse("LOW"), Some(ReusePotential::Low));
    assert_eq!(ReusePotential::parse("very high"), None);
    assert_eq!(ReusePotential::default(), ReusePotential::Medium);
}

#[test]
fn given_component_when_serialized_then_uses_wire_field_names() {
    let component = Component {
        component_type: ComponentType::CsrStructure,
        title: "Synopsis".to_string(),
        text: "Study synopsis text".to_string(),
        confidence: 0.75,
        reuse_potential: ReusePotential::Low,
        rationale: "Standard CSR section".to_string(),
        location: ComponentLocation {
            page: Some(2),
            section: Some("2. SYNOPSIS".to_string()),
        },
    };

    let value = serde_json::to_value(&component).unwrap();

    assert_eq!(value["type"], "csr_structure");
    assert_eq!(value["reuse_potential"], "low");
    assert_eq!(value["location"]["page"], 2);
    assert_eq!(value["location"]["section"], "2. SYNOPSIS");
}

#[test]
fn given_component_without_location_when_serialized_then_location_is_omitted() {
    let component = Component {
        component_type: ComponentType::Ethics,
        title: "IRB".to_string(),
        text: "IRB approval text".to_string(),
        confidence: 0.8,
        reuse_potential: ReusePotential::Medium,
        rationale: String::new(),
        location: ComponentLocation::default(),
    };

    let value = serde_json::to_value(&component).unwrap();

    assert!(value.get("location").is_none());
}
