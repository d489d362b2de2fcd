use clinical_components::application::services::{
    ClassificationMode, DOCUMENT_SYSTEM_INSTRUCTION, PromptBuilder, TEXT_SYSTEM_INSTRUCTION,
};
use clinical_components::domain::ClassificationProfile;

#[test]
fn given_clinical_profile_when_building_prompt_then_every_example_is_numbered() {
    let profile = ClassificationProfile::clinical_default();
    let prompt = PromptBuilder::new(&profile).build("[PAGE 1]\nSome protocol text.");

    for i in 1..=profile.examples.len() {
        assert!(prompt.contains(&format!("EXAMPLE {i}:")), "missing example {i}");
    }
    assert!(!prompt.contains(&format!("EXAMPLE {}:", profile.examples.len() + 1)));
}

#[test]
fn given_clinical_profile_when_building_prompt_then_taxonomy_is_embedded_as_json() {
    let profile = ClassificationProfile::clinical_default();
    let prompt = PromptBuilder::new(&profile).build("text");

    assert!(prompt.contains("COMPONENT TAXONOMY:"));
    assert!(prompt.contains("\"name\": \"regulatory_guidance\""));
    assert!(prompt.contains("\"component_types\""));
}

#[test]
fn given_document_text_when_building_prompt_then_document_precedes_closing_instruction() {
    let profile = ClassificationProfile::clinical_default();
    let document = "[PAGE 2]\nThe primary endpoint is overall survival.";

    let prompt = PromptBuilder::new(&profile).build(document);

    let document_at = prompt.find(document).unwrap();
    let analyze_at = prompt.find("DOCUMENT TO ANALYZE:").unwrap();
    assert!(analyze_at < document_at);
    assert!(prompt.ends_with("return ONLY the JSON array, no additional text."));
}

#[test]
fn given_same_builder_when_building_twice_then_only_document_differs() {
    let builder = PromptBuilder::new(&ClassificationProfile::clinical_default());

    let first = builder.build("DOC_TOKEN_ONE");
    let second = builder.build("DOC_TOKEN_TWO");

    assert_eq!(first.replace("DOC_TOKEN_ONE", "DOC_TOKEN_TWO"), second);
}

#[test]
fn given_modes_when_selecting_system_instruction_then_document_mode_asks_for_locations() {
    assert_eq!(ClassificationMode::Text.system_instruction(), TEXT_SYSTEM_INSTRUCTION);
    assert_eq!(
        ClassificationMode::Document.system_instruction(),
        DOCUMENT_SYSTEM_INSTRUCTION
    );
    assert!(DOCUMENT_SYSTEM_INSTRUCTION.contains("location"));
    assert!(!TEXT_SYSTEM_INSTRUCTION.contains("location"));
}
