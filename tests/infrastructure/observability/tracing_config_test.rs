use clinical_components::infrastructure::observability::TracingConfig;

#[test]
fn given_default_config_when_created_then_plain_info_logging() {
    let config = TracingConfig::default();

    assert_eq!(config.level, "info");
    assert!(!config.json_format);
}

#[test]
fn given_level_when_building_filter_then_crate_and_http_layers_follow_it() {
    let config = TracingConfig {
        environment: "Prod".to_string(),
        level: "warn".to_string(),
        json_format: true,
    };

    assert_eq!(
        config.filter_directive(),
        "warn,clinical_components=warn,tower_http=warn"
    );
}

#[test]
fn given_blank_level_when_building_filter_then_defaults_to_info() {
    let config = TracingConfig {
        level: "  ".to_string(),
        ..TracingConfig::default()
    };

    assert!(config.filter_directive().starts_with("info,"));
}
