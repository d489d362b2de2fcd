use clinical_components::presentation::Environment;

#[test]
fn given_known_names_when_parsing_then_case_and_aliases_are_accepted() {
    assert_eq!(Environment::try_from("LOCAL".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from("development".to_string()), Ok(Environment::Local));
    assert_eq!(Environment::try_from(" test ".to_string()), Ok(Environment::Test));
    assert_eq!(Environment::try_from("production".to_string()), Ok(Environment::Prod));
}

#[test]
fn given_unknown_name_when_parsing_then_error_names_the_value() {
    let error = Environment::try_from("staging".to_string()).unwrap_err();

    assert!(error.contains("staging"));
}

#[test]
fn given_environment_when_resolving_settings_file_then_uses_display_name() {
    assert_eq!(Environment::Local.settings_file(), "appsettings.Local");
    assert_eq!(Environment::Prod.to_string(), "Prod");
    assert!(Environment::Prod.prefers_json_logs());
    assert!(!Environment::Local.prefers_json_logs());
}
