mod component_classifier_test;
mod prompt_builder_test;
