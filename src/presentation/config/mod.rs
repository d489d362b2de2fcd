mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ClassificationSettings, ExtractionSettings, LlmSettings, LoggingSettings, ServerSettings,
    Settings,
};
