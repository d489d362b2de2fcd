/// Subscriber options resolved from configuration at startup.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: String,
    /// Base level directive, e.g. `info` or `warn`. `RUST_LOG` wins when set.
    pub level: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn filter_directive(&self) -> String {
        let level = self.level.trim();
        let level = if level.is_empty() { "info" } else { level };
        format!("{level},clinical_components={level},tower_http={level}")
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: "Local".to_string(),
            level: "info".to_string(),
            json_format: false,
        }
    }
}
