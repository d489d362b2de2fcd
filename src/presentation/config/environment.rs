use std::fmt;

pub const ENVIRONMENT_VARIABLE: &str = "APP_ENVIRONMENT";

/// Deployment environment; selects which `appsettings.*.toml` file is layered
/// over the built-in defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Local,
    Test,
    Prod,
}

impl Environment {
    /// Reads `APP_ENVIRONMENT`, falling back to `Local` when it is unset.
    pub fn from_env() -> Result<Self, String> {
        match std::env::var(ENVIRONMENT_VARIABLE) {
            Ok(value) => Self::try_from(value),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "Local",
            Environment::Test => "Test",
            Environment::Prod => "Prod",
        }
    }

    pub fn settings_file(&self) -> String {
        format!("appsettings.{}", self.as_str())
    }

    /// Production logs are emitted as JSON regardless of the logging section.
    pub fn prefers_json_logs(&self) -> bool {
        matches!(self, Environment::Prod)
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "local" | "dev" | "development" => Ok(Self::Local),
            "test" => Ok(Self::Test),
            "prod" | "production" => Ok(Self::Prod),
            other => Err(format!(
                "unknown {ENVIRONMENT_VARIABLE} '{other}', expected local, test or prod"
            )),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
