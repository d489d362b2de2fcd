use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed component categories of the clinical taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Boilerplate,
    Definition,
    StudySection,
    DrugInfo,
    Safety,
    Procedure,
    CsrStructure,
    Statistical,
    RegulatoryGuidance,
    Ethics,
}

impl ComponentType {
    pub const ALL: [ComponentType; 10] = [
        Self::Boilerplate,
        Self::Definition,
        Self::StudySection,
        Self::DrugInfo,
        Self::Safety,
        Self::Procedure,
        Self::CsrStructure,
        Self::Statistical,
        Self::RegulatoryGuidance,
        Self::Ethics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boilerplate => "boilerplate",
            Self::Definition => "definition",
            Self::StudySection => "study_section",
            Self::DrugInfo => "drug_info",
            Self::Safety => "safety",
            Self::Procedure => "procedure",
            Self::CsrStructure => "csr_structure",
            Self::Statistical => "statistical",
            Self::RegulatoryGuidance => "regulatory_guidance",
            Self::Ethics => "ethics",
        }
    }

    /// Exact, case-sensitive match against the taxonomy names.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReusePotential {
    High,
    #[default]
    Medium,
    Low,
}

impl ReusePotential {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComponentLocation {
    pub page: Option<u32>,
    pub section: Option<String>,
}

impl ComponentLocation {
    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.section.is_none()
    }
}

/// A reusable span of clinical text identified by the classification oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub title: String,
    pub text: String,
    pub confidence: f64,
    pub reuse_potential: ReusePotential,
    pub rationale: String,
    #[serde(default, skip_serializing_if = "ComponentLocation::is_empty")]
    pub location: ComponentLocation,
}
