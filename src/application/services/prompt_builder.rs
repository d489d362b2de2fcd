use std::fmt::Write;

use crate::domain::ClassificationProfile;

pub const TEXT_SYSTEM_INSTRUCTION: &str = "You are an expert at identifying reusable components in clinical trial documentation. You always respond with valid JSON arrays only.";

pub const DOCUMENT_SYSTEM_INSTRUCTION: &str = "You are an expert at identifying reusable components in clinical trial documentation. You always respond with valid JSON arrays only. Include location information (page number and section) for each component.";

/// Which request shape a chunk is classified for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationMode {
    /// Raw text submitted directly; no page tracking.
    Text,
    /// Extracted upload; components carry page and section provenance.
    Document,
}

impl ClassificationMode {
    pub fn system_instruction(&self) -> &'static str {
        match self {
            Self::Text => TEXT_SYSTEM_INSTRUCTION,
            Self::Document => DOCUMENT_SYSTEM_INSTRUCTION,
        }
    }
}

/// Renders the few-shot task prompt for one chunk.
///
/// Everything up to the document is derived from the profile alone, so it is
/// rendered once and reused for every chunk.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    preamble: String,
}

impl PromptBuilder {
    pub fn new(profile: &ClassificationProfile) -> Self {
        let taxonomy_json = serde_json::to_string_pretty(&profile.taxonomy).unwrap_or_default();

        let mut examples = String::new();
        for (i, example) in profile.examples.iter().enumerate() {
            let _ = write!(
                examples,
                "\nEXAMPLE {}:\nText: \"{}\"\nClassification:\n- Type: {}\n- Title: {}\n- Confidence: {}\n- Reuse Potential: {}\n- Rationale: {}\n",
                i + 1,
                example.text,
                example.component_type,
                example.title,
                example.confidence,
                example.reuse_potential.as_str(),
                example.rationale,
            );
        }

        let preamble = format!(
            r#"You are an expert clinical documentation analyst specializing in identifying reusable content components in regulatory documents such as clinical trial protocols, statistical analysis plans, clinical study reports, and ICH guidelines.

TASK: Analyze the provided clinical document text and identify ALL distinct reusable components. The document contains [PAGE X] markers indicating page numbers.

COMPONENT TAXONOMY:
{taxonomy_json}

IDENTIFICATION RULES:
1. Components must be self-contained and semantically complete
2. Include ALL relevant context within component boundaries
3. Avoid overlapping components
4. Prefer larger, meaningful units over small fragments
5. Minimum component length: 50 characters
6. Each component should represent a single, coherent concept or section
7. Track the page number where each component is found (look for [PAGE X] markers)
8. Identify the section name/number if visible (e.g., "Section 5.1", "12.2 ADVERSE EVENTS")

{examples}

OUTPUT FORMAT:
Return a JSON array with this exact structure for each identified component:
[
  {{
    "type": "component_type",
    "title": "Descriptive title (5-10 words)",
    "text": "Exact extracted text from the document (copy verbatim)",
    "confidence": 0.95,
    "reuse_potential": "high|medium|low",
    "rationale": "Brief explanation of why this is a reusable component",
    "location": {{
      "page": 1,
      "section": "Section name or number if identifiable, otherwise null"
    }}
  }}
]

DOCUMENT TO ANALYZE:
"#
        );

        Self { preamble }
    }

    pub fn build(&self, document_text: &str) -> String {
        format!(
            "{}{}\n\nIdentify all reusable components and return ONLY the JSON array, no additional text.",
            self.preamble, document_text
        )
    }
}
