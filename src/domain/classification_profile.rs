use serde::{Deserialize, Serialize};

use super::component::{ComponentType, ReusePotential};

/// One category of the component taxonomy as presented to the oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxonomyEntry {
    pub name: ComponentType,
    pub description: String,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub component_types: Vec<TaxonomyEntry>,
}

/// A labelled worked example embedded in every classification prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FewShotExample {
    pub text: String,
    #[serde(rename = "type")]
    pub component_type: ComponentType,
    pub title: String,
    pub confidence: f64,
    pub reuse_potential: ReusePotential,
    pub rationale: String,
}

/// Taxonomy, worked examples and fallback category used to classify chunks.
///
/// Built once at startup and shared read-only; tests construct reduced
/// profiles to exercise coercion against alternate taxonomies.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationProfile {
    pub taxonomy: Taxonomy,
    pub examples: Vec<FewShotExample>,
    pub fallback_type: ComponentType,
}

impl ClassificationProfile {
    pub fn new(
        taxonomy: Taxonomy,
        examples: Vec<FewShotExample>,
        fallback_type: ComponentType,
    ) -> Self {
        Self {
            taxonomy,
            examples,
            fallback_type,
        }
    }

    /// The clinical protocol / ICH E3 taxonomy with its seventeen worked examples.
    pub fn clinical_default() -> Self {
        let component_types = TAXONOMY_SEEDS
            .iter()
            .map(|seed| TaxonomyEntry {
                name: seed.component_type,
                description: seed.description.to_string(),
                examples: seed.examples.iter().map(|e| e.to_string()).collect(),
            })
            .collect();

        let examples = EXAMPLE_SEEDS
            .iter()
            .map(|seed| FewShotExample {
                text: seed.text.to_string(),
                component_type: seed.component_type,
                title: seed.title.to_string(),
                confidence: seed.confidence,
                reuse_potential: seed.reuse_potential,
                rationale: seed.rationale.to_string(),
            })
            .collect();

        Self::new(
            Taxonomy { component_types },
            examples,
            ComponentType::StudySection,
        )
    }

    pub fn accepts(&self, component_type: ComponentType) -> bool {
        self.taxonomy
            .component_types
            .iter()
            .any(|entry| entry.name == component_type)
    }

    /// Maps a raw category name onto the active taxonomy, falling back when
    /// the name is missing, unknown, or not part of this profile.
    pub fn resolve_type(&self, raw: Option<&str>) -> ComponentType {
        raw.and_then(ComponentType::parse)
            .filter(|t| self.accepts(*t))
            .unwrap_or(self.fallback_type)
    }
}

impl Default for ClassificationProfile {
    fn default() -> Self {
        Self::clinical_default()
    }
}

struct TaxonomySeed {
    component_type: ComponentType,
    description: &'static str,
    examples: &'static [&'static str],
}

struct ExampleSeed {
    text: &'static str,
    component_type: ComponentType,
    title: &'static str,
    confidence: f64,
    reuse_potential: ReusePotential,
    rationale: &'static str,
}

const TAXONOMY_SEEDS: &[TaxonomySeed] = &[
    TaxonomySeed {
        component_type: ComponentType::Boilerplate,
        description: "Standard regulatory, administrative, or compliance text that appears across multiple documents",
        examples: &[
            "GCP statements",
            "confidentiality clauses",
            "regulatory compliance declarations",
            "ethics statements",
            "Declaration of Helsinki references",
        ],
    },
    TaxonomySeed {
        component_type: ComponentType::Definition,
        description: "Precise definitions of terms, endpoints, events, or medical/scientific concepts",
        examples: &[
            "Primary endpoint definition",
            "AE definitions",
            "SAE definitions",
            "terminology explanations",
            "inclusion criteria definitions",
        ],
    },
    TaxonomySeed {
        component_type: ComponentType::StudySection,
        description: "Study-specific methodology, procedures, or structural sections",
        examples: &[
            "Inclusion/exclusion criteria",
            "Study objectives",
            "Statistical methods",
            "Study design overview",
            "Patient disposition",
        ],
    },
    TaxonomySeed {
        component_type: ComponentType::DrugInfo,
        description: "Information about investigational product, mechanism, pharmacology",
        examples: &[
            "Mechanism of action",
            "Dosing details",
            "Pharmacokinetics",
            "Drug formulation",
            "Product identity",
        ],
    },
    TaxonomySeed {
        component_type: ComponentType::Safety,
        description: "Safety monitoring, adverse event reporting, or risk-related procedures",
        examples: &[
            "AE reporting procedures",
            "Safety assessments",
            "Dose modification for toxicity",
            "Risk mitigation",
            "Deaths and SAEs",
        ],
    },
    TaxonomySeed {
        component_type: ComponentType::Procedure,
        description: "Clinical or laboratory procedures, sample collection, assessments",
        examples: &[
            "Blood sampling procedures",
            "Visit schedules",
            "Laboratory assessments",
            "Physical examination procedures",
        ],
    },
    TaxonomySeed {
        component_type: ComponentType::CsrStructure,
        description: "Clinical Study Report structural elements, section headers, and organizational guidance from ICH E3",
        examples: &[
            "Title page requirements",
            "Synopsis format",
            "Table of contents structure",
            "Appendix listings",
            "Section numbering guidance",
        ],
    },
    TaxonomySeed {
        component_type: ComponentType::Statistical,
        description: "Statistical methodology, analysis plans, sample size calculations, and data handling",
        examples: &[
            "Sample size determination",
            "Statistical analysis plans",
            "Handling of missing data",
            "Interim analyses",
            "Multiplicity adjustments",
        ],
    },
    TaxonomySeed {
        component_type: ComponentType::RegulatoryGuidance,
        description: "ICH guidelines, regulatory requirements, submission formats, and compliance instructions",
        examples: &[
            "ICH E3 requirements",
            "Regional regulatory requirements",
            "Submission format guidance",
            "Data listing requirements",
        ],
    },
    TaxonomySeed {
        component_type: ComponentType::Ethics,
        description: "Ethics committee requirements, informed consent procedures, patient rights",
        examples: &[
            "IRB/IEC approval requirements",
            "Informed consent procedures",
            "Patient confidentiality",
            "Ethical conduct statements",
        ],
    },
];

const EXAMPLE_SEEDS: &[ExampleSeed] = &[
    ExampleSeed {
        text: "This clinical investigation will be conducted according to this clinical protocol and in compliance with Good Clinical Practice (GCP), with the Declaration of Helsinki (Version 2008), and with other applicable regulatory requirements.",
        component_type: ComponentType::Boilerplate,
        title: "GCP and Regulatory Compliance Statement",
        confidence: 0.98,
        reuse_potential: ReusePotential::High,
        rationale: "Standard regulatory compliance language that appears in virtually all clinical trial protocols worldwide. References GCP, Declaration of Helsinki, and regulatory requirements.",
    },
    ExampleSeed {
        text: "Overall survival is defined as the time from randomization to death from any cause. Subjects who have not died will be censored at the date last known alive.",
        component_type: ComponentType::Definition,
        title: "Overall Survival (OS) Endpoint Definition",
        confidence: 0.97,
        reuse_potential: ReusePotential::High,
        rationale: "Precise scientific definition of a primary endpoint with clear measurement criteria and censoring rules. Standard oncology endpoint definition.",
    },
    ExampleSeed {
        text: "Subject Inclusion Criteria: 1. Subject has provided signed written informed consent. 2. Subject is ≥18 years of age. 3. Subject has histologically confirmed diagnosis of advanced solid tumor that has recurred or progressed following standard therapy, or subject has refused standard therapy; and subject may benefit from treatment with a PARP inhibitor. 4. Subject has adequate organ function: a. Absolute neutrophil count ≥1500/µL b. Platelets ≥150,000/µL c. Hemoglobin ≥9 g/dL",
        component_type: ComponentType::StudySection,
        title: "Subject Inclusion Criteria",
        confidence: 0.96,
        reuse_potential: ReusePotential::Medium,
        rationale: "Study-specific eligibility criteria section with numbered list of requirements. Contains both standard elements (age, consent) and study-specific requirements (PARP inhibitor candidacy).",
    },
    ExampleSeed {
        text: "Niraparib is an orally active poly (adenosine diphosphate [ADP]-ribose) polymerase (PARP)-1 and -2 inhibitor with nanomolar potency that is being developed for tumors with defects in the homologous recombination (HR) deoxyribonucleic acid (DNA) repair pathway or that are driven by PARP-mediated transcription factors.",
        component_type: ComponentType::DrugInfo,
        title: "Niraparib Mechanism of Action",
        confidence: 0.97,
        reuse_potential: ReusePotential::High,
        rationale: "Drug mechanism description explaining the pharmacological action of the investigational product. Describes molecular targets (PARP-1/2) and therapeutic rationale.",
    },
    ExampleSeed {
        text: "Dose interruption and/or reduction may be implemented at any time for any grade toxicity considered intolerable by the subject. Treatment must be interrupted for any nonhematologic NCI-CTCAE Grade 3 or 4 AE that the Investigator considers to be related to administration of niraparib. If toxicity is appropriately resolved to baseline or CTCAE Grade 1 or less within 28 days of dose interruption, at the Investigator's discretion the subject may restart treatment with niraparib.",
        component_type: ComponentType::Safety,
        title: "Dose Modification for Toxicity Management",
        confidence: 0.95,
        reuse_potential: ReusePotential::Medium,
        rationale: "Safety-related dose modification guidance using standard CTCAE grading. Provides clear criteria for dose interruption and resumption based on toxicity resolution.",
    },
    ExampleSeed {
        text: "Blood samples for PK analysis will be collected at the following times: predose (0 hour, within 30 min prior to dose), Day 1 (1, 1.5, 2, 3, 4, 6, and 12 hours postdose), Day 2 (24 hours postdose), Day 3 (48 hours postdose), Day 4 (72 hours postdose), Day 5 (96 hours postdose).",
        component_type: ComponentType::Procedure,
        title: "Pharmacokinetic Blood Sampling Schedule",
        confidence: 0.96,
        reuse_potential: ReusePotential::Medium,
        rationale: "Detailed procedural timeline for sample collection with specific timepoints. Standard PK sampling procedure that could be adapted for similar studies.",
    },
    ExampleSeed {
        text: "An adverse event (AE) is any untoward medical occurrence in a patient or clinical investigation subject administered a pharmaceutical product that does not necessarily have a causal relationship with this treatment. An AE can therefore be any unfavorable and unintended sign, symptom, or disease temporally associated with the use of a medicinal product.",
        component_type: ComponentType::Definition,
        title: "Adverse Event (AE) Definition",
        confidence: 0.98,
        reuse_potential: ReusePotential::High,
        rationale: "Standard regulatory definition of adverse events from ICH guidelines. Highly reusable boilerplate definition used across all clinical trials.",
    },
    ExampleSeed {
        text: "To determine the absolute bioavailability of niraparib by using an intravenous (IV) niraparib microdose of 100 μg (containing approximately 1 μCi of [14C]-niraparib) in subjects with cancer.",
        component_type: ComponentType::StudySection,
        title: "Primary Study Objective",
        confidence: 0.95,
        reuse_potential: ReusePotential::Low,
        rationale: "Study-specific primary objective statement. While the format is reusable, the specific objective is unique to this bioavailability study.",
    },
    ExampleSeed {
        text: "The title page should contain the following information: study title, name of test drug/investigational product, indication studied, if not apparent from the title, a brief (1 to 2 sentences) description giving design (parallel, cross-over, blinding, randomised) comparison (placebo, active, dose/response), duration, dose, and patient population, name of the sponsor, protocol identification (code or number), development phase of study.",
        component_type: ComponentType::CsrStructure,
        title: "CSR Title Page Requirements",
        confidence: 0.96,
        reuse_potential: ReusePotential::High,
        rationale: "ICH E3 mandated structure for Clinical Study Report title page. Standard regulatory requirement applicable to all clinical study reports submitted to regulatory authorities.",
    },
    ExampleSeed {
        text: "A brief synopsis (usually limited to 3 pages) that summarises the study should be provided. The synopsis should include numerical data to illustrate results, not just text or p-values.",
        component_type: ComponentType::CsrStructure,
        title: "CSR Synopsis Requirements",
        confidence: 0.97,
        reuse_potential: ReusePotential::High,
        rationale: "ICH E3 guidance on synopsis format and content requirements. Reusable structural guidance for all clinical study reports.",
    },
    ExampleSeed {
        text: "It should be confirmed that the study was conducted in accordance with the ethical principles that have their origins in the Declaration of Helsinki.",
        component_type: ComponentType::Ethics,
        title: "Declaration of Helsinki Compliance Statement",
        confidence: 0.98,
        reuse_potential: ReusePotential::High,
        rationale: "Standard ethics compliance boilerplate required in all clinical study reports. References fundamental ethical principles for human research.",
    },
    ExampleSeed {
        text: "How and when informed consent was obtained in relation to patient enrolment, (e.g., at allocation, pre-screening) should be described. Representative written information for the patient (if any) and a sample patient consent form should be provided in appendix 16.1.3.",
        component_type: ComponentType::Ethics,
        title: "Informed Consent Documentation Requirements",
        confidence: 0.95,
        reuse_potential: ReusePotential::High,
        rationale: "ICH E3 requirement for documenting informed consent procedures. Standard requirement for all CSRs.",
    },
    ExampleSeed {
        text: "A serious adverse event (experience) or reaction is any untoward medical occurrence that at any dose: results in death, is life-threatening, requires inpatient hospitalisation or prolongation of existing hospitalisation, results in persistent or significant disability/incapacity, or is a congenital anomaly/birth defect.",
        component_type: ComponentType::Definition,
        title: "Serious Adverse Event (SAE) Definition",
        confidence: 0.98,
        reuse_potential: ReusePotential::High,
        rationale: "ICH-harmonized definition of serious adverse events. Standard regulatory definition used globally in all clinical trials and CSRs.",
    },
    ExampleSeed {
        text: "The planned sample size and the basis for it, such as statistical considerations or practical limitations, should be provided. Methods for sample size calculation should be given together with their derivations or source of reference. Estimates used in the calculations should be given and explanations provided as to how they were obtained.",
        component_type: ComponentType::Statistical,
        title: "Sample Size Determination Requirements",
        confidence: 0.96,
        reuse_potential: ReusePotential::High,
        rationale: "ICH E3 requirement for documenting sample size calculations. Standard statistical documentation requirement for CSRs.",
    },
    ExampleSeed {
        text: "There should be a clear accounting of all patients who entered the study, using figures or tables in the text of the report. The numbers of patients who were randomised, and who entered and completed each phase of the study, (or each week/month of the study) should be provided, as well as the reasons for all post-randomisation discontinuations, grouped by treatment and by major reason.",
        component_type: ComponentType::StudySection,
        title: "Patient Disposition Requirements",
        confidence: 0.95,
        reuse_potential: ReusePotential::High,
        rationale: "ICH E3 guidance on patient disposition reporting. Standard requirement for documenting patient flow in clinical study reports.",
    },
    ExampleSeed {
        text: "The extent of exposure to test drugs/investigational products (and to active control and placebo) should be characterised according to the number of patients exposed, the duration of exposure, and the dose to which they were exposed.",
        component_type: ComponentType::Safety,
        title: "Extent of Exposure Requirements",
        confidence: 0.95,
        reuse_potential: ReusePotential::High,
        rationale: "ICH E3 requirement for safety evaluation. Standard approach to documenting drug exposure in clinical study reports.",
    },
    ExampleSeed {
        text: "Depending on the regulatory authority's review policy, abbreviated reports using summarised data or with some sections deleted, may be acceptable for uncontrolled studies or other studies not designed to establish efficacy.",
        component_type: ComponentType::RegulatoryGuidance,
        title: "Abbreviated Report Guidance",
        confidence: 0.94,
        reuse_potential: ReusePotential::High,
        rationale: "ICH E3 guidance on when abbreviated CSR formats may be acceptable. Regulatory flexibility guidance for different study types.",
    },
];
