mod chunk;
mod classification_profile;
mod component;
mod document;
mod page;

pub use chunk::{Chunk, ChunkPlan, DocumentId};
pub use classification_profile::{ClassificationProfile, FewShotExample, Taxonomy, TaxonomyEntry};
pub use component::{Component, ComponentLocation, ComponentType, ReusePotential};
pub use document::{ContentType, Document};
pub use page::{ExtractedText, Page};
