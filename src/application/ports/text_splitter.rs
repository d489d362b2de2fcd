use async_trait::async_trait;

use crate::domain::{ChunkPlan, DocumentId};

#[async_trait]
pub trait TextSplitter: Send + Sync {
    async fn split(
        &self,
        text: &str,
        document_id: DocumentId,
    ) -> Result<ChunkPlan, TextSplitterError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextSplitterError {
    #[error("chunk budget must be greater than zero")]
    InvalidBudget,
}
