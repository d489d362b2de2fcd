use uuid::Uuid;

/// A contiguous slice of document text submitted to the oracle as one unit.
///
/// `page` is the first page contained in the chunk when the document carries
/// page markers, `offset` the character offset of the chunk in the document.
/// Both are bookkeeping only.
#[derive(Debug, Clone, PartialEq)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
    pub document_id: DocumentId,
    pub page: Option<u32>,
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunk {
    pub fn new(
        index: usize,
        text: String,
        document_id: DocumentId,
        page: Option<u32>,
        offset: usize,
    ) -> Self {
        Self {
            index,
            text,
            document_id,
            page,
            offset,
        }
    }

    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Result of planning a document into chunks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChunkPlan {
    pub chunks: Vec<Chunk>,
    /// Set when fixed character windows cut the text mid-content.
    pub split_mid_content: bool,
}

impl ChunkPlan {
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
