/// One non-blank page of extracted text, numbered by its 1-based position in
/// the source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub page_number: u32,
    pub text: String,
}

impl Page {
    pub fn new(page_number: u32, text: String) -> Self {
        Self { page_number, text }
    }
}

/// Text produced by a file loader.
///
/// `page_count` is only known for formats that carry page boundaries, in
/// which case `text` is page-tagged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: Option<usize>,
}

impl ExtractedText {
    pub fn plain(text: String) -> Self {
        Self {
            text,
            page_count: None,
        }
    }

    pub fn paged(text: String, page_count: usize) -> Self {
        Self {
            text,
            page_count: Some(page_count),
        }
    }
}
