use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::application::ports::{TextSplitter, TextSplitterError};
use crate::domain::{Chunk, ChunkPlan, DocumentId};

use super::page_aggregator::PAGE_MARKER_PREFIX;

static PAGE_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\[PAGE (?P<page>\d+)\]").unwrap());

/// Splits documents into chunks of at most `max_chunk_chars` characters.
///
/// Page-tagged documents are cut only at page markers, so a page is never
/// split; a single page above the budget becomes its own oversized chunk.
/// Documents without markers are cut into fixed character windows.
pub struct ChunkPlanner {
    max_chunk_chars: usize,
}

struct PageBlock<'a> {
    text: &'a str,
    page: Option<u32>,
    chars: usize,
}

impl ChunkPlanner {
    pub fn new(max_chunk_chars: usize) -> Self {
        Self { max_chunk_chars }
    }

    pub fn max_chunk_chars(&self) -> usize {
        self.max_chunk_chars
    }

    pub fn plan(&self, text: &str, document_id: DocumentId) -> Result<ChunkPlan, TextSplitterError> {
        if self.max_chunk_chars == 0 {
            return Err(TextSplitterError::InvalidBudget);
        }

        if text.is_empty() {
            return Ok(ChunkPlan::default());
        }

        let blocks = page_blocks(text);
        let total_chars = text.chars().count();

        if total_chars <= self.max_chunk_chars {
            let page = blocks.first().and_then(|b| b.page);
            return Ok(ChunkPlan {
                chunks: vec![Chunk::new(0, text.to_string(), document_id, page, 0)],
                split_mid_content: false,
            });
        }

        let plan = if blocks.is_empty() {
            self.plan_character_windows(text, document_id)
        } else {
            self.plan_page_blocks(&blocks, document_id)
        };

        tracing::debug!(
            chunk_count = plan.len(),
            total_chars,
            max_chunk_chars = self.max_chunk_chars,
            page_aware = !blocks.is_empty(),
            "Document planned into chunks"
        );

        Ok(plan)
    }

    fn plan_page_blocks(&self, blocks: &[PageBlock<'_>], document_id: DocumentId) -> ChunkPlan {
        let mut chunks = Vec::new();
        let mut buffer = String::new();
        let mut buffer_chars = 0;
        let mut buffer_page = None;
        let mut buffer_offset = 0;
        let mut cursor = 0;

        for block in blocks {
            if !buffer.is_empty() && buffer_chars + block.chars > self.max_chunk_chars {
                let index = chunks.len();
                chunks.push(Chunk::new(
                    index,
                    std::mem::take(&mut buffer),
                    document_id,
                    buffer_page,
                    buffer_offset,
                ));
                buffer_chars = 0;
            }

            if buffer.is_empty() {
                buffer_page = block.page;
                buffer_offset = cursor;
            }

            buffer.push_str(block.text);
            buffer_chars += block.chars;
            cursor += block.chars;
        }

        if !buffer.is_empty() {
            let index = chunks.len();
            chunks.push(Chunk::new(
                index,
                buffer,
                document_id,
                buffer_page,
                buffer_offset,
            ));
        }

        ChunkPlan {
            chunks,
            split_mid_content: false,
        }
    }

    fn plan_character_windows(&self, text: &str, document_id: DocumentId) -> ChunkPlan {
        let chars: Vec<char> = text.chars().collect();
        let total_len = chars.len();
        let mut chunks = Vec::new();

        let mut offset = 0;
        while offset < total_len {
            let end = (offset + self.max_chunk_chars).min(total_len);
            let chunk_text: String = chars[offset..end].iter().collect();

            chunks.push(Chunk::new(chunks.len(), chunk_text, document_id, None, offset));

            offset = end;
        }

        let split_mid_content = chunks.len() > 1;
        ChunkPlan {
            chunks,
            split_mid_content,
        }
    }
}

#[async_trait]
impl TextSplitter for ChunkPlanner {
    async fn split(
        &self,
        text: &str,
        document_id: DocumentId,
    ) -> Result<ChunkPlan, TextSplitterError> {
        self.plan(text, document_id)
    }
}

/// Cuts a page-tagged document at every line-leading page marker. Text ahead
/// of the first marker stays with the first page; separators stay with the
/// page they follow. Returns nothing for documents without markers.
fn page_blocks(text: &str) -> Vec<PageBlock<'_>> {
    if !text.contains(PAGE_MARKER_PREFIX) {
        return Vec::new();
    }

    let markers: Vec<(usize, Option<u32>)> = PAGE_MARKER
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let page = caps.name("page").and_then(|p| p.as_str().parse().ok());
            Some((whole.start(), page))
        })
        .collect();

    if markers.is_empty() {
        return Vec::new();
    }

    let mut blocks = Vec::with_capacity(markers.len());
    for (i, &(_, page)) in markers.iter().enumerate() {
        let start = if i == 0 { 0 } else { markers[i].0 };
        let end = markers.get(i + 1).map_or(text.len(), |next| next.0);
        let slice = &text[start..end];
        blocks.push(PageBlock {
            text: slice,
            page,
            chars: slice.chars().count(),
        });
    }

    blocks
}
