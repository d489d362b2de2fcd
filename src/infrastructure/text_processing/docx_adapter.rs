use std::io::{Cursor, Read};

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use zip::ZipArchive;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document, ExtractedText};

const DOCUMENT_XML: &str = "word/document.xml";
const CELL_SEPARATOR: &str = " | ";

/// Extracts body paragraphs and flattened table rows from a DOCX package, in
/// document order. DOCX carries no reliable page boundaries, so the result is
/// plain text.
#[derive(Default)]
pub struct DocxAdapter;

#[derive(Default)]
struct BodyWalker {
    parts: Vec<String>,
    table_depth: usize,
    in_text_run: bool,
    paragraph: Option<String>,
    row: Option<Vec<String>>,
    cell: Option<String>,
}

impl DocxAdapter {
    pub fn new() -> Self {
        Self
    }

    pub fn extract_parts(data: &[u8]) -> Result<Vec<String>, FileLoaderError> {
        let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read DOCX as ZIP: {e}"))
        })?;

        let xml = {
            let mut entry = archive.by_name(DOCUMENT_XML).map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("missing {DOCUMENT_XML}: {e}"))
            })?;
            let mut content = String::new();
            entry.read_to_string(&mut content).map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("failed to read {DOCUMENT_XML}: {e}"))
            })?;
            content
        };

        walk_body(&xml)
    }
}

fn walk_body(xml: &str) -> Result<Vec<String>, FileLoaderError> {
    let mut reader = Reader::from_str(xml);
    let mut walker = BodyWalker::default();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => walker.open(e.name().as_ref()),
            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"w:tab" => walker.push_text("\t"),
                b"w:br" | b"w:cr" => walker.push_text("\n"),
                _ => {}
            },
            Ok(Event::Text(t)) if walker.in_text_run => {
                let text = t.unescape().map_err(|e| {
                    FileLoaderError::ExtractionFailed(format!("invalid text in DOCX: {e}"))
                })?;
                walker.push_text(&text);
            }
            Ok(Event::End(e)) => walker.close(e.name().as_ref()),
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(FileLoaderError::ExtractionFailed(format!(
                    "malformed {DOCUMENT_XML} at position {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(walker.parts)
}

impl BodyWalker {
    fn open(&mut self, name: &[u8]) {
        match name {
            b"w:tbl" => self.table_depth += 1,
            b"w:tr" if self.table_depth == 1 => self.row = Some(Vec::new()),
            b"w:tc" if self.table_depth == 1 => self.cell = Some(String::new()),
            b"w:p" if self.table_depth == 0 => self.paragraph = Some(String::new()),
            b"w:p" if self.table_depth == 1 => {
                if let Some(cell) = self.cell.as_mut().filter(|c| !c.is_empty()) {
                    cell.push('\n');
                }
            }
            b"w:t" => self.in_text_run = true,
            _ => {}
        }
    }

    fn close(&mut self, name: &[u8]) {
        match name {
            b"w:t" => self.in_text_run = false,
            b"w:p" if self.table_depth == 0 => {
                if let Some(paragraph) = self.paragraph.take() {
                    if !paragraph.trim().is_empty() {
                        self.parts.push(paragraph);
                    }
                }
            }
            b"w:tc" if self.table_depth == 1 => {
                if let (Some(cell), Some(row)) = (self.cell.take(), self.row.as_mut()) {
                    let cell = cell.trim();
                    if !cell.is_empty() {
                        row.push(cell.to_string());
                    }
                }
            }
            b"w:tr" if self.table_depth == 1 => {
                if let Some(row) = self.row.take() {
                    if !row.is_empty() {
                        self.parts.push(row.join(CELL_SEPARATOR));
                    }
                }
            }
            b"w:tbl" => self.table_depth = self.table_depth.saturating_sub(1),
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        // Nested tables only contribute through their outer cell's own paragraphs.
        match self.table_depth {
            0 => {
                if let Some(paragraph) = self.paragraph.as_mut() {
                    paragraph.push_str(text);
                }
            }
            1 => {
                if let Some(cell) = self.cell.as_mut() {
                    cell.push_str(text);
                }
            }
            _ => {}
        }
    }
}

#[async_trait]
impl FileLoader for DocxAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        if document.content_type != ContentType::Docx {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let parts = Self::extract_parts(data)?;
        tracing::info!(parts = parts.len(), "DOCX text extraction complete");

        if parts.is_empty() {
            return Err(FileLoaderError::NoTextFound(document.filename.clone()));
        }

        Ok(ExtractedText::plain(parts.join("\n\n")))
    }
}
