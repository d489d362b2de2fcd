use crate::domain::Page;

/// Literal every page marker starts with; chunk planning and the prompt rely on it.
pub const PAGE_MARKER_PREFIX: &str = "[PAGE ";

pub fn page_marker(page_number: u32) -> String {
    format!("{PAGE_MARKER_PREFIX}{page_number}]")
}

/// Joins pages into one document, each page preceded by its `[PAGE n]` marker
/// line and separated from the next by a blank line.
pub fn aggregate_pages(pages: &[Page]) -> String {
    pages
        .iter()
        .map(|page| format!("{}\n{}", page_marker(page.page_number), page.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}
