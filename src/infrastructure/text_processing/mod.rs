mod chunk_planner;
mod composite_file_loader;
mod docx_adapter;
mod extractor_factory;
mod page_aggregator;
mod pdf_adapter;
mod plain_text_adapter;
mod text_normalizer;

pub use chunk_planner::ChunkPlanner;
pub use composite_file_loader::CompositeFileLoader;
pub use docx_adapter::DocxAdapter;
pub use extractor_factory::ExtractorFactory;
pub use page_aggregator::{PAGE_MARKER_PREFIX, aggregate_pages, page_marker};
pub use pdf_adapter::PdfAdapter;
pub use plain_text_adapter::PlainTextAdapter;
pub use text_normalizer::{normalize_page_text, normalize_pages};
