mod chunk_test;
mod component_test;
mod document_test;
