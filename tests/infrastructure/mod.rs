mod llm;
mod text_processing;
