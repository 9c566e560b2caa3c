pub mod extract_model;
pub mod extractor;
pub mod http;
