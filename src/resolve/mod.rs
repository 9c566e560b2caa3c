pub mod field_resolver;
pub mod pipeline;
