pub mod catalog;
pub mod form_type;
pub mod schema_model;
pub mod taxonomy;
