pub mod data_sources;
pub mod export;
pub mod schema;
pub mod source_selector;
pub mod status;
