pub mod schema;
pub mod source;
