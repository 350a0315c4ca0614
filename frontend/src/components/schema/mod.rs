//! Lists produced by schema discovery: tables to pick from and the column
//! checklist. Both render whatever they are given in full on every update.

mod columns;
mod tables;

pub use columns::ColumnsList;
pub use tables::TablesList;
