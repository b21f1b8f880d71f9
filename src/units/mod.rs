// Unit tables: canonical names and their factors relative to a category's base unit

pub mod category;
pub mod table;

pub use category::UnitCategory;
pub use table::{UnitEntry, UnitTable, LENGTH};
