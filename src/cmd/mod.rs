pub mod generate;
pub mod header;
pub mod list;
pub mod validate;
