pub mod header;
pub mod reveal;
