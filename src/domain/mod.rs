pub mod apartment;
pub mod entry;
pub mod filter;
