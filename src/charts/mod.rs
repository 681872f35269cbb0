pub mod histogram;
pub mod palette;
pub mod sankey;

pub use sankey::Sankey;
