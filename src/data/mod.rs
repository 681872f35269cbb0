pub mod store;
pub mod table;

pub use store::ApartmentStore;
pub use table::Table;
