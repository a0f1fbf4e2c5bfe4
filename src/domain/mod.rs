pub mod catalog;
pub mod contact;
pub mod filter;
pub mod property;

pub use catalog::Catalog;
pub use filter::{apply_filter, ListingQuery};
pub use property::Property;
