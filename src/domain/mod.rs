pub mod listings;
pub mod property;

pub use listings::{ListingSource, ListingsError, MockListings};
pub use property::{PropertyRecord, PropertyType, PropertyTypeFilter};
