// src/domain/listings.rs

use crate::domain::property::{format_currency, PropertyRecord, PropertyType, PropertyTypeFilter};
use thiserror::Error;

const MOCK_LISTING_COUNT: i64 = 5;
const MOCK_BASE_PRICE: i64 = 500_000;
const MOCK_PRICE_STEP: i64 = 50_000;

#[derive(Debug, Error)]
pub enum ListingsError {
    #[error("Listing source unavailable: {0}")]
    Unavailable(String),
}

/// Anything that can produce the listings for a suburb.
/// Implementations must honour the filter: with anything but `All`,
/// every returned record has the requested type.
pub trait ListingSource {
    fn fetch_properties(
        &self,
        suburb: &str,
        filter: PropertyTypeFilter,
    ) -> Result<Vec<PropertyRecord>, ListingsError>;
}

/// Development listing source. Synthesizes the same five records for any suburb,
/// alternating unit/house, with prices climbing from $550,000 in $50,000 steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockListings;

impl ListingSource for MockListings {
    fn fetch_properties(
        &self,
        suburb: &str,
        filter: PropertyTypeFilter,
    ) -> Result<Vec<PropertyRecord>, ListingsError> {
        Ok(mock_properties(suburb, filter))
    }
}

pub fn mock_properties(suburb: &str, filter: PropertyTypeFilter) -> Vec<PropertyRecord> {
    (1..=MOCK_LISTING_COUNT)
        .map(|i| mock_record(suburb, i))
        .filter(|record| filter.matches(record.property_type))
        .collect()
}

fn mock_record(suburb: &str, i: i64) -> PropertyRecord {
    let property_type = if i % 2 == 0 {
        PropertyType::House
    } else {
        PropertyType::Unit
    };
    let odd = (i % 2) as u32;

    PropertyRecord {
        address: format!("{i} Smith Street, {suburb}"),
        price: format_currency(MOCK_BASE_PRICE + i * MOCK_PRICE_STEP),
        property_type,
        bedrooms: 3 + odd,
        bathrooms: 2,
        parking: 1 + odd,
        description: format!("Beautiful {property_type} in {suburb}"),
    }
}
