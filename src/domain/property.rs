// src/domain/property.rs

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The kind of dwelling a listing describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    House,
    Unit,
}

impl PropertyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Unit => "unit",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The property-type filter a visitor can pick: everything, or a single type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PropertyTypeFilter {
    #[default]
    All,
    Unit,
    House,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid property type: {0}")]
pub struct InvalidPropertyType(pub String);

impl PropertyTypeFilter {
    pub const VALID_OPTIONS: [&'static str; 3] = ["all", "unit", "house"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyTypeFilter::All => "all",
            PropertyTypeFilter::Unit => "unit",
            PropertyTypeFilter::House => "house",
        }
    }

    /// Web-form parsing: anything unrecognised (or missing) becomes `All`.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.parse().ok()).unwrap_or_default()
    }

    /// The single type this filter narrows to, `None` for `All`.
    pub fn property_type(&self) -> Option<PropertyType> {
        match self {
            PropertyTypeFilter::All => None,
            PropertyTypeFilter::Unit => Some(PropertyType::Unit),
            PropertyTypeFilter::House => Some(PropertyType::House),
        }
    }

    pub fn matches(&self, property_type: PropertyType) -> bool {
        self.property_type()
            .map(|wanted| wanted == property_type)
            .unwrap_or(true)
    }
}

impl FromStr for PropertyTypeFilter {
    type Err = InvalidPropertyType;

    // Exact match only; "House" or " unit" are rejected like any other value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(PropertyTypeFilter::All),
            "unit" => Ok(PropertyTypeFilter::Unit),
            "house" => Ok(PropertyTypeFilter::House),
            other => Err(InvalidPropertyType(other.to_string())),
        }
    }
}

impl fmt::Display for PropertyTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single listing as shown on the page. Built fresh per request.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyRecord {
    pub address: String,
    /// Already formatted for display, e.g. `$550,000`.
    pub price: String,
    pub property_type: PropertyType,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub parking: u32,
    pub description: String,
}

/// Formats whole dollars with thousands separators: `550000` -> `$550,000`.
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}
