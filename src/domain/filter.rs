// src/domain/filter.rs

//! Listing filter: the search box plus the filter sheet, applied to the
//! catalog on every request.

use crate::domain::property::{Property, Township};
use thiserror::Error;
use url::form_urlencoded;

/// Bounds of the price slider, in whole Rand.
pub const PRICE_FLOOR: u32 = 1000;
pub const PRICE_CEILING: u32 = 10000;
pub const PRICE_STEP: u32 = 100;

pub const ALL_TOWNSHIPS: &str = "All Townships";
pub const ANY: &str = "Any";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("unknown township: {0}")]
    UnknownTownship(String),
    #[error("invalid room count: {0}")]
    InvalidRoomCount(String),
    #[error("invalid price: {0}")]
    InvalidPrice(String),
    #[error("minimum price {min} is above maximum price {max}")]
    InvertedPriceRange { min: u32, max: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TownshipFilter {
    #[default]
    All,
    Only(Township),
}

impl TownshipFilter {
    pub fn matches(&self, township: Township) -> bool {
        match self {
            TownshipFilter::All => true,
            TownshipFilter::Only(t) => *t == township,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TownshipFilter::All => ALL_TOWNSHIPS,
            TownshipFilter::Only(t) => t.as_str(),
        }
    }

    pub fn parse(value: &str) -> Result<Self, FilterError> {
        if value == ALL_TOWNSHIPS {
            return Ok(TownshipFilter::All);
        }
        value
            .parse::<Township>()
            .map(TownshipFilter::Only)
            .map_err(|_| FilterError::UnknownTownship(value.to_string()))
    }
}

/// Bedroom or bathroom filter. `Exactly(4)` matches four rooms and nothing
/// else, even though the dropdown labels it "4+".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomFilter {
    #[default]
    Any,
    Exactly(u8),
}

impl RoomFilter {
    pub fn matches(&self, count: u8) -> bool {
        match self {
            RoomFilter::Any => true,
            RoomFilter::Exactly(n) => *n == count,
        }
    }

    pub fn parse(value: &str) -> Result<Self, FilterError> {
        if value == ANY {
            return Ok(RoomFilter::Any);
        }
        value
            .parse::<u8>()
            .map(RoomFilter::Exactly)
            .map_err(|_| FilterError::InvalidRoomCount(value.to_string()))
    }

    pub fn as_param(&self) -> String {
        match self {
            RoomFilter::Any => ANY.to_string(),
            RoomFilter::Exactly(n) => n.to_string(),
        }
    }
}

/// Inclusive monthly rent range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: u32,
    max: u32,
}

impl PriceRange {
    pub const DEFAULT: PriceRange = PriceRange {
        min: PRICE_FLOOR,
        max: PRICE_CEILING,
    };

    pub fn new(min: u32, max: u32) -> Result<Self, FilterError> {
        if min > max {
            return Err(FilterError::InvertedPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, price: u32) -> bool {
        self.min <= price && price <= self.max
    }

    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The filter sheet's selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterState {
    pub township: TownshipFilter,
    pub price: PriceRange,
    pub bedrooms: RoomFilter,
    pub bathrooms: RoomFilter,
}

impl FilterState {
    pub fn matches(&self, property: &Property) -> bool {
        self.township.matches(property.township)
            && self.price.contains(property.price)
            && self.bedrooms.matches(property.bedrooms)
            && self.bathrooms.matches(property.bathrooms)
    }

    /// Number of filters moved off their default, for the badge on the
    /// filter button. Each filter counts once.
    pub fn active_count(&self) -> usize {
        [
            self.township != TownshipFilter::All,
            !self.price.is_default(),
            self.bedrooms != RoomFilter::Any,
            self.bathrooms != RoomFilter::Any,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    pub fn reset(&mut self) {
        *self = FilterState::default();
    }
}

/// Case-insensitive substring match against title, township and address.
pub fn matches_search(property: &Property, search: &str) -> bool {
    let needle = search.to_lowercase();
    [
        property.title.as_str(),
        property.township.as_str(),
        property.address.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Stable subsequence of `properties` that pass the search and every filter.
pub fn apply_filter<'a>(
    properties: &'a [Property],
    filters: &FilterState,
    search: &str,
) -> Vec<&'a Property> {
    properties
        .iter()
        .filter(|p| matches_search(p, search) && filters.matches(p))
        .collect()
}

/// Search text plus filters, as carried in the listings URL.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingQuery {
    pub search: String,
    pub filters: FilterState,
}

impl ListingQuery {
    /// Reads `q`, `township`, `min_price`, `max_price`, `bedrooms` and
    /// `bathrooms`. `q` is kept verbatim; the other keys are trimmed and keep
    /// their defaults when missing or empty. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut query = ListingQuery::default();
        let mut min = PRICE_FLOOR;
        let mut max = PRICE_CEILING;

        for (key, value) in pairs {
            // Search text is matched exactly as typed, surrounding spaces included.
            if key.as_ref() == "q" {
                query.search = value.as_ref().to_string();
                continue;
            }
            let value = value.as_ref().trim();
            if value.is_empty() {
                continue;
            }
            match key.as_ref() {
                "township" => query.filters.township = TownshipFilter::parse(value)?,
                "min_price" => min = parse_price(value)?,
                "max_price" => max = parse_price(value)?,
                "bedrooms" => query.filters.bedrooms = RoomFilter::parse(value)?,
                "bathrooms" => query.filters.bathrooms = RoomFilter::parse(value)?,
                _ => {}
            }
        }

        query.filters.price = PriceRange::new(min, max)?;
        Ok(query)
    }

    /// Inverse of [`ListingQuery::from_pairs`]; default values are omitted so
    /// the plain listings URL stays clean.
    pub fn to_query_string(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        if !self.search.is_empty() {
            ser.append_pair("q", &self.search);
        }
        if let TownshipFilter::Only(t) = self.filters.township {
            ser.append_pair("township", t.as_str());
        }
        if !self.filters.price.is_default() {
            ser.append_pair("min_price", &self.filters.price.min().to_string());
            ser.append_pair("max_price", &self.filters.price.max().to_string());
        }
        if self.filters.bedrooms != RoomFilter::Any {
            ser.append_pair("bedrooms", &self.filters.bedrooms.as_param());
        }
        if self.filters.bathrooms != RoomFilter::Any {
            ser.append_pair("bathrooms", &self.filters.bathrooms.as_param());
        }
        ser.finish()
    }

    /// Same search, filters back to defaults.
    pub fn cleared(&self) -> ListingQuery {
        let mut q = self.clone();
        q.filters.reset();
        q
    }

    pub fn listings_href(&self) -> String {
        let qs = self.to_query_string();
        if qs.is_empty() {
            "/listings".to_string()
        } else {
            format!("/listings?{qs}")
        }
    }
}

fn parse_price(value: &str) -> Result<u32, FilterError> {
    value
        .parse::<u32>()
        .map_err(|_| FilterError::InvalidPrice(value.to_string()))
}
