//! Query parameters accepted by [`CatalogEngine::query`](crate::CatalogEngine::query).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest page size a caller may request.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Ordering applied to filtered listings before pagination.
///
/// Every order ends in the recommended chain so results are total and
/// deterministic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    /// Composite score descending, featured first, reviews descending, id
    /// ascending.
    #[default]
    #[serde(rename = "recommended", alias = "rating-desc")]
    Recommended,
    /// Cheapest first.
    #[serde(rename = "price-asc")]
    PriceAscending,
    /// Most expensive first.
    #[serde(rename = "price-desc")]
    PriceDescending,
    /// Most reviewed first.
    #[serde(rename = "reviews-desc")]
    ReviewsDescending,
}

impl SortOrder {
    /// Return the order as its query-string label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::PriceAscending => "price-asc",
            Self::PriceDescending => "price-desc",
            Self::ReviewsDescending => "reviews-desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown sort label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort order '{0}'")]
pub struct UnknownSortOrder(pub String);

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "recommended" | "rating-desc" => Ok(Self::Recommended),
            "price-asc" => Ok(Self::PriceAscending),
            "price-desc" => Ok(Self::PriceDescending),
            "reviews-desc" => Ok(Self::ReviewsDescending),
            _ => Err(UnknownSortOrder(s.to_owned())),
        }
    }
}

/// Flat filter, sort and paging parameters.
///
/// Absent filters do not restrict results. `page` and `limit` are clamped
/// rather than rejected.
///
/// # Examples
/// ```
/// use pupscore_catalog::{CatalogQuery, SortOrder};
///
/// let query = CatalogQuery::default()
///     .with_location("West Lake")
///     .with_price_range(Some(400), Some(1000))
///     .with_amenities(["pool", "gym"])
///     .with_sort(SortOrder::PriceAscending)
///     .with_page(2, 10);
/// assert_eq!(query.page, 2);
/// assert_eq!(query.amenities.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogQuery {
    /// Free-text search over names, locations and amenities.
    #[serde(rename = "q")]
    pub text: Option<String>,
    /// Location substring; `"All"` disables the filter.
    pub location: Option<String>,
    /// Inclusive lower price bound.
    pub min_price: Option<u32>,
    /// Inclusive upper price bound.
    pub max_price: Option<u32>,
    /// Amenity tags; a listing passes when it has any of them.
    pub amenities: Vec<String>,
    /// Inclusive lower bound on the composite score.
    pub min_rating: Option<f64>,
    /// Result ordering.
    #[serde(rename = "sortBy")]
    pub sort: SortOrder,
    /// One-based page number.
    pub page: u32,
    /// Page size.
    pub limit: u32,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            text: None,
            location: None,
            min_price: None,
            max_price: None,
            amenities: Vec::new(),
            min_rating: None,
            sort: SortOrder::default(),
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl CatalogQuery {
    /// Set the free-text search.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the location filter.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Set both price bounds.
    #[must_use]
    pub const fn with_price_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Set the amenity filter.
    #[must_use]
    pub fn with_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    /// Set the minimum composite score.
    #[must_use]
    pub const fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    /// Set the result ordering.
    #[must_use]
    pub const fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Set the page number and size.
    #[must_use]
    pub const fn with_page(mut self, page: u32, limit: u32) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }

    /// Page number after clamping to at least one.
    #[must_use]
    pub const fn effective_page(&self) -> u32 {
        if self.page < 1 { 1 } else { self.page }
    }

    /// Page size after clamping to `1..=MAX_PAGE_LIMIT`.
    #[must_use]
    pub const fn effective_limit(&self) -> u32 {
        if self.limit < 1 {
            1
        } else if self.limit > MAX_PAGE_LIMIT {
            MAX_PAGE_LIMIT
        } else {
            self.limit
        }
    }
}
