//! Catalog listings and their per-platform rating payloads.
//!
//! A [`Listing`] is read-only input to the engine. Derived values such as the
//! composite score and tier labels live on [`ScoredListing`] and are never
//! written back onto the listing.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Platform, PriceTier, RatingGrade, RatingScale, RatingTier};

/// Opaque, stable identifier of a listing.
///
/// Ordering is plain string ordering and serves as the final sort tie-break.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ListingId(String);

impl ListingId {
    /// Wrap a raw identifier.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// A platform's published rating and the number of reviews behind it.
///
/// `value` is on the platform's native scale.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct RatingEntry {
    /// Rating on the platform's native scale.
    pub value: f64,
    /// Number of reviews behind the rating.
    #[cfg_attr(feature = "serde", serde(default))]
    pub review_count: u32,
}

impl RatingEntry {
    /// Build an entry from a value and review count.
    #[must_use]
    pub const fn new(value: f64, review_count: u32) -> Self {
        Self {
            value,
            review_count,
        }
    }
}

/// Ratings keyed by platform.
///
/// A platform that has no data is simply absent; a present entry with a
/// zero review count is still present.
///
/// # Examples
/// ```
/// use pupscore_core::{Platform, PlatformRatings, RatingEntry};
///
/// let ratings = PlatformRatings::new()
///     .with_entry(Platform::Booking, RatingEntry::new(9.1, 1200))
///     .with_entry(Platform::Ctrip, RatingEntry::new(4.7, 0));
/// assert_eq!(ratings.len(), 2);
/// assert!(ratings.get(Platform::Agoda).is_none());
/// assert_eq!(ratings.total_reviews(), 1200);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlatformRatings {
    entries: BTreeMap<Platform, RatingEntry>,
}

impl PlatformRatings {
    /// Construct an empty rating map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `platform`.
    pub fn insert(&mut self, platform: Platform, entry: RatingEntry) {
        self.entries.insert(platform, entry);
    }

    /// Add an entry while returning `self` for chaining.
    #[must_use]
    pub fn with_entry(mut self, platform: Platform, entry: RatingEntry) -> Self {
        self.insert(platform, entry);
        self
    }

    /// Return the entry for a platform, if present.
    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<RatingEntry> {
        self.entries.get(&platform).copied()
    }

    /// Iterate over present entries in platform order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, RatingEntry)> + '_ {
        self.entries.iter().map(|(platform, entry)| (*platform, *entry))
    }

    /// Number of platforms present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether no platform is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of review counts across present platforms.
    #[must_use]
    pub fn total_reviews(&self) -> u64 {
        self.entries
            .values()
            .map(|entry| u64::from(entry.review_count))
            .sum()
    }
}

impl FromIterator<(Platform, RatingEntry)> for PlatformRatings {
    fn from_iter<I: IntoIterator<Item = (Platform, RatingEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// A hotel or attraction in the catalog.
///
/// # Examples
/// ```
/// use pupscore_core::{Listing, Platform, RatingEntry};
///
/// let listing = Listing::new("west-lake-inn", 680, "West Lake, Hangzhou")
///     .with_amenities(["pool", "wifi"])
///     .with_rating(Platform::Booking, RatingEntry::new(8.8, 340));
/// assert_eq!(listing.price, 680);
/// assert!(listing.amenities.contains("pool"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Listing {
    /// Stable identifier.
    pub id: ListingId,
    /// Display name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// Chinese display name, when available.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub name_zh: Option<String>,
    /// Nightly price in local currency.
    pub price: u32,
    /// Free-text location.
    #[cfg_attr(feature = "serde", serde(default))]
    pub location: String,
    /// Chinese location text, when available.
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub location_zh: Option<String>,
    /// Amenity tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub amenities: BTreeSet<String>,
    /// Editorially featured listings win score ties.
    #[cfg_attr(feature = "serde", serde(default))]
    pub featured: bool,
    /// Per-platform ratings.
    #[cfg_attr(feature = "serde", serde(default))]
    pub ratings: PlatformRatings,
}

impl Listing {
    /// Construct a listing with no amenities or ratings.
    pub fn new(id: impl Into<String>, price: u32, location: impl Into<String>) -> Self {
        Self {
            id: ListingId::new(id),
            name: String::new(),
            name_zh: None,
            price,
            location: location.into(),
            location_zh: None,
            amenities: BTreeSet::new(),
            featured: false,
            ratings: PlatformRatings::new(),
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the bilingual location text.
    #[must_use]
    pub fn with_location_zh(mut self, location_zh: impl Into<String>) -> Self {
        self.location_zh = Some(location_zh.into());
        self
    }

    /// Replace the amenity tags.
    #[must_use]
    pub fn with_amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the listing as featured.
    #[must_use]
    pub const fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    /// Add a platform rating.
    #[must_use]
    pub fn with_rating(mut self, platform: Platform, entry: RatingEntry) -> Self {
        self.ratings.insert(platform, entry);
        self
    }
}

/// A rating after conversion to the common 0–10 scale.
///
/// Transient: recomputed for every request from the listing snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlatformRating {
    /// Source platform.
    pub platform: Platform,
    /// Rating as published.
    pub raw_value: f64,
    /// Scale the raw value was read on.
    pub scale: RatingScale,
    /// Rating on `0.0..=10.0`.
    pub normalized_value: f64,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Set when the review count is too small to trust on its own.
    pub low_confidence: bool,
}

/// A listing paired with its composite score and display labels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ScoredListing {
    /// The untouched input listing.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub listing: Listing,
    /// Composite "Pup Score" on `0.0..=10.0`.
    pub composite_score: f64,
    /// Price bucket.
    pub price_tier: PriceTier,
    /// Rating badge bucket.
    pub rating_tier: RatingTier,
    /// Letter grade shown on the badge.
    pub rating_grade: RatingGrade,
}

impl ScoredListing {
    /// Attach a composite score and classify the listing on both tier axes.
    ///
    /// # Examples
    /// ```
    /// use pupscore_core::{Listing, PriceTier, RatingTier, ScoredListing};
    ///
    /// let scored = ScoredListing::new(Listing::new("a", 950, "Hangzhou"), 8.7);
    /// assert_eq!(scored.price_tier, PriceTier::Premium);
    /// assert_eq!(scored.rating_tier, RatingTier::Excellent);
    /// ```
    #[must_use]
    pub fn new(listing: Listing, composite_score: f64) -> Self {
        let price_tier = PriceTier::classify(listing.price);
        Self {
            listing,
            composite_score,
            price_tier,
            rating_tier: RatingTier::classify(composite_score),
            rating_grade: RatingGrade::classify(composite_score),
        }
    }

    /// Sum of review counts across the listing's platforms.
    #[must_use]
    pub fn total_reviews(&self) -> u64 {
        self.listing.ratings.total_reviews()
    }
}
