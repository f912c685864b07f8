//! Facade crate for the Pup Score rating engine.
//!
//! This crate re-exports the core domain types and exposes the weighted
//! scorer and catalog query engine behind feature flags.

#![forbid(unsafe_code)]

pub use pupscore_core::{
    CounterStore, InvalidScale, Listing, ListingId, ListingScorer, MAX_SCORE, MemoryCounterStore,
    Platform, PlatformRating, PlatformRatings, PriceTier, RateLimitError, RateLimitGate,
    RatingEntry, RatingGrade, RatingScale, RatingTier, ScoredListing, UnknownPlatform,
    UnknownTier, utc_day,
};

#[cfg(feature = "scorer")]
pub use pupscore_scorer::{
    ConfidencePolicy, ConfidenceTier, PlatformProfile, PlatformTable, PlatformTableError,
    RatingStatistics, RatingSummary, ScoreStatistics, WeightedAggregator,
};

#[cfg(feature = "catalog")]
pub use pupscore_catalog::{
    CatalogEngine, CatalogQuery, PriceStatistics, QueryPage, SortOrder, group_by_price_tier,
    price_statistics,
};
