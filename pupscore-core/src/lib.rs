//! Core domain types for the Pup Score engine.
//!
//! Listings arrive as read-only snapshots carrying per-platform ratings.
//! This crate defines those records, the tier tables used for grouping and
//! badge display, and the [`ListingScorer`] seam the catalog engine ranks
//! through. It performs no I/O.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod gate;
pub mod listing;
pub mod platform;
pub mod scorer;
pub mod tier;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use gate::{CounterStore, MemoryCounterStore, RateLimitError, RateLimitGate, utc_day};
pub use listing::{
    Listing, ListingId, PlatformRating, PlatformRatings, RatingEntry, ScoredListing,
};
pub use platform::{InvalidScale, Platform, RatingScale, UnknownPlatform};
pub use scorer::{ListingScorer, MAX_SCORE};
pub use tier::{PriceTier, RatingGrade, RatingTier, UnknownTier};
