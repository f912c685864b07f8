//! Rating normalisation and weighted aggregation for Pup Score listings.
//!
//! The crate provides two complementary capabilities:
//! - **Normalisation** maps each platform's native rating onto `0.0..=10.0`
//!   and flags ratings backed by fewer than [`LOW_CONFIDENCE_THRESHOLD`]
//!   reviews. Five-point platforms are doubled; out-of-range values are
//!   clamped rather than rejected.
//! - **Aggregation** combines every configured platform present on a listing
//!   into a composite score, weighting each platform by its entry in a
//!   [`PlatformTable`]. [`WeightedAggregator`] implements
//!   [`ListingScorer`](pupscore_core::ListingScorer) so callers can plug it
//!   into the catalog engine.
//! - **Statistics** summarise composite and per-platform scores across a
//!   catalog through [`WeightedAggregator::rating_statistics`].
//!
//! # Examples
//!
//! ```no_run
//! use camino::Utf8Path;
//! use pupscore_scorer::{ConfidencePolicy, PlatformTable, WeightedAggregator};
//!
//! let table = PlatformTable::from_json_file(Utf8Path::new("config/platforms.json"))
//!     .expect("load platform table");
//! let aggregator = WeightedAggregator::new(table, ConfidencePolicy::Inert);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod aggregate;
mod confidence;
mod error;
mod normalize;
mod stats;
mod types;

pub use aggregate::{RatingSummary, WeightedAggregator};
pub use confidence::{ConfidencePolicy, ConfidenceTier, UnknownPolicy};
pub use error::PlatformTableError;
pub use normalize::{
    LOW_CONFIDENCE_THRESHOLD, is_low_confidence, normalize_rating, normalize_value,
};
pub use stats::{RatingStatistics, ScoreStatistics};
pub use types::{PlatformProfile, PlatformTable};
