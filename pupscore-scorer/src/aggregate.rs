//! Weighted aggregation of normalised platform ratings into one composite
//! score.
//!
//! The aggregator re-normalises the weighted mean over the platforms that are
//! actually present, so a listing rated only on Ctrip is not dragged down by
//! missing Booking data. It implements
//! [`ListingScorer`](pupscore_core::ListingScorer) so the catalog engine can
//! rank with it directly.

#![forbid(unsafe_code)]

use pupscore_core::{Listing, ListingScorer, PlatformRating, PlatformRatings};
use serde::Serialize;

use crate::{ConfidencePolicy, ConfidenceTier, PlatformTable};

/// Data behind a listing's rating badge and platform bubbles.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSummary {
    /// Composite score on `0.0..=10.0`, rounded to one decimal.
    pub composite_score: f64,
    /// Number of platforms that contributed.
    pub available_platforms: usize,
    /// Reviews summed across contributing platforms.
    pub total_reviews: u64,
    /// Confidence bucket of the summed review count.
    pub confidence: ConfidenceTier,
    /// Per-platform normalised ratings in platform order.
    pub platform_scores: Vec<PlatformRating>,
}

/// Combine platform ratings using a [`PlatformTable`] and a
/// [`ConfidencePolicy`].
///
/// # Examples
/// ```
/// use pupscore_core::{Platform, PlatformRatings, RatingEntry};
/// use pupscore_scorer::WeightedAggregator;
///
/// let ratings = PlatformRatings::new()
///     .with_entry(Platform::Booking, RatingEntry::new(8.0, 500))
///     .with_entry(Platform::Ctrip, RatingEntry::new(4.5, 1_200));
/// // (8.0 * 1.0 + 9.0 * 1.1) / 2.1 = 8.52...
/// assert_eq!(WeightedAggregator::default().aggregate(&ratings), 8.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedAggregator {
    table: PlatformTable,
    policy: ConfidencePolicy,
}

impl WeightedAggregator {
    /// Build an aggregator over `table` applying `policy`.
    #[must_use]
    pub const fn new(table: PlatformTable, policy: ConfidencePolicy) -> Self {
        Self { table, policy }
    }

    /// Platform table in use.
    #[must_use]
    pub const fn table(&self) -> &PlatformTable {
        &self.table
    }

    /// Confidence policy in use.
    #[must_use]
    pub const fn policy(&self) -> ConfidencePolicy {
        self.policy
    }

    /// Normalise every rating whose platform is configured.
    ///
    /// Platforms missing from the table are skipped.
    #[must_use]
    pub fn normalized_ratings(&self, ratings: &PlatformRatings) -> Vec<PlatformRating> {
        ratings
            .iter()
            .filter_map(|(platform, entry)| {
                let normalized = self
                    .table
                    .normalize(platform, entry.value, entry.review_count);
                if normalized.is_none() {
                    log::debug!("skipping {platform} rating: platform not configured");
                }
                normalized
            })
            .collect()
    }

    /// Composite score of `ratings`, rounded to one decimal.
    ///
    /// Returns `0.0` when nothing contributes or every effective weight is
    /// zero.
    #[must_use]
    pub fn aggregate(&self, ratings: &PlatformRatings) -> f64 {
        self.weighted_mean(&self.normalized_ratings(ratings))
    }

    /// Composite score plus the per-platform breakdown.
    #[must_use]
    pub fn summarise(&self, ratings: &PlatformRatings) -> RatingSummary {
        let platform_scores = self.normalized_ratings(ratings);
        let total_reviews = platform_scores
            .iter()
            .map(|rating| u64::from(rating.review_count))
            .sum();
        RatingSummary {
            composite_score: self.weighted_mean(&platform_scores),
            available_platforms: platform_scores.len(),
            total_reviews,
            confidence: ConfidenceTier::from_review_count(total_reviews),
            platform_scores,
        }
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "composite scores are weighted means of normalised ratings"
    )]
    fn weighted_mean(&self, ratings: &[PlatformRating]) -> f64 {
        let (weighted_sum, total_weight) =
            ratings
                .iter()
                .fold((0.0_f64, 0.0_f64), |(sum, total), rating| {
                    let weight = self
                        .table
                        .get(rating.platform)
                        .map_or(0.0, |profile| {
                            self.policy
                                .effective_weight(profile.weight, rating.review_count)
                        });
                    (sum + rating.normalized_value * weight, total + weight)
                });
        if total_weight <= 0.0 {
            return 0.0;
        }
        round_to_tenth(weighted_sum / total_weight)
    }
}

impl ListingScorer for WeightedAggregator {
    fn score(&self, listing: &Listing) -> f64 {
        Self::sanitise(self.aggregate(&listing.ratings))
    }
}

/// Round half away from zero to one decimal place.
#[expect(
    clippy::float_arithmetic,
    reason = "rounding to one decimal scales by ten"
)]
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
