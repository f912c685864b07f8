//! Catalog-wide rating statistics.
//!
//! Only listings with at least one configured platform contribute; an
//! unrated listing would otherwise drag every minimum to zero.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use pupscore_core::{Listing, Platform};
use serde::Serialize;

use crate::WeightedAggregator;
use crate::aggregate::round_to_tenth;

/// Minimum, maximum and mean of a set of scores on `0.0..=10.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreStatistics {
    /// Lowest score.
    pub min: f64,
    /// Highest score.
    pub max: f64,
    /// Arithmetic mean rounded to one decimal place.
    pub mean: f64,
}

impl ScoreStatistics {
    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "the mean divides a float sum by the sample size"
    )]
    fn from_scores(scores: &[f64]) -> Self {
        if scores.is_empty() {
            return Self::default();
        }
        let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
        let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let sum: f64 = scores.iter().sum();
        Self {
            min,
            max,
            mean: round_to_tenth(sum / scores.len() as f64),
        }
    }
}

/// Composite statistics plus one entry per platform seen in the catalog.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RatingStatistics {
    /// Statistics over composite scores.
    pub overall: ScoreStatistics,
    /// Statistics over normalised values, keyed by platform.
    pub platforms: BTreeMap<Platform, ScoreStatistics>,
}

impl WeightedAggregator {
    /// Summarise composite and per-platform scores across `listings`.
    ///
    /// # Examples
    /// ```
    /// use pupscore_core::{Listing, Platform, RatingEntry};
    /// use pupscore_scorer::WeightedAggregator;
    ///
    /// let listings = [
    ///     Listing::new("a", 500, "Hangzhou").with_rating(Platform::Ctrip, RatingEntry::new(4.5, 40)),
    ///     Listing::new("b", 300, "Hangzhou").with_rating(Platform::Ctrip, RatingEntry::new(4.0, 10)),
    ///     Listing::new("c", 200, "Hangzhou"),
    /// ];
    /// let stats = WeightedAggregator::default().rating_statistics(&listings);
    /// assert_eq!(stats.overall.max, 9.0);
    /// assert_eq!(stats.overall.min, 8.0);
    /// assert_eq!(stats.platforms.len(), 1);
    /// ```
    #[must_use]
    pub fn rating_statistics(&self, listings: &[Listing]) -> RatingStatistics {
        let mut composites = Vec::new();
        let mut per_platform: BTreeMap<Platform, Vec<f64>> = BTreeMap::new();
        for listing in listings {
            let summary = self.summarise(&listing.ratings);
            if summary.available_platforms == 0 {
                continue;
            }
            composites.push(summary.composite_score);
            for rating in summary.platform_scores {
                per_platform
                    .entry(rating.platform)
                    .or_default()
                    .push(rating.normalized_value);
            }
        }
        RatingStatistics {
            overall: ScoreStatistics::from_scores(&composites),
            platforms: per_platform
                .into_iter()
                .map(|(platform, scores)| (platform, ScoreStatistics::from_scores(&scores)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pupscore_core::RatingEntry;
    use rstest::rstest;

    use super::*;

    #[expect(clippy::float_arithmetic, reason = "tests compare floating point values")]
    fn approx_eq(left: f64, right: f64) -> bool {
        (left - right).abs() < 1e-9
    }

    #[rstest]
    fn empty_catalog_reports_zeroes() {
        let stats = WeightedAggregator::default().rating_statistics(&[]);
        assert_eq!(stats, RatingStatistics::default());
    }

    #[rstest]
    fn unrated_listings_are_skipped() {
        let listings = [
            Listing::new("rated", 400, "Hangzhou")
                .with_rating(Platform::Booking, RatingEntry::new(8.0, 90)),
            Listing::new("bare", 400, "Hangzhou"),
        ];
        let stats = WeightedAggregator::default().rating_statistics(&listings);
        assert!(approx_eq(stats.overall.min, 8.0));
        assert!(approx_eq(stats.overall.mean, 8.0));
    }

    #[rstest]
    fn platforms_use_normalised_values() {
        let listings = [
            Listing::new("a", 400, "Hangzhou")
                .with_rating(Platform::Fliggy, RatingEntry::new(4.0, 30))
                .with_rating(Platform::Booking, RatingEntry::new(9.0, 30)),
            Listing::new("b", 400, "Hangzhou")
                .with_rating(Platform::Fliggy, RatingEntry::new(5.0, 30)),
        ];
        let stats = WeightedAggregator::default().rating_statistics(&listings);
        let fliggy = stats.platforms.get(&Platform::Fliggy).copied().unwrap_or_default();
        assert!(approx_eq(fliggy.min, 8.0));
        assert!(approx_eq(fliggy.max, 10.0));
        assert!(approx_eq(fliggy.mean, 9.0));
        assert_eq!(stats.platforms.len(), 2);
        assert!(!stats.platforms.contains_key(&Platform::Agoda));
    }
}
