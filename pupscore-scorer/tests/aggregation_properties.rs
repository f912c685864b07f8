//! Property-based tests for normalisation and aggregation.
//!
//! # Invariants tested
//!
//! - **Scale conversion:** five-point ratings in range normalise to exactly
//!   twice their value.
//! - **Bounds:** composite scores stay within `0.0..=10.0` whatever the input.
//! - **Order independence:** insertion order of platform entries never
//!   changes the composite score.
//! - **Mean bounds:** the composite lies between the lowest and highest
//!   normalised rating, up to rounding.

use proptest::prelude::*;
use pupscore_core::{Platform, PlatformRatings, RatingEntry, RatingScale};
use pupscore_scorer::{ConfidencePolicy, PlatformTable, WeightedAggregator, normalize_value};

fn platform_strategy() -> impl Strategy<Value = Platform> {
    prop::sample::select(Platform::ALL.to_vec())
}

fn entries_strategy() -> impl Strategy<Value = Vec<(Platform, RatingEntry)>> {
    prop::collection::vec(
        (platform_strategy(), -5.0f64..15.0, 0u32..5_000)
            .prop_map(|(platform, value, reviews)| (platform, RatingEntry::new(value, reviews))),
        0..=Platform::ALL.len(),
    )
    .prop_map(|entries| {
        let mut seen = Vec::new();
        entries
            .into_iter()
            .filter(|(platform, _)| {
                if seen.contains(platform) {
                    false
                } else {
                    seen.push(*platform);
                    true
                }
            })
            .collect()
    })
}

fn policy_strategy() -> impl Strategy<Value = ConfidencePolicy> {
    prop_oneof![Just(ConfidencePolicy::Inert), Just(ConfidencePolicy::Tiered)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: a five-point rating in range normalises to twice its value.
    #[test]
    #[expect(clippy::float_arithmetic, reason = "the property is defined by doubling")]
    fn five_point_ratings_double(raw in 0.0f64..=5.0) {
        prop_assert_eq!(normalize_value(RatingScale::Five, raw), raw * 2.0);
    }

    /// Property: composite scores are always finite and within bounds.
    #[test]
    fn composite_scores_stay_in_bounds(
        entries in entries_strategy(),
        policy in policy_strategy(),
    ) {
        let aggregator = WeightedAggregator::new(PlatformTable::default(), policy);
        let ratings: PlatformRatings = entries.into_iter().collect();
        let score = aggregator.aggregate(&ratings);
        prop_assert!(score.is_finite());
        prop_assert!((0.0..=10.0).contains(&score));
    }

    /// Property: the order platforms were recorded in does not matter.
    #[test]
    fn aggregation_ignores_insertion_order(entries in entries_strategy()) {
        let aggregator = WeightedAggregator::default();
        let forward: PlatformRatings = entries.iter().copied().collect();
        let backward: PlatformRatings = entries.into_iter().rev().collect();
        prop_assert_eq!(aggregator.aggregate(&forward), aggregator.aggregate(&backward));
    }

    /// Property: the composite lies within the range of its inputs.
    #[test]
    #[expect(clippy::float_arithmetic, reason = "rounding tolerance is a float offset")]
    fn composite_lies_between_extremes(entries in entries_strategy()) {
        prop_assume!(!entries.is_empty());
        let aggregator = WeightedAggregator::default();
        let ratings: PlatformRatings = entries.into_iter().collect();
        let normalised = aggregator.normalized_ratings(&ratings);
        let low = normalised
            .iter()
            .map(|rating| rating.normalized_value)
            .fold(f64::INFINITY, f64::min);
        let high = normalised
            .iter()
            .map(|rating| rating.normalized_value)
            .fold(f64::NEG_INFINITY, f64::max);
        let score = aggregator.aggregate(&ratings);
        prop_assert!(score >= low - 0.05 && score <= high + 0.05);
    }
}
