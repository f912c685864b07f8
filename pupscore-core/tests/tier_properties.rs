//! Property-based tests for the tier tables.
//!
//! # Invariants tested
//!
//! - **Totality:** every price and every score maps to exactly one label.
//! - **Monotonicity:** a higher price never lands in a cheaper tier and a
//!   higher score never earns a worse badge or grade.

use proptest::prelude::*;
use pupscore_core::{PriceTier, RatingGrade, RatingTier};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Property: exactly one price tier contains any price.
    #[test]
    fn price_tiers_partition_prices(price in any::<u32>()) {
        let tier = PriceTier::classify(price);
        let containing = PriceTier::ALL
            .into_iter()
            .filter(|candidate| price >= candidate.lower_bound())
            .min_by_key(|candidate| price - candidate.lower_bound());
        prop_assert_eq!(containing, Some(tier));
    }

    /// Property: raising the price never lowers the tier.
    ///
    /// `PriceTier` orders from most to least expensive, so a higher price must
    /// compare less than or equal.
    #[test]
    fn price_tier_is_monotonic(low in any::<u32>(), bump in 0u32..5_000) {
        let high = low.saturating_add(bump);
        prop_assert!(PriceTier::classify(high) <= PriceTier::classify(low));
    }

    /// Property: raising the score never worsens the badge or the grade.
    #[test]
    fn rating_labels_are_monotonic(low in 0.0f64..=10.0, bump in 0.0f64..=10.0) {
        let high = (low + bump).min(10.0);
        prop_assert!(RatingTier::classify(high) <= RatingTier::classify(low));
        prop_assert!(RatingGrade::classify(high) <= RatingGrade::classify(low));
    }

    /// Property: classification never panics on arbitrary floats.
    #[test]
    fn rating_labels_are_total(score in any::<f64>()) {
        let tier = RatingTier::classify(score);
        let grade = RatingGrade::classify(score);
        prop_assert!(RatingTier::ALL.contains(&tier));
        prop_assert!(!grade.as_str().is_empty());
    }
}
