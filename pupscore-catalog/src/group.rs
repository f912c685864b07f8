//! Price-tier buckets and price statistics.

use std::collections::BTreeMap;

use pupscore_core::{Listing, PriceTier};
use serde::Serialize;

/// Bucket listings by price tier.
///
/// All five tiers are present in the result, possibly empty. Input order is
/// kept within each bucket.
///
/// # Examples
/// ```
/// use pupscore_catalog::group_by_price_tier;
/// use pupscore_core::{Listing, PriceTier};
///
/// let groups = group_by_price_tier(&[
///     Listing::new("a", 1600, "Hangzhou"),
///     Listing::new("b", 120, "Hangzhou"),
/// ]);
/// assert_eq!(groups.len(), 5);
/// assert_eq!(groups.get(&PriceTier::Luxury).map(Vec::len), Some(1));
/// assert_eq!(groups.get(&PriceTier::Budget).map(Vec::len), Some(0));
/// ```
#[must_use]
pub fn group_by_price_tier(listings: &[Listing]) -> BTreeMap<PriceTier, Vec<Listing>> {
    let mut groups: BTreeMap<PriceTier, Vec<Listing>> = PriceTier::ALL
        .into_iter()
        .map(|tier| (tier, Vec::new()))
        .collect();
    for listing in listings {
        groups
            .entry(PriceTier::classify(listing.price))
            .or_default()
            .push(listing.clone());
    }
    groups
}

/// Summary of listing prices.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PriceStatistics {
    /// Cheapest price.
    pub min: u32,
    /// Most expensive price.
    pub max: u32,
    /// Arithmetic mean price.
    pub mean: f64,
    /// Upper-middle element of the sorted prices.
    pub median: u32,
}

/// Compute price statistics; all fields are zero for empty input.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    clippy::integer_division,
    reason = "the mean divides a price sum by a listing count; the median index is half the length rounded down"
)]
pub fn price_statistics(listings: &[Listing]) -> PriceStatistics {
    let mut prices: Vec<u32> = listings.iter().map(|listing| listing.price).collect();
    prices.sort_unstable();
    let (Some(&min), Some(&max)) = (prices.first(), prices.last()) else {
        return PriceStatistics::default();
    };
    let sum: u64 = prices.iter().copied().map(u64::from).sum();
    let median = prices.get(prices.len() / 2).copied().unwrap_or(max);
    PriceStatistics {
        min,
        max,
        mean: sum as f64 / prices.len() as f64,
        median,
    }
}
