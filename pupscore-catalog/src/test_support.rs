//! Test-only catalogs for `pupscore-catalog`.
//!
//! The helpers in this module are available to unit tests and to downstream
//! crates enabling the `test-support` feature.

use pupscore_core::Listing;
use pupscore_core::test_support::FixedScorer;

/// Construct a listing carrying amenity tags.
#[must_use]
pub fn listing(id: &str, price: u32, amenities: &[&str]) -> Listing {
    Listing::new(id, price, "West Lake, Hangzhou")
        .with_name(format!("Listing {id}"))
        .with_amenities(amenities.iter().copied())
}

/// Three Hangzhou hotels priced 1200, 800 and 450 scoring 9.2, 8.7 and 8.3.
#[must_use]
pub fn west_lake_catalog() -> (Vec<Listing>, FixedScorer) {
    let listings = vec![
        listing("grand", 1200, &["pool", "spa"]),
        listing("garden", 800, &["gym"]),
        listing("lotus", 450, &["wifi"]),
    ];
    let scorer = FixedScorer::from_pairs([("grand", 9.2), ("garden", 8.7), ("lotus", 8.3)]);
    (listings, scorer)
}
