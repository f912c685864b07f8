//! Total orderings over scored listings.

use std::cmp::Ordering;

use pupscore_core::ScoredListing;

use crate::SortOrder;

/// Compare two listings under the recommended order.
///
/// Composite score descending, then featured first, then total review count
/// descending, then id ascending.
#[must_use]
pub fn recommended(lhs: &ScoredListing, rhs: &ScoredListing) -> Ordering {
    rhs.composite_score
        .total_cmp(&lhs.composite_score)
        .then_with(|| rhs.listing.featured.cmp(&lhs.listing.featured))
        .then_with(|| rhs.total_reviews().cmp(&lhs.total_reviews()))
        .then_with(|| lhs.listing.id.cmp(&rhs.listing.id))
}

pub(crate) fn compare(order: SortOrder, lhs: &ScoredListing, rhs: &ScoredListing) -> Ordering {
    let primary = match order {
        SortOrder::Recommended => Ordering::Equal,
        SortOrder::PriceAscending => lhs.listing.price.cmp(&rhs.listing.price),
        SortOrder::PriceDescending => rhs.listing.price.cmp(&lhs.listing.price),
        SortOrder::ReviewsDescending => rhs.total_reviews().cmp(&lhs.total_reviews()),
    };
    primary.then_with(|| recommended(lhs, rhs))
}

pub(crate) fn sort(listings: &mut [ScoredListing], order: SortOrder) {
    listings.sort_by(|lhs, rhs| compare(order, lhs, rhs));
}
