//! `CatalogEngine`: filter, rank and page listings through a `ListingScorer`.

use std::collections::BTreeMap;

use pupscore_core::{Listing, ListingScorer, PriceTier, ScoredListing};

use crate::filter::ListingFilter;
use crate::{CatalogQuery, QueryPage, SortOrder, order, paginate};

/// Percentage of the catalog returned by [`CatalogEngine::top_rated`] when
/// callers have no preference.
pub const DEFAULT_TOP_PERCENTAGE: u32 = 10;

/// Listings per tier returned by [`CatalogEngine::top_by_price_tier`] when
/// callers have no preference.
pub const DEFAULT_PER_TIER: usize = 3;

/// Read-only query engine over caller-supplied listing snapshots.
///
/// The engine is generic over the scorer so the weighting policy can change
/// without touching filtering or paging. Inputs are never mutated; every
/// operation returns new sequences.
///
/// # Examples
/// ```
/// use pupscore_catalog::{CatalogEngine, CatalogQuery};
/// use pupscore_core::{Listing, ListingScorer};
///
/// struct PriceBlind;
///
/// impl ListingScorer for PriceBlind {
///     fn score(&self, _listing: &Listing) -> f64 {
///         8.0
///     }
/// }
///
/// let engine = CatalogEngine::new(PriceBlind);
/// let listings = vec![Listing::new("a", 500, "Hangzhou")];
/// let page = engine.query(&listings, &CatalogQuery::default());
/// assert_eq!(page.total, 1);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogEngine<S> {
    scorer: S,
}

impl<S: ListingScorer> CatalogEngine<S> {
    /// Construct an engine ranking with `scorer`.
    #[must_use]
    pub const fn new(scorer: S) -> Self {
        Self { scorer }
    }

    /// Borrow the scorer.
    #[must_use]
    pub const fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Score and classify every listing, preserving input order.
    #[must_use]
    pub fn score(&self, listings: &[Listing]) -> Vec<ScoredListing> {
        listings.iter().map(|listing| self.score_one(listing)).collect()
    }

    /// Score and sort every listing in the recommended order.
    #[must_use]
    pub fn ranked(&self, listings: &[Listing]) -> Vec<ScoredListing> {
        let mut scored = self.score(listings);
        order::sort(&mut scored, SortOrder::Recommended);
        scored
    }

    /// Filter, sort and paginate `listings`.
    ///
    /// Filters run in a fixed order: text, location, price range, amenities,
    /// then minimum composite score. `page` and `limit` are clamped.
    #[must_use]
    pub fn query(&self, listings: &[Listing], query: &CatalogQuery) -> QueryPage {
        let page = query.effective_page();
        let limit = query.effective_limit();
        let filter = ListingFilter::from_query(query);
        if !filter.is_satisfiable() {
            log::debug!(
                "price range {:?}..={:?} admits nothing",
                query.min_price,
                query.max_price
            );
            return QueryPage::empty(page, limit);
        }

        let mut matched: Vec<ScoredListing> = listings
            .iter()
            .filter(|listing| filter.matches(listing))
            .map(|listing| self.score_one(listing))
            .filter(|scored| {
                query
                    .min_rating
                    .is_none_or(|min_rating| scored.composite_score >= min_rating)
            })
            .collect();
        order::sort(&mut matched, query.sort);
        log::debug!(
            "catalog query matched {} of {} listings (sort {}, page {page}, limit {limit})",
            matched.len(),
            listings.len(),
            query.sort
        );
        paginate(matched, page, limit)
    }

    /// Best `percentage` percent of the catalog in the recommended order.
    ///
    /// Returns at least one listing for non-empty input and never more than
    /// the catalog holds.
    #[must_use]
    pub fn top_rated(&self, listings: &[Listing], percentage: u32) -> Vec<ScoredListing> {
        let mut ranked = self.ranked(listings);
        ranked.truncate(top_count(ranked.len(), percentage));
        ranked
    }

    /// Best `per_tier` listings within each price tier.
    ///
    /// All five tiers are present in the result, possibly empty.
    #[must_use]
    pub fn top_by_price_tier(
        &self,
        listings: &[Listing],
        per_tier: usize,
    ) -> BTreeMap<PriceTier, Vec<ScoredListing>> {
        let mut groups: BTreeMap<PriceTier, Vec<ScoredListing>> = PriceTier::ALL
            .into_iter()
            .map(|tier| (tier, Vec::new()))
            .collect();
        for scored in self.ranked(listings) {
            let bucket = groups.entry(scored.price_tier).or_default();
            if bucket.len() < per_tier {
                bucket.push(scored);
            }
        }
        groups
    }

    fn score_one(&self, listing: &Listing) -> ScoredListing {
        ScoredListing::new(listing.clone(), self.scorer.score(listing))
    }
}

/// `max(1, floor(count * percentage / 100))`, capped at `count`.
#[expect(
    clippy::integer_division,
    reason = "the share of the catalog rounds down before the floor of one"
)]
fn top_count(count: usize, percentage: u32) -> usize {
    if count == 0 {
        return 0;
    }
    let share = count.saturating_mul(usize::try_from(percentage).unwrap_or(usize::MAX)) / 100;
    share.clamp(1, count)
}

#[cfg(test)]
mod tests;
