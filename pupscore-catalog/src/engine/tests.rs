//! Tests for the `CatalogEngine`.

use super::*;
use pupscore_core::test_support::{FixedScorer, numbered_listings};
use rstest::{fixture, rstest};

use crate::test_support::{listing, west_lake_catalog};

#[fixture]
fn unscored_engine() -> CatalogEngine<FixedScorer> {
    CatalogEngine::new(FixedScorer::new())
}

fn ids(listings: &[ScoredListing]) -> Vec<&str> {
    listings
        .iter()
        .map(|scored| scored.listing.id.as_str())
        .collect()
}

fn scores(listings: &[ScoredListing]) -> Vec<f64> {
    listings.iter().map(|scored| scored.composite_score).collect()
}

#[rstest]
fn price_range_keeps_ranked_matches() {
    let (listings, scorer) = west_lake_catalog();
    let engine = CatalogEngine::new(scorer);
    let query = CatalogQuery::default().with_price_range(Some(400), Some(1000));

    let page = engine.query(&listings, &query);

    assert_eq!(scores(&page.results), [8.7, 8.3]);
    assert_eq!(page.total, 2);
}

#[rstest]
fn third_page_of_forty_five(unscored_engine: CatalogEngine<FixedScorer>) {
    let listings = numbered_listings(45, 300);
    let query = CatalogQuery::default().with_page(3, 20);

    let page = unscored_engine.query(&listings, &query);

    let first = page.results.first().map(|scored| scored.listing.id.as_str());
    assert_eq!(first, Some("l-041"));
    assert_eq!(page.results.len(), 5);
    assert_eq!(page.total_pages, 3);
    assert!(!page.has_more);
}

#[rstest]
#[case(0, 0, 1, 1)]
#[case(1, 500, 1, 100)]
fn clamps_out_of_range_paging(
    unscored_engine: CatalogEngine<FixedScorer>,
    #[case] page: u32,
    #[case] limit: u32,
    #[case] expected_page: u32,
    #[case] expected_len: usize,
) {
    let listings = numbered_listings(150, 300);
    let query = CatalogQuery::default().with_page(page, limit);

    let result = unscored_engine.query(&listings, &query);

    assert_eq!(result.page, expected_page);
    assert_eq!(result.results.len(), expected_len);
}

#[rstest]
fn page_past_the_end_is_empty(unscored_engine: CatalogEngine<FixedScorer>) {
    let listings = numbered_listings(5, 300);
    let page = unscored_engine.query(&listings, &CatalogQuery::default().with_page(9, 20));
    assert!(page.results.is_empty());
    assert_eq!(page.total, 5);
}

#[rstest]
fn amenity_filter_matches_any_tag(unscored_engine: CatalogEngine<FixedScorer>) {
    let listings = vec![
        listing("gym-spa", 500, &["gym", "spa"]),
        listing("spa-only", 500, &["spa"]),
    ];
    let query = CatalogQuery::default().with_amenities(["pool", "gym"]);

    let page = unscored_engine.query(&listings, &query);

    assert_eq!(ids(&page.results), ["gym-spa"]);
}

#[rstest]
fn max_price_is_inclusive(unscored_engine: CatalogEngine<FixedScorer>) {
    let listings = vec![listing("at", 800, &[]), listing("over", 801, &[])];
    let query = CatalogQuery::default().with_price_range(None, Some(800));

    let page = unscored_engine.query(&listings, &query);

    assert_eq!(ids(&page.results), ["at"]);
}

#[rstest]
fn inverted_price_range_returns_empty_page(unscored_engine: CatalogEngine<FixedScorer>) {
    let listings = numbered_listings(3, 500);
    let query = CatalogQuery::default().with_price_range(Some(900), Some(100));

    let page = unscored_engine.query(&listings, &query);

    assert_eq!(page, QueryPage::empty(1, 20));
}

#[rstest]
fn min_rating_is_inclusive() {
    let (listings, scorer) = west_lake_catalog();
    let engine = CatalogEngine::new(scorer);
    let query = CatalogQuery::default().with_min_rating(8.7);

    let page = engine.query(&listings, &query);

    assert_eq!(ids(&page.results), ["grand", "garden"]);
}

#[rstest]
fn equal_scores_order_by_id_on_every_run() {
    let listings = vec![
        listing("c", 500, &[]),
        listing("a", 500, &[]),
        listing("b", 500, &[]),
    ];
    let engine = CatalogEngine::new(FixedScorer::from_pairs([
        ("a", 8.0),
        ("b", 8.0),
        ("c", 8.0),
    ]));

    let first = engine.query(&listings, &CatalogQuery::default());
    let second = engine.query(&listings, &CatalogQuery::default());

    assert_eq!(ids(&first.results), ["a", "b", "c"]);
    assert_eq!(first, second);
}

#[rstest]
fn query_leaves_input_untouched(unscored_engine: CatalogEngine<FixedScorer>) {
    let listings = vec![listing("z", 900, &[]), listing("a", 100, &[])];
    let snapshot = listings.clone();

    let page = unscored_engine.query(
        &listings,
        &CatalogQuery::default().with_sort(SortOrder::PriceAscending),
    );

    assert_eq!(ids(&page.results), ["a", "z"]);

    assert_eq!(listings, snapshot);
}

#[rstest]
#[case(10, 0, 0)]
#[case(10, 1, 1)]
#[case(10, 9, 1)]
#[case(10, 45, 4)]
#[case(100, 250, 100)]
#[case(0, 3, 0)]
fn top_rated_counts(#[case] percentage: u32, #[case] count: usize, #[case] expected: usize) {
    assert_eq!(top_count(count, percentage), expected);
}

#[rstest]
fn top_rated_returns_the_best_listings() {
    let (listings, scorer) = west_lake_catalog();
    let engine = CatalogEngine::new(scorer);

    let top = engine.top_rated(&listings, 50);

    assert_eq!(ids(&top), ["grand"]);
}

#[rstest]
fn top_by_price_tier_fills_every_tier() {
    let (listings, scorer) = west_lake_catalog();
    let engine = CatalogEngine::new(scorer);

    let tiers = engine.top_by_price_tier(&listings, 1);

    assert_eq!(tiers.len(), PriceTier::ALL.len());
    let premium = tiers.get(&PriceTier::Premium).map(|bucket| ids(bucket));
    assert_eq!(premium, Some(vec!["grand"]));
    assert!(tiers.get(&PriceTier::Luxury).is_some_and(Vec::is_empty));
}
