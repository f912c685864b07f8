//! Catalog query engine for Pup Score listings.
//!
//! This crate provides [`CatalogEngine`], which filters a caller-supplied
//! listing snapshot, ranks it through any
//! [`ListingScorer`](pupscore_core::ListingScorer) and slices the result into
//! pages. It also buckets listings by price tier, picks the top-rated share of
//! a catalog and summarises prices.
//!
//! Everything here is synchronous and side-effect free: listings are borrowed,
//! never mutated, and no state survives between calls.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod engine;
mod filter;
mod group;
pub mod order;
mod page;
mod query;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use engine::{CatalogEngine, DEFAULT_PER_TIER, DEFAULT_TOP_PERCENTAGE};
pub use group::{PriceStatistics, group_by_price_tier, price_statistics};
pub use page::{QueryPage, paginate};
pub use query::{
    CatalogQuery, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT, SortOrder, UnknownSortOrder,
};
