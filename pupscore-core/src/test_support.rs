//! Test-only scorers and listing fixtures used by unit and behaviour tests.

use std::collections::HashMap;

use crate::{Listing, ListingId, ListingScorer};

/// `ListingScorer` returning pre-assigned scores keyed by listing id.
///
/// Listings without an assigned score receive `0.0`.
#[derive(Debug, Clone, Default)]
pub struct FixedScorer {
    scores: HashMap<ListingId, f64>,
}

impl FixedScorer {
    /// Create a scorer with no assignments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `score` to the listing with `id`.
    #[must_use]
    pub fn with_score(mut self, id: &str, score: f64) -> Self {
        self.scores.insert(ListingId::new(id), score);
        self
    }

    /// Build a scorer from `(id, score)` pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64)>,
    {
        Self {
            scores: pairs
                .into_iter()
                .map(|(id, score)| (ListingId::new(id), score))
                .collect(),
        }
    }
}

impl ListingScorer for FixedScorer {
    fn score(&self, listing: &Listing) -> f64 {
        Self::sanitise(self.scores.get(&listing.id).copied().unwrap_or(0.0))
    }
}

/// Build `count` unrated listings with ids `l-001`, `l-002`, ... and the
/// given price.
#[must_use]
pub fn numbered_listings(count: usize, price: u32) -> Vec<Listing> {
    (1..=count)
        .map(|n| Listing::new(format!("l-{n:03}"), price, "Hangzhou"))
        .collect()
}
