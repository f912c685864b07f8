//! Score listings for ranking.
//!
//! The `ListingScorer` trait assigns a composite score to a
//! [`Listing`](crate::Listing). The catalog engine is generic over it so the
//! weighting policy can be swapped without touching filtering or paging.

use crate::Listing;

/// Upper bound of every composite score.
pub const MAX_SCORE: f64 = 10.0;

/// Calculate a composite score for a listing.
///
/// Higher scores rank earlier. Implementations must be thread-safe
/// (`Send` + `Sync`) so one scorer can serve concurrent requests.
/// The method is infallible; implementers must return `0.0` when no
/// rating information is available.
///
/// Implementations must:
/// - Produce finite (`f64::is_finite`) scores.
/// - Return values within `0.0..=10.0`.
/// - Be deterministic for a given listing snapshot.
///
/// Use [`ListingScorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use pupscore_core::{Listing, ListingScorer};
///
/// struct PriceBlindScorer;
///
/// impl ListingScorer for PriceBlindScorer {
///     fn score(&self, _listing: &Listing) -> f64 {
///         7.5
///     }
/// }
///
/// let listing = Listing::new("a", 300, "Hangzhou");
/// assert_eq!(PriceBlindScorer.score(&listing), 7.5);
/// ```
pub trait ListingScorer: Send + Sync {
    /// Return the composite score for `listing`.
    fn score(&self, listing: &Listing) -> f64;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=10.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, MAX_SCORE)
    }
}

impl<S: ListingScorer + ?Sized> ListingScorer for &S {
    fn score(&self, listing: &Listing) -> f64 {
        (**self).score(listing)
    }
}
