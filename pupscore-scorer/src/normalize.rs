//! Conversion of platform-native ratings onto the common 0–10 scale.
#![forbid(unsafe_code)]

use pupscore_core::{MAX_SCORE, Platform, PlatformRating, RatingScale};

/// Review counts below this flag a rating as low confidence.
pub const LOW_CONFIDENCE_THRESHOLD: u32 = 20;

/// Map `raw` from `scale` onto `0.0..=10.0`.
///
/// Non-finite input yields `0.0`; out-of-range input is clamped.
///
/// # Examples
/// ```
/// use pupscore_core::RatingScale;
/// use pupscore_scorer::normalize_value;
///
/// assert_eq!(normalize_value(RatingScale::Five, 4.6), 9.2);
/// assert_eq!(normalize_value(RatingScale::Ten, 8.7), 8.7);
/// assert_eq!(normalize_value(RatingScale::Five, 6.0), 10.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "five-point ratings are doubled onto the ten-point scale"
)]
pub fn normalize_value(scale: RatingScale, raw: f64) -> f64 {
    if !raw.is_finite() {
        log::warn!("non-finite rating {raw} on a {}-point scale treated as 0", scale.max());
        return 0.0;
    }
    let converted = raw * scale.to_ten_factor();
    if !(0.0..=MAX_SCORE).contains(&converted) {
        log::debug!(
            "clamping rating {raw} outside 0..={} on a {}-point scale",
            scale.max(),
            scale.max()
        );
    }
    converted.clamp(0.0, MAX_SCORE)
}

/// Report whether `review_count` is too small to trust on its own.
#[must_use]
pub const fn is_low_confidence(review_count: u32) -> bool {
    review_count < LOW_CONFIDENCE_THRESHOLD
}

/// Normalise one platform's rating and flag its confidence.
///
/// The rating is never discarded, however few reviews back it.
#[must_use]
pub fn normalize_rating(
    platform: Platform,
    scale: RatingScale,
    raw_value: f64,
    review_count: u32,
) -> PlatformRating {
    PlatformRating {
        platform,
        raw_value,
        scale,
        normalized_value: normalize_value(scale, raw_value),
        review_count,
        low_confidence: is_low_confidence(review_count),
    }
}
