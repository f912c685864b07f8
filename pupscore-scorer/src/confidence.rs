//! Sample-size confidence tiers and the policy deciding whether they weigh in.
#![forbid(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Confidence bucket derived from a review count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfidenceTier {
    /// No reviews at all.
    None,
    /// 1 to 9 reviews.
    VeryLow,
    /// 10 to 99 reviews.
    Low,
    /// 100 to 999 reviews.
    Medium,
    /// 1000 reviews or more.
    High,
}

impl ConfidenceTier {
    /// Bucket a review count.
    ///
    /// # Examples
    /// ```
    /// use pupscore_scorer::ConfidenceTier;
    ///
    /// assert_eq!(ConfidenceTier::from_review_count(0), ConfidenceTier::None);
    /// assert_eq!(ConfidenceTier::from_review_count(99), ConfidenceTier::Low);
    /// assert_eq!(ConfidenceTier::from_review_count(1000), ConfidenceTier::High);
    /// ```
    #[must_use]
    pub const fn from_review_count(review_count: u64) -> Self {
        match review_count {
            0 => Self::None,
            1..10 => Self::VeryLow,
            10..100 => Self::Low,
            100..1000 => Self::Medium,
            1000.. => Self::High,
        }
    }

    /// Multiplier applied to a platform weight under [`ConfidencePolicy::Tiered`].
    #[must_use]
    pub const fn factor(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::VeryLow => 0.85,
            Self::Low => 0.90,
            Self::Medium => 0.95,
            Self::High => 1.0,
        }
    }

    /// Return the tier as a kebab-case `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::VeryLow => "very-low",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How review counts influence aggregation weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidencePolicy {
    /// Fixed weights; confidence flags are reported only.
    #[default]
    Inert,
    /// Each weight is scaled by its [`ConfidenceTier::factor`].
    Tiered,
}

impl ConfidencePolicy {
    /// Weight a platform contributes given its review count.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "tiered confidence scales the configured weight"
    )]
    pub const fn effective_weight(self, weight: f64, review_count: u32) -> f64 {
        match self {
            Self::Inert => weight,
            Self::Tiered => {
                weight * ConfidenceTier::from_review_count(review_count as u64).factor()
            }
        }
    }

    /// Return the policy as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inert => "inert",
            Self::Tiered => "tiered",
        }
    }
}

impl fmt::Display for ConfidencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown confidence policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown confidence policy '{0}', expected 'inert' or 'tiered'")]
pub struct UnknownPolicy(pub String);

impl FromStr for ConfidencePolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inert" => Ok(Self::Inert),
            "tiered" => Ok(Self::Tiered),
            _ => Err(UnknownPolicy(s.to_owned())),
        }
    }
}
