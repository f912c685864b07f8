//! Threshold tables for price tiers, rating badge tiers and letter grades.
//!
//! Every bucket is closed at its lower bound and open at its upper bound.
//! Classification is total: each input maps to exactly one label.
//!
//! # Examples
//! ```
//! use pupscore_core::{PriceTier, RatingGrade, RatingTier};
//!
//! assert_eq!(PriceTier::classify(400), PriceTier::Midscale);
//! assert_eq!(PriceTier::classify(399), PriceTier::Budget);
//! assert_eq!(RatingTier::classify(9.0), RatingTier::Exceptional);
//! assert_eq!(RatingGrade::classify(8.5).as_str(), "A+");
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing an unknown tier label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {axis} '{label}'")]
pub struct UnknownTier {
    /// Which table was consulted.
    pub axis: &'static str,
    /// The rejected label.
    pub label: String,
}

/// Price bucket of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PriceTier {
    /// 1500 and above.
    Luxury,
    /// 800 up to 1500.
    Premium,
    /// 400 up to 800.
    Midscale,
    /// 200 up to 400.
    Budget,
    /// Below 200.
    Homestay,
}

impl PriceTier {
    /// Every tier from most to least expensive.
    pub const ALL: [Self; 5] = [
        Self::Luxury,
        Self::Premium,
        Self::Midscale,
        Self::Budget,
        Self::Homestay,
    ];

    /// Map a price onto its tier.
    #[must_use]
    pub const fn classify(price: u32) -> Self {
        match price {
            1500.. => Self::Luxury,
            800..1500 => Self::Premium,
            400..800 => Self::Midscale,
            200..400 => Self::Budget,
            0..200 => Self::Homestay,
        }
    }

    /// Inclusive lower bound of the tier.
    #[must_use]
    pub const fn lower_bound(self) -> u32 {
        match self {
            Self::Luxury => 1500,
            Self::Premium => 800,
            Self::Midscale => 400,
            Self::Budget => 200,
            Self::Homestay => 0,
        }
    }

    /// Return the tier as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Luxury => "luxury",
            Self::Premium => "premium",
            Self::Midscale => "midscale",
            Self::Budget => "budget",
            Self::Homestay => "homestay",
        }
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTier {
                axis: "price tier",
                label: s.to_owned(),
            })
    }
}

/// Rating badge bucket derived from the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum RatingTier {
    /// 9.0 and above.
    Exceptional,
    /// 8.0 up to 9.0.
    Excellent,
    /// 7.0 up to 8.0.
    Great,
    /// Below 7.0.
    Good,
}

impl RatingTier {
    /// Every tier from best to worst.
    pub const ALL: [Self; 4] = [Self::Exceptional, Self::Excellent, Self::Great, Self::Good];

    /// Map a composite score onto its badge tier.
    ///
    /// Non-finite scores fall into the lowest tier.
    #[must_use]
    pub fn classify(score: f64) -> Self {
        if score >= 9.0 {
            Self::Exceptional
        } else if score >= 8.0 {
            Self::Excellent
        } else if score >= 7.0 {
            Self::Great
        } else {
            Self::Good
        }
    }

    /// Return the tier as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exceptional => "exceptional",
            Self::Excellent => "excellent",
            Self::Great => "great",
            Self::Good => "good",
        }
    }
}

impl fmt::Display for RatingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatingTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTier {
                axis: "rating tier",
                label: s.to_owned(),
            })
    }
}

/// Letter grade printed on the rating badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RatingGrade {
    /// 9.5 and above.
    #[cfg_attr(feature = "serde", serde(rename = "S+"))]
    SPlus,
    /// 9.0 up to 9.5.
    S,
    /// 8.5 up to 9.0.
    #[cfg_attr(feature = "serde", serde(rename = "A+"))]
    APlus,
    /// 8.0 up to 8.5.
    A,
    /// 7.5 up to 8.0.
    #[cfg_attr(feature = "serde", serde(rename = "B+"))]
    BPlus,
    /// 7.0 up to 7.5.
    B,
    /// 6.0 up to 7.0.
    C,
    /// Below 6.0.
    D,
}

const GRADE_THRESHOLDS: [(f64, RatingGrade); 7] = [
    (9.5, RatingGrade::SPlus),
    (9.0, RatingGrade::S),
    (8.5, RatingGrade::APlus),
    (8.0, RatingGrade::A),
    (7.5, RatingGrade::BPlus),
    (7.0, RatingGrade::B),
    (6.0, RatingGrade::C),
];

impl RatingGrade {
    /// Map a composite score onto its letter grade.
    #[must_use]
    pub fn classify(score: f64) -> Self {
        GRADE_THRESHOLDS
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map_or(Self::D, |(_, grade)| *grade)
    }

    /// Return the grade as printed on the badge.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SPlus => "S+",
            Self::S => "S",
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

impl fmt::Display for RatingGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
