//! Rating platforms and the native scales they publish on.
//!
//! The enum offers compile-time safety for per-platform lookups.
//!
//! # Examples
//! ```
//! use pupscore_core::{Platform, RatingScale};
//!
//! assert_eq!(Platform::Ctrip.as_str(), "ctrip");
//! assert_eq!(Platform::Booking.to_string(), "booking");
//! assert_eq!(Platform::Ctrip.native_scale(), RatingScale::Five);
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// External travel platform publishing guest ratings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Platform {
    /// Booking.com, international, 0–10 scale.
    Booking,
    /// Agoda, international, 0–10 scale.
    Agoda,
    /// Hotels.com, international, 0–10 scale.
    HotelsCom,
    /// Airbnb, published on the 0–10 scale in the catalog feed.
    Airbnb,
    /// Ctrip, domestic, 0–5 scale.
    Ctrip,
    /// Fliggy, domestic, 0–5 scale.
    Fliggy,
}

impl Platform {
    /// Every supported platform in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Booking,
        Self::Agoda,
        Self::HotelsCom,
        Self::Airbnb,
        Self::Ctrip,
        Self::Fliggy,
    ];

    /// Return the platform as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use pupscore_core::Platform;
    ///
    /// assert_eq!(Platform::HotelsCom.as_str(), "hotelscom");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::Agoda => "agoda",
            Self::HotelsCom => "hotelscom",
            Self::Airbnb => "airbnb",
            Self::Ctrip => "ctrip",
            Self::Fliggy => "fliggy",
        }
    }

    /// The scale the platform publishes ratings on.
    #[must_use]
    pub const fn native_scale(self) -> RatingScale {
        match self {
            Self::Ctrip | Self::Fliggy => RatingScale::Five,
            Self::Booking | Self::Agoda | Self::HotelsCom | Self::Airbnb => RatingScale::Ten,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown platform name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform '{0}'")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "booking" => Ok(Self::Booking),
            "agoda" => Ok(Self::Agoda),
            "hotelscom" | "hotels.com" => Ok(Self::HotelsCom),
            "airbnb" => Ok(Self::Airbnb),
            "ctrip" => Ok(Self::Ctrip),
            "fliggy" => Ok(Self::Fliggy),
            _ => Err(UnknownPlatform(s.to_owned())),
        }
    }
}

/// Native rating scale of a platform.
///
/// Serialised as the integer upper bound (`5` or `10`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum RatingScale {
    /// Ratings in `0.0..=5.0`.
    Five,
    /// Ratings in `0.0..=10.0`.
    Ten,
}

impl RatingScale {
    /// Upper bound of the scale.
    #[must_use]
    pub const fn max(self) -> f64 {
        match self {
            Self::Five => 5.0,
            Self::Ten => 10.0,
        }
    }

    /// Multiplier that maps the scale onto `0.0..=10.0`.
    #[must_use]
    pub const fn to_ten_factor(self) -> f64 {
        match self {
            Self::Five => 2.0,
            Self::Ten => 1.0,
        }
    }
}

/// Error returned for scales other than 5 or 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating scale must be 5 or 10, got {0}")]
pub struct InvalidScale(pub u8);

impl TryFrom<u8> for RatingScale {
    type Error = InvalidScale;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(Self::Five),
            10 => Ok(Self::Ten),
            other => Err(InvalidScale(other)),
        }
    }
}

impl From<RatingScale> for u8 {
    fn from(scale: RatingScale) -> Self {
        match scale {
            RatingScale::Five => 5,
            RatingScale::Ten => 10,
        }
    }
}
