//! Per-platform scale and weight configuration.
#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use camino::Utf8Path;
use pupscore_core::{Platform, PlatformRating, RatingScale};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::{PlatformTableError, normalize_rating};

/// Native scale and aggregation weight of one platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformProfile {
    /// Scale the platform publishes ratings on.
    pub scale: RatingScale,
    /// Relative trust placed in the platform when aggregating.
    pub weight: f64,
}

impl PlatformProfile {
    /// Build a profile from a scale and a weight.
    #[must_use]
    pub const fn new(scale: RatingScale, weight: f64) -> Self {
        Self { scale, weight }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawProfile {
    scale: u8,
    weight: f64,
}

/// Table entries in document order, duplicates included.
struct RawTable(Vec<(String, RawProfile)>);

impl<'de> Deserialize<'de> for RawTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = RawTable;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an object mapping platform names to profiles")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawTable, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry()? {
                    entries.push(entry);
                }
                Ok(RawTable(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Immutable scale and weight table, built once at process start.
///
/// # Examples
/// ```
/// use pupscore_core::{Platform, RatingScale};
/// use pupscore_scorer::PlatformTable;
///
/// let table = PlatformTable::from_json_str(r#"{"ctrip": {"scale": 5, "weight": 1.1}}"#)
///     .expect("valid table");
/// let ctrip = table.get(Platform::Ctrip).expect("ctrip configured");
/// assert_eq!(ctrip.scale, RatingScale::Five);
/// assert!(table.get(Platform::Booking).is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformTable {
    profiles: BTreeMap<Platform, PlatformProfile>,
}

impl PlatformTable {
    /// Create a table with no platforms configured.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            profiles: BTreeMap::new(),
        }
    }

    /// Add or replace the profile for `platform`.
    ///
    /// # Errors
    /// Returns [`PlatformTableError::InvalidWeight`] when the weight is
    /// negative or not finite.
    pub fn with_profile(
        mut self,
        platform: Platform,
        profile: PlatformProfile,
    ) -> Result<Self, PlatformTableError> {
        if !profile.weight.is_finite() || profile.weight < 0.0 {
            return Err(PlatformTableError::InvalidWeight {
                platform,
                weight: profile.weight,
            });
        }
        self.profiles.insert(platform, profile);
        Ok(self)
    }

    /// Profile configured for `platform`, if any.
    #[must_use]
    pub fn get(&self, platform: Platform) -> Option<PlatformProfile> {
        self.profiles.get(&platform).copied()
    }

    /// Iterate configured platforms in platform order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, PlatformProfile)> + '_ {
        self.profiles
            .iter()
            .map(|(platform, profile)| (*platform, *profile))
    }

    /// Number of configured platforms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Report whether no platform is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Normalise a rating published on `platform`.
    ///
    /// Returns `None` when the platform is not configured.
    #[must_use]
    pub fn normalize(
        &self,
        platform: Platform,
        raw_value: f64,
        review_count: u32,
    ) -> Option<PlatformRating> {
        self.get(platform)
            .map(|profile| normalize_rating(platform, profile.scale, raw_value, review_count))
    }

    /// Parse a table from a JSON object mapping platform names to
    /// `{ "scale": 5 | 10, "weight": number }`.
    ///
    /// Names are matched leniently, so `"Booking"` and `"booking"` are the
    /// same platform and may not both appear.
    ///
    /// # Errors
    /// Returns [`PlatformTableError`] when the JSON is malformed, a platform
    /// is unknown or listed twice, a scale is unsupported or a weight is
    /// invalid.
    pub fn from_json_str(json: &str) -> Result<Self, PlatformTableError> {
        let RawTable(entries) =
            serde_json::from_str(json).map_err(|source| PlatformTableError::Parse { source })?;
        let mut names: BTreeMap<Platform, String> = BTreeMap::new();
        let mut table = Self::empty();
        for (name, profile) in entries {
            let platform = Platform::from_str(&name)
                .map_err(|source| PlatformTableError::UnknownPlatform { source })?;
            if let Some(first) = names.get(&platform) {
                return Err(PlatformTableError::DuplicatePlatform {
                    platform,
                    first: first.clone(),
                    second: name,
                });
            }
            let scale = RatingScale::try_from(profile.scale)
                .map_err(|source| PlatformTableError::InvalidScale { platform, source })?;
            table = table.with_profile(platform, PlatformProfile::new(scale, profile.weight))?;
            names.insert(platform, name);
        }
        Ok(table)
    }

    /// Read and parse a table file.
    ///
    /// # Errors
    /// Returns [`PlatformTableError::Read`] when the file cannot be read and
    /// propagates errors from [`PlatformTable::from_json_str`].
    pub fn from_json_file(path: &Utf8Path) -> Result<Self, PlatformTableError> {
        let contents =
            pupscore_fs::read_source_to_string(path).map_err(|source| PlatformTableError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        let table = Self::from_json_str(&contents)?;
        log::debug!("loaded {} platform profiles from {path}", table.len());
        Ok(table)
    }
}

impl Default for PlatformTable {
    /// Weights reflect how much each source's reviewers are trusted for the
    /// local market.
    fn default() -> Self {
        let profiles = [
            (Platform::Booking, 1.0),
            (Platform::Agoda, 0.9),
            (Platform::HotelsCom, 0.85),
            (Platform::Airbnb, 0.8),
            (Platform::Ctrip, 1.1),
            (Platform::Fliggy, 1.0),
        ]
        .into_iter()
        .map(|(platform, weight)| {
            (
                platform,
                PlatformProfile::new(platform.native_scale(), weight),
            )
        })
        .collect();
        Self { profiles }
    }
}
