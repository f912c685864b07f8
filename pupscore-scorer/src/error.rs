//! Error types raised while loading a platform table.
#![forbid(unsafe_code)]

use camino::Utf8PathBuf;
use pupscore_core::{InvalidScale, Platform, UnknownPlatform};
use thiserror::Error;

/// Errors raised while reading or validating a [`PlatformTable`](crate::PlatformTable).
#[derive(Debug, Error)]
pub enum PlatformTableError {
    /// Reading the table file failed.
    #[error("failed to read platform table at {path}")]
    Read {
        /// Requested table path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The table was not a JSON object of `{ scale, weight }` entries.
    #[error("failed to parse platform table")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// A key did not name a supported platform.
    #[error("platform table contains an unsupported platform")]
    UnknownPlatform {
        /// Source error from platform parsing.
        #[source]
        source: UnknownPlatform,
    },
    /// Two keys named the same platform.
    #[error("platform {platform} is configured twice, as {first:?} and {second:?}")]
    DuplicatePlatform {
        /// Platform both keys resolve to.
        platform: Platform,
        /// Key seen first.
        first: String,
        /// Key seen second.
        second: String,
    },
    /// A scale was neither 5 nor 10.
    #[error("platform {platform} declares an unsupported scale")]
    InvalidScale {
        /// Affected platform.
        platform: Platform,
        /// Source error from scale parsing.
        #[source]
        source: InvalidScale,
    },
    /// A weight was negative or not finite.
    #[error("weight {weight} for platform {platform} must be finite and non-negative")]
    InvalidWeight {
        /// Affected platform.
        platform: Platform,
        /// Rejected weight.
        weight: f64,
    },
}
