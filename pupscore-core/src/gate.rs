//! Per-key daily request caps for the public search API.
//!
//! The counter lives behind [`CounterStore`] so the request boundary can plug
//! in whatever shared store it already runs. Nothing in the scoring or
//! catalog code touches it.
//!
//! Counts are bucketed by UTC day: the gate counts against `"{key}@{day}"`,
//! so a new day starts every key from zero without a reset step. Stores with
//! expiry can let old buckets lapse; [`MemoryCounterStore`] drops them through
//! [`RateLimitGate::forget_before`].

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

/// Seconds in one UTC day bucket.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Atomic increment-and-read counter keyed by string.
pub trait CounterStore: Send + Sync {
    /// Increment the counter for `key` and return the new value.
    ///
    /// The increment and the read must happen as one atomic step.
    fn increment(&self, key: &str) -> u64;
}

/// In-process [`CounterStore`] for tests and single-node deployments.
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    counts: Mutex<HashMap<String, u64>>,
}

impl MemoryCounterStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count for `key` without incrementing it.
    #[must_use]
    pub fn current(&self, key: &str) -> u64 {
        self.counts
            .lock()
            .map_or(0, |counts| counts.get(key).copied().unwrap_or(0))
    }

    /// Number of counters held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.lock().map_or(0, |counts| counts.len())
    }

    /// Whether no counter is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Keep only the counters whose key satisfies `keep`.
    pub fn retain(&self, mut keep: impl FnMut(&str) -> bool) {
        let mut counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        counts.retain(|key, _| keep(key));
    }
}

impl CounterStore for MemoryCounterStore {
    fn increment(&self, key: &str) -> u64 {
        let mut counts = self.counts.lock().unwrap_or_else(PoisonError::into_inner);
        let count = counts.entry(key.to_owned()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }
}

/// Days elapsed since the Unix epoch at `now`, in UTC.
///
/// Instants before the epoch fall into day zero.
///
/// # Examples
/// ```
/// use std::time::{Duration, UNIX_EPOCH};
/// use pupscore_core::gate::utc_day;
///
/// assert_eq!(utc_day(UNIX_EPOCH + Duration::from_secs(86_399)), 0);
/// assert_eq!(utc_day(UNIX_EPOCH + Duration::from_secs(86_400)), 1);
/// ```
#[must_use]
#[expect(
    clippy::integer_division,
    reason = "a day bucket is whole seconds divided by the day length, rounded down"
)]
pub fn utc_day(now: SystemTime) -> u64 {
    now.duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_secs() / SECONDS_PER_DAY)
}

fn bucket_key(key: &str, day: u64) -> String {
    format!("{key}@{day}")
}

fn bucket_day(counter_key: &str) -> Option<u64> {
    counter_key
        .rsplit_once('@')
        .and_then(|(_, day)| day.parse().ok())
}

/// Errors raised by [`RateLimitGate::admit`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateLimitError {
    /// The key used up its allowance for the day.
    #[error("daily rate limit of {limit} requests exceeded for key {key} on day {day}")]
    Exceeded {
        /// Key that was refused.
        key: String,
        /// Configured allowance.
        limit: u64,
        /// Day bucket the refusal belongs to.
        day: u64,
    },
}

/// Admit or refuse requests against a fixed daily allowance per key.
///
/// # Examples
/// ```
/// use pupscore_core::{MemoryCounterStore, RateLimitGate};
///
/// let gate = RateLimitGate::new(MemoryCounterStore::new(), 2);
/// assert_eq!(gate.admit("key-1", 20_000), Ok(1));
/// assert_eq!(gate.admit("key-1", 20_000), Ok(2));
/// assert!(gate.admit("key-1", 20_000).is_err());
/// assert_eq!(gate.admit("key-2", 20_000), Ok(1));
/// assert_eq!(gate.admit("key-1", 20_001), Ok(1));
/// ```
#[derive(Debug)]
pub struct RateLimitGate<C> {
    store: C,
    limit: u64,
}

impl<C: CounterStore> RateLimitGate<C> {
    /// Build a gate over `store` allowing `limit` requests per key per day.
    pub const fn new(store: C, limit: u64) -> Self {
        Self { store, limit }
    }

    /// Count the request against `key` on `day` and return its ordinal when
    /// within the allowance.
    ///
    /// `day` is a UTC day bucket, usually [`utc_day`] of the request time.
    ///
    /// # Errors
    /// Returns [`RateLimitError::Exceeded`] once the incremented count passes
    /// the limit for that day.
    pub fn admit(&self, key: &str, day: u64) -> Result<u64, RateLimitError> {
        let count = self.store.increment(&bucket_key(key, day));
        if count > self.limit {
            log::debug!(
                "refusing request {count} for key {key} on day {day}; limit is {}",
                self.limit
            );
            return Err(RateLimitError::Exceeded {
                key: key.to_owned(),
                limit: self.limit,
                day,
            });
        }
        Ok(count)
    }

    /// Admit against the current UTC day.
    ///
    /// # Errors
    /// Same as [`RateLimitGate::admit`].
    pub fn admit_now(&self, key: &str) -> Result<u64, RateLimitError> {
        self.admit(key, utc_day(SystemTime::now()))
    }

    /// Borrow the underlying store.
    pub const fn store(&self) -> &C {
        &self.store
    }
}

impl RateLimitGate<MemoryCounterStore> {
    /// Requests counted against `key` on `day`.
    #[must_use]
    pub fn count(&self, key: &str, day: u64) -> u64 {
        self.store.current(&bucket_key(key, day))
    }

    /// Drop every counter from a day earlier than `day`.
    pub fn forget_before(&self, day: u64) {
        self.store
            .retain(|counter_key| bucket_day(counter_key).is_none_or(|bucket| bucket >= day));
    }
}
