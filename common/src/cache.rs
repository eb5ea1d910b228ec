//! Browser-local TTL cache for the candidate list.
//!
//! The list is stored as a JSON blob under [`DATA_KEY`] and the write time,
//! in epoch milliseconds, under [`TIMESTAMP_KEY`]. An entry is fresh for
//! [`CACHE_TTL_MS`]. Storage and time are reached through the [`CachePort`] and
//! [`Clock`] traits so the same logic runs against `localStorage` in the
//! browser and against [`MemoryCachePort`] / [`ManualClock`] in tests.
//!
//! Caching is best-effort: every storage or decoding failure is logged and
//! treated as a miss, never returned to the caller.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

use log::{debug, warn};
use thiserror::Error;

use crate::model::candidate::Candidate;

pub const DATA_KEY: &str = "candidates_cache";
pub const TIMESTAMP_KEY: &str = "candidates_cache_timestamp";

/// 30 minutes.
pub const CACHE_TTL_MS: i64 = 30 * 60 * 1000;

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Storage unavailable")]
    Unavailable,

    #[error("Storage rejected write: {0}")]
    Write(String),

    #[error("Storage read failed: {0}")]
    Read(String),
}

/// String key/value storage.
pub trait CachePort {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;
    fn remove(&self, key: &str) -> Result<(), CacheError>;
}

/// Wall clock in epoch milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// In-memory [`CachePort`].
#[derive(Debug, Default, Clone)]
pub struct MemoryCachePort {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryCachePort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl CachePort for MemoryCachePort {
    fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// A [`Clock`] that only moves when told to. Clones share the same time.
#[derive(Debug, Default, Clone)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn at(now_ms: i64) -> Self {
        Self {
            now: Rc::new(Cell::new(now_ms)),
        }
    }

    pub fn advance(&self, ms: i64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, now_ms: i64) {
        self.now.set(now_ms);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

pub struct CandidateCache<P, C> {
    port: P,
    clock: C,
}

impl<P: CachePort, C: Clock> CandidateCache<P, C> {
    pub fn new(port: P, clock: C) -> Self {
        Self { port, clock }
    }

    /// Returns the cached list and its age in milliseconds, if still fresh.
    pub fn read(&self) -> Option<(Vec<Candidate>, i64)> {
        match self.try_read() {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Candidate cache read failed, treating as miss: {e}");
                None
            }
        }
    }

    fn try_read(&self) -> Result<Option<(Vec<Candidate>, i64)>, CacheError> {
        let (Some(data), Some(stamp)) = (self.port.get(DATA_KEY)?, self.port.get(TIMESTAMP_KEY)?)
        else {
            return Ok(None);
        };

        let Ok(written_at) = stamp.trim().parse::<i64>() else {
            warn!("Candidate cache timestamp {stamp:?} is not a number");
            return Ok(None);
        };

        let age = self.clock.now_millis() - written_at;
        if !(0..CACHE_TTL_MS).contains(&age) {
            debug!("Candidate cache expired (age {age} ms)");
            return Ok(None);
        }

        match serde_json::from_str::<Vec<Candidate>>(&data) {
            Ok(candidates) => Ok(Some((candidates, age))),
            Err(e) => {
                warn!("Candidate cache blob is corrupt: {e}");
                Ok(None)
            }
        }
    }

    /// Stores `candidates` with the current time. Failures are only logged.
    pub fn write(&self, candidates: &[Candidate]) {
        if let Err(e) = self.try_write(candidates) {
            warn!("Candidate cache write failed: {e}");
        }
    }

    fn try_write(&self, candidates: &[Candidate]) -> Result<(), CacheError> {
        let data =
            serde_json::to_string(candidates).map_err(|e| CacheError::Write(e.to_string()))?;

        // timestamp last: a failed data write must not leave a fresh stamp behind
        self.port.set(DATA_KEY, &data)?;
        if let Err(e) = self
            .port
            .set(TIMESTAMP_KEY, &self.clock.now_millis().to_string())
        {
            // the new blob must not be served under the previous stamp
            if let Err(remove) = self.port.remove(DATA_KEY) {
                warn!("Failed to drop unstamped candidate cache: {remove}");
            }
            return Err(e);
        }

        debug!("Cached {} candidates", candidates.len());
        Ok(())
    }

    pub fn clear(&self) {
        for key in [DATA_KEY, TIMESTAMP_KEY] {
            if let Err(e) = self.port.remove(key) {
                warn!("Failed to remove {key} from candidate cache: {e}");
            }
        }
    }

    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::normalize::normalize_rows;
    use serde_json::json;

    pub(crate) const NOW: i64 = 1_767_225_600_000;

    /// A port whose writes always fail, like a full quota.
    pub(crate) struct FullPort;

    impl CachePort for FullPort {
        fn get(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), CacheError> {
            Err(CacheError::Write("QuotaExceededError".to_string()))
        }

        fn remove(&self, _key: &str) -> Result<(), CacheError> {
            Err(CacheError::Unavailable)
        }
    }

    /// Stores data normally but rejects timestamp writes.
    struct StampFailsPort(MemoryCachePort);

    impl CachePort for StampFailsPort {
        fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
            self.0.get(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
            if key == TIMESTAMP_KEY {
                return Err(CacheError::Write("QuotaExceededError".to_string()));
            }
            self.0.set(key, value)
        }

        fn remove(&self, key: &str) -> Result<(), CacheError> {
            self.0.remove(key)
        }
    }

    fn sample() -> Vec<Candidate> {
        let body = json!([
            { "isVisible": "TRUE", "name": "홍길동", "district": "강남구가선거구" },
            { "isVisible": true, "name": "김복지", "district": "비례대표", "councilType": "gu" }
        ]);
        normalize_rows(&body, NOW).unwrap()
    }

    #[test]
    fn test_empty_cache_misses() {
        let cache = CandidateCache::new(MemoryCachePort::new(), ManualClock::at(NOW));
        assert!(cache.read().is_none());
    }

    #[test]
    fn test_write_then_read() {
        let clock = ManualClock::at(NOW);
        let cache = CandidateCache::new(MemoryCachePort::new(), clock.clone());
        cache.write(&sample());

        clock.advance(1_000);
        let (candidates, age) = cache.read().unwrap();
        assert_eq!(candidates, sample());
        assert_eq!(age, 1_000);
    }

    #[test]
    fn test_expires_at_ttl() {
        let clock = ManualClock::at(NOW);
        let cache = CandidateCache::new(MemoryCachePort::new(), clock.clone());
        cache.write(&sample());

        clock.advance(CACHE_TTL_MS - 1);
        assert!(cache.read().is_some());

        clock.advance(1);
        assert!(cache.read().is_none());
    }

    #[test]
    fn test_future_timestamp_misses() {
        let clock = ManualClock::at(NOW);
        let cache = CandidateCache::new(MemoryCachePort::new(), clock.clone());
        cache.write(&sample());

        clock.set(NOW - 5_000);
        assert!(cache.read().is_none());
    }

    #[test]
    fn test_missing_timestamp_misses() {
        let port = MemoryCachePort::new();
        let cache = CandidateCache::new(port.clone(), ManualClock::at(NOW));
        cache.write(&sample());

        port.remove(TIMESTAMP_KEY).unwrap();
        assert!(cache.read().is_none());
    }

    #[test]
    fn test_corrupt_blob_misses() {
        let port = MemoryCachePort::new();
        port.set(DATA_KEY, "{not json").unwrap();
        port.set(TIMESTAMP_KEY, &NOW.to_string()).unwrap();

        let cache = CandidateCache::new(port, ManualClock::at(NOW));
        assert!(cache.read().is_none());
    }

    #[test]
    fn test_bad_timestamp_misses() {
        let port = MemoryCachePort::new();
        port.set(DATA_KEY, "[]").unwrap();
        port.set(TIMESTAMP_KEY, "yesterday").unwrap();

        let cache = CandidateCache::new(port, ManualClock::at(NOW));
        assert!(cache.read().is_none());
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let cache = CandidateCache::new(FullPort, ManualClock::at(NOW));
        cache.write(&sample());
        cache.clear();
        assert!(cache.read().is_none());
    }

    #[test]
    fn test_failed_stamp_write_leaves_no_stale_entry() {
        let port = MemoryCachePort::new();
        let clock = ManualClock::at(NOW);
        CandidateCache::new(port.clone(), clock.clone()).write(&sample());

        clock.advance(60_000);
        let failing = CandidateCache::new(StampFailsPort(port.clone()), clock.clone());
        failing.write(&sample()[..1]);

        assert!(port.get(DATA_KEY).unwrap().is_none());
        assert!(failing.read().is_none());
    }

    #[test]
    fn test_clear_removes_both_keys() {
        let port = MemoryCachePort::new();
        let cache = CandidateCache::new(port.clone(), ManualClock::at(NOW));
        cache.write(&sample());
        assert_eq!(port.len(), 2);

        cache.clear();
        assert!(port.is_empty());
        assert!(cache.read().is_none());
    }
}
