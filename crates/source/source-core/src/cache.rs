//! In-memory response cache keyed by URL.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use tracing::debug;

#[derive(Debug, Clone)]
struct CachedBody {
    fetched_at: Instant,
    body: String,
}

/// URL → body cache with a fixed time-to-live.
///
/// A hit younger than the TTL is served without a request; an expired entry
/// is replaced by the next fetch.
#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    entries: Mutex<HashMap<String, CachedBody>>,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new(Duration::from_secs(600))
    }
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh body for `url`, if any.
    pub fn get(&self, url: &str) -> Option<String> {
        self.get_at(url, Instant::now())
    }

    /// Store a body fetched now.
    pub fn insert(&self, url: &str, body: String) {
        self.insert_at(url, body, Instant::now());
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn get_at(&self, url: &str, now: Instant) -> Option<String> {
        let entries = self.lock();
        let entry = entries.get(url)?;
        if now.saturating_duration_since(entry.fetched_at) < self.ttl {
            debug!(url, "results from cache");
            Some(entry.body.clone())
        } else {
            None
        }
    }

    fn insert_at(&self, url: &str, body: String, fetched_at: Instant) {
        self.lock()
            .insert(url.to_string(), CachedBody { fetched_at, body });
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CachedBody>> {
        // Entries are replaced whole; a poisoned map is still consistent.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://example.org/feed.json";

    #[test]
    fn test_miss_on_empty() {
        let cache = ResponseCache::default();
        assert!(cache.get(URL).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_hit_within_ttl() {
        let cache = ResponseCache::new(Duration::from_secs(600));
        let t0 = Instant::now();
        cache.insert_at(URL, "[]".to_string(), t0);
        assert_eq!(
            cache.get_at(URL, t0 + Duration::from_secs(599)),
            Some("[]".to_string())
        );
    }

    #[test]
    fn test_expired_after_ttl() {
        let cache = ResponseCache::new(Duration::from_secs(600));
        let t0 = Instant::now();
        cache.insert_at(URL, "[]".to_string(), t0);
        assert!(cache.get_at(URL, t0 + Duration::from_secs(600)).is_none());
    }

    #[test]
    fn test_zero_ttl_never_hits() {
        let cache = ResponseCache::new(Duration::ZERO);
        cache.insert(URL, "[]".to_string());
        assert!(cache.get(URL).is_none());
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_insert_replaces() {
        let cache = ResponseCache::default();
        cache.insert(URL, "old".to_string());
        cache.insert(URL, "new".to_string());
        assert_eq!(cache.get(URL), Some("new".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let cache = ResponseCache::default();
        cache.insert(URL, "x".to_string());
        cache.clear();
        assert!(cache.is_empty());
    }
}
