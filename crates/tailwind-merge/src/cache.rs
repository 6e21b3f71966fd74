use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};

use lru::LruCache;
use parking_lot::Mutex;

/// Bounded least-recently-used cache of merge results, keyed by the exact
/// merge input.
#[derive(Debug)]
pub struct ResultCache {
    entries: Mutex<LruCache<String, String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ResultCache {
    pub fn new(capacity: NonZeroUsize) -> Self {
        ResultCache {
            entries: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Look up a result, marking it as most recently used.
    pub fn get(&self, key: &str) -> Option<String> {
        let value = self.entries.lock().get(key).cloned();
        match value {
            Some(_) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(key, "merge cache hit");
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(key, "merge cache miss");
            }
        }
        value
    }

    /// Store a result, evicting the least recently used entry when full.
    pub fn put(&self, key: String, value: String) {
        let mut entries = self.entries.lock();
        // `push` also hands back the old pair when it replaces an existing key.
        if let Some((evicted, _)) = entries.push(key, value) {
            if !entries.contains(&evicted) {
                tracing::trace!(key = %evicted, "merge cache eviction");
            }
        }
    }

    /// Whether a key is cached, without touching its recency.
    #[cfg(test)]
    fn contains(&self, key: &str) -> bool {
        self.entries.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cache(capacity: usize) -> ResultCache {
        ResultCache::new(NonZeroUsize::new(capacity).unwrap())
    }

    #[test]
    fn test_get_returns_stored_value() {
        let cache = cache(2);
        assert_eq!(cache.get("p-2 p-4"), None);
        cache.put("p-2 p-4".to_string(), "p-4".to_string());
        assert_eq!(cache.get("p-2 p-4").as_deref(), Some("p-4"));
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.misses(), 1);
    }

    #[test]
    fn test_size_never_exceeds_capacity() {
        let cache = cache(3);
        for i in 0..10 {
            cache.put(format!("key-{i}"), format!("value-{i}"));
            assert!(cache.len() <= 3);
        }
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_put_at_capacity_evicts_least_recently_used() {
        let cache = cache(2);
        cache.put("a".to_string(), "A".to_string());
        cache.put("b".to_string(), "B".to_string());
        cache.put("c".to_string(), "C".to_string());
        assert!(!cache.contains("a"));
        assert!(cache.contains("b"));
        assert!(cache.contains("c"));
    }

    #[test]
    fn test_get_refreshes_recency() {
        let cache = cache(2);
        cache.put("a".to_string(), "A".to_string());
        cache.put("b".to_string(), "B".to_string());
        assert!(cache.get("a").is_some());
        cache.put("c".to_string(), "C".to_string());
        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));
    }

    #[test]
    fn test_put_replaces_existing_value() {
        let cache = cache(2);
        cache.put("a".to_string(), "A".to_string());
        cache.put("a".to_string(), "AA".to_string());
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get("a").as_deref(), Some("AA"));
    }
}
