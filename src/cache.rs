// src/cache.rs
//! Time-bounded cache for expensive upstream calls.

use anyhow::Result;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::trace;

/// Cache TTL configuration per data type.
pub struct CacheTtl;

impl CacheTtl {
    // Account data moves slowly
    pub const PROFILE: Duration = Duration::from_secs(60 * 60); // 1 hr
    pub const REPOSITORIES: Duration = Duration::from_secs(60 * 60); // 1 hr

    // A live posting aggregator would refresh more often
    pub const CATALOG: Duration = Duration::from_secs(15 * 60); // 15 min
}

struct CacheEntry<T> {
    value: T,
    fetched_at: Instant,
}

type Slot<T> = Arc<Mutex<Option<CacheEntry<T>>>>;

/// Keyed cache with a single validity window. A live entry (age < ttl) is
/// returned as-is; otherwise the fetch closure runs and its result replaces
/// the entry atomically. A failed fetch writes nothing, so the next call
/// retries instead of serving a poisoned value.
///
/// Each key has its own async lock, so concurrent callers for the same key
/// share one underlying fetch instead of duplicating it. Keys are never
/// evicted beyond TTL expiry; the key space here is a handful of usernames.
pub struct TtlCache<T> {
    ttl: Duration,
    slots: Mutex<HashMap<String, Slot<T>>>,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: Mutex::new(HashMap::new()),
        }
    }

    async fn slot(&self, key: &str) -> Slot<T> {
        let mut slots = self.slots.lock().await;
        slots
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(None)))
            .clone()
    }

    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let slot = self.slot(key).await;
        let mut guard = slot.lock().await;

        if let Some(entry) = guard.as_ref() {
            if entry.fetched_at.elapsed() < self.ttl {
                trace!("Cache hit for key: {}", key);
                return Ok(entry.value.clone());
            }
            trace!("Cache entry expired for key: {}", key);
        }

        let value = fetch().await?;
        *guard = Some(CacheEntry {
            value: value.clone(),
            fetched_at: Instant::now(),
        });

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn second_call_within_ttl_skips_fetch() {
        let cache = TtlCache::new(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        for _ in 0..3 {
            let value = cache
                .get_or_fetch("octocat", || async {
                    calls.fetch_add(1, Ordering::SeqCst);
                    Ok(42u32)
                })
                .await
                .unwrap();
            assert_eq!(value, 42);
        }

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn expired_entry_triggers_refetch() {
        let cache = TtlCache::new(Duration::from_millis(10));
        let calls = AtomicUsize::new(0);

        let fetch = || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok("fresh".to_string())
        };

        cache.get_or_fetch("octocat", fetch).await.unwrap();
        tokio::time::sleep(Duration::from_millis(25)).await;
        cache.get_or_fetch("octocat", fetch).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn failed_fetch_is_not_cached() {
        let cache: TtlCache<u32> = TtlCache::new(Duration::from_secs(60));
        let calls = AtomicUsize::new(0);

        let err = cache
            .get_or_fetch("octocat", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                anyhow::bail!("upstream unavailable")
            })
            .await;
        assert!(err.is_err());

        // The failure must not block the retry, and the retry's value sticks.
        let value = cache
            .get_or_fetch("octocat", || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(7)
            })
            .await
            .unwrap();
        assert_eq!(value, 7);
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let value = cache
            .get_or_fetch("octocat", || async { Ok(99) })
            .await
            .unwrap();
        assert_eq!(value, 7, "live entry should short-circuit the fetch");
    }

    #[tokio::test]
    async fn distinct_keys_have_independent_entries() {
        let cache = TtlCache::new(Duration::from_secs(60));

        let a = cache.get_or_fetch("a", || async { Ok(1u32) }).await.unwrap();
        let b = cache.get_or_fetch("b", || async { Ok(2u32) }).await.unwrap();

        assert_eq!((a, b), (1, 2));
    }

    #[tokio::test]
    async fn concurrent_callers_for_one_key_share_a_single_fetch() {
        let cache: Arc<TtlCache<u32>> = Arc::new(TtlCache::new(Duration::from_secs(60)));
        let calls = Arc::new(AtomicUsize::new(0));

        let caller = |cache: Arc<TtlCache<u32>>, calls: Arc<AtomicUsize>| {
            tokio::spawn(async move {
                cache
                    .get_or_fetch("octocat", || async {
                        calls.fetch_add(1, Ordering::SeqCst);
                        tokio::time::sleep(Duration::from_millis(50)).await;
                        Ok(42)
                    })
                    .await
                    .unwrap()
            })
        };

        let first = caller(cache.clone(), calls.clone());
        let second = caller(cache.clone(), calls.clone());

        assert_eq!(first.await.unwrap(), 42);
        assert_eq!(second.await.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn in_flight_fetch_does_not_block_other_keys() {
        let cache: Arc<TtlCache<u32>> = Arc::new(TtlCache::new(Duration::from_secs(60)));
        let (release, released) = tokio::sync::oneshot::channel::<()>();

        let slow = {
            let cache = cache.clone();
            tokio::spawn(async move {
                cache
                    .get_or_fetch("a", || async {
                        released.await.ok();
                        Ok(1)
                    })
                    .await
                    .unwrap()
            })
        };

        // Resolves while the fetch for "a" is still parked, then unparks it.
        let b = cache.get_or_fetch("b", || async { Ok(2) }).await.unwrap();
        release.send(()).ok();

        assert_eq!((slow.await.unwrap(), b), (1, 2));
    }
}
