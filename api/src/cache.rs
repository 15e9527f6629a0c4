//! A small explicit TTL cache: one slot, lazy load, fixed expiry window.
//!
//! The hosting framework serializes renders, so a load racing another load is
//! not a concern here; the lock is only held while inspecting or storing the
//! slot, never across the loader future.

use std::future::Future;
use std::sync::Mutex;
use std::time::{Duration, Instant};

pub struct TtlCache<T> {
    ttl: Duration,
    slot: Mutex<Option<Entry<T>>>,
}

struct Entry<T> {
    loaded_at: Instant,
    value: T,
}

impl<T: Clone> TtlCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Returns the cached value while it is younger than the TTL; otherwise
    /// runs `load` and caches its result. Loader errors leave the slot as-is.
    pub async fn get_or_load<E, F, Fut>(&self, load: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.fresh_value() {
            return Ok(value);
        }
        let value = load().await?;
        self.store(value.clone());
        Ok(value)
    }

    /// Drops the cached value so the next access reloads.
    pub fn invalidate(&self) {
        *self.slot.lock().expect("cache lock poisoned") = None;
    }

    fn fresh_value(&self) -> Option<T> {
        let slot = self.slot.lock().expect("cache lock poisoned");
        slot.as_ref()
            .filter(|entry| entry.loaded_at.elapsed() < self.ttl)
            .map(|entry| entry.value.clone())
    }

    fn store(&self, value: T) {
        *self.slot.lock().expect("cache lock poisoned") = Some(Entry {
            loaded_at: Instant::now(),
            value,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counted_load(counter: &AtomicUsize) -> impl Future<Output = Result<usize, ()>> + '_ {
        async move { Ok(counter.fetch_add(1, Ordering::SeqCst) + 1) }
    }

    #[test]
    fn second_access_within_the_window_does_not_reload() {
        let cache = TtlCache::new(Duration::from_secs(3600));
        let loads = AtomicUsize::new(0);

        let first = futures::executor::block_on(cache.get_or_load(|| counted_load(&loads)));
        let second = futures::executor::block_on(cache.get_or_load(|| counted_load(&loads)));

        assert_eq!(first, Ok(1));
        assert_eq!(second, Ok(1));
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn access_after_expiry_issues_exactly_one_new_load() {
        let cache = TtlCache::new(Duration::from_millis(5));
        let loads = AtomicUsize::new(0);

        let first = futures::executor::block_on(cache.get_or_load(|| counted_load(&loads)));
        std::thread::sleep(Duration::from_millis(20));
        let second = futures::executor::block_on(cache.get_or_load(|| counted_load(&loads)));
        let third = futures::executor::block_on(cache.get_or_load(|| counted_load(&loads)));

        assert_eq!(first, Ok(1));
        assert_eq!(second, Ok(2));
        assert_eq!(third, Ok(2));
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn invalidate_forces_a_reload() {
        let cache = TtlCache::new(Duration::from_secs(3600));
        let loads = AtomicUsize::new(0);

        let _ = futures::executor::block_on(cache.get_or_load(|| counted_load(&loads)));
        cache.invalidate();
        let reloaded = futures::executor::block_on(cache.get_or_load(|| counted_load(&loads)));

        assert_eq!(reloaded, Ok(2));
    }

    #[test]
    fn a_failed_load_is_not_cached() {
        let cache: TtlCache<usize> = TtlCache::new(Duration::from_secs(3600));
        let loads = AtomicUsize::new(0);

        let failed: Result<usize, &str> =
            futures::executor::block_on(cache.get_or_load(|| async { Err("table missing") }));
        assert_eq!(failed, Err("table missing"));

        let recovered = futures::executor::block_on(cache.get_or_load(|| counted_load(&loads)));
        assert_eq!(recovered, Ok(1));
    }
}
