use crate::CacheStore;
use async_trait::async_trait;
use bytes::Bytes;
use moka::future::Cache;
use moka::Expiry;
use shared::Result;
use std::time::{Duration, Instant};

#[derive(Clone)]
struct Stored {
    value: Bytes,
    ttl: Duration,
}

/// Each entry carries the TTL it was stored with.
struct PerEntryTtl;

impl Expiry<String, Stored> for PerEntryTtl {
    fn expire_after_create(
        &self,
        _key: &String,
        stored: &Stored,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(stored.ttl)
    }

    // Overwrites restart the clock, like SET EX does.
    fn expire_after_update(
        &self,
        _key: &String,
        stored: &Stored,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(stored.ttl)
    }
}

/// In-process cache store with the same contract as [`crate::RedisStore`].
/// Used by the test suites and by deployments that run without redis.
pub struct MemoryStore {
    cache: Cache<String, Stored>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().expire_after(PerEntryTtl).build(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<Bytes>> {
        Ok(self.cache.get(key).await.map(|stored| stored.value))
    }

    async fn set(&self, key: &str, value: Bytes, ttl: Duration) -> Result<()> {
        self.cache
            .insert(key.to_string(), Stored { value, ttl })
            .await;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.cache.remove(key).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test]
    async fn set_and_get() {
        let store = MemoryStore::new();
        store
            .set("/players", Bytes::from_static(b"value"), Duration::from_secs(5))
            .await
            .unwrap();

        let value = store.get("/players").await.unwrap();
        assert_eq!(value, Some(Bytes::from_static(b"value")));
    }

    #[tokio::test]
    async fn get_missing_reports_absence() {
        let store = MemoryStore::new();
        assert_eq!(store.get("/nothing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn entries_expire_after_their_own_ttl() {
        let store = MemoryStore::new();
        store
            .set("/short", Bytes::from_static(b"a"), Duration::from_millis(50))
            .await
            .unwrap();
        store
            .set("/long", Bytes::from_static(b"b"), Duration::from_secs(60))
            .await
            .unwrap();

        sleep(Duration::from_millis(100)).await;

        assert_eq!(store.get("/short").await.unwrap(), None);
        assert_eq!(store.get("/long").await.unwrap(), Some(Bytes::from_static(b"b")));
    }

    #[tokio::test]
    async fn delete_is_a_noop_for_missing_keys() {
        let store = MemoryStore::new();
        store.delete("/missing").await.unwrap();

        store
            .set("/present", Bytes::from_static(b"x"), Duration::from_secs(5))
            .await
            .unwrap();
        store.delete("/present").await.unwrap();
        assert_eq!(store.get("/present").await.unwrap(), None);
    }

    #[tokio::test]
    async fn overwrite_replaces_value() {
        let store = MemoryStore::new();
        store
            .set("/key", Bytes::from_static(b"old"), Duration::from_secs(5))
            .await
            .unwrap();
        store
            .set("/key", Bytes::from_static(b"new"), Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(store.get("/key").await.unwrap(), Some(Bytes::from_static(b"new")));
    }
}
