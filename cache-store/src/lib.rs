#![deny(clippy::all)]

use async_trait::async_trait;
use bytes::Bytes;
use shared::Result;
use std::time::Duration;

mod entry;
mod memory_store;
mod redis_store;

pub use entry::CacheEntry;
pub use memory_store::MemoryStore;
pub use redis_store::RedisStore;

/// Port for the key/value store backing the response cache.
///
/// Keys are request targets (path + query, verbatim), values are opaque
/// serialized snapshots. The store enforces expiry itself; callers never
/// see an expired value.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Fetch a value. `Ok(None)` means the store reports absence (missing
    /// or expired); a transport failure is an `Err`.
    async fn get(&self, key: &str) -> Result<Option<Bytes>>;

    /// Store a value that expires after `ttl`.
    async fn set(&self, key: &str, value: Bytes, ttl: Duration) -> Result<()>;

    /// Remove a value. Deleting a missing key is a no-op.
    async fn delete(&self, key: &str) -> Result<()>;
}
