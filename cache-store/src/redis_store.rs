use crate::CacheStore;
use async_trait::async_trait;
use bytes::Bytes;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use shared::{Error, Result};
use std::time::Duration;
use tracing::info;

/// Redis-backed cache store. Expiry is enforced server-side via `SET EX`.
///
/// The multiplexed connection is cheap to clone; every worker shares the
/// same underlying socket without in-process locking.
#[derive(Clone)]
pub struct RedisStore {
    conn: MultiplexedConnection,
}

impl RedisStore {
    /// Connect to the given redis URL and ping the instance, so a
    /// misconfigured deployment fails at startup rather than on the first
    /// cached request.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = redis::Client::open(url).map_err(store_error)?;
        let mut conn = client
            .get_multiplexed_tokio_connection()
            .await
            .map_err(store_error)?;

        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .map_err(store_error)?;

        info!(url, "connected to redis");
        Ok(Self { conn })
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<Bytes>> {
        let mut conn = self.conn.clone();
        let value: Option<Vec<u8>> = conn.get(key).await.map_err(store_error)?;
        Ok(value.map(Bytes::from))
    }

    async fn set(&self, key: &str, value: Bytes, ttl: Duration) -> Result<()> {
        // SETEX rejects a zero expiry; sub-second TTLs round up.
        let seconds = ttl.as_secs().max(1) as usize;
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(key, value.as_ref(), seconds)
            .await
            .map_err(store_error)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await.map_err(store_error)?;
        Ok(())
    }
}

fn store_error(err: redis::RedisError) -> Error {
    Error::Store(err.to_string())
}
