use super::cache_key;
use crate::error::ApiError;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use cache_store::{CacheEntry, CacheStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Per-route wiring for the read-through response cache.
#[derive(Clone)]
pub struct CachePolicy {
    pub store: Arc<dyn CacheStore>,
    pub ttl: Duration,
    pub disabled: bool,
}

/// Read-through response cache middleware.
///
/// On a hit the stored status and body are written back verbatim and the
/// handler never runs. On a miss the handler runs, the full response body
/// is captured, and the snapshot is stored under the request target with
/// the route's TTL. Only successful responses are stored: a failed handler
/// produced no view worth serving again, and caching its error would pin
/// it for the TTL even after the underlying record appears. Population is
/// best-effort: the response has already been produced, so a store-write
/// failure is logged and swallowed. Store reads and entry decoding fail
/// closed.
pub async fn response_cache(
    State(policy): State<CachePolicy>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    if policy.disabled {
        return Ok(next.run(request).await);
    }

    let key = cache_key(request.uri());

    if let Some(raw) = policy.store.get(&key).await? {
        let entry = CacheEntry::from_bytes(&raw)?;
        debug!(key = %key, "cache hit");

        let status = StatusCode::from_u16(entry.code)
            .map_err(|_| ApiError::Internal(format!("cached status code {} is invalid", entry.code)))?;
        return Ok(Response::builder()
            .status(status)
            .body(Body::from(entry.body))
            .map_err(|err| ApiError::Internal(err.to_string()))?);
    }

    let response = next.run(request).await;
    if !response.status().is_success() {
        return Ok(response);
    }

    // Capture exactly the bytes the client will receive, then hand the
    // client an identical response so delivery never depends on the store.
    let (parts, body) = response.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    let entry = CacheEntry::new(parts.status.as_u16(), body.to_vec());
    match entry.to_bytes() {
        Ok(raw) => {
            if let Err(err) = policy.store.set(&key, raw, policy.ttl).await {
                warn!(key = %key, error = %err, "failed to populate response cache");
            }
        }
        Err(err) => warn!(key = %key, error = %err, "failed to encode cache entry"),
    }

    Ok(Response::from_parts(parts, Body::from(body)))
}
