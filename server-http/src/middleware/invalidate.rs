use super::cache_key;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use cache_store::CacheStore;
use std::sync::Arc;
use tracing::{debug, warn};

/// Per-route wiring for cache invalidation.
#[derive(Clone)]
pub struct InvalidatePolicy {
    pub store: Arc<dyn CacheStore>,
    pub disabled: bool,
}

/// Evicts the cached entry for the request target after a successful
/// mutation. An error response propagates unchanged and keeps the entry:
/// the mutation did not observably succeed, so the cached read view is
/// presumed still valid. Deleting a missing key is a no-op.
pub async fn invalidate(
    State(policy): State<InvalidatePolicy>,
    request: Request,
    next: Next,
) -> Response {
    if policy.disabled {
        return next.run(request).await;
    }

    let key = cache_key(request.uri());
    let response = next.run(request).await;

    if response.status().is_success() {
        match policy.store.delete(&key).await {
            Ok(()) => debug!(key = %key, "cache entry invalidated"),
            Err(err) => warn!(key = %key, error = %err, "failed to invalidate cache entry"),
        }
    }

    response
}
