pub mod cache;
pub mod invalidate;

pub use cache::{response_cache, CachePolicy};
pub use invalidate::{invalidate, InvalidatePolicy};

use axum::http::Uri;

/// Cache key: the request target verbatim, path plus query string. No
/// normalization, so targets differing only in query parameters address
/// distinct entries. Mutating routes must share their path with the read
/// route they invalidate.
pub(crate) fn cache_key(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|target| target.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}
