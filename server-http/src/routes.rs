use crate::handlers;
use crate::middleware::{invalidate, response_cache, CachePolicy, InvalidatePolicy};
use crate::state::AppState;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;
use shared::config::Config;
use tower_http::trace::TraceLayer;

/// Build and configure the application router.
///
/// Cacheability is a static wiring decision made here, not something the
/// middleware derives from the method: reads that benefit from caching get
/// the response cache at their route's TTL, and the lineup mutations that
/// share a path with a cached read get invalidation.
pub fn build_router(state: AppState, config: &Config) -> Router {
    let invalidate_policy = InvalidatePolicy {
        store: state.cache.clone(),
        disabled: config.disable_cache,
    };

    let cached_reads = Router::new()
        .route("/players", get(handlers::list_players))
        .route_layer(from_fn_with_state(
            CachePolicy {
                store: state.cache.clone(),
                ttl: config.players_cache_ttl,
                disabled: config.disable_cache,
            },
            response_cache,
        ))
        .merge(
            Router::new()
                .route("/lineups/{lineup_id}", get(handlers::get_lineup))
                .route_layer(from_fn_with_state(
                    CachePolicy {
                        store: state.cache.clone(),
                        ttl: config.lineup_cache_ttl,
                        disabled: config.disable_cache,
                    },
                    response_cache,
                )),
        );

    let invalidating_writes = Router::new()
        .route(
            "/lineups/{lineup_id}",
            put(handlers::update_lineup).delete(handlers::delete_lineup),
        )
        .route_layer(from_fn_with_state(invalidate_policy, invalidate));

    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Player routes
        .route("/players", post(handlers::create_player))
        .route(
            "/players/{player_id}",
            put(handlers::update_player).delete(handlers::delete_player),
        )
        // Lineup routes
        .route("/lineups", post(handlers::create_lineup))
        .route(
            "/lineups/{lineup_id}/players",
            post(handlers::add_lineup_player).delete(handlers::remove_lineup_player),
        )
        .merge(cached_reads)
        .merge(invalidating_writes)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
