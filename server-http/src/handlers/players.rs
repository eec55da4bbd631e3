use crate::error::ApiError;
use crate::models::{ListPlayersQuery, NewPlayer, Player, PlayerCreated, PlayerUpdate};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

const MAX_PAGE_LIMIT: u32 = 100;

/// POST /players
pub async fn create_player(
    State(state): State<AppState>,
    Json(req): Json<NewPlayer>,
) -> Result<Json<PlayerCreated>, ApiError> {
    // Ids come from the store, never from the caller.
    if req.player_id.unwrap_or(0) != 0 {
        return Err(ApiError::IdSetOnCreate);
    }

    let player_id = state
        .db
        .create_player(req.display_name, req.number, req.position);
    info!(player_id, "player created");

    Ok(Json(PlayerCreated { player_id }))
}

/// GET /players
pub async fn list_players(
    State(state): State<AppState>,
    Query(query): Query<ListPlayersQuery>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let limit = query.limit.unwrap_or(MAX_PAGE_LIMIT);
    if limit > MAX_PAGE_LIMIT {
        return Err(ApiError::LimitTooLarge);
    }
    let page = query.page.unwrap_or(1).max(1);
    let offset = (page as usize - 1) * limit as usize;

    let players = state.db.list_players(query.position, offset, limit as usize);
    Ok(Json(players))
}

/// PUT /players/{player_id}
pub async fn update_player(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
    Json(update): Json<PlayerUpdate>,
) -> Result<StatusCode, ApiError> {
    state.db.update_player(player_id, update)?;
    Ok(StatusCode::OK)
}

/// DELETE /players/{player_id}
pub async fn delete_player(
    State(state): State<AppState>,
    Path(player_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.db.delete_player(player_id)?;
    info!(player_id, "player deleted");
    Ok(StatusCode::OK)
}
