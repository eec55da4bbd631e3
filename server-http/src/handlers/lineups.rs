use crate::error::ApiError;
use crate::models::{
    GetLineupQuery, Lineup, LineupCreated, LineupMember, LineupUpdate, NewLineup,
};
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

/// POST /lineups
pub async fn create_lineup(
    State(state): State<AppState>,
    Json(req): Json<NewLineup>,
) -> Result<Json<LineupCreated>, ApiError> {
    if req.lineup_id.unwrap_or(0) != 0 {
        return Err(ApiError::IdSetOnCreate);
    }

    let lineup_id = state
        .db
        .create_lineup(req.formation, req.is_local.unwrap_or(false));
    info!(lineup_id, "lineup created");

    Ok(Json(LineupCreated { lineup_id }))
}

/// GET /lineups/{lineup_id}
pub async fn get_lineup(
    State(state): State<AppState>,
    Path(lineup_id): Path<i64>,
    Query(query): Query<GetLineupQuery>,
) -> Result<Json<Lineup>, ApiError> {
    let lineup = state.db.get_lineup(lineup_id, query.with_players)?;
    Ok(Json(lineup))
}

/// PUT /lineups/{lineup_id}
pub async fn update_lineup(
    State(state): State<AppState>,
    Path(lineup_id): Path<i64>,
    Json(update): Json<LineupUpdate>,
) -> Result<StatusCode, ApiError> {
    state.db.update_lineup(lineup_id, update)?;
    Ok(StatusCode::OK)
}

/// DELETE /lineups/{lineup_id}
pub async fn delete_lineup(
    State(state): State<AppState>,
    Path(lineup_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.db.delete_lineup(lineup_id)?;
    info!(lineup_id, "lineup deleted");
    Ok(StatusCode::OK)
}

/// POST /lineups/{lineup_id}/players
pub async fn add_lineup_player(
    State(state): State<AppState>,
    Path(lineup_id): Path<i64>,
    Json(member): Json<LineupMember>,
) -> Result<StatusCode, ApiError> {
    state.db.add_lineup_player(lineup_id, member.player_id)?;
    info!(lineup_id, player_id = member.player_id, "player added to lineup");
    Ok(StatusCode::OK)
}

/// DELETE /lineups/{lineup_id}/players
pub async fn remove_lineup_player(
    State(state): State<AppState>,
    Path(lineup_id): Path<i64>,
    Json(member): Json<LineupMember>,
) -> Result<StatusCode, ApiError> {
    state.db.remove_lineup_player(lineup_id, member.player_id)?;
    Ok(StatusCode::OK)
}
