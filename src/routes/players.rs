use axum::{extract::State, response::Json};
use crate::error::ApiError;
use crate::models::{ApiResponse, ListResponse, PlayerData, PlayerSummary};
use crate::routes::IdPath;
use crate::state::AppState;

// GET /api/player/{id} - Player profile by Roblox user id.
// Unknown players get the default profile, not a 404.
pub async fn get_player(
    State(state): State<AppState>,
    IdPath(roblox_user_id): IdPath,
) -> Result<Json<ApiResponse<PlayerData>>, ApiError> {
    let player = state
        .db()
        .player_by_roblox_id(roblox_user_id)
        .await
        .map_err(ApiError::query("fetching player data"))?;

    let data = player.map(|p| p.to_player_data()).unwrap_or_default();

    Ok(Json(ApiResponse::ok(data)))
}

// GET /api/players - List all players
pub async fn get_players(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<PlayerSummary>>, ApiError> {
    let players = state
        .db()
        .all_players()
        .await
        .map_err(ApiError::query("fetching players"))?;

    let data = players.iter().map(|p| p.to_summary()).collect();

    Ok(Json(ListResponse::ok(data)))
}
