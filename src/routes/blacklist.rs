use axum::{extract::State, response::Json};
use crate::error::ApiError;
use crate::models::{
    dedup_league_groups, BanInfo, BlacklistCheckResponse, LeagueBlacklistResponse, LeagueGroup,
    ListResponse,
};
use crate::routes::IdPath;
use crate::state::AppState;

// GET /api/blacklist/check/{id} - Is this user on the player blacklist?
pub async fn check_blacklist(
    State(state): State<AppState>,
    IdPath(roblox_user_id): IdPath,
) -> Result<Json<BlacklistCheckResponse>, ApiError> {
    let entry = state
        .db()
        .active_player_blacklist_entry(roblox_user_id)
        .await
        .map_err(ApiError::query("checking blacklist status"))?;

    Ok(Json(BlacklistCheckResponse {
        success: true,
        is_blacklisted: entry.is_some(),
        data: entry.map(|b| b.to_ban_info()),
    }))
}

// GET /api/blacklist/players - Active player-scoped blacklist
pub async fn get_blacklisted_players(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<BanInfo>>, ApiError> {
    let entries = state
        .db()
        .active_player_blacklist()
        .await
        .map_err(ApiError::query("fetching blacklisted players"))?;

    let data = entries.iter().map(|b| b.to_ban_info()).collect();

    Ok(Json(ListResponse::ok(data)))
}

// GET /api/blacklist/league/{group_id} - Active blacklist for one league group
pub async fn get_league_blacklist(
    State(state): State<AppState>,
    IdPath(league_group_id): IdPath,
) -> Result<Json<LeagueBlacklistResponse>, ApiError> {
    let entries = state
        .db()
        .active_league_blacklist(league_group_id)
        .await
        .map_err(ApiError::query("fetching league blacklist"))?;

    let data: Vec<BanInfo> = entries.iter().map(|b| b.to_ban_info()).collect();

    Ok(Json(LeagueBlacklistResponse {
        success: true,
        league_group_id,
        count: data.len(),
        data,
    }))
}

// GET /api/blacklist/league-groups - Groups with at least one active league blacklist entry
pub async fn get_league_groups(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<LeagueGroup>>, ApiError> {
    let ids = state
        .db()
        .active_league_group_ids()
        .await
        .map_err(ApiError::query("fetching league groups"))?;

    Ok(Json(ListResponse::ok(dedup_league_groups(ids))))
}
