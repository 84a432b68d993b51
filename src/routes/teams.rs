use axum::{extract::State, response::Json};
use crate::error::ApiError;
use crate::models::{ApiResponse, ListResponse, TeamInfo};
use crate::routes::NamePath;
use crate::state::AppState;

const TEAM_NOT_FOUND: &str = "Team not found";

// GET /api/teams - List all teams
pub async fn get_teams(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<TeamInfo>>, ApiError> {
    let teams = state
        .db()
        .all_teams()
        .await
        .map_err(ApiError::query("fetching teams"))?;

    let data = teams.iter().map(|t| t.to_team_info()).collect();

    Ok(Json(ListResponse::ok(data)))
}

// GET /api/teams/{name} - Team by name, any letter case.
// Unlike players, a missing team is a 404.
pub async fn get_team_by_name(
    State(state): State<AppState>,
    NamePath(team_name): NamePath,
) -> Result<Json<ApiResponse<TeamInfo>>, ApiError> {
    let team = state
        .db()
        .team_by_name(&team_name)
        .await
        .map_err(ApiError::query("fetching team"))?
        .ok_or(ApiError::NotFound(TEAM_NOT_FOUND))?;

    Ok(Json(ApiResponse::ok(team.to_team_info())))
}

// GET /api/teams/manager/{manager_id} - Team run by a manager
pub async fn get_team_by_manager(
    State(state): State<AppState>,
    NamePath(manager_id): NamePath,
) -> Result<Json<ApiResponse<TeamInfo>>, ApiError> {
    let team = state
        .db()
        .team_by_manager(&manager_id)
        .await
        .map_err(ApiError::query("fetching team by manager"))?
        .ok_or(ApiError::NotFound(TEAM_NOT_FOUND))?;

    Ok(Json(ApiResponse::ok(team.to_team_info())))
}
