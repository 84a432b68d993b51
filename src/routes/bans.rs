use axum::{extract::State, response::Json};
use crate::error::ApiError;
use crate::models::BanCheckResponse;
use crate::routes::IdPath;
use crate::state::AppState;

// GET /api/bans/check/{id} - Is this user under any active ban?
pub async fn check_ban(
    State(state): State<AppState>,
    IdPath(roblox_user_id): IdPath,
) -> Result<Json<BanCheckResponse>, ApiError> {
    let ban = state
        .db()
        .active_ban(roblox_user_id)
        .await
        .map_err(ApiError::query("checking ban status"))?;

    Ok(Json(BanCheckResponse {
        success: true,
        is_banned: ban.is_some(),
        data: ban.map(|b| b.to_ban_info()),
    }))
}
