use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use crate::error::ApiError;
use crate::state::AppState;

pub mod bans;
pub mod blacklist;
pub mod health;
pub mod players;
pub mod teams;

#[cfg(test)]
pub(crate) mod testing;

/// Build the full application router around an already connected database.
pub fn router(state: AppState) -> Router {
    // Game clients and dashboards call from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "League API - v1.0" }))
        .route("/health", get(health::health_check))

        // Player endpoints
        .route("/api/player/{id}", get(players::get_player))
        .route("/api/players", get(players::get_players))

        // Ban endpoints
        .route("/api/bans/check/{id}", get(bans::check_ban))

        // Blacklist endpoints
        .route("/api/blacklist/check/{id}", get(blacklist::check_blacklist))
        .route("/api/blacklist/players", get(blacklist::get_blacklisted_players))
        .route("/api/blacklist/league/{group_id}", get(blacklist::get_league_blacklist))
        .route("/api/blacklist/league-groups", get(blacklist::get_league_groups))

        // Team endpoints
        .route("/api/teams", get(teams::get_teams))
        .route("/api/teams/{name}", get(teams::get_team_by_name))
        .route("/api/teams/manager/{manager_id}", get(teams::get_team_by_manager))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Integer path segment. A non-numeric segment is answered with the JSON error
/// envelope instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::InvalidPath(rejection.body_text()))?;

        Ok(IdPath(id))
    }
}

/// Text path segment, rejected with the JSON error envelope like `IdPath`.
#[derive(Debug, Clone)]
pub struct NamePath(pub String);

impl<S> FromRequestParts<S> for NamePath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(name) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::InvalidPath(rejection.body_text()))?;

        Ok(NamePath(name))
    }
}
