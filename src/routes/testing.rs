use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use crate::db::memory::MemoryDatabase;
use crate::models::{BanRow, BanType, PlayerRow, TeamRow};
use crate::state::AppState;

pub fn app(db: MemoryDatabase) -> Router {
    super::router(AppState::new(db))
}

/// Send a GET and decode the JSON body
pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}

pub fn ban(id: i64, roblox_user_id: i64, ban_type: BanType, is_active: bool) -> BanRow {
    BanRow {
        id,
        roblox_user_id: Some(roblox_user_id),
        roblox_username: Some(format!("user{roblox_user_id}")),
        ban_type: Some(ban_type.as_str().to_string()),
        reason: Some("Exploiting".to_string()),
        is_active: Some(is_active),
        ..Default::default()
    }
}

pub fn league_ban(id: i64, roblox_user_id: i64, league_group_id: i64, is_active: bool) -> BanRow {
    BanRow {
        league_group_id: Some(league_group_id),
        ..ban(id, roblox_user_id, BanType::BlacklistLeague, is_active)
    }
}

/// A small league: two players, a mix of bans and two teams
pub fn league() -> MemoryDatabase {
    MemoryDatabase {
        players: vec![
            PlayerRow {
                roblox_user_id: 100,
                roblox_username: Some("striker100".to_string()),
                discord_id: Some("555000111222333444".to_string()),
                class: Some("Elite".to_string()),
                team: Some("Red Lions".to_string()),
                wage: Some(2500),
                cup_tied: Some(true),
                penalty: Some(1),
                role: Some("Manager".to_string()),
            },
            PlayerRow {
                roblox_user_id: 200,
                ..Default::default()
            },
        ],
        bans: vec![
            ban(1, 100, BanType::Ban, false),
            ban(2, 300, BanType::Ban, true),
            ban(3, 400, BanType::BlacklistPlayer, true),
            ban(4, 500, BanType::BlacklistPlayer, false),
            league_ban(5, 600, 77, true),
            league_ban(6, 601, 88, true),
            league_ban(7, 602, 77, true),
            league_ban(8, 603, 99, false),
        ],
        teams: vec![
            TeamRow {
                team_name: "Red Lions".to_string(),
                abbreviation: Some("RL".to_string()),
                manager_id: Some("1001".to_string()),
                created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single(),
            },
            TeamRow {
                team_name: "Blue Hawks".to_string(),
                abbreviation: None,
                manager_id: None,
                created_at: None,
            },
        ],
        failure: None,
    }
}
