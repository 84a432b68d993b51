use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Row from the players table
#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct PlayerRow {
    pub roblox_user_id: i64,
    pub roblox_username: Option<String>,
    pub discord_id: Option<String>,
    pub class: Option<String>,
    pub team: Option<String>,
    pub wage: Option<i64>,
    pub cup_tied: Option<bool>,
    pub penalty: Option<i64>,
    pub role: Option<String>,
}

/// Player profile in the shape the game client reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerData {
    pub class: String,
    pub team: String,
    pub wage: i64,
    #[serde(rename = "Cuptied")]
    pub cup_tied: bool,
    pub penalty: i64,
    pub role_team: String,
}

impl Default for PlayerData {
    fn default() -> Self {
        Self {
            class: "Unknown".to_string(),
            team: "FREE-AGENT".to_string(),
            wage: 0,
            cup_tied: false,
            penalty: 0,
            role_team: "Player".to_string(),
        }
    }
}

/// Entry of the player listing: identity columns plus the profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub roblox_user_id: i64,
    pub roblox_username: String,
    pub discord_id: Option<String>,
    #[serde(flatten)]
    pub profile: PlayerData,
}

impl PlayerRow {
    /// Fill every missing column with its default
    pub fn to_player_data(&self) -> PlayerData {
        let defaults = PlayerData::default();
        PlayerData {
            class: non_empty(&self.class).unwrap_or(defaults.class),
            team: non_empty(&self.team).unwrap_or(defaults.team),
            wage: self.wage.unwrap_or(defaults.wage),
            cup_tied: self.cup_tied.unwrap_or(defaults.cup_tied),
            penalty: self.penalty.unwrap_or(defaults.penalty),
            role_team: non_empty(&self.role).unwrap_or(defaults.role_team),
        }
    }

    pub fn to_summary(&self) -> PlayerSummary {
        PlayerSummary {
            roblox_user_id: self.roblox_user_id,
            roblox_username: non_empty(&self.roblox_username).unwrap_or_else(|| "Unknown".to_string()),
            discord_id: self.discord_id.clone(),
            profile: self.to_player_data(),
        }
    }
}

// Empty strings count as missing, same as NULL
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|s| !s.is_empty()).map(str::to_string)
}

/// Kinds of rows stored in the bans table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BanType {
    Ban,
    BlacklistPlayer,
    BlacklistLeague,
}

impl BanType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BanType::Ban => "ban",
            BanType::BlacklistPlayer => "blacklist_player",
            BanType::BlacklistLeague => "blacklist_league",
        }
    }
}

/// Row from the bans table
#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct BanRow {
    pub id: i64,
    pub roblox_user_id: Option<i64>,
    pub roblox_username: Option<String>,
    pub ban_type: Option<String>,
    pub reason: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub bail_amount: Option<i64>,
    pub is_active: Option<bool>,
    pub discord_id: Option<String>,
    pub league_group_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BanInfo {
    pub id: i64,
    pub roblox_user_id: Option<i64>,
    pub roblox_username: Option<String>,
    pub ban_type: Option<String>,
    pub reason: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub bail_amount: Option<i64>,
    pub is_active: bool,
    pub discord_id: Option<String>,
    pub league_group_id: Option<i64>,
}

impl BanRow {
    pub fn to_ban_info(&self) -> BanInfo {
        BanInfo {
            id: self.id,
            roblox_user_id: self.roblox_user_id,
            roblox_username: self.roblox_username.clone(),
            ban_type: self.ban_type.clone(),
            reason: self.reason.clone(),
            expires_at: self.expires_at,
            bail_amount: self.bail_amount,
            is_active: self.is_active.unwrap_or(false),
            discord_id: self.discord_id.clone(),
            league_group_id: self.league_group_id,
        }
    }
}

/// Row from the teams table
#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct TeamRow {
    pub team_name: String,
    pub abbreviation: Option<String>,
    pub manager_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub team_name: String,
    pub abbreviation: Option<String>,
    pub manager_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl TeamRow {
    pub fn to_team_info(&self) -> TeamInfo {
        TeamInfo {
            team_name: self.team_name.clone(),
            abbreviation: self.abbreviation.clone(),
            manager_id: self.manager_id.clone(),
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueGroup {
    pub league_group_id: i64,
}

/// Keep the first occurrence of each group id, in order of appearance
pub fn dedup_league_groups<I>(ids: I) -> Vec<LeagueGroup>
where
    I: IntoIterator<Item = i64>,
{
    let mut seen = HashSet::new();
    ids.into_iter()
        .filter(|id| seen.insert(*id))
        .map(|league_group_id| LeagueGroup { league_group_id })
        .collect()
}

// Response envelopes

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, data }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub data: Vec<T>,
    pub count: usize,
}

impl<T> ListResponse<T> {
    pub fn ok(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BanCheckResponse {
    pub success: bool,
    pub is_banned: bool,
    pub data: Option<BanInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BlacklistCheckResponse {
    pub success: bool,
    pub is_blacklisted: bool,
    pub data: Option<BanInfo>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LeagueBlacklistResponse {
    pub success: bool,
    pub league_group_id: i64,
    pub data: Vec<BanInfo>,
    pub count: usize,
}
