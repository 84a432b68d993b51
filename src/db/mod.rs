use async_trait::async_trait;
use crate::models::{BanRow, PlayerRow, TeamRow};

mod postgres;
#[cfg(test)]
pub mod memory;

pub use postgres::PgDatabase;

/// Read-only access to the league tables. Every method is one filtered select.
#[async_trait]
pub trait Database: Send + Sync {
    // Player queries
    async fn player_by_roblox_id(&self, roblox_user_id: i64) -> Result<Option<PlayerRow>, sqlx::Error>;

    async fn all_players(&self) -> Result<Vec<PlayerRow>, sqlx::Error>;

    // Ban queries, active rows only
    async fn active_ban(&self, roblox_user_id: i64) -> Result<Option<BanRow>, sqlx::Error>;

    async fn active_player_blacklist_entry(&self, roblox_user_id: i64) -> Result<Option<BanRow>, sqlx::Error>;

    async fn active_player_blacklist(&self) -> Result<Vec<BanRow>, sqlx::Error>;

    async fn active_league_blacklist(&self, league_group_id: i64) -> Result<Vec<BanRow>, sqlx::Error>;

    /// Group id of every active league blacklist row, duplicates included, in row order
    async fn active_league_group_ids(&self) -> Result<Vec<i64>, sqlx::Error>;

    // Team queries
    async fn all_teams(&self) -> Result<Vec<TeamRow>, sqlx::Error>;

    /// Case-insensitive match on team_name
    async fn team_by_name(&self, team_name: &str) -> Result<Option<TeamRow>, sqlx::Error>;

    async fn team_by_manager(&self, manager_id: &str) -> Result<Option<TeamRow>, sqlx::Error>;
}
