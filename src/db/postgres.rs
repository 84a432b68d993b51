use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use crate::config::Config;
use crate::models::{BanRow, BanType, PlayerRow, TeamRow};
use super::Database;

// The tables are owned by other systems. Numeric columns are cast to int8 and
// id-like columns to text so the rows decode whatever integer width or id type
// the schema uses.

const PLAYER_BY_ID: &str = r#"
    SELECT roblox_user_id::int8 AS roblox_user_id, roblox_username, discord_id::text AS discord_id,
           class, team, wage::int8 AS wage, cup_tied, penalty::int8 AS penalty, role
    FROM players
    WHERE roblox_user_id = $1
    LIMIT 1"#;

const ALL_PLAYERS: &str = r#"
    SELECT roblox_user_id::int8 AS roblox_user_id, roblox_username, discord_id::text AS discord_id,
           class, team, wage::int8 AS wage, cup_tied, penalty::int8 AS penalty, role
    FROM players"#;

const ACTIVE_BAN: &str = r#"
    SELECT id::int8 AS id, roblox_user_id::int8 AS roblox_user_id, roblox_username, ban_type, reason,
           expires_at, bail_amount::int8 AS bail_amount, is_active, discord_id::text AS discord_id,
           league_group_id::int8 AS league_group_id
    FROM bans
    WHERE roblox_user_id = $1 AND is_active = true
    LIMIT 1"#;

const ACTIVE_PLAYER_BLACKLIST_ENTRY: &str = r#"
    SELECT id::int8 AS id, roblox_user_id::int8 AS roblox_user_id, roblox_username, ban_type, reason,
           expires_at, bail_amount::int8 AS bail_amount, is_active, discord_id::text AS discord_id,
           league_group_id::int8 AS league_group_id
    FROM bans
    WHERE roblox_user_id = $1 AND ban_type = $2 AND is_active = true
    LIMIT 1"#;

const ACTIVE_PLAYER_BLACKLIST: &str = r#"
    SELECT id::int8 AS id, roblox_user_id::int8 AS roblox_user_id, roblox_username, ban_type, reason,
           expires_at, bail_amount::int8 AS bail_amount, is_active, discord_id::text AS discord_id,
           league_group_id::int8 AS league_group_id
    FROM bans
    WHERE ban_type = $1 AND is_active = true"#;

const ACTIVE_LEAGUE_BLACKLIST: &str = r#"
    SELECT id::int8 AS id, roblox_user_id::int8 AS roblox_user_id, roblox_username, ban_type, reason,
           expires_at, bail_amount::int8 AS bail_amount, is_active, discord_id::text AS discord_id,
           league_group_id::int8 AS league_group_id
    FROM bans
    WHERE ban_type = $1 AND league_group_id = $2 AND is_active = true"#;

const ACTIVE_LEAGUE_GROUP_IDS: &str = r#"
    SELECT league_group_id::int8 AS league_group_id
    FROM bans
    WHERE ban_type = $1 AND is_active = true AND league_group_id IS NOT NULL"#;

const ALL_TEAMS: &str = r#"
    SELECT team_name, abbreviation, manager_id::text AS manager_id, created_at
    FROM teams"#;

// ILIKE, so "red lions" finds "Red Lions"
const TEAM_BY_NAME: &str = r#"
    SELECT team_name, abbreviation, manager_id::text AS manager_id, created_at
    FROM teams
    WHERE team_name ILIKE $1
    LIMIT 1"#;

// Compared as text so a bigint manager_id column still matches the path segment
const TEAM_BY_MANAGER: &str = r#"
    SELECT team_name, abbreviation, manager_id::text AS manager_id, created_at
    FROM teams
    WHERE manager_id::text = $1
    LIMIT 1"#;

/// Database handle backed by a Postgres connection pool
#[derive(Clone)]
pub struct PgDatabase {
    pool: PgPool,
}

impl PgDatabase {
    /// Connect eagerly so a bad DATABASE_URL fails at startup, not on the first request.
    pub async fn connect(config: &Config) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect(&config.database_url)
            .await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl Database for PgDatabase {
    async fn player_by_roblox_id(&self, roblox_user_id: i64) -> Result<Option<PlayerRow>, sqlx::Error> {
        sqlx::query_as::<_, PlayerRow>(PLAYER_BY_ID)
            .bind(roblox_user_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn all_players(&self) -> Result<Vec<PlayerRow>, sqlx::Error> {
        sqlx::query_as::<_, PlayerRow>(ALL_PLAYERS)
            .fetch_all(&self.pool)
            .await
    }

    async fn active_ban(&self, roblox_user_id: i64) -> Result<Option<BanRow>, sqlx::Error> {
        sqlx::query_as::<_, BanRow>(ACTIVE_BAN)
            .bind(roblox_user_id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn active_player_blacklist_entry(&self, roblox_user_id: i64) -> Result<Option<BanRow>, sqlx::Error> {
        sqlx::query_as::<_, BanRow>(ACTIVE_PLAYER_BLACKLIST_ENTRY)
            .bind(roblox_user_id)
            .bind(BanType::BlacklistPlayer.as_str())
            .fetch_optional(&self.pool)
            .await
    }

    async fn active_player_blacklist(&self) -> Result<Vec<BanRow>, sqlx::Error> {
        sqlx::query_as::<_, BanRow>(ACTIVE_PLAYER_BLACKLIST)
            .bind(BanType::BlacklistPlayer.as_str())
            .fetch_all(&self.pool)
            .await
    }

    async fn active_league_blacklist(&self, league_group_id: i64) -> Result<Vec<BanRow>, sqlx::Error> {
        sqlx::query_as::<_, BanRow>(ACTIVE_LEAGUE_BLACKLIST)
            .bind(BanType::BlacklistLeague.as_str())
            .bind(league_group_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn active_league_group_ids(&self) -> Result<Vec<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(ACTIVE_LEAGUE_GROUP_IDS)
            .bind(BanType::BlacklistLeague.as_str())
            .fetch_all(&self.pool)
            .await
    }

    async fn all_teams(&self) -> Result<Vec<TeamRow>, sqlx::Error> {
        sqlx::query_as::<_, TeamRow>(ALL_TEAMS)
            .fetch_all(&self.pool)
            .await
    }

    async fn team_by_name(&self, team_name: &str) -> Result<Option<TeamRow>, sqlx::Error> {
        sqlx::query_as::<_, TeamRow>(TEAM_BY_NAME)
            .bind(team_name)
            .fetch_optional(&self.pool)
            .await
    }

    async fn team_by_manager(&self, manager_id: &str) -> Result<Option<TeamRow>, sqlx::Error> {
        sqlx::query_as::<_, TeamRow>(TEAM_BY_MANAGER)
            .bind(manager_id)
            .fetch_optional(&self.pool)
            .await
    }
}
