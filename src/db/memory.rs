//! In-memory stand-in for the hosted database, used by handler tests.

use async_trait::async_trait;
use crate::models::{BanRow, BanType, PlayerRow, TeamRow};
use super::Database;

#[derive(Debug, Default, Clone)]
pub struct MemoryDatabase {
    pub players: Vec<PlayerRow>,
    pub bans: Vec<BanRow>,
    pub teams: Vec<TeamRow>,
    /// When set, every query fails with this message
    pub failure: Option<String>,
}

impl MemoryDatabase {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), sqlx::Error> {
        match &self.failure {
            Some(message) => Err(sqlx::Error::Protocol(message.clone())),
            None => Ok(()),
        }
    }

    fn active_bans(&self) -> impl Iterator<Item = &BanRow> {
        self.bans.iter().filter(|ban| ban.is_active == Some(true))
    }

    fn active_of_type(&self, ban_type: BanType) -> impl Iterator<Item = &BanRow> {
        self.active_bans()
            .filter(move |ban| ban.ban_type.as_deref() == Some(ban_type.as_str()))
    }
}

#[async_trait]
impl Database for MemoryDatabase {
    async fn player_by_roblox_id(&self, roblox_user_id: i64) -> Result<Option<PlayerRow>, sqlx::Error> {
        self.check()?;
        Ok(self
            .players
            .iter()
            .find(|p| p.roblox_user_id == roblox_user_id)
            .cloned())
    }

    async fn all_players(&self) -> Result<Vec<PlayerRow>, sqlx::Error> {
        self.check()?;
        Ok(self.players.clone())
    }

    async fn active_ban(&self, roblox_user_id: i64) -> Result<Option<BanRow>, sqlx::Error> {
        self.check()?;
        Ok(self
            .active_bans()
            .find(|ban| ban.roblox_user_id == Some(roblox_user_id))
            .cloned())
    }

    async fn active_player_blacklist_entry(&self, roblox_user_id: i64) -> Result<Option<BanRow>, sqlx::Error> {
        self.check()?;
        Ok(self
            .active_of_type(BanType::BlacklistPlayer)
            .find(|ban| ban.roblox_user_id == Some(roblox_user_id))
            .cloned())
    }

    async fn active_player_blacklist(&self) -> Result<Vec<BanRow>, sqlx::Error> {
        self.check()?;
        Ok(self.active_of_type(BanType::BlacklistPlayer).cloned().collect())
    }

    async fn active_league_blacklist(&self, league_group_id: i64) -> Result<Vec<BanRow>, sqlx::Error> {
        self.check()?;
        Ok(self
            .active_of_type(BanType::BlacklistLeague)
            .filter(|ban| ban.league_group_id == Some(league_group_id))
            .cloned()
            .collect())
    }

    async fn active_league_group_ids(&self) -> Result<Vec<i64>, sqlx::Error> {
        self.check()?;
        Ok(self
            .active_of_type(BanType::BlacklistLeague)
            .filter_map(|ban| ban.league_group_id)
            .collect())
    }

    async fn all_teams(&self) -> Result<Vec<TeamRow>, sqlx::Error> {
        self.check()?;
        Ok(self.teams.clone())
    }

    async fn team_by_name(&self, team_name: &str) -> Result<Option<TeamRow>, sqlx::Error> {
        self.check()?;
        Ok(self
            .teams
            .iter()
            .find(|t| ilike(&t.team_name, team_name))
            .cloned())
    }

    async fn team_by_manager(&self, manager_id: &str) -> Result<Option<TeamRow>, sqlx::Error> {
        self.check()?;
        Ok(self
            .teams
            .iter()
            .find(|t| t.manager_id.as_deref() == Some(manager_id))
            .cloned())
    }
}

/// Postgres `value ILIKE pattern`: `%` matches any run, `_` one character,
/// a backslash escapes the next character, comparison is case-insensitive.
fn ilike(value: &str, pattern: &str) -> bool {
    let value: Vec<char> = value.to_lowercase().chars().collect();
    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    like(&value, &pattern)
}

fn like(value: &[char], pattern: &[char]) -> bool {
    match pattern.split_first() {
        None => value.is_empty(),
        Some(('%', rest)) => (0..=value.len()).any(|skip| like(&value[skip..], rest)),
        Some(('_', rest)) => !value.is_empty() && like(&value[1..], rest),
        Some(('\\', [escaped, rest @ ..])) => {
            value.first() == Some(escaped) && like(&value[1..], rest)
        }
        Some((c, rest)) => value.first() == Some(c) && like(&value[1..], rest),
    }
}

#[cfg(test)]
mod tests {
    use super::ilike;

    #[test]
    fn ilike_ignores_case_including_non_ascii() {
        assert!(ilike("Red Lions", "red lions"));
        assert!(ilike("Årets Lag", "ÅRETS LAG"));
        assert!(!ilike("Red Lions", "Red Lion"));
    }

    #[test]
    fn ilike_wildcards() {
        assert!(ilike("Red Lions", "%"));
        assert!(ilike("Red Lions", "r_d%"));
        assert!(ilike("Red Lions", "%LIONS"));
        assert!(!ilike("Red Lions", "_"));
        assert!(!ilike("", "_"));
    }

    #[test]
    fn ilike_escaped_wildcard_is_literal() {
        assert!(ilike("100% Club", "100\\% club"));
        assert!(!ilike("1000 Club", "100\\% club"));
    }
}
