//! League data model as seen by the export pipeline.
//!
//! These are built fresh from ESPN payloads for every export and never
//! persisted.

use crate::cli::types::{LeagueId, Season, TeamId};

/// A fantasy league for one season.
#[derive(Debug, Clone, PartialEq)]
pub struct League {
    pub id: LeagueId,
    pub season: Season,
    /// Display name (`settings.name`)
    pub name: String,
    /// Current scoring period, used when querying free agents
    pub scoring_period: Option<u16>,
    /// Teams ordered by ascending team id
    pub teams: Vec<Team>,
}

impl League {
    /// Total number of rostered players across all teams.
    pub fn rostered_player_count(&self) -> usize {
        self.teams.iter().map(|t| t.roster.len()).sum()
    }
}

/// A fantasy team and its current roster.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub roster: Vec<Player>,
}

/// A player, either rostered on a team or a free agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub pro_team: String,
    pub injury_status: String,
    /// Eligible lineup slot tags in ESPN order (e.g. `["1B", "UTIL", "BE"]`)
    pub eligible_slots: Vec<String>,
}
