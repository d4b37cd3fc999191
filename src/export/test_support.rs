//! Canned league data for pipeline tests.

use crate::{
    cli::types::{LeagueId, Season, TeamId},
    espn::LeagueProvider,
    models::{League, Player, Team},
    EspnError, Result,
};

pub fn player(name: &str) -> Player {
    Player {
        name: name.to_string(),
        pro_team: "Sea".to_string(),
        injury_status: "ACTIVE".to_string(),
        eligible_slots: vec!["1B".to_string(), "UTIL".to_string(), "BE".to_string()],
    }
}

pub fn team(id: u32, name: &str, roster: Vec<Player>) -> Team {
    Team {
        id: TeamId::new(id),
        name: name.to_string(),
        roster,
    }
}

pub fn league(name: &str, teams: Vec<Team>) -> League {
    League {
        id: LeagueId::new(11440),
        season: Season::new(2026),
        name: name.to_string(),
        scoring_period: Some(1),
        teams,
    }
}

/// Provider returning a fixed league and free-agent list.
pub struct FakeProvider {
    pub league: League,
    /// `None` makes the free-agent query fail
    pub free_agents: Option<Vec<Player>>,
}

impl LeagueProvider for FakeProvider {
    async fn fetch_league(&self, _league_id: LeagueId, _season: Season) -> Result<League> {
        Ok(self.league.clone())
    }

    async fn free_agents(&self, _league: &League, _size: usize) -> Result<Vec<Player>> {
        self.free_agents.clone().ok_or(EspnError::NoData)
    }
}

/// Provider whose league lookup is rejected.
pub struct DeniedProvider;

impl LeagueProvider for DeniedProvider {
    async fn fetch_league(&self, league_id: LeagueId, _season: Season) -> Result<League> {
        Err(EspnError::AccessDenied {
            league_id: league_id.as_u32(),
        })
    }

    async fn free_agents(&self, _league: &League, _size: usize) -> Result<Vec<Player>> {
        Err(EspnError::NoData)
    }
}
