//! Raw ESPN payloads for the fantasy baseball (`flb`) league endpoints and
//! their conversion into the domain models.

use serde::Deserialize;

use crate::{
    cli::types::{LeagueId, Season, TeamId},
    espn::positions::{pro_team_abbrev, slot_tag_or_id},
    models::{League, Player, Team},
};


/// Injury status reported when ESPN leaves the field out.
pub const DEFAULT_INJURY_STATUS: &str = "ACTIVE";

/// Root of `view=mTeam&view=mRoster&view=mSettings`
#[derive(Debug, Deserialize)]
pub struct LeagueResponse {
    pub id: u32,
    #[serde(rename = "seasonId")]
    pub season_id: u16,
    #[serde(rename = "scoringPeriodId", default)]
    pub scoring_period_id: Option<u16>,
    #[serde(default)]
    pub settings: Option<LeagueSettings>,
    #[serde(default)]
    pub teams: Vec<TeamEntry>,
}

#[derive(Debug, Deserialize)]
pub struct LeagueSettings {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct TeamEntry {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub roster: Option<RosterEnvelope>,
}

impl TeamEntry {
    /// ESPN's `name`, or `location nickname` for leagues that predate it.
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                let location = self.location.as_deref().unwrap_or("").trim();
                let nickname = self.nickname.as_deref().unwrap_or("").trim();
                format!("{location} {nickname}").trim().to_string()
            }
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RosterEnvelope {
    #[serde(default)]
    pub entries: Vec<RosterEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RosterEntry {
    #[serde(rename = "playerPoolEntry")]
    pub player_pool_entry: PlayerPoolEntry,
}

#[derive(Debug, Deserialize)]
pub struct PlayerPoolEntry {
    pub player: PlayerInfo,
}

/// Player object shared by roster entries and the player pool
#[derive(Debug, Deserialize)]
pub struct PlayerInfo {
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "proTeamId", default)]
    pub pro_team_id: i32,
    #[serde(rename = "injuryStatus", default)]
    pub injury_status: Option<String>,
    #[serde(rename = "eligibleSlots", default)]
    pub eligible_slots: Vec<u16>,
}

/// Root of `view=kona_player_info`
#[derive(Debug, Deserialize)]
pub struct PlayerPoolResponse {
    #[serde(default)]
    pub players: Vec<PlayerPoolItem>,
}

#[derive(Debug, Deserialize)]
pub struct PlayerPoolItem {
    pub player: PlayerInfo,
}

impl From<PlayerInfo> for Player {
    fn from(info: PlayerInfo) -> Self {
        Player {
            name: info.full_name.unwrap_or_default(),
            pro_team: pro_team_abbrev(info.pro_team_id).to_string(),
            injury_status: info
                .injury_status
                .unwrap_or_else(|| DEFAULT_INJURY_STATUS.to_string()),
            eligible_slots: info
                .eligible_slots
                .into_iter()
                .map(|id| slot_tag_or_id(id).into_owned())
                .collect(),
        }
    }
}

impl From<TeamEntry> for Team {
    fn from(entry: TeamEntry) -> Self {
        let name = entry.display_name();
        let roster = entry
            .roster
            .unwrap_or_default()
            .entries
            .into_iter()
            .map(|e| Player::from(e.player_pool_entry.player))
            .collect();
        Team {
            id: TeamId::new(entry.id),
            name,
            roster,
        }
    }
}

impl From<LeagueResponse> for League {
    fn from(resp: LeagueResponse) -> Self {
        let mut teams: Vec<Team> = resp.teams.into_iter().map(Team::from).collect();
        teams.sort_by_key(|t| t.id);
        League {
            id: LeagueId::new(resp.id),
            season: Season::new(resp.season_id),
            name: resp.settings.map(|s| s.name).unwrap_or_default(),
            scoring_period: resp.scoring_period_id,
            teams,
        }
    }
}

impl PlayerPoolResponse {
    pub fn into_players(self) -> Vec<Player> {
        self.players
            .into_iter()
            .map(|item| Player::from(item.player))
            .collect()
    }
}
