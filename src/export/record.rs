//! Flat per-player rows shared by every sheet.

use serde::Serialize;

use super::slots::filter_slots;
use crate::{models::Player, EspnError, Result};

/// Team label used for unowned players.
pub const FREE_AGENT_LABEL: &str = "Free Agent";

/// Column headers, in sheet order.
pub const RECORD_HEADERS: [&str; 5] = [
    "Player Name",
    "Fantasy Team",
    "Pro Team",
    "Injury Status",
    "Eligible Positions",
];

/// One sheet row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    #[serde(rename = "Player Name")]
    pub player_name: String,
    #[serde(rename = "Fantasy Team")]
    pub fantasy_team: String,
    #[serde(rename = "Pro Team")]
    pub pro_team: String,
    #[serde(rename = "Injury Status")]
    pub injury_status: String,
    /// Filtered slots joined with `", "`
    #[serde(rename = "Eligible Positions")]
    pub eligible_positions: String,
}

impl PlayerRecord {
    /// Cell values in [`RECORD_HEADERS`] order.
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.player_name,
            &self.fantasy_team,
            &self.pro_team,
            &self.injury_status,
            &self.eligible_positions,
        ]
    }
}

/// Map a player to its row under `team_label`.
pub fn map_player(player: &Player, team_label: &str) -> PlayerRecord {
    PlayerRecord {
        player_name: player.name.clone(),
        fantasy_team: team_label.to_string(),
        pro_team: player.pro_team.clone(),
        injury_status: player.injury_status.clone(),
        eligible_positions: filter_slots(&player.eligible_slots).join(", "),
    }
}

/// Like [`map_player`], but rejects players without a name.
pub fn map_named_player(player: &Player, team_label: &str) -> Result<PlayerRecord> {
    if player.name.trim().is_empty() {
        return Err(EspnError::MissingPlayerName {
            team: team_label.to_string(),
        });
    }
    Ok(map_player(player, team_label))
}
