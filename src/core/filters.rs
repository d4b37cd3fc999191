//! `x-fantasy-filter` header payloads for ESPN's player pool.
//!
//! ESPN reads player-pool filters from a JSON document sent in the
//! `x-fantasy-filter` request header rather than from query parameters.
//! Every filter value is wrapped in an object with a `value` field, e.g.
//! `{"filterStatus": {"value": ["FREEAGENT", "WAIVERS"]}}`.

use crate::Result;
use reqwest::header::HeaderValue;
use serde::Serialize;

/// Header carrying the player-pool filter document.
pub const FANTASY_FILTER_HEADER: &str = "x-fantasy-filter";

/// Wrapper for ESPN-style filter values.
#[derive(Debug, Serialize)]
pub struct Val<T> {
    pub value: T,
}

/// Sort directive inside a player-pool filter.
#[derive(Debug, Serialize)]
pub struct SortSpec {
    #[serde(rename = "sortPriority")]
    pub sort_priority: u32,
    #[serde(rename = "sortAsc")]
    pub sort_asc: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Filter parameters for the `kona_player_info` view.
#[derive(Debug, Serialize)]
pub struct PlayersFilter {
    #[serde(rename = "filterStatus")]
    pub filter_status: Val<Vec<String>>,

    pub limit: usize,

    #[serde(rename = "sortPercOwned")]
    pub sort_perc_owned: SortSpec,

    #[serde(rename = "sortDraftRanks")]
    pub sort_draft_ranks: SortSpec,
}

/// Top-level filter document: `{"players": {...}}`
#[derive(Debug, Serialize)]
pub struct FantasyFilter {
    pub players: PlayersFilter,
}

/// General-purpose helper: any Serialize → JSON → HeaderValue
pub trait IntoHeaderValue {
    fn to_header_value(&self) -> Result<HeaderValue>;
}

impl<T> IntoHeaderValue for T
where
    T: Serialize,
{
    fn to_header_value(&self) -> Result<HeaderValue> {
        let s = serde_json::to_string(self)?;
        Ok(HeaderValue::from_str(&s)?)
    }
}

/// Free agents and waiver-wire players, most-owned first, capped at `size`.
pub fn build_free_agent_filter(size: usize) -> FantasyFilter {
    FantasyFilter {
        players: PlayersFilter {
            filter_status: Val {
                value: vec!["FREEAGENT".to_string(), "WAIVERS".to_string()],
            },
            limit: size,
            sort_perc_owned: SortSpec {
                sort_priority: 1,
                sort_asc: false,
                value: None,
            },
            sort_draft_ranks: SortSpec {
                sort_priority: 100,
                sort_asc: true,
                value: Some("STANDARD".to_string()),
            },
        },
    }
}
