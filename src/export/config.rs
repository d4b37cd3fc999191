//! Per-export configuration.

use crate::cli::types::{LeagueId, Season};

/// Everything one export needs to know about *which* league to read and
/// *how* to authenticate. Built by the caller and passed by value; the
/// pipeline keeps no other state between exports.
#[derive(Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub league_id: LeagueId,
    pub season: Season,
    /// `SWID` cookie
    pub swid: Option<String>,
    /// `espn_s2` cookie
    pub espn_s2: Option<String>,
}

impl ExportConfig {
    /// Config for a public league (no cookies).
    pub fn public(league_id: LeagueId, season: Season) -> Self {
        Self {
            league_id,
            season,
            swid: None,
            espn_s2: None,
        }
    }

    pub fn with_credentials(mut self, swid: impl Into<String>, espn_s2: impl Into<String>) -> Self {
        self.swid = Some(swid.into());
        self.espn_s2 = Some(espn_s2.into());
        self
    }

    /// True when both cookies are present and non-empty.
    pub fn has_credentials(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.swid) && present(&self.espn_s2)
    }
}

// Cookies stay out of logs and panic messages.
impl std::fmt::Debug for ExportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportConfig")
            .field("league_id", &self.league_id)
            .field("season", &self.season)
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}
