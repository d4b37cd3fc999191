//! ID types for ESPN Fantasy Baseball.

use crate::error::{EspnError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for ESPN Fantasy League IDs.
///
/// Keeps league IDs from being mixed up with seasons, team ids and other
/// numeric values that travel alongside them.
///
/// # Examples
///
/// ```rust
/// use espn_flb_export::LeagueId;
///
/// let league_id = LeagueId::new(11440);
/// assert_eq!(league_id.as_u32(), 11440);
/// assert_eq!(league_id.to_string(), "11440");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(pub u32);

impl LeagueId {
    /// Create a new LeagueId from a u32 value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying u32 value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = EspnError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Fantasy team id within a league
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_from_str() {
        let id: LeagueId = "11440".parse().unwrap();
        assert_eq!(id, LeagueId::new(11440));
    }

    #[test]
    fn test_league_id_from_str_trims_whitespace() {
        let id: LeagueId = " 42 ".parse().unwrap();
        assert_eq!(id.as_u32(), 42);
    }

    #[test]
    fn test_league_id_from_str_invalid() {
        let result = "abc".parse::<LeagueId>();
        assert!(matches!(result, Err(EspnError::InvalidNumber(_))));
    }

    #[test]
    fn test_team_id_ordering() {
        let mut ids = vec![TeamId::new(3), TeamId::new(1), TeamId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![TeamId::new(1), TeamId::new(2), TeamId::new(3)]);
    }
}
