//! Type-safe wrappers for ESPN Fantasy Baseball identifiers.

pub mod ids;
pub mod time;

pub use ids::{LeagueId, TeamId};
pub use time::Season;
