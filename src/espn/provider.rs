//! The league-data source the export pipeline reads from.

use crate::{
    cli::types::{LeagueId, Season},
    models::{League, Player},
    Result,
};

/// Source of league data.
///
/// [`EspnClient`](super::http::EspnClient) is the production
/// implementation; tests plug in canned data.
#[allow(async_fn_in_trait)]
pub trait LeagueProvider {
    /// Look up a league with its teams and their rosters.
    ///
    /// Fails on network errors, bad credentials and unknown leagues.
    async fn fetch_league(&self, league_id: LeagueId, season: Season) -> Result<League>;

    /// Up to `size` unowned players (free agents and waivers), most-owned
    /// first.
    async fn free_agents(&self, league: &League, size: usize) -> Result<Vec<Player>>;
}
