//! The "Free Agents" sheet. Failures here degrade the export instead of
//! aborting it.

use tracing::{info, warn};

use super::{
    record::{map_named_player, PlayerRecord, FREE_AGENT_LABEL},
    sheet::{Sheet, StepOutcome},
};
use crate::{espn::LeagueProvider, models::League, Result};

/// Upper bound on free agents requested from ESPN.
pub const FREE_AGENT_POOL_SIZE: usize = 500;

pub const FREE_AGENTS_SHEET: &str = "Free Agents";

/// Query up to `size` free agents and map them into one sheet.
///
/// Any failure becomes [`StepOutcome::Skipped`] carrying the user-facing
/// warning; `master` is only extended on success.
pub async fn build_free_agent_sheet<P: LeagueProvider>(
    provider: &P,
    league: &League,
    size: usize,
    master: &mut Vec<PlayerRecord>,
) -> StepOutcome<Sheet> {
    match free_agent_records(provider, league, size).await {
        Ok(records) => {
            info!(count = records.len(), "free agents mapped");
            master.extend(records.iter().cloned());
            StepOutcome::Success(Sheet::new(FREE_AGENTS_SHEET, records))
        }
        Err(e) => {
            warn!(error = %e, "skipping free agent sheet");
            StepOutcome::Skipped(format!("Could not fetch Free Agents: {e}"))
        }
    }
}

async fn free_agent_records<P: LeagueProvider>(
    provider: &P,
    league: &League,
    size: usize,
) -> Result<Vec<PlayerRecord>> {
    let players = provider.free_agents(league, size).await?;
    players
        .iter()
        .take(size)
        .map(|p| map_named_player(p, FREE_AGENT_LABEL))
        .collect()
}
