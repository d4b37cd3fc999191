//! One sheet per fantasy team.

use tracing::debug;

use super::{
    progress::ProgressObserver,
    record::{map_named_player, PlayerRecord},
    sheet::Sheet,
    sheet_name::sanitize_sheet_name,
};
use crate::{models::League, Result};

/// Build one sheet per team, in league order.
///
/// Every mapped record is also appended to `master`. After each team,
/// `progress` receives `(i + 1) / team_count`. The first player without a
/// name aborts the whole build.
pub fn build_roster_sheets(
    league: &League,
    master: &mut Vec<PlayerRecord>,
    progress: &mut dyn ProgressObserver,
) -> Result<Vec<Sheet>> {
    let team_count = league.teams.len();
    let mut sheets = Vec::with_capacity(team_count);

    for (i, team) in league.teams.iter().enumerate() {
        let records = team
            .roster
            .iter()
            .map(|player| map_named_player(player, &team.name))
            .collect::<Result<Vec<_>>>()?;

        let mut name = sanitize_sheet_name(&team.name);
        if name.is_empty() {
            name = format!("Team {}", i + 1);
        }
        debug!(team = %team.name, sheet = %name, players = records.len(), "roster mapped");

        master.extend(records.iter().cloned());
        sheets.push(Sheet::new(name, records));
        progress.report((i + 1) as f64 / team_count as f64);
    }

    Ok(sheets)
}
