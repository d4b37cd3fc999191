//! The "All Players Status" rollup sheet.

use super::{record::PlayerRecord, sheet::Sheet};

pub const MASTER_SHEET_NAME: &str = "All Players Status";

/// Every record, sorted by player name. `None` when there is nothing to
/// roll up.
///
/// The sort is stable and compares names byte-wise, so equal names keep
/// their team order and `"Zed"` sorts before `"amy"`.
pub fn build_master_sheet(mut records: Vec<PlayerRecord>) -> Option<Sheet> {
    if records.is_empty() {
        return None;
    }
    records.sort_by(|a, b| a.player_name.cmp(&b.player_name));
    Some(Sheet::new(MASTER_SHEET_NAME, records))
}
