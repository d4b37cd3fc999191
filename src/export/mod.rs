//! League-to-workbook export pipeline.
//!
//! [`export_league`] drives the steps: per-team roster sheets, the free
//! agent sheet (allowed to fail), the master rollup, column auto-fit and
//! finalizing the XLSX buffer.

pub mod config;
pub mod free_agents;
pub mod master;
pub mod orchestrator;
pub mod progress;
pub mod record;
pub mod roster;
pub mod sheet;
pub mod sheet_name;
pub mod slots;
pub mod width;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::ExportConfig;
pub use free_agents::{build_free_agent_sheet, FREE_AGENTS_SHEET, FREE_AGENT_POOL_SIZE};
pub use master::{build_master_sheet, MASTER_SHEET_NAME};
pub use orchestrator::{artifact_file_name, export_league, ExportArtifact, XLSX_MIME_TYPE};
pub use progress::{NoProgress, ProgressObserver};
pub use record::{map_named_player, map_player, PlayerRecord, FREE_AGENT_LABEL, RECORD_HEADERS};
pub use roster::build_roster_sheets;
pub use sheet::{Sheet, StepOutcome};
pub use sheet_name::{sanitize_sheet_name, SheetNameRegistry};
pub use slots::{filter_slots, EXCLUDED_SLOTS};
pub use width::{auto_adjust_column_width, column_widths, fit_column_width};
