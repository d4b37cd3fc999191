//! End-to-end export: league lookup to finished workbook bytes.

use serde::Serialize;
use tracing::info;

use super::{
    config::ExportConfig,
    free_agents::{build_free_agent_sheet, FREE_AGENT_POOL_SIZE},
    master::build_master_sheet,
    progress::ProgressObserver,
    record::{PlayerRecord, RECORD_HEADERS},
    roster::build_roster_sheets,
    sheet::{Sheet, StepOutcome},
    sheet_name::SheetNameRegistry,
    width::auto_adjust_column_width,
};
use crate::{
    espn::LeagueProvider,
    xlsx::{WorkbookWriter, Worksheet},
    Result,
};

/// MIME type of the produced workbook.
pub const XLSX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// `<league name with spaces as underscores>_Roster_<season>.xlsx`
pub fn artifact_file_name(league_name: &str, season: impl std::fmt::Display) -> String {
    format!("{}_Roster_{}.xlsx", league_name.replace(' ', "_"), season)
}

/// A finished export, ready to be saved or served.
#[derive(Debug, Clone, Serialize)]
pub struct ExportArtifact {
    pub league_name: String,
    pub file_name: String,
    pub mime_type: &'static str,
    #[serde(skip)]
    pub bytes: Vec<u8>,
    /// Sheet names in workbook order
    pub sheet_names: Vec<String>,
    /// Non-fatal problems (e.g. the free agent sheet was skipped)
    pub warnings: Vec<String>,
    /// The master sheet's rows, if one was written
    pub preview: Option<Vec<PlayerRecord>>,
}

/// Run one export against `provider`.
///
/// Sheets are written in order: one per team, "Free Agents" when the
/// query succeeds, then "All Players Status" when any player was seen.
/// Only the free agent step may fail without failing the export; on any
/// other error no bytes are produced.
pub async fn export_league<P: LeagueProvider>(
    provider: &P,
    config: ExportConfig,
    progress: &mut dyn ProgressObserver,
) -> Result<ExportArtifact> {
    info!(league_id = %config.league_id, season = %config.season, "starting export");
    let league = provider.fetch_league(config.league_id, config.season).await?;
    info!(league = %league.name, teams = league.teams.len(), "league loaded");

    let mut workbook = SheetWorkbook::new();
    let mut master = Vec::with_capacity(league.rostered_player_count());
    let mut warnings = Vec::new();

    for sheet in build_roster_sheets(&league, &mut master, progress)? {
        workbook.add(&sheet)?;
    }

    match build_free_agent_sheet(provider, &league, FREE_AGENT_POOL_SIZE, &mut master).await {
        StepOutcome::Success(sheet) => workbook.add(&sheet)?,
        StepOutcome::Skipped(warning) => warnings.push(warning),
    }

    let preview = match build_master_sheet(master) {
        Some(sheet) => {
            workbook.add(&sheet)?;
            Some(sheet.records)
        }
        None => None,
    };

    let sheet_names = workbook.sheet_names();
    let bytes = workbook.finish()?;
    info!(sheets = sheet_names.len(), bytes = bytes.len(), "workbook finalized");

    Ok(ExportArtifact {
        file_name: artifact_file_name(&league.name, league.season),
        league_name: league.name,
        mime_type: XLSX_MIME_TYPE,
        bytes,
        sheet_names,
        warnings,
        preview,
    })
}

/// The in-memory writer plus the names handed out so far.
struct SheetWorkbook {
    writer: WorkbookWriter<std::io::Cursor<Vec<u8>>>,
    names: SheetNameRegistry,
}

impl SheetWorkbook {
    fn new() -> Self {
        Self {
            writer: WorkbookWriter::in_memory(),
            names: SheetNameRegistry::new(),
        }
    }

    fn add(&mut self, sheet: &Sheet) -> Result<()> {
        let mut worksheet = Worksheet::new(self.names.claim(&sheet.name));
        worksheet.write_header(RECORD_HEADERS);
        for record in &sheet.records {
            worksheet.write_row(record.cells());
        }
        auto_adjust_column_width(&mut worksheet, sheet);
        self.writer.write_worksheet(&worksheet)
    }

    fn sheet_names(&self) -> Vec<String> {
        self.writer.sheet_names().to_vec()
    }

    fn finish(self) -> Result<Vec<u8>> {
        self.writer.finish_to_bytes()
    }
}
