//! Export command implementation

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    cli::{types::Season, CredentialArgs},
    espn::EspnClient,
    export::{export_league, fit_column_width, ExportArtifact, PlayerRecord, RECORD_HEADERS},
    LeagueId, Result,
};

use super::build_export_config;

/// Parameters for the export command
#[derive(Debug)]
pub struct ExportParams {
    pub league_id: Option<LeagueId>,
    pub season: Season,
    pub credentials: CredentialArgs,
    pub output_dir: Option<PathBuf>,
    pub as_json: bool,
    pub preview_rows: usize,
    pub debug: bool,
    pub verbose: bool,
}

/// Handle the export command
pub async fn handle_export(params: ExportParams) -> Result<()> {
    let config = build_export_config(params.league_id, params.season, &params.credentials)?;
    if params.verbose {
        println!(
            "Connecting to league {} ({}){}...",
            config.league_id,
            config.season,
            if config.has_credentials() {
                " with ESPN cookies"
            } else {
                ""
            }
        );
    }

    let client = EspnClient::new(&config)?.debug(params.debug);
    let verbose = params.verbose;
    let mut progress = |fraction: f64| {
        debug!(fraction, "team progress");
        if verbose {
            println!("Processed teams: {:.0}%", fraction * 100.0); // tarpaulin::skip
        }
    };

    // tarpaulin::skip - HTTP call, tested via integration tests
    let artifact = export_league(&client, config, &mut progress).await?;

    for warning in &artifact.warnings {
        eprintln!("⚠ {}", warning);
    }

    let dir = params.output_dir.unwrap_or_else(default_output_dir);
    let path = save_artifact(&artifact, &dir)?;
    println!(
        "✓ {} written ({} sheets): {}",
        artifact.league_name,
        artifact.sheet_names.len(),
        path.display()
    );

    if let Some(preview) = &artifact.preview {
        if params.preview_rows > 0 {
            let rows = &preview[..preview.len().min(params.preview_rows)];
            if params.as_json {
                println!("{}", serde_json::to_string_pretty(rows)?); // tarpaulin::skip
            } else {
                print!("{}", format_preview(rows)); // tarpaulin::skip
            }
        }
    }

    Ok(())
}

/// The user's download directory, or the working directory.
pub fn default_output_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Write the workbook into `dir` (created if missing) and return its path.
///
/// Path separators in the file name are replaced so league names cannot
/// escape `dir`.
pub fn save_artifact(artifact: &ExportArtifact, dir: &Path) -> Result<PathBuf> {
    let file_name = artifact.file_name.replace(['/', '\\'], "_");
    std::fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    std::fs::write(&path, &artifact.bytes)?;
    debug!(path = %path.display(), bytes = artifact.bytes.len(), "artifact saved");
    Ok(path)
}

/// Fixed-width text table of `rows`, header first.
pub fn format_preview(rows: &[PlayerRecord]) -> String {
    let widths: Vec<usize> = RECORD_HEADERS
        .iter()
        .enumerate()
        .map(|(col, header)| fit_column_width(header, rows.iter().map(|r| r.cells()[col])) as usize)
        .collect();

    let mut out = String::new();
    push_line(&mut out, &RECORD_HEADERS, &widths);
    for record in rows {
        push_line(&mut out, &record.cells(), &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    out.push_str(line.join("").trim_end());
    out.push('\n');
}
