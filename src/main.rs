//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use espn_flb_export::{
    cli::{Commands, ESPN},
    commands::export_roster::{handle_export, ExportParams},
    core::logging::init_logging,
};

/// Run the CLI.
#[tokio::main]
async fn main() {
    let app = ESPN::parse();
    let verbose = app.command.verbose();
    init_logging(verbose);

    if let Err(err) = run(app).await {
        eprintln!("An error occurred during the process.");
        if verbose {
            eprintln!("{:?}", err);
        }
        std::process::exit(1);
    }
}

async fn run(app: ESPN) -> anyhow::Result<()> {
    match app.command {
        Commands::Export {
            league_id,
            season,
            credentials,
            output_dir,
            json,
            preview_rows,
            debug,
            verbose,
        } => {
            handle_export(ExportParams {
                league_id,
                season,
                credentials,
                output_dir,
                as_json: json,
                preview_rows,
                debug,
                verbose,
            })
            .await
            .context("Roster export failed")?
        }
    }

    Ok(())
}
