//! CLI argument definitions and parsing structures.

use std::path::PathBuf;

use super::types::{LeagueId, Season};
use clap::{Args, Parser, Subcommand};

/// ESPN cookies for private leagues.
#[derive(Debug, Args)]
pub struct CredentialArgs {
    /// ESPN `SWID` cookie (or set `ESPN_SWID` env var).
    #[clap(long)]
    pub swid: Option<String>,

    /// ESPN `espn_s2` cookie (or set `ESPN_S2` env var).
    #[clap(long = "espn-s2")]
    pub espn_s2: Option<String>,

    /// Ignore any configured cookies and query the league anonymously.
    #[clap(long, conflicts_with_all = ["swid", "espn_s2"])]
    pub no_credentials: bool,
}

#[derive(Debug, Parser)]
#[clap(
    name = "espn-flb-export",
    about = "Export ESPN Fantasy Baseball rosters to an Excel workbook",
    version
)]
pub struct ESPN {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write every team's roster, the free agent pool and an all-players
    /// rollup into `<League_Name>_Roster_<season>.xlsx`.
    Export {
        /// League ID (or set `ESPN_FLB_LEAGUE_ID` env var).
        #[clap(long, short)]
        league_id: Option<LeagueId>,

        /// Season year (e.g. 2026).
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        #[clap(flatten)]
        credentials: CredentialArgs,

        /// Directory for the workbook (defaults to your Downloads folder).
        #[clap(long, short)]
        output_dir: Option<PathBuf>,

        /// Print the all-players preview as JSON instead of a table.
        #[clap(long)]
        json: bool,

        /// Number of preview rows to print (0 disables the preview).
        #[clap(long, default_value_t = 20)]
        preview_rows: usize,

        /// Print request URL and headers for debugging.
        #[clap(long)]
        debug: bool,

        /// Show progress, info logs and full error chains.
        #[clap(long, short)]
        verbose: bool,
    },
}

impl Commands {
    pub fn verbose(&self) -> bool {
        match self {
            Commands::Export { verbose, .. } => *verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_defaults() {
        let app = ESPN::try_parse_from(["espn-flb-export", "export"]).unwrap();
        let Commands::Export {
            league_id,
            season,
            credentials,
            output_dir,
            json,
            preview_rows,
            debug,
            verbose,
        } = app.command;
        assert!(league_id.is_none());
        assert_eq!(season, Season::new(2026));
        assert!(credentials.swid.is_none());
        assert!(!credentials.no_credentials);
        assert!(output_dir.is_none());
        assert!(!json && !debug && !verbose);
        assert_eq!(preview_rows, 20);
    }

    #[test]
    fn test_export_flags() {
        let app = ESPN::try_parse_from([
            "espn-flb-export",
            "export",
            "--league-id",
            "11440",
            "--season",
            "2025",
            "--swid",
            "{ABC}",
            "--espn-s2",
            "token",
            "--output-dir",
            "/tmp/out",
            "--json",
            "-v",
        ])
        .unwrap();
        assert!(app.command.verbose());
        let Commands::Export {
            league_id,
            season,
            credentials,
            output_dir,
            json,
            ..
        } = app.command;
        assert_eq!(league_id, Some(LeagueId::new(11440)));
        assert_eq!(season.as_u16(), 2025);
        assert_eq!(credentials.swid.as_deref(), Some("{ABC}"));
        assert_eq!(credentials.espn_s2.as_deref(), Some("token"));
        assert_eq!(output_dir, Some(PathBuf::from("/tmp/out")));
        assert!(json);
    }

    #[test]
    fn test_no_credentials_conflicts_with_cookies() {
        let result = ESPN::try_parse_from([
            "espn-flb-export",
            "export",
            "--no-credentials",
            "--swid",
            "{ABC}",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_league_id_rejected() {
        let result = ESPN::try_parse_from(["espn-flb-export", "export", "--league-id", "abc"]);
        assert!(result.is_err());
    }
}
