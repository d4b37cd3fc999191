//! ESPN Fantasy Baseball Roster Exporter Library
//!
//! Fetches an ESPN fantasy baseball league and writes it to a multi-sheet
//! Excel workbook: one sheet per fantasy team, a "Free Agents" sheet and an
//! "All Players Status" rollup sorted by player name.
//!
//! ## Features
//!
//! - **League Retrieval**: Teams, rosters and league settings from the ESPN v3 API
//! - **Private Leagues**: `SWID`/`espn_s2` cookie support
//! - **Graceful Degradation**: A failed free agent query drops only that sheet
//! - **Excel Output**: Sanitized sheet names, bold headers and auto-fit columns
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use espn_flb_export::{
//!     espn::EspnClient,
//!     export::{export_league, ExportConfig, NoProgress},
//!     LeagueId, Season,
//! };
//!
//! # async fn example() -> espn_flb_export::Result<()> {
//! let config = ExportConfig::public(LeagueId::new(11440), Season::new(2026));
//! let client = EspnClient::new(&config)?;
//! let artifact = export_league(&client, config, &mut NoProgress).await?;
//! std::fs::write(&artifact.file_name, &artifact.bytes)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your league ID and, for private leagues, your ESPN cookies:
//! ```bash
//! export ESPN_FLB_LEAGUE_ID=11440
//! export ESPN_SWID='{...}'
//! export ESPN_S2='...'
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;
pub mod export;
pub mod models;
pub mod xlsx;

// Re-export commonly used types
pub use cli::types::{LeagueId, Season, TeamId};
pub use error::{EspnError, Result};
pub use export::{export_league, ExportArtifact, ExportConfig};

pub const LEAGUE_ID_ENV_VAR: &str = "ESPN_FLB_LEAGUE_ID";
pub const SWID_ENV_VAR: &str = "ESPN_SWID";
pub const ESPN_S2_ENV_VAR: &str = "ESPN_S2";
