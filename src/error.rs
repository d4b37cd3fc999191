//! Error types for the ESPN Fantasy Baseball exporter

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EspnError>;

#[derive(Error, Debug)]
pub enum EspnError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    #[error("Access denied to league {league_id}: private leagues need valid SWID and espn_s2 cookies")]
    AccessDenied { league_id: u32 },

    #[error("League {league_id} does not exist for season {season}")]
    LeagueNotFound { league_id: u32, season: u16 },

    #[error("ESPN API returned no data")]
    NoData,

    #[error("Player on team '{team}' has no name")]
    MissingPlayerName { team: String },

    #[error("Invalid sheet name '{name}': {reason}")]
    InvalidSheetName { name: String, reason: String },

    #[error("Workbook has no sheets to write")]
    EmptyWorkbook,

    #[error("Spreadsheet write failed: {0}")]
    Spreadsheet(#[from] zip::result::ZipError),
}

#[cfg(test)]
mod tests;
