//! Command implementations for the ESPN Fantasy Baseball exporter

pub mod export_roster;

use crate::{
    cli::{types::Season, CredentialArgs},
    error::EspnError,
    export::ExportConfig,
    LeagueId, Result, ESPN_S2_ENV_VAR, LEAGUE_ID_ENV_VAR, SWID_ENV_VAR,
};


/// Resolve league ID from option or environment variable
///
/// A set but malformed environment value is an `InvalidNumber` error, not a
/// missing one.
pub fn resolve_league_id(league_id: Option<LeagueId>) -> Result<LeagueId> {
    if let Some(id) = league_id {
        return Ok(id);
    }
    match std::env::var(LEAGUE_ID_ENV_VAR) {
        Ok(s) if !s.trim().is_empty() => s.parse::<LeagueId>(),
        _ => Err(EspnError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        }),
    }
}

/// Resolve the `SWID`/`espn_s2` pair from flags, falling back to the
/// environment. `--no-credentials` always yields an anonymous pair.
pub fn resolve_credentials(args: &CredentialArgs) -> (Option<String>, Option<String>) {
    if args.no_credentials {
        return (None, None);
    }
    let from_env = |var: &str| std::env::var(var).ok().filter(|v| !v.trim().is_empty());
    (
        args.swid.clone().or_else(|| from_env(SWID_ENV_VAR)),
        args.espn_s2.clone().or_else(|| from_env(ESPN_S2_ENV_VAR)),
    )
}

/// Build the export configuration for one run.
pub fn build_export_config(
    league_id: Option<LeagueId>,
    season: Season,
    credentials: &CredentialArgs,
) -> Result<ExportConfig> {
    let league_id = resolve_league_id(league_id)?;
    let (swid, espn_s2) = resolve_credentials(credentials);
    Ok(ExportConfig {
        league_id,
        season,
        swid,
        espn_s2,
    })
}
