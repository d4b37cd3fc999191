//! Integration tests for command helpers

use espn_flb_export::{
    commands::{
        export_roster::{format_preview, save_artifact},
        resolve_league_id,
    },
    export::{ExportArtifact, PlayerRecord, XLSX_MIME_TYPE},
    EspnError, LeagueId, LEAGUE_ID_ENV_VAR,
};

#[test]
fn test_resolve_league_id_prefers_option() {
    let result = resolve_league_id(Some(LeagueId::new(12345)));
    assert_eq!(result.unwrap().as_u32(), 12345);
}

#[test]
fn test_resolve_league_id_env_roundtrip() {
    std::env::set_var(LEAGUE_ID_ENV_VAR, " 54321 ");
    let from_env = resolve_league_id(None);
    std::env::remove_var(LEAGUE_ID_ENV_VAR);
    assert_eq!(from_env.unwrap().as_u32(), 54321);

    match resolve_league_id(None).unwrap_err() {
        EspnError::MissingLeagueId { env_var } => assert_eq!(env_var, LEAGUE_ID_ENV_VAR),
        other => panic!("Expected MissingLeagueId error, got {other:?}"),
    }

    std::env::set_var(LEAGUE_ID_ENV_VAR, "eleven");
    let malformed = resolve_league_id(None);
    std::env::remove_var(LEAGUE_ID_ENV_VAR);
    assert!(matches!(malformed, Err(EspnError::InvalidNumber(_))));
}

#[test]
fn test_save_artifact_into_temp_dir() {
    let dir = tempfile::tempdir().unwrap();
    let artifact = ExportArtifact {
        league_name: "My League".to_string(),
        file_name: "My_League_Roster_2026.xlsx".to_string(),
        mime_type: XLSX_MIME_TYPE,
        bytes: vec![1, 2, 3],
        sheet_names: vec!["Team A".to_string()],
        warnings: vec![],
        preview: None,
    };

    let path = save_artifact(&artifact, dir.path()).unwrap();
    assert!(path.ends_with("My_League_Roster_2026.xlsx"));
    assert_eq!(std::fs::read(path).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_preview_table_has_all_headers() {
    let rows = vec![PlayerRecord {
        player_name: "Alice".to_string(),
        fantasy_team: "Team A".to_string(),
        pro_team: "Sea".to_string(),
        injury_status: "ACTIVE".to_string(),
        eligible_positions: "1B".to_string(),
    }];
    let table = format_preview(&rows);
    let header = table.lines().next().unwrap();
    for column in [
        "Player Name",
        "Fantasy Team",
        "Pro Team",
        "Injury Status",
        "Eligible Positions",
    ] {
        assert!(header.contains(column));
    }
}
