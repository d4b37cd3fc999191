//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod espn_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let espn_error = EspnError::from(json_error);

        match espn_error {
            EspnError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let espn_error = EspnError::from(io_error);

        match espn_error {
            EspnError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let espn_error = EspnError::from(header_error);

        match espn_error {
            EspnError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let espn_error = EspnError::from(parse_error);

        match espn_error {
            EspnError::InvalidNumber(_) => (),
            _ => panic!("Expected InvalidNumber error variant"),
        }
    }

    #[test]
    fn test_zip_error_conversion() {
        let zip_error = zip::result::ZipError::FileNotFound;
        let espn_error = EspnError::from(zip_error);

        match espn_error {
            EspnError::Spreadsheet(_) => (),
            _ => panic!("Expected Spreadsheet error variant"),
        }
    }

    #[test]
    fn test_missing_league_id_error() {
        let error = EspnError::MissingLeagueId {
            env_var: "ESPN_FLB_LEAGUE_ID".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League ID not provided"));
        assert!(error_string.contains("ESPN_FLB_LEAGUE_ID"));
    }

    #[test]
    fn test_access_denied_error() {
        let error = EspnError::AccessDenied { league_id: 11440 };

        let error_string = error.to_string();
        assert!(error_string.contains("11440"));
        assert!(error_string.contains("espn_s2"));
    }

    #[test]
    fn test_league_not_found_error() {
        let error = EspnError::LeagueNotFound {
            league_id: 42,
            season: 2026,
        };
        assert_eq!(
            error.to_string(),
            "League 42 does not exist for season 2026"
        );
    }

    #[test]
    fn test_missing_player_name_error() {
        let error = EspnError::MissingPlayerName {
            team: "Bronx Bombers".to_string(),
        };
        assert_eq!(error.to_string(), "Player on team 'Bronx Bombers' has no name");
    }

    #[test]
    fn test_no_data_error() {
        let error = EspnError::NoData;
        assert_eq!(error.to_string(), "ESPN API returned no data");
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let espn_error = EspnError::from(io_error);

        let error_trait: &dyn std::error::Error = &espn_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_error_debug_formatting() {
        let error = EspnError::NoData;
        assert_eq!(format!("{:?}", error), "NoData");
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(EspnError::NoData)
        }

        match test_function().unwrap_err() {
            EspnError::NoData => (),
            _ => panic!("Expected NoData error"),
        }
    }

    #[test]
    fn test_anyhow_wraps_espn_error() {
        let error = anyhow::Error::from(EspnError::AccessDenied { league_id: 7 });
        assert!(error.downcast_ref::<EspnError>().is_some());
        assert!(format!("{:#}", error).contains("league 7"));
    }
}
