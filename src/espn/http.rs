//! HTTP client for ESPN's fantasy baseball league endpoints.

use reqwest::{
    header::{HeaderMap, HeaderName},
    Client, RequestBuilder, StatusCode,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    cli::types::{LeagueId, Season},
    core::{build_free_agent_filter, espn_header_map, IntoHeaderValue, FANTASY_FILTER_HEADER},
    espn::{
        provider::LeagueProvider,
        types::{LeagueResponse, PlayerPoolResponse},
    },
    export::ExportConfig,
    models::{League, Player},
    EspnError, Result,
};


/// Base path for ESPN Fantasy Baseball v3 API.
pub const FLB_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/flb";

/// Views that together carry league settings, team names and rosters.
const LEAGUE_VIEWS: [&str; 3] = ["mTeam", "mRoster", "mSettings"];

/// ESPN client bound to one set of credentials.
#[derive(Debug, Clone)]
pub struct EspnClient {
    client: Client,
    base_url: String,
    headers: HeaderMap,
    debug: bool,
}

impl EspnClient {
    /// Client for the production API, using the cookies from `config`.
    pub fn new(config: &ExportConfig) -> Result<Self> {
        Self::with_base_url(FLB_BASE_URL, config)
    }

    /// Client for an arbitrary base URL (used by tests against a mock server).
    pub fn with_base_url(base_url: &str, config: &ExportConfig) -> Result<Self> {
        let client = Client::builder().user_agent("espn-flb-export/1.0").build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: espn_header_map(config.swid.as_deref(), config.espn_s2.as_deref())?,
            debug: false,
        })
    }

    /// Print request URLs and headers to stderr.
    pub fn debug(mut self, on: bool) -> Self {
        self.debug = on;
        self
    }

    pub fn league_url(&self, league_id: LeagueId, season: Season) -> String {
        format!(
            "{}/seasons/{}/segments/0/leagues/{}",
            self.base_url, season, league_id
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        league_id: LeagueId,
        season: Season,
    ) -> Result<T> {
        if self.debug {
            if let Some(req) = builder.try_clone().and_then(|b| b.build().ok()) {
                eprintln!("URL => {}", req.url());
                eprintln!("HEADERS:");
                for (k, v) in req.headers().iter() {
                    eprintln!("  {}: {:?}", k, v);
                }
            }
        }

        let res = builder.send().await?;
        debug!(status = %res.status(), url = %res.url(), "ESPN response");

        match res.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(EspnError::AccessDenied {
                    league_id: league_id.as_u32(),
                })
            }
            StatusCode::NOT_FOUND => {
                return Err(EspnError::LeagueNotFound {
                    league_id: league_id.as_u32(),
                    season: season.as_u16(),
                })
            }
            _ => {}
        }

        let body = res.error_for_status()?.bytes().await?;
        if body.is_empty() {
            return Err(EspnError::NoData);
        }
        Ok(serde_json::from_slice(&body)?)
    }
}

impl LeagueProvider for EspnClient {
    async fn fetch_league(&self, league_id: LeagueId, season: Season) -> Result<League> {
        let url = self.league_url(league_id, season);
        let params: Vec<(&str, &str)> = LEAGUE_VIEWS.iter().map(|v| ("view", *v)).collect();
        let builder = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .query(&params);

        let resp: LeagueResponse = self.get_json(builder, league_id, season).await?;
        Ok(League::from(resp))
    }

    async fn free_agents(&self, league: &League, size: usize) -> Result<Vec<Player>> {
        let url = self.league_url(league.id, league.season);
        let mut params = vec![("view", "kona_player_info".to_string())];
        if let Some(period) = league.scoring_period {
            params.push(("scoringPeriodId", period.to_string()));
        }

        let mut headers = self.headers.clone();
        headers.insert(
            HeaderName::from_static(FANTASY_FILTER_HEADER),
            build_free_agent_filter(size).to_header_value()?,
        );

        let builder = self.client.get(&url).headers(headers).query(&params);
        let resp: PlayerPoolResponse = self.get_json(builder, league.id, league.season).await?;
        Ok(resp.into_players())
    }
}
