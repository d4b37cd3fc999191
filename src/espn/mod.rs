//! ESPN Fantasy Baseball API access: HTTP client, wire types and lookups.

pub mod http;
pub mod positions;
pub mod provider;
pub mod types;

pub use http::{EspnClient, FLB_BASE_URL};
pub use provider::LeagueProvider;
