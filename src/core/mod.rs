//! Core utilities for the ESPN Fantasy Baseball exporter
//!
//! - `filters`: `x-fantasy-filter` header payloads
//! - `http`: request headers and ESPN cookies
//! - `logging`: tracing subscriber setup

pub mod filters;
pub mod http;
pub mod logging;

pub use filters::{build_free_agent_filter, IntoHeaderValue, FANTASY_FILTER_HEADER};
pub use http::espn_header_map;
