//! HTTP utilities for ESPN API communication

use crate::Result;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};

/// Build the request headers, adding the ESPN cookie when both `swid` and
/// `espn_s2` are present and non-empty.
///
/// Public leagues need no cookie, so missing credentials are not an error.
pub fn espn_header_map(swid: Option<&str>, espn_s2: Option<&str>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let swid = swid.map(str::trim).filter(|s| !s.is_empty());
    let s2 = espn_s2.map(str::trim).filter(|s| !s.is_empty());
    if let (Some(swid), Some(s2)) = (swid, s2) {
        let cookie = format!("SWID={}; espn_s2={}", swid, s2);
        let mut value = HeaderValue::from_str(&cookie)?;
        value.set_sensitive(true);
        h.insert(COOKIE, value);
    }
    Ok(h)
}
