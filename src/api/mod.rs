//! ipquery.io API client
//!
//! # Module Organization
//!
//! - `types`: Response records (IpInfo, IspInfo, LocationInfo, RiskInfo)
//! - `request`: URL construction for single, bulk and own-IP lookups
//! - `parse`: Field-by-field mapping of response bodies onto the records
//! - `client`: Async client built on `reqwest::Client`
//! - `blocking`: Synchronous client built on `reqwest::blocking::Client`

pub mod client;
pub mod parse;
pub mod request;
pub mod types;

#[cfg(feature = "blocking")]
pub mod blocking;

pub use client::IpQueryClient;
pub use request::BASE_URL;
pub use types::{IpInfo, IspInfo, LocationInfo, RiskInfo};

use crate::config::ApiConfig;
use crate::error::{IpQueryError, Result};
use std::time::Duration;

/// Redirect hops followed before giving up
pub(crate) const MAX_REDIRECTS: usize = 10;

/// Timeout from config, `None` when disabled
pub(crate) fn request_timeout(config: &ApiConfig) -> Option<Duration> {
    (config.timeout_secs > 0).then(|| Duration::from_secs(config.timeout_secs))
}

/// Proxy from config, `None` when unset
pub(crate) fn request_proxy(config: &ApiConfig) -> Result<Option<reqwest::Proxy>> {
    config
        .proxy
        .as_deref()
        .map(|url| {
            reqwest::Proxy::all(url)
                .map_err(|e| IpQueryError::config(format!("Invalid proxy URL {}: {}", url, e)))
        })
        .transpose()
}
