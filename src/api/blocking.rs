//! Synchronous ipquery.io client
//!
//! Same operations as [`crate::api::IpQueryClient`], each one a single
//! blocking GET. Do not call from inside an async runtime; use the async
//! client there.

use crate::api::types::IpInfo;
use crate::api::{parse, request, request_proxy, request_timeout, MAX_REDIRECTS};
use crate::config::ApiConfig;
use crate::error::{IpQueryError, Result};

/// Blocking client for the ipquery.io API
#[derive(Debug, Clone)]
pub struct IpQueryClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl IpQueryClient {
    /// Create a client with the default configuration
    pub fn new() -> Result<Self> {
        Self::from_config(&ApiConfig::default())
    }

    /// Create a client from API settings
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .timeout(request_timeout(config));

        if let Some(proxy) = request_proxy(config)? {
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| IpQueryError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: request::normalize_base_url(&config.base_url),
        })
    }

    /// The endpoint this client queries, always ending in `/`
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up a single IP address
    pub fn query_ip(&self, ip: &str) -> Result<IpInfo> {
        let url = request::single_url(&self.base_url, ip);
        let body = self.fetch(&url)?;
        parse::parse_ip_info(&body)
    }

    /// Look up several IP addresses with one request
    ///
    /// An empty list fails with `InvalidInput` before any request is made.
    pub fn query_bulk<S: AsRef<str>>(&self, ips: &[S]) -> Result<Vec<IpInfo>> {
        let url = request::bulk_url(&self.base_url, ips)?;
        let body = self.fetch(&url)?;
        parse::parse_bulk(&body, ips.len())
    }

    /// Ask the API for the caller's own public IP address
    pub fn query_own_ip(&self) -> Result<String> {
        let url = request::own_ip_url(&self.base_url);
        let body = self.fetch(&url)?;
        parse::parse_own_ip(&body)
    }

    fn fetch(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| IpQueryError::network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(IpQueryError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .map_err(|e| IpQueryError::network(format!("Failed to read response: {}", e)))?;

        log::trace!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}
