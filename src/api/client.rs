//! Async ipquery.io client
//!
//! Each query issues exactly one GET request and maps the body through
//! [`crate::api::parse`].

use crate::api::types::IpInfo;
use crate::api::{parse, request, request_proxy, request_timeout, MAX_REDIRECTS};
use crate::config::ApiConfig;
use crate::error::{IpQueryError, Result};

/// Async client for the ipquery.io API
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct IpQueryClient {
    client: reqwest::Client,
    base_url: String,
}

impl IpQueryClient {
    /// Create a client with the default configuration
    pub fn new() -> Result<Self> {
        Self::from_config(&ApiConfig::default())
    }

    /// Create a client from API settings
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS));

        if let Some(timeout) = request_timeout(config) {
            builder = builder.timeout(timeout);
        }
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
    ///
    /// The address is sent verbatim; the API decides whether it is valid.
    ///
    /// # Errors
    ///
    /// * `NetworkError` - the request could not be completed
    /// * `HttpStatus` - the API answered with a non-success status
    /// * `JsonError` / `ParseError` - the body is not a JSON object
    pub async fn query_ip(&self, ip: &str) -> Result<IpInfo> {
        let url = request::single_url(&self.base_url, ip);
        let body = self.fetch(&url).await?;
        parse::parse_ip_info(&body)
    }

    /// Look up several IP addresses with one request
    ///
    /// Results come back in the order the API returns them.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidInput` for an empty list, before any request is
    /// made. Otherwise as [`IpQueryClient::query_ip`], with the body
    /// expected to be a JSON array.
    pub async fn query_bulk<S: AsRef<str>>(&self, ips: &[S]) -> Result<Vec<IpInfo>> {
        let url = request::bulk_url(&self.base_url, ips)?;
        let body = self.fetch(&url).await?;
        parse::parse_bulk(&body, ips.len())
    }

    /// Ask the API for the caller's own public IP address
    pub async fn query_own_ip(&self) -> Result<String> {
        let url = request::own_ip_url(&self.base_url);
        let body = self.fetch(&url).await?;
        parse::parse_own_ip(&body)
    }

    async fn fetch(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
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
            .await
            .map_err(|e| IpQueryError::network(format!("Failed to read response: {}", e)))?;

        log::trace!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = IpQueryClient::new();
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "https://api.ipquery.io/");
    }

    #[test]
    fn test_base_url_normalized() {
        let client = IpQueryClient::from_config(&ApiConfig::with_base_url("http://127.0.0.1:9")).unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9/");
    }

    #[tokio::test]
    async fn test_bulk_empty_rejected_without_request() {
        // Port 9 (discard) is never contacted: validation happens first.
        let client = IpQueryClient::from_config(&ApiConfig::with_base_url("http://127.0.0.1:9")).unwrap();
        let empty: Vec<String> = Vec::new();

        let err = client.query_bulk(&empty).await.unwrap_err();
        assert!(matches!(err, IpQueryError::InvalidInput(_)));
    }
}
