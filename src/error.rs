//! Error types for ipquery-rs
//!
//! This module defines custom error types using thiserror for better error handling.

use thiserror::Error;

/// Main error type for ipquery-rs
#[derive(Error, Debug)]
pub enum IpQueryError {
    /// The request could not be completed (DNS, connect, TLS, timeout)
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The server answered with a non-success status
    #[error("HTTP error: {status} - {url}")]
    HttpStatus { status: u16, url: String },

    /// Response body is not of the expected shape
    #[error("Response parse error: {0}")]
    ParseError(String),

    /// Response body is not valid JSON
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Caller supplied an unusable argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// YAML parsing error
    #[error("YAML parse error: {0}")]
    YamlError(String),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for ipquery-rs
pub type Result<T> = std::result::Result<T, IpQueryError>;

impl IpQueryError {
    /// Create a parse error
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        IpQueryError::ParseError(msg.into())
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        IpQueryError::ConfigError(msg.into())
    }

    /// Create a network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        IpQueryError::NetworkError(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        IpQueryError::InvalidInput(msg.into())
    }

    /// True for failures of the response body rather than of the transport
    pub fn is_parse(&self) -> bool {
        matches!(self, IpQueryError::ParseError(_) | IpQueryError::JsonError(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IpQueryError::HttpStatus {
            status: 404,
            url: "https://api.ipquery.io/x".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error: 404 - https://api.ipquery.io/x");

        let err = IpQueryError::invalid_input("empty IP list");
        assert_eq!(err.to_string(), "Invalid input: empty IP list");
    }

    #[test]
    fn test_is_parse() {
        assert!(IpQueryError::parse("bad").is_parse());
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(IpQueryError::from(json_err).is_parse());
        assert!(!IpQueryError::network("down").is_parse());
    }
}
