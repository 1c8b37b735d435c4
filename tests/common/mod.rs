//! Shared fixtures for the HTTP integration tests

#![allow(dead_code)]

use ipquery::ApiConfig;
use serde_json::{json, Value};

/// Response document for Google's public resolver
pub fn google_dns() -> Value {
    json!({
        "ip": "8.8.8.8",
        "isp": {"asn": "AS15169", "org": "Google LLC", "isp": "Google LLC"},
        "location": {
            "country": "United States",
            "country_code": "US",
            "city": "Mountain View",
            "state": "California",
            "zipcode": "94043",
            "latitude": 37.436551599813335,
            "longitude": -122.09383799087185,
            "timezone": "America/Los_Angeles",
            "localtime": "2024-12-10T18:51:40"
        },
        "risk": {
            "is_mobile": false,
            "is_vpn": false,
            "is_tor": false,
            "is_proxy": false,
            "is_datacenter": true,
            "risk_score": 0
        }
    })
}

/// Response document for Cloudflare's resolver, without a risk section
pub fn cloudflare_dns() -> Value {
    json!({
        "ip": "1.1.1.1",
        "isp": {"asn": "AS13335", "org": "Cloudflare, Inc.", "isp": "Cloudflare, Inc."},
        "location": {
            "country": "Australia",
            "country_code": "AU",
            "city": "Sydney",
            "state": "New South Wales",
            "zipcode": "1001",
            "latitude": -33.854548400186665,
            "longitude": 151.20016200912815,
            "timezone": "Australia/Sydney",
            "localtime": "2024-12-11T05:51:40"
        }
    })
}

/// Client settings aimed at a mock server
pub fn config_for(uri: &str) -> ApiConfig {
    let mut config = ApiConfig::with_base_url(uri);
    config.timeout_secs = 5;
    config.user_agent = "ipquery-rs-test/1.0".to_string();
    config
}

/// A local port with nothing listening on it
pub fn closed_port_uri() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind local socket");
    let port = listener.local_addr().expect("Probe socket has no address").port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}
