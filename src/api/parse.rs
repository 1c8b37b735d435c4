//! Response mapping
//!
//! Maps ipquery.io JSON documents onto [`IpInfo`]. The mapping is
//! leaf-by-leaf: an absent, null or wrongly-typed leaf falls back to its
//! default without affecting its siblings. Only a body that is not JSON at
//! all, or whose top-level shape is wrong, is an error.

use crate::api::types::{IpInfo, IspInfo, LocationInfo, RiskInfo, UNKNOWN};
use crate::error::{IpQueryError, Result};
use serde_json::Value;
use std::net::IpAddr;

const MAX_RISK_SCORE: f64 = 100.0;

fn leaf<'a>(doc: &'a Value, section: &str, key: &str) -> Option<&'a Value> {
    doc.get(section).and_then(|s| s.get(key))
}

fn string_or_unknown(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN)
        .to_string()
}

fn f64_or_zero(value: Option<&Value>) -> f64 {
    value.and_then(Value::as_f64).unwrap_or(0.0)
}

fn bool_or_false(value: Option<&Value>) -> bool {
    value.and_then(Value::as_bool).unwrap_or(false)
}

fn risk_score(value: Option<&Value>) -> u8 {
    value
        .and_then(Value::as_f64)
        .map(|score| score.clamp(0.0, MAX_RISK_SCORE) as u8)
        .unwrap_or(0)
}

/// Build an [`IpInfo`] from one JSON document
///
/// Never fails; anything that is not an object maps to `IpInfo::default()`.
pub fn ip_info_from_value(doc: &Value) -> IpInfo {
    IpInfo {
        ip: string_or_unknown(doc.get("ip")),
        isp: IspInfo {
            asn: string_or_unknown(leaf(doc, "isp", "asn")),
            organization: string_or_unknown(leaf(doc, "isp", "org")),
            name: string_or_unknown(leaf(doc, "isp", "isp")),
        },
        location: LocationInfo {
            country: string_or_unknown(leaf(doc, "location", "country")),
            country_code: string_or_unknown(leaf(doc, "location", "country_code")),
            city: string_or_unknown(leaf(doc, "location", "city")),
            state: string_or_unknown(leaf(doc, "location", "state")),
            zipcode: string_or_unknown(leaf(doc, "location", "zipcode")),
            latitude: f64_or_zero(leaf(doc, "location", "latitude")),
            longitude: f64_or_zero(leaf(doc, "location", "longitude")),
            timezone: string_or_unknown(leaf(doc, "location", "timezone")),
            localtime: string_or_unknown(leaf(doc, "location", "localtime")),
        },
        risk: RiskInfo {
            is_mobile: bool_or_false(leaf(doc, "risk", "is_mobile")),
            is_vpn: bool_or_false(leaf(doc, "risk", "is_vpn")),
            is_tor: bool_or_false(leaf(doc, "risk", "is_tor")),
            is_proxy: bool_or_false(leaf(doc, "risk", "is_proxy")),
            is_datacenter: bool_or_false(leaf(doc, "risk", "is_datacenter")),
            risk_score: risk_score(leaf(doc, "risk", "risk_score")),
        },
    }
}

/// Parse a single-IP response body (a JSON object)
pub fn parse_ip_info(body: &str) -> Result<IpInfo> {
    let doc: Value = serde_json::from_str(body)?;

    if !doc.is_object() {
        return Err(IpQueryError::parse(format!(
            "expected a JSON object, got {}",
            json_kind(&doc)
        )));
    }

    Ok(ip_info_from_value(&doc))
}

/// Parse a bulk response body (a JSON array), preserving element order
///
/// The API answers a one-address path with a bare object, so an object
/// body is accepted when exactly one IP was requested.
pub fn parse_bulk(body: &str, requested: usize) -> Result<Vec<IpInfo>> {
    let doc: Value = serde_json::from_str(body)?;

    match doc {
        Value::Array(items) => Ok(items.iter().map(ip_info_from_value).collect()),
        Value::Object(_) if requested == 1 => Ok(vec![ip_info_from_value(&doc)]),
        other => Err(IpQueryError::parse(format!(
            "expected a JSON array, got {}",
            json_kind(&other)
        ))),
    }
}

/// Extract the caller's own IP from the bare-endpoint response
///
/// Accepts a plain-text address, a JSON string, or `{"ip": "..."}`.
pub fn parse_own_ip(body: &str) -> Result<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(IpQueryError::parse("empty response body"));
    }

    let candidate = match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::String(ip)) => ip,
        Ok(Value::Object(map)) => map
            .get("ip")
            .and_then(Value::as_str)
            .map(String::from)
            .ok_or_else(|| IpQueryError::parse("response object has no \"ip\" string"))?,
        Ok(other) => {
            return Err(IpQueryError::parse(format!(
                "unexpected {} in own-IP response",
                json_kind(&other)
            )));
        }
        Err(_) => trimmed.to_string(),
    };

    let candidate = candidate.trim();
    candidate
        .parse::<IpAddr>()
        .map(|_| candidate.to_string())
        .map_err(|_| IpQueryError::parse(format!("not an IP address: {:?}", candidate)))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
