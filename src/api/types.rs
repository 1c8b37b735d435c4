//! Type definitions for the api module
//!
//! These mirror the ipquery.io response document. Every field has a
//! fallback value so a partial document still yields a complete record.

use serde::Serialize;

/// Fallback for string fields the API left out
pub const UNKNOWN: &str = "Unknown";

/// Full lookup result for one IP address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IpInfo {
    /// The queried IP address
    pub ip: String,
    pub isp: IspInfo,
    pub location: LocationInfo,
    pub risk: RiskInfo,
}

/// Network operator details
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IspInfo {
    /// Autonomous System Number, e.g. "AS15169"
    pub asn: String,
    pub organization: String,
    pub name: String,
}

/// Geographical details
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationInfo {
    pub country: String,
    /// ISO 3166-1 alpha-2 code
    pub country_code: String,
    pub city: String,
    /// State or region
    pub state: String,
    pub zipcode: String,
    pub latitude: f64,
    pub longitude: f64,
    /// IANA zone name, e.g. "America/Los_Angeles"
    pub timezone: String,
    /// Local time as reported by the API, kept verbatim
    pub localtime: String,
}

/// Anonymization and hosting indicators
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct RiskInfo {
    pub is_mobile: bool,
    pub is_vpn: bool,
    pub is_tor: bool,
    pub is_proxy: bool,
    pub is_datacenter: bool,
    /// 0 (clean) to 100
    pub risk_score: u8,
}

impl Default for IpInfo {
    fn default() -> Self {
        Self {
            ip: UNKNOWN.to_string(),
            isp: IspInfo::default(),
            location: LocationInfo::default(),
            risk: RiskInfo::default(),
        }
    }
}

impl Default for IspInfo {
    fn default() -> Self {
        Self {
            asn: UNKNOWN.to_string(),
            organization: UNKNOWN.to_string(),
            name: UNKNOWN.to_string(),
        }
    }
}

impl Default for LocationInfo {
    fn default() -> Self {
        Self {
            country: UNKNOWN.to_string(),
            country_code: UNKNOWN.to_string(),
            city: UNKNOWN.to_string(),
            state: UNKNOWN.to_string(),
            zipcode: UNKNOWN.to_string(),
            latitude: 0.0,
            longitude: 0.0,
            timezone: UNKNOWN.to_string(),
            localtime: UNKNOWN.to_string(),
        }
    }
}

impl RiskInfo {
    /// Check if any anonymization flag is set
    pub fn is_anonymized(&self) -> bool {
        self.is_vpn || self.is_tor || self.is_proxy
    }
}
