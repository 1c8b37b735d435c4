//! Formats lookup results for terminal output

use crate::api::types::{IpInfo, RiskInfo, UNKNOWN};
use serde::Serialize;

#[cfg(feature = "colored-output")]
use colored::Colorize;

/// Format one record as an indented text block
pub fn format_text(info: &IpInfo, use_color: bool) -> String {
    let loc = &info.location;
    let mut lines = vec![header(&info.ip, use_color)];

    lines.push(field("ISP", &isp_summary(info)));
    lines.push(field("ASN", &info.isp.asn));
    lines.push(field("Location", &location_summary(info)));
    lines.push(field("Zipcode", &loc.zipcode));
    lines.push(field(
        "Coordinates",
        &format!("{:.4}, {:.4}", loc.latitude, loc.longitude),
    ));
    lines.push(field("Timezone", &format!("{} ({})", loc.timezone, loc.localtime)));
    lines.push(field("Risk", &risk_summary(&info.risk, use_color)));

    lines.join("\n")
}

/// Format several records separated by blank lines
pub fn format_text_list(infos: &[IpInfo], use_color: bool) -> String {
    infos
        .iter()
        .map(|info| format_text(info, use_color))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Pretty-printed JSON for any serializable result
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Compact one-line form: `8.8.8.8 -> United States California Mountain View Google LLC`
pub fn format_compact(info: &IpInfo) -> String {
    format!("{} -> {} {}", info.ip, location_summary(info), isp_summary(info))
}

fn header(ip: &str, use_color: bool) -> String {
    if use_color {
        #[cfg(feature = "colored-output")]
        {
            return ip.bold().green().to_string();
        }
    }
    ip.to_string()
}

fn field(label: &str, value: &str) -> String {
    format!("  {:<12} {}", format!("{}:", label), value)
}

fn isp_summary(info: &IpInfo) -> String {
    let isp = &info.isp;
    if isp.organization == isp.name || isp.organization == UNKNOWN {
        isp.name.clone()
    } else {
        format!("{} ({})", isp.name, isp.organization)
    }
}

/// Country, state and city, skipping unknown and repeated parts
fn location_summary(info: &IpInfo) -> String {
    let loc = &info.location;
    let mut parts: Vec<&str> = Vec::new();

    for part in [&loc.country, &loc.state, &loc.city] {
        if part != UNKNOWN && parts.last() != Some(&part.as_str()) {
            parts.push(part);
        }
    }

    if parts.is_empty() {
        UNKNOWN.to_string()
    } else {
        parts.join(" ")
    }
}

fn risk_summary(risk: &RiskInfo, use_color: bool) -> String {
    let flags: Vec<&str> = [
        (risk.is_mobile, "mobile"),
        (risk.is_vpn, "vpn"),
        (risk.is_tor, "tor"),
        (risk.is_proxy, "proxy"),
        (risk.is_datacenter, "datacenter"),
    ]
    .iter()
    .filter(|(set, _)| *set)
    .map(|(_, name)| *name)
    .collect();

    let flags = if flags.is_empty() {
        "none".to_string()
    } else {
        flags.join(", ")
    };
    let summary = format!("score {} [{}]", risk.risk_score, flags);

    if use_color && risk.is_anonymized() {
        #[cfg(feature = "colored-output")]
        {
            return summary.red().to_string();
        }
    }
    summary
}
