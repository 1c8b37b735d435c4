//! URL construction for ipquery.io requests

use crate::error::{IpQueryError, Result};

/// Default API endpoint
pub const BASE_URL: &str = "https://api.ipquery.io/";

/// Ensure the base URL ends with exactly one path separator
pub fn normalize_base_url(base: &str) -> String {
    let trimmed = base.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

/// URL for a single IP lookup. The IP is not validated.
pub fn single_url(base: &str, ip: &str) -> String {
    format!("{}{}", base, ip)
}

/// URL for a bulk lookup: IPs joined with raw commas into one segment
pub fn bulk_url<S: AsRef<str>>(base: &str, ips: &[S]) -> Result<String> {
    if ips.is_empty() {
        return Err(IpQueryError::invalid_input(
            "bulk query requires at least one IP address",
        ));
    }

    let joined = ips.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
    Ok(format!("{}{}", base, joined))
}

/// URL that asks the API for the caller's own address
pub fn own_ip_url(base: &str) -> String {
    base.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("https://api.ipquery.io"), BASE_URL);
        assert_eq!(normalize_base_url("https://api.ipquery.io/"), BASE_URL);
        assert_eq!(normalize_base_url(" http://127.0.0.1:8080 "), "http://127.0.0.1:8080/");
    }

    #[test]
    fn test_single_url() {
        assert_eq!(single_url(BASE_URL, "8.8.8.8"), "https://api.ipquery.io/8.8.8.8");
        assert_eq!(
            single_url(BASE_URL, "2001:4860:4860::8888"),
            "https://api.ipquery.io/2001:4860:4860::8888"
        );
    }

    #[test]
    fn test_bulk_url() {
        let url = bulk_url(BASE_URL, &["8.8.8.8", "1.1.1.1", "9.9.9.9"]).unwrap();
        assert_eq!(url, "https://api.ipquery.io/8.8.8.8,1.1.1.1,9.9.9.9");

        let owned = vec!["1.1.1.1".to_string()];
        assert_eq!(bulk_url(BASE_URL, &owned).unwrap(), "https://api.ipquery.io/1.1.1.1");
    }

    #[test]
    fn test_bulk_url_rejects_empty() {
        let empty: [&str; 0] = [];
        let err = bulk_url(BASE_URL, &empty).unwrap_err();
        assert!(matches!(err, IpQueryError::InvalidInput(_)));
    }

    #[test]
    fn test_own_ip_url() {
        assert_eq!(own_ip_url(BASE_URL), "https://api.ipquery.io/");
    }
}
