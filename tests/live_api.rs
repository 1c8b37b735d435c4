//! Tests against the real ipquery.io service
//!
//! These depend on external network access and on the provider's data,
//! so they are ignored by default. Run with `cargo test -- --ignored`.

use ipquery::IpQueryClient;

fn assert_google_dns(info: &ipquery::IpInfo) {
    assert_eq!(info.ip, "8.8.8.8");
    assert_eq!(info.isp.asn, "AS15169");
    assert_eq!(info.isp.organization, "Google LLC");
    assert_eq!(info.isp.name, "Google LLC");

    assert_eq!(info.location.country, "United States");
    assert_eq!(info.location.country_code, "US");
    assert_eq!(info.location.city, "Mountain View");
    assert_eq!(info.location.state, "California");
    assert_eq!(info.location.zipcode, "94043");
    assert!((info.location.latitude - 37.436551599813335).abs() < 0.0001);
    assert!((info.location.longitude + 122.09383799087185).abs() < 0.0001);
    assert_eq!(info.location.timezone, "America/Los_Angeles");

    assert!(!info.risk.is_mobile);
    assert!(!info.risk.is_vpn);
    assert!(!info.risk.is_tor);
    assert!(!info.risk.is_proxy);
}

#[tokio::test]
#[ignore]
async fn test_live_query_ip() {
    let client = IpQueryClient::new().unwrap();
    let info = client.query_ip("8.8.8.8").await.unwrap();
    assert_google_dns(&info);
}

#[tokio::test]
#[ignore]
async fn test_live_query_bulk() {
    let client = IpQueryClient::new().unwrap();
    let ips = ["8.8.8.8", "1.1.1.1"];
    let infos = client.query_bulk(&ips).await.unwrap();

    assert_eq!(infos.len(), ips.len());
    for (info, ip) in infos.iter().zip(ips) {
        assert_eq!(info.ip, ip);
    }
    assert_google_dns(&infos[0]);
}

#[tokio::test]
#[ignore]
async fn test_live_query_own_ip() {
    let client = IpQueryClient::new().unwrap();
    let own_ip = client.query_own_ip().await.unwrap();
    let expected_ip = client.query_own_ip().await.unwrap();

    assert!(own_ip.parse::<std::net::IpAddr>().is_ok());
    assert_eq!(own_ip, expected_ip);
}
