//! ipquery: Rust client for the ipquery.io IP geolocation API
//!
//! Look up ISP, location and risk information for one address, many
//! addresses in a single request, or the caller's own public address.
//!
//! ```no_run
//! # async fn demo() -> ipquery::Result<()> {
//! let client = ipquery::IpQueryClient::new()?;
//! let info = client.query_ip("8.8.8.8").await?;
//! println!("{} is in {}", info.ip, info.location.country);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod utils;

#[cfg(feature = "blocking")]
pub use api::blocking;

pub use api::{IpInfo, IpQueryClient, IspInfo, LocationInfo, RiskInfo, BASE_URL};
pub use config::{ApiConfig, AppConfig};
pub use error::{IpQueryError, Result};
