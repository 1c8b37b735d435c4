//! CLI module for ipquery-rs
//!
//! This module handles command line argument parsing and query dispatch.

use crate::api::{IpInfo, IpQueryClient};
use crate::config::AppConfig;
use crate::error::{IpQueryError, Result};
use crate::output::formatter;
use crate::utils::path;
use clap::Parser;
use std::io::{self, BufRead};

#[derive(Parser, Debug)]
#[command(name = "ipquery-rs")]
#[command(version, about = "Query IP geolocation, ISP and risk information from ipquery.io")]
#[command(long_about = "ipquery-rs looks up IP addresses with the ipquery.io API.\n\n\
    With no arguments it prints your own public IP. Several addresses are\n\
    sent as one bulk request. Addresses can also be piped in, one per line.\n\n\
    Examples:\n  \
    $ ipquery-rs\n  \
    $ ipquery-rs 8.8.8.8\n  \
    $ ipquery-rs 8.8.8.8 1.1.1.1 --json\n  \
    $ cat ips.txt | ipquery-rs --short")]
pub struct Cli {
    /// IP addresses to look up (read from stdin when piped and none given)
    #[arg(value_name = "IP")]
    pub queries: Vec<String>,

    /// Output JSON
    #[arg(short, long)]
    pub json: bool,

    /// One line per address
    #[arg(short, long, conflicts_with = "json")]
    pub short: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Request timeout in seconds (0 disables)
    #[arg(short, long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Alternative API endpoint
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Configuration file to use instead of the default
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// Show detailed logs
    #[arg(short, long)]
    pub verbose: bool,
}

/// What a single invocation asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryMode {
    OwnIp,
    Single(String),
    Bulk(Vec<String>),
}

impl QueryMode {
    /// Pick the request shape for a list of addresses
    pub fn from_queries(queries: Vec<String>) -> Self {
        match queries.len() {
            0 => QueryMode::OwnIp,
            1 => QueryMode::Single(queries.into_iter().next().unwrap_or_default()),
            _ => QueryMode::Bulk(queries),
        }
    }
}

impl Cli {
    /// Load the configuration this invocation asks for
    pub fn load_config(&self) -> Result<AppConfig> {
        match &self.config {
            Some(custom) => AppConfig::load_from(&path::expand_tilde(custom)),
            None => AppConfig::load(),
        }
    }

    /// Apply CLI options on top of the loaded configuration
    pub fn apply_to(&self, config: &mut AppConfig) {
        if self.json {
            config.output.json = true;
        }
        if self.no_color {
            config.output.enable_colors = false;
        }
        if self.verbose {
            config.global.verbose = true;
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_secs = timeout;
        }
        if let Some(ref base_url) = self.base_url {
            config.api.base_url = base_url.clone();
        }
    }

    /// Run the queries with a configuration that already has CLI options applied
    pub async fn run(&self, config: AppConfig) -> Result<()> {
        let client = IpQueryClient::from_config(&config.api)?;
        log::debug!("Using endpoint {}", client.base_url());

        let queries = if self.queries.is_empty() && !atty::is(atty::Stream::Stdin) {
            read_queries(io::stdin().lock())?
        } else {
            self.queries.clone()
        };

        match QueryMode::from_queries(queries) {
            QueryMode::OwnIp => {
                let ip = client.query_own_ip().await?;
                if config.output.json {
                    println!("{}", formatter::format_json(&serde_json::json!({ "ip": ip }))?);
                } else {
                    println!("{}", ip);
                }
            }
            QueryMode::Single(ip) => {
                let info = client.query_ip(&ip).await?;
                self.print_results(std::slice::from_ref(&info), false, &config)?;
            }
            QueryMode::Bulk(ips) => {
                let infos = client.query_bulk(&ips).await?;
                if infos.len() != ips.len() {
                    log::warn!("Requested {} addresses, API returned {}", ips.len(), infos.len());
                }
                self.print_results(&infos, true, &config)?;
            }
        }

        Ok(())
    }

    fn print_results(&self, infos: &[IpInfo], as_list: bool, config: &AppConfig) -> Result<()> {
        if config.output.json {
            println!("{}", render_json(infos, as_list)?);
        } else if self.short {
            for info in infos {
                println!("{}", formatter::format_compact(info));
            }
        } else {
            println!("{}", formatter::format_text_list(infos, config.output.enable_colors));
        }
        Ok(())
    }
}

/// JSON for a result set: an array for bulk queries, an object otherwise
pub fn render_json(infos: &[IpInfo], as_list: bool) -> Result<String> {
    let json = match infos {
        [single] if !as_list => formatter::format_json(single)?,
        many => formatter::format_json(many)?,
    };
    Ok(json)
}

/// Read one address per line, skipping blanks and `#` comments
pub fn read_queries<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut queries = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(IpQueryError::IoError)?;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        queries.push(trimmed.to_string());
    }

    Ok(queries)
}
