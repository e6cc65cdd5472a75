//! Configuration for the company service
//!
//! Command-line flags with environment fallbacks, parsed by clap.

use clap::Parser;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

#[derive(Debug, Clone, Parser)]
#[command(name = "company-api", version, about = "In-memory company directory over HTTP")]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "COMPANY_API_BIND", default_value = DEFAULT_BIND_ADDR)]
    pub bind: SocketAddr,

    /// Emit logs as JSON lines instead of compact text
    #[arg(long, env = "COMPANY_API_LOG_JSON", default_value_t = false)]
    pub log_json: bool,

    /// Default to debug-level logs when RUST_LOG is unset
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            log_json: false,
            verbose: false,
        }
    }
}
