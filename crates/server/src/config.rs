//! Server configuration from command-line flags and environment variables.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_BIND: &str = "127.0.0.1:8001";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Parser, Debug, Clone)]
#[command(name = "seoscore-server", version, about = "HTTP API for scoring and storing SEO articles")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(short, long, env = "SEOSCORE_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// PostgreSQL connection string (articles are kept in memory when unset)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "SEOSCORE_REQUEST_TIMEOUT", default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS)]
    pub request_timeout: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}
