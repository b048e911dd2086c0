use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

/// Public resolver queried when nothing else is configured.
pub const DEFAULT_UPSTREAM: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)),
    53,
);

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_address")]
    pub address: SocketAddr,

    /// Upper bound for one whole exchange, including any TCP retry.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl UpstreamConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_address() -> SocketAddr {
    DEFAULT_UPSTREAM
}

fn default_timeout_ms() -> u64 {
    5000
}
