use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// File the nameserver list is read from
    #[serde(default = "default_resolv_conf")]
    pub resolv_conf: String,

    /// Port queries are sent to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on the wait for a reply, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Receive buffer size; longer datagrams are cut at this length
    #[serde(default = "default_max_response_size")]
    pub max_response_size: usize,
}

impl ResolverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            resolv_conf: default_resolv_conf(),
            port: default_port(),
            timeout_ms: default_timeout_ms(),
            max_response_size: default_max_response_size(),
        }
    }
}

fn default_resolv_conf() -> String {
    "/etc/resolv.conf".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_max_response_size() -> usize {
    1024
}
