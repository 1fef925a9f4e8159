use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Classic DNS message size limit over UDP without EDNS.
pub const LEGACY_UDP_PAYLOAD: u16 = 512;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    #[serde(default = "default_resolv_conf_path")]
    pub resolv_conf_path: String,

    /// Used instead of the first system resolver when set.
    #[serde(default)]
    pub bootstrap_server: Option<String>,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_query_timeout_secs")]
    pub query_timeout_secs: u64,

    #[serde(default = "default_udp_payload_size")]
    pub udp_payload_size: u16,

    /// Delegation hops followed below the root before the walk stops.
    #[serde(default = "default_max_zone_depth")]
    pub max_zone_depth: usize,

    #[serde(default = "default_lookup_timeout_secs")]
    pub lookup_timeout_secs: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            resolv_conf_path: default_resolv_conf_path(),
            bootstrap_server: None,
            port: default_port(),
            query_timeout_secs: default_query_timeout_secs(),
            udp_payload_size: default_udp_payload_size(),
            max_zone_depth: default_max_zone_depth(),
            lookup_timeout_secs: default_lookup_timeout_secs(),
        }
    }
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }
}

fn default_resolv_conf_path() -> String {
    "/etc/resolv.conf".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout_secs() -> u64 {
    5
}

fn default_udp_payload_size() -> u16 {
    4096
}

fn default_max_zone_depth() -> usize {
    2
}

fn default_lookup_timeout_secs() -> u64 {
    5
}
