use crate::root_hints::{default_root_hints, RootHint};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WalkerConfig {
    /// Per-query timeout in seconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Referral steps allowed before the walk ends with `TooManyReferrals`
    #[serde(default = "default_max_referrals")]
    pub max_referrals: usize,

    /// Re-send a truncated UDP reply's query over TCP to the same server
    #[serde(default = "default_true")]
    pub tcp_fallback: bool,

    /// Fixed seed for root and delegation choices; random when absent
    #[serde(default)]
    pub random_seed: Option<u64>,

    #[serde(default = "default_root_hints")]
    pub root_servers: Vec<RootHint>,
}

impl WalkerConfig {
    pub fn query_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.query_timeout)
    }
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            query_timeout: default_query_timeout(),
            max_referrals: default_max_referrals(),
            tcp_fallback: true,
            random_seed: None,
            root_servers: default_root_hints(),
        }
    }
}

fn default_query_timeout() -> u64 {
    5
}

fn default_max_referrals() -> usize {
    30
}

fn default_true() -> bool {
    true
}
