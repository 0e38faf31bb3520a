use async_trait::async_trait;
use dnstrace_application::ports::AddressResolver;
use dnstrace_domain::DomainError;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// Forward resolution through the operating system's resolver.
///
/// Used only for name servers that arrive without glue. IPv4 answers are
/// preferred so the follow-up query works on v4-only hosts.
pub struct SystemAddressResolver {
    timeout: Duration,
}

impl SystemAddressResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn failure(hostname: &str, reason: impl Into<String>) -> DomainError {
        DomainError::AddressResolutionFailed {
            hostname: hostname.to_string(),
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl AddressResolver for SystemAddressResolver {
    async fn resolve_address(&self, hostname: &str) -> Result<IpAddr, DomainError> {
        debug!(hostname = %hostname, "Resolving name server address");

        let addrs: Vec<SocketAddr> =
            tokio::time::timeout(self.timeout, tokio::net::lookup_host((hostname, 53)))
                .await
                .map_err(|_| Self::failure(hostname, "timed out"))?
                .map_err(|e| Self::failure(hostname, e.to_string()))?
                .collect();

        let address = pick_preferred(&addrs)
            .ok_or_else(|| Self::failure(hostname, "no addresses returned"))?;

        debug!(hostname = %hostname, address = %address, candidates = addrs.len(), "Resolved");
        Ok(address)
    }
}

fn pick_preferred(addrs: &[SocketAddr]) -> Option<IpAddr> {
    addrs
        .iter()
        .find(|a| a.is_ipv4())
        .or_else(|| addrs.first())
        .map(SocketAddr::ip)
}
