use async_trait::async_trait;
use dnstrace_domain::DomainError;
use std::net::IpAddr;

/// Forward resolution of a name server host name that arrived without glue.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    async fn resolve_address(&self, hostname: &str) -> Result<IpAddr, DomainError>;
}
