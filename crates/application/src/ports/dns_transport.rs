use async_trait::async_trait;
use dnstrace_domain::{DnsMessage, DomainError, RecordType};
use std::net::IpAddr;
use std::time::Duration;

/// Sends one non-recursive question to one server and returns its reply.
///
/// Implementations must give up after `timeout` and must not retry against
/// another server.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn query(
        &self,
        server: IpAddr,
        name: &str,
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<DnsMessage, DomainError>;
}
