use super::tcp::TcpTransport;
use super::udp::UdpTransport;
use super::WireTransport;
use crate::dns::message::{MessageBuilder, RecordTypeMapper, ResponseParser};
use async_trait::async_trait;
use dnstrace_application::ports::DnsTransport;
use dnstrace_domain::dns_name::names_equal;
use dnstrace_domain::{DnsMessage, DomainError, RecordType};
use hickory_proto::op::Message;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

const DNS_PORT: u16 = 53;

/// Asks one server one non-recursive question over UDP, re-asking the same
/// server over TCP when the UDP reply comes back truncated.
pub struct IterativeTransport {
    port: u16,
    tcp_fallback: bool,
}

impl IterativeTransport {
    pub fn new() -> Self {
        Self {
            port: DNS_PORT,
            tcp_fallback: true,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_tcp_fallback(mut self, tcp_fallback: bool) -> Self {
        self.tcp_fallback = tcp_fallback;
        self
    }

    async fn exchange(
        &self,
        transport: &dyn WireTransport,
        server_addr: SocketAddr,
        query: &PendingQuery<'_>,
        timeout: Duration,
    ) -> Result<Message, DomainError> {
        let response = transport.send(&query.bytes, timeout).await?;
        let message = ResponseParser::decode(&response.bytes, server_addr)?;
        query.check_reply(&message, server_addr)?;

        debug!(
            server = %server_addr,
            protocol = response.protocol_used,
            bytes = response.bytes.len(),
            "Reply accepted"
        );

        Ok(message)
    }
}

impl Default for IterativeTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DnsTransport for IterativeTransport {
    async fn query(
        &self,
        server: IpAddr,
        name: &str,
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<DnsMessage, DomainError> {
        let deadline = Instant::now() + timeout;
        let server_addr = SocketAddr::new(server, self.port);
        let (id, bytes) = MessageBuilder::build_query(name, &record_type)?;
        let query = PendingQuery {
            id,
            bytes,
            name,
            record_type,
        };

        let mut message = self
            .exchange(&UdpTransport::new(server_addr), server_addr, &query, timeout)
            .await?;

        if message.truncated() && self.tcp_fallback {
            debug!(server = %server_addr, name = %name, "UDP reply truncated, re-asking over TCP");
            let remaining = deadline.saturating_duration_since(Instant::now());
            message = self
                .exchange(&TcpTransport::new(server_addr), server_addr, &query, remaining)
                .await?;
        }

        Ok(ResponseParser::to_domain(&message))
    }
}

struct PendingQuery<'a> {
    id: u16,
    bytes: Vec<u8>,
    name: &'a str,
    record_type: RecordType,
}

impl PendingQuery<'_> {
    fn check_reply(&self, message: &Message, server_addr: SocketAddr) -> Result<(), DomainError> {
        let invalid = |reason: String| DomainError::InvalidDnsResponse {
            server: server_addr.ip().to_string(),
            reason,
        };

        if message.id() != self.id {
            return Err(invalid(format!(
                "reply id {} does not match query id {}",
                message.id(),
                self.id
            )));
        }

        // Some servers omit the question in error replies; only a present
        // question is checked.
        if let Some(question) = message.queries().first() {
            let question_name = question.name().to_utf8();
            let question_type = RecordTypeMapper::from_hickory(question.query_type());
            if !names_equal(&question_name, self.name) || question_type != self.record_type {
                return Err(invalid(format!(
                    "reply is for {} {}, asked {} {}",
                    question_name, question_type, self.name, self.record_type
                )));
            }
        }

        Ok(())
    }
}
