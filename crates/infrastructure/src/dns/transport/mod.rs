pub mod iterative;
pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use bytes::Bytes;
use dnstrace_domain::DomainError;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

pub use iterative::IterativeTransport;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Bytes,

    pub protocol_used: &'static str,
}

/// Moves raw DNS messages to one server over one protocol.
#[async_trait]
pub trait WireTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;
}

pub(crate) fn timeout_error(server: SocketAddr) -> DomainError {
    DomainError::TransportTimeout {
        server: server.ip().to_string(),
    }
}

pub(crate) fn io_error(server: SocketAddr, error: &io::Error) -> DomainError {
    match error.kind() {
        io::ErrorKind::ConnectionRefused | io::ErrorKind::ConnectionReset => {
            DomainError::TransportConnectionRefused {
                server: server.ip().to_string(),
            }
        }
        _ => DomainError::IoError {
            server: server.ip().to_string(),
            reason: error.to_string(),
        },
    }
}
