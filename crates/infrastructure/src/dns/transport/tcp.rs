//! TCP Transport for DNS queries (RFC 1035 §4.2.2)
//!
//! Each message carries a two-byte big-endian length prefix. One connection
//! per exchange; it is closed when the transport returns.

use super::{io_error, timeout_error, TransportResponse, WireTransport};
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use dnstrace_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::Instant;
use tracing::debug;

pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }
}

#[async_trait]
impl WireTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let deadline = Instant::now() + timeout;
        let server_addr = self.server_addr;

        let mut stream = tokio::time::timeout_at(deadline, TcpStream::connect(server_addr))
            .await
            .map_err(|_| timeout_error(server_addr))?
            .map_err(|e| io_error(server_addr, &e))?;

        stream
            .set_nodelay(true)
            .map_err(|e| io_error(server_addr, &e))?;

        tokio::time::timeout_at(deadline, send_with_length_prefix(&mut stream, message_bytes))
            .await
            .map_err(|_| timeout_error(server_addr))?
            .map_err(|e| io_error(server_addr, &e))?;

        debug!(
            server = %server_addr,
            message_len = message_bytes.len(),
            "TCP query sent"
        );

        let response_bytes =
            tokio::time::timeout_at(deadline, read_with_length_prefix(&mut stream))
                .await
                .map_err(|_| timeout_error(server_addr))?
                .map_err(|e| io_error(server_addr, &e))?;

        debug!(
            server = %server_addr,
            response_len = response_bytes.len(),
            "TCP response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes,
            protocol_used: "TCP",
        })
    }
}

pub(crate) async fn send_with_length_prefix<S>(
    stream: &mut S,
    message_bytes: &[u8],
) -> std::io::Result<()>
where
    S: AsyncWriteExt + Unpin,
{
    let length = u16::try_from(message_bytes.len()).map_err(|_| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "DNS message too large")
    })?;

    stream.write_all(&length.to_be_bytes()).await?;
    stream.write_all(message_bytes).await?;
    stream.flush().await
}

pub(crate) async fn read_with_length_prefix<S>(stream: &mut S) -> std::io::Result<Bytes>
where
    S: AsyncReadExt + Unpin,
{
    let mut len_buf = [0u8; 2];
    stream.read_exact(&mut len_buf).await?;

    let response_len = u16::from_be_bytes(len_buf) as usize;
    let mut response = BytesMut::zeroed(response_len);
    stream.read_exact(&mut response).await?;

    Ok(response.freeze())
}
