#![allow(dead_code)]

use hickory_proto::op::{Message, MessageType, OpCode};
use hickory_proto::rr::rdata::{A, AAAA, NS};
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Udp,
    Tcp,
}

/// Builds the reply for a request; `None` means stay silent.
pub type Handler = Arc<dyn Fn(&Message, Protocol) -> Option<Message> + Send + Sync>;

/// UDP and TCP DNS server on one loopback address and port.
pub struct MockDnsServer {
    addr: SocketAddr,
    tasks: Vec<JoinHandle<()>>,
}

impl MockDnsServer {
    pub async fn start(handler: Handler) -> std::io::Result<Self> {
        let mut last_error = None;
        for _ in 0..10 {
            let udp = UdpSocket::bind("127.0.0.1:0").await?;
            let addr = udp.local_addr()?;
            match TcpListener::bind(addr).await {
                Ok(tcp) => return Ok(Self::spawn(udp, tcp, handler)),
                Err(e) => last_error = Some(e),
            }
        }
        Err(last_error.unwrap())
    }

    pub async fn start_on(ip: Ipv4Addr, port: u16, handler: Handler) -> std::io::Result<Self> {
        let addr = SocketAddr::from((ip, port));
        let udp = UdpSocket::bind(addr).await?;
        let tcp = TcpListener::bind(addr).await?;
        Ok(Self::spawn(udp, tcp, handler))
    }

    fn spawn(udp: UdpSocket, tcp: TcpListener, handler: Handler) -> Self {
        let addr = udp.local_addr().unwrap();

        let udp_handler = handler.clone();
        let udp_task = tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];
            while let Ok((len, peer)) = udp.recv_from(&mut buf).await {
                let Ok(request) = Message::from_vec(&buf[..len]) else {
                    continue;
                };
                if let Some(reply) = udp_handler(&request, Protocol::Udp) {
                    let _ = udp.send_to(&encode(&reply), peer).await;
                }
            }
        });

        let tcp_task = tokio::spawn(async move {
            while let Ok((mut stream, _)) = tcp.accept().await {
                let handler = handler.clone();
                tokio::spawn(async move {
                    let mut len_buf = [0u8; 2];
                    if stream.read_exact(&mut len_buf).await.is_err() {
                        return;
                    }
                    let mut body = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                    if stream.read_exact(&mut body).await.is_err() {
                        return;
                    }
                    let Ok(request) = Message::from_vec(&body) else {
                        return;
                    };
                    if let Some(reply) = handler(&request, Protocol::Tcp) {
                        let bytes = encode(&reply);
                        let _ = stream.write_all(&(bytes.len() as u16).to_be_bytes()).await;
                        let _ = stream.write_all(&bytes).await;
                        let _ = stream.flush().await;
                    }
                });
            }
        });

        Self {
            addr,
            tasks: vec![udp_task, tcp_task],
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn ip(&self) -> IpAddr {
        self.addr.ip()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

pub fn handler<F>(f: F) -> Handler
where
    F: Fn(&Message, Protocol) -> Option<Message> + Send + Sync + 'static,
{
    Arc::new(f)
}

pub fn encode(message: &Message) -> Vec<u8> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message.emit(&mut encoder).unwrap();
    buf
}

/// Response skeleton echoing the request's id and question.
pub fn response_to(request: &Message) -> Message {
    let mut response = Message::new(request.id(), MessageType::Response, OpCode::Query);
    for query in request.queries() {
        response.add_query(query.clone());
    }
    response
}

pub fn name(text: &str) -> Name {
    Name::from_str(text).unwrap()
}

pub fn a_record(owner: &str, ttl: u32, ip: Ipv4Addr) -> Record {
    Record::from_rdata(name(owner), ttl, RData::A(A(ip)))
}

pub fn aaaa_record(owner: &str, ttl: u32, ip: Ipv6Addr) -> Record {
    Record::from_rdata(name(owner), ttl, RData::AAAA(AAAA(ip)))
}

pub fn ns_record(owner: &str, ttl: u32, target: &str) -> Record {
    Record::from_rdata(name(owner), ttl, RData::NS(NS(name(target))))
}
