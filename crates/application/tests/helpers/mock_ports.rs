#![allow(dead_code)]

use async_trait::async_trait;
use dnstrace_application::ports::{
    AddressResolver, DnsTransport, RandomSource, RandomSourceFactory,
};
use dnstrace_application::services::RootServerSelector;
use dnstrace_application::use_cases::TraceLookupUseCase;
use dnstrace_domain::{DnsMessage, DnsRecord, DomainError, RecordType, RootHint};
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Clone)]
pub enum MockReply {
    Message(DnsMessage),
    Error(DomainError),
    Delayed(Duration, DnsMessage),
}

/// Transport scripted per server address.
#[derive(Default)]
pub struct MockTransport {
    replies: Mutex<HashMap<IpAddr, MockReply>>,
    queried: Mutex<Vec<(IpAddr, String, RecordType)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, server: &str, reply: MockReply) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(server.parse().unwrap(), reply);
        self
    }

    pub fn message(self, server: &str, message: DnsMessage) -> Self {
        self.reply(server, MockReply::Message(message))
    }

    pub fn queried(&self) -> Vec<(IpAddr, String, RecordType)> {
        self.queried.lock().unwrap().clone()
    }

    pub fn queried_servers(&self) -> Vec<IpAddr> {
        self.queried().into_iter().map(|(ip, _, _)| ip).collect()
    }
}

#[async_trait]
impl DnsTransport for MockTransport {
    async fn query(
        &self,
        server: IpAddr,
        name: &str,
        record_type: RecordType,
        _timeout: Duration,
    ) -> Result<DnsMessage, DomainError> {
        self.queried
            .lock()
            .unwrap()
            .push((server, name.to_string(), record_type));

        let reply = self.replies.lock().unwrap().get(&server).cloned();
        match reply {
            Some(MockReply::Message(message)) => Ok(message),
            Some(MockReply::Error(error)) => Err(error),
            Some(MockReply::Delayed(delay, message)) => {
                tokio::time::sleep(delay).await;
                Ok(message)
            }
            None => Err(DomainError::TransportConnectionRefused {
                server: server.to_string(),
            }),
        }
    }
}

#[derive(Default)]
pub struct MockAddressResolver {
    addresses: Mutex<HashMap<String, IpAddr>>,
    lookups: Mutex<Vec<String>>,
}

impl MockAddressResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(self, hostname: &str, address: &str) -> Self {
        self.addresses
            .lock()
            .unwrap()
            .insert(hostname.to_string(), address.parse().unwrap());
        self
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl AddressResolver for MockAddressResolver {
    async fn resolve_address(&self, hostname: &str) -> Result<IpAddr, DomainError> {
        self.lookups.lock().unwrap().push(hostname.to_string());
        self.addresses
            .lock()
            .unwrap()
            .get(hostname)
            .copied()
            .ok_or_else(|| DomainError::AddressResolutionFailed {
                hostname: hostname.to_string(),
                reason: "no such host".to_string(),
            })
    }
}

/// Replays a fixed sequence of indices, repeating the last one. As a
/// factory it hands every walk a fresh replay from the start.
#[derive(Clone)]
pub struct SequenceRandom {
    picks: Vec<usize>,
    position: usize,
}

impl SequenceRandom {
    pub fn new(picks: Vec<usize>) -> Self {
        Self { picks, position: 0 }
    }

    pub fn always(index: usize) -> Self {
        Self::new(vec![index])
    }
}

impl RandomSource for SequenceRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        let pick = self
            .picks
            .get(self.position)
            .or_else(|| self.picks.last())
            .copied()
            .unwrap_or(0);
        self.position += 1;
        pick % len
    }
}

impl RandomSourceFactory for SequenceRandom {
    fn for_walk(&self) -> Box<dyn RandomSource> {
        Box::new(self.clone())
    }
}

pub const ROOT_NAME: &str = "k.root-servers.net";
pub const ROOT_ADDR: &str = "193.0.14.129";

pub fn single_root() -> Vec<RootHint> {
    vec![RootHint::new(ROOT_NAME, ROOT_ADDR.parse().unwrap())]
}

pub fn build_use_case(
    transport: Arc<MockTransport>,
    resolver: Arc<MockAddressResolver>,
    random: Arc<dyn RandomSourceFactory>,
) -> TraceLookupUseCase {
    let roots = RootServerSelector::new(&single_root()).unwrap();
    TraceLookupUseCase::new(transport, resolver, roots, random)
}

pub fn referral(ns_names: &[&str], glue: Vec<DnsRecord>) -> DnsMessage {
    let authority = ns_names
        .iter()
        .map(|ns| DnsRecord::ns("example.com", 172800, *ns))
        .collect();
    DnsMessage::new(false)
        .with_authority(authority)
        .with_additional(glue)
}

pub fn glue_a(name: &str, octets: [u8; 4]) -> DnsRecord {
    DnsRecord::a(name, 172800, Ipv4Addr::from(octets))
}
