#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use dnstrace_api::{create_api_routes, AppState};
use dnstrace_application::ports::{
    AddressResolver, DnsTransport, RandomSource, RandomSourceFactory,
};
use dnstrace_application::services::RootServerSelector;
use dnstrace_application::use_cases::TraceLookupUseCase;
use dnstrace_domain::{DnsMessage, DomainError, RecordType, RootHint};
use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

pub const ROOT_ADDR: &str = "198.41.0.4";

/// Answers per server address; unknown servers refuse the connection.
#[derive(Default)]
pub struct StubTransport {
    replies: HashMap<IpAddr, DnsMessage>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, server: &str, message: DnsMessage) -> Self {
        self.replies.insert(server.parse().unwrap(), message);
        self
    }
}

#[async_trait]
impl DnsTransport for StubTransport {
    async fn query(
        &self,
        server: IpAddr,
        _name: &str,
        _record_type: RecordType,
        _timeout: Duration,
    ) -> Result<DnsMessage, DomainError> {
        self.replies
            .get(&server)
            .cloned()
            .ok_or(DomainError::TransportConnectionRefused {
                server: server.to_string(),
            })
    }
}

pub struct NoAddressResolver;

#[async_trait]
impl AddressResolver for NoAddressResolver {
    async fn resolve_address(&self, hostname: &str) -> Result<IpAddr, DomainError> {
        Err(DomainError::AddressResolutionFailed {
            hostname: hostname.to_string(),
            reason: "disabled in tests".to_string(),
        })
    }
}

pub struct FirstChoice;

impl RandomSource for FirstChoice {
    fn pick_index(&mut self, _len: usize) -> usize {
        0
    }
}

impl RandomSourceFactory for FirstChoice {
    fn for_walk(&self) -> Box<dyn RandomSource> {
        Box::new(FirstChoice)
    }
}

pub fn create_test_app(transport: StubTransport) -> Router {
    let hints = vec![RootHint::new("a.root-servers.net", ROOT_ADDR.parse().unwrap())];
    let lookup = TraceLookupUseCase::new(
        Arc::new(transport),
        Arc::new(NoAddressResolver),
        RootServerSelector::new(&hints).unwrap(),
        Arc::new(FirstChoice),
    );

    create_api_routes(AppState {
        lookup: Arc::new(lookup),
    })
}
