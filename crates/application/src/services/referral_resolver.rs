use dnstrace_domain::dns_name::names_equal;
use dnstrace_domain::{DnsMessage, DnsRecord, DomainError, NameServer, RecordType};
use std::net::IpAddr;
use tracing::debug;

use crate::ports::RandomSource;

/// Turns a non-authoritative response into the next server to ask.
#[derive(Debug, Default)]
pub struct ReferralResolver;

impl ReferralResolver {
    pub fn new() -> Self {
        Self
    }

    /// Picks one delegated name server at random and attaches its glue
    /// address when the additional section carries one. A glue is
    /// preferred over AAAA glue. Without glue the server comes back
    /// name-only and must be forward-resolved before it can be queried.
    pub fn select_next(
        &self,
        message: &DnsMessage,
        from_server: &NameServer,
        random: &mut dyn RandomSource,
    ) -> Result<NameServer, DomainError> {
        let delegated: Vec<&str> = message
            .authority
            .iter()
            .filter_map(DnsRecord::ns_name)
            .collect();

        if delegated.is_empty() {
            return Err(DomainError::MissingDelegation {
                server: from_server.to_string(),
                response_code: message.response_code,
            });
        }

        let index = random.pick_index(delegated.len()) % delegated.len();
        let ns_name = delegated[index];

        let next = match find_glue(&message.additional, ns_name) {
            Some(address) => NameServer::with_address(ns_name, address),
            None => NameServer::unresolved(ns_name),
        };

        debug!(
            from = %from_server,
            candidates = delegated.len(),
            next = %next,
            "Selected delegated name server"
        );

        Ok(next)
    }
}

fn find_glue(additional: &[DnsRecord], ns_name: &str) -> Option<IpAddr> {
    let glue_of = |record_type: RecordType| {
        additional
            .iter()
            .filter(|r| r.record_type == record_type && names_equal(&r.name, ns_name))
            .find_map(DnsRecord::address)
    };

    glue_of(RecordType::A).or_else(|| glue_of(RecordType::AAAA))
}
