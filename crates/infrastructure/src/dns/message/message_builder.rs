//! DNS Message Builder
//!
//! Constructs iterative (non-recursive) query messages in wire format using
//! `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use dnstrace_domain::{DomainError, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a query for `domain` and return its id with the wire bytes.
    ///
    /// The RD (Recursion Desired) flag is left clear: every server on the
    /// delegation path is asked only for what it knows itself.
    pub fn build_query(
        domain: &str,
        record_type: &RecordType,
    ) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Name::from_str(&fully_qualified(domain))
            .map_err(|e| DomainError::InvalidDomainName(format!("{}: {}", domain, e)))?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(false);
        message.add_query(query);

        let bytes = Self::serialize_message(&message, domain)?;
        Ok((id, bytes))
    }

    fn serialize_message(message: &Message, domain: &str) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("{}: failed to encode query: {}", domain, e))
        })?;

        Ok(buf)
    }
}

fn fully_qualified(domain: &str) -> String {
    if domain.ends_with('.') {
        domain.to_string()
    } else {
        format!("{}.", domain)
    }
}
