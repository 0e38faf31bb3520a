use super::record_type_map::RecordTypeMapper;
use dnstrace_domain::{DnsMessage, DnsRecord, DomainError, RecordData, ResponseCode};
use hickory_proto::op::{Message, MessageType, ResponseCode as HickoryResponseCode};
use hickory_proto::rr::{Name, RData, Record};
use std::net::SocketAddr;
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    pub fn decode(response_bytes: &[u8], server: SocketAddr) -> Result<Message, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse {
                server: server.ip().to_string(),
                reason: format!("failed to parse DNS response: {}", e),
            }
        })?;

        if message.message_type() != MessageType::Response {
            return Err(DomainError::InvalidDnsResponse {
                server: server.ip().to_string(),
                reason: "reply is not a response".to_string(),
            });
        }

        Ok(message)
    }

    /// Converts every section of a decoded reply into domain records,
    /// keeping the order the server sent them in.
    pub fn to_domain(message: &Message) -> DnsMessage {
        let parsed = DnsMessage {
            authoritative: message.header().authoritative(),
            truncated: message.truncated(),
            response_code: map_response_code(message.response_code()),
            answers: message.answers().iter().map(Self::convert_record).collect(),
            authority: message
                .name_servers()
                .iter()
                .map(Self::convert_record)
                .collect(),
            additional: message
                .additionals()
                .iter()
                .map(Self::convert_record)
                .collect(),
        };

        debug!(
            rcode = %parsed.response_code,
            authoritative = parsed.authoritative,
            truncated = parsed.truncated,
            answers = parsed.answers.len(),
            authority = parsed.authority.len(),
            additional = parsed.additional.len(),
            "DNS response parsed"
        );

        parsed
    }

    pub fn convert_record(record: &Record) -> DnsRecord {
        DnsRecord::new(
            presentation_name(record.name()),
            RecordTypeMapper::from_hickory(record.record_type()),
            record.ttl(),
            convert_rdata(record.data()),
        )
    }
}

fn convert_rdata(rdata: &RData) -> RecordData {
    match rdata {
        RData::A(a) => RecordData::A(a.0),
        RData::AAAA(aaaa) => RecordData::AAAA(aaaa.0),
        RData::NS(ns) => RecordData::NS(presentation_name(&ns.0)),
        RData::CNAME(cname) => RecordData::CNAME(presentation_name(&cname.0)),
        RData::PTR(ptr) => RecordData::PTR(presentation_name(&ptr.0)),
        RData::MX(mx) => RecordData::MX {
            preference: mx.preference(),
            exchange: presentation_name(mx.exchange()),
        },
        RData::TXT(txt) => RecordData::TXT(
            txt.txt_data()
                .iter()
                .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
                .collect(),
        ),
        RData::SOA(soa) => RecordData::SOA {
            mname: presentation_name(soa.mname()),
            rname: presentation_name(soa.rname()),
            serial: soa.serial(),
            refresh: soa.refresh() as u32,
            retry: soa.retry() as u32,
            expire: soa.expire() as u32,
            minimum: soa.minimum(),
        },
        other => RecordData::Other {
            text: other.to_string(),
        },
    }
}

/// Names without the trailing root dot; the root itself stays `"."`.
fn presentation_name(name: &Name) -> String {
    let text = name.to_utf8();
    match text.strip_suffix('.') {
        Some("") | None => text,
        Some(stripped) => stripped.to_string(),
    }
}

fn map_response_code(rcode: HickoryResponseCode) -> ResponseCode {
    match rcode {
        HickoryResponseCode::NoError => ResponseCode::NoError,
        HickoryResponseCode::FormErr => ResponseCode::FormErr,
        HickoryResponseCode::ServFail => ResponseCode::ServFail,
        HickoryResponseCode::NXDomain => ResponseCode::NXDomain,
        HickoryResponseCode::NotImp => ResponseCode::NotImp,
        HickoryResponseCode::Refused => ResponseCode::Refused,
        other => ResponseCode::Other(u16::from(other)),
    }
}
