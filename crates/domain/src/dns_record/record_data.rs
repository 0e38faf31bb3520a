use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Type-specific payload of a resource record.
///
/// Closed set: the walker only interprets addresses and delegated names;
/// everything else keeps its presentation text in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    NS(String),
    CNAME(String),
    PTR(String),
    MX {
        preference: u16,
        exchange: String,
    },
    TXT(Vec<String>),
    SOA {
        mname: String,
        rname: String,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
    Other {
        text: String,
    },
}

impl RecordData {
    pub fn address(&self) -> Option<IpAddr> {
        match self {
            RecordData::A(v4) => Some(IpAddr::V4(*v4)),
            RecordData::AAAA(v6) => Some(IpAddr::V6(*v6)),
            _ => None,
        }
    }

    pub fn ns_name(&self) -> Option<&str> {
        match self {
            RecordData::NS(name) => Some(name),
            _ => None,
        }
    }

    pub fn target_name(&self) -> Option<&str> {
        match self {
            RecordData::NS(name) | RecordData::CNAME(name) | RecordData::PTR(name) => Some(name),
            RecordData::MX { exchange, .. } => Some(exchange),
            _ => None,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::A(v4) => write!(f, "{}", v4),
            RecordData::AAAA(v6) => write!(f, "{}", v6),
            RecordData::NS(name) | RecordData::CNAME(name) | RecordData::PTR(name) => {
                write!(f, "{}", name)
            }
            RecordData::MX {
                preference,
                exchange,
            } => write!(f, "{} {}", preference, exchange),
            RecordData::TXT(strings) => {
                let quoted: Vec<String> = strings.iter().map(|s| format!("\"{}\"", s)).collect();
                write!(f, "{}", quoted.join(" "))
            }
            RecordData::SOA {
                mname,
                rname,
                serial,
                refresh,
                retry,
                expire,
                minimum,
            } => write!(
                f,
                "{} {} {} {} {} {} {}",
                mname, rname, serial, refresh, retry, expire, minimum
            ),
            RecordData::Other { text } => write!(f, "{}", text),
        }
    }
}
