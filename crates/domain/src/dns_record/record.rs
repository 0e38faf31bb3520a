use super::{RecordData, RecordType};
use std::net::IpAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsRecord {
    pub name: String,

    pub record_type: RecordType,

    pub ttl: u32,

    pub data: RecordData,
}

impl DnsRecord {
    pub fn new(name: impl Into<String>, record_type: RecordType, ttl: u32, data: RecordData) -> Self {
        Self {
            name: name.into(),
            record_type,
            ttl,
            data,
        }
    }

    pub fn a(name: impl Into<String>, ttl: u32, address: std::net::Ipv4Addr) -> Self {
        Self::new(name, RecordType::A, ttl, RecordData::A(address))
    }

    pub fn aaaa(name: impl Into<String>, ttl: u32, address: std::net::Ipv6Addr) -> Self {
        Self::new(name, RecordType::AAAA, ttl, RecordData::AAAA(address))
    }

    pub fn ns(name: impl Into<String>, ttl: u32, nsdname: impl Into<String>) -> Self {
        Self::new(name, RecordType::NS, ttl, RecordData::NS(nsdname.into()))
    }

    pub fn address(&self) -> Option<IpAddr> {
        self.data.address()
    }

    pub fn ns_name(&self) -> Option<&str> {
        self.data.ns_name()
    }
}
