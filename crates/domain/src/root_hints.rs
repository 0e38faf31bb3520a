use super::NameServer;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RootHint {
    pub name: String,
    pub address: IpAddr,
}

impl RootHint {
    pub fn new(name: impl Into<String>, address: IpAddr) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }

    pub fn to_name_server(&self) -> NameServer {
        NameServer::with_address(self.name.clone(), self.address)
    }
}

const IANA_ROOT_SERVERS: [(&str, [u8; 4]); 13] = [
    ("a.root-servers.net", [198, 41, 0, 4]),
    ("b.root-servers.net", [170, 247, 170, 2]),
    ("c.root-servers.net", [192, 33, 4, 12]),
    ("d.root-servers.net", [199, 7, 91, 13]),
    ("e.root-servers.net", [192, 203, 230, 10]),
    ("f.root-servers.net", [192, 5, 5, 241]),
    ("g.root-servers.net", [192, 112, 36, 4]),
    ("h.root-servers.net", [198, 97, 190, 53]),
    ("i.root-servers.net", [192, 36, 148, 17]),
    ("j.root-servers.net", [192, 58, 128, 30]),
    ("k.root-servers.net", [193, 0, 14, 129]),
    ("l.root-servers.net", [199, 7, 83, 42]),
    ("m.root-servers.net", [202, 12, 27, 33]),
];

/// The thirteen IANA root servers with their IPv4 addresses.
pub fn default_root_hints() -> Vec<RootHint> {
    IANA_ROOT_SERVERS
        .iter()
        .map(|(name, octets)| RootHint::new(*name, IpAddr::V4(Ipv4Addr::from(*octets))))
        .collect()
}
