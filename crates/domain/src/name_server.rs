use std::fmt;
use std::net::IpAddr;

/// A server the walker queries. Known by name, optionally with an address
/// from glue or root hints; without one it must be forward-resolved first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameServer {
    pub name: String,
    pub address: Option<IpAddr>,
}

impl NameServer {
    pub fn new(name: impl Into<String>, address: Option<IpAddr>) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }

    pub fn with_address(name: impl Into<String>, address: IpAddr) -> Self {
        Self::new(name, Some(address))
    }

    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::new(name, None)
    }
}

impl fmt::Display for NameServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.address {
            Some(addr) => write!(f, "{} ({})", self.name, addr),
            None => write!(f, "{}", self.name),
        }
    }
}
