use super::RecordType;
use std::fmt;
use std::sync::Arc;

/// What the user asked to trace: one name and one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
}

impl DnsQuery {
    pub fn new(name: impl AsRef<str>, record_type: RecordType) -> Self {
        let name = name.as_ref().trim();
        Self {
            name: name.strip_suffix('.').unwrap_or(name).into(),
            record_type,
        }
    }
}

impl fmt::Display for DnsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.name, self.record_type)
    }
}
