//! dnstrace Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_name;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod name_server;
pub mod root_hints;
pub mod trace;
pub mod validators;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_message::{DnsMessage, ResponseCode, ResponseKind};
pub use dns_query::DnsQuery;
pub use dns_record::{DnsRecord, RecordData, RecordType};
pub use errors::DomainError;
pub use name_server::NameServer;
pub use root_hints::RootHint;
pub use trace::{Trace, TraceRecorder, TraceStep};
pub use validators::validate_lookup_target;
