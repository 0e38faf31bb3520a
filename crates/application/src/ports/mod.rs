mod address_resolver;
mod dns_transport;
mod random_source;

pub use address_resolver::AddressResolver;
pub use dns_transport::DnsTransport;
pub use random_source::{RandomSource, RandomSourceFactory};

// Re-export for convenience
pub use dnstrace_domain::{DnsMessage, DnsQuery};
