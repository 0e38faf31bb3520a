use super::ResponseCode;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid host name '{0}'")]
    InvalidDomainName(String),

    #[error("Private IPs are not allowed: {0}")]
    PrivateAddressNotAllowed(String),

    #[error("Unknown record type: {0}")]
    InvalidRecordType(String),

    #[error("Invalid DNS response from {server}: {reason}")]
    InvalidDnsResponse { server: String, reason: String },

    #[error("Query timeout waiting for {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("I/O error talking to {server}: {reason}")]
    IoError { server: String, reason: String },

    #[error(
        "Response from {server} is not authoritative and has no NS records to follow (rcode {response_code})"
    )]
    MissingDelegation {
        server: String,
        response_code: ResponseCode,
    },

    #[error("Could not resolve address of {hostname}: {reason}")]
    AddressResolutionFailed { hostname: String, reason: String },

    #[error("No root servers configured")]
    NoRootServers,

    #[error("Lookup cancelled")]
    LookupCancelled,

    #[error("Trace already has a terminal step")]
    TraceAlreadyTerminated,

    #[error("Trace step from {actual} does not follow referral to {expected}")]
    TraceChainBroken { expected: String, actual: String },

    #[error("Trace has no terminal step")]
    TraceIncomplete,
}

impl DomainError {
    /// Failures that end a walk with a `TransportError` step rather than
    /// aborting the lookup.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidDnsResponse { .. }
                | DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::IoError { .. }
                | DomainError::MissingDelegation { .. }
                | DomainError::AddressResolutionFailed { .. }
        )
    }

    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidDomainName(_)
                | DomainError::PrivateAddressNotAllowed(_)
                | DomainError::InvalidRecordType(_)
        )
    }
}
