use super::{DnsRecord, DomainError, NameServer, RecordType};

/// One query issued during a walk and what came of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceStep {
    Referral {
        from_server: NameServer,
        elapsed_ms: u64,
        to_server: NameServer,
    },
    Answered {
        from_server: NameServer,
        elapsed_ms: u64,
        answers: Vec<DnsRecord>,
        authority: Vec<DnsRecord>,
        additional: Vec<DnsRecord>,
    },
    /// Authoritative response with an empty answer section.
    NoSuchRecord {
        from_server: NameServer,
        elapsed_ms: u64,
    },
    TransportError {
        from_server: NameServer,
        message: String,
    },
    TooManyReferrals {
        from_server: NameServer,
        elapsed_ms: u64,
        limit: usize,
    },
}

impl TraceStep {
    pub fn from_server(&self) -> &NameServer {
        match self {
            TraceStep::Referral { from_server, .. }
            | TraceStep::Answered { from_server, .. }
            | TraceStep::NoSuchRecord { from_server, .. }
            | TraceStep::TransportError { from_server, .. }
            | TraceStep::TooManyReferrals { from_server, .. } => from_server,
        }
    }

    pub fn elapsed_ms(&self) -> Option<u64> {
        match self {
            TraceStep::Referral { elapsed_ms, .. }
            | TraceStep::Answered { elapsed_ms, .. }
            | TraceStep::NoSuchRecord { elapsed_ms, .. }
            | TraceStep::TooManyReferrals { elapsed_ms, .. } => Some(*elapsed_ms),
            TraceStep::TransportError { .. } => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, TraceStep::Referral { .. })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TraceStep::Referral { .. } => "referral",
            TraceStep::Answered { .. } => "answered",
            TraceStep::NoSuchRecord { .. } => "no_such_record",
            TraceStep::TransportError { .. } => "transport_error",
            TraceStep::TooManyReferrals { .. } => "too_many_referrals",
        }
    }
}

/// The finished record of one walk. Always ends in exactly one terminal step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub query_name: String,
    pub record_type: RecordType,
    steps: Vec<TraceStep>,
}

impl Trace {
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn terminal(&self) -> &TraceStep {
        // finalize() guarantees a non-empty trace ending in a terminal step
        &self.steps[self.steps.len() - 1]
    }

    pub fn referral_count(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn total_elapsed_ms(&self) -> u64 {
        self.steps.iter().filter_map(TraceStep::elapsed_ms).sum()
    }
}

/// Append-only accumulator that enforces the trace invariants as steps arrive.
#[derive(Debug)]
pub struct TraceRecorder {
    query_name: String,
    record_type: RecordType,
    steps: Vec<TraceStep>,
}

impl TraceRecorder {
    pub fn new(query_name: impl Into<String>, record_type: RecordType) -> Self {
        Self {
            query_name: query_name.into(),
            record_type,
            steps: Vec::new(),
        }
    }

    pub fn append(&mut self, step: TraceStep) -> Result<(), DomainError> {
        match self.steps.last() {
            Some(last) if last.is_terminal() => return Err(DomainError::TraceAlreadyTerminated),
            Some(TraceStep::Referral { to_server, .. }) if to_server != step.from_server() => {
                return Err(DomainError::TraceChainBroken {
                    expected: to_server.to_string(),
                    actual: step.from_server().to_string(),
                });
            }
            _ => {}
        }
        self.steps.push(step);
        Ok(())
    }

    pub fn is_terminated(&self) -> bool {
        self.steps.last().is_some_and(TraceStep::is_terminal)
    }

    pub fn referral_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s, TraceStep::Referral { .. }))
            .count()
    }

    pub fn finalize(self) -> Result<Trace, DomainError> {
        if !self.is_terminated() {
            return Err(DomainError::TraceIncomplete);
        }
        Ok(Trace {
            query_name: self.query_name,
            record_type: self.record_type,
            steps: self.steps,
        })
    }
}
