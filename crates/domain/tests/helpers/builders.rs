#![allow(dead_code)]
use dnstrace_domain::{DnsRecord, NameServer, TraceStep};
use std::net::IpAddr;

pub fn server(name: &str, addr: &str) -> NameServer {
    NameServer::with_address(name, addr.parse::<IpAddr>().unwrap())
}

pub struct StepBuilder {
    from_server: NameServer,
    elapsed_ms: u64,
}

impl StepBuilder {
    pub fn from(from_server: NameServer) -> Self {
        Self {
            from_server,
            elapsed_ms: 10,
        }
    }

    pub fn elapsed(mut self, elapsed_ms: u64) -> Self {
        self.elapsed_ms = elapsed_ms;
        self
    }

    pub fn referral(self, to_server: NameServer) -> TraceStep {
        TraceStep::Referral {
            from_server: self.from_server,
            elapsed_ms: self.elapsed_ms,
            to_server,
        }
    }

    pub fn answered(self, answers: Vec<DnsRecord>) -> TraceStep {
        TraceStep::Answered {
            from_server: self.from_server,
            elapsed_ms: self.elapsed_ms,
            answers,
            authority: vec![],
            additional: vec![],
        }
    }

    pub fn no_such_record(self) -> TraceStep {
        TraceStep::NoSuchRecord {
            from_server: self.from_server,
            elapsed_ms: self.elapsed_ms,
        }
    }

    pub fn transport_error(self, message: &str) -> TraceStep {
        TraceStep::TransportError {
            from_server: self.from_server,
            message: message.to_string(),
        }
    }
}
