use super::DnsRecord;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseCode {
    NoError,
    FormErr,
    ServFail,
    NXDomain,
    NotImp,
    Refused,
    Other(u16),
}

impl ResponseCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::FormErr => "FORMERR",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::Other(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Other(code) => write!(f, "RCODE{}", code),
            known => write!(f, "{}", known.as_str()),
        }
    }
}

/// How the walker must treat a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    Answered,
    NoSuchRecord,
    Referral,
}

/// One parsed DNS response. Produced once per query and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsMessage {
    pub authoritative: bool,

    pub truncated: bool,

    pub response_code: ResponseCode,

    pub answers: Vec<DnsRecord>,

    pub authority: Vec<DnsRecord>,

    pub additional: Vec<DnsRecord>,
}

impl DnsMessage {
    pub fn new(authoritative: bool) -> Self {
        Self {
            authoritative,
            truncated: false,
            response_code: ResponseCode::NoError,
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    pub fn with_answers(mut self, answers: Vec<DnsRecord>) -> Self {
        self.answers = answers;
        self
    }

    pub fn with_authority(mut self, authority: Vec<DnsRecord>) -> Self {
        self.authority = authority;
        self
    }

    pub fn with_additional(mut self, additional: Vec<DnsRecord>) -> Self {
        self.additional = additional;
        self
    }

    pub fn with_response_code(mut self, response_code: ResponseCode) -> Self {
        self.response_code = response_code;
        self
    }

    /// Pure function of the authoritative flag and the answer count.
    /// A non-authoritative response is always a referral, even if it
    /// happens to carry answers.
    pub fn classify(&self) -> ResponseKind {
        match (self.authoritative, self.answers.is_empty()) {
            (true, false) => ResponseKind::Answered,
            (true, true) => ResponseKind::NoSuchRecord,
            (false, _) => ResponseKind::Referral,
        }
    }
}
