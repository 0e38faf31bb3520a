use dnstrace_domain::{DnsRecord, NameServer, Trace, TraceStep};
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct TraceResponse {
    pub query: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub outcome: &'static str,
    pub referrals: usize,
    pub total_elapsed: String,
    pub steps: Vec<StepResponse>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ServerResponse {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
pub struct StepResponse {
    pub kind: &'static str,
    pub server: ServerResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_server: Option<ServerResponse>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub answers: Vec<RecordResponse>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authority: Vec<RecordResponse>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub additional: Vec<RecordResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RecordResponse {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: u32,
    pub data: String,
}

impl From<&Trace> for TraceResponse {
    fn from(trace: &Trace) -> Self {
        Self {
            query: trace.query_name.clone(),
            record_type: trace.record_type.to_string(),
            outcome: trace.terminal().kind(),
            referrals: trace.referral_count(),
            total_elapsed: format_elapsed(trace.total_elapsed_ms()),
            steps: trace.steps().iter().map(StepResponse::from).collect(),
        }
    }
}

impl From<&NameServer> for ServerResponse {
    fn from(server: &NameServer) -> Self {
        Self {
            name: server.name.clone(),
            address: server.address.map(|a| a.to_string()),
        }
    }
}

impl From<&DnsRecord> for RecordResponse {
    fn from(record: &DnsRecord) -> Self {
        Self {
            name: record.name.clone(),
            record_type: record.record_type.to_string(),
            ttl: record.ttl,
            data: record.data.to_string(),
        }
    }
}

impl From<&TraceStep> for StepResponse {
    fn from(step: &TraceStep) -> Self {
        let mut response = Self {
            kind: step.kind(),
            server: ServerResponse::from(step.from_server()),
            elapsed_ms: step.elapsed_ms(),
            elapsed: step.elapsed_ms().map(format_elapsed),
            next_server: None,
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
            error: None,
            limit: None,
        };

        match step {
            TraceStep::Referral { to_server, .. } => {
                response.next_server = Some(ServerResponse::from(to_server));
            }
            TraceStep::Answered {
                answers,
                authority,
                additional,
                ..
            } => {
                response.answers = answers.iter().map(RecordResponse::from).collect();
                response.authority = sorted_authority(authority)
                    .into_iter()
                    .map(RecordResponse::from)
                    .collect();
                response.additional = sorted_additional(additional)
                    .into_iter()
                    .map(RecordResponse::from)
                    .collect();
            }
            TraceStep::TransportError { message, .. } => {
                response.error = Some(message.clone());
            }
            TraceStep::TooManyReferrals { limit, .. } => {
                response.limit = Some(*limit);
            }
            TraceStep::NoSuchRecord { .. } => {}
        }

        response
    }
}

/// Authority records ordered by delegated name, case-insensitively.
pub fn sorted_authority(records: &[DnsRecord]) -> Vec<&DnsRecord> {
    let mut sorted: Vec<&DnsRecord> = records.iter().collect();
    sorted.sort_by_cached_key(|r| {
        r.data
            .target_name()
            .map(str::to_ascii_lowercase)
            .unwrap_or_else(|| r.data.to_string().to_ascii_lowercase())
    });
    sorted
}

/// Additional records ordered by the textual form of their address,
/// compared as case-insensitive strings (so "10.0.0.9" sorts after
/// "10.0.0.10"). Records without an address sort first, in wire order.
pub fn sorted_additional(records: &[DnsRecord]) -> Vec<&DnsRecord> {
    let mut sorted: Vec<&DnsRecord> = records.iter().collect();
    sorted.sort_by_cached_key(|r| {
        r.address()
            .map(|address| address.to_string().to_ascii_lowercase())
            .unwrap_or_default()
    });
    sorted
}

/// `"{n} ms"` with comma thousands separators.
pub fn format_elapsed(ms: u64) -> String {
    let digits = ms.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{} ms", grouped)
}
