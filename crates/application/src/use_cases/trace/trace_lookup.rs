use crate::ports::{AddressResolver, DnsTransport, RandomSource, RandomSourceFactory};
use crate::services::{ReferralResolver, RootServerSelector};
use dnstrace_domain::{
    DnsMessage, DnsQuery, DomainError, NameServer, ResponseKind, Trace, TraceRecorder, TraceStep,
};
use std::net::IpAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_MAX_REFERRALS: usize = 30;

/// Walks the delegation chain for one query, starting at a random root
/// server and following referrals until a server answers authoritatively,
/// something fails, or the referral bound is hit.
pub struct TraceLookupUseCase {
    transport: Arc<dyn DnsTransport>,
    address_resolver: Arc<dyn AddressResolver>,
    roots: RootServerSelector,
    referrals: ReferralResolver,
    random: Arc<dyn RandomSourceFactory>,
    query_timeout: Duration,
    max_referrals: usize,
}

impl TraceLookupUseCase {
    pub fn new(
        transport: Arc<dyn DnsTransport>,
        address_resolver: Arc<dyn AddressResolver>,
        roots: RootServerSelector,
        random: Arc<dyn RandomSourceFactory>,
    ) -> Self {
        Self {
            transport,
            address_resolver,
            roots,
            referrals: ReferralResolver::new(),
            random,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
            max_referrals: DEFAULT_MAX_REFERRALS,
        }
    }

    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    pub fn with_max_referrals(mut self, max_referrals: usize) -> Self {
        self.max_referrals = max_referrals;
        self
    }

    pub fn max_referrals(&self) -> usize {
        self.max_referrals
    }

    pub async fn execute(&self, query: &DnsQuery) -> Result<Trace, DomainError> {
        self.execute_with_cancellation(query, &CancellationToken::new())
            .await
    }

    /// Like [`execute`](Self::execute), but gives up with
    /// `DomainError::LookupCancelled` once `cancel` fires. The in-flight
    /// query is dropped, which closes its socket.
    pub async fn execute_with_cancellation(
        &self,
        query: &DnsQuery,
        cancel: &CancellationToken,
    ) -> Result<Trace, DomainError> {
        let start = Instant::now();
        info!(name = %query.name, record_type = %query.record_type, "Starting trace");

        let mut recorder = TraceRecorder::new(query.name.as_ref(), query.record_type);
        let mut random = self.random.for_walk();
        let mut server = self.roots.pick(random.as_mut());

        loop {
            if cancel.is_cancelled() {
                return Err(DomainError::LookupCancelled);
            }

            let step = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!(name = %query.name, server = %server, "Trace cancelled mid-query");
                    return Err(DomainError::LookupCancelled);
                }
                step = self.query_step(query, &server, recorder.referral_count(), random.as_mut()) => step,
            };

            let next = match &step {
                TraceStep::Referral { to_server, .. } => Some(to_server.clone()),
                _ => None,
            };

            recorder.append(step)?;

            match next {
                Some(to_server) => server = to_server,
                None => break,
            }
        }

        let trace = recorder.finalize()?;

        info!(
            name = %query.name,
            record_type = %query.record_type,
            outcome = trace.terminal().kind(),
            referrals = trace.referral_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Trace finished"
        );

        Ok(trace)
    }

    async fn query_step(
        &self,
        query: &DnsQuery,
        server: &NameServer,
        referrals_so_far: usize,
        random: &mut dyn RandomSource,
    ) -> TraceStep {
        let address = match self.server_address(server).await {
            Ok(address) => address,
            Err(e) => return transport_error(server, &e),
        };

        debug!(
            server = %server,
            address = %address,
            name = %query.name,
            record_type = %query.record_type,
            "Querying"
        );

        let start = Instant::now();
        let result = match tokio::time::timeout(
            self.query_timeout,
            self.transport.query(
                address,
                &query.name,
                query.record_type,
                self.query_timeout,
            ),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(DomainError::TransportTimeout {
                server: server.to_string(),
            }),
        };
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(message) => {
                self.classify_step(message, server, elapsed_ms, referrals_so_far, random)
            }
            Err(e) => transport_error(server, &e),
        }
    }

    fn classify_step(
        &self,
        message: DnsMessage,
        server: &NameServer,
        elapsed_ms: u64,
        referrals_so_far: usize,
        random: &mut dyn RandomSource,
    ) -> TraceStep {
        let from_server = server.clone();

        match message.classify() {
            ResponseKind::Answered => TraceStep::Answered {
                from_server,
                elapsed_ms,
                answers: message.answers,
                authority: message.authority,
                additional: message.additional,
            },
            ResponseKind::NoSuchRecord => TraceStep::NoSuchRecord {
                from_server,
                elapsed_ms,
            },
            ResponseKind::Referral => match self.referrals.select_next(&message, server, random) {
                Err(e) => transport_error(server, &e),
                Ok(_) if referrals_so_far >= self.max_referrals => {
                    warn!(
                        server = %server,
                        limit = self.max_referrals,
                        "Referral limit reached"
                    );
                    TraceStep::TooManyReferrals {
                        from_server,
                        elapsed_ms,
                        limit: self.max_referrals,
                    }
                }
                Ok(to_server) => TraceStep::Referral {
                    from_server,
                    elapsed_ms,
                    to_server,
                },
            },
        }
    }

    /// Glue or root hint address when present, forward resolution otherwise.
    async fn server_address(&self, server: &NameServer) -> Result<IpAddr, DomainError> {
        if let Some(address) = server.address {
            return Ok(address);
        }

        let resolved = tokio::time::timeout(
            self.query_timeout,
            self.address_resolver.resolve_address(&server.name),
        )
        .await
        .map_err(|_| DomainError::AddressResolutionFailed {
            hostname: server.name.clone(),
            reason: "timed out".to_string(),
        })??;

        debug!(server = %server.name, address = %resolved, "Resolved name server without glue");
        Ok(resolved)
    }
}

fn transport_error(server: &NameServer, error: &DomainError) -> TraceStep {
    if error.is_transport_failure() {
        debug!(server = %server, error = %error, "Query failed");
    } else {
        warn!(server = %server, error = %error, "Unexpected error during walk");
    }
    TraceStep::TransportError {
        from_server: server.clone(),
        message: error.to_string(),
    }
}
