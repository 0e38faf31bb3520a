use dnstrace_application::services::RootServerSelector;
use dnstrace_application::use_cases::TraceLookupUseCase;
use dnstrace_domain::Config;
use dnstrace_infrastructure::dns::IterativeTransport;
use dnstrace_infrastructure::system::{FastrandSource, SystemAddressResolver};
use std::sync::Arc;

pub struct Services {
    pub lookup: Arc<TraceLookupUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let walker = &config.walker;
        let query_timeout = walker.query_timeout_duration();

        let transport = Arc::new(IterativeTransport::new().with_tcp_fallback(walker.tcp_fallback));
        let address_resolver = Arc::new(SystemAddressResolver::new(query_timeout));
        let roots = RootServerSelector::new(&walker.root_servers)?;

        let lookup = TraceLookupUseCase::new(
            transport,
            address_resolver,
            roots,
            Arc::new(FastrandSource::from_optional_seed(walker.random_seed)),
        )
        .with_query_timeout(query_timeout)
        .with_max_referrals(walker.max_referrals);

        Ok(Self {
            lookup: Arc::new(lookup),
        })
    }
}
