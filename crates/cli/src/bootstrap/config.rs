use dnstrace_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged after the subscriber is up, so it cannot live in `load_config`.
pub fn log_config(config: &Config, config_path: Option<&str>) {
    let source = config_path
        .map(str::to_string)
        .or_else(Config::get_config_path)
        .unwrap_or_else(|| "default".to_string());

    info!(
        config_file = %source,
        root_servers = config.walker.root_servers.len(),
        query_timeout_secs = config.walker.query_timeout,
        max_referrals = config.walker.max_referrals,
        tcp_fallback = config.walker.tcp_fallback,
        seeded = config.walker.random_seed.is_some(),
        "Configuration loaded"
    );
}
