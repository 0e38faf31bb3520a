use clap::{Parser, Subcommand};
use dnstrace_api::dto::TraceResponse;
use dnstrace_api::AppState;
use dnstrace_application::use_cases::TraceLookupUseCase;
use dnstrace_domain::{validate_lookup_target, CliOverrides, DnsQuery, DomainError, RecordType};
use std::net::SocketAddr;
use std::str::FromStr;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod render;
mod server;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "dnstrace")]
#[command(version)]
#[command(about = "Trace iterative DNS resolution from the root servers down")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Per-query timeout in seconds
    #[arg(short = 't', long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Maximum number of referrals to follow
    #[arg(long)]
    max_referrals: Option<usize>,

    /// Seed for server selection, for reproducible walks
    #[arg(long)]
    seed: Option<u64>,

    /// Bind address for `serve`
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Web server port for `serve`
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Trace one lookup and print every step
    Lookup {
        host: String,

        #[arg(default_value = "A")]
        record_type: String,

        /// Print the trace as JSON
        #[arg(long)]
        json: bool,
    },
    /// Serve the lookup API over HTTP
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
        query_timeout: cli.timeout,
        max_referrals: cli.max_referrals,
        random_seed: cli.seed,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);
    bootstrap::config::log_config(&config, cli.config.as_deref());

    let services = di::Services::new(&config)?;

    match cli.command {
        Command::Lookup {
            host,
            record_type,
            json,
        } => run_lookup(&services.lookup, &host, &record_type, json).await,
        Command::Serve => {
            info!("Starting dnstrace v{}", env!("CARGO_PKG_VERSION"));

            let web_addr: SocketAddr =
                format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;
            let state = AppState {
                lookup: services.lookup,
            };

            server::start_web_server(web_addr, state).await?;

            info!("Server shutdown complete");
            Ok(())
        }
    }
}

async fn run_lookup(
    lookup: &TraceLookupUseCase,
    host: &str,
    record_type: &str,
    json: bool,
) -> anyhow::Result<()> {
    validate_lookup_target(host)?;
    let record_type = RecordType::from_str(record_type)
        .map_err(|_| DomainError::InvalidRecordType(record_type.to_string()))?;

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, abandoning trace");
            on_interrupt.cancel();
        }
    });

    let query = DnsQuery::new(host, record_type);
    let trace = lookup.execute_with_cancellation(&query, &cancel).await?;
    let response = TraceResponse::from(&trace);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print!("{}", render::render_text(&response));
    }

    Ok(())
}
