use clap::Parser;
use ferrous_lookup_api::AppState;
use ferrous_lookup_application::use_cases::LookupDnsUseCase;
use ferrous_lookup_domain::CliOverrides;
use ferrous_lookup_infrastructure::dns::UpstreamResolver;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-lookup")]
#[command(version)]
#[command(about = "Ferrous Lookup - HTTP gateway for plain DNS lookups")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream resolver (ip:port)
    #[arg(long, value_name = "ADDR")]
    upstream: Option<SocketAddr>,

    /// Upstream exchange timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind,
        upstream: cli.upstream,
        timeout_ms: cli.timeout_ms,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Ferrous Lookup v{}", env!("CARGO_PKG_VERSION"));

    let resolver = Arc::new(UpstreamResolver::from_config(&config.upstream));
    let app_state = AppState {
        lookup: Arc::new(LookupDnsUseCase::new(resolver)),
    };

    let bind_ip: IpAddr = config
        .server
        .bind_address
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;
    let web_addr = SocketAddr::new(bind_ip, config.server.web_port);

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
