use ferrous_lookup_domain::config::LogFormat;
use ferrous_lookup_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match config.logging.format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    info!(
        web_port = config.server.web_port,
        bind_address = %config.server.bind_address,
        upstream = %config.upstream.address,
        timeout_ms = config.upstream.timeout_ms,
        "Configuration loaded"
    );
}
