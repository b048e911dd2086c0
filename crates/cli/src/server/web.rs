use ferrous_lookup_api::{create_api_routes, AppState};
use std::io;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub async fn start_web_server(bind_addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        lookup_url = format!("http://{}/dns-query", bind_addr),
        "Starting web server"
    );

    let app = create_api_routes(state).layer(TraceLayer::new_for_http());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("Web server started successfully");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        park_on_error(signal::ctrl_c().await, "SIGINT").await;
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => park_on_error(Err(e), "SIGTERM").await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

/// A handler that could not be installed never fires.
async fn park_on_error(result: io::Result<()>, signal_name: &'static str) {
    if let Err(e) = result {
        error!(error = %e, signal = signal_name, "Failed to install signal handler");
        std::future::pending::<()>().await;
    }
}
