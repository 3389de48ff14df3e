use std::sync::Arc;

use clap::Parser;
use kubedash_api::config::KubedashConfig;
use kubedash_api::kubernetes::ProxyClient;
use kubedash_api::shutdown::ShutdownCoordinator;
use kubedash_api::{build_app, AppState};
use tokio::net::TcpListener;
use tracing::{error, info};

/// Read-only Kubernetes dashboard served on top of `kubectl proxy`
#[derive(Debug, Parser)]
#[command(name = "kubedash", version)]
struct Cli {
    /// URL of the Kubernetes API proxy [default: http://127.0.0.1:8001]
    #[arg(long)]
    proxy: Option<String>,

    /// Port to run the server on [default: 8080]
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration; flags win over env and file
    let mut config = KubedashConfig::load()?;
    config.apply_cli_overrides(cli.proxy, cli.port);

    // Keep the guard alive so the file writer flushes on exit
    let _log_guard = config
        .logging
        .init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        return Err(anyhow::anyhow!("Invalid configuration: {}", e));
    }

    let client = ProxyClient::from_config(&config.proxy)?;
    let state = Arc::new(AppState::new(client));
    let app = build_app(state, &config.server.static_dir);

    let addr = config.listen_addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to listen on {}: {}", addr, e);
            return Err(e.into());
        }
    };

    info!("Starting server on {}", addr);
    info!("Dashboard available at http://localhost:{}", config.server.port);
    info!("Connecting to Kubernetes API proxy at {}", config.proxy.url);

    let shutdown = ShutdownCoordinator::new();
    let signal_watcher = shutdown.clone();
    tokio::spawn(async move {
        signal_watcher.wait_for_signal().await;
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.signal())
        .await?;

    info!("Server stopped");

    Ok(())
}
