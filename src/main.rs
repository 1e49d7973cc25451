//! Red Team Simulator - main application entry point
//!
//! `serve` starts the HTTP API server; `demo` (the default) runs the
//! command-line demonstration.

use anyhow::Context;
use clap::Parser;
use std::net::SocketAddr;
use tokio::{net::TcpListener, signal};

use redteam_simulator::cli::{Cli, Commands};
use redteam_simulator::demo::{render_report, run_demo};
use redteam_simulator::{Config, create_app, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = dotenvy::dotenv() {
        // Only warn if it's not a "file not found" error
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    let config = Config::load().context(
        "Failed to load configuration. Check config/*.toml and REDTEAM__* env vars",
    )?;
    init_tracing(&config.logging)?;

    match cli.command() {
        Commands::Serve => run_server(config).await,
        Commands::Demo(args) => {
            let app = create_app(config.clone())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create application: {}", e))?;
            let report = run_demo(&app.state, &config, args.into()).await?;
            print!("{}", render_report(&report));
            Ok(())
        }
    }
}

/// Run the HTTP server
async fn run_server(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting Red Team Simulator server...");
    tracing::info!(
        "Configuration loaded: server={}:{}",
        config.server.host,
        config.server.port
    );

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    let enable_docs = config.server.enable_docs;

    let app = create_app(config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create application: {}", e))?;

    tracing::info!("Server listening on {}", addr);
    if enable_docs {
        tracing::info!("API documentation available at http://{}/docs", addr);
    } else {
        tracing::info!("API documentation disabled");
    }

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        },
    }
}
