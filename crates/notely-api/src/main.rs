//! Notely CLI and REST API entry point.
//!
//! Binary name: `notely`
//!
//! Parses CLI arguments, initializes tracing and configuration, then either
//! starts the REST API server or runs a one-shot command.

use clap::Parser;

use notely_api::cli::{Cli, Commands};
use notely_api::http;
use notely_infra::config::{apply_env_overrides, load_global_config, resolve_data_dir};
use notely_observe::tracing_setup::{init_tracing, shutdown_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log_filter(), cli.otel).map_err(|e| anyhow::anyhow!(e))?;

    let result = run(cli).await;
    shutdown_tracing();
    result
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Serve { host, port } => {
            let data_dir = resolve_data_dir();
            let mut config = load_global_config(&data_dir).await;
            apply_env_overrides(&mut config);
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            let addr = config.listen_addr();
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!(%addr, "Notely API listening");

            let router = http::router::build_router(&config);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("Server stopped");
        }

        Commands::Token => {
            notely_api::cli::token::print_token(cli.json)?;
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
