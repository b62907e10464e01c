//! Copysmith CLI and REST API entry point.
//!
//! Binary name: `copysmith`
//!
//! Parses CLI arguments, sets up tracing and configuration, then either
//! starts the HTTP server or runs a client command.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use copysmith_infra::config::{load_config, resolve_home_dir};
use copysmith_observe::{filter_for_verbosity, init_tracing, shutdown_tracing, TracingOptions};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Shell completions don't need tracing or config
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "copysmith", &mut std::io::stdout());
        return Ok(());
    }

    let default_filter = match &cli.command {
        // Client commands stay quiet unless asked.
        Commands::Generate(_) | Commands::Types if cli.verbose == 0 => "error",
        _ => filter_for_verbosity(cli.verbose, cli.quiet),
    };
    init_tracing(&TracingOptions {
        default_filter: default_filter.to_string(),
        format: cli.log_format.into(),
        enable_otel: cli.otel,
    })
    .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    let home_dir = resolve_home_dir();
    let mut config = load_config(&home_dir).await;

    let result = match cli.command {
        Commands::Serve { port, host, model } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(model) = model {
                config.provider.model = model;
            }
            serve(config, cli.quiet).await
        }

        Commands::Generate(args) => cli::generate::generate(args, config, cli.json).await,

        Commands::Types => cli::types::list_types(cli.json),

        Commands::Completions { .. } => unreachable!("handled above"),
    };

    shutdown_tracing();
    result
}

async fn serve(config: copysmith_types::config::CopysmithConfig, quiet: bool) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::init(config)?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    if !quiet {
        let mode = match state.copy_service.provider_name() {
            Some(name) => console::style(format!("provider: {name}")).green(),
            None => console::style("fallback copy only (ANTHROPIC_API_KEY not set)".to_string()).yellow(),
        };
        println!(
            "  {} Copysmith listening on {}",
            console::style("⚡").bold(),
            console::style(format!("http://{addr}")).cyan()
        );
        println!("  {mode}");
        println!("  {}", console::style("Press Ctrl+C to stop").dim());
    }
    tracing::info!(addr = %addr, "server started");

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if !quiet {
        println!("\n  Server stopped.");
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
