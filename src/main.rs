//! ETH treasury sweep service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client                ┌──────────────────────────────────────────────┐
//!     ─────────────────────▶│  http (axum)                                 │
//!     GET  /health          │    request-id → logging → CORS → body limit  │
//!     POST /api/sweep/eth   │              │                               │
//!                           │              ▼                               │
//!                           │  sweep::SweepService                         │
//!                           │    calculator (balance - gas_price * 21000)  │
//!                           │              │                               │
//!                           │              ▼                               │
//!                           │  blockchain                                  │
//!                           │    Treasury (key from env) + ChainClient     │──▶ JSON-RPC node
//!                           └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::net::TcpListener;

use eth_sweeper::blockchain::{parse_address, RpcChainClient, Treasury};
use eth_sweeper::config::load_config;
use eth_sweeper::lifecycle::{shutdown_on_signal, Shutdown};
use eth_sweeper::observability::init_logging;
use eth_sweeper::{HttpServer, SweepService};

/// Upper bound on the chain id check so a silent node cannot block startup.
const STARTUP_CHECK_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Parser, Debug)]
#[command(name = "eth-sweeper", version, about = "Sweep a treasury wallet's ETH to a payout address")]
struct Args {
    /// Optional TOML config file; environment variables override it.
    #[arg(short, long, env = "SWEEPER_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal outside development.
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let config = load_config(args.config.as_deref())?;
    init_logging(&config.observability);

    tracing::info!("eth-sweeper v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.server.socket_address(),
        rpc_url = %config.blockchain.rpc_url,
        destination = ?config.sweep.destination_address,
        "Configuration loaded"
    );

    let client = RpcChainClient::new(config.blockchain.clone())?;
    client.verify_chain_id(STARTUP_CHECK_TIMEOUT).await;

    let treasury = Treasury::from_env()?;
    // Already validated by load_config.
    let default_destination = config
        .sweep
        .destination_address
        .as_deref()
        .and_then(parse_address);

    let sweeper = Arc::new(SweepService::new(
        Arc::new(client),
        treasury,
        default_destination,
        config.sweep.explorer_url.clone(),
    ));

    let listener = TcpListener::bind(config.server.socket_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config.server.clone(), sweeper);
    let mut server_task = tokio::spawn(server.run(listener, shutdown.subscribe()));

    let exited_early = tokio::select! {
        _ = shutdown_on_signal(&shutdown) => None,
        result = &mut server_task => Some(result),
    };
    match exited_early {
        Some(result) => result??,
        None => server_task.await??,
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
