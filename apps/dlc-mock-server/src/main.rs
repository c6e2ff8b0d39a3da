//! Mock backend server for the pension verification dashboard.
//!
//! Stands in for the real verification API: every request is answered from
//! a freshly generated synthetic dataset.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use dlc_mock_api::{router::Router, server::Server};
use dlc_mock_core::GenConfig;
use tokio::signal;

/// Command-line arguments for the mock server.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Fix the generator seed for every request (deterministic mode)
    #[arg(long)]
    seed: Option<u64>,

    /// Omit synthetic phone numbers from pending gender slices
    #[arg(long, default_value_t = false)]
    no_pending_numbers: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt::init();

    let gen_config = GenConfig {
        attach_pending_numbers: !args.no_pending_numbers,
        ..Default::default()
    };
    gen_config
        .validate()
        .map_err(|e| format!("Invalid generator configuration: {}", e))?;

    let router = Router::new(Arc::new(gen_config), args.seed);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let server = Server::new(addr, router);

    tracing::info!("Starting mock verification data server...");
    tracing::info!("  Host: {}", args.host);
    tracing::info!("  Port: {}", args.port);
    match args.seed {
        Some(seed) => tracing::info!("  Seed: {} (deterministic responses)", seed),
        None => tracing::info!("  Seed: entropy (fresh data per request)"),
    }

    let server_handle = tokio::spawn(async move {
        if let Err(e) = server.serve().await {
            tracing::error!("Server error: {}", e);
        }
    });

    signal::ctrl_c().await?;
    tracing::info!("Shutting down server...");
    server_handle.abort();

    Ok(())
}
