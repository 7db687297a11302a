//! # veriprint server entry point
//!
//! Initializes tracing, runs the one-shot Groth16 setup, then serves the
//! HTTP surface. Setup failure aborts before the listener ever opens, so
//! every handler observes fully initialized keys.

use std::net::SocketAddr;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use veriprint_api::AppState;
use veriprint_zkp::ZkpSystem;

/// Zero-knowledge biometric authentication service.
///
/// Proves and verifies knowledge of an enrolled fingerprint template,
/// password, and salt — plus a fuzzy match against a freshly presented
/// candidate — without revealing any of them.
#[derive(Parser, Debug)]
#[command(name = "veriprint", version, about, long_about = None)]
struct Cli {
    /// TCP port to listen on.
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("info"),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // Setup must complete before the listener opens; all request handlers
    // rely on the keys being immutable from then on.
    let zkp = match ZkpSystem::setup() {
        Ok(zkp) => zkp,
        Err(err) => {
            tracing::error!(error = %err, "Groth16 setup failed, aborting");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(zkp);
    let app = veriprint_api::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(error = %err, %addr, "failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(%addr, "veriprint service listening");
    if let Err(err) = axum::serve(listener, app).await {
        tracing::error!(error = %err, "server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
