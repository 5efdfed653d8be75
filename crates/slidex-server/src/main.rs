//! Slidex: phone-as-presentation-clicker, entry point.
//!
//! Serves a control page with arrow and space buttons to any browser on the
//! LAN and simulates the tapped key on this machine, so slide viewers advance.
//!
//! # Usage
//!
//! ```text
//! slidex              prompt for a port, then serve
//! slidex -v|--version print the version and exit
//! ```
//!
//! # What happens at startup
//!
//! 1. The first argument is checked; the version flag or any other argument
//!    prints one line and exits 0.
//! 2. `tracing_subscriber` is initialised.  The log level comes from
//!    `RUST_LOG` (e.g. `RUST_LOG=debug`), defaulting to `info`.
//! 3. The port prompt runs.  Ctrl+C or end of input exits 0.
//! 4. The server binds `0.0.0.0:<port>`.  If the port is taken, the error is
//!    logged with a hint and the process stops; no other port is tried.
//! 5. The loopback URL, the LAN URL and a QR code of the LAN URL are printed.
//! 6. Connections are served until Ctrl+C.
//!
//! Dispatch runs on a single-threaded Tokio runtime.  Key presses run as child
//! processes alongside it, so a slow press never stalls the event loop.

use std::sync::Arc;

use tokio::io::BufReader;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use slidex_server::application::KeyExecutor;
use slidex_server::domain::ServerConfig;
use slidex_server::infrastructure::key_executor::{CommandKeyExecutor, HostPlatform};
use slidex_server::infrastructure::launcher::{
    detect_lan_ip, local_url, network_url, parse_args, prompt_port, render_qr, version_banner,
    CliAction, PromptError, UNRECOGNIZED_MESSAGE,
};
use slidex_server::infrastructure::{bind, build_router, serve};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    match parse_args(std::env::args_os()) {
        CliAction::PrintVersion => {
            println!("{}", version_banner());
            return Ok(());
        }
        CliAction::Unrecognized => {
            println!("{UNRECOGNIZED_MESSAGE}");
            return Ok(());
        }
        CliAction::Serve => {}
    }

    // ── Logging setup ─────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // ── Port prompt ───────────────────────────────────────────────────────────
    let port = {
        let mut stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        tokio::select! {
            result = prompt_port(&mut stdin, &mut stdout) => result,
            _ = tokio::signal::ctrl_c() => Err(PromptError::Aborted),
        }
    };
    let port = match port {
        Ok(port) => port,
        Err(e) => {
            if !matches!(e, PromptError::Aborted) {
                warn!("{e}");
            }
            // The blocking stdin reader may still be parked; do not wait for it.
            std::process::exit(0);
        }
    };

    let config = ServerConfig::for_port(port);
    let executor: Arc<dyn KeyExecutor> = Arc::new(CommandKeyExecutor::for_host());
    info!(
        "Slidex starting on {} (keys via {:?} utility, assets in {})",
        config.bind_addr,
        HostPlatform::current(),
        config.public_dir.display()
    );

    // ── Bind ──────────────────────────────────────────────────────────────────
    let listener = match bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("{e} ({})", e.source);
            return Ok(());
        }
    };

    // ── Banner ────────────────────────────────────────────────────────────────
    let network = network_url(detect_lan_ip(), port);
    println!("\n\nLocal: {}", local_url(port));
    println!("Network: {network}\n\n");
    match render_qr(&network) {
        Ok(art) => println!("{art}"),
        Err(e) => warn!("could not render QR code for {network}: {e}"),
    }

    // ── Serve ─────────────────────────────────────────────────────────────────
    let router = build_router(&config, executor);
    serve(listener, router, shutdown_signal()).await?;

    info!("Slidex stopped");
    Ok(())
}

/// Resolves on Ctrl+C (SIGINT on Unix).
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl+C, shutting down"),
        Err(e) => {
            error!("failed to listen for Ctrl+C signal: {e}");
            // Without a signal handler, serve until the process is killed.
            std::future::pending::<()>().await;
        }
    }
}
