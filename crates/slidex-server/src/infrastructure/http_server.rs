//! HTTP server: control page, static assets and the real-time key channel.
//!
//! Routes:
//!
//! | Path    | Handler                                                   |
//! |---------|-----------------------------------------------------------|
//! | `/`     | `public/index.html`                                       |
//! | `/ws`   | WebSocket upgrade; one [`RelaySession`] per connection    |
//! | `/*`    | any other file under `public/` (404 when missing)         |
//!
//! # Per-connection flow
//!
//! 1. The upgrade completes and a `RelaySession` is opened.
//! 2. The session's status signal (`{"event":"status","data":200}`) is sent.
//! 3. Each text frame is decoded as a [`ClientEvent`] and its key name handed
//!    to [`RelaySession::dispatch`], which spawns the key press and returns
//!    immediately, so the next frame is read while earlier presses run.
//! 4. A Close frame, a read error or the end of the stream closes the session.
//!
//! Frames that do not decode are dropped with a debug log; the connection
//! stays open.  Nothing is ever written back after the status signal.

use std::future::Future;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{ConnectInfo, State};
use axum::response::IntoResponse;
use axum::routing::{get, get_service};
use axum::Router;
use futures_util::{SinkExt, StreamExt};
use slidex_core::protocol::{decode_client_event, encode_server_event};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::application::key_executor::KeyExecutor;
use crate::application::relay_session::RelaySession;
use crate::domain::config::ServerConfig;

/// The listening socket could not be opened.
#[derive(Debug, Error)]
#[error("Unable to run the server, is your port:{port} already used?")]
pub struct BindError {
    pub port: u16,
    #[source]
    pub source: io::Error,
}

/// Shared state passed to the WebSocket handler.
#[derive(Clone)]
struct AppState {
    executor: Arc<dyn KeyExecutor>,
}

/// Builds the router serving the control page, its assets and `/ws`.
pub fn build_router(config: &ServerConfig, executor: Arc<dyn KeyExecutor>) -> Router {
    let index = config.public_dir.join("index.html");

    Router::new()
        .route("/", get_service(ServeFile::new(index)))
        .route("/ws", get(ws_upgrade))
        .fallback_service(ServeDir::new(&config.public_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { executor })
}

/// Binds the listening socket.
///
/// # Errors
///
/// Returns [`BindError`] if the address is in use or not permitted.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, BindError> {
    TcpListener::bind(addr).await.map_err(|source| BindError {
        port: addr.port(),
        source,
    })
}

/// Serves `router` on `listener` until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the accept loop fails.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener
        .local_addr()
        .context("failed to read listener address")?;
    info!("clicker server listening on {local_addr}");

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
    .with_context(|| format!("server on {local_addr} stopped with an error"))
}

// ── WebSocket channel ─────────────────────────────────────────────────────────

async fn ws_upgrade(
    ws: WebSocketUpgrade,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    State(state): State<AppState>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, peer, state.executor))
}

async fn handle_socket(socket: WebSocket, peer: SocketAddr, executor: Arc<dyn KeyExecutor>) {
    let (mut session, status) = RelaySession::open(executor);
    let session_id = session.id();
    info!("session {session_id}: browser connected from {peer}");

    let (mut ws_tx, mut ws_rx) = socket.split();

    match encode_server_event(&status) {
        Ok(json) => {
            if ws_tx.send(Message::Text(json)).await.is_err() {
                debug!("session {session_id}: browser left before the status signal");
                session.close();
                return;
            }
        }
        Err(e) => error!("session {session_id}: failed to encode status signal: {e}"),
    }

    while let Some(frame) = ws_rx.next().await {
        match frame {
            Ok(Message::Text(text)) => match decode_client_event(&text) {
                Ok(event) => {
                    session.dispatch(event.key_name());
                }
                Err(e) => debug!("session {session_id}: undecodable frame dropped: {e}"),
            },
            Ok(Message::Binary(_)) => {
                debug!("session {session_id}: binary frame ignored");
            }
            Ok(Message::Ping(_) | Message::Pong(_)) => {}
            Ok(Message::Close(_)) => {
                debug!("session {session_id}: close frame received");
                break;
            }
            Err(e) => {
                warn!("session {session_id}: WebSocket error: {e}");
                break;
            }
        }
    }

    session.close();
    info!("session {session_id}: browser disconnected");
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_message_hints_at_port_in_use() {
        let err = BindError {
            port: 8080,
            source: io::Error::from(io::ErrorKind::AddrInUse),
        };
        assert_eq!(
            err.to_string(),
            "Unable to run the server, is your port:8080 already used?"
        );
    }

    #[tokio::test]
    async fn test_bind_reports_port_already_in_use() {
        // Arrange: hold a port open
        let held = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = held.local_addr().unwrap();

        // Act
        let result = bind(addr).await;

        // Assert
        let err = result.expect_err("second bind on the same port must fail");
        assert_eq!(err.port, addr.port());
    }

    #[tokio::test]
    async fn test_bind_succeeds_on_ephemeral_port() {
        let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }
}
