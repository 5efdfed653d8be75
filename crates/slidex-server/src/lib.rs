//! slidex-server library crate.
//!
//! Serves the clicker control page to a phone or tablet and relays its button
//! presses to the host keyboard.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! Phone browser (JSON over WebSocket, static page over HTTP)
//!         ↕
//! [slidex-server]
//!   ├── domain/           ServerConfig
//!   ├── application/      KeyExecutor seam, RelaySession (admission control)
//!   └── infrastructure/
//!         ├── key_executor/ per-keystroke host utility process, recording executor
//!         ├── http_server/  axum router: control page, assets, /ws channel
//!         └── launcher/     CLI flags, port prompt, URLs, QR code
//! ```
//!
//! # Layer rules
//!
//! - `domain` has no I/O.
//! - `application` depends on `domain` and `slidex-core` only; it never
//!   spawns a process or touches a socket itself.
//! - `infrastructure` depends on all other layers plus `tokio` and `axum`.

/// Domain layer: configuration types (no I/O).
pub mod domain;

/// Application layer: key relay session and the key executor seam.
pub mod application;

/// Infrastructure layer: process executor, HTTP/WebSocket server, launcher.
pub mod infrastructure;
