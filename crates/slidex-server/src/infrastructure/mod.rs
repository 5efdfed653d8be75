//! Infrastructure layer for slidex-server.
//!
//! Contains everything that touches the OS or the network.
//!
//! **Dependency rule**: this layer may depend on `application`, `domain` and
//! `slidex_core`, but MUST NOT be imported by the `application` or `domain`
//! layers.
//!
//! # Sub-modules
//!
//! - **`key_executor`** – `KeyExecutor` implementations.  The production one
//!   spawns the platform key-simulation utility once per keystroke; a
//!   recording one is provided for tests.
//!
//! - **`http_server`** – The axum router: control page at `/`, static assets
//!   for every other path, and the `/ws` real-time channel that feeds each
//!   connection's `RelaySession`.
//!
//! - **`launcher`** – Startup surface: version flag handling, the interactive
//!   port prompt, local/LAN URLs and the terminal QR code.

pub mod http_server;
pub mod key_executor;
pub mod launcher;

pub use http_server::{bind, build_router, serve, BindError};
