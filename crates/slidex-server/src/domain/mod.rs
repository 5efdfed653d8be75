//! Domain layer for slidex-server.
//!
//! Holds the runtime configuration struct.  Key names, channel frames and
//! port rules live in `slidex-core`; this layer only adds what the server
//! process itself needs to know at startup.

pub mod config;

pub use config::ServerConfig;
