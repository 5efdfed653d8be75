//! Server configuration.
//!
//! Slidex reads no config file and no environment variables.  The only
//! runtime input is the port typed at the startup prompt; everything else is
//! fixed.  [`ServerConfig`] is built once from that port and passed by value
//! into the infrastructure layer.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use slidex_core::DEFAULT_PORT;

/// All runtime configuration for the clicker server.
///
/// # Example
///
/// ```rust
/// use slidex_server::domain::ServerConfig;
///
/// let cfg = ServerConfig::for_port(9000);
/// assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:9000");
/// ```
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP/WebSocket server binds to.
    ///
    /// Always all interfaces: the phone reaches the host over the LAN.
    pub bind_addr: SocketAddr,

    /// Directory holding `index.html` and the rest of the control page assets.
    pub public_dir: PathBuf,
}

impl ServerConfig {
    /// Builds the configuration for serving on `port` on all interfaces.
    pub fn for_port(port: u16) -> Self {
        Self {
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
            public_dir: default_public_dir(),
        }
    }

    /// Port the server listens on.
    pub fn port(&self) -> u16 {
        self.bind_addr.port()
    }
}

impl Default for ServerConfig {
    /// `0.0.0.0:8080`, serving assets from the crate's `public/` directory.
    fn default() -> Self {
        Self::for_port(DEFAULT_PORT)
    }
}

/// The `public/` directory shipped next to this crate's manifest.
pub fn default_public_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("public")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
