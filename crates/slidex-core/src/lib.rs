//! # slidex-core
//!
//! Shared domain types for Slidex, the phone-as-presentation-clicker server.
//!
//! This crate has zero dependencies on OS APIs, sockets or async runtimes.
//! Everything here is pure data and pure functions so it can be tested without
//! a browser, a network or a desktop session.
//!
//! - **`keys`** – The closed set of five keys a browser may ask the host to
//!   press (`left`, `right`, `up`, `down`, `space`).  This is the only
//!   admission gate between the network and the host keyboard.
//!
//! - **`keymap`** – Per-platform names for those keys: X11 keysym names for
//!   `xdotool`, `CGKeyCode` numbers for macOS and `SendKeys` codes for Windows.
//!
//! - **`protocol`** – The JSON "event" frames exchanged with the browser over
//!   the real-time channel.
//!
//! - **`port`** – Validation of the listening port typed at the startup prompt.

pub mod keymap;
pub mod keys;
pub mod port;
pub mod protocol;

pub use keys::{AllowedKey, KeyParseError};
pub use keymap::KeyMapper;
pub use port::{validate_port, PortError, DEFAULT_PORT};
pub use protocol::messages::{ClientEvent, ServerEvent};
