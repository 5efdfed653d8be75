//! Startup surface of the `slidex` binary.
//!
//! - **`cli`** – first-argument handling: the version flag, and a friendly
//!   refusal for anything else.  Both exit 0.
//! - **`prompt`** – interactive port prompt with default and re-prompt on
//!   invalid input.
//! - **`address`** – loopback and LAN URLs for the startup banner.
//! - **`qr`** – terminal rendering of the LAN URL as a QR code, so the phone
//!   can open the control page by pointing its camera at the screen.

pub mod address;
pub mod cli;
pub mod prompt;
pub mod qr;

pub use address::{detect_lan_ip, local_url, network_url};
pub use cli::{parse_args, version_banner, CliAction, UNRECOGNIZED_MESSAGE};
pub use prompt::{prompt_port, resolve_port, PromptError};
pub use qr::render_qr;
