//! Application layer use cases for the clicker server.
//!
//! - **`key_executor`** – The one-method [`KeyExecutor`] seam.  Anything that
//!   can simulate a host key press for an [`AllowedKey`] implements it; the
//!   concrete process-spawning implementation lives in the infrastructure
//!   layer and is injected at construction time.
//!
//! - **`relay_session`** – Per-connection gatekeeper.  Validates each inbound
//!   key name against the allowed key set and hands admitted keys to the
//!   executor, swallowing failures.
//!
//! [`AllowedKey`]: slidex_core::AllowedKey

pub mod key_executor;
pub mod relay_session;

pub use key_executor::{ExecutionError, KeyExecutor};
pub use relay_session::{Dispatch, RelaySession, SessionState};
