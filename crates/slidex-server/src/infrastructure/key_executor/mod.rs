//! `KeyExecutor` implementations.
//!
//! - [`command::CommandKeyExecutor`] – production: one host utility process per
//!   keystroke (`xdotool`, `osascript` or `powershell`, chosen at compile time).
//! - [`recording::RecordingKeyExecutor`] – records calls in memory, with
//!   programmable failures and an optional gate, for tests.

pub mod command;
pub mod recording;

pub use command::{CommandKeyExecutor, HostPlatform, KeyCommand};
pub use recording::RecordingKeyExecutor;
