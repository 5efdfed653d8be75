//! The key executor seam.
//!
//! A key executor turns one [`AllowedKey`] into one simulated key press on the
//! host.  The caller has already validated the key; executors never re-check
//! it.  Each call is independent: no batching, no queuing, no retry.

use std::process::ExitStatus;

use async_trait::async_trait;
use slidex_core::AllowedKey;
use thiserror::Error;

/// Error type for a single key simulation.
///
/// Every variant carries the diagnostic output of whatever did the work so
/// the host console log says why a keystroke went missing.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The key-simulation utility could not be started at all.
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    /// The utility ran but reported failure.
    #[error("`{program}` exited with {status}: {stderr}")]
    Failed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },
    /// Failure of an executor that is not backed by a child process, such as
    /// one driving a native input API or an in-memory recorder.
    #[error("platform error: {0}")]
    Platform(String),
}

/// Platform-agnostic key simulation trait.
///
/// Implementations must be cheap to share (`Arc<dyn KeyExecutor>`) and safe to
/// call concurrently: two overlapping calls are two independent simulations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyExecutor: Send + Sync {
    /// Simulates one press of `key` on the host.
    ///
    /// Suspends the calling task until the simulation has finished without
    /// blocking other tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutionError`] if the simulation could not be performed.
    async fn press(&self, key: AllowedKey) -> Result<(), ExecutionError>;
}
