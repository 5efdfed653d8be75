//! Recording key executor for tests.
//!
//! # Why a recording executor?
//!
//! The real executor presses keys on the machine running the tests, needs a
//! desktop session, and leaves no trace a test can inspect.  The
//! `RecordingKeyExecutor` pushes every call into a `Mutex<Vec<...>>` so
//! assertions can check exactly which keys reached the executor and in what
//! order.
//!
//! # Programmable behaviour
//!
//! - [`RecordingKeyExecutor::failing_first`] makes the first `n` calls return
//!   an error (the call is still recorded).
//! - [`RecordingKeyExecutor::gated`] makes each call wait for a permit on a
//!   shared semaphore before finishing, so tests can hold presses in flight.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use slidex_core::AllowedKey;
use tokio::sync::Semaphore;

use crate::application::key_executor::{ExecutionError, KeyExecutor};

#[derive(Default)]
pub struct RecordingKeyExecutor {
    presses: Mutex<Vec<AllowedKey>>,
    failures_remaining: AtomicUsize,
    gate: Option<Arc<Semaphore>>,
}

impl RecordingKeyExecutor {
    /// Records every call and always succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records every call; the first `n` calls fail.
    pub fn failing_first(n: usize) -> Self {
        Self {
            failures_remaining: AtomicUsize::new(n),
            ..Self::default()
        }
    }

    /// Records every call, then waits for one permit from `gate` before finishing.
    pub fn gated(gate: Arc<Semaphore>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    /// Keys received so far, in call order.
    pub fn presses(&self) -> Vec<AllowedKey> {
        self.presses
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    pub fn press_count(&self) -> usize {
        self.presses.lock().map(|p| p.len()).unwrap_or_default()
    }
}

#[async_trait]
impl KeyExecutor for RecordingKeyExecutor {
    async fn press(&self, key: AllowedKey) -> Result<(), ExecutionError> {
        self.presses
            .lock()
            .map_err(|e| ExecutionError::Platform(e.to_string()))?
            .push(key);

        if let Some(gate) = &self.gate {
            gate.acquire()
                .await
                .map_err(|e| ExecutionError::Platform(e.to_string()))?
                .forget();
        }

        let failed = self
            .failures_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if failed {
            return Err(ExecutionError::Platform("recorded failure".to_string()));
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
