//! RelaySession: per-connection gatekeeper between the channel and the host.
//!
//! One session exists per connected browser.  It has two states:
//!
//! ```text
//!   open() ──► Connected ──close()──► Closed
//!              (emits status 200 once)
//! ```
//!
//! While connected, every inbound key event goes through [`RelaySession::admit`],
//! the single admission-control point of the system.  Names outside the
//! allowed key set (including an absent or empty name) are dropped with a log
//! line and never reach the executor.  Admitted keys are handed to the
//! [`KeyExecutor`]; a failure is logged on the host and otherwise ignored.
//! Nothing is ever sent back to the browser for a key event.
//!
//! [`RelaySession::dispatch`] runs each admitted key as its own Tokio task, so
//! a second event does not wait for the first one's simulation to finish.
//! Completion order across those tasks is unspecified.

use std::sync::Arc;

use slidex_core::{AllowedKey, ServerEvent};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::application::key_executor::KeyExecutor;

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Connected,
    Closed,
}

/// What happened to one inbound key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The name was not in the allowed key set; the executor was not called.
    Dropped,
    /// The executor simulated the key.
    Pressed(AllowedKey),
    /// The executor was called and failed; the failure has been logged.
    Failed(AllowedKey),
}

/// Per-connection key relay.
pub struct RelaySession {
    id: Uuid,
    executor: Arc<dyn KeyExecutor>,
    state: SessionState,
}

impl RelaySession {
    /// Opens a session in the `Connected` state.
    ///
    /// Returns the session together with the status signal the transport must
    /// send to the client right away.
    pub fn open(executor: Arc<dyn KeyExecutor>) -> (Self, ServerEvent) {
        let session = Self {
            id: Uuid::new_v4(),
            executor,
            state: SessionState::Connected,
        };
        debug!("session {}: connected", session.id);
        (session, ServerEvent::connected())
    }

    /// Identifier used in log lines.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Moves the session to `Closed`.  Later events are dropped.
    pub fn close(&mut self) {
        if self.state == SessionState::Connected {
            debug!("session {}: closed", self.id);
        }
        self.state = SessionState::Closed;
    }

    /// Validates a raw inbound key name.
    ///
    /// Returns the admitted key, or `None` when the event must be dropped.
    pub fn admit(&self, raw: Option<&str>) -> Option<AllowedKey> {
        info!("session {}: key event {:?}", self.id, raw);

        if self.state == SessionState::Closed {
            debug!("session {}: event after close dropped", self.id);
            return None;
        }

        let Some(name) = raw else {
            debug!("session {}: key event without a name dropped", self.id);
            return None;
        };

        match name.parse::<AllowedKey>() {
            Ok(key) => Some(key),
            Err(e) => {
                debug!("session {}: dropped: {e}", self.id);
                None
            }
        }
    }

    /// Validates `raw` and, if admitted, simulates the key and waits for it.
    pub async fn handle_key_event(&self, raw: Option<&str>) -> Dispatch {
        match self.admit(raw) {
            Some(key) => relay(self.id, Arc::clone(&self.executor), key).await,
            None => Dispatch::Dropped,
        }
    }

    /// Validates `raw` and, if admitted, starts the simulation on its own task.
    ///
    /// Returns `None` for a dropped event.  The returned handle may be
    /// ignored; the outcome is already logged by the task.
    pub fn dispatch(&self, raw: Option<&str>) -> Option<JoinHandle<Dispatch>> {
        let key = self.admit(raw)?;
        Some(tokio::spawn(relay(self.id, Arc::clone(&self.executor), key)))
    }
}

async fn relay(session_id: Uuid, executor: Arc<dyn KeyExecutor>, key: AllowedKey) -> Dispatch {
    match executor.press(key).await {
        Ok(()) => {
            debug!("session {session_id}: pressed {key}");
            Dispatch::Pressed(key)
        }
        Err(e) => {
            error!("session {session_id}: failed to simulate {key}: {e}");
            Dispatch::Failed(key)
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
