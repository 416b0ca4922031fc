use crate::SessionId;
use crate::gameroom::Stakes;
use tokio::sync::oneshot;

/// Lifecycle of a supervised session. Never moves backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Registered, waiting for a client channel.
    Created,
    /// Client connected and table acquired; events are flowing.
    Active,
    /// Evicted from the registry; the table has been or is being released.
    Closed,
}

/// Registry entry for one session.
/// Dropping the handle drops the stop signal, which ends the event loop.
#[derive(Debug)]
pub struct SessionHandle {
    pub id: SessionId,
    pub table: String,
    pub stakes: Stakes,
    phase: Phase,
    stop: Option<oneshot::Sender<()>>,
}

impl SessionHandle {
    pub fn new(id: SessionId, table: String, stakes: Stakes) -> Self {
        Self {
            id,
            table,
            stakes,
            phase: Phase::Created,
            stop: None,
        }
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    /// Moves Created to Active, keeping the stop signal of the spawned loop.
    pub fn activate(&mut self, stop: oneshot::Sender<()>) -> bool {
        match self.phase {
            Phase::Created => {
                self.phase = Phase::Active;
                self.stop = Some(stop);
                true
            }
            Phase::Active | Phase::Closed => false,
        }
    }
    /// Signals the event loop, if any, and reports the final phase.
    pub fn close(mut self) -> Phase {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        self.phase = Phase::Closed;
        self.phase
    }
}
