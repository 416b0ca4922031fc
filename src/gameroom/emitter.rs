use super::*;
use tokio::sync::mpsc::Receiver;
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::channel;
use tokio::sync::mpsc::error::TrySendError;

/// Non-blocking writer into a session's bounded client queue.
///
/// A full queue drops the message; a closed queue is reported once.
/// Neither stalls event processing.
#[derive(Debug)]
pub struct Emitter {
    tx: Sender<String>,
    closed: bool,
}

impl Emitter {
    /// Creates the emitter and the receiving end drained by the client bridge.
    pub fn channel(capacity: usize) -> (Self, Receiver<String>) {
        let (tx, rx) = channel(capacity);
        (Self { tx, closed: false }, rx)
    }
    pub fn is_open(&self) -> bool {
        !self.tx.is_closed()
    }
    /// Returns whether the message was queued.
    pub fn emit(&mut self, message: &ServerMessage) -> bool {
        match self.tx.try_send(message.to_json()) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                log::warn!("[emitter] client queue full, dropped {}", message.name());
                false
            }
            Err(TrySendError::Closed(_)) => {
                if !self.closed {
                    self.closed = true;
                    log::info!("[emitter] client channel closed, dropping output");
                }
                false
            }
        }
    }
}
