use super::*;
use tokio::sync::oneshot;

/// Event loop of one session.
///
/// Events are handled strictly in arrival order. The stop signal wins
/// over pending input and cancels an in-flight dispatch, so nothing is
/// played or emitted once a stop is observed. The table is released
/// exactly once on every exit path.
pub struct Session {
    dispatcher: Dispatcher,
    feed: Feed,
}

/// Why a session loop ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Exit {
    /// Stop signal fired or its sender was dropped.
    Stopped,
    /// The engine closed the event feed.
    Drained,
    /// A transport fault from the table handle.
    Faulted(Fault),
}

impl Session {
    pub fn new(dispatcher: Dispatcher, feed: Feed) -> Self {
        Self { dispatcher, feed }
    }

    pub async fn run(mut self, mut stop: oneshot::Receiver<()>) -> Exit {
        let id = self.dispatcher.id();
        log::info!("[session {}] running", id);
        let exit = 'intake: loop {
            let raw = tokio::select! {
                biased;
                _ = &mut stop => break 'intake Exit::Stopped,
                raw = self.feed.recv() => match raw {
                    Some(raw) => raw,
                    None => break 'intake Exit::Drained,
                },
            };
            let event = match Event::decode(&raw) {
                Ok(event) => event,
                Err(e) => {
                    log::warn!("[session {}] dropped event: {}", id, e);
                    continue 'intake;
                }
            };
            tokio::select! {
                biased;
                _ = &mut stop => break 'intake Exit::Stopped,
                result = self.dispatcher.dispatch(event) => match result {
                    Ok(()) => continue 'intake,
                    Err(fault) => break 'intake Exit::Faulted(fault),
                },
            }
        };
        match exit {
            Exit::Faulted(ref fault) => log::error!("[session {}] {}", id, fault),
            ref exit => log::info!("[session {}] ended: {:?}", id, exit),
        }
        self.dispatcher.release().await;
        exit
    }
}
