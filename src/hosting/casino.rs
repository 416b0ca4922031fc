use super::*;
use crate::Chips;
use crate::EMIT_BUFFER;
use crate::SessionId;
use crate::gameroom::*;
use crate::policy::Library;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::sync::mpsc::Receiver;
use tokio::sync::oneshot;

/// Supervises sessions from creation to eviction.
///
/// A session is registered by [`Casino::start`], goes live when a client
/// channel attaches through [`Casino::activate`], and leaves the registry
/// on [`Casino::end`] or when its event loop exits on its own.
pub struct Casino {
    lobby: Arc<dyn Lobby>,
    library: Arc<Library>,
    sessions: RwLock<HashMap<SessionId, SessionHandle>>,
}

impl Casino {
    pub fn new(lobby: Arc<dyn Lobby>, library: Arc<Library>) -> Self {
        Self {
            lobby,
            library,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn library(&self) -> &Arc<Library> {
        &self.library
    }

    /// Phase of a registered session. Evicted sessions report `None`.
    pub async fn phase(&self, id: SessionId) -> Option<Phase> {
        self.sessions.read().await.get(&id).map(SessionHandle::phase)
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Registers a session for a table without touching the engine.
    pub async fn start(&self, table: &str, min: Chips, max: Chips) -> anyhow::Result<SessionId> {
        let stakes = Stakes::new(min, max)?;
        let id = SessionId::now_v7();
        let handle = SessionHandle::new(id, table.to_string(), stakes);
        self.sessions.write().await.insert(id, handle);
        Ok(id).inspect(|_| {
            log::info!(
                "[casino] created session {} for table {} at {}-{}",
                id,
                table,
                stakes.min(),
                stakes.max()
            )
        })
    }

    /// Stops and evicts a session. Returns whether it existed.
    pub async fn end(&self, id: SessionId) -> bool {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(SessionHandle::close)
            .inspect(|_| log::info!("[casino] closed session {}", id))
            .is_some()
    }

    /// Acquires the table and spawns the event loop of a created session.
    /// Returns the queue of serialized client messages.
    pub async fn activate(self: &Arc<Self>, id: SessionId) -> anyhow::Result<Receiver<String>> {
        let (table, stakes) = match self.sessions.read().await.get(&id) {
            None => return Err(anyhow::anyhow!("session not found")),
            Some(handle) if handle.phase() != Phase::Created => {
                return Err(anyhow::anyhow!("session already active"));
            }
            Some(handle) => (handle.table.clone(), handle.stakes),
        };
        let (mut handle, feed) = self.lobby.open(&table).await?;
        let (stop, signal) = oneshot::channel();
        let activated = self
            .sessions
            .write()
            .await
            .get_mut(&id)
            .map(|h| h.activate(stop))
            .unwrap_or(false);
        if !activated {
            handle.release(None).await;
            return Err(anyhow::anyhow!("session ended before activation"));
        }
        let (emitter, outbound) = Emitter::channel(EMIT_BUFFER);
        let dispatcher = Dispatcher::new(id, handle, stakes, self.library.clone(), emitter);
        let casino = self.clone();
        tokio::spawn(async move {
            let exit = Session::new(dispatcher, feed).run(signal).await;
            if let Some(handle) = casino.sessions.write().await.remove(&id) {
                handle.close();
                log::info!("[casino] evicted session {} after {:?}", id, exit);
            }
        });
        log::info!("[casino] activated session {} on table {}", id, table);
        Ok(outbound)
    }

    /// Spawns the WebSocket bridge between a client and its session.
    /// The session ends when the client disconnects.
    pub async fn bridge(
        self: &Arc<Self>,
        id: SessionId,
        mut session: actix_ws::Session,
        mut stream: actix_ws::MessageStream,
    ) -> anyhow::Result<()> {
        use futures::StreamExt;
        let mut outbound = self
            .activate(id)
            .await
            .inspect(|_| log::info!("[casino] client connected to session {}", id))?;
        let casino = self.clone();
        actix_web::rt::spawn(async move {
            'sesh: loop {
                tokio::select! {
                    biased;
                    msg = outbound.recv() => match msg {
                        Some(json) => if session.text(json).await.is_err() { break 'sesh },
                        None => break 'sesh,
                    },
                    msg = stream.next() => match msg {
                        Some(Ok(actix_ws::Message::Ping(bytes))) => if session.pong(&bytes).await.is_err() { break 'sesh },
                        Some(Ok(actix_ws::Message::Text(_))) => continue 'sesh,
                        Some(Ok(actix_ws::Message::Close(_))) => break 'sesh,
                        Some(Err(_)) => break 'sesh,
                        None => break 'sesh,
                        _ => continue 'sesh,
                    },
                }
            }
            casino.end(id).await;
            let _ = session.close(None).await;
            log::info!("[casino] client disconnected from session {}", id);
        });
        Ok(())
    }
}
