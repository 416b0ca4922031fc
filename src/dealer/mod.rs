//! WebSocket client for the external table engine.
//!
//! Each opened table is one connection to `<url>/<table>`. A writer task
//! drains queued [`Command`]s onto the socket; a reader task forwards text
//! frames into the session feed. The connection closes when the table
//! handle is dropped or the engine hangs up.
mod remote;

pub use remote::*;

use crate::COMMAND_BUFFER;
use crate::FEED_BUFFER;
use crate::gameroom::*;
use futures::SinkExt;
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Lobby backed by the engine's WebSocket endpoint.
#[derive(Debug, Clone)]
pub struct Dealer {
    url: String,
}

impl Dealer {
    pub fn new(url: impl AsRef<str>) -> Self {
        Self {
            url: url.as_ref().trim_end_matches('/').to_string(),
        }
    }
    pub fn url(&self, table: &str) -> String {
        format!("{}/{}", self.url, table)
    }
}

#[async_trait::async_trait]
impl Lobby for Dealer {
    async fn open(&self, table: &str) -> Result<(Box<dyn Table>, Feed), Fault> {
        let ref url = self.url(table);
        log::info!("[dealer] connecting to {}", url);
        let (socket, _) = tokio::time::timeout(CONNECT_TIMEOUT, connect_async(url.as_str()))
            .await
            .map_err(|_| Fault::Transport(format!("timed out connecting to {}", url)))?
            .map_err(|e| Fault::Transport(format!("{}: {}", url, e)))?;
        let (mut write, mut read) = socket.split();
        let (commands, mut queue) = mpsc::channel::<Command>(COMMAND_BUFFER);
        let (events, feed) = mpsc::channel::<String>(FEED_BUFFER);
        let name = table.to_string();
        tokio::spawn(async move {
            while let Some(command) = queue.recv().await {
                log::debug!("[dealer] {} <- {:?}", name, command);
                if let Err(e) = write.send(Message::Text(command.to_json())).await {
                    log::warn!("[dealer] {} write failed: {}", name, e);
                    break;
                }
            }
            let _ = write.close().await;
            log::debug!("[dealer] {} writer closed", name);
        });
        let name = table.to_string();
        tokio::spawn(async move {
            'feed: while let Some(frame) = read.next().await {
                let text = match frame {
                    Ok(Message::Text(text)) => text,
                    Ok(Message::Binary(bytes)) => match String::from_utf8(bytes) {
                        Ok(text) => text,
                        Err(_) => continue 'feed,
                    },
                    Ok(Message::Close(_)) => break 'feed,
                    Ok(_) => continue 'feed,
                    Err(e) => {
                        log::warn!("[dealer] {} read failed: {}", name, e);
                        break 'feed;
                    }
                };
                if events.send(text).await.is_err() {
                    break 'feed;
                }
            }
            log::info!("[dealer] {} feed closed", name);
        });
        let remote = Remote::new(table, commands);
        remote
            .send(Command::Subscribe {
                table: table.to_string(),
            })
            .await?;
        Ok((Box::new(remote), feed))
    }
}
