use super::*;
use crate::Chips;
use crate::Seat;
use crate::policy::Play;
use tokio::sync::mpsc::Receiver;

/// Raw engine messages for one session, in delivery order.
pub type Feed = Receiver<String>;

/// Handle to one table in the external engine, owned by a single session.
/// The engine's rules are opaque; only these commands are issued.
#[async_trait::async_trait]
pub trait Table: Send {
    /// Requests a seat. The engine may refuse with `None`.
    async fn sit(&mut self, seat: Seat) -> Result<Option<Seat>, Fault>;
    async fn bet(&mut self, seat: Seat, game: &str, amount: Chips) -> Result<(), Fault>;
    async fn play(&mut self, seat: Seat, game: &str, play: Play) -> Result<(), Fault>;
    /// Gives the handle back. Called exactly once, when the session ends.
    async fn release(&mut self, seat: Option<Seat>);
}

/// Entry point of the external engine: opens table handles by id.
#[async_trait::async_trait]
pub trait Lobby: Send + Sync {
    async fn open(&self, table: &str) -> Result<(Box<dyn Table>, Feed), Fault>;
}
