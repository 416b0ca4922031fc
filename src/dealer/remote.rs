use crate::Chips;
use crate::Seat;
use crate::gameroom::*;
use crate::policy::Play;
use tokio::sync::mpsc::Sender;

/// Table handle over a live engine connection.
/// Commands are queued for the connection's writer task.
pub struct Remote {
    table: String,
    commands: Sender<Command>,
}

impl Remote {
    pub fn new(table: &str, commands: Sender<Command>) -> Self {
        Self {
            table: table.to_string(),
            commands,
        }
    }
    pub async fn send(&self, command: Command) -> Result<(), Fault> {
        self.commands
            .send(command)
            .await
            .map_err(|_| Fault::Transport(format!("connection to table {} closed", self.table)))
    }
}

#[async_trait::async_trait]
impl Table for Remote {
    /// The engine confirms seats asynchronously; the request is taken as granted.
    async fn sit(&mut self, seat: Seat) -> Result<Option<Seat>, Fault> {
        self.send(Command::Sit { seat }).await.map(|_| Some(seat))
    }
    async fn bet(&mut self, seat: Seat, game: &str, amount: Chips) -> Result<(), Fault> {
        self.send(Command::Bet {
            seat,
            game: game.to_string(),
            amount,
        })
        .await
    }
    async fn play(&mut self, seat: Seat, game: &str, play: Play) -> Result<(), Fault> {
        self.send(Command::Play {
            seat,
            game: game.to_string(),
            play,
        })
        .await
    }
    async fn release(&mut self, seat: Option<Seat>) {
        if let Err(e) = self.send(Command::Leave { seat }).await {
            log::debug!("[dealer] {}", e);
        }
    }
}
