//! In-memory stand-ins for the table engine.
use super::*;
use crate::Chips;
use crate::FEED_BUFFER;
use crate::Seat;
use crate::policy::Play;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use tokio::sync::mpsc;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Accept,
    Refuse,
    Broken,
}

/// Table that records every command instead of reaching an engine.
pub struct Paper {
    mode: Mode,
    commands: Arc<Mutex<Vec<Command>>>,
    released: watch::Sender<usize>,
}

/// Read side of a [`Paper`] table, kept by the test.
#[derive(Clone)]
pub struct Probe {
    commands: Arc<Mutex<Vec<Command>>>,
    released: watch::Receiver<usize>,
}

impl Paper {
    fn with(mode: Mode) -> (Self, Probe) {
        let commands = Arc::new(Mutex::new(Vec::new()));
        let (tx, rx) = watch::channel(0);
        let paper = Self {
            mode,
            commands: commands.clone(),
            released: tx,
        };
        let probe = Probe {
            commands,
            released: rx,
        };
        (paper, probe)
    }
    pub fn new() -> (Self, Probe) {
        Self::with(Mode::Accept)
    }
    pub fn refusing() -> (Self, Probe) {
        Self::with(Mode::Refuse)
    }
    pub fn broken() -> (Self, Probe) {
        Self::with(Mode::Broken)
    }
    fn record(&self, command: Command) -> Result<(), Fault> {
        match self.mode {
            Mode::Broken => Err(Fault::Transport("engine connection lost".to_string())),
            _ => Ok(self.commands.lock().unwrap().push(command)),
        }
    }
}

impl Probe {
    pub fn commands(&self) -> Vec<Command> {
        self.commands.lock().unwrap().clone()
    }
    pub fn plays(&self) -> Vec<Play> {
        self.commands()
            .into_iter()
            .filter_map(|c| match c {
                Command::Play { play, .. } => Some(play),
                _ => None,
            })
            .collect()
    }
    pub fn releases(&self) -> usize {
        *self.released.borrow()
    }
    /// Resolves once the table has been released at least once.
    pub async fn released(&mut self) {
        let _ = self.released.wait_for(|n| *n > 0).await;
    }
}

#[async_trait::async_trait]
impl Table for Paper {
    async fn sit(&mut self, seat: Seat) -> Result<Option<Seat>, Fault> {
        self.record(Command::Sit { seat })?;
        Ok((self.mode == Mode::Accept).then_some(seat))
    }
    async fn bet(&mut self, seat: Seat, game: &str, amount: Chips) -> Result<(), Fault> {
        self.record(Command::Bet {
            seat,
            game: game.to_string(),
            amount,
        })
    }
    async fn play(&mut self, seat: Seat, game: &str, play: Play) -> Result<(), Fault> {
        self.record(Command::Play {
            seat,
            game: game.to_string(),
            play,
        })
    }
    async fn release(&mut self, seat: Option<Seat>) {
        self.commands.lock().unwrap().push(Command::Leave { seat });
        self.released.send_modify(|n| *n += 1);
    }
}

/// Lobby that opens paper tables and keeps their feeds for injection.
#[derive(Default)]
pub struct PaperLobby {
    closed: bool,
    tables: Mutex<HashMap<String, (mpsc::Sender<String>, Probe)>>,
}

impl PaperLobby {
    pub fn closed() -> Self {
        Self {
            closed: true,
            ..Self::default()
        }
    }
    pub fn feed(&self, table: &str) -> mpsc::Sender<String> {
        self.tables.lock().unwrap()[table].0.clone()
    }
    /// Forgets a table, closing its feed once no sender clones remain.
    pub fn hangup(&self, table: &str) {
        self.tables.lock().unwrap().remove(table);
    }
    pub fn probe(&self, table: &str) -> Probe {
        self.tables.lock().unwrap()[table].1.clone()
    }
}

#[async_trait::async_trait]
impl Lobby for PaperLobby {
    async fn open(&self, table: &str) -> Result<(Box<dyn Table>, Feed), Fault> {
        if self.closed {
            return Err(Fault::Transport(format!("table {} unavailable", table)));
        }
        let (paper, probe) = Paper::new();
        let (tx, rx) = mpsc::channel(FEED_BUFFER);
        self.tables
            .lock()
            .unwrap()
            .insert(table.to_string(), (tx, probe));
        Ok((Box::new(paper), rx))
    }
}
