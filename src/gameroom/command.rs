use crate::Chips;
use crate::GameId;
use crate::Seat;
use crate::policy::Play;
use serde::Serialize;

/// Instructions sent to the table engine, tagged by `command` on the wire.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    Subscribe { table: String },
    Sit { seat: Seat },
    Bet { seat: Seat, game: GameId, amount: Chips },
    Play { seat: Seat, game: GameId, play: Play },
    Leave { seat: Option<Seat> },
}

impl Command {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize engine command")
    }
}
