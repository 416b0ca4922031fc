use super::*;
use crate::GameId;
use crate::Seat;
use crate::policy::Action;
use crate::policy::Choice;
use serde::Serialize;

/// Messages sent from server to client.
/// Shaped as `{"event": ..., "data": {...}}` on the wire.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum ServerMessage {
    /// The agent took a seat at the table.
    SatDown { seat_num: Seat },
    /// The agent acted on a decision request.
    Decision(Decision),
}

/// One decision, produced per matching decision request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Decision {
    pub seat: Seat,
    pub game: GameId,
    pub code: String,
    pub action: Action,
    pub hand: String,
    pub decision: String,
}

impl From<(&Prompt, &Choice)> for Decision {
    fn from((prompt, choice): (&Prompt, &Choice)) -> Self {
        Self {
            seat: prompt.seat,
            game: prompt.game.clone(),
            code: prompt.code.clone(),
            action: choice.action,
            hand: prompt.hand.clone(),
            decision: choice.play.label().to_string(),
        }
    }
}

impl ServerMessage {
    pub fn sat_down(seat: Seat) -> Self {
        Self::SatDown { seat_num: seat }
    }
    pub fn decision(decision: Decision) -> Self {
        Self::Decision(decision)
    }
    pub fn name(&self) -> &'static str {
        match self {
            Self::SatDown { .. } => "sat_down",
            Self::Decision(_) => "decision",
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Play;
    #[test]
    fn sat_down_wire_format() {
        assert_eq!(
            ServerMessage::sat_down(5).to_json(),
            r#"{"event":"sat_down","data":{"seat_num":5}}"#
        );
    }
    #[test]
    fn decision_wire_format() {
        let prompt = Prompt {
            seat: 5,
            game: "g-1".to_string(),
            score: 11,
            dealer: Some(6),
            can_double: true,
            can_split: false,
            hand: "h-1".to_string(),
            code: "c-1".to_string(),
        };
        let choice = Choice {
            action: Action::Double,
            play: Play::Double,
            values: [0.1, 0.2, 0.9],
        };
        let message = ServerMessage::decision(Decision::from((&prompt, &choice)));
        assert_eq!(message.name(), "decision");
        assert_eq!(
            message.to_json(),
            r#"{"event":"decision","data":{"seat":5,"game":"g-1","code":"c-1","action":"double","hand":"h-1","decision":"Double down"}}"#
        );
    }
}
