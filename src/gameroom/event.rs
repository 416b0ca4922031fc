use super::*;
use crate::GameId;
use crate::Score;
use crate::Seat;
use serde::Deserialize;
use serde::Serialize;

/// Events pushed by the table engine, one per message.
/// Tagged by `kind` on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Event {
    /// Subscription to the table confirmed; time to take a seat.
    Subscribe,
    /// A seat at the table is now occupied.
    SeatAssigned { seat: Seat },
    /// Betting window opened for a new game.
    BetsOpen { game: GameId },
    /// A card was dealt to a seat.
    Card { seat: Seat, rank: String },
    /// A seat must act on its hand.
    DecisionRequest(Prompt),
    /// A seat acted on its hand.
    Decision {
        seat: Seat,
        game: GameId,
        decision: String,
    },
}

/// Fields of a decision request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    pub seat: Seat,
    pub game: GameId,
    pub score: Score,
    #[serde(default)]
    pub dealer: Option<Score>,
    pub can_double: bool,
    pub can_split: bool,
    pub hand: String,
    pub code: String,
}

impl Event {
    /// Parses one raw engine message.
    pub fn decode(raw: &str) -> Result<Self, Fault> {
        serde_json::from_str(raw).map_err(|e| Fault::Protocol(format!("{}: {}", e, raw)))
    }
    pub fn encode(&self) -> String {
        serde_json::to_string(self).expect("serialize engine event")
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Event::Subscribe => write!(f, "subscribed"),
            Event::SeatAssigned { seat } => write!(f, "S{}: seated", seat),
            Event::BetsOpen { game } => write!(f, "bets open for {}", game),
            Event::Card { seat, rank } => write!(f, "S{}: dealt {}", seat, rank),
            Event::DecisionRequest(p) => match p.dealer {
                Some(up) => write!(f, "S{}: to act on {} v {}", p.seat, p.score, up),
                None => write!(f, "S{}: to act on {}", p.seat, p.score),
            },
            Event::Decision { seat, decision, .. } => write!(f, "S{}: {}", seat, decision),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn decodes_each_kind() {
        assert_eq!(Event::decode(r#"{"kind":"subscribe"}"#), Ok(Event::Subscribe));
        assert_eq!(
            Event::decode(r#"{"kind":"seat_assigned","seat":3}"#),
            Ok(Event::SeatAssigned { seat: 3 })
        );
        assert_eq!(
            Event::decode(r#"{"kind":"bets_open","game":"g-1"}"#),
            Ok(Event::BetsOpen {
                game: "g-1".to_string()
            })
        );
        assert_eq!(
            Event::decode(r#"{"kind":"card","seat":5,"rank":"A"}"#),
            Ok(Event::Card {
                seat: 5,
                rank: "A".to_string()
            })
        );
    }
    #[test]
    fn decision_request_dealer_is_optional() {
        let raw = r#"{"kind":"decision_request","seat":5,"game":"g-1","score":16,
            "can_double":false,"can_split":true,"hand":"h-1","code":"c-9"}"#;
        match Event::decode(raw) {
            Ok(Event::DecisionRequest(prompt)) => {
                assert_eq!(prompt.dealer, None);
                assert_eq!(prompt.score, 16);
                assert!(prompt.can_split);
            }
            other => panic!("unexpected {:?}", other),
        }
        let raw = r#"{"kind":"decision_request","seat":5,"game":"g-1","score":16,"dealer":null,
            "can_double":false,"can_split":true,"hand":"h-1","code":"c-9"}"#;
        assert!(matches!(Event::decode(raw), Ok(Event::DecisionRequest(Prompt { dealer: None, .. }))));
    }
    #[test]
    fn malformed_messages_are_protocol_faults() {
        assert!(matches!(Event::decode("not json"), Err(Fault::Protocol(_))));
        assert!(matches!(Event::decode(r#"{"kind":"shuffle"}"#), Err(Fault::Protocol(_))));
        assert!(matches!(Event::decode(r#"{"kind":"card","seat":1}"#), Err(Fault::Protocol(_))));
    }
    #[test]
    fn encode_matches_decode() {
        let event = Event::Decision {
            seat: 2,
            game: "g-7".to_string(),
            decision: "stand".to_string(),
        };
        assert_eq!(Event::decode(&event.encode()), Ok(event));
    }
}
