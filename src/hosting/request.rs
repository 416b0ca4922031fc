use crate::Chips;
use crate::SessionId;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct StartSession {
    pub table_id: String,
    pub min_bet: Chips,
    pub max_bet: Chips,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndSession {
    pub session_id: SessionId,
}
