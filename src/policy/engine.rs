use super::*;
use crate::N_ACTIONS;
use crate::SPLIT_TOTALS;
use crate::Utility;
use std::sync::Arc;

/// Greedy decision over one table snapshot.
/// Total over its inputs: an absent state or an empty table falls back
/// to the zero vector, whose argmax is Hit.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    table: Arc<PolicyTable>,
}

/// Table-derived choice with the row it was read from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Choice {
    pub action: Action,
    pub play: Play,
    pub values: [Utility; N_ACTIONS],
}

impl From<Arc<PolicyTable>> for Engine {
    fn from(table: Arc<PolicyTable>) -> Self {
        Self { table }
    }
}

impl From<PolicyTable> for Engine {
    fn from(table: PolicyTable) -> Self {
        Self::from(Arc::new(table))
    }
}

impl Engine {
    pub fn decide(&self, state: StateKey, can_double: bool, can_split: bool) -> Play {
        self.choose(state, can_double, can_split).play
    }

    pub fn choose(&self, state: StateKey, can_double: bool, can_split: bool) -> Choice {
        let values = self.table.get(&state);
        let action = Action::try_from(Self::argmax(&values)).unwrap_or(Action::Hit);
        let play = match action {
            _ if can_split && SPLIT_TOTALS.contains(&state.score) => Play::Split,
            Action::Hit => Play::Hit,
            Action::Stand => Play::Stand,
            Action::Double if can_double => Play::Double,
            Action::Double => Play::Hit,
        };
        Choice {
            action,
            play,
            values,
        }
    }

    /// Index of the largest value; the first occurrence wins ties.
    pub fn argmax(values: &[Utility]) -> usize {
        values
            .iter()
            .enumerate()
            .fold((0, Utility::NEG_INFINITY), |(best, max), (i, &v)| {
                if v > max { (i, v) } else { (best, max) }
            })
            .0
    }
}
