use crate::Score;

/// The only information used to index the policy table.
/// Must be built exactly the way the training side built it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateKey {
    pub score: Score,
    pub upcard: Score,
    pub soft: bool,
}

impl StateKey {
    pub fn new(score: Score, upcard: Score, soft: bool) -> Self {
        Self {
            score,
            upcard,
            soft,
        }
    }
}

impl From<(Score, Score, bool)> for StateKey {
    fn from((score, upcard, soft): (Score, Score, bool)) -> Self {
        Self::new(score, upcard, soft)
    }
}

impl std::fmt::Display for StateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let hand = if self.soft { "soft" } else { "hard" };
        write!(f, "{} {} v {}", hand, self.score, self.upcard)
    }
}
