use serde::Serialize;

/// Column of the policy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Hit,
    Stand,
    Double,
}

impl Action {
    pub const ALL: [Action; crate::N_ACTIONS] = [Action::Hit, Action::Stand, Action::Double];
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl TryFrom<usize> for Action {
    type Error = usize;
    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::ALL.get(index).copied().ok_or(index)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Hit => write!(f, "hit"),
            Action::Stand => write!(f, "stand"),
            Action::Double => write!(f, "double"),
        }
    }
}

/// Move actually played on the table after fallbacks and overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Play {
    Hit,
    Stand,
    Double,
    Split,
}

impl Play {
    /// Client-facing decision label.
    pub fn label(&self) -> &'static str {
        match self {
            Play::Hit => "Hit",
            Play::Stand => "Stand",
            Play::Double => "Double down",
            Play::Split => "Split",
        }
    }
}

impl std::fmt::Display for Play {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn action_indices_follow_table_columns() {
        assert_eq!(Action::try_from(0), Ok(Action::Hit));
        assert_eq!(Action::try_from(1), Ok(Action::Stand));
        assert_eq!(Action::try_from(2), Ok(Action::Double));
        assert_eq!(Action::try_from(3), Err(3));
        assert_eq!(Action::Double.index(), 2);
    }
    #[test]
    fn play_labels() {
        assert_eq!(Play::Double.to_string(), "Double down");
        assert_eq!(Play::Split.label(), "Split");
        assert_eq!(serde_json::to_string(&Play::Double).unwrap(), "\"double\"");
    }
}
