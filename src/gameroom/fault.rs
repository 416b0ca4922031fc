/// Errors that can occur while running a session.
///
/// Config faults stop only the operation that hit them. Transport faults
/// close the session. Protocol faults drop the offending event.
#[derive(Debug, Clone, PartialEq)]
pub enum Fault {
    Config(String),
    Transport(String),
    Protocol(String),
}

impl std::fmt::Display for Fault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(s) => write!(f, "configuration error: {}", s),
            Self::Transport(s) => write!(f, "transport error: {}", s),
            Self::Protocol(s) => write!(f, "protocol error: {}", s),
        }
    }
}

impl std::error::Error for Fault {}
