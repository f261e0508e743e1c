use std::fmt;

/// Coarse-grained state of a quiz page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Error,
    InProgress,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Loading => write!(f, "loading"),
            Phase::Error => write!(f, "error"),
            Phase::InProgress => write!(f, "in progress"),
            Phase::Finished => write!(f, "finished"),
        }
    }
}
