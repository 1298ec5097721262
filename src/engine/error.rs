use std::fmt;

/// Local validation failures. None is fatal; every one is recoverable by
/// the caller supplying corrected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BracketError {
    /// Seeding order requested for a size that is not a power of two ≥ 2.
    InvalidSize(usize),
    /// Requested round count is too few for the entry count.
    InsufficientRounds { entries: usize, required: usize, requested: usize },
    /// Non-power-of-two entry count other than the supported 46-entry
    /// bye configuration.
    UnsupportedBracketSize(usize),
    /// Manual seed assignment outside 1..=N.
    InvalidSeedAssignment { seed: u16, max: u16 },
}

impl fmt::Display for BracketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketError::InvalidSize(size) => {
                write!(f, "Seeding order needs a power-of-two size of at least 2, got {size}")
            }
            BracketError::InsufficientRounds { entries, required, requested } => {
                write!(f, "{entries} entries need at least {required} rounds, got {requested}")
            }
            BracketError::UnsupportedBracketSize(size) => {
                write!(f, "Unsupported bracket size {size}: use a power of two, or 46 for the bye bracket")
            }
            BracketError::InvalidSeedAssignment { seed, max } => {
                write!(f, "Seed {seed} is out of range 1..={max}")
            }
        }
    }
}

impl std::error::Error for BracketError {}
