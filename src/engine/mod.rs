//! Bracket construction and advancement engine.
//!
//! Pure, synchronous, no I/O. The app owns exactly one `Bracket` at a time;
//! seeding edits never mutate a built bracket — the caller rebuilds instead.

pub mod advance;
pub mod builder;
pub mod editor;
pub mod error;
pub mod order;
pub mod seeder;

pub use builder::{build, required_rounds, round_labels};
pub use error::BracketError;
pub use seeder::{SeedingMethod, seed};

use cfb_api::TeamEntry;

/// A standings entry with its bracket seed (1 = strongest). Seeds are
/// contiguous and unique across the candidate set.
#[derive(Debug, Clone, PartialEq)]
pub struct SeededEntry {
    pub seed: u16,
    pub entry: TeamEntry,
}

/// One side of a matchup. A slot with no concrete entrant yet is `Pending` —
/// a tagged variant rather than a sentinel name, so a real team called "TBD"
/// could never be mistaken for an undetermined slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Slot {
    Entrant(SeededEntry),
    #[default]
    Pending,
}

impl Slot {
    pub fn is_pending(&self) -> bool {
        matches!(self, Slot::Pending)
    }

    pub fn entrant(&self) -> Option<&SeededEntry> {
        match self {
            Slot::Entrant(seeded) => Some(seeded),
            Slot::Pending => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Top,
    Bottom,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Matchup {
    /// Stable within a bracket instance: "r{round}-m{index}".
    pub id: String,
    pub top: Slot,
    pub bottom: Slot,
    pub winner: Option<Side>,
}

impl Matchup {
    pub fn new(round: usize, index: usize, top: Slot, bottom: Slot) -> Self {
        Self { id: matchup_id(round, index), top, bottom, winner: None }
    }

    pub fn slot(&self, side: Side) -> &Slot {
        match side {
            Side::Top => &self.top,
            Side::Bottom => &self.bottom,
        }
    }

    pub fn slot_mut(&mut self, side: Side) -> &mut Slot {
        match side {
            Side::Top => &mut self.top,
            Side::Bottom => &mut self.bottom,
        }
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winning_slot(&self) -> Option<&Slot> {
        self.winner.map(|side| self.slot(side))
    }
}

pub fn matchup_id(round: usize, index: usize) -> String {
    format!("r{round}-m{index}")
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Round {
    pub label: String,
    pub matchups: Vec<Matchup>,
}

/// Marks whether the bracket carries the 46-entry bye configuration; the
/// round0→round1 feed rule differs there (see `Bracket::feed`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Shape {
    #[default]
    Standard,
    Byes46,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bracket {
    pub shape: Shape,
    pub rounds: Vec<Round>,
}

impl Bracket {
    /// Locate a matchup by ID across all rounds.
    pub fn position_of(&self, matchup_id: &str) -> Option<(usize, usize)> {
        for (r, round) in self.rounds.iter().enumerate() {
            for (m, matchup) in round.matchups.iter().enumerate() {
                if matchup.id == matchup_id {
                    return Some((r, m));
                }
            }
        }
        None
    }

    pub fn matchup(&self, round: usize, index: usize) -> Option<&Matchup> {
        self.rounds.get(round)?.matchups.get(index)
    }
}
