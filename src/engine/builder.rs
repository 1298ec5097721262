use crate::engine::error::BracketError;
use crate::engine::order::seeding_order;
use crate::engine::{Bracket, Matchup, Round, SeededEntry, Shape, Slot};

/// The one supported non-power-of-two field: 18 byes + 28 round-0 players.
pub const BYE_ENTRY_COUNT: usize = 46;
/// Seeds 1..=18 skip round 0.
const BYE_SEED_COUNT: usize = 18;
/// 46 → 32 → 16 → 8 → 4 → 2 → 1.
const BYE_ROUND_COUNT: usize = 6;

/// Minimum round count for an entry field. 6 for the 46-entry bye bracket,
/// otherwise ceil(log2 n).
pub fn required_rounds(entry_count: usize) -> usize {
    if entry_count == BYE_ENTRY_COUNT {
        return BYE_ROUND_COUNT;
    }
    entry_count.next_power_of_two().trailing_zeros() as usize
}

/// Build the full round/matchup tree for a seeded field.
///
/// Power-of-two fields place round 0 by the canonical seeding order; the
/// 46-entry field uses the bye bracket; any other non-power-of-two count is
/// rejected. Rounds beyond the required depth are ignored — the tree is
/// built exactly as deep as the field needs.
pub fn build(seeded: &[SeededEntry], round_count: usize) -> Result<Bracket, BracketError> {
    let entry_count = seeded.len();
    if entry_count == BYE_ENTRY_COUNT {
        return build_byes(seeded, round_count);
    }
    if !entry_count.is_power_of_two() {
        return Err(BracketError::UnsupportedBracketSize(entry_count));
    }

    let required = required_rounds(entry_count);
    if round_count < required {
        return Err(BracketError::InsufficientRounds {
            entries: entry_count,
            required,
            requested: round_count,
        });
    }

    let order = seeding_order(entry_count)?;
    let labels = round_labels(required, entry_count);

    let mut rounds = Vec::with_capacity(required);
    let round0 = (0..entry_count / 2)
        .map(|k| {
            Matchup::new(
                0,
                k,
                slot_for(seeded, order[2 * k] as usize - 1),
                slot_for(seeded, order[2 * k + 1] as usize - 1),
            )
        })
        .collect();
    rounds.push(Round { label: labels[0].clone(), matchups: round0 });

    for r in 1..required {
        rounds.push(pending_round(r, entry_count >> (r + 1), &labels[r]));
    }

    Ok(Bracket { shape: Shape::Standard, rounds })
}

/// 46-entry bye bracket. Seeds 19–46 play a 14-matchup round 0 pairing seed
/// `19+i` against `46-i`. Round 1 has 16 matchups: seeds 1–16 hold the top
/// slots; round-0 winners fill the bottom slot of the same-index matchup
/// (0..14); the two remaining bye seeds take the last two bottom slots —
/// seed 18 against seed 15, seed 17 against seed 16.
fn build_byes(seeded: &[SeededEntry], round_count: usize) -> Result<Bracket, BracketError> {
    if round_count < BYE_ROUND_COUNT {
        return Err(BracketError::InsufficientRounds {
            entries: BYE_ENTRY_COUNT,
            required: BYE_ROUND_COUNT,
            requested: round_count,
        });
    }

    let labels = round_labels(BYE_ROUND_COUNT, BYE_ENTRY_COUNT);
    let mut rounds = Vec::with_capacity(BYE_ROUND_COUNT);

    let round0 = (0..14)
        .map(|i| {
            Matchup::new(
                0,
                i,
                slot_for(seeded, BYE_SEED_COUNT + i),
                slot_for(seeded, BYE_ENTRY_COUNT - 1 - i),
            )
        })
        .collect();
    rounds.push(Round { label: labels[0].clone(), matchups: round0 });

    let round1 = (0..16)
        .map(|i| {
            let bottom = match i {
                14 => slot_for(seeded, 17), // seed 18
                15 => slot_for(seeded, 16), // seed 17
                _ => Slot::Pending,         // winner of round-0 matchup i
            };
            Matchup::new(1, i, slot_for(seeded, i), bottom)
        })
        .collect();
    rounds.push(Round { label: labels[1].clone(), matchups: round1 });

    for r in 2..BYE_ROUND_COUNT {
        rounds.push(pending_round(r, 16 >> (r - 1), &labels[r]));
    }

    Ok(Bracket { shape: Shape::Byes46, rounds })
}

fn pending_round(round: usize, matchup_count: usize, label: &str) -> Round {
    Round {
        label: label.to_owned(),
        matchups: (0..matchup_count)
            .map(|i| Matchup::new(round, i, Slot::Pending, Slot::Pending))
            .collect(),
    }
}

fn slot_for(seeded: &[SeededEntry], index: usize) -> Slot {
    seeded.get(index).cloned().map(Slot::Entrant).unwrap_or(Slot::Pending)
}

/// Round labels, earliest first. Override tables for the 12- and 46-entry
/// shapes; otherwise a rounds-remaining mapping (1 = Championship,
/// 2 = Semifinals, 3 = Quarterfinals, else "Round N").
pub fn round_labels(round_count: usize, entry_count: usize) -> Vec<String> {
    if entry_count == 12 {
        return ["First Round", "Quarterfinals", "Semifinals", "Championship"]
            .map(str::to_owned)
            .to_vec();
    }
    if entry_count == BYE_ENTRY_COUNT {
        return ["First Round", "Round of 32", "Sweet 16", "Elite 8", "Semifinals", "Championship"]
            .map(str::to_owned)
            .to_vec();
    }

    (0..round_count)
        .map(|r| match round_count - r {
            1 => "Championship".to_owned(),
            2 => "Semifinals".to_owned(),
            3 => "Quarterfinals".to_owned(),
            _ => format!("Round {}", r + 1),
        })
        .collect()
}
