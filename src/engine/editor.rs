use crate::engine::error::BracketError;
use crate::engine::SeededEntry;

/// Move the entry at `from` to position `to` and renumber seeds 1..=N by
/// the new order. Out-of-range indices are a no-op.
pub fn reorder(seeded: &mut Vec<SeededEntry>, from: usize, to: usize) {
    if from >= seeded.len() || to >= seeded.len() {
        return;
    }
    let entry = seeded.remove(from);
    seeded.insert(to, entry);
    renumber(seeded);
}

/// Assign the entry at `index` the seed number `new_seed`: remove, reinsert
/// at the target position, renumber. A seed outside 1..=N leaves the list
/// unchanged and reports the failure so the UI can revert its input field.
pub fn set_seed(
    seeded: &mut Vec<SeededEntry>,
    index: usize,
    new_seed: u16,
) -> Result<(), BracketError> {
    let max = seeded.len() as u16;
    if new_seed < 1 || new_seed > max {
        return Err(BracketError::InvalidSeedAssignment { seed: new_seed, max });
    }
    reorder(seeded, index, new_seed as usize - 1);
    Ok(())
}

fn renumber(seeded: &mut [SeededEntry]) {
    for (i, entry) in seeded.iter_mut().enumerate() {
        entry.seed = i as u16 + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::seeded_field;

    fn seeds(list: &[SeededEntry]) -> Vec<u16> {
        list.iter().map(|s| s.seed).collect()
    }

    fn names(list: &[SeededEntry]) -> Vec<String> {
        list.iter().map(|s| s.entry.name.clone()).collect()
    }

    #[test]
    fn reorder_moves_and_renumbers() {
        let mut list = seeded_field(4);
        reorder(&mut list, 3, 0);
        assert_eq!(names(&list), ["Team 4", "Team 1", "Team 2", "Team 3"]);
        assert_eq!(seeds(&list), [1, 2, 3, 4]);
    }

    #[test]
    fn reorder_always_yields_a_contiguous_permutation() {
        let mut list = seeded_field(8);
        reorder(&mut list, 0, 5);
        reorder(&mut list, 7, 2);
        reorder(&mut list, 4, 4);
        let mut observed = seeds(&list);
        observed.sort_unstable();
        assert_eq!(observed, (1..=8).collect::<Vec<u16>>());
    }

    #[test]
    fn reorder_out_of_range_is_a_no_op() {
        let mut list = seeded_field(4);
        let before = list.clone();
        reorder(&mut list, 9, 0);
        reorder(&mut list, 0, 9);
        assert_eq!(list, before);
    }

    #[test]
    fn set_seed_repositions_by_number() {
        let mut list = seeded_field(5);
        set_seed(&mut list, 4, 2).unwrap();
        assert_eq!(names(&list), ["Team 1", "Team 5", "Team 2", "Team 3", "Team 4"]);
        assert_eq!(seeds(&list), [1, 2, 3, 4, 5]);
    }

    #[test]
    fn set_seed_out_of_range_reverts() {
        let mut list = seeded_field(4);
        let before = list.clone();
        assert_eq!(
            set_seed(&mut list, 1, 0),
            Err(BracketError::InvalidSeedAssignment { seed: 0, max: 4 })
        );
        assert_eq!(
            set_seed(&mut list, 1, 5),
            Err(BracketError::InvalidSeedAssignment { seed: 5, max: 4 })
        );
        assert_eq!(list, before, "failed edits leave the list untouched");
    }
}
