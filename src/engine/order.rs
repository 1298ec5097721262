use crate::engine::error::BracketError;

/// Canonical bracket slot order for a power-of-two field.
///
/// Returns a permutation of `1..=size`; consecutive pairs give the round-0
/// matchups, so `order[0]` plays `order[1]`, `order[2]` plays `order[3]`,
/// and so on. Seeds 1 and 2 land in opposite halves and cannot meet before
/// the final.
///
/// Generative mirror rule: starting from `[1, 2]`, each doubling step to
/// size `2^(k+1)` inserts after every seed `s` its mirror `offset - s`,
/// where `offset = 2^(k+1) + 1`. Sibling adjacency is preserved, which is
/// what makes consecutive pairs the matchup list.
pub fn seeding_order(size: usize) -> Result<Vec<u16>, BracketError> {
    if size < 2 || !size.is_power_of_two() || size > u16::MAX as usize {
        return Err(BracketError::InvalidSize(size));
    }

    let mut order: Vec<u16> = vec![1, 2];
    while order.len() < size {
        let doubled = order.len() * 2;
        let offset = doubled as u16 + 1;
        let mut grown = Vec::with_capacity(doubled);
        for seed in order {
            grown.push(seed);
            grown.push(offset - seed);
        }
        order = grown;
    }
    Ok(order)
}
