use crate::engine::{Bracket, SeededEntry, Shape, Side, Slot};

impl Bracket {
    /// Record a winner for a matchup and propagate it forward.
    ///
    /// Silent no-op when the id is unknown, the chosen slot is `Pending`
    /// (no winner over an undetermined opponent), or the same winner is
    /// already recorded. Otherwise the winning slot is copied into the feed
    /// slot of the next round, the destination's own decision is reset (a
    /// new participant invalidates it), and every matchup down the feed
    /// chain loses the slot this result fed plus its recorded winner.
    pub fn record_winner(&mut self, matchup_id: &str, side: Side) {
        let Some((r, m)) = self.position_of(matchup_id) else {
            return;
        };

        let matchup = &mut self.rounds[r].matchups[m];
        if matchup.slot(side).is_pending() {
            return;
        }
        if matchup.winner == Some(side) {
            // Already recorded and advanced; nothing downstream changes.
            return;
        }
        matchup.winner = Some(side);
        let winning_slot = matchup.slot(side).clone();

        let Some((dest, dest_side)) = self.feed(r, m) else {
            return; // final round — the champion is decided
        };
        let destination = &mut self.rounds[r + 1].matchups[dest];
        *destination.slot_mut(dest_side) = winning_slot;
        destination.winner = None;
        self.cascade(r + 1, dest);
    }

    /// The slot in the next round fed by this matchup's winner. None for the
    /// final round. Standard shape: matchup m feeds matchup m/2, top slot
    /// when m is even. In the 46-entry shape every round-0 winner lands in
    /// the bottom slot of the same-index round-1 matchup — the top slots
    /// are held by bye seeds.
    fn feed(&self, round: usize, matchup: usize) -> Option<(usize, Side)> {
        if round + 1 >= self.rounds.len() {
            return None;
        }
        if self.shape == Shape::Byes46 && round == 0 {
            return Some((matchup, Side::Bottom));
        }
        let side = if matchup % 2 == 0 { Side::Top } else { Side::Bottom };
        Some((matchup / 2, side))
    }

    /// Directed walk down the feed chain from (round, matchup): each step
    /// reverts the fed slot to `Pending` and clears that matchup's winner.
    /// Matchups off the chain keep their slots and decisions.
    fn cascade(&mut self, mut round: usize, mut matchup: usize) {
        while let Some((next, side)) = self.feed(round, matchup) {
            let target = &mut self.rounds[round + 1].matchups[next];
            *target.slot_mut(side) = Slot::Pending;
            target.winner = None;
            round += 1;
            matchup = next;
        }
    }

    /// The decided winner of the final round's single matchup, if any.
    pub fn champion(&self) -> Option<&SeededEntry> {
        let last = self.rounds.last()?;
        let final_matchup = last.matchups.first()?;
        final_matchup.winning_slot()?.entrant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::builder::build;
    use crate::engine::test_support::seeded_field;
    use crate::engine::{Matchup, matchup_id};

    fn decided_16_bracket() -> Bracket {
        let mut bracket = build(&seeded_field(16), 4).unwrap();
        // Top slot wins everywhere, round by round.
        for r in 0..4 {
            for m in 0..bracket.rounds[r].matchups.len() {
                bracket.record_winner(&matchup_id(r, m), Side::Top);
            }
        }
        bracket
    }

    fn top_seed(matchup: &Matchup) -> Option<u16> {
        matchup.top.entrant().map(|s| s.seed)
    }

    #[test]
    fn winner_advances_to_the_parity_slot() {
        let mut bracket = build(&seeded_field(8), 3).unwrap();
        // Round-0 matchup 0 is 1 vs 8; matchup 1 is 4 vs 5.
        bracket.record_winner("r0-m0", Side::Top);
        bracket.record_winner("r0-m1", Side::Bottom);

        let semifinal = bracket.matchup(1, 0).unwrap();
        assert_eq!(semifinal.top.entrant().unwrap().seed, 1);
        assert_eq!(semifinal.bottom.entrant().unwrap().seed, 5);
    }

    #[test]
    fn recording_over_a_pending_slot_is_a_no_op() {
        let mut bracket = build(&seeded_field(8), 3).unwrap();
        let before = bracket.clone();
        // Nothing has advanced into round 1 yet.
        bracket.record_winner("r1-m0", Side::Top);
        assert_eq!(bracket, before);
    }

    #[test]
    fn unknown_matchup_id_is_a_no_op() {
        let mut bracket = build(&seeded_field(8), 3).unwrap();
        let before = bracket.clone();
        bracket.record_winner("r9-m9", Side::Top);
        assert_eq!(bracket, before);
    }

    #[test]
    fn recording_the_same_winner_twice_converges() {
        let mut once = build(&seeded_field(16), 4).unwrap();
        once.record_winner("r0-m0", Side::Top);

        let mut twice = build(&seeded_field(16), 4).unwrap();
        twice.record_winner("r0-m0", Side::Top);
        twice.record_winner("r0-m0", Side::Top);

        assert_eq!(once, twice);
    }

    #[test]
    fn new_participant_resets_the_destination_decision() {
        let mut bracket = build(&seeded_field(8), 3).unwrap();
        bracket.record_winner("r0-m0", Side::Top);
        bracket.record_winner("r0-m1", Side::Top);
        bracket.record_winner("r1-m0", Side::Top);
        assert!(bracket.matchup(1, 0).unwrap().is_decided());

        // Flipping round-0 matchup 1 sends a new opponent into r1-m0.
        bracket.record_winner("r0-m1", Side::Bottom);
        let semifinal = bracket.matchup(1, 0).unwrap();
        assert_eq!(semifinal.winner, None);
        assert_eq!(semifinal.bottom.entrant().unwrap().seed, 5);
        assert_eq!(semifinal.top.entrant().unwrap().seed, 1, "other side untouched");
    }

    #[test]
    fn cascade_clears_the_chain_and_spares_unrelated_branches() {
        let mut bracket = decided_16_bracket();
        let snapshot = bracket.clone();

        // Change the round-0 winner of matchup 0 (was 1 v 16, top won).
        bracket.record_winner("r0-m0", Side::Bottom);

        // Chain: r1-m0 (fed top slot), r2-m0 (fed top slot), r3-m0 (fed top slot).
        let r1 = bracket.matchup(1, 0).unwrap();
        assert_eq!(r1.top.entrant().unwrap().seed, 16, "new winner moved up");
        assert_eq!(r1.winner, None);

        let r2 = bracket.matchup(2, 0).unwrap();
        assert!(r2.top.is_pending());
        assert_eq!(r2.winner, None);
        assert_eq!(top_seed(bracket.matchup(3, 0).unwrap()), None);
        assert_eq!(bracket.matchup(3, 0).unwrap().winner, None);

        // Off-chain slots keep their entrants and decisions: the bottom half
        // of the bracket (round-0 matchups 4–7 and everything they feed).
        for m in 4..8 {
            assert_eq!(bracket.matchup(0, m), snapshot.matchup(0, m));
        }
        for m in 2..4 {
            assert_eq!(bracket.matchup(1, m), snapshot.matchup(1, m));
        }
        assert_eq!(bracket.matchup(2, 1), snapshot.matchup(2, 1));
        // The final keeps its bottom-half participant even though its winner
        // and top slot were invalidated.
        assert_eq!(
            bracket.matchup(3, 0).unwrap().bottom,
            snapshot.matchup(3, 0).unwrap().bottom
        );
    }

    #[test]
    fn sibling_slot_in_the_destination_survives_the_cascade() {
        let mut bracket = decided_16_bracket();
        bracket.record_winner("r0-m1", Side::Bottom);
        let r1 = bracket.matchup(1, 0).unwrap();
        assert_eq!(r1.top.entrant().unwrap().seed, 1, "sibling feed still valid");
        // Round-0 matchup 1 is 8 v 9; the bottom side is seed 9.
        assert_eq!(r1.bottom.entrant().unwrap().seed, 9);
    }

    #[test]
    fn forty_six_round_zero_winners_land_in_bottom_slots() {
        let mut bracket = build(&seeded_field(46), 6).unwrap();
        // Matchup 3 of round 0 is seed 22 vs seed 43.
        bracket.record_winner("r0-m3", Side::Top);
        let r1 = bracket.matchup(1, 3).unwrap();
        assert_eq!(r1.top.entrant().unwrap().seed, 4, "bye seed keeps the top slot");
        assert_eq!(r1.bottom.entrant().unwrap().seed, 22);
    }

    #[test]
    fn forty_six_cascade_follows_the_bye_feed_rule() {
        let mut bracket = build(&seeded_field(46), 6).unwrap();
        bracket.record_winner("r0-m0", Side::Top); // seed 19 up to r1-m0 bottom
        bracket.record_winner("r1-m0", Side::Bottom); // seed 19 into r2-m0 top

        assert_eq!(top_seed(bracket.matchup(2, 0).unwrap()), Some(19));

        // Flip round 0: seed 46 now advances, and seed 19's run is erased.
        bracket.record_winner("r0-m0", Side::Bottom);
        let r1 = bracket.matchup(1, 0).unwrap();
        assert_eq!(r1.bottom.entrant().unwrap().seed, 46);
        assert_eq!(r1.winner, None);
        assert!(bracket.matchup(2, 0).unwrap().top.is_pending());
    }

    #[test]
    fn champion_is_the_decided_final_winner() {
        let mut bracket = build(&seeded_field(4), 2).unwrap();
        assert!(bracket.champion().is_none());
        bracket.record_winner("r0-m0", Side::Top); // 1 beats 4
        bracket.record_winner("r0-m1", Side::Top); // 2 beats 3
        bracket.record_winner("r1-m0", Side::Bottom);
        assert_eq!(bracket.champion().map(|s| s.seed), Some(2));
    }

    #[test]
    fn deciding_the_final_does_not_advance_further() {
        let mut bracket = decided_16_bracket();
        assert_eq!(bracket.champion().map(|s| s.seed), Some(1));
        assert_eq!(bracket.rounds.len(), 4);
    }
}
