use crate::engine::SeededEntry;
use cfb_api::{METRIC_POINT_DIFFERENTIAL, METRIC_WINS, METRIC_WIN_PERCENT, TeamEntry};

/// How a candidate list is ordered before seeds are assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedingMethod {
    /// Existing national rank, ascending; unranked entries sort last.
    #[default]
    Standings,
    PointDifferential,
    Wins,
    WinPercent,
}

impl SeedingMethod {
    pub fn label(&self) -> &'static str {
        match self {
            SeedingMethod::Standings => "Standings",
            SeedingMethod::PointDifferential => "Point Differential",
            SeedingMethod::Wins => "Wins",
            SeedingMethod::WinPercent => "Win %",
        }
    }

    /// Cycle order for the UI.
    pub fn next(self) -> Self {
        match self {
            SeedingMethod::Standings => SeedingMethod::PointDifferential,
            SeedingMethod::PointDifferential => SeedingMethod::Wins,
            SeedingMethod::Wins => SeedingMethod::WinPercent,
            SeedingMethod::WinPercent => SeedingMethod::Standings,
        }
    }
}

/// Rank the candidate entries by `method` and assign seeds 1..=N by the
/// resulting order, discarding prior ranks. Sorting is stable: ties keep
/// first-seen input order. A metric absent on an entry reads as 0.0, so
/// seeding never fails.
pub fn seed(entries: &[TeamEntry], method: SeedingMethod) -> Vec<SeededEntry> {
    let mut ordered: Vec<&TeamEntry> = entries.iter().collect();
    match method {
        SeedingMethod::Standings => {
            ordered.sort_by_key(|t| t.rank.unwrap_or(u16::MAX));
        }
        SeedingMethod::PointDifferential => sort_by_metric_desc(&mut ordered, METRIC_POINT_DIFFERENTIAL),
        SeedingMethod::Wins => sort_by_metric_desc(&mut ordered, METRIC_WINS),
        SeedingMethod::WinPercent => sort_by_metric_desc(&mut ordered, METRIC_WIN_PERCENT),
    }

    ordered
        .into_iter()
        .enumerate()
        .map(|(i, entry)| SeededEntry { seed: i as u16 + 1, entry: entry.clone() })
        .collect()
}

fn sort_by_metric_desc(entries: &mut [&TeamEntry], key: &str) {
    entries.sort_by(|a, b| b.metric(key).total_cmp(&a.metric(key)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn entry(name: &str, rank: Option<u16>, metrics: &[(&str, f64)]) -> TeamEntry {
        TeamEntry {
            rank,
            name: name.to_string(),
            short_name: name.to_string(),
            conference: "Test".to_string(),
            record: "0-0".to_string(),
            metrics: metrics.iter().map(|(k, v)| (k.to_string(), *v)).collect::<HashMap<_, _>>(),
        }
    }

    fn names(seeded: &[SeededEntry]) -> Vec<&str> {
        seeded.iter().map(|s| s.entry.name.as_str()).collect()
    }

    #[test]
    fn standings_sorts_by_rank_ascending_unranked_last() {
        let entries = [
            entry("Mid", Some(10), &[]),
            entry("NoRank", None, &[]),
            entry("Best", Some(1), &[]),
        ];
        let seeded = seed(&entries, SeedingMethod::Standings);
        assert_eq!(names(&seeded), ["Best", "Mid", "NoRank"]);
    }

    #[test]
    fn wins_sorts_descending() {
        let entries = [
            entry("Eight", None, &[(METRIC_WINS, 8.0)]),
            entry("Twelve", None, &[(METRIC_WINS, 12.0)]),
            entry("Ten", None, &[(METRIC_WINS, 10.0)]),
        ];
        let seeded = seed(&entries, SeedingMethod::Wins);
        assert_eq!(names(&seeded), ["Twelve", "Ten", "Eight"]);
    }

    #[test]
    fn ties_keep_first_seen_input_order() {
        let entries = [
            entry("First", None, &[(METRIC_WINS, 9.0)]),
            entry("Second", None, &[(METRIC_WINS, 9.0)]),
            entry("Winner", None, &[(METRIC_WINS, 11.0)]),
        ];
        let seeded = seed(&entries, SeedingMethod::Wins);
        assert_eq!(names(&seeded), ["Winner", "First", "Second"]);
    }

    #[test]
    fn absent_metric_defaults_to_zero() {
        let entries = [
            entry("NoMetric", None, &[]),
            entry("Positive", None, &[(METRIC_POINT_DIFFERENTIAL, 50.0)]),
            entry("Negative", None, &[(METRIC_POINT_DIFFERENTIAL, -30.0)]),
        ];
        let seeded = seed(&entries, SeedingMethod::PointDifferential);
        assert_eq!(names(&seeded), ["Positive", "NoMetric", "Negative"]);
    }

    #[test]
    fn seeds_are_reassigned_one_to_n() {
        let entries = [
            entry("A", Some(14), &[]),
            entry("B", Some(3), &[]),
            entry("C", Some(22), &[]),
        ];
        let seeded = seed(&entries, SeedingMethod::Standings);
        let seeds: Vec<u16> = seeded.iter().map(|s| s.seed).collect();
        assert_eq!(seeds, [1, 2, 3], "prior ranks are discarded");
    }

    #[test]
    fn win_percent_sorts_descending() {
        let entries = [
            entry("Low", None, &[(METRIC_WIN_PERCENT, 0.5)]),
            entry("High", None, &[(METRIC_WIN_PERCENT, 0.92)]),
        ];
        let seeded = seed(&entries, SeedingMethod::WinPercent);
        assert_eq!(names(&seeded), ["High", "Low"]);
    }
}
