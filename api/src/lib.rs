pub mod client;
pub mod espn;

use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of ESPN wire format
// ---------------------------------------------------------------------------

/// Metric keys the engine and UI read from `TeamEntry::metrics`.
pub const METRIC_POINT_DIFFERENTIAL: &str = "pointDifferential";
pub const METRIC_WINS: &str = "wins";
pub const METRIC_LOSSES: &str = "losses";
pub const METRIC_WIN_PERCENT: &str = "winPercent";
pub const METRIC_PLAYOFF_SEED: &str = "playoffSeed";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Division {
    #[default]
    Fbs,
    Fcs,
}

impl Division {
    pub fn label(&self) -> &'static str {
        match self {
            Division::Fbs => "FBS",
            Division::Fcs => "FCS",
        }
    }
}

/// One team's line in the standings. Immutable once mapped from the wire;
/// downstream code reads `rank` and `metrics`, nothing writes back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamEntry {
    /// National rank, when the team carries one. None = unranked.
    pub rank: Option<u16>,
    pub name: String,
    pub short_name: String,
    pub conference: String,
    /// Overall record display string, e.g. "11-2".
    pub record: String,
    pub metrics: HashMap<String, f64>,
}

impl TeamEntry {
    /// Read a metric, defaulting to 0.0 when absent. Never fails.
    pub fn metric(&self, key: &str) -> f64 {
        self.metrics.get(key).copied().unwrap_or(0.0)
    }

    /// Conference placement: playoffSeed when positive, else u16::MAX
    /// so unseeded teams sort last.
    pub fn conference_seed(&self) -> u16 {
        let seed = self.metric(METRIC_PLAYOFF_SEED);
        if seed > 0.0 { seed as u16 } else { u16::MAX }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Conference {
    pub id: String,
    pub name: String,
    pub abbreviation: String,
    pub division: Division,
    /// Entries in wire order; use `entries_by_seed` for standings order.
    pub teams: Vec<TeamEntry>,
}

impl Conference {
    /// Teams ordered by conference playoff seed, wire order breaking ties.
    pub fn entries_by_seed(&self) -> Vec<TeamEntry> {
        let mut entries = self.teams.clone();
        entries.sort_by_key(|t| t.conference_seed());
        entries
    }
}

/// Everything one standings fetch yields: FBS first, then FCS.
#[derive(Debug, Clone, Default)]
pub struct StandingsData {
    pub conferences: Vec<Conference>,
}

impl StandingsData {
    /// All nationally ranked teams across both divisions, best rank first.
    pub fn all_ranked(&self) -> Vec<TeamEntry> {
        let mut teams: Vec<TeamEntry> = self
            .conferences
            .iter()
            .flat_map(|c| c.teams.iter())
            .filter(|t| t.rank.is_some())
            .cloned()
            .collect();
        teams.sort_by_key(|t| t.rank.unwrap_or(u16::MAX));
        teams
    }

    /// Top 25 slice of `all_ranked`.
    pub fn top_25(&self) -> Vec<TeamEntry> {
        let mut teams = self.all_ranked();
        teams.truncate(25);
        teams
    }

    /// The two best-seeded teams from every conference, conference order.
    pub fn top_two_per_conference(&self) -> Vec<TeamEntry> {
        let mut out = Vec::new();
        for conference in &self.conferences {
            let mut entries = conference.entries_by_seed();
            entries.truncate(2);
            out.extend(entries);
        }
        out
    }

    pub fn conference(&self, id: &str) -> Option<&Conference> {
        self.conferences.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, rank: Option<u16>, playoff_seed: f64) -> TeamEntry {
        TeamEntry {
            rank,
            name: name.to_string(),
            short_name: name.to_string(),
            conference: "Test".to_string(),
            record: "0-0".to_string(),
            metrics: HashMap::from([(METRIC_PLAYOFF_SEED.to_string(), playoff_seed)]),
        }
    }

    #[test]
    fn missing_metric_reads_as_zero() {
        let t = entry("A", None, 1.0);
        assert_eq!(t.metric(METRIC_WINS), 0.0);
        assert_eq!(t.metric(METRIC_PLAYOFF_SEED), 1.0);
    }

    #[test]
    fn all_ranked_sorts_by_national_rank() {
        let data = StandingsData {
            conferences: vec![Conference {
                id: "c".into(),
                name: "C".into(),
                abbreviation: "C".into(),
                division: Division::Fbs,
                teams: vec![entry("B", Some(7), 2.0), entry("A", Some(3), 1.0), entry("U", None, 3.0)],
            }],
        };
        let ranked = data.all_ranked();
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "A");
        assert_eq!(ranked[1].name, "B");
    }

    #[test]
    fn top_two_respects_playoff_seed_not_wire_order() {
        let data = StandingsData {
            conferences: vec![Conference {
                id: "c".into(),
                name: "C".into(),
                abbreviation: "C".into(),
                division: Division::Fbs,
                teams: vec![
                    entry("Third", None, 3.0),
                    entry("First", None, 1.0),
                    entry("Second", None, 2.0),
                ],
            }],
        };
        let top2 = data.top_two_per_conference();
        assert_eq!(top2.len(), 2);
        assert_eq!(top2[0].name, "First");
        assert_eq!(top2[1].name, "Second");
    }

    #[test]
    fn unseeded_teams_sort_after_seeded() {
        let conference = Conference {
            teams: vec![entry("NoSeed", None, 0.0), entry("Seeded", None, 1.0)],
            ..Default::default()
        };
        let ordered = conference.entries_by_seed();
        assert_eq!(ordered[0].name, "Seeded");
        assert_eq!(ordered[1].name, "NoSeed");
    }
}
