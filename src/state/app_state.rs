use crate::app::MenuItem;
use crate::engine::{self, Bracket, SeededEntry, SeedingMethod};
use cfb_api::{StandingsData, TeamEntry};

// ---------------------------------------------------------------------------
// Banner animation state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct AnimationState {
    /// Current frame index into the banner frames array, wraps at FRAME_COUNT.
    pub frame: usize,
    /// Monotonic tick counter — drives color cycling and the triangle-wave offset.
    pub tick: u64,
}

impl AnimationState {
    pub fn advance(&mut self, frame_count: usize) {
        self.tick = self.tick.wrapping_add(1);
        self.frame = (self.frame + 1) % frame_count;
    }
}

// ---------------------------------------------------------------------------
// Standings browser state
// ---------------------------------------------------------------------------

/// Which slice of the standings feeds the bracket field.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum ViewMode {
    /// All teams of a single conference, in conference-seed order.
    #[default]
    Conference,
    /// The national Top 25 by rank.
    Top25,
    /// Top two of every conference, conference-championship style.
    TopTwo,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Conference => "Conference",
            ViewMode::Top25 => "Top 25",
            ViewMode::TopTwo => "Conf Top 2",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ViewMode::Conference => ViewMode::Top25,
            ViewMode::Top25 => ViewMode::TopTwo,
            ViewMode::TopTwo => ViewMode::Conference,
        }
    }
}

#[derive(Debug, Default)]
pub struct StandingsState {
    pub data: Option<StandingsData>,
    pub view_mode: ViewMode,
    /// Index into data.conferences. Only meaningful in Conference mode.
    pub selected_conference: usize,
    pub cursor: usize,
    pub scroll_offset: u16,
    /// When set, the bracket field is picked by hand instead of taking the
    /// top N of the current view.
    pub manual_selection: bool,
    pub selected_teams: Vec<TeamEntry>,
}

impl StandingsState {
    pub fn load(&mut self, data: StandingsData) {
        self.selected_conference = 0;
        self.cursor = 0;
        self.scroll_offset = 0;
        self.data = Some(data);
    }

    /// The teams currently listed, per view mode.
    pub fn visible_entries(&self) -> Vec<TeamEntry> {
        let Some(data) = &self.data else {
            return Vec::new();
        };
        match self.view_mode {
            ViewMode::Conference => data
                .conferences
                .get(self.selected_conference)
                .map(|c| c.entries_by_seed())
                .unwrap_or_default(),
            ViewMode::Top25 => data.top_25(),
            ViewMode::TopTwo => data.top_two_per_conference(),
        }
    }

    pub fn cycle_conference(&mut self) {
        let Some(data) = &self.data else { return };
        if data.conferences.is_empty() {
            return;
        }
        self.selected_conference = (self.selected_conference + 1) % data.conferences.len();
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn cycle_view_mode(&mut self) {
        self.view_mode = self.view_mode.next();
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    pub fn cursor_down(&mut self) {
        let max = self.visible_entries().len().saturating_sub(1);
        if self.cursor < max {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn toggle_manual(&mut self) {
        self.manual_selection = !self.manual_selection;
        if !self.manual_selection {
            self.selected_teams.clear();
        }
    }

    /// Select or deselect the team under the cursor. Teams are deduplicated
    /// by name since the same team can appear in multiple views.
    pub fn toggle_current_selection(&mut self) {
        if !self.manual_selection {
            return;
        }
        let entries = self.visible_entries();
        let Some(team) = entries.get(self.cursor) else {
            return;
        };
        if let Some(pos) = self.selected_teams.iter().position(|t| t.name == team.name) {
            self.selected_teams.remove(pos);
        } else {
            self.selected_teams.push(team.clone());
        }
    }

    pub fn is_selected(&self, team: &TeamEntry) -> bool {
        self.selected_teams.iter().any(|t| t.name == team.name)
    }

    /// The pool of teams the bracket will be generated from.
    pub fn candidate_pool(&self, field_size: usize) -> Vec<TeamEntry> {
        if self.manual_selection {
            self.selected_teams.clone()
        } else {
            let mut entries = self.visible_entries();
            entries.truncate(field_size);
            entries
        }
    }
}

// ---------------------------------------------------------------------------
// Bracket generation config
// ---------------------------------------------------------------------------

/// Field sizes the builder supports. 46 is the playoff-expansion format
/// with first-round byes for seeds 1-18.
pub const FIELD_SIZES: [usize; 6] = [4, 8, 16, 32, 46, 64];

#[derive(Debug)]
pub struct GenerateConfig {
    pub field_size: usize,
    pub method: SeedingMethod,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self { field_size: 16, method: SeedingMethod::default() }
    }
}

impl GenerateConfig {
    pub fn cycle_field_size(&mut self) {
        let idx = FIELD_SIZES
            .iter()
            .position(|&s| s == self.field_size)
            .unwrap_or(0);
        self.field_size = FIELD_SIZES[(idx + 1) % FIELD_SIZES.len()];
    }

    pub fn cycle_method(&mut self) {
        self.method = self.method.next();
    }
}

// ---------------------------------------------------------------------------
// Seed editor state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct SeedsState {
    pub seeded: Vec<SeededEntry>,
    pub cursor: usize,
    /// True while the user is typing a seed number for the cursor entry.
    pub editing: bool,
    /// Digits typed so far for a direct seed assignment.
    pub input: String,
    pub last_error: Option<String>,
    pub scroll_offset: u16,
}

impl SeedsState {
    pub fn load(&mut self, seeded: Vec<SeededEntry>) {
        self.seeded = seeded;
        self.cursor = 0;
        self.input.clear();
        self.last_error = None;
        self.scroll_offset = 0;
    }

    pub fn cursor_down(&mut self) {
        let max = self.seeded.len().saturating_sub(1);
        if self.cursor < max {
            self.cursor += 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the entry under the cursor one slot toward seed 1.
    pub fn shift_up(&mut self) {
        if self.cursor > 0 {
            engine::editor::reorder(&mut self.seeded, self.cursor, self.cursor - 1);
            self.cursor -= 1;
        }
    }

    /// Move the entry under the cursor one slot away from seed 1.
    pub fn shift_down(&mut self) {
        if self.cursor + 1 < self.seeded.len() {
            engine::editor::reorder(&mut self.seeded, self.cursor, self.cursor + 1);
            self.cursor += 1;
        }
    }

    pub fn begin_input(&mut self) {
        self.editing = true;
        self.input.clear();
        self.last_error = None;
    }

    pub fn push_digit(&mut self, digit: char) {
        // Three digits covers the largest field.
        if self.editing && self.input.len() < 3 {
            self.input.push(digit);
        }
    }

    pub fn clear_input(&mut self) {
        self.editing = false;
        self.input.clear();
        self.last_error = None;
    }

    /// Apply the typed seed number to the entry under the cursor.
    pub fn apply_input(&mut self) {
        self.editing = false;
        let Ok(new_seed) = self.input.parse::<u16>() else {
            self.input.clear();
            return;
        };
        match engine::editor::set_seed(&mut self.seeded, self.cursor, new_seed) {
            Ok(()) => {
                self.cursor = (new_seed as usize - 1).min(self.seeded.len().saturating_sub(1));
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }
        self.input.clear();
    }
}

// ---------------------------------------------------------------------------
// Bracket view state
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct BracketViewState {
    pub bracket: Option<Bracket>,
    pub selected_round: usize,
    pub selected_matchup: usize,
    pub scroll_offset: u16,
}

impl BracketViewState {
    pub fn load(&mut self, bracket: Bracket) {
        self.selected_round = 0;
        self.selected_matchup = 0;
        self.scroll_offset = 0;
        self.bracket = Some(bracket);
    }

    pub fn navigate_round_next(&mut self) {
        let Some(bracket) = &self.bracket else { return };
        if self.selected_round + 1 < bracket.rounds.len() {
            self.selected_round += 1;
            self.clamp_matchup();
        }
    }

    pub fn navigate_round_prev(&mut self) {
        if self.selected_round > 0 {
            self.selected_round -= 1;
            self.clamp_matchup();
        }
    }

    pub fn navigate_matchup_down(&mut self) {
        let max = self.matchups_in_round().saturating_sub(1);
        if self.selected_matchup < max {
            self.selected_matchup += 1;
        }
    }

    pub fn navigate_matchup_up(&mut self) {
        self.selected_matchup = self.selected_matchup.saturating_sub(1);
    }

    pub fn selected_matchup_id(&self) -> Option<String> {
        let bracket = self.bracket.as_ref()?;
        bracket
            .rounds
            .get(self.selected_round)?
            .matchups
            .get(self.selected_matchup)
            .map(|m| m.id.clone())
    }

    fn matchups_in_round(&self) -> usize {
        self.bracket
            .as_ref()
            .and_then(|b| b.rounds.get(self.selected_round))
            .map(|r| r.matchups.len())
            .unwrap_or(0)
    }

    fn clamp_matchup(&mut self) {
        let max = self.matchups_in_round().saturating_sub(1);
        self.selected_matchup = self.selected_matchup.min(max);
    }
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_intro: bool,
    pub show_logs: bool,
    pub last_error: Option<String>,
    pub standings: StandingsState,
    pub config: GenerateConfig,
    pub seeds: SeedsState,
    pub bracket: BracketViewState,
    pub animation: AnimationState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            show_intro: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfb_api::{Conference, Division};

    fn team(name: &str, rank: Option<u16>) -> TeamEntry {
        TeamEntry {
            rank,
            name: name.to_string(),
            short_name: name.to_string(),
            conference: "Test".to_string(),
            record: "0-0".to_string(),
            metrics: Default::default(),
        }
    }

    fn sample_standings() -> StandingsData {
        StandingsData {
            conferences: vec![Conference {
                id: "1".to_string(),
                name: "Test Conference".to_string(),
                abbreviation: "TC".to_string(),
                division: Division::Fbs,
                teams: vec![
                    team("Alpha", Some(1)),
                    team("Bravo", Some(2)),
                    team("Charlie", Some(3)),
                    team("Delta", None),
                ],
            }],
        }
    }

    #[test]
    fn candidate_pool_truncates_to_field_size() {
        let mut state = StandingsState::default();
        state.load(sample_standings());
        let pool = state.candidate_pool(2);
        assert_eq!(pool.len(), 2);
        assert_eq!(pool[0].name, "Alpha");
    }

    #[test]
    fn manual_selection_overrides_the_view() {
        let mut state = StandingsState::default();
        state.load(sample_standings());
        state.toggle_manual();
        state.cursor = 2;
        state.toggle_current_selection();
        let pool = state.candidate_pool(4);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].name, "Charlie");
    }

    #[test]
    fn toggling_a_selected_team_deselects_it() {
        let mut state = StandingsState::default();
        state.load(sample_standings());
        state.toggle_manual();
        state.toggle_current_selection();
        assert_eq!(state.selected_teams.len(), 1);
        state.toggle_current_selection();
        assert!(state.selected_teams.is_empty());
    }

    #[test]
    fn leaving_manual_mode_clears_selections() {
        let mut state = StandingsState::default();
        state.load(sample_standings());
        state.toggle_manual();
        state.toggle_current_selection();
        state.toggle_manual();
        assert!(state.selected_teams.is_empty());
        assert!(!state.manual_selection);
    }

    #[test]
    fn field_size_cycles_through_supported_sizes() {
        let mut config = GenerateConfig::default();
        assert_eq!(config.field_size, 16);
        config.cycle_field_size();
        assert_eq!(config.field_size, 32);
        config.cycle_field_size();
        assert_eq!(config.field_size, 46);
    }

    #[test]
    fn seed_input_applies_and_reports_errors() {
        let mut seeds = SeedsState::default();
        seeds.load(crate::engine::test_support::seeded_field(4));
        seeds.cursor = 3;
        seeds.input = "1".to_string();
        seeds.apply_input();
        assert_eq!(seeds.seeded[0].entry.name, "Team 4");
        assert_eq!(seeds.cursor, 0);
        assert!(seeds.last_error.is_none());

        seeds.input = "9".to_string();
        seeds.apply_input();
        assert!(seeds.last_error.is_some());
    }
}
