use crate::engine::{self, Side};
use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use cfb_api::StandingsData;
use log::info;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Standings,
    Bracket,
    Seeds,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        let settings = AppSettings::load();

        let app = Self {
            state: AppState::new(),
            settings,
        };

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    // -----------------------------------------------------------------------
    // Network response handlers — called from main_ui_loop
    // -----------------------------------------------------------------------

    pub fn on_standings_loaded(&mut self, standings: StandingsData) {
        self.state.last_error = None;
        info!(
            "standings loaded: {} conferences",
            standings.conferences.len()
        );
        self.state.standings.load(standings);
    }

    pub fn on_error(&mut self, message: String) {
        self.state.last_error = Some(message);
    }

    // -----------------------------------------------------------------------
    // Bracket generation
    // -----------------------------------------------------------------------

    /// Seed the candidate pool with the configured method and build a fresh
    /// bracket. On success the seed list is replaced and the view jumps to
    /// the Bracket tab; on failure the error is surfaced in the status line.
    pub fn generate_bracket(&mut self) {
        let pool = self.state.standings.candidate_pool(self.state.config.field_size);
        if pool.is_empty() {
            self.state.last_error = Some("No teams to seed. Load standings first.".to_string());
            return;
        }

        let seeded = engine::seed(&pool, self.state.config.method);
        let rounds = engine::required_rounds(seeded.len());
        match engine::build(&seeded, rounds) {
            Ok(bracket) => {
                info!(
                    "generated {}-team bracket via {}",
                    seeded.len(),
                    self.state.config.method.label()
                );
                self.state.seeds.load(seeded);
                self.state.bracket.load(bracket);
                self.state.last_error = None;
                self.update_tab(MenuItem::Bracket);
            }
            Err(e) => self.state.last_error = Some(e.to_string()),
        }
    }

    /// Rebuild the bracket from the seed list as it stands, preserving any
    /// manual reordering. Recorded winners are discarded.
    pub fn regenerate_from_seeds(&mut self) {
        if self.state.seeds.seeded.is_empty() {
            self.state.last_error = Some("No seed list yet. Generate a bracket first.".to_string());
            return;
        }
        let rounds = engine::required_rounds(self.state.seeds.seeded.len());
        match engine::build(&self.state.seeds.seeded, rounds) {
            Ok(bracket) => {
                self.state.bracket.load(bracket);
                self.state.last_error = None;
                self.update_tab(MenuItem::Bracket);
            }
            Err(e) => self.state.last_error = Some(e.to_string()),
        }
    }

    // -----------------------------------------------------------------------
    // Winner recording
    // -----------------------------------------------------------------------

    pub fn record_top_wins(&mut self) {
        self.record_winner(Side::Top);
    }

    pub fn record_bottom_wins(&mut self) {
        self.record_winner(Side::Bottom);
    }

    fn record_winner(&mut self, side: Side) {
        let Some(id) = self.state.bracket.selected_matchup_id() else {
            return;
        };
        if let Some(bracket) = &mut self.state.bracket.bracket {
            bracket.record_winner(&id, side);
        }
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
        if self.state.active_tab == MenuItem::Seeds {
            self.state.seeds.clear_input();
        }
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    pub fn dismiss_intro(&mut self) {
        self.state.show_intro = false;
    }

    // -----------------------------------------------------------------------
    // Animation tick — called every 80ms from AnimationTick event
    // -----------------------------------------------------------------------

    pub fn advance_animation(&mut self, frame_count: usize) {
        self.state.animation.advance(frame_count);
    }
}
