use crate::app::{App, MenuItem};
use crate::state::messages::NetworkRequest;
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc};

pub async fn handle_key_bindings(
    key_event: KeyEvent,
    app: &Arc<Mutex<App>>,
    network_requests: &mpsc::Sender<NetworkRequest>,
) {
    let mut guard = app.lock().await;

    if guard.state.show_intro {
        match (key_event.code, key_event.modifiers) {
            (KeyCode::Enter, _) => guard.dismiss_intro(),
            (Char('q'), _) | (Char('c'), KeyModifiers::CONTROL) => {
                crate::cleanup_terminal();
                std::process::exit(0);
            }
            _ => {}
        }
        return;
    }

    // While a seed number is being typed, digits feed the input buffer
    // instead of the global tab-switch bindings.
    if guard.state.active_tab == MenuItem::Seeds
        && guard.state.seeds.editing
        && let Char(c) = key_event.code
        && c.is_ascii_digit()
    {
        guard.state.seeds.push_digit(c);
        return;
    }

    match (guard.state.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Tab switching
        (_, Char('1'), _) => guard.update_tab(MenuItem::Standings),
        (_, Char('2'), _) => guard.update_tab(MenuItem::Bracket),
        (_, Char('3'), _) => guard.update_tab(MenuItem::Seeds),
        (_, Char('?'), _) => guard.update_tab(MenuItem::Help),
        (MenuItem::Help, KeyCode::Esc, _) => guard.exit_help(),

        // Standings browsing
        (MenuItem::Standings, Char('j') | KeyCode::Down, _) => guard.state.standings.cursor_down(),
        (MenuItem::Standings, Char('k') | KeyCode::Up, _) => guard.state.standings.cursor_up(),
        (MenuItem::Standings, Char('c'), _) => guard.state.standings.cycle_conference(),
        (MenuItem::Standings, Char('v'), _) => guard.state.standings.cycle_view_mode(),
        (MenuItem::Standings, Char('m'), _) => guard.state.standings.toggle_manual(),
        (MenuItem::Standings, Char(' '), _) => guard.state.standings.toggle_current_selection(),
        (MenuItem::Standings, Char('t'), _) => guard.state.config.cycle_field_size(),
        (MenuItem::Standings, Char('s'), _) => guard.state.config.cycle_method(),
        (MenuItem::Standings, Char('g') | KeyCode::Enter, _) => guard.generate_bracket(),
        (MenuItem::Standings, Char('R'), _) => {
            drop(guard);
            let _ = network_requests.send(NetworkRequest::LoadStandings).await;
            return;
        }

        // Bracket navigation and winner recording
        (MenuItem::Bracket, Char('l') | KeyCode::Right, _) => {
            guard.state.bracket.navigate_round_next()
        }
        (MenuItem::Bracket, Char('h') | KeyCode::Left, _) => {
            guard.state.bracket.navigate_round_prev()
        }
        (MenuItem::Bracket, Char('j') | KeyCode::Down, _) => {
            guard.state.bracket.navigate_matchup_down()
        }
        (MenuItem::Bracket, Char('k') | KeyCode::Up, _) => {
            guard.state.bracket.navigate_matchup_up()
        }
        (MenuItem::Bracket, Char('t'), _) => guard.record_top_wins(),
        (MenuItem::Bracket, Char('b'), _) => guard.record_bottom_wins(),

        // Seed editing
        (MenuItem::Seeds, Char('j') | KeyCode::Down, _) => guard.state.seeds.cursor_down(),
        (MenuItem::Seeds, Char('k') | KeyCode::Up, _) => guard.state.seeds.cursor_up(),
        (MenuItem::Seeds, Char('K'), _) => guard.state.seeds.shift_up(),
        (MenuItem::Seeds, Char('J'), _) => guard.state.seeds.shift_down(),
        (MenuItem::Seeds, Char('s'), _) => guard.state.seeds.begin_input(),
        (MenuItem::Seeds, KeyCode::Enter, _) => guard.state.seeds.apply_input(),
        (MenuItem::Seeds, KeyCode::Esc, _) => guard.state.seeds.clear_input(),
        (MenuItem::Seeds, Char('g'), _) => guard.regenerate_from_seeds(),

        // Global
        (_, Char('f'), _) => guard.toggle_full_screen(),
        (_, Char('"'), _) => guard.toggle_show_logs(),

        _ => {}
    }
}
