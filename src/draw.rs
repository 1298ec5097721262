use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::components::banner::AnimatedBanner;
use crate::components::banner_frames::BannerTheme;
use crate::components::bracket::{BracketGrid, BracketView};
use crate::state::network::{ERROR_CHAR, LoadingState};
use crate::ui::layout::LayoutAreas;

static TABS: &[&str; 3] = &["Standings", "Bracket", "Seeds"];

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App, loading: LoadingState)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    terminal
        .draw(|f| {
            if app.state.show_intro {
                draw_intro(f, f.area(), app);
                return;
            }

            layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

            if !app.settings.full_screen {
                draw_tabs(f, layout.tab_bar, app);
            }

            match app.state.active_tab {
                MenuItem::Standings => draw_standings(f, layout.main, app),
                MenuItem::Bracket => draw_bracket(f, layout.main, app),
                MenuItem::Seeds => draw_seeds(f, layout.main, app),
                MenuItem::Help => draw_help(f, layout.main),
            }

            if let Some(logs) = layout.logs {
                draw_logs(f, logs);
            }

            draw_loading_spinner(f, f.area(), app, loading);
        })
        .unwrap();
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_intro(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::DarkGray).title(" cfbracket ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [_top_pad, banner_area, prompt_area, _bottom_pad] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(8),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);
    f.render_widget(
        AnimatedBanner {
            frame: app.state.animation.frame,
            tick: app.state.animation.tick,
            theme: BannerTheme::Dark,
            field_size: app.state.config.field_size,
            method_label: app.state.config.method.label(),
        },
        banner_area,
    );
    f.render_widget(
        Paragraph::new("Press Enter to browse standings")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        prompt_area,
    );
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = match app.state.active_tab {
        MenuItem::Standings => 0,
        MenuItem::Bracket => 1,
        MenuItem::Seeds => 2,
        MenuItem::Help => 0,
    };

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

fn draw_standings(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Standings ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let standings = &app.state.standings;
    if standings.data.is_none() {
        let msg = if let Some(err) = app.state.last_error.as_deref() {
            format!("Standings load failed:\n{err}\n\nPress R to retry")
        } else {
            "Loading standings...".to_string()
        };
        f.render_widget(
            Paragraph::new(msg)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let [header, config_line, key_legend, list_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let source = match standings.view_mode {
        crate::state::app_state::ViewMode::Conference => standings
            .data
            .as_ref()
            .and_then(|d| d.conferences.get(standings.selected_conference))
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Conference".to_string()),
        other => other.label().to_string(),
    };
    f.render_widget(
        Paragraph::new(format!("{}  |  {}", standings.view_mode.label(), source)),
        header,
    );

    let manual = if standings.manual_selection {
        format!("manual ({} picked)", standings.selected_teams.len())
    } else {
        "top of view".to_string()
    };
    f.render_widget(
        Paragraph::new(format!(
            "Field: {}  |  Seed by: {}  |  Pool: {}",
            app.state.config.field_size,
            app.state.config.method.label(),
            manual
        ))
        .style(Style::default().fg(Color::Yellow)),
        config_line,
    );
    f.render_widget(
        Paragraph::new(
            "Keys: j/k=move  c=conference  v=view  m=manual  space=pick  t=size  s=method  g=generate  R=reload",
        )
        .style(Style::default().fg(Color::DarkGray)),
        key_legend,
    );

    let entries = standings.visible_entries();
    if entries.is_empty() {
        f.render_widget(
            Paragraph::new("No teams in this view")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            list_area,
        );
        return;
    }

    // Sliding window keeps the cursor visible on short terminals.
    let visible = list_area.height as usize;
    let start = standings
        .cursor
        .saturating_sub(visible.saturating_sub(1));
    let mut lines = Vec::with_capacity(visible);
    for (idx, team) in entries.iter().enumerate().skip(start).take(visible.max(1)) {
        let cursor = if idx == standings.cursor { '>' } else { ' ' };
        let picked = if standings.manual_selection {
            if standings.is_selected(team) { '*' } else { ' ' }
        } else if idx < app.state.config.field_size {
            '+'
        } else {
            ' '
        };
        let rank = team
            .rank
            .map(|r| format!("#{r:<3}"))
            .unwrap_or_else(|| "    ".to_string());
        let style = if idx == standings.cursor {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(
            format!("{cursor}{picked} {rank} {:<24} {:>7}", team.name, team.record),
            style,
        )));
    }
    f.render_widget(Paragraph::new(lines), list_area);
}

fn draw_bracket(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Bracket ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(bracket) = app.state.bracket.bracket.as_ref() else {
        let msg = if let Some(err) = app.state.last_error.as_deref() {
            format!("Bracket error:\n{err}")
        } else {
            "No bracket yet. Press g on the Standings tab.".to_string()
        };
        f.render_widget(
            Paragraph::new(msg)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    };

    let [header, key_legend, content, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let view = &app.state.bracket;
    let round_label = bracket
        .rounds
        .get(view.selected_round)
        .map(|r| r.label.as_str())
        .unwrap_or("");
    f.render_widget(
        Paragraph::new(format!(
            "{}  |  matchup {}/{}",
            round_label,
            view.selected_matchup + 1,
            bracket
                .rounds
                .get(view.selected_round)
                .map(|r| r.matchups.len())
                .unwrap_or(0)
        )),
        header,
    );
    f.render_widget(
        Paragraph::new("Keys: h/l=round  j/k=matchup  t=top wins  b=bottom wins  3=edit seeds")
            .style(Style::default().fg(Color::DarkGray)),
        key_legend,
    );

    let grid = BracketGrid::compute(bracket, content.width);

    // Scroll so the selected matchup stays centered.
    let selected_center = grid
        .cells
        .iter()
        .find(|c| c.round == view.selected_round && c.matchup_idx == view.selected_matchup)
        .map(|c| c.center_row)
        .unwrap_or(0);
    let scroll = if grid.total_height > content.height {
        selected_center
            .saturating_sub(content.height / 2)
            .min(grid.total_height.saturating_sub(content.height))
    } else {
        0
    };

    f.render_widget(
        BracketView {
            bracket,
            grid: &grid,
            selected_round: view.selected_round,
            selected_matchup: view.selected_matchup,
            scroll_offset: scroll,
            theme: BannerTheme::Dark,
        },
        content,
    );

    let footer_text = match bracket.champion() {
        Some(champ) => format!("Champion: ({}) {}", champ.seed, champ.entry.name),
        None => match app.state.last_error.as_deref() {
            Some(err) => err.to_string(),
            None => String::new(),
        },
    };
    f.render_widget(
        Paragraph::new(footer_text).style(Style::default().fg(Color::Green)),
        footer,
    );
}

fn draw_seeds(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Seeds ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let seeds = &app.state.seeds;
    if seeds.seeded.is_empty() {
        f.render_widget(
            Paragraph::new("No seed list. Generate a bracket from the Standings tab first.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let [key_legend, status, list_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(inner);

    f.render_widget(
        Paragraph::new("Keys: j/k=move  J/K=shift entry  s=type seed  Enter=apply  Esc=cancel  g=rebuild")
            .style(Style::default().fg(Color::DarkGray)),
        key_legend,
    );

    let status_text = if seeds.editing {
        format!("New seed for cursor entry: {}_", seeds.input)
    } else if let Some(err) = seeds.last_error.as_deref() {
        err.to_string()
    } else {
        String::new()
    };
    let status_style = if seeds.last_error.is_some() && !seeds.editing {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Yellow)
    };
    f.render_widget(Paragraph::new(status_text).style(status_style), status);

    let visible = list_area.height as usize;
    let start = seeds.cursor.saturating_sub(visible.saturating_sub(1));
    let mut lines = Vec::with_capacity(visible);
    for (idx, entry) in seeds.seeded.iter().enumerate().skip(start).take(visible.max(1)) {
        let cursor = if idx == seeds.cursor { '>' } else { ' ' };
        let style = if idx == seeds.cursor {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{cursor} {:>2}  {:<24} {:>7}",
                entry.seed, entry.entry.name, entry.entry.record
            ),
            style,
        )));
    }
    f.render_widget(Paragraph::new(lines), list_area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let block = default_border(Color::DarkGray).title(" Help ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let text = "\
Global:     q=quit  1=Standings  2=Bracket  3=Seeds  ?=help  \"=logs  f=full screen
Standings:  j/k=move  c=conference  v=view mode  m=manual pool  space=pick team
            t=field size  s=seeding method  g=generate bracket  R=reload standings
Bracket:    h/l=round  j/k=matchup  t=top wins  b=bottom wins
Seeds:      j/k=move  J/K=shift entry  s=type seed number  Enter=apply  Esc=cancel
            g=rebuild bracket from edited seeds

Esc closes this screen.";
    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::Gray)),
        inner,
    );
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let widget = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style_error(Style::default().fg(Color::Red))
        .style_warn(Style::default().fg(Color::Yellow))
        .style_info(Style::default().fg(Color::Gray))
        .style_debug(Style::default().fg(Color::DarkGray));
    f.render_widget(widget, area);
}

fn draw_loading_spinner(f: &mut Frame, area: Rect, app: &App, loading: LoadingState) {
    if !loading.is_loading && loading.spinner_char != ERROR_CHAR {
        return;
    }
    let style = match loading.spinner_char {
        ERROR_CHAR => Style::default().fg(Color::Red),
        _ => Style::default().fg(Color::White),
    };
    let spinner = Paragraph::new(loading.spinner_char.to_string())
        .alignment(Alignment::Right)
        .style(style);
    let area = if app.settings.full_screen {
        Rect::new(area.width.saturating_sub(3), area.height.saturating_sub(2), 1, 1)
    } else {
        Rect::new(area.width.saturating_sub(11), 1, 1, 1)
    };
    f.render_widget(spinner, area);
}
