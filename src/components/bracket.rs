use crate::engine::{Bracket, Matchup, Shape, Side, Slot};
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::{Color, Modifier, Style};
use tui::widgets::Widget;

use crate::components::banner_frames::{BannerColor, BannerTheme, resolve};

// ---------------------------------------------------------------------------
// Layout constants
// ---------------------------------------------------------------------------

/// Rows per matchup cell: top-slot line, status line, bottom-slot line.
pub const GAME_HEIGHT: u16 = 3;

/// Width of the connector zone drawn between adjacent round columns.
pub const CONNECTOR_WIDTH: u16 = 3;

/// Maximum matchup cell width in wider terminals.
const CELL_W_FULL: u16 = 22;

/// Slot height at tree depth `d` (d=0 = leaf round).
/// sh(0) = GAME_HEIGHT; sh(d) = 2 * sh(d-1) + 1.
fn sh(d: usize) -> u16 {
    let mut h = GAME_HEIGHT;
    for _ in 0..d {
        h = 2 * h + 1;
    }
    h
}

/// Center row of cell `i` at tree depth `d`:
///   center[d][i] = sh(d)/2 + i * (sh(d) + 1)
fn tree_center(d: usize, i: usize) -> u16 {
    sh(d) / 2 + i as u16 * (sh(d) + 1)
}

// ---------------------------------------------------------------------------
// MatchupCell — pre-computed position for one matchup
// ---------------------------------------------------------------------------

/// Pre-computed layout position for one matchup within the bracket grid.
#[derive(Debug, Clone)]
pub struct MatchupCell {
    /// Row index of the status line (center of the 3-row cell).
    /// Relative to the bracket origin (0 = top row). Not scroll-adjusted.
    pub center_row: u16,
    /// Starting x-column for this cell within the grid (origin-relative).
    pub col: u16,
    /// Width of the cell in terminal columns.
    pub cell_width: u16,
    /// Round index this cell belongs to.
    pub round: usize,
    /// Index of this matchup within the round (0-based).
    pub matchup_idx: usize,
}

// ---------------------------------------------------------------------------
// BracketGrid — layout engine
// ---------------------------------------------------------------------------

/// Pre-computed layout for a full bracket of any supported shape.
///
/// Column order left → right: round 0 | conn | round 1 | conn | ... | final.
/// For the 46-entry shape, rounds 1.. form a regular 16-leaf tree and the
/// play-in round occupies an extra leading column whose cells sit next to
/// the round-1 slot they feed.
#[derive(Debug, Clone)]
pub struct BracketGrid {
    /// All cells in round-major order.
    pub cells: Vec<MatchupCell>,
    /// Index into `cells` where each round's cells begin (plus a final sentinel).
    round_offsets: Vec<usize>,
    /// Starting x-column for each round column.
    pub round_cols: Vec<u16>,
    /// Total grid width in terminal columns.
    pub total_width: u16,
    /// Total grid height in terminal rows.
    pub total_height: u16,
    /// Cell width used (chosen by terminal_width at compute time).
    pub cell_width: u16,
    pub shape: Shape,
}

impl BracketGrid {
    /// Compute the layout for the given bracket and terminal width.
    ///
    /// Each column is `cell_width` wide with CONNECTOR_WIDTH between columns:
    /// `cols * cell_width + (cols - 1) * CONNECTOR_WIDTH <= terminal_width`
    /// when the terminal allows; otherwise cells shrink to fit.
    ///
    /// Center rows for a 16-entry bracket:
    ///   round 0: [1, 5, 9, 13, 17, 21, 25, 29]  (spacing 4)
    ///   round 1: [3, 11, 19, 27]                (spacing 8)
    ///   round 2: [7, 23]                        (spacing 16)
    ///   round 3: [15]
    pub fn compute(bracket: &Bracket, terminal_width: u16) -> Self {
        let cols = bracket.rounds.len() as u16;
        let connector_total = CONNECTOR_WIDTH * cols.saturating_sub(1);
        let per_col = terminal_width.saturating_sub(connector_total) / cols.max(1);
        let cell_width: u16 = per_col.max(8).min(CELL_W_FULL);
        let stride = cell_width + CONNECTOR_WIDTH;

        let round_cols: Vec<u16> = (0..cols).map(|c| c * stride).collect();
        let total_width = stride * cols.saturating_sub(1) + cell_width;

        // Tree depth of a round column. For the bye shape the play-in round
        // sits outside the tree; rounds 1.. map to depths 0..
        let tree_depth = |round: usize| match bracket.shape {
            Shape::Byes46 => round.saturating_sub(1),
            Shape::Standard => round,
        };

        let mut cells = Vec::new();
        let mut round_offsets = Vec::with_capacity(bracket.rounds.len() + 1);
        for (round, r) in bracket.rounds.iter().enumerate() {
            round_offsets.push(cells.len());
            for i in 0..r.matchups.len() {
                let center_row = if bracket.shape == Shape::Byes46 && round == 0 {
                    // A play-in cell sits one row below the center of the
                    // round-1 matchup whose bottom slot it feeds.
                    tree_center(0, i) + 1
                } else {
                    tree_center(tree_depth(round), i)
                };
                cells.push(MatchupCell {
                    center_row,
                    col: round_cols[round],
                    cell_width,
                    round,
                    matchup_idx: i,
                });
            }
        }
        round_offsets.push(cells.len());

        let tree_depths = match bracket.shape {
            Shape::Byes46 => bracket.rounds.len() - 1,
            Shape::Standard => bracket.rounds.len(),
        };
        let total_height = sh(tree_depths.saturating_sub(1));

        Self {
            cells,
            round_offsets,
            round_cols,
            total_width,
            total_height,
            cell_width,
            shape: bracket.shape,
        }
    }

    pub fn cells_for_round(&self, round: usize) -> &[MatchupCell] {
        &self.cells[self.round_offsets[round]..self.round_offsets[round + 1]]
    }

    pub fn round_count(&self) -> usize {
        self.round_offsets.len() - 1
    }
}

// ---------------------------------------------------------------------------
// BracketView widget
// ---------------------------------------------------------------------------

pub struct BracketView<'a> {
    pub bracket: &'a Bracket,
    /// Pre-computed layout. Rebuild only on terminal resize.
    pub grid: &'a BracketGrid,
    /// Round index of the highlighted matchup.
    pub selected_round: usize,
    /// Matchup index within the selected round.
    pub selected_matchup: usize,
    /// Vertical scroll offset in terminal rows (tall brackets on short terminals).
    pub scroll_offset: u16,
    pub theme: BannerTheme,
}

impl<'a> Widget for BracketView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 20 || area.height < GAME_HEIGHT {
            return;
        }

        // Pass 1: draw all matchup cells (3-row boxes)
        for cell in &self.grid.cells {
            let matchup = self
                .bracket
                .rounds
                .get(cell.round)
                .and_then(|r| r.matchups.get(cell.matchup_idx));
            let selected =
                cell.round == self.selected_round && cell.matchup_idx == self.selected_matchup;
            draw_matchup_cell(matchup, cell, selected, area, self.scroll_offset, self.theme, buf);
        }

        // Pass 2: box-drawing connectors between adjacent rounds.
        let style = resolve(BannerColor::Dim, self.theme);
        for round in 0..self.grid.round_count().saturating_sub(1) {
            let child_cells = self.grid.cells_for_round(round);
            let parent_cells = self.grid.cells_for_round(round + 1);
            let conn_x_base = area.x + self.grid.round_cols[round] + self.grid.cell_width;

            if child_cells.len() == 2 * parent_cells.len() {
                for (j, parent) in parent_cells.iter().enumerate() {
                    draw_connector(
                        child_cells[2 * j].center_row,
                        parent.center_row,
                        child_cells[2 * j + 1].center_row,
                        conn_x_base,
                        area,
                        self.scroll_offset,
                        style,
                        buf,
                    );
                }
            } else {
                // Play-in boundary (14 cells feeding 16): a short horizontal
                // run from each play-in cell into its round-1 target.
                for child in child_cells {
                    for dx in 0..CONNECTOR_WIDTH {
                        let x = conn_x_base + dx;
                        if x >= area.x + area.width {
                            break;
                        }
                        if let Some(sy) = screen_y(child.center_row, self.scroll_offset, area) {
                            put_char(buf, x, sy, '─', style);
                        }
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Drawing helpers
// ---------------------------------------------------------------------------

/// Convert a bracket-relative row to an absolute screen y, applying scroll + area bounds.
/// Returns `None` if the row is off-screen.
fn screen_y(bracket_row: u16, scroll: u16, area: Rect) -> Option<u16> {
    if bracket_row < scroll {
        return None;
    }
    let rel = bracket_row - scroll;
    if rel >= area.height {
        return None;
    }
    Some(area.y + rel)
}

/// Draw one matchup cell (3 rows) into the buffer, with scroll + clip handling.
fn draw_matchup_cell(
    matchup: Option<&Matchup>,
    cell: &MatchupCell,
    selected: bool,
    area: Rect,
    scroll: u16,
    theme: BannerTheme,
    buf: &mut Buffer,
) {
    let winner_style = resolve(BannerColor::Winner, theme);
    let dim = resolve(BannerColor::Dim, theme);

    let x = area.x + cell.col;
    if x >= area.x + area.width {
        return;
    }
    let avail_w = (area.x + area.width).saturating_sub(x) as usize;

    let base_style = if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let top_row = cell.center_row.saturating_sub(1);
    let mid_row = cell.center_row;
    let bot_row = cell.center_row.saturating_add(1);

    for (bracket_row, slot_idx) in [(top_row, 0u8), (mid_row, 1), (bot_row, 2)] {
        let Some(sy) = screen_y(bracket_row, scroll, area) else {
            continue;
        };

        let content = format_cell_row(matchup, slot_idx, cell.cell_width as usize);
        let text: String = content.chars().take(avail_w).collect();

        let style = match slot_idx {
            1 => dim,
            _ => {
                let side = if slot_idx == 0 { Side::Top } else { Side::Bottom };
                match matchup.and_then(|m| m.winner) {
                    Some(winner) if winner == side => winner_style,
                    Some(_) => dim,
                    None => base_style,
                }
            }
        };

        buf.set_string(x, sy, &text, style);
    }
}

/// Format a single cell row.
/// `slot_idx`: 0 = top-slot line, 1 = status line, 2 = bottom-slot line.
fn format_cell_row(matchup: Option<&Matchup>, slot_idx: u8, width: usize) -> String {
    match matchup {
        None => " ".repeat(width),
        Some(m) => match slot_idx {
            0 => format_slot_line(&m.top, m.winner == Some(Side::Top), width),
            2 => format_slot_line(&m.bottom, m.winner == Some(Side::Bottom), width),
            _ => {
                let status = if m.is_decided() { " FINAL" } else { "" };
                format!("{:<width$}", status, width = width)
            }
        },
    }
}

/// Format a slot line: `"[seed] [name        ][mark]"`
///
/// Total width = seed(2) + " " + name(width-6) + " " + mark(1) + " " = width.
fn format_slot_line(slot: &Slot, is_winner: bool, width: usize) -> String {
    let (seed, name) = match slot.entrant() {
        Some(e) => (format!("{:2}", e.seed), e.entry.short_name.as_str()),
        None => ("--".to_string(), "TBD"),
    };
    let mark = if is_winner { '✓' } else { ' ' };
    let name_w = width.saturating_sub(6);
    let name_trunc: String = name.chars().take(name_w).collect();
    let padded_name = format!("{:<width$}", name_trunc, width = name_w);
    format!("{} {} {} ", seed, padded_name, mark)
}

/// Draw box-drawing connectors between one parent and its two children.
///
/// ```text
///  child_top  ──┐         (col_a='─'  col_b='┐')
///               │         (col_b='│')
///  parent     ──├──       (col_a='─'  col_b='├'  col_c='─')
///               │         (col_b='│')
///  child_bot  ──┘         (col_a='─'  col_b='┘')
/// ```
#[allow(clippy::too_many_arguments)]
fn draw_connector(
    r_top: u16,
    r_mid: u16,
    r_bot: u16,
    conn_base_x: u16,
    area: Rect,
    scroll: u16,
    style: Style,
    buf: &mut Buffer,
) {
    let col_a = conn_base_x;
    let col_b = conn_base_x + 1;
    let col_c = conn_base_x + 2;
    let limit_x = area.x + area.width;

    macro_rules! put {
        ($x:expr, $row:expr, $ch:expr) => {
            if $x < limit_x {
                if let Some(sy) = screen_y($row, scroll, area) {
                    put_char(buf, $x, sy, $ch, style);
                }
            }
        };
    }

    put!(col_a, r_top, '─');
    put!(col_b, r_top, '┐');
    for row in (r_top + 1)..r_mid {
        put!(col_b, row, '│');
    }
    put!(col_a, r_mid, '─');
    put!(col_b, r_mid, '├');
    put!(col_c, r_mid, '─');
    for row in (r_mid + 1)..r_bot {
        put!(col_b, row, '│');
    }
    put!(col_a, r_bot, '─');
    put!(col_b, r_bot, '┘');
}

fn put_char(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_char(ch);
        cell.set_style(style);
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{self, test_support::seeded_field};

    fn grid_for(n: usize, width: u16) -> BracketGrid {
        let seeded = seeded_field(n);
        let bracket = engine::build(&seeded, engine::required_rounds(n)).unwrap();
        BracketGrid::compute(&bracket, width)
    }

    #[test]
    fn test_slot_heights() {
        assert_eq!([sh(0), sh(1), sh(2), sh(3)], [3, 7, 15, 31]);
    }

    #[test]
    fn test_sixteen_bracket_cell_count() {
        let grid = grid_for(16, 120);
        assert_eq!(grid.cells.len(), 15); // 8 + 4 + 2 + 1
        assert_eq!(grid.round_count(), 4);
        assert_eq!(grid.total_height, 31);
    }

    #[test]
    fn test_leaf_round_centers() {
        let grid = grid_for(16, 120);
        let first = grid.cells_for_round(0);
        assert_eq!(first.len(), 8);
        let centers: Vec<u16> = first.iter().map(|c| c.center_row).collect();
        assert_eq!(centers, vec![1, 5, 9, 13, 17, 21, 25, 29]);
    }

    #[test]
    fn test_parent_center_is_midpoint_of_children() {
        let grid = grid_for(32, 160);
        for round in 0..grid.round_count() - 1 {
            let children = grid.cells_for_round(round);
            let parents = grid.cells_for_round(round + 1);
            for (j, parent) in parents.iter().enumerate() {
                let c_top = children[2 * j].center_row;
                let c_bot = children[2 * j + 1].center_row;
                let expected_mid = (c_top + c_bot) / 2;
                assert_eq!(
                    parent.center_row, expected_mid,
                    "round={round} parent={j}: expected midpoint of {c_top},{c_bot}={expected_mid}"
                );
            }
        }
    }

    #[test]
    fn test_bye_bracket_grid() {
        let grid = grid_for(46, 160);
        assert_eq!(grid.round_count(), 6);
        assert_eq!(grid.cells.len(), 14 + 16 + 8 + 4 + 2 + 1);
        assert_eq!(grid.total_height, 63); // 16-leaf tree, sh(4)

        // Each play-in cell sits one row below the round-1 cell it feeds.
        let play_in = grid.cells_for_round(0);
        let round1 = grid.cells_for_round(1);
        assert_eq!(play_in.len(), 14);
        for (i, cell) in play_in.iter().enumerate() {
            assert_eq!(cell.center_row, round1[i].center_row + 1);
        }
    }

    #[test]
    fn test_cell_width_is_computed_from_available_width() {
        let width: u16 = 99;
        let grid = grid_for(16, width);
        let expected = width.saturating_sub(CONNECTOR_WIDTH * 3) / 4;
        assert_eq!(grid.cell_width, expected.min(CELL_W_FULL));
        for cell in &grid.cells {
            assert_eq!(cell.cell_width, grid.cell_width);
        }
    }

    #[test]
    fn test_cell_width_caps_at_full_width_limit() {
        let grid = grid_for(4, 200);
        assert_eq!(grid.cell_width, CELL_W_FULL);
    }

    #[test]
    fn test_format_slot_line_width() {
        let seeded = seeded_field(2);
        let slot = Slot::Entrant(seeded[0].clone());
        let line = format_slot_line(&slot, true, 14);
        assert_eq!(line.chars().count(), 14, "line: {:?}", line);
        assert!(line.contains('✓'));
    }

    #[test]
    fn test_format_pending_slot_line() {
        let line = format_slot_line(&Slot::Pending, false, 14);
        assert_eq!(line.chars().count(), 14, "line: {:?}", line);
        assert!(line.contains("TBD"));
    }
}
