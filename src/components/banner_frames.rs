use tui::style::{Color, Modifier, Style};

pub const FRAME_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BannerColor {
    Primary,
    Secondary,
    Accent,
    Shadow,
    Dim,
    Winner,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum BannerTheme {
    #[default]
    Dark,
}

pub fn resolve(color: BannerColor, _theme: BannerTheme) -> Style {
    match color {
        BannerColor::Primary => Style::default().fg(Color::Rgb(0, 122, 195)),
        BannerColor::Secondary => Style::default().fg(Color::Rgb(255, 103, 31)),
        BannerColor::Accent => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        BannerColor::Shadow | BannerColor::Dim => Style::default().fg(Color::Indexed(240)),
        BannerColor::Winner => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    }
}

/// Triangle wave so the highlighted row bounces between top and bottom.
pub fn ball_row(tick: u64, height: u16) -> u16 {
    if height == 0 {
        return 0;
    }
    let h = u64::from(height.saturating_sub(1));
    if h == 0 {
        return 0;
    }
    let period = 2 * h;
    let t = tick % period;
    (h.abs_diff(t)) as u16
}

pub fn football_frame(frame: usize) -> [&'static str; 5] {
    const FRAMES: [[&str; 5]; FRAME_COUNT] = [
        ["   .--.   ", "  /    \\  ", " ( -||- ) ", "  \\    /  ", "   '--'   "],
        ["   .--.   ", "  / || \\  ", " (  ||  ) ", "  \\ || /  ", "   '--'   "],
        ["   .--.   ", "  \\    /  ", " ( -||- ) ", "  /    \\  ", "   '--'   "],
        ["   .--.   ", "  / -- \\  ", " (  ++  ) ", "  \\ -- /  ", "   '--'   "],
    ];
    FRAMES[frame % FRAME_COUNT]
}

pub fn title_rows() -> [&'static str; 4] {
    [
        "  ___ ___ ___ ___    _   ___ _  _____ _____ ",
        " / __| __| _ ) _ \\  /_\\ / __| |/ / __|_   _|",
        "| (__| _|| _ \\   / / _ \\ (__| ' <| _|  | |  ",
        " \\___|_| |___/_|_\\/_/ \\_\\___|_|\\_\\___| |_|  ",
    ]
}
