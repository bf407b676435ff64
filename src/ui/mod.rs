pub mod field;
pub mod menu;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::App;
use crate::game::AlienInvasion;

fn frame_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(80, 255, 80)))
        .title(" Alien Invasion ")
        .title_style(Style::default().fg(Color::Rgb(100, 255, 100)).add_modifier(Modifier::BOLD))
}

/// Status bar, playfield and help line inside the outer border.
pub fn layout(area: Rect) -> [Rect; 3] {
    let inner = frame_block().inner(area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(inner);
    [chunks[0], chunks[1], chunks[2]]
}

/// Full-frame redraw: border, scoreboard, field, then overlays.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(frame_block(), area);
    let [status, field, help] = layout(area);

    app.set_field(field);
    let game = &app.game;

    render_status(frame, status, game);
    field::render_field(frame, field, game);

    if !game.stats.game_active {
        menu::render_menu(frame, field, game);
    } else if game.is_stunned() {
        menu::render_banner(frame, field, " SHIP HIT ", Color::Rgb(255, 80, 80));
    }

    render_help(frame, help, game);
}

/// Render the goodbye screen shown during the quit pause.
pub fn render_goodbye(frame: &mut Frame, high_score: u32) {
    let area = frame.area();
    frame.render_widget(Clear, area);
    frame.render_widget(frame_block(), area);
    let [_, field, _] = layout(area);
    let text = format!(" Bye! High score: {} ", crate::scoreboard::format_score(high_score));
    menu::render_banner(frame, field, &text, Color::Rgb(255, 220, 80));
}

fn render_status(frame: &mut Frame, area: Rect, game: &AlienInvasion) {
    let sb = &game.scoreboard;
    let sep = || Span::styled(" | ", Style::default().fg(Color::DarkGray));
    let status = Line::from(vec![
        Span::styled(
            format!(" Ships: {} ", sb.ships_text),
            Style::default().fg(Color::Rgb(80, 255, 80)).add_modifier(Modifier::BOLD),
        ),
        sep(),
        Span::styled(
            format!("High: {} ", sb.high_score_text),
            Style::default().fg(Color::Cyan),
        ),
        sep(),
        Span::styled(
            format!("Score: {} ", sb.score_text),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        sep(),
        Span::styled(sb.level_text.clone(), Style::default().fg(Color::Green)),
    ]);
    frame.render_widget(Paragraph::new(status), area);
}

fn render_help(frame: &mut Frame, area: Rect, game: &AlienInvasion) {
    let key = |s: &'static str| {
        Span::styled(s, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    };
    let text = |s: &'static str| Span::styled(s, Style::default().fg(Color::DarkGray));
    let help = if game.stats.game_active {
        Line::from(vec![
            key(" \u{2190}\u{2192}"), text(" Move | "),
            key("Space"), text(" Fire | "),
            key("Q"), text(" Quit"),
        ])
    } else {
        Line::from(vec![
            key(" Click"), text(" Play or pick a difficulty | "),
            key("P"), text(" Play | "),
            key("Q"), text(" Quit"),
        ])
    };
    frame.render_widget(Paragraph::new(help), area);
}
