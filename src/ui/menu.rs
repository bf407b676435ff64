use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::app::{DOTS_X, DOTS_Y};
use crate::button::{Button, ButtonAction};
use crate::game::AlienInvasion;
use crate::geometry::Bounds;

const BUTTON_BG: Color = Color::Rgb(0, 135, 0);
const SELECTED_BG: Color = Color::Rgb(200, 140, 0);
const BUTTON_FG: Color = Color::Rgb(255, 255, 255);

/// Terminal cells whose centres fall inside a rectangle in field pixels,
/// clipped to `field`. Matches the cell-centre points used for clicks.
pub fn bounds_to_cells(bounds: Bounds, field: Rect) -> Rect {
    let (dx, dy) = (DOTS_X as f32, DOTS_Y as f32);
    let x0 = ((bounds.left() - dx / 2.0) / dx).ceil().max(0.0) as u16;
    let x1 = ((bounds.right() - dx / 2.0) / dx).ceil().max(0.0) as u16;
    let y0 = ((bounds.top() - dy / 2.0) / dy).ceil().max(0.0) as u16;
    let y1 = ((bounds.bottom() - dy / 2.0) / dy).ceil().max(0.0) as u16;
    Rect::new(
        field.x.saturating_add(x0),
        field.y.saturating_add(y0),
        x1.saturating_sub(x0),
        y1.saturating_sub(y0),
    )
    .intersection(field)
}

fn render_button(frame: &mut Frame, field: Rect, button: &Button, selected: bool) {
    let area = bounds_to_cells(button.rect, field);
    if area.width == 0 || area.height == 0 {
        return;
    }

    let bg = if selected { SELECTED_BG } else { BUTTON_BG };
    let style = Style::default().fg(BUTTON_FG).bg(bg).add_modifier(Modifier::BOLD);
    frame.render_widget(Clear, area);
    let label = Paragraph::new(Line::from(button.label))
        .alignment(Alignment::Center)
        .style(style);
    frame.render_widget(label, area);
}

/// Play and difficulty buttons, shown whenever the game is inactive.
pub fn render_menu(frame: &mut Frame, field: Rect, game: &AlienInvasion) {
    let selected = game.settings.difficulty();
    for button in &game.buttons {
        let is_selected =
            matches!(button.action, ButtonAction::Difficulty(d) if Some(d) == selected);
        render_button(frame, field, button, is_selected);
    }

    // Title or game-over banner two rows above the Play button
    if let Some(play) = game.buttons.first() {
        let play_area = bounds_to_cells(play.rect, field);
        if play_area.y >= field.y + 2 {
            let (text, color) = if game.stats.games_played > 0 {
                (" GAME OVER ", Color::Red)
            } else {
                (" ALIEN INVASION ", Color::Rgb(255, 220, 80))
            };
            let area = Rect::new(field.x, play_area.y - 2, field.width, 1);
            let banner = Paragraph::new(Span::styled(
                text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center);
            frame.render_widget(banner, area);
        }
    }
}

/// Centered one-line banner over the field, e.g. while the ship respawns.
pub fn render_banner(frame: &mut Frame, field: Rect, text: &str, color: Color) {
    if field.height == 0 {
        return;
    }
    let area = Rect::new(field.x, field.y + field.height / 2, field.width, 1);
    let banner = Paragraph::new(Span::styled(
        text.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(banner, area);
}
