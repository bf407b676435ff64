use std::collections::HashMap;

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::game::AlienInvasion;
use crate::geometry::Bounds;

type DotMap = HashMap<(usize, usize), u8>;

const ALIEN_COLOR: Color = Color::Rgb(80, 255, 150);
const SHIP_COLOR: Color = Color::Rgb(80, 255, 80);
const SHIP_HIT_COLOR: Color = Color::Rgb(255, 80, 80);

// Sprite offsets from the top-left of the entity's bounds.
const ALIEN_SPRITE_A: &[(i32, i32)] = &[
    (2, 0), (4, 0),
    (1, 1), (2, 1), (3, 1), (4, 1), (5, 1),
    (0, 2), (1, 2), (3, 2), (5, 2), (6, 2),
    (0, 3), (1, 3), (2, 3), (3, 3), (4, 3), (5, 3), (6, 3),
    (1, 4), (5, 4),
];
const ALIEN_SPRITE_B: &[(i32, i32)] = &[
    (2, 0), (4, 0),
    (1, 1), (2, 1), (3, 1), (4, 1), (5, 1),
    (0, 2), (1, 2), (3, 2), (5, 2), (6, 2),
    (0, 3), (1, 3), (2, 3), (3, 3), (4, 3), (5, 3), (6, 3),
    (0, 4), (6, 4),
];
const SHIP_SPRITE: &[(i32, i32)] = &[
    (4, 0),
    (3, 1), (4, 1), (5, 1),
    (3, 2), (4, 2), (5, 2),
    (1, 3), (2, 3), (3, 3), (4, 3), (5, 3), (6, 3), (7, 3),
    (0, 4), (1, 4), (2, 4), (3, 4), (4, 4), (5, 4), (6, 4), (7, 4), (8, 4),
    (0, 5), (1, 5), (2, 5), (3, 5), (4, 5), (5, 5), (6, 5), (7, 5), (8, 5),
];

fn braille_bit(sub_x: usize, sub_y: usize) -> u8 {
    match (sub_x, sub_y) {
        (0, 0) => 0x01,
        (0, 1) => 0x02,
        (0, 2) => 0x04,
        (0, 3) => 0x40,
        (1, 0) => 0x08,
        (1, 1) => 0x10,
        (1, 2) => 0x20,
        (1, 3) => 0x80,
        _ => 0,
    }
}

fn set_dot(map: &mut DotMap, bx: i32, by: i32, bw: i32, bh: i32) {
    if bx < 0 || by < 0 || bx >= bw || by >= bh {
        return;
    }
    let cx = bx as usize / 2;
    let cy = by as usize / 4;
    *map.entry((cx, cy)).or_insert(0) |= braille_bit(bx as usize % 2, by as usize % 4);
}

fn write_layer(grid: &mut [Vec<(char, Style)>], map: &DotMap, color: Color, bg: Color, bold: bool) {
    for (&(cx, cy), &bits) in map {
        if cy < grid.len() && cx < grid[cy].len() && bits != 0 {
            let ch = char::from_u32(0x2800 + bits as u32).unwrap_or(' ');
            let mut style = Style::default().fg(color).bg(bg);
            if bold { style = style.add_modifier(Modifier::BOLD); }
            grid[cy][cx] = (ch, style);
        }
    }
}

fn draw_sprite(map: &mut DotMap, bounds: Bounds, pixels: &[(i32, i32)], bw: i32, bh: i32) {
    let ox = bounds.x.round() as i32;
    let oy = bounds.y.round() as i32;
    for &(dx, dy) in pixels {
        set_dot(map, ox + dx, oy + dy, bw, bh);
    }
}

fn fill_rect(map: &mut DotMap, bounds: Bounds, bw: i32, bh: i32) {
    let x0 = bounds.left().round() as i32;
    let y0 = bounds.top().round() as i32;
    let x1 = (bounds.right().round() as i32).max(x0 + 1);
    let y1 = (bounds.bottom().round() as i32).max(y0 + 1);
    for y in y0..y1 {
        for x in x0..x1 {
            set_dot(map, x, y, bw, bh);
        }
    }
}

/// Rasterise the aliens, bullets and ship into braille lines for a
/// `width` x `height` cell area.
pub fn field_lines(game: &AlienInvasion, width: usize, height: usize) -> Vec<Line<'static>> {
    let bw = (width * 2) as i32;
    let bh = (height * 4) as i32;
    let bg = game.settings.bg_color;
    let blank = (' ', Style::default().bg(bg));
    let mut grid: Vec<Vec<(char, Style)>> = vec![vec![blank; width]; height];

    // ── Aliens ─────────────────────────────────────────────────────────────
    let mut amap = DotMap::new();
    for alien in &game.aliens {
        // Legs alternate as the alien steps sideways
        let sprite = if (alien.x / 2.0) as i32 % 2 == 0 { ALIEN_SPRITE_A } else { ALIEN_SPRITE_B };
        draw_sprite(&mut amap, alien.bounds(), sprite, bw, bh);
    }
    write_layer(&mut grid, &amap, ALIEN_COLOR, bg, false);

    // ── Bullets ────────────────────────────────────────────────────────────
    let mut bmap = DotMap::new();
    for bullet in &game.bullets {
        fill_rect(&mut bmap, bullet.bounds(), bw, bh);
    }
    write_layer(&mut grid, &bmap, game.settings.bullet_color, bg, true);

    // ── Ship ───────────────────────────────────────────────────────────────
    let mut smap = DotMap::new();
    draw_sprite(&mut smap, game.ship.bounds(), SHIP_SPRITE, bw, bh);
    let ship_color = if game.is_stunned() { SHIP_HIT_COLOR } else { SHIP_COLOR };
    write_layer(&mut grid, &smap, ship_color, bg, true);

    grid.into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(ch, style)| Span::styled(String::from(ch), style))
                .collect();
            Line::from(spans)
        })
        .collect()
}

pub fn render_field(frame: &mut Frame, area: Rect, game: &AlienInvasion) {
    let w = area.width as usize;
    let h = area.height as usize;
    if w == 0 || h == 0 {
        return;
    }
    frame.render_widget(Paragraph::new(field_lines(game, w, h)), area);
}
