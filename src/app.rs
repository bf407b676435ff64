use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::game::AlienInvasion;
use crate::scores::HighScoreFile;

/// Ticks a movement key stays "held" after its last press or repeat when the
/// terminal cannot report key releases. Covers the usual auto-repeat delay.
pub const HOLD_TICKS: u32 = 35;

/// Logical pixels per terminal cell (braille resolution).
pub const DOTS_X: u16 = 2;
pub const DOTS_Y: u16 = 4;

pub struct App {
    pub should_quit: bool,
    pub game: AlienInvasion,
    /// Where the playfield was last drawn, in terminal cells.
    pub field: Rect,
    score_file: HighScoreFile,
    /// Whether the terminal sends key release events.
    release_events: bool,
    hold_left: u32,
    hold_right: u32,
}

impl App {
    pub fn new(game: AlienInvasion, score_file: HighScoreFile, release_events: bool) -> Self {
        Self {
            should_quit: false,
            game,
            field: Rect::default(),
            score_file,
            release_events,
            hold_left: 0,
            hold_right: 0,
        }
    }

    pub fn on_tick(&mut self) {
        if !self.release_events {
            self.expire_holds();
        }
        self.game.update();
    }

    fn expire_holds(&mut self) {
        if self.hold_left > 0 {
            self.hold_left -= 1;
            if self.hold_left == 0 {
                self.game.ship.moving_left = false;
            }
        }
        if self.hold_right > 0 {
            self.hold_right -= 1;
            if self.hold_right == 0 {
                self.game.ship.moving_right = false;
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match key.kind {
            KeyEventKind::Release => self.on_key_up(key.code),
            KeyEventKind::Press | KeyEventKind::Repeat => self.on_key_down(key),
        }
    }

    fn on_key_down(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Right => {
                self.game.ship.moving_right = true;
                self.hold_right = HOLD_TICKS;
            }
            KeyCode::Left => {
                self.game.ship.moving_left = true;
                self.hold_left = HOLD_TICKS;
            }
            KeyCode::Char(' ') if key.kind == KeyEventKind::Press => {
                self.game.fire_bullet();
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                if !self.game.stats.game_active {
                    self.game.start_game();
                }
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            _ => {}
        }
    }

    fn on_key_up(&mut self, code: KeyCode) {
        match code {
            KeyCode::Right => {
                self.game.ship.moving_right = false;
                self.hold_right = 0;
            }
            KeyCode::Left => {
                self.game.ship.moving_left = false;
                self.hold_left = 0;
            }
            _ => {}
        }
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some((px, py)) = self.cell_to_field(mouse.column, mouse.row) {
            if let Some(action) = self.game.check_buttons(px, py) {
                log::debug!("Clicked {:?} at ({}, {})", action, px, py);
            }
        }
    }

    /// Centre of a terminal cell in playfield pixels, if it lies on the field.
    pub fn cell_to_field(&self, column: u16, row: u16) -> Option<(f32, f32)> {
        if !self.field.contains(Position::new(column, row)) {
            return None;
        }
        let px = (column - self.field.x) as f32 * DOTS_X as f32 + DOTS_X as f32 / 2.0;
        let py = (row - self.field.y) as f32 * DOTS_Y as f32 + DOTS_Y as f32 / 2.0;
        Some((px, py))
    }

    /// Record where the field is drawn and keep the game's screen size in step.
    pub fn set_field(&mut self, area: Rect) {
        self.field = area;
        let width = area.width as f32 * DOTS_X as f32;
        let height = area.height as f32 * DOTS_Y as f32;
        self.game.resize(width, height);
    }

    /// Play the goodbye cue and persist the high score.
    pub fn shutdown(&mut self) -> Result<u32> {
        let high_score = self.game.quit();
        self.score_file.save(high_score)?;
        Ok(high_score)
    }
}
