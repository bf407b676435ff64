//! The game controller: owns every entity and runs one tick of the rules.
//!
//! Nothing here touches the terminal. The frontend feeds input through
//! `fire_bullet`, `check_buttons` and the ship's movement flags, calls
//! `update` once per tick, and drains queued sounds with `drain_sounds`.

use crate::audio::{AudioEvent, Music, SoundCue};
use crate::button::{self, Button, ButtonAction};
use crate::entities::{Alien, Bullet, Ship};
use crate::scoreboard::Scoreboard;
use crate::settings::{Difficulty, Settings};
use crate::stats::GameStats;

pub struct AlienInvasion {
    pub settings: Settings,
    pub stats: GameStats,
    pub scoreboard: Scoreboard,
    pub ship: Ship,
    pub bullets: Vec<Bullet>,
    pub aliens: Vec<Alien>,
    pub buttons: Vec<Button>,
    /// Ticks left in the pause after losing a ship. The world is frozen
    /// while this is non-zero but input is still handled.
    pub stun_ticks: u32,
    sounds: Vec<AudioEvent>,
}

impl AlienInvasion {
    pub fn new(settings: Settings, high_score: u32) -> Self {
        let stats = GameStats::new(settings.ship_limit, high_score);
        let scoreboard = Scoreboard::new(&stats);
        let ship = Ship::new(&settings);
        let buttons = button::menu_buttons(&settings);
        let mut game = Self {
            settings,
            stats,
            scoreboard,
            ship,
            bullets: Vec::new(),
            aliens: Vec::new(),
            buttons,
            stun_ticks: 0,
            sounds: vec![AudioEvent::Music(Some(Music::Inactive))],
        };
        game.create_fleet();
        game
    }

    pub fn is_stunned(&self) -> bool {
        self.stun_ticks > 0
    }

    pub fn drain_sounds(&mut self) -> Vec<AudioEvent> {
        std::mem::take(&mut self.sounds)
    }

    fn cue(&mut self, cue: SoundCue) {
        self.sounds.push(AudioEvent::Cue(cue));
    }

    fn music(&mut self, track: Option<Music>) {
        self.sounds.push(AudioEvent::Music(track));
    }

    // ── Per-tick update ──────────────────────────────────────────────────────

    /// Advance the world by one tick. Does nothing on the menu.
    pub fn update(&mut self) {
        if !self.stats.game_active {
            return;
        }
        if self.stun_ticks > 0 {
            self.stun_ticks -= 1;
            if self.stun_ticks == 0 {
                self.music(Some(Music::Play));
            }
            return;
        }
        self.update_ship();
        self.update_bullets();
        self.update_aliens();
    }

    pub fn update_ship(&mut self) {
        self.ship.update(&self.settings);
    }

    /// Move bullets, drop the ones past the top, then resolve hits.
    pub fn update_bullets(&mut self) {
        for bullet in &mut self.bullets {
            bullet.update(&self.settings);
        }
        self.bullets.retain(|b| !b.is_off_screen());

        self.check_bullet_alien_collisions();
    }

    /// Remove every bullet and alien that overlap, score the destroyed aliens
    /// and start a new level if the fleet is gone. Returns the number of
    /// aliens destroyed.
    pub fn check_bullet_alien_collisions(&mut self) -> u32 {
        let mut spent = vec![false; self.bullets.len()];
        let mut hit = vec![false; self.aliens.len()];
        for (bi, bullet) in self.bullets.iter().enumerate() {
            let bb = bullet.bounds();
            for (ai, alien) in self.aliens.iter().enumerate() {
                if bb.overlaps(&alien.bounds()) {
                    spent[bi] = true;
                    hit[ai] = true;
                }
            }
        }

        // Reverse order keeps the not-yet-visited indices valid under swap_remove.
        for i in (0..spent.len()).rev() {
            if spent[i] {
                self.bullets.swap_remove(i);
            }
        }
        let mut destroyed = 0;
        for i in (0..hit.len()).rev() {
            if hit[i] {
                self.aliens.swap_remove(i);
                destroyed += 1;
            }
        }

        if destroyed > 0 {
            self.cue(SoundCue::AlienDestroyed);
            self.stats.score += self.settings.alien_points * destroyed;
            self.scoreboard.prep_score(&self.stats);
            self.scoreboard.check_high_score(&mut self.stats);
        }

        if self.aliens.is_empty() {
            self.start_new_level();
        }
        destroyed
    }

    pub fn start_new_level(&mut self) {
        self.bullets.clear();
        self.create_fleet();
        self.settings.increase_speed();
        self.stats.level += 1;
        self.scoreboard.prep_level(&self.stats);
        log::info!("Level {} (alien speed {:.3})", self.stats.level, self.settings.alien_speed);
    }

    /// Bounce the fleet off the edges, move it, then check for the ship
    /// being rammed or an alien landing.
    pub fn update_aliens(&mut self) {
        self.check_fleet_edges();
        for alien in &mut self.aliens {
            alien.update(&self.settings);
        }

        let ship = self.ship.bounds();
        if self.aliens.iter().any(|a| a.bounds().overlaps(&ship)) {
            self.ship_hit();
            return;
        }

        self.check_aliens_bottom();
    }

    pub fn check_fleet_edges(&mut self) {
        let width = self.settings.screen_width;
        if let Some(alien) = self.aliens.iter().find(|a| a.check_edges(width)) {
            let at_right = alien.bounds().right() >= width;
            self.change_fleet_direction(at_right);
        }
    }

    /// Drop the whole fleet one step and turn it away from the edge it
    /// touched: left at the right edge, right at the left edge.
    pub fn change_fleet_direction(&mut self, at_right: bool) {
        for alien in &mut self.aliens {
            alien.y += self.settings.fleet_drop_speed;
        }
        self.settings.fleet_direction = if at_right { -1.0 } else { 1.0 };
    }

    pub fn check_aliens_bottom(&mut self) {
        let bottom = self.settings.screen_height;
        if self.aliens.iter().any(|a| a.bounds().bottom() >= bottom) {
            self.ship_hit();
        }
    }

    /// Lose a ship. With ships to spare the round restarts after a pause;
    /// losing the last one ends the game and leaves the field as it is.
    pub fn ship_hit(&mut self) {
        if !self.stats.game_active {
            return;
        }
        self.music(None);
        self.cue(SoundCue::ShipHit);

        self.stats.ships_left = self.stats.ships_left.saturating_sub(1);
        self.scoreboard.prep_ships(&self.stats);

        if self.stats.ships_left > 0 {
            self.aliens.clear();
            self.bullets.clear();
            self.create_fleet();
            self.ship.center_ship(&self.settings);
            self.stun_ticks = self.settings.hit_pause_ticks();
            if self.stun_ticks == 0 {
                self.music(Some(Music::Play));
            }
            log::info!("Ship hit, {} left", self.stats.ships_left);
        } else {
            self.stats.game_active = false;
            self.stun_ticks = 0;
            self.music(Some(Music::Inactive));
            log::info!("Game over at level {} with score {}", self.stats.level, self.stats.score);
        }
    }

    // ── Fleet ────────────────────────────────────────────────────────────────

    /// Fill the screen with a grid of aliens, one alien-width apart, leaving
    /// room above the ship.
    pub fn create_fleet(&mut self) {
        let alien_width = self.settings.alien_width;
        let alien_height = self.settings.alien_height;

        let available_space_x = self.settings.screen_width - 2.0 * alien_width;
        let number_aliens_x = (available_space_x / (2.0 * alien_width)).floor().max(1.0) as usize;

        let available_space_y =
            self.settings.screen_height - 3.0 * alien_height - self.ship.height;
        let number_rows = (available_space_y / (2.0 * alien_height)).floor().max(1.0) as usize;

        for row in 0..number_rows {
            for col in 0..number_aliens_x {
                self.create_alien(col, row);
            }
        }
    }

    fn create_alien(&mut self, col: usize, row: usize) {
        let w = self.settings.alien_width;
        let h = self.settings.alien_height;
        let x = w + 2.0 * w * col as f32;
        let y = h + 2.0 * h * row as f32;
        self.aliens.push(Alien::new(&self.settings, x, y));
    }

    // ── Input-driven operations ──────────────────────────────────────────────

    /// Reset settings, stats and the field and start playing.
    pub fn start_game(&mut self) {
        self.settings.reset_dynamic();
        self.stats.reset_stats();
        self.stats.game_active = true;
        self.stats.games_played += 1;
        self.scoreboard.prep_images(&self.stats);

        self.aliens.clear();
        self.bullets.clear();
        self.create_fleet();
        self.ship.center_ship(&self.settings);
        self.stun_ticks = 0;

        self.music(Some(Music::Play));
        log::info!(
            "Game started ({} aliens, bullet width {})",
            self.aliens.len(),
            self.settings.bullet_width
        );
    }

    /// Fire if fewer than `bullets_allowed` are in flight. Returns true when a
    /// bullet was added.
    pub fn fire_bullet(&mut self) -> bool {
        if !self.stats.game_active || self.is_stunned() {
            return false;
        }
        if self.bullets.len() >= self.settings.bullets_allowed {
            return false;
        }
        self.cue(SoundCue::Fire);
        self.bullets.push(Bullet::new(&self.settings, &self.ship));
        true
    }

    /// Dispatch a click at a logical pixel. Buttons only respond on the menu.
    pub fn check_buttons(&mut self, px: f32, py: f32) -> Option<ButtonAction> {
        if self.stats.game_active {
            return None;
        }
        let action = button::hit_test(&self.buttons, px, py)?.action;
        match action {
            ButtonAction::Play => self.start_game(),
            ButtonAction::Difficulty(difficulty) => self.select_difficulty(difficulty),
        }
        Some(action)
    }

    /// Pick the bullet width for the next game. Ignored while playing.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if self.stats.game_active {
            return;
        }
        self.cue(SoundCue::for_difficulty(difficulty));
        self.settings.bullet_width = self.settings.bullet_width_for(difficulty);
        log::info!("Difficulty set to {}", difficulty.label());
    }

    /// Stop the music, play the goodbye cue and hand back the score to save.
    pub fn quit(&mut self) -> u32 {
        self.music(None);
        self.cue(SoundCue::Quit);
        self.stats.high_score.max(self.stats.score)
    }

    /// Follow a change in playfield size, scaling everything in place.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        if width == self.settings.screen_width && height == self.settings.screen_height {
            return;
        }
        let rx = width / self.settings.screen_width;
        let ry = height / self.settings.screen_height;
        self.settings.screen_width = width;
        self.settings.screen_height = height;

        let max_x = (width - self.ship.width).max(0.0);
        self.ship.x = (self.ship.x * rx).clamp(0.0, max_x);
        self.ship.y = height - self.ship.height;

        // Sprites keep their size, so pull aliens back inside the field and
        // above the ship.
        for alien in &mut self.aliens {
            let max_x = (width - alien.width).max(0.0);
            let max_y = (self.ship.y - alien.height).max(0.0);
            alien.x = (alien.x * rx).clamp(0.0, max_x);
            alien.y = (alien.y * ry).clamp(0.0, max_y);
        }
        for bullet in &mut self.bullets {
            let max_x = (width - bullet.width).max(0.0);
            bullet.x = (bullet.x * rx).clamp(0.0, max_x);
            bullet.y *= ry;
        }

        self.buttons = button::menu_buttons(&self.settings);
        log::debug!("Playfield resized to {}x{}", width, height);
    }
}
