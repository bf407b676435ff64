use std::time::Duration;

use ratatui::style::Color;

/// Bullet width presets chosen from the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Every tunable in the game. Geometry is in logical pixels (a terminal cell
/// is 2x4 of them) and speeds are pixels per tick.
#[derive(Clone, Debug)]
pub struct Settings {
    // Screen
    pub screen_width: f32,
    pub screen_height: f32,
    pub bg_color: Color,

    // Ship
    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_limit: u32,
    pub ship_speed: f32,

    // Bullets
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_color: Color,
    pub bullet_speed: f32,
    pub bullets_allowed: usize,
    pub easy_bullet_width: f32,
    pub medium_bullet_width: f32,
    pub hard_bullet_width: f32,

    // Aliens
    pub alien_width: f32,
    pub alien_height: f32,
    pub alien_speed: f32,
    pub fleet_drop_speed: f32,
    /// +1 moves right, -1 moves left.
    pub fleet_direction: f32,

    // Scoring and level-up
    pub alien_points: u32,
    pub speedup_scale: f32,
    pub score_scale: f32,

    // Buttons
    pub button_width: f32,
    pub button_height: f32,

    // Pacing
    pub tick_rate: Duration,
    pub hit_pause: Duration,
    pub quit_pause: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        let mut s = Self {
            screen_width: 160.0,
            screen_height: 88.0,
            bg_color: Color::Rgb(0, 0, 5),

            ship_width: 9.0,
            ship_height: 6.0,
            ship_limit: 3,
            ship_speed: 0.0,

            bullet_width: 3.0,
            bullet_height: 4.0,
            bullet_color: Color::Rgb(255, 255, 200),
            bullet_speed: 0.0,
            bullets_allowed: 3,
            easy_bullet_width: 5.0,
            medium_bullet_width: 3.0,
            hard_bullet_width: 1.0,

            alien_width: 7.0,
            alien_height: 5.0,
            alien_speed: 0.0,
            fleet_drop_speed: 3.0,
            fleet_direction: 1.0,

            alien_points: 0,
            speedup_scale: 1.1,
            score_scale: 1.5,

            button_width: 40.0,
            button_height: 4.0,

            tick_rate: Duration::from_millis(16),
            hit_pause: Duration::from_millis(1900),
            quit_pause: Duration::from_millis(900),
        };
        s.reset_dynamic();
        s
    }
}

impl Settings {
    /// Restore the values that change as the game progresses.
    pub fn reset_dynamic(&mut self) {
        self.ship_speed = 1.5;
        self.bullet_speed = 2.0;
        self.alien_speed = 0.25;
        self.fleet_direction = 1.0;
        self.alien_points = 50;
    }

    /// Speed everything up for the next level and make aliens worth more.
    pub fn increase_speed(&mut self) {
        self.ship_speed *= self.speedup_scale;
        self.bullet_speed *= self.speedup_scale;
        self.alien_speed *= self.speedup_scale;
        self.alien_points = (self.alien_points as f32 * self.score_scale) as u32;
    }

    pub fn bullet_width_for(&self, difficulty: Difficulty) -> f32 {
        match difficulty {
            Difficulty::Easy => self.easy_bullet_width,
            Difficulty::Medium => self.medium_bullet_width,
            Difficulty::Hard => self.hard_bullet_width,
        }
    }

    /// The preset matching the current bullet width, if any.
    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::all()
            .iter()
            .copied()
            .find(|d| self.bullet_width_for(*d) == self.bullet_width)
    }

    /// Number of ticks the life-lost pause lasts.
    pub fn hit_pause_ticks(&self) -> u32 {
        let tick = self.tick_rate.as_millis().max(1);
        (self.hit_pause.as_millis() / tick) as u32
    }
}
