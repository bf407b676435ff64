//! The three moving things on the field: the player's ship, its bullets and
//! the aliens. Each keeps a float position and exposes its `Bounds`.

use crate::geometry::Bounds;
use crate::settings::Settings;

// ── Ship ──────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// A ship sitting at the bottom centre of the screen.
    pub fn new(settings: &Settings) -> Self {
        let mut ship = Self {
            x: 0.0,
            y: 0.0,
            width: settings.ship_width,
            height: settings.ship_height,
            moving_left: false,
            moving_right: false,
        };
        ship.center_ship(settings);
        ship
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    /// Apply the held movement flags, clamped to `[0, screen_width - width]`.
    pub fn update(&mut self, settings: &Settings) {
        if self.moving_right {
            self.x += settings.ship_speed;
        }
        if self.moving_left {
            self.x -= settings.ship_speed;
        }
        let max_x = (settings.screen_width - self.width).max(0.0);
        self.x = self.x.clamp(0.0, max_x);
    }

    pub fn center_ship(&mut self, settings: &Settings) {
        self.x = ((settings.screen_width - self.width) / 2.0).max(0.0);
        self.y = settings.screen_height - self.height;
    }
}

// ── Bullet ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bullet {
    /// Spawn at the ship's nose, using the current difficulty's width.
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        let width = settings.bullet_width;
        Self {
            x: ship.bounds().center_x() - width / 2.0,
            y: ship.y,
            width,
            height: settings.bullet_height,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    pub fn update(&mut self, settings: &Settings) {
        self.y -= settings.bullet_speed;
    }

    /// True once the trailing (bottom) edge has passed the top of the screen.
    pub fn is_off_screen(&self) -> bool {
        self.bounds().bottom() <= 0.0
    }
}

// ── Alien ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug)]
pub struct Alien {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Alien {
    pub fn new(settings: &Settings, x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            width: settings.alien_width,
            height: settings.alien_height,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    /// Step sideways in the current fleet direction.
    pub fn update(&mut self, settings: &Settings) {
        self.x += settings.alien_speed * settings.fleet_direction;
    }

    /// Touching either side of the screen.
    pub fn check_edges(&self, screen_width: f32) -> bool {
        let b = self.bounds();
        b.right() >= screen_width || b.left() <= 0.0
    }
}
