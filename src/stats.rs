/// Counters for the current session.
#[derive(Clone, Debug)]
pub struct GameStats {
    pub score: u32,
    pub level: u32,
    pub ships_left: u32,
    pub game_active: bool,
    /// Best score ever seen, including the value loaded from disk.
    pub high_score: u32,
    /// Number of games started this session. Non-zero means the menu shows
    /// "game over" instead of the title.
    pub games_played: u32,
    ship_limit: u32,
}

impl GameStats {
    /// Fresh stats; the game starts inactive on the menu.
    pub fn new(ship_limit: u32, high_score: u32) -> Self {
        let mut stats = Self {
            score: 0,
            level: 1,
            ships_left: ship_limit,
            game_active: false,
            high_score,
            games_played: 0,
            ship_limit,
        };
        stats.reset_stats();
        stats
    }

    /// Reset what changes during a game. The high score is kept.
    pub fn reset_stats(&mut self) {
        self.ships_left = self.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    /// Raise the high score to the current score if it was beaten.
    /// Returns true when the high score changed.
    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            true
        } else {
            false
        }
    }
}
