use crate::stats::GameStats;

/// Text shown in the HUD, rebuilt only when the underlying stat changes.
#[derive(Clone, Debug, Default)]
pub struct Scoreboard {
    pub score_text: String,
    pub high_score_text: String,
    pub level_text: String,
    pub ships_text: String,
}

impl Scoreboard {
    pub fn new(stats: &GameStats) -> Self {
        let mut sb = Self::default();
        sb.prep_images(stats);
        sb
    }

    pub fn prep_images(&mut self, stats: &GameStats) {
        self.prep_score(stats);
        self.prep_high_score(stats);
        self.prep_level(stats);
        self.prep_ships(stats);
    }

    pub fn prep_score(&mut self, stats: &GameStats) {
        self.score_text = format_score(stats.score);
    }

    pub fn prep_high_score(&mut self, stats: &GameStats) {
        self.high_score_text = format_score(stats.high_score);
    }

    pub fn prep_level(&mut self, stats: &GameStats) {
        self.level_text = format!("L{}", stats.level);
    }

    pub fn prep_ships(&mut self, stats: &GameStats) {
        self.ships_text = "\u{25b2} ".repeat(stats.ships_left as usize).trim_end().to_string();
    }

    /// Update the high score after a scoring batch and refresh its text.
    pub fn check_high_score(&mut self, stats: &mut GameStats) {
        if stats.check_high_score() {
            self.prep_high_score(stats);
        }
    }
}

/// Round to the nearest ten and group thousands: 1254 -> "1,250".
pub fn format_score(score: u32) -> String {
    let rounded = (score as u64 + 5) / 10 * 10;
    let digits = rounded.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
