#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Menu or game over; the Play button is shown.
    #[default]
    Inactive,
    Active,
    /// Frozen; nothing updates until resumed.
    Paused,
}

/// Scoreboard state for the running process.
#[derive(Clone, Debug)]
pub struct Stats {
    pub score: u32,
    /// Never reset while the process lives.
    pub high_score: u32,
    pub level: u32,
    pub ships_left: u32,
    pub phase: Phase,
    /// Set when the last ship is lost, cleared by the next start.
    pub game_over: bool,
    ship_limit: u32,
}

impl Stats {
    pub fn new(ship_limit: u32) -> Self {
        let mut stats = Self {
            score: 0,
            high_score: 0,
            level: 1,
            ships_left: ship_limit,
            phase: Phase::Inactive,
            game_over: false,
            ship_limit,
        };
        stats.reset_stats();
        stats
    }

    pub fn reset_stats(&mut self) {
        self.ships_left = self.ship_limit;
        self.score = 0;
        self.level = 1;
    }

    pub fn is_active(&self) -> bool {
        self.phase == Phase::Active
    }

    pub fn is_paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn check_high_score(&mut self) -> bool {
        if self.score > self.high_score {
            self.high_score = self.score;
            return true;
        }
        false
    }
}
