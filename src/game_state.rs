//! Score, lives and hunger for a single run.
use log::info;

use crate::config::GameRules;

/// Per-run counters owned by the simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameState {
    /// Lives remaining.
    pub lives: u32,
    /// Coins collected.
    pub score: u32,
    /// Current hunger; a life is lost when it reaches the configured limit.
    pub hunger: f32,
}

impl GameState {
    /// Fresh state for a new run.
    #[must_use]
    pub const fn new(rules: &GameRules) -> Self {
        Self {
            lives: rules.starting_lives,
            score: 0,
            hunger: 0.0,
        }
    }

    /// Credits a collected coin.
    ///
    /// Hunger is reduced by the configured relief and may go negative, which
    /// banks time before the next life is at risk.
    pub fn collect_coin(&mut self, rules: &GameRules) {
        self.score += 1;
        self.hunger -= rules.coin_hunger_relief;
        info!("coin collected; score {}", self.score);
    }

    /// Advances hunger by one frame.
    ///
    /// Returns `true` when the tick cost the player a life. Once no lives
    /// remain hunger stops changing.
    pub fn tick_hunger(&mut self, rules: &GameRules) -> bool {
        if self.is_over() {
            return false;
        }
        if self.hunger < rules.hunger_limit {
            self.hunger += rules.hunger_rate;
            return false;
        }
        self.hunger = 0.0;
        self.lives -= 1;
        info!("hunger limit reached; {} lives left", self.lives);
        true
    }

    /// Returns `true` once every life is spent.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.lives == 0
    }
}
