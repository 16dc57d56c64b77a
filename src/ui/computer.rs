use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Upper bound (exclusive) of the computer player's number.
const NUMBER_RANGE: f64 = 8.0;

/// Decorative computer player. It rolls one number per game and announces it
/// after each Player 2 placement. It never chooses a move.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    rng: StdRng,
    number: f64,
}

impl ComputerPlayer {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let number = rng.random_range(0.0..NUMBER_RANGE);
        ComputerPlayer { rng, number }
    }

    pub fn number(&self) -> f64 {
        self.number
    }

    /// Roll a fresh number for a new game
    pub fn reroll(&mut self) {
        self.number = self.rng.random_range(0.0..NUMBER_RANGE);
    }

    pub fn announce(&self) -> String {
        format!("The random number is {:.3}", self.number)
    }
}

impl Default for ComputerPlayer {
    fn default() -> Self {
        Self::new()
    }
}
