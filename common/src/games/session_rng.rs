use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::tictactoe::Player;

/// Seeded source of every random decision a session makes, so a seed
/// reproduces the same sequence of rounds.
#[derive(Debug, Clone)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_random(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    pub fn random_player(&mut self) -> Player {
        if self.random_bool() { Player::X } else { Player::O }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_players() {
        let mut a = SessionRng::new(7);
        let mut b = SessionRng::new(7);
        let first: Vec<Player> = (0..32).map(|_| a.random_player()).collect();
        let second: Vec<Player> = (0..32).map(|_| b.random_player()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_both_players_get_picked() {
        let mut rng = SessionRng::new(12345);
        let players: Vec<Player> = (0..64).map(|_| rng.random_player()).collect();
        assert!(players.contains(&Player::X));
        assert!(players.contains(&Player::O));
    }

    #[test]
    fn test_from_seed_keeps_explicit_seed() {
        assert_eq!(SessionRng::from_seed(Some(99)).seed(), 99);
    }
}
