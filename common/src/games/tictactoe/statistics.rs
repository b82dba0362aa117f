use std::fmt;

use super::types::{Outcome, Player};

/// Running tally of finished rounds for the lifetime of the process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Statistics {
    x_wins: u32,
    o_wins: u32,
    ties: u32,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished round. Returns `false` for `InProgress`.
    pub fn record(&mut self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Win(Player::X) => self.x_wins += 1,
            Outcome::Win(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.ties += 1,
            Outcome::InProgress => return false,
        }
        true
    }

    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X: {} | O: {} | Ties: {}", self.x_wins, self.o_wins, self.ties)
    }
}
