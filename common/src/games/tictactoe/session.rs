use crate::games::SessionRng;
use crate::log;

use super::error::MoveError;
use super::game_state::TicTacToeGameState;
use super::statistics::Statistics;
use super::types::{Outcome, Player};

/// A sequence of rounds between the same two players.
///
/// Owns the round state, the running statistics and the RNG that picks who
/// starts. Because every move goes through here, a round's result is counted
/// exactly once: the move that ends the round records it, and every later
/// move is rejected with [`MoveError::RoundOver`].
#[derive(Debug)]
pub struct TicTacToeSession {
    game_state: TicTacToeGameState,
    statistics: Statistics,
    rng: SessionRng,
    round_number: u32,
}

impl TicTacToeSession {
    /// Starts round 1 with a starting player drawn from `rng`.
    pub fn new(mut rng: SessionRng) -> Self {
        let starting_player = rng.random_player();
        log!("Session seed {}, round 1 starts with {}", rng.seed(), starting_player);
        Self {
            game_state: TicTacToeGameState::new(starting_player),
            statistics: Statistics::new(),
            rng,
            round_number: 1,
        }
    }

    pub fn start_round(&mut self) -> Player {
        let starting_player = self.rng.random_player();
        self.start_round_with(starting_player);
        starting_player
    }

    pub fn start_round_with(&mut self, starting_player: Player) {
        if !self.game_state.current_outcome().is_terminal() && self.game_state.move_count() > 0 {
            log!(
                "Round {} abandoned after {} moves",
                self.round_number,
                self.game_state.move_count()
            );
        }
        self.round_number += 1;
        self.game_state.new_round(starting_player);
        log!("Round {} starts with {}", self.round_number, starting_player);
    }

    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        let player = self.game_state.current_player();
        let result = self.game_state.apply_move(row, col);
        self.after_move(player, row, col, result)
    }

    pub fn apply_move_as(
        &mut self,
        player: Player,
        row: usize,
        col: usize,
    ) -> Result<Outcome, MoveError> {
        let result = self.game_state.apply_move_as(player, row, col);
        self.after_move(player, row, col, result)
    }

    fn after_move(
        &mut self,
        player: Player,
        row: usize,
        col: usize,
        result: Result<Outcome, MoveError>,
    ) -> Result<Outcome, MoveError> {
        let outcome = result.inspect_err(|e| {
            log!("Rejected move by {} at ({}, {}): {}", player, row, col, e);
        })?;

        log!("{} marked ({}, {})", player, row, col);

        if self.statistics.record(outcome) {
            log!("Round {} finished: {} [{}]", self.round_number, outcome, self.statistics);
        }

        Ok(outcome)
    }

    pub fn game_state(&self) -> &TicTacToeGameState {
        &self.game_state
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOP_ROW_FOR_STARTER: [(usize, usize); 5] = [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)];
    const DRAW: [(usize, usize); 9] =
        [(0, 1), (0, 0), (1, 0), (0, 2), (1, 2), (1, 1), (2, 0), (2, 1), (2, 2)];

    fn play(session: &mut TicTacToeSession, moves: &[(usize, usize)]) -> Outcome {
        let mut outcome = Outcome::InProgress;
        for &(row, col) in moves {
            outcome = session.apply_move(row, col).unwrap();
        }
        outcome
    }

    #[test]
    fn test_win_recorded_once() {
        let mut session = TicTacToeSession::new(SessionRng::new(1));
        session.start_round_with(Player::X);

        assert_eq!(play(&mut session, &TOP_ROW_FOR_STARTER), Outcome::Win(Player::X));
        assert_eq!(session.statistics().x_wins(), 1);

        assert_eq!(session.apply_move(2, 2), Err(MoveError::RoundOver));
        assert_eq!(session.apply_move(0, 0), Err(MoveError::RoundOver));
        assert_eq!(session.statistics().rounds(), 1);
    }

    #[test]
    fn test_statistics_accumulate_across_rounds() {
        let mut session = TicTacToeSession::new(SessionRng::new(2));

        session.start_round_with(Player::O);
        play(&mut session, &TOP_ROW_FOR_STARTER);
        session.start_round_with(Player::X);
        play(&mut session, &TOP_ROW_FOR_STARTER);
        session.start_round_with(Player::O);
        assert_eq!(play(&mut session, &DRAW), Outcome::Draw);

        let stats = session.statistics();
        assert_eq!((stats.x_wins(), stats.o_wins(), stats.ties()), (1, 1, 1));
        assert_eq!(session.round_number(), 4);
    }

    #[test]
    fn test_abandoned_round_not_counted() {
        let mut session = TicTacToeSession::new(SessionRng::new(3));
        session.apply_move(1, 1).unwrap();
        session.start_round();
        assert_eq!(session.statistics().rounds(), 0);
        assert_eq!(session.game_state().move_count(), 0);
    }

    #[test]
    fn test_same_seed_same_starting_players() {
        let starters = |seed: u64| {
            let mut session = TicTacToeSession::new(SessionRng::new(seed));
            let mut players = vec![session.game_state().current_player()];
            players.extend((0..10).map(|_| session.start_round()));
            players
        };
        assert_eq!(starters(42), starters(42));
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut session = TicTacToeSession::new(SessionRng::new(4));
        session.start_round_with(Player::X);
        session.apply_move(0, 0).unwrap();
        assert_eq!(session.apply_move(0, 0), Err(MoveError::CellOccupied { row: 0, col: 0 }));
        assert_eq!(
            session.apply_move_as(Player::X, 1, 1),
            Err(MoveError::NotYourTurn { expected: Player::O })
        );
        assert_eq!(session.game_state().current_player(), Player::O);
    }
}
