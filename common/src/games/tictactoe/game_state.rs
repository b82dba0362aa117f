use super::board::Board;
use super::error::MoveError;
use super::types::{Cell, Outcome, Player, Position, WinningLine};
use super::win_detector::check_win_at;

/// One round of tic-tac-toe: board, turn and outcome.
///
/// Every mutation goes through [`apply_move`](Self::apply_move), which
/// validates before it touches anything, so a rejected move leaves the
/// state exactly as it was.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
    move_count: usize,
    last_move: Option<Position>,
    winning_line: Option<WinningLine>,
}

impl TicTacToeGameState {
    pub fn new(starting_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: starting_player,
            outcome: Outcome::InProgress,
            move_count: 0,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn new_round(&mut self, starting_player: Player) {
        *self = Self::new(starting_player);
    }

    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        let position = self.validate_move(row, col)?;
        Ok(self.place_mark(position))
    }

    /// Like [`apply_move`](Self::apply_move), but rejects the move when
    /// `player` is not the one whose turn it is.
    pub fn apply_move_as(
        &mut self,
        player: Player,
        row: usize,
        col: usize,
    ) -> Result<Outcome, MoveError> {
        self.validate_bounds(row, col)?;
        self.validate_in_progress()?;
        if player != self.current_player {
            return Err(MoveError::NotYourTurn { expected: self.current_player });
        }
        self.apply_move(row, col)
    }

    fn validate_bounds(&self, row: usize, col: usize) -> Result<Position, MoveError> {
        let position = Position::new(row, col);
        if !Board::contains(position) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        Ok(position)
    }

    fn validate_in_progress(&self) -> Result<(), MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::RoundOver);
        }
        Ok(())
    }

    fn validate_move(&self, row: usize, col: usize) -> Result<Position, MoveError> {
        let position = self.validate_bounds(row, col)?;
        self.validate_in_progress()?;
        if self.board.get(position) != Some(Cell::Empty) {
            return Err(MoveError::CellOccupied { row, col });
        }
        Ok(position)
    }

    fn place_mark(&mut self, position: Position) -> Outcome {
        self.board.place(position, self.current_player);
        self.move_count += 1;
        self.last_move = Some(position);

        self.check_game_over(position);

        if !self.outcome.is_terminal() {
            self.switch_turn();
        }

        self.outcome
    }

    fn switch_turn(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    fn check_game_over(&mut self, position: Position) {
        if let Some(line) = check_win_at(&self.board, position) {
            self.outcome = Outcome::Win(line.player);
            self.winning_line = Some(line);
            return;
        }

        if self.board.is_full() {
            self.outcome = Outcome::Draw;
        }
    }

    pub fn current_outcome(&self) -> Outcome {
        self.outcome
    }

    /// Player to move. Once the round is over this is the player who made
    /// the final move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.board.cell(row, col)
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.winning_line
    }

    pub fn available_moves(&self) -> Vec<Position> {
        if self.outcome.is_terminal() {
            return Vec::new();
        }
        self.board.available_moves()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::win_detector::check_win;

    fn play(state: &mut TicTacToeGameState, moves: &[(usize, usize)]) -> Outcome {
        let mut outcome = state.current_outcome();
        for &(row, col) in moves {
            outcome = state.apply_move(row, col).unwrap();
        }
        outcome
    }

    /// Fills `line` with `player`'s marks while the opponent plays harmless
    /// cells, asserting the round stays open until the third mark.
    fn assert_line_wins(line: [(usize, usize); 3], player: Player) {
        let mut state = TicTacToeGameState::new(player);
        let mut filler = Board::positions()
            .map(|p| (p.row, p.col))
            .filter(|cell| !line.contains(cell));

        for (index, &(row, col)) in line.iter().enumerate() {
            let outcome = state.apply_move(row, col).unwrap();
            if index < 2 {
                assert_eq!(outcome, Outcome::InProgress, "line {:?} won early", line);
                loop {
                    let (r, c) = filler.next().unwrap();
                    let mut probe = state.clone();
                    if probe.apply_move(r, c) == Ok(Outcome::InProgress) {
                        state.apply_move(r, c).unwrap();
                        break;
                    }
                }
            } else {
                assert_eq!(outcome, Outcome::Win(player), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_new_round_is_empty() {
        let state = TicTacToeGameState::new(Player::O);
        assert_eq!(state.current_outcome(), Outcome::InProgress);
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.last_move(), None);
        assert_eq!(state.board().mark_count(), 0);
    }

    #[test]
    fn test_every_row_wins_on_third_mark() {
        for row in 0..3 {
            assert_line_wins([(row, 0), (row, 1), (row, 2)], Player::X);
            assert_line_wins([(row, 0), (row, 1), (row, 2)], Player::O);
        }
    }

    #[test]
    fn test_every_column_wins_on_third_mark() {
        for col in 0..3 {
            assert_line_wins([(0, col), (1, col), (2, col)], Player::X);
            assert_line_wins([(0, col), (1, col), (2, col)], Player::O);
        }
    }

    #[test]
    fn test_diagonals_win_on_third_mark() {
        for player in Player::ALL {
            assert_line_wins([(0, 0), (1, 1), (2, 2)], player);
            assert_line_wins([(0, 2), (1, 1), (2, 0)], player);
        }
    }

    #[test]
    fn test_top_row_scenario() {
        let mut state = TicTacToeGameState::new(Player::X);
        let outcome = play(&mut state, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
        assert_eq!(outcome, Outcome::Win(Player::X));
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(
            state.winning_line(),
            Some(WinningLine::new(Player::X, Position::new(0, 0), Position::new(0, 2)))
        );
    }

    #[test]
    fn test_draw_scenario() {
        // Final layout: X O X / O X O / O X O
        let mut state = TicTacToeGameState::new(Player::O);
        let outcome = play(
            &mut state,
            &[(0, 1), (0, 0), (1, 0), (0, 2), (1, 2), (1, 1), (2, 0), (2, 1), (2, 2)],
        );
        assert_eq!(outcome, Outcome::Draw);
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.board().to_string(), "XOX\nOXO\nOXO");
        assert_eq!(check_win(state.board()), None);
    }

    #[test]
    fn test_win_on_last_cell_beats_draw() {
        // Ninth mark fills the board and completes the main diagonal:
        // X O X / O X O / O X X
        let mut state = TicTacToeGameState::new(Player::X);
        let outcome = play(
            &mut state,
            &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert!(state.board().is_full());
        assert_eq!(outcome, Outcome::Win(Player::X));
    }

    #[test]
    fn test_out_of_bounds() {
        let mut state = TicTacToeGameState::new(Player::X);
        assert_eq!(state.apply_move(3, 0), Err(MoveError::OutOfBounds { row: 3, col: 0 }));
        assert_eq!(state.apply_move(0, 7), Err(MoveError::OutOfBounds { row: 0, col: 7 }));
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_out_of_bounds_on_finished_board() {
        let mut state = TicTacToeGameState::new(Player::X);
        play(&mut state, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
        assert_eq!(state.apply_move(3, 0), Err(MoveError::OutOfBounds { row: 3, col: 0 }));
    }

    #[test]
    fn test_occupied_cell_changes_nothing() {
        let mut state = TicTacToeGameState::new(Player::X);
        state.apply_move(0, 0).unwrap();
        let before = state.clone();

        assert_eq!(state.apply_move(0, 0), Err(MoveError::CellOccupied { row: 0, col: 0 }));
        assert_eq!(state.board(), before.board());
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.current_outcome(), Outcome::InProgress);
        assert_eq!(state.move_count(), 1);
    }

    #[test]
    fn test_moves_after_round_over_rejected() {
        let mut state = TicTacToeGameState::new(Player::X);
        play(&mut state, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
        let board_before = state.board().clone();

        for position in Board::positions() {
            assert_eq!(state.apply_move(position.row, position.col), Err(MoveError::RoundOver));
        }
        assert_eq!(state.board(), &board_before);
        assert_eq!(state.current_outcome(), Outcome::Win(Player::X));
        assert_eq!(state.move_count(), 5);
        assert!(state.available_moves().is_empty());
    }

    #[test]
    fn test_turn_alternates() {
        let mut state = TicTacToeGameState::new(Player::O);
        let mut expected = Player::O;
        for (row, col) in [(0, 0), (1, 1), (2, 2), (0, 1), (2, 1), (1, 2)] {
            assert_eq!(state.current_player(), expected);
            state.apply_move(row, col).unwrap();
            expected = expected.opponent();
        }
        assert_eq!(state.move_count(), 6);
        assert_eq!(state.board().mark_count(), 6);
    }

    #[test]
    fn test_apply_move_as_wrong_player() {
        let mut state = TicTacToeGameState::new(Player::X);
        assert_eq!(
            state.apply_move_as(Player::O, 0, 0),
            Err(MoveError::NotYourTurn { expected: Player::X })
        );
        assert_eq!(state.move_count(), 0);
        assert_eq!(state.apply_move_as(Player::X, 0, 0), Ok(Outcome::InProgress));
        assert_eq!(state.cell(0, 0), Some(Cell::X));
    }

    #[test]
    fn test_new_round_resets() {
        let mut state = TicTacToeGameState::new(Player::X);
        play(&mut state, &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
        state.new_round(Player::O);
        assert_eq!(state.current_outcome(), Outcome::InProgress);
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.winning_line(), None);
        assert_eq!(state.available_moves().len(), 9);
    }

    #[test]
    fn test_available_moves_are_always_accepted() {
        for (first_pick, last_pick) in [(true, false), (false, true), (true, true)] {
            let mut state = TicTacToeGameState::new(Player::X);
            let mut turn = 0;
            while !state.current_outcome().is_terminal() {
                let moves = state.available_moves();
                assert_eq!(moves.len(), 9 - state.move_count());
                let pick = if turn % 2 == 0 { first_pick } else { last_pick };
                let position = if pick { moves[0] } else { moves[moves.len() - 1] };
                assert!(state.apply_move(position.row, position.col).is_ok());
                turn += 1;
            }
            assert!(state.available_moves().is_empty());
            assert!(turn <= 9);
        }
    }
}
