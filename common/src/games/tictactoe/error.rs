use thiserror::Error;

use super::assignment::PlayerColor;
use super::types::Player;

/// Rejected move. The board, turn and outcome are untouched when one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Position ({row}, {col}) is out of bounds")]
    OutOfBounds { row: usize, col: usize },

    #[error("Cell ({row}, {col}) is already marked")]
    CellOccupied { row: usize, col: usize },

    #[error("Round is already over")]
    RoundOver,

    #[error("Not your turn, {expected} moves next")]
    NotYourTurn { expected: Player },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    #[error("Both players chose {0}")]
    DuplicateMark(Player),

    #[error("Both players chose the color {0}")]
    DuplicateColor(PlayerColor),
}
