mod assignment;
mod board;
mod error;
mod game_state;
mod session;
mod statistics;
mod types;
mod win_detector;

pub use assignment::{
    PlayerColor, PlayerSetup, Seat, SeatAssignment, available_colors, available_marks,
};
pub use board::{BOARD_SIZE, Board, CELL_COUNT};
pub use error::{MoveError, SetupError};
pub use game_state::TicTacToeGameState;
pub use session::TicTacToeSession;
pub use statistics::Statistics;
pub use types::{Cell, Outcome, Player, Position, WinningLine};
pub use win_detector::{check_win, check_win_at};
