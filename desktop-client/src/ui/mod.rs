mod app;
mod board_view;
mod setup_dialog;

pub use app::TicTacToeApp;
pub use setup_dialog::SetupDialog;
