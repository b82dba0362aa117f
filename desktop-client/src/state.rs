use common::games::tictactoe::{
    Outcome, Player, PlayerSetup, Position, SeatAssignment, TicTacToeSession,
};
use std::time::{Duration, Instant};

use crate::restart_timer::RestartTimer;
use crate::ui::SetupDialog;

pub enum AppState {
    Setup {
        seat_one: Option<PlayerSetup>,
        dialog: SetupDialog,
    },
    Playing(Box<GameScreen>),
}

/// Everything the board screen needs between frames.
pub struct GameScreen {
    pub assignment: SeatAssignment,
    pub session: TicTacToeSession,
    /// Starting player still waiting to be acknowledged.
    pub announcement: Option<Player>,
    pub restart_timer: Option<RestartTimer>,
}

impl GameScreen {
    pub fn new(assignment: SeatAssignment, session: TicTacToeSession) -> Self {
        let starting_player = session.game_state().current_player();
        Self {
            assignment,
            session,
            announcement: Some(starting_player),
            restart_timer: None,
        }
    }

    pub fn accepts_clicks(&self) -> bool {
        self.announcement.is_none() && !self.session.game_state().current_outcome().is_terminal()
    }

    /// Applies a click on `position`. Rejected moves are ignored.
    pub fn handle_click(
        &mut self,
        position: Position,
        restart_delay: Duration,
        now: Instant,
    ) -> Option<Outcome> {
        if self.announcement.is_some() {
            return None;
        }

        let outcome = self.session.apply_move(position.row, position.col).ok()?;
        if outcome.is_terminal() {
            self.restart_timer = Some(RestartTimer::start_at(now, restart_delay));
        }
        Some(outcome)
    }

    pub fn dismiss_announcement(&mut self) {
        self.announcement = None;
    }

    /// Starts the next round once the restart delay has passed. Returns the
    /// time left while still waiting.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let timer = self.restart_timer?;
        if !timer.is_elapsed_at(now) {
            return Some(timer.remaining_at(now));
        }

        self.restart_timer = None;
        let starting_player = self.session.start_round();
        self.announcement = Some(starting_player);
        None
    }

    pub fn winner_label(&self) -> String {
        match self.session.game_state().current_outcome() {
            Outcome::InProgress => "Who wins?".to_string(),
            Outcome::Win(player) => format!("{} wins!", player),
            Outcome::Draw => "Cat's Game!".to_string(),
        }
    }

    pub fn turn_label(&self) -> Option<String> {
        let state = self.session.game_state();
        if state.current_outcome().is_terminal() {
            return None;
        }
        let player = state.current_player();
        let seat = self.assignment.seat_of(player);
        Some(format!("Player {} ({}) to move", seat.number(), player))
    }
}
