use common::config::Validate;
use common::games::tictactoe::{PlayerSetup, Seat, SeatAssignment};
use serde::{Deserialize, Serialize};

/// Symbol and color each seat picked last time, offered again in the setup dialog.
#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct LastChoices {
    pub seat_one: Option<PlayerSetup>,
    pub seat_two: Option<PlayerSetup>,
}

impl LastChoices {
    pub fn from_assignment(assignment: &SeatAssignment) -> Self {
        Self {
            seat_one: Some(assignment.setup(Seat::One)),
            seat_two: Some(assignment.setup(Seat::Two)),
        }
    }
}

impl Validate for LastChoices {
    fn validate(&self) -> Result<(), String> {
        if let (Some(seat_one), Some(seat_two)) = (self.seat_one, self.seat_two) {
            SeatAssignment::new(seat_one, seat_two).map_err(|e| format!("last_choices: {}", e))?;
        }
        Ok(())
    }
}
