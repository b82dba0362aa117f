use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::SetupError;
use super::types::Player;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    One,
    Two,
}

impl Seat {
    pub fn number(self) -> u8 {
        match self {
            Seat::One => 1,
            Seat::Two => 2,
        }
    }

    pub fn other(self) -> Seat {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    LightGreen,
    LightCoral,
    LightBlue,
    Yellow,
    Pink,
    LightGray,
}

impl PlayerColor {
    pub const ALL: [PlayerColor; 6] = [
        PlayerColor::LightGreen,
        PlayerColor::LightCoral,
        PlayerColor::LightBlue,
        PlayerColor::Yellow,
        PlayerColor::Pink,
        PlayerColor::LightGray,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PlayerColor::LightGreen => "light green",
            PlayerColor::LightCoral => "light coral",
            PlayerColor::LightBlue => "light blue",
            PlayerColor::Yellow => "yellow",
            PlayerColor::Pink => "pink",
            PlayerColor::LightGray => "light gray",
        }
    }
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What one seat picked in the setup dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub mark: Player,
    pub color: PlayerColor,
}

impl PlayerSetup {
    pub fn new(mark: Player, color: PlayerColor) -> Self {
        Self { mark, color }
    }
}

/// Both seats' choices. Construction guarantees the marks form a bijection
/// onto {X, O} and the colors differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeatAssignment {
    seat_one: PlayerSetup,
    seat_two: PlayerSetup,
}

impl SeatAssignment {
    pub fn new(seat_one: PlayerSetup, seat_two: PlayerSetup) -> Result<Self, SetupError> {
        if seat_one.mark == seat_two.mark {
            return Err(SetupError::DuplicateMark(seat_one.mark));
        }
        if seat_one.color == seat_two.color {
            return Err(SetupError::DuplicateColor(seat_one.color));
        }
        Ok(Self { seat_one, seat_two })
    }

    pub fn setup(&self, seat: Seat) -> PlayerSetup {
        match seat {
            Seat::One => self.seat_one,
            Seat::Two => self.seat_two,
        }
    }

    pub fn seat_of(&self, player: Player) -> Seat {
        if self.seat_one.mark == player { Seat::One } else { Seat::Two }
    }

    pub fn color_of(&self, player: Player) -> PlayerColor {
        self.setup(self.seat_of(player)).color
    }
}

/// Marks still free after `taken` (the other seat's choice, if any).
pub fn available_marks(taken: Option<&PlayerSetup>) -> Vec<Player> {
    Player::ALL
        .into_iter()
        .filter(|&mark| taken.is_none_or(|setup| setup.mark != mark))
        .collect()
}

pub fn available_colors(taken: Option<&PlayerSetup>) -> Vec<PlayerColor> {
    PlayerColor::ALL
        .into_iter()
        .filter(|&color| taken.is_none_or(|setup| setup.color != color))
        .collect()
}
