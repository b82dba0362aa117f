use common::games::tictactoe::PlayerColor;
use egui::Color32;

/// Fill for cells nobody has marked yet.
pub const EMPTY_CELL_COLOR: Color32 = Color32::from_rgb(173, 216, 230);
pub const HOVER_COLOR: Color32 = Color32::from_rgba_premultiplied(20, 30, 50, 60);
pub const GRID_BACKGROUND: Color32 = Color32::from_rgb(60, 60, 60);
pub const MARK_COLOR: Color32 = Color32::BLACK;
pub const WINNING_LINE_COLOR: Color32 = Color32::from_rgba_premultiplied(25, 120, 25, 200);
pub const WARNING_COLOR: Color32 = Color32::from_rgb(200, 110, 0);

pub fn player_color(color: PlayerColor) -> Color32 {
    match color {
        PlayerColor::LightGreen => Color32::from_rgb(144, 238, 144),
        PlayerColor::LightCoral => Color32::from_rgb(240, 128, 128),
        PlayerColor::LightBlue => Color32::from_rgb(135, 190, 235),
        PlayerColor::Yellow => Color32::from_rgb(255, 255, 0),
        PlayerColor::Pink => Color32::from_rgb(255, 192, 203),
        PlayerColor::LightGray => Color32::from_rgb(211, 211, 211),
    }
}
