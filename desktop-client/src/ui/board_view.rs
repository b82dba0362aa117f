use common::games::tictactoe::{
    BOARD_SIZE, Board, Cell, Position, SeatAssignment, TicTacToeGameState,
};

use crate::colors::{
    EMPTY_CELL_COLOR, GRID_BACKGROUND, HOVER_COLOR, MARK_COLOR, WINNING_LINE_COLOR, player_color,
};

pub const CELL_SIZE: f32 = 110.0;
const CELL_GAP: f32 = 3.0;
const CELL_ROUNDING: f32 = 4.0;
const MARK_FONT_SIZE: f32 = 56.0;
const WINNING_LINE_WIDTH: f32 = 8.0;

fn board_side() -> f32 {
    CELL_SIZE * BOARD_SIZE as f32
}

fn cell_rect(board_rect: egui::Rect, position: Position) -> egui::Rect {
    egui::Rect::from_min_size(
        egui::pos2(
            board_rect.left() + position.col as f32 * CELL_SIZE,
            board_rect.top() + position.row as f32 * CELL_SIZE,
        ),
        egui::vec2(CELL_SIZE, CELL_SIZE),
    )
}

/// Maps a screen point to the cell under it.
pub fn cell_at(board_rect: egui::Rect, point: egui::Pos2) -> Option<Position> {
    if !board_rect.contains(point) {
        return None;
    }
    let col = ((point.x - board_rect.left()) / CELL_SIZE) as usize;
    let row = ((point.y - board_rect.top()) / CELL_SIZE) as usize;
    Some(Position::new(row.min(BOARD_SIZE - 1), col.min(BOARD_SIZE - 1)))
}

/// Draws the board and returns the cell clicked this frame, if any.
/// Only reads `state`; applying the click is up to the caller.
pub fn render_board(
    ui: &mut egui::Ui,
    state: &TicTacToeGameState,
    assignment: &SeatAssignment,
    interactive: bool,
) -> Option<Position> {
    let sense = if interactive { egui::Sense::click() } else { egui::Sense::hover() };
    let (rect, response) = ui.allocate_exact_size(egui::vec2(board_side(), board_side()), sense);
    let painter = ui.painter();

    painter.rect_filled(rect, 0.0, GRID_BACKGROUND);

    for position in Board::positions() {
        let cell = state.board().get(position).unwrap_or(Cell::Empty);
        let inner = cell_rect(rect, position).shrink(CELL_GAP);

        match cell.player() {
            Some(player) => {
                let fill = player_color(assignment.color_of(player));
                painter.rect_filled(inner, CELL_ROUNDING, fill);
                painter.text(
                    inner.center(),
                    egui::Align2::CENTER_CENTER,
                    player.to_string(),
                    egui::FontId::proportional(MARK_FONT_SIZE),
                    MARK_COLOR,
                );
            }
            None => {
                painter.rect_filled(inner, CELL_ROUNDING, EMPTY_CELL_COLOR);
            }
        }
    }

    if interactive
        && let Some(hover_pos) = response.hover_pos()
        && let Some(position) = cell_at(rect, hover_pos)
        && state.board().get(position) == Some(Cell::Empty)
    {
        painter.rect_filled(cell_rect(rect, position).shrink(CELL_GAP), CELL_ROUNDING, HOVER_COLOR);
    }

    if let Some(line) = state.winning_line() {
        painter.line_segment(
            [cell_rect(rect, line.start).center(), cell_rect(rect, line.end).center()],
            egui::Stroke::new(WINNING_LINE_WIDTH, WINNING_LINE_COLOR),
        );
    }

    if interactive && response.clicked() {
        return response
            .interact_pointer_pos()
            .and_then(|point| cell_at(rect, point));
    }

    None
}
