use super::board::{BOARD_SIZE, Board};
use super::types::{Player, Position, WinningLine};

type Line = [Position; BOARD_SIZE];

fn row_line(row: usize) -> Line {
    std::array::from_fn(|col| Position::new(row, col))
}

fn column_line(col: usize) -> Line {
    std::array::from_fn(|row| Position::new(row, col))
}

fn main_diagonal() -> Line {
    std::array::from_fn(|i| Position::new(i, i))
}

fn anti_diagonal() -> Line {
    std::array::from_fn(|i| Position::new(i, BOARD_SIZE - 1 - i))
}

/// Rows, then columns, then both diagonals.
fn all_lines() -> impl Iterator<Item = Line> {
    (0..BOARD_SIZE)
        .map(row_line)
        .chain((0..BOARD_SIZE).map(column_line))
        .chain([main_diagonal(), anti_diagonal()])
}

/// The lines that pass through `position`, in the same order as `all_lines`.
fn lines_through(position: Position) -> impl Iterator<Item = Line> {
    let on_main = position.row == position.col;
    let on_anti = position.row + position.col == BOARD_SIZE - 1;

    [row_line(position.row), column_line(position.col)]
        .into_iter()
        .chain(on_main.then(main_diagonal))
        .chain(on_anti.then(anti_diagonal))
}

fn is_completed_by(board: &Board, line: &Line, player: Player) -> bool {
    line.iter()
        .all(|&position| board.get(position) == Some(player.mark()))
}

fn to_winning_line(player: Player, line: &Line) -> WinningLine {
    WinningLine::new(player, line[0], line[BOARD_SIZE - 1])
}

/// Checks only the lines through `position`, for the mark placed there.
pub fn check_win_at(board: &Board, position: Position) -> Option<WinningLine> {
    let player = board.get(position)?.player()?;

    lines_through(position)
        .find(|line| is_completed_by(board, line, player))
        .map(|line| to_winning_line(player, &line))
}

/// Full scan of all eight lines.
pub fn check_win(board: &Board) -> Option<WinningLine> {
    all_lines().find_map(|line| {
        let player = board.get(line[0])?.player()?;
        is_completed_by(board, &line, player).then(|| to_winning_line(player, &line))
    })
}
