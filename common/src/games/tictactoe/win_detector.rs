use super::types::{Mark, Position};

/// Scans the board for a completed line. Returns the winning mark and the
/// cells of the line, which the UI highlights.
pub fn check_win_with_line(board: &[Vec<Mark>], win_count: usize) -> Option<(Mark, Vec<Position>)> {
    let height = board.len();
    if height == 0 {
        return None;
    }
    let width = board[0].len();

    // (dx, dy) per scan direction; starting cells that would run off the
    // board are filtered by the bounds checks below.
    const DIRECTIONS: [(usize, usize, bool); 4] = [
        (1, 0, false),  // horizontal
        (0, 1, false),  // vertical
        (1, 1, false),  // diagonal down-right
        (1, 1, true),   // diagonal down-left (x mirrored)
    ];

    for y in 0..height {
        for x in 0..width {
            let mark = board[y][x];
            if mark == Mark::Empty {
                continue;
            }

            for &(dx, dy, mirror_x) in &DIRECTIONS {
                if let Some(line) = collect_line(board, x, y, dx, dy, mirror_x, mark, win_count) {
                    return Some((mark, line));
                }
            }
        }
    }

    None
}

fn collect_line(
    board: &[Vec<Mark>],
    x: usize,
    y: usize,
    dx: usize,
    dy: usize,
    mirror_x: bool,
    mark: Mark,
    win_count: usize,
) -> Option<Vec<Position>> {
    let height = board.len();
    let width = board[0].len();
    let span = win_count - 1;

    if y + dy * span >= height {
        return None;
    }
    if mirror_x {
        if x < dx * span {
            return None;
        }
    } else if x + dx * span >= width {
        return None;
    }

    let mut line = Vec::with_capacity(win_count);
    for i in 0..win_count {
        let cx = if mirror_x { x - dx * i } else { x + dx * i };
        let cy = y + dy * i;
        if board[cy][cx] != mark {
            return None;
        }
        line.push(Position::new(cx, cy));
    }
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from_rows(rows: &[&str]) -> Vec<Vec<Mark>> {
        rows.iter()
            .map(|row| {
                row.chars()
                    .map(|c| match c {
                        'X' => Mark::X,
                        'O' => Mark::O,
                        _ => Mark::Empty,
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = board_from_rows(&["...", "...", "..."]);
        assert!(check_win_with_line(&board, 3).is_none());
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_from_rows(&["XXX", "OO.", "..."]);
        let (mark, line) = check_win_with_line(&board, 3).unwrap();
        assert_eq!(mark, Mark::X);
        assert_eq!(
            line,
            vec![Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)]
        );
    }

    #[test]
    fn test_vertical_win() {
        let board = board_from_rows(&["OX.", "OX.", "O.X"]);
        let (mark, line) = check_win_with_line(&board, 3).unwrap();
        assert_eq!(mark, Mark::O);
        assert_eq!(
            line,
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
        );
    }

    #[test]
    fn test_diagonal_win() {
        let board = board_from_rows(&["XO.", "OX.", "..X"]);
        let (mark, line) = check_win_with_line(&board, 3).unwrap();
        assert_eq!(mark, Mark::X);
        assert_eq!(
            line,
            vec![Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)]
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = board_from_rows(&["X.O", "XO.", "O.X"]);
        let (mark, line) = check_win_with_line(&board, 3).unwrap();
        assert_eq!(mark, Mark::O);
        assert_eq!(
            line,
            vec![Position::new(2, 0), Position::new(1, 1), Position::new(0, 2)]
        );
    }

    #[test]
    fn test_longer_win_count_on_bigger_board() {
        let board = board_from_rows(&["XXXX.", "OOO..", ".....", ".....", "....."]);
        assert!(check_win_with_line(&board, 4).is_some());
        let board = board_from_rows(&["XXX..", "OOO..", ".....", ".....", "....."]);
        assert!(check_win_with_line(&board, 4).is_none());
    }
}
