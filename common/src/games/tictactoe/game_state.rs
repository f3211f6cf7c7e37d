use super::types::{Mark, Position, RoundStatus};
use super::win_detector::check_win_with_line;

/// One round of hot-seat tic-tac-toe: both marks are played from the same
/// client, alternating turns. X always opens a round.
#[derive(Clone, Debug)]
pub struct TicTacToeGameState {
    pub board: Vec<Vec<Mark>>,
    pub width: usize,
    pub height: usize,
    pub win_count: usize,
    pub current_mark: Mark,
    pub status: RoundStatus,
    pub last_move: Option<Position>,
    pub winning_line: Option<Vec<Position>>,
    pub moves: u32,
    pub elapsed_seconds: u64,
}

impl TicTacToeGameState {
    pub fn new(width: usize, height: usize, win_count: usize) -> Self {
        Self {
            board: vec![vec![Mark::Empty; width]; height],
            width,
            height,
            win_count,
            current_mark: Mark::X,
            status: RoundStatus::InProgress,
            last_move: None,
            winning_line: None,
            moves: 0,
            elapsed_seconds: 0,
        }
    }

    pub fn place_mark(&mut self, x: usize, y: usize) -> Result<(), String> {
        if self.status != RoundStatus::InProgress {
            return Err("Round is already over".to_string());
        }
        if x >= self.width || y >= self.height {
            return Err("Position out of bounds".to_string());
        }
        if self.board[y][x] != Mark::Empty {
            return Err("Cell is already marked".to_string());
        }

        self.board[y][x] = self.current_mark;
        self.last_move = Some(Position::new(x, y));
        self.moves += 1;

        self.check_round_over();

        if self.status == RoundStatus::InProgress {
            self.current_mark = self.current_mark.other();
        }

        Ok(())
    }

    /// Counts one whole second of round time. The clock starts with the
    /// first mark of the round, not when the board is shown.
    pub fn advance_second(&mut self) -> bool {
        if self.status == RoundStatus::InProgress && self.moves > 0 {
            self.elapsed_seconds += 1;
            return true;
        }
        false
    }

    /// Clears the board for the next round. Tallies live in the session,
    /// not here, so they survive this.
    pub fn reset_board(&mut self) {
        self.board = vec![vec![Mark::Empty; self.width]; self.height];
        self.current_mark = Mark::X;
        self.status = RoundStatus::InProgress;
        self.last_move = None;
        self.winning_line = None;
        self.moves = 0;
        self.elapsed_seconds = 0;
    }

    fn check_round_over(&mut self) {
        if let Some((winner_mark, line)) = check_win_with_line(&self.board, self.win_count) {
            self.status = match winner_mark {
                Mark::X => RoundStatus::XWon,
                Mark::O => RoundStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            self.winning_line = Some(line);
            return;
        }

        if self.is_board_full() {
            self.status = RoundStatus::Draw;
        }
    }

    fn is_board_full(&self) -> bool {
        self.board
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }
}
