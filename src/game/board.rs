use super::Player;
use crate::error::{BoardError, MoveError};

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;

/// Number of consecutive pieces needed to win.
pub const WIN_LENGTH: usize = 4;

/// Run directions as (row step, column step): right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Owner of the cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// A cell coordinate. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub fn new(row: usize, column: usize) -> Self {
        Position { row, column }
    }
}

/// Fixed-size grid, filled bottom-up within each column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(height: usize, width: usize) -> Result<Self, BoardError> {
        let invalid = BoardError::InvalidDimensions { height, width };
        let size = match height.checked_mul(width) {
            Some(size) if size > 0 => size,
            _ => return Err(invalid),
        };

        let mut cells = Vec::new();
        cells.try_reserve_exact(size).map_err(|_| invalid)?;
        cells.resize(size, Cell::Empty);

        Ok(Board {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the cell at a specific position, `None` when out of bounds
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row >= self.height || column >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + column])
    }

    /// Iterate over rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        !matches!(self.get(0, column), Some(Cell::Empty))
    }

    /// Lowest empty row in `column`, or `None` when the column is full.
    pub fn landing_row(&self, column: usize) -> Result<Option<usize>, MoveError> {
        if column >= self.width {
            return Err(MoveError::InvalidColumn {
                column,
                width: self.width,
            });
        }

        Ok((0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + column].is_empty()))
    }

    /// Drop a piece in a column. Returns the row where it landed, or `None`
    /// if the column was already full (board unchanged).
    pub fn drop_piece(&mut self, column: usize, player: Player) -> Result<Option<usize>, MoveError> {
        let landing = self.landing_row(column)?;
        if let Some(row) = landing {
            self.cells[row * self.width + column] = Cell::Occupied(player);
        }
        Ok(landing)
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Full-board scan: does `player` own four consecutive cells anywhere?
    pub fn check_for_win(&self, player: Player) -> bool {
        self.winning_cells(player).is_some()
    }

    /// First four-in-a-row owned by `player`, scanning each cell as the start
    /// of a run in every direction.
    pub fn winning_cells(&self, player: Player) -> Option<[Position; WIN_LENGTH]> {
        for row in 0..self.height {
            for column in 0..self.width {
                let start = Position::new(row, column);
                for direction in DIRECTIONS {
                    if let Some(run) = self.run_from(start, direction, player) {
                        return Some(run);
                    }
                }
            }
        }
        None
    }

    /// Check if the piece at `position` is part of a four-in-a-row. Only lines
    /// through that cell are examined.
    pub fn is_winning_move(&self, position: Position) -> bool {
        let Some(player) = self
            .get(position.row, position.column)
            .and_then(Cell::player)
        else {
            return false;
        };

        DIRECTIONS.iter().any(|&(dr, dc)| {
            let count = 1
                + self.count_owned(position, (dr, dc), player)
                + self.count_owned(position, (-dr, -dc), player);
            count >= WIN_LENGTH
        })
    }

    fn run_from(
        &self,
        start: Position,
        direction: (isize, isize),
        player: Player,
    ) -> Option<[Position; WIN_LENGTH]> {
        let mut run = [start; WIN_LENGTH];
        for (distance, slot) in run.iter_mut().enumerate() {
            let position = self.offset(start, direction, distance)?;
            if self.get(position.row, position.column)? != Cell::Occupied(player) {
                return None;
            }
            *slot = position;
        }
        Some(run)
    }

    /// Consecutive cells owned by `player` walking away from `from`, not
    /// counting `from` itself.
    fn count_owned(&self, from: Position, direction: (isize, isize), player: Player) -> usize {
        (1..WIN_LENGTH)
            .map_while(|distance| self.offset(from, direction, distance))
            .take_while(|p| self.get(p.row, p.column) == Some(Cell::Occupied(player)))
            .count()
    }

    fn offset(&self, from: Position, (dr, dc): (isize, isize), distance: usize) -> Option<Position> {
        let distance = distance as isize;
        let row = from.row.checked_add_signed(dr * distance)?;
        let column = from.column.checked_add_signed(dc * distance)?;
        (row < self.height && column < self.width).then(|| Position::new(row, column))
    }

    /// Build a board from text rows (top first): `.` empty, `1`/`2` players.
    /// Ignores gravity, so arbitrary patterns can be checked.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Board {
        let height = rows.len();
        let width = rows[0].len();
        let mut board = Board::new(height, width).unwrap();
        for (row, line) in rows.iter().enumerate() {
            for (column, ch) in line.chars().enumerate() {
                board.cells[row * width + column] = match ch {
                    '1' => Cell::Occupied(Player::One),
                    '2' => Cell::Occupied(Player::Two),
                    _ => Cell::Empty,
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            height: DEFAULT_HEIGHT,
            width: DEFAULT_WIDTH,
            cells: vec![Cell::Empty; DEFAULT_HEIGHT * DEFAULT_WIDTH],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard() -> Board {
        Board::new(DEFAULT_HEIGHT, DEFAULT_WIDTH).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = standard();
        for row in 0..DEFAULT_HEIGHT {
            for col in 0..DEFAULT_WIDTH {
                assert_eq!(board.get(row, col), Some(Cell::Empty));
            }
        }
        assert_eq!(board.piece_count(), 0);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Board::new(0, 7),
            Err(BoardError::InvalidDimensions { height: 0, width: 7 })
        );
        assert!(Board::new(6, 0).is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert_eq!(
            Board::new(usize::MAX, 2),
            Err(BoardError::InvalidDimensions {
                height: usize::MAX,
                width: 2
            })
        );
        // Product fits in usize but not in an allocation
        assert!(Board::new(usize::MAX, 1).is_err());
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = standard();
        assert_eq!(board.get(6, 0), None);
        assert_eq!(board.get(0, 7), None);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = standard();

        let row = board.drop_piece(3, Player::One).unwrap();
        assert_eq!(row, Some(5)); // Should land at bottom
        assert_eq!(board.get(5, 3), Some(Cell::Occupied(Player::One)));

        let row = board.drop_piece(3, Player::Two).unwrap();
        assert_eq!(row, Some(4)); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Some(Cell::Occupied(Player::Two)));
    }

    #[test]
    fn test_landing_row_tracks_column_height() {
        let mut board = standard();
        assert_eq!(board.landing_row(0).unwrap(), Some(5));
        board.drop_piece(0, Player::One).unwrap();
        assert_eq!(board.landing_row(0).unwrap(), Some(4));
        assert_eq!(board.landing_row(1).unwrap(), Some(5));
    }

    #[test]
    fn test_column_full() {
        let mut board = standard();

        for _ in 0..DEFAULT_HEIGHT {
            assert!(board.drop_piece(0, Player::One).unwrap().is_some());
        }

        assert!(board.is_column_full(0));
        assert_eq!(board.landing_row(0), Ok(None));

        let before = board.clone();
        assert_eq!(board.drop_piece(0, Player::Two), Ok(None));
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = standard();
        assert_eq!(
            board.drop_piece(7, Player::One),
            Err(MoveError::InvalidColumn { column: 7, width: 7 })
        );
        assert!(board.is_column_full(7));
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_full_board() {
        let mut board = standard();
        for col in 0..DEFAULT_WIDTH {
            for _ in 0..DEFAULT_HEIGHT {
                board.drop_piece(col, Player::One).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.piece_count(), DEFAULT_HEIGHT * DEFAULT_WIDTH);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = standard();
        for col in 0..4 {
            board.drop_piece(col, Player::One).unwrap();
        }
        assert!(board.check_for_win(Player::One));
        assert!(!board.check_for_win(Player::Two));
        assert!(board.is_winning_move(Position::new(5, 2)));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = standard();
        for col in 0..3 {
            board.drop_piece(col, Player::One).unwrap();
        }
        assert!(!board.check_for_win(Player::One));
        assert!(!board.is_winning_move(Position::new(5, 1)));
    }

    #[test]
    fn test_vertical_win_cells() {
        let mut board = standard();
        for _ in 0..4 {
            board.drop_piece(3, Player::Two).unwrap();
        }
        assert_eq!(
            board.winning_cells(Player::Two),
            Some([
                Position::new(2, 3),
                Position::new(3, 3),
                Position::new(4, 3),
                Position::new(5, 3),
            ])
        );
        assert!(board.is_winning_move(Position::new(2, 3)));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = standard();
        // Create diagonal / pattern
        board.drop_piece(0, Player::One).unwrap();

        board.drop_piece(1, Player::Two).unwrap();
        board.drop_piece(1, Player::One).unwrap();

        board.drop_piece(2, Player::Two).unwrap();
        board.drop_piece(2, Player::Two).unwrap();
        board.drop_piece(2, Player::One).unwrap();

        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        let row = board.drop_piece(3, Player::One).unwrap().unwrap();

        assert!(board.is_winning_move(Position::new(row, 3)));
        // Found from the top cell, scanning down-left
        assert_eq!(
            board.winning_cells(Player::One),
            Some([
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(4, 1),
                Position::new(5, 0),
            ])
        );
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = standard();
        // Create diagonal \ pattern
        board.drop_piece(6, Player::One).unwrap();

        board.drop_piece(5, Player::Two).unwrap();
        board.drop_piece(5, Player::One).unwrap();

        board.drop_piece(4, Player::Two).unwrap();
        board.drop_piece(4, Player::Two).unwrap();
        board.drop_piece(4, Player::One).unwrap();

        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        board.drop_piece(3, Player::Two).unwrap();
        let row = board.drop_piece(3, Player::One).unwrap().unwrap();

        assert!(board.is_winning_move(Position::new(row, 3)));
        assert!(board.check_for_win(Player::One));
    }

    #[test]
    fn test_runs_do_not_wrap_around_rows() {
        // Three at the end of row 0 and one at the start of row 1 are adjacent
        // in storage but not on the board.
        let board = Board::from_rows(&[
            "....111", //
            "1......",
            ".......",
            ".......",
        ]);
        assert!(!board.check_for_win(Player::One));
        assert!(!board.is_winning_move(Position::new(1, 0)));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_rows(&[
            "1121112", //
            ".......",
            ".......",
            ".......",
        ]);
        assert!(!board.check_for_win(Player::One));
        assert!(!board.check_for_win(Player::Two));
    }

    #[test]
    fn test_diagonal_at_right_edge() {
        let board = Board::from_rows(&[
            "......2", //
            ".....2.",
            "....2..",
            "...2...",
        ]);
        assert!(board.check_for_win(Player::Two));
        assert!(board.is_winning_move(Position::new(0, 6)));
        assert!(board.is_winning_move(Position::new(3, 3)));
    }

    #[test]
    fn test_long_run_wins() {
        let board = Board::from_rows(&[
            "2222222", //
            ".......",
            ".......",
            ".......",
        ]);
        assert!(board.check_for_win(Player::Two));
        assert!(board.is_winning_move(Position::new(0, 0)));
        assert!(board.is_winning_move(Position::new(0, 6)));
    }

    #[test]
    fn test_board_too_small_never_wins() {
        let mut board = Board::new(3, 3).unwrap();
        for col in 0..3 {
            for _ in 0..3 {
                board.drop_piece(col, Player::One).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(!board.check_for_win(Player::One));
    }

    #[test]
    fn test_empty_cell_is_not_winning_move() {
        let board = standard();
        assert!(!board.is_winning_move(Position::new(5, 0)));
        assert!(!board.is_winning_move(Position::new(9, 9)));
    }

    #[test]
    fn test_clear_keeps_dimensions() {
        let mut board = Board::new(4, 5).unwrap();
        board.drop_piece(4, Player::One).unwrap();
        board.clear();
        assert_eq!(board, Board::new(4, 5).unwrap());
    }

    #[test]
    fn test_rows_snapshot() {
        let mut board = standard();
        board.drop_piece(2, Player::Two).unwrap();
        let rows: Vec<&[Cell]> = board.rows().collect();
        assert_eq!(rows.len(), DEFAULT_HEIGHT);
        assert!(rows.iter().all(|r| r.len() == DEFAULT_WIDTH));
        assert_eq!(rows[5][2], Cell::Occupied(Player::Two));
    }
}
