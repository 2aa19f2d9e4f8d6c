//! Board occupancy and incremental attack state - allocation-free
//!
//! All storage is sized for the largest supported board, so a `Board` is a
//! plain `Copy` value and snapshots are a single memcpy.

use super::attacks::{self, king_forward, knight_forward};
use super::lines::LineSet;
use super::types::*;

type Grid<T> = [[T; MAX_DIM]; MAX_DIM];

/// Board state maintained incrementally by `place` and `remove`
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    dims: Dims,
    cells: Grid<Piece>,

    row_population: [Population; MAX_DIM],
    column_population: [Population; MAX_DIM],
    downward_population: [Population; MAX_DIAGONALS],
    upward_population: [Population; MAX_DIAGONALS],

    /// Lines holding a rook (rows, columns) or bishop (diagonals)
    rows_attacked: LineSet,
    columns_attacked: LineSet,
    downward_attacked: LineSet,
    upward_attacked: LineSet,

    /// Number of placed kings/knights reaching a square
    spot_attacks: Grid<Population>,

    /// Number of placed pieces a king on a given square would attack
    king_population: Grid<Population>,

    /// Number of placed pieces a knight on a given square would attack
    knight_population: Grid<Population>,

    score: Score,
}

impl Board {
    /// Create an empty board
    pub const fn new(dims: Dims) -> Self {
        Board {
            dims,
            cells: [[Piece::Empty; MAX_DIM]; MAX_DIM],
            row_population: [0; MAX_DIM],
            column_population: [0; MAX_DIM],
            downward_population: [0; MAX_DIAGONALS],
            upward_population: [0; MAX_DIAGONALS],
            rows_attacked: LineSet::new(),
            columns_attacked: LineSet::new(),
            downward_attacked: LineSet::new(),
            upward_attacked: LineSet::new(),
            spot_attacks: [[0; MAX_DIM]; MAX_DIM],
            king_population: [[0; MAX_DIM]; MAX_DIM],
            knight_population: [[0; MAX_DIM]; MAX_DIM],
            score: 0,
        }
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Total value of the placed pieces
    #[inline]
    pub fn score(&self) -> Score {
        self.score
    }

    #[inline]
    pub fn piece_at(&self, row: usize, column: usize) -> Piece {
        self.cells[row][column]
    }

    /// Check whether no piece is on the board
    pub fn is_empty(&self) -> bool {
        self.num_pieces() == 0
    }

    /// Number of placed pieces
    pub fn num_pieces(&self) -> usize {
        self.row_population[..self.dims.height()]
            .iter()
            .map(|&n| n as usize)
            .sum()
    }

    /// Number of placed pieces of one kind
    pub fn count(&self, piece: Piece) -> usize {
        self.occupied().filter(|&(_, _, p)| p == piece).count()
    }

    /// Iterate over occupied squares in scan order as `(row, column, piece)`
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, Piece)> + '_ {
        let dims = self.dims;
        (0..dims.squares()).filter_map(move |index| {
            let row = dims.row_of(index);
            let column = dims.column_of(index);
            match self.cells[row][column] {
                Piece::Empty => None,
                piece => Some((row, column, piece)),
            }
        })
    }

    #[inline]
    pub fn row_population(&self, row: usize) -> Population {
        self.row_population[row]
    }

    #[inline]
    pub fn column_population(&self, column: usize) -> Population {
        self.column_population[column]
    }

    #[inline]
    pub fn downward_population(&self, diagonal: usize) -> Population {
        self.downward_population[diagonal]
    }

    #[inline]
    pub fn upward_population(&self, diagonal: usize) -> Population {
        self.upward_population[diagonal]
    }

    #[inline]
    pub fn row_attacked(&self, row: usize) -> bool {
        self.rows_attacked.have(row)
    }

    #[inline]
    pub fn column_attacked(&self, column: usize) -> bool {
        self.columns_attacked.have(column)
    }

    #[inline]
    pub fn downward_attacked(&self, diagonal: usize) -> bool {
        self.downward_attacked.have(diagonal)
    }

    #[inline]
    pub fn upward_attacked(&self, diagonal: usize) -> bool {
        self.upward_attacked.have(diagonal)
    }

    #[inline]
    pub fn spot_attacks(&self, row: usize, column: usize) -> Population {
        self.spot_attacks[row][column]
    }

    #[inline]
    pub fn king_population(&self, row: usize, column: usize) -> Population {
        self.king_population[row][column]
    }

    #[inline]
    pub fn knight_population(&self, row: usize, column: usize) -> Population {
        self.knight_population[row][column]
    }

    /// Put a piece on an empty square and project its attacks forward
    ///
    /// Legality is the caller's business (see `can_place`).
    pub fn place(&mut self, row: usize, column: usize, piece: Piece) {
        debug_assert!(piece != Piece::Empty, "cannot place an empty piece");
        debug_assert_eq!(
            self.cells[row][column],
            Piece::Empty,
            "square ({}, {}) already occupied",
            row,
            column
        );

        let down = self.dims.downward_diagonal(row, column);
        let up = self.dims.upward_diagonal(row, column);

        self.row_population[row] += 1;
        self.column_population[column] += 1;
        self.downward_population[down] += 1;
        self.upward_population[up] += 1;
        self.cells[row][column] = piece;

        for (r, c) in king_forward(self.dims, row, column) {
            self.king_population[r][c] += 1;
        }
        for (r, c) in knight_forward(self.dims, row, column) {
            self.knight_population[r][c] += 1;
        }

        self.score += piece.value();

        match piece {
            Piece::Rook => {
                self.rows_attacked.add(row);
                self.columns_attacked.add(column);
            }
            Piece::Bishop => {
                self.downward_attacked.add(down);
                self.upward_attacked.add(up);
            }
            Piece::King => {
                for (r, c) in king_forward(self.dims, row, column) {
                    self.spot_attacks[r][c] += 1;
                }
            }
            Piece::Knight => {
                for (r, c) in knight_forward(self.dims, row, column) {
                    self.spot_attacks[r][c] += 1;
                }
            }
            Piece::Empty => {}
        }
    }

    /// Exact inverse of `place`
    pub fn remove(&mut self, row: usize, column: usize, piece: Piece) {
        debug_assert_eq!(
            self.cells[row][column],
            piece,
            "square ({}, {}) does not hold a {}",
            row,
            column,
            piece.name()
        );

        let down = self.dims.downward_diagonal(row, column);
        let up = self.dims.upward_diagonal(row, column);

        self.row_population[row] -= 1;
        self.column_population[column] -= 1;
        self.downward_population[down] -= 1;
        self.upward_population[up] -= 1;
        self.cells[row][column] = Piece::Empty;

        for (r, c) in king_forward(self.dims, row, column) {
            self.king_population[r][c] -= 1;
        }
        for (r, c) in knight_forward(self.dims, row, column) {
            self.knight_population[r][c] -= 1;
        }

        self.score -= piece.value();

        match piece {
            // At most one rook per line and one bishop per diagonal, so clearing is exact
            Piece::Rook => {
                debug_assert!(
                    self.row_population[row] == 0 && self.column_population[column] == 0,
                    "rook at ({}, {}) shared its row or column",
                    row,
                    column
                );
                self.rows_attacked.remove(row);
                self.columns_attacked.remove(column);
            }
            Piece::Bishop => {
                debug_assert!(
                    self.downward_population[down] == 0 && self.upward_population[up] == 0,
                    "bishop at ({}, {}) shared a diagonal",
                    row,
                    column
                );
                self.downward_attacked.remove(down);
                self.upward_attacked.remove(up);
            }
            Piece::King => {
                for (r, c) in king_forward(self.dims, row, column) {
                    self.spot_attacks[r][c] -= 1;
                }
            }
            Piece::Knight => {
                for (r, c) in knight_forward(self.dims, row, column) {
                    self.spot_attacks[r][c] -= 1;
                }
            }
            Piece::Empty => {}
        }
    }

    /// Check whether a square is attacked by any piece already on the board
    #[inline]
    pub fn is_attacked(&self, row: usize, column: usize) -> bool {
        self.rows_attacked.have(row)
            || self.columns_attacked.have(column)
            || self
                .downward_attacked
                .have(self.dims.downward_diagonal(row, column))
            || self.upward_attacked.have(self.dims.upward_diagonal(row, column))
            || self.spot_attacks[row][column] != 0
    }

    /// Check whether a piece on the square would itself attack a placed piece
    ///
    /// Only meaningful on a square that `is_attacked` has cleared.
    #[inline]
    pub fn attacks_nothing(&self, row: usize, column: usize, piece: Piece) -> bool {
        match piece {
            Piece::Rook => self.row_population[row] == 0 && self.column_population[column] == 0,
            Piece::Bishop => {
                self.downward_population[self.dims.downward_diagonal(row, column)] == 0
                    && self.upward_population[self.dims.upward_diagonal(row, column)] == 0
            }
            Piece::King => self.king_population[row][column] == 0,
            Piece::Knight => self.knight_population[row][column] == 0,
            Piece::Empty => true,
        }
    }

    /// Check whether `piece` may go on the (empty) square
    #[inline]
    pub fn can_place(&self, row: usize, column: usize, piece: Piece) -> bool {
        !self.is_attacked(row, column) && self.attacks_nothing(row, column, piece)
    }

    /// Rebuild every counter and flag from the cells and compare
    pub fn is_consistent(&self) -> bool {
        let mut rebuilt = Board::new(self.dims);
        for (row, column, piece) in self.occupied() {
            rebuilt.place(row, column, piece);
        }
        rebuilt == *self
    }

    /// Pairwise check that no placed piece attacks another
    pub fn is_non_attacking(&self) -> bool {
        let pieces: Vec<_> = self.occupied().collect();
        for (i, &(r1, c1, p1)) in pieces.iter().enumerate() {
            for &(r2, c2, p2) in &pieces[i + 1..] {
                if attacks::attacks(p1, (r1, c1), (r2, c2))
                    || attacks::attacks(p2, (r2, c2), (r1, c1))
                {
                    return false;
                }
            }
        }
        true
    }

    /// Parse a diagram: one line per row, one symbol per square
    ///
    /// Symbols may be separated by whitespace. Pieces are placed in scan
    /// order without any legality check.
    pub fn from_diagram(s: &str) -> Option<Self> {
        let rows: Vec<Vec<Piece>> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(Piece::from_symbol)
                    .collect::<Option<Vec<_>>>()
            })
            .collect::<Option<_>>()?;

        let width = rows.first()?.len();
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let dims = Dims::new(width, rows.len())?;

        let mut board = Board::new(dims);
        for (row, pieces) in rows.iter().enumerate() {
            for (column, &piece) in pieces.iter().enumerate() {
                if piece != Piece::Empty {
                    board.place(row, column, piece);
                }
            }
        }
        Some(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(Dims::standard())
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Board({}, score={})", self.dims, self.score)?;
        write!(f, "{}", self)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.dims.height() {
            for column in 0..self.dims.width() {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self.cells[row][column].symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rook_lines() {
        let mut board = Board::default();
        board.place(2, 5, Piece::Rook);

        assert_eq!(board.row_population(2), 1);
        assert_eq!(board.column_population(5), 1);
        assert!(board.row_attacked(2));
        assert!(board.column_attacked(5));
        assert!(!board.downward_attacked(board.dims().downward_diagonal(2, 5)));
        assert_eq!(board.score(), ROOK_VALUE);

        board.remove(2, 5, Piece::Rook);
        assert_eq!(board.row_population(2), 0);
        assert_eq!(board.column_population(5), 0);
        assert!(!board.row_attacked(2));
        assert!(!board.column_attacked(5));
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_bishop_lines() {
        let mut board = Board::default();
        board.place(1, 1, Piece::Bishop);

        let dims = board.dims();
        assert!(board.downward_attacked(dims.downward_diagonal(1, 1)));
        assert!(board.upward_attacked(dims.upward_diagonal(1, 1)));
        assert!(!board.row_attacked(1));
        assert!(board.is_attacked(6, 6));
        assert!(board.is_attacked(2, 0));
        assert!(!board.is_attacked(2, 1));
    }

    #[test]
    fn test_king_counters() {
        let mut board = Board::default();
        board.place(3, 3, Piece::King);

        // Forward neighbours are attacked, squares behind are never projected
        for (r, c) in [(3, 4), (4, 2), (4, 3), (4, 4)] {
            assert_eq!(board.spot_attacks(r, c), 1);
            assert_eq!(board.king_population(r, c), 1);
            assert!(board.is_attacked(r, c));
        }
        assert_eq!(board.spot_attacks(2, 3), 0);
        assert_eq!(board.spot_attacks(5, 3), 0);

        // A knight jump away is free for anything but a knight
        assert!(!board.is_attacked(4, 5));
        assert_eq!(board.knight_population(4, 5), 1);
        assert!(!board.can_place(4, 5, Piece::Knight));
        assert!(board.can_place(4, 5, Piece::King));
    }

    #[test]
    fn test_knight_counters() {
        let mut board = Board::default();
        board.place(0, 0, Piece::Knight);

        assert_eq!(board.spot_attacks(1, 2), 1);
        assert_eq!(board.spot_attacks(2, 1), 1);
        assert!(!board.is_attacked(0, 1));

        // A king next door would attack the knight
        assert_eq!(board.king_population(1, 1), 1);
        assert!(!board.can_place(1, 1, Piece::King));
        assert!(board.can_place(1, 1, Piece::Knight));
    }

    #[test]
    fn test_slider_population_constraints() {
        let mut board = Board::default();
        board.place(0, 3, Piece::Knight);

        // The knight does not flag its row, but a rook there would hit it
        assert!(!board.is_attacked(0, 6));
        assert!(!board.can_place(0, 6, Piece::Rook));
        assert!(board.can_place(0, 6, Piece::Bishop));

        // Same for a bishop on the knight's diagonal
        assert!(!board.is_attacked(3, 6));
        assert!(!board.can_place(3, 6, Piece::Bishop));
        assert!(board.can_place(3, 6, Piece::Rook));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "shared its row or column")]
    fn test_remove_rook_sharing_row_panics() {
        let mut board = Board::default();
        // Bypasses can_place, so both rooks sit on row 0
        board.place(0, 0, Piece::Rook);
        board.place(0, 5, Piece::Rook);
        board.remove(0, 5, Piece::Rook);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "shared a diagonal")]
    fn test_remove_bishop_sharing_diagonal_panics() {
        let mut board = Board::default();
        board.place(1, 1, Piece::Bishop);
        board.place(4, 4, Piece::Bishop);
        board.remove(4, 4, Piece::Bishop);
    }

    #[test]
    fn test_remove_lone_sliders_clears_flags() {
        let mut board = Board::default();
        board.place(0, 0, Piece::Rook);
        board.place(1, 2, Piece::Bishop);
        board.remove(1, 2, Piece::Bishop);
        board.remove(0, 0, Piece::Rook);
        assert_eq!(board, Board::default());
    }

    #[test]
    fn test_legality_is_pure() {
        let board = Board::from_diagram(
            "R . . .
             . . . .
             . . K .
             . . . .",
        )
        .unwrap();
        let snapshot = board;
        for index in 0..board.dims().squares() {
            let (r, c) = (board.dims().row_of(index), board.dims().column_of(index));
            for piece in Piece::PLACEABLE {
                assert_eq!(board.can_place(r, c, piece), board.can_place(r, c, piece));
            }
            assert_eq!(board.is_attacked(r, c), board.is_attacked(r, c));
        }
        assert_eq!(board, snapshot);
    }

    #[test]
    fn test_round_trip_sequence() {
        let dims = Dims::new(6, 5).unwrap();
        let mut board = Board::new(dims);
        let empty = board;
        let mut placed = Vec::new();

        // Greedily place whatever fits, cycling through kinds
        for index in 0..dims.squares() {
            let (r, c) = (dims.row_of(index), dims.column_of(index));
            let piece = Piece::PLACEABLE[index % 4];
            if board.can_place(r, c, piece) {
                board.place(r, c, piece);
                placed.push((r, c, piece));
                assert!(board.is_consistent());
                assert!(board.is_non_attacking());
            }
        }
        assert!(placed.len() > 2);

        while let Some((r, c, piece)) = placed.pop() {
            board.remove(r, c, piece);
            assert!(board.is_consistent());
        }
        assert_eq!(board, empty);
    }

    #[test]
    fn test_from_diagram_and_display() {
        let board = Board::from_diagram(
            "
            R . .
            . . N
            ",
        )
        .unwrap();
        assert_eq!(board.dims(), Dims::new(3, 2).unwrap());
        assert_eq!(board.piece_at(0, 0), Piece::Rook);
        assert_eq!(board.piece_at(1, 2), Piece::Knight);
        assert_eq!(board.score(), ROOK_VALUE + KNIGHT_VALUE);
        assert_eq!(board.num_pieces(), 2);
        assert_eq!(board.count(Piece::Rook), 1);
        assert!(board.is_consistent());
        assert_eq!(board.to_string(), "R . .\n. . N\n");

        // Contiguous symbols work too
        let compact = Board::from_diagram("R..\n..N").unwrap();
        assert_eq!(compact, board);
    }

    #[test]
    fn test_from_diagram_rejects() {
        assert!(Board::from_diagram("").is_none());
        assert!(Board::from_diagram("R . Q").is_none());
        assert!(Board::from_diagram("R . .\n. .").is_none());
        assert!(Board::from_diagram(". . . . . . . . .").is_none());
    }

    #[test]
    fn test_non_attacking_check() {
        let good = Board::from_diagram(
            "R . .
             . N .
             . . .",
        )
        .unwrap();
        assert!(good.is_non_attacking());

        // Rook ray hits the knight even though the knight does not hit back
        let bad = Board::from_diagram(
            "R . N
             . . .
             . . .",
        )
        .unwrap();
        assert!(!bad.is_non_attacking());

        let kings = Board::from_diagram("K K").unwrap();
        assert!(!kings.is_non_attacking());
    }
}
