//! Core type definitions: board geometry, scores and piece kinds

/// Score in 224ths of a full army
pub type Score = u32;
pub const SCORE_MAX: Score = Score::MAX;

/// Denominator used when printing a score as a fraction
pub const SCORE_SCALE: Score = 224;

/// Piece values: knight 1/32, bishop 1/14, rook 1/8, king 1/16
pub const KNIGHT_VALUE: Score = 7;
pub const BISHOP_VALUE: Score = 16;
pub const ROOK_VALUE: Score = 28;
pub const KING_VALUE: Score = 14;

/// Counter type for line and square populations
pub type Population = u8;

/// Standard board
pub const BOARD_WIDTH: usize = 8;
pub const BOARD_HEIGHT: usize = 8;

/// Storage capacity of a board in each dimension
pub const MAX_DIM: usize = 8;
pub const MAX_DIAGONALS: usize = 2 * MAX_DIM - 1;

/// Piece kinds, `Empty` meaning an unoccupied square
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Piece {
    #[default]
    Empty,
    Knight,
    Bishop,
    Rook,
    King,
}

impl Piece {
    /// Placeable pieces in the order the search tries them
    pub const PLACEABLE: [Piece; 4] = [Piece::Rook, Piece::Bishop, Piece::King, Piece::Knight];

    /// Point value of the piece
    #[inline]
    pub const fn value(self) -> Score {
        match self {
            Piece::Empty => 0,
            Piece::Knight => KNIGHT_VALUE,
            Piece::Bishop => BISHOP_VALUE,
            Piece::Rook => ROOK_VALUE,
            Piece::King => KING_VALUE,
        }
    }

    /// Diagram symbol
    pub const fn symbol(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::King => 'K',
        }
    }

    /// Parse a diagram symbol
    pub fn from_symbol(c: char) -> Option<Piece> {
        match c {
            '.' => Some(Piece::Empty),
            'N' | 'n' => Some(Piece::Knight),
            'B' | 'b' => Some(Piece::Bishop),
            'R' | 'r' => Some(Piece::Rook),
            'K' | 'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Get piece name
    pub fn name(self) -> &'static str {
        const NAMES: [&str; 5] = ["Empty", "Knight", "Bishop", "Rook", "King"];
        NAMES[self as usize]
    }
}

/// Board dimensions plus scan-order and diagonal numbering
///
/// Squares are scanned row-major: `index = row * width + column`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dims {
    width: usize,
    height: usize,
}

impl Dims {
    /// Create dimensions, or None if either side is outside `1..=MAX_DIM`
    pub const fn new(width: usize, height: usize) -> Option<Self> {
        if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
            return None;
        }
        Some(Dims { width, height })
    }

    /// The standard 8x8 board
    pub const fn standard() -> Self {
        Dims {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
        }
    }

    #[inline]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of squares, which is also the terminal scan index
    #[inline]
    pub const fn squares(&self) -> usize {
        self.width * self.height
    }

    /// Number of diagonals in each orientation
    #[inline]
    pub const fn diagonals(&self) -> usize {
        self.width + self.height - 1
    }

    #[inline]
    pub const fn row_of(&self, index: usize) -> usize {
        index / self.width
    }

    #[inline]
    pub const fn column_of(&self, index: usize) -> usize {
        index % self.width
    }

    #[inline]
    pub const fn index_of(&self, row: usize, column: usize) -> usize {
        row * self.width + column
    }

    /// "\" diagonal through a square
    #[inline]
    pub const fn downward_diagonal(&self, row: usize, column: usize) -> usize {
        (self.width - 1) + row - column
    }

    /// "/" diagonal through a square
    #[inline]
    pub const fn upward_diagonal(&self, row: usize, column: usize) -> usize {
        row + column
    }

    /// Check whether signed coordinates fall on the board
    #[inline]
    pub fn contains(&self, row: isize, column: isize) -> bool {
        row >= 0 && column >= 0 && (row as usize) < self.height && (column as usize) < self.width
    }
}

impl Default for Dims {
    fn default() -> Self {
        Dims::standard()
    }
}

impl std::fmt::Display for Dims {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
