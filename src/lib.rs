//! Army Solver - maximum-value non-attacking piece placement
//!
//! Places knights, bishops, rooks and kings on a rectangular board so that no
//! two pieces attack each other, maximizing the total piece value. Rook and
//! bishop rays are never blocked.
//!
//! The algorithm uses:
//! - Row-major scan with forward-only attack projection
//! - Incremental place/remove with exact undo
//! - Branch-and-bound pruning against a suffix bound table
//! - Bound table built back-to-front by the search itself
//!
//! # Example
//!
//! ```
//! use army_solver::{Dims, Solver};
//!
//! let solution = Solver::new(Dims::new(3, 3).unwrap()).solve();
//! assert_eq!(solution.score(), 84);
//! assert!(solution.board.is_non_attacking());
//! ```

pub mod attacks;
mod board;
mod lines;
mod search;
mod solver;
pub mod types;

pub use board::Board;
pub use search::{format_score, PrintReporter, Reporter, Search, SilentReporter};
pub use solver::{set_show_perf, Solution, Solver};
pub use types::{Dims, Piece, Population, Score, SCORE_MAX, SCORE_SCALE};
pub use types::{BISHOP_VALUE, KING_VALUE, KNIGHT_VALUE, ROOK_VALUE};
pub use types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_DIM};
