//! Main solver implementation
//!
//! Builds the suffix bound table from the last square to the first, running a
//! full bounded search at each starting index. The run at index 0 is the
//! complete search, so its best board is the answer.

use super::board::Board;
use super::search::{Reporter, Search, SilentReporter};
use super::types::*;

use std::sync::atomic::{AtomicBool, Ordering};
pub(crate) static SHOW_PERF: AtomicBool = AtomicBool::new(false);

/// Set show-perf mode (outputs [PERF] lines to stderr after each solve)
pub fn set_show_perf(enabled: bool) {
    SHOW_PERF.store(enabled, Ordering::Relaxed);
}

/// Result of a complete solve
#[derive(Clone, Debug)]
pub struct Solution {
    /// Best board found
    pub board: Board,
    /// `bounds[i]` is the best score using only squares `i..`; the last entry is 0
    pub bounds: Vec<Score>,
    /// Search nodes visited over all runs
    pub nodes: u64,
}

impl Solution {
    #[inline]
    pub fn score(&self) -> Score {
        self.board.score()
    }
}

/// Maximum-value non-attacking placement solver
#[derive(Clone, Copy, Debug)]
pub struct Solver {
    dims: Dims,
    pruning: bool,
}

impl Solver {
    /// Create a new solver
    pub fn new(dims: Dims) -> Self {
        Solver {
            dims,
            pruning: true,
        }
    }

    /// Solver for the standard 8x8 board
    pub fn standard() -> Self {
        Solver::new(Dims::standard())
    }

    /// Disable bound pruning (for debugging; makes every run exhaustive)
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Solve without reporting intermediate boards
    pub fn solve(&self) -> Solution {
        self.solve_with_reporter(&mut SilentReporter)
    }

    /// Solve, reporting every improvement of the best board
    pub fn solve_with_reporter<R: Reporter>(&self, reporter: &mut R) -> Solution {
        let start = std::time::Instant::now();
        let squares = self.dims.squares();

        // Loose until tightened; nothing is obtainable past the last square
        let mut bounds = vec![SCORE_MAX; squares + 1];
        bounds[squares] = 0;

        let mut board = Board::new(self.dims);
        let mut best = Board::new(self.dims);
        let mut nodes = 0;

        // Each run only consults bounds for indices above its start
        for index in (0..squares).rev() {
            let mut search = Search::new(&mut board, &mut best, &bounds, reporter)
                .with_pruning(self.pruning);
            let score = search.run(index);
            nodes += search.nodes();

            debug_assert!(board.is_empty(), "search left pieces on the board");
            bounds[index] = score;

            #[cfg(feature = "debug_search")]
            eprintln!(
                "bound[{}] = {} (nodes so far {})",
                index, bounds[index], nodes
            );
        }

        if SHOW_PERF.load(Ordering::Relaxed) {
            let elapsed = start.elapsed();
            let ns_per_node = if nodes > 0 {
                elapsed.as_nanos() as f64 / nodes as f64
            } else {
                0.0
            };
            eprintln!(
                "[PERF] board={}, nodes={}, time={:.3}s, ns/node={:.1}",
                self.dims,
                nodes,
                elapsed.as_secs_f64(),
                ns_per_node
            );
        }

        Solution {
            board: best,
            bounds,
            nodes,
        }
    }
}

impl Default for Solver {
    fn default() -> Self {
        Solver::standard()
    }
}
