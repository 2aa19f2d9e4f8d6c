//! Branch-and-bound placement search
//!
//! Squares are visited in row-major scan order. At each square the search
//! tries every piece that fits, recursing after each, and then always tries
//! leaving the square empty. A subtree is cut as soon as the current score
//! plus the suffix bound for the remaining squares cannot beat the best
//! board found so far.

use super::board::Board;
use super::types::*;

/// Receives every strict improvement of the best board
pub trait Reporter {
    fn improved(&mut self, board: &Board);
}

impl<F: FnMut(&Board)> Reporter for F {
    fn improved(&mut self, board: &Board) {
        self(board)
    }
}

/// Reporter that discards improvements
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn improved(&mut self, _board: &Board) {}
}

/// Reporter that prints each improved board to stdout
#[derive(Clone, Copy, Debug, Default)]
pub struct PrintReporter;

impl Reporter for PrintReporter {
    fn improved(&mut self, board: &Board) {
        println!("{}", board);
        println!("{}", format_score(board.score()));
    }
}

/// Format a score as `Scores S/224 = F`
pub fn format_score(score: Score) -> String {
    format!(
        "Scores {}/{} = {:.3}",
        score,
        SCORE_SCALE,
        score as f64 / SCORE_SCALE as f64
    )
}

/// One bounded search over a suffix of the board
pub struct Search<'a, R: Reporter> {
    board: &'a mut Board,
    best: &'a mut Board,
    /// Suffix bounds, one per scan index plus the terminal entry
    bounds: &'a [Score],
    reporter: &'a mut R,
    pruning: bool,
    nodes: u64,
}

impl<'a, R: Reporter> Search<'a, R> {
    pub fn new(
        board: &'a mut Board,
        best: &'a mut Board,
        bounds: &'a [Score],
        reporter: &'a mut R,
    ) -> Self {
        debug_assert_eq!(board.dims(), best.dims());
        debug_assert_eq!(bounds.len(), board.dims().squares() + 1);
        Search {
            board,
            best,
            bounds,
            reporter,
            pruning: true,
            nodes: 0,
        }
    }

    /// Enable or disable bound pruning (disabling is for debugging only)
    pub fn with_pruning(mut self, enabled: bool) -> Self {
        self.pruning = enabled;
        self
    }

    /// Nodes visited so far
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search every placement on squares `start..`, on top of the current board
    pub fn run(&mut self, start: usize) -> Score {
        debug_assert!(start <= self.board.dims().squares());
        self.maximize(start);
        self.best.score()
    }

    fn maximize(&mut self, index: usize) {
        self.nodes += 1;

        if self.board.score() > self.best.score() {
            *self.best = *self.board;
            self.reporter.improved(&*self.best);
        }

        let dims = self.board.dims();
        if index == dims.squares() {
            return;
        }

        if self.pruning
            && self.board.score().saturating_add(self.bounds[index]) <= self.best.score()
        {
            return;
        }

        let row = dims.row_of(index);
        let column = dims.column_of(index);

        if !self.board.is_attacked(row, column) {
            for piece in Piece::PLACEABLE {
                if self.board.attacks_nothing(row, column, piece) {
                    self.board.place(row, column, piece);
                    self.maximize(index + 1);
                    self.board.remove(row, column, piece);
                }
            }
        }

        self.maximize(index + 1);
    }
}
