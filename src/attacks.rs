//! Attack geometry
//!
//! The search visits squares in row-major order, so a piece only needs to
//! project its king/knight reach onto squares that come later in that order.
//! Squares before it have already been decided and are never looked at again.

use super::types::*;

/// King steps that land later in scan order
pub const KING_FORWARD: [(isize, isize); 4] = [(0, 1), (1, -1), (1, 0), (1, 1)];

/// Knight jumps that land later in scan order
pub const KNIGHT_FORWARD: [(isize, isize); 4] = [(1, -2), (1, 2), (2, -1), (2, 1)];

/// On-board squares reached from `(row, column)` by the given offsets
#[inline]
pub fn targets(
    dims: Dims,
    row: usize,
    column: usize,
    offsets: &'static [(isize, isize)],
) -> impl Iterator<Item = (usize, usize)> {
    offsets.iter().filter_map(move |&(dy, dx)| {
        let r = row as isize + dy;
        let c = column as isize + dx;
        if dims.contains(r, c) {
            Some((r as usize, c as usize))
        } else {
            None
        }
    })
}

/// Forward king targets of a square
#[inline]
pub fn king_forward(dims: Dims, row: usize, column: usize) -> impl Iterator<Item = (usize, usize)> {
    targets(dims, row, column, &KING_FORWARD)
}

/// Forward knight targets of a square
#[inline]
pub fn knight_forward(
    dims: Dims,
    row: usize,
    column: usize,
) -> impl Iterator<Item = (usize, usize)> {
    targets(dims, row, column, &KNIGHT_FORWARD)
}

/// Whether `piece` standing on `from` attacks `to`, with unobstructed rays
///
/// Direction-independent; used to validate finished boards.
pub fn attacks(piece: Piece, from: (usize, usize), to: (usize, usize)) -> bool {
    if from == to {
        return false;
    }
    let dy = from.0.abs_diff(to.0);
    let dx = from.1.abs_diff(to.1);
    match piece {
        Piece::Empty => false,
        Piece::Rook => dy == 0 || dx == 0,
        Piece::Bishop => dy == dx,
        Piece::King => dy <= 1 && dx <= 1,
        Piece::Knight => (dy == 1 && dx == 2) || (dy == 2 && dx == 1),
    }
}
