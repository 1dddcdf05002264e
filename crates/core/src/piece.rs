//! Active piece - the falling piece's shape, orientation and anchor
//!
//! A piece is falling until it locks; locking writes it into the grid and the
//! session immediately replaces it with a freshly spawned one.

use tracing::debug;

use crate::grid::Grid;
use crate::rng::{PieceQueue, PieceSource};
use crate::shapes::{decode, shape};
use crate::types::{ShapeKind, INITIAL_SHAPE_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivePiece {
    kind: ShapeKind,
    /// Own copy of the shape offsets; rotation rewrites these in place.
    offsets: [u8; 4],
    x: i32,
    y: i32,
}

impl ActivePiece {
    /// Place `kind` in its table orientation with its anchor at `(x, y)`.
    pub fn new(kind: ShapeKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            offsets: shape(kind).offsets,
            x,
            y,
        }
    }

    /// First piece of a session: one of the classic seven, centered.
    ///
    /// This piece does not come from the queue.
    pub fn initial(rng: &mut impl PieceSource, grid_width: usize) -> Self {
        let kind = ShapeKind::ALL[rng.next_below(INITIAL_SHAPE_COUNT) % INITIAL_SHAPE_COUNT];
        Self::new(kind, grid_width as i32 / 2 - 1, 0)
    }

    /// Take the next kind from the queue and drop it at a random column.
    ///
    /// The anchor column is uniform in `[0, grid_width - 2)` and the row is 0.
    /// Callers follow up with a zero-delta [`ActivePiece::try_move`] to detect
    /// a blocked spawn.
    pub fn spawn(queue: &mut PieceQueue, rng: &mut impl PieceSource, grid_width: usize) -> Self {
        let kind = queue.advance(rng);
        let x = rng.next_below(grid_width.saturating_sub(2).max(1)) as i32;
        debug!(kind = kind.as_str(), x, "spawned piece");
        Self::new(kind, x, 0)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn offsets(&self) -> [u8; 4] {
        self.offsets
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Absolute `(row, col)` of each cell, shifted by `(dx, dy)`.
    fn cells_at(&self, dx: i32, dy: i32) -> [(i32, i32); 4] {
        self.offsets.map(|o| {
            let (c, r) = decode(o);
            (self.y + r + dy, self.x + c + dx)
        })
    }

    /// Absolute `(row, col)` of each cell.
    pub fn cells(&self) -> [(i32, i32); 4] {
        self.cells_at(0, 0)
    }

    /// Whether the piece would be legal after shifting by `(dx, dy)`.
    ///
    /// Only the side walls, the floor and locked cells block. Cells above
    /// the top edge are allowed.
    pub fn fits(&self, grid: &Grid, dx: i32, dy: i32) -> bool {
        let width = grid.width() as i32;
        let height = grid.height() as i32;
        self.cells_at(dx, dy).iter().all(|&(row, col)| {
            if col < 0 || col >= width || row >= height {
                return false;
            }
            row < 0 || !grid.is_occupied(row, col)
        })
    }

    /// Shift by `(dx, dy)` if legal. Returns false and leaves the piece
    /// untouched otherwise.
    pub fn try_move(&mut self, grid: &Grid, dx: i32, dy: i32) -> bool {
        if !self.fits(grid, dx, dy) {
            return false;
        }
        self.x += dx;
        self.y += dy;
        true
    }

    /// Simplified quarter turn: `(x, y) -> y + 2 * (1 - x)` on every offset.
    ///
    /// The square never rotates. No collision or bounds check is made, so a
    /// rotation may leave the piece overlapping locked cells or a wall.
    pub fn rotate(&mut self) {
        if self.kind.is_rotation_exempt() {
            return;
        }
        for o in &mut self.offsets {
            let (c, r) = decode(*o);
            *o = (r + 2 * (1 - c)) as u8;
        }
    }

    /// Write this piece into the grid. Returns the number of cells written.
    pub fn lock_into(&self, grid: &mut Grid) -> usize {
        grid.lock(&self.cells(), self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;

    #[test]
    fn cells_combine_anchor_and_offsets() {
        let piece = ActivePiece::new(ShapeKind::T, 3, 2);
        // T = 3,5,4,7 -> (c,r) (1,1) (1,2) (0,2) (1,3)
        assert_eq!(piece.cells(), [(3, 4), (4, 4), (4, 3), (5, 4)]);
    }

    #[test]
    fn rotation_applies_offset_formula() {
        let mut piece = ActivePiece::new(ShapeKind::I, 3, 0);
        piece.rotate();
        // 1,3,5,7 all sit in column 1: new = row.
        assert_eq!(piece.offsets(), [0, 1, 2, 3]);
        piece.rotate();
        // 0 -> 2, 1 -> 0, 2 -> 3, 3 -> 1
        assert_eq!(piece.offsets(), [2, 0, 3, 1]);
    }

    #[test]
    fn square_never_rotates() {
        let mut piece = ActivePiece::new(ShapeKind::O, 4, 5);
        let before = piece.clone();
        for _ in 0..8 {
            piece.rotate();
            assert_eq!(piece, before);
        }
    }

    #[test]
    fn rotation_ignores_walls() {
        let grid = Grid::new(6, 10);
        let mut piece = ActivePiece::new(ShapeKind::I, -1, 0);
        assert!(piece.fits(&grid, 0, 0));
        piece.rotate();
        assert!(!piece.fits(&grid, 0, 0));
        assert_eq!(piece.x(), -1);
    }

    #[test]
    fn rejected_move_leaves_piece_untouched() {
        let mut grid = Grid::new(6, 10);
        grid.set(5, 4, 1);
        let mut piece = ActivePiece::new(ShapeKind::I, 3, 0);
        let before = piece.clone();
        assert!(!piece.try_move(&grid, 0, 2));
        assert_eq!(piece, before);
        assert!(!piece.try_move(&grid, 2, 0));
        assert_eq!(piece, before);
        assert!(piece.try_move(&grid, -1, 0));
        assert_eq!(piece.x(), 2);
    }

    #[test]
    fn cells_above_the_top_are_allowed() {
        let grid = Grid::new(6, 10);
        let piece = ActivePiece::new(ShapeKind::Slab, 2, -3);
        assert!(piece.fits(&grid, 0, 0));
        assert!(piece.fits(&grid, 0, -5));
    }

    #[test]
    fn spawn_advances_queue_and_picks_column() {
        // queue fill: 0,1,2,3; advance draws 4; column draw 7 % (10 - 2) = 7.
        let mut rng = ScriptedSource::new(vec![0, 1, 2, 3, 4, 7]);
        let mut queue = PieceQueue::new(&mut rng);
        let piece = ActivePiece::spawn(&mut queue, &mut rng, 10);
        assert_eq!(piece.kind(), ShapeKind::I);
        assert_eq!((piece.x(), piece.y()), (7, 0));
        assert_eq!(queue.front(), ShapeKind::Z);
        assert_eq!(queue.peek_all().last(), Some(ShapeKind::L));
    }

    #[test]
    fn initial_piece_is_centered_classic_shape() {
        let mut rng = ScriptedSource::new(vec![8]);
        let piece = ActivePiece::initial(&mut rng, 10);
        // 8 % 7 = 1
        assert_eq!(piece.kind(), ShapeKind::Z);
        assert_eq!((piece.x(), piece.y()), (4, 0));
    }

    #[test]
    fn lock_into_writes_four_cells() {
        let mut grid = Grid::new(6, 10);
        let piece = ActivePiece::new(ShapeKind::L, 0, 6);
        assert_eq!(piece.lock_into(&mut grid), 4);
        for (row, col) in piece.cells() {
            assert_eq!(grid.get(row, col), Some(ShapeKind::L.cell_value()));
        }
    }
}
