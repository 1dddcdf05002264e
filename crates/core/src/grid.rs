//! Grid module - the playfield occupancy state
//!
//! The grid is `width x height` cells stored as a flat row-major vector.
//! Each cell holds a [`CellValue`]: `0` when empty, otherwise the shape index
//! plus one, which doubles as the color lookup for rendering.
//!
//! Coordinates are `(row, col)`; row 0 is the top of the playfield.

use tracing::warn;

use crate::types::{CellValue, ShapeKind, EMPTY};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    /// Row-major cells (row * width + col)
    cells: Vec<CellValue>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    /// Build a grid from explicit rows. All rows must share one width.
    pub fn from_rows(rows: &[Vec<CellValue>]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == width),
            "ragged rows in grid fixture"
        );
        Self {
            width,
            height,
            cells: rows.concat(),
        }
    }

    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell value at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: i32, col: i32) -> Option<CellValue> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Whether `(row, col)` holds a locked cell.
    ///
    /// Callers only ask about in-range coordinates; anything outside the grid
    /// reads as empty.
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        debug_assert!(
            self.index(row, col).is_some(),
            "is_occupied({}, {}) outside {}x{} grid",
            row,
            col,
            self.width,
            self.height
        );
        matches!(self.get(row, col), Some(v) if v != EMPTY)
    }

    /// Write `value` at `(row, col)`. Returns false outside the grid.
    pub fn set(&mut self, row: i32, col: i32, value: CellValue) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Commit a piece's cells with the kind's cell value.
    ///
    /// Cells outside the grid are dropped; an unchecked rotation can leave a
    /// piece partly outside before it locks. Returns the number of cells
    /// written.
    pub fn lock(&mut self, cells: &[(i32, i32)], kind: ShapeKind) -> usize {
        let value = kind.cell_value();
        let mut written = 0;
        for &(row, col) in cells {
            if self.set(row, col, value) {
                written += 1;
            }
        }
        if written < cells.len() {
            warn!(
                kind = kind.as_str(),
                dropped = cells.len() - written,
                "locked piece had cells outside the grid"
            );
        }
        written
    }

    /// Whether every column of `row` is occupied.
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map_or(false, |cells| cells.iter().all(|&v| v != EMPTY))
    }

    /// Remove `row`, shift every row above it down by one and empty the top.
    pub fn clear_row(&mut self, row: usize) {
        if row >= self.height {
            return;
        }
        let w = self.width;
        self.cells.copy_within(0..row * w, w);
        self.cells[..w].fill(EMPTY);
    }

    /// Clear every full row and return how many were removed.
    ///
    /// Rows are scanned top to bottom. A full row pulls everything above it
    /// down by one and the scan carries on below it, so stacked full rows are
    /// each removed in turn.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        for row in 0..self.height {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            }
        }
        cleared
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> Option<&[CellValue]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> + '_ {
        // `max(1)` keeps `chunks` happy for a zero-width grid.
        self.cells.chunks(self.width.max(1))
    }

    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != EMPTY).count()
    }

    /// Convert to nested rows for assertions and debugging.
    pub fn to_rows(&self) -> Vec<Vec<CellValue>> {
        self.rows().map(<[CellValue]>::to_vec).collect()
    }
}
