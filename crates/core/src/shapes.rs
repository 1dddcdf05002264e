//! Shape table - the nine piece shapes and their colors
//!
//! Offsets use the 2-wide encoding described in [`crate::types`]: column
//! `o % 2`, row `o / 2`.

use crate::types::{Rgb, ShapeKind, SHAPE_COUNT};

/// One static shape-table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub offsets: [u8; 4],
    pub color: Rgb,
}

const SHAPES: [Shape; SHAPE_COUNT] = [
    // I
    Shape {
        offsets: [1, 3, 5, 7],
        color: Rgb::new(255, 0, 0),
    },
    // Z
    Shape {
        offsets: [2, 4, 5, 7],
        color: Rgb::new(0, 255, 0),
    },
    // S
    Shape {
        offsets: [3, 5, 4, 6],
        color: Rgb::new(0, 0, 255),
    },
    // T
    Shape {
        offsets: [3, 5, 4, 7],
        color: Rgb::new(255, 255, 0),
    },
    // L
    Shape {
        offsets: [2, 3, 5, 7],
        color: Rgb::new(0, 255, 255),
    },
    // J
    Shape {
        offsets: [3, 5, 7, 6],
        color: Rgb::new(255, 165, 0),
    },
    // O
    Shape {
        offsets: [2, 3, 4, 5],
        color: Rgb::new(128, 0, 128),
    },
    // Hook
    Shape {
        offsets: [2, 3, 4, 6],
        color: Rgb::new(255, 105, 180),
    },
    // Slab
    Shape {
        offsets: [4, 5, 6, 7],
        color: Rgb::new(128, 128, 128),
    },
];

/// Shape-table entry for a kind.
pub fn shape(kind: ShapeKind) -> &'static Shape {
    &SHAPES[kind.index()]
}

/// Display color for a kind.
pub fn color(kind: ShapeKind) -> Rgb {
    shape(kind).color
}

/// Decode an offset into `(col, row)` within the 2-wide box.
#[inline(always)]
pub fn decode(offset: u8) -> (i32, i32) {
    ((offset % 2) as i32, (offset / 2) as i32)
}
