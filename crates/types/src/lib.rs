//! Shared types and constants - plain data used by every other crate
//!
//! Nothing here depends on terminal I/O or on the simulation itself, so the
//! same definitions serve the core logic, the input mapper and the renderer.
//!
//! # Shape encoding
//!
//! Every shape is four offsets in a 2-wide index space:
//!
//! ```text
//!   col: 0 1
//! row 0: 0 1
//! row 1: 2 3
//! row 2: 4 5
//! row 3: 6 7
//! ```
//!
//! so an offset `o` sits at column `o % 2`, row `o / 2`.
//!
//! # Timing
//!
//! Gravity is frame-coupled: the game loop counts frames and forces a
//! downward move every [`GRAVITY_TICKS`] frames. There is no wall-clock delta.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{ShapeKind, SHAPE_COUNT};
//!
//! assert_eq!(ShapeKind::ALL.len(), SHAPE_COUNT);
//! assert_eq!(ShapeKind::from_index(6), Some(ShapeKind::O));
//! assert_eq!(ShapeKind::O.cell_value(), 7);
//! ```

/// Number of distinct shapes in the shape table
pub const SHAPE_COUNT: usize = 9;

/// Number of upcoming pieces kept in the preview queue
pub const QUEUE_SIZE: usize = 4;

/// Frames between two forced gravity moves
pub const GRAVITY_TICKS: u32 = 100;

/// Default frame pacing for the terminal loop, in milliseconds
pub const FRAME_MS: u64 = 5;

/// Shapes drawn for the very first piece of a session (the classic seven)
pub const INITIAL_SHAPE_COUNT: usize = 7;

/// Smallest playable grid width (pieces are two columns wide)
pub const MIN_GRID_WIDTH: usize = 3;

/// Smallest playable grid height (pieces are up to four rows tall)
pub const MIN_GRID_HEIGHT: usize = 4;

/// Largest grid width; keeps the framed playfield within `u16` terminal columns
pub const MAX_GRID_WIDTH: usize = 1024;

/// Largest grid height; keeps the framed playfield within `u16` terminal rows
pub const MAX_GRID_HEIGHT: usize = 1024;

/// Cell value stored in the grid: 0 for empty, `kind.index() + 1` otherwise
pub type CellValue = u8;

/// Empty grid cell
pub const EMPTY: CellValue = 0;

/// The nine shape kinds, in shape-table order
///
/// The first seven are the usual tetrominoes. `Hook` and `Slab` are the two
/// extra shapes; `Slab` covers a 2x2 block but, unlike `O`, still rotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    Z,
    S,
    T,
    L,
    J,
    O,
    Hook,
    Slab,
}

impl ShapeKind {
    /// Every kind, indexed by its shape-table position
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [
        ShapeKind::I,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::O,
        ShapeKind::Hook,
        ShapeKind::Slab,
    ];

    /// Look up a kind by shape-table index
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_index(0), Some(ShapeKind::I));
    /// assert_eq!(ShapeKind::from_index(8), Some(ShapeKind::Slab));
    /// assert_eq!(ShapeKind::from_index(9), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Shape-table index (0..9)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Value written into the grid when a piece of this kind locks
    pub fn cell_value(self) -> CellValue {
        self.index() as CellValue + 1
    }

    /// Inverse of [`ShapeKind::cell_value`]; `None` for empty or invalid values
    pub fn from_cell_value(value: CellValue) -> Option<Self> {
        match value {
            EMPTY => None,
            v => Self::from_index(v as usize - 1),
        }
    }

    /// Whether rotation leaves this kind untouched
    pub fn is_rotation_exempt(self) -> bool {
        self == ShapeKind::O
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShapeKind::I => "i",
            ShapeKind::Z => "z",
            ShapeKind::S => "s",
            ShapeKind::T => "t",
            ShapeKind::L => "l",
            ShapeKind::J => "j",
            ShapeKind::O => "o",
            ShapeKind::Hook => "hook",
            ShapeKind::Slab => "slab",
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Player actions fed into the game session, one per key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down
    SoftDrop,
    /// Apply the simplified 90° rotation
    Rotate,
    /// Flip the paused flag
    TogglePause,
    /// End the session (quit key or window close)
    Quit,
}
