//! Terminal display surface.
//!
//! The game is drawn into a [`FrameBuffer`] of styled cells by [`GameView`]
//! and presented by [`TerminalRenderer`]. Keeping the view pure lets tests
//! inspect frames without a terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer};
pub use game_view::{GameView, Viewport, STATUS_ROWS};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
