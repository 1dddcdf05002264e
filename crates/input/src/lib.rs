//! Terminal input module.
//!
//! Maps `crossterm` events onto [`crate::types::GameAction`]. Bindings are
//! fixed; there is no key remapping.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_event, handle_key_event};
