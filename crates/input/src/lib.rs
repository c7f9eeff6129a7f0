//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Arrow keys,
//! WASD and vi-style HJKL all slide; `r` restarts; `q` or Ctrl-C quits.

pub mod map;

pub use dmqh_types as types;

pub use map::{handle_key_event, should_quit};
