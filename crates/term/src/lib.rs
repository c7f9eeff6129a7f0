//! Terminal "game renderer" module.
//!
//! Renders the puzzle into a simple framebuffer and flushes it to a terminal
//! backend. The engine never sees any of this; the view reads a
//! [`core::GameSnapshot`] and the most recent [`types::GameEvents`].

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use dmqh_core as core;
pub use dmqh_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{highlight_at, tile_colors, AnchorY, GameView, Highlight, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
