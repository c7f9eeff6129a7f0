//! dmqh (workspace facade crate).
//!
//! Re-exports the member crates as `dmqh::{core, input, term, types}` and
//! hosts the runtime configuration shared by the binary and its tests.

pub mod config;
pub mod logging;

pub use dmqh_core as core;
pub use dmqh_input as input;
pub use dmqh_term as term;
pub use dmqh_types as types;

pub use config::Config;
