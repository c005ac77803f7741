//! World data.
//!
//! Re-exports:
//! - `maze`: grid parsing, wall lookup, cell-to-pixel mapping
//! - `player`: observer pose

pub mod maze;
pub mod player;
