//! Rendering.
//!
//! Re-exports:
//! - `color`: packed 32-bit RGBA
//! - `framebuffer`: CPU framebuffer with clipped block writes
//! - `casters`: base layer, ray march and column renderer

pub mod color;
pub mod framebuffer;
pub mod casters;
