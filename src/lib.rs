//! Headless grid raycaster.
//!
//! Renders first-person views of a tile map by marching one ray per screen
//! column, and writes each frame through an [`sink::ImageSink`].
//!
//! Modules:
//! - `core`: map grid and observer pose
//! - `render`: packed colors, framebuffer and the ray caster
//! - `config`: everything a run needs, with the reference scene as default
//! - `sequencer`: the frame loop
//! - `sink`: frame output

pub mod config;
pub mod core;
pub mod error;
pub mod render;
pub mod sequencer;
pub mod sink;

pub use config::{BoundaryPolicy, Palette, RenderConfig};
pub use crate::core::maze::{Cell, Maze};
pub use crate::core::player::Player;
pub use error::{RenderError, Result};
pub use render::casters::{build_base_layer, cast_ray, render_frame, strip_height, RayHit};
pub use render::color::Color;
pub use render::framebuffer::{Block, Framebuffer};
pub use sequencer::FrameSequencer;
pub use sink::{FileSink, ImageFormat, ImageSink, MemorySink};
