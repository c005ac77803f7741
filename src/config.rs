//! Render configuration.
//!
//! Everything the renderer needs is carried here; `RenderConfig::default()`
//! reproduces the reference scene.
use std::f32::consts::PI;

use crate::core::maze::Maze;
use crate::core::player::Player;
use crate::error::{RenderError, Result};
use crate::render::color::Color;

/// Upper bound on samples a single ray may take (`max_ray_distance / step_size`).
pub const MAX_RAY_SAMPLES: f32 = 1_000_000.0;

/// What a ray does when it leaves the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// The grid edge behaves like a wall and gets a strip.
    #[default]
    Wall,
    /// The ray is dropped and the column stays empty.
    Void,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub wall: Color,
    pub marker: Color,
    pub ray: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::LIGHT_GRAY,
            wall: Color::BLACK,
            marker: Color::RED,
            ray: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub maze: Maze,
    pub image_width: usize,
    pub image_height: usize,
    /// Pose before the first frame; `fov` lives here.
    pub start: Player,
    /// Applied to the position after the marker is drawn.
    pub start_offset: (f32, f32),
    pub frame_count: usize,
    /// Facing increment per frame (radians).
    pub angular_step: f32,
    /// March increment in map cells.
    pub step_size: f32,
    pub max_ray_distance: f32,
    pub boundary: BoundaryPolicy,
    pub palette: Palette,
    /// Side of the observer marker square, in pixels.
    pub marker_size: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            maze: Maze::reference(),
            image_width: 1024,
            image_height: 512,
            start: Player::new(3.5, 2.5, 1.3, PI / 3.0),
            start_offset: (0.08, 0.08),
            frame_count: 10,
            angular_step: 2.0 * PI / 360.0,
            step_size: 0.1,
            max_ray_distance: 16.0,
            boundary: BoundaryPolicy::Wall,
            palette: Palette::default(),
            marker_size: 5,
        }
    }
}

impl RenderConfig {
    pub fn with_maze(mut self, maze: Maze) -> Self {
        self.maze = maze;
        self
    }

    pub fn with_image_size(mut self, width: usize, height: usize) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    pub fn with_start(mut self, start: Player) -> Self {
        self.start = start;
        self
    }

    pub fn with_start_offset(mut self, dx: f32, dy: f32) -> Self {
        self.start_offset = (dx, dy);
        self
    }

    pub fn with_frame_count(mut self, frames: usize) -> Self {
        self.frame_count = frames;
        self
    }

    pub fn with_angular_step(mut self, step: f32) -> Self {
        self.angular_step = step;
        self
    }

    pub fn with_step_size(mut self, step: f32) -> Self {
        self.step_size = step;
        self
    }

    pub fn with_max_ray_distance(mut self, distance: f32) -> Self {
        self.max_ray_distance = distance;
        self
    }

    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Number of ray columns: the right half of the image.
    #[inline]
    pub fn ray_columns(&self) -> usize {
        self.image_width / 2
    }

    /// Pixel size of one map cell in the top-down view: `(width, height)`.
    #[inline]
    pub fn cell_size(&self) -> (usize, usize) {
        self.maze.cell_size(self.image_width, self.image_height)
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| -> Result<()> { Err(RenderError::InvalidConfig(msg)) };
        if self.image_width == 0 || self.image_height == 0 {
            return invalid(format!(
                "image must be non-empty, got {}x{}",
                self.image_width, self.image_height
            ));
        }
        if self.image_width < self.maze.cols() * 2 || self.image_height < self.maze.rows() {
            return invalid(format!(
                "image {}x{} too small for a {}x{} map",
                self.image_width,
                self.image_height,
                self.maze.rows(),
                self.maze.cols()
            ));
        }
        if !(self.step_size.is_finite() && self.step_size > 0.0) {
            return invalid(format!("step_size must be positive, got {}", self.step_size));
        }
        if !(self.max_ray_distance.is_finite() && self.max_ray_distance > 0.0) {
            return invalid(format!(
                "max_ray_distance must be positive, got {}",
                self.max_ray_distance
            ));
        }
        let samples = self.max_ray_distance / self.step_size;
        if !(samples <= MAX_RAY_SAMPLES) {
            return invalid(format!(
                "{} / {} needs {samples} samples per ray, limit is {MAX_RAY_SAMPLES}",
                self.max_ray_distance, self.step_size
            ));
        }
        if !(self.start.fov > 0.0 && self.start.fov < PI) {
            return invalid(format!("fov must be in (0, pi), got {}", self.start.fov));
        }
        let (dx, dy) = self.start_offset;
        let pose = [self.start.x, self.start.y, self.start.a, dx, dy, self.angular_step];
        if pose.iter().any(|v| !v.is_finite()) {
            return invalid("start pose, offset and angular step must be finite".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_reference_scene() {
        let cfg = RenderConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!((cfg.image_width, cfg.image_height), (1024, 512));
        assert_eq!(cfg.ray_columns(), 512);
        assert_eq!(cfg.cell_size(), (32, 32));
        assert_eq!(cfg.frame_count, 10);
        assert_eq!(cfg.boundary, BoundaryPolicy::Wall);
    }

    #[test]
    fn fine_steps_within_sample_budget_are_accepted() {
        let cfg = RenderConfig::default().with_step_size(1e-4);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_values() {
        let base = RenderConfig::default();
        let bad = [
            base.clone().with_image_size(0, 512),
            base.clone().with_image_size(31, 512),
            base.clone().with_image_size(1024, 15),
            base.clone().with_step_size(0.0),
            base.clone().with_step_size(f32::NAN),
            base.clone().with_max_ray_distance(-1.0),
            base.clone().with_start(Player::new(3.5, 2.5, 1.3, PI)),
            base.clone().with_start(Player::new(f32::INFINITY, 2.5, 1.3, 1.0)),
            base.clone().with_angular_step(f32::NAN),
            base.clone().with_step_size(1e-30),
            base.clone().with_step_size(1e-6),
            base.clone().with_step_size(0.001).with_max_ray_distance(1e6),
        ];
        for cfg in bad {
            assert!(matches!(cfg.validate(), Err(RenderError::InvalidConfig(_))), "{cfg:?}");
        }
    }
}
