//! Ray casting: base layer, fixed-step ray march and the column renderer.
use tracing::trace;

use crate::config::{BoundaryPolicy, RenderConfig};
use crate::core::maze::Cell;
use crate::core::player::Player;
use crate::render::framebuffer::Framebuffer;

/// Perpendicular distances at or below this produce no strip.
const MIN_PERPENDICULAR: f32 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayHit {
    /// Stopped on a wall (or on the grid edge under `BoundaryPolicy::Wall`).
    Wall { distance: f32 },
    /// Reached the distance cap, or left the grid under `BoundaryPolicy::Void`.
    Escaped,
}

/// Background, static wall tiles and the observer marker at `config.start`.
pub fn build_base_layer(config: &RenderConfig) -> Framebuffer {
    let (w, h) = (config.image_width, config.image_height);
    let mut fb = Framebuffer::new(w, h, config.palette.background);

    for (row, col) in config.maze.walls() {
        let block = config.maze.to_pixel_block(row, col, w, h);
        fb.draw_rect(&block, config.palette.wall);
    }

    let (cell_w, cell_h) = config.cell_size();
    let size = config.marker_size;
    fb.draw_block(
        (config.start.x * cell_h as f32) as i64,
        (config.start.y * cell_w as f32) as i64,
        size,
        size,
        config.palette.marker,
    );
    fb
}

/// Marches one ray at `t = k * step_size` until it hits a wall or runs out.
///
/// Free samples are traced into `overlay` (top-down view) where the pixel
/// still holds the background color.
pub fn cast_ray(
    config: &RenderConfig,
    player: &Player,
    a: f32,
    mut overlay: Option<&mut Framebuffer>,
) -> RayHit {
    debug_assert!(config.step_size > 0.0, "step_size must be positive");
    let (sin, cos) = a.sin_cos();
    let (cell_w, cell_h) = config.cell_size();

    for k in 0u64.. {
        let t = k as f32 * config.step_size;
        if !(t < config.max_ray_distance) {
            break;
        }
        let x = player.x + t * sin;
        let y = player.y + t * cos;

        match config.maze.cell_at(x, y) {
            Some(Cell::Wall) => return RayHit::Wall { distance: t },
            None => {
                return match config.boundary {
                    BoundaryPolicy::Wall => RayHit::Wall { distance: t },
                    BoundaryPolicy::Void => RayHit::Escaped,
                };
            }
            Some(Cell::Empty) => {}
        }

        if let Some(fb) = overlay.as_mut() {
            let row = (x * cell_h as f32) as usize;
            let col = (y * cell_w as f32) as usize;
            fb.set_pixel_if_background(row, col, config.palette.ray);
        }
    }
    RayHit::Escaped
}

/// Projected wall height from the perpendicular distance `distance * cos(a - facing)`.
///
/// `None` when that distance is ~0 (observer inside a wall, or a ray at a
/// right angle to the facing).
pub fn strip_height(distance: f32, a: f32, facing: f32, image_height: usize) -> Option<usize> {
    let perpendicular = distance * (a - facing).cos();
    if !(perpendicular > MIN_PERPENDICULAR) {
        return None;
    }
    Some((image_height as f32 / perpendicular).min(u32::MAX as f32) as usize)
}

/// Renders one frame on top of a copy of `base`; `base` is left untouched.
pub fn render_frame(base: &Framebuffer, player: &Player, config: &RenderConfig) -> Framebuffer {
    let mut frame = base.clone();
    let num_rays = config.ray_columns();
    let (w, h) = (config.image_width, config.image_height);
    let mut escaped = 0usize;

    for i in 0..num_rays {
        let ray_a = player.ray_angle(i, num_rays);
        let RayHit::Wall { distance } = cast_ray(config, player, ray_a, Some(&mut frame)) else {
            escaped += 1;
            continue;
        };
        let Some(stake_height) = strip_height(distance, ray_a, player.a, h) else {
            continue;
        };
        let stake_top = (h / 2) as i64 - (stake_height / 2) as i64;
        frame.draw_block(stake_top, (w / 2 + i) as i64, 1, stake_height, config.palette.wall);
    }

    trace!(columns = num_rays, escaped, "frame rendered");
    frame
}
