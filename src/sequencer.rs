//! Frame loop: turns the observer one step per frame and hands each frame to a sink.
use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::core::player::Player;
use crate::error::Result;
use crate::render::casters::{build_base_layer, render_frame};
use crate::render::framebuffer::Framebuffer;
use crate::sink::ImageSink;

pub struct FrameSequencer {
    config: RenderConfig,
    base: Framebuffer,
    origin: Player,
}

impl FrameSequencer {
    /// Validates `config`, paints the base layer, then applies the start offset.
    pub fn new(config: RenderConfig) -> Result<Self> {
        config.validate()?;
        let base = build_base_layer(&config);
        let (dx, dy) = config.start_offset;
        let origin = config.start.nudged(dx, dy);
        Ok(Self { config, base, origin })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn base_layer(&self) -> &Framebuffer {
        &self.base
    }

    /// Pose for `frame`; the turn is applied before the first frame too.
    pub fn pose_for(&self, frame: usize) -> Player {
        self.origin.turned(self.config.angular_step * (frame + 1) as f32)
    }

    pub fn render(&self, frame: usize) -> Framebuffer {
        render_frame(&self.base, &self.pose_for(frame), &self.config)
    }

    /// Renders and emits frames `0..frame_count` in order; stops at the first sink error.
    pub fn run<S: ImageSink + ?Sized>(&self, sink: &mut S) -> Result<usize> {
        let cfg = &self.config;
        info!(
            frames = cfg.frame_count,
            width = cfg.image_width,
            height = cfg.image_height,
            "rendering"
        );
        for frame in 0..cfg.frame_count {
            let pose = self.pose_for(frame);
            let image = render_frame(&self.base, &pose, cfg);
            debug!(frame, facing = pose.a, "emitting frame");
            sink.emit(frame, &image)?;
        }
        info!(frames = cfg.frame_count, "done");
        Ok(cfg.frame_count)
    }
}
