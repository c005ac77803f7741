//! Observer pose.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub x: f32,   // row axis, in map cells
    pub y: f32,   // column axis, in map cells
    pub a: f32,   // facing (radians)
    pub fov: f32, // field of view (radians)
}

impl Player {
    pub fn new(x: f32, y: f32, a: f32, fov: f32) -> Self {
        Self { x, y, a, fov }
    }

    pub fn nudged(self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy, ..self }
    }

    pub fn turned(self, delta: f32) -> Self {
        Self { a: self.a + delta, ..self }
    }

    /// Angle of ray `i` out of `n`, sweeping the view left to right.
    #[inline]
    pub fn ray_angle(&self, i: usize, n: usize) -> f32 {
        self.a - self.fov / 2.0 + self.fov * i as f32 / n as f32
    }
}
