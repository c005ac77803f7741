//! CPU framebuffer: flat row-major pixels with clipped block writes.
use crate::error::{RenderError, Result};
use crate::render::color::Color;

/// Pixel rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block {
    pub row: i64,
    pub col: i64,
    pub width: usize,
    pub height: usize,
}

impl Block {
    pub fn new(row: i64, col: i64, width: usize, height: usize) -> Self {
        Self { row, col, width, height }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    color_buffer: Vec<Color>,
    width: usize,
    height: usize,
    background_color: Color,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize, fill: Color) -> Self {
        Self {
            color_buffer: vec![fill; width * height],
            width,
            height,
            background_color: fill,
        }
    }

    /// Wraps existing pixels; the first pixel (if any) is taken as background.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Result<Self> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(RenderError::BufferSize { expected, actual: pixels.len() });
        }
        let background_color = pixels.first().copied().unwrap_or_default();
        Ok(Self { color_buffer: pixels, width, height, background_color })
    }

    #[inline] pub fn width(&self) -> usize { self.width }
    #[inline] pub fn height(&self) -> usize { self.height }
    #[inline] pub fn background_color(&self) -> Color { self.background_color }
    #[inline] pub fn pixels(&self) -> &[Color] { &self.color_buffer }

    #[inline]
    pub fn clear(&mut self) {
        self.color_buffer.fill(self.background_color);
    }

    #[inline]
    pub fn get_pixel(&self, row: usize, col: usize) -> Option<Color> {
        if row < self.height && col < self.width {
            return Some(self.color_buffer[row * self.width + col]);
        }
        None
    }

    #[inline]
    pub fn set_pixel(&mut self, row: usize, col: usize, color: Color) -> bool {
        if row < self.height && col < self.width {
            self.color_buffer[row * self.width + col] = color;
            return true;
        }
        false
    }

    /// Paints only where the pixel still holds the background color.
    #[inline]
    pub fn set_pixel_if_background(&mut self, row: usize, col: usize, color: Color) -> bool {
        match self.get_pixel(row, col) {
            Some(c) if c == self.background_color => self.set_pixel(row, col, color),
            _ => false,
        }
    }

    /// Fills `[origin_row, origin_row + block_height) x [origin_col, origin_col + block_width)`.
    ///
    /// Cells outside the image are skipped: rows are clipped against the
    /// height, columns against the width, on all four edges.
    pub fn draw_block(
        &mut self,
        origin_row: i64,
        origin_col: i64,
        block_width: usize,
        block_height: usize,
        color: Color,
    ) {
        debug_assert_eq!(self.color_buffer.len(), self.width * self.height);
        let Some((r0, r1)) = clip_span(origin_row, block_height, self.height) else { return };
        let Some((c0, c1)) = clip_span(origin_col, block_width, self.width) else { return };
        for row in r0..r1 {
            let base = row * self.width;
            self.color_buffer[base + c0..base + c1].fill(color);
        }
    }

    pub fn draw_rect(&mut self, block: &Block, color: Color) {
        self.draw_block(block.row, block.col, block.width, block.height, color);
    }
}

/// Intersection of `[start, start + len)` with `[0, bound)`, if non-empty.
fn clip_span(start: i64, len: usize, bound: usize) -> Option<(usize, usize)> {
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let bound = i64::try_from(bound).unwrap_or(i64::MAX);
    let lo = start.max(0);
    let hi = start.saturating_add(len).min(bound);
    (lo < hi).then(|| (lo as usize, hi as usize))
}
