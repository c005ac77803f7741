//! Packed 32-bit RGBA color.
//!
//! Layout, most significant byte first:
//! - 31-24 : a
//! - 23-16 : b
//! - 15- 8 : g
//! - 7 - 0 : r

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// #d3d3d3
    pub const LIGHT_GRAY: Color = Color::rgb(211, 211, 211);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | r as u32)
    }

    /// Opaque color (alpha 255).
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    #[inline]
    pub const fn unpack(self) -> (u8, u8, u8, u8) {
        (self.r(), self.g(), self.b(), self.a())
    }

    #[inline] pub const fn r(self) -> u8 { (self.0 & 255) as u8 }
    #[inline] pub const fn g(self) -> u8 { ((self.0 >> 8) & 255) as u8 }
    #[inline] pub const fn b(self) -> u8 { ((self.0 >> 16) & 255) as u8 }
    #[inline] pub const fn a(self) -> u8 { ((self.0 >> 24) & 255) as u8 }

    /// Visible channels only; what the image sink persists.
    #[inline]
    pub const fn to_rgb(self) -> [u8; 3] {
        [self.r(), self.g(), self.b()]
    }
}

impl From<u32> for Color {
    fn from(packed: u32) -> Self {
        Color(packed)
    }
}

impl From<Color> for u32 {
    fn from(c: Color) -> Self {
        c.0
    }
}
