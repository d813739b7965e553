//! Drawing surface abstraction
//!
//! The animator paints through this trait so the same frame logic can target
//! a browser canvas or a headless recorder.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color, channels in 0-1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channels
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self::new(
            rgb[0] as f32 / 255.0,
            rgb[1] as f32 / 255.0,
            rgb[2] as f32 / 255.0,
            1.0,
        )
    }

    /// Same color with a new alpha (clamped to 0-1)
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Same color, fully transparent
    pub fn transparent(self) -> Self {
        self.with_alpha(0.0)
    }

    /// CSS `rgba(...)` string for canvas styles
    pub fn to_css(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "rgba({}, {}, {}, {})",
            channel(self.r),
            channel(self.g),
            channel(self.b),
            self.a.clamp(0.0, 1.0)
        )
    }
}

/// A 2D raster target sized in device pixels
pub trait DrawSurface {
    /// Current size (width, height)
    fn size(&self) -> (u32, u32);

    /// Resize the backing raster
    fn set_size(&mut self, width: u32, height: u32);

    /// Wipe every pixel to transparent
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Rgba);

    /// Stroke independent line segments with a shared width and color
    fn stroke_segments(&mut self, segments: &[(Vec2, Vec2)], width: f32, color: Rgba);

    /// Fill a disc with a radial gradient from `inner` at the center to `outer` at `radius`
    fn fill_radial_disc(&mut self, center: Vec2, radius: f32, inner: Rgba, outer: Rgba);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb8() {
        let c = Rgba::from_rgb8([255, 0, 51]);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-6);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_with_alpha_clamps() {
        assert_eq!(Rgba::WHITE.with_alpha(1.7).a, 1.0);
        assert_eq!(Rgba::WHITE.with_alpha(-0.2).a, 0.0);
        assert_eq!(Rgba::WHITE.transparent().a, 0.0);
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Rgba::BLACK.to_css(), "rgba(0, 0, 0, 1)");
        assert_eq!(
            Rgba::from_rgb8([79, 172, 254]).with_alpha(0.5).to_css(),
            "rgba(79, 172, 254, 0.5)"
        );
    }
}
