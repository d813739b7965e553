//! Persistent background stars
//!
//! Stars never move; only their brightness oscillates (the twinkle).

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Render style chosen once per star
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StarKind {
    #[default]
    Plain,
    /// Core disc plus a cross-shaped flare
    Glowing,
}

/// Fixed star palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StarColor {
    #[default]
    White,
    Blue,
    Cyan,
    Gold,
    Lavender,
}

impl StarColor {
    /// Colors a bright star may be tinted with
    pub const TINTS: [StarColor; 4] = [
        StarColor::Blue,
        StarColor::Cyan,
        StarColor::Gold,
        StarColor::Lavender,
    ];

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            StarColor::White => [0xff, 0xff, 0xff],
            StarColor::Blue => [0x4f, 0xac, 0xfe],
            StarColor::Cyan => [0x00, 0xf2, 0xfe],
            StarColor::Gold => [0xf6, 0xd3, 0x65],
            StarColor::Lavender => [0xa6, 0xc0, 0xfe],
        }
    }

    /// Pick a color: white unless the star is bright and a coin flip says tint
    pub fn pick<R: Rng + ?Sized>(rng: &mut R, base_brightness: f32) -> Self {
        if base_brightness > TINT_BRIGHTNESS_THRESHOLD && rng.random_bool(TINT_CHANCE) {
            Self::TINTS[rng.random_range(0..Self::TINTS.len())]
        } else {
            StarColor::White
        }
    }
}

/// A fixed star in surface pixel coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Star {
    pub pos: Vec2,
    /// Radius in pixels
    pub size: f32,
    pub base_brightness: f32,
    /// Brightness for the current frame, always within 0-1
    pub brightness: f32,
    /// Twinkle frequency (radians per ms)
    pub speed: f64,
    pub kind: StarKind,
    pub color: StarColor,
}

impl Star {
    /// Generate a star somewhere in `[0, width) x [0, height)`
    ///
    /// Both dimensions must be positive.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let pos = Vec2::new(rng.random_range(0.0..width), rng.random_range(0.0..height));
        let size = rng.random_range(STAR_SIZE_MIN..STAR_SIZE_MAX);
        let base_brightness =
            rng.random_range(STAR_BASE_BRIGHTNESS_MIN..STAR_BASE_BRIGHTNESS_MAX);
        let speed = rng.random_range(STAR_TWINKLE_SPEED_MIN..STAR_TWINKLE_SPEED_MAX);
        let kind = if rng.random_bool(GLOWING_STAR_CHANCE) {
            StarKind::Glowing
        } else {
            StarKind::Plain
        };
        let color = StarColor::pick(rng, base_brightness);

        Self {
            pos,
            size,
            base_brightness,
            brightness: base_brightness,
            speed,
            kind,
            color,
        }
    }

    /// Brightness at `time_ms`, clamped to 0-1
    pub fn brightness_at(&self, time_ms: f64) -> f32 {
        let wave = (time_ms * self.speed).sin();
        // Infinite timestamps make sin() NaN
        let wave = if wave.is_finite() { wave } else { 0.0 };
        (self.base_brightness as f64 + wave * STAR_TWINKLE_AMPLITUDE).clamp(0.0, 1.0) as f32
    }

    /// Recompute this frame's brightness
    pub fn twinkle(&mut self, time_ms: f64) {
        self.brightness = self.brightness_at(time_ms);
    }

    /// Radius of the gradient disc for this star's kind
    pub fn disc_radius(&self) -> f32 {
        match self.kind {
            StarKind::Plain => self.size * PLAIN_DISC_SCALE,
            StarKind::Glowing => self.size * GLOWING_DISC_SCALE,
        }
    }
}

/// Generate a fresh star collection covering a `width` x `height` surface
///
/// A zero-sized surface yields no stars.
pub fn seed_stars<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32, count: usize) -> Vec<Star> {
    if !(width > 0.0 && height > 0.0) {
        return Vec::new();
    }
    (0..count).map(|_| Star::random(rng, width, height)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn star(base_brightness: f32, speed: f64) -> Star {
        Star {
            pos: Vec2::ZERO,
            size: 1.0,
            base_brightness,
            brightness: base_brightness,
            speed,
            kind: StarKind::Plain,
            color: StarColor::White,
        }
    }

    #[test]
    fn test_seed_count_and_bounds() {
        let mut rng = Pcg32::seed_from_u64(7);
        let stars = seed_stars(&mut rng, 800.0, 600.0, 250);
        assert_eq!(stars.len(), 250);
        for s in &stars {
            assert!(s.pos.x >= 0.0 && s.pos.x < 800.0);
            assert!(s.pos.y >= 0.0 && s.pos.y < 600.0);
            assert!(s.size >= STAR_SIZE_MIN && s.size < STAR_SIZE_MAX);
            assert!(s.base_brightness >= 0.5 && s.base_brightness < 1.0);
            assert!(s.speed >= STAR_TWINKLE_SPEED_MIN && s.speed < STAR_TWINKLE_SPEED_MAX);
        }
    }

    #[test]
    fn test_seed_zero_surface() {
        let mut rng = Pcg32::seed_from_u64(7);
        assert!(seed_stars(&mut rng, 0.0, 600.0, 100).is_empty());
        assert!(seed_stars(&mut rng, 800.0, 0.0, 100).is_empty());
        assert!(seed_stars(&mut rng, 0.0, 0.0, 100).is_empty());
    }

    #[test]
    fn test_only_bright_stars_are_tinted() {
        let mut rng = Pcg32::seed_from_u64(42);
        let stars = seed_stars(&mut rng, 500.0, 500.0, 2000);
        for s in &stars {
            if s.color != StarColor::White {
                assert!(s.base_brightness > TINT_BRIGHTNESS_THRESHOLD);
            }
        }
        // Roughly 40% of stars are bright and half of those get tinted
        let tinted = stars.iter().filter(|s| s.color != StarColor::White).count();
        assert!(tinted > 250 && tinted < 550, "tinted = {}", tinted);
    }

    #[test]
    fn test_glowing_fraction() {
        let mut rng = Pcg32::seed_from_u64(3);
        let stars = seed_stars(&mut rng, 1000.0, 1000.0, 20_000);
        let glowing = stars.iter().filter(|s| s.kind == StarKind::Glowing).count();
        let fraction = glowing as f64 / stars.len() as f64;
        assert!((fraction - 0.1).abs() < 0.01, "fraction = {}", fraction);
    }

    #[test]
    fn test_brightness_clamped() {
        let bright = star(0.95, 0.001);
        // sin(pi/2) = 1 -> 1.45 clamps to 1
        let peak = std::f64::consts::FRAC_PI_2 / 0.001;
        assert_eq!(bright.brightness_at(peak), 1.0);

        let dim = star(0.45, 0.001);
        // sin(3pi/2) = -1 -> -0.05 clamps to 0
        assert_eq!(dim.brightness_at(peak * 3.0), 0.0);
    }

    #[test]
    fn test_brightness_non_finite_time() {
        let s = star(0.7, 0.002);
        assert_eq!(s.brightness_at(f64::INFINITY), 0.7);
        assert_eq!(s.brightness_at(f64::NEG_INFINITY), 0.7);
        assert_eq!(s.brightness_at(f64::NAN), 0.7);
    }

    #[test]
    fn test_twinkle_at_zero_is_base() {
        let mut s = star(0.6, 0.002);
        s.brightness = 0.0;
        s.twinkle(0.0);
        assert_eq!(s.brightness, 0.6);
    }

    #[test]
    fn test_disc_radius() {
        let mut s = star(0.6, 0.002);
        s.size = 2.0;
        assert_eq!(s.disc_radius(), 3.0);
        s.kind = StarKind::Glowing;
        assert_eq!(s.disc_radius(), 4.0);
    }
}
