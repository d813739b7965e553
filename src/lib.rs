//! Starfield Backdrop - animated night sky for a canvas landing page
//!
//! Core modules:
//! - `sim`: Star field animator (twinkling stars, shooting stars, planet intro)
//! - `renderer`: Drawing surface abstraction and rasterization
//! - `platform`: Frame clock abstraction for driving the animator
//! - `settings`: User-facing configuration
//! - `greeting`: Greeting card payload fetched from the backend

pub mod greeting;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};
pub use sim::{FieldConfig, StarField};

use glam::Vec2;

/// Animation constants
pub mod consts {
    use std::f32::consts::PI;

    /// Default number of stars seeded per viewport
    pub const DEFAULT_STAR_COUNT: usize = 120;

    /// Star radius range in pixels
    pub const STAR_SIZE_MIN: f32 = 0.5;
    pub const STAR_SIZE_MAX: f32 = 3.5;
    /// Resting brightness range
    pub const STAR_BASE_BRIGHTNESS_MIN: f32 = 0.5;
    pub const STAR_BASE_BRIGHTNESS_MAX: f32 = 1.0;
    /// Twinkle frequency range (radians per millisecond)
    pub const STAR_TWINKLE_SPEED_MIN: f64 = 0.0005;
    pub const STAR_TWINKLE_SPEED_MAX: f64 = 0.0025;
    /// Peak deviation of the twinkle sinusoid
    pub const STAR_TWINKLE_AMPLITUDE: f64 = 0.5;
    /// Chance a star gets the cross-shaped flare
    pub const GLOWING_STAR_CHANCE: f64 = 0.1;
    /// Stars brighter than this may be tinted
    pub const TINT_BRIGHTNESS_THRESHOLD: f32 = 0.8;
    /// Chance a bright star actually takes a tint
    pub const TINT_CHANCE: f64 = 0.5;

    /// Disc radius multipliers
    pub const PLAIN_DISC_SCALE: f32 = 1.5;
    pub const GLOWING_DISC_SCALE: f32 = 2.0;
    /// Flare arm half-length multiplier
    pub const FLARE_ARM_SCALE: f32 = 4.0;
    /// Flare alpha relative to star brightness
    pub const FLARE_ALPHA: f32 = 0.6;

    /// Shooting star trail length range (samples, max exclusive)
    pub const SHOOTING_LENGTH_MIN: usize = 40;
    pub const SHOOTING_LENGTH_MAX: usize = 120;
    /// Shooting star speed range (pixels per frame)
    pub const SHOOTING_SPEED_MIN: f32 = 5.0;
    pub const SHOOTING_SPEED_MAX: f32 = 15.0;
    /// Brightness lost per frame
    pub const SHOOTING_FADE_PER_FRAME: f32 = 0.01;
    /// A trail sample is recorded every N frames
    pub const TRAIL_SAMPLE_INTERVAL: u32 = 3;
    /// Largest trail sample size
    pub const TRAIL_SAMPLE_MAX_SIZE: f32 = 3.0;
    /// Head glow radius in pixels
    pub const SHOOTING_HEAD_RADIUS: f32 = 4.0;
    /// Trail glows are slightly dimmer than trail segments
    pub const TRAIL_GLOW_ALPHA: f32 = 0.7;
    /// How far past an edge a shooting star may travel before removal
    pub const OFFSCREEN_MARGIN: f32 = 50.0;
    /// Width of the inward-facing spawn arc (90°)
    pub const SPAWN_ARC: f32 = PI * 0.5;

    /// Minimum time between gated spawns (ms)
    pub const SPAWN_COOLDOWN_MS: f64 = 2000.0;
    /// Per-frame spawn chance once the cooldown has elapsed
    pub const SPAWN_CHANCE: f64 = 0.02;

    /// Nominal display refresh interval (60 Hz)
    pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;
}

/// Point at `len` along `angle` from `origin`
#[inline]
pub fn advance_along(origin: Vec2, angle: f32, len: f32) -> Vec2 {
    origin + Vec2::new(angle.cos(), angle.sin()) * len
}

/// True when `pos` lies more than `margin` outside the `width` x `height` box
#[inline]
pub fn outside_bounds(pos: Vec2, width: f32, height: f32, margin: f32) -> bool {
    pos.x < -margin || pos.x > width + margin || pos.y < -margin || pos.y > height + margin
}
