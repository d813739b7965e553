//! Decorative planet intro
//!
//! The landing page title "grows into" a rotating planet. This tracks the
//! scale-in easing and spin; drawing the planet is left to the host.

use serde::{Deserialize, Serialize};

/// Easing factor applied to the remaining scale each frame
pub const SCALE_EASING: f32 = 0.05;
/// Easing stops once this close to full size
pub const SCALE_SETTLE_EPSILON: f32 = 0.01;
/// Scale at which the planet counts as visible
pub const LOADED_SCALE: f32 = 0.1;
/// Cloud shell is slightly larger than the planet
pub const CLOUD_SCALE_RATIO: f32 = 1.01;
/// Spin per frame (radians)
pub const PLANET_SPIN: f32 = 0.001;
pub const CLOUD_SPIN: f32 = 0.0015;

/// Notifications raised by [`PlanetIntro::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetEvent {
    /// Planet became visible; raised once
    Loaded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetIntro {
    pub scale: f32,
    pub rotation: f32,
    pub cloud_rotation: f32,
    easing: bool,
    loaded: bool,
}

impl PlanetIntro {
    /// Start at `initial_scale`; a zero scale animates up to full size
    pub fn new(initial_scale: f32) -> Self {
        Self {
            scale: initial_scale,
            rotation: 0.0,
            cloud_rotation: 0.0,
            easing: initial_scale == 0.0,
            loaded: false,
        }
    }

    pub fn cloud_scale(&self) -> f32 {
        self.scale * CLOUD_SCALE_RATIO
    }

    /// Still growing toward full size
    pub fn is_easing(&self) -> bool {
        self.easing
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Advance one frame
    pub fn tick(&mut self) -> Option<PlanetEvent> {
        if self.easing {
            self.scale += (1.0 - self.scale) * SCALE_EASING;
            if (1.0 - self.scale).abs() <= SCALE_SETTLE_EPSILON {
                self.easing = false;
            }
        }

        self.rotation += PLANET_SPIN;
        self.cloud_rotation += CLOUD_SPIN;

        if !self.loaded && self.scale > LOADED_SCALE {
            self.loaded = true;
            log::info!("Planet visible at scale {:.3}", self.scale);
            return Some(PlanetEvent::Loaded);
        }
        None
    }
}
