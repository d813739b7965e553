//! Star field animator
//!
//! Owns the persistent stars and the transient shooting stars, advances them
//! once per display frame and paints them onto a [`DrawSurface`].

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::shooting::ShootingStar;
use super::star::{Star, seed_stars};
use crate::consts::*;
use crate::renderer::{DrawSurface, Rgba, shapes};

/// Tunable animator behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Stars generated on every (re)seed
    pub star_count: usize,
    /// Minimum ms between gated spawns
    pub spawn_cooldown_ms: f64,
    /// Per-frame spawn chance once the cooldown has elapsed (0-1)
    pub spawn_chance: f64,
    /// Spawn shooting stars at all
    pub shooting_stars: bool,
    /// Animate star brightness; when off stars hold their base brightness
    pub twinkle: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            star_count: DEFAULT_STAR_COUNT,
            spawn_cooldown_ms: SPAWN_COOLDOWN_MS,
            spawn_chance: SPAWN_CHANCE,
            shooting_stars: true,
            twinkle: true,
        }
    }
}

/// The animator instance
pub struct StarField<R: Rng = Pcg32> {
    config: FieldConfig,
    rng: R,
    width: u32,
    height: u32,
    stars: Vec<Star>,
    shooting: Vec<ShootingStar>,
    /// Timestamp of the last gated spawn
    last_spawn_ms: f64,
    frame: u64,
}

impl StarField<Pcg32> {
    /// Create an empty field with a seeded PCG generator
    pub fn new(config: FieldConfig, seed: u64) -> Self {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> StarField<R> {
    /// Create an empty field driven by the given random source
    pub fn with_rng(config: FieldConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            width: 0,
            height: 0,
            stars: Vec::new(),
            shooting: Vec::new(),
            last_spawn_ms: 0.0,
            frame: 0,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn shooting_stars(&self) -> &[ShootingStar] {
        &self.shooting
    }

    /// Mutable access for hosts that inject particles directly
    pub fn shooting_stars_mut(&mut self) -> &mut Vec<ShootingStar> {
        &mut self.shooting
    }

    pub fn last_spawn_ms(&self) -> f64 {
        self.last_spawn_ms
    }

    /// Frames stepped so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Replace every star with `count` new ones for a `width` x `height` surface
    pub fn seed(&mut self, width: u32, height: u32, count: usize) {
        self.width = width;
        self.height = height;
        self.stars = seed_stars(&mut self.rng, width as f32, height as f32, count);
        log::info!("Seeded {} stars for {}x{}", self.stars.len(), width, height);
    }

    /// Track a new viewport size: resize and clear the surface, then reseed
    ///
    /// Shooting stars keep flying on their old trajectories.
    pub fn resize<S: DrawSurface + ?Sized>(&mut self, surface: &mut S, width: u32, height: u32) {
        surface.set_size(width, height);
        surface.clear();
        self.seed(width, height, self.config.star_count);
    }

    /// Add a shooting star right now, ignoring the cooldown and gate
    pub fn spawn_shooting_star(&mut self) {
        let star = ShootingStar::spawn(&mut self.rng, self.width as f32, self.height as f32);
        log::debug!(
            "Shooting star at ({:.0}, {:.0}) heading {:.2} rad",
            star.pos.x,
            star.pos.y,
            star.angle
        );
        self.shooting.push(star);
    }

    /// Advance and paint one display frame
    ///
    /// Without a surface the frame is skipped entirely.
    pub fn step<S: DrawSurface + ?Sized>(&mut self, surface: Option<&mut S>, time_ms: f64) {
        let Some(surface) = surface else {
            return;
        };
        self.frame += 1;

        let width = self.width as f32;
        let height = self.height as f32;

        surface.fill_rect(0.0, 0.0, width, height, Rgba::BLACK);

        for star in self.stars.iter_mut() {
            if self.config.twinkle {
                star.twinkle(time_ms);
            } else {
                star.brightness = star.base_brightness;
            }
            shapes::draw_star(surface, star);
        }

        // Newest first so removal never skips an element
        for i in (0..self.shooting.len()).rev() {
            let star = &mut self.shooting[i];
            star.advance();
            shapes::draw_shooting_star(surface, star);
            star.fade();
            if star.is_expired(width, height) {
                self.shooting.remove(i);
                log::debug!("Shooting star retired ({} active)", self.shooting.len());
            }
        }

        if self.should_spawn(time_ms) {
            self.spawn_shooting_star();
            self.last_spawn_ms = time_ms;
        }
    }

    /// Two-stage gate: cooldown elapsed, then a fresh per-frame coin flip
    fn should_spawn(&mut self, time_ms: f64) -> bool {
        self.config.shooting_stars
            && time_ms - self.last_spawn_ms > self.config.spawn_cooldown_ms
            && self.rng.random::<f64>() < self.config.spawn_chance
    }
}
