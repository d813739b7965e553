//! Shooting stars
//!
//! Short-lived particles that enter from a viewport edge, leave a fading
//! trail, and are dropped once dark or well off-surface.

use std::collections::VecDeque;
use std::f32::consts::PI;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::{advance_along, outside_bounds};

/// Viewport edge a shooting star enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    /// Start of the 90° heading arc that points into the viewport
    ///
    /// Screen space has y growing downward, so the top edge uses
    /// [π/4, 3π/4), which always has a positive y component.
    pub fn arc_start(&self) -> f32 {
        match self {
            Edge::Top => PI * 0.25,
            Edge::Right => PI * 0.75,
            Edge::Bottom => PI * 1.25,
            Edge::Left => PI * 1.75,
        }
    }

    /// Uniform point on this edge of a `width` x `height` surface
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R, width: f32, height: f32) -> Vec2 {
        match self {
            Edge::Top => Vec2::new(rng.random::<f32>() * width, 0.0),
            Edge::Right => Vec2::new(width, rng.random::<f32>() * height),
            Edge::Bottom => Vec2::new(rng.random::<f32>() * width, height),
            Edge::Left => Vec2::new(0.0, rng.random::<f32>() * height),
        }
    }

    /// Uniform heading within the inward arc
    pub fn random_heading<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        self.arc_start() + rng.random::<f32>() * SPAWN_ARC
    }
}

/// A recorded trail point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailSample {
    pub pos: Vec2,
    pub size: f32,
}

/// A transient shooting star
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShootingStar {
    pub pos: Vec2,
    /// Heading in radians
    pub angle: f32,
    /// Maximum number of trail samples
    pub length: usize,
    /// Pixels per frame
    pub speed: f32,
    /// Starts at 1 and fades every frame
    pub brightness: f32,
    /// Oldest sample first
    pub trail: VecDeque<TrailSample>,
    /// Frames since the last trail sample
    pub sample_counter: u32,
}

impl ShootingStar {
    pub fn new(pos: Vec2, angle: f32, length: usize, speed: f32) -> Self {
        Self {
            pos,
            angle,
            length,
            speed,
            brightness: 1.0,
            trail: VecDeque::with_capacity(length + 1),
            sample_counter: 0,
        }
    }

    /// Spawn on a random edge, heading inward
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
        Self::spawn_from(rng, edge, width, height)
    }

    /// Spawn on a specific edge, heading inward
    pub fn spawn_from<R: Rng + ?Sized>(rng: &mut R, edge: Edge, width: f32, height: f32) -> Self {
        let pos = edge.random_point(rng, width, height);
        let angle = edge.random_heading(rng);
        let length = rng.random_range(SHOOTING_LENGTH_MIN..SHOOTING_LENGTH_MAX);
        let speed = rng.random_range(SHOOTING_SPEED_MIN..SHOOTING_SPEED_MAX);
        Self::new(pos, angle, length, speed)
    }

    /// Head size recorded into the trail (bigger while bright)
    pub fn head_size(&self) -> f32 {
        (self.brightness * 4.0).min(TRAIL_SAMPLE_MAX_SIZE)
    }

    /// Record a trail sample every few frames, then move one frame along the heading
    pub fn advance(&mut self) {
        self.sample_counter += 1;
        if self.sample_counter >= TRAIL_SAMPLE_INTERVAL {
            self.sample_counter = 0;
            self.trail.push_back(TrailSample {
                pos: self.pos,
                size: self.head_size(),
            });
            if self.trail.len() > self.length {
                self.trail.pop_front();
            }
        }

        self.pos = advance_along(self.pos, self.angle, self.speed);
    }

    /// Lose one frame's worth of brightness
    pub fn fade(&mut self) {
        self.brightness -= SHOOTING_FADE_PER_FRAME;
    }

    /// Dark, or far enough off-surface to never come back
    pub fn is_expired(&self, width: f32, height: f32) -> bool {
        self.brightness <= 0.0 || outside_bounds(self.pos, width, height, OFFSCREEN_MARGIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_edges_point_inward() {
        let mut rng = Pcg32::seed_from_u64(11);
        for _ in 0..500 {
            for edge in Edge::ALL {
                let s = ShootingStar::spawn_from(&mut rng, edge, 800.0, 600.0);
                let (sin, cos) = s.angle.sin_cos();
                match edge {
                    Edge::Top => {
                        assert!(sin > 0.0);
                        assert_eq!(s.pos.y, 0.0);
                    }
                    Edge::Right => {
                        assert!(cos < 0.0);
                        assert_eq!(s.pos.x, 800.0);
                    }
                    Edge::Bottom => {
                        assert!(sin < 0.0);
                        assert_eq!(s.pos.y, 600.0);
                    }
                    Edge::Left => {
                        assert!(cos > 0.0);
                        assert_eq!(s.pos.x, 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(5);
        for _ in 0..200 {
            let s = ShootingStar::spawn(&mut rng, 1024.0, 768.0);
            assert!(s.length >= SHOOTING_LENGTH_MIN && s.length < SHOOTING_LENGTH_MAX);
            assert!(s.speed >= SHOOTING_SPEED_MIN && s.speed < SHOOTING_SPEED_MAX);
            assert_eq!(s.brightness, 1.0);
            assert!(s.trail.is_empty());
            assert!(s.pos.x >= 0.0 && s.pos.x <= 1024.0);
            assert!(s.pos.y >= 0.0 && s.pos.y <= 768.0);
        }
    }

    #[test]
    fn test_trail_sampled_every_third_frame() {
        let mut s = ShootingStar::new(Vec2::new(100.0, 100.0), 0.0, 50, 5.0);
        s.advance();
        s.advance();
        assert!(s.trail.is_empty());
        s.advance();
        assert_eq!(s.trail.len(), 1);
        // Sample is taken before the move
        assert_eq!(s.trail[0].pos, Vec2::new(110.0, 100.0));
        assert_eq!(s.pos, Vec2::new(115.0, 100.0));
        for _ in 0..3 {
            s.advance();
        }
        assert_eq!(s.trail.len(), 2);
    }

    #[test]
    fn test_trail_capped_at_length() {
        let mut s = ShootingStar::new(Vec2::ZERO, 0.0, 4, 0.0);
        for _ in 0..60 {
            s.advance();
            assert!(s.trail.len() <= 4);
        }
        assert_eq!(s.trail.len(), 4);
    }

    #[test]
    fn test_trail_drops_oldest() {
        let mut s = ShootingStar::new(Vec2::ZERO, 0.0, 2, 1.0);
        for _ in 0..9 {
            s.advance();
        }
        // Samples at x = 2, 5, 8; the first was evicted
        let xs: Vec<f32> = s.trail.iter().map(|t| t.pos.x).collect();
        assert_eq!(xs, vec![5.0, 8.0]);
    }

    #[test]
    fn test_head_size() {
        let mut s = ShootingStar::new(Vec2::ZERO, 0.0, 10, 1.0);
        assert_eq!(s.head_size(), 3.0);
        s.brightness = 0.5;
        assert_eq!(s.head_size(), 2.0);
    }

    #[test]
    fn test_expiry() {
        let mut s = ShootingStar::new(Vec2::new(50.0, 50.0), 0.0, 10, 1.0);
        assert!(!s.is_expired(100.0, 100.0));
        s.brightness = 0.0;
        assert!(s.is_expired(100.0, 100.0));

        let mut s = ShootingStar::new(Vec2::new(149.0, 50.0), 0.0, 10, 2.0);
        assert!(!s.is_expired(100.0, 100.0));
        s.advance();
        assert!(s.is_expired(100.0, 100.0));
    }
}
