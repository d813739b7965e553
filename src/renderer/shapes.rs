//! Rasterization of stars and shooting stars

use glam::Vec2;

use super::surface::{DrawSurface, Rgba};
use crate::consts::*;
use crate::sim::{ShootingStar, Star, StarKind};

/// Paint a persistent star at its current brightness
pub fn draw_star<S: DrawSurface + ?Sized>(surface: &mut S, star: &Star) {
    let color = Rgba::from_rgb8(star.color.rgb());

    if star.kind == StarKind::Glowing {
        let arm = star.size * FLARE_ARM_SCALE;
        let p = star.pos;
        surface.stroke_segments(
            &[
                (p - Vec2::new(arm, 0.0), p + Vec2::new(arm, 0.0)),
                (p - Vec2::new(0.0, arm), p + Vec2::new(0.0, arm)),
            ],
            1.0,
            color.with_alpha(star.brightness * FLARE_ALPHA),
        );
    }

    surface.fill_radial_disc(
        star.pos,
        star.disc_radius(),
        color.with_alpha(star.brightness),
        color.transparent(),
    );
}

/// Width/radius of a trail feature `t` of the way from tail to head
#[inline]
fn taper(size: f32, t: f32) -> f32 {
    size * (1.0 - t) * 0.8 + 0.5
}

/// Paint a shooting star: trail segments, trail glows, then the head
pub fn draw_shooting_star<S: DrawSurface + ?Sized>(surface: &mut S, star: &ShootingStar) {
    let trail = &star.trail;
    let trail_len = trail.len() as f32;

    // Fade alpha toward the tail
    if trail.len() >= 2 {
        for j in 1..trail.len() {
            let prev = &trail[j - 1];
            let point = &trail[j];
            let t = j as f32 / trail_len;

            surface.stroke_segments(
                &[(prev.pos, point.pos)],
                taper(prev.size, t),
                Rgba::WHITE.with_alpha(t * star.brightness),
            );
        }
    }

    for (j, point) in trail.iter().enumerate() {
        let t = j as f32 / trail_len;
        surface.fill_radial_disc(
            point.pos,
            taper(point.size, t),
            Rgba::WHITE.with_alpha(t * star.brightness * TRAIL_GLOW_ALPHA),
            Rgba::WHITE.transparent(),
        );
    }

    surface.fill_radial_disc(
        star.pos,
        SHOOTING_HEAD_RADIUS,
        Rgba::WHITE.with_alpha(star.brightness),
        Rgba::WHITE.transparent(),
    );
}
