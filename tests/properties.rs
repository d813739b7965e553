//! Property tests for the star field animator

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use starfield_backdrop::consts::SPAWN_COOLDOWN_MS;
use starfield_backdrop::renderer::RecordingSurface;
use starfield_backdrop::sim::{Edge, ShootingStar, seed_stars};
use starfield_backdrop::{FieldConfig, StarField};

fn edge() -> impl Strategy<Value = Edge> {
    prop_oneof![
        Just(Edge::Top),
        Just(Edge::Right),
        Just(Edge::Bottom),
        Just(Edge::Left),
    ]
}

proptest! {
    #[test]
    fn seeded_stars_fill_the_surface(
        seed in any::<u64>(),
        width in 1u32..4000,
        height in 1u32..4000,
        count in 0usize..400,
    ) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = seed_stars(&mut rng, width as f32, height as f32, count);
        prop_assert_eq!(stars.len(), count);
        for s in &stars {
            prop_assert!(s.pos.x >= 0.0 && s.pos.x < width as f32);
            prop_assert!(s.pos.y >= 0.0 && s.pos.y < height as f32);
        }
    }

    #[test]
    fn brightness_always_clamped(seed in any::<u64>(), time_ms in -1.0e12f64..1.0e12) {
        let mut rng = Pcg32::seed_from_u64(seed);
        for star in seed_stars(&mut rng, 100.0, 100.0, 50) {
            let b = star.brightness_at(time_ms);
            prop_assert!((0.0..=1.0).contains(&b));
        }
    }

    #[test]
    fn spawn_heading_points_inward(seed in any::<u64>(), edge in edge()) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let star = ShootingStar::spawn_from(&mut rng, edge, 1280.0, 720.0);
        let (sin, cos) = star.angle.sin_cos();
        match edge {
            Edge::Top => prop_assert!(sin > 0.0),
            Edge::Bottom => prop_assert!(sin < 0.0),
            Edge::Left => prop_assert!(cos > 0.0),
            Edge::Right => prop_assert!(cos < 0.0),
        }
    }

    #[test]
    fn trail_never_exceeds_length(seed in any::<u64>(), frames in 0usize..600) {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut star = ShootingStar::spawn(&mut rng, 800.0, 600.0);
        star.speed = 0.0;
        for _ in 0..frames {
            star.advance();
            prop_assert!(star.trail.len() <= star.length);
        }
    }

    #[test]
    fn spawns_respect_cooldown(seed in any::<u64>(), frame_ms in 1.0f64..400.0) {
        let config = FieldConfig { spawn_chance: 1.0, ..Default::default() };
        let mut field = StarField::new(config, seed);
        let mut surface = RecordingSurface::new(320, 240);
        field.resize(&mut surface, 320, 240);

        let mut spawn_times = Vec::new();
        let mut t = 0.0;
        for _ in 0..200 {
            t += frame_ms;
            let before = field.last_spawn_ms();
            field.step(Some(&mut surface), t);
            if field.last_spawn_ms() != before {
                spawn_times.push(field.last_spawn_ms());
            }
            surface.take_commands();
        }
        prop_assert!(!spawn_times.is_empty() || t <= SPAWN_COOLDOWN_MS);
        for pair in spawn_times.windows(2) {
            prop_assert!(pair[1] - pair[0] > SPAWN_COOLDOWN_MS);
        }
    }

    #[test]
    fn faded_shooting_stars_never_return(seed in any::<u64>()) {
        let config = FieldConfig { shooting_stars: false, ..Default::default() };
        let mut field = StarField::new(config, seed);
        let mut surface = RecordingSurface::new(2000, 2000);
        field.resize(&mut surface, 2000, 2000);
        let mut star = ShootingStar::spawn(&mut Pcg32::seed_from_u64(seed), 2000.0, 2000.0);
        star.speed = 0.0;
        field.shooting_stars_mut().push(star);

        let mut t = 0.0;
        let mut gone_at = None;
        for frame in 0..150 {
            t += 16.0;
            let alive_before = field.shooting_stars().first().map(|s| s.brightness);
            field.step(Some(&mut surface), t);
            match (alive_before, field.shooting_stars().first()) {
                (Some(b), None) => {
                    // Removed in the step that took brightness to zero or below
                    prop_assert!(b - 0.01 <= 0.0);
                    gone_at = Some(frame);
                }
                (None, Some(_)) => prop_assert!(false, "shooting star came back"),
                _ => {}
            }
        }
        prop_assert!(gone_at.is_some());
    }
}
