//! Animation state
//!
//! Everything here is deterministic given a seeded RNG and the timestamps
//! passed in by the host:
//! - No wall-clock reads
//! - No platform dependencies
//! - Rendering goes through the `DrawSurface` trait only

pub mod field;
pub mod planet;
pub mod shooting;
pub mod star;

pub use field::{FieldConfig, StarField};
pub use planet::{PlanetEvent, PlanetIntro};
pub use shooting::{Edge, ShootingStar, TrailSample};
pub use star::{Star, StarColor, StarKind, seed_stars};
