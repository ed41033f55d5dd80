pub mod parallax;
pub mod particles;

pub use parallax::{HeroTransform, hero_transform};
pub use particles::{DEFAULT_PARTICLE_COUNT, ParticleField};
