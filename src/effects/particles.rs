// effects/particles.rs

use bevy::color::Color;
use bevy::math::Vec2;
use rand::Rng;

pub const DEFAULT_PARTICLE_COUNT: usize = 120;

/// Drift speed per axis, scene units per second
const MAX_DRIFT_SPEED: f32 = 0.45;
const MIN_RADIUS: f32 = 0.015;
const MAX_RADIUS: f32 = 0.06;

const PALETTE: [Color; 6] = [
    Color::srgb(0.380, 0.855, 0.984), // #61dafb
    Color::srgb(0.655, 0.545, 0.980), // #a78bfa
    Color::srgb(0.957, 0.447, 0.714), // #f472b6
    Color::srgb(0.204, 0.827, 0.600), // #34d399
    Color::srgb(0.984, 0.749, 0.141), // #fbbf24
    Color::srgb(0.973, 0.443, 0.443), // #f87171
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// Background field of glowing dots bouncing inside a rectangle
#[derive(Debug, Clone)]
pub struct ParticleField {
    half_extents: Vec2,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(count: usize, half_extents: Vec2, rng: &mut impl Rng) -> Self {
        let half_extents = half_extents.abs();

        let particles = (0..count)
            .map(|_| Particle {
                position: Vec2::new(
                    rng.random_range(-1.0..=1.0) * half_extents.x,
                    rng.random_range(-1.0..=1.0) * half_extents.y,
                ),
                velocity: Vec2::new(
                    rng.random_range(-MAX_DRIFT_SPEED..=MAX_DRIFT_SPEED),
                    rng.random_range(-MAX_DRIFT_SPEED..=MAX_DRIFT_SPEED),
                ),
                radius: rng.random_range(MIN_RADIUS..=MAX_RADIUS),
                color: PALETTE[rng.random_range(0..PALETTE.len())],
            })
            .collect();

        ParticleField {
            half_extents,
            particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Drift every particle by `dt` seconds, reflecting off the bounds
    pub fn step(&mut self, dt: f32) {
        let bounds = self.half_extents;

        for particle in &mut self.particles {
            particle.position += particle.velocity * dt;

            if particle.position.x.abs() > bounds.x {
                particle.velocity.x = -particle.velocity.x;
                particle.position.x = particle.position.x.clamp(-bounds.x, bounds.x);
            }
            if particle.position.y.abs() > bounds.y {
                particle.velocity.y = -particle.velocity.y;
                particle.position.y = particle.position.y.clamp(-bounds.y, bounds.y);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn field(seed: u64) -> ParticleField {
        let mut rng = StdRng::seed_from_u64(seed);
        ParticleField::new(DEFAULT_PARTICLE_COUNT, Vec2::new(9.0, 4.0), &mut rng)
    }

    #[test]
    fn test_spawn_inside_bounds() {
        let field = field(11);

        assert_eq!(field.particles().len(), DEFAULT_PARTICLE_COUNT);
        for p in field.particles() {
            assert!(p.position.x.abs() <= 9.0 && p.position.y.abs() <= 4.0);
            assert!((MIN_RADIUS..=MAX_RADIUS).contains(&p.radius));
            assert!(PALETTE.contains(&p.color));
        }
    }

    #[test]
    fn test_particles_stay_inside_bounds() {
        let mut field = field(12);

        for _ in 0..2000 {
            field.step(1.0 / 30.0);
        }

        for p in field.particles() {
            assert!(p.position.x.abs() <= 9.0 && p.position.y.abs() <= 4.0);
        }
    }

    #[test]
    fn test_reflection_flips_velocity() {
        let mut field = ParticleField {
            half_extents: Vec2::new(1.0, 1.0),
            particles: vec![Particle {
                position: Vec2::new(0.95, 0.0),
                velocity: Vec2::new(0.3, 0.1),
                radius: 0.02,
                color: PALETTE[0],
            }],
        };

        field.step(0.5);

        let p = field.particles()[0];
        assert_eq!(p.velocity, Vec2::new(-0.3, 0.1));
        assert_eq!(p.position.x, 1.0);
    }

    #[test]
    fn test_zero_dt_is_still() {
        let mut field = field(13);
        let before: Vec<_> = field.particles().to_vec();

        field.step(0.0);
        assert_eq!(field.particles(), before.as_slice());
    }
}
