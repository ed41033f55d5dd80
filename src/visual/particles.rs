use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::{
    camera::SceneCamera,
    effects::{DEFAULT_PARTICLE_COUNT, ParticleField},
    input::ReducedMotion,
    visual::nodes::HeroState,
};

/// Plane the particles drift on, behind the avatars
const PARTICLE_DEPTH: f32 = -3.0;

const FALLBACK_ASPECT_RATIO: f32 = 16.0 / 9.0;

#[derive(Resource, Debug)]
pub struct Particles(pub ParticleField);

pub fn setup_particles(
    mut commands: Commands,
    scene_camera: Res<SceneCamera>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let aspect_ratio = windows
        .single()
        .ok()
        .filter(|window| window.height() > 0.0)
        .map_or(FALLBACK_ASPECT_RATIO, |window| window.width() / window.height());

    let half_extents = scene_camera.visible_half_extents(PARTICLE_DEPTH, aspect_ratio);
    let field = ParticleField::new(DEFAULT_PARTICLE_COUNT, half_extents, &mut rand::rng());

    info!("Particle field: {} particles in {:?}", field.particles().len(), half_extents);
    commands.insert_resource(Particles(field));
}

/// System: Drift particles; they hold still under reduced motion
pub fn step_particles(
    time: Res<Time>,
    reduced: Res<ReducedMotion>,
    mut particles: ResMut<Particles>,
) {
    if reduced.enabled {
        return;
    }

    particles.0.step(time.delta_secs());
}

pub fn draw_particles(particles: Res<Particles>, hero: Res<HeroState>, mut gizmos: Gizmos) {
    for particle in particles.0.particles() {
        gizmos.sphere(
            Isometry3d::from_translation(particle.position.extend(PARTICLE_DEPTH)),
            particle.radius,
            particle.color.with_alpha(hero.0.opacity),
        );
    }
}
