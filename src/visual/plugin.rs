use crate::input::PointerTracking;
use crate::visual::nodes::{
    HeroState, animate_avatar_field, fade_avatars, sync_avatar_transforms, update_avatar_labels,
    update_hero_transform,
};
use crate::visual::particles::{draw_particles, setup_particles, step_particles};
use crate::visual::setup::setup_avatar_field;
use bevy::prelude::*;

pub struct AvatarFieldPlugin;

impl Plugin for AvatarFieldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HeroState>()
            .add_systems(Startup, (setup_avatar_field, setup_particles))
            .add_systems(
                Update,
                (
                    update_hero_transform,
                    // Avatar field
                    animate_avatar_field,
                    sync_avatar_transforms,
                    update_avatar_labels,
                    fade_avatars,
                    // Background
                    step_particles,
                    draw_particles,
                )
                    .chain()
                    .after(PointerTracking),
            );
    }
}
