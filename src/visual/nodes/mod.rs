pub mod animations;
pub mod components;

use crate::{avatars::AvatarFieldAnimator, effects::HeroTransform};
use bevy::prelude::*;

pub use animations::{
    animate_avatar_field, fade_avatars, sync_avatar_transforms, update_avatar_labels,
    update_hero_transform,
};
pub use components::{AvatarLabel, LangAvatar};

/// Emissive strength of the sphere glow
pub const EMISSIVE_INTENSITY: f32 = 0.55;

#[derive(Resource, Debug)]
pub struct AvatarField(pub AvatarFieldAnimator);

/// Scroll-driven offset and opacity of the whole hero
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct HeroState(pub HeroTransform);

impl Default for HeroState {
    fn default() -> Self {
        HeroState(HeroTransform::IDENTITY)
    }
}
