use bevy::prelude::*;

/// Sphere mesh driven by the node at `index` in the avatar field
#[derive(Component, Debug)]
pub struct LangAvatar {
    pub index: usize,
    pub base_color: Color,
    pub glow_color: Color,
}

/// Screen-space label that follows the sphere with the same index
#[derive(Component, Debug)]
pub struct AvatarLabel {
    pub index: usize,
}
