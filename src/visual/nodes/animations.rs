use bevy::prelude::*;

use crate::{
    avatars::FrameInput,
    camera::MainCamera,
    effects::hero_transform,
    input::{PointerState, ReducedMotion, ScrollProgress},
    visual::nodes::{AvatarField, AvatarLabel, EMISSIVE_INTENSITY, HeroState, LangAvatar},
};

/// System: Recompute the hero offset/opacity from scroll position
pub fn update_hero_transform(
    scroll: Res<ScrollProgress>,
    reduced: Res<ReducedMotion>,
    mut hero: ResMut<HeroState>,
) {
    hero.set_if_neq(HeroState(hero_transform(scroll.0, reduced.enabled)));
}

/// System: Advance the avatar field by one frame
///
/// Pointer and reduced-motion flag are read once here, so every node in the
/// frame sees the same snapshot.
pub fn animate_avatar_field(
    time: Res<Time>,
    pointer: Res<PointerState>,
    reduced: Res<ReducedMotion>,
    mut field: ResMut<AvatarField>,
) {
    let input = FrameInput {
        now: time.elapsed_secs(),
        pointer: pointer.normalized,
        reduced_motion: reduced.enabled,
    };

    field.0.step(input);
}

/// System: Copy node poses onto the sphere transforms
pub fn sync_avatar_transforms(
    field: Res<AvatarField>,
    hero: Res<HeroState>,
    mut avatars: Query<(&LangAvatar, &mut Transform)>,
) {
    let offset = hero.0.offset.extend(0.0);

    for (avatar, mut transform) in &mut avatars {
        let Some(node) = field.0.nodes().get(avatar.index) else {
            continue;
        };

        let pose = node.pose();
        transform.translation = pose.position + offset;
        transform.rotation = Quat::from_rotation_y(pose.rotation_y);
        transform.scale = Vec3::splat(pose.scale);
    }
}

/// System: Keep each label centered over its sphere
pub fn update_avatar_labels(
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    avatars: Query<(&LangAvatar, &Transform)>,
    hero: Res<HeroState>,
    mut labels: Query<(&AvatarLabel, &mut Node, &ComputedNode, &mut TextColor)>,
) {
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    for (label, mut node, computed, mut color) in &mut labels {
        let Some((_, transform)) = avatars.iter().find(|(a, _)| a.index == label.index) else {
            continue;
        };

        let Ok(screen) = camera.world_to_viewport(camera_transform, transform.translation) else {
            node.display = Display::None;
            continue;
        };

        let size = computed.size() * computed.inverse_scale_factor();
        node.display = Display::Flex;
        node.left = Val::Px(screen.x - size.x * 0.5);
        node.top = Val::Px(screen.y - size.y * 0.5);

        color.0 = Color::WHITE.with_alpha(hero.0.opacity);
    }
}

/// System: Fade the sphere materials with the hero
pub fn fade_avatars(
    hero: Res<HeroState>,
    avatars: Query<(&LangAvatar, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !hero.is_changed() {
        return;
    }

    let opacity = hero.0.opacity;

    for (avatar, material) in &avatars {
        let Some(material) = materials.get_mut(&material.0) else {
            continue;
        };

        material.base_color = avatar.base_color.with_alpha(opacity);
        material.emissive = LinearRgba::from(avatar.glow_color) * (EMISSIVE_INTENSITY * opacity);
    }
}
