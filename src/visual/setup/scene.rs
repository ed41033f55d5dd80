use bevy::prelude::*;

use crate::{
    avatars::{AnimationTuning, AvatarFieldAnimator, Roster, RotationPacing},
    visual::nodes::{AvatarField, AvatarLabel, EMISSIVE_INTENSITY, LangAvatar},
};

/// Name of a tuning preset (`standard`, `classic`)
pub const PRESET_ENV: &str = "LANG_AVATARS_PRESET";

/// Sphere radius in scene units
const AVATAR_RADIUS: f32 = 1.0;

const LABEL_FONT_SIZE: f32 = 18.0;

/// Spin at the 60 Hz pace regardless of the display refresh rate
const SPIN_PACING: RotationPacing = RotationPacing::PerSecond { reference_fps: 60.0 };

pub fn setup_avatar_field(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    time: Res<Time>,
) {
    // A broken roster leaves an empty hero rather than taking the app down
    let roster = Roster::load().unwrap_or_else(|err| {
        error!("Could not load avatar roster: {}", err);
        Roster::default()
    });

    let animator = AvatarFieldAnimator::new(
        &roster,
        time.elapsed_secs(),
        tuning_from_env(),
        &mut rand::rng(),
    )
    .with_pacing(SPIN_PACING);

    let sphere = meshes.add(Sphere::new(AVATAR_RADIUS).mesh().uv(32, 18));

    for (index, (avatar, node)) in roster.avatars.iter().zip(animator.nodes()).enumerate() {
        let material = materials.add(StandardMaterial {
            base_color: avatar.primary,
            emissive: LinearRgba::from(avatar.glow_color()) * EMISSIVE_INTENSITY,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        commands.spawn((
            LangAvatar {
                index,
                base_color: avatar.primary,
                glow_color: avatar.glow_color(),
            },
            Mesh3d(sphere.clone()),
            MeshMaterial3d(material),
            Transform::from_translation(node.base_position()),
        ));

        commands.spawn((
            AvatarLabel { index },
            Text::new(avatar.label.clone()),
            TextFont {
                font_size: LABEL_FONT_SIZE,
                ..default()
            },
            TextColor(Color::WHITE),
            TextShadow::default(),
            Node {
                position_type: PositionType::Absolute,
                ..default()
            },
        ));

        info!(
            "Avatar {} at x={:.2} (delay {:.2}s)",
            node.label(),
            node.base_position().x,
            node.entrance_delay()
        );
    }

    if roster.is_empty() {
        warn!("Avatar field is empty");
    } else {
        info!("Avatar field ready with {} nodes", animator.len());
    }
    commands.insert_resource(AvatarField(animator));
}

fn tuning_from_env() -> AnimationTuning {
    let Ok(name) = std::env::var(PRESET_ENV) else {
        return AnimationTuning::default();
    };

    match AnimationTuning::preset(&name) {
        Some(tuning) => {
            info!("Using {} animation preset", name.trim());
            tuning
        }
        None => {
            warn!("Unknown animation preset {:?}, using standard", name);
            AnimationTuning::default()
        }
    }
}
