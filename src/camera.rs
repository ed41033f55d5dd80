use bevy::prelude::*;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneCamera>()
            .insert_resource(AmbientLight {
                brightness: 600.0,
                ..default()
            })
            .add_systems(Startup, setup_camera);
    }
}

/// Perspective camera on the +Z axis looking at the avatar plane (z = 0)
#[derive(Resource, Debug, Clone)]
pub struct SceneCamera {
    pub distance: f32,
    pub fov_degrees: f32,
}

impl Default for SceneCamera {
    fn default() -> Self {
        Self {
            distance: 8.0,
            fov_degrees: 55.0,
        }
    }
}

impl SceneCamera {
    /// Half width and height of what the camera sees on the plane at `depth`
    pub fn visible_half_extents(&self, depth: f32, aspect_ratio: f32) -> Vec2 {
        let distance = (self.distance - depth).max(0.0);
        let half_height = distance * (self.fov_degrees.to_radians() * 0.5).tan();

        Vec2::new(half_height * aspect_ratio, half_height)
    }
}

#[derive(Component)]
pub struct MainCamera;

fn setup_camera(mut commands: Commands, scene_camera: Res<SceneCamera>) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: scene_camera.fov_degrees.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, scene_camera.distance).looking_at(Vec3::ZERO, Vec3::Y),
        MainCamera,
    ));

    commands.spawn((
        PointLight {
            intensity: 2_000_000.0,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 10.0),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_extents_scale_with_depth() {
        let camera = SceneCamera::default();

        let near = camera.visible_half_extents(0.0, 2.0);
        let far = camera.visible_half_extents(-3.0, 2.0);

        assert!(far.y > near.y);
        assert!((near.x - near.y * 2.0).abs() < 1e-5);
        // 8 * tan(27.5°)
        assert!((near.y - 4.1645).abs() < 1e-3);
    }

    #[test]
    fn test_visible_extents_behind_camera() {
        let camera = SceneCamera::default();
        assert_eq!(camera.visible_half_extents(10.0, 1.0), Vec2::ZERO);
    }
}
