use bevy::prelude::*;

mod avatars;
mod camera;
mod effects;
mod input;
mod visual;

use bevy::window::WindowResolution;
use camera::CameraPlugin;
use input::InputPlugin;

use crate::visual::plugin::AvatarFieldPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Language Avatars".into(),
            resolution: WindowResolution::new(1280, 420),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(ClearColor(Color::srgb(0.06, 0.05, 0.14)))
    .add_plugins(CameraPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(AvatarFieldPlugin);

    app.run();
}
