use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::input::touch::Touches;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Set to `1`/`true` to start with reduced motion enabled
pub const REDUCED_MOTION_ENV: &str = "LANG_AVATARS_REDUCED_MOTION";

/// Wheel travel that scrolls the hero fully out of view
const LINES_PER_HERO: f32 = 20.0;
const PIXELS_PER_HERO: f32 = 900.0;

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .init_resource::<ScrollProgress>()
            .insert_resource(ReducedMotion::from_env())
            .add_systems(
                Update,
                (track_pointer, track_scroll, toggle_reduced_motion).in_set(PointerTracking),
            );
    }
}

/// Systems writing the per-frame input resources; readers run after it
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PointerTracking;

/// Pointer in [-1, 1]² with y up, `None` when it is outside the window
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PointerState {
    pub normalized: Option<Vec2>,
}

#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct ReducedMotion {
    pub enabled: bool,
}

impl ReducedMotion {
    pub fn from_env() -> Self {
        let enabled = std::env::var(REDUCED_MOTION_ENV)
            .map(|value| parse_flag(&value))
            .unwrap_or(false);

        if enabled {
            info!("Reduced motion enabled from {}", REDUCED_MOTION_ENV);
        }

        Self { enabled }
    }
}

/// How far the hero has been scrolled away, 0 = top
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq)]
pub struct ScrollProgress(pub f32);

impl ScrollProgress {
    pub fn scroll_by(&mut self, delta: f32) {
        self.0 = (self.0 + delta).clamp(0.0, 1.0);
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Convert window coords (logical, top-left origin) to [-1, 1]² with y up
pub fn normalize_pointer(position: Vec2, window_size: Vec2) -> Option<Vec2> {
    if window_size.x <= 0.0 || window_size.y <= 0.0 {
        return None;
    }

    let x = position.x / window_size.x * 2.0 - 1.0;
    let y = 1.0 - position.y / window_size.y * 2.0;

    Some(Vec2::new(x, y).clamp(Vec2::NEG_ONE, Vec2::ONE))
}

fn track_pointer(
    windows: Query<&Window, With<PrimaryWindow>>,
    touches: Res<Touches>,
    mut pointer: ResMut<PointerState>,
) {
    let Ok(window) = windows.single() else {
        pointer.normalized = None;
        return;
    };

    // Mouse wins over touch; last touch standing keeps the pointer alive
    let position = window
        .cursor_position()
        .or_else(|| touches.iter().next().map(|touch| touch.position()));

    pointer.normalized = position.and_then(|p| normalize_pointer(p, window.size()));
}

fn track_scroll(mut wheel: MessageReader<MouseWheel>, mut scroll: ResMut<ScrollProgress>) {
    for event in wheel.read() {
        let delta = match event.unit {
            MouseScrollUnit::Line => event.y / LINES_PER_HERO,
            MouseScrollUnit::Pixel => event.y / PIXELS_PER_HERO,
        };
        // Wheel up scrolls back toward the top
        scroll.scroll_by(-delta);
    }
}

fn toggle_reduced_motion(keys: Res<ButtonInput<KeyCode>>, mut reduced: ResMut<ReducedMotion>) {
    if keys.just_pressed(KeyCode::KeyM) {
        reduced.enabled = !reduced.enabled;
        info!("Reduced motion: {}", reduced.enabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_corners() {
        let size = Vec2::new(800.0, 400.0);

        assert_eq!(normalize_pointer(Vec2::ZERO, size), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(normalize_pointer(size, size), Some(Vec2::new(1.0, -1.0)));
        assert_eq!(
            normalize_pointer(Vec2::new(400.0, 200.0), size),
            Some(Vec2::ZERO)
        );
    }

    #[test]
    fn test_normalize_clamps_and_rejects_empty_window() {
        let size = Vec2::new(100.0, 100.0);

        assert_eq!(
            normalize_pointer(Vec2::new(-50.0, 250.0), size),
            Some(Vec2::new(-1.0, -1.0))
        );
        assert_eq!(normalize_pointer(Vec2::ONE, Vec2::ZERO), None);
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag(" TRUE "));
        assert!(parse_flag("on"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("reduce"));
    }

    #[test]
    fn test_scroll_clamps() {
        let mut scroll = ScrollProgress::default();

        scroll.scroll_by(-0.3);
        assert_eq!(scroll.0, 0.0);

        scroll.scroll_by(0.4);
        scroll.scroll_by(0.4);
        assert!((scroll.0 - 0.8).abs() < 1e-6);

        scroll.scroll_by(5.0);
        assert_eq!(scroll.0, 1.0);
    }
}
