// avatars/tuning.rs

use bevy::math::Vec2;

pub mod presets {
    use super::*;

    /// Current hero tuning: longer, springier entrance and idle motion
    pub const STANDARD: AnimationTuning = AnimationTuning {
        entrance_duration: 1.3,
        entrance_damping: 5.8,
        entrance_stiffness: 11.5,
        entrance_phase_offset: 0.12,
        entrance_amplitude: 4.2,
        repulsion_delay: 0.55,
        pointer_scale: Vec2::new(7.0, 3.2),
        influence_radius: 4.2,
        repel_strength: 1.35,
        reduced_repel_strength: 0.35,
        vertical_repel_factor: 0.8,
        wobble_frequency: 0.9,
        wobble_amplitude: 0.25,
        smoothing: 0.14,
        spin_per_frame: 0.004,
        pulse_frequency: 1.5,
        pulse_amplitude: 0.03,
    };

    /// First-generation tuning: no idle motion, tighter pointer field
    pub const CLASSIC: AnimationTuning = AnimationTuning {
        entrance_duration: 1.2,
        entrance_damping: 6.0,
        entrance_stiffness: 10.0,
        entrance_phase_offset: 0.15,
        entrance_amplitude: 4.0,
        repulsion_delay: 0.6,
        pointer_scale: Vec2::new(6.0, 2.5),
        influence_radius: 3.5,
        repel_strength: 1.1,
        reduced_repel_strength: 0.4,
        vertical_repel_factor: 0.8,
        wobble_frequency: 0.9,
        wobble_amplitude: 0.0,
        smoothing: 0.12,
        spin_per_frame: 0.0,
        pulse_frequency: 1.5,
        pulse_amplitude: 0.0,
    };
}

/// Numeric constants driving the avatar field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationTuning {
    /// Length of the entrance window in seconds
    pub entrance_duration: f32,
    pub entrance_damping: f32,
    pub entrance_stiffness: f32,
    pub entrance_phase_offset: f32,
    /// Horizontal reach of the entrance swing in scene units
    pub entrance_amplitude: f32,
    /// Local time after which the pointer starts pushing nodes
    pub repulsion_delay: f32,
    /// Normalized pointer to scene coordinates; must match the layout spread
    pub pointer_scale: Vec2,
    pub influence_radius: f32,
    pub repel_strength: f32,
    pub reduced_repel_strength: f32,
    pub vertical_repel_factor: f32,
    pub wobble_frequency: f32,
    pub wobble_amplitude: f32,
    /// Fraction of the remaining distance covered each frame
    pub smoothing: f32,
    /// Radians added to the spin each frame (see `RotationPacing`)
    pub spin_per_frame: f32,
    pub pulse_frequency: f32,
    pub pulse_amplitude: f32,
}

impl Default for AnimationTuning {
    fn default() -> Self {
        presets::STANDARD
    }
}

impl AnimationTuning {
    /// Look a preset up by name, case-insensitively
    pub fn preset(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" => Some(presets::STANDARD),
            "classic" => Some(presets::CLASSIC),
            _ => None,
        }
    }

    pub fn repel_strength(&self, reduced_motion: bool) -> f32 {
        if reduced_motion {
            self.reduced_repel_strength
        } else {
            self.repel_strength
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        assert_eq!(AnimationTuning::default(), presets::STANDARD);
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(AnimationTuning::preset("Classic"), Some(presets::CLASSIC));
        assert_eq!(AnimationTuning::preset(" standard "), Some(presets::STANDARD));
        assert_eq!(AnimationTuning::preset("bouncy"), None);
    }

    #[test]
    fn test_reduced_motion_weakens_repulsion() {
        for tuning in [presets::STANDARD, presets::CLASSIC] {
            assert!(tuning.repel_strength(true) < tuning.repel_strength(false));
        }
    }

    #[test]
    fn test_presets_are_stable() {
        for tuning in [presets::STANDARD, presets::CLASSIC] {
            assert!(tuning.smoothing > 0.0 && tuning.smoothing < 1.0);
            assert!(tuning.repulsion_delay < tuning.entrance_duration);
            assert!(tuning.influence_radius > 0.0);
        }
    }
}
