// effects/parallax.rs

use bevy::math::Vec2;

/// Piecewise-linear curve over increasing stops
#[derive(Debug, Clone, Copy)]
pub struct Keyframes<const N: usize> {
    pub stops: [f32; N],
    pub values: [f32; N],
}

impl<const N: usize> Keyframes<N> {
    pub const fn new(stops: [f32; N], values: [f32; N]) -> Self {
        Self { stops, values }
    }

    /// Sample at `progress`; clamps to the end values outside the stops
    pub fn sample(&self, progress: f32) -> f32 {
        if N == 0 {
            return 0.0;
        }
        if progress <= self.stops[0] {
            return self.values[0];
        }

        for i in 1..N {
            if progress <= self.stops[i] {
                let span = self.stops[i] - self.stops[i - 1];
                if span <= f32::EPSILON {
                    return self.values[i];
                }
                let t = (progress - self.stops[i - 1]) / span;
                return self.values[i - 1] + (self.values[i] - self.values[i - 1]) * t;
            }
        }

        self.values[N - 1]
    }
}

// Slide right first, then sink and fade as the hero scrolls away
const SLIDE_X: Keyframes<3> = Keyframes::new([0.0, 0.35, 1.0], [0.0, 4.2, 4.2]);
const SINK_Y: Keyframes<4> = Keyframes::new([0.0, 0.35, 0.8, 1.0], [0.0, 0.0, -2.8, -3.2]);
const FADE: Keyframes<4> = Keyframes::new([0.0, 0.7, 0.9, 1.0], [1.0, 1.0, 0.3, 0.0]);

/// Hero transform for a given scroll position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroTransform {
    /// Scene-unit offset applied to the whole avatar field
    pub offset: Vec2,
    pub opacity: f32,
}

impl HeroTransform {
    pub const IDENTITY: Self = HeroTransform {
        offset: Vec2::ZERO,
        opacity: 1.0,
    };
}

pub fn hero_transform(scroll_progress: f32, reduced_motion: bool) -> HeroTransform {
    if reduced_motion {
        return HeroTransform::IDENTITY;
    }

    let progress = scroll_progress.clamp(0.0, 1.0);

    HeroTransform {
        offset: Vec2::new(SLIDE_X.sample(progress), SINK_Y.sample(progress)),
        opacity: FADE.sample(progress),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyframes_interpolate() {
        let curve = Keyframes::new([0.0, 1.0, 3.0], [0.0, 10.0, 0.0]);

        assert_eq!(curve.sample(0.5), 5.0);
        assert_eq!(curve.sample(1.0), 10.0);
        assert_eq!(curve.sample(2.0), 5.0);
    }

    #[test]
    fn test_keyframes_clamp_outside() {
        let curve = Keyframes::new([0.2, 0.8], [3.0, 7.0]);

        assert_eq!(curve.sample(-1.0), 3.0);
        assert_eq!(curve.sample(5.0), 7.0);
    }

    #[test]
    fn test_hero_at_top_is_identity() {
        assert_eq!(hero_transform(0.0, false), HeroTransform::IDENTITY);
    }

    #[test]
    fn test_hero_slides_before_sinking() {
        let slid = hero_transform(0.35, false);
        assert!((slid.offset.x - 4.2).abs() < 1e-5);
        assert_eq!(slid.offset.y, 0.0);
        assert_eq!(slid.opacity, 1.0);

        let end = hero_transform(1.0, false);
        assert!((end.offset.y + 3.2).abs() < 1e-5);
        assert_eq!(end.opacity, 0.0);
    }

    #[test]
    fn test_hero_fades_late() {
        let hero = hero_transform(0.8, false);
        assert!((hero.opacity - 0.65).abs() < 1e-5);
        assert!((hero.offset.y + 2.8).abs() < 1e-5);
    }

    #[test]
    fn test_reduced_motion_pins_hero() {
        for progress in [0.0, 0.4, 0.9, 1.0] {
            assert_eq!(hero_transform(progress, true), HeroTransform::IDENTITY);
        }
    }
}
