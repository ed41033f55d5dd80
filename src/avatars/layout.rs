// avatars/layout.rs

use bevy::math::Vec3;

/// Evenly space `count` anchors along the x-axis, centered on the origin
pub fn base_positions(count: usize, spacing: f32) -> Vec<Vec3> {
    if count == 0 {
        return Vec::new();
    }

    let start = -((count - 1) as f32 * spacing) / 2.0;

    (0..count)
        .map(|i| Vec3::new(start + i as f32 * spacing, 0.0, 0.0))
        .collect()
}

/// Seconds before the entrance of the node at `index` begins
pub fn entrance_delay(index: usize, stagger: f32) -> f32 {
    index as f32 * stagger
}
