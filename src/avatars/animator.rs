// avatars/animator.rs

use bevy::math::{Vec2, Vec3};
use rand::Rng;

use super::{
    layout::{base_positions, entrance_delay},
    roster::Roster,
    tuning::AnimationTuning,
};

/// Keeps the repulsion direction finite when the pointer sits on a node
const DISTANCE_EPSILON: f32 = 0.0001;

/// Wobble seeds are drawn from [0, WOBBLE_SEED_RANGE)
const WOBBLE_SEED_RANGE: f32 = 10.0;

/// Everything the animator reads from the outside world for one frame
///
/// Taken once per frame and shared by every node, so all nodes see the same
/// pointer and reduced-motion state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// Monotonic clock in seconds
    pub now: f32,
    /// Normalized pointer in [-1, 1]², y up; `None` when outside the scene
    pub pointer: Option<Vec2>,
    pub reduced_motion: bool,
}

/// How the constant spin advances between frames
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RotationPacing {
    /// Fixed step per `step` call; spin speed follows the display refresh rate
    #[default]
    PerFrame,
    /// `spin_per_frame * reference_fps` radians per elapsed second
    PerSecond { reference_fps: f32 },
}

/// Rendered state of a node for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodePose {
    pub position: Vec3,
    pub scale: f32,
    pub rotation_y: f32,
}

/// One labeled badge in the field
#[derive(Debug, Clone)]
pub struct AvatarNode {
    label: String,
    base_position: Vec3,
    creation_time: f32,
    entrance_delay: f32,
    wobble_seed: f32,
    position: Vec3,
    scale: f32,
    rotation_y: f32,
}

impl AvatarNode {
    pub fn new(
        label: impl Into<String>,
        base_position: Vec3,
        creation_time: f32,
        entrance_delay: f32,
        wobble_seed: f32,
    ) -> Self {
        AvatarNode {
            label: label.into(),
            base_position,
            creation_time,
            entrance_delay,
            wobble_seed,
            position: base_position,
            scale: 1.0,
            rotation_y: 0.0,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn base_position(&self) -> Vec3 {
        self.base_position
    }

    pub fn entrance_delay(&self) -> f32 {
        self.entrance_delay
    }

    /// Seconds since this node's entrance began; negative while still waiting
    pub fn local_time(&self, now: f32) -> f32 {
        now - self.creation_time - self.entrance_delay
    }

    pub fn pose(&self) -> NodePose {
        NodePose {
            position: self.position,
            scale: self.scale,
            rotation_y: self.rotation_y,
        }
    }

    fn advance(&mut self, input: &FrameInput, spin: f32, tuning: &AnimationTuning) {
        let t = self.local_time(input.now);
        let target = target_position(self, t, input, tuning);

        let next = smooth_toward(self.position.truncate(), target, tuning.smoothing);
        self.position = next.extend(self.base_position.z);

        if input.reduced_motion {
            self.scale = 1.0;
            return;
        }

        self.rotation_y += spin;
        self.scale = 1.0 + (t * tuning.pulse_frequency + self.wobble_seed).sin() * tuning.pulse_amplitude;
    }
}

/// Damped-oscillator impulse for the entrance swing, `phase` in [0, 1]
pub fn entrance_overshoot(phase: f32, tuning: &AnimationTuning) -> f32 {
    (-tuning.entrance_damping * phase).exp()
        * (tuning.entrance_stiffness * (phase - tuning.entrance_phase_offset)).cos()
}

/// Linear falloff: 1 at zero distance, 0 at the influence radius
pub fn repulsion_falloff(distance: f32, radius: f32) -> f32 {
    (1.0 - distance / radius).max(0.0)
}

/// Offset pushing `anchor` radially away from a normalized pointer
pub fn pointer_repulsion(
    anchor: Vec2,
    pointer: Vec2,
    reduced_motion: bool,
    tuning: &AnimationTuning,
) -> Vec2 {
    let scene_pointer = pointer * tuning.pointer_scale;
    let delta = anchor - scene_pointer;
    let distance = delta.length() + DISTANCE_EPSILON;

    if distance >= tuning.influence_radius {
        return Vec2::ZERO;
    }

    let force = repulsion_falloff(distance, tuning.influence_radius);
    let strength = tuning.repel_strength(reduced_motion);

    Vec2::new(
        delta.x / distance * force * strength,
        delta.y / distance * force * tuning.vertical_repel_factor * strength,
    )
}

/// Where `node` wants to be at local time `t`
pub fn target_position(
    node: &AvatarNode,
    t: f32,
    input: &FrameInput,
    tuning: &AnimationTuning,
) -> Vec2 {
    let base = node.base_position.truncate();
    let mut target = base;

    // Entrance: nodes left of center swing left first
    if !input.reduced_motion && t >= 0.0 && t < tuning.entrance_duration {
        let phase = (t / tuning.entrance_duration).min(1.0);
        let sign = if base.x >= 0.0 { 1.0 } else { -1.0 };
        target.x = base.x + sign * tuning.entrance_amplitude * entrance_overshoot(phase, tuning);
    }

    if t > tuning.repulsion_delay {
        if let Some(pointer) = input.pointer {
            target += pointer_repulsion(base, pointer, input.reduced_motion, tuning);
        }
    }

    if !input.reduced_motion {
        target.y += (t * tuning.wobble_frequency + node.wobble_seed).sin() * tuning.wobble_amplitude;
    }

    target
}

/// Move a fixed fraction of the remaining distance; never overshoots
pub fn smooth_toward(current: Vec2, target: Vec2, smoothing: f32) -> Vec2 {
    current + (target - current) * smoothing
}

/// Drives the floating language badges, one `step` per rendered frame
#[derive(Debug, Clone)]
pub struct AvatarFieldAnimator {
    nodes: Vec<AvatarNode>,
    tuning: AnimationTuning,
    pacing: RotationPacing,
    last_now: Option<f32>,
}

impl AvatarFieldAnimator {
    /// Lay the roster out and draw a wobble seed for every node
    pub fn new(
        roster: &Roster,
        creation_time: f32,
        tuning: AnimationTuning,
        rng: &mut impl Rng,
    ) -> Self {
        let positions = base_positions(roster.len(), roster.spacing);

        let nodes = roster
            .avatars
            .iter()
            .zip(positions)
            .enumerate()
            .map(|(i, (avatar, base))| {
                let seed = rng.random_range(0.0..WOBBLE_SEED_RANGE);
                log::debug!("avatar {} anchored at {:.2} (seed {:.3})", avatar.label, base.x, seed);
                AvatarNode::new(
                    avatar.label.clone(),
                    base,
                    creation_time,
                    entrance_delay(i, roster.stagger),
                    seed,
                )
            })
            .collect();

        Self::from_nodes(nodes, tuning)
    }

    pub fn from_nodes(nodes: Vec<AvatarNode>, tuning: AnimationTuning) -> Self {
        AvatarFieldAnimator {
            nodes,
            tuning,
            pacing: RotationPacing::default(),
            last_now: None,
        }
    }

    pub fn with_pacing(mut self, pacing: RotationPacing) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn nodes(&self) -> &[AvatarNode] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Advance every node by one frame using a single input snapshot
    pub fn step(&mut self, input: FrameInput) {
        let spin = self.spin_increment(input.now);
        let tuning = &self.tuning;

        for node in &mut self.nodes {
            node.advance(&input, spin, tuning);
        }

        self.last_now = Some(input.now);
    }

    pub fn poses(&self) -> impl Iterator<Item = NodePose> + '_ {
        self.nodes.iter().map(AvatarNode::pose)
    }

    fn spin_increment(&self, now: f32) -> f32 {
        match self.pacing {
            RotationPacing::PerFrame => self.tuning.spin_per_frame,
            RotationPacing::PerSecond { reference_fps } => {
                let dt = self.last_now.map_or(0.0, |last| (now - last).max(0.0));
                self.tuning.spin_per_frame * reference_fps * dt
            }
        }
    }
}
