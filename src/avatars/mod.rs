pub mod animator;
pub mod layout;
pub mod roster;
pub mod tuning;

pub use animator::{AvatarFieldAnimator, FrameInput, RotationPacing};
pub use roster::Roster;
pub use tuning::AnimationTuning;
