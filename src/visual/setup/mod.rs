pub mod scene;

pub use scene::setup_avatar_field;
