pub mod nodes;
pub mod particles;
pub mod plugin;
pub mod setup;
