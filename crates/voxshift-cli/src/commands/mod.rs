//! CLI command implementations

pub mod inspect;
pub mod lipsync;
pub mod presets;
pub mod render;
