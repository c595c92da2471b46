//! Scene composition.

pub mod throw_scene;

pub use throw_scene::ThrowScene;
