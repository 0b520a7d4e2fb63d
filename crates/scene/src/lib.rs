//! Scene: the objects, lights and camera handed to a renderer, plus the
//! per-frame hooks that copy slider state into the scene.
//!
//! # Invariants
//! - Renderers only read the scene; hooks run before each render.
//! - A binding whose target object is missing leaves the scene untouched.

pub mod binding;
pub mod camera;
pub mod config;
pub mod render_loop;
pub mod scene;

pub use binding::{SPHERE_NAME, SceneBinding};
pub use camera::ArcRotateCamera;
pub use config::{
    CameraConfig, ConfigError, GROUND_NAME, GroundConfig, LightConfig, SceneConfig, SphereConfig,
};
pub use render_loop::RenderLoop;
pub use scene::{MeshShape, PointLight, Scene, SceneObject};
