//! wgpu render backend.
//!
//! Builds one GPU mesh per scene object (UV spheres and ground planes),
//! lights them with the scene's point lights and views them through the
//! scene's orbit camera.
//!
//! # Invariants
//! - Renderer never mutates the scene.
//! - Object transforms are re-read every frame; geometry is built once
//!   per object id.

mod gpu;
mod mesh;
mod shaders;

pub use gpu::{MAX_LIGHTS, WgpuRenderer};
pub use mesh::{MeshData, Vertex};
