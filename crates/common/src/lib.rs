//! Shared types used by the controls, scene and render crates.

pub mod types;

pub use types::{ObjectId, Transform};
