//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers read the scene and never mutate it.
//!
//! The GPU backend lives in `slidersphere-render-wgpu`; `DebugTextRenderer`
//! renders the same scene as text for the CLI and for tests.

mod renderer;

pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "slidersphere-render v0.1.0"
}
