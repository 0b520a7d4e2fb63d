use crate::scene::Scene;

/// Per-frame callbacks run against the scene before each render.
///
/// Callbacks run synchronously, in registration order, once per frame.
pub struct RenderLoop {
    hooks: Vec<Box<dyn FnMut(&mut Scene)>>,
    frame: u64,
}

impl RenderLoop {
    pub fn new() -> Self {
        Self {
            hooks: Vec::new(),
            frame: 0,
        }
    }

    /// Register a callback to run before every render.
    pub fn before_render(&mut self, hook: impl FnMut(&mut Scene) + 'static) {
        self.hooks.push(Box::new(hook));
    }

    /// Number of frames ticked so far.
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }

    /// Run every hook once and advance the frame counter.
    pub fn tick(&mut self, scene: &mut Scene) -> u64 {
        for hook in &mut self.hooks {
            hook(scene);
        }
        self.frame += 1;
        tracing::trace!(frame = self.frame, "frame hooks ran");
        self.frame
    }

    /// Tick, then hand the updated scene to `render`.
    pub fn frame<T>(&mut self, scene: &mut Scene, render: impl FnOnce(&Scene) -> T) -> T {
        self.tick(scene);
        render(scene)
    }
}

impl Default for RenderLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RenderLoop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderLoop")
            .field("hooks", &self.hooks.len())
            .field("frame", &self.frame)
            .finish()
    }
}
