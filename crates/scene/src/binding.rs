use crate::render_loop::RenderLoop;
use crate::scene::Scene;
use slidersphere_controls::State;
use std::cell::RefCell;
use std::rc::Rc;

/// Name of the sphere mesh the default scene creates.
pub const SPHERE_NAME: &str = "sphere1";

/// Copies the x/y/z slider values into a scene object's position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneBinding {
    target: String,
}

impl SceneBinding {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    /// Write the slider position into the target object.
    ///
    /// Returns `false` and leaves the scene unchanged when the target does
    /// not exist.
    pub fn apply(&self, state: &State, scene: &mut Scene) -> bool {
        let Some(object) = scene.find_mut(&self.target) else {
            tracing::trace!(target_name = %self.target, "binding target missing, skipped");
            return false;
        };
        object.transform.position = state.position();
        true
    }

    /// Run this binding before every frame of `render_loop`.
    pub fn install(self, state: Rc<RefCell<State>>, render_loop: &mut RenderLoop) {
        render_loop.before_render(move |scene| {
            self.apply(&state.borrow(), scene);
        });
    }
}

impl Default for SceneBinding {
    fn default() -> Self {
        Self::new(SPHERE_NAME)
    }
}
