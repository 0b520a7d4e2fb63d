use slidersphere_scene::{MeshShape, Scene};
use std::fmt::Write;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads the scene, including its camera, and produces
/// output. It never mutates the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame of the given scene.
    fn render(&self, scene: &Scene) -> Self::Output;
}

/// Produces a human-readable description of a scene.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene) -> String {
        let mut out = String::new();
        let cam = &scene.camera;
        let eye = cam.position();
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "=== Scene (objects={}, lights={}) ===",
            scene.object_count(),
            scene.lights().len()
        );
        let _ = writeln!(
            out,
            "Camera: alpha={:.2} beta={:.2} radius={:.1} eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1})",
            cam.alpha,
            cam.beta,
            cam.radius,
            eye.x,
            eye.y,
            eye.z,
            cam.target.x,
            cam.target.y,
            cam.target.z
        );

        for light in scene.lights() {
            let p = light.position;
            let _ = writeln!(
                out,
                "  light {} at ({:.1}, {:.1}, {:.1}) intensity={:.1}",
                light.name, p.x, p.y, p.z, light.intensity
            );
        }

        for object in scene.objects() {
            let p = object.transform.position;
            let shape = match object.shape {
                MeshShape::Sphere { segments, diameter } => {
                    format!("sphere(segments={segments}, diameter={diameter})")
                }
                MeshShape::Ground {
                    width,
                    height,
                    subdivisions,
                } => format!("ground({width}x{height}, subdivisions={subdivisions})"),
            };
            let _ = writeln!(
                out,
                "  [{}] {} {} pos=({:.2}, {:.2}, {:.2})",
                object.id.short(),
                object.name,
                shape,
                p.x,
                p.y,
                p.z
            );
        }

        out
    }
}
