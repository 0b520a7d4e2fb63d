use crate::camera::ArcRotateCamera;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use slidersphere_common::{ObjectId, Transform};

/// Procedural mesh shapes a renderer knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MeshShape {
    /// UV sphere centred on the origin.
    Sphere { segments: u32, diameter: f32 },
    /// Flat XZ plane centred on the origin.
    Ground {
        width: f32,
        height: f32,
        subdivisions: u32,
    },
}

/// A named mesh placed in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub id: ObjectId,
    pub name: String,
    pub shape: MeshShape,
    pub transform: Transform,
}

/// Omnidirectional light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub name: String,
    pub position: Vec3,
    pub intensity: f32,
}

impl PointLight {
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            position,
            intensity: 1.0,
        }
    }
}

/// Everything a renderer needs for one frame.
///
/// Objects keep insertion order. Names are not required to be unique;
/// lookups by name return the first match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    objects: Vec<SceneObject>,
    lights: Vec<PointLight>,
    pub camera: ArcRotateCamera,
}

impl Scene {
    pub fn new(camera: ArcRotateCamera) -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
            camera,
        }
    }

    /// Add a mesh and return its id.
    pub fn add_mesh(
        &mut self,
        name: impl Into<String>,
        shape: MeshShape,
        transform: Transform,
    ) -> ObjectId {
        let id = ObjectId::new();
        let name = name.into();
        tracing::debug!(id = %id.short(), %name, ?shape, "mesh added");
        self.objects.push(SceneObject {
            id,
            name,
            shape,
            transform,
        });
        id
    }

    pub fn add_light(&mut self, light: PointLight) {
        tracing::debug!(name = %light.name, position = ?light.position, "light added");
        self.lights.push(light);
    }

    pub fn find(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.name == name)
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}
