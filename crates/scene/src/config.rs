//! YAML scene description.
//!
//! Every field is optional; omitted fields fall back to the default demo:
//! three sliders over `[-5, 5]`, a 16-segment sphere of diameter 2, a 6x6
//! ground, an orbit camera ten units above the origin and two point lights.
//!
//! ```yaml
//! sliders:
//!   - { label: x, min: -5, max: 5, initial: 0 }
//!   - { label: y, min: -5, max: 5, initial: 0 }
//!   - { label: z, min: -5, max: 5, initial: 0 }
//! sphere: { segments: 16, diameter: 2 }
//! ground: { width: 6, height: 6, subdivisions: 2 }
//! camera: { alpha: 0, beta: 0, radius: 10, target: [0, 0, 0] }
//! lights:
//!   - { name: light1, position: [0, 10, 0] }
//! ```

use crate::binding::SPHERE_NAME;
use crate::camera::ArcRotateCamera;
use crate::scene::{MeshShape, PointLight, Scene};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use slidersphere_common::Transform;
use slidersphere_controls::{SliderConfig, SliderConfigError, State};
use std::path::Path;

/// Name of the ground mesh the default scene creates.
pub const GROUND_NAME: &str = "ground1";

/// Errors from loading or validating a scene description.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Slider(#[from] SliderConfigError),
    #[error("sphere needs at least 3 segments and a positive diameter, got {segments} / {diameter}")]
    InvalidSphere { segments: u32, diameter: f32 },
    #[error("ground needs a positive size and at least 1 subdivision, got {width}x{height} / {subdivisions}")]
    InvalidGround {
        width: f32,
        height: f32,
        subdivisions: u32,
    },
    #[error("camera radius must be positive and finite, got {0}")]
    InvalidCameraRadius(f32),
    #[error("{field} must be finite, got {value:?}")]
    NonFinite { field: String, value: Vec<f32> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    pub segments: u32,
    pub diameter: f32,
    /// Starting height before the sliders take over.
    pub y: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            segments: 16,
            diameter: 2.0,
            y: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroundConfig {
    pub width: f32,
    pub height: f32,
    pub subdivisions: u32,
}

impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            width: 6.0,
            height: 6.0,
            subdivisions: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub alpha: f32,
    pub beta: f32,
    pub radius: f32,
    pub target: [f32; 3],
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            alpha: 0.0,
            beta: 0.0,
            radius: 10.0,
            target: [0.0; 3],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightConfig {
    pub name: String,
    pub position: [f32; 3],
    #[serde(default = "default_intensity")]
    pub intensity: f32,
}

fn default_intensity() -> f32 {
    1.0
}

fn default_lights() -> Vec<LightConfig> {
    vec![
        LightConfig {
            name: "light1".into(),
            position: [0.0, 10.0, 0.0],
            intensity: 1.0,
        },
        LightConfig {
            name: "light2".into(),
            position: [5.0, 10.0, 0.0],
            intensity: 1.0,
        },
    ]
}

fn default_sliders() -> [SliderConfig; 3] {
    [
        SliderConfig::axis("x"),
        SliderConfig::axis("y"),
        SliderConfig::axis("z"),
    ]
}

/// Complete scene description: sliders, meshes, camera and lights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub sliders: [SliderConfig; 3],
    pub sphere: SphereConfig,
    pub ground: GroundConfig,
    pub camera: CameraConfig,
    pub lights: Vec<LightConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            sliders: default_sliders(),
            sphere: SphereConfig::default(),
            ground: GroundConfig::default(),
            camera: CameraConfig::default(),
            lights: default_lights(),
        }
    }
}

impl SceneConfig {
    /// Read and validate a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&text)?;
        tracing::info!(path = %path.display(), "scene config loaded");
        Ok(config)
    }

    /// Load `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse and validate a YAML document.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for slider in &self.sliders {
            slider.validate()?;
        }

        let SphereConfig {
            segments, diameter, ..
        } = self.sphere;
        if segments < 3 || !(diameter > 0.0) || !diameter.is_finite() {
            return Err(ConfigError::InvalidSphere { segments, diameter });
        }

        let GroundConfig {
            width,
            height,
            subdivisions,
        } = self.ground;
        if !(width > 0.0 && width.is_finite())
            || !(height > 0.0 && height.is_finite())
            || subdivisions == 0
        {
            return Err(ConfigError::InvalidGround {
                width,
                height,
                subdivisions,
            });
        }

        let radius = self.camera.radius;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::InvalidCameraRadius(radius));
        }

        check_finite("sphere.y", &[self.sphere.y])?;
        check_finite("camera.alpha", &[self.camera.alpha])?;
        check_finite("camera.beta", &[self.camera.beta])?;
        check_finite("camera.target", &self.camera.target)?;
        for light in &self.lights {
            check_finite(&format!("light {} position", light.name), &light.position)?;
            check_finite(&format!("light {} intensity", light.name), &[light.intensity])?;
        }
        Ok(())
    }

    /// Slider state described by this config.
    pub fn build_state(&self) -> State {
        State::from_config(&self.sliders)
    }

    /// Scene with the ground, the sphere, the lights and the camera.
    pub fn build_scene(&self) -> Scene {
        let cam = &self.camera;
        let mut camera = ArcRotateCamera::new(cam.alpha, cam.beta, cam.radius, Vec3::ZERO);
        camera.set_target(Vec3::from_array(cam.target));
        let mut scene = Scene::new(camera);

        for light in &self.lights {
            scene.add_light(PointLight {
                name: light.name.clone(),
                position: Vec3::from_array(light.position),
                intensity: light.intensity,
            });
        }

        scene.add_mesh(
            SPHERE_NAME,
            MeshShape::Sphere {
                segments: self.sphere.segments,
                diameter: self.sphere.diameter,
            },
            Transform::from_position(Vec3::new(0.0, self.sphere.y, 0.0)),
        );
        scene.add_mesh(
            GROUND_NAME,
            MeshShape::Ground {
                width: self.ground.width,
                height: self.ground.height,
                subdivisions: self.ground.subdivisions,
            },
            Transform::default(),
        );
        scene
    }
}

fn check_finite(field: &str, values: &[f32]) -> Result<(), ConfigError> {
    if values.iter().all(|v| v.is_finite()) {
        return Ok(());
    }
    Err(ConfigError::NonFinite {
        field: field.to_string(),
        value: values.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = SceneConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.lights.len(), 2);
    }

    #[test]
    fn empty_document_gives_defaults() {
        let config = SceneConfig::from_yaml("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn partial_document_overrides_fields() {
        let yaml = "sphere:\n  diameter: 3\nlights: []\n";
        let config = SceneConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.sphere.diameter, 3.0);
        assert_eq!(config.sphere.segments, 16);
        assert!(config.lights.is_empty());
    }

    #[test]
    fn yaml_round_trip() {
        let config = SceneConfig::default();
        let text = config.to_yaml().unwrap();
        assert_eq!(SceneConfig::from_yaml(&text).unwrap(), config);
    }

    #[test]
    fn degenerate_slider_rejected() {
        let yaml = "sliders:\n  - { label: x, min: 1, max: 1, initial: 1 }\n  - { label: y }\n  - { label: z }\n";
        let err = SceneConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Slider(SliderConfigError::EmptyRange { .. })
        ));
    }

    #[test]
    fn wrong_slider_count_is_a_yaml_error() {
        let yaml = "sliders:\n  - { label: x }\n";
        assert!(matches!(
            SceneConfig::from_yaml(yaml),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn invalid_sphere_rejected() {
        let yaml = "sphere: { segments: 2 }\n";
        assert!(matches!(
            SceneConfig::from_yaml(yaml),
            Err(ConfigError::InvalidSphere { segments: 2, .. })
        ));
    }

    #[test]
    fn invalid_ground_rejected() {
        let yaml = "ground: { width: 0 }\n";
        assert!(matches!(
            SceneConfig::from_yaml(yaml),
            Err(ConfigError::InvalidGround { .. })
        ));
    }

    #[test]
    fn invalid_camera_rejected() {
        let yaml = "camera: { radius: -1 }\n";
        assert!(matches!(
            SceneConfig::from_yaml(yaml),
            Err(ConfigError::InvalidCameraRadius(_))
        ));
    }

    #[test]
    fn infinite_sizes_rejected() {
        assert!(matches!(
            SceneConfig::from_yaml("sphere: { diameter: .inf }\n"),
            Err(ConfigError::InvalidSphere { .. })
        ));
        assert!(matches!(
            SceneConfig::from_yaml("ground: { height: .inf }\n"),
            Err(ConfigError::InvalidGround { .. })
        ));
    }

    #[test]
    fn non_finite_positions_rejected() {
        let err = SceneConfig::from_yaml("camera: { target: [0, .nan, 0] }\n").unwrap_err();
        assert!(matches!(err, ConfigError::NonFinite { ref field, .. } if field == "camera.target"));

        let yaml = "lights:\n  - { name: sun, position: [0, .inf, 0] }\n";
        let err = SceneConfig::from_yaml(yaml).unwrap_err();
        assert!(matches!(err, ConfigError::NonFinite { ref field, .. } if field == "light sun position"));
    }

    #[test]
    fn camera_targets_configured_point() {
        let scene = SceneConfig::from_yaml("camera: { target: [1, 2, 3] }\n")
            .unwrap()
            .build_scene();
        assert_eq!(scene.camera.target, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(scene.camera.radius, 10.0);
    }

    #[test]
    fn build_scene_matches_config() {
        let scene = SceneConfig::default().build_scene();
        let names: Vec<&str> = scene.objects().iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, [SPHERE_NAME, GROUND_NAME]);
        assert_eq!(
            scene.find(SPHERE_NAME).unwrap().shape,
            MeshShape::Sphere {
                segments: 16,
                diameter: 2.0
            }
        );
        assert_eq!(scene.lights()[1].position, Vec3::new(5.0, 10.0, 0.0));
        assert_eq!(scene.camera.radius, 10.0);
    }

    #[test]
    fn build_state_uses_slider_config() {
        let mut config = SceneConfig::default();
        config.sliders[1].initial = 2.0;
        let state = config.build_state();
        assert_eq!(state.position(), Vec3::new(0.0, 2.0, 0.0));
    }

    #[test]
    fn load_from_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(tmp, "ground: {{ subdivisions: 4 }}").unwrap();
        let config = SceneConfig::load(tmp.path()).unwrap();
        assert_eq!(config.ground.subdivisions, 4);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SceneConfig::load(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn load_or_default_without_path() {
        let config = SceneConfig::load_or_default(None).unwrap();
        assert_eq!(config, SceneConfig::default());
    }
}
