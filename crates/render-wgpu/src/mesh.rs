use bytemuck::{Pod, Zeroable};
use slidersphere_scene::MeshShape;
use std::f32::consts::PI;

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// CPU-side triangle mesh.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn from_shape(shape: &MeshShape) -> Self {
        match *shape {
            MeshShape::Sphere { segments, diameter } => uv_sphere(segments, diameter / 2.0),
            MeshShape::Ground {
                width,
                height,
                subdivisions,
            } => ground(width, height, subdivisions),
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// UV sphere: `segments + 2` rings from pole to pole, twice as many sectors
/// around the Y axis.
fn uv_sphere(segments: u32, radius: f32) -> MeshData {
    let rings = segments.max(1) + 2;
    let sectors = rings * 2;
    let mut vertices = Vec::with_capacity(((rings + 1) * (sectors + 1)) as usize);

    for i in 0..=rings {
        let theta = PI * i as f32 / rings as f32;
        let (sin_t, cos_t) = theta.sin_cos();
        for j in 0..=sectors {
            let phi = 2.0 * PI * j as f32 / sectors as f32;
            let (sin_p, cos_p) = phi.sin_cos();
            let normal = [sin_t * cos_p, cos_t, sin_t * sin_p];
            vertices.push(Vertex {
                position: normal.map(|c| c * radius),
                normal,
            });
        }
    }

    let stride = sectors + 1;
    let mut indices = Vec::with_capacity((rings * sectors * 6) as usize);
    for i in 0..rings {
        for j in 0..sectors {
            let a = i * stride + j;
            let b = a + stride;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    MeshData { vertices, indices }
}

/// Flat XZ plane facing +Y, split into `subdivisions` x `subdivisions` quads.
fn ground(width: f32, height: f32, subdivisions: u32) -> MeshData {
    let n = subdivisions.max(1);
    let stride = n + 1;
    let mut vertices = Vec::with_capacity((stride * stride) as usize);

    for row in 0..=n {
        let z = -height / 2.0 + height * row as f32 / n as f32;
        for col in 0..=n {
            let x = -width / 2.0 + width * col as f32 / n as f32;
            vertices.push(Vertex {
                position: [x, 0.0, z],
                normal: [0.0, 1.0, 0.0],
            });
        }
    }

    let mut indices = Vec::with_capacity((n * n * 6) as usize);
    for row in 0..n {
        for col in 0..n {
            let a = row * stride + col;
            let b = a + stride;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }

    MeshData { vertices, indices }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec3;

    fn sphere(segments: u32, diameter: f32) -> MeshData {
        MeshData::from_shape(&MeshShape::Sphere { segments, diameter })
    }

    #[test]
    fn sphere_counts() {
        let mesh = sphere(16, 2.0);
        // 18 rings, 36 sectors
        assert_eq!(mesh.vertices.len(), 19 * 37);
        assert_eq!(mesh.triangle_count(), 18 * 36 * 2);
    }

    #[test]
    fn sphere_vertices_on_surface() {
        let mesh = sphere(16, 2.0);
        for v in &mesh.vertices {
            let p = Vec3::from_array(v.position);
            let n = Vec3::from_array(v.normal);
            assert_relative_eq!(p.length(), 1.0, epsilon = 1e-5);
            assert_relative_eq!(n.length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn sphere_poles() {
        let mesh = sphere(4, 3.0);
        assert_relative_eq!(mesh.vertices[0].position[1], 1.5, epsilon = 1e-5);
        let last = mesh.vertices.last().unwrap();
        assert_relative_eq!(last.position[1], -1.5, epsilon = 1e-5);
    }

    #[test]
    fn ground_extents() {
        let mesh = MeshData::from_shape(&MeshShape::Ground {
            width: 6.0,
            height: 4.0,
            subdivisions: 2,
        });
        assert_eq!(mesh.vertices.len(), 9);
        assert_eq!(mesh.triangle_count(), 8);
        assert_eq!(mesh.vertices[0].position, [-3.0, 0.0, -2.0]);
        assert_eq!(mesh.vertices[8].position, [3.0, 0.0, 2.0]);
        assert!(mesh.vertices.iter().all(|v| v.normal == [0.0, 1.0, 0.0]));
    }

    #[test]
    fn indices_in_bounds() {
        for mesh in [
            sphere(16, 2.0),
            MeshData::from_shape(&MeshShape::Ground {
                width: 1.0,
                height: 1.0,
                subdivisions: 5,
            }),
        ] {
            let count = mesh.vertices.len() as u32;
            assert!(mesh.indices.iter().all(|&i| i < count));
            assert_eq!(mesh.indices.len() % 3, 0);
        }
    }
}
