use crate::mesh::{MeshData, Vertex};
use crate::shaders;
use bytemuck::{Pod, Zeroable};
use glam::Mat4;
use slidersphere_common::ObjectId;
use slidersphere_scene::{MeshShape, Scene};
use std::collections::BTreeMap;
use wgpu::util::DeviceExt;

/// Lights beyond this count are ignored by the shader.
pub const MAX_LIGHTS: usize = 4;

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    lights: [[f32; 4]; MAX_LIGHTS],
    light_count: [u32; 4],
}

impl Uniforms {
    fn from_scene(scene: &Scene) -> Self {
        let cam = &scene.camera;
        let eye = cam.position();
        let mut lights = [[0.0; 4]; MAX_LIGHTS];
        for (slot, light) in lights.iter_mut().zip(scene.lights()) {
            let p = light.position;
            *slot = [p.x, p.y, p.z, light.intensity];
        }
        let count = scene.lights().len().min(MAX_LIGHTS) as u32;
        Self {
            view_proj: cam.view_projection().to_cols_array_2d(),
            eye: [eye.x, eye.y, eye.z, 1.0],
            lights,
            light_count: [count, 0, 0, 0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Pod, Zeroable)]
struct InstanceData {
    model_0: [f32; 4],
    model_1: [f32; 4],
    model_2: [f32; 4],
    model_3: [f32; 4],
    color: [f32; 4],
}

impl InstanceData {
    fn new(model: Mat4, color: [f32; 4]) -> Self {
        let cols = model.to_cols_array_2d();
        Self {
            model_0: cols[0],
            model_1: cols[1],
            model_2: cols[2],
            model_3: cols[3],
            color,
        }
    }
}

fn shape_color(shape: &MeshShape) -> [f32; 4] {
    match shape {
        MeshShape::Sphere { .. } => [0.2, 0.6, 1.0, 1.0],
        MeshShape::Ground { .. } => [0.7, 0.7, 0.7, 1.0],
    }
}

/// Geometry and per-object instance buffer uploaded for one scene object.
struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,
    instance_buffer: wgpu::Buffer,
}

impl GpuMesh {
    fn new(device: &wgpu::Device, shape: &MeshShape) -> Self {
        let data = MeshData::from_shape(shape);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_vertex_buffer"),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_index_buffer"),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let instance_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("mesh_instance_buffer"),
            size: std::mem::size_of::<InstanceData>() as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
            instance_buffer,
        }
    }
}

/// wgpu-based scene renderer.
pub struct WgpuRenderer {
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    uniform_bind_group: wgpu::BindGroup,
    meshes: BTreeMap<ObjectId, GpuMesh>,
    depth_texture: wgpu::TextureView,
}

impl WgpuRenderer {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("uniform_buffer"),
            contents: bytemuck::bytes_of(&Uniforms::from_scene(&Scene::default())),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("uniform_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let uniform_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("uniform_bind_group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pipeline_layout"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("mesh_shader"),
            source: wgpu::ShaderSource::Wgsl(shaders::MESH_SHADER.into()),
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("mesh_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<Vertex>() as u64,
                        step_mode: wgpu::VertexStepMode::Vertex,
                        attributes: &wgpu::vertex_attr_array![
                            0 => Float32x3,
                            1 => Float32x3,
                        ],
                    },
                    wgpu::VertexBufferLayout {
                        array_stride: std::mem::size_of::<InstanceData>() as u64,
                        step_mode: wgpu::VertexStepMode::Instance,
                        attributes: &wgpu::vertex_attr_array![
                            2 => Float32x4,
                            3 => Float32x4,
                            4 => Float32x4,
                            5 => Float32x4,
                            6 => Float32x4,
                        ],
                    },
                ],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // Ground planes are seen from both sides.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: Default::default(),
                bias: Default::default(),
            }),
            multisample: Default::default(),
            multiview: None,
            cache: None,
        });

        let depth_texture = Self::create_depth_texture(device, width, height);

        Self {
            pipeline,
            uniform_buffer,
            uniform_bind_group,
            meshes: BTreeMap::new(),
            depth_texture,
        }
    }

    pub fn resize(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        self.depth_texture = Self::create_depth_texture(device, width, height);
    }

    /// Upload geometry for objects new to the scene and drop geometry for
    /// objects that left it.
    pub fn sync(&mut self, device: &wgpu::Device, scene: &Scene) {
        self.meshes
            .retain(|id, _| scene.objects().iter().any(|o| o.id == *id));
        for object in scene.objects() {
            if !self.meshes.contains_key(&object.id) {
                tracing::debug!(name = %object.name, shape = ?object.shape, "uploading mesh");
                self.meshes
                    .insert(object.id, GpuMesh::new(device, &object.shape));
            }
        }
    }

    /// Render one frame of `scene` into `view`.
    pub fn render(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        view: &wgpu::TextureView,
        scene: &Scene,
    ) {
        self.sync(device, scene);

        queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms::from_scene(scene)),
        );

        for object in scene.objects() {
            if let Some(mesh) = self.meshes.get(&object.id) {
                let instance = InstanceData::new(object.transform.matrix(), shape_color(&object.shape));
                queue.write_buffer(&mesh.instance_buffer, 0, bytemuck::bytes_of(&instance));
            }
        }

        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("render_encoder"),
        });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.2,
                            g: 0.2,
                            b: 0.3,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_texture,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                ..Default::default()
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.uniform_bind_group, &[]);
            for object in scene.objects() {
                let Some(mesh) = self.meshes.get(&object.id) else {
                    continue;
                };
                pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
                pass.set_vertex_buffer(1, mesh.instance_buffer.slice(..));
                pass.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                pass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }

        queue.submit(std::iter::once(encoder.finish()));
    }

    fn create_depth_texture(
        device: &wgpu::Device,
        width: u32,
        height: u32,
    ) -> wgpu::TextureView {
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("depth_texture"),
            size: wgpu::Extent3d {
                width: width.max(1),
                height: height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Depth32Float,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            view_formats: &[],
        });
        texture.create_view(&Default::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use slidersphere_scene::{PointLight, SceneConfig};

    #[test]
    fn uniform_layout_is_16_byte_aligned() {
        assert_eq!(std::mem::size_of::<Uniforms>() % 16, 0);
        assert_eq!(std::mem::size_of::<Uniforms>(), 160);
    }

    #[test]
    fn uniforms_carry_scene_lights() {
        let scene = SceneConfig::default().build_scene();
        let u = Uniforms::from_scene(&scene);
        assert_eq!(u.light_count[0], 2);
        assert_eq!(u.lights[1], [5.0, 10.0, 0.0, 1.0]);
        assert_eq!(u.lights[2], [0.0; 4]);
    }

    #[test]
    fn extra_lights_are_dropped() {
        let mut scene = Scene::default();
        for i in 0..(MAX_LIGHTS + 2) {
            scene.add_light(PointLight::new(format!("l{i}"), Vec3::splat(i as f32)));
        }
        let u = Uniforms::from_scene(&scene);
        assert_eq!(u.light_count[0] as usize, MAX_LIGHTS);
    }

    #[test]
    fn instance_data_holds_translation() {
        let model = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let inst = InstanceData::new(model, [1.0; 4]);
        assert_eq!(inst.model_3, [1.0, 2.0, 3.0, 1.0]);
    }

    #[test]
    fn shape_colors_differ() {
        let sphere = MeshShape::Sphere {
            segments: 16,
            diameter: 2.0,
        };
        let ground = MeshShape::Ground {
            width: 6.0,
            height: 6.0,
            subdivisions: 2,
        };
        assert_ne!(shape_color(&sphere), shape_color(&ground));
    }
}
