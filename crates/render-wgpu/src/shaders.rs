/// WGSL shader for scene meshes lit by up to four point lights.
///
/// `lights[i].xyz` is the light position, `lights[i].w` its intensity.
pub const MESH_SHADER: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
    eye: vec4<f32>,
    lights: array<vec4<f32>, 4>,
    light_count: vec4<u32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
};

struct InstanceInput {
    @location(2) model_0: vec4<f32>,
    @location(3) model_1: vec4<f32>,
    @location(4) model_2: vec4<f32>,
    @location(5) model_3: vec4<f32>,
    @location(6) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) color: vec4<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    let world_pos = model * vec4<f32>(vertex.position, 1.0);
    let world_normal = (model * vec4<f32>(vertex.normal, 0.0)).xyz;

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * world_pos;
    out.world_position = world_pos.xyz;
    out.world_normal = normalize(world_normal);
    out.color = instance.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    var normal = normalize(in.world_normal);
    // Two-sided: flip normals facing away from the eye.
    if (dot(normal, uniforms.eye.xyz - in.world_position) < 0.0) {
        normal = -normal;
    }

    let ambient = 0.15;
    var diffuse = 0.0;
    for (var i = 0u; i < uniforms.light_count.x; i = i + 1u) {
        let light = uniforms.lights[i];
        let to_light = normalize(light.xyz - in.world_position);
        diffuse = diffuse + max(dot(normal, to_light), 0.0) * light.w;
    }
    let lighting = min(ambient + diffuse * 0.7, 1.2);
    return vec4<f32>(in.color.rgb * lighting, in.color.a);
}
"#;
