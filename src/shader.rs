//! WGSL source for the particle renderer.
//!
//! Each particle is one instanced quad sized to its radius plus the glow
//! reach. The fragment shader fills a hard-edged core circle and wraps it in
//! an exponential halo, replacing the canvas-style shadow blur of the
//! reference look.

pub const SHADER_SOURCE: &str = r#"
struct Uniforms {
    view_proj: mat4x4<f32>,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

// How far the halo extends past the circle edge, in logical units.
const GLOW_REACH: f32 = 42.0;
const CORE_ALPHA: f32 = 0.85;
const HALO_ALPHA: f32 = 0.35;
// rgb(70, 255, 143)
const GLOW_COLOR: vec3<f32> = vec3<f32>(0.2745, 1.0, 0.5608);

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) uv: vec2<f32>,
    @location(1) radius: f32,
    @location(2) half_extent: f32,
};

@vertex
fn vs_main(
    @builtin(vertex_index) vertex_index: u32,
    @location(0) center: vec2<f32>,
    @location(1) radius: f32,
) -> VertexOutput {
    var quad_vertices = array<vec2<f32>, 6>(
        vec2<f32>(-1.0, -1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>(-1.0,  1.0),
        vec2<f32>( 1.0, -1.0),
        vec2<f32>( 1.0,  1.0),
    );

    let corner = quad_vertices[vertex_index];
    let half_extent = radius + GLOW_REACH;
    let world = center + corner * half_extent;

    var out: VertexOutput;
    out.clip_position = uniforms.view_proj * vec4<f32>(world, 0.0, 1.0);
    out.uv = corner;
    out.radius = radius;
    out.half_extent = half_extent;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let dist = length(in.uv) * in.half_extent;
    let core = (1.0 - smoothstep(in.radius - 0.75, in.radius + 0.75, dist)) * CORE_ALPHA;
    let halo = exp(-max(dist - in.radius, 0.0) / (GLOW_REACH * 0.33)) * HALO_ALPHA;
    let alpha = max(core, halo);
    if alpha < 0.004 {
        discard;
    }
    return vec4<f32>(GLOW_COLOR, alpha);
}
"#;
