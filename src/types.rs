use glam::{Mat4, Vec3};

/// Per-frame uniform: camera transform and a single directional light
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ViewUniform {
    pub view_proj: [[f32; 4]; 4],
    pub light_dir: [f32; 3], // Unit vector pointing toward the light
    pub ambient: f32,
    pub diffuse: f32,
    pub _pad: [f32; 3],
}

impl ViewUniform {
    pub fn new(view_proj: Mat4, light_dir: Vec3, ambient: f32, diffuse: f32) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            light_dir: light_dir.normalize_or(Vec3::Y).to_array(),
            ambient,
            diffuse,
            _pad: [0.0; 3],
        }
    }
}

/// Unit cube corner with its face normal
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// One drawn box: the unit cube scaled, rotated about Y, then translated
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub center: [f32; 3],
    pub yaw: f32,
    pub half_extents: [f32; 3],
    pub _pad1: f32,
    pub color: [f32; 3],
    pub _pad2: f32,
}

impl InstanceData {
    pub fn new(center: Vec3, half_extents: Vec3, yaw: f32, color: [f32; 3]) -> Self {
        Self {
            center: center.to_array(),
            yaw,
            half_extents: half_extents.to_array(),
            _pad1: 0.0,
            color,
            _pad2: 0.0,
        }
    }
}

/// 36 vertices of a cube spanning [-1, 1] on every axis, CCW from outside.
pub fn cube_vertices() -> Vec<CubeVertex> {
    // (normal, u, v) with u x v = normal
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];
    let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];

    let mut vertices = Vec::with_capacity(36);
    for (normal, u, v) in faces {
        for (a, b) in corners {
            vertices.push(CubeVertex {
                position: (normal + u * a + v * b).to_array(),
                normal: normal.to_array(),
            });
        }
    }
    vertices
}
