use super::camera::Ray;
use glam::{Mat3, Mat4, Vec3};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid glTF: {0}")]
    Parse(#[from] gltf::Error),
    #[error("glTF has no embedded binary chunk")]
    MissingBlob,
    #[error("glTF contains no triangles")]
    Empty,
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Some(Self { min, max })
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Slab test. Returns the entry distance along `ray` (0 when the origin
    /// is inside the box).
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let mut t_min = 0.0_f32;
        let mut t_max = f32::INFINITY;
        for axis in 0..3 {
            let o = ray.origin[axis];
            let d = ray.direction[axis];
            if d.abs() < 1e-8 {
                if o < self.min[axis] || o > self.max[axis] {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / d;
            let mut t0 = (self.min[axis] - o) * inv;
            let mut t1 = (self.max[axis] - o) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_min > t_max {
                return None;
            }
        }
        Some(t_min)
    }
}

/// Flattened triangle soup of the mascot, in the scene's left-handed space.
#[derive(Clone, Debug)]
pub struct ModelData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    pub bounds: Aabb,
}

impl ModelData {
    pub fn from_parts(vertices: Vec<MeshVertex>, indices: Vec<u32>) -> Result<Self, ModelError> {
        if indices.len() < 3 {
            return Err(ModelError::Empty);
        }
        let bounds = Aabb::from_points(vertices.iter().map(|v| Vec3::from(v.position)))
            .ok_or(ModelError::Empty)?;
        Ok(Self {
            vertices,
            indices,
            bounds,
        })
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Decode a binary glTF (`.glb`) into a single vertex/index set.
///
/// Node transforms are baked in. glTF is right-handed; X is mirrored to land
/// in the left-handed scene space.
pub fn decode_glb(bytes: &[u8]) -> Result<ModelData, ModelError> {
    let gltf = gltf::Gltf::from_slice(bytes)?;
    let blob = gltf.blob.as_deref().ok_or(ModelError::MissingBlob)?;

    let mut vertices = Vec::new();
    let mut indices = Vec::new();
    let scene = gltf
        .default_scene()
        .or_else(|| gltf.scenes().next())
        .ok_or(ModelError::Empty)?;
    for node in scene.nodes() {
        visit_node(&node, Mat4::IDENTITY, blob, &mut vertices, &mut indices);
    }
    ModelData::from_parts(vertices, indices)
}

fn visit_node(
    node: &gltf::Node<'_>,
    parent: Mat4,
    blob: &[u8],
    vertices: &mut Vec<MeshVertex>,
    indices: &mut Vec<u32>,
) {
    let world = parent * Mat4::from_cols_array_2d(&node.transform().matrix());
    if let Some(mesh) = node.mesh() {
        let normal_matrix = Mat3::from_mat4(world).inverse().transpose();
        for primitive in mesh.primitives() {
            if primitive.mode() != gltf::mesh::Mode::Triangles {
                continue;
            }
            let reader = primitive.reader(|buffer| match buffer.source() {
                gltf::buffer::Source::Bin => Some(blob),
                gltf::buffer::Source::Uri(_) => None,
            });
            let Some(positions) = reader.read_positions() else {
                continue;
            };
            let positions: Vec<[f32; 3]> = positions.collect();
            let normals: Vec<[f32; 3]> = reader
                .read_normals()
                .map(|n| n.collect())
                .unwrap_or_else(|| vec![[0.0, 1.0, 0.0]; positions.len()]);
            let colors: Option<Vec<[f32; 4]>> =
                reader.read_colors(0).map(|c| c.into_rgba_f32().collect());
            let base = primitive
                .material()
                .pbr_metallic_roughness()
                .base_color_factor();

            let first = vertices.len() as u32;
            for (i, p) in positions.iter().enumerate() {
                let wp = world.transform_point3(Vec3::from(*p));
                let n = normals.get(i).copied().unwrap_or([0.0, 1.0, 0.0]);
                let wn = (normal_matrix * Vec3::from(n)).normalize_or_zero();
                let mut color = base;
                if let Some(c) = colors.as_ref().and_then(|c| c.get(i)) {
                    for (dst, src) in color.iter_mut().zip(c.iter()) {
                        *dst *= src;
                    }
                }
                vertices.push(MeshVertex {
                    position: [-wp.x, wp.y, wp.z],
                    normal: [-wn.x, wn.y, wn.z],
                    color,
                });
            }
            match reader.read_indices() {
                Some(idx) => indices.extend(idx.into_u32().map(|i| first + i)),
                None => indices.extend(first..first + positions.len() as u32),
            }
        }
    }
    for child in node.children() {
        visit_node(&child, world, blob, vertices, indices);
    }
}
