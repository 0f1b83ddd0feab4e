// Host-side tests for glTF decoding and model bounds.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod taco {
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod model {
        include!("../src/core/model.rs");
    }
}

use glam::Vec3;
use taco::model::*;

/// A one-triangle `.glb` whose node is translated by +1 on X.
fn triangle_glb() -> Vec<u8> {
    let json = r#"{"asset":{"version":"2.0"},"scene":0,"scenes":[{"nodes":[0]}],"nodes":[{"mesh":0,"translation":[1.0,0.0,0.0]}],"meshes":[{"primitives":[{"attributes":{"POSITION":0}}]}],"buffers":[{"byteLength":36}],"bufferViews":[{"buffer":0,"byteOffset":0,"byteLength":36}],"accessors":[{"bufferView":0,"componentType":5126,"count":3,"type":"VEC3","min":[0.0,0.0,0.0],"max":[1.0,1.0,0.0]}]}"#;
    let mut json = json.as_bytes().to_vec();
    while json.len() % 4 != 0 {
        json.push(b' ');
    }
    let positions: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let bin: Vec<u8> = positions.iter().flat_map(|f| f.to_le_bytes()).collect();

    let total = 12 + 8 + json.len() + 8 + bin.len();
    let mut out = Vec::with_capacity(total);
    out.extend_from_slice(b"glTF");
    out.extend_from_slice(&2u32.to_le_bytes());
    out.extend_from_slice(&(total as u32).to_le_bytes());
    out.extend_from_slice(&(json.len() as u32).to_le_bytes());
    out.extend_from_slice(&0x4E4F_534Au32.to_le_bytes());
    out.extend_from_slice(&json);
    out.extend_from_slice(&(bin.len() as u32).to_le_bytes());
    out.extend_from_slice(&0x004E_4942u32.to_le_bytes());
    out.extend_from_slice(&bin);
    out
}

#[test]
fn decodes_single_triangle_with_node_transform_and_mirror() {
    let model = decode_glb(&triangle_glb()).expect("valid glb");
    assert_eq!(model.triangle_count(), 1);
    assert_eq!(model.indices, vec![0, 1, 2]);
    let xs: Vec<f32> = model.vertices.iter().map(|v| v.position[0]).collect();
    assert_eq!(xs, vec![-1.0, -2.0, -1.0]);
    assert_eq!(model.bounds.min, Vec3::new(-2.0, 0.0, 0.0));
    assert_eq!(model.bounds.max, Vec3::new(-1.0, 1.0, 0.0));
    for v in &model.vertices {
        assert_eq!(v.color, [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(v.normal[1], 1.0);
    }
}

#[test]
fn garbage_is_a_parse_error() {
    let err = decode_glb(b"definitely not a model").unwrap_err();
    assert!(matches!(err, ModelError::Parse(_)));
}

#[test]
fn no_triangles_is_empty() {
    assert!(matches!(
        ModelData::from_parts(Vec::new(), Vec::new()),
        Err(ModelError::Empty)
    ));
}

#[test]
fn bounds_cover_all_points() {
    let b = Aabb::from_points([
        Vec3::new(1.0, -2.0, 0.5),
        Vec3::new(-1.0, 3.0, 0.0),
        Vec3::new(0.0, 0.0, -4.0),
    ])
    .expect("non-empty");
    assert_eq!(b.min, Vec3::new(-1.0, -2.0, -4.0));
    assert_eq!(b.max, Vec3::new(1.0, 3.0, 0.5));
    assert_eq!(b.center(), Vec3::new(0.0, 0.5, -1.75));
    assert!(Aabb::from_points(std::iter::empty()).is_none());
}
