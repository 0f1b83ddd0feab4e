pub mod billboard;
pub mod camera;
pub mod config;
pub mod constants;
pub mod mascot;
pub mod model;
pub mod particles;
pub mod rays;
pub mod scene;
pub mod timeline;
pub mod tween;
pub mod waves;

pub use billboard::*;
pub use camera::Ray;
pub use config::{CanvasLayout, SceneConfig};
pub use constants::*;
pub use model::{decode_glb, MeshVertex, ModelData};
pub use scene::{listener_position, SceneEvent, TacoScene};
pub use timeline::Effect;
pub use waves::WaveEvent;

// Shaders bundled as string constants
pub static MESH_WGSL: &str = include_str!("../../shaders/mesh.wgsl");
pub static BILLBOARD_WGSL: &str = include_str!("../../shaders/billboard.wgsl");
