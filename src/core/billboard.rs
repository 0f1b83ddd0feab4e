use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BillboardKind {
    Flare,
    Particle,
}

/// A camera-facing quad in world space, shared by the flares and particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Billboard {
    pub position: Vec3,
    pub size: f32,
    pub angle: f32,
    pub color: [f32; 4],
    pub kind: BillboardKind,
}
