use super::camera::Ray;
use super::constants::*;
use super::model::Aabb;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3};
use rand::Rng;

/// Position, euler rotation (pitch, yaw, roll) and scale of one node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        // yaw, then pitch, then roll
        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y,
            self.rotation.x,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(self.scale, rotation, self.position)
    }
}

/// The loaded taco: an invisible pivot carrying the idle rotation, and a root
/// node under it that the shake and dismissal animations write to.
pub struct Mascot {
    pub pivot: Transform,
    pub root: Transform,
    pub visibility: f32,
    bounds: Aabb,
    rotation_speed: f32,
    idle_paused: bool,
}

impl Mascot {
    pub fn new(bounds: Aabb, pos: Vec2, rotation_speed: f32) -> Self {
        Self {
            pivot: Transform {
                position: Vec3::new(pos.x, pos.y, 0.0),
                rotation: Vec3::new(PIVOT_PITCH, PIVOT_YAW, PIVOT_ROLL),
                scale: Vec3::ONE,
            },
            root: Transform::default(),
            visibility: 1.0,
            bounds,
            rotation_speed,
            idle_paused: false,
        }
    }

    /// One frame of idle spin around the pivot's Y axis.
    pub fn idle_tick(&mut self) {
        if !self.idle_paused {
            self.pivot.rotation.y += self.rotation_speed;
        }
    }

    pub fn pause_idle(&mut self) {
        self.idle_paused = true;
    }

    pub fn resume_idle(&mut self) {
        self.idle_paused = false;
    }

    #[inline]
    pub fn is_idle_paused(&self) -> bool {
        self.idle_paused
    }

    /// Replace the root offsets with fresh jitter, each axis uniform in
    /// `[0, intensity)`.
    pub fn jitter<R: Rng>(&mut self, intensity: f32, rng: &mut R) {
        let mut sample = || rng.gen::<f32>() * intensity;
        self.root.position = Vec3::new(sample(), sample(), sample());
        self.root.rotation = Vec3::new(sample(), sample(), sample());
    }

    pub fn settle(&mut self) {
        self.root.position = Vec3::ZERO;
        self.root.rotation = Vec3::ZERO;
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.root.scale = Vec3::splat(scale);
    }

    pub fn world_matrix(&self) -> Mat4 {
        self.pivot.matrix() * self.root.matrix()
    }

    /// Where overlays are anchored.
    #[inline]
    pub fn anchor(&self) -> Vec3 {
        self.pivot.position
    }

    /// World position of the root node, which the particles follow.
    pub fn root_world_position(&self) -> Vec3 {
        self.world_matrix().transform_point3(Vec3::ZERO)
    }

    #[inline]
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// Distance along `ray` to the mascot's bounding box, if it is hit.
    pub fn hit_test(&self, ray: &Ray) -> Option<f32> {
        let world = self.world_matrix();
        let inv = world.inverse();
        let local = Ray {
            origin: inv.transform_point3(ray.origin),
            direction: inv.transform_vector3(ray.direction),
        };
        // direction stays unnormalised so t is the same in both spaces
        self.bounds.intersect(&local)
    }
}
