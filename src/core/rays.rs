use super::billboard::{Billboard, BillboardKind};
use super::constants::*;
use super::tween::{Ease, Repeat, Tween};
use glam::{Vec2, Vec3};

struct Flare {
    position: Vec3,
    angle: f32,
    size: Tween,
}

/// The two pulsating sun-ray flares behind the mascot.
///
/// Both loops run forever, out of phase: the large flare shrinks while the
/// small one grows. `scale` multiplies the looped size and is how the
/// dismissal shrinks them to nothing.
pub struct RayEffect {
    flares: [Flare; 2],
    paused: bool,
    scale: f32,
}

impl RayEffect {
    pub fn new(pos: Vec2) -> Self {
        let position = Vec3::new(pos.x, pos.y + FLARE_OFFSET_Y, FLARE_Z);
        let pulse = |from: f32, to: f32, ease: Ease| {
            Tween::new(from, to, FLARE_LEG_SEC, ease)
                .with_repeat(Repeat::Forever)
                .with_yoyo(true)
        };
        Self {
            flares: [
                Flare {
                    position,
                    angle: 0.0,
                    size: pulse(FLARE_LARGE, FLARE_SMALL, Ease::Power1In),
                },
                Flare {
                    position,
                    angle: FLARE_SECOND_ANGLE,
                    size: pulse(FLARE_SMALL, FLARE_LARGE, Ease::Power1Out),
                },
            ],
            paused: false,
            scale: 1.0,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        for flare in &mut self.flares {
            flare.size.step(dt);
        }
    }

    pub fn pause(&mut self) {
        self.paused = true;
        for flare in &mut self.flares {
            flare.size.pause();
        }
    }

    pub fn play(&mut self) {
        self.paused = false;
        for flare in &mut self.flares {
            flare.size.play();
        }
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale.max(0.0);
    }

    pub fn sizes(&self) -> [f32; 2] {
        [
            self.flares[0].size.value() * self.scale,
            self.flares[1].size.value() * self.scale,
        ]
    }

    pub fn billboards(&self) -> [Billboard; 2] {
        let sizes = self.sizes();
        let make = |i: usize| Billboard {
            position: self.flares[i].position,
            size: sizes[i],
            angle: self.flares[i].angle,
            color: [1.0, 1.0, 1.0, 1.0],
            kind: BillboardKind::Flare,
        };
        [make(0), make(1)]
    }
}
