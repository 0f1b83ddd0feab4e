use super::billboard::Billboard;
use super::camera::{Camera, Ray};
use super::config::SceneConfig;
use super::constants::*;
use super::mascot::Mascot;
use super::model::Aabb;
use super::particles::ParticleSystem;
use super::rays::RayEffect;
use super::timeline::{Effect, InteractionTimeline, Phase};
use super::waves::{WaveEvent, WaveSpawner};
use glam::{Vec2, Vec3};
use rand::prelude::*;

/// Everything the platform layer has to act on after a scene call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneEvent {
    Timeline(Effect),
    Wave(WaveEvent),
}

/// Label overlay state for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelState {
    pub fill_ratio: f32,
    pub alpha: f32,
}

/// Platform-independent scene controller.
///
/// Owns the mascot and every effect anchored to it, routes pointer input into
/// the interaction timeline and applies the timeline's effects to the
/// components. Built only once the model has loaded, so a failed load leaves
/// nothing to drive.
///
/// Transform ownership: while Idle only the idle rotation writes the pivot;
/// while Pressed only the shake jitter writes the root (idle rotation is
/// paused first); while Holding only the dismissal scale writes the root.
pub struct TacoScene {
    pub camera: Camera,
    mascot: Mascot,
    timeline: InteractionTimeline,
    waves: WaveSpawner,
    rays: RayEffect,
    particles: ParticleSystem,
    rng: StdRng,
    effects: Vec<Effect>,
    wave_events: Vec<WaveEvent>,
}

impl TacoScene {
    pub fn new(config: &SceneConfig, bounds: Aabb) -> Self {
        let mascot = Mascot::new(bounds, config.taco_pos, config.rotation_speed);
        let mut particles = ParticleSystem::new(config.seed ^ 0x5EED_0F_7AC0);
        particles.set_emitter(mascot.root_world_position());
        Self {
            camera: Camera::default(),
            mascot,
            timeline: InteractionTimeline::new(),
            waves: WaveSpawner::new(),
            rays: RayEffect::new(config.taco_pos),
            particles,
            rng: StdRng::seed_from_u64(config.seed),
            effects: Vec::new(),
            wave_events: Vec::new(),
        }
    }

    /// Pointer pressed along `ray`. Returns whether a hold started.
    pub fn pointer_down(&mut self, ray: &Ray, events: &mut Vec<SceneEvent>) -> bool {
        if matches!(self.timeline.phase(), Phase::Holding | Phase::Dismissed) {
            return false;
        }
        let hit = self.mascot.hit_test(ray).is_some();
        self.effects.clear();
        let started = self.timeline.pointer_down(hit, &mut self.effects);
        self.apply_effects(events);
        started
    }

    pub fn pointer_up(&mut self, events: &mut Vec<SceneEvent>) -> bool {
        self.effects.clear();
        let released = self.timeline.pointer_up(&mut self.effects);
        self.apply_effects(events);
        released
    }

    /// Advance one animation frame of `dt` seconds.
    pub fn tick(&mut self, dt: f32, events: &mut Vec<SceneEvent>) {
        if self.timeline.is_terminal() {
            return;
        }
        let dt = dt.max(0.0);

        self.effects.clear();
        self.timeline.tick(dt, &mut self.effects);
        self.apply_effects(events);

        if self.timeline.phase() == Phase::Pressed {
            self.mascot
                .jitter(self.timeline.shake_intensity(), &mut self.rng);
        }
        self.mascot.idle_tick();
        self.mascot.visibility = self.timeline.mesh_alpha();
        self.mascot.set_scale(self.timeline.mascot_scale());

        self.wave_events.clear();
        self.waves.tick(dt, &mut self.wave_events);
        events.extend(self.wave_events.iter().copied().map(SceneEvent::Wave));

        self.rays.tick(dt);
        self.rays.set_scale(self.timeline.sprite_scale());

        self.particles.set_emitter(self.mascot.root_world_position());
        self.particles.tick(dt);
    }

    fn apply_effects(&mut self, events: &mut Vec<SceneEvent>) {
        for effect in self.effects.iter().copied() {
            match effect {
                Effect::PauseIdleRotation => self.mascot.pause_idle(),
                Effect::ResumeIdleRotation => self.mascot.resume_idle(),
                Effect::SettleShake => self.mascot.settle(),
                Effect::StopWaves => self.waves.stop(),
                Effect::PauseRays => self.rays.pause(),
                Effect::StopParticles => self.particles.stop(),
                // Fades and the render-loop/audio stops are continuous values
                // or platform work; they are forwarded below.
                Effect::FillStarted
                | Effect::FillCancelled
                | Effect::FadeAudio
                | Effect::HideMesh
                | Effect::ScaleMascot
                | Effect::ShrinkSprites
                | Effect::FadeLabel
                | Effect::StopAudio
                | Effect::StopRenderLoop => {}
            }
            events.push(SceneEvent::Timeline(effect));
        }
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.timeline.phase()
    }

    #[inline]
    pub fn timeline(&self) -> &InteractionTimeline {
        &self.timeline
    }

    #[inline]
    pub fn mascot(&self) -> &Mascot {
        &self.mascot
    }

    #[inline]
    pub fn waves(&self) -> &WaveSpawner {
        &self.waves
    }

    #[inline]
    pub fn rays(&self) -> &RayEffect {
        &self.rays
    }

    #[inline]
    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn label(&self) -> LabelState {
        LabelState {
            fill_ratio: self.timeline.fill_ratio(),
            alpha: self.timeline.label_alpha(),
        }
    }

    #[inline]
    pub fn volume(&self) -> f32 {
        self.timeline.volume()
    }

    /// Flares first (drawn behind), then particles.
    pub fn billboards(&self) -> Vec<Billboard> {
        let mut out = Vec::with_capacity(2 + self.particles.len());
        out.extend_from_slice(&self.rays.billboards());
        out.extend(self.particles.billboards());
        out
    }

    /// Screen-space anchor of the mascot for overlays, in the same units as
    /// `width`/`height`.
    pub fn anchor_on_screen(&self, width: f32, height: f32) -> Option<Vec2> {
        self.camera
            .project_to_screen(self.mascot.anchor(), width, height)
    }

    pub fn pick_ray(&self, width: f32, height: f32, sx: f32, sy: f32) -> Ray {
        self.camera.screen_ray(width, height, sx, sy)
    }
}

/// Where the audio listener goes for a pointer ray: a fixed distance along the
/// ray, pulled onto the listener plane.
pub fn listener_position(ray: &Ray) -> Vec3 {
    let p = ray.at(LISTENER_RAY_DISTANCE);
    Vec3::new(p.x, p.y, LISTENER_Z)
}
