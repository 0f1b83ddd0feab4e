use super::constants::*;
use super::tween::{Ease, Repeat, Tween};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveEvent {
    Spawned(u64),
    Removed(u64),
}

/// One expanding ring. Alpha and size/thickness run on independent tweens;
/// the ring lives exactly as long as the growth tween.
#[derive(Clone, Debug)]
pub struct Ring {
    pub id: u64,
    alpha: Tween,
    // x = diameter, y = stroke thickness (CSS px)
    grow: Tween<Vec2>,
}

impl Ring {
    fn new(id: u64) -> Self {
        Self {
            id,
            alpha: Tween::new(0.0, WAVE_ALPHA_PEAK, WAVE_ALPHA_LEG_SEC, Ease::Power1Out)
                .with_repeat(Repeat::Times(WAVE_ALPHA_REPEATS))
                .with_yoyo(true),
            grow: Tween::new(
                Vec2::new(WAVE_SIZE_START_PX, WAVE_THICKNESS_START_PX),
                Vec2::new(WAVE_SIZE_END_PX, WAVE_THICKNESS_END_PX),
                WAVE_GROW_SEC,
                Ease::Power1Out,
            ),
        }
    }

    /// Returns `true` once the growth animation has finished.
    fn step(&mut self, dt: f32) -> bool {
        self.alpha.step(dt);
        self.grow.step(dt)
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha.value()
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.grow.value().x
    }

    #[inline]
    pub fn thickness(&self) -> f32 {
        self.grow.value().y.max(0.0)
    }

    #[inline]
    pub fn age(&self) -> f32 {
        self.grow.elapsed()
    }
}

/// Interval-driven ring emitter. The first ring appears one period after
/// start; `stop` clears the timer but lets live rings finish.
pub struct WaveSpawner {
    rings: Vec<Ring>,
    accum: f32,
    next_id: u64,
    running: bool,
}

impl Default for WaveSpawner {
    fn default() -> Self {
        Self::new()
    }
}

impl WaveSpawner {
    pub fn new() -> Self {
        Self {
            rings: Vec::new(),
            accum: 0.0,
            next_id: 0,
            running: true,
        }
    }

    pub fn tick(&mut self, dt: f32, events: &mut Vec<WaveEvent>) {
        let dt = dt.max(0.0);
        self.rings.retain_mut(|ring| {
            if ring.step(dt) {
                events.push(WaveEvent::Removed(ring.id));
                false
            } else {
                true
            }
        });

        if !self.running {
            return;
        }
        self.accum += dt;
        while self.accum >= WAVE_PERIOD_SEC {
            self.accum -= WAVE_PERIOD_SEC;
            // The leftover is how long ago this tick's interval actually fired.
            let late_by = self.accum;
            self.spawn(late_by, events);
        }
    }

    fn spawn(&mut self, late_by: f32, events: &mut Vec<WaveEvent>) {
        let mut ring = Ring::new(self.next_id);
        self.next_id += 1;
        events.push(WaveEvent::Spawned(ring.id));
        if ring.step(late_by) {
            events.push(WaveEvent::Removed(ring.id));
        } else {
            self.rings.push(ring);
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            log::info!("[waves] spawner stopped with {} rings live", self.rings.len());
        }
        self.running = false;
        self.accum = 0.0;
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }
}
