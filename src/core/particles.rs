use super::billboard::{Billboard, BillboardKind};
use super::constants::*;
use glam::Vec3;
use rand::prelude::*;

/// Animated fractal value noise, sampled in 3D with time as an extra offset.
#[derive(Clone, Debug)]
pub struct NoiseField {
    octaves: u32,
    persistence: f32,
    brightness: f32,
    speed: f32,
    seed: u32,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        Self {
            octaves: NOISE_OCTAVES,
            persistence: NOISE_PERSISTENCE,
            brightness: NOISE_BRIGHTNESS,
            speed: NOISE_ANIMATION_SPEED,
            seed,
        }
    }

    /// Sample in [0, 1].
    pub fn sample(&self, p: Vec3, time: f32) -> f32 {
        let p = p + Vec3::splat(time * self.speed * 0.1);
        let mut total = 0.0;
        let mut norm = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        for octave in 0..self.octaves.max(1) {
            total += value_noise(p * frequency, self.seed.wrapping_add(octave)) * amplitude;
            norm += amplitude;
            amplitude /= self.persistence.max(1e-3);
            frequency *= 2.0;
        }
        ((total / norm) * 2.0 * self.brightness).clamp(0.0, 1.0)
    }

    /// Three decorrelated samples centred on zero, in [-0.5, 0.5].
    pub fn sample_vec(&self, p: Vec3, time: f32) -> Vec3 {
        Vec3::new(
            self.sample(p, time) - 0.5,
            self.sample(p + Vec3::new(31.7, 0.0, 0.0), time) - 0.5,
            self.sample(p + Vec3::new(0.0, 0.0, 57.3), time) - 0.5,
        )
    }
}

#[inline]
fn lattice(x: i32, y: i32, z: i32, seed: u32) -> f32 {
    let mut h = (x as u32).wrapping_mul(0x8DA6_B343)
        ^ (y as u32).wrapping_mul(0xD816_3841)
        ^ (z as u32).wrapping_mul(0xCB1A_B31F)
        ^ seed.wrapping_mul(0x9E37_79B9);
    h ^= h >> 13;
    h = h.wrapping_mul(0x5BD1_E995);
    h ^= h >> 15;
    (h & 0x00FF_FFFF) as f32 / 0x00FF_FFFF as f32
}

fn value_noise(p: Vec3, seed: u32) -> f32 {
    let cell = p.floor();
    let f = p - cell;
    let s = f * f * (Vec3::splat(3.0) - 2.0 * f);
    let (x, y, z) = (cell.x as i32, cell.y as i32, cell.z as i32);

    let c000 = lattice(x, y, z, seed);
    let c100 = lattice(x + 1, y, z, seed);
    let c010 = lattice(x, y + 1, z, seed);
    let c110 = lattice(x + 1, y + 1, z, seed);
    let c001 = lattice(x, y, z + 1, seed);
    let c101 = lattice(x + 1, y, z + 1, seed);
    let c011 = lattice(x, y + 1, z + 1, seed);
    let c111 = lattice(x + 1, y + 1, z + 1, seed);

    let x00 = c000 + (c100 - c000) * s.x;
    let x10 = c010 + (c110 - c010) * s.x;
    let x01 = c001 + (c101 - c001) * s.x;
    let x11 = c011 + (c111 - c011) * s.x;
    let y0 = x00 + (x10 - x00) * s.y;
    let y1 = x01 + (x11 - x01) * s.y;
    y0 + (y1 - y0) * s.z
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Vec3,
    pub direction: Vec3,
    pub age: f32,
}

impl Particle {
    #[inline]
    pub fn life_fraction(&self) -> f32 {
        (self.age / PARTICLE_LIFETIME).clamp(0.0, 1.0)
    }
}

/// CPU particle emitter following the mascot.
///
/// Ages and motion run on simulation time, which advances
/// `PARTICLE_UPDATE_SPEED` per reference frame; emission runs on real time.
pub struct ParticleSystem {
    particles: Vec<Particle>,
    emitter: Vec3,
    emitting: bool,
    emit_accum: f32,
    sim_time: f32,
    noise: NoiseField,
    rng: StdRng,
}

impl ParticleSystem {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: Vec::with_capacity(PARTICLE_CAPACITY),
            emitter: Vec3::ZERO,
            emitting: true,
            emit_accum: 0.0,
            sim_time: 0.0,
            noise: NoiseField::new(seed as u32),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn set_emitter(&mut self, position: Vec3) {
        self.emitter = position;
    }

    pub fn stop(&mut self) {
        self.emitting = false;
        self.emit_accum = 0.0;
    }

    #[inline]
    pub fn is_emitting(&self) -> bool {
        self.emitting
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn tick(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        let sim_dt = dt * PARTICLE_UPDATE_SPEED * PARTICLE_REFERENCE_FPS;
        self.sim_time += sim_dt;

        let noise = &self.noise;
        let time = self.sim_time;
        self.particles.retain_mut(|p| {
            p.age += sim_dt;
            if p.age >= PARTICLE_LIFETIME {
                return false;
            }
            p.direction += noise.sample_vec(p.position, time) * PARTICLE_NOISE_STRENGTH * sim_dt;
            p.position += p.direction * PARTICLE_EMIT_POWER * sim_dt;
            true
        });

        if self.emitting {
            self.emit_accum += dt * PARTICLE_EMIT_RATE;
            while self.emit_accum >= 1.0 && self.particles.len() < PARTICLE_CAPACITY {
                self.emit_accum -= 1.0;
                self.emit_one();
            }
            // a full pool or a long frame never leaves a backlog
            self.emit_accum = self.emit_accum.min(1.0);
        }
    }

    fn emit_one(&mut self) {
        let t = Vec3::new(self.rng.gen(), self.rng.gen(), self.rng.gen());
        let direction = PARTICLE_DIRECTION_1 + (PARTICLE_DIRECTION_2 - PARTICLE_DIRECTION_1) * t;
        self.particles.push(Particle {
            position: self.emitter,
            direction,
            age: 0.0,
        });
    }

    pub fn billboards(&self) -> impl Iterator<Item = Billboard> + '_ {
        self.particles.iter().map(|p| {
            let t = p.life_fraction();
            let mut color = [0.0; 4];
            for (c, (a, b)) in color
                .iter_mut()
                .zip(PARTICLE_COLOR_START.iter().zip(PARTICLE_COLOR_DEAD.iter()))
            {
                *c = a + (b - a) * t;
            }
            Billboard {
                position: p.position,
                size: PARTICLE_SIZE,
                angle: 0.0,
                color,
                kind: BillboardKind::Particle,
            }
        })
    }
}
