// Host-side tests for the particle emitter.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod taco {
    pub mod billboard {
        include!("../src/core/billboard.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
}

use glam::Vec3;
use taco::billboard::BillboardKind;
use taco::constants::*;
use taco::particles::*;

const DT: f32 = 1.0 / 64.0;

/// Real seconds a particle survives.
fn lifetime_real_sec() -> f32 {
    PARTICLE_LIFETIME / (PARTICLE_UPDATE_SPEED * PARTICLE_REFERENCE_FPS)
}

fn run(ps: &mut ParticleSystem, seconds: f32) {
    let steps = (seconds / DT).ceil() as usize;
    for _ in 0..steps {
        ps.tick(DT);
    }
}

#[test]
fn emits_at_the_configured_rate() {
    let mut ps = ParticleSystem::new(7);
    ps.tick(0.25);
    assert_eq!(ps.len(), (0.25 * PARTICLE_EMIT_RATE) as usize);
}

#[test]
fn particles_start_at_the_emitter() {
    let mut ps = ParticleSystem::new(7);
    let at = Vec3::new(0.5, -0.25, 0.0);
    ps.set_emitter(at);
    ps.tick(0.1);
    assert!(!ps.is_empty());
    for p in ps.particles() {
        assert_eq!(p.position, at);
        assert_eq!(p.age, 0.0);
        assert!(p.direction.y >= 4.0 - 1e-5);
        assert!(p.direction.x >= -1.0 - 1e-5 && p.direction.x <= 1.0 + 1e-5);
    }
}

#[test]
fn particles_rise_over_time() {
    let mut ps = ParticleSystem::new(11);
    ps.tick(0.05);
    run(&mut ps, 0.5);
    let mean_y: f32 =
        ps.particles().iter().map(|p| p.position.y).sum::<f32>() / ps.len() as f32;
    assert!(mean_y > 0.0, "mean y {mean_y}");
}

#[test]
fn population_levels_off_at_rate_times_lifetime() {
    let mut ps = ParticleSystem::new(3);
    run(&mut ps, 3.0 * lifetime_real_sec());
    let steady = PARTICLE_EMIT_RATE * lifetime_real_sec();
    let n = ps.len() as f32;
    assert!((n - steady).abs() <= steady * 0.1, "{n} vs {steady}");
}

#[test]
fn stop_prevents_emission_and_drains_after_one_lifetime() {
    let mut ps = ParticleSystem::new(5);
    run(&mut ps, 0.5);
    ps.stop();
    assert!(!ps.is_emitting());
    let mut last = ps.len();
    for _ in 0..16 {
        ps.tick(DT);
        assert!(ps.len() <= last);
        last = ps.len();
    }
    run(&mut ps, lifetime_real_sec());
    assert!(ps.is_empty());
}

#[test]
fn billboards_fade_from_start_to_dead_color() {
    let mut ps = ParticleSystem::new(9);
    ps.tick(0.05);
    let fresh: Vec<_> = ps.billboards().collect();
    assert_eq!(fresh.len(), ps.len());
    for bb in &fresh {
        assert_eq!(bb.kind, BillboardKind::Particle);
        assert_eq!(bb.color, PARTICLE_COLOR_START);
        assert_eq!(bb.size, PARTICLE_SIZE);
    }

    ps.stop();
    run(&mut ps, lifetime_real_sec() * 0.9);
    for bb in ps.billboards() {
        assert!(bb.color[3] < 0.2);
    }
}

#[test]
fn noise_is_bounded_and_deterministic() {
    let a = NoiseField::new(1);
    let b = NoiseField::new(1);
    for i in 0..64 {
        let p = Vec3::new(i as f32 * 0.37, i as f32 * -0.11, i as f32 * 0.73);
        let s = a.sample(p, i as f32 * 0.1);
        assert!((0.0..=1.0).contains(&s));
        assert_eq!(s, b.sample(p, i as f32 * 0.1));
        let v = a.sample_vec(p, 0.0);
        assert!(v.abs().max_element() <= 0.5);
    }
}

#[test]
fn same_seed_same_simulation() {
    let mut a = ParticleSystem::new(42);
    let mut b = ParticleSystem::new(42);
    run(&mut a, 0.5);
    run(&mut b, 0.5);
    let pa: Vec<Vec3> = a.particles().iter().map(|p| p.position).collect();
    let pb: Vec<Vec3> = b.particles().iter().map(|p| p.position).collect();
    assert_eq!(pa, pb);
}

#[test]
fn long_frame_respects_capacity() {
    let mut ps = ParticleSystem::new(5);
    run(&mut ps, 1.0);
    assert!(ps.len() < PARTICLE_CAPACITY);

    // a tab resuming from the background delivers one huge dt
    ps.tick(120.0);
    assert_eq!(ps.len(), PARTICLE_CAPACITY);

    // no backlog is carried into the following frames
    for _ in 0..8 {
        ps.tick(DT);
        assert!(ps.len() <= PARTICLE_CAPACITY);
    }
    run(&mut ps, lifetime_real_sec() + 0.5);
    assert!(ps.len() < PARTICLE_CAPACITY);
}
