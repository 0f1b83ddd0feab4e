// Host-side tests for the press-and-hold interaction timeline.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod taco {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod tween {
        include!("../src/core/tween.rs");
    }
    pub mod timeline {
        include!("../src/core/timeline.rs");
    }
}

use taco::constants::*;
use taco::timeline::*;

const DT: f32 = 0.25;

fn run(tl: &mut InteractionTimeline, seconds: f32, effects: &mut Vec<Effect>) {
    let steps = (seconds / DT).round() as usize;
    for _ in 0..steps {
        tl.tick(DT, effects);
    }
}

fn count(effects: &[Effect], e: Effect) -> usize {
    effects.iter().filter(|x| **x == e).count()
}

#[test]
fn miss_leaves_idle_untouched() {
    let mut tl = InteractionTimeline::new();
    let mut fx = Vec::new();
    assert!(!tl.pointer_down(false, &mut fx));
    assert!(fx.is_empty());
    assert_eq!(tl.phase(), Phase::Idle);
    run(&mut tl, 1.0, &mut fx);
    assert!(fx.is_empty());
    assert_eq!(tl.fill_ratio(), 0.0);
}

#[test]
fn press_pauses_idle_and_starts_fill() {
    let mut tl = InteractionTimeline::new();
    let mut fx = Vec::new();
    assert!(tl.pointer_down(true, &mut fx));
    assert_eq!(fx, vec![Effect::PauseIdleRotation, Effect::FillStarted]);
    assert_eq!(tl.phase(), Phase::Pressed);
    assert_eq!(tl.held_for(), Some(0.0));
}

#[test]
fn early_release_rewinds_fill_and_resumes_idle() {
    let mut tl = InteractionTimeline::new();
    let mut fx = Vec::new();
    tl.pointer_down(true, &mut fx);
    run(&mut tl, 1.0, &mut fx);
    let at_release = tl.fill_ratio();
    assert!((at_release - 1.0 / 3.0).abs() < 1e-3, "fill was {at_release}");
    assert!(tl.shake_intensity() > 0.0);
    assert!(tl.shake_intensity() <= SHAKE_INTENSITY_MAX);

    fx.clear();
    assert!(tl.pointer_up(&mut fx));
    assert_eq!(tl.phase(), Phase::Idle);
    assert_eq!(count(&fx, Effect::ResumeIdleRotation), 1);
    assert_eq!(count(&fx, Effect::SettleShake), 1);
    assert_eq!(tl.shake_intensity(), 0.0);

    // reverse runs over 0.2 s
    tl.tick(0.1, &mut fx);
    let mid = tl.fill_ratio();
    assert!(mid > 0.0 && mid < at_release);
    tl.tick(0.1, &mut fx);
    tl.tick(DT, &mut fx);
    assert!(tl.fill_ratio().abs() < 1e-6);

    run(&mut tl, 5.0, &mut fx);
    assert_eq!(tl.phase(), Phase::Idle);
    assert!(!fx.contains(&Effect::StopRenderLoop));
}

#[test]
fn full_hold_fires_cascade_once_then_stops() {
    let mut tl = InteractionTimeline::new();
    let mut fx = Vec::new();
    tl.pointer_down(true, &mut fx);
    fx.clear();

    run(&mut tl, HOLD_DURATION_SEC - DT, &mut fx);
    assert_eq!(tl.phase(), Phase::Pressed);
    assert!(fx.is_empty());

    tl.tick(DT, &mut fx);
    assert_eq!(tl.phase(), Phase::Holding);
    assert_eq!(tl.fill_ratio(), 1.0);

    run(&mut tl, 2.0, &mut fx);
    assert_eq!(tl.phase(), Phase::Dismissed);
    assert!(tl.is_terminal());

    for e in [
        Effect::StopWaves,
        Effect::PauseRays,
        Effect::StopParticles,
        Effect::FadeAudio,
        Effect::HideMesh,
        Effect::ScaleMascot,
        Effect::ShrinkSprites,
        Effect::FadeLabel,
        Effect::StopAudio,
        Effect::StopRenderLoop,
    ] {
        assert_eq!(count(&fx, e), 1, "{e:?}");
    }
    let stop_at = fx.iter().position(|e| *e == Effect::StopRenderLoop);
    let audio_at = fx.iter().position(|e| *e == Effect::StopAudio);
    assert!(audio_at < stop_at);
    assert_eq!(fx.last(), Some(&Effect::StopRenderLoop));

    assert!(tl.volume().abs() < 1e-6);
    assert!(tl.mesh_alpha().abs() < 1e-6);
    assert!(tl.sprite_scale().abs() < 1e-6);
    assert!(tl.label_alpha().abs() < 1e-6);
    assert!((tl.mascot_scale() - DISMISS_SCALE).abs() < 1e-6);
}

#[test]
fn dismissed_ignores_further_input() {
    let mut tl = InteractionTimeline::new();
    let mut fx = Vec::new();
    tl.pointer_down(true, &mut fx);
    run(&mut tl, 3.5, &mut fx);
    assert_eq!(tl.phase(), Phase::Dismissed);

    fx.clear();
    assert!(!tl.pointer_down(true, &mut fx));
    assert!(!tl.pointer_up(&mut fx));
    run(&mut tl, 1.0, &mut fx);
    assert!(fx.is_empty());
    assert_eq!(tl.phase(), Phase::Dismissed);
}

#[test]
fn release_during_dismissal_is_ignored() {
    let mut tl = InteractionTimeline::new();
    let mut fx = Vec::new();
    tl.pointer_down(true, &mut fx);
    run(&mut tl, HOLD_DURATION_SEC, &mut fx);
    assert_eq!(tl.phase(), Phase::Holding);
    assert!(!tl.pointer_up(&mut fx));
    assert!(!tl.pointer_down(true, &mut fx));
    assert_eq!(tl.phase(), Phase::Holding);
}

#[test]
fn repress_cancels_in_flight_fill_before_starting() {
    let mut tl = InteractionTimeline::new();
    let mut fx = Vec::new();
    tl.pointer_down(true, &mut fx);
    run(&mut tl, 0.5, &mut fx);
    tl.pointer_up(&mut fx);

    // rewind still running
    fx.clear();
    assert!(tl.pointer_down(true, &mut fx));
    let cancelled = fx.iter().position(|e| *e == Effect::FillCancelled);
    let started = fx.iter().position(|e| *e == Effect::FillStarted);
    assert!(cancelled.is_some());
    assert!(cancelled < started);
    assert_eq!(count(&fx, Effect::FillStarted), 1);
    assert_eq!(tl.fill_ratio(), 0.0);
}

#[test]
fn second_press_while_pressed_restarts_hold() {
    let mut tl = InteractionTimeline::new();
    let mut fx = Vec::new();
    tl.pointer_down(true, &mut fx);
    run(&mut tl, 2.0, &mut fx);

    fx.clear();
    assert!(tl.pointer_down(true, &mut fx));
    assert_eq!(fx, vec![Effect::FillCancelled, Effect::FillStarted]);

    run(&mut tl, 2.0, &mut fx);
    assert_eq!(tl.phase(), Phase::Pressed);
    run(&mut tl, 1.0, &mut fx);
    assert_eq!(tl.phase(), Phase::Holding);
}

#[test]
fn values_are_neutral_before_dismissal() {
    let tl = InteractionTimeline::default();
    assert_eq!(tl.volume(), 1.0);
    assert_eq!(tl.mesh_alpha(), 1.0);
    assert_eq!(tl.mascot_scale(), 1.0);
    assert_eq!(tl.sprite_scale(), 1.0);
    assert_eq!(tl.label_alpha(), 1.0);
    assert_eq!(tl.held_for(), None);
}
