// Host-side tests for scene constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn timings_are_positive_and_ordered() {
    assert!(HOLD_DURATION_SEC > 0.0);
    assert!(FILL_REVERSE_SEC > 0.0 && FILL_REVERSE_SEC < HOLD_DURATION_SEC);
    assert!(DISMISS_FADE_SEC > 0.0);
    // a ring outlives one spawn period, so rings overlap
    assert!(WAVE_GROW_SEC > WAVE_PERIOD_SEC);
    assert!(FLARE_LEG_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ring_and_label_geometry_is_sane() {
    assert!(WAVE_SIZE_END_PX > WAVE_SIZE_START_PX);
    assert!(WAVE_THICKNESS_START_PX > WAVE_THICKNESS_END_PX);
    assert!(WAVE_THICKNESS_END_PX >= 0.0);
    assert!(WAVE_ALPHA_PEAK > 0.0 && WAVE_ALPHA_PEAK <= 1.0);
    assert!(LABEL_CORNER_RADIUS_PX * 2.0 >= LABEL_HEIGHT_PX);
    assert!(LABEL_LINK_OFFSET_Y_PX < WAVE_LINK_OFFSET_Y_PX);
    assert_eq!(ACCENT_COLOR.len(), 7);
    assert!(ACCENT_COLOR.starts_with('#'));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn flares_sit_behind_the_mascot_plane() {
    assert!(FLARE_Z > 0.0);
    assert!(CAMERA_EYE.z < 0.0);
    assert!(FLARE_LARGE > FLARE_SMALL);
}

#[test]
fn particle_colors_fade_to_transparent() {
    assert_eq!(PARTICLE_COLOR_START[3], 1.0);
    assert_eq!(PARTICLE_COLOR_DEAD[3], 0.0);
    // both spawn directions point upwards
    assert!(PARTICLE_DIRECTION_1.y > 0.0 && PARTICLE_DIRECTION_2.y > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn listener_plane_is_between_camera_and_mascot() {
    assert!(LISTENER_Z > CAMERA_EYE.z && LISTENER_Z < 0.0);
    assert!(LISTENER_RAY_DISTANCE > 0.0);
    assert!(CAMERA_ZNEAR > 0.0 && CAMERA_ZFAR > CAMERA_ZNEAR);
}
