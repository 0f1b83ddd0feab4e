// Host-side tests for query-string configuration.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod taco {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
}

use glam::Vec2;
use taco::config::*;
use taco::constants::DEFAULT_ROTATION_SPEED;

#[test]
fn empty_query_gives_defaults() {
    let c = SceneConfig::from_query("");
    assert_eq!(c, SceneConfig::default());
    assert_eq!(c.rotation_speed, DEFAULT_ROTATION_SPEED);
    assert_eq!(c.layout, CanvasLayout::Fullscreen);
    assert_eq!(c.model_url, "assets/taco.glb");
    assert_eq!(c.sound_url, "assets/magic.wav");
}

#[test]
fn overrides_are_applied() {
    let c = SceneConfig::from_query("?rotationSpeed=0.02&x=1.5&y=-0.5&seed=9");
    assert_eq!(c.rotation_speed, 0.02);
    assert_eq!(c.taco_pos, Vec2::new(1.5, -0.5));
    assert_eq!(c.seed, 9);
}

#[test]
fn fixed_layout_uses_default_size_unless_given() {
    let c = SceneConfig::from_query("layout=fixed");
    assert_eq!(
        c.layout,
        CanvasLayout::Fixed {
            width: DEFAULT_FIXED_SIZE,
            height: DEFAULT_FIXED_SIZE
        }
    );
    let c = SceneConfig::from_query("layout=fixed&width=640&height=480");
    assert_eq!(
        c.layout,
        CanvasLayout::Fixed {
            width: 640,
            height: 480
        }
    );
}

#[test]
fn width_alone_implies_fixed() {
    let c = SceneConfig::from_query("width=300");
    assert_eq!(
        c.layout,
        CanvasLayout::Fixed {
            width: 300,
            height: DEFAULT_FIXED_SIZE
        }
    );
}

#[test]
fn malformed_values_fall_back() {
    let c = SceneConfig::from_query("rotationSpeed=fast&width=0&height=-3&layout=sideways&seed=");
    assert_eq!(c.rotation_speed, DEFAULT_ROTATION_SPEED);
    assert_eq!(c.layout, CanvasLayout::Fullscreen);
    assert_eq!(c.seed, SceneConfig::default().seed);
}

#[test]
fn unknown_keys_and_bare_flags_are_ignored() {
    let c = SceneConfig::from_query("?debug&foo=bar&&rotationSpeed=0");
    assert_eq!(c.rotation_speed, 0.0);
    assert_eq!(c.layout, CanvasLayout::Fullscreen);
}

#[test]
fn later_fullscreen_wins() {
    let c = SceneConfig::from_query("width=300&layout=fullscreen");
    assert_eq!(c.layout, CanvasLayout::Fullscreen);
}

#[test]
fn non_finite_numbers_fall_back() {
    let c = SceneConfig::from_query("rotationSpeed=NaN&x=inf&y=-infinity");
    assert_eq!(c.rotation_speed, DEFAULT_ROTATION_SPEED);
    assert_eq!(c.taco_pos, SceneConfig::default().taco_pos);
}
