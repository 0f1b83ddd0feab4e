#![cfg(target_arch = "wasm32")]
use crate::core::{decode_glb, SceneConfig, TacoScene};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("taco-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn load_sound(
    audio_ctx: &web::AudioContext,
    url: &str,
    scene: &TacoScene,
) -> Option<audio::SpatialSound> {
    let buffer = match audio::load_buffer(audio_ctx, url).await {
        Ok(b) => b,
        Err(e) => {
            log::warn!("[audio] {} unavailable, continuing silent: {:?}", url, e);
            return None;
        }
    };
    match audio::SpatialSound::start(audio_ctx, &buffer, scene.mascot().anchor()) {
        Ok(s) => Some(s),
        Err(e) => {
            log::warn!("[audio] sound not started: {:?}", e);
            None
        }
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let query = window.location().search().unwrap_or_default();
    let config = SceneConfig::from_query(&query);
    log::info!("[taco] {:?}", config);

    let canvas = dom::create_canvas(&document, config.layout)?;
    let resize = events::wire_canvas_resize(&canvas);
    let audio_ctx = web::AudioContext::new().map_err(dom::js_err)?;

    // Everything below is anchored to the mascot, so nothing is built
    // if the model is unavailable.
    let model = match dom::fetch_bytes(&config.model_url).await {
        Ok(bytes) => match decode_glb(&bytes) {
            Ok(m) => m,
            Err(e) => {
                log::error!("[taco] {} is not a usable model: {}", config.model_url, e);
                return Ok(());
            }
        },
        Err(e) => {
            log::error!("[taco] failed to load {}: {:?}", config.model_url, e);
            return Ok(());
        }
    };
    log::info!(
        "[taco] model loaded: {} vertices, {} triangles",
        model.vertices.len(),
        model.triangle_count()
    );

    let gpu = match render::GpuState::new(&canvas, &model).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    };
    let scene = TacoScene::new(&config, model.bounds);
    let overlay = overlay::Overlay::new(&document)?;
    let sound = load_sound(&audio_ctx, &config.sound_url, &scene).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        canvas,
        audio_ctx,
        overlay,
        sound,
        gpu,
        subscriptions: Vec::new(),
        last_instant: Instant::now(),
        events: Vec::new(),
        running: true,
    }));
    let mut subs = events::wire_input_handlers(&frame_ctx);
    subs.extend(resize);
    frame_ctx.borrow_mut().subscriptions = subs;

    frame::start_loop(frame_ctx);
    Ok(())
}
