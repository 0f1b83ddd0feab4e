use crate::audio::{self, SpatialSound};
use crate::core::{listener_position, Effect, Ray, SceneEvent, TacoScene, WaveEvent};
use crate::dom::EventListener;
use crate::input;
use crate::overlay::Overlay;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct FrameContext {
    pub scene: TacoScene,
    pub canvas: web::HtmlCanvasElement,
    pub audio_ctx: web::AudioContext,
    pub overlay: Overlay,
    pub sound: Option<SpatialSound>,
    pub gpu: Option<render::GpuState>,
    /// Dropped on teardown, which unsubscribes every listener.
    pub subscriptions: Vec<EventListener>,
    pub last_instant: Instant,
    pub events: Vec<SceneEvent>,
    pub running: bool,
}

impl FrameContext {
    fn pick_ray(&self, ev: &web::PointerEvent) -> Ray {
        let pos = input::pointer_canvas_css(ev, &self.canvas);
        let size = input::canvas_css_size(&self.canvas);
        self.scene.pick_ray(size.x, size.y, pos.x, pos.y)
    }

    pub fn pointer_down(&mut self, ev: &web::PointerEvent) {
        if !self.running {
            return;
        }
        // autoplay policy: audio may only start from a user gesture
        _ = self.audio_ctx.resume();
        let ray = self.pick_ray(ev);
        let mut events = std::mem::take(&mut self.events);
        if self.scene.pointer_down(&ray, &mut events) {
            log::info!("[taco] hold started");
        }
        self.handle_events(&mut events);
        self.events = events;
    }

    pub fn pointer_up(&mut self) {
        if !self.running {
            return;
        }
        let mut events = std::mem::take(&mut self.events);
        self.scene.pointer_up(&mut events);
        self.handle_events(&mut events);
        self.events = events;
    }

    pub fn pointer_move(&self, ev: &web::PointerEvent) {
        if !self.running {
            return;
        }
        let ray = self.pick_ray(ev);
        audio::set_listener_position(&self.audio_ctx, listener_position(&ray));
    }

    /// Advance and draw one frame. Returns false once the scene has been torn
    /// down and no further frames should be requested.
    pub fn frame(&mut self) -> bool {
        if !self.running {
            return false;
        }
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let mut events = std::mem::take(&mut self.events);
        self.scene.tick(dt_sec, &mut events);
        self.handle_events(&mut events);
        self.events = events;
        if !self.running {
            return false;
        }

        self.overlay.update(&self.scene, &self.canvas);
        if let Some(sound) = &self.sound {
            sound.set_volume(self.scene.volume());
        }
        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            if let Err(e) = g.render(&self.scene) {
                log::error!("render error: {:?}", e);
            }
        }
        true
    }

    fn handle_events(&mut self, events: &mut Vec<SceneEvent>) {
        for ev in events.drain(..) {
            match ev {
                SceneEvent::Wave(WaveEvent::Spawned(id)) => self.overlay.add_ring(id),
                SceneEvent::Wave(WaveEvent::Removed(id)) => self.overlay.remove_ring(id),
                SceneEvent::Timeline(Effect::StopAudio) => {
                    if let Some(sound) = &mut self.sound {
                        sound.stop();
                    }
                }
                SceneEvent::Timeline(Effect::StopRenderLoop) => self.teardown(),
                SceneEvent::Timeline(effect) => log::debug!("[taco] {:?}", effect),
            }
        }
    }

    fn teardown(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.subscriptions.clear();
        self.sound = None;
        self.gpu = None;
        self.overlay.detach();
        self.canvas.remove();
        log::info!("[taco] dismissed; canvas removed");
    }
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(slot: &FrameSlot) {
    if let (Some(w), Some(cb)) = (web::window(), slot.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: FrameSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if frame_ctx.borrow_mut().frame() {
            request_frame(&tick_clone);
        } else {
            // the closure cannot drop itself while running
            let slot = tick_clone.clone();
            spawn_local(async move {
                drop(slot.borrow_mut().take());
            });
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
