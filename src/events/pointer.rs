use crate::dom::EventListener;
use crate::frame::FrameContext;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Subscribe pointer down on the canvas, and move/up on the window so a
/// release outside the canvas still ends the hold.
pub fn wire_input_handlers(ctx: &Rc<RefCell<FrameContext>>) -> Vec<EventListener> {
    let mut subs = Vec::with_capacity(3);
    let canvas = ctx.borrow().canvas.clone();
    subs.push(wire_pointerdown(ctx, &canvas));
    if let Some(window) = web::window() {
        subs.push(wire_pointerup(ctx, &window));
        subs.push(wire_pointermove(ctx, &window));
    }
    subs
}

fn wire_pointerdown(ctx: &Rc<RefCell<FrameContext>>, canvas: &web::HtmlCanvasElement) -> EventListener {
    let ctx = ctx.clone();
    EventListener::new(canvas, "pointerdown", move |ev| {
        let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
            return;
        };
        let mut c = ctx.borrow_mut();
        _ = c.canvas.set_pointer_capture(ev.pointer_id());
        c.pointer_down(ev);
        ev.prevent_default();
    })
}

fn wire_pointerup(ctx: &Rc<RefCell<FrameContext>>, window: &web::Window) -> EventListener {
    let ctx = ctx.clone();
    EventListener::new(window, "pointerup", move |_ev| {
        ctx.borrow_mut().pointer_up();
    })
}

fn wire_pointermove(ctx: &Rc<RefCell<FrameContext>>, window: &web::Window) -> EventListener {
    let ctx = ctx.clone();
    EventListener::new(window, "pointermove", move |ev| {
        if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
            ctx.borrow().pointer_move(ev);
        }
    })
}
