use crate::dom::{self, EventListener};
use web_sys as web;

/// Keep the canvas backing store at CSS size times devicePixelRatio.
pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) -> Option<EventListener> {
    dom::sync_canvas_backing_size(canvas);
    let window = web::window()?;
    let canvas = canvas.clone();
    Some(EventListener::new(&window, "resize", move |_ev| {
        dom::sync_canvas_backing_size(&canvas);
    }))
}
