use crate::core::{
    TacoScene, ACCENT_COLOR, LABEL_CORNER_RADIUS_PX, LABEL_HEIGHT_PX, LABEL_LINK_OFFSET_Y_PX,
    LABEL_TEXT, LABEL_WIDTH_PX, WAVE_LINK_OFFSET_Y_PX,
};
use crate::dom::js_err;
use crate::input;
use fnv::FnvHashMap;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

fn create_div(document: &web::Document, style: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(js_err)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    _ = el.set_attribute("style", style);
    Ok(el)
}

#[inline]
fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    _ = el.style().set_property(name, value);
}

/// Center `el` (of the given CSS size) on `at`.
fn place_centered(el: &web::HtmlElement, at: Vec2, w: f32, h: f32) {
    set_style(el, "left", &format!("{:.1}px", at.x - w * 0.5));
    set_style(el, "top", &format!("{:.1}px", at.y - h * 0.5));
}

/// GUI layer over the canvas: the hold label with its fill bar and one ring
/// element per live wave.
pub struct Overlay {
    document: web::Document,
    root: web::HtmlElement,
    label: web::HtmlElement,
    fill: web::HtmlElement,
    rings: FnvHashMap<u64, web::HtmlElement>,
}

impl Overlay {
    pub fn new(document: &web::Document) -> anyhow::Result<Self> {
        let root = create_div(
            document,
            "position:fixed;left:0;top:0;width:0;height:0;overflow:visible;pointer-events:none",
        )?;
        let label = create_div(
            document,
            &format!(
                "position:absolute;box-sizing:border-box;overflow:hidden;\
                 width:{LABEL_WIDTH_PX}px;height:{LABEL_HEIGHT_PX}px;\
                 border:1px solid {ACCENT_COLOR};border-radius:{LABEL_CORNER_RADIUS_PX}px;\
                 color:{ACCENT_COLOR};font:bold 14px system-ui;user-select:none"
            ),
        )?;
        let fill = create_div(
            document,
            &format!(
                "position:absolute;left:0;top:0;height:100%;width:0%;background:{ACCENT_COLOR};opacity:0.5"
            ),
        )?;
        let text = create_div(
            document,
            &format!(
                "position:relative;width:100%;line-height:{}px;text-align:center",
                LABEL_HEIGHT_PX - 2.0
            ),
        )?;
        text.set_text_content(Some(LABEL_TEXT));
        label.append_child(&fill).map_err(js_err)?;
        label.append_child(&text).map_err(js_err)?;
        root.append_child(&label).map_err(js_err)?;

        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("no document body"))?;
        body.append_child(&root).map_err(js_err)?;

        Ok(Self {
            document: document.clone(),
            root,
            label,
            fill,
            rings: FnvHashMap::default(),
        })
    }

    pub fn add_ring(&mut self, id: u64) {
        let style = format!(
            "position:absolute;box-sizing:border-box;border-radius:50%;\
             border:0 solid {ACCENT_COLOR};opacity:0"
        );
        match create_div(&self.document, &style) {
            Ok(el) => {
                _ = self.root.append_child(&el);
                self.rings.insert(id, el);
            }
            Err(e) => log::warn!("[overlay] ring {} not created: {:?}", id, e),
        }
    }

    pub fn remove_ring(&mut self, id: u64) {
        if let Some(el) = self.rings.remove(&id) {
            el.remove();
        }
    }

    /// Mirror the scene's label and ring state, anchored to the mascot's
    /// on-screen position.
    pub fn update(&mut self, scene: &TacoScene, canvas: &web::HtmlCanvasElement) {
        let rect = canvas.get_bounding_client_rect();
        set_style(&self.root, "left", &format!("{:.1}px", rect.left()));
        set_style(&self.root, "top", &format!("{:.1}px", rect.top()));

        let size = input::canvas_css_size(canvas);
        let Some(anchor) = scene.anchor_on_screen(size.x, size.y) else {
            set_style(&self.root, "display", "none");
            return;
        };
        set_style(&self.root, "display", "block");

        let label = scene.label();
        place_centered(
            &self.label,
            anchor + Vec2::new(0.0, LABEL_LINK_OFFSET_Y_PX),
            LABEL_WIDTH_PX,
            LABEL_HEIGHT_PX,
        );
        set_style(&self.label, "opacity", &format!("{:.3}", label.alpha));
        set_style(
            &self.fill,
            "width",
            &format!("{:.2}%", label.fill_ratio.clamp(0.0, 1.0) * 100.0),
        );

        let ring_at = anchor + Vec2::new(0.0, WAVE_LINK_OFFSET_Y_PX);
        for ring in scene.waves().rings() {
            let Some(el) = self.rings.get(&ring.id) else {
                continue;
            };
            let d = ring.size();
            set_style(el, "width", &format!("{:.1}px", d));
            set_style(el, "height", &format!("{:.1}px", d));
            set_style(el, "border-width", &format!("{:.2}px", ring.thickness()));
            set_style(el, "opacity", &format!("{:.3}", ring.alpha()));
            place_centered(el, ring_at, d, d);
        }
    }

    /// Remove the label and every ring from the page.
    pub fn detach(&mut self) {
        for (_, el) in self.rings.drain() {
            el.remove();
        }
        self.root.remove();
    }
}
