use super::constants::DEFAULT_ROTATION_SPEED;
use glam::Vec2;

/// How the canvas is sized on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CanvasLayout {
    Fullscreen,
    /// CSS pixel size for the embedded variant.
    Fixed { width: u32, height: u32 },
}

pub const DEFAULT_FIXED_SIZE: u32 = 500;

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Idle spin, radians per frame.
    pub rotation_speed: f32,
    pub layout: CanvasLayout,
    pub taco_pos: Vec2,
    pub model_url: String,
    pub sound_url: String,
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            rotation_speed: DEFAULT_ROTATION_SPEED,
            layout: CanvasLayout::Fullscreen,
            taco_pos: Vec2::ZERO,
            model_url: "assets/taco.glb".to_string(),
            sound_url: "assets/magic.wav".to_string(),
            seed: 42,
        }
    }
}

impl SceneConfig {
    /// Defaults overridden by a URL query string such as
    /// `?rotationSpeed=0.02&layout=fixed&width=600`.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        config.apply_query(query);
        config
    }

    pub fn apply_query(&mut self, query: &str) {
        let mut layout = self.layout;
        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "rotationSpeed" => {
                    if let Some(v) = parse_finite(key, value) {
                        self.rotation_speed = v;
                    }
                }
                "x" => {
                    if let Some(v) = parse_finite(key, value) {
                        self.taco_pos.x = v;
                    }
                }
                "y" => {
                    if let Some(v) = parse_finite(key, value) {
                        self.taco_pos.y = v;
                    }
                }
                "seed" => {
                    if let Some(v) = parse_or_warn::<u64>(key, value) {
                        self.seed = v;
                    }
                }
                "layout" => match value {
                    "fixed" => {
                        let (width, height) = fixed_dims(layout);
                        layout = CanvasLayout::Fixed { width, height };
                    }
                    "fullscreen" => layout = CanvasLayout::Fullscreen,
                    other => log::warn!("[config] unknown layout '{}'", other),
                },
                "width" => {
                    if let Some(width) = parse_or_warn::<u32>(key, value).filter(|v| *v > 0) {
                        let (_, height) = fixed_dims(layout);
                        layout = CanvasLayout::Fixed { width, height };
                    }
                }
                "height" => {
                    if let Some(height) = parse_or_warn::<u32>(key, value).filter(|v| *v > 0) {
                        let (width, _) = fixed_dims(layout);
                        layout = CanvasLayout::Fixed { width, height };
                    }
                }
                _ => {}
            }
        }
        self.layout = layout;
    }
}

fn fixed_dims(layout: CanvasLayout) -> (u32, u32) {
    match layout {
        CanvasLayout::Fixed { width, height } => (width, height),
        CanvasLayout::Fullscreen => (DEFAULT_FIXED_SIZE, DEFAULT_FIXED_SIZE),
    }
}

fn parse_finite(key: &str, value: &str) -> Option<f32> {
    let v = parse_or_warn::<f32>(key, value)?;
    if !v.is_finite() {
        log::warn!("[config] ignoring non-finite {}='{}'", key, value);
        return None;
    }
    Some(v)
}

fn parse_or_warn<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
    match value.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            log::warn!("[config] ignoring malformed {}='{}'", key, value);
            None
        }
    }
}
