use crate::core::SOUND_ROLLOFF;
use crate::dom::{self, js_err};
use glam::Vec3;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("[audio] {} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

fn create_panner(audio_ctx: &web::AudioContext, pos: Vec3) -> anyhow::Result<web::PannerNode> {
    let panner = web::PannerNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("[audio] PannerNode error: {:?}", e))?;
    panner.set_panning_model(web::PanningModelType::Hrtf);
    panner.set_distance_model(web::DistanceModelType::Exponential);
    panner.set_rolloff_factor(SOUND_ROLLOFF);
    set_panner_position(&panner, pos);
    Ok(panner)
}

#[inline]
fn set_panner_position(panner: &web::PannerNode, pos: Vec3) {
    panner.position_x().set_value(pos.x);
    panner.position_y().set_value(pos.y);
    panner.position_z().set_value(pos.z);
}

pub async fn load_buffer(
    audio_ctx: &web::AudioContext,
    url: &str,
) -> anyhow::Result<web::AudioBuffer> {
    let data = dom::fetch_array_buffer(url).await?;
    let decoded = JsFuture::from(audio_ctx.decode_audio_data(&data).map_err(js_err)?)
        .await
        .map_err(js_err)?;
    decoded.dyn_into::<web::AudioBuffer>().map_err(js_err)
}

/// A looping buffer routed source -> gain -> panner -> destination.
pub struct SpatialSound {
    source: web::AudioBufferSourceNode,
    gain: web::GainNode,
    panner: web::PannerNode,
    stopped: bool,
}

impl SpatialSound {
    pub fn start(
        audio_ctx: &web::AudioContext,
        buffer: &web::AudioBuffer,
        pos: Vec3,
    ) -> anyhow::Result<Self> {
        let source = web::AudioBufferSourceNode::new(audio_ctx)
            .map_err(|e| anyhow::anyhow!("[audio] AudioBufferSourceNode error: {:?}", e))?;
        source.set_buffer(Some(buffer));
        source.set_loop(true);

        let gain = create_gain(audio_ctx, 1.0, "Sound")?;
        let panner = create_panner(audio_ctx, pos)?;
        source.connect_with_audio_node(&gain).map_err(js_err)?;
        gain.connect_with_audio_node(&panner).map_err(js_err)?;
        panner
            .connect_with_audio_node(&audio_ctx.destination())
            .map_err(js_err)?;
        source.start().map_err(js_err)?;
        log::info!(
            "[audio] looping sound at ({:.2},{:.2},{:.2})",
            pos.x,
            pos.y,
            pos.z
        );
        Ok(Self {
            source,
            gain,
            panner,
            stopped: false,
        })
    }

    pub fn set_volume(&self, volume: f32) {
        if !self.stopped {
            self.gain.gain().set_value(volume.clamp(0.0, 1.0));
        }
    }

    pub fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;
        _ = self.source.stop();
        _ = self.source.disconnect();
        _ = self.panner.disconnect();
        log::info!("[audio] sound stopped");
    }
}

impl Drop for SpatialSound {
    fn drop(&mut self) {
        self.stop();
    }
}

pub fn set_listener_position(audio_ctx: &web::AudioContext, pos: Vec3) {
    audio_ctx
        .listener()
        .set_position(pos.x as f64, pos.y as f64, pos.z as f64);
}
