use super::constants::*;
use super::tween::{Ease, Tween};

/// Where the press-and-hold interaction currently is.
///
/// `Holding` is the committed stretch after the hold completed, while the
/// dismissal fades play. `Dismissed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pressed,
    Holding,
    Dismissed,
}

/// Named side effects of a timeline transition, in the order they happen.
///
/// The timeline only decides; whoever owns the affected component applies the
/// effect. Continuous values (fill ratio, fades, scale) are read back through
/// the accessors on [`InteractionTimeline`] every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    FillStarted,
    FillCancelled,
    PauseIdleRotation,
    ResumeIdleRotation,
    SettleShake,
    StopWaves,
    PauseRays,
    StopParticles,
    FadeAudio,
    HideMesh,
    ScaleMascot,
    ShrinkSprites,
    FadeLabel,
    StopAudio,
    StopRenderLoop,
}

struct Dismissal {
    volume: Tween,
    mesh_alpha: Tween,
    scale: Tween,
    sprite_scale: Tween,
    label_alpha: Tween,
    audio_stopped: bool,
}

impl Dismissal {
    fn new() -> Self {
        let fade = |from: f32, to: f32| Tween::new(from, to, DISMISS_FADE_SEC, Ease::Power1Out);
        Self {
            volume: fade(1.0, 0.0),
            mesh_alpha: fade(1.0, 0.0),
            scale: fade(1.0, DISMISS_SCALE),
            sprite_scale: fade(1.0, 0.0),
            label_alpha: fade(1.0, 0.0),
            audio_stopped: false,
        }
    }

    fn step(&mut self, dt: f32) {
        self.volume.step(dt);
        self.mesh_alpha.step(dt);
        self.scale.step(dt);
        self.sprite_scale.step(dt);
        self.label_alpha.step(dt);
    }

    fn is_complete(&self) -> bool {
        self.volume.is_complete()
            && self.mesh_alpha.is_complete()
            && self.scale.is_complete()
            && self.sprite_scale.is_complete()
            && self.label_alpha.is_complete()
    }
}

/// Press-and-hold state machine: Idle → Pressed → Holding → Dismissed.
///
/// The fill tween slot is shared between the 3 s fill and the 0.2 s rewind,
/// so there is never more than one of them alive. Starting a fill while one
/// is in flight reports [`Effect::FillCancelled`] before
/// [`Effect::FillStarted`].
pub struct InteractionTimeline {
    phase: Phase,
    fill: Option<Tween>,
    shake: Option<Tween>,
    dismissal: Option<Dismissal>,
    fill_ratio: f32,
    shake_intensity: f32,
    held_for: Option<f32>,
}

impl Default for InteractionTimeline {
    fn default() -> Self {
        Self::new()
    }
}

impl InteractionTimeline {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            fill: None,
            shake: None,
            dismissal: None,
            fill_ratio: 0.0,
            shake_intensity: 0.0,
            held_for: None,
        }
    }

    /// Handle a pointer-down. `hit` is the result of the mascot hit-test.
    /// Returns whether a hold session started.
    pub fn pointer_down(&mut self, hit: bool, effects: &mut Vec<Effect>) -> bool {
        if matches!(self.phase, Phase::Holding | Phase::Dismissed) || !hit {
            return false;
        }
        if self.fill.take().is_some() {
            effects.push(Effect::FillCancelled);
        }
        self.shake = None;
        if self.phase == Phase::Idle {
            effects.push(Effect::PauseIdleRotation);
        }

        self.fill_ratio = 0.0;
        self.shake_intensity = 0.0;
        self.fill = Some(Tween::new(0.0, 1.0, HOLD_DURATION_SEC, Ease::Linear));
        self.shake = Some(Tween::new(
            0.0,
            SHAKE_INTENSITY_MAX,
            HOLD_DURATION_SEC,
            Ease::Linear,
        ));
        self.held_for = Some(0.0);
        self.phase = Phase::Pressed;
        effects.push(Effect::FillStarted);
        log::info!("[timeline] pressed");
        true
    }

    /// Handle a pointer-up. Only an unfinished hold reacts; returns whether
    /// the hold was released.
    pub fn pointer_up(&mut self, effects: &mut Vec<Effect>) -> bool {
        if self.phase != Phase::Pressed {
            return false;
        }
        if self.fill.take().is_some() {
            effects.push(Effect::FillCancelled);
        }
        self.shake = None;
        self.shake_intensity = 0.0;
        self.held_for = None;
        effects.push(Effect::SettleShake);
        effects.push(Effect::ResumeIdleRotation);

        self.fill = Some(Tween::new(
            self.fill_ratio,
            0.0,
            FILL_REVERSE_SEC,
            Ease::Linear,
        ));
        self.phase = Phase::Idle;
        log::info!("[timeline] released at fill {:.2}", self.fill_ratio);
        true
    }

    pub fn tick(&mut self, dt: f32, effects: &mut Vec<Effect>) {
        match self.phase {
            Phase::Idle => {
                if let Some(fill) = &mut self.fill {
                    let done = fill.step(dt);
                    self.fill_ratio = fill.value();
                    if done {
                        self.fill = None;
                    }
                }
            }
            Phase::Pressed => {
                if let Some(held) = &mut self.held_for {
                    *held += dt.max(0.0);
                }
                if let Some(shake) = &mut self.shake {
                    shake.step(dt);
                    self.shake_intensity = shake.value();
                }
                let completed = match &mut self.fill {
                    Some(fill) => {
                        let done = fill.step(dt);
                        self.fill_ratio = fill.value();
                        done
                    }
                    None => false,
                };
                if completed {
                    self.begin_dismissal(effects);
                }
            }
            Phase::Holding => {
                let Some(dismissal) = &mut self.dismissal else {
                    return;
                };
                dismissal.step(dt);
                if dismissal.volume.is_complete() && !dismissal.audio_stopped {
                    dismissal.audio_stopped = true;
                    effects.push(Effect::StopAudio);
                }
                if dismissal.is_complete() {
                    self.phase = Phase::Dismissed;
                    effects.push(Effect::StopRenderLoop);
                    log::info!("[timeline] dismissed");
                }
            }
            Phase::Dismissed => {}
        }
    }

    fn begin_dismissal(&mut self, effects: &mut Vec<Effect>) {
        self.fill = None;
        self.shake = None;
        self.fill_ratio = 1.0;
        self.shake_intensity = 0.0;
        self.held_for = None;
        self.phase = Phase::Holding;
        self.dismissal = Some(Dismissal::new());
        effects.extend_from_slice(&[
            Effect::StopWaves,
            Effect::PauseRays,
            Effect::StopParticles,
            Effect::FadeAudio,
            Effect::HideMesh,
            Effect::ScaleMascot,
            Effect::ShrinkSprites,
            Effect::FadeLabel,
        ]);
        log::info!("[timeline] hold complete, dismissing");
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.phase == Phase::Dismissed
    }

    #[inline]
    pub fn fill_ratio(&self) -> f32 {
        self.fill_ratio
    }

    #[inline]
    pub fn shake_intensity(&self) -> f32 {
        self.shake_intensity
    }

    /// Seconds since the current hold began, if one is in progress.
    #[inline]
    pub fn held_for(&self) -> Option<f32> {
        self.held_for
    }

    pub fn volume(&self) -> f32 {
        self.dismissal.as_ref().map_or(1.0, |d| d.volume.value())
    }

    pub fn mesh_alpha(&self) -> f32 {
        self.dismissal.as_ref().map_or(1.0, |d| d.mesh_alpha.value())
    }

    pub fn mascot_scale(&self) -> f32 {
        self.dismissal.as_ref().map_or(1.0, |d| d.scale.value())
    }

    pub fn sprite_scale(&self) -> f32 {
        self.dismissal.as_ref().map_or(1.0, |d| d.sprite_scale.value())
    }

    pub fn label_alpha(&self) -> f32 {
        self.dismissal.as_ref().map_or(1.0, |d| d.label_alpha.value())
    }
}
