use glam::{Vec2, Vec3};

/// Easing curves. `Power1*` are the quadratic curves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Ease {
    Linear,
    Power1In,
    #[default]
    Power1Out,
}

impl Ease {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::Power1In => t * t,
            Ease::Power1Out => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// How many extra legs a tween plays after the first one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Repeat {
    Times(u32),
    Forever,
}

pub trait Lerp: Copy {
    fn lerp_to(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp_to(self, to: Self, t: f32) -> Self {
        self.lerp(to, t)
    }
}

/// A single animated value.
///
/// The tween is owned by whatever drives it, usually in an `Option` slot:
/// killing it is `Option::take`, replacing it drops the previous one. Call
/// [`Tween::step`] once per tick and read [`Tween::value`] afterwards.
///
/// With `yoyo`, odd legs play backwards (the eased curve mirrored in time).
#[derive(Clone, Debug)]
pub struct Tween<T: Lerp = f32> {
    from: T,
    to: T,
    duration: f32,
    ease: Ease,
    repeat: Repeat,
    yoyo: bool,
    time: f32,
    paused: bool,
    complete: bool,
}

impl<T: Lerp> Tween<T> {
    pub fn new(from: T, to: T, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            ease,
            repeat: Repeat::Times(0),
            yoyo: false,
            time: 0.0,
            paused: false,
            complete: false,
        }
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    pub fn with_yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    /// Advance by `dt` seconds. Returns `true` only on the step that finishes
    /// the tween.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.complete || self.paused {
            return false;
        }
        self.time += dt.max(0.0);
        match self.total_time() {
            Some(total) if self.time >= total => {
                self.time = total;
                self.complete = true;
                true
            }
            _ => false,
        }
    }

    pub fn value(&self) -> T {
        let (leg, local) = self.leg_and_local();
        let forward_t = if self.yoyo && leg % 2 == 1 {
            1.0 - local
        } else {
            local
        };
        self.from.lerp_to(self.to, self.ease.apply(forward_t))
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn play(&mut self) {
        self.paused = false;
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Seconds played so far, across all legs.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.time
    }

    fn total_time(&self) -> Option<f32> {
        match self.repeat {
            Repeat::Times(n) => Some(self.duration * (n + 1) as f32),
            Repeat::Forever => None,
        }
    }

    fn leg_and_local(&self) -> (u32, f32) {
        if self.complete {
            let last_leg = match self.repeat {
                Repeat::Times(n) => n,
                Repeat::Forever => 0,
            };
            return (last_leg, 1.0);
        }
        if self.duration <= 0.0 {
            return (0, 0.0);
        }
        let leg = (self.time / self.duration).floor();
        let local = (self.time - leg * self.duration) / self.duration;
        (leg as u32, local.clamp(0.0, 1.0))
    }
}
