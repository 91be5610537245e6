#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    Linear,
    OutCubic,
}

impl Ease {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Time-based transition between two values that can be retargeted mid-flight.
#[derive(Clone, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
    ease: Ease,
}

impl Tween {
    pub fn settled(value: f32, duration: f32, ease: Ease) -> Self {
        Self {
            from: value,
            to: value,
            elapsed: duration,
            duration,
            ease,
        }
    }

    /// Linear 0 → 1 over `duration`, starting now.
    pub fn fade_in(duration: f32) -> Self {
        let mut t = Self::settled(0.0, duration, Ease::Linear);
        t.retarget(1.0);
        t
    }

    pub fn value(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = self.ease.apply(self.elapsed / self.duration);
        self.from + (self.to - self.from) * t
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Start heading to `to` from wherever the tween currently is.
    pub fn retarget(&mut self, to: f32) {
        if to == self.to {
            return;
        }
        self.from = self.value();
        self.to = to;
        self.elapsed = 0.0;
    }

    /// Jump to `value` with no transition.
    pub fn snap(&mut self, value: f32) {
        self.from = value;
        self.to = value;
        self.elapsed = self.duration;
    }

    pub fn advance(&mut self, dt_sec: f32) -> f32 {
        if dt_sec > 0.0 {
            self.elapsed = (self.elapsed + dt_sec).min(self.duration);
        }
        self.value()
    }
}
