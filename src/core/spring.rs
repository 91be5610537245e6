use super::constants::{
    SPRING_DAMPING, SPRING_MASS, SPRING_MAX_FRAME_SEC, SPRING_MAX_SUBSTEP_SEC, SPRING_REST_DELTA,
    SPRING_REST_SPEED, SPRING_STIFFNESS,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    pub rest_delta: f32,
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            mass: SPRING_MASS,
            rest_delta: SPRING_REST_DELTA,
            rest_speed: SPRING_REST_SPEED,
        }
    }
}

/// Damped spring that follows a moving target.
///
/// Used to smooth raw scroll progress for the header bar. Integration is
/// semi-implicit Euler over fixed sub-steps, so large frame gaps stay stable.
#[derive(Clone, Debug)]
pub struct Spring {
    pub config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.value).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
    }

    /// Advance by `dt_sec`; returns the new value.
    pub fn step(&mut self, dt_sec: f32) -> f32 {
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }
        let dt = dt_sec.clamp(0.0, SPRING_MAX_FRAME_SEC);
        if dt <= 0.0 {
            return self.value;
        }
        let steps = (dt / SPRING_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let mass = self.config.mass.max(1e-4);
        for _ in 0..steps {
            let displacement = self.value - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
        }
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
        }
        self.value
    }
}
