//! Tick-driven interpolation, the replacement for coroutine-style glide/fade
//! transitions: advance once per frame, done when `elapsed >= duration`.

/// Linear interpolation state between two values over a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    start: f32,
    target: f32,
    elapsed: f32,
    duration: f32,
}

impl Tween {
    /// A tween with a non-positive duration is complete immediately.
    pub fn new(start: f32, target: f32, duration: f32) -> Self {
        Self {
            start,
            target,
            elapsed: 0.0,
            duration: duration.max(0.0),
        }
    }

    /// Advance by `dt` seconds and return the current value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.duration);
        self.value()
    }

    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.target;
        }
        let t = self.elapsed / self.duration;
        self.start + (self.target - self.start) * t
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
