/// Slack allowed when comparing accumulated `dt` against a duration, so
/// that N ticks of `1/N` seconds finish a one-second timer.
const FINISH_TOLERANCE: f32 = 1e-4;

/// Elapsed-time counter for fixed-length transitions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Timer {
    duration: f32,
    elapsed: f32,
}

impl Timer {
    pub fn new(duration: f32) -> Self {
        Self { duration: duration.max(0.0), elapsed: 0.0 }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed + FINISH_TOLERANCE >= self.duration
    }

    /// Fraction of the duration elapsed, in `[0, 1]`. Exactly `1.0` once finished.
    pub fn progress(&self) -> f32 {
        if self.is_finished() {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }
}
