//! Linear property tween.

/// Moves one scalar property toward a target over a fixed duration.
///
/// `start` captures the property's current value as the origin and is a
/// no-op while the tween is already running.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration_ms: u64,
    elapsed_ms: u64,
    running: bool,
}

impl Tween {
    pub fn to(target: f64, duration_ms: u64) -> Self {
        Self {
            from: target,
            to: target,
            duration_ms,
            elapsed_ms: 0,
            running: false,
        }
    }

    /// Start from `current`. Returns false if the tween was already running.
    pub fn start(&mut self, current: f64) -> bool {
        if self.running {
            return false;
        }
        self.from = current;
        self.elapsed_ms = 0;
        self.running = true;
        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance by `dt_ms` and return the new property value, or `None` if not running.
    pub fn advance(&mut self, dt_ms: u64) -> Option<f64> {
        if !self.running {
            return None;
        }
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
        if self.elapsed_ms >= self.duration_ms {
            self.running = false;
            return Some(self.to);
        }
        let t = self.elapsed_ms as f64 / self.duration_ms as f64;
        Some(self.from + (self.to - self.from) * t)
    }
}
