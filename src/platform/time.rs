//! Frame timing

use crate::consts::MAX_FRAME_DT;

/// Turns animation-frame timestamps (milliseconds) into simulation timesteps
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    max_dt: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(MAX_FRAME_DT)
    }
}

impl FrameClock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            max_dt,
        }
    }

    /// Seconds since the previous call.
    ///
    /// The first frame is zero-length. Clock jumps backwards give zero, and
    /// long stalls (hidden tab, debugger) are capped at `max_dt` so they are
    /// not replayed. Splitting into short steps is `sim::tick_frame`'s job.
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        crate::sim::sanitize_dt(dt).min(self.max_dt)
    }
}
