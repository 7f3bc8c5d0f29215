//! Frame timing for a loop driven by an external scheduler.
//!
//! The scheduler (a display-refresh callback) hands us a wall-clock timestamp
//! in milliseconds once per frame; we turn that into a delta in seconds.

/// Default upper bound for a single frame's delta, in seconds.
pub const DEFAULT_MAX_DELTA: f32 = 0.1;

/// Converts scheduler timestamps into per-frame delta time.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Timestamp (ms) of the last accepted sample.
    last_timestamp: Option<f64>,
    /// Delta of the last frame, in seconds.
    delta: f32,
    /// Sum of all deltas handed out, in seconds.
    elapsed: f64,
    /// Frames seen since creation.
    frame_count: u64,
    /// Largest delta a single frame may report.
    max_delta: f32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DELTA)
    }
}

impl FrameClock {
    /// Create a clock that clamps frame deltas to `max_delta` seconds.
    pub fn new(max_delta: f32) -> Self {
        Self {
            last_timestamp: None,
            delta: 0.0,
            elapsed: 0.0,
            frame_count: 0,
            max_delta: max_delta.max(0.0),
        }
    }

    /// Feed the scheduler timestamp for a new frame and return its delta in seconds.
    ///
    /// The first sample, a non-finite sample, or a sample earlier than the
    /// previous one all yield `0.0`. A backwards jump re-bases the clock on the
    /// new timestamp so later frames measure from there.
    pub fn advance(&mut self, timestamp_ms: f64) -> f32 {
        self.frame_count += 1;

        if !timestamp_ms.is_finite() {
            log::warn!("Ignoring non-finite frame timestamp {timestamp_ms}");
            self.delta = 0.0;
            return self.delta;
        }

        let dt = match self.last_timestamp {
            None => 0.0,
            Some(last) if timestamp_ms < last => {
                log::warn!("Frame timestamp went backwards ({last} -> {timestamp_ms}), dt clamped to 0");
                0.0
            }
            Some(last) => (((timestamp_ms - last) / 1000.0) as f32).min(self.max_delta),
        };

        self.last_timestamp = Some(timestamp_ms);
        self.delta = dt;
        self.elapsed += dt as f64;
        dt
    }

    /// Delta of the last frame in seconds.
    pub fn delta_seconds(&self) -> f32 {
        self.delta
    }

    /// Total accepted time in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    /// Frames seen so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Current FPS estimate (from the last frame only).
    pub fn fps(&self) -> f32 {
        if self.delta > 0.0 {
            1.0 / self.delta
        } else {
            0.0
        }
    }
}
