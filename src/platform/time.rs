//! Frame timing
//!
//! Converts animation-frame timestamps (ms) into simulation dt (seconds) and
//! keeps a rolling FPS estimate.

/// Frames in the FPS window
const FPS_WINDOW: usize = 60;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time: f64,
    frame_times: [f64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_time: 0.0,
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Record a frame timestamp and return the elapsed seconds since the last one.
    ///
    /// The first frame yields a dt of zero.
    pub fn advance(&mut self, time_ms: f64) -> f32 {
        if self.last_time == 0.0 {
            self.last_time = time_ms;
        }
        let dt = ((time_ms - self.last_time) / 1000.0) as f32;
        self.last_time = time_ms;

        self.frame_times[self.frame_index] = time_ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        // Oldest sample is the one we will overwrite next, FPS_WINDOW - 1 frames back
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = time_ms - oldest_time;
            if elapsed > 0.0 {
                self.fps = (((FPS_WINDOW - 1) as f64 * 1000.0) / elapsed).round() as u32;
            }
        }

        dt
    }

    /// FPS over the last window (0 until the window fills)
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
