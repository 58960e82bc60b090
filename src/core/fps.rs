//! Frames-per-second counter for the HUD.

use super::constants::FPS_HUD_INTERVAL;

#[derive(Debug, Clone, Default)]
pub struct FpsCounter {
    frames: u32,
    elapsed: f64,
    shown: Option<u32>,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_frame(&mut self, dt: f64) {
        self.frames += 1;
        self.elapsed += dt;
    }

    /// Publish the rate over the frames since the last sample and start a new window.
    pub fn sample(&mut self) -> u32 {
        let fps = if self.elapsed > 0.0 {
            (self.frames as f64 / self.elapsed).round() as u32
        } else {
            0
        };
        self.frames = 0;
        self.elapsed = 0.0;
        self.shown = Some(fps);
        fps
    }

    /// Record a frame and sample once a full HUD interval has passed.
    pub fn tick(&mut self, dt: f64) {
        self.record_frame(dt);
        if self.elapsed >= FPS_HUD_INTERVAL {
            self.sample();
        }
    }

    /// Last published value, `None` before the first sample.
    pub fn shown(&self) -> Option<u32> {
        self.shown
    }

    pub fn text(&self) -> String {
        match self.shown {
            Some(fps) => format!("FPS: {}", fps),
            None => "FPS: --".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rate() {
        let mut fps = FpsCounter::new();
        for _ in 0..30 {
            fps.record_frame(1.0 / 30.0);
        }
        assert_eq!(fps.sample(), 30);
        assert_eq!(fps.text(), "FPS: 30");
    }

    #[test]
    fn test_tick_publishes_once_per_interval() {
        let mut fps = FpsCounter::new();
        fps.tick(0.5);
        assert_eq!(fps.shown(), None);
        assert_eq!(fps.text(), "FPS: --");
        fps.tick(0.5);
        assert_eq!(fps.shown(), Some(2));
    }

    #[test]
    fn test_uneven_frame_times() {
        let mut fps = FpsCounter::new();
        fps.tick(0.5);
        fps.tick(0.25);
        fps.tick(0.25);
        assert_eq!(fps.shown(), Some(3));
        for _ in 0..8 {
            fps.tick(0.125);
        }
        assert_eq!(fps.shown(), Some(8));
    }

    #[test]
    fn test_empty_window() {
        let mut fps = FpsCounter::new();
        assert_eq!(fps.sample(), 0);
    }
}
