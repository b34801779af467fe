//! Frame-rate readout.
//!
//! Frames are counted over a short window (half a second by default) and the
//! count is scaled up to frames per second when the window closes. Times are
//! clock readings in seconds.

/// Clock readings are summed floats; a window that lasted exactly `window`
/// may come out a hair short.
const WINDOW_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct FrameRate {
    /// Length of one counting window, in seconds.
    window: f64,
    /// Frames counted in the current window.
    frames: u32,
    /// Clock reading at which the current window opened.
    baseline: f64,
    /// Last computed rate; `None` until the first window closes.
    rate: Option<u32>,
}

impl FrameRate {
    pub fn new(window: f64) -> Self {
        Self {
            window,
            frames: 0,
            baseline: 0.0,
            rate: None,
        }
    }

    /// Open a fresh window at `now`, keeping the last readout.
    pub fn reset(&mut self, now: f64) {
        self.frames = 0;
        self.baseline = now;
    }

    /// Count one frame. Returns the rate when a window closed on this call
    /// and the readout changed.
    pub fn tick(&mut self, now: f64) -> Option<u32> {
        self.frames += 1;
        if now - self.baseline + WINDOW_EPSILON < self.window {
            return None;
        }
        let rate = (self.frames as f64 / self.window).round() as u32;
        let previous = self.rate.replace(rate);
        self.frames = 0;
        self.baseline = now;
        (previous != Some(rate)).then_some(rate)
    }

    pub fn rate(&self) -> Option<u32> {
        self.rate
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Readout text, e.g. `"60"`.
    pub fn display(&self) -> Option<String> {
        self.rate.map(|rate| rate.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_rate_before_window_closes() {
        let mut fps = FrameRate::new(0.5);
        fps.reset(10.0);
        assert_eq!(fps.tick(10.1), None);
        assert_eq!(fps.tick(10.49), None);
        assert_eq!(fps.rate(), None);
        assert_eq!(fps.display(), None);
        assert_eq!(fps.frames(), 2);
    }

    #[test]
    fn half_second_window_doubles_count() {
        let mut fps = FrameRate::new(0.5);
        fps.reset(0.0);
        for i in 1..30 {
            assert_eq!(fps.tick(i as f64 * 0.01), None);
        }
        // 30th frame lands exactly on the window edge
        assert_eq!(fps.tick(0.5), Some(60));
        assert_eq!(fps.display().as_deref(), Some("60"));
        assert_eq!(fps.frames(), 0);
    }

    #[test]
    fn window_closes_on_exact_elapsed() {
        let mut fps = FrameRate::new(0.5);
        fps.reset(0.2);
        assert_eq!(fps.tick(0.7), Some(2));
        assert_eq!(fps.rate(), Some(2));
    }

    #[test]
    fn unchanged_readout_not_reported() {
        let mut fps = FrameRate::new(0.5);
        fps.reset(0.0);
        assert_eq!(fps.tick(0.5), Some(2));
        assert_eq!(fps.tick(1.0), None);
        assert_eq!(fps.rate(), Some(2));
        assert_eq!(fps.frames(), 0);
        fps.tick(1.2);
        assert_eq!(fps.tick(1.5), Some(4));
    }

    #[test]
    fn readout_held_between_windows() {
        let mut fps = FrameRate::new(0.5);
        fps.reset(0.0);
        fps.tick(0.6);
        assert_eq!(fps.rate(), Some(2));
        assert_eq!(fps.tick(0.7), None);
        assert_eq!(fps.rate(), Some(2));
        fps.reset(5.0);
        assert_eq!(fps.rate(), Some(2));
        assert_eq!(fps.frames(), 0);
    }
}
