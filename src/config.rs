use crate::error::ConfigError;
use crate::vector::Vector2D;

// 既定値 / Defaults
const CAPACITY: usize = 360;
const DRAIN_PER_FRAME: usize = 5;
const PARTICLES_PER_POINT: usize = 100;
const HUE_STEP: f64 = 0.5;
const LINE_WIDTH: f64 = 5.0;
const DOT_DIAMETER: f64 = 2.0;
const JITTER_MIN: f64 = 0.95;
const JITTER_MAX: f64 = 1.05;
const CLOUD_BRIGHTNESS: f64 = 0.7;
const LINE_BRIGHTNESS: f64 = 1.0;
const FRAME_RATE_WINDOW: f64 = 0.5; // 秒 / seconds
const FRAME_RATE_FONT_SIZE: u32 = 24;

/// Tuning values for the ribbon.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailConfig {
    /// Maximum number of points kept in the history.
    pub capacity: usize,
    /// Oldest points removed per frame while cleaning.
    pub drain_per_frame: usize,
    /// Dots sprayed for each history point.
    pub particles_per_point: usize,
    /// Degrees the hue advances per drawn point.
    pub hue_step: f64,
    pub line_width: f64,
    pub dot_diameter: f64,
    /// Per-bound random scale range for cloud dots.
    pub jitter_min: f64,
    pub jitter_max: f64,
    pub cloud_brightness: f64,
    pub line_brightness: f64,
    /// Seconds per frame-rate counting window.
    pub frame_rate_window: f64,
    /// Readout position, offset from the top-left corner.
    pub frame_rate_position: Vector2D,
    pub frame_rate_font_size: u32,
    /// Fixed seed for the particle jitter; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            capacity: CAPACITY,
            drain_per_frame: DRAIN_PER_FRAME,
            particles_per_point: PARTICLES_PER_POINT,
            hue_step: HUE_STEP,
            line_width: LINE_WIDTH,
            dot_diameter: DOT_DIAMETER,
            jitter_min: JITTER_MIN,
            jitter_max: JITTER_MAX,
            cloud_brightness: CLOUD_BRIGHTNESS,
            line_brightness: LINE_BRIGHTNESS,
            frame_rate_window: FRAME_RATE_WINDOW,
            frame_rate_position: Vector2D::new(10.0, 25.0),
            frame_rate_font_size: FRAME_RATE_FONT_SIZE,
            seed: None,
        }
    }
}

impl TrailConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if self.drain_per_frame == 0 {
            return Err(ConfigError::ZeroDrain);
        }
        if self.particles_per_point == 0 {
            return Err(ConfigError::ZeroParticles);
        }
        if !self.hue_step.is_finite() || self.hue_step <= 0.0 {
            return Err(ConfigError::InvalidHueStep(self.hue_step));
        }
        if !(self.jitter_min > 0.0 && self.jitter_min <= self.jitter_max)
            || !self.jitter_max.is_finite()
        {
            return Err(ConfigError::InvalidJitter {
                min: self.jitter_min,
                max: self.jitter_max,
            });
        }
        if !self.frame_rate_window.is_finite() || self.frame_rate_window <= 0.0 {
            return Err(ConfigError::InvalidFrameRateWindow(self.frame_rate_window));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(TrailConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let base = TrailConfig::default();

        let cfg = TrailConfig { capacity: 0, ..base.clone() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroCapacity));

        let cfg = TrailConfig { drain_per_frame: 0, ..base.clone() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroDrain));

        let cfg = TrailConfig { particles_per_point: 0, ..base.clone() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroParticles));

        let cfg = TrailConfig { hue_step: f64::NAN, ..base.clone() };
        assert!(matches!(cfg.validate(), Err(ConfigError::InvalidHueStep(_))));

        let cfg = TrailConfig {
            jitter_min: 1.1,
            jitter_max: 0.9,
            ..base.clone()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::InvalidJitter { min: 1.1, max: 0.9 })
        );

        let cfg = TrailConfig { frame_rate_window: 0.0, ..base };
        assert_eq!(cfg.validate(), Err(ConfigError::InvalidFrameRateWindow(0.0)));
    }

    #[test]
    fn with_seed_sets_seed() {
        assert_eq!(TrailConfig::default().with_seed(3).seed, Some(3));
    }
}
