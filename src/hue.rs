/// 色相の回転 / Rotating hue shared by the drawing passes of one frame.
///
/// `advance` steps the hue before it is used. `rebase` is called at the end
/// of every pass: the shift counter moves on by one and the hue restarts
/// from `shift mod 360`, so the ribbon's colors slowly rotate frame to frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HueCycle {
    hue: f64,
    shift: u64,
}

impl HueCycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current hue in degrees, always in `[0, 360)`.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn shift(&self) -> u64 {
        self.shift
    }

    /// Step the hue by `step` degrees and return the new value.
    pub fn advance(&mut self, step: f64) -> f64 {
        self.hue = (self.hue + step).rem_euclid(360.0);
        // rem_euclid can round up to exactly 360 for tiny negative inputs
        if self.hue >= 360.0 {
            self.hue = 0.0;
        }
        self.hue
    }

    pub fn rebase(&mut self) {
        self.shift += 1;
        self.hue = (self.shift % 360) as f64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_steps_before_use() {
        let mut hue = HueCycle::new();
        assert_eq!(hue.advance(0.5), 0.5);
        assert_eq!(hue.advance(0.5), 1.0);
    }

    #[test]
    fn advance_wraps() {
        let mut hue = HueCycle::new();
        for _ in 0..719 {
            hue.advance(0.5);
        }
        assert_eq!(hue.hue(), 359.5);
        assert_eq!(hue.advance(0.5), 0.0);
        assert_eq!(hue.advance(0.5), 0.5);
    }

    #[test]
    fn rebase_restarts_from_shift() {
        let mut hue = HueCycle::new();
        hue.advance(100.0);
        hue.rebase();
        assert_eq!(hue.shift(), 1);
        assert_eq!(hue.hue(), 1.0);
        for _ in 0..359 {
            hue.rebase();
        }
        assert_eq!(hue.shift(), 360);
        assert_eq!(hue.hue(), 0.0);
    }
}
