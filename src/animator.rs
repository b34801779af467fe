//! リボン状の軌跡アニメーション / Ribbon trail animator.
//!
//! Holds a bounded FIFO history of pointer positions and, once per frame,
//! draws two passes over it: a particle cloud per point, then a pair of line
//! strokes per point. Both passes cycle the hue and both finish by rebasing
//! the hue and moving the anchor to the oldest point in the history.

use std::collections::VecDeque;

use log::{debug, info, trace};

use crate::canvas::{Canvas, Hsb};
use crate::config::TrailConfig;
use crate::error::ConfigError;
use crate::frame_rate::FrameRate;
use crate::hue::HueCycle;
use crate::jitter::Jitter;
use crate::segment::{derive_segment, Segment};
use crate::vector::Vector2D;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Cloud,
    Lines,
}

#[derive(Debug, Clone)]
pub struct TrailAnimator {
    config: TrailConfig,
    history: VecDeque<Vector2D>,
    /// Previous point for the first segment; `None` until seeded.
    anchor: Option<Vector2D>,
    hue: HueCycle,
    frame_rate: FrameRate,
    jitter: Jitter,
    clean: bool,
    running: bool,
}

impl Default for TrailAnimator {
    fn default() -> Self {
        Self::build(TrailConfig::default())
    }
}

impl TrailAnimator {
    pub fn new(config: TrailConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: TrailConfig) -> Self {
        Self {
            history: VecDeque::with_capacity(config.capacity),
            anchor: None,
            hue: HueCycle::new(),
            frame_rate: FrameRate::new(config.frame_rate_window),
            jitter: Jitter::new(config.seed),
            clean: false,
            running: false,
            config,
        }
    }

    /// (Re)start the animation at clock reading `now` (seconds).
    ///
    /// Empties the history and opens a new frame-rate window. The anchor is
    /// kept, so a restarted trail draws as soon as new points arrive.
    pub fn start(&mut self, now: f64) {
        self.history.clear();
        self.clean = false;
        self.frame_rate.reset(now);
        self.running = true;
        info!("trail animator started at {:.3}s", now);
    }

    /// Continue after `stop()`, keeping the trail. Opens a new frame-rate
    /// window at `now` so the paused time is not counted.
    pub fn resume(&mut self, now: f64) {
        if self.running {
            return;
        }
        self.frame_rate.reset(now);
        self.running = true;
        info!("trail animator resumed with {} points", self.history.len());
    }

    /// The host stops calling `frame_handler` after this.
    pub fn stop(&mut self) {
        if self.running {
            info!("trail animator stopped with {} points", self.history.len());
        }
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Drain the trail gradually, a few points per frame.
    pub fn request_clean(&mut self) {
        debug!("clean requested, {} points to drain", self.history.len());
        self.clean = true;
    }

    pub fn is_cleaning(&self) -> bool {
        self.clean
    }

    /// Begin a new trail at `(x, y)`.
    pub fn seed_anchor(&mut self, x: f64, y: f64) {
        debug!("anchor seeded at ({:.1}, {:.1})", x, y);
        self.clean = false;
        self.anchor = Some(Vector2D::new(x, y));
    }

    pub fn add_point(&mut self, x: f64, y: f64) {
        if self.history.len() >= self.config.capacity {
            self.remove_oldest(1);
        }
        self.history.push_back(Vector2D::new(x, y));
    }

    pub fn frame_handler(&mut self, now: f64, canvas: &mut impl Canvas) {
        if self.anchor.is_none() {
            return;
        }

        if let Some(rate) = self.frame_rate.tick(now) {
            trace!("frame rate changed to {}", rate);
        }
        canvas.clear();
        self.shorten_trail();

        self.draw_pass(Pass::Cloud, canvas);
        self.rebase();
        self.draw_pass(Pass::Lines, canvas);
        self.rebase();

        self.display_frame_rate(canvas);
    }

    pub fn history(&self) -> &VecDeque<Vector2D> {
        &self.history
    }

    pub fn anchor(&self) -> Option<Vector2D> {
        self.anchor
    }

    pub fn hue(&self) -> f64 {
        self.hue.hue()
    }

    pub fn frame_rate(&self) -> Option<u32> {
        self.frame_rate.rate()
    }

    pub fn config(&self) -> &TrailConfig {
        &self.config
    }

    fn remove_oldest(&mut self, count: usize) {
        let count = count.min(self.history.len());
        self.history.drain(..count);
    }

    fn shorten_trail(&mut self) {
        if self.clean && !self.history.is_empty() {
            self.remove_oldest(self.config.drain_per_frame);
        }
    }

    // 描画ループ / Drawing loop
    // 各点について前の点(anchor)から Segment を求め、パスごとに描く
    // For each point, derive a segment against the previous point and draw it.
    fn draw_pass(&mut self, pass: Pass, canvas: &mut impl Canvas) {
        let Some(mut previous) = self.anchor else {
            return;
        };
        let Self {
            config,
            history,
            hue,
            jitter,
            ..
        } = self;

        for &point in history.iter() {
            let segment = derive_segment(point, previous);
            let h = hue.advance(config.hue_step);
            match pass {
                Pass::Cloud => draw_cloud(config, jitter, &segment, h, canvas),
                Pass::Lines => draw_lines(config, &segment, h, canvas),
            }
            previous = point;
        }
    }

    fn rebase(&mut self) {
        self.hue.rebase();
        if let Some(&first) = self.history.front() {
            self.anchor = Some(first);
        }
    }

    fn display_frame_rate(&self, canvas: &mut impl Canvas) {
        if let Some(text) = self.frame_rate.display() {
            canvas.stroke_text(
                &text,
                self.config.frame_rate_position,
                self.config.frame_rate_font_size,
                Hsb::WHITE,
            );
        }
    }
}

fn draw_cloud(
    config: &TrailConfig,
    jitter: &mut Jitter,
    segment: &Segment,
    hue: f64,
    canvas: &mut impl Canvas,
) {
    let color = Hsb::new(hue, 1.0, config.cloud_brightness);
    let (from, to) = (segment.center_y, segment.center_x);
    for _ in 0..config.particles_per_point {
        let x = jitter.rough_rand(from.x, to.x, config.jitter_min, config.jitter_max);
        let y = jitter.rough_rand(from.y, to.y, config.jitter_min, config.jitter_max);
        canvas.fill_dot(Vector2D::new(x, y), config.dot_diameter, color);
    }
}

fn draw_lines(config: &TrailConfig, segment: &Segment, hue: f64, canvas: &mut impl Canvas) {
    let color = Hsb::new(hue, 1.0, config.line_brightness);
    canvas.stroke_line(segment.middle, segment.center_x, config.line_width, color);
    canvas.stroke_line(segment.middle, segment.center_y, config.line_width, color);
}
