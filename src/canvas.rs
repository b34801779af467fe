//! Drawing surface abstraction.
//!
//! The animator issues immediate-mode calls against `Canvas`. `DisplayList`
//! records those calls so they can be replayed later by the window's view
//! (or inspected by tests).

use crate::vector::Vector2D;

/// Hue in degrees, saturation and brightness in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    pub const WHITE: Self = Self {
        hue: 0.0,
        saturation: 0.0,
        brightness: 1.0,
    };

    pub const fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Hue as a fraction of a full turn, as nannou's `hsv` expects.
    pub fn hue_turns(&self) -> f64 {
        self.hue / 360.0
    }
}

pub trait Canvas {
    /// Wipe the whole surface.
    fn clear(&mut self);

    fn stroke_line(&mut self, from: Vector2D, to: Vector2D, width: f64, color: Hsb);

    /// Filled dot of `diameter` centred on `at`.
    fn fill_dot(&mut self, at: Vector2D, diameter: f64, color: Hsb);

    /// Text whose position is measured from the top-left corner of the surface.
    fn stroke_text(&mut self, text: &str, at: Vector2D, size: u32, color: Hsb);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line {
        from: Vector2D,
        to: Vector2D,
        width: f64,
        color: Hsb,
    },
    Dot {
        at: Vector2D,
        diameter: f64,
        color: Hsb,
    },
    Text {
        text: String,
        at: Vector2D,
        size: u32,
        color: Hsb,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn dots(&self) -> impl Iterator<Item = (&Vector2D, &Hsb)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Dot { at, color, .. } => Some((at, color)),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = (&Vector2D, &Vector2D, &Hsb)> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { from, to, color, .. } => Some((from, to, color)),
            _ => None,
        })
    }

    pub fn text(&self) -> Option<&str> {
        self.commands.iter().find_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for DisplayList {
    fn clear(&mut self) {
        // 以前の描画は不要 / nothing drawn before a clear is visible
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_line(&mut self, from: Vector2D, to: Vector2D, width: f64, color: Hsb) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn fill_dot(&mut self, at: Vector2D, diameter: f64, color: Hsb) {
        self.commands.push(DrawCommand::Dot {
            at,
            diameter,
            color,
        });
    }

    fn stroke_text(&mut self, text: &str, at: Vector2D, size: u32, color: Hsb) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            at,
            size,
            color,
        });
    }
}
