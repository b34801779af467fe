//! A color-cycling ribbon of line strokes and particle clouds that trails the
//! mouse, drawn with nannou.

pub mod animator;
pub mod app;
pub mod canvas;
pub mod config;
pub mod error;
pub mod frame_rate;
pub mod hue;
pub mod jitter;
pub mod logging;
pub mod segment;
pub mod vector;

pub use animator::TrailAnimator;
pub use canvas::{Canvas, DisplayList, DrawCommand, Hsb};
pub use config::TrailConfig;
pub use error::{ConfigError, LoggingError};
pub use vector::Vector2D;
