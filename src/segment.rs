//! Per-point geometry for the ribbon.
//!
//! Each trail point is turned into a `Segment` by a fixed sequence of vector
//! operations against the previous point (the anchor). The sequence is kept
//! exactly as the effect was tuned; the resulting shapes are not meant to be
//! a principled construction.

use crate::vector::Vector2D;

/// Scale applied twice while deriving a segment.
const STRETCH: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Direction after the second recompute (`4 * (point - anchor) - anchor`).
    pub direction: Vector2D,
    pub perpendicular_x: Vector2D,
    pub perpendicular_y: Vector2D,
    /// Start of both line strokes.
    pub middle: Vector2D,
    pub center_x: Vector2D,
    pub center_y: Vector2D,
}

/// Derive the drawable geometry for `point` given the previous `anchor`.
pub fn derive_segment(point: Vector2D, anchor: Vector2D) -> Segment {
    let stretched = (point - anchor) * STRETCH;
    let perpendicular_y = stretched.perpendicular_y();

    let direction = stretched - anchor;
    let stretched = direction * STRETCH;
    let perpendicular_x = stretched.perpendicular_x();

    let middle = (stretched + stretched) * 0.5;
    let center_y = middle + middle + middle;
    let center_x = center_y + middle + middle;

    Segment {
        direction,
        perpendicular_x,
        perpendicular_y,
        middle,
        center_x,
        center_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_from_origin_anchor() {
        let seg = derive_segment(Vector2D::new(1.0, 1.0), Vector2D::ZERO);
        // (1,1) * 4 = (4,4); minus origin; * 4 = (16,16)
        assert_eq!(seg.direction, Vector2D::new(4.0, 4.0));
        assert_eq!(seg.middle, Vector2D::new(16.0, 16.0));
        assert_eq!(seg.center_y, Vector2D::new(48.0, 48.0));
        assert_eq!(seg.center_x, Vector2D::new(80.0, 80.0));
        assert_eq!(seg.perpendicular_y, Vector2D::new(4.0, -4.0));
        assert_eq!(seg.perpendicular_x, Vector2D::new(-16.0, 16.0));
    }

    #[test]
    fn recipe_with_offset_anchor() {
        let seg = derive_segment(Vector2D::new(2.0, 2.0), Vector2D::new(1.0, 1.0));
        // (2-1)*4 - 1 = 3; * 4 = 12
        assert_eq!(seg.direction, Vector2D::new(3.0, 3.0));
        assert_eq!(seg.middle, Vector2D::new(12.0, 12.0));
        assert_eq!(seg.center_y, seg.middle * 3.0);
        assert_eq!(seg.center_x, seg.middle * 5.0);
    }

    #[test]
    fn point_on_anchor_collapses_to_negated_anchor() {
        let anchor = Vector2D::new(-2.0, 3.0);
        let seg = derive_segment(anchor, anchor);
        assert_eq!(seg.direction, Vector2D::new(2.0, -3.0));
        assert_eq!(seg.middle, Vector2D::new(8.0, -12.0));
    }
}
