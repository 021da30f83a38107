// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Offset math: where a tip's top-left corner goes for a given position.

use kurbo::{Point, Rect, Size};

use crate::position::{Position, Side};

/// Pixel tuning for offset computation.
///
/// Neither value is a correctness invariant: `padding` sets the gap between
/// the tip and the target edge, and `corner_inset` sets how far a compound
/// position pulls the tip's corner back past the target's midline. Both are
/// visual tuning knobs with conventional defaults.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementMetrics {
    /// Gap in pixels between the tip and the target edge it sits against.
    pub padding: f64,
    /// Corner pull-back in pixels for compound positions.
    pub corner_inset: f64,
}

impl Default for PlacementMetrics {
    fn default() -> Self {
        Self {
            padding: 10.0,
            corner_inset: 20.0,
        }
    }
}

/// Computes the viewport-relative offset of the tip's top-left corner that
/// realizes `position` against `target`.
///
/// The tip edge sits `metrics.padding` pixels from the matching target edge.
/// Along the perpendicular axis, pure positions center the tip on the target
/// midline; compound positions align the tip's corner near the target's
/// corner, pulled back by `metrics.corner_inset`.
///
/// ```
/// use awning_placement::{compute_offset, PlacementMetrics, Position};
/// use kurbo::{Point, Rect, Size};
///
/// let target = Rect::new(100.0, 100.0, 150.0, 120.0);
/// let tip = Size::new(80.0, 30.0);
/// let metrics = PlacementMetrics::default();
///
/// let above = compute_offset(Position::Top, target, tip, &metrics);
/// assert_eq!(above, Point::new(85.0, 60.0));
///
/// // Compound positions shift along the cross axis only.
/// let leaning = compute_offset(Position::TopLeft, target, tip, &metrics);
/// assert_eq!(leaning.y, above.y);
/// assert!(leaning.x < above.x);
/// ```
#[must_use]
pub fn compute_offset(
    position: Position,
    target: Rect,
    tip: Size,
    metrics: &PlacementMetrics,
) -> Point {
    let align = position.alignment();
    match position.side() {
        Side::Top => Point::new(
            cross(target.x0, target.width(), tip.width, align, metrics),
            target.y0 - tip.height - metrics.padding,
        ),
        Side::Bottom => Point::new(
            cross(target.x0, target.width(), tip.width, align, metrics),
            target.y1 + metrics.padding,
        ),
        Side::Left => Point::new(
            target.x0 - tip.width - metrics.padding,
            cross(target.y0, target.height(), tip.height, align, metrics),
        ),
        Side::Right => Point::new(
            target.x1 + metrics.padding,
            cross(target.y0, target.height(), tip.height, align, metrics),
        ),
    }
}

/// Cross-axis coordinate: centered for pure positions, corner-biased for
/// compound ones. The alignment names the target corner the tip leans toward.
fn cross(
    start: f64,
    target_extent: f64,
    tip_extent: f64,
    align: Option<Side>,
    metrics: &PlacementMetrics,
) -> f64 {
    let mid = start + target_extent / 2.0;
    match align {
        None => mid - tip_extent / 2.0,
        Some(Side::Left | Side::Top) => mid - tip_extent + metrics.corner_inset,
        Some(Side::Right | Side::Bottom) => mid - metrics.corner_inset,
    }
}
