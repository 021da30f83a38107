// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Candidate ordering and best-fit selection against the viewport.

use kurbo::{Point, Rect, Size};

use crate::offset::{PlacementMetrics, compute_offset};
use crate::position::{Position, Side};

/// A scored placement: a position, its offset, and how much of the tip stays
/// visible inside the viewport when placed there.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// The placed position.
    pub position: Position,
    /// Viewport-relative offset of the tip's top-left corner.
    pub offset: Point,
    /// Tip area remaining visible after clipping to the viewport, in px².
    pub visible_area: f64,
    /// `true` when the tip lies entirely inside the viewport at this offset.
    pub fully_visible: bool,
}

/// Generates the preference order over all twelve positions, seeded by
/// `preferred`.
///
/// Side groups come in a fixed order — the preferred side, its opposite, its
/// 90° rotation, and that rotation's opposite. Inside a group whose axis
/// admits the preferred secondary alignment, the order is
/// `[side+alignment, side, side+opposite(alignment)]`; other groups lean
/// toward the side's own rotation: `[side, side+rotation,
/// side+opposite(rotation)]`.
///
/// Every position appears exactly once and the first element is always
/// `preferred` itself. The order is deterministic; it is the tie-break
/// contract of [`select_position`].
///
/// ```
/// use awning_placement::{candidates, Position};
///
/// let order = candidates(Position::Top);
/// assert_eq!(order[0], Position::Top);
/// assert_eq!(order[3], Position::Bottom);
///
/// let order = candidates(Position::TopLeft);
/// assert_eq!(&order[..3], &[Position::TopLeft, Position::Top, Position::TopRight]);
/// ```
#[must_use]
pub fn candidates(preferred: Position) -> [Position; 12] {
    let align = preferred.alignment();
    let primary = preferred.side();
    let sides = [
        primary,
        primary.opposite(),
        primary.adjacent(),
        primary.adjacent().opposite(),
    ];

    let mut out = [preferred; 12];
    for (i, side) in sides.into_iter().enumerate() {
        out[i * 3..(i + 1) * 3].copy_from_slice(&side_group(side, align));
    }
    out
}

/// Ordering inside one side group. A stated secondary alignment applies only
/// on the axis that admits it; perpendicular groups fall back to the default
/// lean.
fn side_group(side: Side, preferred_align: Option<Side>) -> [Position; 3] {
    if let Some(align) = preferred_align
        && align.is_vertical() != side.is_vertical()
    {
        return [
            corner(side, align),
            Position::from(side),
            corner(side, align.opposite()),
        ];
    }
    let lean = side.adjacent();
    [
        Position::from(side),
        corner(side, lean),
        corner(side, lean.opposite()),
    ]
}

fn corner(side: Side, align: Side) -> Position {
    match (side, align) {
        (Side::Top, Side::Left) => Position::TopLeft,
        (Side::Top, Side::Right) => Position::TopRight,
        (Side::Bottom, Side::Left) => Position::BottomLeft,
        (Side::Bottom, Side::Right) => Position::BottomRight,
        (Side::Left, Side::Top) => Position::LeftTop,
        (Side::Left, Side::Bottom) => Position::LeftBottom,
        (Side::Right, Side::Top) => Position::RightTop,
        (Side::Right, Side::Bottom) => Position::RightBottom,
        _ => unreachable!("corner alignment is perpendicular by construction"),
    }
}

/// Scores a single position: its offset plus the visible area left after
/// clipping the tip to the viewport.
///
/// The viewport's top-left corner is the coordinate origin, so clipping only
/// needs the viewport's size.
#[must_use]
pub fn evaluate(
    position: Position,
    tip: Size,
    target: Rect,
    viewport: Size,
    metrics: &PlacementMetrics,
) -> Placement {
    let offset = compute_offset(position, target, tip, metrics);

    let clip_left = (-offset.x).max(0.0);
    let clip_right = (offset.x + tip.width - viewport.width).max(0.0);
    let clip_top = (-offset.y).max(0.0);
    let clip_bottom = (offset.y + tip.height - viewport.height).max(0.0);

    let visible_width = (tip.width - clip_left - clip_right).max(0.0);
    let visible_height = (tip.height - clip_top - clip_bottom).max(0.0);

    Placement {
        position,
        offset,
        visible_area: visible_width * visible_height,
        fully_visible: clip_left == 0.0
            && clip_right == 0.0
            && clip_top == 0.0
            && clip_bottom == 0.0,
    }
}

/// Picks the best-fitting position for the tip.
///
/// Candidates are scanned in [`candidates`] order. The first fully visible
/// candidate wins immediately, so a placement close to the stated preference
/// always beats a better-centered but later one. When nothing fits whole,
/// the placement with the largest visible area wins, earlier candidates
/// taking exact ties. The result is total: even a viewport smaller than the
/// tip yields a (possibly zero-area) placement.
#[must_use]
pub fn select_position(
    preferred: Position,
    tip: Size,
    target: Rect,
    viewport: Size,
    metrics: &PlacementMetrics,
) -> Placement {
    let order = candidates(preferred);

    let mut best = evaluate(order[0], tip, target, viewport, metrics);
    if best.fully_visible {
        return best;
    }
    for &position in &order[1..] {
        let scored = evaluate(position, tip, target, viewport, metrics);
        if scored.fully_visible {
            return scored;
        }
        if scored.visible_area > best.visible_area {
            best = scored;
        }
    }
    best
}
