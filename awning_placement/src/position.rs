// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position tags: the twelve symbolic placements of a tip around its target.

use core::fmt;
use core::str::FromStr;

/// A side of the target rectangle.
///
/// Sides serve two roles: as the primary side a [`Position`] places the tip
/// against, and as the secondary alignment refining a primary side into a
/// corner-biased compound position. The two roles are axis-disjoint — a
/// secondary alignment is always perpendicular to its primary side.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Above the target.
    Top,
    /// Below the target.
    Bottom,
    /// To the left of the target.
    Left,
    /// To the right of the target.
    Right,
}

impl Side {
    /// Returns the geometrically opposite side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the side one 90° rotation away: top→right, right→bottom,
    /// bottom→left, left→top.
    ///
    /// This fixed rotation drives both the side-group order of
    /// [`candidates`](crate::candidates) and the default corner lean inside
    /// a side group.
    #[must_use]
    pub const fn adjacent(self) -> Self {
        match self {
            Self::Top => Self::Right,
            Self::Right => Self::Bottom,
            Self::Bottom => Self::Left,
            Self::Left => Self::Top,
        }
    }

    /// Returns `true` for the sides on the vertical axis (top and bottom).
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// One of the twelve symbolic placements of a tip relative to its target.
///
/// The four pure positions center the tip along the target edge; the eight
/// compound positions bias the tip toward the named corner. Tags parse from
/// and render to their hyphenated names (`"top"`, `"left-bottom"`, ...),
/// which double as the visual-state marker names a host applies while a
/// position is in effect.
///
/// ```
/// use awning_placement::{Position, Side};
///
/// let pos: Position = "bottom-right".parse().unwrap();
/// assert_eq!(pos, Position::BottomRight);
/// assert_eq!(pos.side(), Side::Bottom);
/// assert_eq!(pos.alignment(), Some(Side::Right));
/// assert_eq!(pos.marker(), "bottom-right");
///
/// // Unrecognized tags fail fast rather than guessing a placement.
/// assert!("center".parse::<Position>().is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Position {
    /// Centered above the target.
    Top,
    /// Centered below the target.
    Bottom,
    /// Centered to the left of the target.
    Left,
    /// Centered to the right of the target.
    Right,
    /// Above the target, leaning toward its left corner.
    TopLeft,
    /// Above the target, leaning toward its right corner.
    TopRight,
    /// Below the target, leaning toward its left corner.
    BottomLeft,
    /// Below the target, leaning toward its right corner.
    BottomRight,
    /// Left of the target, leaning toward its top corner.
    LeftTop,
    /// Left of the target, leaning toward its bottom corner.
    LeftBottom,
    /// Right of the target, leaning toward its top corner.
    RightTop,
    /// Right of the target, leaning toward its bottom corner.
    RightBottom,
}

impl Position {
    /// All twelve positions, pure sides first.
    pub const ALL: [Self; 12] = [
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
        Self::LeftTop,
        Self::LeftBottom,
        Self::RightTop,
        Self::RightBottom,
    ];

    /// Returns the primary side the tip is placed against.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => Side::Top,
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Side::Bottom,
            Self::Left | Self::LeftTop | Self::LeftBottom => Side::Left,
            Self::Right | Self::RightTop | Self::RightBottom => Side::Right,
        }
    }

    /// Returns the secondary corner alignment, if this is a compound
    /// position.
    #[must_use]
    pub const fn alignment(self) -> Option<Side> {
        match self {
            Self::Top | Self::Bottom | Self::Left | Self::Right => None,
            Self::TopLeft | Self::BottomLeft => Some(Side::Left),
            Self::TopRight | Self::BottomRight => Some(Side::Right),
            Self::LeftTop | Self::RightTop => Some(Side::Top),
            Self::LeftBottom | Self::RightBottom => Some(Side::Bottom),
        }
    }

    /// Recomposes a position from a primary side and an optional alignment.
    ///
    /// Returns `None` when the alignment lies on the same axis as the side
    /// (for example `top` aligned `bottom`), which names no corner.
    #[must_use]
    pub const fn compose(side: Side, alignment: Option<Side>) -> Option<Self> {
        match (side, alignment) {
            (Side::Top, None) => Some(Self::Top),
            (Side::Bottom, None) => Some(Self::Bottom),
            (Side::Left, None) => Some(Self::Left),
            (Side::Right, None) => Some(Self::Right),
            (Side::Top, Some(Side::Left)) => Some(Self::TopLeft),
            (Side::Top, Some(Side::Right)) => Some(Self::TopRight),
            (Side::Bottom, Some(Side::Left)) => Some(Self::BottomLeft),
            (Side::Bottom, Some(Side::Right)) => Some(Self::BottomRight),
            (Side::Left, Some(Side::Top)) => Some(Self::LeftTop),
            (Side::Left, Some(Side::Bottom)) => Some(Self::LeftBottom),
            (Side::Right, Some(Side::Top)) => Some(Self::RightTop),
            (Side::Right, Some(Side::Bottom)) => Some(Self::RightBottom),
            _ => None,
        }
    }

    /// Returns the hyphenated tag, also used as the visual-state marker name.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopLeft => "top-left",
            Self::TopRight => "top-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomRight => "bottom-right",
            Self::LeftTop => "left-top",
            Self::LeftBottom => "left-bottom",
            Self::RightTop => "right-top",
            Self::RightBottom => "right-bottom",
        }
    }
}

impl From<Side> for Position {
    fn from(side: Side) -> Self {
        match side {
            Side::Top => Self::Top,
            Side::Bottom => Self::Bottom,
            Side::Left => Self::Left,
            Side::Right => Self::Right,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Error returned when parsing an unrecognized position tag.
///
/// Guessing a placement from a bad tag would produce a wrong visual result
/// with no signal, so parsing is the fail-fast boundary for configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ParsePositionError;

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognized tip position tag")
    }
}

impl core::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            "top-left" => Ok(Self::TopLeft),
            "top-right" => Ok(Self::TopRight),
            "bottom-left" => Ok(Self::BottomLeft),
            "bottom-right" => Ok(Self::BottomRight),
            "left-top" => Ok(Self::LeftTop),
            "left-bottom" => Ok(Self::LeftBottom),
            "right-top" => Ok(Self::RightTop),
            "right-bottom" => Ok(Self::RightBottom),
            _ => Err(ParsePositionError),
        }
    }
}
