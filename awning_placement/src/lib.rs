// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Awning Placement: viewport-aware placement of a tip element around a target.
//!
//! This crate is the geometry core of Awning. It knows nothing about elements,
//! documents, or events: callers measure their UI and pass rectangles in, and
//! get back the pixel offset at which to place the tip.
//!
//! - [`Position`]: the twelve symbolic placements (`top`, `top-left`, ...,
//!   `right-bottom`), each decomposable into a primary [`Side`] and an
//!   optional perpendicular alignment.
//! - [`compute_offset`]: the offset realizing one position relative to a
//!   target rectangle, tuned by [`PlacementMetrics`].
//! - [`candidates`]: the deterministic preference order over all twelve
//!   positions, seeded by a preferred position. This order is the tie-break
//!   contract of the selector.
//! - [`select_position`]: the auto-positioning algorithm — scans candidates
//!   in order and returns the first fully visible placement, falling back to
//!   the placement with the largest visible area.
//!
//! ## Coordinates
//!
//! All rectangles and offsets are viewport-relative pixels: the viewport's
//! own top-left corner is the origin. Hosts that place elements in document
//! coordinates add the viewport origin back when applying an offset.
//!
//! ## Minimal example
//!
//! ```
//! use awning_placement::{select_position, PlacementMetrics, Position};
//! use kurbo::{Point, Rect, Size};
//!
//! // A 50×20 target at (100, 100) in a 500×500 viewport; an 80×30 tip.
//! let target = Rect::new(100.0, 100.0, 150.0, 120.0);
//! let placement = select_position(
//!     Position::Top,
//!     Size::new(80.0, 30.0),
//!     target,
//!     Size::new(500.0, 500.0),
//!     &PlacementMetrics::default(),
//! );
//!
//! // Room above: the preferred position wins.
//! assert_eq!(placement.position, Position::Top);
//! assert_eq!(placement.offset, Point::new(85.0, 60.0));
//! assert!(placement.fully_visible);
//! ```
//!
//! When the preferred side is clipped by the viewport, the scan falls
//! through to the first candidate that fits:
//!
//! ```
//! use awning_placement::{select_position, PlacementMetrics, Position};
//! use kurbo::{Rect, Size};
//!
//! // The same target pushed against the top edge of the viewport.
//! let target = Rect::new(100.0, 5.0, 150.0, 25.0);
//! let placement = select_position(
//!     Position::Top,
//!     Size::new(80.0, 30.0),
//!     target,
//!     Size::new(500.0, 500.0),
//!     &PlacementMetrics::default(),
//! );
//!
//! // No room above; the opposite side offers full visibility.
//! assert_eq!(placement.position, Position::Bottom);
//! assert!(placement.fully_visible);
//! ```
//!
//! This crate is `no_std`; enable the `std` or `libm` feature to select how
//! Kurbo performs its floating-point math.

#![no_std]

mod offset;
mod position;
mod select;

pub use offset::{PlacementMetrics, compute_offset};
pub use position::{ParsePositionError, Position, Side};
pub use select::{Placement, candidates, evaluate, select_position};
