// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Awning Engine: the tooltip lifecycle engine.
//!
//! A [`TipGroup`] owns a set of tooltips bound to targets, the injected
//! [`ViewportHub`](awning_viewport::ViewportHub) they subscribe to, and the
//! solo stack. The host view layer drives the group from its event loop —
//! hover enter/leave, scroll/resize, timer fires — and the group drives the
//! host back through the [`HostView`] capability trait: mounting, measuring,
//! marker toggles, absolute placement, and timer scheduling.
//!
//! The engine assumes nothing about the host beyond those capabilities. Any
//! binding layer that can mount elements, expose rectangles, and fire hover
//! events satisfies the contract; DOM, canvas, and test hosts all look the
//! same from here.
//!
//! ## Lifecycle
//!
//! Each tip moves through `Unmounted → Shown → Hiding → Unmounted`
//! ([`Phase`]). Showing mounts the content hidden, positions it against the
//! current viewport rectangle, subscribes to viewport changes, and schedules
//! a zero-delay reveal so entry transition styling can latch on. Hiding
//! marks the content hidden and delays the actual removal while an effect
//! is configured, so exit transitions can play; re-showing within the delay
//! cancels the removal. Every viewport change re-measures both elements and
//! re-runs position selection — see `awning_placement` for the geometry.
//!
//! Late events are part of the contract, not an error: timers that fire
//! after their tip moved on, viewport notifications that race with removal,
//! and hover events aimed at unbound tips are all silent no-ops.
//!
//! ## Example
//!
//! ```
//! use awning_engine::{HIDDEN_MARKER, HostView, TimerToken, TipConfig, TipGroup};
//! use awning_viewport::ViewportHub;
//! use kurbo::{Point, Rect, Size};
//!
//! // A minimal host: static element handles and a log of operations.
//! #[derive(Default)]
//! struct Host {
//!     mounted: Vec<&'static str>,
//!     markers: Vec<(&'static str, String)>,
//!     placed: Vec<(&'static str, Point)>,
//!     timers: Vec<(TimerToken, u32)>,
//! }
//!
//! impl HostView for Host {
//!     type Handle = &'static str;
//!
//!     fn mount(&mut self, content: &Self::Handle) {
//!         self.mounted.push(*content);
//!     }
//!     fn unmount(&mut self, content: &Self::Handle) {
//!         self.mounted.retain(|element| element != content);
//!     }
//!     fn bounding_rect(&self, element: &Self::Handle) -> Rect {
//!         if *element == "target" {
//!             Rect::new(100.0, 100.0, 150.0, 120.0)
//!         } else {
//!             Rect::ZERO
//!         }
//!     }
//!     fn visible_size(&self, element: &Self::Handle) -> Size {
//!         if *element == "tip" {
//!             Size::new(80.0, 30.0)
//!         } else {
//!             Size::ZERO
//!         }
//!     }
//!     fn add_marker(&mut self, element: &Self::Handle, marker: &str) {
//!         self.markers.push((*element, marker.to_owned()));
//!     }
//!     fn remove_marker(&mut self, element: &Self::Handle, marker: &str) {
//!         self.markers
//!             .retain(|(el, m)| el != element || m.as_str() != marker);
//!     }
//!     fn place(&mut self, element: &Self::Handle, at: Point) {
//!         self.placed.push((*element, at));
//!     }
//!     fn schedule(&mut self, token: TimerToken, delay_ms: u32) {
//!         self.timers.push((token, delay_ms));
//!     }
//!     fn cancel(&mut self, _token: TimerToken) {}
//! }
//!
//! let mut host = Host::default();
//! let hub = ViewportHub::new(Rect::new(0.0, 0.0, 500.0, 500.0));
//! let mut tips = TipGroup::new(hub);
//!
//! // Bind a tip and drive it from hover events.
//! let tip = tips.bind(&mut host, "target", "tip", TipConfig::default());
//! tips.pointer_enter(&mut host, tip);
//!
//! // The content is mounted, measured, and placed at the preferred position.
//! assert_eq!(host.mounted, vec!["tip"]);
//! assert_eq!(host.placed.last().unwrap().1, Point::new(85.0, 60.0));
//!
//! // The host fires the zero-delay reveal timer: the tip becomes visible.
//! let (reveal, _) = host.timers[0];
//! tips.timer_fired(&mut host, reveal);
//! assert!(host.markers.iter().all(|(_, m)| m.as_str() != HIDDEN_MARKER));
//!
//! // Scrolling repositions the tip in document coordinates.
//! tips.viewport_changed(&mut host, Rect::new(0.0, 50.0, 500.0, 550.0));
//! assert_eq!(host.placed.last().unwrap().1, Point::new(85.0, 110.0));
//!
//! // Hover-leave hides it; removal runs once the configured delay elapses.
//! tips.pointer_leave(&mut host, tip, false);
//! let (remove, delay) = *host.timers.last().unwrap();
//! assert_eq!(delay, 300);
//! tips.timer_fired(&mut host, remove);
//! assert!(host.mounted.is_empty());
//! ```
//!
//! This crate is `no_std` + `alloc`; enable the `std` or `libm` feature to
//! select how Kurbo performs its floating-point math.

#![no_std]

extern crate alloc;

mod config;
mod group;
mod host;
mod solo;

pub use config::TipConfig;
pub use group::{Phase, TipDebugInfo, TipGroup, TipId};
pub use host::{HIDDEN_MARKER, HostView, TimerKind, TimerToken};
