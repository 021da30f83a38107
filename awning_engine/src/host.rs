// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability seam between the engine and the host view layer.

use kurbo::{Point, Rect, Size};

use crate::group::TipId;

/// Marker name applied while a tip is visually hidden.
///
/// The marker is added before the reveal step and whenever a tip is hidden,
/// so host styling can drive entry and exit transitions from a single name.
/// Hosts are free to prefix marker names when mapping them to CSS classes.
pub const HIDDEN_MARKER: &str = "hidden";

/// What a timer was scheduled to do when it fires.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Clear the hidden marker one beat after mounting, so that entry
    /// transition styling has had a chance to apply.
    Reveal,
    /// Tear the tip down after the hide delay has elapsed.
    Remove,
}

/// Handle for a timer requested through [`HostView::schedule`].
///
/// Hosts store the token and hand it back to
/// [`TipGroup::timer_fired`](crate::TipGroup::timer_fired) when the delay
/// elapses. Tokens carry a sequence number, so a fire that arrives after the
/// tip moved on (re-shown, removed, unbound) is recognized as stale and
/// ignored; hosts that cannot revoke timers remain correct without doing
/// anything.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub(crate) tip: TipId,
    pub(crate) kind: TimerKind,
    pub(crate) seq: u32,
}

impl TimerToken {
    pub(crate) const fn new(tip: TipId, kind: TimerKind, seq: u32) -> Self {
        Self { tip, kind, seq }
    }
}

/// Capabilities a host view layer provides to the engine.
///
/// Any UI binding that can mount elements, measure them, toggle named
/// visual-state markers (the CSS-class role), absolutely place an element,
/// and run delayed callbacks satisfies this contract. The engine calls these
/// methods synchronously from its own entry points and never holds on to a
/// handle beyond the tips bound to it.
pub trait HostView {
    /// Handle to one host UI element.
    type Handle: Clone;

    /// Attaches the tip content element to the document root.
    fn mount(&mut self, content: &Self::Handle);

    /// Detaches a previously mounted element. Detaching an element that is
    /// not attached must be a no-op.
    fn unmount(&mut self, content: &Self::Handle);

    /// Measures an element's bounding rectangle, in viewport-relative
    /// pixels.
    fn bounding_rect(&self, element: &Self::Handle) -> Rect;

    /// Measures an element's visible size (the clipped client size).
    fn visible_size(&self, element: &Self::Handle) -> Size;

    /// Adds a named visual-state marker. Adding a marker twice must be a
    /// no-op.
    fn add_marker(&mut self, element: &Self::Handle, marker: &str);

    /// Removes a named visual-state marker. Removing an absent marker must
    /// be a no-op.
    fn remove_marker(&mut self, element: &Self::Handle, marker: &str);

    /// Places an element's top-left corner at absolute document
    /// coordinates.
    fn place(&mut self, element: &Self::Handle, at: Point);

    /// Requests that [`TipGroup::timer_fired`](crate::TipGroup::timer_fired)
    /// be called with `token` after `delay_ms` milliseconds.
    fn schedule(&mut self, token: TimerToken, delay_ms: u32);

    /// Best-effort cancellation of a scheduled timer. Hosts may ignore
    /// this entirely; a fire after cancellation is tolerated as stale.
    fn cancel(&mut self, token: TimerToken);
}
