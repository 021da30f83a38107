// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Awning Viewport: the current viewport rectangle plus an ordered,
//! broadcast-safe listener registry.
//!
//! A [`ViewportHub`] is the seam between a host environment that observes
//! scroll and resize events and the engines that must react to them. The
//! host owns exactly one hub per application root (no module-level
//! singleton), pushes every viewport change into it with
//! [`ViewportHub::set_rect`], and walks the subscribed listener keys with a
//! [`BroadcastCursor`] to deliver the notification.
//!
//! ## Delivery guarantees
//!
//! - Keys are delivered in subscription order.
//! - Unsubscribing any listener while a broadcast is in flight neither
//!   skips nor double-delivers the remaining listeners.
//! - A listener subscribed mid-broadcast is delivered in the same pass,
//!   after the existing listeners.
//!
//! The cursor tracks progress by subscription id rather than by storage
//! index, so the registry is free to reclaim tombstoned entries at any
//! time without disturbing an in-flight broadcast.
//!
//! ## Example
//!
//! ```
//! use awning_viewport::ViewportHub;
//! use kurbo::Rect;
//!
//! let mut hub: ViewportHub<&str> = ViewportHub::new(Rect::new(0.0, 0.0, 800.0, 600.0));
//! let first = hub.subscribe("first");
//! let _second = hub.subscribe("second");
//!
//! // A scroll arrives: the rect changes and listeners are walked in order.
//! assert!(hub.set_rect(Rect::new(0.0, 50.0, 800.0, 650.0)));
//! let mut cursor = hub.cursor();
//! assert_eq!(cursor.next(&hub), Some("first"));
//!
//! // Unsubscribing mid-broadcast leaves the rest of the walk intact.
//! hub.unsubscribe(first);
//! assert_eq!(cursor.next(&hub), Some("second"));
//! assert_eq!(cursor.next(&hub), None);
//! ```
//!
//! This crate is `no_std` + `alloc`; enable the `std` or `libm` feature to
//! select how Kurbo performs its floating-point math.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;

/// Handle to one subscription in a [`ViewportHub`].
///
/// Ids are never reused: a handle left over from an unsubscribed listener
/// stays permanently stale and cannot alias a later subscription.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Debug for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SubscriptionId").field(&self.0).finish()
    }
}

struct Entry<K> {
    id: u64,
    key: K,
    alive: bool,
}

/// The current viewport rectangle and its listener registry.
///
/// `K` is the listener key type chosen by the caller — typically a small
/// `Copy` id the caller can resolve back to its own state. The hub stores
/// keys, not callbacks, so delivering a notification never requires holding
/// a borrow across listener work.
pub struct ViewportHub<K> {
    rect: Rect,
    entries: Vec<Entry<K>>,
    next_id: u64,
    dead: usize,
}

impl<K: Copy> ViewportHub<K> {
    /// Creates a hub with the given initial viewport rectangle.
    #[must_use]
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            entries: Vec::new(),
            next_id: 0,
            dead: 0,
        }
    }

    /// Returns the most recently observed viewport rectangle.
    #[must_use]
    pub fn current_rect(&self) -> Rect {
        self.rect
    }

    /// Records a new viewport rectangle.
    ///
    /// Returns `true` when the rectangle actually changed; an unchanged
    /// rectangle needs no broadcast.
    pub fn set_rect(&mut self, rect: Rect) -> bool {
        if self.rect == rect {
            return false;
        }
        self.rect = rect;
        true
    }

    /// Registers a listener key and returns its subscription handle.
    pub fn subscribe(&mut self, key: K) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            key,
            alive: true,
        });
        SubscriptionId(id)
    }

    /// Removes a subscription. Returns `false` when the handle was already
    /// stale.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let Some(entry) = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id.0 && entry.alive)
        else {
            return false;
        };
        entry.alive = false;
        self.dead += 1;
        self.maybe_compact();
        true
    }

    /// Returns `true` while the handle refers to a live subscription.
    #[must_use]
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.id == id.0 && entry.alive)
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.entries.len() - self.dead
    }

    /// Returns `true` when no listener is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listener_count() == 0
    }

    /// Starts a broadcast walk over the live listeners, in subscription
    /// order.
    #[must_use]
    pub fn cursor(&self) -> BroadcastCursor {
        BroadcastCursor { after: None }
    }

    /// Reclaims tombstones once they outnumber live entries. Ids stay
    /// monotonic, so in-flight cursors are unaffected.
    fn maybe_compact(&mut self) {
        if self.dead > 8 && self.dead * 2 > self.entries.len() {
            self.entries.retain(|entry| entry.alive);
            self.dead = 0;
        }
    }
}

impl<K: Copy> fmt::Debug for ViewportHub<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportHub")
            .field("rect", &self.rect)
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

/// Walks the live listeners of a [`ViewportHub`] in subscription order.
///
/// The cursor holds no borrow of the hub; callers re-present the hub on
/// each step, leaving them free to mutate it (including unsubscribing) in
/// between.
#[derive(Copy, Clone, Debug)]
pub struct BroadcastCursor {
    /// Id of the last delivered entry, if any.
    after: Option<u64>,
}

impl BroadcastCursor {
    /// Returns the next live listener key, or `None` when the walk is done.
    pub fn next<K: Copy>(&mut self, hub: &ViewportHub<K>) -> Option<K> {
        let start = match self.after {
            // Entries are sorted by id, so resume past the delivered prefix.
            Some(after) => hub.entries.partition_point(|entry| entry.id <= after),
            None => 0,
        };
        let entry = hub.entries[start..].iter().find(|entry| entry.alive)?;
        self.after = Some(entry.id);
        Some(entry.key)
    }
}
