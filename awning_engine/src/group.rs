// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tip group: engine slots, the lifecycle state machine, and event
//! dispatch.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use awning_placement::{Position, evaluate, select_position};
use awning_viewport::{SubscriptionId, ViewportHub};
use kurbo::Rect;

use crate::config::TipConfig;
use crate::host::{HIDDEN_MARKER, HostView, TimerKind, TimerToken};
use crate::solo::{Popped, SoloStack};

/// Identifier for a tip bound into a [`TipGroup`].
///
/// A small, copyable handle made of a slot index and a generation counter.
/// Unbinding frees the slot and bumps its generation, so ids held after
/// unbinding go permanently stale and every group entry point treats them
/// as a silent no-op — hover events and timers routinely outlive the tips
/// they were aimed at.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TipId(pub(crate) u32, pub(crate) u32);

impl TipId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Lifecycle phase of one tip.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Not in the document. No subscription is held and any outstanding
    /// timer has been invalidated.
    Unmounted,
    /// Mounted, subscribed, and positioned (possibly still playing its
    /// entry transition).
    Shown,
    /// Visually hidden with a delayed removal pending.
    Hiding,
}

/// Snapshot of one tip's lifecycle state for debugging and inspection.
#[derive(Copy, Clone, Debug)]
pub struct TipDebugInfo {
    /// Current lifecycle phase.
    pub phase: Phase,
    /// Position marker currently applied, if any.
    pub applied: Option<Position>,
    /// Whether a viewport subscription is held.
    pub subscribed: bool,
    /// Whether the tip currently sits on the solo stack.
    pub solo_stacked: bool,
}

struct TipState<H: HostView> {
    target: H::Handle,
    content: H::Handle,
    config: TipConfig,
    phase: Phase,
    applied: Option<Position>,
    subscription: Option<SubscriptionId>,
    reveal_seq: u32,
    remove_seq: u32,
}

struct Slot<H: HostView> {
    generation: u32,
    state: Option<TipState<H>>,
}

/// One application root's worth of tooltips.
///
/// The group owns every bound tip, the injected [`ViewportHub`], and the
/// solo stack, and is the single dispatch point for host events: hover
/// enter/leave, viewport changes, and timer fires. All methods are plain
/// synchronous calls made from the host's event loop; the group never
/// blocks and never calls back into the host beyond the [`HostView`]
/// capabilities.
pub struct TipGroup<H: HostView> {
    slots: Vec<Slot<H>>,
    free: Vec<u32>,
    viewport: ViewportHub<TipId>,
    solo: SoloStack,
}

impl<H: HostView> TipGroup<H> {
    /// Creates a group around the given viewport hub.
    #[must_use]
    pub fn new(viewport: ViewportHub<TipId>) -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            viewport,
            solo: SoloStack::default(),
        }
    }

    /// Returns the group's viewport hub.
    #[must_use]
    pub fn viewport(&self) -> &ViewportHub<TipId> {
        &self.viewport
    }

    /// Number of bound tips.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    /// Returns `true` when no tip is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` while `id` refers to a bound tip.
    #[must_use]
    pub fn is_alive(&self, id: TipId) -> bool {
        self.tip_config(id).is_some()
    }

    /// Binds a tip to a target and returns its id.
    ///
    /// Nothing is mounted yet unless the config forces visibility with
    /// `show: Some(true)`; the usual path is the host wiring its hover
    /// events to [`Self::pointer_enter`] and [`Self::pointer_leave`].
    pub fn bind(
        &mut self,
        host: &mut H,
        target: H::Handle,
        content: H::Handle,
        config: TipConfig,
    ) -> TipId {
        let forced_visible = config.show == Some(true);
        let state = TipState {
            target,
            content,
            config,
            phase: Phase::Unmounted,
            applied: None,
            subscription: None,
            reveal_seq: 0,
            remove_seq: 0,
        };
        let id = match self.free.pop() {
            Some(idx) => {
                let slot = &mut self.slots[idx as usize];
                slot.state = Some(state);
                TipId::new(idx, slot.generation)
            }
            None => {
                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "tip counts stay far below u32::MAX"
                )]
                let idx = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 1,
                    state: Some(state),
                });
                TipId::new(idx, 1)
            }
        };
        if forced_visible {
            self.show(host, id);
        }
        id
    }

    /// Unbinds a tip: final removal, slot free, and solo pop.
    ///
    /// If the tip was the visible top of the solo stack, the entry below it
    /// is revealed.
    pub fn unbind(&mut self, host: &mut H, id: TipId) {
        if !self.is_alive(id) {
            return;
        }
        let revealed = self.solo_pop(id);
        if let Some((state, viewport)) = self.state_mut(id) {
            remove_state(host, viewport, id, state);
        }
        let slot = &mut self.slots[id.idx()];
        slot.state = None;
        slot.generation += 1;
        self.free.push(id.0);
        if let Some(next) = revealed {
            self.show_tip(host, next);
        }
    }

    /// Hover-enter hook. No-op for tips with forced visibility.
    pub fn pointer_enter(&mut self, host: &mut H, id: TipId) {
        let Some(config) = self.tip_config(id) else {
            return;
        };
        if config.show.is_some() {
            return;
        }
        self.show(host, id);
    }

    /// Hover-leave hook. `into_tip` reports that the pointer moved onto the
    /// tip content itself, which keeps the tip open (leaving the content
    /// fires another leave). No-op for tips with forced visibility.
    pub fn pointer_leave(&mut self, host: &mut H, id: TipId, into_tip: bool) {
        if into_tip {
            return;
        }
        if self.tip_config(id).is_some_and(|config| config.show.is_some()) {
            return;
        }
        self.hide(host, id);
    }

    /// Shows a tip, cancelling any pending removal. Idempotent.
    ///
    /// A solo tip is raised on the stack first, suppressing every other
    /// stacked tip.
    pub fn show(&mut self, host: &mut H, id: TipId) {
        if self.tip_config(id).is_some_and(|config| config.solo) {
            self.solo_raise(host, id);
        }
        self.show_tip(host, id);
    }

    /// Hides a tip. Removal is delayed by the configured delay while an
    /// effect is set, immediate otherwise. Idempotent; stale ids still pop
    /// the solo stack so that pushes and pops stay paired.
    pub fn hide(&mut self, host: &mut H, id: TipId) {
        let revealed = self.solo_pop(id);
        if let Some((state, viewport)) = self.state_mut(id) {
            hide_state(host, viewport, id, state);
        }
        if let Some(next) = revealed {
            self.show_tip(host, next);
        }
    }

    /// Repositions one tip against the given viewport rectangle.
    ///
    /// Measurements are taken fresh; a call that races with removal is a
    /// silent no-op.
    pub fn reposition(&mut self, host: &mut H, id: TipId, rect: Rect) {
        if let Some((state, _)) = self.state_mut(id) {
            reposition_state(host, rect, state);
        }
    }

    /// Delivers a viewport change: records the rectangle and repositions
    /// every subscribed tip in subscription order.
    pub fn viewport_changed(&mut self, host: &mut H, rect: Rect) {
        if !self.viewport.set_rect(rect) {
            return;
        }
        let mut cursor = self.viewport.cursor();
        while let Some(id) = cursor.next(&self.viewport) {
            self.reposition(host, id, rect);
        }
    }

    /// Delivers a fired timer. Stale tokens — a sequence number the tip has
    /// moved past, a dead id, or a phase that no longer expects the fire —
    /// are silently ignored.
    pub fn timer_fired(&mut self, host: &mut H, token: TimerToken) {
        let Some((state, viewport)) = self.state_mut(token.tip) else {
            return;
        };
        match token.kind {
            TimerKind::Reveal => {
                if token.seq == state.reveal_seq && state.phase == Phase::Shown {
                    host.remove_marker(&state.content, HIDDEN_MARKER);
                }
            }
            TimerKind::Remove => {
                if token.seq == state.remove_seq && state.phase == Phase::Hiding {
                    remove_state(host, viewport, token.tip, state);
                }
            }
        }
    }

    /// Changes a tip's preferred position, repositioning it immediately if
    /// it is mounted.
    pub fn set_position(&mut self, host: &mut H, id: TipId, position: Position) {
        let rect = self.viewport.current_rect();
        if let Some((state, _)) = self.state_mut(id) {
            state.config.position = position;
            reposition_state(host, rect, state);
        }
    }

    /// Changes a tip's effect, swapping the effect marker in place if the
    /// tip is mounted.
    pub fn set_effect(&mut self, host: &mut H, id: TipId, effect: Option<String>) {
        if let Some((state, _)) = self.state_mut(id) {
            if state.phase != Phase::Unmounted && state.config.effect != effect {
                if let Some(old) = &state.config.effect {
                    host.remove_marker(&state.content, old);
                }
                if let Some(new) = &effect {
                    host.add_marker(&state.content, new);
                }
            }
            state.config.effect = effect;
        }
    }

    /// Changes a tip's forced-visibility flag and applies the transition it
    /// implies.
    pub fn set_show(&mut self, host: &mut H, id: TipId, show: Option<bool>) {
        if let Some((state, _)) = self.state_mut(id) {
            state.config.show = show;
        } else {
            return;
        }
        match show {
            Some(true) => self.show(host, id),
            Some(false) => self.hide(host, id),
            None => {}
        }
    }

    /// Returns a debugging snapshot of one tip, or `None` for stale ids.
    #[must_use]
    pub fn debug_info(&self, id: TipId) -> Option<TipDebugInfo> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        let state = slot.state.as_ref()?;
        Some(TipDebugInfo {
            phase: state.phase,
            applied: state.applied,
            subscribed: state.subscription.is_some(),
            solo_stacked: self.solo.contains(id),
        })
    }

    fn tip_config(&self, id: TipId) -> Option<&TipConfig> {
        let slot = self.slots.get(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        Some(&slot.state.as_ref()?.config)
    }

    fn state_mut(&mut self, id: TipId) -> Option<(&mut TipState<H>, &mut ViewportHub<TipId>)> {
        let Self {
            slots, viewport, ..
        } = self;
        let slot = slots.get_mut(id.idx())?;
        if slot.generation != id.1 {
            return None;
        }
        let state = slot.state.as_mut()?;
        Some((state, viewport))
    }

    fn show_tip(&mut self, host: &mut H, id: TipId) {
        if let Some((state, viewport)) = self.state_mut(id) {
            show_state(host, viewport, id, state);
        }
    }

    /// Suppresses every other stacked tip, then stacks `id` on top.
    fn solo_raise(&mut self, host: &mut H, id: TipId) {
        let others: Vec<TipId> = self
            .solo
            .entries()
            .iter()
            .copied()
            .filter(|&entry| entry != id)
            .collect();
        for other in others {
            if let Some((state, viewport)) = self.state_mut(other) {
                remove_state(host, viewport, other, state);
            }
        }
        self.solo.promote(id);
    }

    fn solo_pop(&mut self, id: TipId) -> Option<TipId> {
        match self.solo.remove(id) {
            Popped::WasTop(next) => next,
            Popped::WasInner | Popped::Absent => None,
        }
    }
}

impl<H: HostView> fmt::Debug for TipGroup<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TipGroup")
            .field("tips", &self.len())
            .field("viewport", &self.viewport)
            .finish_non_exhaustive()
    }
}

fn show_state<H: HostView>(
    host: &mut H,
    viewport: &mut ViewportHub<TipId>,
    id: TipId,
    state: &mut TipState<H>,
) {
    match state.phase {
        Phase::Shown | Phase::Hiding => {
            if state.phase == Phase::Hiding {
                host.cancel(TimerToken::new(id, TimerKind::Remove, state.remove_seq));
            }
            // Invalidate any removal that slips past the cancellation.
            state.remove_seq = state.remove_seq.wrapping_add(1);
            host.remove_marker(&state.content, HIDDEN_MARKER);
            state.phase = Phase::Shown;
        }
        Phase::Unmounted => {
            host.mount(&state.content);
            if let Some(effect) = &state.config.effect {
                host.add_marker(&state.content, effect);
            }
            host.add_marker(&state.content, HIDDEN_MARKER);
            state.phase = Phase::Shown;
            // Initial placement against the rect we already know; later
            // scrolls and resizes arrive through the subscription.
            reposition_state(host, viewport.current_rect(), state);
            debug_assert!(
                state.subscription.is_none(),
                "an unmounted tip holds no subscription"
            );
            state.subscription = Some(viewport.subscribe(id));
            state.reveal_seq = state.reveal_seq.wrapping_add(1);
            host.schedule(TimerToken::new(id, TimerKind::Reveal, state.reveal_seq), 0);
        }
    }
}

fn hide_state<H: HostView>(
    host: &mut H,
    viewport: &mut ViewportHub<TipId>,
    id: TipId,
    state: &mut TipState<H>,
) {
    match state.phase {
        // Already gone or already on its way out with a removal pending;
        // scheduling a second removal would leak.
        Phase::Unmounted | Phase::Hiding => {}
        Phase::Shown => {
            host.add_marker(&state.content, HIDDEN_MARKER);
            // The removal delay exists to let an exit transition play;
            // without an effect there is nothing to wait for.
            let delay = if state.config.effect.is_some() {
                state.config.delay_ms
            } else {
                0
            };
            if delay > 0 {
                state.remove_seq = state.remove_seq.wrapping_add(1);
                host.schedule(TimerToken::new(id, TimerKind::Remove, state.remove_seq), delay);
                state.phase = Phase::Hiding;
            } else {
                remove_state(host, viewport, id, state);
            }
        }
    }
}

fn remove_state<H: HostView>(
    host: &mut H,
    viewport: &mut ViewportHub<TipId>,
    id: TipId,
    state: &mut TipState<H>,
) {
    if state.phase == Phase::Unmounted {
        return;
    }
    host.cancel(TimerToken::new(id, TimerKind::Reveal, state.reveal_seq));
    if state.phase == Phase::Hiding {
        host.cancel(TimerToken::new(id, TimerKind::Remove, state.remove_seq));
    }
    state.reveal_seq = state.reveal_seq.wrapping_add(1);
    state.remove_seq = state.remove_seq.wrapping_add(1);
    if let Some(applied) = state.applied.take() {
        host.remove_marker(&state.content, applied.marker());
    }
    host.unmount(&state.content);
    if let Some(subscription) = state.subscription.take() {
        viewport.unsubscribe(subscription);
    }
    state.phase = Phase::Unmounted;
}

fn reposition_state<H: HostView>(host: &mut H, rect: Rect, state: &mut TipState<H>) {
    if state.phase == Phase::Unmounted {
        // A notification that raced with removal; nothing to move.
        return;
    }
    // Layout may have shifted since the last pass; measure fresh every time.
    let target = host.bounding_rect(&state.target);
    let tip = host.visible_size(&state.content);
    let placement = if state.config.auto {
        select_position(
            state.config.position,
            tip,
            target,
            rect.size(),
            &state.config.metrics,
        )
    } else {
        evaluate(
            state.config.position,
            tip,
            target,
            rect.size(),
            &state.config.metrics,
        )
    };
    if state.applied != Some(placement.position) {
        if let Some(old) = state.applied {
            host.remove_marker(&state.content, old.marker());
        }
        host.add_marker(&state.content, placement.position.marker());
        state.applied = Some(placement.position);
    }
    host.place(&state.content, rect.origin() + placement.offset.to_vec2());
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};
    use alloc::vec::Vec;

    use kurbo::{Point, Size};

    use super::*;

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 500.0, 500.0);

    struct Host {
        target_rect: Rect,
        tip_size: Size,
        mounted: Vec<&'static str>,
        markers: Vec<(&'static str, String)>,
        placed: Vec<(&'static str, Point)>,
        scheduled: Vec<(TimerToken, u32)>,
        cancelled: Vec<TimerToken>,
    }

    impl Host {
        fn new() -> Self {
            Self {
                target_rect: Rect::new(100.0, 100.0, 150.0, 120.0),
                tip_size: Size::new(80.0, 30.0),
                mounted: Vec::new(),
                markers: Vec::new(),
                placed: Vec::new(),
                scheduled: Vec::new(),
                cancelled: Vec::new(),
            }
        }

        fn is_mounted(&self, element: &'static str) -> bool {
            self.mounted.contains(&element)
        }

        fn has_marker(&self, element: &'static str, marker: &str) -> bool {
            self.markers
                .iter()
                .any(|(el, m)| *el == element && m == marker)
        }

        fn last_scheduled(&self, kind: TimerKind) -> TimerToken {
            self.scheduled
                .iter()
                .rev()
                .find(|(token, _)| token.kind == kind)
                .map(|(token, _)| *token)
                .expect("a timer of the requested kind was scheduled")
        }

        fn last_placed(&self) -> Point {
            self.placed.last().expect("something was placed").1
        }
    }

    impl HostView for Host {
        type Handle = &'static str;

        fn mount(&mut self, content: &Self::Handle) {
            if !self.mounted.contains(content) {
                self.mounted.push(*content);
            }
        }

        fn unmount(&mut self, content: &Self::Handle) {
            self.mounted.retain(|element| element != content);
        }

        fn bounding_rect(&self, element: &Self::Handle) -> Rect {
            if element.starts_with("target") {
                self.target_rect
            } else {
                Rect::ZERO
            }
        }

        fn visible_size(&self, element: &Self::Handle) -> Size {
            if element.starts_with("tip") {
                self.tip_size
            } else {
                Size::ZERO
            }
        }

        fn add_marker(&mut self, element: &Self::Handle, marker: &str) {
            if !self.has_marker(*element, marker) {
                self.markers.push((*element, marker.to_string()));
            }
        }

        fn remove_marker(&mut self, element: &Self::Handle, marker: &str) {
            self.markers
                .retain(|(el, m)| el != element || m.as_str() != marker);
        }

        fn place(&mut self, element: &Self::Handle, at: Point) {
            self.placed.push((*element, at));
        }

        fn schedule(&mut self, token: TimerToken, delay_ms: u32) {
            self.scheduled.push((token, delay_ms));
        }

        fn cancel(&mut self, token: TimerToken) {
            self.cancelled.push(token);
        }
    }

    fn group() -> TipGroup<Host> {
        TipGroup::new(ViewportHub::new(VIEWPORT))
    }

    fn plain_config() -> TipConfig {
        // No effect: hides remove synchronously, which keeps assertions flat.
        TipConfig {
            effect: None,
            ..TipConfig::default()
        }
    }

    #[test]
    fn entering_mounts_positions_and_subscribes() {
        let mut host = Host::new();
        let mut tips = group();
        let tip = tips.bind(&mut host, "target", "tip", TipConfig::default());

        tips.pointer_enter(&mut host, tip);

        assert!(host.is_mounted("tip"));
        assert!(host.has_marker("tip", "fade"));
        assert!(host.has_marker("tip", HIDDEN_MARKER));
        assert!(host.has_marker("tip", "top"));
        assert_eq!(host.last_placed(), Point::new(85.0, 60.0));
        assert_eq!(tips.viewport().listener_count(), 1);

        let info = tips.debug_info(tip).expect("tip is alive");
        assert_eq!(info.phase, Phase::Shown);
        assert!(info.subscribed);
        assert_eq!(info.applied, Some(Position::Top));
    }

    #[test]
    fn double_show_holds_a_single_subscription() {
        let mut host = Host::new();
        let mut tips = group();
        let tip = tips.bind(&mut host, "target", "tip", TipConfig::default());

        tips.show(&mut host, tip);
        tips.show(&mut host, tip);

        assert_eq!(tips.viewport().listener_count(), 1);
        assert_eq!(host.mounted.len(), 1);
    }

    #[test]
    fn the_reveal_timer_clears_the_hidden_marker() {
        let mut host = Host::new();
        let mut tips = group();
        let tip = tips.bind(&mut host, "target", "tip", TipConfig::default());

        tips.show(&mut host, tip);
        let (reveal, delay) = *host
            .scheduled
            .iter()
            .rev()
            .find(|(token, _)| token.kind == TimerKind::Reveal)
            .expect("a reveal was scheduled");
        assert_eq!(delay, 0);
        assert!(host.has_marker("tip", HIDDEN_MARKER));

        tips.timer_fired(&mut host, reveal);
        assert!(!host.has_marker("tip", HIDDEN_MARKER));
    }

    #[test]
    fn stale_reveal_timers_do_not_unhide_a_hiding_tip() {
        let mut host = Host::new();
        let mut tips = group();
        let tip = tips.bind(&mut host, "target", "tip", TipConfig::default());

        tips.show(&mut host, tip);
        let reveal = host.last_scheduled(TimerKind::Reveal);
        tips.hide(&mut host, tip);

        // The reveal fires after the hide; it must not lift the marker.
        tips.timer_fired(&mut host, reveal);
        assert!(host.has_marker("tip", HIDDEN_MARKER));
        assert_eq!(tips.debug_info(tip).expect("alive").phase, Phase::Hiding);
    }

    #[test]
    fn hide_with_an_effect_delays_removal() {
        let mut host = Host::new();
        let mut tips = group();
        let tip = tips.bind(&mut host, "target", "tip", TipConfig::default());

        tips.show(&mut host, tip);
        let reveal = host.last_scheduled(TimerKind::Reveal);
        tips.timer_fired(&mut host, reveal);
        tips.hide(&mut host, tip);

        assert!(host.is_mounted("tip"));
        assert!(host.has_marker("tip", HIDDEN_MARKER));
        assert_eq!(tips.debug_info(tip).expect("alive").phase, Phase::Hiding);

        let (remove, delay) = *host
            .scheduled
            .iter()
            .rev()
            .find(|(token, _)| token.kind == TimerKind::Remove)
            .expect("a removal was scheduled");
        assert_eq!(delay, 300);

        tips.timer_fired(&mut host, remove);
        assert!(!host.is_mounted("tip"));
        assert!(!host.has_marker("tip", "top"));
        assert_eq!(tips.viewport().listener_count(), 0);
        assert_eq!(tips.debug_info(tip).expect("alive").phase, Phase::Unmounted);
    }

    #[test]
    fn hide_without_an_effect_removes_synchronously() {
        let mut host = Host::new();
        let mut tips = group();
        let tip = tips.bind(&mut host, "target", "tip", plain_config());

        tips.show(&mut host, tip);
        tips.hide(&mut host, tip);

        assert!(!host.is_mounted("tip"));
        assert_eq!(tips.viewport().listener_count(), 0);
        assert!(
            host.scheduled
                .iter()
                .all(|(token, _)| token.kind != TimerKind::Remove)
        );
    }

    #[test]
    fn reshowing_before_the_delay_cancels_the_pending_removal() {
        let mut host = Host::new();
        let mut tips = group();
        let tip = tips.bind(&mut host, "target", "tip", TipConfig::default());

        tips.show(&mut host, tip);
        let reveal = host.last_scheduled(TimerKind::Reveal);
        tips.timer_fired(&mut host, reveal);
        tips.hide(&mut host, tip);
        let stale = host.last_scheduled(TimerKind::Remove);

        tips.show(&mut host, tip);
        assert!(host.cancelled.contains(&stale));
        assert!(!host.has_marker("tip", HIDDEN_MARKER));

        // A host that cannot revoke timers fires it anyway.
        tips.timer_fired(&mut host, stale);
        assert!(host.is_mounted("tip"));
        assert_eq!(tips.debug_info(tip).expect("alive").phase, Phase::Shown);
    }

    #[test]
    fn double_hide_schedules_only_one_removal() {
        let mut host = Host::new();
        let mut tips = group();
        let tip = tips.bind(&mut host, "target", "tip", TipConfig::default());

        tips.show(&mut host, tip);
        tips.hide(&mut host, tip);
        tips.hide(&mut host, tip);

        let removals = host
            .scheduled
            .iter()
            .filter(|(token, _)| token.kind == TimerKind::Remove)
            .count();
        assert_eq!(removals, 1);
    }

    #[test]
    fn viewport_changes_reposition_in_document_coordinates() {
        let mut host = Host::new();
        let mut tips = group();
        let tip = tips.bind(&mut host, "target", "tip", TipConfig::default());

        tips.show(&mut host, tip);
        assert_eq!(host.last_placed(), Point::new(85.0, 60.0));

        tips.viewport_changed(&mut host, Rect::new(0.0, 50.0, 500.0, 550.0));
        assert_eq!(host.last_placed(), Point::new(85.0, 110.0));
    }

    #[test]
    fn unchanged_viewport_rects_do_not_broadcast() {
        let mut host = Host::new();
        let mut tips = group();
        let tip = tips.bind(&mut host, "target", "tip", TipConfig::default());

        tips.show(&mut host, tip);
        let placements = host.placed.len();
        tips.viewport_changed(&mut host, VIEWPORT);
        assert_eq!(host.placed.len(), placements);
    }

    #[test]
    fn layout_shifts_swap_the_position_marker() {
        let mut host = Host::new();
        let mut tips = group();
        let tip = tips.bind(&mut host, "target", "tip", TipConfig::default());

        tips.show(&mut host, tip);
        assert!(host.has_marker("tip", "top"));

        // The page scrolls and the target ends up hugging the top edge.
        host.target_rect = Rect::new(100.0, 5.0, 150.0, 25.0);
        tips.viewport_changed(&mut host, Rect::new(0.0, 95.0, 500.0, 595.0));

        assert!(host.has_marker("tip", "bottom"));
        assert!(!host.has_marker("tip", "top"));
        assert_eq!(
            tips.debug_info(tip).expect("alive").applied,
            Some(Position::Bottom)
        );
    }

    #[test]
    fn stale_notifications_after_removal_are_ignored() {
        let mut host = Host::new();
        let mut tips = group();
        let tip = tips.bind(&mut host, "target", "tip", plain_config());

        tips.show(&mut host, tip);
        tips.hide(&mut host, tip);

        let placements = host.placed.len();
        tips.reposition(&mut host, tip, VIEWPORT);
        assert_eq!(host.placed.len(), placements);
    }

    #[test]
    fn fixed_positioning_ignores_the_viewport() {
        let mut host = Host::new();
        host.target_rect = Rect::new(100.0, 5.0, 150.0, 25.0);
        let mut tips = group();
        let config = TipConfig {
            auto: false,
            ..TipConfig::default()
        };
        let tip = tips.bind(&mut host, "target", "tip", config);

        tips.show(&mut host, tip);

        // The configured position is applied even though it is clipped.
        assert!(host.has_marker("tip", "top"));
        assert_eq!(host.last_placed(), Point::new(85.0, -35.0));
    }

    #[test]
    fn solo_tips_stack_and_reveal_in_reverse_order() {
        let mut host = Host::new();
        let mut tips = group();
        let solo = TipConfig {
            solo: true,
            ..plain_config()
        };
        let a = tips.bind(&mut host, "target-a", "tip-a", solo.clone());
        let b = tips.bind(&mut host, "target-b", "tip-b", solo.clone());
        let c = tips.bind(&mut host, "target-c", "tip-c", solo);

        tips.pointer_enter(&mut host, a);
        tips.pointer_enter(&mut host, b);
        tips.pointer_enter(&mut host, c);

        assert_eq!(host.mounted, ["tip-c"]);
        assert!(tips.debug_info(a).expect("alive").solo_stacked);

        tips.hide(&mut host, c);
        assert_eq!(host.mounted, ["tip-b"]);
        tips.hide(&mut host, b);
        assert_eq!(host.mounted, ["tip-a"]);
        tips.hide(&mut host, a);
        assert!(host.mounted.is_empty());
        assert_eq!(tips.viewport().listener_count(), 0);
    }

    #[test]
    fn hiding_a_suppressed_solo_tip_reveals_nothing() {
        let mut host = Host::new();
        let mut tips = group();
        let solo = TipConfig {
            solo: true,
            ..plain_config()
        };
        let a = tips.bind(&mut host, "target-a", "tip-a", solo.clone());
        let b = tips.bind(&mut host, "target-b", "tip-b", solo);

        tips.pointer_enter(&mut host, a);
        tips.pointer_enter(&mut host, b);

        // The suppressed entry leaves the stack quietly.
        tips.hide(&mut host, a);
        assert_eq!(host.mounted, ["tip-b"]);

        tips.hide(&mut host, b);
        assert!(host.mounted.is_empty());
    }

    #[test]
    fn a_leave_that_fires_after_unbind_still_resolves_cleanly() {
        let mut host = Host::new();
        let mut tips = group();
        let solo = TipConfig {
            solo: true,
            ..plain_config()
        };
        let a = tips.bind(&mut host, "target-a", "tip-a", solo.clone());
        let b = tips.bind(&mut host, "target-b", "tip-b", solo);

        tips.pointer_enter(&mut host, a);
        tips.pointer_enter(&mut host, b);
        tips.unbind(&mut host, b);

        // Unbinding the top already popped it and revealed the previous tip;
        // the late hover-leave must not disturb anything.
        assert_eq!(host.mounted, ["tip-a"]);
        tips.pointer_leave(&mut host, b, false);
        assert_eq!(host.mounted, ["tip-a"]);
    }

    #[test]
    fn pointer_leave_into_the_tip_keeps_it_open() {
        let mut host = Host::new();
        let mut tips = group();
        let tip = tips.bind(&mut host, "target", "tip", plain_config());

        tips.pointer_enter(&mut host, tip);
        tips.pointer_leave(&mut host, tip, true);
        assert!(host.is_mounted("tip"));

        tips.pointer_leave(&mut host, tip, false);
        assert!(!host.is_mounted("tip"));
    }

    #[test]
    fn forced_visibility_detaches_the_hover_hooks() {
        let mut host = Host::new();
        let mut tips = group();
        let config = TipConfig {
            show: Some(true),
            ..plain_config()
        };
        let tip = tips.bind(&mut host, "target", "tip", config);

        // Forced visible at bind time; hover-leave is inert.
        assert!(host.is_mounted("tip"));
        tips.pointer_leave(&mut host, tip, false);
        assert!(host.is_mounted("tip"));

        tips.set_show(&mut host, tip, Some(false));
        assert!(!host.is_mounted("tip"));
        tips.pointer_enter(&mut host, tip);
        assert!(!host.is_mounted("tip"));
    }

    #[test]
    fn set_position_repositions_a_mounted_tip() {
        let mut host = Host::new();
        let mut tips = group();
        let tip = tips.bind(&mut host, "target", "tip", TipConfig::default());

        tips.show(&mut host, tip);
        tips.set_position(&mut host, tip, Position::Right);

        assert!(host.has_marker("tip", "right"));
        assert!(!host.has_marker("tip", "top"));
        assert_eq!(host.last_placed(), Point::new(160.0, 95.0));
    }

    #[test]
    fn set_effect_swaps_the_marker_in_place() {
        let mut host = Host::new();
        let mut tips = group();
        let tip = tips.bind(&mut host, "target", "tip", TipConfig::default());

        tips.show(&mut host, tip);
        assert!(host.has_marker("tip", "fade"));

        tips.set_effect(&mut host, tip, Some("slide".to_string()));
        assert!(host.has_marker("tip", "slide"));
        assert!(!host.has_marker("tip", "fade"));

        tips.set_effect(&mut host, tip, None);
        assert!(!host.has_marker("tip", "slide"));
    }

    #[test]
    fn unbinding_frees_the_slot_and_stales_the_id() {
        let mut host = Host::new();
        let mut tips = group();
        let tip = tips.bind(&mut host, "target", "tip", plain_config());

        tips.show(&mut host, tip);
        tips.unbind(&mut host, tip);

        assert!(!host.is_mounted("tip"));
        assert_eq!(tips.viewport().listener_count(), 0);
        assert!(!tips.is_alive(tip));
        assert!(tips.debug_info(tip).is_none());
        assert!(tips.is_empty());

        // The freed slot is reused under a new generation; the stale id
        // must not alias the replacement.
        let replacement = tips.bind(&mut host, "target", "tip", plain_config());
        assert!(tips.is_alive(replacement));
        assert!(!tips.is_alive(tip));
        tips.pointer_enter(&mut host, tip);
        assert!(host.mounted.is_empty());
    }
}
