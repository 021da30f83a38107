// Copyright 2026 the Awning Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tip configuration.

use alloc::string::String;

use awning_placement::{PlacementMetrics, Position};

/// Configuration for one bound tip.
///
/// The defaults mirror the conventional widget: preferred `top`, automatic
/// repositioning, a `"fade"` effect with a 300 ms removal delay, 10 px of
/// padding, hover-driven visibility, and no solo stacking.
#[derive(Clone, Debug, PartialEq)]
pub struct TipConfig {
    /// Preferred position; the seed of the candidate order.
    pub position: Position,
    /// Pick the best-fitting position automatically on every reposition.
    /// When `false`, the configured position is applied unconditionally,
    /// with no viewport awareness.
    pub auto: bool,
    /// Named transition effect, applied to the content as a marker for host
    /// styling to pick up. `None` disables both the effect and the removal
    /// delay.
    pub effect: Option<String>,
    /// Milliseconds between visually hiding a tip and removing it, leaving
    /// room for an exit transition. Only honored while an effect is
    /// configured.
    pub delay_ms: u32,
    /// Pixel tuning for the offset math.
    pub metrics: PlacementMetrics,
    /// Forced visibility. `None` is hover-driven; `Some(_)` detaches the
    /// hover hooks and pins the state (`true` shows at bind time).
    pub show: Option<bool>,
    /// Participate in the group's solo stack, which keeps at most one solo
    /// tip visible at a time.
    pub solo: bool,
}

impl Default for TipConfig {
    fn default() -> Self {
        Self {
            position: Position::Top,
            auto: true,
            effect: Some(String::from("fade")),
            delay_ms: 300,
            metrics: PlacementMetrics::default(),
            show: None,
            solo: false,
        }
    }
}
