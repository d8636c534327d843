// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration: auto-scroll trigger geometry, scroll speed, and proxy style.
//!
//! The controller keeps one [`ReorderConfig`]. Its trigger and speed fields are
//! refreshed from the [`ReorderDelegate`](crate::host::ReorderDelegate) hooks on
//! every [`prepare_layout`](crate::controller::ReorderController::prepare_layout);
//! a hook returning `None` leaves the current value in place.

use kurbo::Insets;

/// Default depth of each auto-scroll trigger zone.
pub const DEFAULT_TRIGGER_INSET: f64 = 100.0;

/// Default scroll distance per frame tick at full trigger penetration.
pub const DEFAULT_SCROLL_SPEED: f64 = 10.0;

/// Tunable parameters for a [`ReorderController`](crate::controller::ReorderController).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReorderConfig {
    /// Depth of the auto-scroll trigger zone at each edge.
    pub trigger_insets: Insets,
    /// Dead band between the container edge and the start of the trigger zone.
    pub trigger_padding: Insets,
    /// Scroll distance per tick when the proxy fully penetrates a trigger zone.
    pub scroll_speed: f64,
    /// Opacity of the in-list item while its proxy is being dragged.
    pub reordering_opacity: f64,
    /// Visual parameters of the drag proxy.
    pub style: ProxyStyle,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            trigger_insets: Insets::uniform(DEFAULT_TRIGGER_INSET),
            trigger_padding: Insets::ZERO,
            scroll_speed: DEFAULT_SCROLL_SPEED,
            reordering_opacity: 0.0,
            style: ProxyStyle::default(),
        }
    }
}

/// Presentation constants for the drag proxy's animations.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ProxyStyle {
    /// Scale applied while the item is lifted.
    pub lift_scale: f64,
    /// Shadow opacity while lifted.
    pub shadow_opacity: f64,
    /// Proxy opacity while a drop would remove the item.
    pub removal_cue_alpha: f64,
    /// Duration of every proxy animation, in seconds.
    pub duration: f64,
}

impl Default for ProxyStyle {
    fn default() -> Self {
        Self {
            lift_scale: 1.1,
            shadow_opacity: 0.7,
            removal_cue_alpha: 0.5,
            duration: 0.3,
        }
    }
}
