// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Live state of one in-progress drag.

use kurbo::{Point, Vec2};

use crate::host::Slot;
use crate::proxy::DragProxy;

/// Auto-scroll engagement of a session.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ScrollState {
    /// Not scrolling; no frame ticks requested.
    #[default]
    Idle,
    /// Scrolling toward the leading (top or left) edge.
    ToLeading,
    /// Scrolling toward the trailing (bottom or right) edge.
    ToTrailing,
}

impl ScrollState {
    /// Direction of travel along the axis: `-1`, `0` or `1`.
    pub const fn sign(self) -> f64 {
        match self {
            Self::Idle => 0.0,
            Self::ToLeading => -1.0,
            Self::ToTrailing => 1.0,
        }
    }

    /// Whether auto-scroll is running.
    pub const fn is_engaged(self) -> bool {
        !matches!(self, Self::Idle)
    }
}

/// Where a session is in its lifecycle.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SessionPhase {
    /// Picked up; no pointer movement yet.
    Armed,
    /// Following pointer movement.
    Dragging,
    /// Released; waiting for the terminal animation to finish.
    Resolving,
}

/// How a released session is resolved.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Resolution {
    /// The item settles back into the list.
    Restore,
    /// The item was dropped outside the container and removed.
    Remove,
}

/// State of a single drag, from pick-up to resolution.
#[derive(Clone, Debug)]
pub struct DragSession<I> {
    pub(crate) origin_slot: Slot,
    pub(crate) current_slot: Slot,
    pub(crate) proxy: DragProxy<I>,
    pub(crate) anchor_center: Point,
    pub(crate) pending_translation: Vec2,
    pub(crate) scroll_state: ScrollState,
    pub(crate) phase: SessionPhase,
    pub(crate) resolution: Option<Resolution>,
}

impl<I> DragSession<I> {
    /// Start a session for `proxy`, anchored at the proxy's current center.
    pub fn new(proxy: DragProxy<I>) -> Self {
        let slot = proxy.source_slot();
        Self {
            origin_slot: slot,
            current_slot: slot,
            anchor_center: proxy.position(),
            proxy,
            pending_translation: Vec2::ZERO,
            scroll_state: ScrollState::Idle,
            phase: SessionPhase::Armed,
            resolution: None,
        }
    }

    /// Slot the item was picked up from.
    pub fn origin_slot(&self) -> Slot {
        self.origin_slot
    }

    /// Slot the proxy was last confirmed to occupy.
    pub fn current_slot(&self) -> Slot {
        self.current_slot
    }

    /// The floating proxy.
    pub fn proxy(&self) -> &DragProxy<I> {
        &self.proxy
    }

    /// Proxy center at the last committed reference point.
    pub fn anchor_center(&self) -> Point {
        self.anchor_center
    }

    /// Pointer translation since the anchor.
    pub fn pending_translation(&self) -> Vec2 {
        self.pending_translation
    }

    /// Auto-scroll engagement.
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll_state
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Chosen resolution, once released.
    pub fn resolution(&self) -> Option<Resolution> {
        self.resolution
    }

    /// Record a new pointer translation and move the proxy under the pointer.
    pub fn set_translation(&mut self, translation: Vec2) {
        self.pending_translation = translation;
        self.place_proxy();
    }

    /// Shift the anchor by `delta` (used while auto-scrolling) and re-place the proxy.
    pub fn shift_anchor(&mut self, delta: Vec2) {
        self.anchor_center += delta;
        self.place_proxy();
    }

    fn place_proxy(&mut self) {
        self.proxy
            .set_position(self.anchor_center + self.pending_translation);
    }
}
