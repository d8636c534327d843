// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract: the surface being reordered and the application's hooks.
//!
//! ## Overview
//!
//! The controller never touches a list, a view, or a clock directly. It talks
//! to two collaborators:
//!
//! - [`ReorderHost`]: the scrolling surface. It hit-tests slots, reports layout
//!   geometry, applies batched model/view mutations, captures item
//!   appearances, runs proxy animations and owns the per-frame tick source.
//! - [`ReorderDelegate`]: the application. Every method has a default, so an
//!   application implements only the permissions, notifications and
//!   configuration overrides it cares about. [`NoDelegate`] accepts all
//!   defaults.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect, Size, Vec2};

use crate::axis::Axis;
use crate::proxy::ProxyAnimation;

/// An addressable position in the host's item sequence.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Slot {
    /// Section index.
    pub section: usize,
    /// Item index within the section.
    pub item: usize,
}

impl Slot {
    /// Create a slot from a section and item index.
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// A single atomic model + view update.
///
/// Deletions are applied against the old state and insertions against the
/// new one, so a move is `deletions: [from], insertions: [to]`.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Batch {
    /// Slots removed, in pre-update coordinates.
    pub deletions: Vec<Slot>,
    /// Slots inserted, in post-update coordinates.
    pub insertions: Vec<Slot>,
}

impl Batch {
    /// A batch relocating the item at `from` to `to`.
    pub fn moving(from: Slot, to: Slot) -> Self {
        Self {
            deletions: vec![from],
            insertions: vec![to],
        }
    }

    /// A batch deleting the item at `slot`.
    pub fn removing(slot: Slot) -> Self {
        Self {
            deletions: vec![slot],
            insertions: Vec::new(),
        }
    }
}

/// The scrolling surface a [`ReorderController`](crate::controller::ReorderController) drives.
///
/// All geometry is in content coordinates: a point at `scroll_offset()` is the
/// top-left corner of the viewport.
pub trait ReorderHost {
    /// Static appearance of an item, captured once at pick-up.
    type Image;

    /// Scrolling axis. Read once per layout pass.
    fn axis(&self) -> Axis {
        Axis::Primary
    }

    /// The slot whose item covers `point`, if any.
    fn slot_at(&self, point: Point) -> Option<Slot>;

    /// Current layout frame of the item at `slot`.
    fn frame_for_slot(&self, slot: Slot) -> Option<Rect>;

    /// Current scroll offset.
    fn scroll_offset(&self) -> Vec2;

    /// Set the scroll offset.
    fn set_scroll_offset(&mut self, offset: Vec2);

    /// Size of the visible viewport.
    fn viewport_size(&self) -> Size;

    /// Size of the scrollable content, excluding insets.
    fn content_size(&self) -> Size;

    /// Insets around the content.
    fn content_insets(&self) -> Insets {
        Insets::ZERO
    }

    /// Apply `batch` to the model and the view as one atomic update.
    fn perform_batch(&mut self, batch: &Batch);

    /// Render the item at `slot` to a static image, in its highlighted state
    /// when `highlighted` is set.
    fn capture_appearance(&mut self, slot: Slot, highlighted: bool) -> Self::Image;

    /// Start `animation` on the proxy.
    ///
    /// The host must report completion exactly once, by passing
    /// `animation.ticket` to
    /// [`ReorderController::animation_finished`](crate::controller::ReorderController::animation_finished).
    fn animate_proxy(&mut self, animation: &ProxyAnimation);

    /// Start delivering per-frame ticks to
    /// [`ReorderController::tick`](crate::controller::ReorderController::tick).
    fn start_frame_ticks(&mut self);

    /// Stop delivering per-frame ticks.
    fn stop_frame_ticks(&mut self);

    /// Enable or disable the surface's "scroll to top on tap" behavior.
    fn set_scrolls_to_top(&mut self, _enabled: bool) {}

    /// Request a layout refresh (item opacity or proxy presence changed).
    fn invalidate_layout(&mut self) {}

    /// Whether the surface is currently being scrolled by the user.
    fn is_scrolling(&self) -> bool {
        false
    }
}

/// Application hooks: permissions, notifications and configuration.
///
/// Permissions default to `true`, notifications to no-ops, and configuration
/// hooks to `None` (keep the current [`ReorderConfig`](crate::config::ReorderConfig) value).
pub trait ReorderDelegate {
    /// Whether the item at `slot` may be picked up.
    fn allow_pickup(&mut self, _slot: Slot) -> bool {
        true
    }

    /// Whether the dragged item may move from `from` to `to`.
    fn can_move(&mut self, _from: Slot, _to: Slot) -> bool {
        true
    }

    /// Whether the item at `slot` may be removed by dropping it outside the container.
    fn can_remove(&mut self, _slot: Slot) -> bool {
        true
    }

    /// Called before the item at `slot` is lifted.
    fn will_begin_drag(&mut self, _slot: Slot) {}

    /// Called once the item at `slot` is lifted.
    fn did_begin_drag(&mut self, _slot: Slot) {}

    /// Called before the proxy settles back into `slot`.
    fn will_end_drag(&mut self, _slot: Slot) {}

    /// Called after the proxy has settled into `slot`.
    fn did_end_drag(&mut self, _slot: Slot) {}

    /// Called before the dragged item moves.
    fn will_move(&mut self, _from: Slot, _to: Slot) {}

    /// Called after the move batch has been applied.
    fn did_move(&mut self, _from: Slot, _to: Slot) {}

    /// Called before the item at `slot` is removed.
    fn will_remove(&mut self, _slot: Slot) {}

    /// Called after the removal batch has been applied.
    fn did_remove(&mut self, _slot: Slot) {}

    /// Depth of the auto-scroll trigger zones.
    fn trigger_insets(&mut self) -> Option<Insets> {
        None
    }

    /// Dead band before each trigger zone.
    fn trigger_padding(&mut self) -> Option<Insets> {
        None
    }

    /// Auto-scroll speed per tick.
    fn scroll_speed(&mut self) -> Option<f64> {
        None
    }

    /// Opacity of the reordering item in `section`.
    fn reordering_opacity(&mut self, _section: usize) -> Option<f64> {
        None
    }
}

/// A delegate that accepts every default.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoDelegate;

impl ReorderDelegate for NoDelegate {}
