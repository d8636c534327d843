// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording host and delegate shared by the unit tests.

use alloc::vec::Vec;

use kurbo::{Insets, Point, Rect, Size, Vec2};

use crate::axis::Axis;
use crate::host::{Batch, ReorderDelegate, ReorderHost, Slot};
use crate::proxy::{AnimationKind, AnimationTicket, ProxyAnimation};

/// A single-section list of uniform rows (or columns).
#[derive(Debug)]
pub(crate) struct ListHost {
    pub(crate) axis: Axis,
    pub(crate) items: Vec<u32>,
    pub(crate) extent: f64,
    pub(crate) breadth: f64,
    pub(crate) viewport: Size,
    pub(crate) offset: Vec2,
    pub(crate) insets: Insets,
    pub(crate) scrolling: bool,
    pub(crate) batches: Vec<Batch>,
    pub(crate) animations: Vec<ProxyAnimation>,
    pub(crate) captures: Vec<(Slot, bool)>,
    pub(crate) ticking: bool,
    pub(crate) tick_starts: usize,
    pub(crate) scrolls_to_top: bool,
    pub(crate) invalidations: usize,
}

impl ListHost {
    /// `count` rows of 50 × 300 in a 300 × 400 viewport.
    pub(crate) fn vertical(count: u32) -> Self {
        Self {
            axis: Axis::Primary,
            items: (0..count).collect(),
            extent: 50.0,
            breadth: 300.0,
            viewport: Size::new(300.0, 400.0),
            offset: Vec2::ZERO,
            insets: Insets::ZERO,
            scrolling: false,
            batches: Vec::new(),
            animations: Vec::new(),
            captures: Vec::new(),
            ticking: false,
            tick_starts: 0,
            scrolls_to_top: true,
            invalidations: 0,
        }
    }

    /// `count` columns of 50 × 300 in a 400 × 300 viewport.
    pub(crate) fn horizontal(count: u32) -> Self {
        Self {
            axis: Axis::Cross,
            viewport: Size::new(400.0, 300.0),
            ..Self::vertical(count)
        }
    }

    pub(crate) fn last_animation(&self, kind: AnimationKind) -> Option<AnimationTicket> {
        self.animations
            .iter()
            .rev()
            .find(|a| a.kind == kind)
            .map(|a| a.ticket)
    }

    fn len(&self) -> f64 {
        f64::from(u32::try_from(self.items.len()).unwrap_or(u32::MAX))
    }
}

impl ReorderHost for ListHost {
    type Image = (Slot, bool);

    fn axis(&self) -> Axis {
        self.axis
    }

    fn slot_at(&self, point: Point) -> Option<Slot> {
        let along = self.axis.point_along(point);
        let across = match self.axis {
            Axis::Primary => point.x,
            Axis::Cross => point.y,
        };
        if along < 0.0 || across < 0.0 || across >= self.breadth {
            return None;
        }
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "non-negative row index in tests"
        )]
        let item = (along / self.extent) as usize;
        (item < self.items.len()).then_some(Slot::new(0, item))
    }

    fn frame_for_slot(&self, slot: Slot) -> Option<Rect> {
        if slot.section != 0 || slot.item >= self.items.len() {
            return None;
        }
        let start = f64::from(u32::try_from(slot.item).ok()?) * self.extent;
        Some(match self.axis {
            Axis::Primary => Rect::new(0.0, start, self.breadth, start + self.extent),
            Axis::Cross => Rect::new(start, 0.0, start + self.extent, self.breadth),
        })
    }

    fn scroll_offset(&self) -> Vec2 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn content_size(&self) -> Size {
        let length = self.len() * self.extent;
        match self.axis {
            Axis::Primary => Size::new(self.breadth, length),
            Axis::Cross => Size::new(length, self.breadth),
        }
    }

    fn content_insets(&self) -> Insets {
        self.insets
    }

    fn perform_batch(&mut self, batch: &Batch) {
        let mut removed = Vec::new();
        for slot in batch.deletions.iter().rev() {
            removed.push(self.items.remove(slot.item));
        }
        for (slot, item) in batch.insertions.iter().zip(removed) {
            self.items.insert(slot.item, item);
        }
        self.batches.push(batch.clone());
    }

    fn capture_appearance(&mut self, slot: Slot, highlighted: bool) -> Self::Image {
        self.captures.push((slot, highlighted));
        (slot, highlighted)
    }

    fn animate_proxy(&mut self, animation: &ProxyAnimation) {
        self.animations.push(*animation);
    }

    fn start_frame_ticks(&mut self) {
        self.ticking = true;
        self.tick_starts += 1;
    }

    fn stop_frame_ticks(&mut self) {
        self.ticking = false;
    }

    fn set_scrolls_to_top(&mut self, enabled: bool) {
        self.scrolls_to_top = enabled;
    }

    fn invalidate_layout(&mut self) {
        self.invalidations += 1;
    }

    fn is_scrolling(&self) -> bool {
        self.scrolling
    }
}

/// Notifications observed by [`RecordingDelegate`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Event {
    WillBegin(Slot),
    DidBegin(Slot),
    WillEnd(Slot),
    DidEnd(Slot),
    WillMove(Slot, Slot),
    DidMove(Slot, Slot),
    WillRemove(Slot),
    DidRemove(Slot),
}

#[derive(Debug)]
pub(crate) struct RecordingDelegate {
    pub(crate) events: Vec<Event>,
    pub(crate) denied_moves: Vec<(Slot, Slot)>,
    pub(crate) pinned: Vec<Slot>,
    pub(crate) removable: bool,
    pub(crate) scroll_speed: Option<f64>,
    pub(crate) trigger_insets: Option<Insets>,
    pub(crate) reordering_opacity: Option<f64>,
}

impl Default for RecordingDelegate {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            denied_moves: Vec::new(),
            pinned: Vec::new(),
            removable: true,
            scroll_speed: None,
            trigger_insets: None,
            reordering_opacity: None,
        }
    }
}

impl RecordingDelegate {
    pub(crate) fn count(&self, pred: impl Fn(&Event) -> bool) -> usize {
        self.events.iter().filter(|e| pred(e)).count()
    }
}

impl ReorderDelegate for RecordingDelegate {
    fn allow_pickup(&mut self, slot: Slot) -> bool {
        !self.pinned.contains(&slot)
    }

    fn can_move(&mut self, from: Slot, to: Slot) -> bool {
        !self.denied_moves.contains(&(from, to))
    }

    fn can_remove(&mut self, _slot: Slot) -> bool {
        self.removable
    }

    fn will_begin_drag(&mut self, slot: Slot) {
        self.events.push(Event::WillBegin(slot));
    }

    fn did_begin_drag(&mut self, slot: Slot) {
        self.events.push(Event::DidBegin(slot));
    }

    fn will_end_drag(&mut self, slot: Slot) {
        self.events.push(Event::WillEnd(slot));
    }

    fn did_end_drag(&mut self, slot: Slot) {
        self.events.push(Event::DidEnd(slot));
    }

    fn will_move(&mut self, from: Slot, to: Slot) {
        self.events.push(Event::WillMove(from, to));
    }

    fn did_move(&mut self, from: Slot, to: Slot) {
        self.events.push(Event::DidMove(from, to));
    }

    fn will_remove(&mut self, slot: Slot) {
        self.events.push(Event::WillRemove(slot));
    }

    fn did_remove(&mut self, slot: Slot) {
        self.events.push(Event::DidRemove(slot));
    }

    fn trigger_insets(&mut self) -> Option<Insets> {
        self.trigger_insets
    }

    fn scroll_speed(&mut self) -> Option<f64> {
        self.scroll_speed
    }

    fn reordering_opacity(&mut self, _section: usize) -> Option<f64> {
        self.reordering_opacity
    }
}
