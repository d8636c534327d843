// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_reorder --heading-base-level=0

//! Understory Reorder: drag-to-reorder for scrolling item lists.
//!
//! ## Overview
//!
//! A user long-presses an item, a floating proxy lifts out of the list, and the
//! item follows the pointer. Whenever the proxy's center crosses into another
//! slot the item moves there live. Near a container edge the surface scrolls
//! on its own, faster the closer the proxy gets to the edge. Releasing settles
//! the proxy into the item's final slot; releasing with the proxy fully outside
//! the container removes the item, when the application allows it.
//!
//! The crate owns only the interaction. It does not lay out, render or animate
//! anything; the host surface does that through [`ReorderHost`](crate::host::ReorderHost).
//!
//! ## Layers
//!
//! - [`axis`]: scroll-axis projection of points, sizes, insets and rects.
//! - [`host`]: the [`ReorderHost`](crate::host::ReorderHost) and
//!   [`ReorderDelegate`](crate::host::ReorderDelegate) seams, [`Slot`](crate::host::Slot) and [`Batch`](crate::host::Batch).
//! - [`proxy`]: the floating [`DragProxy`](crate::proxy::DragProxy) and the animation descriptors it emits.
//! - [`session`]: state of one in-progress drag.
//! - [`reorder`]: maps the proxy's position to a slot and moves the item.
//! - [`autoscroll`]: trigger zones, proportional speed and per-frame scrolling.
//! - [`controller`]: the [`ReorderController`](crate::controller::ReorderController) state machine tying it together.
//!
//! ## Workflow
//!
//! 1) Wrap your surface in a type implementing [`ReorderHost`](crate::host::ReorderHost).
//! 2) Create a [`ReorderController`](crate::controller::ReorderController) and call
//!    [`attach`](crate::controller::ReorderController::attach).
//! 3) Forward recognizer events to
//!    [`long_press`](crate::controller::ReorderController::long_press) and
//!    [`pan`](crate::controller::ReorderController::pan), frame ticks to
//!    [`tick`](crate::controller::ReorderController::tick), and animation completions to
//!    [`animation_finished`](crate::controller::ReorderController::animation_finished).
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_reorder::controller::{DragState, GesturePhase, ReorderController};
//! use understory_reorder::host::{Batch, ReorderHost, Slot};
//! use understory_reorder::proxy::{AnimationKind, ProxyAnimation};
//!
//! /// Ten rows of 40 points in a 200 × 400 viewport.
//! struct Rows {
//!     items: Vec<char>,
//!     offset: Vec2,
//!     animations: Vec<ProxyAnimation>,
//! }
//!
//! impl ReorderHost for Rows {
//!     type Image = ();
//!
//!     fn slot_at(&self, p: Point) -> Option<Slot> {
//!         let row = (p.y / 40.0).floor();
//!         (p.x >= 0.0 && p.x < 200.0 && row >= 0.0 && (row as usize) < self.items.len())
//!             .then(|| Slot::new(0, row as usize))
//!     }
//!     fn frame_for_slot(&self, slot: Slot) -> Option<Rect> {
//!         let y = slot.item as f64 * 40.0;
//!         (slot.item < self.items.len()).then(|| Rect::new(0.0, y, 200.0, y + 40.0))
//!     }
//!     fn scroll_offset(&self) -> Vec2 { self.offset }
//!     fn set_scroll_offset(&mut self, offset: Vec2) { self.offset = offset; }
//!     fn viewport_size(&self) -> Size { Size::new(200.0, 400.0) }
//!     fn content_size(&self) -> Size { Size::new(200.0, self.items.len() as f64 * 40.0) }
//!     fn perform_batch(&mut self, batch: &Batch) {
//!         let moved: Vec<char> = batch.deletions.iter().rev().map(|s| self.items.remove(s.item)).collect();
//!         for (slot, item) in batch.insertions.iter().zip(moved) {
//!             self.items.insert(slot.item, item);
//!         }
//!     }
//!     fn capture_appearance(&mut self, _slot: Slot, _highlighted: bool) {}
//!     fn animate_proxy(&mut self, animation: &ProxyAnimation) {
//!         self.animations.push(*animation);
//!     }
//!     fn start_frame_ticks(&mut self) {}
//!     fn stop_frame_ticks(&mut self) {}
//! }
//!
//! let rows = Rows { items: "abcdefghij".chars().collect(), offset: Vec2::ZERO, animations: Vec::new() };
//! let mut controller = ReorderController::new(rows);
//! controller.attach();
//!
//! // Pick up "b" and drag it two rows down.
//! controller.long_press(GesturePhase::Began, Point::new(100.0, 60.0));
//! controller.pan(GesturePhase::Changed, Vec2::new(0.0, 80.0));
//! controller.long_press(GesturePhase::Ended, Point::new(100.0, 140.0));
//! assert_eq!(controller.state(), DragState::Resolving);
//!
//! // The host reports that the settle animation finished.
//! let settle = controller.host().animations.iter().find(|a| a.kind == AnimationKind::Settle).unwrap().ticket;
//! controller.animation_finished(settle);
//! assert_eq!(controller.state(), DragState::Idle);
//! assert_eq!(controller.host().items.iter().collect::<String>(), "acdbefghij");
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: `no_std` float math for kurbo.
//! - `tracing`: emit `tracing` events for session lifecycle, moves and auto-scroll engagement.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod autoscroll;
pub mod axis;
pub mod config;
pub mod controller;
pub mod host;
pub mod proxy;
pub mod reorder;
pub mod session;

#[cfg(test)]
mod test_support;
