// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag an item out of a horizontal strip to remove it.
//!
//! The proxy shows the removal cue while it is entirely outside the strip.
//! Dragging back cancels the cue; releasing outside deletes the item and
//! dissolves the proxy. An item the delegate protects settles back instead.
//!
//! Run:
//! - `cargo run -p understory_demos --example reorder_remove`

use kurbo::{Point, Rect, Size, Vec2};
use understory_reorder::axis::Axis;
use understory_reorder::controller::{DragState, GesturePhase, ReorderController};
use understory_reorder::host::{Batch, ReorderDelegate, ReorderHost, Slot};
use understory_reorder::proxy::{AnimationKind, AnimationTicket, ProxyAnimation};

const TILE: f64 = 80.0;

/// A strip of square tiles laid out left to right.
struct Strip {
    tiles: Vec<char>,
    pending: Vec<(AnimationKind, AnimationTicket)>,
}

impl ReorderHost for Strip {
    type Image = char;

    fn axis(&self) -> Axis {
        Axis::Cross
    }

    fn slot_at(&self, point: Point) -> Option<Slot> {
        if point.y < 0.0 || point.y >= TILE || point.x < 0.0 {
            return None;
        }
        let item = (point.x / TILE).floor() as usize;
        (item < self.tiles.len()).then(|| Slot::new(0, item))
    }

    fn frame_for_slot(&self, slot: Slot) -> Option<Rect> {
        (slot.item < self.tiles.len()).then(|| {
            let x = slot.item as f64 * TILE;
            Rect::new(x, 0.0, x + TILE, TILE)
        })
    }

    fn scroll_offset(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn set_scroll_offset(&mut self, _offset: Vec2) {}

    fn viewport_size(&self) -> Size {
        Size::new(480.0, TILE)
    }

    fn content_size(&self) -> Size {
        Size::new(self.tiles.len() as f64 * TILE, TILE)
    }

    fn perform_batch(&mut self, batch: &Batch) {
        let moved: Vec<char> = batch
            .deletions
            .iter()
            .rev()
            .map(|slot| self.tiles.remove(slot.item))
            .collect();
        for (slot, tile) in batch.insertions.iter().zip(moved) {
            self.tiles.insert(slot.item, tile);
        }
    }

    fn capture_appearance(&mut self, slot: Slot, _highlighted: bool) -> char {
        self.tiles[slot.item]
    }

    fn animate_proxy(&mut self, animation: &ProxyAnimation) {
        self.pending.push((animation.kind, animation.ticket));
    }

    fn start_frame_ticks(&mut self) {}

    fn stop_frame_ticks(&mut self) {}
}

/// Allows every removal and reports it.
struct Trash;

impl ReorderDelegate for Trash {
    fn will_remove(&mut self, slot: Slot) {
        println!("  removing tile {}", slot.item);
    }

    fn did_end_drag(&mut self, slot: Slot) {
        println!("  settled back at {}", slot.item);
    }
}

/// Protects the tile at index 0.
struct Guarded;

impl ReorderDelegate for Guarded {
    fn can_remove(&mut self, slot: Slot) -> bool {
        slot.item != 0
    }
}

/// Report every pending animation as finished.
fn finish_all<D: ReorderDelegate>(controller: &mut ReorderController<Strip, D>) {
    let pending = core::mem::take(&mut controller.host_mut().pending);
    for (kind, ticket) in pending {
        println!("  {kind:?} finished");
        controller.animation_finished(ticket);
    }
}

fn drag_out<D: ReorderDelegate>(controller: &mut ReorderController<Strip, D>, x: f64) {
    controller.long_press(GesturePhase::Began, Point::new(x, TILE / 2.0));
    finish_all(controller);

    controller.pan(GesturePhase::Changed, Vec2::new(0.0, 200.0));
    let cue = controller.proxy().is_some_and(|p| p.removal_cue());
    println!("  outside, removal cue: {cue}");

    controller.pan(GesturePhase::Changed, Vec2::new(0.0, 20.0));
    let cue = controller.proxy().is_some_and(|p| p.removal_cue());
    println!("  back inside, removal cue: {cue}");

    controller.pan(GesturePhase::Changed, Vec2::new(0.0, 200.0));
    controller.long_press(GesturePhase::Ended, Point::new(x, 240.0));
    finish_all(controller);
    assert_eq!(controller.state(), DragState::Idle);
}

fn main() {
    let strip = Strip {
        tiles: "abcdef".chars().collect(),
        pending: Vec::new(),
    };
    let mut controller = ReorderController::with_delegate(strip, Trash);
    controller.attach();

    println!("drag 'c' out of the strip");
    drag_out(&mut controller, 200.0);
    println!("tiles: {:?}", controller.host().tiles);
    assert_eq!(controller.host().tiles, ['a', 'b', 'd', 'e', 'f']);

    let (strip, _) = controller.into_parts();
    let mut controller = ReorderController::with_delegate(strip, Guarded);
    controller.attach();

    println!("drag protected 'a' out of the strip");
    drag_out(&mut controller, 40.0);
    println!("tiles: {:?}", controller.host().tiles);
    assert_eq!(controller.host().tiles.len(), 5);
}
