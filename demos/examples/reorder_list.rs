// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reorder a scrolling list.
//!
//! Pick up a row, drag it into the trailing trigger zone, let auto-scroll run
//! for a few frames, then release. The host plays proxy animations by sampling
//! them on a fixed 60 Hz clock and reports completion back to the controller.
//!
//! Run:
//! - `cargo run -p understory_demos --example reorder_list`

use kurbo::{Point, Rect, Size, Vec2};
use understory_reorder::controller::{DragState, GesturePhase, ReorderController};
use understory_reorder::host::{Batch, ReorderDelegate, ReorderHost, Slot};
use understory_reorder::proxy::{AnimationTicket, ProxyAnimation};

const ROW: f64 = 44.0;
const FRAME: f64 = 1.0 / 60.0;

/// A single-section list of fixed-height rows.
struct ListView {
    rows: Vec<String>,
    offset: Vec2,
    viewport: Size,
    ticking: bool,
    running: Vec<(ProxyAnimation, f64)>,
}

impl ListView {
    fn new(count: usize) -> Self {
        Self {
            rows: (0..count).map(|i| format!("row {i}")).collect(),
            offset: Vec2::ZERO,
            viewport: Size::new(320.0, 480.0),
            ticking: false,
            running: Vec::new(),
        }
    }

    /// Advance running animations by one frame, returning the ones that finished.
    fn advance(&mut self) -> Vec<AnimationTicket> {
        let mut done = Vec::new();
        self.running.retain_mut(|(animation, elapsed)| {
            *elapsed += FRAME;
            let t = *elapsed / animation.duration;
            let p = animation.sample(t);
            if t >= 1.0 {
                println!(
                    "  {:?} finished: scale {:.2}, alpha {:.2}",
                    animation.kind, p.scale, p.alpha
                );
                done.push(animation.ticket);
                false
            } else {
                true
            }
        });
        done
    }
}

impl ReorderHost for ListView {
    type Image = String;

    fn slot_at(&self, point: Point) -> Option<Slot> {
        if point.x < 0.0 || point.x >= self.viewport.width || point.y < 0.0 {
            return None;
        }
        let item = (point.y / ROW).floor() as usize;
        (item < self.rows.len()).then(|| Slot::new(0, item))
    }

    fn frame_for_slot(&self, slot: Slot) -> Option<Rect> {
        (slot.item < self.rows.len()).then(|| {
            let y = slot.item as f64 * ROW;
            Rect::new(0.0, y, self.viewport.width, y + ROW)
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
        Size::new(self.viewport.width, self.rows.len() as f64 * ROW)
    }

    fn perform_batch(&mut self, batch: &Batch) {
        let moved: Vec<String> = batch
            .deletions
            .iter()
            .rev()
            .map(|slot| self.rows.remove(slot.item))
            .collect();
        for (slot, row) in batch.insertions.iter().zip(moved) {
            self.rows.insert(slot.item, row);
        }
    }

    fn capture_appearance(&mut self, slot: Slot, highlighted: bool) -> String {
        let label = &self.rows[slot.item];
        if highlighted {
            format!("[{label}]")
        } else {
            label.clone()
        }
    }

    fn animate_proxy(&mut self, animation: &ProxyAnimation) {
        println!(
            "  animate {:?} over {:.1}s (ticket {})",
            animation.kind,
            animation.duration,
            animation.ticket.get()
        );
        self.running.push((*animation, 0.0));
    }

    fn start_frame_ticks(&mut self) {
        println!("  frame ticks on");
        self.ticking = true;
    }

    fn stop_frame_ticks(&mut self) {
        println!("  frame ticks off");
        self.ticking = false;
    }
}

/// Logs moves and keeps the first row pinned in place.
struct Logger;

impl ReorderDelegate for Logger {
    fn allow_pickup(&mut self, slot: Slot) -> bool {
        slot.item != 0
    }

    fn can_move(&mut self, _from: Slot, to: Slot) -> bool {
        to.item != 0
    }

    fn did_move(&mut self, from: Slot, to: Slot) {
        println!("  moved {} -> {}", from.item, to.item);
    }

    fn did_end_drag(&mut self, slot: Slot) {
        println!("  settled at {}", slot.item);
    }

    fn reordering_opacity(&mut self, _section: usize) -> Option<f64> {
        Some(0.2)
    }
}

/// Run one frame: auto-scroll tick, then animation progress.
fn frame(controller: &mut ReorderController<ListView, Logger>) {
    if controller.host().ticking {
        let _ = controller.tick();
    }
    for ticket in controller.host_mut().advance() {
        controller.animation_finished(ticket);
    }
}

fn main() {
    let mut controller = ReorderController::with_delegate(ListView::new(40), Logger);
    controller.attach();

    // The pinned first row refuses to lift.
    println!("press row 0");
    controller.long_press(GesturePhase::Began, Point::new(160.0, 22.0));
    assert_eq!(controller.state(), DragState::Idle);

    println!("press row 2");
    controller.long_press(GesturePhase::Began, Point::new(160.0, 110.0));
    for _ in 0..20 {
        frame(&mut controller);
    }
    println!(
        "  item opacity while dragging: {:?}",
        controller.item_opacity(Slot::new(0, 2))
    );

    println!("drag into the trailing trigger zone");
    for step in 1..=8 {
        controller.pan(GesturePhase::Changed, Vec2::new(0.0, f64::from(step) * 40.0));
        frame(&mut controller);
    }
    for _ in 0..60 {
        frame(&mut controller);
    }
    println!("  scrolled to {:.1}", controller.host().scroll_offset().y);

    println!("release");
    controller.pan(GesturePhase::Ended, Vec2::new(0.0, 320.0));
    controller.long_press(GesturePhase::Ended, Point::ZERO);
    while controller.state() != DragState::Idle {
        frame(&mut controller);
    }

    let head: Vec<&str> = controller.host().rows.iter().take(12).map(String::as_str).collect();
    println!("first rows: {head:?}");
    assert!(!controller.host().ticking);
}
