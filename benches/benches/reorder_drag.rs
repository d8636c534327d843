// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use understory_reorder::autoscroll::TriggerZone;
use understory_reorder::axis::{Axis, AxisGeometry};
use understory_reorder::config::ReorderConfig;
use understory_reorder::controller::{GesturePhase, ReorderController};
use understory_reorder::host::{Batch, ReorderHost, Slot};
use understory_reorder::proxy::ProxyAnimation;
use understory_reorder::session::ScrollState;

const ROW: f64 = 40.0;

/// Rows stored as a permutation; batches are applied in place.
struct Rows {
    order: Vec<u32>,
    offset: Vec2,
}

impl Rows {
    fn new(n: u32) -> Self {
        Self {
            order: (0..n).collect(),
            offset: Vec2::ZERO,
        }
    }
}

impl ReorderHost for Rows {
    type Image = ();

    fn slot_at(&self, p: Point) -> Option<Slot> {
        if p.x < 0.0 || p.x >= 320.0 || p.y < 0.0 {
            return None;
        }
        let item = (p.y / ROW) as usize;
        (item < self.order.len()).then(|| Slot::new(0, item))
    }

    fn frame_for_slot(&self, slot: Slot) -> Option<Rect> {
        (slot.item < self.order.len()).then(|| {
            let y = slot.item as f64 * ROW;
            Rect::new(0.0, y, 320.0, y + ROW)
        })
    }

    fn scroll_offset(&self) -> Vec2 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: Vec2) {
        self.offset = offset;
    }

    fn viewport_size(&self) -> Size {
        Size::new(320.0, 640.0)
    }

    fn content_size(&self) -> Size {
        Size::new(320.0, self.order.len() as f64 * ROW)
    }

    fn perform_batch(&mut self, batch: &Batch) {
        let moved: Vec<u32> = batch
            .deletions
            .iter()
            .rev()
            .map(|s| self.order.remove(s.item))
            .collect();
        for (slot, v) in batch.insertions.iter().zip(moved) {
            self.order.insert(slot.item, v);
        }
    }

    fn capture_appearance(&mut self, _slot: Slot, _highlighted: bool) {}

    fn animate_proxy(&mut self, _animation: &ProxyAnimation) {}

    fn start_frame_ticks(&mut self) {}

    fn stop_frame_ticks(&mut self) {}
}

fn picked_up(n: u32) -> ReorderController<Rows> {
    let mut c = ReorderController::new(Rows::new(n));
    c.attach();
    c.long_press(GesturePhase::Began, Point::new(160.0, 20.0));
    c
}

fn bench_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan");
    for &n in &[100_u32, 10_000] {
        group.bench_function(format!("sweep_{n}"), |b| {
            b.iter_batched(
                || picked_up(n),
                |mut ctl| {
                    // Down 14 rows and back, one pointer event per 4 points.
                    for i in (0..140).chain((0..140).rev()) {
                        ctl.pan(GesturePhase::Changed, Vec2::new(0.0, f64::from(i) * 4.0));
                    }
                    black_box(ctl.session().map(|s| s.current_slot()))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");
    group.bench_function("auto_scroll_120_frames", |b| {
        b.iter_batched(
            || {
                let mut ctl = picked_up(10_000);
                ctl.pan(GesturePhase::Changed, Vec2::new(0.0, 600.0));
                ctl
            },
            |mut ctl| {
                for _ in 0..120 {
                    black_box(ctl.tick());
                }
                ctl
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_zone(c: &mut Criterion) {
    let geom = AxisGeometry::new(
        Axis::Primary,
        Vec2::new(0.0, 1200.0),
        kurbo::Insets::ZERO,
        Size::new(320.0, 40_000.0),
        Size::new(320.0, 640.0),
    );
    let config = ReorderConfig::default();
    c.bench_function("zone_percentage", |b| {
        b.iter(|| {
            let zone = TriggerZone::compute(black_box(&geom), black_box(&config));
            let mut acc = 0.0;
            for i in 0..64 {
                let lead = 1200.0 + f64::from(i) * 10.0;
                let state = zone.engagement(lead, lead + ROW);
                if state != ScrollState::Idle {
                    acc += zone.percentage(state, lead, lead + ROW);
                }
            }
            black_box(acc)
        });
    });
}

criterion_group!(benches, bench_pan, bench_tick, bench_zone);
criterion_main!(benches);
