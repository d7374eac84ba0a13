// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use understory_event_state::pointer::{PointerAction, PointerEvent, PointerId};
use understory_seek::config::{FrameRangeConfig, TickBarConfig};
use understory_seek::frame::FrameRangeSeekBar;
use understory_seek::hit::Thumb;
use understory_seek::tick_bar::TickRangeBar;

const ID: PointerId = PointerId(1);

/// A press at `start`, `samples` moves sweeping across `[lo, hi]`, and a release.
fn gesture(start: Point, lo: f64, hi: f64, samples: usize) -> Vec<PointerEvent> {
    let mut events = Vec::with_capacity(samples + 2);
    events.push(PointerEvent::single(PointerAction::Down, ID, start));
    for i in 0..samples {
        let t = i as f64 / samples as f64;
        // Back and forth so clamping paths are hit too.
        let x = if i % 2 == 0 {
            lo + t * (hi - lo)
        } else {
            hi - t * (hi - lo)
        };
        events.push(PointerEvent::single(
            PointerAction::Move,
            ID,
            Point::new(x, start.y),
        ));
    }
    events.push(PointerEvent::single(PointerAction::Up, ID, Point::new(hi, start.y)));
    events
}

fn frame_bar(slow_motion: bool) -> FrameRangeSeekBar<i64> {
    let mut bar = FrameRangeSeekBar::new(FrameRangeConfig {
        slow_motion,
        ..FrameRangeConfig::with_bounds(0, 10_000, 1)
    });
    bar.set_layout(1200.0, 300.0);
    bar
}

fn bench_frame_range_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("seek/frame_range_drag");

    for samples in [64usize, 512, 4_096] {
        group.throughput(Throughput::Elements(samples as u64));

        for slow_motion in [false, true] {
            let probe = frame_bar(slow_motion);
            let start = Point::new(probe.thumb_center_x(Thumb::Max), 200.0);
            let events = gesture(start, 0.0, 1200.0, samples);
            let name = if slow_motion { "max_thumb_slow" } else { "max_thumb" };

            group.bench_with_input(BenchmarkId::new(name, samples), &events, |b, events| {
                b.iter_batched(
                    || frame_bar(slow_motion),
                    |mut bar| {
                        for event in events {
                            black_box(bar.on_pointer_event(event));
                        }
                        black_box(bar.selected_max_value());
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_tick_bar_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("seek/tick_bar_drag");

    for child_tick_count in [1usize, 10, 100] {
        let config = TickBarConfig {
            tick_count: 11,
            child_tick_count,
            ..TickBarConfig::default()
        };
        let make = move || {
            let mut bar = TickRangeBar::new(config).expect("valid tick counts");
            bar.set_layout(1200.0, 40.0);
            bar
        };
        let start = make().thumb_center();
        let events = gesture(start, 0.0, 1200.0, 1_024);
        group.throughput(Throughput::Elements(events.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("snap", child_tick_count),
            &events,
            |b, events| {
                b.iter_batched(
                    make,
                    |mut bar| {
                        for event in events {
                            black_box(bar.on_pointer_event(event));
                        }
                        black_box(bar.index());
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_frame_range_drag, bench_tick_bar_drag);
criterion_main!(benches);
