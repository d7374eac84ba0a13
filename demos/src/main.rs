// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seek control replay.
//!
//! Feeds a scripted pointer stream through a frame-range bar and a tick bar
//! and prints what a host would see. Set `RUST_LOG=debug` (or `trace`) to
//! watch the gesture transitions.
//!
//! Run:
//! - `cargo run -p understory_demos`
//! - `RUST_LOG=understory_seek=trace cargo run -p understory_demos`

use kurbo::Point;
use tracing_subscriber::EnvFilter;
use understory_event_state::claim::DragClaim;
use understory_event_state::pointer::{PointerAction, PointerEvent, PointerId};
use understory_seek::config::{FrameRangeConfig, TickBarConfig};
use understory_seek::frame::FrameRangeSeekBar;
use understory_seek::hit::Thumb;
use understory_seek::listener::{EventRecorder, FrameRangeEvent, TickBarListener};
use understory_seek::tick_bar::TickRangeBar;

/// Stands in for a scrolling container that must stop intercepting touches.
struct ScrollContainer;

impl DragClaim for ScrollContainer {
    fn claim(&mut self) {
        tracing::info!("container: stop intercepting");
    }

    fn release(&mut self) {
        tracing::info!("container: intercept again");
    }
}

struct PrintTicks;

impl TickBarListener for PrintTicks {
    fn on_start_tracking_touch(&mut self) {
        println!("  tick: start tracking");
    }

    fn on_stop_tracking_touch(&mut self) {
        println!("  tick: stop tracking");
    }

    fn on_tick_index_changed(&mut self, index: usize) {
        println!("  tick: index -> {index}");
    }
}

fn stroke(id: PointerId, y: f64, xs: &[f64]) -> Vec<PointerEvent> {
    let Some((&first, rest)) = xs.split_first() else {
        return Vec::new();
    };
    let mut events = vec![PointerEvent::single(PointerAction::Down, id, Point::new(first, y))];
    let last = rest.last().copied().unwrap_or(first);
    events.extend(
        rest.iter()
            .map(|&x| PointerEvent::single(PointerAction::Move, id, Point::new(x, y))),
    );
    events.push(PointerEvent::single(PointerAction::Up, id, Point::new(last, y)));
    events
}

fn frame_range_replay() {
    println!("frame range, 0..=300 frames, slow motion on");
    let mut bar = FrameRangeSeekBar::new(FrameRangeConfig {
        slow_motion: true,
        slow_range: (90, 180),
        ..FrameRangeConfig::with_bounds(0_i32, 300, 1)
    });
    bar.set_layout(1000.0, 300.0);
    bar.set_drag_claim(Box::new(ScrollContainer));
    let events = EventRecorder::<FrameRangeEvent<i32>>::new();
    bar.add_listener(Box::new(events.clone()));

    let id = PointerId(1);
    let layout = *bar.layout();
    let replay = |bar: &mut FrameRangeSeekBar<i32>, gesture: Vec<PointerEvent>| {
        for event in gesture {
            let result = bar.on_pointer_event(&event);
            tracing::debug!(action = ?event.action, ?result, "dispatched");
        }
        for event in events.take() {
            println!("  {event:?}");
        }
    };

    // Pull the selection start in.
    let min_x = bar.thumb_center_x(Thumb::Min);
    let targets = [min_x, layout.normalized_to_screen(0.1), layout.normalized_to_screen(0.2)];
    replay(&mut bar, stroke(id, 200.0, &targets));

    // Drag the slow-motion end out.
    let slow_max_x = bar.thumb_center_x(Thumb::SlowMax);
    let targets = [slow_max_x, layout.normalized_to_screen(0.7), layout.normalized_to_screen(0.75)];
    replay(&mut bar, stroke(id, 10.0, &targets));

    println!(
        "  selection {}..={}, slow {}..={}",
        bar.selected_min_value(),
        bar.selected_max_value(),
        bar.selected_slow_min_value(),
        bar.selected_slow_max_value(),
    );
}

fn tick_bar_replay() {
    println!("tick bar, 5 ticks x 2 children");
    let config = TickBarConfig {
        tick_count: 5,
        child_tick_count: 2,
        ..TickBarConfig::default()
    };
    let mut bar = match TickRangeBar::new(config) {
        Ok(bar) => bar,
        Err(err) => {
            tracing::error!(%err, "invalid tick bar config");
            return;
        }
    };
    bar.set_layout(432.0, 40.0);
    bar.add_listener(Box::new(PrintTicks));

    let start = bar.thumb_center();
    for event in stroke(PointerId(2), start.y, &[start.x, 90.0, 180.0, 260.0]) {
        bar.on_pointer_event(&event);
    }
    if let Err(err) = bar.set_index(9) {
        println!("  rejected: {err}");
    }
    println!("  final index {} at x = {}", bar.index(), bar.thumb_x());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    frame_range_replay();
    tick_bar_replay();
}
