// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-range seek bar: the pointer state machine over a [`RangeModel`].
//!
//! ## Gesture lifecycle
//!
//! A gesture follows `Idle -> Pressed -> Dragging -> Idle`:
//!
//! - **Down** hit-tests the touch. A miss returns [`EventResult::Ignored`].
//!   A hit latches the pointer, reports start-tracking, applies one track
//!   update at the touch position, and claims the drag.
//! - **Move** while pressed does nothing until the pointer has travelled more
//!   than the touch slop horizontally; crossing it starts the drag. Every
//!   move while dragging applies a track update and reports the value that
//!   thumb controls.
//! - **Up** applies a final track update, reports stop-tracking, then reports
//!   the final values: the playback position for the path thumb, the primary
//!   and slow-motion ranges otherwise. A press that never crossed the slop is
//!   a tap and gets the same treatment.
//! - **Cancel** reports stop-tracking without any value notification.
//!
//! `PointerDown`/`PointerUp` (secondary pointers) never affect the gesture.
//! A move or up whose event no longer contains the latched pointer skips the
//! step and keeps the previous state.
//!
//! ## Track update
//!
//! A track update maps the pointer x to a normalized position and hands it to
//! the setter of the pressed thumb. With slow motion on, the sub-range is
//! then pulled back inside the primary range. While not playing, the playback
//! position follows the selection start.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use understory_event_state::claim::{ClaimHandle, DragClaim};
use understory_event_state::drag::DragState;
use understory_event_state::pointer::{PointerAction, PointerEvent};

use crate::EventResult;
use crate::config::{FrameRangeConfig, ThumbGeometry};
use crate::hit::{HitMode, HitTester, Thumb};
use crate::layout::TrackLayout;
use crate::listener::FrameRangeListener;
use crate::numeric::DomainValue;
use crate::range::{AbsoluteBounds, RangeModel};

/// A dual-thumb frame-range control with an optional slow-motion sub-range.
pub struct FrameRangeSeekBar<V> {
    model: RangeModel<V>,
    hit: HitTester,
    internal_padding: f64,
    touch_slop: f64,
    playing: bool,
    enabled: bool,
    pressed: Option<Thumb>,
    drag: DragState,
    claim: ClaimHandle,
    listeners: Vec<Box<dyn FrameRangeListener<V>>>,
}

impl<V: DomainValue> FrameRangeSeekBar<V> {
    /// Creates a control from `config`. The layout starts zero-sized.
    #[must_use]
    pub fn new(config: FrameRangeConfig<V>) -> Self {
        let FrameRangeConfig {
            absolute_min,
            absolute_max,
            step,
            slow_motion,
            slow_range,
            internal_padding,
            touch_slop,
        } = config;
        let mut model = RangeModel::new(AbsoluteBounds::new(absolute_min, absolute_max, step));
        if slow_motion {
            model.set_slow_motion(true);
            model.set_selected_slow_range(&slow_range.0, &slow_range.1);
        }
        Self {
            model,
            hit: HitTester::default(),
            internal_padding,
            touch_slop,
            playing: false,
            enabled: true,
            pressed: None,
            drag: DragState::default(),
            claim: ClaimHandle::default(),
            listeners: Vec::new(),
        }
    }

    /// Registers a change observer.
    pub fn add_listener(&mut self, listener: Box<dyn FrameRangeListener<V>>) {
        self.listeners.push(listener);
    }

    /// Sets the container that receives drag claims.
    pub fn set_drag_claim(&mut self, parent: Box<dyn DragClaim>) {
        self.claim.set_parent(parent);
    }

    /// Returns `true` while the current gesture is claimed.
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.claim.is_claimed()
    }

    /// Updates the view size. Call on every layout pass.
    pub fn set_layout(&mut self, width: f64, height: f64) {
        self.hit.layout = TrackLayout::new(
            width,
            height,
            self.internal_padding,
            self.hit.geometry.half_width,
        );
        self.model.request_redraw();
    }

    /// Updates thumb extents and hit bands.
    pub fn set_thumb_geometry(&mut self, geometry: ThumbGeometry) {
        self.hit.geometry = geometry;
        let layout = self.hit.layout;
        self.set_layout(layout.width(), layout.height());
    }

    /// Current track layout.
    #[must_use]
    pub fn layout(&self) -> &TrackLayout {
        &self.hit.layout
    }

    /// Current thumb geometry.
    #[must_use]
    pub fn thumb_geometry(&self) -> &ThumbGeometry {
        &self.hit.geometry
    }

    /// The underlying range model.
    #[must_use]
    pub fn model(&self) -> &RangeModel<V> {
        &self.model
    }

    /// Screen x at which the drawing collaborator centers `thumb`.
    #[must_use]
    pub fn thumb_center_x(&self, thumb: Thumb) -> f64 {
        self.hit
            .thumb_center_x(thumb, &self.model.state(), &self.model.slow())
    }

    /// Counter bumped whenever something visible changed.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.model.revision()
    }

    /// Returns and clears the redraw request.
    pub fn take_redraw(&mut self) -> bool {
        self.model.take_redraw()
    }

    /// Replaces the absolute bounds and step. Normalized state is kept.
    pub fn set_range_values(&mut self, min: V, max: V, step: V) {
        self.model.set_bounds(AbsoluteBounds::new(min, max, step));
    }

    /// Replaces the absolute bounds, keeping the step.
    pub fn set_range(&mut self, min: V, max: V) {
        let step = self.model.bounds().step().clone();
        self.set_range_values(min, max, step);
    }

    /// Sets the selection start from a domain value.
    pub fn set_selected_min_value(&mut self, value: &V) {
        let slow_before = self.model.slow();
        self.model.set_selected_min(value);
        self.notify_values();
        if self.model.slow() != slow_before {
            self.notify_slow_values();
        }
    }

    /// Sets the selection end from a domain value.
    pub fn set_selected_max_value(&mut self, value: &V) {
        let slow_before = self.model.slow();
        self.model.set_selected_max(value);
        self.notify_values();
        if self.model.slow() != slow_before {
            self.notify_slow_values();
        }
    }

    /// Sets the slow-motion sub-range from domain values.
    ///
    /// With slow motion disabled the sub-range stays collapsed onto the
    /// selection.
    pub fn set_slow_range_values(&mut self, slow_min: &V, slow_max: &V) {
        self.model.set_selected_slow_range(slow_min, slow_max);
        self.notify_slow_values();
    }

    /// Selects the whole absolute range.
    pub fn reset_selected_values(&mut self) {
        let bounds = self.model.bounds().clone();
        let slow_before = self.model.slow();
        self.model.set_selected_min(bounds.min());
        self.model.set_selected_max(bounds.max());
        if !self.playing {
            self.model.set_current(self.model.state().min);
        }
        self.notify_values();
        if self.model.slow() != slow_before {
            self.notify_slow_values();
        }
    }

    /// Enables or disables the slow-motion sub-range.
    pub fn set_slow_motion_enabled(&mut self, enabled: bool) {
        let before = (self.model.state(), self.model.slow());
        self.model.set_slow_motion(enabled);
        if self.model.state() != before.0 {
            self.notify_values();
        }
        if self.model.slow() != before.1 {
            self.notify_slow_values();
        }
    }

    /// Returns `true` while slow motion is enabled.
    #[must_use]
    pub fn is_slow_motion_enabled(&self) -> bool {
        self.model.is_slow_motion()
    }

    /// Switches playback mode. Leaving it pins the playback position to the
    /// selection start.
    pub fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
        if !playing {
            self.model.set_current(self.model.state().min);
        }
        self.model.request_redraw();
    }

    /// Returns `true` in playback mode.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Moves the playback position. Ignored unless playing.
    pub fn set_progress(&mut self, value: &V) {
        if self.playing {
            let normalized = self.model.bounds().value_to_normalized(value);
            self.model.set_current(normalized);
        }
    }

    /// Enables or disables pointer input. Disabling cancels a gesture in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled && self.pressed.is_some() {
            self.cancel_gesture();
        }
        self.enabled = enabled;
        self.model.request_redraw();
    }

    /// Returns `true` if the control accepts pointer input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The thumb held by the current gesture.
    #[must_use]
    pub fn pressed_thumb(&self) -> Option<Thumb> {
        self.pressed
    }

    /// Returns `true` once the current gesture has crossed the touch slop.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Reported selection start.
    #[must_use]
    pub fn selected_min_value(&self) -> V {
        self.model.selected_min()
    }

    /// Reported selection end.
    #[must_use]
    pub fn selected_max_value(&self) -> V {
        self.model.selected_max()
    }

    /// Reported slow-motion start.
    #[must_use]
    pub fn selected_slow_min_value(&self) -> V {
        self.model.selected_slow_min()
    }

    /// Reported slow-motion end.
    #[must_use]
    pub fn selected_slow_max_value(&self) -> V {
        self.model.selected_slow_max()
    }

    /// Reported playback position.
    #[must_use]
    pub fn selected_path_value(&self) -> V {
        self.model.selected_current()
    }

    /// Returns `true` when the whole range is selected.
    #[must_use]
    pub fn selected_values_are_default(&self) -> bool {
        self.model.selected_values_are_default()
    }

    /// Feeds one pointer event through the state machine.
    pub fn on_pointer_event(&mut self, event: &PointerEvent) -> EventResult {
        if !self.enabled {
            return EventResult::Ignored;
        }
        match event.action {
            PointerAction::Down => self.on_down(event),
            PointerAction::Move => self.on_move(event),
            PointerAction::Up => self.on_up(event),
            PointerAction::Cancel => self.on_cancel(),
            PointerAction::PointerDown | PointerAction::PointerUp => {
                if self.pressed.is_some() {
                    EventResult::Handled
                } else {
                    EventResult::Ignored
                }
            }
        }
    }

    fn on_down(&mut self, event: &PointerEvent) -> EventResult {
        let Some(&sample) = event.last() else {
            tracing::debug!("down event without pointers");
            return EventResult::Ignored;
        };
        if self.pressed.is_some() {
            tracing::debug!("down during an active gesture; cancelling it");
            self.cancel_gesture();
        }

        let mode = HitMode {
            playing: self.playing,
            slow_motion: self.model.is_slow_motion(),
        };
        let state = self.model.state();
        let slow = self.model.slow();
        let Some(thumb) = self.hit.evaluate(sample.position, &state, &slow, mode) else {
            tracing::debug!(x = sample.position.x, y = sample.position.y, "down missed all thumbs");
            return EventResult::Ignored;
        };

        tracing::debug!(?thumb, x = sample.position.x, pointer = sample.id.0, "thumb pressed");
        self.pressed = Some(thumb);
        self.drag.start(sample.id, sample.position);
        self.model.request_redraw();
        self.notify_start();
        self.track(thumb, sample.position);
        self.claim.claim();
        EventResult::Handled
    }

    fn on_move(&mut self, event: &PointerEvent) -> EventResult {
        let Some(thumb) = self.pressed else {
            return EventResult::Ignored;
        };
        let Some(pos) = self.drag.position_in(event) else {
            tracing::debug!(pointer = ?self.drag.pointer, "latched pointer missing from move");
            return EventResult::Handled;
        };

        if self.drag.is_dragging() {
            self.drag.update(pos);
            self.track(thumb, pos);
            self.notify_drag(thumb);
        } else if self.drag.crossed_slop_x(pos, self.touch_slop) {
            self.drag.begin_drag();
            self.drag.update(pos);
            tracing::debug!(?thumb, x = pos.x, "drag started");
            self.track(thumb, pos);
            self.claim.claim();
        }
        EventResult::Handled
    }

    fn on_up(&mut self, event: &PointerEvent) -> EventResult {
        let Some(thumb) = self.pressed else {
            return EventResult::Ignored;
        };
        match self.drag.position_in(event) {
            Some(pos) => self.track(thumb, pos),
            None => tracing::debug!(pointer = ?self.drag.pointer, "latched pointer missing from up"),
        }
        tracing::debug!(?thumb, tap = !self.drag.is_dragging(), "thumb released");

        self.notify_stop();
        if thumb == Thumb::Path {
            let value = self.model.selected_current();
            for listener in &mut self.listeners {
                listener.on_path_value_changed(&value);
            }
        } else {
            self.notify_values();
            self.notify_slow_values();
        }
        self.end_gesture();
        EventResult::Handled
    }

    fn on_cancel(&mut self) -> EventResult {
        if self.pressed.is_none() {
            return EventResult::Ignored;
        }
        self.cancel_gesture();
        EventResult::Handled
    }

    fn cancel_gesture(&mut self) {
        tracing::debug!(thumb = ?self.pressed, "gesture cancelled");
        self.notify_stop();
        self.end_gesture();
    }

    fn end_gesture(&mut self) {
        self.pressed = None;
        self.drag.end();
        self.claim.release();
        self.model.request_redraw();
    }

    fn track(&mut self, thumb: Thumb, pos: Point) {
        let normalized = self.hit.layout.screen_to_normalized(pos.x);
        tracing::trace!(?thumb, x = pos.x, normalized, "track");
        let slow_motion = self.model.is_slow_motion();
        match thumb {
            Thumb::Min => self.model.set_min(normalized),
            Thumb::Max => self.model.set_max(normalized),
            Thumb::Path => self.model.set_current(normalized),
            Thumb::SlowMin if slow_motion => self.model.set_slow_min(normalized),
            Thumb::SlowMax if slow_motion => self.model.set_slow_max(normalized),
            Thumb::SlowMin | Thumb::SlowMax => {}
        }
        if slow_motion {
            self.model.settle_slow_range();
        }
        if !self.playing {
            self.model.set_current(self.model.state().min);
        }
    }

    fn notify_start(&mut self) {
        for listener in &mut self.listeners {
            listener.on_start_tracking_touch();
        }
    }

    fn notify_stop(&mut self) {
        for listener in &mut self.listeners {
            listener.on_stop_tracking_touch();
        }
    }

    fn notify_drag(&mut self, thumb: Thumb) {
        match thumb {
            Thumb::Min | Thumb::Max => self.notify_values(),
            Thumb::SlowMin | Thumb::SlowMax => self.notify_slow_values(),
            Thumb::Path => {
                let value = self.model.selected_current();
                for listener in &mut self.listeners {
                    listener.on_path_value_changed(&value);
                }
            }
        }
    }

    fn notify_values(&mut self) {
        let min = self.model.selected_min();
        let max = self.model.selected_max();
        for listener in &mut self.listeners {
            listener.on_values_changed(&min, &max);
        }
    }

    fn notify_slow_values(&mut self) {
        let slow_min = self.model.selected_slow_min();
        let slow_max = self.model.selected_slow_max();
        for listener in &mut self.listeners {
            listener.on_slow_values_changed(&slow_min, &slow_max);
        }
    }
}

impl<V: DomainValue> Default for FrameRangeSeekBar<V> {
    fn default() -> Self {
        Self::new(FrameRangeConfig::default())
    }
}

impl<V: fmt::Debug> fmt::Debug for FrameRangeSeekBar<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrameRangeSeekBar")
            .field("model", &self.model)
            .field("hit", &self.hit)
            .field("playing", &self.playing)
            .field("enabled", &self.enabled)
            .field("pressed", &self.pressed)
            .field("drag", &self.drag)
            .field("claim", &self.claim)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listener::{EventRecorder, FrameRangeEvent};
    use alloc::vec;
    use understory_event_state::pointer::PointerId;

    const EPS: f64 = 1e-9;
    const ID: PointerId = PointerId(7);

    // Width 1000 with 50 internal padding and 12 half width: track [74, 926].
    fn bar() -> (FrameRangeSeekBar<i32>, EventRecorder<FrameRangeEvent<i32>>) {
        let mut bar = FrameRangeSeekBar::new(FrameRangeConfig::default());
        bar.set_layout(1000.0, 300.0);
        let recorder = EventRecorder::<FrameRangeEvent<i32>>::new();
        bar.add_listener(Box::new(recorder.clone()));
        (bar, recorder)
    }

    fn event(action: PointerAction, x: f64, y: f64) -> PointerEvent {
        PointerEvent::single(action, ID, Point::new(x, y))
    }

    fn screen(bar: &FrameRangeSeekBar<i32>, n: f64) -> f64 {
        bar.layout().normalized_to_screen(n)
    }

    #[test]
    fn down_on_empty_track_is_ignored() {
        let (mut bar, events) = bar();
        assert_eq!(bar.on_pointer_event(&event(PointerAction::Down, 500.0, 200.0)), EventResult::Ignored);
        assert!(bar.pressed_thumb().is_none());
        assert!(events.is_empty());
        assert_eq!(bar.on_pointer_event(&event(PointerAction::Up, 500.0, 200.0)), EventResult::Ignored);
    }

    #[test]
    fn drag_min_thumb() {
        let (mut bar, events) = bar();
        let x = bar.thumb_center_x(Thumb::Min);
        assert!(bar.on_pointer_event(&event(PointerAction::Down, x, 200.0)).is_handled());
        assert_eq!(bar.pressed_thumb(), Some(Thumb::Min));
        assert!(bar.is_claimed());

        let target = screen(&bar, 0.3);
        bar.on_pointer_event(&event(PointerAction::Move, target, 200.0));
        assert!(bar.is_dragging());
        bar.on_pointer_event(&event(PointerAction::Move, target, 200.0));
        bar.on_pointer_event(&event(PointerAction::Up, target, 200.0));

        assert!((bar.model().state().min - 0.3).abs() < EPS);
        assert_eq!(bar.selected_min_value(), 30);
        assert_eq!(bar.model().state().current, bar.model().state().min);
        assert!(!bar.is_claimed());
        assert!(bar.pressed_thumb().is_none());

        assert_eq!(
            events.take(),
            vec![
                FrameRangeEvent::StartTracking,
                FrameRangeEvent::ValuesChanged { min: 30, max: 100 },
                FrameRangeEvent::StopTracking,
                FrameRangeEvent::ValuesChanged { min: 30, max: 100 },
                FrameRangeEvent::SlowValuesChanged {
                    slow_min: 30,
                    slow_max: 100
                },
            ]
        );
    }

    #[test]
    fn moves_inside_slop_do_not_drag() {
        let (mut bar, events) = bar();
        let x = bar.thumb_center_x(Thumb::Max);
        bar.on_pointer_event(&event(PointerAction::Down, x, 200.0));
        bar.on_pointer_event(&event(PointerAction::Move, x - 8.0, 200.0));
        assert!(!bar.is_dragging());
        assert_eq!(events.take(), vec![FrameRangeEvent::StartTracking]);
    }

    #[test]
    fn tap_reports_start_stop_and_values_once() {
        let (mut bar, events) = bar();
        let x = bar.thumb_center_x(Thumb::Max);
        bar.on_pointer_event(&event(PointerAction::Down, x, 200.0));
        bar.on_pointer_event(&event(PointerAction::Up, x, 200.0));
        let recorded = events.take();
        assert_eq!(recorded.first(), Some(&FrameRangeEvent::StartTracking));
        assert_eq!(
            recorded
                .iter()
                .filter(|e| **e == FrameRangeEvent::StartTracking)
                .count(),
            1
        );
        assert_eq!(recorded[1], FrameRangeEvent::StopTracking);
        assert_eq!(recorded.len(), 4);
    }

    #[test]
    fn cancel_stops_without_values() {
        let (mut bar, events) = bar();
        let x = bar.thumb_center_x(Thumb::Max);
        bar.on_pointer_event(&event(PointerAction::Down, x, 200.0));
        bar.on_pointer_event(&event(PointerAction::Move, screen(&bar, 0.5), 200.0));
        assert!(bar.on_pointer_event(&event(PointerAction::Cancel, 0.0, 0.0)).is_handled());
        assert_eq!(
            events.take(),
            vec![FrameRangeEvent::StartTracking, FrameRangeEvent::StopTracking]
        );
        assert!(!bar.is_claimed());
        assert_eq!(bar.on_pointer_event(&event(PointerAction::Cancel, 0.0, 0.0)), EventResult::Ignored);
    }

    #[test]
    fn max_drag_below_min_is_clamped() {
        let (mut bar, _events) = bar();
        bar.set_selected_min_value(&50);
        let x = bar.thumb_center_x(Thumb::Max);
        bar.on_pointer_event(&event(PointerAction::Down, x, 200.0));
        bar.on_pointer_event(&event(PointerAction::Move, screen(&bar, 0.1), 200.0));
        bar.on_pointer_event(&event(PointerAction::Up, screen(&bar, 0.1), 200.0));
        assert_eq!(bar.model().state().max, bar.model().state().min);
        assert_eq!(bar.selected_max_value(), 50);
    }

    #[test]
    fn missing_pointer_skips_the_step() {
        let (mut bar, _events) = bar();
        let x = bar.thumb_center_x(Thumb::Max);
        bar.on_pointer_event(&event(PointerAction::Down, x, 200.0));
        bar.on_pointer_event(&event(PointerAction::Move, screen(&bar, 0.5), 200.0));
        let before = bar.model().state();

        let other = PointerEvent::single(PointerAction::Move, PointerId(99), Point::new(100.0, 200.0));
        assert!(bar.on_pointer_event(&other).is_handled());
        assert_eq!(bar.model().state(), before);

        let up = PointerEvent::single(PointerAction::Up, PointerId(99), Point::new(100.0, 200.0));
        bar.on_pointer_event(&up);
        assert_eq!(bar.model().state(), before);
        assert!(bar.pressed_thumb().is_none());
    }

    #[test]
    fn secondary_pointers_are_ignored() {
        let (mut bar, events) = bar();
        let x = bar.thumb_center_x(Thumb::Max);
        bar.on_pointer_event(&event(PointerAction::Down, x, 200.0));
        let before = bar.model().state();
        let extra = PointerEvent::single(PointerAction::PointerDown, PointerId(2), Point::new(100.0, 200.0));
        assert!(bar.on_pointer_event(&extra).is_handled());
        assert_eq!(bar.model().state(), before);
        assert_eq!(bar.pressed_thumb(), Some(Thumb::Max));
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn disabled_control_ignores_input() {
        let (mut bar, events) = bar();
        bar.set_enabled(false);
        let x = bar.thumb_center_x(Thumb::Min);
        assert_eq!(bar.on_pointer_event(&event(PointerAction::Down, x, 200.0)), EventResult::Ignored);
        assert!(events.is_empty());
    }

    #[test]
    fn disabling_mid_gesture_cancels() {
        let (mut bar, events) = bar();
        let x = bar.thumb_center_x(Thumb::Min);
        bar.on_pointer_event(&event(PointerAction::Down, x, 200.0));
        bar.set_enabled(false);
        assert!(bar.pressed_thumb().is_none());
        assert!(!bar.is_claimed());
        assert_eq!(
            events.take(),
            vec![FrameRangeEvent::StartTracking, FrameRangeEvent::StopTracking]
        );
    }

    #[test]
    fn playing_drags_only_the_path() {
        let (mut bar, events) = bar();
        bar.set_playing(true);
        bar.set_progress(&40);
        let x = bar.thumb_center_x(Thumb::Path);
        assert!(bar.on_pointer_event(&event(PointerAction::Down, x, 10.0)).is_handled());
        assert_eq!(bar.pressed_thumb(), Some(Thumb::Path));
        let target = screen(&bar, 0.7);
        bar.on_pointer_event(&event(PointerAction::Move, target, 10.0));
        bar.on_pointer_event(&event(PointerAction::Up, target, 10.0));

        assert_eq!(bar.selected_path_value(), 70);
        assert_eq!(
            events.take().last(),
            Some(&FrameRangeEvent::PathValueChanged(70))
        );

        let min_x = bar.thumb_center_x(Thumb::Min);
        assert_eq!(bar.on_pointer_event(&event(PointerAction::Down, min_x, 200.0)), EventResult::Ignored);
    }

    #[test]
    fn progress_only_applies_while_playing() {
        let (mut bar, _events) = bar();
        bar.set_progress(&40);
        assert_eq!(bar.selected_path_value(), 0);
        bar.set_playing(true);
        bar.set_progress(&40);
        assert_eq!(bar.selected_path_value(), 40);
        bar.set_selected_min_value(&10);
        bar.set_playing(false);
        assert_eq!(bar.selected_path_value(), 10);
    }

    #[test]
    fn slow_thumb_drag_reports_slow_values() {
        let mut bar = FrameRangeSeekBar::<i32>::new(FrameRangeConfig {
            slow_motion: true,
            ..FrameRangeConfig::default()
        });
        bar.set_layout(1000.0, 300.0);
        let events = EventRecorder::<FrameRangeEvent<i32>>::new();
        bar.add_listener(Box::new(events.clone()));
        assert_eq!(bar.selected_slow_min_value(), 30);
        assert_eq!(bar.selected_slow_max_value(), 60);

        let x = bar.thumb_center_x(Thumb::SlowMax);
        bar.on_pointer_event(&event(PointerAction::Down, x, 10.0));
        assert_eq!(bar.pressed_thumb(), Some(Thumb::SlowMax));
        let target = screen(&bar, 0.8);
        bar.on_pointer_event(&event(PointerAction::Move, target, 10.0));
        bar.on_pointer_event(&event(PointerAction::Move, target, 10.0));
        bar.on_pointer_event(&event(PointerAction::Up, target, 10.0));

        assert_eq!(bar.selected_slow_max_value(), 80);
        assert!(events.take().contains(&FrameRangeEvent::SlowValuesChanged {
            slow_min: 30,
            slow_max: 80
        }));
    }

    #[test]
    fn dragging_min_pushes_slow_range() {
        let mut bar = FrameRangeSeekBar::<i32>::new(FrameRangeConfig {
            slow_motion: true,
            ..FrameRangeConfig::default()
        });
        bar.set_layout(1000.0, 300.0);

        let x = bar.thumb_center_x(Thumb::Min);
        bar.on_pointer_event(&event(PointerAction::Down, x, 200.0));
        let target = screen(&bar, 0.45);
        bar.on_pointer_event(&event(PointerAction::Move, target, 200.0));
        bar.on_pointer_event(&event(PointerAction::Up, target, 200.0));

        // Min may not pass slow_max - gap = 0.5.
        assert_eq!(bar.selected_min_value(), 45);
        assert_eq!(bar.selected_slow_min_value(), 45);
        assert_eq!(bar.selected_slow_max_value(), 60);
    }

    #[test]
    fn redraw_is_requested_on_press_and_release() {
        let (mut bar, _events) = bar();
        bar.take_redraw();
        let x = bar.thumb_center_x(Thumb::Min);
        bar.on_pointer_event(&event(PointerAction::Down, x, 200.0));
        assert!(bar.take_redraw());
        bar.on_pointer_event(&event(PointerAction::Up, x, 200.0));
        assert!(bar.take_redraw());
    }

    #[test]
    fn reset_selects_everything() {
        let (mut bar, _events) = bar();
        bar.set_selected_min_value(&20);
        bar.set_selected_max_value(&70);
        assert!(!bar.selected_values_are_default());
        bar.reset_selected_values();
        assert!(bar.selected_values_are_default());
        assert_eq!(bar.selected_min_value(), 0);
        assert_eq!(bar.selected_max_value(), 100);
    }

    #[test]
    fn set_range_keeps_step() {
        let (mut bar, _events) = bar();
        bar.set_range_values(0, 1000, 10);
        bar.set_range(0, 500);
        assert_eq!(*bar.model().bounds().step(), 10);
        assert_eq!(*bar.model().bounds().max(), 500);
    }
}
