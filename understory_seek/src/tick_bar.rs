// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick bar: a single thumb that snaps to the positions of a [`TickGeometry`].
//!
//! The line is inset by the thumb half width on both sides, so the thumb is
//! fully visible at either end. The thumb sits vertically centered.
//!
//! Gestures mirror the frame-range control with a single thumb:
//!
//! - **Down** must land on the thumb; otherwise the event is ignored. A hit
//!   reports start-tracking, snaps the thumb to the touch, and claims the drag.
//! - **Move** snaps the thumb to the nearest position on every sample. Touches
//!   beyond either end of the line are skipped.
//! - **Up** snaps once more, releases the claim, then reports stop-tracking and
//!   the final index. The index is only reported on release.
//! - **Cancel** releases the claim and reports stop-tracking only.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Point;
use understory_event_state::claim::{ClaimHandle, DragClaim};
use understory_event_state::drag::DragState;
use understory_event_state::pointer::{PointerAction, PointerEvent};

use crate::EventResult;
use crate::config::TickBarConfig;
use crate::error::{Result, SeekError};
use crate::listener::TickBarListener;
use crate::tick::{TickGeometry, check_child_tick_count, check_tick_count};

/// A single-thumb bar snapping to discrete ticks.
pub struct TickRangeBar {
    config: TickBarConfig,
    geometry: TickGeometry,
    width: f64,
    height: f64,
    index: usize,
    enabled: bool,
    pressed: bool,
    drag: DragState,
    claim: ClaimHandle,
    listeners: Vec<Box<dyn TickBarListener>>,
    revision: u64,
    redraw: bool,
}

impl TickRangeBar {
    /// Creates a bar from `config`, validating its tick counts.
    ///
    /// The layout starts zero-sized; call [`set_layout`](Self::set_layout).
    pub fn new(config: TickBarConfig) -> Result<Self> {
        let geometry = TickGeometry::new(config.tick_count, config.child_tick_count, 0.0, 0.0)?;
        Ok(Self {
            config,
            geometry,
            width: 0.0,
            height: 0.0,
            index: 0,
            enabled: true,
            pressed: false,
            drag: DragState::default(),
            claim: ClaimHandle::default(),
            listeners: Vec::new(),
            revision: 0,
            redraw: false,
        })
    }

    /// Registers a change observer.
    pub fn add_listener(&mut self, listener: Box<dyn TickBarListener>) {
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

    /// Updates the view size and rebuilds the tick line.
    pub fn set_layout(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.rebuild_line();
    }

    /// Current tick geometry.
    #[must_use]
    pub fn geometry(&self) -> &TickGeometry {
        &self.geometry
    }

    /// Number of major ticks.
    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.geometry.tick_count()
    }

    /// Child steps per major segment.
    #[must_use]
    pub fn child_tick_count(&self) -> usize {
        self.geometry.child_tick_count()
    }

    /// Changes the number of major ticks.
    ///
    /// Counts below 2 are rejected and leave the bar unchanged. If the
    /// current index no longer exists it resets to `0` and is reported.
    pub fn set_tick_count(&mut self, count: usize) -> Result<()> {
        check_tick_count(count)?;
        self.config.tick_count = count;
        self.rebuild_geometry()
    }

    /// Changes the number of child steps per major segment.
    ///
    /// Counts below 1 are rejected and leave the bar unchanged. If the
    /// current index no longer exists it resets to `0` and is reported.
    pub fn set_child_tick_count(&mut self, count: usize) -> Result<()> {
        check_child_tick_count(count)?;
        self.config.child_tick_count = count;
        self.rebuild_geometry()
    }

    /// Selected index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Selects `index` and reports it.
    ///
    /// An index outside `0..=max_index()` is rejected without any change or
    /// notification.
    pub fn set_index(&mut self, index: usize) -> Result<()> {
        if !self.geometry.contains_index(index) {
            return Err(SeekError::IndexOutOfRange {
                index,
                max: self.geometry.max_index(),
            });
        }
        self.index = index;
        self.request_redraw();
        self.notify_index();
        Ok(())
    }

    /// Screen x of the thumb center.
    #[must_use]
    pub fn thumb_x(&self) -> f64 {
        self.geometry.index_to_x(self.index)
    }

    /// Screen position of the thumb center.
    #[must_use]
    pub fn thumb_center(&self) -> Point {
        Point::new(self.thumb_x(), self.height / 2.0)
    }

    /// Returns `true` while a gesture holds the thumb.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Returns `true` once the current gesture has crossed the touch slop.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Enables or disables pointer input. Disabling cancels a gesture in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !enabled && self.pressed {
            self.cancel_gesture();
        }
        self.enabled = enabled;
        self.request_redraw();
    }

    /// Returns `true` if the bar accepts pointer input.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Counter bumped whenever something visible changed.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns and clears the redraw request.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.redraw)
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
            PointerAction::Cancel => {
                if !self.pressed {
                    return EventResult::Ignored;
                }
                self.cancel_gesture();
                EventResult::Handled
            }
            PointerAction::PointerDown | PointerAction::PointerUp => {
                if self.pressed {
                    EventResult::Handled
                } else {
                    EventResult::Ignored
                }
            }
        }
    }

    fn hits_thumb(&self, pos: Point) -> bool {
        let center = self.thumb_center();
        (pos.x - center.x).abs() <= self.config.thumb_half_width
            && (pos.y - center.y).abs() <= self.config.thumb_half_height
    }

    fn on_down(&mut self, event: &PointerEvent) -> EventResult {
        let Some(&sample) = event.last() else {
            tracing::debug!("down event without pointers");
            return EventResult::Ignored;
        };
        if self.pressed {
            tracing::debug!("down during an active gesture; cancelling it");
            self.cancel_gesture();
        }
        if !self.hits_thumb(sample.position) {
            tracing::debug!(x = sample.position.x, y = sample.position.y, "down missed the thumb");
            return EventResult::Ignored;
        }

        tracing::debug!(index = self.index, pointer = sample.id.0, "tick thumb pressed");
        self.pressed = true;
        self.drag.start(sample.id, sample.position);
        self.request_redraw();
        for listener in &mut self.listeners {
            listener.on_start_tracking_touch();
        }
        self.track(sample.position.x);
        self.claim.claim();
        EventResult::Handled
    }

    fn on_move(&mut self, event: &PointerEvent) -> EventResult {
        if !self.pressed {
            return EventResult::Ignored;
        }
        let Some(pos) = self.drag.position_in(event) else {
            tracing::debug!(pointer = ?self.drag.pointer, "latched pointer missing from move");
            return EventResult::Handled;
        };
        if !self.drag.is_dragging() && self.drag.crossed_slop_x(pos, self.config.touch_slop) {
            self.drag.begin_drag();
            tracing::debug!(x = pos.x, "tick drag started");
        }
        self.drag.update(pos);
        self.track(pos.x);
        EventResult::Handled
    }

    fn on_up(&mut self, event: &PointerEvent) -> EventResult {
        if !self.pressed {
            return EventResult::Ignored;
        }
        match self.drag.position_in(event) {
            Some(pos) => self.track(pos.x),
            None => tracing::debug!(pointer = ?self.drag.pointer, "latched pointer missing from up"),
        }
        tracing::debug!(index = self.index, "tick thumb released");
        self.end_gesture();
        for listener in &mut self.listeners {
            listener.on_stop_tracking_touch();
        }
        self.notify_index();
        EventResult::Handled
    }

    fn cancel_gesture(&mut self) {
        tracing::debug!(index = self.index, "tick gesture cancelled");
        self.end_gesture();
        for listener in &mut self.listeners {
            listener.on_stop_tracking_touch();
        }
    }

    fn end_gesture(&mut self) {
        self.pressed = false;
        self.drag.end();
        self.claim.release();
        self.request_redraw();
    }

    fn track(&mut self, x: f64) {
        if !self.geometry.contains_x(x) {
            tracing::trace!(x, "touch outside the tick line");
            return;
        }
        let nearest = self.geometry.nearest_index(x).max(0).unsigned_abs();
        let index = nearest.min(self.geometry.max_index());
        tracing::trace!(x, index, "snap");
        if index != self.index {
            self.index = index;
            self.request_redraw();
        }
    }

    fn rebuild_line(&mut self) {
        let pad = self.config.thumb_half_width;
        self.geometry = self.geometry.with_line(pad, self.width - pad);
        self.request_redraw();
    }

    fn rebuild_geometry(&mut self) -> Result<()> {
        self.geometry = TickGeometry::new(
            self.config.tick_count,
            self.config.child_tick_count,
            self.geometry.left_x(),
            self.geometry.right_x(),
        )?;
        if !self.geometry.contains_index(self.index) {
            tracing::debug!(index = self.index, max = self.geometry.max_index(), "index orphaned; resetting");
            self.index = 0;
            self.notify_index();
        }
        self.request_redraw();
        Ok(())
    }

    fn notify_index(&mut self) {
        let index = self.index;
        for listener in &mut self.listeners {
            listener.on_tick_index_changed(index);
        }
    }

    fn request_redraw(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.redraw = true;
    }
}

impl Default for TickRangeBar {
    fn default() -> Self {
        Self {
            config: TickBarConfig::default(),
            geometry: TickGeometry::default(),
            width: 0.0,
            height: 0.0,
            index: 0,
            enabled: true,
            pressed: false,
            drag: DragState::default(),
            claim: ClaimHandle::default(),
            listeners: Vec::new(),
            revision: 0,
            redraw: false,
        }
    }
}

impl fmt::Debug for TickRangeBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickRangeBar")
            .field("config", &self.config)
            .field("geometry", &self.geometry)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("index", &self.index)
            .field("enabled", &self.enabled)
            .field("pressed", &self.pressed)
            .field("drag", &self.drag)
            .field("claim", &self.claim)
            .field("listeners", &self.listeners.len())
            .field("revision", &self.revision)
            .field("redraw", &self.redraw)
            .finish()
    }
}
