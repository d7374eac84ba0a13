// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: latch one pointer, detect touch slop, and track movement.
//!
//! ## Usage
//!
//! 1) Start a gesture by calling [`DragState::start`] with the pointer id and initial position.
//!    The state is now [`DragPhase::Pressed`].
//! 2) On each move event, resolve the latched pointer with [`DragState::position_in`].
//!    While pressed, check [`DragState::crossed_slop_x`] and call [`DragState::begin_drag`]
//!    once the pointer has travelled far enough.
//! 3) Call [`DragState::update`] to get the movement delta since the last update, or
//!    [`DragState::total_offset`] for the cumulative offset from the start position.
//! 4) End the gesture with [`DragState::end`] to reset state.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::drag::{DragPhase, DragState};
//! use understory_event_state::pointer::PointerId;
//!
//! let mut drag = DragState::default();
//!
//! // Press at (10, 20)
//! drag.start(PointerId(1), Point::new(10.0, 20.0));
//! assert_eq!(drag.phase(), DragPhase::Pressed);
//!
//! // A small wobble stays inside an 8px slop.
//! assert!(!drag.crossed_slop_x(Point::new(15.0, 25.0), 8.0));
//!
//! // Moving further starts the drag.
//! assert!(drag.crossed_slop_x(Point::new(30.0, 20.0), 8.0));
//! assert!(drag.begin_drag());
//! assert!(drag.is_dragging());
//!
//! let delta = drag.update(Point::new(30.0, 20.0)).unwrap();
//! assert_eq!(delta.x, 20.0);
//! ```

use kurbo::{Point, Vec2};

use crate::pointer::{PointerEvent, PointerId};

/// Where a single-pointer gesture currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// No pointer is latched.
    #[default]
    Idle,
    /// A pointer is down but has not moved past the touch slop.
    Pressed,
    /// The pointer has moved past the touch slop.
    Dragging,
}

/// Tracks one latched pointer through press, drag, and release.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Pointer latched by [`DragState::start`].
    pub pointer: Option<PointerId>,
    /// Start position of the gesture
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during the gesture
    pub last_pos: Option<Point>,
    phase: DragPhase,
}

impl DragState {
    /// Latch `pointer` and start tracking a new gesture from `pos`.
    ///
    /// Any previous gesture is discarded.
    pub fn start(&mut self, pointer: PointerId, pos: Point) {
        self.pointer = Some(pointer);
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.phase = DragPhase::Pressed;
    }

    /// Current phase of the gesture.
    #[must_use]
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Returns `true` while a pointer is latched (pressed or dragging).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase != DragPhase::Idle
    }

    /// Returns `true` once the pointer has moved past the touch slop.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Resolves the latched pointer's position inside `event`.
    ///
    /// Returns `None` when idle or when the pointer is missing from the event.
    #[must_use]
    pub fn position_in(&self, event: &PointerEvent) -> Option<Point> {
        self.pointer.and_then(|id| event.position_of(id))
    }

    /// Returns `true` if `pos` is horizontally more than `slop` away from the start position.
    #[must_use]
    pub fn crossed_slop_x(&self, pos: Point, slop: f64) -> bool {
        self.start_pos
            .is_some_and(|start| (pos.x - start.x).abs() > slop)
    }

    /// Transition from [`DragPhase::Pressed`] to [`DragPhase::Dragging`].
    ///
    /// Returns `true` if the transition happened.
    pub fn begin_drag(&mut self) -> bool {
        if self.phase == DragPhase::Pressed {
            self.phase = DragPhase::Dragging;
            true
        } else {
            false
        }
    }

    /// Update the state with a new position, returning the movement delta since last update.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        if self.start_pos.is_some() {
            if let Some(last_pos) = self.last_pos {
                let delta = pos - last_pos;
                self.last_pos = Some(pos);
                Some(delta)
            } else {
                self.last_pos = Some(pos);
                None
            }
        } else {
            None
        }
    }

    /// Get total offset from the gesture start position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// End the current gesture and reset state.
    pub fn end(&mut self) {
        self.pointer = None;
        self.start_pos = None;
        self.last_pos = None;
        self.phase = DragPhase::Idle;
    }
}
