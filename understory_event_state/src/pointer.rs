// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal pointer event model.
//!
//! Hosts translate their native touch or mouse events into [`PointerEvent`]
//! values. Each event carries the action that triggered it plus the position
//! of every pointer currently down, so a consumer can look up "its" pointer by
//! id even when other pointers are present.
//!
//! ```
//! use kurbo::Point;
//! use understory_event_state::pointer::{PointerAction, PointerEvent, PointerId};
//!
//! let down = PointerEvent::single(PointerAction::Down, PointerId(7), Point::new(10.0, 4.0));
//! assert_eq!(down.last().map(|p| p.id), Some(PointerId(7)));
//! assert_eq!(down.position_of(PointerId(7)), Some(Point::new(10.0, 4.0)));
//! assert_eq!(down.position_of(PointerId(8)), None);
//! ```

use kurbo::Point;
use smallvec::SmallVec;

/// Identifier of a pointer (finger, pen, or mouse) as assigned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointerId(pub u64);

/// The lifecycle action an event reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// The first pointer of a gesture went down.
    Down,
    /// One or more pointers moved.
    Move,
    /// The last pointer of a gesture went up.
    Up,
    /// The gesture was aborted by the host.
    Cancel,
    /// An additional pointer went down while another is already down.
    PointerDown,
    /// A non-final pointer went up.
    PointerUp,
}

/// Position of a single pointer within an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Host-assigned pointer id.
    pub id: PointerId,
    /// Position in the control's local coordinates.
    pub position: Point,
}

/// A pointer event: an action plus the samples of all pointers that are down.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub action: PointerAction,
    /// All pointers known to the host at the time of the event, in host order.
    pub pointers: SmallVec<[PointerSample; 2]>,
}

impl PointerEvent {
    /// Creates an event from an action and a set of samples.
    pub fn new(action: PointerAction, pointers: impl IntoIterator<Item = PointerSample>) -> Self {
        Self {
            action,
            pointers: pointers.into_iter().collect(),
        }
    }

    /// Creates an event carrying exactly one pointer.
    #[must_use]
    pub fn single(action: PointerAction, id: PointerId, position: Point) -> Self {
        let mut pointers = SmallVec::new();
        pointers.push(PointerSample { id, position });
        Self { action, pointers }
    }

    /// Returns the most recently added pointer, if any.
    ///
    /// Controls latch this pointer on [`PointerAction::Down`].
    #[must_use]
    pub fn last(&self) -> Option<&PointerSample> {
        self.pointers.last()
    }

    /// Looks up the position of `id`, or `None` if the pointer is not part of this event.
    #[must_use]
    pub fn position_of(&self, id: PointerId) -> Option<Point> {
        self.pointers
            .iter()
            .find(|sample| sample.id == id)
            .map(|sample| sample.position)
    }
}
