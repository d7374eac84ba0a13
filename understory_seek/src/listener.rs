// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change observers for the seek controls.
//!
//! Controls call their listeners synchronously from inside the event handler
//! or setter that caused the change. Every method has an empty default, so
//! hosts only implement what they care about.
//!
//! Hosts that would rather poll can register an [`EventRecorder`] and drain
//! it after each dispatch:
//!
//! ```
//! use understory_seek::listener::{EventRecorder, FrameRangeEvent, FrameRangeListener};
//!
//! let recorder = EventRecorder::<FrameRangeEvent<i32>>::new();
//! let mut sink: Box<dyn FrameRangeListener<i32>> = Box::new(recorder.clone());
//! sink.on_values_changed(&10, &90);
//!
//! assert_eq!(
//!     recorder.take(),
//!     vec![FrameRangeEvent::ValuesChanged { min: 10, max: 90 }]
//! );
//! assert!(recorder.is_empty());
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

/// Observer for a [`FrameRangeSeekBar`](crate::frame::FrameRangeSeekBar).
pub trait FrameRangeListener<V> {
    /// A gesture started tracking a thumb.
    fn on_start_tracking_touch(&mut self) {}

    /// The tracked gesture ended.
    fn on_stop_tracking_touch(&mut self) {}

    /// The selected range changed.
    fn on_values_changed(&mut self, _min: &V, _max: &V) {}

    /// The slow-motion sub-range changed.
    fn on_slow_values_changed(&mut self, _slow_min: &V, _slow_max: &V) {}

    /// The playback position was moved by the user.
    fn on_path_value_changed(&mut self, _value: &V) {}
}

/// Observer for a [`TickRangeBar`](crate::tick_bar::TickRangeBar).
pub trait TickBarListener {
    /// A gesture started tracking the thumb.
    fn on_start_tracking_touch(&mut self) {}

    /// The tracked gesture ended.
    fn on_stop_tracking_touch(&mut self) {}

    /// The selected tick index changed.
    fn on_tick_index_changed(&mut self, _index: usize) {}
}

/// A recorded [`FrameRangeListener`] callback.
#[derive(Clone, Debug, PartialEq)]
pub enum FrameRangeEvent<V> {
    /// See [`FrameRangeListener::on_start_tracking_touch`].
    StartTracking,
    /// See [`FrameRangeListener::on_stop_tracking_touch`].
    StopTracking,
    /// See [`FrameRangeListener::on_values_changed`].
    ValuesChanged {
        /// Selected start.
        min: V,
        /// Selected end.
        max: V,
    },
    /// See [`FrameRangeListener::on_slow_values_changed`].
    SlowValuesChanged {
        /// Slow-motion start.
        slow_min: V,
        /// Slow-motion end.
        slow_max: V,
    },
    /// See [`FrameRangeListener::on_path_value_changed`].
    PathValueChanged(V),
}

/// A recorded [`TickBarListener`] callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickBarEvent {
    /// See [`TickBarListener::on_start_tracking_touch`].
    StartTracking,
    /// See [`TickBarListener::on_stop_tracking_touch`].
    StopTracking,
    /// See [`TickBarListener::on_tick_index_changed`].
    IndexChanged(usize),
}

/// A shared, cloneable queue of recorded events.
///
/// Clones share the same queue: register one clone as a listener and keep
/// another to read from.
pub struct EventRecorder<E> {
    events: Rc<RefCell<Vec<E>>>,
}

impl<E> EventRecorder<E> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<E> {
        core::mem::take(&mut *self.events.borrow_mut())
    }

    /// Number of events waiting.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns `true` if nothing is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    fn push(&self, event: E) {
        self.events.borrow_mut().push(event);
    }
}

impl<E: Clone> EventRecorder<E> {
    /// Copies the waiting events without removing them.
    #[must_use]
    pub fn snapshot(&self) -> Vec<E> {
        self.events.borrow().clone()
    }
}

impl<E> Clone for EventRecorder<E> {
    fn clone(&self) -> Self {
        Self {
            events: Rc::clone(&self.events),
        }
    }
}

impl<E> Default for EventRecorder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EventRecorder<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventRecorder")
            .field("pending", &self.events.borrow().len())
            .finish()
    }
}

impl<V: Clone> FrameRangeListener<V> for EventRecorder<FrameRangeEvent<V>> {
    fn on_start_tracking_touch(&mut self) {
        self.push(FrameRangeEvent::StartTracking);
    }

    fn on_stop_tracking_touch(&mut self) {
        self.push(FrameRangeEvent::StopTracking);
    }

    fn on_values_changed(&mut self, min: &V, max: &V) {
        self.push(FrameRangeEvent::ValuesChanged {
            min: min.clone(),
            max: max.clone(),
        });
    }

    fn on_slow_values_changed(&mut self, slow_min: &V, slow_max: &V) {
        self.push(FrameRangeEvent::SlowValuesChanged {
            slow_min: slow_min.clone(),
            slow_max: slow_max.clone(),
        });
    }

    fn on_path_value_changed(&mut self, value: &V) {
        self.push(FrameRangeEvent::PathValueChanged(value.clone()));
    }
}

impl TickBarListener for EventRecorder<TickBarEvent> {
    fn on_start_tracking_touch(&mut self) {
        self.push(TickBarEvent::StartTracking);
    }

    fn on_stop_tracking_touch(&mut self) {
        self.push(TickBarEvent::StopTracking);
    }

    fn on_tick_index_changed(&mut self, index: usize) {
        self.push(TickBarEvent::IndexChanged(index));
    }
}
