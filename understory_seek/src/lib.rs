// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_seek --heading-base-level=0

//! Understory Seek: headless seek and range controls.
//!
//! This crate contains the state and input handling behind two seek bar
//! controls, without any drawing:
//!
//! - [`frame::FrameRangeSeekBar`]: a frame-range selector with min and max
//!   thumbs, a playback position, and an optional slow-motion sub-range.
//! - [`tick_bar::TickRangeBar`]: a single-thumb bar that snaps to ticks.
//!
//! The building blocks are public too:
//!
//! - [`numeric`]: the closed set of value types a control can report
//! - [`range`]: the normalized `[0, 1]` range model and its clamping rules
//! - [`layout`]: mapping between screen x and normalized positions
//! - [`hit`]: deciding which thumb a touch lands on
//! - [`tick`]: tick geometry and nearest-index snapping
//! - [`listener`]: change observers and a polling recorder
//! - [`config`]: host-facing configuration and defaults
//!
//! Pointer input comes in as [`understory_event_state::pointer::PointerEvent`]
//! values. Controls claim a gesture with the host through
//! [`understory_event_state::claim::DragClaim`] while they track it.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_event_state::pointer::{PointerAction, PointerEvent, PointerId};
//! use understory_seek::EventResult;
//! use understory_seek::config::FrameRangeConfig;
//! use understory_seek::frame::FrameRangeSeekBar;
//! use understory_seek::hit::Thumb;
//! use understory_seek::listener::{EventRecorder, FrameRangeEvent};
//!
//! let mut bar = FrameRangeSeekBar::new(FrameRangeConfig::<i32>::default());
//! bar.set_layout(1000.0, 300.0);
//! let events = EventRecorder::<FrameRangeEvent<i32>>::new();
//! bar.add_listener(Box::new(events.clone()));
//!
//! // Press the max thumb and drag it to the middle of the track.
//! let x = bar.thumb_center_x(Thumb::Max);
//! let id = PointerId(0);
//! let down = PointerEvent::single(PointerAction::Down, id, Point::new(x, 200.0));
//! assert_eq!(bar.on_pointer_event(&down), EventResult::Handled);
//!
//! let mid = bar.layout().normalized_to_screen(0.5);
//! bar.on_pointer_event(&PointerEvent::single(PointerAction::Move, id, Point::new(mid, 200.0)));
//! bar.on_pointer_event(&PointerEvent::single(PointerAction::Up, id, Point::new(mid, 200.0)));
//!
//! assert_eq!(bar.selected_max_value(), 50);
//! assert!(events.take().contains(&FrameRangeEvent::StopTracking));
//! ```
//!
//! ## Features
//!
//! - `std` (default): Build against the standard library.
//! - `libm`: Use `libm` for floating point math in `no_std` builds.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod frame;
pub mod hit;
pub mod layout;
pub mod listener;
pub mod numeric;
pub mod range;
pub mod tick;
pub mod tick_bar;

pub use error::{Result, SeekError};

/// Whether a control consumed a pointer event.
///
/// Ignored events should continue through the host's normal dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventResult {
    /// The control used the event.
    Handled,
    /// The control did not use the event.
    Ignored,
}

impl EventResult {
    /// Returns `true` for [`EventResult::Handled`].
    #[must_use]
    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}
