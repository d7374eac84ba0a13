// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: pointer gesture state for UI controls.
//!
//! This crate provides small, focused pieces of state that a control needs to
//! follow a pointer gesture from press to release. Each module handles one
//! concern:
//!
//! - [`pointer`]: A host-neutral pointer event model (action plus per-pointer samples)
//! - [`drag`]: Latch a single pointer, detect touch slop, and track movement
//! - [`claim`]: Claim a gesture so an enclosing container does not intercept it
//!
//! ## Design Philosophy
//!
//! Each piece is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific part of a gesture
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Integration-friendly**: Work with any windowing or event system
//! - **Composable**: Controls hold these by value instead of inheriting behavior
//!
//! The crate does not assume any particular UI framework. Hosts translate their
//! native input into [`pointer::PointerEvent`] values; controls combine
//! [`drag::DragState`] and [`claim::ClaimHandle`] to implement their own
//! press/drag/release logic.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use kurbo::Point;
//! use understory_event_state::claim::ClaimHandle;
//! use understory_event_state::drag::DragState;
//! use understory_event_state::pointer::{PointerAction, PointerEvent, PointerId};
//!
//! let mut drag = DragState::default();
//! let mut claim = ClaimHandle::default();
//! let slop = 8.0;
//!
//! let down = PointerEvent::single(PointerAction::Down, PointerId(1), Point::new(40.0, 10.0));
//! if let Some(sample) = down.last() {
//!     drag.start(sample.id, sample.position);
//!     claim.claim();
//! }
//!
//! let mv = PointerEvent::single(PointerAction::Move, PointerId(1), Point::new(60.0, 10.0));
//! if let Some(pos) = drag.position_in(&mv) {
//!     if drag.crossed_slop_x(pos, slop) {
//!         drag.begin_drag();
//!     }
//! }
//! assert!(drag.is_dragging());
//!
//! drag.end();
//! claim.release();
//! assert!(!claim.is_claimed());
//! ```
//!
//! ## Features
//!
//! - `std` (default): Build against the standard library.
//! - `libm`: Use `libm` for floating point math in `no_std` builds.
//!
//! This crate is `no_std` compatible (with `alloc`) for all modules.

#![no_std]

extern crate alloc;

pub mod claim;
pub mod drag;
pub mod pointer;
