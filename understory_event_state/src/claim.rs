// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag claims: ask an enclosing container not to steal an in-progress gesture.
//!
//! Scroll containers commonly intercept pointer moves once they look like a
//! scroll. A control that is tracking a drag claims the gesture for its
//! duration and releases it when the gesture ends.
//!
//! [`DragClaim`] is the capability a host implements (for example by setting a
//! "disallow intercept" flag on the parent). Controls hold a [`ClaimHandle`]
//! by composition; the handle deduplicates repeated claims and forwards edges
//! to the host.
//!
//! ```
//! use understory_event_state::claim::{ClaimHandle, DragClaim};
//!
//! #[derive(Default)]
//! struct Parent {
//!     intercept_disabled: bool,
//! }
//!
//! impl DragClaim for Parent {
//!     fn claim(&mut self) {
//!         self.intercept_disabled = true;
//!     }
//!     fn release(&mut self) {
//!         self.intercept_disabled = false;
//!     }
//! }
//!
//! let mut handle = ClaimHandle::default();
//! handle.set_parent(Box::new(Parent::default()));
//! handle.claim();
//! assert!(handle.is_claimed());
//! handle.release();
//! assert!(!handle.is_claimed());
//! ```

use alloc::boxed::Box;
use core::fmt;

/// Capability for claiming and releasing a gesture with an enclosing container.
pub trait DragClaim {
    /// Ask the container not to intercept further events of the current gesture.
    fn claim(&mut self);

    /// Allow the container to intercept events again.
    fn release(&mut self);
}

/// Tracks whether a control currently holds a drag claim.
///
/// Calls are edge-triggered: the parent only sees `claim` when the handle goes
/// from released to claimed, and `release` on the opposite edge.
#[derive(Default)]
pub struct ClaimHandle {
    parent: Option<Box<dyn DragClaim>>,
    claimed: bool,
}

impl ClaimHandle {
    /// Creates a handle that forwards to `parent`.
    #[must_use]
    pub fn new(parent: Box<dyn DragClaim>) -> Self {
        Self {
            parent: Some(parent),
            claimed: false,
        }
    }

    /// Replaces the container that receives claims.
    ///
    /// An outstanding claim is released on the old parent first.
    pub fn set_parent(&mut self, parent: Box<dyn DragClaim>) {
        self.release();
        self.parent = Some(parent);
    }

    /// Claims the current gesture. Repeated claims are ignored.
    pub fn claim(&mut self) {
        if self.claimed {
            return;
        }
        self.claimed = true;
        tracing::trace!(forwarded = self.parent.is_some(), "drag claimed");
        if let Some(parent) = self.parent.as_mut() {
            parent.claim();
        }
    }

    /// Releases the current claim, if any.
    pub fn release(&mut self) {
        if !self.claimed {
            return;
        }
        self.claimed = false;
        tracing::trace!(forwarded = self.parent.is_some(), "drag released");
        if let Some(parent) = self.parent.as_mut() {
            parent.release();
        }
    }

    /// Returns `true` while the gesture is claimed.
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }
}

impl fmt::Debug for ClaimHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaimHandle")
            .field("parent", &self.parent.is_some())
            .field("claimed", &self.claimed)
            .finish()
    }
}
