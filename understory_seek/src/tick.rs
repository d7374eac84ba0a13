// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick geometry: discrete snap positions along a horizontal line.
//!
//! `tick_count` major ticks divide the line `[left_x, right_x]` into equal
//! segments, and each segment is split into `child_tick_count` child steps.
//! Positions are indexed from `0` at `left_x` to
//! `(tick_count - 1) * child_tick_count` at `right_x`.
//!
//! ```
//! use understory_seek::tick::TickGeometry;
//!
//! // 3 major ticks, each segment split in two: indices 0..=4, 25px apart.
//! let ticks = TickGeometry::new(3, 2, 0.0, 100.0).unwrap();
//! assert_eq!(ticks.position_count(), 5);
//! assert_eq!(ticks.child_tick_distance(), 25.0);
//! assert_eq!(ticks.nearest_index(60.0), 2);
//! assert_eq!(ticks.nearest_coordinate(60.0), 50.0);
//! assert!(TickGeometry::new(1, 2, 0.0, 100.0).is_err());
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use crate::error::{Result, SeekError};

/// Validated tick layout along a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickGeometry {
    tick_count: usize,
    child_tick_count: usize,
    left_x: f64,
    right_x: f64,
}

impl TickGeometry {
    /// Creates a geometry, rejecting `tick_count < 2` and `child_tick_count < 1`.
    pub fn new(tick_count: usize, child_tick_count: usize, left_x: f64, right_x: f64) -> Result<Self> {
        check_tick_count(tick_count)?;
        check_child_tick_count(child_tick_count)?;
        Ok(Self {
            tick_count,
            child_tick_count,
            left_x,
            right_x,
        })
    }

    /// Same counts, new line extents.
    #[must_use]
    pub fn with_line(self, left_x: f64, right_x: f64) -> Self {
        Self {
            left_x,
            right_x,
            ..self
        }
    }

    /// Number of major ticks.
    #[must_use]
    pub fn tick_count(&self) -> usize {
        self.tick_count
    }

    /// Child steps per major segment.
    #[must_use]
    pub fn child_tick_count(&self) -> usize {
        self.child_tick_count
    }

    /// Left end of the line.
    #[must_use]
    pub fn left_x(&self) -> f64 {
        self.left_x
    }

    /// Right end of the line.
    #[must_use]
    pub fn right_x(&self) -> f64 {
        self.right_x
    }

    /// Largest valid index.
    #[must_use]
    pub fn max_index(&self) -> usize {
        (self.tick_count - 1) * self.child_tick_count
    }

    /// Number of addressable positions, `max_index() + 1`.
    #[must_use]
    pub fn position_count(&self) -> usize {
        self.max_index() + 1
    }

    /// Returns `true` if `index` addresses a position.
    #[must_use]
    pub fn contains_index(&self, index: usize) -> bool {
        index <= self.max_index()
    }

    /// Distance between two major ticks.
    #[must_use]
    pub fn tick_distance(&self) -> f64 {
        (self.right_x - self.left_x) / (self.tick_count - 1) as f64
    }

    /// Distance between two adjacent positions.
    #[must_use]
    pub fn child_tick_distance(&self) -> f64 {
        self.tick_distance() / self.child_tick_count as f64
    }

    /// Returns `true` if `x` lies on the line, ends included.
    #[must_use]
    pub fn contains_x(&self, x: f64) -> bool {
        (self.left_x..=self.right_x).contains(&x)
    }

    /// Index of the position nearest to `x`.
    ///
    /// Not clamped: a touch outside the line yields an index outside
    /// `0..=max_index()`. A zero-length line always yields `0`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "tick indices are small; the float is already rounded"
    )]
    pub fn nearest_index(&self, x: f64) -> isize {
        let distance = self.child_tick_distance();
        if distance.is_nan() || distance <= 0.0 {
            return 0;
        }
        ((x - self.left_x) / distance).round() as isize
    }

    /// Screen x of the position nearest to `x`.
    #[must_use]
    pub fn nearest_coordinate(&self, x: f64) -> f64 {
        self.left_x + self.nearest_index(x) as f64 * self.child_tick_distance()
    }

    /// Screen x of `index`.
    #[must_use]
    pub fn index_to_x(&self, index: usize) -> f64 {
        self.left_x + index as f64 * self.child_tick_distance()
    }

    /// Every position along the line, left to right.
    pub fn marks(&self) -> impl Iterator<Item = TickMark> {
        let ticks = *self;
        (0..ticks.position_count()).map(move |index| TickMark {
            index,
            // The last mark sits exactly on the line end.
            x: if index == ticks.max_index() {
                ticks.right_x
            } else {
                ticks.index_to_x(index)
            },
            major: index % ticks.child_tick_count == 0,
        })
    }
}

impl Default for TickGeometry {
    /// Two ticks, no subdivision, on a zero-length line at `x = 0`.
    fn default() -> Self {
        Self {
            tick_count: 2,
            child_tick_count: 1,
            left_x: 0.0,
            right_x: 0.0,
        }
    }
}

/// One position on a tick line, for drawing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickMark {
    /// Position index.
    pub index: usize,
    /// Screen x.
    pub x: f64,
    /// `true` for major ticks, `false` for child ticks.
    pub major: bool,
}

pub(crate) fn check_tick_count(count: usize) -> Result<()> {
    if count < 2 {
        return Err(SeekError::InvalidTickCount { count });
    }
    Ok(())
}

pub(crate) fn check_child_tick_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(SeekError::InvalidChildTickCount { count });
    }
    Ok(())
}
