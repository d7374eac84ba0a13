// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumb hit testing for the frame-range control.
//!
//! The control has five logical thumbs. The min and max thumbs sit in the
//! lower band (at or below [`ThumbGeometry::primary_band_top`]) and are drawn
//! just outside the selection: the min thumb half a thumb to the left of its
//! position, the max thumb half a thumb to the right. The slow-motion thumbs
//! sit in the upper band. The path thumb spans the full height.
//!
//! While playing only the path thumb can be pressed. Otherwise the primary
//! thumbs win over the slow-motion thumbs.
//!
//! ```
//! use kurbo::Point;
//! use understory_seek::config::ThumbGeometry;
//! use understory_seek::hit::{HitMode, HitTester, Thumb};
//! use understory_seek::layout::TrackLayout;
//! use understory_seek::range::{RangeState, SlowRangeState};
//!
//! let tester = HitTester::new(
//!     TrackLayout::with_padding(1000.0, 300.0, 100.0),
//!     ThumbGeometry::default(),
//! );
//! let state = RangeState { min: 0.25, max: 0.75, current: 0.25 };
//! let slow = SlowRangeState { slow_min: 0.25, slow_max: 0.75 };
//!
//! let min_x = tester.thumb_center_x(Thumb::Min, &state, &slow);
//! let hit = tester.evaluate(Point::new(min_x, 200.0), &state, &slow, HitMode::default());
//! assert_eq!(hit, Some(Thumb::Min));
//!
//! // Above the primary band nothing is hit unless slow motion is on.
//! let miss = tester.evaluate(Point::new(min_x, 10.0), &state, &slow, HitMode::default());
//! assert_eq!(miss, None);
//! ```

use kurbo::Point;

use crate::config::ThumbGeometry;
use crate::layout::TrackLayout;
use crate::range::{RangeState, SlowRangeState};

/// A logical thumb of the frame-range control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Thumb {
    /// Selection start.
    Min,
    /// Selection end.
    Max,
    /// Playback position.
    Path,
    /// Slow-motion start.
    SlowMin,
    /// Slow-motion end.
    SlowMax,
}

impl Thumb {
    /// Returns `true` for the slow-motion thumbs.
    #[must_use]
    pub fn is_slow(self) -> bool {
        matches!(self, Self::SlowMin | Self::SlowMax)
    }
}

/// Which thumbs are currently pressable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HitMode {
    /// Playback is running; only the path thumb responds.
    pub playing: bool,
    /// The slow-motion thumbs are shown.
    pub slow_motion: bool,
}

/// Resolves a touch point to a thumb.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HitTester {
    /// Track geometry.
    pub layout: TrackLayout,
    /// Thumb extents and bands.
    pub geometry: ThumbGeometry,
}

impl HitTester {
    /// Creates a tester for the given layout and thumb geometry.
    #[must_use]
    pub fn new(layout: TrackLayout, geometry: ThumbGeometry) -> Self {
        Self { layout, geometry }
    }

    /// Screen x of a thumb's center.
    #[must_use]
    pub fn thumb_center_x(&self, thumb: Thumb, state: &RangeState, slow: &SlowRangeState) -> f64 {
        let half = self.geometry.half_width;
        match thumb {
            Thumb::Min => self.layout.normalized_to_screen(state.min) - half,
            Thumb::Max => self.layout.normalized_to_screen(state.max) + half,
            Thumb::Path => self.layout.normalized_to_screen(state.current),
            Thumb::SlowMin => self.layout.normalized_to_screen(slow.slow_min),
            Thumb::SlowMax => self.layout.normalized_to_screen(slow.slow_max),
        }
    }

    /// Picks the thumb under `point`, if any.
    ///
    /// When the min and max thumbs overlap, the touch's side of the view
    /// decides: the right half picks `Max`, the left half `Min`. When both
    /// slow-motion thumbs are hit, `SlowMin` is picked only if it is farther
    /// from the touch than `SlowMax`.
    #[must_use]
    pub fn evaluate(
        &self,
        point: Point,
        state: &RangeState,
        slow: &SlowRangeState,
        mode: HitMode,
    ) -> Option<Thumb> {
        let half = self.geometry.half_width;
        let dx = |thumb| (point.x - self.thumb_center_x(thumb, state, slow)).abs();

        if mode.playing {
            return (dx(Thumb::Path) <= half).then_some(Thumb::Path);
        }

        let in_primary_band = point.y >= self.geometry.primary_band_top;
        let min_hit = in_primary_band && dx(Thumb::Min) <= half;
        let max_hit = in_primary_band && dx(Thumb::Max) <= half;
        match (min_hit, max_hit) {
            (true, true) => {
                let width = self.layout.width();
                let right_half = width > 0.0 && point.x / width > 0.5;
                return Some(if right_half { Thumb::Max } else { Thumb::Min });
            }
            (true, false) => return Some(Thumb::Min),
            (false, true) => return Some(Thumb::Max),
            (false, false) => {}
        }

        if !mode.slow_motion || point.y > self.geometry.slow_band_bottom() {
            return None;
        }
        let reach = 2.0 * self.geometry.slow_half_width;
        let slow_min_distance = dx(Thumb::SlowMin);
        let slow_max_distance = dx(Thumb::SlowMax);
        match (slow_min_distance <= reach, slow_max_distance <= reach) {
            (true, true) => Some(if slow_min_distance > slow_max_distance {
                Thumb::SlowMin
            } else {
                Thumb::SlowMax
            }),
            (true, false) => Some(Thumb::SlowMin),
            (false, true) => Some(Thumb::SlowMax),
            (false, false) => None,
        }
    }
}
