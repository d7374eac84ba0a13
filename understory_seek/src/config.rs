// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-facing configuration for the seek controls.
//!
//! Values here are set by the host (from code or from a declarative layout)
//! and are never changed by the controls themselves.

use crate::numeric::DomainValue;

/// Minimum normalized gap between the slow-motion thumbs.
pub const SLOW_RANGE_GAP: f64 = 0.1;

/// Default internal padding on each side of the frame-range track.
pub const DEFAULT_INTERNAL_PADDING: f64 = 50.0;

/// Default distance a pointer must travel before a press becomes a drag.
pub const DEFAULT_TOUCH_SLOP: f64 = 8.0;

/// Default y at which the primary thumb band starts (the top of the frame strip).
pub const DEFAULT_PRIMARY_BAND_TOP: f64 = 120.0;

/// Configuration for a [`FrameRangeSeekBar`](crate::frame::FrameRangeSeekBar).
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRangeConfig<V> {
    /// Smallest selectable value.
    pub absolute_min: V,
    /// Largest selectable value.
    pub absolute_max: V,
    /// Granularity of reported values.
    pub step: V,
    /// Whether the slow-motion sub-range is active.
    pub slow_motion: bool,
    /// Initial slow-motion sub-range, in domain values.
    pub slow_range: (V, V),
    /// Padding on each side of the track, before thumb extents are added.
    pub internal_padding: f64,
    /// Horizontal travel before a press turns into a drag.
    pub touch_slop: f64,
}

impl<V: DomainValue> Default for FrameRangeConfig<V> {
    fn default() -> Self {
        Self {
            absolute_min: V::from_f64(0.0),
            absolute_max: V::from_f64(100.0),
            step: V::from_f64(1.0),
            slow_motion: false,
            slow_range: (V::from_f64(30.0), V::from_f64(60.0)),
            internal_padding: DEFAULT_INTERNAL_PADDING,
            touch_slop: DEFAULT_TOUCH_SLOP,
        }
    }
}

impl<V: DomainValue> FrameRangeConfig<V> {
    /// Default configuration over `[min, max]` with the given step.
    #[must_use]
    pub fn with_bounds(min: V, max: V, step: V) -> Self {
        Self {
            absolute_min: min,
            absolute_max: max,
            step,
            ..Self::default()
        }
    }
}

/// Thumb extents and vertical hit bands for the frame-range control.
///
/// Primary (min/max) thumbs only hit at or below [`primary_band_top`](Self::primary_band_top).
/// Slow-motion thumbs only hit at or above [`slow_band_bottom`](Self::slow_band_bottom).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThumbGeometry {
    /// Half width of the min/max thumbs. Also used for the path thumb.
    pub half_width: f64,
    /// Half height of the min/max thumbs.
    pub half_height: f64,
    /// Half width of the slow-motion thumbs.
    pub slow_half_width: f64,
    /// Half height of the slow-motion thumbs.
    pub slow_half_height: f64,
    /// Top of the primary thumb band.
    pub primary_band_top: f64,
}

impl Default for ThumbGeometry {
    fn default() -> Self {
        Self {
            half_width: 12.0,
            half_height: 40.0,
            slow_half_width: 12.0,
            slow_half_height: 18.0,
            primary_band_top: DEFAULT_PRIMARY_BAND_TOP,
        }
    }
}

impl ThumbGeometry {
    /// Bottom of the slow-motion thumb band.
    #[must_use]
    pub fn slow_band_bottom(&self) -> f64 {
        2.0 * self.slow_half_height
    }
}

/// Configuration for a [`TickRangeBar`](crate::tick_bar::TickRangeBar).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickBarConfig {
    /// Number of major ticks, including both ends. At least 2.
    pub tick_count: usize,
    /// Subdivisions between two major ticks. At least 1.
    pub child_tick_count: usize,
    /// Half width of the thumb's touch area.
    pub thumb_half_width: f64,
    /// Half height of the thumb's touch area.
    pub thumb_half_height: f64,
    /// Horizontal travel before a press turns into a drag.
    pub touch_slop: f64,
}

impl Default for TickBarConfig {
    fn default() -> Self {
        Self {
            tick_count: 2,
            child_tick_count: 1,
            thumb_half_width: 16.0,
            thumb_half_height: 16.0,
            touch_slop: DEFAULT_TOUCH_SLOP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_defaults() {
        let config = FrameRangeConfig::<i32>::default();
        assert_eq!(config.absolute_min, 0);
        assert_eq!(config.absolute_max, 100);
        assert_eq!(config.step, 1);
        assert_eq!(config.slow_range, (30, 60));
        assert!(!config.slow_motion);
        assert_eq!(config.internal_padding, 50.0);
    }

    #[test]
    fn slow_band_is_twice_slow_half_height() {
        let geometry = ThumbGeometry {
            slow_half_height: 25.0,
            ..ThumbGeometry::default()
        };
        assert_eq!(geometry.slow_band_bottom(), 50.0);
    }

    #[test]
    fn with_bounds_keeps_other_defaults() {
        let config = FrameRangeConfig::with_bounds(-1.0_f64, 1.0, 0.25);
        assert_eq!(config.absolute_min, -1.0);
        assert_eq!(config.step, 0.25);
        assert_eq!(config.touch_slop, DEFAULT_TOUCH_SLOP);
    }
}
