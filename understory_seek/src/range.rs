// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Normalized range model: the `[0, 1]` state behind a frame-range control.
//!
//! [`RangeModel`] owns five normalized positions:
//!
//! - `min` and `max`, the selected primary range, with `0 <= min <= max <= 1`;
//! - `current`, the playback position, kept in `[0, max]`;
//! - `slow_min` and `slow_max`, the slow-motion sub-range.
//!
//! While slow motion is enabled the sub-range stays inside `[min, max]` and
//! keeps at least [`SLOW_RANGE_GAP`] between its ends. While it is disabled
//! the sub-range is collapsed onto `[min, max]`.
//!
//! Every setter is total: out-of-range input is clamped, never rejected.
//! Every setter also bumps [`RangeModel::revision`] and raises the redraw
//! flag read by [`RangeModel::take_redraw`].
//!
//! Conversions to and from domain values go through [`AbsoluteBounds`].
//! Reported ("selected") values are rounded to two decimals and then to the
//! step; the normalized state itself is never quantized.
//!
//! ```
//! use understory_seek::range::{AbsoluteBounds, RangeModel};
//!
//! let mut model = RangeModel::new(AbsoluteBounds::new(0_i32, 100, 1));
//! model.set_selected_min(&20);
//! model.set_selected_max(&80);
//! assert_eq!(model.selected_min(), 20);
//! assert_eq!(model.selected_max(), 80);
//!
//! // Max can never drop below min.
//! model.set_max(0.1);
//! assert_eq!(model.state().max, model.state().min);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

use crate::config::SLOW_RANGE_GAP;
use crate::numeric::{DomainValue, NumericKind, round_to_step};

/// Absolute domain bounds and step of a range.
#[derive(Clone, Debug, PartialEq)]
pub struct AbsoluteBounds<V> {
    min: V,
    max: V,
    step: V,
    min_f: f64,
    max_f: f64,
    step_f: f64,
}

impl<V: DomainValue> AbsoluteBounds<V> {
    /// Creates bounds over `[min, max]` reporting multiples of `step`.
    ///
    /// `step` is expected to be positive. `min == max` is allowed and
    /// normalizes every value to `0.0`.
    #[must_use]
    pub fn new(min: V, max: V, step: V) -> Self {
        let min_f = min.to_f64();
        let max_f = max.to_f64();
        let step_f = step.to_f64();
        Self {
            min,
            max,
            step,
            min_f,
            max_f,
            step_f,
        }
    }

    /// Smallest domain value.
    #[must_use]
    pub fn min(&self) -> &V {
        &self.min
    }

    /// Largest domain value.
    #[must_use]
    pub fn max(&self) -> &V {
        &self.max
    }

    /// Step between reported values.
    #[must_use]
    pub fn step(&self) -> &V {
        &self.step
    }

    /// Numeric kind of the domain.
    #[must_use]
    pub fn kind(&self) -> NumericKind {
        V::KIND
    }

    /// Returns `true` when `min == max`.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.max_f - self.min_f == 0.0
    }

    /// Maps a domain value to normalized space, `0.0` for degenerate bounds.
    ///
    /// The result is not clamped.
    #[must_use]
    pub fn value_to_normalized(&self, value: &V) -> f64 {
        if self.is_degenerate() {
            return 0.0;
        }
        (value.to_f64() - self.min_f) / (self.max_f - self.min_f)
    }

    /// Maps a normalized position to a domain value rounded to two decimals.
    #[must_use]
    pub fn normalized_to_value(&self, normalized: f64) -> V {
        let v = self.min_f + normalized * (self.max_f - self.min_f);
        V::from_f64((v * 100.0).round() / 100.0)
    }

    /// Rounds `value` to the nearest step and clamps it into the bounds.
    #[must_use]
    pub fn round_to_step(&self, value: &V) -> V {
        V::from_f64(round_to_step(
            value.to_f64(),
            self.min_f,
            self.max_f,
            self.step_f,
        ))
    }

    /// The externally reported value for a normalized position.
    #[must_use]
    pub fn selected_value(&self, normalized: f64) -> V {
        self.round_to_step(&self.normalized_to_value(normalized))
    }
}

/// The selected primary range and playback position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeState {
    /// Normalized start of the selection.
    pub min: f64,
    /// Normalized end of the selection.
    pub max: f64,
    /// Normalized playback position.
    pub current: f64,
}

impl Default for RangeState {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            current: 0.0,
        }
    }
}

/// The slow-motion sub-range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlowRangeState {
    /// Normalized start of the sub-range.
    pub slow_min: f64,
    /// Normalized end of the sub-range.
    pub slow_max: f64,
}

impl Default for SlowRangeState {
    fn default() -> Self {
        Self {
            slow_min: 0.0,
            slow_max: 1.0,
        }
    }
}

/// Normalized state of a frame-range control plus its domain bounds.
#[derive(Clone, Debug)]
pub struct RangeModel<V> {
    bounds: AbsoluteBounds<V>,
    state: RangeState,
    slow: SlowRangeState,
    slow_motion: bool,
    revision: u64,
    redraw: bool,
}

impl<V: DomainValue> RangeModel<V> {
    /// Creates a model selecting the full range, with slow motion disabled.
    #[must_use]
    pub fn new(bounds: AbsoluteBounds<V>) -> Self {
        Self {
            bounds,
            state: RangeState::default(),
            slow: SlowRangeState::default(),
            slow_motion: false,
            revision: 0,
            redraw: false,
        }
    }

    /// Domain bounds.
    #[must_use]
    pub fn bounds(&self) -> &AbsoluteBounds<V> {
        &self.bounds
    }

    /// Replaces the domain bounds. Normalized state is left untouched.
    pub fn set_bounds(&mut self, bounds: AbsoluteBounds<V>) {
        if bounds.is_degenerate() {
            tracing::trace!(kind = %bounds.kind(), "degenerate absolute bounds");
        }
        self.bounds = bounds;
        self.request_redraw();
    }

    /// Primary range and playback position.
    #[must_use]
    pub fn state(&self) -> RangeState {
        self.state
    }

    /// Slow-motion sub-range.
    #[must_use]
    pub fn slow(&self) -> SlowRangeState {
        self.slow
    }

    /// Returns `true` while slow motion is enabled.
    #[must_use]
    pub fn is_slow_motion(&self) -> bool {
        self.slow_motion
    }

    /// Counter bumped by every mutation.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns and clears the redraw request.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.redraw)
    }

    /// Bumps the revision and raises the redraw flag without changing state.
    pub fn request_redraw(&mut self) {
        self.revision = self.revision.wrapping_add(1);
        self.redraw = true;
    }

    /// Sets the normalized selection start.
    ///
    /// The value is clamped to `[0, 1]` and may not exceed `max`. With slow
    /// motion enabled it may also not exceed `slow_max - SLOW_RANGE_GAP`.
    pub fn set_min(&mut self, normalized: f64) {
        let ceiling = if self.slow_motion {
            (self.slow.slow_max - SLOW_RANGE_GAP).min(self.state.max)
        } else {
            self.state.max
        };
        self.state.min = normalized.min(ceiling).min(1.0).max(0.0);
        self.settle_slow_range();
        self.request_redraw();
    }

    /// Sets the normalized selection end.
    ///
    /// The value is clamped to `[0, 1]` and may not drop below `min`. With
    /// slow motion enabled it may also not drop below `slow_min + SLOW_RANGE_GAP`.
    pub fn set_max(&mut self, normalized: f64) {
        let floor = if self.slow_motion {
            (self.slow.slow_min + SLOW_RANGE_GAP).max(self.state.min)
        } else {
            self.state.min
        };
        self.state.max = normalized.max(floor).min(1.0).max(0.0);
        if self.state.current > self.state.max {
            self.state.current = self.state.max;
        }
        self.settle_slow_range();
        self.request_redraw();
    }

    /// Sets the normalized playback position, clamped into `[0, max]`.
    pub fn set_current(&mut self, normalized: f64) {
        self.state.current = normalized.min(self.state.max).min(1.0).max(0.0);
        self.request_redraw();
    }

    /// Sets the slow-motion start, clamped into `[min, min(max, slow_max - SLOW_RANGE_GAP)]`.
    ///
    /// With slow motion disabled the sub-range stays collapsed onto `[min, max]`.
    pub fn set_slow_min(&mut self, normalized: f64) {
        if self.slow_motion {
            self.apply_slow_min(normalized);
        } else {
            self.collapse_slow_range();
        }
        self.request_redraw();
    }

    /// Sets the slow-motion end, clamped into `[max(min, slow_min + SLOW_RANGE_GAP), max]`.
    ///
    /// With slow motion disabled the sub-range stays collapsed onto `[min, max]`.
    pub fn set_slow_max(&mut self, normalized: f64) {
        if self.slow_motion {
            self.apply_slow_max(normalized);
        } else {
            self.collapse_slow_range();
        }
        self.request_redraw();
    }

    /// Sets both slow-motion ends.
    ///
    /// The end that would otherwise block the other is applied first, so a
    /// sub-range can be moved past its old position in one call.
    pub fn set_slow_range(&mut self, slow_min: f64, slow_max: f64) {
        if !self.slow_motion {
            self.collapse_slow_range();
        } else if slow_min + SLOW_RANGE_GAP > self.slow.slow_max {
            self.apply_slow_max(slow_max);
            self.apply_slow_min(slow_min);
        } else {
            self.apply_slow_min(slow_min);
            self.apply_slow_max(slow_max);
        }
        self.request_redraw();
    }

    /// Enables or disables slow motion.
    ///
    /// Enabling fits the sub-range inside `[min, max]` with the minimum gap,
    /// widening the primary range first if it is narrower than the gap.
    /// Disabling collapses the sub-range onto `[min, max]`.
    pub fn set_slow_motion(&mut self, enabled: bool) {
        self.slow_motion = enabled;
        if !enabled {
            self.collapse_slow_range();
            self.request_redraw();
            return;
        }

        if self.state.max - self.state.min < SLOW_RANGE_GAP {
            let max = (self.state.min + SLOW_RANGE_GAP).min(1.0);
            self.state.max = max;
            self.state.min = (max - SLOW_RANGE_GAP).max(0.0);
            self.state.current = self.state.current.min(self.state.max);
        }
        let (min, max) = (self.state.min, self.state.max);
        let slow_min = self.slow.slow_min.min(max - SLOW_RANGE_GAP).max(min);
        let slow_max = self.slow.slow_max.max(slow_min + SLOW_RANGE_GAP).min(max);
        self.slow = SlowRangeState { slow_min, slow_max };
        self.request_redraw();
    }

    /// Re-asserts the sub-range against the primary range.
    ///
    /// A sub-range end pushed outside `[min, max]` is pulled back onto the
    /// primary range. With slow motion disabled the sub-range is collapsed.
    pub fn settle_slow_range(&mut self) {
        if !self.slow_motion {
            self.collapse_slow_range();
            return;
        }
        if self.state.min > self.slow.slow_min {
            self.apply_slow_min(self.state.min);
        }
        if self.state.max < self.slow.slow_max {
            self.apply_slow_max(self.state.max);
        }
    }

    /// Sets `min` from a domain value; degenerate bounds select `0.0`.
    pub fn set_selected_min(&mut self, value: &V) {
        let normalized = if self.bounds.is_degenerate() {
            0.0
        } else {
            self.bounds.value_to_normalized(value)
        };
        self.set_min(normalized);
    }

    /// Sets `max` from a domain value; degenerate bounds select `1.0`.
    pub fn set_selected_max(&mut self, value: &V) {
        let normalized = if self.bounds.is_degenerate() {
            1.0
        } else {
            self.bounds.value_to_normalized(value)
        };
        self.set_max(normalized);
    }

    /// Sets both slow-motion ends from domain values.
    pub fn set_selected_slow_range(&mut self, slow_min: &V, slow_max: &V) {
        let lo = self.bounds.value_to_normalized(slow_min);
        let hi = self.bounds.value_to_normalized(slow_max);
        self.set_slow_range(lo, hi);
    }

    /// Reported selection start.
    #[must_use]
    pub fn selected_min(&self) -> V {
        self.bounds.selected_value(self.state.min)
    }

    /// Reported selection end.
    #[must_use]
    pub fn selected_max(&self) -> V {
        self.bounds.selected_value(self.state.max)
    }

    /// Reported playback position.
    #[must_use]
    pub fn selected_current(&self) -> V {
        self.bounds.selected_value(self.state.current)
    }

    /// Reported slow-motion start.
    #[must_use]
    pub fn selected_slow_min(&self) -> V {
        self.bounds.selected_value(self.slow.slow_min)
    }

    /// Reported slow-motion end.
    #[must_use]
    pub fn selected_slow_max(&self) -> V {
        self.bounds.selected_value(self.slow.slow_max)
    }

    /// Returns `true` when the full range is selected.
    #[must_use]
    pub fn selected_values_are_default(&self) -> bool {
        self.state.min <= 0.0 && self.state.max >= 1.0
    }

    fn apply_slow_min(&mut self, normalized: f64) {
        self.slow.slow_min = normalized
            .min(self.slow.slow_max - SLOW_RANGE_GAP)
            .min(self.state.max)
            .max(self.state.min);
    }

    fn apply_slow_max(&mut self, normalized: f64) {
        self.slow.slow_max = normalized
            .max(self.slow.slow_min + SLOW_RANGE_GAP)
            .min(self.state.max)
            .max(self.state.min);
    }

    fn collapse_slow_range(&mut self) {
        self.slow = SlowRangeState {
            slow_min: self.state.min,
            slow_max: self.state.max,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn model() -> RangeModel<i32> {
        RangeModel::new(AbsoluteBounds::new(0, 100, 1))
    }

    #[test]
    fn new_model_selects_everything() {
        let m = model();
        assert_eq!(m.state(), RangeState::default());
        assert!(m.selected_values_are_default());
        assert_eq!(m.selected_min(), 0);
        assert_eq!(m.selected_max(), 100);
    }

    #[test]
    fn selected_values_round_trip_through_domain() {
        let mut m = model();
        m.set_selected_min(&20);
        m.set_selected_max(&80);
        assert_eq!(m.selected_min(), 20);
        assert_eq!(m.selected_max(), 80);
        assert!(!m.selected_values_are_default());
    }

    #[test]
    fn min_cannot_pass_max() {
        let mut m = model();
        m.set_max(0.4);
        m.set_min(0.9);
        assert!((m.state().min - 0.4).abs() < EPS);
    }

    #[test]
    fn max_cannot_drop_below_min() {
        let mut m = model();
        m.set_min(0.5);
        m.set_max(0.1);
        assert_eq!(m.state().max, 0.5);
        assert!(m.state().min <= m.state().max);
    }

    #[test]
    fn setters_clamp_to_unit_interval() {
        let mut m = model();
        m.set_min(-3.0);
        m.set_max(7.0);
        assert_eq!(m.state().min, 0.0);
        assert_eq!(m.state().max, 1.0);
    }

    #[test]
    fn current_stays_below_max() {
        let mut m = model();
        m.set_max(0.6);
        m.set_current(0.9);
        assert_eq!(m.state().current, 0.6);
        m.set_current(-1.0);
        assert_eq!(m.state().current, 0.0);

        m.set_current(0.5);
        m.set_max(0.3);
        assert_eq!(m.state().current, 0.3);
    }

    #[test]
    fn slow_range_is_collapsed_while_disabled() {
        let mut m = model();
        m.set_min(0.2);
        m.set_max(0.7);
        m.set_slow_range(0.3, 0.5);
        assert_eq!(m.slow().slow_min, 0.2);
        assert_eq!(m.slow().slow_max, 0.7);
    }

    #[test]
    fn slow_range_values_with_slow_motion() {
        let mut m = model();
        m.set_slow_motion(true);
        m.set_selected_min(&20);
        m.set_selected_max(&80);
        m.set_selected_slow_range(&30, &60);
        assert_eq!(m.selected_slow_min(), 30);
        assert_eq!(m.selected_slow_max(), 60);
        assert_eq!(m.selected_min(), 20);
        assert_eq!(m.selected_max(), 80);
    }

    #[test]
    fn slow_range_can_jump_past_itself() {
        let mut m = model();
        m.set_slow_motion(true);
        m.set_slow_range(0.1, 0.3);
        m.set_slow_range(0.6, 0.9);
        assert!((m.slow().slow_min - 0.6).abs() < EPS);
        assert!((m.slow().slow_max - 0.9).abs() < EPS);
    }

    #[test]
    fn slow_min_keeps_gap() {
        let mut m = model();
        m.set_slow_motion(true);
        m.set_slow_range(0.3, 0.5);
        m.set_slow_min(0.48);
        assert!((m.slow().slow_min - 0.4).abs() < EPS);
        m.set_slow_max(0.1);
        assert!((m.slow().slow_max - 0.5).abs() < EPS);
    }

    #[test]
    fn primary_range_respects_slow_gap() {
        let mut m = model();
        m.set_slow_motion(true);
        m.set_slow_range(0.3, 0.5);
        m.set_min(0.9);
        assert!((m.state().min - 0.4).abs() < EPS);
        assert!((m.slow().slow_min - 0.4).abs() < EPS);
        m.set_max(0.0);
        assert!((m.state().max - 0.5).abs() < EPS);
    }

    #[test]
    fn enabling_slow_motion_widens_narrow_range() {
        let mut m = model();
        m.set_max(0.5);
        m.set_min(0.48);
        m.set_slow_motion(true);
        let state = m.state();
        assert!(state.max - state.min >= SLOW_RANGE_GAP - EPS);
        assert!((m.slow().slow_min - state.min).abs() < EPS);
        assert!((m.slow().slow_max - state.max).abs() < EPS);
    }

    #[test]
    fn enabling_slow_motion_near_the_end_widens_downward() {
        let mut m = model();
        m.set_min(1.0);
        m.set_slow_motion(true);
        assert_eq!(m.state().max, 1.0);
        assert!((m.state().min - 0.9).abs() < EPS);
    }

    #[test]
    fn disabling_slow_motion_collapses() {
        let mut m = model();
        m.set_slow_motion(true);
        m.set_slow_range(0.3, 0.5);
        m.set_slow_motion(false);
        assert_eq!(m.slow().slow_min, m.state().min);
        assert_eq!(m.slow().slow_max, m.state().max);
    }

    #[test]
    fn degenerate_bounds_fall_back() {
        let mut m = RangeModel::new(AbsoluteBounds::new(50_i32, 50, 1));
        m.set_selected_max(&12);
        m.set_selected_min(&99);
        assert_eq!(m.state().min, 0.0);
        assert_eq!(m.state().max, 1.0);
        assert_eq!(m.bounds().value_to_normalized(&70), 0.0);
        assert_eq!(m.selected_min(), 50);
        assert_eq!(m.selected_max(), 50);
    }

    #[test]
    fn reported_values_round_to_step() {
        let mut m = RangeModel::new(AbsoluteBounds::new(0.0_f64, 10.0, 0.5));
        m.set_min(0.123);
        assert_eq!(m.bounds().normalized_to_value(0.123), 1.23);
        assert_eq!(m.selected_min(), 1.0);
        m.set_max(0.88);
        assert_eq!(m.selected_max(), 9.0);
    }

    #[test]
    fn setters_bump_revision_and_request_redraw() {
        let mut m = model();
        assert!(!m.take_redraw());
        let before = m.revision();
        m.set_min(0.1);
        m.set_min(0.1);
        assert_eq!(m.revision(), before + 2);
        assert!(m.take_redraw());
        assert!(!m.take_redraw());
    }

    #[test]
    fn bounds_change_keeps_normalized_state() {
        let mut m = model();
        m.set_min(0.25);
        m.set_bounds(AbsoluteBounds::new(0, 1000, 10));
        assert_eq!(m.state().min, 0.25);
        assert_eq!(m.selected_min(), 250);
    }
}
