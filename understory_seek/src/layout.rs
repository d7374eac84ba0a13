// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track layout: map between screen x coordinates and normalized positions.
//!
//! A track spans `[padding, width - padding]` horizontally. Normalized `0.0`
//! sits at the left end of that span and `1.0` at the right end.
//!
//! ```
//! use understory_seek::layout::TrackLayout;
//!
//! // 400px wide, 50px internal padding, 10px thumb half width.
//! let layout = TrackLayout::new(400.0, 200.0, 50.0, 10.0);
//! assert_eq!(layout.padding(), 70.0);
//! assert_eq!(layout.normalized_to_screen(0.5), 200.0);
//! assert_eq!(layout.screen_to_normalized(70.0), 0.0);
//! assert_eq!(layout.screen_to_normalized(1000.0), 1.0);
//! ```

/// Horizontal geometry of a seek track.
///
/// The default layout is zero-sized and therefore degenerate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackLayout {
    width: f64,
    height: f64,
    padding: f64,
}

impl TrackLayout {
    /// Creates a layout whose effective padding leaves room for a full thumb
    /// on each side: `internal_padding + 2 * thumb_half_width`.
    #[must_use]
    pub fn new(width: f64, height: f64, internal_padding: f64, thumb_half_width: f64) -> Self {
        Self::with_padding(width, height, internal_padding + 2.0 * thumb_half_width)
    }

    /// Creates a layout with an explicit effective padding.
    #[must_use]
    pub fn with_padding(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// View width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// View height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Effective padding on each side of the track.
    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Length of the track between the paddings. Never negative.
    #[must_use]
    pub fn track_length(&self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    /// Returns `true` when the paddings leave no room for a track.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 2.0 * self.padding
    }

    /// Screen x of a normalized position.
    #[must_use]
    pub fn normalized_to_screen(&self, normalized: f64) -> f64 {
        self.padding + normalized * (self.width - 2.0 * self.padding)
    }

    /// Normalized position of a screen x, clamped to `[0, 1]`.
    ///
    /// A degenerate layout maps every x to `0.0`.
    #[must_use]
    pub fn screen_to_normalized(&self, x: f64) -> f64 {
        if self.is_degenerate() {
            tracing::trace!(width = self.width, padding = self.padding, "degenerate track layout");
            return 0.0;
        }
        ((x - self.padding) / (self.width - 2.0 * self.padding)).clamp(0.0, 1.0)
    }
}
