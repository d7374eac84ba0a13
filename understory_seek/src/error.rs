// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for fallible configuration calls.

use alloc::string::String;

use thiserror::Error;

/// Errors reported by the seek controls.
///
/// None of these are raised while a pointer gesture is being tracked; they
/// only surface from configuration calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeekError {
    /// A numeric kind name or value is not one of the supported domain types.
    #[error("number type '{name}' is not supported")]
    UnsupportedDomainType {
        /// The rejected type name or literal.
        name: String,
    },
    /// A tick index outside `0..=max`.
    #[error("tick index {index} is out of range 0..={max}")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// The largest valid index.
        max: usize,
    },
    /// A major tick count below 2.
    #[error("tick count {count} is invalid; at least 2 ticks are required")]
    InvalidTickCount {
        /// The rejected count.
        count: usize,
    },
    /// A child tick count below 1.
    #[error("child tick count {count} is invalid; at least 1 subdivision is required")]
    InvalidChildTickCount {
        /// The rejected count.
        count: usize,
    },
}

/// Result alias for fallible seek control operations.
pub type Result<T> = core::result::Result<T, SeekError>;
