// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric domain: the value types a seek control can report.
//!
//! Controls compute in `f64` internally and convert to and from the host's
//! value type at the edges. The set of supported value types is closed:
//! [`DomainValue`] is sealed and implemented for exactly the seven
//! representations listed in [`NumericKind`].
//!
//! Hosts that only learn the value type at runtime (for example from a
//! declarative layout file) can use [`NumericKind`]'s `FromStr` impl and the
//! dynamic [`NumericValue`] enum.
//!
//! ```
//! use understory_seek::numeric::{DomainValue, NumericKind, round_to_step};
//!
//! assert_eq!(i32::KIND, NumericKind::Integer);
//! assert_eq!(i32::from_f64(41.6), 42);
//! assert_eq!("f32".parse::<NumericKind>(), Ok(NumericKind::Float));
//! assert!("u128".parse::<NumericKind>().is_err());
//!
//! assert_eq!(round_to_step(23.0, 0.0, 100.0, 5.0), 25.0);
//! ```

use alloc::format;
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use bigdecimal::BigDecimal;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use num_traits::Zero;

use crate::error::{Result, SeekError};

/// The closed set of numeric representations a control can be configured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumericKind {
    /// 64-bit signed integer.
    Long,
    /// 64-bit float.
    Double,
    /// 32-bit signed integer.
    Integer,
    /// 32-bit float.
    Float,
    /// 16-bit signed integer.
    Short,
    /// 8-bit signed integer.
    Byte,
    /// Arbitrary-precision decimal.
    BigDecimal,
}

impl NumericKind {
    /// All supported kinds.
    pub const ALL: [Self; 7] = [
        Self::Long,
        Self::Double,
        Self::Integer,
        Self::Float,
        Self::Short,
        Self::Byte,
        Self::BigDecimal,
    ];

    /// The kind associated with a statically known value type.
    #[must_use]
    pub fn of<V: DomainValue>() -> Self {
        V::KIND
    }

    /// Converts `value` into this kind.
    ///
    /// Integer kinds round to the nearest integer and saturate at the type's
    /// bounds; range checking is left to the caller's absolute bounds.
    #[must_use]
    pub fn convert(self, value: f64) -> NumericValue {
        match self {
            Self::Long => NumericValue::Long(i64::from_f64(value)),
            Self::Double => NumericValue::Double(value),
            Self::Integer => NumericValue::Integer(i32::from_f64(value)),
            Self::Float => NumericValue::Float(f32::from_f64(value)),
            Self::Short => NumericValue::Short(i16::from_f64(value)),
            Self::Byte => NumericValue::Byte(i8::from_f64(value)),
            Self::BigDecimal => {
                NumericValue::BigDecimal(<BigDecimal as DomainValue>::from_f64(value))
            }
        }
    }

    /// Returns `true` for the integral kinds.
    #[must_use]
    pub fn is_integral(self) -> bool {
        matches!(self, Self::Long | Self::Integer | Self::Short | Self::Byte)
    }

    /// Canonical lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Double => "double",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Short => "short",
            Self::Byte => "byte",
            Self::BigDecimal => "big_decimal",
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NumericKind {
    type Err = SeekError;

    fn from_str(s: &str) -> Result<Self> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "long" | "i64" => Self::Long,
            "double" | "f64" => Self::Double,
            "integer" | "int" | "i32" => Self::Integer,
            "float" | "f32" => Self::Float,
            "short" | "i16" => Self::Short,
            "byte" | "i8" => Self::Byte,
            "big_decimal" | "bigdecimal" | "decimal" => Self::BigDecimal,
            _ => {
                return Err(SeekError::UnsupportedDomainType {
                    name: s.to_string(),
                });
            }
        };
        Ok(kind)
    }
}

mod sealed {
    #[allow(unnameable_types, reason = "sealed trait; only nameable inside this crate")]
    pub trait Sealed {}

    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for i32 {}
    impl Sealed for f32 {}
    impl Sealed for i16 {}
    impl Sealed for i8 {}
    impl Sealed for bigdecimal::BigDecimal {}
}

/// A value type a seek control can report.
///
/// Implemented for `i64`, `f64`, `i32`, `f32`, `i16`, `i8` and
/// [`BigDecimal`]. The trait is sealed.
pub trait DomainValue: Clone + PartialEq + fmt::Debug + sealed::Sealed {
    /// The kind tag for this representation.
    const KIND: NumericKind;

    /// Widens the value to `f64`.
    fn to_f64(&self) -> f64;

    /// Narrows an `f64` into this representation.
    fn from_f64(value: f64) -> Self;
}

macro_rules! integral_domain_value {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl DomainValue for $ty {
                const KIND: NumericKind = NumericKind::$kind;

                fn to_f64(&self) -> f64 {
                    f64::from(*self)
                }

                #[expect(
                    clippy::cast_possible_truncation,
                    reason = "narrowing saturates; callers clamp against absolute bounds"
                )]
                fn from_f64(value: f64) -> Self {
                    value.round() as $ty
                }
            }
        )*
    };
}

integral_domain_value!(i32 => Integer, i16 => Short, i8 => Byte);

impl DomainValue for i64 {
    const KIND: NumericKind = NumericKind::Long;

    // Values beyond 2^53 lose precision; seek bars never get there.
    fn to_f64(&self) -> f64 {
        *self as f64
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "narrowing saturates; callers clamp against absolute bounds"
    )]
    fn from_f64(value: f64) -> Self {
        value.round() as Self
    }
}

impl DomainValue for f64 {
    const KIND: NumericKind = NumericKind::Double;

    fn to_f64(&self) -> f64 {
        *self
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

impl DomainValue for f32 {
    const KIND: NumericKind = NumericKind::Float;

    fn to_f64(&self) -> f64 {
        f64::from(*self)
    }

    #[expect(
        clippy::cast_possible_truncation,
        reason = "f32 domains accept the precision loss"
    )]
    fn from_f64(value: f64) -> Self {
        value as Self
    }
}

impl DomainValue for BigDecimal {
    const KIND: NumericKind = NumericKind::BigDecimal;

    fn to_f64(&self) -> f64 {
        num_traits::ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }

    /// Uses the shortest decimal string that round-trips `value`, so `0.1`
    /// becomes exactly `0.1` rather than its binary expansion.
    fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::zero();
        }
        format!("{value}").parse().unwrap_or_else(|_| Self::zero())
    }
}

/// A numeric value whose kind is only known at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum NumericValue {
    /// See [`NumericKind::Long`].
    Long(i64),
    /// See [`NumericKind::Double`].
    Double(f64),
    /// See [`NumericKind::Integer`].
    Integer(i32),
    /// See [`NumericKind::Float`].
    Float(f32),
    /// See [`NumericKind::Short`].
    Short(i16),
    /// See [`NumericKind::Byte`].
    Byte(i8),
    /// See [`NumericKind::BigDecimal`].
    BigDecimal(BigDecimal),
}

impl NumericValue {
    /// The kind of this value.
    #[must_use]
    pub fn kind(&self) -> NumericKind {
        match self {
            Self::Long(_) => NumericKind::Long,
            Self::Double(_) => NumericKind::Double,
            Self::Integer(_) => NumericKind::Integer,
            Self::Float(_) => NumericKind::Float,
            Self::Short(_) => NumericKind::Short,
            Self::Byte(_) => NumericKind::Byte,
            Self::BigDecimal(_) => NumericKind::BigDecimal,
        }
    }

    /// Widens the value to `f64`.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Long(v) => v.to_f64(),
            Self::Double(v) => *v,
            Self::Integer(v) => v.to_f64(),
            Self::Float(v) => v.to_f64(),
            Self::Short(v) => v.to_f64(),
            Self::Byte(v) => v.to_f64(),
            Self::BigDecimal(v) => DomainValue::to_f64(v),
        }
    }

    /// Parses a declarative attribute value.
    ///
    /// Integer literals become [`NumericValue::Integer`]; anything else that
    /// parses as a float becomes [`NumericValue::Float`].
    pub fn parse_attribute(text: &str) -> Result<Self> {
        let text = text.trim();
        if let Ok(v) = text.parse::<i32>() {
            return Ok(Self::Integer(v));
        }
        match text.parse::<f32>() {
            Ok(v) if v.is_finite() => Ok(Self::Float(v)),
            _ => Err(SeekError::UnsupportedDomainType {
                name: text.to_string(),
            }),
        }
    }

    /// Converts into a statically typed value, going through `f64`.
    #[must_use]
    pub fn to_domain<V: DomainValue>(&self) -> V {
        V::from_f64(self.to_f64())
    }
}

macro_rules! numeric_value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for NumericValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

numeric_value_from!(
    i64 => Long,
    f64 => Double,
    i32 => Integer,
    f32 => Float,
    i16 => Short,
    i8 => Byte,
    BigDecimal => BigDecimal,
);

/// Rounds `value` to the nearest multiple of `step`, then clamps into `[min_bound, max_bound]`.
///
/// A non-positive or non-finite `step` skips the rounding.
#[must_use]
pub fn round_to_step(value: f64, min_bound: f64, max_bound: f64, step: f64) -> f64 {
    let rounded = if step > 0.0 && step.is_finite() {
        (value / step).round() * step
    } else {
        value
    };
    rounded.min(max_bound).max(min_bound)
}
