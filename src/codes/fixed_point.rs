/*
 * SPDX-FileCopyrightText: 2024 Inria
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Fixed-point quantization.
//!
//! A [`FixedPointQuantizer`] maps a floating-point value constrained to an
//! interval `[minimum . . maximum]` to an integer code of 8, 16, 32, or 64
//! bits, and back, trading precision for storage width. Codes are
//! [primitives](crate::traits::Primitive), so they can be written directly
//! to a [`Stream`](crate::impls::Stream).
//!
//! Encoding clamps the value to the interval, divides it by the width of
//! the interval, and multiplies the ratio by `2^BITS - 1`, truncating toward
//! zero. A ratio of exactly one half is mapped to the code `2^(BITS - 1)`.
//! Decoding divides the integer value of the code by `2^BITS - 1` and
//! multiplies by the width of the interval.
//!
//! Note that the value is *not* offset by `minimum` before scaling. With
//! signed codes, intervals symmetric around zero invert up to one
//! [step](FixedPointQuantizer::step), except for the maximum, whose ratio
//! is one half. With unsigned codes, only intervals of the form
//! `[0 . . maximum]` invert. Neither the bounds nor their order are
//! validated.
//!
//! A scaled value that does not fit the code is first saturated to
//! `±(2^BITS - 1)` and then truncated to its lowest `BITS` bits; the same
//! happens to the code `2^(BITS - 1)` of the midpoint with signed codes.
//!
//! Half-precision values ([`half::f16`]) are quantized using `f32`
//! arithmetic, as `2^16 - 1` is not representable as an `f16`.
//!
//! # Examples
//! ```
//! use datastream::prelude::*;
//!
//! let quantizer = <FixedPointQuantizer<f64, u16>>::new(0.0, 100.0);
//! let code = quantizer.encode(42.0);
//! assert_eq!(code, 27524);
//! assert!((quantizer.decode(code) - 42.0).abs() <= quantizer.step());
//!
//! // Out-of-range values are clamped
//! assert_eq!(quantizer.encode(1000.0), u16::MAX);
//! assert_eq!(quantizer.encode(-1.0), 0);
//!
//! // The midpoint is special-cased
//! assert_eq!(quantizer.encode(50.0), 1 << 15);
//!
//! // Signed codes cover intervals symmetric around zero
//! let quantizer = <FixedPointQuantizer<f64, i16>>::new(-10.0, 10.0);
//! assert_eq!(quantizer.encode(-5.0), -16383);
//! assert!((quantizer.decode(-16383) + 5.0).abs() <= quantizer.step());
//! ```

use crate::traits::Primitive;
use core::marker::PhantomData;
#[cfg(feature = "mem_dbg")]
use mem_dbg::{MemDbg, MemSize};
use num_traits::float::FloatCore;

mod private {
    /// This is a [SealedTrait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/).
    pub trait Sealed {}
}

/// The integer types that can be used as codes by a [`FixedPointQuantizer`].
pub trait Code: Primitive + private::Sealed {
    /// The width of the code in bits.
    const BITS: u32;
    /// Return the code with the lowest [`BITS`](Code::BITS) bits of `pattern`.
    fn from_pattern(pattern: u64) -> Self;
    /// Return the bit pattern of the code, zero-extended.
    fn to_pattern(self) -> u64;
    /// Return the integer value of the code (negative for negative signed
    /// codes).
    fn value(self) -> i128;
}

macro_rules! impl_code {
    ($($ty:ty => $unsigned:ty),*) => {$(
        impl private::Sealed for $ty {}

        impl Code for $ty {
            const BITS: u32 = <$ty>::BITS;

            #[inline(always)]
            fn from_pattern(pattern: u64) -> Self {
                pattern as $ty
            }

            #[inline(always)]
            fn to_pattern(self) -> u64 {
                self as $unsigned as u64
            }

            #[inline(always)]
            fn value(self) -> i128 {
                self as i128
            }
        }
    )*};
}

impl_code!(
    u8 => u8, u16 => u16, u32 => u32, u64 => u64,
    i8 => u8, i16 => u16, i32 => u32, i64 => u64
);

/// The floating-point types that can be quantized by a
/// [`FixedPointQuantizer`].
pub trait QuantizedFloat: FloatCore + Primitive + private::Sealed {
    /// The signed code type with the same width, which is used by
    /// [`DefaultQuantizer`].
    type DefaultCode: Code;
    /// The type in which encoding and decoding are computed.
    type Wide: QuantizedFloat;
    /// Convert to the computation type.
    fn widen(self) -> Self::Wide;
    /// Convert from the computation type, rounding to nearest.
    fn narrow(wide: Self::Wide) -> Self;
    /// Convert an integer to the nearest float.
    fn lossy_from(value: i128) -> Self;
    /// Truncate toward zero, saturating at the bounds of `i128` (NaN
    /// becomes zero).
    fn saturating_trunc(self) -> i128;
}

macro_rules! impl_quantized_float {
    ($($ty:ty => $code:ty),*) => {$(
        impl private::Sealed for $ty {}

        impl QuantizedFloat for $ty {
            type DefaultCode = $code;
            type Wide = $ty;

            #[inline(always)]
            fn widen(self) -> Self {
                self
            }

            #[inline(always)]
            fn narrow(wide: Self) -> Self {
                wide
            }

            #[inline(always)]
            fn lossy_from(value: i128) -> Self {
                value as $ty
            }

            #[inline(always)]
            fn saturating_trunc(self) -> i128 {
                self as i128
            }
        }
    )*};
}

impl_quantized_float!(f32 => i32, f64 => i64);

impl private::Sealed for half::f16 {}

impl QuantizedFloat for half::f16 {
    type DefaultCode = i16;
    type Wide = f32;

    #[inline(always)]
    fn widen(self) -> f32 {
        self.to_f32()
    }

    #[inline(always)]
    fn narrow(wide: f32) -> Self {
        half::f16::from_f32(wide)
    }

    #[inline(always)]
    fn lossy_from(value: i128) -> Self {
        half::f16::from_f64(value as f64)
    }

    #[inline(always)]
    fn saturating_trunc(self) -> i128 {
        self.to_f32() as i128
    }
}

/// A quantizer between floats of type `F` in a given interval and codes of
/// type `C`.
///
/// See the [module documentation](self) for the details of the transform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "mem_dbg", derive(MemDbg, MemSize))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedPointQuantizer<F: QuantizedFloat, C: Code> {
    minimum_value: F,
    maximum_value: F,
    _marker: PhantomData<C>,
}

/// A [`FixedPointQuantizer`] whose codes are signed and have the same width
/// as `F` (`i16` for [`half::f16`], `i32` for `f32`, `i64` for `f64`).
pub type DefaultQuantizer<F> = FixedPointQuantizer<F, <F as QuantizedFloat>::DefaultCode>;

impl<F: QuantizedFloat, C: Code> FixedPointQuantizer<F, C> {
    /// The width of the codes in bits.
    pub const BITS: u32 = C::BITS;

    /// Create a new quantizer for the interval `[minimum_value . . maximum_value]`.
    ///
    /// The bounds are not validated.
    #[must_use]
    pub fn new(minimum_value: F, maximum_value: F) -> Self {
        Self {
            minimum_value,
            maximum_value,
            _marker: PhantomData,
        }
    }

    pub fn minimum(&self) -> F {
        self.minimum_value
    }

    pub fn maximum(&self) -> F {
        self.maximum_value
    }

    /// Return the difference between the decodings of two consecutive codes.
    pub fn step(&self) -> F {
        let width = self.maximum_value.widen() - self.minimum_value.widen();
        F::narrow(width / Self::denominator())
    }

    /// Encode `value` using the bounds of this quantizer.
    #[inline]
    pub fn encode(&self, value: F) -> C {
        Self::encode_with(value, self.minimum_value, self.maximum_value)
    }

    /// Decode `code` using the bounds of this quantizer.
    #[inline]
    pub fn decode(&self, code: C) -> F {
        Self::decode_with(code, self.minimum_value, self.maximum_value)
    }

    /// Encode `value` using the interval `[minimum . . maximum]`.
    pub fn encode_with(value: F, minimum: F, maximum: F) -> C {
        let mut value = value;
        if value > maximum {
            value = maximum;
        }
        if value < minimum {
            value = minimum;
        }

        let normalized = value.widen() / (maximum.widen() - minimum.widen());
        let one = <F::Wide as num_traits::One>::one();
        if normalized == one / (one + one) {
            return C::from_pattern(1 << (C::BITS - 1));
        }

        // 2^BITS - 1 is not exactly representable as a float for wide codes,
        // and rounds up to 2^BITS
        let max = Self::max_pattern() as i128;
        let code = (normalized * Self::denominator())
            .saturating_trunc()
            .clamp(-max, max);
        C::from_pattern(code as u64)
    }

    /// Decode `code` using the interval `[minimum . . maximum]`.
    pub fn decode_with(code: C, minimum: F, maximum: F) -> F {
        let denormalized =
            <F::Wide as QuantizedFloat>::lossy_from(code.value()) / Self::denominator();
        F::narrow(denormalized * (maximum.widen() - minimum.widen()))
    }

    /// Return 2^BITS - 1.
    #[inline(always)]
    fn max_pattern() -> u64 {
        u64::MAX >> (64 - C::BITS)
    }

    /// Return 2^BITS - 1 in the computation type.
    #[inline(always)]
    fn denominator() -> F::Wide {
        <F::Wide as QuantizedFloat>::lossy_from(Self::max_pattern() as i128)
    }
}
