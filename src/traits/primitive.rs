/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Inria
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use num_traits::{PrimInt, Unsigned};

mod private {
    /// This is a [SealedTrait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/).
    pub trait Sealed {}
}

/// The fixed-width arithmetic types that can be read from and written to a
/// [`Stream`](crate::impls::Stream).
///
/// Every primitive is associated with the unsigned integer of identical
/// width ([`Primitive::Bits`]), which is used to reinterpret its bit pattern,
/// and with the byte array of identical width ([`Primitive::Bytes`]), which
/// is what is actually moved to and from the backing store.
///
/// The trait is implemented for all integer types from 8 to 128 bits, for
/// `usize`/`isize`, and for [`half::f16`], [`f32`], and [`f64`].
pub trait Primitive: Copy + Default + PartialEq + core::fmt::Debug + private::Sealed {
    /// The width of the type in bytes.
    const BYTES: usize;
    /// The unsigned integer type with the same width.
    type Bits: PrimInt + Unsigned + core::fmt::Debug;
    /// The byte array with the same width.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default + Copy;

    /// Reinterpret the bit pattern of `self` as an unsigned integer.
    fn to_bits(self) -> Self::Bits;
    /// Reinterpret an unsigned integer as a value of this type.
    fn from_bits(bits: Self::Bits) -> Self;
    /// Return the memory representation of `self` in native byte order.
    fn to_ne_bytes(self) -> Self::Bytes;
    /// Build a value from its memory representation in native byte order.
    fn from_ne_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_int {
    ($($ty:ty => $bits:ty),*) => {$(
        impl private::Sealed for $ty {}

        impl Primitive for $ty {
            const BYTES: usize = core::mem::size_of::<$ty>();
            type Bits = $bits;
            type Bytes = [u8; core::mem::size_of::<$ty>()];

            #[inline(always)]
            fn to_bits(self) -> $bits {
                self as $bits
            }

            #[inline(always)]
            fn from_bits(bits: $bits) -> Self {
                bits as $ty
            }

            #[inline(always)]
            fn to_ne_bytes(self) -> Self::Bytes {
                <$ty>::to_ne_bytes(self)
            }

            #[inline(always)]
            fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                <$ty>::from_ne_bytes(bytes)
            }
        }
    )*};
}

impl_int!(
    u8 => u8, u16 => u16, u32 => u32, u64 => u64, u128 => u128, usize => usize,
    i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize
);

macro_rules! impl_float {
    ($($ty:ty => $bits:ty),*) => {$(
        impl private::Sealed for $ty {}

        impl Primitive for $ty {
            const BYTES: usize = core::mem::size_of::<$ty>();
            type Bits = $bits;
            type Bytes = [u8; core::mem::size_of::<$ty>()];

            #[inline(always)]
            fn to_bits(self) -> $bits {
                <$ty>::to_bits(self)
            }

            #[inline(always)]
            fn from_bits(bits: $bits) -> Self {
                <$ty>::from_bits(bits)
            }

            #[inline(always)]
            fn to_ne_bytes(self) -> Self::Bytes {
                <$ty>::to_ne_bytes(self)
            }

            #[inline(always)]
            fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                <$ty>::from_ne_bytes(bytes)
            }
        }
    )*};
}

impl_float!(half::f16 => u16, f32 => u32, f64 => u64);

/// Reverse the byte order of a [`Primitive`].
///
/// The value is reinterpreted as the unsigned integer of the same width,
/// whose bytes are swapped, and then reinterpreted back: for floating-point
/// values no rounding happens, just a permutation of the bit pattern. In
/// particular, `byteswap(byteswap(x))` has always the same bit pattern as
/// `x`, even for NaNs.
///
/// # Examples
/// ```
/// use datastream::prelude::*;
///
/// assert_eq!(byteswap(0x0102_u16), 0x0201);
/// assert_eq!(byteswap(-2_i32), 0xfeff_ffff_u32 as i32);
/// assert_eq!(byteswap(0x01_u8), 0x01);
/// assert_eq!(byteswap(1.0_f64).to_bits(), 0x0000_0000_0000_f03f);
/// ```
#[inline(always)]
#[must_use]
pub fn byteswap<T: Primitive>(value: T) -> T {
    T::from_bits(value.to_bits().swap_bytes())
}

/// Method syntax for [`byteswap`].
pub trait ByteSwap: Primitive {
    /// Reverse the byte order of `self`.
    #[must_use]
    fn byteswap(self) -> Self;
}

impl<T: Primitive> ByteSwap for T {
    #[inline(always)]
    fn byteswap(self) -> Self {
        byteswap(self)
    }
}
