/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Inria
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Inner private trait used to make implementing [`Endianness`]
/// impossible for other structs.
mod private {
    /// This is a [SealedTrait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/).
    pub trait Sealed {}
}

/// Marker trait for endianness selector types.
///
/// Its only implementations are [`LittleEndian`] and [`BigEndian`]; the
/// aliases [`NE`] and [`OE`] select the native endianness of the target
/// and its opposite, respectively.
///
/// Note that in principle marker traits are not necessary to use
/// selector types, but they are useful to avoid that the user specifies
/// a nonsensical type, and to document the meaning of type parameters.
pub trait Endianness: private::Sealed {
    /// The name of the endianness.
    const NAME: &'static str;
    /// Whether the endianness is little-endian.
    const IS_LITTLE: bool;
    /// Whether the endianness is big-endian.
    const IS_BIG: bool;
    /// Whether the endianness coincides with that of the target, that is,
    /// whether values can be stored without swapping their bytes.
    const IS_NATIVE: bool = Self::IS_LITTLE == cfg!(target_endian = "little");
}

/// Selector type for little-endian streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LittleEndian;

/// Selector type for big-endian streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BigEndian;

impl private::Sealed for LittleEndian {}
impl private::Sealed for BigEndian {}

impl Endianness for LittleEndian {
    const NAME: &'static str = "little";
    const IS_LITTLE: bool = true;
    const IS_BIG: bool = false;
}

impl Endianness for BigEndian {
    const NAME: &'static str = "big";
    const IS_LITTLE: bool = false;
    const IS_BIG: bool = true;
}

/// Alias for [`BigEndian`]
pub type BE = BigEndian;

/// Alias for [`LittleEndian`]
pub type LE = LittleEndian;

#[cfg(target_endian = "little")]
/// A type alias for the native endianness of the target platform.
pub type NativeEndian = LittleEndian;
#[cfg(target_endian = "big")]
/// A type alias for the native endianness of the target platform.
pub type NativeEndian = BigEndian;

#[cfg(target_endian = "little")]
/// A type alias for the opposite of the native endianness, that is, the
/// endianness for which every multi-byte value is swapped.
pub type OppositeEndian = BigEndian;
#[cfg(target_endian = "big")]
/// A type alias for the opposite of the native endianness, that is, the
/// endianness for which every multi-byte value is swapped.
pub type OppositeEndian = LittleEndian;

/// Alias for [`NativeEndian`]
pub type NE = NativeEndian;

/// Alias for [`OppositeEndian`]
pub type OE = OppositeEndian;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_native() {
        assert!(NE::IS_NATIVE);
        assert!(!OE::IS_NATIVE);
        assert_eq!(LE::IS_NATIVE, cfg!(target_endian = "little"));
        assert_eq!(BE::IS_NATIVE, cfg!(target_endian = "big"));
        assert_ne!(<NE as Endianness>::NAME, <OE as Endianness>::NAME);
        assert_eq!(core::mem::size_of::<LE>(), 0);
        assert_eq!(core::mem::size_of::<BE>(), 0);
    }
}
