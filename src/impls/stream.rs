/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Inria
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::*;
use core::marker::PhantomData;
use core::ops::Range;
#[cfg(feature = "std")]
use std::fs::File;
#[cfg(feature = "std")]
use std::io::{Read, Write};

/// The backing store of a [`Stream`].
///
/// A stream borrows its backing store for its whole lifetime and never
/// owns it: the store is returned unchanged by [`Stream::into_inner`].
#[derive(Debug)]
pub enum Backing<'a> {
    /// A mutable byte buffer, addressable by offset.
    Buffer(&'a mut [u8]),
    /// An open file, accessed only at its current position.
    #[cfg(feature = "std")]
    File(&'a mut File),
}

/// A typed stream of fixed-width values over a byte buffer or a file.
///
/// The capability `M` ([`Input`], [`Output`], or [`InputOutput`]) and the
/// byte order `E` ([`LE`], [`BE`], or the aliases [`NE`] and [`OE`]) are
/// type parameters, so they are fixed at construction time and cost nothing
/// at run time: values are byte-swapped only if `E` is not the native
/// endianness of the target.
///
/// Every [`Primitive`] is encoded as exactly `size_of::<T>()` bytes in
/// order `E`, with no padding, tag, or length prefix.
///
/// Values can be accessed sequentially ([`write`](Stream::write),
/// [`read`](Stream::read)), using an internal cursor that starts at zero and
/// only moves forward, or by offset ([`set`](Stream::set),
/// [`get`](Stream::get)), which leaves the cursor untouched. Random access,
/// raw views, and [`hex_dump`](Stream::hex_dump) are available only on
/// buffer-backed streams, and return [`StreamError::Unsupported`] on files.
///
/// A stream holds a unique borrow of its backing store, so it cannot be
/// copied or cloned: two streams can never alias the same bytes.
///
/// # Examples
/// ```
/// use datastream::prelude::*;
///
/// let mut buffer = [0_u8; 20];
/// let mut stream = <Stream<InputOutput, BE>>::from_array(&mut buffer);
///
/// stream.write(1_u16)?.write(-1_i32)?.write(0.5_f64)?;
/// assert_eq!(stream.cursor(), 14);
///
/// assert_eq!(stream.get::<u16>(0)?, 1);
/// assert_eq!(stream.get::<i32>(2)?, -1);
/// assert_eq!(stream.get::<f64>(6)?, 0.5);
///
/// // Sequential writes past the end fail without side effects
/// assert!(stream.write(0_u64).is_err());
/// assert_eq!(stream.cursor(), 14);
///
/// assert_eq!(&buffer[..2], &[0x00, 0x01]);
/// # Ok::<(), StreamError>(())
/// ```
///
/// Operations that the mode does not allow do not even compile:
/// ```compile_fail
/// use datastream::prelude::*;
///
/// let mut buffer = [0_u8; 8];
/// let mut stream = <Stream<Input, LE>>::from_array(&mut buffer);
/// stream.write(1_u32);
/// ```
#[derive(Debug)]
pub struct Stream<'a, M: Mode = Output, E: Endianness = NE> {
    backing: Backing<'a>,
    cursor: usize,
    _marker: PhantomData<(M, E)>,
}

/// Return the range of `size` bytes starting at `offset`, if it fits in a
/// buffer of length `len`.
#[inline(always)]
fn check_range(offset: usize, size: usize, len: usize) -> Result<Range<usize>, StreamError> {
    match offset.checked_add(size) {
        Some(end) if end <= len => Ok(offset..end),
        _ => Err(StreamError::OutOfBounds { offset, size, len }),
    }
}

impl<'a, M: Mode, E: Endianness> Stream<'a, M, E> {
    /// Create a new [`Stream`] on the whole extent of a mutable buffer.
    ///
    /// A `&mut Vec<u8>` coerces to a buffer, too.
    #[must_use]
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self {
            backing: Backing::Buffer(buffer),
            cursor: 0,
            _marker: PhantomData,
        }
    }

    /// Create a new [`Stream`] on a fixed-size array.
    #[must_use]
    pub fn from_array<const N: usize>(array: &'a mut [u8; N]) -> Self {
        Self::new(array)
    }

    /// Create a new [`Stream`] on an open file.
    ///
    /// Values are read or written at the current position of the file,
    /// which is never moved by the stream otherwise. The handle is queried
    /// once, and an error is returned if it is not usable. Dropping the
    /// stream neither flushes nor closes the file.
    #[cfg(feature = "std")]
    pub fn from_file(file: &'a mut File) -> Result<Self, StreamError> {
        file.metadata()?;
        Ok(Self {
            backing: Backing::File(file),
            cursor: 0,
            _marker: PhantomData,
        })
    }

    /// Return the number of bytes transferred by sequential operations.
    #[inline(always)]
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Return the length of the backing buffer, or `None` if the stream is
    /// backed by a file.
    #[must_use]
    pub fn extent(&self) -> Option<usize> {
        match &self.backing {
            Backing::Buffer(buffer) => Some(buffer.len()),
            #[cfg(feature = "std")]
            Backing::File(_) => None,
        }
    }

    /// Return whether the stream is backed by a file.
    #[must_use]
    pub fn is_file_backed(&self) -> bool {
        self.extent().is_none()
    }

    /// Return a view of the whole backing buffer.
    pub fn as_slice(&self) -> Result<&[u8], StreamError> {
        self.buffer("as_slice")
    }

    /// Return the address of the backing buffer.
    pub fn as_ptr(&self) -> Result<*const u8, StreamError> {
        Ok(self.buffer("as_ptr")?.as_ptr())
    }

    /// Render the whole backing buffer as lowercase hexadecimal bytes
    /// separated by spaces.
    ///
    /// The cursor is not used.
    #[cfg(feature = "alloc")]
    pub fn hex_dump(&self) -> Result<alloc::string::String, StreamError> {
        Ok(crate::utils::to_hex_string(self.buffer("hex_dump")?, " "))
    }

    /// Return the backing store, ending the stream.
    pub fn into_inner(self) -> Backing<'a> {
        self.backing
    }

    /// Convert a value between native byte order and the byte order of the
    /// stream (the conversion is an involution).
    #[inline(always)]
    fn to_order<T: Primitive>(value: T) -> T {
        if E::IS_NATIVE { value } else { byteswap(value) }
    }

    #[cfg_attr(not(feature = "std"), allow(unused_variables))]
    fn buffer(&self, operation: &'static str) -> Result<&[u8], StreamError> {
        match &self.backing {
            Backing::Buffer(buffer) => Ok(&**buffer),
            #[cfg(feature = "std")]
            Backing::File(_) => Err(StreamError::Unsupported { operation }),
        }
    }

    #[cfg_attr(not(feature = "std"), allow(unused_variables))]
    fn buffer_mut(&mut self, operation: &'static str) -> Result<&mut [u8], StreamError> {
        match &mut self.backing {
            Backing::Buffer(buffer) => Ok(&mut **buffer),
            #[cfg(feature = "std")]
            Backing::File(_) => Err(StreamError::Unsupported { operation }),
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), StreamError> {
        match &mut self.backing {
            Backing::Buffer(buffer) => {
                let range = check_range(self.cursor, bytes.len(), buffer.len())?;
                buffer[range].copy_from_slice(bytes);
            }
            #[cfg(feature = "std")]
            Backing::File(file) => file.write_all(bytes)?,
        }
        self.cursor += bytes.len();
        Ok(())
    }

    fn read_bytes(&mut self, bytes: &mut [u8]) -> Result<(), StreamError> {
        match &mut self.backing {
            Backing::Buffer(buffer) => {
                let range = check_range(self.cursor, bytes.len(), buffer.len())?;
                bytes.copy_from_slice(&buffer[range]);
            }
            #[cfg(feature = "std")]
            Backing::File(file) => file.read_exact(bytes)?,
        }
        self.cursor += bytes.len();
        Ok(())
    }
}

impl<M: CanWrite, E: Endianness> Stream<'_, M, E> {
    /// Write a value at the cursor and advance the cursor.
    ///
    /// On a buffer, if the value does not fit an error is returned and
    /// neither the buffer nor the cursor are modified.
    ///
    /// The stream is returned, so writes can be chained.
    #[inline]
    pub fn write<T: Primitive>(&mut self, value: T) -> Result<&mut Self, StreamError> {
        self.write_bytes(Self::to_order(value).to_ne_bytes().as_ref())?;
        Ok(self)
    }

    /// Write a value at the given byte offset, without using the cursor.
    #[inline]
    pub fn set<T: Primitive>(&mut self, value: T, offset: usize) -> Result<(), StreamError> {
        let buffer = self.buffer_mut("set")?;
        let range = check_range(offset, T::BYTES, buffer.len())?;
        buffer[range].copy_from_slice(Self::to_order(value).to_ne_bytes().as_ref());
        Ok(())
    }

    /// Return a mutable view of the whole backing buffer.
    pub fn as_mut_slice(&mut self) -> Result<&mut [u8], StreamError> {
        self.buffer_mut("as_mut_slice")
    }

    /// Flush the backing file; this is a no-op on buffers.
    pub fn flush(&mut self) -> Result<(), StreamError> {
        match &mut self.backing {
            Backing::Buffer(_) => Ok(()),
            #[cfg(feature = "std")]
            Backing::File(file) => Ok(file.flush()?),
        }
    }
}

impl<M: CanRead, E: Endianness> Stream<'_, M, E> {
    /// Read a value at the cursor and advance the cursor.
    ///
    /// On a buffer, if the value does not fit an error is returned and
    /// the cursor is not modified.
    #[inline]
    pub fn read<T: Primitive>(&mut self) -> Result<T, StreamError> {
        let mut bytes = T::Bytes::default();
        self.read_bytes(bytes.as_mut())?;
        Ok(Self::to_order(T::from_ne_bytes(bytes)))
    }

    /// Read a value at the cursor into `value` and advance the cursor.
    ///
    /// The stream is returned, so reads can be chained. On error, `value`
    /// is left untouched.
    #[inline]
    pub fn read_into<T: Primitive>(&mut self, value: &mut T) -> Result<&mut Self, StreamError> {
        *value = self.read()?;
        Ok(self)
    }

    /// Read a value at the given byte offset, without using the cursor.
    #[inline]
    pub fn get<T: Primitive>(&self, offset: usize) -> Result<T, StreamError> {
        let buffer = self.buffer("get")?;
        let range = check_range(offset, T::BYTES, buffer.len())?;
        let mut bytes = T::Bytes::default();
        bytes.as_mut().copy_from_slice(&buffer[range]);
        Ok(Self::to_order(T::from_ne_bytes(bytes)))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_check_range() {
        assert_eq!(check_range(0, 4, 4).unwrap(), 0..4);
        assert_eq!(check_range(3, 1, 4).unwrap(), 3..4);
        assert_eq!(check_range(4, 0, 4).unwrap(), 4..4);
        assert!(check_range(1, 4, 4).unwrap_err().is_out_of_bounds());
        assert!(check_range(usize::MAX, 2, 4).is_err());
    }

    #[test]
    fn test_read_into_chain() -> Result<(), StreamError> {
        let mut buffer = [0x01, 0x00, 0x02, 0x00, 0x00, 0x00];
        let mut stream = <Stream<Input, LE>>::from_array(&mut buffer);
        let (mut a, mut b) = (0_u16, 0_u32);
        stream.read_into(&mut a)?.read_into(&mut b)?;
        assert_eq!((a, b), (1, 2));
        assert_eq!(stream.cursor(), 6);

        let mut c = 7_u8;
        assert!(stream.read_into(&mut c).is_err());
        assert_eq!(c, 7);
        Ok(())
    }

    #[test]
    fn test_vec() -> Result<(), StreamError> {
        let mut data = vec![0_u8; 8];
        {
            let mut stream = <Stream<Output, BE>>::new(&mut data);
            stream.write(0x0102_0304_0506_0708_u64)?;
            assert_eq!(stream.extent(), Some(8));
            assert!(!stream.is_file_backed());
            assert_eq!(stream.as_ptr()?, stream.as_slice()?.as_ptr());
        }
        assert_eq!(data, [1, 2, 3, 4, 5, 6, 7, 8]);
        Ok(())
    }

    #[test]
    fn test_into_inner() -> Result<(), StreamError> {
        let mut buffer = [0_u8; 4];
        let mut stream = <Stream<Output, LE>>::from_array(&mut buffer);
        stream.write(0xaabb_u16)?;
        match stream.into_inner() {
            Backing::Buffer(inner) => assert_eq!(inner, &[0xbb, 0xaa, 0, 0]),
            #[cfg(feature = "std")]
            Backing::File(_) => unreachable!(),
        }
        Ok(())
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_hex_dump() -> Result<(), StreamError> {
        let mut buffer = [0_u8; 4];
        let mut stream = <Stream<InputOutput, BE>>::from_array(&mut buffer);
        stream.write(0x00ff_u16)?;
        stream.as_mut_slice()?[3] = 0x0a;
        assert_eq!(stream.hex_dump()?, "00 ff 00 0a");
        assert_eq!(stream.cursor(), 2);
        Ok(())
    }
}
