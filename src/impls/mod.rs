/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Inria
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Implementation of typed streams.

A [`Stream`] reads and writes [`Primitive`](crate::traits::Primitive)
values from either a mutable byte buffer (a slice, a vector, or an array)
or, with the `std` feature, an open [`std::fs::File`]. In both cases you
must specify a [mode](crate::traits::Mode), which decides at compile time
whether the stream can read, write, or both, and an
[endianness](crate::traits::Endianness), which decides the byte order of
the values in the backing store.

Buffers support both sequential and random access, whereas files can only
be accessed sequentially at their current position.

*/

mod stream;
pub use stream::*;
