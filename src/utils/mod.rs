/*
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Debug helpers.

[`to_hex_string`] renders a sequence of bytes in hexadecimal, and it is used
by [`Stream::hex_dump`](crate::impls::Stream::hex_dump). [`HexBytes`] does the
same through [`Display`](core::fmt::Display), without allocating.

*/

mod hex;
pub use hex::*;
