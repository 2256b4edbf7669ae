/*
 * SPDX-FileCopyrightText: 2024 Inria
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Marker types and traits used to select, at compile time, the operations
//! available on a [`Stream`](crate::impls::Stream).
//!
//! A stream carries a [`Mode`] type parameter. Methods that move data out of
//! the backing store require [`CanRead`], methods that move data into it
//! require [`CanWrite`], so calling, say, `write` on an [`Input`] stream is
//! rejected by the compiler before any data movement can happen.
//!
//! All traits are sealed: the only modes are [`Input`], [`Output`], and
//! [`InputOutput`].

mod private {
    /// This is a [SealedTrait](https://predr.ag/blog/definitive-guide-to-sealed-traits-in-rust/).
    pub trait Sealed {}
}

/// Marker trait for capability selector types.
pub trait Mode: private::Sealed {
    /// The name of the mode.
    const NAME: &'static str;
    /// Whether streams in this mode can read.
    const CAN_READ: bool;
    /// Whether streams in this mode can write.
    const CAN_WRITE: bool;
}

/// Modes whose streams can read from their backing store.
pub trait CanRead: Mode {}

/// Modes whose streams can write to their backing store.
pub trait CanWrite: Mode {}

/// Selector type for read-only streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Input;

/// Selector type for write-only streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Output;

/// Selector type for streams that can both read and write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputOutput;

/// Alias for [`InputOutput`]
pub type IO = InputOutput;

impl private::Sealed for Input {}
impl private::Sealed for Output {}
impl private::Sealed for InputOutput {}

impl Mode for Input {
    const NAME: &'static str = "input";
    const CAN_READ: bool = true;
    const CAN_WRITE: bool = false;
}

impl Mode for Output {
    const NAME: &'static str = "output";
    const CAN_READ: bool = false;
    const CAN_WRITE: bool = true;
}

impl Mode for InputOutput {
    const NAME: &'static str = "input/output";
    const CAN_READ: bool = true;
    const CAN_WRITE: bool = true;
}

impl CanRead for Input {}
impl CanRead for InputOutput {}

impl CanWrite for Output {}
impl CanWrite for InputOutput {}

#[cfg(test)]
mod test {
    use super::*;

    fn capabilities<M: Mode>() -> (bool, bool) {
        (M::CAN_READ, M::CAN_WRITE)
    }

    #[test]
    fn test_capabilities() {
        assert_eq!(capabilities::<Input>(), (true, false));
        assert_eq!(capabilities::<Output>(), (false, true));
        assert_eq!(capabilities::<IO>(), (true, true));
        assert_eq!(<IO as Mode>::NAME, "input/output");
    }
}
