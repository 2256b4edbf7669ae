/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Inria
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::fmt::{Display, Formatter};

/// The error returned by the operations of a [`Stream`](crate::impls::Stream).
///
/// No error is ever recovered internally: when an operation fails on a
/// memory-backed stream, neither the buffer nor the cursor have been
/// modified.
#[derive(Debug)]
pub enum StreamError {
    /// Accessing `size` bytes starting at `offset` would go past the end of
    /// a backing buffer of length `len`.
    OutOfBounds {
        offset: usize,
        size: usize,
        len: usize,
    },
    /// The operation is not available for the backing store of the stream
    /// (e.g., random access on a file).
    Unsupported { operation: &'static str },
    /// The underlying file failed.
    #[cfg(feature = "std")]
    Io(std::io::Error),
}

impl Display for StreamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            StreamError::OutOfBounds { offset, size, len } => write!(
                f,
                "Cannot access {} bytes at offset {} of a buffer of length {}",
                size, offset, len
            ),
            StreamError::Unsupported { operation } => {
                write!(f, "{}() is not supported on file-backed streams", operation)
            }
            #[cfg(feature = "std")]
            StreamError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl core::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            #[cfg(feature = "std")]
            StreamError::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for StreamError {
    fn from(e: std::io::Error) -> Self {
        StreamError::Io(e)
    }
}

impl StreamError {
    /// Whether this is a bounds violation.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, StreamError::OutOfBounds { .. })
    }

    /// Whether the operation is unsupported by the backing store.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, StreamError::Unsupported { .. })
    }

    /// Whether this is a failure of the underlying file.
    pub fn is_io(&self) -> bool {
        #[cfg(feature = "std")]
        {
            matches!(self, StreamError::Io(_))
        }
        #[cfg(not(feature = "std"))]
        {
            false
        }
    }
}
