/*
 * SPDX-FileCopyrightText: 2024 Inria
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Numeric codes for values written to a stream.

Presently, the only code is [fixed-point quantization](fixed_point), which
shrinks a bounded floating-point value to an integer of configurable width
before it is written, and restores it after it is read.

*/

pub mod fixed_point;
pub use fixed_point::{Code, DefaultQuantizer, FixedPointQuantizer, QuantizedFloat};
