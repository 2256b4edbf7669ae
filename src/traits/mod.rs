/*
 * SPDX-FileCopyrightText: 2024 Tommaso Fontana
 * SPDX-FileCopyrightText: 2024 Inria
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Traits

*/

mod endianness;
pub use endianness::*;

mod mode;
pub use mode::*;

mod primitive;
pub use primitive::*;

mod error;
pub use error::*;
