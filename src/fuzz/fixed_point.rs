/*
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::prelude::*;
use arbitrary::Arbitrary;

#[derive(Arbitrary, Debug)]
pub struct FuzzCase {
    maximum: f64,
    values: Vec<f64>,
}

fn check<C: Code>(minimum: f64, maximum: f64, values: &[f64]) {
    let quantizer = <FixedPointQuantizer<f64, C>>::new(minimum, maximum);
    let tolerance = quantizer.step() + 8.0 * f64::EPSILON * (maximum - minimum);
    for &value in values.iter().filter(|v| v.is_finite()) {
        let clamped = value.clamp(minimum, maximum);
        // Signed codes overflow on ratios close to one half
        if minimum < 0.0 && clamped.abs() > 0.99 * maximum {
            continue;
        }
        let decoded = quantizer.decode(quantizer.encode(value));
        assert!(
            (decoded - clamped).abs() <= tolerance,
            "{} bits, interval [{} . . {}]: {} decoded as {}",
            C::BITS,
            minimum,
            maximum,
            value,
            decoded
        );
    }
}

/// Check that quantizers with unsigned codes on `[0 . . maximum]`, and with
/// signed codes on `[-maximum . . maximum]`, invert up to one step.
pub fn harness(data: FuzzCase) {
    let maximum = data.maximum.abs();
    if !(1E-100..=1E100).contains(&maximum) {
        return;
    }
    check::<u8>(0.0, maximum, &data.values);
    check::<u32>(0.0, maximum, &data.values);
    check::<i8>(-maximum, maximum, &data.values);
    check::<i16>(-maximum, maximum, &data.values);
    check::<i64>(-maximum, maximum, &data.values);
}
