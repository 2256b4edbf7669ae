/*
 * SPDX-FileCopyrightText: 2024 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::fmt::{Display, Formatter};

/// A wrapper displaying a byte slice as two-digit lowercase hexadecimal
/// bytes separated by a delimiter.
///
/// # Examples
/// ```
/// use datastream::utils::HexBytes;
///
/// assert_eq!(format!("{}", HexBytes::new(&[0x00, 0x1f, 0xff], ":")), "00:1f:ff");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HexBytes<'a> {
    bytes: &'a [u8],
    delimiter: &'a str,
}

impl<'a> HexBytes<'a> {
    pub fn new(bytes: &'a [u8], delimiter: &'a str) -> Self {
        Self { bytes, delimiter }
    }
}

impl Display for HexBytes<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for (i, byte) in self.bytes.iter().enumerate() {
            if i != 0 {
                f.write_str(self.delimiter)?;
            }
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Render `bytes` as two-digit lowercase hexadecimal bytes separated by
/// `delimiter`.
///
/// An empty slice yields an empty string.
#[cfg(feature = "alloc")]
pub fn to_hex_string(bytes: &[u8], delimiter: &str) -> alloc::string::String {
    use alloc::string::ToString;
    HexBytes::new(bytes, delimiter).to_string()
}

#[cfg(all(test, feature = "alloc"))]
mod test {
    use super::*;

    #[test]
    fn test_to_hex_string() {
        assert_eq!(to_hex_string(&[], " "), "");
        assert_eq!(to_hex_string(&[0xab], " "), "ab");
        assert_eq!(to_hex_string(&[0x01, 0x02, 0xa0], " "), "01 02 a0");
        assert_eq!(to_hex_string(&[0x01, 0x02], ""), "0102");
    }
}
