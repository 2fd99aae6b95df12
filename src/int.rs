/*
 * Copyright (C) 2022 taylor.fish <contact@taylor.fish>
 *
 * This file is part of base62.
 *
 * base62 is free software: you can redistribute it and/or modify
 * it under the terms of the GNU Affero General Public License as published
 * by the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * base62 is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License
 * along with base62. If not, see <https://www.gnu.org/licenses/>.
 */

//! Plain positional base-62 formatting of 64-bit integers.
//!
//! This is unrelated to the bit-packed byte encoding: the most significant
//! digit comes first, and the output is what repeated division by 62 would
//! give. Signed integers are formatted through their two's-complement bit
//! pattern, so negative numbers round-trip but don't sort before positive
//! ones.

use super::alphabet::{Encoding, STD};
use super::decode::{DecodeError, DecodeResult};
use super::BASE;

use core::fmt::{self, Debug, Display, Formatter, Write as _};
use core::ops::Deref;

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// 62^11 exceeds `u64::MAX`, so no integer needs more than 11 digits.
const MAX_DIGITS: usize = 11;

/// A base-62 integer stored inline. Returned by [`Encoding::format_uint`]
/// and [`Encoding::format_int`]; dereferences to the symbols.
#[derive(Clone, Copy)]
pub struct FormattedInt {
    buf: [u8; MAX_DIGITS],
    start: usize,
}

impl FormattedInt {
    /// The symbols of the formatted integer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[self.start..]
    }
}

impl Deref for FormattedInt {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for FormattedInt {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for FormattedInt {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for FormattedInt {}

impl Display for FormattedInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.as_bytes()
            .iter()
            .try_for_each(|&b| f.write_char(char::from(b)))
    }
}

impl Debug for FormattedInt {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FormattedInt(\"{}\")", self)
    }
}

impl Encoding {
    /// Formats `num` in base 62. Zero is a single symbol (the alphabet's
    /// first), never an empty sequence.
    pub fn format_uint(&self, mut num: u64) -> FormattedInt {
        let base = BASE as u64;
        let mut buf = [0; MAX_DIGITS];
        let mut i = MAX_DIGITS;
        loop {
            i -= 1;
            buf[i] = self.alphabet()[(num % base) as usize];
            num /= base;
            if num == 0 {
                break;
            }
        }
        FormattedInt {
            buf,
            start: i,
        }
    }

    /// Formats the two's-complement bit pattern of `num` in base 62.
    pub fn format_int(&self, num: i64) -> FormattedInt {
        self.format_uint(num as u64)
    }

    /// Appends the base-62 form of `num` to `dst`.
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    pub fn append_uint(&self, dst: &mut Vec<u8>, num: u64) {
        dst.extend_from_slice(&self.format_uint(num));
    }

    /// Appends the base-62 form of `num`'s bit pattern to `dst`.
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    pub fn append_int(&self, dst: &mut Vec<u8>, num: i64) {
        self.append_uint(dst, num as u64);
    }

    /// Parses a base-62 unsigned integer, most significant digit first.
    ///
    /// Empty input parses as 0. Values too large for a `u64` wrap around
    /// modulo 2<sup>64</sup>.
    pub fn parse_uint(&self, src: &[u8]) -> DecodeResult<u64> {
        src.iter().enumerate().try_fold(0_u64, |num, (i, &c)| {
            let digit = self.digit(c).ok_or(DecodeError::CorruptInput(i))?;
            Ok(num
                .wrapping_mul(BASE as u64)
                .wrapping_add(u64::from(u8::from(digit))))
        })
    }

    /// Parses a base-62 integer produced by [`Self::format_int`].
    pub fn parse_int(&self, src: &[u8]) -> DecodeResult<i64> {
        self.parse_uint(src).map(|n| n as i64)
    }
}

/// Formats `num` in base 62 with the standard alphabet.
pub fn format_uint(num: u64) -> FormattedInt {
    STD.format_uint(num)
}

/// Formats the bit pattern of `num` in base 62 with the standard alphabet.
pub fn format_int(num: i64) -> FormattedInt {
    STD.format_int(num)
}

/// Appends the base-62 form of `num`, using the standard alphabet, to `dst`.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn append_uint(dst: &mut Vec<u8>, num: u64) {
    STD.append_uint(dst, num)
}

/// Appends the base-62 form of `num`'s bit pattern, using the standard
/// alphabet, to `dst`.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn append_int(dst: &mut Vec<u8>, num: i64) {
    STD.append_int(dst, num)
}

/// Parses a base-62 unsigned integer written with the standard alphabet.
pub fn parse_uint(src: &[u8]) -> DecodeResult<u64> {
    STD.parse_uint(src)
}

/// Parses a base-62 signed integer written with the standard alphabet.
pub fn parse_int(src: &[u8]) -> DecodeResult<i64> {
    STD.parse_int(src)
}
