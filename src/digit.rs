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

use super::BASE;

/// Bits 1 through 4 of a chunk. A six-bit chunk with all of these set is 30,
/// 31, 62 or 63, so it can't always be stored in a single digit.
const COMPACT_MASK: u8 = 0b01_1110;
const LOW_5_BITS: u8 = 0b01_1111;
const LOW_6_BITS: u8 = 0b11_1111;

/// A base-62 digit (an integer less than 62).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Returns `None` if `x` is not less than 62.
    pub fn new(x: u8) -> Option<Self> {
        (usize::from(x) < BASE).then(|| Self(x))
    }

    /// Whether this digit is 30 or 31. Such digits always stand for five
    /// bits, unless they are the last digit of an encoded sequence.
    pub fn is_compact(self) -> bool {
        self.0 & COMPACT_MASK == COMPACT_MASK
    }

    /// Picks the digit for the chunk of bits that ends at the encoder's
    /// cursor, along with the number of bits the digit consumes.
    ///
    /// `chunk` holds up to six bits, right-aligned; `remaining` is the number
    /// of bits before the cursor, so if it is less than six, only that many
    /// bits of `chunk` are meaningful.
    ///
    /// A chunk matching [`COMPACT_MASK`] drops its top bit and becomes a
    /// five-bit digit, except at the very end of the input where the chunk is
    /// already 30 or 31 and no bits remain after it.
    pub(crate) fn from_chunk(chunk: u8, remaining: usize) -> (Self, usize) {
        let chunk = chunk & LOW_6_BITS;
        if chunk & COMPACT_MASK == COMPACT_MASK
            && (remaining > 6 || chunk > LOW_5_BITS)
        {
            (Self(chunk & LOW_5_BITS), 5)
        } else {
            (Self(chunk), remaining.min(6))
        }
    }

    /// The number of bits this digit contributes when decoding.
    ///
    /// The last digit of a sequence may be a narrow tail chunk; its width is
    /// the bit length of its value. Every other digit is five bits wide if it
    /// is compact and six bits wide otherwise.
    pub(crate) fn decoded_width(self, is_last: bool) -> u32 {
        if is_last {
            u8::BITS - self.0.leading_zeros()
        } else if self.is_compact() {
            5
        } else {
            6
        }
    }
}

impl From<Digit> for u8 {
    fn from(d: Digit) -> u8 {
        d.0
    }
}

impl From<Digit> for usize {
    fn from(d: Digit) -> usize {
        usize::from(d.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(Digit::new(0).map(u8::from), Some(0));
        assert_eq!(Digit::new(61).map(u8::from), Some(61));
        assert!(Digit::new(62).is_none());
        assert!(Digit::new(255).is_none());
    }

    #[test]
    fn only_30_and_31_are_compact() {
        let compact: Vec<u8> = (0..62)
            .filter_map(Digit::new)
            .filter(|d| d.is_compact())
            .map(u8::from)
            .collect();
        assert_eq!(compact, [30, 31]);
    }

    #[test]
    fn full_chunks_never_leave_digit_range() {
        for chunk in 0..64 {
            let (digit, width) = Digit::from_chunk(chunk, 100);
            assert!(u8::from(digit) < 62, "chunk {}", chunk);
            if (30..32).contains(&chunk) || chunk >= 62 {
                assert_eq!(width, 5, "chunk {}", chunk);
                assert_eq!(u8::from(digit), chunk & 0b1_1111);
            } else {
                assert_eq!(width, 6, "chunk {}", chunk);
                assert_eq!(u8::from(digit), chunk);
            }
        }
    }

    #[test]
    fn tail_chunks_consume_everything_left() {
        for remaining in 1..=6 {
            for chunk in 0..(1_u8 << remaining) {
                let (digit, width) = Digit::from_chunk(chunk, remaining);
                let got = (u8::from(digit), width);
                if chunk >= 62 {
                    assert_eq!(got, (chunk & 0b1_1111, 5));
                } else {
                    assert_eq!(got, (chunk, remaining));
                }
            }
        }
    }

    #[test]
    fn decoded_width_of_inner_digits() {
        for x in 0..62 {
            let d = Digit::new(x).unwrap();
            let expected = if x == 30 || x == 31 { 5 } else { 6 };
            assert_eq!(d.decoded_width(false), expected);
        }
    }

    #[test]
    fn decoded_width_of_last_digit_is_bit_length() {
        let widths: Vec<u32> = [0, 1, 2, 3, 7, 8, 30, 31, 32, 61]
            .iter()
            .map(|&x| Digit::new(x).unwrap().decoded_width(true))
            .collect();
        assert_eq!(widths, [0, 1, 2, 2, 3, 4, 5, 5, 6, 6]);
    }

    #[test]
    fn widths_agree_for_inner_digits() {
        for chunk in 0..64 {
            let (digit, width) = Digit::from_chunk(chunk, 7);
            assert_eq!(digit.decoded_width(false) as usize, width);
        }
    }
}
