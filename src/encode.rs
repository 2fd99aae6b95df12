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

//! Functions and types for encoding data as base-62.
//!
//! The input is read as one big-endian bit string. Digits are cut from the
//! least significant end: each is normally six bits, but a six-bit chunk that
//! would be 30, 31, 62 or 63 is shortened to its low five bits. Since 30 and
//! 31 then always mean "five bits", the decoder can find every digit boundary
//! without a length prefix.

use super::alphabet::{Encoding, STD};
use super::Digit;

use core::iter::FusedIterator;

#[cfg(feature = "alloc")]
use alloc::{string::String, vec::Vec};

/// Returns the minimum and maximum number of symbols that encoding `len`
/// bytes can produce.
pub const fn encoded_len_bounds(len: usize) -> (usize, usize) {
    let bits = len * 8;
    ((bits + 5) / 6, (bits + 4) / 5)
}

/// Iterator returned by [`Encoding::encode_iter`] and [`encode_iter`]. Yields
/// the symbols of the encoded data.
#[derive(Clone)]
pub struct Encoder<'a> {
    src: &'a [u8],
    /// Number of bits of `src` not yet consumed. Bits are consumed from the
    /// end of `src` towards the start.
    pos: usize,
    encoding: &'a Encoding,
}

impl<'a> Encoder<'a> {
    pub(crate) fn new(src: &'a [u8], encoding: &'a Encoding) -> Self {
        Self {
            src,
            pos: src.len() * 8,
            encoding,
        }
    }

    /// Reads the six bits just before the cursor, right-aligned. If fewer
    /// than six bits remain, only those are returned.
    fn chunk(&self) -> u8 {
        debug_assert!(self.pos > 0);
        let i = (self.pos - 1) / 8;
        // Number of bits of `src[i]` that lie before the cursor (1 to 8).
        let r = (self.pos - 1) % 8 + 1;
        let mut b = self.src[i] >> (8 - r);
        if r < 6 && i > 0 {
            b |= self.src[i - 1] << r;
        }
        b
    }

    fn next_digit(&mut self) -> Option<Digit> {
        if self.pos == 0 {
            return None;
        }
        let (digit, width) = Digit::from_chunk(self.chunk(), self.pos);
        self.pos -= width;
        Some(digit)
    }
}

impl Iterator for Encoder<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        let digit = self.next_digit()?;
        Some(self.encoding.symbol(digit))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // Every digit takes at most six bits, and every digit but the last
        // takes at least five.
        (
            (self.pos + 5) / 6,
            Some((self.pos + 4) / 5),
        )
    }
}

impl FusedIterator for Encoder<'_> {}

impl Encoding {
    /// Returns an iterator over the symbols of `src`, encoded with this
    /// encoding. Empty input produces no symbols.
    pub fn encode_iter<'a>(&'a self, src: &'a [u8]) -> Encoder<'a> {
        Encoder::new(src, self)
    }

    /// Encodes `src` with this encoding.
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    pub fn encode(&self, src: &[u8]) -> Vec<u8> {
        let mut dst = Vec::new();
        self.encode_to_buf(&mut dst, src);
        dst
    }

    /// Encodes `src` with this encoding and returns the result as a string.
    ///
    /// Each symbol becomes one `char` with the same value, so for an ASCII
    /// alphabet the string's bytes are exactly the symbols.
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    pub fn encode_to_string(&self, src: &[u8]) -> String {
        if self.alphabet().is_ascii() {
            let mut s = String::with_capacity(encoded_len_bounds(src.len()).1);
            s.extend(self.encode_iter(src).map(char::from));
            s
        } else {
            self.encode_iter(src).map(char::from).collect()
        }
    }

    /// Appends the encoded form of `src` to `dst`, growing `dst` if its spare
    /// capacity is too small. Existing contents of `dst` are kept. Returns the
    /// number of symbols appended.
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    pub fn encode_to_buf(&self, dst: &mut Vec<u8>, src: &[u8]) -> usize {
        let old_len = dst.len();
        dst.reserve(encoded_len_bounds(src.len()).1);
        dst.extend(self.encode_iter(src));
        dst.len() - old_len
    }
}

/// Returns an iterator over the symbols of `src`, encoded with the standard
/// alphabet.
pub fn encode_iter(src: &[u8]) -> Encoder<'_> {
    STD.encode_iter(src)
}

/// Encodes `src` with the standard alphabet.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode(src: &[u8]) -> Vec<u8> {
    STD.encode(src)
}

/// Encodes `src` with the standard alphabet and returns the result as a
/// string.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_to_string(src: &[u8]) -> String {
    STD.encode_to_string(src)
}

/// Appends the encoded form of `src`, using the standard alphabet, to `dst`.
///
/// See [`Encoding::encode_to_buf`].
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn encode_to_buf(dst: &mut Vec<u8>, src: &[u8]) -> usize {
    STD.encode_to_buf(dst, src)
}
