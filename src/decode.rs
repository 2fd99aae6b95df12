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

//! Functions and types for decoding base-62 data.

use super::alphabet::{Encoding, STD};

use core::fmt::{self, Display, Formatter};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;
#[cfg(feature = "alloc")]
use core::convert::TryFrom;

/// An error encountered while decoding base-62 data or parsing a base-62
/// integer.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// The symbol at the given (zero-based) position is not part of the
    /// alphabet.
    CorruptInput(usize),
}

impl DecodeError {
    /// The position of the offending symbol.
    pub fn position(&self) -> usize {
        match self {
            Self::CorruptInput(i) => *i,
        }
    }
}

/// Alias of <code>[Result]\<T, [DecodeError]></code>.
pub type DecodeResult<T> = Result<T, DecodeError>;

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::CorruptInput(i) => {
                write!(f, "illegal base62 data at input byte {}", i)
            }
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for DecodeError {}

/// Returns the maximum number of bytes that decoding `len` symbols can
/// produce. Each symbol carries at most six bits.
pub const fn decoded_len_max(len: usize) -> usize {
    (len * 6 + 7) / 8
}

impl Encoding {
    /// Decodes `src` into the end of `dst`, which must be at least
    /// [`decoded_len_max`] bytes long. Returns the index of the first
    /// decoded byte; the decoded data is `dst[index..]`.
    ///
    /// Digits arrive least significant first, so bytes are produced from the
    /// last one backwards.
    fn decode_backward(
        &self,
        src: &[u8],
        dst: &mut [u8],
    ) -> DecodeResult<usize> {
        let mut tail = dst.len();
        let mut acc = 0_u32;
        let mut held = 0_u32;
        let last = src.len().wrapping_sub(1);

        for (i, &c) in src.iter().enumerate() {
            let digit = self.digit(c).ok_or(DecodeError::CorruptInput(i))?;
            acc |= u32::from(u8::from(digit)) << held;
            held += digit.decoded_width(i == last);
            while held >= 8 {
                tail -= 1;
                dst[tail] = acc as u8;
                acc >>= 8;
                held -= 8;
            }
        }

        if held > 0 {
            tail -= 1;
            dst[tail] = acc as u8;
        }
        Ok(tail)
    }

    /// Decodes `src` into the start of `dst` and returns the number of bytes
    /// written. Does not allocate.
    ///
    /// If an error is returned, the contents of `dst` are unspecified.
    ///
    /// # Panics
    ///
    /// Panics if `dst` is shorter than
    /// <code>[decoded_len_max]\(src.len())</code>.
    pub fn decode_to_slice(
        &self,
        src: &[u8],
        dst: &mut [u8],
    ) -> DecodeResult<usize> {
        let max = decoded_len_max(src.len());
        assert!(
            dst.len() >= max,
            "destination buffer too small: need {} bytes, have {}",
            max,
            dst.len(),
        );
        let dst = &mut dst[..max];
        let start = self.decode_backward(src, dst)?;
        dst.copy_within(start.., 0);
        Ok(max - start)
    }

    /// Decodes `src` with this encoding.
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    pub fn decode(&self, src: &[u8]) -> DecodeResult<Vec<u8>> {
        let mut dst = Vec::new();
        self.decode_to_buf(&mut dst, src)?;
        Ok(dst)
    }

    /// Decodes the string `src` with this encoding.
    ///
    /// This reverses [`Self::encode_to_string`]: each `char` is taken as one
    /// symbol. A `char` above U+00FF is reported as corrupt input at its
    /// `char` index.
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    pub fn decode_str(&self, src: &str) -> DecodeResult<Vec<u8>> {
        if src.is_ascii() {
            return self.decode(src.as_bytes());
        }
        let symbols = src
            .chars()
            .enumerate()
            .map(|(i, c)| {
                u8::try_from(c).map_err(|_| DecodeError::CorruptInput(i))
            })
            .collect::<DecodeResult<Vec<u8>>>()?;
        self.decode(&symbols)
    }

    /// Appends the data decoded from `src` to `dst`, growing `dst` if its
    /// spare capacity is too small. Returns the number of bytes appended.
    ///
    /// Existing contents of `dst` are kept. If an error is returned, `dst`
    /// is left at its original length.
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    pub fn decode_to_buf(
        &self,
        dst: &mut Vec<u8>,
        src: &[u8],
    ) -> DecodeResult<usize> {
        let old_len = dst.len();
        dst.resize(old_len + decoded_len_max(src.len()), 0);
        match self.decode_backward(src, &mut dst[old_len..]) {
            Ok(start) => {
                dst.drain(old_len..old_len + start);
                Ok(dst.len() - old_len)
            }
            Err(e) => {
                dst.truncate(old_len);
                Err(e)
            }
        }
    }
}

/// Decodes `src` with the standard alphabet into the start of `dst`.
///
/// See [`Encoding::decode_to_slice`].
pub fn decode_to_slice(src: &[u8], dst: &mut [u8]) -> DecodeResult<usize> {
    STD.decode_to_slice(src, dst)
}

/// Decodes `src` with the standard alphabet.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn decode(src: &[u8]) -> DecodeResult<Vec<u8>> {
    STD.decode(src)
}

/// Decodes the string `src` with the standard alphabet.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn decode_str(src: &str) -> DecodeResult<Vec<u8>> {
    STD.decode_str(src)
}

/// Appends the data decoded from `src`, using the standard alphabet, to
/// `dst`.
///
/// See [`Encoding::decode_to_buf`].
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
pub fn decode_to_buf(dst: &mut Vec<u8>, src: &[u8]) -> DecodeResult<usize> {
    STD.decode_to_buf(dst, src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_decodes_to_nothing() {
        assert_eq!(decode(b"").unwrap(), b"");
        assert_eq!(decode_to_slice(b"", &mut []), Ok(0));
    }

    #[test]
    fn known_decodings() {
        assert_eq!(decode(b"fX99A").unwrap(), [123, 234, 255]);
        assert_eq!(decode(b"AA").unwrap(), [0]);
        assert_eq!(decode(b"AAA").unwrap(), [0, 0]);
        assert_eq!(decode(b"BA").unwrap(), [1]);
        assert_eq!(decode(b"fH").unwrap(), [0xff]);
        assert_eq!(decode_str("vxGblhE").unwrap(), b"Hello");
    }

    #[test]
    fn corrupt_input_reports_position() {
        assert_eq!(decode(b"fX9!A"), Err(DecodeError::CorruptInput(3)));
        assert_eq!(decode(b"-"), Err(DecodeError::CorruptInput(0)));
        assert_eq!(decode(b"fX99A\n"), Err(DecodeError::CorruptInput(5)));
    }

    #[test]
    fn every_byte_value_fails_at_first_invalid() {
        let src: Vec<u8> = (0..=255).collect();
        let err = decode(&src).unwrap_err();
        assert_eq!(err, DecodeError::CorruptInput(0));
        assert_eq!(err.position(), 0);
        assert_eq!(err.to_string(), "illegal base62 data at input byte 0");
    }

    #[test]
    fn decode_str_rejects_wide_chars() {
        let err = decode_str("fX\u{1f600}9A").unwrap_err();
        assert_eq!(err, DecodeError::CorruptInput(2));
        // U+00E9 fits in a byte but is not in the standard alphabet.
        let err = decode_str("fX9\u{e9}").unwrap_err();
        assert_eq!(err, DecodeError::CorruptInput(3));
    }

    #[test]
    fn decode_to_slice_writes_at_start() {
        let mut buf = [0xaa; 8];
        let n = decode_to_slice(b"fX99A", &mut buf).unwrap();
        assert_eq!(&buf[..n], [123, 234, 255]);
    }

    #[test]
    #[should_panic(expected = "destination buffer too small")]
    fn decode_to_slice_checks_length() {
        decode_to_slice(b"fX99A", &mut [0; 2]).ok();
    }

    #[test]
    fn decode_to_buf_keeps_prefix() {
        let mut buf = b"prefix:".to_vec();
        assert_eq!(decode_to_buf(&mut buf, b"fX99A"), Ok(3));
        assert_eq!(buf, b"prefix:\x7b\xea\xff");
    }

    #[test]
    fn decode_to_buf_restores_length_on_error() {
        let mut buf = Vec::with_capacity(64);
        buf.extend_from_slice(b"keep");
        assert!(decode_to_buf(&mut buf, b"AAAA*AAA").is_err());
        assert_eq!(buf, b"keep");
    }
}
