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

//! Alphabets and the lookup tables built from them.

use super::{Digit, BASE};

use core::fmt::{self, Debug, Display, Formatter};

/// The standard alphabet: `A`–`Z`, then `a`–`z`, then `0`–`9`.
pub const STD_ALPHABET: &[u8; BASE] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// The [`Encoding`] for [`STD_ALPHABET`], used by the crate's top-level
/// functions.
pub static STD: Encoding = Encoding::new(STD_ALPHABET);

const INVALID: u8 = 0xff;

/// An error returned by [`Encoding::try_new`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlphabetError {
    /// The alphabet was not 62 bytes long. Contains the actual length.
    BadLength(usize),
    /// The alphabet contained a carriage return or line feed at the given
    /// index.
    Newline(usize),
}

impl Display for AlphabetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadLength(n) => {
                write!(f, "encoding alphabet is {} bytes long, not 62", n)
            }
            Self::Newline(i) => write!(
                f,
                "encoding alphabet contains newline character at index {}",
                i,
            ),
        }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl std::error::Error for AlphabetError {}

/// A base-62 encoding scheme, defined by a 62-symbol alphabet.
///
/// An `Encoding` is immutable once built and can be shared freely between
/// threads; all encoding and decoding state lives in the individual calls.
#[derive(Clone)]
pub struct Encoding {
    symbols: [u8; BASE],
    digits: [u8; 256],
}

impl Encoding {
    /// Builds an encoding from a 62-byte alphabet. Symbol `i` of the alphabet
    /// represents digit `i`.
    ///
    /// Duplicate symbols are not rejected; the last occurrence of a symbol
    /// determines what it decodes to.
    ///
    /// # Panics
    ///
    /// Panics if `alphabet` is not exactly 62 bytes long or contains `'\r'`
    /// or `'\n'`. When used to initialize a `const` or `static`, this is a
    /// compile-time error instead.
    pub const fn new(alphabet: &[u8]) -> Self {
        match Self::try_new(alphabet) {
            Ok(encoding) => encoding,
            Err(AlphabetError::BadLength(_)) => {
                panic!("encoding alphabet is not 62 bytes long")
            }
            Err(AlphabetError::Newline(_)) => {
                panic!("encoding alphabet contains newline character")
            }
        }
    }

    /// Like [`Self::new`], but returns an error instead of panicking.
    pub const fn try_new(alphabet: &[u8]) -> Result<Self, AlphabetError> {
        if alphabet.len() != BASE {
            return Err(AlphabetError::BadLength(alphabet.len()));
        }

        let mut symbols = [0; BASE];
        let mut digits = [INVALID; 256];
        let mut i = 0;
        while i < BASE {
            let c = alphabet[i];
            if c == b'\r' || c == b'\n' {
                return Err(AlphabetError::Newline(i));
            }
            symbols[i] = c;
            digits[c as usize] = i as u8;
            i += 1;
        }
        Ok(Self {
            symbols,
            digits,
        })
    }

    /// The alphabet this encoding was built from.
    pub fn alphabet(&self) -> &[u8; BASE] {
        &self.symbols
    }

    /// The symbol that represents `digit`.
    pub fn symbol(&self, digit: Digit) -> u8 {
        self.symbols[usize::from(digit)]
    }

    /// The digit represented by `symbol`, or `None` if `symbol` is not part
    /// of the alphabet.
    pub fn digit(&self, symbol: u8) -> Option<Digit> {
        match self.digits[usize::from(symbol)] {
            INVALID => None,
            x => Digit::new(x),
        }
    }
}

impl Debug for Encoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Encoding");
        match core::str::from_utf8(&self.symbols) {
            Ok(alphabet) => s.field("alphabet", &alphabet),
            Err(_) => s.field("alphabet", &&self.symbols[..]),
        };
        s.finish()
    }
}

impl Default for Encoding {
    fn default() -> Self {
        STD.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_tables_are_inverse() {
        for (i, &c) in STD_ALPHABET.iter().enumerate() {
            let d = STD.digit(c).unwrap();
            assert_eq!(usize::from(d), i);
            assert_eq!(STD.symbol(d), c);
        }
    }

    #[test]
    fn bytes_outside_alphabet_are_invalid() {
        let valid = (0..=255_u8).filter(|&b| STD.digit(b).is_some()).count();
        assert_eq!(valid, 62);
        assert!(STD.digit(b'+').is_none());
        assert!(STD.digit(b'/').is_none());
        assert!(STD.digit(0xff).is_none());
    }

    #[test]
    fn try_new_reports_bad_length() {
        assert_eq!(
            Encoding::try_new(b"abcdef").unwrap_err(),
            AlphabetError::BadLength(6),
        );
        assert_eq!(
            Encoding::try_new(&[b'a'; 63]).unwrap_err(),
            AlphabetError::BadLength(63),
        );
    }

    #[test]
    fn try_new_reports_newlines() {
        for &c in b"\r\n" {
            let mut alphabet = *STD_ALPHABET;
            alphabet[1] = c;
            assert_eq!(
                Encoding::try_new(&alphabet).unwrap_err(),
                AlphabetError::Newline(1),
            );
        }
    }

    #[test]
    #[should_panic(expected = "not 62 bytes long")]
    fn new_panics_on_short_alphabet() {
        Encoding::new(b"abcdef");
    }

    #[test]
    #[should_panic(expected = "newline")]
    fn new_panics_on_line_feed() {
        let mut alphabet = *STD_ALPHABET;
        alphabet[1] = b'\n';
        Encoding::new(&alphabet);
    }

    #[test]
    #[should_panic(expected = "newline")]
    fn new_panics_on_carriage_return() {
        let mut alphabet = *STD_ALPHABET;
        alphabet[1] = b'\r';
        Encoding::new(&alphabet);
    }

    #[test]
    fn custom_alphabet_maps_in_order() {
        let mut alphabet = *STD_ALPHABET;
        alphabet.reverse();
        let enc = Encoding::new(&alphabet);
        assert_eq!(usize::from(enc.digit(b'9').unwrap()), 0);
        assert_eq!(usize::from(enc.digit(b'A').unwrap()), 61);
        assert!(enc.digit(b'-').is_none());
    }

    #[test]
    fn duplicate_symbols_decode_to_last_index() {
        let mut alphabet = *STD_ALPHABET;
        alphabet[61] = b'A';
        let enc = Encoding::new(&alphabet);
        assert_eq!(usize::from(enc.digit(b'A').unwrap()), 61);
        assert!(enc.digit(b'9').is_none());
    }
}
