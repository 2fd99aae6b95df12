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

//! Base-62 encoding in linear time.
//!
//! Byte buffers are encoded by cutting their bits into self-delimiting
//! five- and six-bit digits, rather than by repeated big-integer division,
//! which is quadratic. The output is within a few percent of the densest
//! possible base-62 encoding and needs no length prefix.
//!
//! ```
//! let encoded = base62::encode_to_string(b"Hello");
//! assert_eq!(encoded, "vxGblhE");
//! assert_eq!(base62::decode_str(&encoded).unwrap(), b"Hello");
//!
//! let id = base62::format_uint(123_456_789);
//! assert_eq!(base62::parse_uint(&id), Ok(123_456_789));
//! ```
//!
//! Integers use a separate, ordinary positional encoding (see [`int`]).
//!
//! The top-level functions use [`STD_ALPHABET`]; build an [`Encoding`] to
//! use a different alphabet.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod int;
mod digit;

#[cfg(feature = "alloc")]
extern crate alloc;

const BASE: usize = 62;

pub use alphabet::{Encoding, STD, STD_ALPHABET};
pub use digit::Digit;

pub use decode::decode_to_slice;
pub use decode::{DecodeError, DecodeResult};
#[cfg(feature = "alloc")]
pub use decode::{decode, decode_str, decode_to_buf};

pub use encode::encode_iter;
#[cfg(feature = "alloc")]
pub use encode::{encode, encode_to_buf, encode_to_string};

pub use int::{format_int, format_uint, parse_int, parse_uint};
#[cfg(feature = "alloc")]
pub use int::{append_int, append_uint};
