// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Define the MessagePack format-code table shared by writer and reader.
// Author: Lukas Bower

//! MessagePack format codes.
//!
//! A format code is the single leading byte classifying the payload that
//! follows it. The fixed forms (`fixint`, `fixstr`, `fixarray`, `fixmap`)
//! fold small values or counts into the code byte itself; the sized forms
//! carry a big-endian payload after the code.

/// Nil, doubling as the universal "absent" sentinel for strings and headers.
pub const NIL: u8 = 0xC0;

/// Largest positive fixint (codes `0x00..=0x7F` carry their own value).
pub const MAX_POS_FIXINT: u8 = 0x7F;
/// Smallest value representable as a negative fixint (codes `0xE0..=0xFF`).
pub const MIN_NEG_FIXINT: i8 = -32;
/// First negative fixint code byte.
pub const MIN_NEG_FIXINT_CODE: u8 = 0xE0;

/// First fixmap code (count = code − `MIN_FIXMAP`).
pub const MIN_FIXMAP: u8 = 0x80;
/// Last fixmap code.
pub const MAX_FIXMAP: u8 = 0x8F;
/// First fixarray code (count = code − `MIN_FIXARRAY`).
pub const MIN_FIXARRAY: u8 = 0x90;
/// Last fixarray code.
pub const MAX_FIXARRAY: u8 = 0x9F;
/// First fixstr code (byte length = code − `MIN_FIXSTR`).
pub const MIN_FIXSTR: u8 = 0xA0;
/// Last fixstr code.
pub const MAX_FIXSTR: u8 = 0xBF;

/// IEEE-754 single precision, 4-byte big-endian payload.
pub const FLOAT32: u8 = 0xCA;
/// IEEE-754 double precision, 8-byte big-endian payload.
pub const FLOAT64: u8 = 0xCB;

/// Unsigned 8-bit integer.
pub const UINT8: u8 = 0xCC;
/// Unsigned 16-bit integer, big-endian.
pub const UINT16: u8 = 0xCD;
/// Unsigned 32-bit integer, big-endian.
pub const UINT32: u8 = 0xCE;
/// Unsigned 64-bit integer, big-endian.
pub const UINT64: u8 = 0xCF;

/// Signed 8-bit integer.
pub const INT8: u8 = 0xD0;
/// Signed 16-bit integer, big-endian.
pub const INT16: u8 = 0xD1;
/// Signed 32-bit integer, big-endian.
pub const INT32: u8 = 0xD2;
/// Signed 64-bit integer, big-endian.
pub const INT64: u8 = 0xD3;

/// String with 1-byte length prefix.
pub const STR8: u8 = 0xD9;
/// String with 2-byte big-endian length prefix.
pub const STR16: u8 = 0xDA;
/// String with 4-byte big-endian length prefix.
pub const STR32: u8 = 0xDB;

/// Array header with 2-byte big-endian count.
pub const ARRAY16: u8 = 0xDC;
/// Array header with 4-byte big-endian count.
pub const ARRAY32: u8 = 0xDD;
/// Map header with 2-byte big-endian pair count.
pub const MAP16: u8 = 0xDE;
/// Map header with 4-byte big-endian pair count.
pub const MAP32: u8 = 0xDF;

/// Check whether a code is a positive fixint carrying its own value.
#[must_use]
pub fn is_positive_fixint(code: u8) -> bool {
    code <= MAX_POS_FIXINT
}

/// Check whether a code is a negative fixint (value = code − 256).
#[must_use]
pub fn is_negative_fixint(code: u8) -> bool {
    code >= MIN_NEG_FIXINT_CODE
}

/// Check whether a code is a fixmap header.
#[must_use]
pub fn is_fixmap(code: u8) -> bool {
    (MIN_FIXMAP..=MAX_FIXMAP).contains(&code)
}

/// Check whether a code is a fixarray header.
#[must_use]
pub fn is_fixarray(code: u8) -> bool {
    (MIN_FIXARRAY..=MAX_FIXARRAY).contains(&code)
}

/// Check whether a code is a fixstr prefix.
#[must_use]
pub fn is_fixstr(code: u8) -> bool {
    (MIN_FIXSTR..=MAX_FIXSTR).contains(&code)
}
