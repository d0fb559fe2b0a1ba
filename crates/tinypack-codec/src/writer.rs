// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Encode scalar and header values into a growable MessagePack buffer.
// Author: Lukas Bower

//! MessagePack writer over an owned growable buffer.

use crate::code;
use crate::text;

/// Serializer appending MessagePack values to an owned growable buffer.
///
/// Every write appends a self-describing, independently decodable unit and
/// selects the smallest code that round-trips the value exactly. No write can
/// fail for well-formed scalar input, so the API is infallible.
#[derive(Debug, Clone, Default)]
pub struct PackWriter {
    buf: Vec<u8>,
}

impl PackWriter {
    /// Create a writer with a small initial scratch capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(64),
        }
    }

    /// Number of bytes encoded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check whether nothing has been encoded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Borrow the encoded bytes without copying.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Copy the encoded bytes out, leaving the writer reusable.
    ///
    /// The returned buffer is an independent copy, never an aliased view.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buf.clone()
    }

    /// Consume the writer, handing over its buffer without copying.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Discard everything encoded so far, keeping the allocation.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Emit the nil code, used both as an explicit null value and as the
    /// "no array/map/string" sentinel.
    pub fn write_nil(&mut self) {
        self.write_raw8(code::NIL);
    }

    /// Emit an array header declaring `len` subsequent independent values.
    ///
    /// The caller must then write exactly `len` values as top-level writes;
    /// no nesting is tracked by this layer.
    pub fn write_array_header(&mut self, len: u32) {
        if len <= u32::from(code::MAX_FIXARRAY - code::MIN_FIXARRAY) {
            self.write_raw8(code::MIN_FIXARRAY + len as u8);
        } else if len <= u32::from(u16::MAX) {
            self.write_raw8(code::ARRAY16);
            self.write_raw16(len as u16);
        } else {
            self.write_raw8(code::ARRAY32);
            self.write_raw32(len);
        }
    }

    /// Emit a map header declaring `len` subsequent key/value pairs.
    pub fn write_map_header(&mut self, len: u32) {
        if len <= u32::from(code::MAX_FIXMAP - code::MIN_FIXMAP) {
            self.write_raw8(code::MIN_FIXMAP + len as u8);
        } else if len <= u32::from(u16::MAX) {
            self.write_raw8(code::MAP16);
            self.write_raw16(len as u16);
        } else {
            self.write_raw8(code::MAP32);
            self.write_raw32(len);
        }
    }

    /// Emit a string, or the nil sentinel for `None`.
    ///
    /// The UTF-8 byte length selects fixstr, str8, str16 or str32; the raw
    /// bytes follow with no terminator.
    pub fn write_str(&mut self, value: Option<&str>) {
        let Some(value) = value else {
            self.write_nil();
            return;
        };
        let len = text::encoded_len(value);
        if len <= usize::from(code::MAX_FIXSTR - code::MIN_FIXSTR) {
            self.write_raw8(code::MIN_FIXSTR + len as u8);
        } else if len < usize::from(u8::MAX) {
            self.write_raw8(code::STR8);
            self.write_raw8(len as u8);
        } else if len < usize::from(u16::MAX) {
            self.write_raw8(code::STR16);
            self.write_raw16(len as u16);
        } else {
            self.write_raw8(code::STR32);
            self.write_raw32(len as u32);
        }
        let start = self.buf.len();
        self.buf.resize(start + len, 0);
        text::encode_into(value, &mut self.buf[start..]);
    }

    /// Emit an unsigned 8-bit integer using the smallest code that holds it.
    pub fn write_u8(&mut self, value: u8) {
        if value <= code::MAX_POS_FIXINT {
            self.write_raw8(value);
        } else {
            self.write_raw8(code::UINT8);
            self.write_raw8(value);
        }
    }

    /// Emit an unsigned 16-bit integer using the smallest code that holds it.
    pub fn write_u16(&mut self, value: u16) {
        if value <= u16::from(code::MAX_POS_FIXINT) {
            self.write_raw8(value as u8);
        } else if value <= u16::from(u8::MAX) {
            self.write_raw8(code::UINT8);
            self.write_raw8(value as u8);
        } else {
            self.write_raw8(code::UINT16);
            self.write_raw16(value);
        }
    }

    /// Emit an unsigned 32-bit integer using the smallest code that holds it.
    pub fn write_u32(&mut self, value: u32) {
        if value <= u32::from(code::MAX_POS_FIXINT) {
            self.write_raw8(value as u8);
        } else if value <= u32::from(u8::MAX) {
            self.write_raw8(code::UINT8);
            self.write_raw8(value as u8);
        } else if value <= u32::from(u16::MAX) {
            self.write_raw8(code::UINT16);
            self.write_raw16(value as u16);
        } else {
            self.write_raw8(code::UINT32);
            self.write_raw32(value);
        }
    }

    /// Emit an unsigned 64-bit integer using the smallest code that holds it.
    pub fn write_u64(&mut self, value: u64) {
        if value <= u64::from(code::MAX_POS_FIXINT) {
            self.write_raw8(value as u8);
        } else if value <= u64::from(u8::MAX) {
            self.write_raw8(code::UINT8);
            self.write_raw8(value as u8);
        } else if value <= u64::from(u16::MAX) {
            self.write_raw8(code::UINT16);
            self.write_raw16(value as u16);
        } else if value <= u64::from(u32::MAX) {
            self.write_raw8(code::UINT32);
            self.write_raw32(value as u32);
        } else {
            self.write_raw8(code::UINT64);
            self.write_raw64(value);
        }
    }

    /// Emit a signed 8-bit integer using the smallest code that holds it.
    ///
    /// `-32..=127` fits a single fixint byte; everything below needs int8.
    pub fn write_i8(&mut self, value: i8) {
        if value >= code::MIN_NEG_FIXINT {
            self.write_raw8(value as u8);
        } else {
            self.write_raw8(code::INT8);
            self.write_raw8(value as u8);
        }
    }

    /// Emit a signed 16-bit integer using the smallest code that holds it.
    pub fn write_i16(&mut self, value: i16) {
        if fits_fixint(i64::from(value)) {
            self.write_raw8(value as u8);
        } else if i16::from(i8::MIN) <= value && value <= i16::from(i8::MAX) {
            self.write_raw8(code::INT8);
            self.write_raw8(value as u8);
        } else {
            self.write_raw8(code::INT16);
            self.write_raw16(value as u16);
        }
    }

    /// Emit a signed 32-bit integer using the smallest code that holds it.
    pub fn write_i32(&mut self, value: i32) {
        if fits_fixint(i64::from(value)) {
            self.write_raw8(value as u8);
        } else if i32::from(i8::MIN) <= value && value <= i32::from(i8::MAX) {
            self.write_raw8(code::INT8);
            self.write_raw8(value as u8);
        } else if i32::from(i16::MIN) <= value && value <= i32::from(i16::MAX) {
            self.write_raw8(code::INT16);
            self.write_raw16(value as u16);
        } else {
            self.write_raw8(code::INT32);
            self.write_raw32(value as u32);
        }
    }

    /// Emit a signed 64-bit integer using the smallest code that holds it.
    pub fn write_i64(&mut self, value: i64) {
        if fits_fixint(value) {
            self.write_raw8(value as u8);
        } else if i64::from(i8::MIN) <= value && value <= i64::from(i8::MAX) {
            self.write_raw8(code::INT8);
            self.write_raw8(value as u8);
        } else if i64::from(i16::MIN) <= value && value <= i64::from(i16::MAX) {
            self.write_raw8(code::INT16);
            self.write_raw16(value as u16);
        } else if i64::from(i32::MIN) <= value && value <= i64::from(i32::MAX) {
            self.write_raw8(code::INT32);
            self.write_raw32(value as u32);
        } else {
            self.write_raw8(code::INT64);
            self.write_raw64(value as u64);
        }
    }

    /// Emit a single-precision float: always the float32 code plus the
    /// IEEE-754 bit pattern, never a narrower encoding.
    pub fn write_f32(&mut self, value: f32) {
        self.write_raw8(code::FLOAT32);
        self.write_raw32(value.to_bits());
    }

    /// Emit a double-precision float: always the float64 code plus the
    /// IEEE-754 bit pattern.
    pub fn write_f64(&mut self, value: f64) {
        self.write_raw8(code::FLOAT64);
        self.write_raw64(value.to_bits());
    }

    /// Append a single raw byte with no format code.
    pub fn write_raw8(&mut self, value: u8) {
        self.buf.push(value);
    }

    /// Append two raw big-endian bytes with no format code.
    pub fn write_raw16(&mut self, value: u16) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Append four raw big-endian bytes with no format code.
    pub fn write_raw32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }

    /// Append eight raw big-endian bytes with no format code.
    pub fn write_raw64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_be_bytes());
    }
}

/// Check whether a signed value fits a single positive or negative fixint byte.
fn fits_fixint(value: i64) -> bool {
    i64::from(code::MIN_NEG_FIXINT) <= value && value <= i64::from(code::MAX_POS_FIXINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encoded(f: impl FnOnce(&mut PackWriter)) -> Vec<u8> {
        let mut writer = PackWriter::new();
        f(&mut writer);
        writer.into_bytes()
    }

    #[test]
    fn nil_is_one_byte() {
        assert_eq!(encoded(|w| w.write_nil()), vec![code::NIL]);
    }

    #[test]
    fn array_header_tiers() {
        assert_eq!(encoded(|w| w.write_array_header(0)), vec![0x90]);
        assert_eq!(encoded(|w| w.write_array_header(15)), vec![0x9F]);
        assert_eq!(
            encoded(|w| w.write_array_header(16)),
            vec![code::ARRAY16, 0x00, 0x10]
        );
        assert_eq!(
            encoded(|w| w.write_array_header(65535)),
            vec![code::ARRAY16, 0xFF, 0xFF]
        );
        assert_eq!(
            encoded(|w| w.write_array_header(65536)),
            vec![code::ARRAY32, 0x00, 0x01, 0x00, 0x00]
        );
    }

    #[test]
    fn map_header_tiers() {
        assert_eq!(encoded(|w| w.write_map_header(0)), vec![0x80]);
        assert_eq!(encoded(|w| w.write_map_header(15)), vec![0x8F]);
        assert_eq!(
            encoded(|w| w.write_map_header(16)),
            vec![code::MAP16, 0x00, 0x10]
        );
        assert_eq!(
            encoded(|w| w.write_map_header(65536)),
            vec![code::MAP32, 0x00, 0x01, 0x00, 0x00]
        );
    }

    #[test]
    fn unsigned_writes_are_minimal() {
        assert_eq!(encoded(|w| w.write_u8(0x7F)), vec![0x7F]);
        assert_eq!(encoded(|w| w.write_u8(0x80)), vec![code::UINT8, 0x80]);
        assert_eq!(encoded(|w| w.write_u16(200)), vec![code::UINT8, 200]);
        assert_eq!(encoded(|w| w.write_u16(256)), vec![code::UINT16, 0x01, 0x00]);
        assert_eq!(encoded(|w| w.write_u32(255)), vec![code::UINT8, 0xFF]);
        assert_eq!(
            encoded(|w| w.write_u32(65536)),
            vec![code::UINT32, 0x00, 0x01, 0x00, 0x00]
        );
        assert_eq!(encoded(|w| w.write_u64(65535)), vec![code::UINT16, 0xFF, 0xFF]);
        assert_eq!(encoded(|w| w.write_u64(u64::from(u32::MAX) + 1)).len(), 9);
    }

    #[test]
    fn negative_fixint_is_one_byte() {
        assert_eq!(encoded(|w| w.write_i8(-1)), vec![0xFF]);
        assert_eq!(encoded(|w| w.write_i8(-32)), vec![0xE0]);
        assert_eq!(encoded(|w| w.write_i8(-33)), vec![code::INT8, 0xDF]);
        assert_eq!(encoded(|w| w.write_i64(-32)), vec![0xE0]);
    }

    #[test]
    fn signed_writes_are_minimal() {
        assert_eq!(encoded(|w| w.write_i16(100)), vec![100]);
        assert_eq!(encoded(|w| w.write_i16(-100)), vec![code::INT8, 0x9C]);
        assert_eq!(
            encoded(|w| w.write_i32(-129)),
            vec![code::INT16, 0xFF, 0x7F]
        );
        assert_eq!(encoded(|w| w.write_i64(i64::from(i32::MIN))).len(), 5);
        assert_eq!(encoded(|w| w.write_i64(i64::from(i32::MIN) - 1)).len(), 9);
    }

    #[test]
    fn floats_are_never_narrowed() {
        assert_eq!(
            encoded(|w| w.write_f32(0.0)),
            vec![code::FLOAT32, 0, 0, 0, 0]
        );
        assert_eq!(
            encoded(|w| w.write_f64(0.0)),
            vec![code::FLOAT64, 0, 0, 0, 0, 0, 0, 0, 0]
        );
    }

    #[test]
    fn string_tier_bounds() {
        let fix = "a".repeat(31);
        let s8 = "a".repeat(32);
        let s16 = "a".repeat(255);
        let s32 = "a".repeat(65535);
        assert_eq!(encoded(|w| w.write_str(Some(&fix)))[0], 0xBF);
        assert_eq!(encoded(|w| w.write_str(Some(&s8)))[0], code::STR8);
        // Lengths of exactly 255 and 65535 upgrade a tier early; documented
        // behavior of the original selection, kept as-is.
        assert_eq!(encoded(|w| w.write_str(Some(&s16)))[0], code::STR16);
        assert_eq!(encoded(|w| w.write_str(Some(&s32)))[0], code::STR32);
        assert_eq!(encoded(|w| w.write_str(None)), vec![code::NIL]);
    }

    #[test]
    fn copy_out_leaves_writer_reusable() {
        let mut writer = PackWriter::new();
        writer.write_u8(1);
        let first = writer.to_bytes();
        writer.write_u8(2);
        assert_eq!(first, vec![1]);
        assert_eq!(writer.as_slice(), &[1, 2]);
        writer.clear();
        assert!(writer.is_empty());
    }
}
