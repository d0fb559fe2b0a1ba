// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Decode MessagePack scalar and header values from a borrowed region.
// Author: Lukas Bower

//! MessagePack reader over a borrowed byte region.

use crate::code;
use crate::text;
use crate::DecodeError;

/// Largest string length the original signed widening could represent.
const MAX_STR_LEN: u32 = i32::MAX as u32;

/// Deserializer advancing a private cursor over a borrowed byte region.
///
/// Every read consumes exactly the bytes implied by the leading format code.
/// A fault leaves the cursor wherever it had already advanced (no rollback);
/// discard the reader after any fault. The source bytes are never copied at
/// construction, and the reader cannot outlive the region it borrows.
#[derive(Debug, Clone)]
pub struct PackReader<'a> {
    buf: &'a [u8],
    offset: usize,
}

/// Numeric value decoded in phase one of a permissive read, tagged with its
/// wire kind and held at the widest width of that kind.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Numeric {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl<'a> PackReader<'a> {
    /// Create a reader over caller-owned bytes, cursor at the start.
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    /// Current cursor position within the borrowed region.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Number of bytes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }

    /// Peek the next code: consume it and report `true` if it is nil,
    /// otherwise rewind one byte and report `false`.
    ///
    /// A zero-cost lookahead for optional fields. Faults only if the region
    /// is already exhausted.
    pub fn try_read_nil(&mut self) -> Result<bool, DecodeError> {
        let is_nil = self.read_next()? == code::NIL;
        if !is_nil {
            self.offset -= 1;
        }
        Ok(is_nil)
    }

    /// Read an array header: `None` for the nil sentinel, `Some(count)` for
    /// a fixarray/array16/array32 header.
    pub fn read_array_header(&mut self) -> Result<Option<u32>, DecodeError> {
        let c = self.read_next()?;
        if c == code::NIL {
            return Ok(None);
        }
        let len = if code::is_fixarray(c) {
            u32::from(c - code::MIN_FIXARRAY)
        } else if c == code::ARRAY16 {
            u32::from(self.read_raw16()?)
        } else if c == code::ARRAY32 {
            self.read_raw32()?
        } else {
            return Err(DecodeError::UnexpectedCode {
                code: c,
                expected: "array header",
            });
        };
        Ok(Some(len))
    }

    /// Read a map header: `None` for the nil sentinel, `Some(pair_count)`
    /// for a fixmap/map16/map32 header.
    pub fn read_map_header(&mut self) -> Result<Option<u32>, DecodeError> {
        let c = self.read_next()?;
        if c == code::NIL {
            return Ok(None);
        }
        let len = if code::is_fixmap(c) {
            u32::from(c - code::MIN_FIXMAP)
        } else if c == code::MAP16 {
            u32::from(self.read_raw16()?)
        } else if c == code::MAP32 {
            self.read_raw32()?
        } else {
            return Err(DecodeError::UnexpectedCode {
                code: c,
                expected: "map header",
            });
        };
        Ok(Some(len))
    }

    /// Read a string: `None` for the nil sentinel, otherwise the decoded
    /// UTF-8 text.
    pub fn read_str(&mut self) -> Result<Option<String>, DecodeError> {
        let c = self.read_next()?;
        if c == code::NIL {
            return Ok(None);
        }
        let len = if code::is_fixstr(c) {
            u32::from(c - code::MIN_FIXSTR)
        } else if c == code::STR8 {
            u32::from(self.read_raw8()?)
        } else if c == code::STR16 {
            u32::from(self.read_raw16()?)
        } else if c == code::STR32 {
            self.read_raw32()?
        } else {
            return Err(DecodeError::UnexpectedCode {
                code: c,
                expected: "string",
            });
        };
        // Guard against corrupt widened headers.
        if len > MAX_STR_LEN {
            return Err(DecodeError::InvalidLength(len));
        }
        let bytes = self.read_slice(len as usize)?;
        Ok(Some(text::decode(bytes)?.to_owned()))
    }

    /// Read any numeric value as `u8`, truncating or converting as needed.
    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        Ok(self.read_numeric()?.as_u8())
    }

    /// Read any numeric value as `u16`, truncating or converting as needed.
    pub fn read_u16(&mut self) -> Result<u16, DecodeError> {
        Ok(self.read_numeric()?.as_u16())
    }

    /// Read any numeric value as `u32`, truncating or converting as needed.
    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(self.read_numeric()?.as_u32())
    }

    /// Read any numeric value as `u64`, truncating or converting as needed.
    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        Ok(self.read_numeric()?.as_u64())
    }

    /// Read any numeric value as `i8`, truncating or converting as needed.
    pub fn read_i8(&mut self) -> Result<i8, DecodeError> {
        Ok(self.read_numeric()?.as_i8())
    }

    /// Read any numeric value as `i16`, truncating or converting as needed.
    pub fn read_i16(&mut self) -> Result<i16, DecodeError> {
        Ok(self.read_numeric()?.as_i16())
    }

    /// Read any numeric value as `i32`, truncating or converting as needed.
    pub fn read_i32(&mut self) -> Result<i32, DecodeError> {
        Ok(self.read_numeric()?.as_i32())
    }

    /// Read any numeric value as `i64`, truncating or converting as needed.
    pub fn read_i64(&mut self) -> Result<i64, DecodeError> {
        Ok(self.read_numeric()?.as_i64())
    }

    /// Read any numeric value as `f32`, converting as needed.
    pub fn read_f32(&mut self) -> Result<f32, DecodeError> {
        Ok(self.read_numeric()?.as_f32())
    }

    /// Read any numeric value as `f64`, converting as needed.
    pub fn read_f64(&mut self) -> Result<f64, DecodeError> {
        Ok(self.read_numeric()?.as_f64())
    }

    /// Consume one raw byte with no code interpretation.
    pub fn read_raw8(&mut self) -> Result<u8, DecodeError> {
        self.read_next()
    }

    /// Consume two raw big-endian bytes with no code interpretation.
    pub fn read_raw16(&mut self) -> Result<u16, DecodeError> {
        let bytes = self.read_slice(2)?;
        Ok(u16::from_be_bytes(
            bytes.try_into().expect("slice length checked"),
        ))
    }

    /// Consume four raw big-endian bytes with no code interpretation.
    pub fn read_raw32(&mut self) -> Result<u32, DecodeError> {
        let bytes = self.read_slice(4)?;
        Ok(u32::from_be_bytes(
            bytes.try_into().expect("slice length checked"),
        ))
    }

    /// Consume eight raw big-endian bytes with no code interpretation.
    pub fn read_raw64(&mut self) -> Result<u64, DecodeError> {
        let bytes = self.read_slice(8)?;
        Ok(u64::from_be_bytes(
            bytes.try_into().expect("slice length checked"),
        ))
    }

    /// Phase one of a permissive numeric read: decode the leading code into
    /// a tagged value at the widest width of its wire kind.
    fn read_numeric(&mut self) -> Result<Numeric, DecodeError> {
        let c = self.read_next()?;
        if code::is_positive_fixint(c) {
            return Ok(Numeric::Unsigned(u64::from(c)));
        }
        if code::is_negative_fixint(c) {
            return Ok(Numeric::Signed(i64::from(c as i8)));
        }
        match c {
            code::UINT8 => Ok(Numeric::Unsigned(u64::from(self.read_raw8()?))),
            code::UINT16 => Ok(Numeric::Unsigned(u64::from(self.read_raw16()?))),
            code::UINT32 => Ok(Numeric::Unsigned(u64::from(self.read_raw32()?))),
            code::UINT64 => Ok(Numeric::Unsigned(self.read_raw64()?)),
            code::INT8 => Ok(Numeric::Signed(i64::from(self.read_raw8()? as i8))),
            code::INT16 => Ok(Numeric::Signed(i64::from(self.read_raw16()? as i16))),
            code::INT32 => Ok(Numeric::Signed(i64::from(self.read_raw32()? as i32))),
            code::INT64 => Ok(Numeric::Signed(self.read_raw64()? as i64)),
            code::FLOAT32 => Ok(Numeric::Float(f64::from(f32::from_bits(
                self.read_raw32()?,
            )))),
            code::FLOAT64 => Ok(Numeric::Float(f64::from_bits(self.read_raw64()?))),
            other => Err(DecodeError::UnexpectedCode {
                code: other,
                expected: "number",
            }),
        }
    }

    fn read_next(&mut self) -> Result<u8, DecodeError> {
        let byte = *self.buf.get(self.offset).ok_or(DecodeError::Truncated)?;
        self.offset += 1;
        Ok(byte)
    }

    fn read_slice(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let end = self
            .offset
            .checked_add(len)
            .ok_or(DecodeError::Truncated)?;
        if end > self.buf.len() {
            return Err(DecodeError::Truncated);
        }
        let slice = &self.buf[self.offset..end];
        self.offset = end;
        Ok(slice)
    }
}

// Phase two of a permissive numeric read. Integer-to-integer conversions are
// two's-complement narrowing/widening; float-to-integer truncates toward
// zero; float32 round-trips through f64 without loss.
impl Numeric {
    fn as_u8(self) -> u8 {
        match self {
            Self::Unsigned(v) => v as u8,
            Self::Signed(v) => v as u8,
            Self::Float(v) => v as u8,
        }
    }

    fn as_u16(self) -> u16 {
        match self {
            Self::Unsigned(v) => v as u16,
            Self::Signed(v) => v as u16,
            Self::Float(v) => v as u16,
        }
    }

    fn as_u32(self) -> u32 {
        match self {
            Self::Unsigned(v) => v as u32,
            Self::Signed(v) => v as u32,
            Self::Float(v) => v as u32,
        }
    }

    fn as_u64(self) -> u64 {
        match self {
            Self::Unsigned(v) => v,
            Self::Signed(v) => v as u64,
            Self::Float(v) => v as u64,
        }
    }

    fn as_i8(self) -> i8 {
        match self {
            Self::Unsigned(v) => v as i8,
            Self::Signed(v) => v as i8,
            Self::Float(v) => v as i8,
        }
    }

    fn as_i16(self) -> i16 {
        match self {
            Self::Unsigned(v) => v as i16,
            Self::Signed(v) => v as i16,
            Self::Float(v) => v as i16,
        }
    }

    fn as_i32(self) -> i32 {
        match self {
            Self::Unsigned(v) => v as i32,
            Self::Signed(v) => v as i32,
            Self::Float(v) => v as i32,
        }
    }

    fn as_i64(self) -> i64 {
        match self {
            Self::Unsigned(v) => v as i64,
            Self::Signed(v) => v,
            Self::Float(v) => v as i64,
        }
    }

    fn as_f32(self) -> f32 {
        match self {
            Self::Unsigned(v) => v as f32,
            Self::Signed(v) => v as f32,
            Self::Float(v) => v as f32,
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Self::Unsigned(v) => v as f64,
            Self::Signed(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}
