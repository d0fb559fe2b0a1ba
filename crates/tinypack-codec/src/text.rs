// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Provide the UTF-8 text codec helper used by writer and reader.
// Author: Lukas Bower

//! UTF-8 text codec helper.
//!
//! No length prefix or terminator is embedded here; lengths are carried by
//! the writer/reader header logic.

use crate::DecodeError;

/// Compute the UTF-8 byte length of a text value.
#[must_use]
pub fn encoded_len(value: &str) -> usize {
    value.len()
}

/// Encode text into a destination of exactly [`encoded_len`] bytes.
///
/// # Panics
///
/// Panics if `dst` is not exactly the encoded length of `value`.
pub fn encode_into(value: &str, dst: &mut [u8]) {
    dst.copy_from_slice(value.as_bytes());
}

/// Decode a byte region back into text.
pub fn decode(bytes: &[u8]) -> Result<&str, DecodeError> {
    core::str::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_len_counts_utf8_bytes() {
        assert_eq!(encoded_len(""), 0);
        assert_eq!(encoded_len("abcd"), 4);
        assert_eq!(encoded_len("☄"), 3);
    }

    #[test]
    fn encode_decode_round_trip() {
        let value = "caché☈";
        let mut buf = vec![0u8; encoded_len(value)];
        encode_into(value, &mut buf);
        assert_eq!(decode(&buf), Ok(value));
    }

    #[test]
    fn decode_rejects_malformed_bytes() {
        assert_eq!(decode(&[0xFE, 0xFF]), Err(DecodeError::InvalidUtf8));
    }
}
