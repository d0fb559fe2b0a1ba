// Copyright © 2025 Lukas Bower
// SPDX-License-Identifier: Apache-2.0
// Purpose: Define the decode fault raised by the tinypack reader.
// Author: Lukas Bower

//! The single fault kind produced while decoding.

/// Possible faults produced while decoding tinypack values.
///
/// Encoding has no failure path; only the reader faults. A fault leaves the
/// cursor wherever it had already advanced, so a faulted [`crate::PackReader`]
/// must be discarded.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A read would consume bytes beyond the borrowed region.
    #[error("read past end of buffer")]
    Truncated,
    /// The leading format code does not belong to the expected family.
    #[error("unexpected code {code:#04x}, expected {expected}")]
    UnexpectedCode {
        /// The offending format code.
        code: u8,
        /// The code family the calling operation expected.
        expected: &'static str,
    },
    /// A decoded string length fell outside the representable range.
    #[error("invalid string length {0}")]
    InvalidLength(u32),
    /// String payload bytes were not valid UTF-8.
    #[error("invalid utf8 in string payload")]
    InvalidUtf8,
}
