// Author: Lukas Bower
// Purpose: Provide a fuzz corpus harness for MessagePack decoding.

//! Fuzz corpus harnesses for MessagePack decoding.

use crate::PackReader;

/// Exercise every decoder path on arbitrary corpus bytes.
///
/// Each operation family runs over a fresh reader so a fault in one family
/// cannot mask another; a final pass drains the region as consecutive
/// numeric values the way a schema layer would.
pub fn fuzz_decode(bytes: &[u8]) {
    let mut reader = PackReader::new(bytes);
    let _ = reader.try_read_nil();

    let mut reader = PackReader::new(bytes);
    let _ = reader.read_array_header();

    let mut reader = PackReader::new(bytes);
    let _ = reader.read_map_header();

    let mut reader = PackReader::new(bytes);
    let _ = reader.read_str();

    let mut reader = PackReader::new(bytes);
    let _ = reader.read_f64();

    let mut reader = PackReader::new(bytes);
    while reader.remaining() > 0 {
        if reader.read_i64().is_err() {
            break;
        }
    }
}
