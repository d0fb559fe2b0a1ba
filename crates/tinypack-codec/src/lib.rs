// Author: Lukas Bower
// Purpose: Provide MessagePack scalar and header codec primitives for host tooling.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Minimal MessagePack wire codec.
//!
//! [`PackWriter`] serializes scalar and header values into an owned growable
//! buffer, always selecting the smallest wire representation that round-trips
//! the value exactly. [`PackReader`] decodes them back from a borrowed byte
//! region, coercing numeric wire types permissively to the representation the
//! caller asks for.
//!
//! Arrays and maps are header-only: a header declares how many subsequent
//! independently encoded values (or key/value pairs) the caller is
//! responsible for. This layer never builds or walks a nested value tree;
//! that is the job of an object mapper above it.

pub mod code;
mod error;
pub mod fuzz;
mod reader;
pub mod text;
mod writer;

pub use error::DecodeError;
pub use reader::PackReader;
pub use writer::PackWriter;
