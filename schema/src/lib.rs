//! This is a Rust library with the core types for reading files in the cdb
//! archive format: a small self-describing binary container holding one
//! field schema followed by a homogeneous array of fixed-size records.
//!
//! Structure of a cdb file (all integers little-endian):
//!
//! ```text
//! [ number_of_fields: i32,
//!   number_of_fields x name slot of 0x1E bytes, NUL padded,
//!   number_of_fields x i32 (which represent the types of each field),
//!   records of the layout that the header describes, until end of file ]
//! ```
//!
//! ```
//! use cdb_reader_schema::*;
//!
//! let mut bb = ByteReader::new(&[0x01, 0x00, 0xFF, 0xFF, 0xFF, 0xFF]);
//! assert_eq!(bb.read_i16_le(), Ok(1));
//! assert_eq!(bb.read_i32_le(), Ok(-1));
//! ```

pub mod reader;
pub mod schema;
pub mod value;

pub use reader::*;
pub use schema::*;
pub use value::*;

/// Byte width of a `FixedString` record slot, and of each field name slot
/// in the header.
pub const FIXED_STRING_SIZE: usize = 0x1E;
