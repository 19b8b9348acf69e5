//! cdb-reader-decoder
//!
//! This crate implements:
//!  1) `decode_schema`, which reads the self-describing cdb header into a `Schema`,
//!  2) `RecordIter`, validated lazy decoding of the fixed-size records,
//!  3) `RecordSink` / `JsonRecordWriter`, the output seam for decoded data,
//!  4) `read_archive` / `decode_archive`, the one-file drive routines,
//!  5) Error types (`CdbError`) and the `DataIntegrityWarning` report.

pub mod archive;
pub mod error;
pub mod records;
pub mod schema;
pub mod sink;

pub use archive::{decode_archive, read_archive};
pub use error::CdbError;
pub use records::{DataIntegrityWarning, Record, RecordIter};
pub use schema::{decode_schema, MAX_FIELD_COUNT};
pub use sink::{JsonRecordWriter, RecordSink};
