//! cdb-reader
//!
//! This crate provides the user-facing surface for decoding cdb archives.
//!
//! - `decode_to_json` for one-shot buffer-to-JSON decoding
//! - Re-exports of the schema, record, error, and sink types

pub use cdb_reader_decoder::{
    decode_archive, decode_schema, read_archive, CdbError, DataIntegrityWarning,
    JsonRecordWriter, Record, RecordIter, RecordSink, MAX_FIELD_COUNT,
};
pub use cdb_reader_schema::{ByteReader, Field, FieldType, Schema, Value, FIXED_STRING_SIZE};

/// Decode a cdb archive buffer into a pretty-printed JSON array of its
/// records. `DataIntegrityWarning`s are discarded here; use
/// [`decode_archive`] with a sink to observe them.
pub fn decode_to_json(buffer: &[u8]) -> Result<String, CdbError> {
    let mut bb = ByteReader::new(buffer);
    let schema = decode_schema(&mut bb)?;
    let records = RecordIter::new(bb, &schema)?.collect::<Result<Vec<_>, _>>()?;
    Ok(serde_json::to_string_pretty(&records).unwrap())
}

pub mod error {
    pub use cdb_reader_decoder::CdbError;
}

pub mod schema {
    pub use cdb_reader_schema::{Field, FieldType, Schema, Value};
}

pub mod sink {
    pub use cdb_reader_decoder::{JsonRecordWriter, RecordSink};
}
