use std::fs;
use std::path::Path;

use cdb_reader_schema::ByteReader;

use crate::error::CdbError;
use crate::records::RecordIter;
use crate::schema::decode_schema;
use crate::sink::RecordSink;

/// Decode one in-memory cdb archive, pushing records and warnings into
/// `sink`.
///
/// The decode is one linear pass: header first, then every record in file
/// order. The first fatal error aborts the pass; records already handed
/// to the sink stay emitted.
pub fn decode_archive(data: &[u8], sink: &mut dyn RecordSink) -> Result<(), CdbError> {
    let mut bb = ByteReader::new(data);
    let schema = decode_schema(&mut bb)?;
    sink.schema(&schema)?;

    let mut records = RecordIter::new(bb, &schema)?;
    while let Some(item) = records.next() {
        for warning in records.drain_warnings() {
            sink.warning(&warning);
        }
        sink.record(&item?)?;
    }
    Ok(())
}

/// Read the file at `path` and decode it as a cdb archive.
///
/// The file handle is scoped to this call and released on every exit
/// path, success or failure.
pub fn read_archive(path: &Path, sink: &mut dyn RecordSink) -> Result<(), CdbError> {
    let data = fs::read(path)?;
    decode_archive(&data, sink)
}
