use std::io::Write;

use cdb_reader_schema::Schema;

use crate::error::CdbError;
use crate::records::{DataIntegrityWarning, Record};

/// Where decoded output goes.
///
/// The decoder itself never writes to the console; callers hand in a sink
/// and decide what records, warnings, and the schema announcement become.
pub trait RecordSink {
    /// Called once, after the header has been decoded and before the
    /// first record.
    fn schema(&mut self, _schema: &Schema) -> Result<(), CdbError> {
        Ok(())
    }

    /// Called once per decoded record, in file order.
    fn record(&mut self, record: &Record) -> Result<(), CdbError>;

    /// Called for each non-fatal data-integrity finding.
    fn warning(&mut self, _warning: &DataIntegrityWarning) {}
}

/// Sink that renders each record as a pretty-printed JSON block: one
/// `"name": value` line per field, schema order preserved, text and
/// characters quoted, numbers and booleans bare.
///
/// Warnings and the schema announcement are left at their no-op defaults;
/// presentation of diagnostics is the caller's concern.
pub struct JsonRecordWriter<W: Write> {
    out: W,
}

impl<W: Write> JsonRecordWriter<W> {
    pub fn new(out: W) -> JsonRecordWriter<W> {
        JsonRecordWriter { out }
    }

    /// Hand back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordSink for JsonRecordWriter<W> {
    fn record(&mut self, record: &Record) -> Result<(), CdbError> {
        let json = serde_json::to_string_pretty(record).unwrap();
        writeln!(self.out, "{}", json)?;
        Ok(())
    }
}
