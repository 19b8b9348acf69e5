use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use cdb_reader_schema::{ByteReader, Field, FieldType, Schema, Value};

use crate::error::CdbError;

/// One decoded record: `(field name, value)` pairs in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn fields(&self) -> &[(String, Value)] {
        &self.fields
    }

    /// Look up a field's value by name. Returns `None` if the schema had
    /// no field with that name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, value)| value)
    }
}

// Records serialize as JSON objects with the fields in schema order.
impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Non-fatal finding made while decoding a record: a `Bool` slot held a
/// byte other than 0 or 1. The value decodes as `raw != 0` and decoding
/// continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataIntegrityWarning {
    pub record_index: usize,
    pub field: String,
    pub raw: u8,
}

impl fmt::Display for DataIntegrityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Field \"{}\" of record {} holds the bool byte 0x{:02X}; expected 0 or 1",
            self.field, self.record_index, self.raw
        )
    }
}

/// Lazy iterator over the records that follow the header.
///
/// Construction validates that the remaining input divides evenly into
/// whole records; iteration then yields exactly that many, in file order,
/// consuming the cursor. The iterator is not restartable and fuses after
/// the first fatal error.
pub struct RecordIter<'buf, 'schema> {
    bb: ByteReader<'buf>,
    schema: &'schema Schema,
    next_index: usize,
    record_count: usize,
    warnings: Vec<DataIntegrityWarning>,
    failed: bool,
}

impl<'buf, 'schema> RecordIter<'buf, 'schema> {
    pub fn new(bb: ByteReader<'buf>, schema: &'schema Schema) -> Result<Self, CdbError> {
        let record_size = schema.record_size();
        if record_size == 0 {
            return Err(CdbError::InvalidSchema(
                "the record size is zero; the header declares no fields".to_owned(),
            ));
        }
        let remaining = bb.remaining();
        if remaining % record_size != 0 {
            return Err(CdbError::MisalignedRecordCount {
                remaining,
                record_size,
            });
        }
        Ok(RecordIter {
            bb,
            schema,
            next_index: 0,
            record_count: remaining / record_size,
            warnings: Vec::new(),
            failed: false,
        })
    }

    /// Total number of records the stream holds.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Take the `DataIntegrityWarning`s accumulated since the last call.
    /// Callers that surface warnings drain this after each record.
    pub fn drain_warnings(&mut self) -> Vec<DataIntegrityWarning> {
        std::mem::take(&mut self.warnings)
    }
}

impl Iterator for RecordIter<'_, '_> {
    type Item = Result<Record, CdbError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next_index == self.record_count {
            return None;
        }
        let index = self.next_index;
        self.next_index += 1;

        let warnings = &mut self.warnings;
        match decode_record(&mut self.bb, self.schema, index, &mut |warning| {
            warnings.push(warning)
        }) {
            Ok(record) => Some(Ok(record)),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = if self.failed {
            0
        } else {
            self.record_count - self.next_index
        };
        (left, Some(left))
    }
}

/// Decode one record at the cursor: for each field in schema order, read
/// exactly `byte_size()` bytes and interpret them per the field's type.
fn decode_record(
    bb: &mut ByteReader,
    schema: &Schema,
    record_index: usize,
    warn: &mut dyn FnMut(DataIntegrityWarning),
) -> Result<Record, CdbError> {
    let mut fields = Vec::with_capacity(schema.len());
    for field in schema.fields() {
        let value = decode_value(bb, field, record_index, warn)?;
        fields.push((field.name.clone(), value));
    }
    Ok(Record { fields })
}

fn decode_value(
    bb: &mut ByteReader,
    field: &Field,
    record_index: usize,
    warn: &mut dyn FnMut(DataIntegrityWarning),
) -> Result<Value, CdbError> {
    let truncated = || {
        CdbError::TruncatedInput(format!(
            "field \"{}\" of record {}",
            field.name, record_index
        ))
    };

    match field.type_ {
        FieldType::Char => {
            let raw = bb.read_byte().map_err(|_| truncated())?;
            Ok(Value::Char(char::from(raw)))
        }
        FieldType::Bool => {
            let raw = bb.read_byte().map_err(|_| truncated())?;
            if raw > 1 {
                warn(DataIntegrityWarning {
                    record_index,
                    field: field.name.clone(),
                    raw,
                });
            }
            Ok(Value::Bool(raw != 0))
        }
        FieldType::Int16 => Ok(Value::Int16(bb.read_i16_le().map_err(|_| truncated())?)),
        FieldType::Int32 => Ok(Value::Int32(bb.read_i32_le().map_err(|_| truncated())?)),
        FieldType::FixedString => {
            Ok(Value::String(bb.read_fixed_str().map_err(|_| truncated())?))
        }
        FieldType::Enum => Err(CdbError::UnsupportedFieldType(field.name.clone())),
    }
}
