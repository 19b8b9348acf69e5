use cdb_reader_schema::{ByteReader, Field, FieldType, Schema};

use crate::error::CdbError;

/// Upper bound on the declared field count. Counts above it (or below
/// zero) are rejected before the name and type tables are allocated.
pub const MAX_FIELD_COUNT: i32 = 0xFFFF;

/// Decode the self-describing header at the cursor into a `Schema`.
///
/// The header is one little-endian i32 field count, then that many fixed
/// 0x1E-byte NUL-padded name slots, then that many little-endian i32 type
/// tags. The cursor is left positioned on the first record. Any read
/// failure is fatal to the whole file.
pub fn decode_schema(bb: &mut ByteReader) -> Result<Schema, CdbError> {
    let field_count = bb
        .read_i32_le()
        .map_err(|_| CdbError::TruncatedInput("the field count".to_owned()))?;

    if !(0..=MAX_FIELD_COUNT).contains(&field_count) {
        return Err(CdbError::InvalidSchema(format!(
            "field count {} is outside 0..={}",
            field_count, MAX_FIELD_COUNT
        )));
    }
    let field_count = field_count as usize;

    let mut field_names = Vec::with_capacity(field_count);
    for i in 0..field_count {
        let name = bb
            .read_fixed_str()
            .map_err(|_| CdbError::TruncatedInput(format!("the name slot of field {}", i)))?;
        field_names.push(name);
    }

    let mut field_types = Vec::with_capacity(field_count);
    for i in 0..field_count {
        let tag = bb
            .read_i32_le()
            .map_err(|_| CdbError::TruncatedInput(format!("the type tag of field {}", i)))?;
        field_types.push(FieldType::from_tag(tag));
    }

    let fields = field_names
        .into_iter()
        .zip(field_types)
        .map(|(name, type_)| Field { name, type_ })
        .collect();

    Ok(Schema::new(fields))
}
