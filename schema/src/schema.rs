use serde::Serialize;

use crate::FIXED_STRING_SIZE;

/// Field type tag of a cdb schema.
///
/// Raw tag values 0 through 4 map onto the first five variants; every
/// other value is read as `FixedString`. That fallback is part of the
/// format, not an error path: the record layout size depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    Char,
    Bool,
    Int16,
    Enum,
    Int32,
    FixedString,
}

impl FieldType {
    /// Map a raw type tag from the header onto a `FieldType`. Total: no
    /// tag value is rejected.
    pub fn from_tag(tag: i32) -> FieldType {
        match tag {
            0 => FieldType::Char,
            1 => FieldType::Bool,
            2 => FieldType::Int16,
            3 => FieldType::Enum,
            4 => FieldType::Int32,
            _ => FieldType::FixedString,
        }
    }

    /// Number of bytes one value of this type occupies inside a record.
    ///
    /// `Enum` slots take three bytes in the layout even though decoding
    /// them is unsupported.
    pub fn byte_size(self) -> usize {
        match self {
            FieldType::Char => 1,
            FieldType::Bool => 1,
            FieldType::Int16 => 2,
            FieldType::Enum => 3,
            FieldType::Int32 => 4,
            FieldType::FixedString => FIXED_STRING_SIZE,
        }
    }
}

/// One named, typed field of a record layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub name:  String,
    pub type_: FieldType,
}

/// Ordered field list describing one record's layout.
///
/// The field order is significant: it is both the decode order and the
/// display order. A `Schema` is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new(fields: Vec<Field>) -> Schema {
        Schema { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total byte size of one record under this schema.
    pub fn record_size(&self) -> usize {
        self.fields.iter().map(|field| field.type_.byte_size()).sum()
    }
}

#[test]
fn field_type_from_tag() {
    assert_eq!(FieldType::from_tag(0), FieldType::Char);
    assert_eq!(FieldType::from_tag(1), FieldType::Bool);
    assert_eq!(FieldType::from_tag(2), FieldType::Int16);
    assert_eq!(FieldType::from_tag(3), FieldType::Enum);
    assert_eq!(FieldType::from_tag(4), FieldType::Int32);
    assert_eq!(FieldType::from_tag(5), FieldType::FixedString);
    assert_eq!(FieldType::from_tag(-1), FieldType::FixedString);
    assert_eq!(FieldType::from_tag(1000), FieldType::FixedString);
}

#[test]
fn field_type_byte_size() {
    assert_eq!(FieldType::Char.byte_size(), 1);
    assert_eq!(FieldType::Bool.byte_size(), 1);
    assert_eq!(FieldType::Int16.byte_size(), 2);
    assert_eq!(FieldType::Enum.byte_size(), 3);
    assert_eq!(FieldType::Int32.byte_size(), 4);
    assert_eq!(FieldType::FixedString.byte_size(), 30);
}

#[test]
fn schema_record_size() {
    let schema = Schema::new(vec![
        Field { name: "a".to_owned(), type_: FieldType::Char },
        Field { name: "b".to_owned(), type_: FieldType::Int32 },
    ]);
    assert_eq!(schema.len(), 2);
    assert_eq!(schema.record_size(), 5);

    let schema = Schema::new(vec![
        Field { name: "name".to_owned(), type_: FieldType::FixedString },
        Field { name: "flag".to_owned(), type_: FieldType::Bool },
        Field { name: "kind".to_owned(), type_: FieldType::Enum },
    ]);
    assert_eq!(schema.record_size(), 34);
}

#[test]
fn empty_schema() {
    let schema = Schema::new(vec![]);
    assert!(schema.is_empty());
    assert_eq!(schema.len(), 0);
    assert_eq!(schema.record_size(), 0);
}
