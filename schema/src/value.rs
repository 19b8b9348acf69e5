use serde::Serialize;

/// One decoded record field.
///
/// The cdb format has no nested or variable-length records, so every value
/// is scalar. Serialization is untagged: records render as plain JSON
/// values, with characters and text quoted and numbers and booleans bare.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Char(char),
    Bool(bool),
    Int16(i16),
    Int32(i32),
    String(String),
}

impl Value {
    /// A convenience method to extract the value out of a [Char](#variant.Char).
    /// Returns `'\0'` for other value kinds.
    pub fn as_char(&self) -> char {
        match *self {
            Value::Char(value) => value,
            _ => '\0',
        }
    }

    /// A convenience method to extract the value out of a [Bool](#variant.Bool).
    /// Returns `false` for other value kinds.
    pub fn as_bool(&self) -> bool {
        match *self {
            Value::Bool(value) => value,
            _ => false,
        }
    }

    /// A convenience method to extract the value out of an [Int16](#variant.Int16).
    /// Returns `0` for other value kinds.
    pub fn as_i16(&self) -> i16 {
        match *self {
            Value::Int16(value) => value,
            _ => 0,
        }
    }

    /// A convenience method to extract the value out of an [Int32](#variant.Int32).
    /// Returns `0` for other value kinds.
    pub fn as_i32(&self) -> i32 {
        match *self {
            Value::Int32(value) => value,
            _ => 0,
        }
    }

    /// A convenience method to extract the value out of a [String](#variant.String).
    /// Returns `""` for other value kinds.
    pub fn as_str(&self) -> &str {
        match *self {
            Value::String(ref value) => value.as_str(),
            _ => "",
        }
    }
}

#[test]
fn value_accessors() {
    assert_eq!(Value::Char('x').as_char(), 'x');
    assert_eq!(Value::Bool(true).as_char(), '\0');
    assert_eq!(Value::Bool(true).as_bool(), true);
    assert_eq!(Value::Int16(7).as_bool(), false);
    assert_eq!(Value::Int16(-42).as_i16(), -42);
    assert_eq!(Value::Int32(123456).as_i32(), 123456);
    assert_eq!(Value::Char('x').as_i32(), 0);
    assert_eq!(Value::String("abc".to_owned()).as_str(), "abc");
    assert_eq!(Value::Int32(1).as_str(), "");
}

#[test]
fn value_serializes_bare() {
    let json = |value: &Value| serde_json::to_string(value).unwrap();
    assert_eq!(json(&Value::Char('x')), "\"x\"");
    assert_eq!(json(&Value::Bool(true)), "true");
    assert_eq!(json(&Value::Bool(false)), "false");
    assert_eq!(json(&Value::Int16(-1)), "-1");
    assert_eq!(json(&Value::Int32(-2147483648)), "-2147483648");
    assert_eq!(json(&Value::String("abc".to_owned())), "\"abc\"");
}
