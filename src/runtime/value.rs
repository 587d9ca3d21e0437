use std::fmt;

/// Runtime value representation
///
/// A closed tagged union; values are immutable and duplicated by value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Nil value
    Nil,
    /// Boolean value
    Bool(bool),
    /// Double-precision number value
    Number(f64),
    /// String value
    String(String),
}

impl Value {
    /// Returns the type name used for dispatch and error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }

    /// Returns true if the value is truthy in a boolean context.
    /// Nil and false are the only falsy values; `0` and `""` are truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Nil | Value::Bool(false))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Nil => f.write_str("nil"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
        }
    }
}
