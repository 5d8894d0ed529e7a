use serde::{Deserialize, Serialize};

/// A runtime value that can be substituted into a format template.
///
/// The `Value` enum provides a dynamic type system for template arguments,
/// allowing integers, floats, and strings to be passed interchangeably.
///
/// # Example
///
/// ```
/// use pluralform::Value;
///
/// // Integers become Value::Integer
/// let count: Value = 42.into();
///
/// // Strings become Value::Str
/// let total: Value = "KES. 300".into();
///
/// assert_eq!(count.as_integer(), Some(42));
/// assert_eq!(total.as_str(), Some("KES. 300"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer value (`%d` placeholders).
    Integer(i64),

    /// A floating-point value (`%f` placeholders).
    Float(f64),

    /// A string value (`%@` placeholders).
    Str(String),
}

impl Value {
    /// Get this value as an integer, if it is one.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a float, widening integers.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            Value::Integer(n) => Some(*n as f64),
            Value::Str(_) => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The type tag for this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Integer(_) => ValueType::Integer,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::Str,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Integer(n as i64)
    }
}

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(x as f64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<Quantity> for Value {
    fn from(q: Quantity) -> Self {
        match q {
            Quantity::Integer(n) => Value::Integer(n),
            Quantity::Float(x) => Value::Float(x),
        }
    }
}

/// The declared type of a placeholder or counting variable.
///
/// Corresponds to the printf-style specifier letters: `d` for integers,
/// `f` for floats, `@` for strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// `%d` — integer.
    Integer,
    /// `%f` — floating-point.
    Float,
    /// `%@` — string.
    Str,
}

impl ValueType {
    /// The specifier letter for this type.
    pub fn specifier(self) -> char {
        match self {
            ValueType::Integer => 'd',
            ValueType::Float => 'f',
            ValueType::Str => '@',
        }
    }

    /// Parse a specifier letter into a type.
    pub fn from_specifier(c: char) -> Option<ValueType> {
        match c {
            'd' => Some(ValueType::Integer),
            'f' => Some(ValueType::Float),
            '@' => Some(ValueType::Str),
            _ => None,
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Integer => write!(f, "integer"),
            ValueType::Float => write!(f, "float"),
            ValueType::Str => write!(f, "string"),
        }
    }
}

/// The numeric quantity driving plural category selection.
///
/// A quantity is always numeric. It is used twice during resolution: once
/// to select the plural category, and once as the first positional argument
/// substituted into the selected template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    /// An integer count.
    Integer(i64),
    /// A fractional count (e.g. 4.5 slices).
    Float(f64),
}

impl Quantity {
    /// The type tag for this quantity.
    pub fn value_type(self) -> ValueType {
        match self {
            Quantity::Integer(_) => ValueType::Integer,
            Quantity::Float(_) => ValueType::Float,
        }
    }

    /// The integer value, if this quantity has no fractional part.
    pub fn integral(self) -> Option<i64> {
        match self {
            Quantity::Integer(n) => Some(n),
            Quantity::Float(x) if x.fract() == 0.0 => Some(x as i64),
            Quantity::Float(_) => None,
        }
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Integer(n) => write!(f, "{n}"),
            Quantity::Float(x) => write!(f, "{x}"),
        }
    }
}

impl From<i32> for Quantity {
    fn from(n: i32) -> Self {
        Quantity::Integer(n as i64)
    }
}

impl From<i64> for Quantity {
    fn from(n: i64) -> Self {
        Quantity::Integer(n)
    }
}

impl From<u32> for Quantity {
    fn from(n: u32) -> Self {
        Quantity::Integer(n as i64)
    }
}

impl From<u64> for Quantity {
    fn from(n: u64) -> Self {
        Quantity::Integer(n as i64)
    }
}

impl From<usize> for Quantity {
    fn from(n: usize) -> Self {
        Quantity::Integer(n as i64)
    }
}

impl From<f32> for Quantity {
    fn from(x: f32) -> Self {
        Quantity::Float(x as f64)
    }
}

impl From<f64> for Quantity {
    fn from(x: f64) -> Self {
        Quantity::Float(x)
    }
}
