use crate::error::Error;
use crate::key::Key;

use std::fmt;

use indexmap::IndexMap;

/// Ordered collection of unique keys, each mapped to a [`Value`].
pub type Array = IndexMap<Key, Value>;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Array(Array),
}

/// Builds an [`Array`] keyed `0, 1, 2, ...` in iteration order.
pub fn list<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Array {
    values.into_iter().enumerate().map(|(i, v)| (Key::from(i), v.into())).collect()
}

/// Builds the single-entry array `[key => value]`.
pub fn pair(key: impl Into<Key>, value: impl Into<Value>) -> Value {
    Value::Array(Array::from([(key.into(), value.into())]))
}

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Array(_) => "array",
        }
    }

    /// Type name, and the entry count for arrays.
    pub fn describe(&self) -> String {
        match self {
            Value::Array(a) if a.len() == 1 => "an array with 1 entry".to_owned(),
            Value::Array(a) => format!("an array with {} entries", a.len()),
            other => other.type_name().to_owned(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Looks up `key` if this is an array.
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.as_array()?.get(&key.into())
    }

    /// Unpacks a `[key => value]` array.
    pub fn into_pair(self) -> Result<(Key, Value), Error> {
        let mut entries = match self {
            Value::Array(a) if a.len() == 1 => a.into_iter(),
            other => return Err(Error::InvalidMapperResult { found: other.describe() }),
        };
        entries.next().ok_or_else(|| Error::InvalidMapperResult {
            found: Value::Array(Array::new()).describe(),
        })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => f.write_str(s),
            Value::Array(a) => {
                f.write_str("[")?;
                for (i, (k, v)) in a.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    match v {
                        Value::Str(s) => write!(f, "{k} => {s:?}")?,
                        _ => write!(f, "{k} => {v}")?,
                    }
                }
                f.write_str("]")
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Array> for Value {
    fn from(a: Array) -> Self {
        Value::Array(a)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Int(n) => Value::Int(n),
            Key::Str(s) => Value::Str(s),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => match n.as_i64() {
                Some(n) => Value::Int(n),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Json::String(s) => Value::Str(s),
            Json::Array(list) => Value::Array(self::list(list)),
            Json::Object(map) => Value::Array(map.into_iter().map(|(k, v)| (Key::from(k), Value::from(v))).collect()),
        }
    }
}

/// Literal [`Array`] with explicit keys: `array! { "a" => 1, 42 => "b" }`.
#[macro_export]
macro_rules! array {
    () => {
        $crate::Array::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut ans = $crate::Array::new();
        $(
            ans.insert($crate::Key::from($key), $crate::Value::from($value));
        )+
        ans
    }};
}

/// Literal [`Array`] keyed by position: `list!["+", "-"]`.
#[macro_export]
macro_rules! list {
    () => {
        $crate::Array::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::list([$($crate::Value::from($value)),+])
    };
}
