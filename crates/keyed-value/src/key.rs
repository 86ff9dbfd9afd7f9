use std::fmt;

/// Key of an [`Array`](crate::Array) entry.
///
/// Strings holding a canonical decimal integer are stored as [`Key::Int`],
/// so `"42"` and `42` address the same entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Key {
    Int(i64),
    Str(String),
}

impl Key {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Key::Int(n) => Some(*n),
            Key::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Key::Int(_) => None,
            Key::Str(s) => Some(s),
        }
    }

    fn parse_int(s: &str) -> Option<i64> {
        let digits = s.strip_prefix('-').unwrap_or(s);
        let canonical = match digits.as_bytes() {
            [] => false,
            [b'0'] => digits.len() == s.len(),
            [first, rest @ ..] => first.is_ascii_digit() && *first != b'0' && rest.iter().all(u8::is_ascii_digit),
        };
        if canonical {
            s.parse().ok()
        } else {
            None
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Int(n) => write!(f, "{n}"),
            Key::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Int(n)
    }
}

impl From<i32> for Key {
    fn from(n: i32) -> Self {
        Key::Int(n.into())
    }
}

impl From<usize> for Key {
    fn from(n: usize) -> Self {
        match i64::try_from(n) {
            Ok(n) => Key::Int(n),
            Err(_) => Key::Str(n.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        match Self::parse_int(&s) {
            Some(n) => Key::Int(n),
            None => Key::Str(s),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        match Self::parse_int(s) {
            Some(n) => Key::Int(n),
            None => Key::Str(s.to_owned()),
        }
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}
