use std::fmt;

use chrono::{DateTime, Utc};

/// A number bound to a pattern argument, tagged with its width.
///
/// Offset arithmetic preserves the tag, so a `U8` argument stays a `U8` after
/// `offset:k` is applied (wrapping like a fixed-width conversion would).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
}

impl Number {
    /// Subtract a plural offset, keeping the width tag.
    pub fn minus_offset(self, offset: i64) -> Number {
        match self {
            Number::I8(n) => Number::I8(i64::from(n).wrapping_sub(offset) as i8),
            Number::I16(n) => Number::I16(i64::from(n).wrapping_sub(offset) as i16),
            Number::I32(n) => Number::I32(i64::from(n).wrapping_sub(offset) as i32),
            Number::I64(n) => Number::I64(n.wrapping_sub(offset)),
            Number::Isize(n) => Number::Isize((n as i64).wrapping_sub(offset) as isize),
            Number::U8(n) => Number::U8(i64::from(n).wrapping_sub(offset) as u8),
            Number::U16(n) => Number::U16(i64::from(n).wrapping_sub(offset) as u16),
            Number::U32(n) => Number::U32(i64::from(n).wrapping_sub(offset) as u32),
            Number::U64(n) => Number::U64((n as i64).wrapping_sub(offset) as u64),
            Number::Usize(n) => Number::Usize((n as i64).wrapping_sub(offset) as usize),
            Number::F32(n) => Number::F32(n - offset as f32),
            Number::F64(n) => Number::F64(n - offset as f64),
        }
    }

    /// Whether this number equals an explicit `=N` clause value.
    pub fn equals(self, explicit: i64) -> bool {
        let explicit_wide = i128::from(explicit);
        match self {
            Number::I8(n) => i128::from(n) == explicit_wide,
            Number::I16(n) => i128::from(n) == explicit_wide,
            Number::I32(n) => i128::from(n) == explicit_wide,
            Number::I64(n) => i128::from(n) == explicit_wide,
            Number::Isize(n) => n as i128 == explicit_wide,
            Number::U8(n) => i128::from(n) == explicit_wide,
            Number::U16(n) => i128::from(n) == explicit_wide,
            Number::U32(n) => i128::from(n) == explicit_wide,
            Number::U64(n) => i128::from(n) == explicit_wide,
            Number::Usize(n) => n as i128 == explicit_wide,
            Number::F32(n) => n == explicit as f32,
            Number::F64(n) => n == explicit as f64,
        }
    }

    /// The decimal form of the absolute value, without sign.
    pub fn abs_decimal(self) -> String {
        match self {
            Number::I8(n) => n.unsigned_abs().to_string(),
            Number::I16(n) => n.unsigned_abs().to_string(),
            Number::I32(n) => n.unsigned_abs().to_string(),
            Number::I64(n) => n.unsigned_abs().to_string(),
            Number::Isize(n) => n.unsigned_abs().to_string(),
            Number::F32(n) => n.abs().to_string(),
            Number::F64(n) => n.abs().to_string(),
            unsigned => unsigned.to_string(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::I8(n) => write!(f, "{n}"),
            Number::I16(n) => write!(f, "{n}"),
            Number::I32(n) => write!(f, "{n}"),
            Number::I64(n) => write!(f, "{n}"),
            Number::Isize(n) => write!(f, "{n}"),
            Number::U8(n) => write!(f, "{n}"),
            Number::U16(n) => write!(f, "{n}"),
            Number::U32(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::Usize(n) => write!(f, "{n}"),
            Number::F32(n) => write!(f, "{n}"),
            Number::F64(n) => write!(f, "{n}"),
        }
    }
}

/// A runtime value bound to a pattern argument.
///
/// # Example
///
/// ```
/// use messageformat::{Number, Value};
///
/// let count: Value = 3u8.into();
/// assert_eq!(count, Value::Number(Number::U8(3)));
///
/// let name: Value = "Alice".into();
/// assert_eq!(name.render().as_deref(), Some("Alice"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Any integer or floating-point number.
    Number(Number),

    /// A string. Decimal strings such as `"1.50"` are accepted wherever a
    /// number is expected and keep their written fraction digits.
    String(String),

    /// A boolean, rendered as `true`/`false`.
    Bool(bool),

    /// A point in time, usable only by date/time arguments.
    Instant(DateTime<Utc>),
}

impl Value {
    /// A short name for the kind of value, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Number(Number::F32(_) | Number::F64(_)) => "float",
            Value::Number(_) => "integer",
            Value::String(_) => "string",
            Value::Bool(_) => "bool",
            Value::Instant(_) => "instant",
        }
    }

    /// Locale-independent text form of a scalar value.
    ///
    /// Returns `None` for values that have no plain text form.
    pub fn render(&self) -> Option<String> {
        match self {
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            Value::Bool(b) => Some(b.to_string()),
            Value::Instant(_) => None,
        }
    }

    /// Subtract a plural offset.
    ///
    /// Numbers keep their width tag. Strings are parsed as floating point
    /// and reformatted as a decimal string. Returns `None` for values that
    /// are not numeric.
    pub fn minus_offset(&self, offset: i64) -> Option<Value> {
        match self {
            Value::Number(n) => Some(Value::Number(n.minus_offset(offset))),
            Value::String(s) => {
                let parsed = s.parse::<f64>().ok()?;
                Some(Value::String((parsed - offset as f64).to_string()))
            }
            Value::Bool(_) | Value::Instant(_) => None,
        }
    }

    /// Whether this value equals an explicit `=N` clause value.
    ///
    /// Returns `None` for values that are not numeric.
    pub fn equals_explicit(&self, explicit: i64) -> Option<bool> {
        match self {
            Value::Number(n) => Some(n.equals(explicit)),
            Value::String(s) => {
                let parsed = s.parse::<f64>().ok()?;
                Some(parsed == explicit as f64)
            }
            Value::Bool(_) | Value::Instant(_) => None,
        }
    }

    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as an instant, if it is one.
    pub fn as_instant(&self) -> Option<&DateTime<Utc>> {
        match self {
            Value::Instant(t) => Some(t),
            _ => None,
        }
    }
}

macro_rules! number_from {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Number {
                fn from(n: $ty) -> Self {
                    Number::$variant(n)
                }
            }

            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(Number::$variant(n))
                }
            }
        )+
    };
}

number_from! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Instant(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_keeps_width() {
        assert_eq!(Number::I8(5).minus_offset(1), Number::I8(4));
        assert_eq!(Number::F32(2.5).minus_offset(1), Number::F32(1.5));
    }

    #[test]
    fn offset_wraps_unsigned() {
        assert_eq!(Number::U8(0).minus_offset(1), Number::U8(255));
    }

    #[test]
    fn string_offset_reformats() {
        let value = Value::from("3.50");
        assert_eq!(value.minus_offset(1), Some(Value::from("2.5")));
        assert_eq!(Value::from("abc").minus_offset(1), None);
    }

    #[test]
    fn explicit_match_across_kinds() {
        assert_eq!(Value::from(1u64).equals_explicit(1), Some(true));
        assert_eq!(Value::from(1.0f64).equals_explicit(1), Some(true));
        assert_eq!(Value::from("1").equals_explicit(1), Some(true));
        assert_eq!(Value::from(true).equals_explicit(1), None);
    }

    #[test]
    fn floats_render_shortest() {
        assert_eq!(Value::from(1.3f32).render().unwrap(), "1.3");
        assert_eq!(Value::from(1.5f64).render().unwrap(), "1.5");
        assert_eq!(Value::from(2.0f64).render().unwrap(), "2");
    }
}
