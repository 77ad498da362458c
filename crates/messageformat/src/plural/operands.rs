//! TR35 plural operands.
//!
//! See <https://unicode.org/reports/tr35/tr35-numbers.html#Operands>. Only the
//! `i`, `v`, `w`, `f` and `t` operands are derived; exponent notation is not
//! supported.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::types::Value;

/// The operand quintuple of a number.
///
/// `1.230` derives to `i = 1, v = 3, w = 2, f = 230, t = 23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Operands {
    /// Integer digits.
    pub i: u64,
    /// Number of visible fraction digits, with trailing zeros.
    pub v: usize,
    /// Number of visible fraction digits, without trailing zeros.
    pub w: usize,
    /// Visible fraction digits, with trailing zeros.
    pub f: u64,
    /// Visible fraction digits, without trailing zeros.
    pub t: u64,
}

/// Why a value could not be turned into plural operands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperandError {
    #[error("expected numeric type, got {kind}")]
    UnsupportedType { kind: &'static str },

    #[error("expected numeric value, got '{value}'")]
    NotNumeric { value: String },

    #[error("operand '{digits}' out of range in '{value}'")]
    OutOfRange { value: String, digits: String },
}

/// Derive the operands of a bound value.
///
/// Integers use their absolute value, floats their shortest round-trip
/// decimal form, and strings are taken as written after dropping a leading
/// `-`, so `"1.30"` keeps its trailing zero.
///
/// # Examples
///
/// ```
/// use messageformat::plural::{Operands, derive_operands};
/// use messageformat::Value;
///
/// let ops = derive_operands(&Value::from("1.230")).unwrap();
/// assert_eq!(ops, Operands { i: 1, v: 3, w: 2, f: 230, t: 23 });
/// ```
pub fn derive_operands(value: &Value) -> Result<Operands, OperandError> {
    match value {
        Value::Number(n) => operands_from_decimal(&n.abs_decimal()),
        Value::String(s) => operands_from_decimal(s),
        other => Err(OperandError::UnsupportedType { kind: other.kind() }),
    }
}

fn operands_from_decimal(number: &str) -> Result<Operands, OperandError> {
    let unsigned = number.strip_prefix('-').unwrap_or(number);
    let (integral, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(integral) || !all_digits(fraction) || (integral.is_empty() && fraction.is_empty())
    {
        return Err(OperandError::NotNumeric {
            value: number.to_string(),
        });
    }

    let parse = |digits: &str| -> Result<u64, OperandError> {
        if digits.is_empty() {
            return Ok(0);
        }
        digits.parse::<u64>().map_err(|_| OperandError::OutOfRange {
            value: number.to_string(),
            digits: digits.to_string(),
        })
    };

    let without_leading = fraction.trim_start_matches('0');
    Ok(Operands {
        i: parse(integral)?,
        v: fraction.len(),
        w: fraction.trim_end_matches('0').len(),
        f: parse(without_leading)?,
        t: parse(without_leading.trim_end_matches('0'))?,
    })
}

impl fmt::Display for Operands {
    /// Writes the decimal these operands describe, e.g. `1.230`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.v == 0 {
            write!(f, "{}", self.i)
        } else {
            write!(f, "{}.{:0>width$}", self.i, self.f, width = self.v)
        }
    }
}

impl FromStr for Operands {
    type Err = OperandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        operands_from_decimal(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_integral_part_is_zero() {
        let ops: Operands = ".5".parse().unwrap();
        assert_eq!(ops.i, 0);
        assert_eq!(ops.f, 5);
    }

    #[test]
    fn display_restores_fraction_zeros() {
        let ops: Operands = "1.030".parse().unwrap();
        assert_eq!(ops.to_string(), "1.030");
        let ops: Operands = "-17".parse().unwrap();
        assert_eq!(ops.to_string(), "17");
    }

    #[test]
    fn rejects_non_digits() {
        assert!(matches!(
            "1e5".parse::<Operands>(),
            Err(OperandError::NotNumeric { .. })
        ));
        assert!(matches!(
            "".parse::<Operands>(),
            Err(OperandError::NotNumeric { .. })
        ));
    }
}
