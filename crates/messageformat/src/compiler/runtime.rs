//! Runtime primitives called by compiled programs.
//!
//! These reproduce the clause selection of the direct formatter, except that
//! a missing binding is not an error: it reads as an empty string when
//! printed or selected on, and as `0` when matched as a plural or printed
//! through `#`.

use std::collections::HashMap;

use icu_locale_core::Locale;

use super::program::{Call, Operand, RuntimeFunction};
use crate::datetime::{DateTimeService, DateTimeStyle, EnglishDateTime};
use crate::interpreter::FormatError;
use crate::plural::{IcuPluralRules, PluralKind, PluralRuleProvider, resolve_category};
use crate::types::Value;

/// The result of invoking a runtime primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Text(String),
    Bool(bool),
}

/// The collaborators runtime primitives resolve plurals and instants with.
#[derive(Clone, Copy)]
pub struct Runtime<'a> {
    plural_rules: &'a dyn PluralRuleProvider,
    date_time: &'a dyn DateTimeService,
    time_zone: &'a str,
}

impl Default for Runtime<'static> {
    fn default() -> Self {
        Self {
            plural_rules: &IcuPluralRules,
            date_time: &EnglishDateTime,
            time_zone: "UTC",
        }
    }
}

impl<'a> Runtime<'a> {
    pub fn new(
        plural_rules: &'a dyn PluralRuleProvider,
        date_time: &'a dyn DateTimeService,
        time_zone: &'a str,
    ) -> Self {
        Self {
            plural_rules,
            date_time,
            time_zone,
        }
    }

    /// Print a bound value, or the empty string if it is missing.
    pub fn print(&self, field: &str, value: Option<&Value>) -> Result<String, FormatError> {
        let Some(value) = value else {
            return Ok(String::new());
        };
        value
            .render()
            .ok_or_else(|| FormatError::UnsupportedArgumentType {
                name: field.to_string(),
                kind: value.kind(),
            })
    }

    /// `select(value, keyword)`
    pub fn select(
        &self,
        field: &str,
        value: Option<&Value>,
        keyword: &str,
    ) -> Result<bool, FormatError> {
        Ok(self.print(field, value)? == keyword)
    }

    /// `plural(locale, offset, value, keyword, explicit_value)` and its
    /// ordinal twin. An empty `keyword` tests `explicit_value` against the
    /// unadjusted value.
    #[expect(clippy::too_many_arguments)]
    pub fn plural(
        &self,
        kind: PluralKind,
        locale: &str,
        offset: i64,
        field: &str,
        value: Option<&Value>,
        keyword: &str,
        explicit_value: i64,
    ) -> Result<bool, FormatError> {
        let zero = Value::from(0i64);
        let value = value.unwrap_or(&zero);
        let expected_numeric = || FormatError::ExpectedNumeric {
            name: field.to_string(),
            kind: value.kind(),
        };

        if keyword.is_empty() {
            return value
                .equals_explicit(explicit_value)
                .ok_or_else(expected_numeric);
        }

        let locale = parse_locale(locale)?;
        let adjusted = value.minus_offset(offset).ok_or_else(expected_numeric)?;
        let category = resolve_category(self.plural_rules, &locale, &adjusted, kind).map_err(
            |source| FormatError::Plural {
                name: field.to_string(),
                source,
            },
        )?;
        Ok(category == keyword)
    }

    /// `pound(value, offset)`
    pub fn pound(
        &self,
        field: &str,
        value: Option<&Value>,
        offset: i64,
    ) -> Result<String, FormatError> {
        let zero = Value::from(0i64);
        let value = value.unwrap_or(&zero);
        let adjusted = value
            .minus_offset(offset)
            .ok_or_else(|| FormatError::ExpectedNumeric {
                name: field.to_string(),
                kind: value.kind(),
            })?;
        self.print(field, Some(&adjusted))
    }

    /// `date`, `time` and `datetime`, selected by which styles are set.
    /// A missing value renders as the empty string.
    pub fn date_time(
        &self,
        locale: &str,
        date_style: Option<DateTimeStyle>,
        time_style: Option<DateTimeStyle>,
        field: &str,
        value: Option<&Value>,
    ) -> Result<String, FormatError> {
        let Some(value) = value else {
            return Ok(String::new());
        };
        let instant = value
            .as_instant()
            .ok_or_else(|| FormatError::ExpectedInstant {
                name: field.to_string(),
                kind: value.kind(),
            })?;
        let locale = parse_locale(locale)?;
        self.date_time
            .render(&locale, self.time_zone, date_style, time_style, instant)
            .map_err(|source| FormatError::DateTime {
                name: field.to_string(),
                source,
            })
    }

    /// Invoke `call` with operands resolved against `bindings`.
    pub fn invoke(
        &self,
        call: &Call,
        bindings: &HashMap<String, Value>,
    ) -> Result<Output, FormatError> {
        let malformed = || FormatError::MalformedCall {
            function: call.function.name(),
        };
        let field = |index: usize| match call.operands.get(index) {
            Some(Operand::Field(name)) => Ok((name.as_str(), bindings.get(name))),
            _ => Err(malformed()),
        };
        let string = |index: usize| match call.operands.get(index) {
            Some(Operand::Str(s)) => Ok(s.as_str()),
            _ => Err(malformed()),
        };
        let int = |index: usize| match call.operands.get(index) {
            Some(Operand::Int(n)) => Ok(*n),
            _ => Err(malformed()),
        };

        match call.function {
            RuntimeFunction::Date | RuntimeFunction::Time | RuntimeFunction::Datetime => {
                let style = DateTimeStyle::from_keyword(string(1)?).ok_or_else(malformed)?;
                let (date_style, time_style) = match call.function {
                    RuntimeFunction::Date => (Some(style), None),
                    RuntimeFunction::Time => (None, Some(style)),
                    _ => (Some(style), Some(style)),
                };
                let (name, value) = field(2)?;
                self.date_time(string(0)?, date_style, time_style, name, value)
                    .map(Output::Text)
            }
            RuntimeFunction::Select => {
                let (name, value) = field(0)?;
                self.select(name, value, string(1)?).map(Output::Bool)
            }
            RuntimeFunction::Plural | RuntimeFunction::SelectOrdinal => {
                let kind = if call.function == RuntimeFunction::Plural {
                    PluralKind::Cardinal
                } else {
                    PluralKind::Ordinal
                };
                let (name, value) = field(2)?;
                self.plural(
                    kind,
                    string(0)?,
                    int(1)?,
                    name,
                    value,
                    string(3)?,
                    int(4)?,
                )
                .map(Output::Bool)
            }
            RuntimeFunction::Pound => {
                let (name, value) = field(0)?;
                self.pound(name, value, int(1)?).map(Output::Text)
            }
        }
    }
}

fn parse_locale(tag: &str) -> Result<Locale, FormatError> {
    tag.parse::<Locale>()
        .map_err(|_| FormatError::InvalidLocale {
            locale: tag.to_string(),
        })
}
