//! Evaluation context for formatting a parsed message.

use std::collections::HashMap;

use icu_locale_core::Locale;

use crate::datetime::DateTimeService;
use crate::interpreter::FormatError;
use crate::interpreter::error::compute_suggestions;
use crate::parser::Argument;
use crate::plural::PluralRuleProvider;
use crate::types::Value;

/// Read-only state shared by every node of one formatting call.
pub struct EvalContext<'a> {
    bindings: &'a HashMap<String, Value>,
    locale: &'a Locale,
    time_zone: &'a str,
    plural_rules: &'a dyn PluralRuleProvider,
    date_time: &'a dyn DateTimeService,
}

impl<'a> EvalContext<'a> {
    pub fn new(
        bindings: &'a HashMap<String, Value>,
        locale: &'a Locale,
        time_zone: &'a str,
        plural_rules: &'a dyn PluralRuleProvider,
        date_time: &'a dyn DateTimeService,
    ) -> Self {
        Self {
            bindings,
            locale,
            time_zone,
            plural_rules,
            date_time,
        }
    }

    pub fn locale(&self) -> &Locale {
        self.locale
    }

    pub fn time_zone(&self) -> &str {
        self.time_zone
    }

    pub fn plural_rules(&self) -> &dyn PluralRuleProvider {
        self.plural_rules
    }

    pub fn date_time(&self) -> &dyn DateTimeService {
        self.date_time
    }

    /// Look up the value bound to `argument`.
    ///
    /// Returns [`FormatError::UnknownArgument`] with suggestions drawn from
    /// the bound names when it is absent.
    pub fn resolve(&self, argument: &Argument) -> Result<&'a Value, FormatError> {
        let name = argument.key();
        if let Some(value) = self.bindings.get(&name) {
            return Ok(value);
        }
        let mut available: Vec<String> = self.bindings.keys().cloned().collect();
        available.sort();
        Err(FormatError::UnknownArgument {
            suggestions: compute_suggestions(&name, &available),
            name,
        })
    }
}

/// The innermost enclosing plural argument, used to answer `#`.
///
/// Passed explicitly down the recursion: `None` outside plural bodies and
/// inside select bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct PluralContext {
    /// The argument key of the plural.
    pub name: String,
    /// The bound value with the offset already subtracted.
    pub value: Value,
}
