//! The configured entry points for parsing, formatting and compiling.

use std::collections::HashMap;

use bon::Builder;
use icu_locale_core::{Locale, locale};

use crate::compiler::{CompileError, Program, Runtime, compile_message};
use crate::datetime::{DateTimeService, EnglishDateTime};
use crate::interpreter::{EvalContext, FormatError, eval_message};
use crate::parser::{DEFAULT_MAX_DEPTH, Message, ParseError, parse_message_with_depth};
use crate::plural::{IcuPluralRules, PluralRuleProvider};
use crate::types::Value;

/// A MessageFormat configuration: locale, time zone, nesting bound and the
/// collaborators used for plural rules and date/time rendering.
///
/// # Example
///
/// ```
/// use messageformat::{MessageFormat, locale, params};
///
/// let mf = MessageFormat::builder().locale(locale!("en")).build();
/// let text = mf
///     .format_named("{COUNT, plural, one{# cat} other{# cats}}", &params! { "COUNT" => 2 })
///     .unwrap();
/// assert_eq!(text, "2 cats");
/// ```
#[derive(Builder)]
#[builder(on(String, into))]
pub struct MessageFormat {
    /// Locale for plural rules and date/time patterns.
    #[builder(default = locale!("en"))]
    locale: Locale,

    /// Time zone name passed to the date/time service.
    #[builder(default = "UTC".to_string())]
    time_zone: String,

    /// Maximum argument nesting accepted by the parser.
    #[builder(default = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    #[builder(default = Box::new(IcuPluralRules))]
    plural_rules: Box<dyn PluralRuleProvider>,

    #[builder(default = Box::new(EnglishDateTime))]
    date_time: Box<dyn DateTimeService>,
}

impl Default for MessageFormat {
    fn default() -> Self {
        MessageFormat::builder().build()
    }
}

impl MessageFormat {
    /// A configuration for `locale` with every other setting defaulted.
    pub fn new(locale: Locale) -> Self {
        MessageFormat::builder().locale(locale).build()
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn time_zone(&self) -> &str {
        &self.time_zone
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Parse a pattern without formatting it.
    pub fn parse(&self, pattern: &str) -> Result<Message, ParseError> {
        parse_message_with_depth(pattern, self.max_depth)
    }

    /// Format an already parsed message.
    pub fn format_message(
        &self,
        message: &Message,
        bindings: &HashMap<String, Value>,
    ) -> Result<String, FormatError> {
        let ctx = EvalContext::new(
            bindings,
            &self.locale,
            &self.time_zone,
            self.plural_rules.as_ref(),
            self.date_time.as_ref(),
        );
        eval_message(message, &ctx)
    }

    /// Parse `pattern` and format it with named arguments.
    pub fn format_named(
        &self,
        pattern: &str,
        bindings: &HashMap<String, Value>,
    ) -> Result<String, FormatError> {
        let message = self.parse(pattern)?;
        self.format_message(&message, bindings)
    }

    /// Parse `pattern` and format it with positional arguments.
    ///
    /// The value at index `i` is bound under the name `"i"`.
    pub fn format_positional(&self, pattern: &str, args: &[Value]) -> Result<String, FormatError> {
        let bindings = positional_bindings(args);
        self.format_named(pattern, &bindings)
    }

    /// Parse `pattern` and compile it into a program for deferred execution.
    pub fn compile(&self, pattern: &str) -> Result<Program, CompileError> {
        let message = self.parse(pattern)?;
        compile_message(&self.locale, &message)
    }

    /// The runtime a compiled program executes with under this
    /// configuration's collaborators and time zone.
    pub fn runtime(&self) -> Runtime<'_> {
        Runtime::new(
            self.plural_rules.as_ref(),
            self.date_time.as_ref(),
            &self.time_zone,
        )
    }
}

/// Bind each value under its decimal index.
pub fn positional_bindings(args: &[Value]) -> HashMap<String, Value> {
    args.iter()
        .enumerate()
        .map(|(index, value)| (index.to_string(), value.clone()))
        .collect()
}
