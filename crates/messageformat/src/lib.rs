pub mod compiler;
pub mod datetime;
mod formatter;
pub mod interpreter;
pub mod parser;
pub mod plural;
pub mod types;

use std::collections::HashMap;

pub use compiler::{CompileError, Program};
pub use datetime::{DateTimeError, DateTimeService, DateTimeStyle, EnglishDateTime};
pub use formatter::{MessageFormat, positional_bindings};
pub use icu_locale_core::{Locale, locale};
pub use interpreter::{FormatError, compute_suggestions};
pub use parser::{Message, ParseError, parse_message};
pub use plural::{Operands, PluralKind, derive_operands};
pub use types::{Number, Value};

/// Creates a `HashMap<String, Value>` from key-value pairs.
///
/// Values are automatically converted via `Into<Value>`, so you can pass
/// integers, floats, strings, booleans or instants directly.
///
/// # Example
///
/// ```
/// use messageformat::{Number, params};
///
/// let p = params! { "count" => 3, "name" => "Alice" };
/// assert_eq!(p.len(), 2);
/// assert_eq!(p["count"].as_number(), Some(Number::I32(3)));
/// assert_eq!(p["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! params {
    {} => {
        ::std::collections::HashMap::<String, $crate::Value>::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = ::std::collections::HashMap::<String, $crate::Value>::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}

/// Format `pattern` in `locale` with named arguments.
///
/// # Example
///
/// ```
/// use messageformat::{format_named, locale, params};
///
/// let text = format_named(
///     &locale!("en"),
///     "{GENDER, select, male{He} female{She} other{They}} left",
///     &params! { "GENDER" => "female" },
/// )
/// .unwrap();
/// assert_eq!(text, "She left");
/// ```
pub fn format_named(
    locale: &Locale,
    pattern: &str,
    bindings: &HashMap<String, Value>,
) -> Result<String, FormatError> {
    MessageFormat::new(locale.clone()).format_named(pattern, bindings)
}

/// Format `pattern` in `locale` with positional arguments.
///
/// # Example
///
/// ```
/// use messageformat::{Value, format_positional, locale};
///
/// let text = format_positional(&locale!("en"), "Hello {0}", &[Value::from("John")]).unwrap();
/// assert_eq!(text, "Hello John");
/// ```
pub fn format_positional(
    locale: &Locale,
    pattern: &str,
    args: &[Value],
) -> Result<String, FormatError> {
    MessageFormat::new(locale.clone()).format_positional(pattern, args)
}

/// Compile `pattern` for `locale` into a program for deferred execution.
pub fn compile(locale: &Locale, pattern: &str) -> Result<Program, CompileError> {
    MessageFormat::new(locale.clone()).compile(pattern)
}
