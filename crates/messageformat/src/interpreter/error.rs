//! Error types for the MessageFormat interpreter.

use strsim::levenshtein;
use thiserror::Error;

use crate::datetime::DateTimeError;
use crate::parser::ParseError;
use crate::plural::PluralError;

/// An error that occurred while formatting a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The pattern failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The pattern refers to an argument that is not bound.
    #[error("unknown argument '{name}'{}", format_suggestions(suggestions))]
    UnknownArgument {
        name: String,
        suggestions: Vec<String>,
    },

    /// The bound value has no text form for this use.
    #[error("unsupported argument type {kind} for '{name}'")]
    UnsupportedArgumentType { name: String, kind: &'static str },

    /// A plural or selectordinal argument bound to a non-numeric value.
    #[error("expected numeric type for '{name}', got {kind}")]
    ExpectedNumeric { name: String, kind: &'static str },

    /// A date/time argument bound to something other than an instant.
    #[error("expected instant for '{name}', got {kind}")]
    ExpectedInstant { name: String, kind: &'static str },

    #[error("missing select other clause for '{name}'")]
    MissingSelectOther { name: String },

    #[error("missing plural other clause for '{name}'")]
    MissingPluralOther { name: String },

    /// A `#` outside any plural body reached the formatter.
    #[error("pound token emitted incorrectly")]
    PoundOutsidePlural,

    #[error("plural resolution failed for '{name}': {source}")]
    Plural {
        name: String,
        #[source]
        source: PluralError,
    },

    #[error("date/time rendering failed for '{name}': {source}")]
    DateTime {
        name: String,
        #[source]
        source: DateTimeError,
    },

    /// The locale tag could not be parsed.
    #[error("invalid locale '{locale}'")]
    InvalidLocale { locale: String },

    /// A compiled program called a runtime primitive with the wrong operands.
    #[error("malformed call to '{function}'")]
    MalformedCall { function: &'static str },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute typo suggestions using Levenshtein distance.
///
/// - distance <= 1 for names <= 3 chars
/// - distance <= 2 for longer names
/// - Limit to 3 suggestions, sorted by distance then name
pub fn compute_suggestions(name: &str, available: &[String]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort();
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, s)| s.clone())
        .collect()
}
