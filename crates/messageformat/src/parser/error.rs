//! Parse error types for MessageFormat patterns.

use thiserror::Error;

/// An error that occurred while lexing or parsing a pattern.
///
/// Every variant carries the 1-based line and column of the offending
/// character or token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A `'` opened a quoted run that never closed.
    #[error("unterminated quoted string at {line}:{column}")]
    UnterminatedQuote { line: usize, column: usize },

    /// A number literal such as `01`.
    #[error("number must not have leading zero at {line}:{column}")]
    LeadingZero { line: usize, column: usize },

    /// A number literal that does not fit the slot it is used for.
    #[error("number '{literal}' out of range at {line}:{column}")]
    NumberOutOfRange {
        literal: String,
        line: usize,
        column: usize,
    },

    /// A character that cannot start any token inside an argument.
    #[error("unexpected character {ch:?} at {line}:{column}")]
    UnexpectedCharacter { ch: char, line: usize, column: usize },

    /// A well-formed token in the wrong place.
    #[error("unexpected token {found} at {line}:{column}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: String,
        line: usize,
        column: usize,
    },

    /// A select or plural argument closed before any clause.
    #[error("no {kind} clauses at {line}:{column}")]
    NoClauses {
        kind: &'static str,
        line: usize,
        column: usize,
    },

    /// Argument nesting deeper than the configured bound.
    #[error("pattern nesting exceeds maximum depth of {max_depth} at {line}:{column}")]
    NestingTooDeep {
        max_depth: usize,
        line: usize,
        column: usize,
    },
}

impl ParseError {
    /// The 1-based `(line, column)` this error points at.
    pub fn position(&self) -> (usize, usize) {
        match self {
            ParseError::UnterminatedQuote { line, column }
            | ParseError::LeadingZero { line, column }
            | ParseError::NumberOutOfRange { line, column, .. }
            | ParseError::UnexpectedCharacter { line, column, .. }
            | ParseError::UnexpectedToken { line, column, .. }
            | ParseError::NoClauses { line, column, .. }
            | ParseError::NestingTooDeep { line, column, .. } => (*line, *column),
        }
    }
}

/// Calculate line and column from the source and a byte offset into it.
pub(crate) fn calculate_position(source: &str, offset: usize) -> (usize, usize) {
    let consumed_str = source.get(..offset).unwrap_or(source);
    let consumed = consumed_str.chars().count();
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let column = match consumed_str.rfind('\n') {
        Some(pos) => consumed_str[pos..].chars().count(),
        None => consumed + 1,
    };
    (line, column)
}

#[cfg(test)]
mod tests {
    use super::calculate_position;

    #[test]
    fn position_on_first_line() {
        assert_eq!(calculate_position("hello", 0), (1, 1));
        assert_eq!(calculate_position("hello", 3), (1, 4));
    }

    #[test]
    fn position_after_newline() {
        assert_eq!(calculate_position("ab\ncd", 3), (2, 1));
        assert_eq!(calculate_position("ab\ncd", 4), (2, 2));
    }
}
