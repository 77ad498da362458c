//! Miette diagnostic wrapper for pattern parse errors.

use messageformat::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic pointing into a pattern.
#[derive(Debug, Error, Diagnostic)]
#[error("syntax error: {message}")]
#[diagnostic(code(messageformat::syntax))]
pub struct PatternDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    message: String,

    #[help]
    help: Option<String>,
}

impl PatternDiagnostic {
    /// Create a diagnostic from a `ParseError` with the pattern as source.
    pub fn from_parse_error(pattern: &str, err: &ParseError) -> Self {
        let (line, column) = err.position();
        let offset = byte_offset(pattern, line, column);

        let help = match err {
            ParseError::UnterminatedQuote { .. } => {
                Some("close the quoted run with ' or write '' for a literal quote".to_string())
            }
            ParseError::NestingTooDeep { .. } => {
                Some("raise the limit with --max-depth".to_string())
            }
            _ => None,
        };

        PatternDiagnostic {
            src: NamedSource::new("<pattern>", pattern.to_string()),
            span: (offset, 1).into(),
            message: err.to_string(),
            help,
        }
    }
}

/// Convert a 1-based line and character column to a byte offset, clamped to
/// the pattern length.
fn byte_offset(pattern: &str, line: usize, column: usize) -> usize {
    let line_start: usize = pattern
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    let rest = pattern.get(line_start..).unwrap_or_default();
    let within = rest
        .char_indices()
        .nth(column.saturating_sub(1))
        .map_or(rest.len(), |(index, _)| index);
    (line_start + within).min(pattern.len())
}

#[cfg(test)]
mod tests {
    use super::byte_offset;

    #[test]
    fn offsets_count_characters_within_a_line() {
        assert_eq!(byte_offset("abc", 1, 1), 0);
        assert_eq!(byte_offset("héllo {", 1, 7), 7);
        assert_eq!(byte_offset("ab\ncd", 2, 2), 4);
    }

    #[test]
    fn offsets_past_the_end_are_clamped() {
        assert_eq!(byte_offset("{NAME", 1, 6), 5);
        assert_eq!(byte_offset("", 3, 3), 0);
    }
}
