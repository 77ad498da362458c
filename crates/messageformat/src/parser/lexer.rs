//! Two-mode lexer for MessageFormat patterns.
//!
//! Text mode accumulates literal characters (folding quoted runs into the
//! surrounding text) until it meets a brace, end of input, or a `#` inside a
//! plural body. Argument mode skips whitespace and produces the structural
//! tokens of an `{argument, ...}` expression. Braces flip between the modes.

use std::fmt;

use winnow::prelude::*;
use winnow::token::{one_of, take_while};

use super::error::{ParseError, calculate_position};

/// A lexical token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Eof,
    Text(String),
    Word(String),
    Number(u64),
    LBrace,
    RBrace,
    Comma,
    Equal,
    Pound,
    Colon,
}

/// The payload-free shape of a [`Token`], used for expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Eof,
    Text,
    Word,
    Number,
    LBrace,
    RBrace,
    Comma,
    Equal,
    Pound,
    Colon,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Eof => TokenKind::Eof,
            Token::Text(_) => TokenKind::Text,
            Token::Word(_) => TokenKind::Word,
            Token::Number(_) => TokenKind::Number,
            Token::LBrace => TokenKind::LBrace,
            Token::RBrace => TokenKind::RBrace,
            Token::Comma => TokenKind::Comma,
            Token::Equal => TokenKind::Equal,
            Token::Pound => TokenKind::Pound,
            Token::Colon => TokenKind::Colon,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Eof => write!(f, "<EOF>"),
            Token::Text(text) => write!(f, "{text:?}"),
            Token::Word(word) => write!(f, "{word}"),
            Token::Number(n) => write!(f, "{n}"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::Comma => write!(f, ","),
            Token::Equal => write!(f, "="),
            Token::Pound => write!(f, "#"),
            Token::Colon => write!(f, ":"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Eof => "end of input",
            TokenKind::Text => "text",
            TokenKind::Word => "word",
            TokenKind::Number => "number",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::Comma => "','",
            TokenKind::Equal => "'='",
            TokenKind::Pound => "'#'",
            TokenKind::Colon => "':'",
        };
        f.write_str(name)
    }
}

/// A token together with the byte offset where it starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpannedToken {
    pub token: Token,
    pub offset: usize,
}

impl SpannedToken {
    fn new(token: Token, offset: usize) -> Self {
        Self { token, offset }
    }
}

/// Which of the two lexing modes the next call runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexMode {
    #[default]
    Text,
    Argument,
}

/// Incremental lexer over a pattern.
///
/// Each call to [`Lexer::lex`] consumes one lexical step from the remaining
/// input and returns the tokens it produced. Text mode always yields a
/// (possibly empty) [`Token::Text`] followed by the token that ended the run.
#[derive(Debug, Clone)]
pub struct Lexer<'i> {
    source: &'i str,
    input: &'i str,
    mode: LexMode,
}

impl<'i> Lexer<'i> {
    pub fn new(source: &'i str) -> Self {
        Self {
            source,
            input: source,
            mode: LexMode::Text,
        }
    }

    /// The mode the next [`Lexer::lex`] call will run in.
    pub fn mode(&self) -> LexMode {
        self.mode
    }

    /// Byte offset of the next unread character.
    pub fn offset(&self) -> usize {
        self.source.len() - self.input.len()
    }

    /// Lex the next step.
    ///
    /// `in_plural_body` reports whether the caller is currently inside a
    /// plural or selectordinal clause body; only then is `#` a token.
    pub fn lex(&mut self, in_plural_body: bool) -> Result<Vec<SpannedToken>, ParseError> {
        match self.mode {
            LexMode::Text => self.lex_text(in_plural_body),
            LexMode::Argument => self.lex_argument(),
        }
    }

    fn skip_whitespace(&mut self) {
        self.input = self.input.trim_start_matches(char::is_whitespace);
    }

    fn bump(&mut self) -> Option<char> {
        let mut chars = self.input.chars();
        let ch = chars.next()?;
        self.input = chars.as_str();
        Some(ch)
    }

    fn lex_text(&mut self, in_plural_body: bool) -> Result<Vec<SpannedToken>, ParseError> {
        let start = self.offset();
        let mut text = String::new();
        loop {
            let offset = self.offset();
            let Some(ch) = self.bump() else {
                return Ok(vec![
                    SpannedToken::new(Token::Text(text), start),
                    SpannedToken::new(Token::Eof, offset),
                ]);
            };
            let terminator = match ch {
                '\'' => {
                    self.lex_quoted(offset, &mut text)?;
                    continue;
                }
                '{' => {
                    self.mode = LexMode::Argument;
                    Token::LBrace
                }
                '}' => {
                    self.mode = LexMode::Argument;
                    Token::RBrace
                }
                '#' if in_plural_body => Token::Pound,
                other => {
                    text.push(other);
                    continue;
                }
            };
            return Ok(vec![
                SpannedToken::new(Token::Text(text), start),
                SpannedToken::new(terminator, offset),
            ]);
        }
    }

    /// Consume a quoted run whose opening `'` sits at `quote_offset`.
    fn lex_quoted(&mut self, quote_offset: usize, text: &mut String) -> Result<(), ParseError> {
        if self.input.starts_with('\'') {
            self.bump();
            text.push('\'');
            return Ok(());
        }
        loop {
            match self.bump() {
                None => {
                    let (line, column) = calculate_position(self.source, quote_offset);
                    return Err(ParseError::UnterminatedQuote { line, column });
                }
                Some('\'') => {
                    if !self.input.starts_with('\'') {
                        return Ok(());
                    }
                    self.bump();
                    text.push('\'');
                }
                Some(ch) => text.push(ch),
            }
        }
    }

    fn lex_argument(&mut self) -> Result<Vec<SpannedToken>, ParseError> {
        self.skip_whitespace();
        let offset = self.offset();
        let Some(ch) = self.input.chars().next() else {
            return Ok(vec![SpannedToken::new(Token::Eof, offset)]);
        };

        let token = match ch {
            '{' | '}' | ',' | '=' | ':' => {
                self.bump();
                match ch {
                    '{' => {
                        self.mode = LexMode::Text;
                        Token::LBrace
                    }
                    '}' => {
                        self.mode = LexMode::Text;
                        Token::RBrace
                    }
                    ',' => Token::Comma,
                    '=' => Token::Equal,
                    _ => Token::Colon,
                }
            }
            '0'..='9' => self.lex_number(offset)?,
            c if is_word_start(c) => match word.parse_next(&mut self.input) {
                Ok(w) => Token::Word(w.to_string()),
                Err(_) => return Err(self.unexpected_character(ch, offset)),
            },
            other => return Err(self.unexpected_character(other, offset)),
        };
        Ok(vec![SpannedToken::new(token, offset)])
    }

    fn lex_number(&mut self, offset: usize) -> Result<Token, ParseError> {
        let Ok(literal) = digits.parse_next(&mut self.input) else {
            return Err(self.unexpected_character('0', offset));
        };
        let (line, column) = calculate_position(self.source, offset);
        if literal.len() > 1 && literal.starts_with('0') {
            return Err(ParseError::LeadingZero { line, column });
        }
        literal
            .parse::<u64>()
            .map(Token::Number)
            .map_err(|_| ParseError::NumberOutOfRange {
                literal: literal.to_string(),
                line,
                column,
            })
    }

    fn unexpected_character(&self, ch: char, offset: usize) -> ParseError {
        let (line, column) = calculate_position(self.source, offset);
        ParseError::UnexpectedCharacter { ch, line, column }
    }
}

/// Lex `input` to completion in a single mode sequence, ignoring `#`.
///
/// Convenience for inspecting the token stream of a pattern without a parser
/// driving the plural-body predicate.
pub fn tokenize(input: &str) -> Result<Vec<SpannedToken>, ParseError> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let step = lexer.lex(false)?;
        let done = step.iter().any(|t| t.token == Token::Eof);
        tokens.extend(step);
        if done {
            return Ok(tokens);
        }
    }
}

fn word<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (one_of(is_word_start), take_while(0.., is_word_continue))
        .take()
        .parse_next(input)
}

fn digits<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_digit()).parse_next(input)
}

fn is_word_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_word_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(input: &str, in_plural_body: bool) -> Vec<Token> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let step = lexer.lex(in_plural_body).unwrap();
            for t in step {
                if t.token == Token::Eof {
                    return out;
                }
                out.push(t.token);
            }
        }
    }

    #[test]
    fn mode_flips_on_braces() {
        let mut lexer = Lexer::new("a{b}");
        assert_eq!(lexer.mode(), LexMode::Text);
        lexer.lex(false).unwrap();
        assert_eq!(lexer.mode(), LexMode::Argument);
        lexer.lex(false).unwrap();
        lexer.lex(false).unwrap();
        assert_eq!(lexer.mode(), LexMode::Text);
    }

    #[test]
    fn pound_depends_on_predicate() {
        assert_eq!(lex_all("a#b", false), vec![Token::Text("a#b".into())]);
        assert_eq!(
            lex_all("a#b", true),
            vec![Token::Text("a".into()), Token::Pound, Token::Text("b".into())]
        );
    }

    #[test]
    fn offsets_point_at_token_start() {
        let tokens = tokenize("ab{ cd }").unwrap();
        let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, vec![0, 2, 4, 7, 8, 8]);
    }

    #[test]
    fn argument_whitespace_includes_tabs_newlines_and_unicode_spaces() {
        let tokens = tokenize("{\t\n\u{3000}cd\r\n}").unwrap();
        let offsets: Vec<usize> = tokens.iter().map(|t| t.offset).collect();
        assert_eq!(tokens[2].token, Token::Word("cd".to_string()));
        assert_eq!(offsets, vec![0, 0, 6, 10, 11, 11]);
    }
}
