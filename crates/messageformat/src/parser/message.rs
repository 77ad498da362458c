//! Recursive-descent parser for MessageFormat patterns.
//!
//! The parser pulls tokens from the [`Lexer`] lazily, one lexical step at a
//! time, with a pushback buffer. Because tokens are produced on demand, the
//! lexer can ask the parser whether the current position is inside a plural
//! body (the top of the pound stack) and only then treat `#` as a token.

use std::collections::VecDeque;

use tracing::debug;

use super::ast::{Argument, Message, Node, PluralClause, PluralSelector, SelectClause};
use super::error::{ParseError, calculate_position};
use super::lexer::{Lexer, SpannedToken, Token, TokenKind};
use crate::datetime::DateTimeStyle;
use crate::plural::PluralKind;

/// Default bound on argument nesting, counted in message frames.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Parse a pattern into a [`Message`].
///
/// # Examples
///
/// ```
/// use messageformat::parser::{Argument, Node, parse_message};
///
/// let message = parse_message("Hello {0}").unwrap();
/// assert_eq!(
///     message.nodes,
///     vec![
///         Node::text("Hello "),
///         Node::NoneArg { argument: Argument::Index(0) },
///         Node::text(""),
///     ]
/// );
/// ```
pub fn parse_message(pattern: &str) -> Result<Message, ParseError> {
    parse_message_with_depth(pattern, DEFAULT_MAX_DEPTH)
}

/// Parse a pattern, rejecting nesting deeper than `max_depth` message frames.
pub fn parse_message_with_depth(pattern: &str, max_depth: usize) -> Result<Message, ParseError> {
    let mut parser = Parser {
        source: pattern,
        lexer: Lexer::new(pattern),
        pending: VecDeque::new(),
        pound_stack: Vec::new(),
        max_depth,
    };
    let nodes = parser.parse_message(TokenKind::Eof, false, 0)?;
    debug!(nodes = nodes.len(), "parsed message pattern");
    Ok(Message { nodes })
}

struct Parser<'i> {
    source: &'i str,
    lexer: Lexer<'i>,
    pending: VecDeque<SpannedToken>,
    /// One frame per message body being parsed; `true` for plural bodies.
    pound_stack: Vec<bool>,
    max_depth: usize,
}

impl Parser<'_> {
    fn in_plural_body(&self) -> bool {
        self.pound_stack.last().copied().unwrap_or(false)
    }

    fn next(&mut self) -> Result<SpannedToken, ParseError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let in_plural_body = self.in_plural_body();
            self.pending.extend(self.lexer.lex(in_plural_body)?);
        }
    }

    fn put_back(&mut self, token: SpannedToken) {
        self.pending.push_front(token);
    }

    fn expect(&mut self, kinds: &[TokenKind]) -> Result<SpannedToken, ParseError> {
        let token = self.next()?;
        if kinds.contains(&token.token.kind()) {
            Ok(token)
        } else {
            let expected = kinds
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" or ");
            Err(self.unexpected(&token.token, token.offset, expected))
        }
    }

    fn expect_word(&mut self, words: &[&str]) -> Result<String, ParseError> {
        let token = self.expect(&[TokenKind::Word])?;
        match token.token {
            Token::Word(w) if words.contains(&w.as_str()) => Ok(w),
            other => Err(self.unexpected(&other, token.offset, words.join(" or "))),
        }
    }

    fn unexpected(&self, token: &Token, offset: usize, expected: String) -> ParseError {
        let (line, column) = calculate_position(self.source, offset);
        ParseError::UnexpectedToken {
            found: token.to_string(),
            expected,
            line,
            column,
        }
    }

    /// Parse a message body up to (and consuming) `end`.
    ///
    /// `offset` locates the body for depth errors.
    fn parse_message(
        &mut self,
        end: TokenKind,
        pound: bool,
        offset: usize,
    ) -> Result<Vec<Node>, ParseError> {
        if self.pound_stack.len() >= self.max_depth {
            let (line, column) = calculate_position(self.source, offset);
            return Err(ParseError::NestingTooDeep {
                max_depth: self.max_depth,
                line,
                column,
            });
        }
        self.pound_stack.push(pound);
        let result = self.parse_message_body(end);
        self.pound_stack.pop();
        result
    }

    fn parse_message_body(&mut self, end: TokenKind) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();
        loop {
            self.parse_text_run(&mut nodes)?;
            let token = self.expect(&[TokenKind::LBrace, end])?;
            if token.token.kind() == end {
                return Ok(nodes);
            }
            nodes.push(self.parse_argument(token.offset)?);
        }
    }

    /// `text (pound text)*`
    fn parse_text_run(&mut self, nodes: &mut Vec<Node>) -> Result<(), ParseError> {
        nodes.push(self.parse_text()?);
        loop {
            let token = self.next()?;
            if token.token != Token::Pound {
                self.put_back(token);
                return Ok(());
            }
            nodes.push(Node::Pound);
            nodes.push(self.parse_text()?);
        }
    }

    fn parse_text(&mut self) -> Result<Node, ParseError> {
        let token = self.expect(&[TokenKind::Text])?;
        match token.token {
            Token::Text(value) => Ok(Node::Text { value }),
            other => Err(self.unexpected(&other, token.offset, TokenKind::Text.to_string())),
        }
    }

    /// Parse an argument after its opening `{` at `open_offset`.
    fn parse_argument(&mut self, open_offset: usize) -> Result<Node, ParseError> {
        let name_or_index = self.expect(&[TokenKind::Word, TokenKind::Number])?;
        let argument = match name_or_index.token {
            Token::Word(name) => Argument::Name(name),
            Token::Number(n) => Argument::Index(self.number_to(n, name_or_index.offset)?),
            other => {
                return Err(self.unexpected(&other, name_or_index.offset, "word or number".into()));
            }
        };

        let token = self.expect(&[TokenKind::RBrace, TokenKind::Comma])?;
        if token.token == Token::RBrace {
            return Ok(Node::NoneArg { argument });
        }

        let arg_type = self.expect_word(&[
            "plural",
            "select",
            "selectordinal",
            "date",
            "time",
            "datetime",
        ])?;
        self.expect(&[TokenKind::Comma])?;

        match arg_type.as_str() {
            "plural" | "selectordinal" => {
                let kind = if arg_type == "plural" {
                    PluralKind::Cardinal
                } else {
                    PluralKind::Ordinal
                };
                let (offset, clauses) = self.parse_plural_style(open_offset)?;
                Ok(Node::PluralArg {
                    argument,
                    kind,
                    offset,
                    clauses,
                })
            }
            "select" => {
                let clauses = self.parse_select_style(open_offset)?;
                Ok(Node::SelectArg { argument, clauses })
            }
            _ => {
                let style = self.parse_date_time_style()?;
                self.expect(&[TokenKind::RBrace])?;
                Ok(match arg_type.as_str() {
                    "date" => Node::DateArg { argument, style },
                    "time" => Node::TimeArg { argument, style },
                    _ => Node::DatetimeArg { argument, style },
                })
            }
        }
    }

    fn parse_date_time_style(&mut self) -> Result<DateTimeStyle, ParseError> {
        let token = self.expect(&[TokenKind::Word])?;
        if let Token::Word(word) = &token.token
            && let Some(style) = DateTimeStyle::from_keyword(word)
        {
            return Ok(style);
        }
        let expected = DateTimeStyle::ALL
            .into_iter()
            .map(DateTimeStyle::keyword)
            .collect::<Vec<_>>()
            .join(" or ");
        Err(self.unexpected(&token.token, token.offset, expected))
    }

    /// `['offset' ':' number] (('=' number | word) '{' message '}')+ '}'`
    fn parse_plural_style(
        &mut self,
        open_offset: usize,
    ) -> Result<(i64, Vec<PluralClause>), ParseError> {
        let clause_start = [TokenKind::RBrace, TokenKind::Word, TokenKind::Equal];
        let mut offset = 0;
        let mut clauses = Vec::new();
        let mut token = self.expect(&clause_start)?;

        if token.token == Token::Word("offset".to_string()) {
            self.expect(&[TokenKind::Colon])?;
            offset = self.expect_number()?;
            token = self.expect(&clause_start)?;
        }

        loop {
            let selector = match token.token {
                Token::RBrace => {
                    if clauses.is_empty() {
                        let (line, column) = calculate_position(self.source, open_offset);
                        return Err(ParseError::NoClauses {
                            kind: "plural",
                            line,
                            column,
                        });
                    }
                    return Ok((offset, clauses));
                }
                Token::Equal => PluralSelector::Explicit(self.expect_number()?),
                Token::Word(keyword) => PluralSelector::Keyword(keyword),
                other => return Err(self.unexpected(&other, token.offset, "clause".into())),
            };

            let open = self.expect(&[TokenKind::LBrace])?;
            let nodes = self.parse_message(TokenKind::RBrace, true, open.offset)?;
            clauses.push(PluralClause { selector, nodes });

            token = self.expect(&clause_start)?;
        }
    }

    /// `(word '{' message '}')+ '}'`
    fn parse_select_style(&mut self, open_offset: usize) -> Result<Vec<SelectClause>, ParseError> {
        let mut clauses = Vec::new();
        loop {
            let token = self.expect(&[TokenKind::RBrace, TokenKind::Word])?;
            let Token::Word(keyword) = token.token else {
                if clauses.is_empty() {
                    let (line, column) = calculate_position(self.source, open_offset);
                    return Err(ParseError::NoClauses {
                        kind: "select",
                        line,
                        column,
                    });
                }
                return Ok(clauses);
            };

            let open = self.expect(&[TokenKind::LBrace])?;
            let nodes = self.parse_message(TokenKind::RBrace, false, open.offset)?;
            clauses.push(SelectClause { keyword, nodes });
        }
    }

    fn expect_number(&mut self) -> Result<i64, ParseError> {
        let token = self.expect(&[TokenKind::Number])?;
        match token.token {
            Token::Number(n) => self.number_to(n, token.offset),
            other => Err(self.unexpected(&other, token.offset, TokenKind::Number.to_string())),
        }
    }

    fn number_to<T: TryFrom<u64>>(&self, n: u64, offset: usize) -> Result<T, ParseError> {
        T::try_from(n).map_err(|_| {
            let (line, column) = calculate_position(self.source, offset);
            ParseError::NumberOutOfRange {
                literal: n.to_string(),
                line,
                column,
            }
        })
    }
}
