//! MessageFormat pattern lexer and parser.
//!
//! This module turns a pattern string into an immutable [`Message`] tree that
//! can be interpreted directly or compiled into a host-template program.

pub mod ast;
pub mod error;
pub mod lexer;
mod message;

pub use ast::*;
pub use error::ParseError;
pub use lexer::{LexMode, Lexer, SpannedToken, Token, TokenKind, tokenize};
pub use message::{DEFAULT_MAX_DEPTH, parse_message, parse_message_with_depth};
