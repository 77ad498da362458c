//! MessageFormat interpreter.
//!
//! This module provides the direct formatter: it walks a parsed [`Message`]
//! against a map of bound arguments and produces the final string, resolving
//! select and plural clauses and `#` placeholders along the way.
//!
//! [`Message`]: crate::parser::Message

mod context;
mod error;
mod evaluator;

pub use context::{EvalContext, PluralContext};
pub use error::{FormatError, compute_suggestions};
pub use evaluator::eval_message;
