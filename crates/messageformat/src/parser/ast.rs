//! Public AST types for MessageFormat patterns.
//!
//! These types are public so that alternative backends (such as the template
//! compiler) and external tooling can consume a parsed pattern.

use std::fmt;

use serde::Serialize;

use crate::datetime::DateTimeStyle;
use crate::plural::PluralKind;

/// A parsed pattern: the top-level node sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub nodes: Vec<Node>,
}

/// The binding slot an argument refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Argument {
    /// `{name}`
    Name(String),
    /// `{0}`
    Index(usize),
}

impl Argument {
    /// The key this argument is looked up under in a binding map.
    ///
    /// Positional arguments are keyed by their decimal index.
    pub fn key(&self) -> String {
        self.to_string()
    }
}

impl Default for Argument {
    fn default() -> Self {
        Argument::Index(0)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Name(name) => f.write_str(name),
            Argument::Index(index) => write!(f, "{index}"),
        }
    }
}

/// A node in the pattern tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Literal text, possibly empty.
    Text { value: String },
    /// `{arg}`
    NoneArg { argument: Argument },
    /// `{arg, date, style}`
    DateArg {
        argument: Argument,
        style: DateTimeStyle,
    },
    /// `{arg, time, style}`
    TimeArg {
        argument: Argument,
        style: DateTimeStyle,
    },
    /// `{arg, datetime, style}`
    DatetimeArg {
        argument: Argument,
        style: DateTimeStyle,
    },
    /// `{arg, select, keyword {message} ...}`
    SelectArg {
        argument: Argument,
        clauses: Vec<SelectClause>,
    },
    /// `{arg, plural|selectordinal, [offset:n] (=n|keyword) {message} ...}`
    PluralArg {
        argument: Argument,
        kind: PluralKind,
        offset: i64,
        clauses: Vec<PluralClause>,
    },
    /// `#` inside a plural or selectordinal clause body.
    Pound,
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }
}

/// `keyword {message}` inside a select argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectClause {
    pub keyword: String,
    pub nodes: Vec<Node>,
}

/// How a plural clause is matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralSelector {
    /// A plural category keyword such as `one` or `other`.
    Keyword(String),
    /// `=N`, matched against the value before the offset is applied.
    Explicit(i64),
}

/// `(=N | keyword) {message}` inside a plural or selectordinal argument.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PluralClause {
    pub selector: PluralSelector,
    pub nodes: Vec<Node>,
}

impl PluralClause {
    /// The keyword of this clause, if it is not an explicit-value clause.
    pub fn keyword(&self) -> Option<&str> {
        match &self.selector {
            PluralSelector::Keyword(keyword) => Some(keyword),
            PluralSelector::Explicit(_) => None,
        }
    }
}

/// The keyword of the mandatory fallback clause.
pub const OTHER: &str = "other";
