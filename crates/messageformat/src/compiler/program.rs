//! The conditional program a message compiles into.
//!
//! A [`Program`] is a tree of literal text, field lookups, runtime calls and
//! if/else branches. It carries no argument values; a host binds those when
//! it executes the program. The `Display` form mirrors host template syntax
//! and is meant for debugging.

use std::fmt;

use icu_locale_core::Locale;

/// The name the runtime helper is registered under in a host engine.
pub const RUNTIME_FUNC_NAME: &str = "__messageformat__";

/// A compiled message.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The locale plural calls are resolved in.
    pub locale: Locale,
    pub nodes: Vec<Instruction>,
}

impl Program {
    /// Whether executing the program can only ever produce an empty string.
    pub fn is_empty(&self) -> bool {
        match self.nodes.as_slice() {
            [] => true,
            [Instruction::Text(text)] => text.is_empty(),
            _ => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Literal text, emitted as is.
    Text(String),
    /// Print the value bound to a name.
    Field(String),
    /// Print the text returned by a runtime call.
    Call(Call),
    /// Run `then` if the runtime predicate holds, else `otherwise`.
    If {
        condition: Call,
        then: Vec<Instruction>,
        otherwise: Vec<Instruction>,
    },
}

/// A call to one of the runtime primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub function: RuntimeFunction,
    pub operands: Vec<Operand>,
}

/// The primitives a host engine must provide.
///
/// Operand order per function:
///
/// - `date`, `time`, `datetime`: locale, style, field
/// - `select`: field, keyword
/// - `plural`, `selectordinal`: locale, offset, field, keyword, explicit value
/// - `pound`: field, offset
///
/// A plural call with an empty keyword tests the explicit value instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuntimeFunction {
    Date,
    Time,
    Datetime,
    Select,
    Plural,
    SelectOrdinal,
    Pound,
}

impl RuntimeFunction {
    pub fn name(self) -> &'static str {
        match self {
            RuntimeFunction::Date => "date",
            RuntimeFunction::Time => "time",
            RuntimeFunction::Datetime => "datetime",
            RuntimeFunction::Select => "select",
            RuntimeFunction::Plural => "plural",
            RuntimeFunction::SelectOrdinal => "selectordinal",
            RuntimeFunction::Pound => "pound",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    Str(String),
    Int(i64),
    /// Looked up in the bindings when the program runs.
    Field(String),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Str(s) => write!(f, "{s:?}"),
            Operand::Int(n) => write!(f, "{n}"),
            Operand::Field(name) => write_field(f, name),
        }
    }
}

/// `.NAME` for identifiers, `(index . "0")` for positional names.
fn write_field(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    let is_ident = name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    if is_ident {
        write!(f, ".{name}")
    } else {
        write!(f, "(index . {name:?})")
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{RUNTIME_FUNC_NAME} {:?}", self.function.name())?;
        for operand in &self.operands {
            write!(f, " {operand}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_instructions(f, &self.nodes)
    }
}

fn write_instructions(f: &mut fmt::Formatter<'_>, nodes: &[Instruction]) -> fmt::Result {
    for node in nodes {
        match node {
            Instruction::Text(text) => f.write_str(text)?,
            Instruction::Field(name) => {
                f.write_str("{{")?;
                write_field(f, name)?;
                f.write_str("}}")?;
            }
            Instruction::Call(call) => write!(f, "{{{{{call}}}}}")?,
            Instruction::If {
                condition,
                then,
                otherwise,
            } => {
                write!(f, "{{{{if ({condition})}}}}")?;
                write_branches(f, then, otherwise)?;
                f.write_str("{{end}}")?;
            }
        }
    }
    Ok(())
}

/// Chains of single-`If` else branches print as `else if`.
fn write_branches(
    f: &mut fmt::Formatter<'_>,
    then: &[Instruction],
    otherwise: &[Instruction],
) -> fmt::Result {
    write_instructions(f, then)?;
    match otherwise {
        [] => Ok(()),
        [
            Instruction::If {
                condition,
                then,
                otherwise,
            },
        ] => {
            write!(f, "{{{{else if ({condition})}}}}")?;
            write_branches(f, then, otherwise)
        }
        _ => {
            f.write_str("{{else}}")?;
            write_instructions(f, otherwise)
        }
    }
}
