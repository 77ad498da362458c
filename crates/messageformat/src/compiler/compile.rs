//! Lowering a parsed message into a [`Program`].

use icu_locale_core::Locale;
use thiserror::Error;
use tracing::debug;

use super::program::{Call, Instruction, Operand, Program, RuntimeFunction};
use crate::datetime::DateTimeStyle;
use crate::parser::{
    Argument, Message, Node, OTHER, ParseError, PluralClause, PluralSelector, SelectClause,
};
use crate::plural::PluralKind;

/// An error that occurred while compiling a message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("missing select other clause for '{name}'")]
    MissingSelectOther { name: String },

    #[error("missing plural other clause for '{name}'")]
    MissingPluralOther { name: String },

    /// A `#` outside any plural body reached the compiler.
    #[error("pound token emitted incorrectly")]
    PoundOutsidePlural,
}

/// The innermost enclosing plural, for compiling `#`.
#[derive(Debug, Clone)]
struct PoundContext {
    field: String,
    offset: i64,
}

/// Compile a parsed message for `locale`.
///
/// Select and plural arguments become if/else chains whose final branch is
/// the `other` clause; a missing `other` is a compile-time error. Plural
/// chains test every `=N` clause before any keyword clause, so a host gets
/// the same clause the direct formatter would pick.
///
/// A plural whose only clause is `other` compiles to its body alone. No
/// category is resolved at run time, so values the direct formatter rejects
/// (e.g. an offset applied to `f64::MAX`) still render.
pub fn compile_message(locale: &Locale, message: &Message) -> Result<Program, CompileError> {
    let compiler = Compiler {
        locale: locale.to_string(),
    };
    let nodes = compiler.compile_nodes(&message.nodes, None)?;
    debug!(%locale, instructions = nodes.len(), "compiled message");
    Ok(Program {
        locale: locale.clone(),
        nodes,
    })
}

struct Compiler {
    locale: String,
}

impl Compiler {
    fn compile_nodes(
        &self,
        nodes: &[Node],
        pound: Option<&PoundContext>,
    ) -> Result<Vec<Instruction>, CompileError> {
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            match node {
                Node::Text { value } => out.push(Instruction::Text(value.clone())),
                Node::NoneArg { argument } => out.push(Instruction::Field(argument.key())),
                Node::DateArg { argument, style } => {
                    out.push(self.date_call(RuntimeFunction::Date, argument, *style));
                }
                Node::TimeArg { argument, style } => {
                    out.push(self.date_call(RuntimeFunction::Time, argument, *style));
                }
                Node::DatetimeArg { argument, style } => {
                    out.push(self.date_call(RuntimeFunction::Datetime, argument, *style));
                }
                Node::SelectArg { argument, clauses } => {
                    out.extend(self.compile_select(argument, clauses)?);
                }
                Node::PluralArg {
                    argument,
                    kind,
                    offset,
                    clauses,
                } => {
                    out.extend(self.compile_plural(argument, *kind, *offset, clauses)?);
                }
                Node::Pound => {
                    let Some(pound) = pound else {
                        return Err(CompileError::PoundOutsidePlural);
                    };
                    out.push(Instruction::Call(Call {
                        function: RuntimeFunction::Pound,
                        operands: vec![
                            Operand::Field(pound.field.clone()),
                            Operand::Int(pound.offset),
                        ],
                    }));
                }
            }
        }
        Ok(out)
    }

    fn date_call(
        &self,
        function: RuntimeFunction,
        argument: &Argument,
        style: DateTimeStyle,
    ) -> Instruction {
        Instruction::Call(Call {
            function,
            operands: vec![
                Operand::Str(self.locale.clone()),
                Operand::Str(style.keyword().to_string()),
                Operand::Field(argument.key()),
            ],
        })
    }

    fn compile_select(
        &self,
        argument: &Argument,
        clauses: &[SelectClause],
    ) -> Result<Vec<Instruction>, CompileError> {
        let field = argument.key();
        let other = clauses
            .iter()
            .find(|clause| clause.keyword == OTHER)
            .ok_or_else(|| CompileError::MissingSelectOther {
                name: field.clone(),
            })?;

        let mut branches = Vec::new();
        for clause in clauses.iter().filter(|clause| clause.keyword != OTHER) {
            let condition = Call {
                function: RuntimeFunction::Select,
                operands: vec![
                    Operand::Field(field.clone()),
                    Operand::Str(clause.keyword.clone()),
                ],
            };
            branches.push((condition, self.compile_nodes(&clause.nodes, None)?));
        }
        let fallback = self.compile_nodes(&other.nodes, None)?;
        Ok(chain(branches, fallback))
    }

    fn compile_plural(
        &self,
        argument: &Argument,
        kind: PluralKind,
        offset: i64,
        clauses: &[PluralClause],
    ) -> Result<Vec<Instruction>, CompileError> {
        let field = argument.key();
        let other = clauses
            .iter()
            .find(|clause| clause.keyword() == Some(OTHER))
            .ok_or_else(|| CompileError::MissingPluralOther {
                name: field.clone(),
            })?;
        let pound = PoundContext {
            field: field.clone(),
            offset,
        };
        let function = match kind {
            PluralKind::Cardinal => RuntimeFunction::Plural,
            PluralKind::Ordinal => RuntimeFunction::SelectOrdinal,
        };

        let explicit = clauses
            .iter()
            .filter(|clause| matches!(clause.selector, PluralSelector::Explicit(_)));
        let keywords = clauses
            .iter()
            .filter(|clause| clause.keyword().is_some_and(|keyword| keyword != OTHER));

        let mut branches = Vec::new();
        for clause in explicit.chain(keywords) {
            let (keyword, explicit_value) = match &clause.selector {
                PluralSelector::Explicit(value) => (String::new(), *value),
                PluralSelector::Keyword(keyword) => (keyword.clone(), 0),
            };
            let condition = Call {
                function,
                operands: vec![
                    Operand::Str(self.locale.clone()),
                    Operand::Int(offset),
                    Operand::Field(field.clone()),
                    Operand::Str(keyword),
                    Operand::Int(explicit_value),
                ],
            };
            branches.push((condition, self.compile_nodes(&clause.nodes, Some(&pound))?));
        }
        let fallback = self.compile_nodes(&other.nodes, Some(&pound))?;
        Ok(chain(branches, fallback))
    }
}

/// Fold `(condition, body)` pairs into nested if/else, innermost last.
fn chain(branches: Vec<(Call, Vec<Instruction>)>, fallback: Vec<Instruction>) -> Vec<Instruction> {
    branches
        .into_iter()
        .rev()
        .fold(fallback, |otherwise, (condition, then)| {
            vec![Instruction::If {
                condition,
                then,
                otherwise,
            }]
        })
}
