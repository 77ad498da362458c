//! Direct formatting of a parsed message against bound arguments.
//!
//! Nodes are walked depth-first into a single output buffer. The innermost
//! enclosing plural is threaded through the recursion as an explicit
//! [`PluralContext`] parameter so that `#` can be answered.

use tracing::trace;

use crate::datetime::DateTimeStyle;
use crate::interpreter::{EvalContext, FormatError, PluralContext};
use crate::parser::{Argument, Message, Node, OTHER, PluralClause, PluralSelector, SelectClause};
use crate::plural::{PluralKind, resolve_category};
use crate::types::Value;

/// Format a parsed message, producing the final string.
///
/// # Errors
///
/// Returns an error if:
/// - An argument is not bound
/// - A bound value has the wrong kind for its argument
/// - No clause matches and there is no `other` clause
/// - Plural or date/time resolution fails
pub fn eval_message(message: &Message, ctx: &EvalContext<'_>) -> Result<String, FormatError> {
    let mut output = String::new();
    eval_nodes(&message.nodes, ctx, None, &mut output)?;
    Ok(output)
}

fn eval_nodes(
    nodes: &[Node],
    ctx: &EvalContext<'_>,
    plural: Option<&PluralContext>,
    output: &mut String,
) -> Result<(), FormatError> {
    for node in nodes {
        match node {
            Node::Text { value } => output.push_str(value),
            Node::NoneArg { argument } => {
                let value = ctx.resolve(argument)?;
                output.push_str(&render_scalar(argument, value)?);
            }
            Node::DateArg { argument, style } => {
                output.push_str(&eval_datetime(argument, Some(*style), None, ctx)?);
            }
            Node::TimeArg { argument, style } => {
                output.push_str(&eval_datetime(argument, None, Some(*style), ctx)?);
            }
            Node::DatetimeArg { argument, style } => {
                output.push_str(&eval_datetime(argument, Some(*style), Some(*style), ctx)?);
            }
            Node::SelectArg { argument, clauses } => {
                eval_select(argument, clauses, ctx, output)?;
            }
            Node::PluralArg {
                argument,
                kind,
                offset,
                clauses,
            } => {
                eval_plural(argument, *kind, *offset, clauses, ctx, output)?;
            }
            Node::Pound => {
                let Some(plural) = plural else {
                    return Err(FormatError::PoundOutsidePlural);
                };
                let rendered = plural.value.render().ok_or_else(|| {
                    FormatError::UnsupportedArgumentType {
                        name: plural.name.clone(),
                        kind: plural.value.kind(),
                    }
                })?;
                output.push_str(&rendered);
            }
        }
    }
    Ok(())
}

fn render_scalar(argument: &Argument, value: &Value) -> Result<String, FormatError> {
    value
        .render()
        .ok_or_else(|| FormatError::UnsupportedArgumentType {
            name: argument.key(),
            kind: value.kind(),
        })
}

/// Exact keyword match in declaration order, falling back to `other`.
fn eval_select(
    argument: &Argument,
    clauses: &[SelectClause],
    ctx: &EvalContext<'_>,
    output: &mut String,
) -> Result<(), FormatError> {
    let key = render_scalar(argument, ctx.resolve(argument)?)?;

    let mut fallback = None;
    let mut selected = None;
    for clause in clauses {
        if clause.keyword == OTHER {
            fallback.get_or_insert(clause);
        } else if clause.keyword == key {
            selected = Some(clause);
            break;
        }
    }

    let clause = selected
        .or(fallback)
        .ok_or_else(|| FormatError::MissingSelectOther {
            name: argument.key(),
        })?;
    trace!(argument = %argument, %key, clause = %clause.keyword, "selected clause");
    // Select bodies never see an enclosing plural's `#`.
    eval_nodes(&clause.nodes, ctx, None, output)
}

/// Explicit `=N` clauses are matched against the unadjusted value; category
/// keywords and `#` use the value with the offset subtracted.
fn eval_plural(
    argument: &Argument,
    kind: PluralKind,
    offset: i64,
    clauses: &[PluralClause],
    ctx: &EvalContext<'_>,
    output: &mut String,
) -> Result<(), FormatError> {
    let name = argument.key();
    let value = ctx.resolve(argument)?;
    let expected_numeric = || FormatError::ExpectedNumeric {
        name: name.clone(),
        kind: value.kind(),
    };
    let adjusted = value.minus_offset(offset).ok_or_else(expected_numeric)?;

    let mut selected = None;
    for clause in clauses {
        let PluralSelector::Explicit(explicit) = clause.selector else {
            continue;
        };
        if value.equals_explicit(explicit).ok_or_else(expected_numeric)? {
            selected = Some(clause);
            break;
        }
    }

    if selected.is_none() {
        let category = resolve_category(ctx.plural_rules(), ctx.locale(), &adjusted, kind)
            .map_err(|source| FormatError::Plural {
                name: name.clone(),
                source,
            })?;
        selected = clauses
            .iter()
            .find(|clause| clause.keyword() == Some(category))
            .or_else(|| clauses.iter().find(|clause| clause.keyword() == Some(OTHER)));
    }

    let clause = selected.ok_or_else(|| FormatError::MissingPluralOther { name: name.clone() })?;
    trace!(argument = %argument, ?kind, offset, selector = ?clause.selector, "selected plural clause");

    let context = PluralContext {
        name,
        value: adjusted,
    };
    eval_nodes(&clause.nodes, ctx, Some(&context), output)
}

fn eval_datetime(
    argument: &Argument,
    date_style: Option<DateTimeStyle>,
    time_style: Option<DateTimeStyle>,
    ctx: &EvalContext<'_>,
) -> Result<String, FormatError> {
    let value = ctx.resolve(argument)?;
    let instant = value
        .as_instant()
        .ok_or_else(|| FormatError::ExpectedInstant {
            name: argument.key(),
            kind: value.kind(),
        })?;
    ctx.date_time()
        .render(ctx.locale(), ctx.time_zone(), date_style, time_style, instant)
        .map_err(|source| FormatError::DateTime {
            name: argument.key(),
            source,
        })
}
