//! Integration tests for the pattern parser.

use messageformat::parser::{
    Argument, Message, Node, ParseError, PluralClause, PluralSelector, SelectClause,
    parse_message, parse_message_with_depth,
};
use messageformat::{DateTimeStyle, PluralKind};

fn parse(pattern: &str) -> Vec<Node> {
    parse_message(pattern).unwrap().nodes
}

fn name(s: &str) -> Argument {
    Argument::Name(s.to_string())
}

fn select_clause(keyword: &str, nodes: Vec<Node>) -> SelectClause {
    SelectClause {
        keyword: keyword.to_string(),
        nodes,
    }
}

fn keyword_clause(keyword: &str, nodes: Vec<Node>) -> PluralClause {
    PluralClause {
        selector: PluralSelector::Keyword(keyword.to_string()),
        nodes,
    }
}

fn explicit_clause(value: i64, nodes: Vec<Node>) -> PluralClause {
    PluralClause {
        selector: PluralSelector::Explicit(value),
        nodes,
    }
}

// =========================================================================
// Text and simple arguments
// =========================================================================

#[test]
fn empty_pattern() {
    assert_eq!(parse(""), vec![Node::text("")]);
}

#[test]
fn text_only() {
    assert_eq!(parse("Hello"), vec![Node::text("Hello")]);
}

#[test]
fn pound_at_top_level_is_text() {
    assert_eq!(parse("a # b"), vec![Node::text("a # b")]);
}

#[test]
fn named_argument() {
    assert_eq!(
        parse("Hello {NAME}!"),
        vec![
            Node::text("Hello "),
            Node::NoneArg {
                argument: name("NAME")
            },
            Node::text("!"),
        ]
    );
}

#[test]
fn positional_argument() {
    assert_eq!(
        parse("{1}{0}"),
        vec![
            Node::text(""),
            Node::NoneArg {
                argument: Argument::Index(1)
            },
            Node::text(""),
            Node::NoneArg {
                argument: Argument::Index(0)
            },
            Node::text(""),
        ]
    );
}

#[test]
fn argument_keys() {
    assert_eq!(name("NAME").key(), "NAME");
    assert_eq!(Argument::Index(3).key(), "3");
    assert_eq!(Argument::default(), Argument::Index(0));
}

#[test]
fn date_time_arguments() {
    assert_eq!(
        parse("{T, date, short}{T, time, medium}{T, datetime, full}"),
        vec![
            Node::text(""),
            Node::DateArg {
                argument: name("T"),
                style: DateTimeStyle::Short,
            },
            Node::text(""),
            Node::TimeArg {
                argument: name("T"),
                style: DateTimeStyle::Medium,
            },
            Node::text(""),
            Node::DatetimeArg {
                argument: name("T"),
                style: DateTimeStyle::Full,
            },
            Node::text(""),
        ]
    );
}

// =========================================================================
// Select
// =========================================================================

#[test]
fn select_argument() {
    assert_eq!(
        parse("{GENDER, select, male {He} female {She} other {They}}"),
        vec![
            Node::text(""),
            Node::SelectArg {
                argument: name("GENDER"),
                clauses: vec![
                    select_clause("male", vec![Node::text("He")]),
                    select_clause("female", vec![Node::text("She")]),
                    select_clause("other", vec![Node::text("They")]),
                ],
            },
            Node::text(""),
        ]
    );
}

#[test]
fn select_without_other_parses() {
    let nodes = parse("{G, select, male{He}}");
    let Node::SelectArg { clauses, .. } = &nodes[1] else {
        panic!("expected select");
    };
    assert_eq!(clauses.len(), 1);
}

#[test]
fn pound_in_select_is_text() {
    assert_eq!(
        parse("{G, select, other{#}}"),
        vec![
            Node::text(""),
            Node::SelectArg {
                argument: name("G"),
                clauses: vec![select_clause("other", vec![Node::text("#")])],
            },
            Node::text(""),
        ]
    );
}

#[test]
fn pound_in_select_nested_in_plural_is_text() {
    assert_eq!(
        parse("{N, plural, other{{G, select, other{#}}}}"),
        vec![
            Node::text(""),
            Node::PluralArg {
                argument: name("N"),
                kind: PluralKind::Cardinal,
                offset: 0,
                clauses: vec![keyword_clause(
                    "other",
                    vec![
                        Node::text(""),
                        Node::SelectArg {
                            argument: name("G"),
                            clauses: vec![select_clause("other", vec![Node::text("#")])],
                        },
                        Node::text(""),
                    ]
                )],
            },
            Node::text(""),
        ]
    );
}

// =========================================================================
// Plural and selectordinal
// =========================================================================

#[test]
fn plural_with_pound() {
    assert_eq!(
        parse("{COUNT, plural, one{# cat} other{# cats}}"),
        vec![
            Node::text(""),
            Node::PluralArg {
                argument: name("COUNT"),
                kind: PluralKind::Cardinal,
                offset: 0,
                clauses: vec![
                    keyword_clause("one", vec![Node::text(""), Node::Pound, Node::text(" cat")]),
                    keyword_clause(
                        "other",
                        vec![Node::text(""), Node::Pound, Node::text(" cats")]
                    ),
                ],
            },
            Node::text(""),
        ]
    );
}

#[test]
fn plural_with_offset_and_explicit_values() {
    assert_eq!(
        parse("{0, plural, offset:1 =0{none} =1{one} other{# more}}"),
        vec![
            Node::text(""),
            Node::PluralArg {
                argument: Argument::Index(0),
                kind: PluralKind::Cardinal,
                offset: 1,
                clauses: vec![
                    explicit_clause(0, vec![Node::text("none")]),
                    explicit_clause(1, vec![Node::text("one")]),
                    keyword_clause(
                        "other",
                        vec![Node::text(""), Node::Pound, Node::text(" more")]
                    ),
                ],
            },
            Node::text(""),
        ]
    );
}

#[test]
fn selectordinal_kind() {
    let nodes = parse("{N, selectordinal, one{#st} other{#th}}");
    let Node::PluralArg { kind, clauses, .. } = &nodes[1] else {
        panic!("expected plural");
    };
    assert_eq!(*kind, PluralKind::Ordinal);
    assert_eq!(clauses[0].keyword(), Some("one"));
}

#[test]
fn multiple_pounds_in_one_clause() {
    let nodes = parse("{N, plural, other{# of #}}");
    let Node::PluralArg { clauses, .. } = &nodes[1] else {
        panic!("expected plural");
    };
    assert_eq!(
        clauses[0].nodes,
        vec![
            Node::text(""),
            Node::Pound,
            Node::text(" of "),
            Node::Pound,
            Node::text(""),
        ]
    );
}

#[test]
fn pound_in_plural_nested_in_select_nested_in_plural() {
    let nodes = parse("{A, plural, other{{G, select, other{{B, plural, other{#}}}}}}");
    let Node::PluralArg { clauses, .. } = &nodes[1] else {
        panic!("expected outer plural");
    };
    let Node::SelectArg { clauses, .. } = &clauses[0].nodes[1] else {
        panic!("expected select");
    };
    let Node::PluralArg { clauses, .. } = &clauses[0].nodes[1] else {
        panic!("expected inner plural");
    };
    assert_eq!(
        clauses[0].nodes,
        vec![Node::text(""), Node::Pound, Node::text("")]
    );
}

#[test]
fn whitespace_and_newlines_between_clauses() {
    let nodes = parse(
        "{COUNT, plural, offset:1
            =1{Kitty}
            other{Kitty and # others}}",
    );
    let Node::PluralArg { offset, clauses, .. } = &nodes[1] else {
        panic!("expected plural");
    };
    assert_eq!(*offset, 1);
    assert_eq!(clauses.len(), 2);
}

// =========================================================================
// Serialization
// =========================================================================

#[test]
fn message_serializes_with_node_tags() {
    let message: Message = parse_message("Hi {NAME}").unwrap();
    assert_eq!(
        serde_json::to_string(&message).unwrap(),
        r#"{"nodes":[{"type":"text","value":"Hi "},{"type":"none_arg","argument":{"name":"NAME"}},{"type":"text","value":""}]}"#
    );
}

// =========================================================================
// Errors
// =========================================================================

#[test]
fn plural_without_clauses() {
    assert_eq!(
        parse_message("{N, plural, }").unwrap_err(),
        ParseError::NoClauses {
            kind: "plural",
            line: 1,
            column: 1,
        }
    );
}

#[test]
fn select_without_clauses() {
    assert_eq!(
        parse_message("ab{G, select,}").unwrap_err(),
        ParseError::NoClauses {
            kind: "select",
            line: 1,
            column: 3,
        }
    );
}

#[test]
fn unknown_argument_type() {
    let err = parse_message("{N, number}").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnexpectedToken { ref found, line: 1, column: 5, .. } if found == "number"
    ));
}

#[test]
fn unknown_date_style() {
    let err = parse_message("{T, date, tiny}").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnexpectedToken {
            found: "tiny".to_string(),
            expected: "short or medium or long or full".to_string(),
            line: 1,
            column: 11,
        }
    );
}

#[test]
fn every_date_style_keyword_parses_to_its_style() {
    for style in DateTimeStyle::ALL {
        let pattern = format!("{{T, time, {}}}", style.keyword());
        assert_eq!(
            parse(&pattern)[1],
            Node::TimeArg {
                argument: name("T"),
                style,
            }
        );
    }
}

#[test]
fn capitalized_date_style_is_rejected() {
    assert!(matches!(
        parse_message("{T, date, Full}").unwrap_err(),
        ParseError::UnexpectedToken { ref found, line: 1, column: 11, .. } if found == "Full"
    ));
}

#[test]
fn unclosed_argument() {
    assert_eq!(
        parse_message("{NAME").unwrap_err(),
        ParseError::UnexpectedToken {
            found: "<EOF>".to_string(),
            expected: "'}' or ','".to_string(),
            line: 1,
            column: 6,
        }
    );
}

#[test]
fn stray_closing_brace() {
    assert!(matches!(
        parse_message("a}b").unwrap_err(),
        ParseError::UnexpectedToken { line: 1, column: 2, .. }
    ));
}

#[test]
fn clause_without_body() {
    assert!(matches!(
        parse_message("{G, select, male}").unwrap_err(),
        ParseError::UnexpectedToken { .. }
    ));
}

#[test]
fn offset_after_clause_is_rejected() {
    assert!(matches!(
        parse_message("{N, plural, one{x} offset:1 other{y}}").unwrap_err(),
        ParseError::UnexpectedToken { .. }
    ));
}

#[test]
fn explicit_value_out_of_range() {
    assert!(matches!(
        parse_message("{N, plural, =9223372036854775808{x} other{y}}").unwrap_err(),
        ParseError::NumberOutOfRange { .. }
    ));
}

#[test]
fn nesting_bound() {
    let pattern = "{a, select, other{{b, select, other{x}}}}";
    assert!(parse_message_with_depth(pattern, 3).is_ok());
    assert_eq!(
        parse_message_with_depth(pattern, 2).unwrap_err(),
        ParseError::NestingTooDeep {
            max_depth: 2,
            line: 1,
            column: 36,
        }
    );
}

#[test]
fn deeply_nested_pattern_is_rejected_not_overflowed() {
    let mut pattern = String::new();
    for _ in 0..500 {
        pattern.push_str("{a, select, other{");
    }
    pattern.push('x');
    for _ in 0..500 {
        pattern.push_str("}}");
    }
    assert!(matches!(
        parse_message(&pattern).unwrap_err(),
        ParseError::NestingTooDeep { max_depth: 64, .. }
    ));
}
