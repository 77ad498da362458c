//! Display output of every user-facing error.

use messageformat::parser::parse_message;
use messageformat::{
    DateTimeError, FormatError, compile, compute_suggestions, format_named, locale, params,
};

fn parse_error(pattern: &str) -> String {
    parse_message(pattern).unwrap_err().to_string()
}

#[test]
fn parse_error_messages() {
    insta::assert_snapshot!(parse_error("ab 'cd"), @"unterminated quoted string at 1:4");
    insta::assert_snapshot!(parse_error("{01}"), @"number must not have leading zero at 1:2");
    insta::assert_snapshot!(
        parse_error("{99999999999999999999}"),
        @"number '99999999999999999999' out of range at 1:2"
    );
    insta::assert_snapshot!(parse_error("{a-b}"), @"unexpected character '-' at 1:3");
    insta::assert_snapshot!(
        parse_error("{NAME"),
        @"unexpected token <EOF> at 1:6, expected '}' or ','"
    );
    insta::assert_snapshot!(parse_error("{N, plural, }"), @"no plural clauses at 1:1");
}

#[test]
fn nesting_error_message() {
    let err = messageformat::parser::parse_message_with_depth(
        "{a, select, other{{b, select, other{x}}}}",
        2,
    )
    .unwrap_err();
    insta::assert_snapshot!(err, @"pattern nesting exceeds maximum depth of 2 at 1:36");
}

#[test]
fn format_error_messages() {
    let en = locale!("en");
    let err = format_named(&en, "{NAEM}", &params! { "NAME" => "x" }).unwrap_err();
    insta::assert_snapshot!(err, @"unknown argument 'NAEM'; did you mean: NAME?");

    let err = format_named(&en, "{NAME}", &params! {}).unwrap_err();
    insta::assert_snapshot!(err, @"unknown argument 'NAME'");

    let err = format_named(&en, "{G, select, a{x}}", &params! { "G" => "b" }).unwrap_err();
    insta::assert_snapshot!(err, @"missing select other clause for 'G'");

    let err = format_named(&en, "{N, plural, one{x}}", &params! { "N" => 5 }).unwrap_err();
    insta::assert_snapshot!(err, @"missing plural other clause for 'N'");

    let err = format_named(&en, "{N, plural, other{x}}", &params! { "N" => true }).unwrap_err();
    insta::assert_snapshot!(err, @"expected numeric type for 'N', got bool");

    let err = format_named(&en, "{T, time, short}", &params! { "T" => 1.5 }).unwrap_err();
    insta::assert_snapshot!(err, @"expected instant for 'T', got float");
}

#[test]
fn wrapped_error_messages() {
    let err = FormatError::DateTime {
        name: "T".to_string(),
        source: DateTimeError::LocalTimeZoneUnsupported,
    };
    insta::assert_snapshot!(
        err,
        @"date/time rendering failed for 'T': local time zone is not supported"
    );
    insta::assert_snapshot!(FormatError::PoundOutsidePlural, @"pound token emitted incorrectly");
    insta::assert_snapshot!(
        FormatError::MalformedCall { function: "plural" },
        @"malformed call to 'plural'"
    );
}

#[test]
fn compile_error_messages() {
    let err = compile(&locale!("en"), "{G, select, a{x}}").unwrap_err();
    insta::assert_snapshot!(err, @"missing select other clause for 'G'");
    let err = compile(&locale!("en"), "{NAME").unwrap_err();
    insta::assert_snapshot!(err, @"unexpected token <EOF> at 1:6, expected '}' or ','");
}

// =========================================================================
// Suggestions
// =========================================================================

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn short_names_allow_one_edit() {
    let available = names(&["cat", "car", "dog", "cart"]);
    assert_eq!(compute_suggestions("cat", &available), names(&["car", "cart"]));
    assert_eq!(compute_suggestions("cax", &available), names(&["car", "cat"]));
}

#[test]
fn longer_names_allow_two_edits() {
    let available = names(&["COUNT", "COUNTER", "AMOUNT"]);
    assert_eq!(
        compute_suggestions("CONT", &available),
        names(&["COUNT"])
    );
}

#[test]
fn suggestions_are_capped_at_three() {
    let available = names(&["abcd", "abce", "abcf", "abcg", "abch"]);
    assert_eq!(
        compute_suggestions("abcx", &available),
        names(&["abcd", "abce", "abcf"])
    );
}

#[test]
fn exact_matches_are_not_suggested() {
    assert!(compute_suggestions("same", &names(&["same"])).is_empty());
}
