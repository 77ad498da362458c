//! Integration tests for date and time arguments.

use chrono::{DateTime, TimeZone, Utc};
use messageformat::{
    DateTimeError, DateTimeService, DateTimeStyle, EnglishDateTime, FormatError, Locale,
    MessageFormat, locale, params,
};

fn november_tenth() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap()
}

fn render(date: Option<DateTimeStyle>, time: Option<DateTimeStyle>) -> String {
    EnglishDateTime
        .render(&locale!("en"), "UTC", date, time, &november_tenth())
        .unwrap()
}

#[test]
fn date_styles() {
    assert_eq!(render(Some(DateTimeStyle::Short), None), "11/10/09");
    assert_eq!(render(Some(DateTimeStyle::Medium), None), "Nov 10, 2009");
    assert_eq!(render(Some(DateTimeStyle::Long), None), "November 10, 2009");
    assert_eq!(
        render(Some(DateTimeStyle::Full), None),
        "Tuesday, November 10, 2009"
    );
}

#[test]
fn time_styles() {
    assert_eq!(render(None, Some(DateTimeStyle::Short)), "11:00 PM");
    assert_eq!(render(None, Some(DateTimeStyle::Medium)), "11:00:00 PM");
    assert_eq!(render(None, Some(DateTimeStyle::Long)), "11:00:00 PM UTC");
    assert_eq!(
        render(None, Some(DateTimeStyle::Full)),
        "11:00:00 PM Coordinated Universal Time"
    );
}

#[test]
fn morning_times_drop_hour_padding() {
    let morning = Utc.with_ymd_and_hms(2021, 3, 5, 9, 7, 3).unwrap();
    let text = EnglishDateTime
        .render(
            &locale!("en"),
            "UTC",
            Some(DateTimeStyle::Short),
            Some(DateTimeStyle::Medium),
            &morning,
        )
        .unwrap();
    assert_eq!(text, "3/5/21, 9:07:03 AM");
}

#[test]
fn datetime_through_formatter() {
    let mf = MessageFormat::default();
    let p = params! { "T" => november_tenth() };
    let cases = [
        ("{T, datetime, short}", "11/10/09, 11:00 PM"),
        ("{T, datetime, medium}", "Nov 10, 2009, 11:00:00 PM"),
        ("{T, datetime, long}", "November 10, 2009 at 11:00:00 PM UTC"),
        (
            "{T, datetime, full}",
            "Tuesday, November 10, 2009 at 11:00:00 PM Coordinated Universal Time",
        ),
    ];
    for (pattern, expected) in cases {
        assert_eq!(mf.format_named(pattern, &p).unwrap(), expected);
    }
}

#[test]
fn gmt_zone_names() {
    let mf = MessageFormat::builder().time_zone("GMT").build();
    let p = params! { "T" => november_tenth() };
    assert_eq!(
        mf.format_named("{T, time, long}", &p).unwrap(),
        "11:00:00 PM GMT"
    );
    assert_eq!(
        mf.format_named("{T, time, full}", &p).unwrap(),
        "11:00:00 PM Greenwich Mean Time"
    );
}

#[test]
fn local_time_zone_is_rejected() {
    let mf = MessageFormat::builder().time_zone("Local").build();
    let err = mf
        .format_named("{T, date, short}", &params! { "T" => november_tenth() })
        .unwrap_err();
    assert_eq!(
        err,
        FormatError::DateTime {
            name: "T".to_string(),
            source: DateTimeError::LocalTimeZoneUnsupported,
        }
    );
}

#[test]
fn unknown_time_zone_is_rejected() {
    let err = EnglishDateTime
        .render(
            &locale!("en"),
            "Mars/Olympus",
            Some(DateTimeStyle::Short),
            None,
            &november_tenth(),
        )
        .unwrap_err();
    assert_eq!(
        err,
        DateTimeError::UnknownTimeZone {
            name: "Mars/Olympus".to_string()
        }
    );
}

#[test]
fn other_languages_are_unsupported() {
    let fr: Locale = locale!("fr");
    let err = EnglishDateTime
        .render(&fr, "UTC", Some(DateTimeStyle::Short), None, &november_tenth())
        .unwrap_err();
    assert_eq!(
        err,
        DateTimeError::UnsupportedLocale {
            locale: "fr".to_string()
        }
    );
}

#[test]
fn english_regions_are_supported() {
    let text = EnglishDateTime
        .render(
            &locale!("en-GB"),
            "UTC",
            Some(DateTimeStyle::Short),
            None,
            &november_tenth(),
        )
        .unwrap();
    assert_eq!(text, "11/10/09");
}

#[test]
fn date_argument_requires_instant() {
    let err = MessageFormat::default()
        .format_named("{T, date, short}", &params! { "T" => 5 })
        .unwrap_err();
    assert_eq!(
        err,
        FormatError::ExpectedInstant {
            name: "T".to_string(),
            kind: "integer",
        }
    );
}

#[test]
fn instant_has_no_plain_text_form() {
    let err = MessageFormat::default()
        .format_named("{T}", &params! { "T" => november_tenth() })
        .unwrap_err();
    assert_eq!(
        err,
        FormatError::UnsupportedArgumentType {
            name: "T".to_string(),
            kind: "instant",
        }
    );
}

/// Renders every instant as its RFC 3339 form.
struct Iso;

impl DateTimeService for Iso {
    fn render(
        &self,
        _locale: &Locale,
        _time_zone: &str,
        _date_style: Option<DateTimeStyle>,
        _time_style: Option<DateTimeStyle>,
        instant: &DateTime<Utc>,
    ) -> Result<String, DateTimeError> {
        Ok(instant.to_rfc3339())
    }
}

#[test]
fn formatter_uses_configured_service() {
    let mf = MessageFormat::builder()
        .locale(locale!("fr"))
        .date_time(Box::new(Iso))
        .build();
    assert_eq!(
        mf.format_named("{T, date, full}", &params! { "T" => november_tenth() })
            .unwrap(),
        "2009-11-10T23:00:00+00:00"
    );
}

#[test]
fn style_keywords() {
    for style in [
        DateTimeStyle::Short,
        DateTimeStyle::Medium,
        DateTimeStyle::Long,
        DateTimeStyle::Full,
    ] {
        assert_eq!(DateTimeStyle::from_keyword(style.keyword()), Some(style));
        assert_eq!(style.to_string(), style.keyword());
    }
    assert_eq!(DateTimeStyle::from_keyword("tiny"), None);
}
