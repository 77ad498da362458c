//! Date and time rendering for `date`, `time` and `datetime` arguments.
//!
//! Rendering is delegated to a [`DateTimeService`]. The built-in
//! [`EnglishDateTime`] covers CLDR `en` patterns in UTC.

use std::fmt;

use chrono::{DateTime, Utc};
use icu_locale_core::Locale;
use serde::Serialize;
use thiserror::Error;

/// The style keyword of a date/time argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DateTimeStyle {
    Short,
    Medium,
    Long,
    Full,
}

impl DateTimeStyle {
    /// Every style, in the order the keywords are listed in diagnostics.
    pub const ALL: [DateTimeStyle; 4] = [
        DateTimeStyle::Short,
        DateTimeStyle::Medium,
        DateTimeStyle::Long,
        DateTimeStyle::Full,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            DateTimeStyle::Short => "short",
            DateTimeStyle::Medium => "medium",
            DateTimeStyle::Long => "long",
            DateTimeStyle::Full => "full",
        }
    }

    /// Parse a style keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "short" => Some(DateTimeStyle::Short),
            "medium" => Some(DateTimeStyle::Medium),
            "long" => Some(DateTimeStyle::Long),
            "full" => Some(DateTimeStyle::Full),
            _ => None,
        }
    }
}

impl fmt::Display for DateTimeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// An error from a date/time service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateTimeError {
    /// The process-local zone alias cannot be resolved deterministically.
    #[error("local time zone is not supported")]
    LocalTimeZoneUnsupported,

    #[error("unknown time zone '{name}'")]
    UnknownTimeZone { name: String },

    #[error("no date/time patterns for locale '{locale}'")]
    UnsupportedLocale { locale: String },
}

/// A locale-aware renderer for instants.
///
/// `date_style` and `time_style` are `None` when that half is omitted, so a
/// `date` argument passes only a date style and `datetime` passes both.
/// Implementations must fail with [`DateTimeError::LocalTimeZoneUnsupported`]
/// when `time_zone` is `"Local"`.
pub trait DateTimeService: Send + Sync {
    fn render(
        &self,
        locale: &Locale,
        time_zone: &str,
        date_style: Option<DateTimeStyle>,
        time_style: Option<DateTimeStyle>,
        instant: &DateTime<Utc>,
    ) -> Result<String, DateTimeError>;
}

/// English date/time patterns for UTC.
///
/// | style  | date                      | time                                        |
/// |--------|---------------------------|---------------------------------------------|
/// | short  | `1/2/06`                  | `3:04 PM`                                   |
/// | medium | `Jan 2, 2006`             | `3:04:05 PM`                                |
/// | long   | `January 2, 2006`         | `3:04:05 PM UTC`                            |
/// | full   | `Monday, January 2, 2006` | `3:04:05 PM Coordinated Universal Time`     |
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishDateTime;

impl EnglishDateTime {
    fn zone_names(time_zone: &str) -> Result<(&'static str, &'static str), DateTimeError> {
        match time_zone {
            "Local" => Err(DateTimeError::LocalTimeZoneUnsupported),
            "UTC" | "Etc/UTC" => Ok(("UTC", "Coordinated Universal Time")),
            "GMT" | "Etc/GMT" => Ok(("GMT", "Greenwich Mean Time")),
            other => Err(DateTimeError::UnknownTimeZone {
                name: other.to_string(),
            }),
        }
    }
}

impl DateTimeService for EnglishDateTime {
    fn render(
        &self,
        locale: &Locale,
        time_zone: &str,
        date_style: Option<DateTimeStyle>,
        time_style: Option<DateTimeStyle>,
        instant: &DateTime<Utc>,
    ) -> Result<String, DateTimeError> {
        let (short_zone, long_zone) = Self::zone_names(time_zone)?;
        if locale.id.language.as_str() != "en" {
            return Err(DateTimeError::UnsupportedLocale {
                locale: locale.to_string(),
            });
        }

        let date = date_style.map(|style| {
            let pattern = match style {
                DateTimeStyle::Short => "%-m/%-d/%y",
                DateTimeStyle::Medium => "%b %-d, %Y",
                DateTimeStyle::Long => "%B %-d, %Y",
                DateTimeStyle::Full => "%A, %B %-d, %Y",
            };
            instant.format(pattern).to_string()
        });
        let time = time_style.map(|style| match style {
            DateTimeStyle::Short => instant.format("%-I:%M %p").to_string(),
            DateTimeStyle::Medium => instant.format("%-I:%M:%S %p").to_string(),
            DateTimeStyle::Long => format!("{} {short_zone}", instant.format("%-I:%M:%S %p")),
            DateTimeStyle::Full => format!("{} {long_zone}", instant.format("%-I:%M:%S %p")),
        });

        Ok(match (date, time) {
            (Some(date), Some(time)) => {
                let joiner = match date_style {
                    Some(DateTimeStyle::Long | DateTimeStyle::Full) => " at ",
                    _ => ", ",
                };
                format!("{date}{joiner}{time}")
            }
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => String::new(),
        })
    }
}
