//! CLI command implementations.

mod compile;
mod format;
mod operands;
mod parse;

pub use compile::{CompileArgs, run_compile};
pub use format::{FormatArgs, run_format};
pub use operands::{OperandsArgs, run_operands};
pub use parse::{ParseArgs, run_parse};

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use messageformat::parser::DEFAULT_MAX_DEPTH;
use messageformat::{Locale, MessageFormat, Value};
use miette::miette;
use tracing::debug;

/// Formatter configuration shared by every command.
#[derive(Debug, clap::Args)]
pub struct FormatterArgs {
    /// Locale for plural rules and date patterns (e.g., en, ru, ar)
    #[arg(long, env = "MF_LOCALE", default_value = "en")]
    pub locale: String,

    /// Time zone for date and time arguments
    #[arg(long, env = "MF_TIME_ZONE", default_value = "UTC")]
    pub time_zone: String,

    /// Maximum argument nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,
}

impl FormatterArgs {
    pub fn locale(&self) -> miette::Result<Locale> {
        self.locale
            .parse::<Locale>()
            .map_err(|e| miette!("Invalid locale '{}': {}", self.locale, e))
    }

    pub fn build(&self) -> miette::Result<MessageFormat> {
        let locale = self.locale()?;
        debug!(
            %locale,
            time_zone = %self.time_zone,
            max_depth = self.max_depth,
            "configured formatter"
        );
        Ok(MessageFormat::builder()
            .locale(locale)
            .time_zone(self.time_zone.as_str())
            .max_depth(self.max_depth)
            .build())
    }
}

/// Parse a key=value parameter string.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{s}': expected name=value"))?;
    Ok((key.to_string(), value.to_string()))
}

/// Interpret a command-line argument value.
///
/// `true`/`false` become booleans, integers become `i64`, RFC 3339 timestamps
/// become instants, and everything else (including decimals, so their
/// fraction digits survive) stays a string.
fn parse_value(raw: &str) -> Value {
    if let Ok(b) = raw.parse::<bool>() {
        return Value::from(b);
    }
    if let Ok(n) = raw.parse::<i64>() {
        return Value::from(n);
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Value::from(t.with_timezone(&Utc));
    }
    Value::from(raw)
}

/// Build the binding map from `--param` pairs and positional `--arg` values.
fn bindings(params: Vec<(String, String)>, args: &[String]) -> HashMap<String, Value> {
    let positional = args.iter().map(|raw| parse_value(raw)).collect::<Vec<_>>();
    let mut map = messageformat::positional_bindings(&positional);
    map.extend(params.into_iter().map(|(k, v)| {
        let value = parse_value(&v);
        (k, value)
    }));
    debug!(
        positional = positional.len(),
        total = map.len(),
        "built argument bindings"
    );
    map
}
