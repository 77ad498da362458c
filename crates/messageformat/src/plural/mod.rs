//! Plural operand derivation and category resolution.

mod operands;
mod rules;

pub use icu_plurals::PluralCategory;
pub use operands::{OperandError, Operands, derive_operands};
pub use rules::{IcuPluralRules, PluralError, PluralKind, PluralRuleProvider, category_keyword};

use icu_locale_core::Locale;
use tracing::trace;

use crate::types::Value;

/// Classify `value` with `provider`, returning the category keyword.
pub fn resolve_category(
    provider: &dyn PluralRuleProvider,
    locale: &Locale,
    value: &Value,
    kind: PluralKind,
) -> Result<&'static str, PluralError> {
    let operands = derive_operands(value)?;
    let category = category_keyword(provider.category(locale, &operands, kind)?);
    trace!(%locale, ?kind, %operands, category, "resolved plural category");
    Ok(category)
}

/// Get the CLDR plural category of a value using the built-in rules.
///
/// Returns one of `"zero"`, `"one"`, `"two"`, `"few"`, `"many"`, `"other"`.
///
/// # Examples
///
/// ```
/// use messageformat::plural::{PluralKind, plural_category};
/// use messageformat::{Value, locale};
///
/// let en = locale!("en");
/// assert_eq!(plural_category(&en, &Value::from(1), PluralKind::Cardinal).unwrap(), "one");
/// assert_eq!(plural_category(&en, &Value::from("1.0"), PluralKind::Cardinal).unwrap(), "other");
/// assert_eq!(plural_category(&en, &Value::from(2), PluralKind::Ordinal).unwrap(), "two");
/// ```
pub fn plural_category(
    locale: &Locale,
    value: &Value,
    kind: PluralKind,
) -> Result<&'static str, PluralError> {
    resolve_category(&IcuPluralRules, locale, value, kind)
}
