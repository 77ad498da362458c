//! CLDR plural category resolution.
//!
//! Classification itself is delegated to a [`PluralRuleProvider`]. The
//! built-in [`IcuPluralRules`] provider uses ICU4X compiled data and caches
//! `PluralRules` per thread per locale and rule type, so repeated lookups
//! reuse the previously constructed rules.

use std::cell::RefCell;

use fixed_decimal::Decimal;
use icu_locale_core::Locale;
use icu_plurals::{PluralCategory, PluralOperands, PluralRuleType, PluralRules};
use serde::Serialize;
use thiserror::Error;
use tracing::trace;

use super::operands::{OperandError, Operands};

/// Which CLDR rule set a plural argument uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PluralKind {
    /// `plural`
    Cardinal,
    /// `selectordinal`
    Ordinal,
}

impl PluralKind {
    /// The argument type keyword that introduces this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            PluralKind::Cardinal => "plural",
            PluralKind::Ordinal => "selectordinal",
        }
    }
}

/// An error from plural category resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PluralError {
    #[error(transparent)]
    Operands(#[from] OperandError),

    #[error("no plural rules for locale '{locale}': {reason}")]
    UnsupportedLocale { locale: String, reason: String },

    #[error("plural rules rejected operands '{operands}'")]
    InvalidOperands { operands: String },
}

/// A source of CLDR plural classifications.
///
/// Implementations receive the five TR35 operands and return the category
/// for the locale's cardinal or ordinal rule set.
pub trait PluralRuleProvider: Send + Sync {
    fn cardinal_category(
        &self,
        locale: &Locale,
        operands: &Operands,
    ) -> Result<PluralCategory, PluralError>;

    fn ordinal_category(
        &self,
        locale: &Locale,
        operands: &Operands,
    ) -> Result<PluralCategory, PluralError>;

    /// Dispatch on `kind`.
    fn category(
        &self,
        locale: &Locale,
        operands: &Operands,
        kind: PluralKind,
    ) -> Result<PluralCategory, PluralError> {
        match kind {
            PluralKind::Cardinal => self.cardinal_category(locale, operands),
            PluralKind::Ordinal => self.ordinal_category(locale, operands),
        }
    }
}

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by locale and rule type.
    static PLURAL_RULES_CACHE: RefCell<Vec<(Locale, PluralKind, PluralRules)>> =
        const { RefCell::new(Vec::new()) };
}

/// Plural rules backed by ICU4X compiled CLDR data.
#[derive(Debug, Clone, Copy, Default)]
pub struct IcuPluralRules;

impl IcuPluralRules {
    fn classify(
        locale: &Locale,
        operands: &Operands,
        kind: PluralKind,
    ) -> Result<PluralCategory, PluralError> {
        let icu_operands = to_icu_operands(operands)?;
        PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
            if let Some((_, _, rules)) = cache
                .iter()
                .find(|(cached, cached_kind, _)| cached == locale && *cached_kind == kind)
            {
                return Ok(rules.category_for(icu_operands));
            }
            let rules = build_rules(locale, kind)?;
            let category = rules.category_for(icu_operands);
            cache.push((locale.clone(), kind, rules));
            Ok(category)
        })
    }
}

impl PluralRuleProvider for IcuPluralRules {
    fn cardinal_category(
        &self,
        locale: &Locale,
        operands: &Operands,
    ) -> Result<PluralCategory, PluralError> {
        Self::classify(locale, operands, PluralKind::Cardinal)
    }

    fn ordinal_category(
        &self,
        locale: &Locale,
        operands: &Operands,
    ) -> Result<PluralCategory, PluralError> {
        Self::classify(locale, operands, PluralKind::Ordinal)
    }
}

fn build_rules(locale: &Locale, kind: PluralKind) -> Result<PluralRules, PluralError> {
    let rule_type = match kind {
        PluralKind::Cardinal => PluralRuleType::Cardinal,
        PluralKind::Ordinal => PluralRuleType::Ordinal,
    };
    trace!(%locale, ?kind, "building plural rules");
    PluralRules::try_new(locale.clone().into(), rule_type.into()).map_err(|e| {
        PluralError::UnsupportedLocale {
            locale: locale.to_string(),
            reason: e.to_string(),
        }
    })
}

/// Operands travel to ICU4X through their decimal form, which preserves the
/// visible fraction digits.
fn to_icu_operands(operands: &Operands) -> Result<PluralOperands, PluralError> {
    let decimal = operands.to_string();
    match decimal.parse::<Decimal>() {
        Ok(parsed) => Ok(PluralOperands::from(&parsed)),
        Err(_) => Err(PluralError::InvalidOperands { operands: decimal }),
    }
}

/// Translate a `PluralCategory` to its CLDR keyword.
pub fn category_keyword(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icu(decimal: &str) -> PluralOperands {
        PluralOperands::from(&decimal.parse::<Decimal>().unwrap())
    }

    #[test]
    fn leading_fraction_zeros_survive_conversion() {
        let ops: Operands = "1.05".parse().unwrap();
        let converted = to_icu_operands(&ops).unwrap();
        assert_eq!(converted, icu("1.05"));
        assert_ne!(converted, icu("1.5"));
    }

    #[test]
    fn trailing_fraction_zeros_survive_conversion() {
        let ops: Operands = "2.50".parse().unwrap();
        assert_eq!(to_icu_operands(&ops).unwrap(), icu("2.50"));
        assert_ne!(to_icu_operands(&ops).unwrap(), icu("2.5"));
    }
}
