//! Plural form selection.
//!
//! Exact-count rules win first, in declaration order, so a locale can special
//! case `1` (or `0`) regardless of where the rule is written. Interval and
//! CLDR category rules are tried next in declaration order, and the `other`
//! rule catches everything else.
//!
//! Plural rules are cached per thread per language to avoid re-creating
//! `PluralRules` instances on every call.

use std::cell::RefCell;

use icu_locale_core::locale;
use icu_plurals::{PluralCategory, PluralRuleType, PluralRules};

use crate::parser::{PhraseBody, PhraseDefinition, RuleCondition, Template};
use crate::table::FormatError;

/// Supported language codes for plural rule resolution.
const SUPPORTED_LANGUAGES: &[&str] = &[
    "ar", "bn", "de", "el", "en", "es", "fa", "fr", "he", "hi", "hu", "id", "it", "ja", "ko", "nl",
    "pl", "pt", "ro", "ru", "th", "tr", "uk", "vi", "zh",
];

thread_local! {
    /// Per-thread cache of `PluralRules` keyed by language code.
    static PLURAL_RULES_CACHE: RefCell<Vec<(&'static str, PluralRules)>> = const { RefCell::new(Vec::new()) };
}

/// Normalize a language code to a supported static string reference.
///
/// Region subtags are ignored (`pt-BR` uses `pt` rules). Returns `"en"` for
/// unrecognized codes.
fn normalize_lang(lang: &str) -> &'static str {
    let primary = lang.split(['-', '_']).next().unwrap_or(lang);
    SUPPORTED_LANGUAGES
        .iter()
        .find(|&&code| code == primary)
        .copied()
        .unwrap_or("en")
}

/// Build `PluralRules` for a normalized language code.
fn build_rules(lang: &'static str) -> PluralRules {
    let loc = match lang {
        "en" => locale!("en"),
        "ru" => locale!("ru"),
        "ar" => locale!("ar"),
        "de" => locale!("de"),
        "es" => locale!("es"),
        "fr" => locale!("fr"),
        "hu" => locale!("hu"),
        "it" => locale!("it"),
        "pt" => locale!("pt"),
        "ja" => locale!("ja"),
        "zh" => locale!("zh"),
        "ko" => locale!("ko"),
        "nl" => locale!("nl"),
        "pl" => locale!("pl"),
        "tr" => locale!("tr"),
        "uk" => locale!("uk"),
        "vi" => locale!("vi"),
        "th" => locale!("th"),
        "id" => locale!("id"),
        "el" => locale!("el"),
        "ro" => locale!("ro"),
        "fa" => locale!("fa"),
        "bn" => locale!("bn"),
        "hi" => locale!("hi"),
        "he" => locale!("he"),
        _ => locale!("en"),
    };
    PluralRules::try_new(loc.into(), PluralRuleType::Cardinal.into())
        .expect("compiled data covers every supported language")
}

/// Translate a `PluralCategory` enum to its string representation.
fn category_str(category: PluralCategory) -> &'static str {
    match category {
        PluralCategory::Zero => "zero",
        PluralCategory::One => "one",
        PluralCategory::Two => "two",
        PluralCategory::Few => "few",
        PluralCategory::Many => "many",
        PluralCategory::Other => "other",
    }
}

/// Get the CLDR cardinal category for a count in a given language.
///
/// Returns one of: "zero", "one", "two", "few", "many", "other".
///
/// # Examples
///
/// ```
/// use datelingo::table::plural_category;
///
/// assert_eq!(plural_category("en", 1), "one");
/// assert_eq!(plural_category("en", 2), "other");
///
/// assert_eq!(plural_category("ru", 1), "one");
/// assert_eq!(plural_category("ru", 3), "few");
/// assert_eq!(plural_category("ru", 5), "many");
/// assert_eq!(plural_category("ru", 21), "one");
/// ```
pub fn plural_category(lang: &str, n: u64) -> &'static str {
    let lang = normalize_lang(lang);
    PLURAL_RULES_CACHE.with_borrow_mut(|cache| {
        if let Some(entry) = cache.iter().find(|(code, _)| *code == lang) {
            return category_str(entry.1.category_for(n));
        }
        let rules = build_rules(lang);
        let category = category_str(rules.category_for(n));
        cache.push((lang, rules));
        category
    })
}

/// Select the template of `entry` that applies to `count`.
///
/// `lang` is only consulted by CLDR category rules. Single-template entries
/// return their template for every count.
///
/// # Errors
///
/// Returns [`FormatError::NoMatchingForm`] when no rule matches, which can only
/// happen for an entry without an `other` rule.
pub fn select_form<'a>(
    entry: &'a PhraseDefinition,
    count: u64,
    lang: &str,
) -> Result<&'a Template, FormatError> {
    let forms = match &entry.body {
        PhraseBody::Simple(template) => return Ok(template),
        PhraseBody::Plural(forms) => forms,
    };

    let exact = forms.iter().find(|form| {
        form.conditions
            .iter()
            .any(|condition| matches!(condition, RuleCondition::Exact(n) if *n == count))
    });
    if let Some(form) = exact {
        return Ok(&form.template);
    }

    let mut category = None;
    for form in forms {
        for condition in &form.conditions {
            let matched = match condition {
                RuleCondition::Interval { .. } => condition.matches_count(count),
                RuleCondition::Category(name) => {
                    *category.get_or_insert_with(|| plural_category(lang, count)) == name.as_str()
                }
                RuleCondition::Exact(_) | RuleCondition::Default => false,
            };
            if matched {
                return Ok(&form.template);
            }
        }
    }

    forms
        .iter()
        .find(|form| form.conditions.contains(&RuleCondition::Default))
        .map(|form| &form.template)
        .ok_or_else(|| FormatError::NoMatchingForm {
            key: entry.name.clone(),
            count,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_subtags_use_language_rules() {
        assert_eq!(normalize_lang("pt-BR"), "pt");
        assert_eq!(normalize_lang("hu_HU"), "hu");
    }

    #[test]
    fn unknown_languages_use_english_rules() {
        assert_eq!(normalize_lang("xx"), "en");
        assert_eq!(plural_category("xx", 1), "one");
    }

    #[test]
    fn repeated_lookups_reuse_cached_rules() {
        assert_eq!(plural_category("uk", 2), "few");
        assert_eq!(plural_category("uk", 2), "few");
        PLURAL_RULES_CACHE.with_borrow(|cache| {
            assert_eq!(cache.iter().filter(|(code, _)| *code == "uk").count(), 1);
        });
    }
}
