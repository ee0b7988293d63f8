//! Validated per-language tables of date vocabulary.

use std::collections::{BTreeMap, HashMap};
use std::fmt::{Formatter, Result as FmtResult};
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::parser::{
    ParseError, PhraseBody, PhraseDefinition, PluralForm, Template, parse_file, parse_rule,
    parse_template,
};
use crate::table::error::{FormatError, LoadError, LoadWarning};
use crate::table::plural::select_form;
use crate::table::render::render;
use crate::table::validate::{lint, validate};
use crate::types::Value;

/// The vocabulary of one language: calendar names, unit phrases with plural
/// forms, and the directional wrappers.
///
/// A table is immutable once built and every constructor validates it, so a
/// `LocaleTable` always defines every required key.
///
/// # Example
///
/// ```
/// use datelingo::{LocaleTable, bindings};
///
/// let table = LocaleTable::builtin("en").unwrap();
/// assert_eq!(table.language(), "en");
/// assert_eq!(table.trans_choice("day", 5, &bindings! {}).unwrap(), "5 days");
/// assert_eq!(table.trans_choice("day", 1, &bindings! {}).unwrap(), "1 day");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    language: String,
    entries: BTreeMap<String, PhraseDefinition>,
}

/// One entry of a JSON table: a string or a list of plural forms.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonEntry {
    Simple(String),
    Plural(Vec<JsonForm>),
}

#[derive(Deserialize)]
struct JsonForm {
    rule: String,
    template: String,
}

/// The top-level JSON object in document order. Repeated keys are kept so
/// they can be reported instead of overwriting each other.
struct JsonTable(Vec<(String, JsonEntry)>);

impl<'de> Deserialize<'de> for JsonTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(JsonTableVisitor)
    }
}

struct JsonTableVisitor;

impl<'de> Visitor<'de> for JsonTableVisitor {
    type Value = JsonTable;

    fn expecting(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str("an object mapping keys to templates or plural forms")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<JsonTable, A::Error> {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some(entry) = map.next_entry()? {
            entries.push(entry);
        }
        Ok(JsonTable(entries))
    }
}

impl LocaleTable {
    /// Parse and validate a table written in the `.dtl` format.
    ///
    /// Parse errors are reported against the pseudo path `<language>`.
    pub fn parse(language: &str, content: &str) -> Result<Self, LoadError> {
        Self::parse_with_path(language, content, None)
    }

    /// Read a table from disk.
    ///
    /// Files with a `.json` extension are decoded as JSON tables, everything
    /// else as `.dtl`.
    pub fn from_file(language: &str, path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(language, &content)
        } else {
            Self::parse_with_path(language, &content, Some(path))
        }
    }

    /// Decode and validate a JSON table.
    ///
    /// Each key maps either to a template string or to a list of
    /// `{"rule": ..., "template": ...}` forms, where `rule` uses the same
    /// syntax as a `.dtl` rule key (`1`, `[2, 4]`, `few`, `other`). A key
    /// that appears twice is a [`LoadError::DuplicateKey`].
    ///
    /// ```
    /// use datelingo::{LoadError, LocaleTable};
    ///
    /// let err = LocaleTable::from_json("xx", r#"{ "january": "Jan" }"#).unwrap_err();
    /// assert!(matches!(err, LoadError::MissingKey { .. }));
    /// ```
    pub fn from_json(language: &str, content: &str) -> Result<Self, LoadError> {
        let JsonTable(raw) =
            serde_json::from_str::<JsonTable>(content).map_err(|e| LoadError::Json {
                language: language.to_string(),
                source: e,
            })?;

        let mut definitions = Vec::with_capacity(raw.len());
        for (name, entry) in raw {
            let body = match entry {
                JsonEntry::Simple(source) => PhraseBody::Simple(parse_template(&source)),
                JsonEntry::Plural(forms) => {
                    let mut parsed = Vec::with_capacity(forms.len());
                    for form in forms {
                        let condition = parse_rule(&form.rule).map_err(|e| LoadError::InvalidEntry {
                            language: language.to_string(),
                            key: name.clone(),
                            reason: e.to_string(),
                        })?;
                        parsed.push(PluralForm {
                            conditions: vec![condition],
                            template: parse_template(&form.template),
                        });
                    }
                    PhraseBody::Plural(parsed)
                }
            };
            definitions.push(PhraseDefinition { name, body });
        }
        Self::from_definitions(language, definitions)
    }

    /// Build a table from already parsed entries, rejecting duplicate keys.
    pub fn from_definitions(
        language: &str,
        definitions: Vec<PhraseDefinition>,
    ) -> Result<Self, LoadError> {
        let mut entries = BTreeMap::new();
        for definition in definitions {
            if entries.contains_key(&definition.name) {
                return Err(LoadError::DuplicateKey {
                    language: language.to_string(),
                    key: definition.name,
                });
            }
            entries.insert(definition.name.clone(), definition);
        }
        validate(language, &entries)?;
        Ok(Self {
            language: language.to_string(),
            entries,
        })
    }

    fn parse_with_path(
        language: &str,
        content: &str,
        path: Option<&Path>,
    ) -> Result<Self, LoadError> {
        let definitions = parse_file(content).map_err(|e| {
            let default_path = PathBuf::from(format!("<{language}>"));
            let path = path.map(Path::to_path_buf).unwrap_or(default_path);
            match e {
                ParseError::Syntax {
                    line,
                    column,
                    message,
                } => LoadError::Parse {
                    path,
                    line,
                    column,
                    message,
                },
                ParseError::InvalidRule { rule } => LoadError::Parse {
                    path,
                    line: 0,
                    column: 0,
                    message: format!("invalid plural rule '{rule}'"),
                },
            }
        })?;
        Self::from_definitions(language, definitions)
    }

    /// The language code this table was loaded for.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Look up an entry.
    pub fn get(&self, key: &str) -> Option<&PhraseDefinition> {
        self.entries.get(key)
    }

    /// Look up an entry, failing if it is absent.
    pub fn entry(&self, key: &str) -> Result<&PhraseDefinition, FormatError> {
        self.get(key).ok_or_else(|| FormatError::MissingEntry {
            language: self.language.clone(),
            key: key.to_string(),
        })
    }

    /// Returns true if the table defines `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// All keys, sorted.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The source text of a single-template entry.
    pub fn source_of(&self, key: &str) -> Option<String> {
        match &self.get(key)?.body {
            PhraseBody::Simple(template) => Some(template.to_string()),
            PhraseBody::Plural(_) => None,
        }
    }

    /// Select the template of `key` that applies to `count`.
    pub fn select(&self, key: &str, count: u64) -> Result<&Template, FormatError> {
        select_form(self.entry(key)?, count, &self.language)
    }

    /// Select the form of `key` for `count` and render it.
    ///
    /// `:count` is bound to `count` unless `bindings` already binds it.
    pub fn trans_choice(
        &self,
        key: &str,
        count: u64,
        bindings: &HashMap<String, Value>,
    ) -> Result<String, FormatError> {
        let template = self.select(key, count)?;
        if bindings.contains_key("count") {
            return Ok(render(template, bindings));
        }
        let mut bindings = bindings.clone();
        bindings.insert("count".to_string(), Value::from(count));
        Ok(render(template, &bindings))
    }

    /// Keys that no formatter reads, with likely intended names.
    pub fn lint(&self) -> Vec<LoadWarning> {
        lint(&self.language, &self.entries)
    }

    /// Compare this table against a source table it was translated from.
    ///
    /// Reports keys missing from the source and entries whose placeholder sets
    /// differ from the source entry.
    ///
    /// ```
    /// use datelingo::LocaleTable;
    ///
    /// let en = LocaleTable::builtin("en").unwrap();
    /// let de = LocaleTable::builtin("de").unwrap();
    /// // German defines dative forms for "ago" that English has no use for.
    /// assert!(!de.compare_with(&en).is_empty());
    /// assert!(en.compare_with(&en).is_empty());
    /// ```
    pub fn compare_with(&self, source: &LocaleTable) -> Vec<LoadWarning> {
        let mut warnings = Vec::new();
        for (key, entry) in &self.entries {
            let Some(source_entry) = source.get(key) else {
                warnings.push(LoadWarning::NotInSource {
                    language: self.language.clone(),
                    key: key.clone(),
                });
                continue;
            };
            let source_placeholders = placeholder_set(source_entry);
            let translation_placeholders = placeholder_set(entry);
            if source_placeholders != translation_placeholders {
                warnings.push(LoadWarning::PlaceholderMismatch {
                    language: self.language.clone(),
                    key: key.clone(),
                    source_placeholders,
                    translation_placeholders,
                });
            }
        }
        warnings
    }
}

/// Sorted, deduplicated placeholder names across every form of an entry.
fn placeholder_set(entry: &PhraseDefinition) -> Vec<String> {
    let mut names: Vec<String> = entry
        .templates()
        .iter()
        .flat_map(|template| template.placeholders())
        .map(ToString::to_string)
        .collect();
    names.sort();
    names.dedup();
    names
}
