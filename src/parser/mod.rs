//! Configuration text to style record
//!
//! A configuration is a stream of YAML documents. The first may omit
//! `Language` and then serves as the default for every language; each
//! later document must name the language it configures. The document
//! matching the requested language wins, falling back to the default.

mod reader;

use crate::error::StyleError;
use crate::profile;
use crate::record::StyleRecord;
use crate::schema::table::Legacy;
use crate::schema::value::{FieldDef, Value, zero};
use crate::schema::{EmptyInput, Language, Schema, Version};
use reader::{Reader, describe, scalar_text};
use serde::Deserialize;
use serde_yaml::{Mapping, Value as Yaml};
use std::collections::HashSet;
use tracing::{debug, warn};

const LANGUAGE_KEY: &str = "Language";
const BASED_ON_KEY: &str = "BasedOnStyle";
const INHERIT_PARENT: &str = "InheritParentConfig";

/// The outcome of a successful parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedConfig {
    /// Record selected for the requested language
    pub record: StyleRecord,
    /// `BasedOnStyle` of the selected document, as written
    pub based_on: Option<String>,
}

struct Document {
    language: Language,
    record: StyleRecord,
    based_on: Option<String>,
}

/// Parse configuration text under `version` for `language`
///
/// `ambient` is the record a document starts from when it names no
/// profile; it must belong to `version`.
///
/// # Errors
///
/// Returns the first [`StyleError`] encountered: malformed YAML, unknown
/// keys (where the version is strict), invalid values, document layout
/// problems, unknown profiles, or a violated constraint on the selected
/// record.
pub fn parse(
    version: Version,
    text: &str,
    language: Language,
    ambient: &StyleRecord,
) -> Result<ParsedConfig, StyleError> {
    let schema = version.schema();
    if !schema.supports(language) {
        return Err(StyleError::UnsupportedLanguage {
            language: language.to_string(),
            version: version.to_string(),
        });
    }
    if ambient.version() != version {
        return Err(StyleError::configuration(format!(
            "ambient style belongs to version {}, not {version}",
            ambient.version()
        )));
    }
    let rules = schema.rules();
    let mut ambient = ambient.clone();
    ambient.set_language(language);

    if text.trim().is_empty() {
        return match rules.empty_input {
            EmptyInput::Ambient => Ok(ParsedConfig {
                record: ambient,
                based_on: None,
            }),
            EmptyInput::NoDocuments => Err(StyleError::UnsuitableLanguage {
                language: language.to_string(),
            }),
            EmptyInput::Malformed => Err(StyleError::malformed("configuration is empty")),
        };
    }

    let mappings = split_documents(text)?;
    if !rules.language_field && mappings.len() > 1 {
        return Err(StyleError::malformed(format!(
            "version {version} accepts a single document, found {}",
            mappings.len()
        )));
    }
    debug!("Read {} document(s) under {}", mappings.len(), version);

    let parser = DocumentParser {
        schema,
        language,
        reader: Reader {
            strict: rules.strict_keys,
        },
    };
    let mut documents: Vec<Document> = Vec::with_capacity(mappings.len());
    for (index, mapping) in mappings.iter().enumerate() {
        let template = match documents.first() {
            Some(first) if first.language == Language::None => &first.record,
            _ => &ambient,
        };
        let document = parser.parse_document(index, mapping, template)?;
        if document.language != Language::None
            && documents.iter().any(|d| d.language == document.language)
        {
            return Err(StyleError::DuplicateLanguage {
                language: document.language.to_string(),
            });
        }
        documents.push(document);
    }

    let (mut record, based_on) = select(documents, language)?;
    record.set_language(language);

    for constraint in schema.constraints() {
        if (constraint.violated)(&record) {
            return Err(StyleError::constraint(constraint.name, constraint.message));
        }
    }
    Ok(ParsedConfig { record, based_on })
}

/// Split a YAML stream into mappings; empty documents count as empty
/// mappings
fn split_documents(text: &str) -> Result<Vec<Mapping>, StyleError> {
    let mut out = Vec::new();
    for document in serde_yaml::Deserializer::from_str(text) {
        let node = Yaml::deserialize(document).map_err(|e| StyleError::malformed(e.to_string()))?;
        match node {
            Yaml::Null => out.push(Mapping::new()),
            Yaml::Mapping(mapping) => out.push(mapping),
            other => {
                return Err(StyleError::malformed(format!(
                    "expected a mapping at document {}, found {}",
                    out.len(),
                    describe(&other)
                )));
            }
        }
    }
    Ok(out)
}

fn select(documents: Vec<Document>, language: Language) -> Result<(StyleRecord, Option<String>), StyleError> {
    let specific = documents.iter().rposition(|d| d.language == language);
    let chosen = specific.or_else(|| {
        documents
            .first()
            .filter(|d| d.language == Language::None)
            .map(|_| 0)
    });
    let Some(index) = chosen else {
        return Err(StyleError::UnsuitableLanguage {
            language: language.to_string(),
        });
    };
    debug!("Selected document {} for {}", index, language);
    documents
        .into_iter()
        .nth(index)
        .map(|d| (d.record, d.based_on))
        .ok_or_else(|| StyleError::UnsuitableLanguage {
            language: language.to_string(),
        })
}

struct DocumentParser {
    schema: &'static dyn Schema,
    language: Language,
    reader: Reader,
}

impl DocumentParser {
    fn parse_document(
        &self,
        index: usize,
        mapping: &Mapping,
        template: &StyleRecord,
    ) -> Result<Document, StyleError> {
        let rules = self.schema.rules();
        let language = if rules.language_field {
            self.read_language(mapping)?
        } else {
            Language::None
        };
        if language == Language::None && index > 0 {
            return Err(StyleError::MisplacedDefault { index });
        }

        let mut record = template.clone();
        record.set_language(language);

        let based_on = match mapping.get(BASED_ON_KEY) {
            Some(node) => {
                let name = scalar_text(node)
                    .ok_or_else(|| StyleError::invalid_value(BASED_ON_KEY, describe(node)))?;
                if rules.inherit_sentinel && name.eq_ignore_ascii_case(INHERIT_PARENT) {
                    record.set_inherits_parent(true);
                } else {
                    record = profile::resolve(self.schema.version(), &name, self.language)?;
                    record.set_language(language);
                }
                Some(name)
            }
            None => None,
        };

        for legacy in self.schema.legacy() {
            self.apply_legacy(legacy, mapping, &mut record, based_on.as_deref())?;
        }

        for field in self.schema.fields() {
            if let Some(node) = mapping.get(field.name) {
                let current = record.get(field.name).cloned().unwrap_or_else(|| zero(field.kind));
                let value = self.reader.read(field, node, &current, field.name)?;
                record.set(field.name, value)?;
            }
        }

        self.check_keys(mapping)?;
        self.schema.finish(&mut record)?;
        Ok(Document {
            language,
            record,
            based_on,
        })
    }

    fn read_language(&self, mapping: &Mapping) -> Result<Language, StyleError> {
        let Some(node) = mapping.get(LANGUAGE_KEY) else {
            return Ok(Language::None);
        };
        let invalid = || StyleError::invalid_value(LANGUAGE_KEY, describe(node));
        let spelling = scalar_text(node).ok_or_else(invalid)?;
        if spelling == Language::None.as_str() {
            return Ok(Language::None);
        }
        Language::from_config(&spelling)
            .filter(|l| self.schema.supports(*l))
            .ok_or_else(invalid)
    }

    fn apply_legacy(
        &self,
        legacy: &Legacy,
        mapping: &Mapping,
        record: &mut StyleRecord,
        based_on: Option<&str>,
    ) -> Result<(), StyleError> {
        match legacy {
            Legacy::Alias { name, target } => {
                let (Some(node), Some(field)) = (mapping.get(*name), self.schema.field(target)) else {
                    return Ok(());
                };
                let current = record.get(target).cloned().unwrap_or_else(|| zero(field.kind));
                let value = self.reader.read(field, node, &current, name)?;
                record.set(target, value)
            }
            Legacy::Mapped {
                name,
                kind,
                target,
                map,
                only_if,
            } => {
                let (Some(node), Some(field)) = (mapping.get(*name), self.schema.field(target)) else {
                    return Ok(());
                };
                let own = FieldDef::new(*name, *kind);
                let value = self.reader.read(&own, node, &zero(*kind), name)?;
                let Some((_, to)) = map.iter().find(|(from, _)| from.matches(&value)) else {
                    return Ok(());
                };
                let current = record.get(target).cloned().unwrap_or_else(|| zero(field.kind));
                if only_if.is_some_and(|lit| !lit.matches(&current)) {
                    return Ok(());
                }
                let mapped = to.to_value(field, &current)?;
                record.set(target, mapped)
            }
            Legacy::Group { names, apply } => {
                let mut values: Vec<Option<Value>> = Vec::with_capacity(names.len());
                for (name, kind) in *names {
                    let value = match mapping.get(*name) {
                        Some(node) => {
                            let own = FieldDef::new(*name, *kind);
                            Some(self.reader.read(&own, node, &zero(*kind), name)?)
                        }
                        None => None,
                    };
                    values.push(value);
                }
                if values.iter().any(Option::is_some) {
                    apply(&values, record, based_on)?;
                }
                Ok(())
            }
        }
    }

    fn check_keys(&self, mapping: &Mapping) -> Result<(), StyleError> {
        let rules = self.schema.rules();
        let mut known: HashSet<&str> = self.schema.fields().iter().map(|f| f.name).collect();
        known.insert(BASED_ON_KEY);
        if rules.language_field {
            known.insert(LANGUAGE_KEY);
        }
        for legacy in self.schema.legacy() {
            known.extend(legacy.names());
        }

        for key in mapping.keys() {
            let key = key
                .as_str()
                .ok_or_else(|| StyleError::malformed(format!("non-string key {}", describe(key))))?;
            if known.contains(key) {
                continue;
            }
            if rules.strict_keys {
                return Err(StyleError::unknown_option(key));
            }
            warn!("Ignoring unknown option {}", key);
        }
        Ok(())
    }
}
