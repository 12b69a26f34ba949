//! Style record to configuration text
//!
//! Output is one YAML document framed by `---` and `...`. With a baseline,
//! only fields whose values differ from it are written, and `BasedOnStyle`
//! names the profile the baseline equals, so that parsing the output with
//! the baseline as ambient reproduces the record.

use crate::profile;
use crate::record::StyleRecord;
use crate::schema::value::{FieldDef, FieldKind, Value};
use serde_yaml::{Mapping, Value as Yaml};
use std::collections::HashSet;
use tracing::warn;

/// Render `record`, diffed against `baseline` when one is given
#[must_use]
pub fn serialize(record: &StyleRecord, baseline: Option<&StyleRecord>) -> String {
    let schema = record.schema();
    let rules = schema.rules();
    let mut mapping = Mapping::new();

    if rules.language_field && record.language() != crate::schema::Language::None {
        mapping.insert(key("Language"), Yaml::String(record.language().as_str().to_owned()));
    }
    if record.inherits_parent() && rules.inherit_sentinel {
        mapping.insert(key("BasedOnStyle"), Yaml::String("InheritParentConfig".to_owned()));
    } else if let Some(name) = baseline.and_then(|b| profile::identify(b, record.language())) {
        mapping.insert(key("BasedOnStyle"), Yaml::String(name.to_owned()));
    }

    let implied = implied_targets(record);
    for (field, value) in record.iter() {
        if implied.contains(field.name) {
            continue;
        }
        let node = match baseline.and_then(|b| b.get(field.name)) {
            Some(base) if base == value => continue,
            Some(base) => diff(field.kind, value, base),
            None => to_yaml(field.kind, value),
        };
        mapping.insert(key(field.name), node);
    }

    frame(mapping)
}

/// Wrap the rendered mapping in document markers
fn frame(mapping: Mapping) -> String {
    let body = if mapping.is_empty() {
        String::new()
    } else {
        match serde_yaml::to_string(&Yaml::Mapping(mapping)) {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to render configuration: {}", e);
                String::new()
            }
        }
    };
    format!("---\n{body}...\n")
}

/// Preset targets whose content follows from a non-`Custom` selector
fn implied_targets(record: &StyleRecord) -> HashSet<&'static str> {
    record
        .schema()
        .presets()
        .iter()
        .filter(|preset| {
            record
                .get(preset.selector)
                .and_then(Value::as_enum)
                .is_some_and(|selected| selected != preset.custom)
        })
        .map(|preset| preset.target)
        .collect()
}

fn key(name: &str) -> Yaml {
    Yaml::String(name.to_owned())
}

/// Nested records emit only their changed sub-fields
fn diff(kind: FieldKind, value: &Value, base: &Value) -> Yaml {
    match (kind, value, base) {
        (FieldKind::Record(fields), Value::Record(mine), Value::Record(theirs)) => {
            diff_record(fields, mine, theirs)
        }
        (FieldKind::Shorthand(def), Value::Record(mine), Value::Record(theirs)) => {
            diff_record(def.fields, mine, theirs)
        }
        _ => to_yaml(kind, value),
    }
}

fn diff_record(fields: &[FieldDef], mine: &[Value], theirs: &[Value]) -> Yaml {
    let mut mapping = Mapping::new();
    for ((field, value), base) in fields.iter().zip(mine).zip(theirs) {
        if value != base {
            mapping.insert(key(field.name), diff(field.kind, value, base));
        }
    }
    Yaml::Mapping(mapping)
}

fn to_yaml(kind: FieldKind, value: &Value) -> Yaml {
    match value {
        Value::Bool(b) => Yaml::Bool(*b),
        Value::Int(i) => Yaml::Number((*i).into()),
        Value::Str(s) => Yaml::String(s.clone()),
        Value::List(items) => Yaml::Sequence(items.iter().cloned().map(Yaml::String).collect()),
        Value::Enum(variant) => {
            let spelling = match kind {
                FieldKind::Enum(def) => def.canonical(variant).unwrap_or(*variant),
                _ => *variant,
            };
            Yaml::String(spelling.to_owned())
        }
        Value::Record(values) => kind
            .sub_fields()
            .map_or(Yaml::Null, |fields| record_to_yaml(fields, values)),
        Value::Records(records) => kind.sub_fields().map_or(Yaml::Null, |fields| {
            Yaml::Sequence(records.iter().map(|values| record_to_yaml(fields, values)).collect())
        }),
    }
}

fn record_to_yaml(fields: &[FieldDef], values: &[Value]) -> Yaml {
    let mut mapping = Mapping::new();
    for (field, value) in fields.iter().zip(values) {
        mapping.insert(key(field.name), to_yaml(field.kind, value));
    }
    Yaml::Mapping(mapping)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::profile::resolve;
    use crate::schema::{Language, Version};

    #[test]
    fn unchanged_record_names_only_its_profile() {
        let record = resolve(Version::V16, "google", Language::Cpp).unwrap();
        let text = serialize(&record, Some(&record));
        assert_eq!(text, "---\nLanguage: Cpp\nBasedOnStyle: google\n...\n");
    }

    #[test]
    fn frame_wraps_the_rendered_mapping() {
        assert_eq!(frame(Mapping::new()), "---\n...\n");
        let mut mapping = Mapping::new();
        mapping.insert(key("IndentWidth"), Yaml::Number(4.into()));
        assert_eq!(frame(mapping), "---\nIndentWidth: 4\n...\n");
    }

    #[test]
    fn changed_fields_are_listed() {
        let baseline = resolve(Version::V16, "llvm", Language::Cpp).unwrap();
        let mut record = baseline.clone();
        record.set("ColumnLimit", Value::Int(100)).unwrap();
        let text = serialize(&record, Some(&baseline));
        assert_eq!(
            text,
            "---\nLanguage: Cpp\nBasedOnStyle: llvm\nColumnLimit: 100\n...\n"
        );
    }

    #[test]
    fn nested_diff_lists_only_changed_sub_fields() {
        let baseline = resolve(Version::V16, "llvm", Language::Cpp).unwrap();
        let mut record = baseline.clone();
        record.set("BreakBeforeBraces", Value::Enum("Custom")).unwrap();
        record
            .assign(&[(
                "BraceWrapping",
                crate::schema::value::Lit::Record(&[(
                    "AfterEnum",
                    crate::schema::value::Lit::Bool(true),
                )]),
            )])
            .unwrap();
        let text = serialize(&record, Some(&baseline));
        assert!(text.contains("BreakBeforeBraces: Custom\n"));
        assert!(text.contains("BraceWrapping:\n  AfterEnum: true\n"));
        assert!(!text.contains("AfterClass"));
    }

    #[test]
    fn named_brace_style_hides_wrapping_flags() {
        let mut record = resolve(Version::V16, "llvm", Language::Cpp).unwrap();
        record.set("BreakBeforeBraces", Value::Enum("Allman")).unwrap();
        let text = serialize(&record, None);
        assert!(text.contains("BreakBeforeBraces: Allman\n"));
        assert!(!text.contains("BraceWrapping"));
    }

    #[test]
    fn full_output_uses_canonical_spellings() {
        let record = resolve(Version::V12, "llvm", Language::Cpp).unwrap();
        let text = serialize(&record, None);
        assert!(text.starts_with("---\nLanguage: Cpp\nAccessModifierOffset: -2\n"));
        assert!(text.contains("\nStandard: Latest\n"));
        assert!(text.ends_with("...\n"));
        assert!(!text.contains("BasedOnStyle: llvm"));
    }

    #[test]
    fn unbounded_maximum_is_written_as_minus_one() {
        let record = resolve(Version::V16, "llvm", Language::Cpp).unwrap();
        let text = serialize(&record, None);
        assert!(text.contains("SpacesInLineCommentPrefix:\n  Minimum: 1\n  Maximum: -1\n"));
    }
}
