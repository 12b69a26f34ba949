//! Cross-version migration of configuration text
//!
//! A migration parses the text under its source version, then walks one
//! adjacent version at a time towards the target. Each step starts from the
//! target version's profile and carries every field both versions know, so
//! the effective style survives even where a profile default moved. Values
//! with no representation in the next version keep the target default and
//! are reported when the author had changed them.

pub mod rules;

use crate::error::StyleError;
use crate::parser;
use crate::preset;
use crate::profile;
use crate::record::StyleRecord;
use crate::schema::value::{FieldDef, FieldKind, Lit, Value, field_index, zero, zero_record};
use crate::schema::{Language, Version};
use crate::serializer;
use rules::Rule;
use std::collections::HashSet;
use std::fmt;
use tracing::{debug, info};

/// Style the driver falls back to when the text names none
pub const DEFAULT_FALLBACK_STYLE: &str = "llvm";

/// Inputs of one migration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrateOptions {
    pub source: Version,
    pub target: Version,
    pub language: Language,
    /// Profile used when the text has no `BasedOnStyle`, or when the named
    /// one does not exist in a later step
    pub fallback_style: String,
    /// Write only fields that differ from the target profile
    pub skip_same: bool,
}

impl MigrateOptions {
    #[must_use]
    pub fn new(source: Version, target: Version, language: Language) -> Self {
        Self {
            source,
            target,
            language,
            fallback_style: DEFAULT_FALLBACK_STYLE.to_owned(),
            skip_same: true,
        }
    }

    #[must_use]
    pub fn with_fallback_style<S: Into<String>>(mut self, style: S) -> Self {
        self.fallback_style = style.into();
        self
    }

    #[must_use]
    pub const fn with_skip_same(mut self, skip_same: bool) -> Self {
        self.skip_same = skip_same;
        self
    }
}

/// A value that could not be carried into the target version
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationWarning {
    /// The field does not exist in the next version
    FieldLoss { field: String },
    /// The field exists but cannot hold this value
    ValueLoss { field: String, value: String },
}

impl fmt::Display for MigrationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldLoss { field } => write!(f, "Option {field} was dropped"),
            Self::ValueLoss { field, value } => {
                write!(f, "Value {value} of option {field} could not be represented")
            }
        }
    }
}

/// Result of a successful migration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Migration {
    /// Configuration text under the target version
    pub text: String,
    /// The migrated record
    pub record: StyleRecord,
    /// Style the output is based on
    pub style: String,
    pub warnings: Vec<MigrationWarning>,
}

/// Migrate configuration text between versions
///
/// # Errors
///
/// Returns any error from parsing under the source version, an
/// `UnsupportedLanguage` error when either end lacks the language, and
/// `IncompatibleStyle` when neither the style nor the fallback exists in
/// some step.
pub fn migrate(text: &str, options: &MigrateOptions) -> Result<Migration, StyleError> {
    let language = options.language;
    for version in [options.source, options.target] {
        if !version.schema().supports(language) {
            return Err(StyleError::UnsupportedLanguage {
                language: language.to_string(),
                version: version.to_string(),
            });
        }
    }

    let fallback = options.fallback_style.to_lowercase();
    let ambient = profile::resolve(options.source, &fallback, language)?;
    let parsed = parser::parse(options.source, text, language, &ambient)?;
    let inherits = parsed.record.inherits_parent();
    let mut style = match parsed.based_on {
        Some(name) if !inherits => name.to_lowercase(),
        _ => fallback.clone(),
    };

    let mut record = preset::collapse(&preset::expand(&parsed.record)?)?;
    let mut before = preset::expand(&profile::resolve(options.source, &style, language)?)?;
    let mut warnings = Vec::new();
    let mut version = options.source;

    while let Some(next) = version.step_towards(options.target) {
        let names = profile::style_names(next);
        if !names.contains(&style.as_str()) {
            if names.contains(&fallback.as_str()) {
                info!("Style {} does not exist in {}, using {}", style, next, fallback);
                style.clone_from(&fallback);
            } else {
                return Err(StyleError::IncompatibleStyle {
                    style,
                    version: next.to_string(),
                    available: names.join(", "),
                });
            }
        }
        debug!("Migrating {} -> {} as {}", version, next, style);
        let after = preset::expand(&profile::resolve(next, &style, language)?)?;
        record = step(&record, &before, &after, &mut warnings)?;
        before = after;
        version = next;
    }

    if inherits {
        if options.target.schema().rules().inherit_sentinel {
            record.set_inherits_parent(true);
        } else {
            warnings.push(MigrationWarning::ValueLoss {
                field: "BasedOnStyle".to_owned(),
                value: "InheritParentConfig".to_owned(),
            });
        }
    }

    let baseline = if options.skip_same {
        Some(profile::resolve(options.target, &style, language)?)
    } else {
        None
    };
    let text = serializer::serialize(&record, baseline.as_ref());
    Ok(Migration {
        text,
        record,
        style,
        warnings,
    })
}

/// Versions under which `text` parses cleanly for `language`
#[must_use]
pub fn compatible_versions(text: &str, language: Language) -> Vec<Version> {
    Version::ALL
        .into_iter()
        .filter(|version| {
            let outcome = profile::resolve(*version, DEFAULT_FALLBACK_STYLE, language)
                .and_then(|ambient| parser::parse(*version, text, language, &ambient));
            match outcome {
                Ok(_) => true,
                Err(e) => {
                    debug!("Not compatible with {}: {}", version, e);
                    false
                }
            }
        })
        .collect()
}

/// Carry `record` one version towards `after`'s version
///
/// `before` and `after` are the same profile under both versions.
fn step(
    record: &StyleRecord,
    before: &StyleRecord,
    after: &StyleRecord,
    warnings: &mut Vec<MigrationWarning>,
) -> Result<StyleRecord, StyleError> {
    let upgrade = after.version() > record.version();
    let source = record.schema();
    let target = after.schema();
    let mut out = after.clone();
    out.set_language(record.language());

    let changed = |name: &str| record.get(name) != before.get(name);
    let mut consumed: HashSet<&str> = HashSet::new();
    let mut produced: HashSet<&str> = HashSet::new();

    for rule in rules::between(record.version(), after.version()) {
        match rule {
            Rule::Rename { old, new, map } => {
                let (from, to) = if upgrade { (*old, *new) } else { (*new, *old) };
                consumed.insert(from);
                produced.insert(to);
                let (Some(value), Some(from_field), Some(to_field)) =
                    (record.get(from), source.field(from), target.field(to))
                else {
                    continue;
                };
                let current = out.get(to).cloned().unwrap_or_else(|| zero(to_field.kind));
                let converted = translate(map, value, upgrade, to_field, &current)
                    .or_else(|| convert(from_field.kind, value, to_field.kind, &current));
                match converted {
                    Some(value) => out.set(to, value)?,
                    None if changed(from) => warnings.push(value_loss(from, value)),
                    None => debug!("Default {} of {} has no counterpart", value, from),
                }
            }
            Rule::Merge { old, new, rows } if upgrade => {
                consumed.extend(old.iter().copied());
                produced.insert(*new);
                let values: Vec<Option<&Value>> = old.iter().map(|name| record.get(name)).collect();
                let row = rows.iter().find(|(pattern, _)| {
                    pattern.iter().zip(&values).all(|(lit, value)| match lit {
                        Some(lit) => value.is_some_and(|v| lit.matches(v)),
                        None => true,
                    })
                });
                match (row, target.field(new)) {
                    (Some((_, lit)), Some(field)) => {
                        let current = out.get(new).cloned().unwrap_or_else(|| zero(field.kind));
                        out.set(new, lit.to_value(field, &current)?)?;
                    }
                    _ if !old.iter().any(|&name| changed(name)) => {
                        debug!("Defaults of {} have no counterpart", old.join(", "));
                    }
                    _ => {
                        let shown: Vec<String> = values
                            .iter()
                            .map(|v| v.map_or_else(String::new, ToString::to_string))
                            .collect();
                        warnings.push(MigrationWarning::ValueLoss {
                            field: old.join(", "),
                            value: shown.join(", "),
                        });
                    }
                }
            }
            Rule::Merge { old, new, rows } => {
                consumed.insert(*new);
                produced.extend(old.iter().copied());
                let Some(value) = record.get(new) else {
                    continue;
                };
                let Some((pattern, _)) = rows.iter().find(|(_, lit)| lit.matches(value)) else {
                    if changed(new) {
                        warnings.push(value_loss(new, value));
                    }
                    continue;
                };
                for (name, lit) in old.iter().zip(pattern.iter()) {
                    let (Some(lit), Some(field)) = (lit, target.field(name)) else {
                        continue;
                    };
                    let current = out.get(name).cloned().unwrap_or_else(|| zero(field.kind));
                    out.set(name, lit.to_value(field, &current)?)?;
                }
            }
        }
    }

    for field in target.fields() {
        if produced.contains(field.name) || consumed.contains(field.name) {
            continue;
        }
        let (Some(from_field), Some(value)) = (source.field(field.name), record.get(field.name)) else {
            continue;
        };
        let current = out.get(field.name).cloned().unwrap_or_else(|| zero(field.kind));
        match convert(from_field.kind, value, field.kind, &current) {
            Some(value) => out.set(field.name, value)?,
            None if changed(field.name) => warnings.push(value_loss(field.name, value)),
            None => debug!("Default {} of {} has no counterpart", value, field.name),
        }
    }

    for (field, value) in record.iter() {
        if consumed.contains(field.name) || target.field(field.name).is_some() {
            continue;
        }
        if before.get(field.name) != Some(value) {
            warnings.push(MigrationWarning::FieldLoss {
                field: field.name.to_owned(),
            });
        }
    }
    Ok(out)
}

fn value_loss(field: &str, value: &Value) -> MigrationWarning {
    MigrationWarning::ValueLoss {
        field: field.to_owned(),
        value: value.to_string(),
    }
}

/// Look `value` up in a rename table
fn translate(
    map: &[(Lit, Lit)],
    value: &Value,
    upgrade: bool,
    field: &FieldDef,
    current: &Value,
) -> Option<Value> {
    let lit = if upgrade {
        map.iter().find(|(from, _)| from.matches(value)).map(|(_, to)| to)
    } else {
        map.iter().find(|(_, to)| to.matches(value)).map(|(from, _)| from)
    }?;
    lit.to_value(field, current).ok()
}

const fn flag_spelling(flag: bool) -> &'static str {
    if flag { "true" } else { "false" }
}

/// Structural conversion between two kinds of the same field
fn convert(from: FieldKind, value: &Value, to: FieldKind, current: &Value) -> Option<Value> {
    let converted = match (to, value) {
        (FieldKind::Bool, Value::Bool(b)) => Value::Bool(*b),
        (FieldKind::Bool, Value::Enum(_) | Value::Record(_)) => Value::Bool(as_flag(from, value)?),
        (FieldKind::Int | FieldKind::Unsigned | FieldKind::Bound, Value::Int(i)) => Value::Int(*i),
        (FieldKind::Str, Value::Str(s)) => Value::Str(s.clone()),
        (FieldKind::StrList, Value::List(items)) => Value::List(items.clone()),
        (FieldKind::Enum(def), Value::Bool(b)) => Value::Enum(def.variant(flag_spelling(*b))?),
        (FieldKind::Enum(def), _) => {
            Value::Enum(spellings(from, value).into_iter().find_map(|s| def.variant(s))?)
        }
        (FieldKind::Shorthand(def), Value::Bool(_) | Value::Enum(_)) => {
            let base = current
                .as_record()
                .map_or_else(|| zero_record(def.fields), <[Value]>::to_vec);
            let spelled = spellings(from, value)
                .into_iter()
                .find_map(|s| def.spelled(s, &base))?;
            Value::Record(spelled)
        }
        (FieldKind::Record(_) | FieldKind::Shorthand(_), Value::Record(values)) => {
            Value::Record(convert_record(from.sub_fields()?, values, to.sub_fields()?, current)?)
        }
        (FieldKind::RecordList(fields), Value::Records(records)) => {
            let from_fields = from.sub_fields()?;
            let fresh = Value::Record(zero_record(fields));
            let mut out = Vec::with_capacity(records.len());
            for values in records {
                out.push(convert_record(from_fields, values, fields, &fresh)?);
            }
            Value::Records(out)
        }
        _ => return None,
    };
    to.admits(&converted).then_some(converted)
}

/// Every input spelling that denotes `value` under `kind`
///
/// An enum variant is listed before its aliases, so a variant that exists
/// under the same name on the other side is preferred.
fn spellings(kind: FieldKind, value: &Value) -> Vec<&'static str> {
    match (kind, value) {
        (_, Value::Bool(b)) => vec![flag_spelling(*b)],
        (FieldKind::Enum(def), Value::Enum(variant)) => {
            let mut out: Vec<&'static str> = def
                .variants()
                .into_iter()
                .filter(|v| v == variant)
                .collect();
            out.extend(def.spellings_of(variant));
            out
        }
        (FieldKind::Shorthand(def), Value::Record(values)) => def.spellings_matching(values).collect(),
        _ => Vec::new(),
    }
}

fn as_flag(kind: FieldKind, value: &Value) -> Option<bool> {
    let spelled = spellings(kind, value);
    if spelled.contains(&"true") {
        Some(true)
    } else if spelled.contains(&"false") {
        Some(false)
    } else {
        None
    }
}

/// Copy sub-fields by name onto `current`; fails if any cannot convert
fn convert_record(
    from: &[FieldDef],
    values: &[Value],
    to: &'static [FieldDef],
    current: &Value,
) -> Option<Vec<Value>> {
    let mut out = current
        .as_record()
        .filter(|existing| existing.len() == to.len())
        .map_or_else(|| zero_record(to), <[Value]>::to_vec);
    for (index, field) in to.iter().enumerate() {
        let Some(source_index) = field_index(from, field.name) else {
            continue;
        };
        let (Some(source_field), Some(value), Some(slot)) =
            (from.get(source_index), values.get(source_index), out.get_mut(index))
        else {
            continue;
        };
        *slot = convert(source_field.kind, value, field.kind, slot)?;
    }
    Some(out)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    fn options(source: Version, target: Version) -> MigrateOptions {
        MigrateOptions::new(source, target, Language::Cpp)
    }

    #[test]
    fn same_version_round_trips() {
        let migration = migrate("BasedOnStyle: Google\nColumnLimit: 100\n", &options(Version::V16, Version::V16)).unwrap();
        assert_eq!(
            migration.text,
            "---\nLanguage: Cpp\nBasedOnStyle: google\nColumnLimit: 100\n...\n"
        );
        assert!(migration.warnings.is_empty());
    }

    #[test]
    fn legacy_pointer_binding_upgrades_to_alignment() {
        let migration = migrate("PointerBindsToType: true\n", &options(Version::V3_4, Version::V16)).unwrap();
        assert_eq!(migration.record.get("PointerAlignment"), Some(&Value::Enum("Left")));
        assert!(migration.text.contains("PointerAlignment: Left\n"));
        assert!(migration.warnings.is_empty());
    }

    #[test]
    fn profile_defaults_survive_a_moved_default() {
        let migration = migrate(
            "BasedOnStyle: llvm\nIndentWidth: 3\n",
            &options(Version::V3_4, Version::V3_6),
        )
        .unwrap();
        assert_eq!(migration.record.get("Standard"), Some(&Value::Enum("Cpp03")));
        assert_eq!(migration.record.get("Cpp11BracedListStyle"), Some(&Value::Bool(false)));
        assert_eq!(migration.record.get("PenaltyBreakComment"), Some(&Value::Int(60)));
        assert!(migration.text.contains("Standard: Cpp03\n"));
        assert!(migration.text.contains("IndentWidth: 3\n"));
        assert!(migration.warnings.is_empty());
    }

    #[test]
    fn dropped_field_is_reported_once() {
        let migration = migrate("InsertBraces: true\n", &options(Version::V16, Version::V12)).unwrap();
        assert_eq!(
            migration.warnings,
            vec![MigrationWarning::FieldLoss {
                field: "InsertBraces".to_owned()
            }]
        );
    }

    #[test]
    fn unrepresentable_value_is_reported() {
        let migration = migrate(
            "PackConstructorInitializers: Never\n",
            &options(Version::V16, Version::V12),
        )
        .unwrap();
        assert_eq!(
            migration.warnings,
            vec![MigrationWarning::ValueLoss {
                field: "PackConstructorInitializers".to_owned(),
                value: "Never".to_owned(),
            }]
        );
    }

    #[test]
    fn line_ending_splits_into_two_flags() {
        let migration = migrate("LineEnding: CRLF\n", &options(Version::V16, Version::V12)).unwrap();
        assert_eq!(migration.record.get("DeriveLineEnding"), Some(&Value::Bool(false)));
        assert_eq!(migration.record.get("UseCRLF"), Some(&Value::Bool(true)));
    }

    #[test]
    fn pack_flags_fold_on_upgrade() {
        let text = "ConstructorInitializerAllOnOneLineOrOnePerLine: true\nAllowAllConstructorInitializersOnNextLine: false\n";
        let migration = migrate(text, &options(Version::V12, Version::V16)).unwrap();
        assert_eq!(
            migration.record.get("PackConstructorInitializers"),
            Some(&Value::Enum("CurrentLine"))
        );
    }

    #[test]
    fn missing_style_falls_back() {
        let migration = migrate("BasedOnStyle: Microsoft\n", &options(Version::V12, Version::V3_6)).unwrap();
        assert_eq!(migration.style, "llvm");
    }

    #[test]
    fn missing_style_without_fallback_is_incompatible() {
        let options = options(Version::V12, Version::V3_6).with_fallback_style("microsoft");
        let err = migrate("ColumnLimit: 90\n", &options).unwrap_err();
        assert!(matches!(err, StyleError::IncompatibleStyle { .. }));
    }

    #[test]
    fn shorthand_alignment_downgrades_to_enum() {
        let migration = migrate(
            "AlignConsecutiveAssignments: AcrossComments\n",
            &options(Version::V16, Version::V12),
        )
        .unwrap();
        assert_eq!(
            migration.record.get("AlignConsecutiveAssignments"),
            Some(&Value::Enum("AcrossComments"))
        );
        assert!(migration.warnings.is_empty());
    }

    #[test]
    fn compatible_versions_reflect_the_schema() {
        assert_eq!(
            compatible_versions("InsertBraces: true\n", Language::Cpp),
            vec![Version::V3_4, Version::V3_6, Version::V16]
        );
        assert_eq!(
            compatible_versions("IndentWidth: 4\n", Language::Cpp),
            Version::ALL.to_vec()
        );
    }
}
