//! Named style profiles
//!
//! A profile is resolved by starting from its base (the version baseline or
//! another profile), then applying each layer whose language filter admits
//! the requested language. Aliased languages resolve as another language and
//! are retagged afterwards.

use crate::error::StyleError;
use crate::record::StyleRecord;
use crate::schema::table::{Base, Profile};
use crate::schema::{Language, Schema, Version};
use tracing::debug;

/// Build the complete record a named profile stands for
///
/// Names match case-insensitively. The result always carries `language`.
///
/// # Errors
///
/// Returns `UnknownProfile` when the version has no profile of that name
/// and `UnsupportedLanguage` when the version does not know the language.
pub fn resolve(version: Version, name: &str, language: Language) -> Result<StyleRecord, StyleError> {
    let schema = version.schema();
    if !schema.supports(language) {
        return Err(StyleError::UnsupportedLanguage {
            language: language.to_string(),
            version: version.to_string(),
        });
    }
    let profile = find(schema, name).ok_or_else(|| StyleError::UnknownProfile {
        name: name.to_owned(),
        version: version.to_string(),
    })?;
    debug!("Resolving profile {} for {} under {}", profile.name, language, version);
    build(schema, profile, language)
}

fn find(schema: &dyn Schema, name: &str) -> Option<&'static Profile> {
    schema
        .profiles()
        .iter()
        .find(|profile| profile.name.eq_ignore_ascii_case(name))
}

fn build(
    schema: &'static dyn Schema,
    profile: &Profile,
    language: Language,
) -> Result<StyleRecord, StyleError> {
    if let Some(&(_, computed)) = profile.aliases.iter().find(|(requested, _)| *requested == language) {
        let mut record = build(schema, profile, computed)?;
        record.set_language(language);
        return Ok(record);
    }

    let mut record = match profile.base {
        Base::Baseline => {
            let mut record = StyleRecord::zeroed(schema.version(), language);
            record.assign(schema.baseline())?;
            record
        }
        Base::Style(name) => based_on(schema, name, language)?,
        Base::StyleFor(name, fixed) => {
            let mut record = based_on(schema, name, fixed)?;
            record.set_language(language);
            record
        }
    };

    for layer in profile.layers {
        if layer.when.applies(language) {
            record.assign(layer.set)?;
        }
    }
    Ok(record)
}

fn based_on(
    schema: &'static dyn Schema,
    name: &str,
    language: Language,
) -> Result<StyleRecord, StyleError> {
    let profile = find(schema, name).ok_or_else(|| StyleError::UnknownProfile {
        name: name.to_owned(),
        version: schema.version().to_string(),
    })?;
    build(schema, profile, language)
}

/// Profile names of one version, in detection order
#[must_use]
pub fn style_names(version: Version) -> Vec<&'static str> {
    version.schema().style_names()
}

/// Profile names present in every version between `from` and `to`
/// (inclusive), in the order `from` lists them
#[must_use]
pub fn common_style_names(from: Version, to: Version) -> Vec<&'static str> {
    let (low, high) = if from <= to { (from, to) } else { (to, from) };
    let span: Vec<Version> = Version::ALL
        .into_iter()
        .filter(|v| *v >= low && *v <= high)
        .collect();
    style_names(from)
        .into_iter()
        .filter(|name| span.iter().all(|v| style_names(*v).contains(name)))
        .collect()
}

/// First profile whose resolution for `language` equals `record`'s values
#[must_use]
pub fn identify(record: &StyleRecord, language: Language) -> Option<&'static str> {
    let version = record.version();
    style_names(version).into_iter().find(|name| {
        resolve(version, name, language).is_ok_and(|candidate| candidate.same_values(record))
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::schema::value::Value;

    #[test]
    fn every_profile_resolves_for_every_language() {
        for version in Version::ALL {
            for name in style_names(version) {
                for &language in version.schema().languages() {
                    let record = resolve(version, name, language)
                        .unwrap_or_else(|e| panic!("{version} {name} {language}: {e}"));
                    assert_eq!(record.language(), language);
                    assert_eq!(record.version(), version);
                }
            }
        }
    }

    #[test]
    fn resolution_is_deterministic() {
        let first = resolve(Version::V16, "google", Language::Java).unwrap();
        let second = resolve(Version::V16, "Google", Language::Java).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn google_text_proto_is_computed_as_proto() {
        let text_proto = resolve(Version::V16, "google", Language::TextProto).unwrap();
        let proto = resolve(Version::V16, "google", Language::Proto).unwrap();
        assert_eq!(text_proto.language(), Language::TextProto);
        assert!(text_proto.same_values(&proto));
    }

    #[test]
    fn language_layers_apply_only_to_their_language() {
        let cpp = resolve(Version::V16, "llvm", Language::Cpp).unwrap();
        let json = resolve(Version::V16, "llvm", Language::Json).unwrap();
        assert_eq!(cpp.get("ColumnLimit"), Some(&Value::Int(80)));
        assert_eq!(json.get("ColumnLimit"), Some(&Value::Int(0)));
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = resolve(Version::V12, "linux", Language::Cpp).unwrap_err();
        assert!(matches!(err, StyleError::UnknownProfile { .. }));
    }

    #[test]
    fn unsupported_language_is_reported() {
        let err = resolve(Version::V3_4, "llvm", Language::Java).unwrap_err();
        assert!(matches!(err, StyleError::UnsupportedLanguage { .. }));
        let err = resolve(Version::V12, "llvm", Language::Json).unwrap_err();
        assert!(matches!(err, StyleError::UnsupportedLanguage { .. }));
    }

    #[test]
    fn common_names_shrink_with_the_span() {
        let all = common_style_names(Version::V3_4, Version::V16);
        assert!(all.contains(&"llvm"));
        assert!(all.contains(&"google"));
        assert!(!all.contains(&"microsoft"));
        assert!(common_style_names(Version::V16, Version::V12).contains(&"microsoft"));
    }

    #[test]
    fn identify_finds_the_first_matching_profile() {
        let record = resolve(Version::V16, "llvm", Language::Cpp).unwrap();
        assert_eq!(identify(&record, Language::Cpp), Some("llvm"));
        let mut custom = record;
        custom.set("ColumnLimit", Value::Int(123)).unwrap();
        assert_eq!(identify(&custom, Language::Cpp), None);
    }
}
