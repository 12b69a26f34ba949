//! Profile resolver and preset expander tests

use stylemigrate::error::StyleError;
use stylemigrate::preset::{collapse, expand};
use stylemigrate::profile::{common_style_names, identify, resolve, style_names};
use stylemigrate::schema::value::Value;
use stylemigrate::schema::{Language, Version};

#[test]
fn test_resolution_is_deterministic() {
    for version in Version::ALL {
        for language in version.schema().languages() {
            for name in style_names(version) {
                let first = resolve(version, name, *language).unwrap();
                let second = resolve(version, &name.to_uppercase(), *language).unwrap();
                assert_eq!(first, second, "{version} {name} {language}");
                assert_eq!(first.language(), *language);
            }
        }
    }
}

#[test]
fn test_expansion_is_idempotent() {
    for version in [Version::V12, Version::V16] {
        for name in style_names(version) {
            let record = resolve(version, name, Language::Cpp).unwrap();
            let once = expand(&record).unwrap();
            assert_eq!(expand(&once).unwrap(), once, "{version} {name}");
        }
    }
}

#[test]
fn test_collapse_keeps_custom_without_a_match() {
    let mut record = expand(&resolve(Version::V16, "microsoft", Language::Cpp).unwrap()).unwrap();
    assert_eq!(record.get("BreakBeforeBraces"), Some(&Value::Enum("Custom")));
    let collapsed = collapse(&record).unwrap();
    assert_eq!(collapsed.get("BreakBeforeBraces"), Some(&Value::Enum("Custom")));

    record.set("SpaceBeforeParens", Value::Enum("Never")).unwrap();
    let never = expand(&record).unwrap();
    let mut custom = never.clone();
    custom.set("SpaceBeforeParens", Value::Enum("Custom")).unwrap();
    assert_eq!(
        collapse(&custom).unwrap().get("SpaceBeforeParens"),
        Some(&Value::Enum("Custom"))
    );
}

#[test]
fn test_identify_names_the_first_equal_profile() {
    for version in Version::ALL {
        for name in style_names(version) {
            let record = resolve(version, name, Language::Cpp).unwrap();
            assert_eq!(identify(&record, Language::Cpp), Some(name), "{version}");
        }
    }
}

#[test]
fn test_style_names_per_version() {
    assert_eq!(
        style_names(Version::V3_4),
        vec!["chromium", "google", "llvm", "mozilla", "webkit"]
    );
    assert!(style_names(Version::V12).contains(&"microsoft"));
    assert!(!style_names(Version::V3_6).contains(&"microsoft"));
    assert_eq!(
        common_style_names(Version::V16, Version::V3_6),
        vec!["chromium", "gnu", "google", "llvm", "mozilla", "none", "webkit"]
    );
}

#[test]
fn test_resolution_errors() {
    let err = resolve(Version::V16, "pretty", Language::Cpp).unwrap_err();
    assert_eq!(
        err,
        StyleError::UnknownProfile {
            name: "pretty".to_owned(),
            version: "16".to_owned()
        }
    );
    let err = resolve(Version::V3_4, "llvm", Language::Java).unwrap_err();
    assert_eq!(err.exit_code(), 9);
}
