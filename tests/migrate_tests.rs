//! Migration driver tests

use stylemigrate::error::StyleError;
use stylemigrate::migrate::{MigrateOptions, MigrationWarning, compatible_versions, migrate};
use stylemigrate::parser::parse;
use stylemigrate::preset::expand;
use stylemigrate::profile::resolve;
use stylemigrate::schema::value::Value;
use stylemigrate::schema::{Language, Version};

fn options(source: Version, target: Version) -> MigrateOptions {
    MigrateOptions::new(source, target, Language::Cpp)
}

#[test]
fn test_source_only_field_is_dropped_with_one_warning() {
    let text = "BasedOnStyle: LLVM\nInsertBraces: true\nColumnLimit: 100\n";
    let migration = migrate(text, &options(Version::V16, Version::V12)).unwrap();

    assert_eq!(
        migration.warnings,
        vec![MigrationWarning::FieldLoss {
            field: "InsertBraces".to_owned()
        }]
    );
    assert!(!migration.text.contains("InsertBraces"));
    assert!(migration.text.starts_with("---\nLanguage: Cpp\nBasedOnStyle: llvm\n"));
    assert!(migration.text.contains("ColumnLimit: 100\n"));
    assert_eq!(migration.record.get("ColumnLimit"), Some(&Value::Int(100)));
}

#[test]
fn test_unchanged_source_only_field_is_not_reported() {
    let migration = migrate("InsertBraces: false\n", &options(Version::V16, Version::V12)).unwrap();
    assert!(migration.warnings.is_empty());
}

#[test]
fn test_profile_values_survive_moved_defaults() {
    let text = "BasedOnStyle: Google\nColumnLimit: 90\n";
    let migration = migrate(text, &options(Version::V3_6, Version::V12)).unwrap();
    assert!(migration.warnings.is_empty(), "{:?}", migration.warnings);
    assert_eq!(
        migration.record.get("ObjCSpaceBeforeProtocolList"),
        Some(&Value::Bool(false))
    );
    assert!(migration.text.contains("ObjCSpaceBeforeProtocolList: false\n"));

    let migration = migrate("IndentWidth: 3\n", &options(Version::V3_6, Version::V12)).unwrap();
    assert_eq!(migration.record.get("Standard"), Some(&Value::Enum("Cpp11")));
}

#[test]
fn test_upgrade_renames_legacy_fields() {
    let text = "BasedOnStyle: Google\nPointerBindsToType: false\nAlignEscapedNewlinesLeft: false\n";
    let migration = migrate(text, &options(Version::V3_4, Version::V16)).unwrap();
    assert!(migration.warnings.is_empty(), "{:?}", migration.warnings);
    assert!(migration.text.contains("PointerAlignment: Right\n"));
    assert!(migration.text.contains("AlignEscapedNewlines: Right\n"));
    assert!(migration.text.starts_with("---\nLanguage: Cpp\nBasedOnStyle: google\n"));
}

#[test]
fn test_folded_step_applies_intermediate_release_renames() {
    let text = "BasedOnStyle: LLVM\nBreakConstructorInitializersBeforeComma: true\nAlignEscapedNewlinesLeft: true\n";
    let migration = migrate(text, &options(Version::V3_6, Version::V12)).unwrap();
    assert!(migration.warnings.is_empty(), "{:?}", migration.warnings);
    assert_eq!(
        migration.record.get("BreakConstructorInitializers"),
        Some(&Value::Enum("BeforeComma"))
    );
    assert_eq!(migration.record.get("AlignEscapedNewlines"), Some(&Value::Enum("Left")));
    assert!(migration.text.contains("BreakConstructorInitializers: BeforeComma\n"));
    assert!(!migration.text.contains("BreakConstructorInitializersBeforeComma"));
}

#[test]
fn test_migrated_text_parses_under_the_target() {
    let text = "---\nBasedOnStyle: Mozilla\nColumnLimit: 100\nUseTab: ForContinuationAndIndentation\n";
    let migration = migrate(text, &options(Version::V12, Version::V16)).unwrap();
    let baseline = resolve(Version::V16, "mozilla", Language::Cpp).unwrap();
    let reparsed = parse(Version::V16, &migration.text, Language::Cpp, &baseline).unwrap();
    assert_eq!(expand(&reparsed.record).unwrap(), expand(&migration.record).unwrap());
    assert_eq!(
        reparsed.record.get("UseTab"),
        Some(&Value::Enum("ForContinuationAndIndentation"))
    );
}

#[test]
fn test_downgrade_reports_unrepresentable_values() {
    let text = "UseTab: AlignWithSpaces\n";
    let migration = migrate(text, &options(Version::V12, Version::V3_6)).unwrap();
    assert!(migration.text.contains("UseTab: ForIndentation\n"));

    let text = "PackConstructorInitializers: Never\n";
    let migration = migrate(text, &options(Version::V16, Version::V12)).unwrap();
    assert_eq!(
        migration.warnings,
        vec![MigrationWarning::ValueLoss {
            field: "PackConstructorInitializers".to_owned(),
            value: "Never".to_owned()
        }]
    );
}

#[test]
fn test_line_ending_splits_into_legacy_flags() {
    let migration = migrate("LineEnding: CRLF\n", &options(Version::V16, Version::V12)).unwrap();
    assert!(migration.warnings.is_empty());
    assert!(migration.text.contains("DeriveLineEnding: false\n"));
    assert!(migration.text.contains("UseCRLF: true\n"));
}

#[test]
fn test_missing_style_falls_back() {
    let text = "BasedOnStyle: Microsoft\nColumnLimit: 100\n";
    let migration = migrate(text, &options(Version::V16, Version::V3_6)).unwrap();
    assert_eq!(migration.style, "llvm");
    assert!(migration.text.contains("BasedOnStyle: llvm\n"));

    let fallback = options(Version::V16, Version::V3_6).with_fallback_style("Microsoft");
    let err = migrate("ColumnLimit: 100\n", &fallback).unwrap_err();
    assert!(matches!(err, StyleError::IncompatibleStyle { .. }));
    assert_eq!(err.exit_code(), 10);
}

#[test]
fn test_language_must_exist_at_both_ends() {
    let json = MigrateOptions::new(Version::V16, Version::V12, Language::Json);
    let err = migrate("Language: Json\n", &json).unwrap_err();
    assert_eq!(
        err,
        StyleError::UnsupportedLanguage {
            language: "Json".to_owned(),
            version: "12".to_owned()
        }
    );
}

#[test]
fn test_keep_same_writes_every_field() {
    let full = migrate("ColumnLimit: 90\n", &options(Version::V12, Version::V16).with_skip_same(false))
        .unwrap();
    assert!(full.text.contains("AccessModifierOffset: -2\n"));
    assert!(!full.text.contains("BasedOnStyle"));
    assert!(full.text.lines().count() > 100);
}

#[test]
fn test_source_errors_propagate() {
    let err = migrate("UseTab: Sometimes\n", &options(Version::V16, Version::V12)).unwrap_err();
    assert_eq!(err, StyleError::invalid_value("UseTab", "Sometimes"));
}

#[test]
fn test_compatible_versions() {
    assert_eq!(compatible_versions("IndentWidth: 4\n", Language::Cpp), Version::ALL.to_vec());
    assert_eq!(
        compatible_versions("BreakBeforeConceptDeclarations: Allowed\n", Language::Cpp),
        vec![Version::V3_4, Version::V3_6, Version::V16]
    );
}
