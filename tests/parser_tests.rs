//! Document parser tests

use stylemigrate::error::StyleError;
use stylemigrate::parser::{ParsedConfig, parse};
use stylemigrate::profile::resolve;
use stylemigrate::record::StyleRecord;
use stylemigrate::schema::table::Legacy;
use stylemigrate::schema::value::Value;
use stylemigrate::schema::{Language, Version};

fn llvm(version: Version, language: Language) -> StyleRecord {
    resolve(version, "llvm", language).unwrap()
}

fn parse_llvm(version: Version, text: &str, language: Language) -> Result<ParsedConfig, StyleError> {
    parse(version, text, language, &llvm(version, language))
}

#[test]
fn test_empty_input_yields_ambient_for_every_language() {
    for language in Version::V16.schema().languages() {
        let ambient = resolve(Version::V16, "google", *language).unwrap();
        for text in ["", "   \n\t\n"] {
            let parsed = parse(Version::V16, text, *language, &ambient).unwrap();
            assert_eq!(parsed.record, ambient, "{language}");
            assert_eq!(parsed.based_on, None);
        }
    }
}

#[test]
fn test_empty_input_fails_before_16() {
    for version in [Version::V3_4, Version::V12] {
        let err = parse_llvm(version, "", Language::Cpp).unwrap_err();
        assert!(matches!(err, StyleError::MalformedText { .. }), "{version}: {err}");
    }
    let err = parse_llvm(Version::V3_6, " \n", Language::Java).unwrap_err();
    assert_eq!(
        err,
        StyleError::UnsuitableLanguage {
            language: "Java".to_owned()
        }
    );
    assert_eq!(err.exit_code(), 6);
}

#[test]
fn test_default_document_serves_other_languages() {
    let text = "---\nColumnLimit: 90\n---\nLanguage: Java\nIndentWidth: 8\n";
    let parsed = parse_llvm(Version::V16, text, Language::JavaScript).unwrap();

    let expected = parse_llvm(Version::V16, "ColumnLimit: 90\n", Language::JavaScript).unwrap();
    assert_eq!(parsed.record, expected.record);
    assert_eq!(parsed.record.language(), Language::JavaScript);
    assert_eq!(parsed.record.get("ColumnLimit"), Some(&Value::Int(90)));
    assert_eq!(
        parsed.record.get("IndentWidth"),
        llvm(Version::V16, Language::JavaScript).get("IndentWidth")
    );
}

#[test]
fn test_language_document_inherits_from_default_document() {
    let text = "---\nColumnLimit: 90\n---\nLanguage: Java\nIndentWidth: 8\n";
    let parsed = parse_llvm(Version::V16, text, Language::Java).unwrap();
    assert_eq!(parsed.record.get("ColumnLimit"), Some(&Value::Int(90)));
    assert_eq!(parsed.record.get("IndentWidth"), Some(&Value::Int(8)));
}

#[test]
fn test_duplicate_languages_are_rejected() {
    let cases = [
        "Language: Java\n---\nLanguage: Java\n",
        "ColumnLimit: 90\n---\nLanguage: Proto\n---\nLanguage: Proto\nIndentWidth: 3\n",
    ];
    for version in [Version::V3_6, Version::V12, Version::V16] {
        for text in cases {
            let err = parse_llvm(version, text, Language::Cpp).unwrap_err();
            assert!(matches!(err, StyleError::DuplicateLanguage { .. }), "{version}: {err}");
        }
    }
}

#[test]
fn test_unsuitable_language() {
    let err = parse_llvm(Version::V16, "Language: Java\n", Language::Cpp).unwrap_err();
    assert_eq!(
        err,
        StyleError::UnsuitableLanguage {
            language: "Cpp".to_owned()
        }
    );
}

#[test]
fn test_trailing_comma_with_bin_packing_is_a_constraint_violation() {
    let text = "Language: JavaScript\nInsertTrailingCommas: Wrapped\nBinPackArguments: true\n";
    for version in [Version::V12, Version::V16] {
        let err = parse_llvm(version, text, Language::JavaScript).unwrap_err();
        assert_eq!(err.constraint_name(), Some("trailing-comma-bin-packing"), "{version}");
        assert_eq!(err.exit_code(), 7);
    }
    let fixed = "Language: JavaScript\nInsertTrailingCommas: Wrapped\nBinPackArguments: false\n";
    assert!(parse_llvm(Version::V16, fixed, Language::JavaScript).is_ok());
}

#[test]
fn test_legacy_aliases_match_their_replacements() {
    for version in [Version::V3_6, Version::V12, Version::V16] {
        for entry in version.schema().legacy() {
            let Legacy::Alias { name, target } = entry else {
                continue;
            };
            for value in ["true", "false"] {
                let legacy = parse_llvm(version, &format!("{name}: {value}\n"), Language::Cpp);
                let current = parse_llvm(version, &format!("{target}: {value}\n"), Language::Cpp);
                match (legacy, current) {
                    (Ok(a), Ok(b)) => assert_eq!(a.record, b.record, "{version} {name}: {value}"),
                    (Err(_), Err(_)) => {}
                    (a, b) => panic!("{version} {name}: {value} disagrees: {a:?} vs {b:?}"),
                }
            }
        }
    }
}

#[test]
fn test_mapped_legacy_alias_matches_replacement() {
    let legacy = parse_llvm(Version::V16, "BreakBeforeInheritanceComma: true\n", Language::Cpp).unwrap();
    let current = parse_llvm(Version::V16, "BreakInheritanceList: BeforeComma\n", Language::Cpp).unwrap();
    assert_eq!(legacy.record, current.record);
}

#[test]
fn test_replacement_wins_over_legacy_alias() {
    let text = "PointerAlignment: Middle\nPointerBindsToType: true\n";
    let parsed = parse_llvm(Version::V16, text, Language::Cpp).unwrap();
    assert_eq!(parsed.record.get("PointerAlignment"), Some(&Value::Enum("Middle")));
}

#[test]
fn test_unknown_keys_follow_version_strictness() {
    let text = "Frobnicate: true\nColumnLimit: 70\n";
    let lenient = parse_llvm(Version::V3_6, text, Language::Cpp).unwrap();
    assert_eq!(lenient.record.get("ColumnLimit"), Some(&Value::Int(70)));

    let err = parse_llvm(Version::V12, text, Language::Cpp).unwrap_err();
    assert_eq!(err, StyleError::unknown_option("Frobnicate"));
}

#[test]
fn test_based_on_style_seeds_the_record() {
    let parsed = parse_llvm(Version::V12, "BasedOnStyle: Mozilla\n", Language::Cpp).unwrap();
    assert_eq!(parsed.based_on.as_deref(), Some("Mozilla"));
    assert_eq!(parsed.record, resolve(Version::V12, "mozilla", Language::Cpp).unwrap());

    let err = parse_llvm(Version::V3_4, "BasedOnStyle: Microsoft\n", Language::Cpp).unwrap_err();
    assert!(matches!(err, StyleError::UnknownProfile { .. }));
}

#[test]
fn test_syntax_errors_are_malformed_text() {
    let err = parse_llvm(Version::V16, "ColumnLimit: [80\n", Language::Cpp).unwrap_err();
    assert_eq!(err.exit_code(), 1);
    let err = parse_llvm(Version::V16, "- just\n- a list\n", Language::Cpp).unwrap_err();
    assert!(matches!(err, StyleError::MalformedText { .. }));
}

#[test]
fn test_out_of_range_numbers_are_invalid_values() {
    let err = parse_llvm(Version::V16, "ColumnLimit: 99999999999\n", Language::Cpp).unwrap_err();
    assert_eq!(err, StyleError::invalid_value("ColumnLimit", "99999999999"));
    assert_eq!(err.exit_code(), 3);

    let err = parse_llvm(Version::V12, "PenaltyExcessCharacter: 4294967296\n", Language::Cpp).unwrap_err();
    assert!(matches!(err, StyleError::InvalidValue { .. }), "{err}");
}
