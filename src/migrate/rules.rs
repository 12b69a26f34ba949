//! Field correspondences between adjacent versions
//!
//! Tables are written in the upgrade direction and read backwards for
//! downgrades. Fields with the same name and a structurally convertible
//! type need no entry.

use crate::schema::Version;
use crate::schema::value::Lit as L;

/// One correspondence between a lower and the next higher version
#[derive(Debug)]
pub enum Rule {
    /// `old` in the lower version is `new` in the higher one
    ///
    /// Upgrading takes the first row whose left side matches; downgrading
    /// takes the first row whose right side matches. An empty map converts
    /// structurally.
    Rename {
        old: &'static str,
        new: &'static str,
        map: &'static [(L, L)],
    },
    /// Several lower-version fields fold into one higher-version field
    ///
    /// `None` in a row pattern matches any value and, when downgrading,
    /// leaves the target default in place.
    Merge {
        old: &'static [&'static str],
        new: &'static str,
        rows: &'static [(&'static [Option<L>], L)],
    },
}

/// Rules for the step between two adjacent versions, in either order
#[must_use]
pub fn between(a: Version, b: Version) -> &'static [Rule] {
    match a.min(b) {
        Version::V3_4 => TO_3_6,
        Version::V3_6 => TO_12,
        Version::V12 => TO_16,
        Version::V16 => &[],
    }
}

static TO_3_6: &[Rule] = &[
    Rule::Rename {
        old: "PointerBindsToType",
        new: "PointerAlignment",
        map: &[
            (L::Bool(true), L::Enum("Left")),
            (L::Bool(false), L::Enum("Right")),
        ],
    },
    Rule::Rename {
        old: "DerivePointerBinding",
        new: "DerivePointerAlignment",
        map: &[],
    },
    Rule::Rename {
        old: "IndentFunctionDeclarationAfterType",
        new: "IndentWrappedFunctionNames",
        map: &[],
    },
    Rule::Rename {
        old: "SpaceAfterControlStatementKeyword",
        new: "SpaceBeforeParens",
        map: &[
            (L::Bool(true), L::Enum("ControlStatements")),
            (L::Bool(false), L::Enum("Never")),
            (L::Bool(true), L::Enum("Always")),
        ],
    },
    Rule::Rename {
        old: "BreakBeforeBinaryOperators",
        new: "BreakBeforeBinaryOperators",
        map: &[
            (L::Bool(true), L::Enum("All")),
            (L::Bool(false), L::Enum("None")),
            (L::Bool(true), L::Enum("NonAssignment")),
        ],
    },
];

static TO_12: &[Rule] = &[
    Rule::Rename {
        old: "AlignEscapedNewlinesLeft",
        new: "AlignEscapedNewlines",
        map: &[
            (L::Bool(true), L::Enum("Left")),
            (L::Bool(false), L::Enum("Right")),
        ],
    },
    Rule::Rename {
        old: "BreakConstructorInitializersBeforeComma",
        new: "BreakConstructorInitializers",
        map: &[
            (L::Bool(true), L::Enum("BeforeComma")),
            (L::Bool(false), L::Enum("BeforeColon")),
            (L::Bool(false), L::Enum("AfterColon")),
        ],
    },
    Rule::Rename {
        old: "AllowShortIfStatementsOnASingleLine",
        new: "AllowShortIfStatementsOnASingleLine",
        map: &[
            (L::Bool(true), L::Enum("WithoutElse")),
            (L::Bool(false), L::Enum("Never")),
            (L::Bool(true), L::Enum("Always")),
        ],
    },
    Rule::Rename {
        old: "AlignAfterOpenBracket",
        new: "AlignAfterOpenBracket",
        map: &[
            (L::Bool(true), L::Enum("Align")),
            (L::Bool(false), L::Enum("DontAlign")),
            (L::Bool(false), L::Enum("AlwaysBreak")),
        ],
    },
    Rule::Rename {
        old: "AlignOperands",
        new: "AlignOperands",
        map: &[
            (L::Bool(true), L::Enum("Align")),
            (L::Bool(false), L::Enum("DontAlign")),
            (L::Bool(true), L::Enum("AlignAfterOperator")),
        ],
    },
    Rule::Rename {
        old: "AlwaysBreakAfterDefinitionReturnType",
        new: "AlwaysBreakAfterDefinitionReturnType",
        map: &[
            (L::Bool(true), L::Enum("All")),
            (L::Bool(false), L::Enum("None")),
            (L::Bool(true), L::Enum("TopLevel")),
        ],
    },
    Rule::Rename {
        old: "AlwaysBreakTemplateDeclarations",
        new: "AlwaysBreakTemplateDeclarations",
        map: &[
            (L::Bool(true), L::Enum("Yes")),
            (L::Bool(false), L::Enum("MultiLine")),
            (L::Bool(false), L::Enum("No")),
        ],
    },
    Rule::Rename {
        old: "Standard",
        new: "Standard",
        map: &[
            (L::Enum("Cpp03"), L::Enum("Cpp03")),
            (L::Enum("Cpp11"), L::Enum("Cpp11")),
            (L::Enum("Cpp11"), L::Enum("Latest")),
            (L::Enum("Cpp11"), L::Enum("Cpp14")),
            (L::Enum("Cpp11"), L::Enum("Cpp17")),
            (L::Enum("Cpp11"), L::Enum("Cpp20")),
            (L::Enum("Auto"), L::Enum("Auto")),
        ],
    },
    Rule::Rename {
        old: "AllowShortFunctionsOnASingleLine",
        new: "AllowShortFunctionsOnASingleLine",
        map: &[
            (L::Enum("None"), L::Enum("None")),
            (L::Enum("All"), L::Enum("All")),
            (L::Enum("Inline"), L::Enum("Inline")),
            (L::Enum("Empty"), L::Enum("Empty")),
            (L::Enum("Inline"), L::Enum("InlineOnly")),
        ],
    },
    Rule::Rename {
        old: "UseTab",
        new: "UseTab",
        map: &[
            (L::Enum("Never"), L::Enum("Never")),
            (L::Enum("Always"), L::Enum("Always")),
            (L::Enum("ForIndentation"), L::Enum("ForIndentation")),
            (L::Enum("ForIndentation"), L::Enum("ForContinuationAndIndentation")),
            (L::Enum("ForIndentation"), L::Enum("AlignWithSpaces")),
        ],
    },
];

static TO_16: &[Rule] = &[
    Rule::Merge {
        old: &[
            "AllowAllConstructorInitializersOnNextLine",
            "ConstructorInitializerAllOnOneLineOrOnePerLine",
        ],
        new: "PackConstructorInitializers",
        rows: &[
            (&[None, Some(L::Bool(false))], L::Enum("BinPack")),
            (&[Some(L::Bool(true)), Some(L::Bool(true))], L::Enum("NextLine")),
            (&[Some(L::Bool(false)), Some(L::Bool(true))], L::Enum("CurrentLine")),
        ],
    },
    Rule::Merge {
        old: &["DeriveLineEnding", "UseCRLF"],
        new: "LineEnding",
        rows: &[
            (&[Some(L::Bool(true)), Some(L::Bool(false))], L::Enum("DeriveLF")),
            (&[Some(L::Bool(true)), Some(L::Bool(true))], L::Enum("DeriveCRLF")),
            (&[Some(L::Bool(false)), Some(L::Bool(false))], L::Enum("LF")),
            (&[Some(L::Bool(false)), Some(L::Bool(true))], L::Enum("CRLF")),
        ],
    },
    Rule::Rename {
        old: "IndentRequires",
        new: "IndentRequiresClause",
        map: &[],
    },
    Rule::Rename {
        old: "BreakBeforeConceptDeclarations",
        new: "BreakBeforeConceptDeclarations",
        map: &[
            (L::Bool(true), L::Enum("Always")),
            (L::Bool(false), L::Enum("Allowed")),
            (L::Bool(false), L::Enum("Never")),
        ],
    },
    Rule::Rename {
        old: "SortIncludes",
        new: "SortIncludes",
        map: &[
            (L::Bool(true), L::Enum("CaseSensitive")),
            (L::Bool(false), L::Enum("Never")),
            (L::Bool(true), L::Enum("CaseInsensitive")),
        ],
    },
    Rule::Rename {
        old: "SortUsingDeclarations",
        new: "SortUsingDeclarations",
        map: &[
            (L::Bool(true), L::Enum("LexicographicNumeric")),
            (L::Bool(false), L::Enum("Never")),
            (L::Bool(true), L::Enum("Lexicographic")),
        ],
    },
    Rule::Rename {
        old: "SpaceBeforeParens",
        new: "SpaceBeforeParens",
        map: &[(
            L::Enum("ControlStatementsExceptForEachMacros"),
            L::Enum("ControlStatementsExceptControlMacros"),
        )],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_fields_exist_on_both_sides() {
        for pair in Version::ALL.windows(2) {
            let (lower, higher) = (pair[0], pair[1]);
            for rule in between(lower, higher) {
                let (old, new): (Vec<&str>, &str) = match rule {
                    Rule::Rename { old, new, .. } => (vec![*old], *new),
                    Rule::Merge { old, new, .. } => (old.to_vec(), *new),
                };
                for name in old {
                    assert!(lower.schema().field(name).is_some(), "{lower} lacks {name}");
                }
                assert!(higher.schema().field(new).is_some(), "{higher} lacks {new}");
            }
        }
    }

    #[test]
    fn rename_maps_fit_their_fields() {
        for pair in Version::ALL.windows(2) {
            let (lower, higher) = (pair[0], pair[1]);
            for rule in between(lower, higher) {
                let Rule::Rename { old, new, map } = rule else {
                    continue;
                };
                let (Some(old_field), Some(new_field)) =
                    (lower.schema().field(old), higher.schema().field(new))
                else {
                    panic!("{old} -> {new} names a missing field");
                };
                let old_zero = crate::schema::value::zero(old_field.kind);
                let new_zero = crate::schema::value::zero(new_field.kind);
                for (from, to) in *map {
                    assert!(from.to_value(old_field, &old_zero).is_ok(), "{old}: {from:?}");
                    assert!(to.to_value(new_field, &new_zero).is_ok(), "{new}: {to:?}");
                }
            }
        }
    }

    #[test]
    fn steps_are_symmetric() {
        assert_eq!(
            between(Version::V12, Version::V16).len(),
            between(Version::V16, Version::V12).len()
        );
        assert!(between(Version::V16, Version::V16).is_empty());
    }
}
