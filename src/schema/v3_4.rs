//! Schema 3.4: single document, no `Language`, lenient keys

use super::table::{Base, Layer, Profile, When};
use super::value::{EnumDef, FieldDef as F, FieldKind as K, Lit as L};
use super::{EmptyInput, Language, Rules, Schema, Version};

static LANGUAGE_STANDARD: EnumDef = EnumDef::new(
    "LanguageStandard",
    &[
        ("Cpp03", "Cpp03"),
        ("C++03", "Cpp03"),
        ("Cpp11", "Cpp11"),
        ("C++11", "Cpp11"),
        ("Auto", "Auto"),
    ],
);

static USE_TAB: EnumDef = EnumDef::new(
    "UseTabStyle",
    &[
        ("Never", "Never"),
        ("false", "Never"),
        ("Always", "Always"),
        ("true", "Always"),
        ("ForIndentation", "ForIndentation"),
    ],
);

static BRACE_BREAKING: EnumDef = EnumDef::new(
    "BraceBreakingStyle",
    &[
        ("Attach", "Attach"),
        ("Linux", "Linux"),
        ("Stroustrup", "Stroustrup"),
        ("Allman", "Allman"),
    ],
);

static NAMESPACE_INDENTATION: EnumDef = EnumDef::new(
    "NamespaceIndentationKind",
    &[("None", "None"), ("Inner", "Inner"), ("All", "All")],
);

static FIELDS: &[F] = &[
    F::new("AccessModifierOffset", K::Int),
    F::new("ConstructorInitializerIndentWidth", K::Unsigned),
    F::new("AlignEscapedNewlinesLeft", K::Bool),
    F::new("AlignTrailingComments", K::Bool),
    F::new("AllowAllParametersOfDeclarationOnNextLine", K::Bool),
    F::new("AllowShortIfStatementsOnASingleLine", K::Bool),
    F::new("AllowShortLoopsOnASingleLine", K::Bool),
    F::new("AlwaysBreakTemplateDeclarations", K::Bool),
    F::new("AlwaysBreakBeforeMultilineStrings", K::Bool),
    F::new("BreakBeforeBinaryOperators", K::Bool),
    F::new("BreakBeforeTernaryOperators", K::Bool),
    F::new("BreakConstructorInitializersBeforeComma", K::Bool),
    F::new("BinPackParameters", K::Bool),
    F::new("ColumnLimit", K::Unsigned),
    F::new("ConstructorInitializerAllOnOneLineOrOnePerLine", K::Bool),
    F::new("DerivePointerBinding", K::Bool),
    F::new("ExperimentalAutoDetectBinPacking", K::Bool),
    F::new("IndentCaseLabels", K::Bool),
    F::new("MaxEmptyLinesToKeep", K::Unsigned),
    F::new("NamespaceIndentation", K::Enum(&NAMESPACE_INDENTATION)),
    F::new("ObjCSpaceBeforeProtocolList", K::Bool),
    F::new("PenaltyBreakBeforeFirstCallParameter", K::Unsigned),
    F::new("PenaltyBreakComment", K::Unsigned),
    F::new("PenaltyBreakString", K::Unsigned),
    F::new("PenaltyBreakFirstLessLess", K::Unsigned),
    F::new("PenaltyExcessCharacter", K::Unsigned),
    F::new("PenaltyReturnTypeOnItsOwnLine", K::Unsigned),
    F::new("PointerBindsToType", K::Bool),
    F::new("SpacesBeforeTrailingComments", K::Unsigned),
    F::new("Cpp11BracedListStyle", K::Bool),
    F::new("Standard", K::Enum(&LANGUAGE_STANDARD)),
    F::new("IndentWidth", K::Unsigned),
    F::new("TabWidth", K::Unsigned),
    F::new("UseTab", K::Enum(&USE_TAB)),
    F::new("BreakBeforeBraces", K::Enum(&BRACE_BREAKING)),
    F::new("IndentFunctionDeclarationAfterType", K::Bool),
    F::new("SpacesInParentheses", K::Bool),
    F::new("SpacesInAngles", K::Bool),
    F::new("SpaceInEmptyParentheses", K::Bool),
    F::new("SpacesInCStyleCastParentheses", K::Bool),
    F::new("SpaceAfterControlStatementKeyword", K::Bool),
    F::new("SpaceBeforeAssignmentOperators", K::Bool),
    F::new("ContinuationIndentWidth", K::Unsigned),
];

static BASELINE: &[(&str, L)] = &[
    ("AccessModifierOffset", L::Int(-2)),
    ("ConstructorInitializerIndentWidth", L::Int(4)),
    ("AlignEscapedNewlinesLeft", L::Bool(false)),
    ("AlignTrailingComments", L::Bool(true)),
    ("AllowAllParametersOfDeclarationOnNextLine", L::Bool(true)),
    ("AllowShortIfStatementsOnASingleLine", L::Bool(false)),
    ("AllowShortLoopsOnASingleLine", L::Bool(false)),
    ("AlwaysBreakTemplateDeclarations", L::Bool(false)),
    ("AlwaysBreakBeforeMultilineStrings", L::Bool(false)),
    ("BreakBeforeBinaryOperators", L::Bool(false)),
    ("BreakBeforeTernaryOperators", L::Bool(true)),
    ("BreakConstructorInitializersBeforeComma", L::Bool(false)),
    ("BinPackParameters", L::Bool(true)),
    ("ColumnLimit", L::Int(80)),
    ("ConstructorInitializerAllOnOneLineOrOnePerLine", L::Bool(false)),
    ("DerivePointerBinding", L::Bool(false)),
    ("ExperimentalAutoDetectBinPacking", L::Bool(false)),
    ("IndentCaseLabels", L::Bool(false)),
    ("MaxEmptyLinesToKeep", L::Int(1)),
    ("NamespaceIndentation", L::Enum("None")),
    ("ObjCSpaceBeforeProtocolList", L::Bool(true)),
    ("PenaltyBreakBeforeFirstCallParameter", L::Int(19)),
    ("PenaltyBreakComment", L::Int(60)),
    ("PenaltyBreakString", L::Int(1000)),
    ("PenaltyBreakFirstLessLess", L::Int(120)),
    ("PenaltyExcessCharacter", L::Int(1_000_000)),
    ("PenaltyReturnTypeOnItsOwnLine", L::Int(60)),
    ("PointerBindsToType", L::Bool(false)),
    ("SpacesBeforeTrailingComments", L::Int(1)),
    ("Cpp11BracedListStyle", L::Bool(false)),
    ("Standard", L::Enum("Cpp03")),
    ("IndentWidth", L::Int(2)),
    ("TabWidth", L::Int(8)),
    ("UseTab", L::Enum("Never")),
    ("BreakBeforeBraces", L::Enum("Attach")),
    ("IndentFunctionDeclarationAfterType", L::Bool(false)),
    ("SpacesInParentheses", L::Bool(false)),
    ("SpacesInAngles", L::Bool(false)),
    ("SpaceInEmptyParentheses", L::Bool(false)),
    ("SpacesInCStyleCastParentheses", L::Bool(false)),
    ("SpaceAfterControlStatementKeyword", L::Bool(true)),
    ("SpaceBeforeAssignmentOperators", L::Bool(true)),
    ("ContinuationIndentWidth", L::Int(4)),
];

static PROFILES: &[Profile] = &[
    Profile {
        name: "chromium",
        base: Base::Style("google"),
        layers: &[Layer {
            when: When::Always,
            set: &[
                ("AllowAllParametersOfDeclarationOnNextLine", L::Bool(false)),
                ("AllowShortIfStatementsOnASingleLine", L::Bool(false)),
                ("AllowShortLoopsOnASingleLine", L::Bool(false)),
                ("BinPackParameters", L::Bool(false)),
                ("DerivePointerBinding", L::Bool(false)),
                ("Standard", L::Enum("Cpp03")),
            ],
        }],
        aliases: &[],
    },
    Profile {
        name: "google",
        base: Base::Baseline,
        layers: &[Layer {
            when: When::Always,
            set: &[
                ("AccessModifierOffset", L::Int(-1)),
                ("AlignEscapedNewlinesLeft", L::Bool(true)),
                ("AllowShortIfStatementsOnASingleLine", L::Bool(true)),
                ("AllowShortLoopsOnASingleLine", L::Bool(true)),
                ("AlwaysBreakBeforeMultilineStrings", L::Bool(true)),
                ("AlwaysBreakTemplateDeclarations", L::Bool(true)),
                ("ConstructorInitializerAllOnOneLineOrOnePerLine", L::Bool(true)),
                ("Cpp11BracedListStyle", L::Bool(true)),
                ("DerivePointerBinding", L::Bool(true)),
                ("IndentCaseLabels", L::Bool(true)),
                ("IndentFunctionDeclarationAfterType", L::Bool(true)),
                ("ObjCSpaceBeforeProtocolList", L::Bool(false)),
                ("PointerBindsToType", L::Bool(true)),
                ("SpacesBeforeTrailingComments", L::Int(2)),
                ("Standard", L::Enum("Auto")),
                ("PenaltyReturnTypeOnItsOwnLine", L::Int(200)),
                ("PenaltyBreakBeforeFirstCallParameter", L::Int(1)),
            ],
        }],
        aliases: &[],
    },
    Profile {
        name: "llvm",
        base: Base::Baseline,
        layers: &[],
        aliases: &[],
    },
    Profile {
        name: "mozilla",
        base: Base::Style("llvm"),
        layers: &[Layer {
            when: When::Always,
            set: &[
                ("AllowAllParametersOfDeclarationOnNextLine", L::Bool(false)),
                ("ConstructorInitializerAllOnOneLineOrOnePerLine", L::Bool(true)),
                ("DerivePointerBinding", L::Bool(true)),
                ("IndentCaseLabels", L::Bool(true)),
                ("ObjCSpaceBeforeProtocolList", L::Bool(false)),
                ("PenaltyReturnTypeOnItsOwnLine", L::Int(200)),
                ("PointerBindsToType", L::Bool(true)),
            ],
        }],
        aliases: &[],
    },
    Profile {
        name: "webkit",
        base: Base::Style("llvm"),
        layers: &[Layer {
            when: When::Always,
            set: &[
                ("AccessModifierOffset", L::Int(-4)),
                ("AlignTrailingComments", L::Bool(false)),
                ("BreakBeforeBinaryOperators", L::Bool(true)),
                ("BreakBeforeBraces", L::Enum("Stroustrup")),
                ("BreakConstructorInitializersBeforeComma", L::Bool(true)),
                ("ColumnLimit", L::Int(0)),
                ("IndentWidth", L::Int(4)),
                ("NamespaceIndentation", L::Enum("Inner")),
                ("PointerBindsToType", L::Bool(true)),
            ],
        }],
        aliases: &[],
    },
];

pub struct V3_4Schema;

impl Schema for V3_4Schema {
    fn version(&self) -> Version {
        Version::V3_4
    }

    fn fields(&self) -> &'static [F] {
        FIELDS
    }

    fn languages(&self) -> &'static [Language] {
        &[Language::Cpp]
    }

    fn baseline(&self) -> &'static [(&'static str, L)] {
        BASELINE
    }

    fn profiles(&self) -> &'static [Profile] {
        PROFILES
    }

    fn rules(&self) -> Rules {
        Rules {
            strict_keys: false,
            empty_input: EmptyInput::Malformed,
            language_field: false,
            inherit_sentinel: false,
        }
    }
}
