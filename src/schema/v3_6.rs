//! Schema 3.6: first revision with per-language documents

use super::table::{Base, Layer, Legacy, Profile, When};
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

static SHORT_FUNCTION: EnumDef = EnumDef::new(
    "ShortFunctionStyle",
    &[
        ("None", "None"),
        ("false", "None"),
        ("All", "All"),
        ("true", "All"),
        ("Inline", "Inline"),
        ("Empty", "Empty"),
    ],
);

static BINARY_OPERATOR: EnumDef = EnumDef::new(
    "BinaryOperatorStyle",
    &[
        ("All", "All"),
        ("true", "All"),
        ("None", "None"),
        ("false", "None"),
        ("NonAssignment", "NonAssignment"),
    ],
);

static BRACE_BREAKING: EnumDef = EnumDef::new(
    "BraceBreakingStyle",
    &[
        ("Attach", "Attach"),
        ("Linux", "Linux"),
        ("Stroustrup", "Stroustrup"),
        ("Allman", "Allman"),
        ("GNU", "GNU"),
    ],
);

static NAMESPACE_INDENTATION: EnumDef = EnumDef::new(
    "NamespaceIndentationKind",
    &[("None", "None"), ("Inner", "Inner"), ("All", "All")],
);

static POINTER_ALIGNMENT: EnumDef = EnumDef::new(
    "PointerAlignmentStyle",
    &[
        ("Middle", "Middle"),
        ("Left", "Left"),
        ("Right", "Right"),
        ("true", "Left"),
        ("false", "Right"),
    ],
);

static SPACE_BEFORE_PARENS: EnumDef = EnumDef::new(
    "SpaceBeforeParensOptions",
    &[
        ("Never", "Never"),
        ("ControlStatements", "ControlStatements"),
        ("Always", "Always"),
        ("false", "Never"),
        ("true", "ControlStatements"),
    ],
);

static FIELDS: &[F] = &[
    F::new("AccessModifierOffset", K::Int),
    F::new("AlignAfterOpenBracket", K::Bool),
    F::new("AlignEscapedNewlinesLeft", K::Bool),
    F::new("AlignOperands", K::Bool),
    F::new("AlignTrailingComments", K::Bool),
    F::new("AllowAllParametersOfDeclarationOnNextLine", K::Bool),
    F::new("AllowShortBlocksOnASingleLine", K::Bool),
    F::new("AllowShortCaseLabelsOnASingleLine", K::Bool),
    F::new("AllowShortIfStatementsOnASingleLine", K::Bool),
    F::new("AllowShortLoopsOnASingleLine", K::Bool),
    F::new("AllowShortFunctionsOnASingleLine", K::Enum(&SHORT_FUNCTION)),
    F::new("AlwaysBreakAfterDefinitionReturnType", K::Bool),
    F::new("AlwaysBreakTemplateDeclarations", K::Bool),
    F::new("AlwaysBreakBeforeMultilineStrings", K::Bool),
    F::new("BreakBeforeBinaryOperators", K::Enum(&BINARY_OPERATOR)),
    F::new("BreakBeforeTernaryOperators", K::Bool),
    F::new("BreakConstructorInitializersBeforeComma", K::Bool),
    F::new("BinPackParameters", K::Bool),
    F::new("BinPackArguments", K::Bool),
    F::new("ColumnLimit", K::Unsigned),
    F::new("ConstructorInitializerAllOnOneLineOrOnePerLine", K::Bool),
    F::new("ConstructorInitializerIndentWidth", K::Unsigned),
    F::new("DerivePointerAlignment", K::Bool),
    F::new("ExperimentalAutoDetectBinPacking", K::Bool),
    F::new("IndentCaseLabels", K::Bool),
    F::new("IndentWrappedFunctionNames", K::Bool),
    F::new("MaxEmptyLinesToKeep", K::Unsigned),
    F::new("KeepEmptyLinesAtTheStartOfBlocks", K::Bool),
    F::new("NamespaceIndentation", K::Enum(&NAMESPACE_INDENTATION)),
    F::new("ObjCBlockIndentWidth", K::Unsigned),
    F::new("ObjCSpaceAfterProperty", K::Bool),
    F::new("ObjCSpaceBeforeProtocolList", K::Bool),
    F::new("PenaltyBreakBeforeFirstCallParameter", K::Unsigned),
    F::new("PenaltyBreakComment", K::Unsigned),
    F::new("PenaltyBreakString", K::Unsigned),
    F::new("PenaltyBreakFirstLessLess", K::Unsigned),
    F::new("PenaltyExcessCharacter", K::Unsigned),
    F::new("PenaltyReturnTypeOnItsOwnLine", K::Unsigned),
    F::new("PointerAlignment", K::Enum(&POINTER_ALIGNMENT)),
    F::new("SpacesBeforeTrailingComments", K::Unsigned),
    F::new("Cpp11BracedListStyle", K::Bool),
    F::new("Standard", K::Enum(&LANGUAGE_STANDARD)),
    F::new("IndentWidth", K::Unsigned),
    F::new("TabWidth", K::Unsigned),
    F::new("UseTab", K::Enum(&USE_TAB)),
    F::new("BreakBeforeBraces", K::Enum(&BRACE_BREAKING)),
    F::new("SpacesInParentheses", K::Bool),
    F::new("SpacesInSquareBrackets", K::Bool),
    F::new("SpacesInAngles", K::Bool),
    F::new("SpaceInEmptyParentheses", K::Bool),
    F::new("SpacesInCStyleCastParentheses", K::Bool),
    F::new("SpaceAfterCStyleCast", K::Bool),
    F::new("SpacesInContainerLiterals", K::Bool),
    F::new("SpaceBeforeAssignmentOperators", K::Bool),
    F::new("ContinuationIndentWidth", K::Unsigned),
    F::new("CommentPragmas", K::Str),
    F::new("ForEachMacros", K::StrList),
    F::new("SpaceBeforeParens", K::Enum(&SPACE_BEFORE_PARENS)),
    F::new("DisableFormat", K::Bool),
];

static BASELINE: &[(&str, L)] = &[
    ("AccessModifierOffset", L::Int(-2)),
    ("AlignAfterOpenBracket", L::Bool(true)),
    ("AlignEscapedNewlinesLeft", L::Bool(false)),
    ("AlignOperands", L::Bool(true)),
    ("AlignTrailingComments", L::Bool(true)),
    ("AllowAllParametersOfDeclarationOnNextLine", L::Bool(true)),
    ("AllowShortBlocksOnASingleLine", L::Bool(false)),
    ("AllowShortCaseLabelsOnASingleLine", L::Bool(false)),
    ("AllowShortIfStatementsOnASingleLine", L::Bool(false)),
    ("AllowShortLoopsOnASingleLine", L::Bool(false)),
    ("AllowShortFunctionsOnASingleLine", L::Enum("All")),
    ("AlwaysBreakAfterDefinitionReturnType", L::Bool(false)),
    ("AlwaysBreakTemplateDeclarations", L::Bool(false)),
    ("AlwaysBreakBeforeMultilineStrings", L::Bool(false)),
    ("BreakBeforeBinaryOperators", L::Enum("None")),
    ("BreakBeforeTernaryOperators", L::Bool(true)),
    ("BreakConstructorInitializersBeforeComma", L::Bool(false)),
    ("BinPackParameters", L::Bool(true)),
    ("BinPackArguments", L::Bool(true)),
    ("ColumnLimit", L::Int(80)),
    ("ConstructorInitializerAllOnOneLineOrOnePerLine", L::Bool(false)),
    ("ConstructorInitializerIndentWidth", L::Int(4)),
    ("DerivePointerAlignment", L::Bool(false)),
    ("ExperimentalAutoDetectBinPacking", L::Bool(false)),
    ("IndentCaseLabels", L::Bool(false)),
    ("IndentWrappedFunctionNames", L::Bool(false)),
    ("MaxEmptyLinesToKeep", L::Int(1)),
    ("KeepEmptyLinesAtTheStartOfBlocks", L::Bool(true)),
    ("NamespaceIndentation", L::Enum("None")),
    ("ObjCBlockIndentWidth", L::Int(2)),
    ("ObjCSpaceAfterProperty", L::Bool(false)),
    ("ObjCSpaceBeforeProtocolList", L::Bool(true)),
    ("PenaltyBreakBeforeFirstCallParameter", L::Int(19)),
    ("PenaltyBreakComment", L::Int(300)),
    ("PenaltyBreakString", L::Int(1000)),
    ("PenaltyBreakFirstLessLess", L::Int(120)),
    ("PenaltyExcessCharacter", L::Int(1_000_000)),
    ("PenaltyReturnTypeOnItsOwnLine", L::Int(60)),
    ("PointerAlignment", L::Enum("Right")),
    ("SpacesBeforeTrailingComments", L::Int(1)),
    ("Cpp11BracedListStyle", L::Bool(true)),
    ("Standard", L::Enum("Cpp11")),
    ("IndentWidth", L::Int(2)),
    ("TabWidth", L::Int(8)),
    ("UseTab", L::Enum("Never")),
    ("BreakBeforeBraces", L::Enum("Attach")),
    ("SpacesInParentheses", L::Bool(false)),
    ("SpacesInSquareBrackets", L::Bool(false)),
    ("SpacesInAngles", L::Bool(false)),
    ("SpaceInEmptyParentheses", L::Bool(false)),
    ("SpacesInCStyleCastParentheses", L::Bool(false)),
    ("SpaceAfterCStyleCast", L::Bool(false)),
    ("SpacesInContainerLiterals", L::Bool(true)),
    ("SpaceBeforeAssignmentOperators", L::Bool(true)),
    ("ContinuationIndentWidth", L::Int(4)),
    ("CommentPragmas", L::Str("^ IWYU pragma:")),
    ("ForEachMacros", L::List(&["foreach", "Q_FOREACH", "BOOST_FOREACH"])),
    ("SpaceBeforeParens", L::Enum("ControlStatements")),
    ("DisableFormat", L::Bool(false)),
];

static PROFILES: &[Profile] = &[
    Profile {
        name: "chromium",
        base: Base::Style("google"),
        layers: &[
            Layer {
                when: When::Only(&[Language::Java]),
                set: &[
                    ("AllowShortIfStatementsOnASingleLine", L::Bool(true)),
                    ("IndentWidth", L::Int(4)),
                    ("ContinuationIndentWidth", L::Int(8)),
                ],
            },
            Layer {
                when: When::Except(&[Language::Java]),
                set: &[
                    ("AllowAllParametersOfDeclarationOnNextLine", L::Bool(false)),
                    ("AllowShortFunctionsOnASingleLine", L::Enum("Inline")),
                    ("AllowShortIfStatementsOnASingleLine", L::Bool(false)),
                    ("AllowShortLoopsOnASingleLine", L::Bool(false)),
                    ("BinPackParameters", L::Bool(false)),
                    ("DerivePointerAlignment", L::Bool(false)),
                ],
            },
        ],
        aliases: &[],
    },
    Profile {
        name: "gnu",
        base: Base::Style("llvm"),
        layers: &[Layer {
            when: When::Always,
            set: &[
                ("AlwaysBreakAfterDefinitionReturnType", L::Bool(true)),
                ("BreakBeforeBinaryOperators", L::Enum("All")),
                ("BreakBeforeBraces", L::Enum("GNU")),
                ("BreakBeforeTernaryOperators", L::Bool(true)),
                ("Cpp11BracedListStyle", L::Bool(false)),
                ("ColumnLimit", L::Int(79)),
                ("SpaceBeforeParens", L::Enum("Always")),
                ("Standard", L::Enum("Cpp03")),
            ],
        }],
        aliases: &[],
    },
    Profile {
        name: "google",
        base: Base::Style("llvm"),
        layers: &[
            Layer {
                when: When::Always,
                set: &[
                    ("AccessModifierOffset", L::Int(-1)),
                    ("AlignEscapedNewlinesLeft", L::Bool(true)),
                    ("AllowShortIfStatementsOnASingleLine", L::Bool(true)),
                    ("AllowShortLoopsOnASingleLine", L::Bool(true)),
                    ("AlwaysBreakBeforeMultilineStrings", L::Bool(true)),
                    ("AlwaysBreakTemplateDeclarations", L::Bool(true)),
                    ("ConstructorInitializerAllOnOneLineOrOnePerLine", L::Bool(true)),
                    ("DerivePointerAlignment", L::Bool(true)),
                    ("IndentCaseLabels", L::Bool(true)),
                    ("KeepEmptyLinesAtTheStartOfBlocks", L::Bool(false)),
                    ("ObjCSpaceAfterProperty", L::Bool(false)),
                    ("ObjCSpaceBeforeProtocolList", L::Bool(false)),
                    ("PointerAlignment", L::Enum("Left")),
                    ("SpacesBeforeTrailingComments", L::Int(2)),
                    ("Standard", L::Enum("Auto")),
                    ("PenaltyReturnTypeOnItsOwnLine", L::Int(200)),
                    ("PenaltyBreakBeforeFirstCallParameter", L::Int(1)),
                ],
            },
            Layer {
                when: When::Only(&[Language::Java]),
                set: &[
                    ("AlignAfterOpenBracket", L::Bool(false)),
                    ("AlignOperands", L::Bool(false)),
                    ("AlignTrailingComments", L::Bool(false)),
                    ("AllowShortFunctionsOnASingleLine", L::Enum("Empty")),
                    ("AllowShortIfStatementsOnASingleLine", L::Bool(false)),
                    ("AlwaysBreakBeforeMultilineStrings", L::Bool(false)),
                    ("BreakBeforeBinaryOperators", L::Enum("NonAssignment")),
                    ("ColumnLimit", L::Int(100)),
                    ("SpaceAfterCStyleCast", L::Bool(true)),
                    ("SpacesBeforeTrailingComments", L::Int(1)),
                ],
            },
            Layer {
                when: When::Only(&[Language::JavaScript]),
                set: &[
                    ("BreakBeforeTernaryOperators", L::Bool(false)),
                    ("MaxEmptyLinesToKeep", L::Int(3)),
                    ("SpacesInContainerLiterals", L::Bool(false)),
                    ("AllowShortFunctionsOnASingleLine", L::Enum("Inline")),
                    ("AlwaysBreakBeforeMultilineStrings", L::Bool(false)),
                ],
            },
            Layer {
                when: When::Only(&[Language::Proto]),
                set: &[
                    ("AllowShortFunctionsOnASingleLine", L::Enum("None")),
                    ("SpacesInContainerLiterals", L::Bool(false)),
                ],
            },
        ],
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
                ("Cpp11BracedListStyle", L::Bool(false)),
                ("ConstructorInitializerAllOnOneLineOrOnePerLine", L::Bool(true)),
                ("DerivePointerAlignment", L::Bool(true)),
                ("IndentCaseLabels", L::Bool(true)),
                ("ObjCSpaceAfterProperty", L::Bool(true)),
                ("ObjCSpaceBeforeProtocolList", L::Bool(false)),
                ("PenaltyReturnTypeOnItsOwnLine", L::Int(200)),
                ("PointerAlignment", L::Enum("Left")),
                ("Standard", L::Enum("Cpp03")),
            ],
        }],
        aliases: &[],
    },
    Profile {
        name: "none",
        base: Base::Style("llvm"),
        layers: &[Layer {
            when: When::Always,
            set: &[("DisableFormat", L::Bool(true))],
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
                ("AlignAfterOpenBracket", L::Bool(false)),
                ("AlignOperands", L::Bool(false)),
                ("AlignTrailingComments", L::Bool(false)),
                ("BreakBeforeBinaryOperators", L::Enum("All")),
                ("BreakBeforeBraces", L::Enum("Stroustrup")),
                ("BreakConstructorInitializersBeforeComma", L::Bool(true)),
                ("Cpp11BracedListStyle", L::Bool(false)),
                ("ColumnLimit", L::Int(0)),
                ("IndentWidth", L::Int(4)),
                ("NamespaceIndentation", L::Enum("Inner")),
                ("ObjCBlockIndentWidth", L::Int(4)),
                ("ObjCSpaceAfterProperty", L::Bool(true)),
                ("PointerAlignment", L::Enum("Left")),
                ("Standard", L::Enum("Cpp03")),
            ],
        }],
        aliases: &[],
    },
];

static LEGACY: &[Legacy] = &[
    Legacy::Alias {
        name: "IndentFunctionDeclarationAfterType",
        target: "IndentWrappedFunctionNames",
    },
    Legacy::Alias {
        name: "SpaceAfterControlStatementKeyword",
        target: "SpaceBeforeParens",
    },
    Legacy::Alias {
        name: "PointerBindsToType",
        target: "PointerAlignment",
    },
    Legacy::Alias {
        name: "DerivePointerBinding",
        target: "DerivePointerAlignment",
    },
];

pub struct V3_6Schema;

impl Schema for V3_6Schema {
    fn version(&self) -> Version {
        Version::V3_6
    }

    fn fields(&self) -> &'static [F] {
        FIELDS
    }

    fn languages(&self) -> &'static [Language] {
        &[
            Language::Cpp,
            Language::Java,
            Language::JavaScript,
            Language::Proto,
        ]
    }

    fn baseline(&self) -> &'static [(&'static str, L)] {
        BASELINE
    }

    fn profiles(&self) -> &'static [Profile] {
        PROFILES
    }

    fn legacy(&self) -> &'static [Legacy] {
        LEGACY
    }

    fn rules(&self) -> Rules {
        Rules {
            strict_keys: false,
            empty_input: EmptyInput::NoDocuments,
            language_field: true,
            inherit_sentinel: false,
        }
    }
}
