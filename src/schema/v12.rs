//! Schema 12: strict keys, brace-wrapping preset, include categories

use super::table::{Base, Constraint, Layer, Legacy, Preset, PresetVariant, Profile, When};
use super::value::{EnumDef, FieldDef as F, FieldKind as K, Lit as L, Value};
use super::{EmptyInput, Language, Rules, Schema, Version};
use crate::error::StyleError;
use crate::record::StyleRecord;

pub(crate) static LANGUAGE_STANDARD: EnumDef = EnumDef::new(
    "LanguageStandard",
    &[
        ("c++03", "Cpp03"),
        ("C++03", "Cpp03"),
        ("Cpp03", "Cpp03"),
        ("c++11", "Cpp11"),
        ("C++11", "Cpp11"),
        ("c++14", "Cpp14"),
        ("c++17", "Cpp17"),
        ("c++20", "Cpp20"),
        ("Latest", "Latest"),
        ("Cpp11", "Latest"),
        ("Auto", "Auto"),
    ],
);

pub(crate) static USE_TAB: EnumDef = EnumDef::new(
    "UseTabStyle",
    &[
        ("Never", "Never"),
        ("false", "Never"),
        ("Always", "Always"),
        ("true", "Always"),
        ("ForIndentation", "ForIndentation"),
        ("ForContinuationAndIndentation", "ForContinuationAndIndentation"),
        ("AlignWithSpaces", "AlignWithSpaces"),
    ],
);

pub(crate) static JAVASCRIPT_QUOTE: EnumDef = EnumDef::new(
    "JavaScriptQuoteStyle",
    &[("Leave", "Leave"), ("Single", "Single"), ("Double", "Double")],
);

pub(crate) static SHORT_BLOCK: EnumDef = EnumDef::new(
    "ShortBlockStyle",
    &[
        ("Never", "Never"),
        ("false", "Never"),
        ("Always", "Always"),
        ("true", "Always"),
        ("Empty", "Empty"),
    ],
);

pub(crate) static SHORT_FUNCTION: EnumDef = EnumDef::new(
    "ShortFunctionStyle",
    &[
        ("None", "None"),
        ("false", "None"),
        ("All", "All"),
        ("true", "All"),
        ("Inline", "Inline"),
        ("InlineOnly", "InlineOnly"),
        ("Empty", "Empty"),
    ],
);

static ALIGN_CONSECUTIVE: EnumDef = EnumDef::new(
    "AlignConsecutiveStyle",
    &[
        ("None", "None"),
        ("Consecutive", "Consecutive"),
        ("AcrossEmptyLines", "AcrossEmptyLines"),
        ("AcrossComments", "AcrossComments"),
        ("AcrossEmptyLinesAndComments", "AcrossEmptyLinesAndComments"),
        ("true", "Consecutive"),
        ("false", "None"),
    ],
);

static SHORT_IF: EnumDef = EnumDef::new(
    "ShortIfStyle",
    &[
        ("Never", "Never"),
        ("Always", "Always"),
        ("WithoutElse", "WithoutElse"),
        ("false", "Never"),
        ("true", "WithoutElse"),
    ],
);

pub(crate) static SHORT_LAMBDA: EnumDef = EnumDef::new(
    "ShortLambdaStyle",
    &[
        ("None", "None"),
        ("false", "None"),
        ("Empty", "Empty"),
        ("Inline", "Inline"),
        ("All", "All"),
        ("true", "All"),
    ],
);

pub(crate) static BIN_PACK: EnumDef = EnumDef::new(
    "BinPackStyle",
    &[("Auto", "Auto"), ("Always", "Always"), ("Never", "Never")],
);

pub(crate) static TRAILING_COMMA: EnumDef =
    EnumDef::new("TrailingCommaStyle", &[("None", "None"), ("Wrapped", "Wrapped")]);

pub(crate) static BINARY_OPERATOR: EnumDef = EnumDef::new(
    "BinaryOperatorStyle",
    &[
        ("All", "All"),
        ("true", "All"),
        ("None", "None"),
        ("false", "None"),
        ("NonAssignment", "NonAssignment"),
    ],
);

pub(crate) static BRACE_BREAKING: EnumDef = EnumDef::new(
    "BraceBreakingStyle",
    &[
        ("Attach", "Attach"),
        ("Linux", "Linux"),
        ("Mozilla", "Mozilla"),
        ("Stroustrup", "Stroustrup"),
        ("Allman", "Allman"),
        ("Whitesmiths", "Whitesmiths"),
        ("GNU", "GNU"),
        ("WebKit", "WebKit"),
        ("Custom", "Custom"),
    ],
);

pub(crate) static AFTER_CONTROL_STATEMENT: EnumDef = EnumDef::new(
    "BraceWrappingAfterControlStatementStyle",
    &[
        ("Never", "Never"),
        ("MultiLine", "MultiLine"),
        ("Always", "Always"),
        ("false", "Never"),
        ("true", "Always"),
    ],
);

pub(crate) static BREAK_CONSTRUCTOR_INITIALIZERS: EnumDef = EnumDef::new(
    "BreakConstructorInitializersStyle",
    &[
        ("BeforeColon", "BeforeColon"),
        ("BeforeComma", "BeforeComma"),
        ("AfterColon", "AfterColon"),
    ],
);

static BREAK_INHERITANCE_LIST: EnumDef = EnumDef::new(
    "BreakInheritanceListStyle",
    &[
        ("BeforeColon", "BeforeColon"),
        ("BeforeComma", "BeforeComma"),
        ("AfterColon", "AfterColon"),
    ],
);

pub(crate) static EMPTY_LINE_BEFORE_ACCESS_MODIFIER: EnumDef = EnumDef::new(
    "EmptyLineBeforeAccessModifierStyle",
    &[
        ("Never", "Never"),
        ("Leave", "Leave"),
        ("LogicalBlock", "LogicalBlock"),
        ("Always", "Always"),
    ],
);

pub(crate) static PP_DIRECTIVE_INDENT: EnumDef = EnumDef::new(
    "PPDirectiveIndentStyle",
    &[
        ("None", "None"),
        ("AfterHash", "AfterHash"),
        ("BeforeHash", "BeforeHash"),
    ],
);

pub(crate) static INDENT_EXTERN_BLOCK: EnumDef = EnumDef::new(
    "IndentExternBlockStyle",
    &[
        ("AfterExternBlock", "AfterExternBlock"),
        ("Indent", "Indent"),
        ("NoIndent", "NoIndent"),
        ("true", "Indent"),
        ("false", "NoIndent"),
    ],
);

pub(crate) static RETURN_TYPE_BREAKING: EnumDef = EnumDef::new(
    "ReturnTypeBreakingStyle",
    &[
        ("None", "None"),
        ("All", "All"),
        ("TopLevel", "TopLevel"),
        ("TopLevelDefinitions", "TopLevelDefinitions"),
        ("AllDefinitions", "AllDefinitions"),
    ],
);

pub(crate) static BREAK_TEMPLATE_DECLARATIONS: EnumDef = EnumDef::new(
    "BreakTemplateDeclarationsStyle",
    &[
        ("No", "No"),
        ("MultiLine", "MultiLine"),
        ("Yes", "Yes"),
        ("false", "MultiLine"),
        ("true", "Yes"),
    ],
);

pub(crate) static DEFINITION_RETURN_TYPE_BREAKING: EnumDef = EnumDef::new(
    "DefinitionReturnTypeBreakingStyle",
    &[
        ("None", "None"),
        ("All", "All"),
        ("TopLevel", "TopLevel"),
        ("false", "None"),
        ("true", "All"),
    ],
);

pub(crate) static NAMESPACE_INDENTATION: EnumDef = EnumDef::new(
    "NamespaceIndentationKind",
    &[("None", "None"), ("Inner", "Inner"), ("All", "All")],
);

static BRACKET_ALIGNMENT: EnumDef = EnumDef::new(
    "BracketAlignmentStyle",
    &[
        ("Align", "Align"),
        ("DontAlign", "DontAlign"),
        ("AlwaysBreak", "AlwaysBreak"),
        ("true", "Align"),
        ("false", "DontAlign"),
    ],
);

pub(crate) static ESCAPED_NEWLINE_ALIGNMENT: EnumDef = EnumDef::new(
    "EscapedNewlineAlignmentStyle",
    &[
        ("DontAlign", "DontAlign"),
        ("Left", "Left"),
        ("Right", "Right"),
        ("true", "Left"),
        ("false", "Right"),
    ],
);

pub(crate) static OPERAND_ALIGNMENT: EnumDef = EnumDef::new(
    "OperandAlignmentStyle",
    &[
        ("DontAlign", "DontAlign"),
        ("Align", "Align"),
        ("AlignAfterOperator", "AlignAfterOperator"),
        ("true", "Align"),
        ("false", "DontAlign"),
    ],
);

pub(crate) static POINTER_ALIGNMENT: EnumDef = EnumDef::new(
    "PointerAlignmentStyle",
    &[
        ("Middle", "Middle"),
        ("Left", "Left"),
        ("Right", "Right"),
        ("true", "Left"),
        ("false", "Right"),
    ],
);

pub(crate) static SPACE_AROUND_POINTER_QUALIFIERS: EnumDef = EnumDef::new(
    "SpaceAroundPointerQualifiersStyle",
    &[
        ("Default", "Default"),
        ("Before", "Before"),
        ("After", "After"),
        ("Both", "Both"),
    ],
);

static SPACE_BEFORE_PARENS: EnumDef = EnumDef::new(
    "SpaceBeforeParensOptions",
    &[
        ("Never", "Never"),
        ("ControlStatements", "ControlStatements"),
        (
            "ControlStatementsExceptForEachMacros",
            "ControlStatementsExceptForEachMacros",
        ),
        ("NonEmptyParentheses", "NonEmptyParentheses"),
        ("Always", "Always"),
        ("false", "Never"),
        ("true", "ControlStatements"),
    ],
);

pub(crate) static BIT_FIELD_COLON_SPACING: EnumDef = EnumDef::new(
    "BitFieldColonSpacingStyle",
    &[
        ("Both", "Both"),
        ("None", "None"),
        ("Before", "Before"),
        ("After", "After"),
    ],
);

pub(crate) static SORT_JAVA_STATIC_IMPORT: EnumDef = EnumDef::new(
    "SortJavaStaticImportOptions",
    &[("Before", "Before"), ("After", "After")],
);

pub(crate) static INCLUDE_BLOCKS: EnumDef = EnumDef::new(
    "IncludeBlocksStyle",
    &[
        ("Preserve", "Preserve"),
        ("Merge", "Merge"),
        ("Regroup", "Regroup"),
    ],
);

static RAW_STRING_LANGUAGE: EnumDef = EnumDef::new(
    "LanguageKind",
    &[
        ("None", "None"),
        ("Cpp", "Cpp"),
        ("Java", "Java"),
        ("JavaScript", "JavaScript"),
        ("ObjC", "ObjC"),
        ("Proto", "Proto"),
        ("TableGen", "TableGen"),
        ("TextProto", "TextProto"),
        ("CSharp", "CSharp"),
    ],
);

static BRACE_WRAPPING: &[F] = &[
    F::new("AfterCaseLabel", K::Bool),
    F::new("AfterClass", K::Bool),
    F::new("AfterControlStatement", K::Enum(&AFTER_CONTROL_STATEMENT)),
    F::new("AfterEnum", K::Bool),
    F::new("AfterFunction", K::Bool),
    F::new("AfterNamespace", K::Bool),
    F::new("AfterObjCDeclaration", K::Bool),
    F::new("AfterStruct", K::Bool),
    F::new("AfterUnion", K::Bool),
    F::new("AfterExternBlock", K::Bool),
    F::new("BeforeCatch", K::Bool),
    F::new("BeforeElse", K::Bool),
    F::new("BeforeLambdaBody", K::Bool),
    F::new("BeforeWhile", K::Bool),
    F::new("IndentBraces", K::Bool),
    F::new("SplitEmptyFunction", K::Bool),
    F::new("SplitEmptyRecord", K::Bool),
    F::new("SplitEmptyNamespace", K::Bool),
];

pub(crate) static INCLUDE_CATEGORY: &[F] = &[
    F::new("Regex", K::Str),
    F::new("Priority", K::Int),
    F::new("SortPriority", K::Int),
    F::new("CaseSensitive", K::Bool),
];

static RAW_STRING_FORMAT: &[F] = &[
    F::new("Language", K::Enum(&RAW_STRING_LANGUAGE)),
    F::new("Delimiters", K::StrList),
    F::new("EnclosingFunctions", K::StrList),
    F::new("CanonicalDelimiter", K::Str),
    F::new("BasedOnStyle", K::Str),
];

static FIELDS: &[F] = &[
    F::new("AccessModifierOffset", K::Int),
    F::new("AlignAfterOpenBracket", K::Enum(&BRACKET_ALIGNMENT)),
    F::new("AlignConsecutiveMacros", K::Enum(&ALIGN_CONSECUTIVE)),
    F::new("AlignConsecutiveAssignments", K::Enum(&ALIGN_CONSECUTIVE)),
    F::new("AlignConsecutiveBitFields", K::Enum(&ALIGN_CONSECUTIVE)),
    F::new("AlignConsecutiveDeclarations", K::Enum(&ALIGN_CONSECUTIVE)),
    F::new("AlignEscapedNewlines", K::Enum(&ESCAPED_NEWLINE_ALIGNMENT)),
    F::new("AlignOperands", K::Enum(&OPERAND_ALIGNMENT)),
    F::new("AlignTrailingComments", K::Bool),
    F::new("AllowAllArgumentsOnNextLine", K::Bool),
    F::new("AllowAllConstructorInitializersOnNextLine", K::Bool),
    F::new("AllowAllParametersOfDeclarationOnNextLine", K::Bool),
    F::new("AllowShortEnumsOnASingleLine", K::Bool),
    F::new("AllowShortBlocksOnASingleLine", K::Enum(&SHORT_BLOCK)),
    F::new("AllowShortCaseLabelsOnASingleLine", K::Bool),
    F::new("AllowShortFunctionsOnASingleLine", K::Enum(&SHORT_FUNCTION)),
    F::new("AllowShortLambdasOnASingleLine", K::Enum(&SHORT_LAMBDA)),
    F::new("AllowShortIfStatementsOnASingleLine", K::Enum(&SHORT_IF)),
    F::new("AllowShortLoopsOnASingleLine", K::Bool),
    F::new(
        "AlwaysBreakAfterDefinitionReturnType",
        K::Enum(&DEFINITION_RETURN_TYPE_BREAKING),
    ),
    F::new("AlwaysBreakAfterReturnType", K::Enum(&RETURN_TYPE_BREAKING)),
    F::new("AlwaysBreakBeforeMultilineStrings", K::Bool),
    F::new(
        "AlwaysBreakTemplateDeclarations",
        K::Enum(&BREAK_TEMPLATE_DECLARATIONS),
    ),
    F::new("AttributeMacros", K::StrList),
    F::new("BinPackArguments", K::Bool),
    F::new("BinPackParameters", K::Bool),
    F::new("BraceWrapping", K::Record(BRACE_WRAPPING)),
    F::new("BreakBeforeBinaryOperators", K::Enum(&BINARY_OPERATOR)),
    F::new("BreakBeforeConceptDeclarations", K::Bool),
    F::new("BreakBeforeBraces", K::Enum(&BRACE_BREAKING)),
    F::new("BreakInheritanceList", K::Enum(&BREAK_INHERITANCE_LIST)),
    F::new("BreakBeforeTernaryOperators", K::Bool),
    F::new(
        "BreakConstructorInitializers",
        K::Enum(&BREAK_CONSTRUCTOR_INITIALIZERS),
    ),
    F::new("BreakAfterJavaFieldAnnotations", K::Bool),
    F::new("BreakStringLiterals", K::Bool),
    F::new("ColumnLimit", K::Unsigned),
    F::new("CommentPragmas", K::Str),
    F::new("CompactNamespaces", K::Bool),
    F::new("ConstructorInitializerAllOnOneLineOrOnePerLine", K::Bool),
    F::new("ConstructorInitializerIndentWidth", K::Unsigned),
    F::new("ContinuationIndentWidth", K::Unsigned),
    F::new("Cpp11BracedListStyle", K::Bool),
    F::new("DeriveLineEnding", K::Bool),
    F::new("DerivePointerAlignment", K::Bool),
    F::new("DisableFormat", K::Bool),
    F::new(
        "EmptyLineBeforeAccessModifier",
        K::Enum(&EMPTY_LINE_BEFORE_ACCESS_MODIFIER),
    ),
    F::new("ExperimentalAutoDetectBinPacking", K::Bool),
    F::new("FixNamespaceComments", K::Bool),
    F::new("ForEachMacros", K::StrList),
    F::new("StatementAttributeLikeMacros", K::StrList),
    F::new("IncludeBlocks", K::Enum(&INCLUDE_BLOCKS)),
    F::new("IncludeCategories", K::RecordList(INCLUDE_CATEGORY)),
    F::new("IncludeIsMainRegex", K::Str),
    F::new("IncludeIsMainSourceRegex", K::Str),
    F::new("IndentCaseLabels", K::Bool),
    F::new("IndentCaseBlocks", K::Bool),
    F::new("IndentGotoLabels", K::Bool),
    F::new("IndentPPDirectives", K::Enum(&PP_DIRECTIVE_INDENT)),
    F::new("IndentExternBlock", K::Enum(&INDENT_EXTERN_BLOCK)),
    F::new("IndentRequires", K::Bool),
    F::new("IndentWidth", K::Unsigned),
    F::new("IndentWrappedFunctionNames", K::Bool),
    F::new("InsertTrailingCommas", K::Enum(&TRAILING_COMMA)),
    F::new("JavaImportGroups", K::StrList),
    F::new("JavaScriptQuotes", K::Enum(&JAVASCRIPT_QUOTE)),
    F::new("JavaScriptWrapImports", K::Bool),
    F::new("KeepEmptyLinesAtTheStartOfBlocks", K::Bool),
    F::new("MacroBlockBegin", K::Str),
    F::new("MacroBlockEnd", K::Str),
    F::new("MaxEmptyLinesToKeep", K::Unsigned),
    F::new("NamespaceIndentation", K::Enum(&NAMESPACE_INDENTATION)),
    F::new("NamespaceMacros", K::StrList),
    F::new("ObjCBinPackProtocolList", K::Enum(&BIN_PACK)),
    F::new("ObjCBlockIndentWidth", K::Unsigned),
    F::new("ObjCBreakBeforeNestedBlockParam", K::Bool),
    F::new("ObjCSpaceAfterProperty", K::Bool),
    F::new("ObjCSpaceBeforeProtocolList", K::Bool),
    F::new("PenaltyBreakAssignment", K::Unsigned),
    F::new("PenaltyBreakBeforeFirstCallParameter", K::Unsigned),
    F::new("PenaltyBreakComment", K::Unsigned),
    F::new("PenaltyBreakFirstLessLess", K::Unsigned),
    F::new("PenaltyBreakString", K::Unsigned),
    F::new("PenaltyBreakTemplateDeclaration", K::Unsigned),
    F::new("PenaltyExcessCharacter", K::Unsigned),
    F::new("PenaltyReturnTypeOnItsOwnLine", K::Unsigned),
    F::new("PenaltyIndentedWhitespace", K::Unsigned),
    F::new("PointerAlignment", K::Enum(&POINTER_ALIGNMENT)),
    F::new("RawStringFormats", K::RecordList(RAW_STRING_FORMAT)),
    F::new("ReflowComments", K::Bool),
    F::new("SortIncludes", K::Bool),
    F::new("SortJavaStaticImport", K::Enum(&SORT_JAVA_STATIC_IMPORT)),
    F::new("SortUsingDeclarations", K::Bool),
    F::new("SpaceAfterCStyleCast", K::Bool),
    F::new("SpaceAfterLogicalNot", K::Bool),
    F::new("SpaceAfterTemplateKeyword", K::Bool),
    F::new("SpaceBeforeAssignmentOperators", K::Bool),
    F::new("SpaceBeforeCaseColon", K::Bool),
    F::new("SpaceBeforeCpp11BracedList", K::Bool),
    F::new("SpaceBeforeCtorInitializerColon", K::Bool),
    F::new("SpaceBeforeInheritanceColon", K::Bool),
    F::new("SpaceBeforeParens", K::Enum(&SPACE_BEFORE_PARENS)),
    F::new(
        "SpaceAroundPointerQualifiers",
        K::Enum(&SPACE_AROUND_POINTER_QUALIFIERS),
    ),
    F::new("SpaceBeforeRangeBasedForLoopColon", K::Bool),
    F::new("SpaceInEmptyBlock", K::Bool),
    F::new("SpaceInEmptyParentheses", K::Bool),
    F::new("SpacesBeforeTrailingComments", K::Unsigned),
    F::new("SpacesInAngles", K::Bool),
    F::new("SpacesInConditionalStatement", K::Bool),
    F::new("SpacesInContainerLiterals", K::Bool),
    F::new("SpacesInCStyleCastParentheses", K::Bool),
    F::new("SpacesInParentheses", K::Bool),
    F::new("SpacesInSquareBrackets", K::Bool),
    F::new("SpaceBeforeSquareBrackets", K::Bool),
    F::new("BitFieldColonSpacing", K::Enum(&BIT_FIELD_COLON_SPACING)),
    F::new("Standard", K::Enum(&LANGUAGE_STANDARD)),
    F::new("StatementMacros", K::StrList),
    F::new("TabWidth", K::Unsigned),
    F::new("TypenameMacros", K::StrList),
    F::new("UseCRLF", K::Bool),
    F::new("UseTab", K::Enum(&USE_TAB)),
    F::new("WhitespaceSensitiveMacros", K::StrList),
];

pub(crate) static ATTACH_WRAPPING: &[(&str, L)] = &[
    ("AfterCaseLabel", L::Bool(false)),
    ("AfterClass", L::Bool(false)),
    ("AfterControlStatement", L::Enum("Never")),
    ("AfterEnum", L::Bool(false)),
    ("AfterFunction", L::Bool(false)),
    ("AfterNamespace", L::Bool(false)),
    ("AfterObjCDeclaration", L::Bool(false)),
    ("AfterStruct", L::Bool(false)),
    ("AfterUnion", L::Bool(false)),
    ("AfterExternBlock", L::Bool(false)),
    ("BeforeCatch", L::Bool(false)),
    ("BeforeElse", L::Bool(false)),
    ("BeforeLambdaBody", L::Bool(false)),
    ("BeforeWhile", L::Bool(false)),
    ("IndentBraces", L::Bool(false)),
    ("SplitEmptyFunction", L::Bool(true)),
    ("SplitEmptyRecord", L::Bool(true)),
    ("SplitEmptyNamespace", L::Bool(true)),
];

static BASELINE: &[(&str, L)] = &[
    ("AccessModifierOffset", L::Int(-2)),
    ("AlignAfterOpenBracket", L::Enum("Align")),
    ("AlignConsecutiveMacros", L::Enum("None")),
    ("AlignConsecutiveAssignments", L::Enum("None")),
    ("AlignConsecutiveBitFields", L::Enum("None")),
    ("AlignConsecutiveDeclarations", L::Enum("None")),
    ("AlignEscapedNewlines", L::Enum("Right")),
    ("AlignOperands", L::Enum("Align")),
    ("AlignTrailingComments", L::Bool(true)),
    ("AllowAllArgumentsOnNextLine", L::Bool(true)),
    ("AllowAllConstructorInitializersOnNextLine", L::Bool(true)),
    ("AllowAllParametersOfDeclarationOnNextLine", L::Bool(true)),
    ("AllowShortEnumsOnASingleLine", L::Bool(true)),
    ("AllowShortBlocksOnASingleLine", L::Enum("Never")),
    ("AllowShortCaseLabelsOnASingleLine", L::Bool(false)),
    ("AllowShortFunctionsOnASingleLine", L::Enum("All")),
    ("AllowShortLambdasOnASingleLine", L::Enum("All")),
    ("AllowShortIfStatementsOnASingleLine", L::Enum("Never")),
    ("AllowShortLoopsOnASingleLine", L::Bool(false)),
    ("AlwaysBreakAfterDefinitionReturnType", L::Enum("None")),
    ("AlwaysBreakAfterReturnType", L::Enum("None")),
    ("AlwaysBreakBeforeMultilineStrings", L::Bool(false)),
    ("AlwaysBreakTemplateDeclarations", L::Enum("MultiLine")),
    ("AttributeMacros", L::List(&["__capability"])),
    ("BinPackArguments", L::Bool(true)),
    ("BinPackParameters", L::Bool(true)),
    ("BraceWrapping", L::Record(ATTACH_WRAPPING)),
    ("BreakBeforeBinaryOperators", L::Enum("None")),
    ("BreakBeforeConceptDeclarations", L::Bool(true)),
    ("BreakBeforeBraces", L::Enum("Attach")),
    ("BreakInheritanceList", L::Enum("BeforeColon")),
    ("BreakBeforeTernaryOperators", L::Bool(true)),
    ("BreakConstructorInitializers", L::Enum("BeforeColon")),
    ("BreakAfterJavaFieldAnnotations", L::Bool(false)),
    ("BreakStringLiterals", L::Bool(true)),
    ("ColumnLimit", L::Int(80)),
    ("CommentPragmas", L::Str("^ IWYU pragma:")),
    ("CompactNamespaces", L::Bool(false)),
    ("ConstructorInitializerAllOnOneLineOrOnePerLine", L::Bool(false)),
    ("ConstructorInitializerIndentWidth", L::Int(4)),
    ("ContinuationIndentWidth", L::Int(4)),
    ("Cpp11BracedListStyle", L::Bool(true)),
    ("DeriveLineEnding", L::Bool(true)),
    ("DerivePointerAlignment", L::Bool(false)),
    ("DisableFormat", L::Bool(false)),
    ("EmptyLineBeforeAccessModifier", L::Enum("LogicalBlock")),
    ("ExperimentalAutoDetectBinPacking", L::Bool(false)),
    ("FixNamespaceComments", L::Bool(true)),
    ("ForEachMacros", L::List(&["foreach", "Q_FOREACH", "BOOST_FOREACH"])),
    ("StatementAttributeLikeMacros", L::List(&["Q_EMIT"])),
    ("IncludeBlocks", L::Enum("Preserve")),
    (
        "IncludeCategories",
        L::Records(&[
            &[
                ("Regex", L::Str("^\"(llvm|llvm-c|clang|clang-c)/")),
                ("Priority", L::Int(2)),
            ],
            &[
                ("Regex", L::Str("^(<|\"(gtest|gmock|isl|json)/)")),
                ("Priority", L::Int(3)),
            ],
            &[("Regex", L::Str(".*")), ("Priority", L::Int(1))],
        ]),
    ),
    ("IncludeIsMainRegex", L::Str("(Test)?$")),
    ("IncludeIsMainSourceRegex", L::Str("")),
    ("IndentCaseLabels", L::Bool(false)),
    ("IndentCaseBlocks", L::Bool(false)),
    ("IndentGotoLabels", L::Bool(true)),
    ("IndentPPDirectives", L::Enum("None")),
    ("IndentExternBlock", L::Enum("AfterExternBlock")),
    ("IndentRequires", L::Bool(false)),
    ("IndentWidth", L::Int(2)),
    ("IndentWrappedFunctionNames", L::Bool(false)),
    ("InsertTrailingCommas", L::Enum("None")),
    ("JavaImportGroups", L::List(&[])),
    ("JavaScriptQuotes", L::Enum("Leave")),
    ("JavaScriptWrapImports", L::Bool(true)),
    ("KeepEmptyLinesAtTheStartOfBlocks", L::Bool(true)),
    ("MacroBlockBegin", L::Str("")),
    ("MacroBlockEnd", L::Str("")),
    ("MaxEmptyLinesToKeep", L::Int(1)),
    ("NamespaceIndentation", L::Enum("None")),
    ("NamespaceMacros", L::List(&[])),
    ("ObjCBinPackProtocolList", L::Enum("Auto")),
    ("ObjCBlockIndentWidth", L::Int(2)),
    ("ObjCBreakBeforeNestedBlockParam", L::Bool(true)),
    ("ObjCSpaceAfterProperty", L::Bool(false)),
    ("ObjCSpaceBeforeProtocolList", L::Bool(true)),
    ("PenaltyBreakAssignment", L::Int(2)),
    ("PenaltyBreakBeforeFirstCallParameter", L::Int(19)),
    ("PenaltyBreakComment", L::Int(300)),
    ("PenaltyBreakFirstLessLess", L::Int(120)),
    ("PenaltyBreakString", L::Int(1000)),
    ("PenaltyBreakTemplateDeclaration", L::Int(10)),
    ("PenaltyExcessCharacter", L::Int(1_000_000)),
    ("PenaltyReturnTypeOnItsOwnLine", L::Int(60)),
    ("PenaltyIndentedWhitespace", L::Int(0)),
    ("PointerAlignment", L::Enum("Right")),
    ("RawStringFormats", L::Records(&[])),
    ("ReflowComments", L::Bool(true)),
    ("SortIncludes", L::Bool(true)),
    ("SortJavaStaticImport", L::Enum("Before")),
    ("SortUsingDeclarations", L::Bool(true)),
    ("SpaceAfterCStyleCast", L::Bool(false)),
    ("SpaceAfterLogicalNot", L::Bool(false)),
    ("SpaceAfterTemplateKeyword", L::Bool(true)),
    ("SpaceBeforeAssignmentOperators", L::Bool(true)),
    ("SpaceBeforeCaseColon", L::Bool(false)),
    ("SpaceBeforeCpp11BracedList", L::Bool(false)),
    ("SpaceBeforeCtorInitializerColon", L::Bool(true)),
    ("SpaceBeforeInheritanceColon", L::Bool(true)),
    ("SpaceBeforeParens", L::Enum("ControlStatements")),
    ("SpaceAroundPointerQualifiers", L::Enum("Default")),
    ("SpaceBeforeRangeBasedForLoopColon", L::Bool(true)),
    ("SpaceInEmptyBlock", L::Bool(false)),
    ("SpaceInEmptyParentheses", L::Bool(false)),
    ("SpacesBeforeTrailingComments", L::Int(1)),
    ("SpacesInAngles", L::Bool(false)),
    ("SpacesInConditionalStatement", L::Bool(false)),
    ("SpacesInContainerLiterals", L::Bool(true)),
    ("SpacesInCStyleCastParentheses", L::Bool(false)),
    ("SpacesInParentheses", L::Bool(false)),
    ("SpacesInSquareBrackets", L::Bool(false)),
    ("SpaceBeforeSquareBrackets", L::Bool(false)),
    ("BitFieldColonSpacing", L::Enum("Both")),
    ("Standard", L::Enum("Latest")),
    ("StatementMacros", L::List(&["Q_UNUSED", "QT_REQUIRE_VERSION"])),
    ("TabWidth", L::Int(8)),
    ("TypenameMacros", L::List(&[])),
    ("UseCRLF", L::Bool(false)),
    ("UseTab", L::Enum("Never")),
    (
        "WhitespaceSensitiveMacros",
        L::List(&[
            "STRINGIZE",
            "PP_STRINGIZE",
            "BOOST_PP_STRINGIZE",
            "NS_SWIFT_NAME",
            "CF_SWIFT_NAME",
        ]),
    ),
];

pub(crate) static JAVA_IMPORT_GROUPS: &[&str] = &[
    "android",
    "androidx",
    "com",
    "dalvik",
    "junit",
    "org",
    "com.google.android.apps.chrome",
    "org.chromium",
    "java",
    "javax",
];

static PROFILES: &[Profile] = &[
    Profile {
        name: "chromium",
        base: Base::Style("google"),
        layers: &[
            Layer {
                when: When::Always,
                set: &[("IncludeBlocks", L::Enum("Preserve"))],
            },
            Layer {
                when: When::Only(&[Language::Java]),
                set: &[
                    ("AllowShortIfStatementsOnASingleLine", L::Enum("WithoutElse")),
                    ("BreakAfterJavaFieldAnnotations", L::Bool(true)),
                    ("ContinuationIndentWidth", L::Int(8)),
                    ("IndentWidth", L::Int(4)),
                    ("JavaImportGroups", L::List(JAVA_IMPORT_GROUPS)),
                    ("SortIncludes", L::Bool(true)),
                ],
            },
            Layer {
                when: When::Only(&[Language::JavaScript]),
                set: &[
                    ("AllowShortIfStatementsOnASingleLine", L::Enum("Never")),
                    ("AllowShortLoopsOnASingleLine", L::Bool(false)),
                ],
            },
            Layer {
                when: When::Except(&[Language::Java, Language::JavaScript]),
                set: &[
                    ("AllowAllParametersOfDeclarationOnNextLine", L::Bool(false)),
                    ("AllowShortFunctionsOnASingleLine", L::Enum("Inline")),
                    ("AllowShortIfStatementsOnASingleLine", L::Enum("Never")),
                    ("AllowShortLoopsOnASingleLine", L::Bool(false)),
                    ("BinPackParameters", L::Bool(false)),
                    ("DerivePointerAlignment", L::Bool(false)),
                ],
            },
            Layer {
                when: When::Only(&[Language::ObjC]),
                set: &[("ColumnLimit", L::Int(80))],
            },
        ],
        aliases: &[],
    },
    Profile {
        name: "gnu",
        base: Base::StyleFor("llvm", Language::Cpp),
        layers: &[Layer {
            when: When::Always,
            set: &[
                ("AlwaysBreakAfterDefinitionReturnType", L::Enum("All")),
                ("AlwaysBreakAfterReturnType", L::Enum("AllDefinitions")),
                ("BreakBeforeBinaryOperators", L::Enum("All")),
                ("BreakBeforeBraces", L::Enum("GNU")),
                ("BreakBeforeTernaryOperators", L::Bool(true)),
                ("Cpp11BracedListStyle", L::Bool(false)),
                ("ColumnLimit", L::Int(79)),
                ("FixNamespaceComments", L::Bool(false)),
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
                    ("AlignEscapedNewlines", L::Enum("Left")),
                    ("AllowShortIfStatementsOnASingleLine", L::Enum("WithoutElse")),
                    ("AllowShortLoopsOnASingleLine", L::Bool(true)),
                    ("AlwaysBreakBeforeMultilineStrings", L::Bool(true)),
                    ("AlwaysBreakTemplateDeclarations", L::Enum("Yes")),
                    ("ConstructorInitializerAllOnOneLineOrOnePerLine", L::Bool(true)),
                    ("DerivePointerAlignment", L::Bool(true)),
                    (
                        "IncludeCategories",
                        L::Records(&[
                            &[("Regex", L::Str("^<ext/.*\\.h>")), ("Priority", L::Int(2))],
                            &[("Regex", L::Str("^<.*\\.h>")), ("Priority", L::Int(1))],
                            &[("Regex", L::Str("^<.*")), ("Priority", L::Int(2))],
                            &[("Regex", L::Str(".*")), ("Priority", L::Int(3))],
                        ]),
                    ),
                    ("IncludeIsMainRegex", L::Str("([-_](test|unittest))?$")),
                    ("IncludeBlocks", L::Enum("Regroup")),
                    ("IndentCaseLabels", L::Bool(true)),
                    ("KeepEmptyLinesAtTheStartOfBlocks", L::Bool(false)),
                    ("ObjCBinPackProtocolList", L::Enum("Never")),
                    ("ObjCSpaceAfterProperty", L::Bool(false)),
                    ("ObjCSpaceBeforeProtocolList", L::Bool(true)),
                    ("PointerAlignment", L::Enum("Left")),
                    (
                        "RawStringFormats",
                        L::Records(&[
                            &[
                                ("Language", L::Enum("Cpp")),
                                (
                                    "Delimiters",
                                    L::List(&["cc", "CC", "cpp", "Cpp", "CPP", "c++", "C++"]),
                                ),
                                ("BasedOnStyle", L::Str("google")),
                            ],
                            &[
                                ("Language", L::Enum("TextProto")),
                                ("Delimiters", L::List(&["pb", "PB", "proto", "PROTO"])),
                                (
                                    "EnclosingFunctions",
                                    L::List(&[
                                        "EqualsProto",
                                        "EquivToProto",
                                        "PARSE_PARTIAL_TEXT_PROTO",
                                        "PARSE_TEST_PROTO",
                                        "PARSE_TEXT_PROTO",
                                        "ParseTextOrDie",
                                        "ParseTextProtoOrDie",
                                        "ParseTestProto",
                                        "ParsePartialTestProto",
                                    ]),
                                ),
                                ("BasedOnStyle", L::Str("google")),
                            ],
                        ]),
                    ),
                    ("SpacesBeforeTrailingComments", L::Int(2)),
                    ("Standard", L::Enum("Auto")),
                    ("PenaltyReturnTypeOnItsOwnLine", L::Int(200)),
                    ("PenaltyBreakBeforeFirstCallParameter", L::Int(1)),
                ],
            },
            Layer {
                when: When::Only(&[Language::Java]),
                set: &[
                    ("AlignAfterOpenBracket", L::Enum("DontAlign")),
                    ("AlignOperands", L::Enum("DontAlign")),
                    ("AlignTrailingComments", L::Bool(false)),
                    ("AllowShortFunctionsOnASingleLine", L::Enum("Empty")),
                    ("AllowShortIfStatementsOnASingleLine", L::Enum("Never")),
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
                    ("AlignAfterOpenBracket", L::Enum("AlwaysBreak")),
                    ("AlignOperands", L::Enum("DontAlign")),
                    ("AllowShortFunctionsOnASingleLine", L::Enum("Empty")),
                    ("AllowShortLambdasOnASingleLine", L::Enum("Empty")),
                    ("AlwaysBreakBeforeMultilineStrings", L::Bool(false)),
                    ("BreakBeforeTernaryOperators", L::Bool(false)),
                    ("CommentPragmas", L::Str("(taze:|^/[ \t]*<|tslint:|@see)")),
                    ("MaxEmptyLinesToKeep", L::Int(3)),
                    ("NamespaceIndentation", L::Enum("All")),
                    ("SpacesInContainerLiterals", L::Bool(false)),
                    ("JavaScriptQuotes", L::Enum("Single")),
                    ("JavaScriptWrapImports", L::Bool(false)),
                ],
            },
            Layer {
                when: When::Only(&[Language::Proto]),
                set: &[
                    ("AllowShortFunctionsOnASingleLine", L::Enum("Empty")),
                    ("AlwaysBreakBeforeMultilineStrings", L::Bool(false)),
                    ("SpacesInContainerLiterals", L::Bool(false)),
                    ("Cpp11BracedListStyle", L::Bool(false)),
                    ("BreakStringLiterals", L::Bool(false)),
                ],
            },
            Layer {
                when: When::Only(&[Language::ObjC]),
                set: &[
                    ("AlwaysBreakBeforeMultilineStrings", L::Bool(false)),
                    ("ColumnLimit", L::Int(100)),
                    ("IncludeBlocks", L::Enum("Preserve")),
                ],
            },
            Layer {
                when: When::Only(&[Language::CSharp]),
                set: &[
                    ("AllowShortFunctionsOnASingleLine", L::Enum("Empty")),
                    ("AllowShortIfStatementsOnASingleLine", L::Enum("Never")),
                    ("BreakStringLiterals", L::Bool(false)),
                    ("ColumnLimit", L::Int(100)),
                    ("NamespaceIndentation", L::Enum("All")),
                ],
            },
        ],
        aliases: &[(Language::TextProto, Language::Proto)],
    },
    Profile {
        name: "llvm",
        base: Base::Baseline,
        layers: &[Layer {
            when: When::Only(&[Language::TableGen]),
            set: &[("SpacesInContainerLiterals", L::Bool(false))],
        }],
        aliases: &[],
    },
    Profile {
        name: "microsoft",
        base: Base::Style("llvm"),
        layers: &[Layer {
            when: When::Always,
            set: &[
                ("ColumnLimit", L::Int(120)),
                ("TabWidth", L::Int(4)),
                ("IndentWidth", L::Int(4)),
                ("UseTab", L::Enum("Never")),
                ("BreakBeforeBraces", L::Enum("Custom")),
                (
                    "BraceWrapping",
                    L::Record(&[
                        ("AfterClass", L::Bool(true)),
                        ("AfterControlStatement", L::Enum("Always")),
                        ("AfterEnum", L::Bool(true)),
                        ("AfterFunction", L::Bool(true)),
                        ("AfterNamespace", L::Bool(true)),
                        ("AfterObjCDeclaration", L::Bool(true)),
                        ("AfterStruct", L::Bool(true)),
                        ("AfterExternBlock", L::Bool(true)),
                        ("BeforeCatch", L::Bool(true)),
                        ("BeforeElse", L::Bool(true)),
                        ("BeforeWhile", L::Bool(false)),
                    ]),
                ),
                ("IndentExternBlock", L::Enum("AfterExternBlock")),
                ("PenaltyReturnTypeOnItsOwnLine", L::Int(1000)),
                ("AllowShortEnumsOnASingleLine", L::Bool(false)),
                ("AllowShortFunctionsOnASingleLine", L::Enum("None")),
                ("AllowShortCaseLabelsOnASingleLine", L::Bool(false)),
                ("AllowShortIfStatementsOnASingleLine", L::Enum("Never")),
                ("AllowShortLoopsOnASingleLine", L::Bool(false)),
                ("AlwaysBreakAfterDefinitionReturnType", L::Enum("None")),
                ("AlwaysBreakAfterReturnType", L::Enum("None")),
            ],
        }],
        aliases: &[],
    },
    Profile {
        name: "mozilla",
        base: Base::StyleFor("llvm", Language::Cpp),
        layers: &[Layer {
            when: When::Always,
            set: &[
                ("AllowAllParametersOfDeclarationOnNextLine", L::Bool(false)),
                ("AllowShortFunctionsOnASingleLine", L::Enum("Inline")),
                ("AlwaysBreakAfterReturnType", L::Enum("TopLevel")),
                ("AlwaysBreakAfterDefinitionReturnType", L::Enum("TopLevel")),
                ("AlwaysBreakTemplateDeclarations", L::Enum("Yes")),
                ("BinPackParameters", L::Bool(false)),
                ("BinPackArguments", L::Bool(false)),
                ("BreakBeforeBraces", L::Enum("Mozilla")),
                ("BreakConstructorInitializers", L::Enum("BeforeComma")),
                ("BreakInheritanceList", L::Enum("BeforeComma")),
                ("ConstructorInitializerIndentWidth", L::Int(2)),
                ("ContinuationIndentWidth", L::Int(2)),
                ("Cpp11BracedListStyle", L::Bool(false)),
                ("FixNamespaceComments", L::Bool(false)),
                ("IndentCaseLabels", L::Bool(true)),
                ("ObjCSpaceAfterProperty", L::Bool(true)),
                ("ObjCSpaceBeforeProtocolList", L::Bool(false)),
                ("PenaltyReturnTypeOnItsOwnLine", L::Int(200)),
                ("PointerAlignment", L::Enum("Left")),
                ("SpaceAfterTemplateKeyword", L::Bool(false)),
            ],
        }],
        aliases: &[],
    },
    Profile {
        name: "none",
        base: Base::StyleFor("llvm", Language::Cpp),
        layers: &[Layer {
            when: When::Always,
            set: &[
                ("DisableFormat", L::Bool(true)),
                ("SortIncludes", L::Bool(false)),
                ("SortUsingDeclarations", L::Bool(false)),
            ],
        }],
        aliases: &[],
    },
    Profile {
        name: "webkit",
        base: Base::StyleFor("llvm", Language::Cpp),
        layers: &[Layer {
            when: When::Always,
            set: &[
                ("AccessModifierOffset", L::Int(-4)),
                ("AlignAfterOpenBracket", L::Enum("DontAlign")),
                ("AlignOperands", L::Enum("DontAlign")),
                ("AlignTrailingComments", L::Bool(false)),
                ("AllowShortBlocksOnASingleLine", L::Enum("Empty")),
                ("BreakBeforeBinaryOperators", L::Enum("All")),
                ("BreakBeforeBraces", L::Enum("WebKit")),
                ("BreakConstructorInitializers", L::Enum("BeforeComma")),
                ("Cpp11BracedListStyle", L::Bool(false)),
                ("ColumnLimit", L::Int(0)),
                ("FixNamespaceComments", L::Bool(false)),
                ("IndentWidth", L::Int(4)),
                ("NamespaceIndentation", L::Enum("Inner")),
                ("ObjCBlockIndentWidth", L::Int(4)),
                ("ObjCSpaceAfterProperty", L::Bool(true)),
                ("PointerAlignment", L::Enum("Left")),
                ("SpaceBeforeCpp11BracedList", L::Bool(true)),
                ("SpaceInEmptyBlock", L::Bool(true)),
            ],
        }],
        aliases: &[],
    },
];

static LEGACY: &[Legacy] = &[
    Legacy::Alias {
        name: "AlignEscapedNewlinesLeft",
        target: "AlignEscapedNewlines",
    },
    Legacy::Alias {
        name: "DerivePointerBinding",
        target: "DerivePointerAlignment",
    },
    Legacy::Alias {
        name: "IndentFunctionDeclarationAfterType",
        target: "IndentWrappedFunctionNames",
    },
    Legacy::Alias {
        name: "PointerBindsToType",
        target: "PointerAlignment",
    },
    Legacy::Alias {
        name: "SpaceAfterControlStatementKeyword",
        target: "SpaceBeforeParens",
    },
    Legacy::Mapped {
        name: "BreakBeforeInheritanceComma",
        kind: K::Bool,
        target: "BreakInheritanceList",
        map: &[(L::Bool(true), L::Enum("BeforeComma"))],
        only_if: Some(L::Enum("BeforeColon")),
    },
    Legacy::Mapped {
        name: "BreakConstructorInitializersBeforeComma",
        kind: K::Bool,
        target: "BreakConstructorInitializers",
        map: &[(L::Bool(true), L::Enum("BeforeComma"))],
        only_if: Some(L::Enum("BeforeColon")),
    },
];

/// Brace-wrapping flags each `BreakBeforeBraces` variant stands for
pub(crate) static BRACE_VARIANTS: &[PresetVariant] = &[
    PresetVariant {
        variant: "Attach",
        flags: &[],
        side: &[],
    },
    PresetVariant {
        variant: "Linux",
        flags: &[
            ("AfterClass", L::Bool(true)),
            ("AfterFunction", L::Bool(true)),
            ("AfterNamespace", L::Bool(true)),
        ],
        side: &[],
    },
    PresetVariant {
        variant: "Mozilla",
        flags: &[
            ("AfterClass", L::Bool(true)),
            ("AfterEnum", L::Bool(true)),
            ("AfterFunction", L::Bool(true)),
            ("AfterStruct", L::Bool(true)),
            ("AfterUnion", L::Bool(true)),
            ("AfterExternBlock", L::Bool(true)),
            ("SplitEmptyFunction", L::Bool(true)),
            ("SplitEmptyRecord", L::Bool(false)),
        ],
        side: &[("IndentExternBlock", L::Enum("AfterExternBlock"))],
    },
    PresetVariant {
        variant: "Stroustrup",
        flags: &[
            ("AfterFunction", L::Bool(true)),
            ("BeforeCatch", L::Bool(true)),
            ("BeforeElse", L::Bool(true)),
        ],
        side: &[],
    },
    PresetVariant {
        variant: "Allman",
        flags: &[
            ("AfterCaseLabel", L::Bool(true)),
            ("AfterClass", L::Bool(true)),
            ("AfterControlStatement", L::Enum("Always")),
            ("AfterEnum", L::Bool(true)),
            ("AfterFunction", L::Bool(true)),
            ("AfterNamespace", L::Bool(true)),
            ("AfterObjCDeclaration", L::Bool(true)),
            ("AfterStruct", L::Bool(true)),
            ("AfterUnion", L::Bool(true)),
            ("AfterExternBlock", L::Bool(true)),
            ("BeforeCatch", L::Bool(true)),
            ("BeforeElse", L::Bool(true)),
            ("BeforeLambdaBody", L::Bool(true)),
        ],
        side: &[("IndentExternBlock", L::Enum("AfterExternBlock"))],
    },
    PresetVariant {
        variant: "Whitesmiths",
        flags: &[
            ("AfterCaseLabel", L::Bool(true)),
            ("AfterClass", L::Bool(true)),
            ("AfterControlStatement", L::Enum("Always")),
            ("AfterEnum", L::Bool(true)),
            ("AfterFunction", L::Bool(true)),
            ("AfterNamespace", L::Bool(true)),
            ("AfterObjCDeclaration", L::Bool(true)),
            ("AfterStruct", L::Bool(true)),
            ("AfterExternBlock", L::Bool(true)),
            ("BeforeCatch", L::Bool(true)),
            ("BeforeElse", L::Bool(true)),
            ("BeforeLambdaBody", L::Bool(true)),
        ],
        side: &[("IndentExternBlock", L::Enum("AfterExternBlock"))],
    },
    PresetVariant {
        variant: "GNU",
        flags: &[
            ("AfterCaseLabel", L::Bool(true)),
            ("AfterClass", L::Bool(true)),
            ("AfterControlStatement", L::Enum("Always")),
            ("AfterEnum", L::Bool(true)),
            ("AfterFunction", L::Bool(true)),
            ("AfterNamespace", L::Bool(true)),
            ("AfterObjCDeclaration", L::Bool(true)),
            ("AfterStruct", L::Bool(true)),
            ("AfterUnion", L::Bool(true)),
            ("AfterExternBlock", L::Bool(true)),
            ("BeforeCatch", L::Bool(true)),
            ("BeforeElse", L::Bool(true)),
            ("BeforeWhile", L::Bool(true)),
            ("IndentBraces", L::Bool(true)),
        ],
        side: &[("IndentExternBlock", L::Enum("AfterExternBlock"))],
    },
    PresetVariant {
        variant: "WebKit",
        flags: &[("AfterFunction", L::Bool(true))],
        side: &[],
    },
];

static PRESETS: &[Preset] = &[Preset {
    selector: "BreakBeforeBraces",
    target: "BraceWrapping",
    custom: "Custom",
    reset: ATTACH_WRAPPING,
    variants: BRACE_VARIANTS,
}];

pub(crate) fn trailing_comma_bin_packing(record: &StyleRecord) -> bool {
    let inserts = record
        .get("InsertTrailingCommas")
        .and_then(Value::as_enum)
        .is_some_and(|v| v != "None");
    let bin_packs = record
        .get("BinPackArguments")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    inserts && bin_packs
}

static CONSTRAINTS: &[Constraint] = &[Constraint {
    name: "trailing-comma-bin-packing",
    message: "trailing comma insertion cannot be used with bin packing",
    violated: trailing_comma_bin_packing,
}];

pub struct V12Schema;

impl Schema for V12Schema {
    fn version(&self) -> Version {
        Version::V12
    }

    fn fields(&self) -> &'static [F] {
        FIELDS
    }

    fn languages(&self) -> &'static [Language] {
        &[
            Language::Cpp,
            Language::Java,
            Language::JavaScript,
            Language::ObjC,
            Language::Proto,
            Language::TableGen,
            Language::TextProto,
            Language::CSharp,
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

    fn presets(&self) -> &'static [Preset] {
        PRESETS
    }

    fn constraints(&self) -> &'static [Constraint] {
        CONSTRAINTS
    }

    fn rules(&self) -> Rules {
        Rules {
            strict_keys: true,
            empty_input: EmptyInput::Malformed,
            language_field: true,
            inherit_sentinel: false,
        }
    }

    fn finish(&self, record: &mut StyleRecord) -> Result<(), StyleError> {
        derive_return_type_break(record)
    }
}

/// A definition-only return type break implies the general one when the
/// latter was left at `None`
pub(crate) fn derive_return_type_break(record: &mut StyleRecord) -> Result<(), StyleError> {
    let definition = record
        .get("AlwaysBreakAfterDefinitionReturnType")
        .and_then(Value::as_enum);
    let general = record
        .get("AlwaysBreakAfterReturnType")
        .and_then(Value::as_enum);
    let derived = match (definition, general) {
        (Some("All"), Some("None")) => "AllDefinitions",
        (Some("TopLevel"), Some("None")) => "TopLevelDefinitions",
        _ => return Ok(()),
    };
    record.set("AlwaysBreakAfterReturnType", Value::Enum(derived))
}
