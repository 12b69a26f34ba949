//! Schema 16: alignment records, qualifier ordering, `InheritParentConfig`
//!
//! Enumerations unchanged since 12 are shared with [`super::v12`]; only the
//! ones that gained variants or spellings are redeclared here.

use super::table::{Base, Constraint, Layer, Legacy, Preset, PresetVariant, Profile, When};
use super::v12::{
    AFTER_CONTROL_STATEMENT, ATTACH_WRAPPING, BIN_PACK, BINARY_OPERATOR, BIT_FIELD_COLON_SPACING,
    BRACE_BREAKING, BRACE_VARIANTS, BREAK_CONSTRUCTOR_INITIALIZERS, BREAK_TEMPLATE_DECLARATIONS,
    DEFINITION_RETURN_TYPE_BREAKING, EMPTY_LINE_BEFORE_ACCESS_MODIFIER, ESCAPED_NEWLINE_ALIGNMENT,
    INCLUDE_BLOCKS, INCLUDE_CATEGORY, INDENT_EXTERN_BLOCK, JAVA_IMPORT_GROUPS, JAVASCRIPT_QUOTE,
    LANGUAGE_STANDARD, NAMESPACE_INDENTATION, OPERAND_ALIGNMENT, POINTER_ALIGNMENT,
    PP_DIRECTIVE_INDENT, RETURN_TYPE_BREAKING, SHORT_BLOCK, SHORT_FUNCTION, SHORT_LAMBDA,
    SORT_JAVA_STATIC_IMPORT, SPACE_AROUND_POINTER_QUALIFIERS, TRAILING_COMMA, USE_TAB,
    derive_return_type_break, trailing_comma_bin_packing,
};
use super::value::{EnumDef, FieldDef as F, FieldKind as K, Lit as L, ShorthandDef, Value};
use super::{EmptyInput, Language, Rules, Schema, Version};
use crate::error::StyleError;
use crate::record::StyleRecord;
use std::collections::HashSet;

static ATTRIBUTE_BREAKING: EnumDef = EnumDef::new(
    "AttributeBreakingStyle",
    &[("Always", "Always"), ("Leave", "Leave"), ("Never", "Never")],
);

static ARRAY_INITIALIZER_ALIGNMENT: EnumDef = EnumDef::new(
    "ArrayInitializerAlignmentStyle",
    &[("None", "None"), ("Left", "Left"), ("Right", "Right")],
);

static BRACKET_ALIGNMENT: EnumDef = EnumDef::new(
    "BracketAlignmentStyle",
    &[
        ("Align", "Align"),
        ("DontAlign", "DontAlign"),
        ("AlwaysBreak", "AlwaysBreak"),
        ("BlockIndent", "BlockIndent"),
        ("true", "Align"),
        ("false", "DontAlign"),
    ],
);

static BREAK_BEFORE_CONCEPT_DECLARATIONS: EnumDef = EnumDef::new(
    "BreakBeforeConceptDeclarationsStyle",
    &[
        ("Never", "Never"),
        ("Allowed", "Allowed"),
        ("Always", "Always"),
        ("true", "Always"),
        ("false", "Allowed"),
    ],
);

static BREAK_BEFORE_INLINE_ASM_COLON: EnumDef = EnumDef::new(
    "BreakBeforeInlineASMColonStyle",
    &[
        ("Never", "Never"),
        ("OnlyMultiline", "OnlyMultiline"),
        ("Always", "Always"),
    ],
);

static BREAK_INHERITANCE_LIST: EnumDef = EnumDef::new(
    "BreakInheritanceListStyle",
    &[
        ("BeforeColon", "BeforeColon"),
        ("BeforeComma", "BeforeComma"),
        ("AfterColon", "AfterColon"),
        ("AfterComma", "AfterComma"),
    ],
);

static EMPTY_LINE_AFTER_ACCESS_MODIFIER: EnumDef = EnumDef::new(
    "EmptyLineAfterAccessModifierStyle",
    &[("Never", "Never"), ("Leave", "Leave"), ("Always", "Always")],
);

static LAMBDA_BODY_INDENTATION: EnumDef = EnumDef::new(
    "LambdaBodyIndentationKind",
    &[("Signature", "Signature"), ("OuterScope", "OuterScope")],
);

static LINE_ENDING: EnumDef = EnumDef::new(
    "LineEndingStyle",
    &[
        ("LF", "LF"),
        ("CRLF", "CRLF"),
        ("DeriveLF", "DeriveLF"),
        ("DeriveCRLF", "DeriveCRLF"),
    ],
);

static PACK_CONSTRUCTOR_INITIALIZERS: EnumDef = EnumDef::new(
    "PackConstructorInitializersStyle",
    &[
        ("Never", "Never"),
        ("BinPack", "BinPack"),
        ("CurrentLine", "CurrentLine"),
        ("NextLine", "NextLine"),
    ],
);

static QUALIFIER_ALIGNMENT: EnumDef = EnumDef::new(
    "QualifierAlignmentStyle",
    &[
        ("Leave", "Leave"),
        ("Left", "Left"),
        ("Right", "Right"),
        ("Custom", "Custom"),
    ],
);

static REFERENCE_ALIGNMENT: EnumDef = EnumDef::new(
    "ReferenceAlignmentStyle",
    &[
        ("Pointer", "Pointer"),
        ("Middle", "Middle"),
        ("Left", "Left"),
        ("Right", "Right"),
    ],
);

static REQUIRES_CLAUSE_POSITION: EnumDef = EnumDef::new(
    "RequiresClausePositionStyle",
    &[
        ("OwnLine", "OwnLine"),
        ("WithPreceding", "WithPreceding"),
        ("WithFollowing", "WithFollowing"),
        ("SingleLine", "SingleLine"),
    ],
);

static REQUIRES_EXPRESSION_INDENTATION: EnumDef = EnumDef::new(
    "RequiresExpressionIndentationKind",
    &[("Keyword", "Keyword"), ("OuterScope", "OuterScope")],
);

static SEPARATE_DEFINITION: EnumDef = EnumDef::new(
    "SeparateDefinitionStyle",
    &[("Leave", "Leave"), ("Always", "Always"), ("Never", "Never")],
);

static SHORT_IF: EnumDef = EnumDef::new(
    "ShortIfStyle",
    &[
        ("Never", "Never"),
        ("WithoutElse", "WithoutElse"),
        ("OnlyFirstIf", "OnlyFirstIf"),
        ("AllIfsAndElse", "AllIfsAndElse"),
        ("Always", "OnlyFirstIf"),
        ("false", "Never"),
        ("true", "WithoutElse"),
    ],
);

static SORT_INCLUDES: EnumDef = EnumDef::new(
    "SortIncludesOptions",
    &[
        ("Never", "Never"),
        ("CaseInsensitive", "CaseInsensitive"),
        ("CaseSensitive", "CaseSensitive"),
        ("false", "Never"),
        ("true", "CaseSensitive"),
    ],
);

static SORT_USING_DECLARATIONS: EnumDef = EnumDef::new(
    "SortUsingDeclarationsOptions",
    &[
        ("Never", "Never"),
        ("Lexicographic", "Lexicographic"),
        ("LexicographicNumeric", "LexicographicNumeric"),
        ("false", "Never"),
        ("true", "LexicographicNumeric"),
    ],
);

static SPACE_BEFORE_PARENS: EnumDef = EnumDef::new(
    "SpaceBeforeParensStyle",
    &[
        ("Never", "Never"),
        ("ControlStatements", "ControlStatements"),
        (
            "ControlStatementsExceptControlMacros",
            "ControlStatementsExceptControlMacros",
        ),
        ("NonEmptyParentheses", "NonEmptyParentheses"),
        ("Always", "Always"),
        ("Custom", "Custom"),
        ("false", "Never"),
        ("true", "ControlStatements"),
        (
            "ControlStatementsExceptForEachMacros",
            "ControlStatementsExceptControlMacros",
        ),
    ],
);

static SPACES_IN_ANGLES: EnumDef = EnumDef::new(
    "SpacesInAnglesStyle",
    &[
        ("Never", "Never"),
        ("Always", "Always"),
        ("Leave", "Leave"),
        ("false", "Never"),
        ("true", "Always"),
    ],
);

static TRAILING_COMMENTS_KIND: EnumDef = EnumDef::new(
    "TrailingCommentsAlignmentKinds",
    &[("Leave", "Leave"), ("Always", "Always"), ("Never", "Never")],
);

static RAW_STRING_LANGUAGE: EnumDef = EnumDef::new(
    "LanguageKind",
    &[
        ("None", "None"),
        ("Cpp", "Cpp"),
        ("CSharp", "CSharp"),
        ("Java", "Java"),
        ("JavaScript", "JavaScript"),
        ("Json", "Json"),
        ("ObjC", "ObjC"),
        ("Proto", "Proto"),
        ("TableGen", "TableGen"),
        ("TextProto", "TextProto"),
    ],
);

static ALIGN_CONSECUTIVE_FIELDS: &[F] = &[
    F::new("Enabled", K::Bool),
    F::new("AcrossEmptyLines", K::Bool),
    F::new("AcrossComments", K::Bool),
    F::new("AlignCompound", K::Bool),
    F::new("PadOperators", K::Bool),
];

const fn consecutive(
    enabled: bool,
    empty_lines: bool,
    comments: bool,
) -> [(&'static str, L); 5] {
    [
        ("Enabled", L::Bool(enabled)),
        ("AcrossEmptyLines", L::Bool(empty_lines)),
        ("AcrossComments", L::Bool(comments)),
        ("AlignCompound", L::Bool(false)),
        ("PadOperators", L::Bool(true)),
    ]
}

static ALIGN_NONE: [(&str, L); 5] = consecutive(false, false, false);
static ALIGN_CONSECUTIVE_ONLY: [(&str, L); 5] = consecutive(true, false, false);
static ALIGN_ACROSS_EMPTY_LINES: [(&str, L); 5] = consecutive(true, true, false);
static ALIGN_ACROSS_COMMENTS: [(&str, L); 5] = consecutive(true, false, true);
static ALIGN_ACROSS_BOTH: [(&str, L); 5] = consecutive(true, true, true);

static ALIGN_CONSECUTIVE: ShorthandDef = ShorthandDef {
    name: "AlignConsecutiveStyle",
    fields: ALIGN_CONSECUTIVE_FIELDS,
    spellings: &[
        ("None", &ALIGN_NONE),
        ("Consecutive", &ALIGN_CONSECUTIVE_ONLY),
        ("AcrossEmptyLines", &ALIGN_ACROSS_EMPTY_LINES),
        ("AcrossComments", &ALIGN_ACROSS_COMMENTS),
        ("AcrossEmptyLinesAndComments", &ALIGN_ACROSS_BOTH),
        ("true", &ALIGN_CONSECUTIVE_ONLY),
        ("false", &ALIGN_NONE),
    ],
};

static TRAILING_COMMENTS_FIELDS: &[F] = &[
    F::new("Kind", K::Enum(&TRAILING_COMMENTS_KIND)),
    F::new("OverEmptyLines", K::Unsigned),
];

static TRAILING_LEAVE: &[(&str, L)] = &[("Kind", L::Enum("Leave")), ("OverEmptyLines", L::Int(0))];
static TRAILING_ALWAYS: &[(&str, L)] =
    &[("Kind", L::Enum("Always")), ("OverEmptyLines", L::Int(0))];
static TRAILING_NEVER: &[(&str, L)] = &[("Kind", L::Enum("Never")), ("OverEmptyLines", L::Int(0))];

static TRAILING_COMMENTS_ALIGNMENT: ShorthandDef = ShorthandDef {
    name: "TrailingCommentsAlignmentStyle",
    fields: TRAILING_COMMENTS_FIELDS,
    spellings: &[
        ("Leave", TRAILING_LEAVE),
        ("Always", TRAILING_ALWAYS),
        ("Never", TRAILING_NEVER),
        ("true", TRAILING_ALWAYS),
        ("false", TRAILING_NEVER),
    ],
};

static BRACE_WRAPPING: &[F] = &[
    F::new("AfterCaseLabel", K::Bool),
    F::new("AfterClass", K::Bool),
    F::new("AfterControlStatement", K::Enum(&AFTER_CONTROL_STATEMENT)),
    F::new("AfterEnum", K::Bool),
    F::new("AfterExternBlock", K::Bool),
    F::new("AfterFunction", K::Bool),
    F::new("AfterNamespace", K::Bool),
    F::new("AfterObjCDeclaration", K::Bool),
    F::new("AfterStruct", K::Bool),
    F::new("AfterUnion", K::Bool),
    F::new("BeforeCatch", K::Bool),
    F::new("BeforeElse", K::Bool),
    F::new("BeforeLambdaBody", K::Bool),
    F::new("BeforeWhile", K::Bool),
    F::new("IndentBraces", K::Bool),
    F::new("SplitEmptyFunction", K::Bool),
    F::new("SplitEmptyRecord", K::Bool),
    F::new("SplitEmptyNamespace", K::Bool),
];

static INTEGER_LITERAL_SEPARATOR: &[F] = &[
    F::new("Binary", K::Int),
    F::new("BinaryMinDigits", K::Int),
    F::new("Decimal", K::Int),
    F::new("DecimalMinDigits", K::Int),
    F::new("Hex", K::Int),
    F::new("HexMinDigits", K::Int),
];

static SPACE_BEFORE_PARENS_OPTIONS: &[F] = &[
    F::new("AfterControlStatements", K::Bool),
    F::new("AfterForeachMacros", K::Bool),
    F::new("AfterFunctionDefinitionName", K::Bool),
    F::new("AfterFunctionDeclarationName", K::Bool),
    F::new("AfterIfMacros", K::Bool),
    F::new("AfterOverloadedOperator", K::Bool),
    F::new("AfterRequiresInClause", K::Bool),
    F::new("AfterRequiresInExpression", K::Bool),
    F::new("BeforeNonEmptyParentheses", K::Bool),
];

static SPACES_IN_LINE_COMMENT_PREFIX: &[F] = &[
    F::new("Minimum", K::Unsigned),
    F::new("Maximum", K::Bound),
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
    F::new("AlignArrayOfStructures", K::Enum(&ARRAY_INITIALIZER_ALIGNMENT)),
    F::new("AlignConsecutiveAssignments", K::Shorthand(&ALIGN_CONSECUTIVE)),
    F::new("AlignConsecutiveBitFields", K::Shorthand(&ALIGN_CONSECUTIVE)),
    F::new("AlignConsecutiveDeclarations", K::Shorthand(&ALIGN_CONSECUTIVE)),
    F::new("AlignConsecutiveMacros", K::Shorthand(&ALIGN_CONSECUTIVE)),
    F::new("AlignEscapedNewlines", K::Enum(&ESCAPED_NEWLINE_ALIGNMENT)),
    F::new("AlignOperands", K::Enum(&OPERAND_ALIGNMENT)),
    F::new("AlignTrailingComments", K::Shorthand(&TRAILING_COMMENTS_ALIGNMENT)),
    F::new("AllowAllArgumentsOnNextLine", K::Bool),
    F::new("AllowAllParametersOfDeclarationOnNextLine", K::Bool),
    F::new("AllowShortBlocksOnASingleLine", K::Enum(&SHORT_BLOCK)),
    F::new("AllowShortCaseLabelsOnASingleLine", K::Bool),
    F::new("AllowShortEnumsOnASingleLine", K::Bool),
    F::new("AllowShortFunctionsOnASingleLine", K::Enum(&SHORT_FUNCTION)),
    F::new("AllowShortIfStatementsOnASingleLine", K::Enum(&SHORT_IF)),
    F::new("AllowShortLambdasOnASingleLine", K::Enum(&SHORT_LAMBDA)),
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
    F::new("BitFieldColonSpacing", K::Enum(&BIT_FIELD_COLON_SPACING)),
    F::new("BraceWrapping", K::Record(BRACE_WRAPPING)),
    F::new("BreakAfterAttributes", K::Enum(&ATTRIBUTE_BREAKING)),
    F::new("BreakAfterJavaFieldAnnotations", K::Bool),
    F::new("BreakArrays", K::Bool),
    F::new("BreakBeforeBinaryOperators", K::Enum(&BINARY_OPERATOR)),
    F::new(
        "BreakBeforeConceptDeclarations",
        K::Enum(&BREAK_BEFORE_CONCEPT_DECLARATIONS),
    ),
    F::new("BreakBeforeBraces", K::Enum(&BRACE_BREAKING)),
    F::new("BreakBeforeInlineASMColon", K::Enum(&BREAK_BEFORE_INLINE_ASM_COLON)),
    F::new("BreakBeforeTernaryOperators", K::Bool),
    F::new(
        "BreakConstructorInitializers",
        K::Enum(&BREAK_CONSTRUCTOR_INITIALIZERS),
    ),
    F::new("BreakInheritanceList", K::Enum(&BREAK_INHERITANCE_LIST)),
    F::new("BreakStringLiterals", K::Bool),
    F::new("ColumnLimit", K::Unsigned),
    F::new("CommentPragmas", K::Str),
    F::new("CompactNamespaces", K::Bool),
    F::new("ConstructorInitializerIndentWidth", K::Unsigned),
    F::new("ContinuationIndentWidth", K::Unsigned),
    F::new("Cpp11BracedListStyle", K::Bool),
    F::new("DerivePointerAlignment", K::Bool),
    F::new("DisableFormat", K::Bool),
    F::new(
        "EmptyLineAfterAccessModifier",
        K::Enum(&EMPTY_LINE_AFTER_ACCESS_MODIFIER),
    ),
    F::new(
        "EmptyLineBeforeAccessModifier",
        K::Enum(&EMPTY_LINE_BEFORE_ACCESS_MODIFIER),
    ),
    F::new("ExperimentalAutoDetectBinPacking", K::Bool),
    F::new("FixNamespaceComments", K::Bool),
    F::new("ForEachMacros", K::StrList),
    F::new("IfMacros", K::StrList),
    F::new("IncludeBlocks", K::Enum(&INCLUDE_BLOCKS)),
    F::new("IncludeCategories", K::RecordList(INCLUDE_CATEGORY)),
    F::new("IncludeIsMainRegex", K::Str),
    F::new("IncludeIsMainSourceRegex", K::Str),
    F::new("IndentAccessModifiers", K::Bool),
    F::new("IndentCaseBlocks", K::Bool),
    F::new("IndentCaseLabels", K::Bool),
    F::new("IndentExternBlock", K::Enum(&INDENT_EXTERN_BLOCK)),
    F::new("IndentGotoLabels", K::Bool),
    F::new("IndentPPDirectives", K::Enum(&PP_DIRECTIVE_INDENT)),
    F::new("IndentRequiresClause", K::Bool),
    F::new("IndentWidth", K::Unsigned),
    F::new("IndentWrappedFunctionNames", K::Bool),
    F::new("InsertBraces", K::Bool),
    F::new("InsertNewlineAtEOF", K::Bool),
    F::new("InsertTrailingCommas", K::Enum(&TRAILING_COMMA)),
    F::new("IntegerLiteralSeparator", K::Record(INTEGER_LITERAL_SEPARATOR)),
    F::new("JavaImportGroups", K::StrList),
    F::new("JavaScriptQuotes", K::Enum(&JAVASCRIPT_QUOTE)),
    F::new("JavaScriptWrapImports", K::Bool),
    F::new("KeepEmptyLinesAtTheStartOfBlocks", K::Bool),
    F::new("LambdaBodyIndentation", K::Enum(&LAMBDA_BODY_INDENTATION)),
    F::new("LineEnding", K::Enum(&LINE_ENDING)),
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
    F::new(
        "PackConstructorInitializers",
        K::Enum(&PACK_CONSTRUCTOR_INITIALIZERS),
    ),
    F::new("PenaltyBreakAssignment", K::Unsigned),
    F::new("PenaltyBreakBeforeFirstCallParameter", K::Unsigned),
    F::new("PenaltyBreakComment", K::Unsigned),
    F::new("PenaltyBreakFirstLessLess", K::Unsigned),
    F::new("PenaltyBreakOpenParenthesis", K::Unsigned),
    F::new("PenaltyBreakString", K::Unsigned),
    F::new("PenaltyBreakTemplateDeclaration", K::Unsigned),
    F::new("PenaltyExcessCharacter", K::Unsigned),
    F::new("PenaltyIndentedWhitespace", K::Unsigned),
    F::new("PenaltyReturnTypeOnItsOwnLine", K::Unsigned),
    F::new("PointerAlignment", K::Enum(&POINTER_ALIGNMENT)),
    F::new("PPIndentWidth", K::Int),
    F::new("QualifierAlignment", K::Enum(&QUALIFIER_ALIGNMENT)),
    F::new("QualifierOrder", K::StrList),
    F::new("RawStringFormats", K::RecordList(RAW_STRING_FORMAT)),
    F::new("ReferenceAlignment", K::Enum(&REFERENCE_ALIGNMENT)),
    F::new("ReflowComments", K::Bool),
    F::new("RemoveBracesLLVM", K::Bool),
    F::new("RemoveSemicolon", K::Bool),
    F::new("RequiresClausePosition", K::Enum(&REQUIRES_CLAUSE_POSITION)),
    F::new(
        "RequiresExpressionIndentation",
        K::Enum(&REQUIRES_EXPRESSION_INDENTATION),
    ),
    F::new("SeparateDefinitionBlocks", K::Enum(&SEPARATE_DEFINITION)),
    F::new("ShortNamespaceLines", K::Unsigned),
    F::new("SortIncludes", K::Enum(&SORT_INCLUDES)),
    F::new("SortJavaStaticImport", K::Enum(&SORT_JAVA_STATIC_IMPORT)),
    F::new("SortUsingDeclarations", K::Enum(&SORT_USING_DECLARATIONS)),
    F::new("SpaceAfterCStyleCast", K::Bool),
    F::new("SpaceAfterLogicalNot", K::Bool),
    F::new("SpaceAfterTemplateKeyword", K::Bool),
    F::new(
        "SpaceAroundPointerQualifiers",
        K::Enum(&SPACE_AROUND_POINTER_QUALIFIERS),
    ),
    F::new("SpaceBeforeAssignmentOperators", K::Bool),
    F::new("SpaceBeforeCaseColon", K::Bool),
    F::new("SpaceBeforeCpp11BracedList", K::Bool),
    F::new("SpaceBeforeCtorInitializerColon", K::Bool),
    F::new("SpaceBeforeInheritanceColon", K::Bool),
    F::new("SpaceBeforeParens", K::Enum(&SPACE_BEFORE_PARENS)),
    F::new("SpaceBeforeParensOptions", K::Record(SPACE_BEFORE_PARENS_OPTIONS)),
    F::new("SpaceBeforeRangeBasedForLoopColon", K::Bool),
    F::new("SpaceBeforeSquareBrackets", K::Bool),
    F::new("SpaceInEmptyBlock", K::Bool),
    F::new("SpaceInEmptyParentheses", K::Bool),
    F::new("SpacesBeforeTrailingComments", K::Unsigned),
    F::new("SpacesInAngles", K::Enum(&SPACES_IN_ANGLES)),
    F::new("SpacesInConditionalStatement", K::Bool),
    F::new("SpacesInContainerLiterals", K::Bool),
    F::new("SpacesInCStyleCastParentheses", K::Bool),
    F::new(
        "SpacesInLineCommentPrefix",
        K::Record(SPACES_IN_LINE_COMMENT_PREFIX),
    ),
    F::new("SpacesInParentheses", K::Bool),
    F::new("SpacesInSquareBrackets", K::Bool),
    F::new("Standard", K::Enum(&LANGUAGE_STANDARD)),
    F::new("StatementAttributeLikeMacros", K::StrList),
    F::new("StatementMacros", K::StrList),
    F::new("TabWidth", K::Unsigned),
    F::new("TypenameMacros", K::StrList),
    F::new("UseTab", K::Enum(&USE_TAB)),
    F::new("WhitespaceSensitiveMacros", K::StrList),
];

static PARENS_RESET: &[(&str, L)] = &[
    ("AfterControlStatements", L::Bool(false)),
    ("AfterForeachMacros", L::Bool(false)),
    ("AfterFunctionDefinitionName", L::Bool(false)),
    ("AfterFunctionDeclarationName", L::Bool(false)),
    ("AfterIfMacros", L::Bool(false)),
    ("AfterOverloadedOperator", L::Bool(false)),
    ("AfterRequiresInClause", L::Bool(false)),
    ("AfterRequiresInExpression", L::Bool(false)),
    ("BeforeNonEmptyParentheses", L::Bool(false)),
];

static CONTROL_STATEMENT_PARENS: &[(&str, L)] = &[
    ("AfterControlStatements", L::Bool(true)),
    ("AfterForeachMacros", L::Bool(true)),
    ("AfterIfMacros", L::Bool(true)),
];

static BASELINE: &[(&str, L)] = &[
    ("AccessModifierOffset", L::Int(-2)),
    ("AlignAfterOpenBracket", L::Enum("Align")),
    ("AlignArrayOfStructures", L::Enum("None")),
    ("AlignConsecutiveAssignments", L::Enum("None")),
    ("AlignConsecutiveBitFields", L::Enum("None")),
    ("AlignConsecutiveDeclarations", L::Enum("None")),
    ("AlignConsecutiveMacros", L::Enum("None")),
    ("AlignEscapedNewlines", L::Enum("Right")),
    ("AlignOperands", L::Enum("Align")),
    ("AlignTrailingComments", L::Enum("Always")),
    ("AllowAllArgumentsOnNextLine", L::Bool(true)),
    ("AllowAllParametersOfDeclarationOnNextLine", L::Bool(true)),
    ("AllowShortBlocksOnASingleLine", L::Enum("Never")),
    ("AllowShortCaseLabelsOnASingleLine", L::Bool(false)),
    ("AllowShortEnumsOnASingleLine", L::Bool(true)),
    ("AllowShortFunctionsOnASingleLine", L::Enum("All")),
    ("AllowShortIfStatementsOnASingleLine", L::Enum("Never")),
    ("AllowShortLambdasOnASingleLine", L::Enum("All")),
    ("AllowShortLoopsOnASingleLine", L::Bool(false)),
    ("AlwaysBreakAfterDefinitionReturnType", L::Enum("None")),
    ("AlwaysBreakAfterReturnType", L::Enum("None")),
    ("AlwaysBreakBeforeMultilineStrings", L::Bool(false)),
    ("AlwaysBreakTemplateDeclarations", L::Enum("MultiLine")),
    ("AttributeMacros", L::List(&["__capability"])),
    ("BinPackArguments", L::Bool(true)),
    ("BinPackParameters", L::Bool(true)),
    ("BitFieldColonSpacing", L::Enum("Both")),
    ("BraceWrapping", L::Record(ATTACH_WRAPPING)),
    ("BreakAfterAttributes", L::Enum("Never")),
    ("BreakAfterJavaFieldAnnotations", L::Bool(false)),
    ("BreakArrays", L::Bool(true)),
    ("BreakBeforeBinaryOperators", L::Enum("None")),
    ("BreakBeforeConceptDeclarations", L::Enum("Always")),
    ("BreakBeforeBraces", L::Enum("Attach")),
    ("BreakBeforeInlineASMColon", L::Enum("OnlyMultiline")),
    ("BreakBeforeTernaryOperators", L::Bool(true)),
    ("BreakConstructorInitializers", L::Enum("BeforeColon")),
    ("BreakInheritanceList", L::Enum("BeforeColon")),
    ("BreakStringLiterals", L::Bool(true)),
    ("ColumnLimit", L::Int(80)),
    ("CommentPragmas", L::Str("^ IWYU pragma:")),
    ("CompactNamespaces", L::Bool(false)),
    ("ConstructorInitializerIndentWidth", L::Int(4)),
    ("ContinuationIndentWidth", L::Int(4)),
    ("Cpp11BracedListStyle", L::Bool(true)),
    ("DerivePointerAlignment", L::Bool(false)),
    ("DisableFormat", L::Bool(false)),
    ("EmptyLineAfterAccessModifier", L::Enum("Never")),
    ("EmptyLineBeforeAccessModifier", L::Enum("LogicalBlock")),
    ("ExperimentalAutoDetectBinPacking", L::Bool(false)),
    ("FixNamespaceComments", L::Bool(true)),
    ("ForEachMacros", L::List(&["foreach", "Q_FOREACH", "BOOST_FOREACH"])),
    ("IfMacros", L::List(&["KJ_IF_MAYBE"])),
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
    ("IndentAccessModifiers", L::Bool(false)),
    ("IndentCaseBlocks", L::Bool(false)),
    ("IndentCaseLabels", L::Bool(false)),
    ("IndentExternBlock", L::Enum("AfterExternBlock")),
    ("IndentGotoLabels", L::Bool(true)),
    ("IndentPPDirectives", L::Enum("None")),
    ("IndentRequiresClause", L::Bool(true)),
    ("IndentWidth", L::Int(2)),
    ("IndentWrappedFunctionNames", L::Bool(false)),
    ("InsertBraces", L::Bool(false)),
    ("InsertNewlineAtEOF", L::Bool(false)),
    ("InsertTrailingCommas", L::Enum("None")),
    (
        "IntegerLiteralSeparator",
        L::Record(&[
            ("Binary", L::Int(0)),
            ("BinaryMinDigits", L::Int(0)),
            ("Decimal", L::Int(0)),
            ("DecimalMinDigits", L::Int(0)),
            ("Hex", L::Int(0)),
            ("HexMinDigits", L::Int(0)),
        ]),
    ),
    ("JavaImportGroups", L::List(&[])),
    ("JavaScriptQuotes", L::Enum("Leave")),
    ("JavaScriptWrapImports", L::Bool(true)),
    ("KeepEmptyLinesAtTheStartOfBlocks", L::Bool(true)),
    ("LambdaBodyIndentation", L::Enum("Signature")),
    ("LineEnding", L::Enum("DeriveLF")),
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
    ("PackConstructorInitializers", L::Enum("BinPack")),
    ("PenaltyBreakAssignment", L::Int(2)),
    ("PenaltyBreakBeforeFirstCallParameter", L::Int(19)),
    ("PenaltyBreakComment", L::Int(300)),
    ("PenaltyBreakFirstLessLess", L::Int(120)),
    ("PenaltyBreakOpenParenthesis", L::Int(0)),
    ("PenaltyBreakString", L::Int(1000)),
    ("PenaltyBreakTemplateDeclaration", L::Int(10)),
    ("PenaltyExcessCharacter", L::Int(1_000_000)),
    ("PenaltyIndentedWhitespace", L::Int(0)),
    ("PenaltyReturnTypeOnItsOwnLine", L::Int(60)),
    ("PointerAlignment", L::Enum("Right")),
    ("PPIndentWidth", L::Int(-1)),
    ("QualifierAlignment", L::Enum("Leave")),
    ("QualifierOrder", L::List(&[])),
    ("RawStringFormats", L::Records(&[])),
    ("ReferenceAlignment", L::Enum("Pointer")),
    ("ReflowComments", L::Bool(true)),
    ("RemoveBracesLLVM", L::Bool(false)),
    ("RemoveSemicolon", L::Bool(false)),
    ("RequiresClausePosition", L::Enum("OwnLine")),
    ("RequiresExpressionIndentation", L::Enum("OuterScope")),
    ("SeparateDefinitionBlocks", L::Enum("Leave")),
    ("ShortNamespaceLines", L::Int(1)),
    ("SortIncludes", L::Enum("CaseSensitive")),
    ("SortJavaStaticImport", L::Enum("Before")),
    ("SortUsingDeclarations", L::Enum("LexicographicNumeric")),
    ("SpaceAfterCStyleCast", L::Bool(false)),
    ("SpaceAfterLogicalNot", L::Bool(false)),
    ("SpaceAfterTemplateKeyword", L::Bool(true)),
    ("SpaceAroundPointerQualifiers", L::Enum("Default")),
    ("SpaceBeforeAssignmentOperators", L::Bool(true)),
    ("SpaceBeforeCaseColon", L::Bool(false)),
    ("SpaceBeforeCpp11BracedList", L::Bool(false)),
    ("SpaceBeforeCtorInitializerColon", L::Bool(true)),
    ("SpaceBeforeInheritanceColon", L::Bool(true)),
    ("SpaceBeforeParens", L::Enum("ControlStatements")),
    ("SpaceBeforeParensOptions", L::Record(CONTROL_STATEMENT_PARENS)),
    ("SpaceBeforeRangeBasedForLoopColon", L::Bool(true)),
    ("SpaceBeforeSquareBrackets", L::Bool(false)),
    ("SpaceInEmptyBlock", L::Bool(false)),
    ("SpaceInEmptyParentheses", L::Bool(false)),
    ("SpacesBeforeTrailingComments", L::Int(1)),
    ("SpacesInAngles", L::Enum("Never")),
    ("SpacesInConditionalStatement", L::Bool(false)),
    ("SpacesInContainerLiterals", L::Bool(true)),
    ("SpacesInCStyleCastParentheses", L::Bool(false)),
    (
        "SpacesInLineCommentPrefix",
        L::Record(&[("Minimum", L::Int(1)), ("Maximum", L::Int(-1))]),
    ),
    ("SpacesInParentheses", L::Bool(false)),
    ("SpacesInSquareBrackets", L::Bool(false)),
    ("Standard", L::Enum("Latest")),
    ("StatementAttributeLikeMacros", L::List(&["Q_EMIT"])),
    ("StatementMacros", L::List(&["Q_UNUSED", "QT_REQUIRE_VERSION"])),
    ("TabWidth", L::Int(8)),
    ("TypenameMacros", L::List(&[])),
    ("UseTab", L::Enum("Never")),
    (
        "WhitespaceSensitiveMacros",
        L::List(&[
            "BOOST_PP_STRINGIZE",
            "CF_SWIFT_NAME",
            "NS_SWIFT_NAME",
            "PP_STRINGIZE",
            "STRINGIZE",
        ]),
    ),
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
                    ("SortIncludes", L::Enum("CaseSensitive")),
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
                    ("PackConstructorInitializers", L::Enum("NextLine")),
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
                                ("CanonicalDelimiter", L::Str("pb")),
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
                    ("AlignTrailingComments", L::Enum("Never")),
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
        layers: &[
            Layer {
                when: When::Only(&[Language::TableGen]),
                set: &[("SpacesInContainerLiterals", L::Bool(false))],
            },
            Layer {
                when: When::Only(&[Language::Json]),
                set: &[("ColumnLimit", L::Int(0))],
            },
        ],
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
                ("SortIncludes", L::Enum("Never")),
                ("SortUsingDeclarations", L::Enum("Never")),
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
                ("AlignTrailingComments", L::Enum("Never")),
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

fn flag(values: &[Option<Value>], index: usize) -> Option<bool> {
    values.get(index).and_then(Option::as_ref).and_then(Value::as_bool)
}

/// Folds `AllowAllConstructorInitializersOnNextLine` and
/// `ConstructorInitializerAllOnOneLineOrOnePerLine` into
/// `PackConstructorInitializers`
///
/// The one-per-line flag defaults on for the Google family, so the fold runs
/// the other way round there.
fn pack_constructor_initializers(
    values: &[Option<Value>],
    record: &mut StyleRecord,
    based_on: Option<&str>,
) -> Result<(), StyleError> {
    let google_family = based_on.is_some_and(|style| {
        style.eq_ignore_ascii_case("google") || style.eq_ignore_ascii_case("chromium")
    });
    let on_next_line = flag(values, 0).unwrap_or(true);
    let on_current_line = flag(values, 1).unwrap_or(google_family);
    let current = record
        .get("PackConstructorInitializers")
        .and_then(Value::as_enum);

    let packed = if google_family {
        match current {
            Some("NextLine") if !on_current_line => Some("BinPack"),
            Some("NextLine") if !on_next_line => Some("CurrentLine"),
            _ => None,
        }
    } else {
        match current {
            Some("BinPack") if on_current_line => {
                Some(if on_next_line { "NextLine" } else { "CurrentLine" })
            }
            _ => None,
        }
    };
    match packed {
        Some(variant) => record.set("PackConstructorInitializers", Value::Enum(variant)),
        None => Ok(()),
    }
}

/// Folds `DeriveLineEnding` and `UseCRLF` into `LineEnding`
fn line_ending(
    values: &[Option<Value>],
    record: &mut StyleRecord,
    _based_on: Option<&str>,
) -> Result<(), StyleError> {
    let derive = flag(values, 0).unwrap_or(true);
    let crlf = flag(values, 1).unwrap_or(false);
    if record.get("LineEnding").and_then(Value::as_enum) != Some("DeriveLF") {
        return Ok(());
    }
    let ending = match (derive, crlf) {
        (false, true) => "CRLF",
        (false, false) => "LF",
        (true, true) => "DeriveCRLF",
        (true, false) => return Ok(()),
    };
    record.set("LineEnding", Value::Enum(ending))
}

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
        name: "IndentRequires",
        target: "IndentRequiresClause",
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
    Legacy::Group {
        names: &[
            ("AllowAllConstructorInitializersOnNextLine", K::Bool),
            ("ConstructorInitializerAllOnOneLineOrOnePerLine", K::Bool),
        ],
        apply: pack_constructor_initializers,
    },
    Legacy::Group {
        names: &[("DeriveLineEnding", K::Bool), ("UseCRLF", K::Bool)],
        apply: line_ending,
    },
];

static PRESETS: &[Preset] = &[
    Preset {
        selector: "BreakBeforeBraces",
        target: "BraceWrapping",
        custom: "Custom",
        reset: ATTACH_WRAPPING,
        variants: BRACE_VARIANTS,
    },
    Preset {
        selector: "SpaceBeforeParens",
        target: "SpaceBeforeParensOptions",
        custom: "Custom",
        reset: PARENS_RESET,
        variants: &[
            PresetVariant {
                variant: "Never",
                flags: &[],
                side: &[],
            },
            PresetVariant {
                variant: "ControlStatements",
                flags: CONTROL_STATEMENT_PARENS,
                side: &[],
            },
            PresetVariant {
                variant: "ControlStatementsExceptControlMacros",
                flags: &[("AfterControlStatements", L::Bool(true))],
                side: &[],
            },
            PresetVariant {
                variant: "NonEmptyParentheses",
                flags: &[("BeforeNonEmptyParentheses", L::Bool(true))],
                side: &[],
            },
            PresetVariant {
                variant: "Always",
                flags: &[],
                side: &[],
            },
        ],
    },
];

const QUALIFIERS: &[&str] = &[
    "const",
    "volatile",
    "static",
    "inline",
    "constexpr",
    "restrict",
    "friend",
    "type",
];

fn qualifier_order(record: &StyleRecord) -> Option<&[String]> {
    let aligned = record
        .get("QualifierAlignment")
        .and_then(Value::as_enum)
        .is_some_and(|alignment| alignment != "Leave");
    if aligned {
        record.get("QualifierOrder").and_then(Value::as_list)
    } else {
        None
    }
}

fn qualifier_order_empty(record: &StyleRecord) -> bool {
    qualifier_order(record).is_some_and(<[String]>::is_empty)
}

fn qualifier_order_invalid(record: &StyleRecord) -> bool {
    qualifier_order(record)
        .is_some_and(|order| order.iter().any(|q| !QUALIFIERS.contains(&q.as_str())))
}

fn qualifier_order_duplicate(record: &StyleRecord) -> bool {
    qualifier_order(record).is_some_and(|order| {
        let unique: HashSet<&String> = order.iter().collect();
        unique.len() != order.len()
    })
}

fn qualifier_order_missing_type(record: &StyleRecord) -> bool {
    qualifier_order(record).is_some_and(|order| !order.iter().any(|q| q == "type"))
}

// Checked in order; the first violation is reported.
static CONSTRAINTS: &[Constraint] = &[
    Constraint {
        name: "trailing-comma-bin-packing",
        message: "trailing comma insertion cannot be used with bin packing",
        violated: trailing_comma_bin_packing,
    },
    Constraint {
        name: "qualifier-order-empty",
        message: "Missing QualifierOrder",
        violated: qualifier_order_empty,
    },
    Constraint {
        name: "qualifier-order-invalid",
        message: "Invalid qualifier specified in QualifierOrder",
        violated: qualifier_order_invalid,
    },
    Constraint {
        name: "qualifier-order-duplicate",
        message: "Duplicate qualifier specified in QualifierOrder",
        violated: qualifier_order_duplicate,
    },
    Constraint {
        name: "qualifier-order-missing-type",
        message: "Missing type in QualifierOrder",
        violated: qualifier_order_missing_type,
    },
];

pub struct V16Schema;

impl Schema for V16Schema {
    fn version(&self) -> Version {
        Version::V16
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
            Language::Json,
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
            empty_input: EmptyInput::Ambient,
            language_field: true,
            inherit_sentinel: true,
        }
    }

    fn finish(&self, record: &mut StyleRecord) -> Result<(), StyleError> {
        derive_return_type_break(record)?;

        let order: &[&str] = match record.get("QualifierAlignment").and_then(Value::as_enum) {
            Some("Left") => &["const", "volatile", "type"],
            Some("Right") => &["type", "const", "volatile"],
            _ => &[],
        };
        if !order.is_empty() {
            let order = order.iter().map(|q| (*q).to_owned()).collect();
            record.set("QualifierOrder", Value::List(order))?;
        }

        clamp_comment_prefix(record)
    }
}

/// `Minimum` never exceeds a bounded `Maximum`
fn clamp_comment_prefix(record: &mut StyleRecord) -> Result<(), StyleError> {
    let Some(Value::Record(prefix)) = record.get("SpacesInLineCommentPrefix") else {
        return Ok(());
    };
    let (Some(minimum), Some(maximum)) = (
        prefix.first().and_then(Value::as_int),
        prefix.get(1).and_then(Value::as_int),
    ) else {
        return Ok(());
    };
    if maximum == -1 || minimum <= maximum {
        return Ok(());
    }
    record.set(
        "SpacesInLineCommentPrefix",
        Value::Record(vec![Value::Int(maximum), Value::Int(maximum)]),
    )
}
