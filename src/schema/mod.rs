//! Versioned option schemas
//!
//! Every supported schema revision implements [`Schema`] once, on top of the
//! shared field algebra in [`value`] and the declarative tables in
//! [`table`]. Nothing here holds mutable state; all tables are `static`.

pub mod table;
pub mod v12;
pub mod v16;
pub mod v3_4;
pub mod v3_6;
pub mod value;

use crate::error::StyleError;
use crate::record::StyleRecord;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use table::{Constraint, Legacy, Preset, Profile};
use value::{FieldDef, Lit};

/// A closed, ordered set of schema revisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Version {
    V3_4,
    V3_6,
    V12,
    V16,
}

impl Version {
    pub const ALL: [Self; 4] = [Self::V3_4, Self::V3_6, Self::V12, Self::V16];

    /// The schema implementing this version
    #[must_use]
    pub fn schema(self) -> &'static dyn Schema {
        match self {
            Self::V3_4 => &v3_4::V3_4Schema,
            Self::V3_6 => &v3_6::V3_6Schema,
            Self::V12 => &v12::V12Schema,
            Self::V16 => &v16::V16Schema,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V3_4 => "3.4",
            Self::V3_6 => "3.6",
            Self::V12 => "12",
            Self::V16 => "16",
        }
    }

    /// The adjacent version towards `target`, if any
    #[must_use]
    pub fn step_towards(self, target: Self) -> Option<Self> {
        let index = Self::ALL.iter().position(|v| *v == self)?;
        match self.cmp(&target) {
            std::cmp::Ordering::Less => Self::ALL.get(index + 1).copied(),
            std::cmp::Ordering::Greater => index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied()),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Version {
    type Err = StyleError;

    /// Accepts `3.4`, `3.4.2`, `v12`, `16.0.6` and similar
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || StyleError::UnknownVersion {
            version: s.to_owned(),
        };
        let pattern = Regex::new(r"^[vV]?(\d+)(?:\.(\d+))?(?:\.\d+)?$")
            .map_err(|e| StyleError::configuration(e.to_string()))?;
        let caps = pattern.captures(s.trim()).ok_or_else(unknown)?;
        let major = caps.get(1).map(|m| m.as_str());
        let minor = caps.get(2).map(|m| m.as_str());
        match (major, minor) {
            (Some("3"), Some("4")) => Ok(Self::V3_4),
            (Some("3"), Some("6")) => Ok(Self::V3_6),
            (Some("12"), _) => Ok(Self::V12),
            (Some("16"), _) => Ok(Self::V16),
            _ => Err(unknown()),
        }
    }
}

/// Formatted-language tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// The language-less default document
    None,
    Cpp,
    CSharp,
    Java,
    JavaScript,
    Json,
    ObjC,
    Proto,
    TableGen,
    TextProto,
}

impl Language {
    pub const ALL: [Self; 9] = [
        Self::Cpp,
        Self::CSharp,
        Self::Java,
        Self::JavaScript,
        Self::Json,
        Self::ObjC,
        Self::Proto,
        Self::TableGen,
        Self::TextProto,
    ];

    /// Spelling used in configuration files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Cpp => "Cpp",
            Self::CSharp => "CSharp",
            Self::Java => "Java",
            Self::JavaScript => "JavaScript",
            Self::Json => "Json",
            Self::ObjC => "ObjC",
            Self::Proto => "Proto",
            Self::TableGen => "TableGen",
            Self::TextProto => "TextProto",
        }
    }

    /// Exact configuration-file spelling
    #[must_use]
    pub fn from_config(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = StyleError;

    /// Case-insensitive, with a few common aliases
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cpp" | "c++" | "c" => Ok(Self::Cpp),
            "csharp" | "c#" | "cs" => Ok(Self::CSharp),
            "java" => Ok(Self::Java),
            "javascript" | "js" | "typescript" | "ts" => Ok(Self::JavaScript),
            "json" => Ok(Self::Json),
            "objc" | "objective-c" => Ok(Self::ObjC),
            "proto" => Ok(Self::Proto),
            "tablegen" | "td" => Ok(Self::TableGen),
            "textproto" | "textpb" => Ok(Self::TextProto),
            _ => Err(StyleError::invalid_value("Language", s)),
        }
    }
}

/// What a version makes of whitespace-only input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyInput {
    /// Rejected as malformed text
    Malformed,
    /// Read as zero documents, so no document suits any language
    NoDocuments,
    /// The ambient default, unchanged
    Ambient,
}

/// Per-version parser behaviour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Unknown keys are an error rather than ignored
    pub strict_keys: bool,
    pub empty_input: EmptyInput,
    /// Documents carry a `Language` key and may be stacked
    pub language_field: bool,
    /// `BasedOnStyle: InheritParentConfig` is recognised
    pub inherit_sentinel: bool,
}

/// One schema revision
pub trait Schema: Sync {
    fn version(&self) -> Version;

    /// Every canonical field, in output order
    fn fields(&self) -> &'static [FieldDef];

    fn languages(&self) -> &'static [Language];

    /// Version-wide baseline; names every field
    fn baseline(&self) -> &'static [(&'static str, Lit)];

    /// Named profiles, in the order `BasedOnStyle` detection tries them
    fn profiles(&self) -> &'static [Profile];

    /// Input-only aliases, applied in this order before canonical fields
    fn legacy(&self) -> &'static [Legacy] {
        &[]
    }

    fn presets(&self) -> &'static [Preset] {
        &[]
    }

    fn constraints(&self) -> &'static [Constraint] {
        &[]
    }

    fn rules(&self) -> Rules;

    /// Derived-field rules run after each document is read
    ///
    /// # Errors
    ///
    /// Returns an error if a derived value cannot be represented.
    fn finish(&self, _record: &mut StyleRecord) -> Result<(), StyleError> {
        Ok(())
    }

    fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields().iter().find(|field| field.name == name)
    }

    fn supports(&self, language: Language) -> bool {
        self.languages().contains(&language)
    }

    /// Profile names, lowercase, in table order
    fn style_names(&self) -> Vec<&'static str> {
        self.profiles().iter().map(|profile| profile.name).collect()
    }
}
