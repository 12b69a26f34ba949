//! Declarative tables each schema version is authored in

use super::Language;
use super::value::{FieldKind, Lit, Value};
use crate::error::StyleError;
use crate::record::StyleRecord;

/// A named, version-scoped bundle of defaults
#[derive(Debug)]
pub struct Profile {
    /// Lowercase name, matched case-insensitively
    pub name: &'static str,
    pub base: Base,
    pub layers: &'static [Layer],
    /// `(requested, computed as)`: resolve another language, then retag
    pub aliases: &'static [(Language, Language)],
}

/// Where a profile starts from before its layers apply
#[derive(Debug, Clone, Copy)]
pub enum Base {
    /// The version-wide baseline
    Baseline,
    /// Another profile, for the requested language
    Style(&'static str),
    /// Another profile, always for one fixed language
    StyleFor(&'static str, Language),
}

#[derive(Debug)]
pub struct Layer {
    pub when: When,
    pub set: &'static [(&'static str, Lit)],
}

#[derive(Debug, Clone, Copy)]
pub enum When {
    Always,
    Only(&'static [Language]),
    Except(&'static [Language]),
}

impl When {
    #[must_use]
    pub fn applies(self, language: Language) -> bool {
        match self {
            Self::Always => true,
            Self::Only(languages) => languages.contains(&language),
            Self::Except(languages) => !languages.contains(&language),
        }
    }
}

/// Combines several legacy keys into canonical fields
///
/// Receives each legacy key's value in declaration order (`None` when the
/// document does not set it) and the document's `BasedOnStyle`.
pub type GroupFn =
    fn(&[Option<Value>], &mut StyleRecord, Option<&str>) -> Result<(), StyleError>;

/// An input-only spelling of a canonical field
#[derive(Debug)]
pub enum Legacy {
    /// Read with the target field's own type
    Alias {
        name: &'static str,
        target: &'static str,
    },
    /// Read with its own type and translated through `map`; values without
    /// an entry are ignored. With `only_if`, applies only while the target
    /// still holds that value.
    Mapped {
        name: &'static str,
        kind: FieldKind,
        target: &'static str,
        map: &'static [(Lit, Lit)],
        only_if: Option<Lit>,
    },
    Group {
        names: &'static [(&'static str, FieldKind)],
        apply: GroupFn,
    },
}

impl Legacy {
    /// Keys this entry consumes
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        match self {
            Self::Alias { name, .. } | Self::Mapped { name, .. } => vec![*name],
            Self::Group { names, .. } => names.iter().map(|(name, _)| *name).collect(),
        }
    }
}

/// A composite enum field equivalent to a full sub-record assignment
#[derive(Debug)]
pub struct Preset {
    /// Enum field selecting the preset
    pub selector: &'static str,
    /// Record field the selection expands into
    pub target: &'static str,
    /// Variant leaving the sub-record under user control
    pub custom: &'static str,
    /// Full sub-record assignment every expansion starts from
    pub reset: &'static [(&'static str, Lit)],
    pub variants: &'static [PresetVariant],
}

#[derive(Debug)]
pub struct PresetVariant {
    pub variant: &'static str,
    /// Sub-record flags on top of `reset`
    pub flags: &'static [(&'static str, Lit)],
    /// Assignments to other top-level fields
    pub side: &'static [(&'static str, Lit)],
}

impl Preset {
    #[must_use]
    pub fn variant(&self, name: &str) -> Option<&PresetVariant> {
        self.variants.iter().find(|v| v.variant == name)
    }
}

/// A named cross-field rule a selected record must satisfy
#[derive(Debug)]
pub struct Constraint {
    pub name: &'static str,
    pub message: &'static str,
    pub violated: fn(&StyleRecord) -> bool,
}
