//! Error types with exit codes

use thiserror::Error;

/// Main error type for style configuration operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StyleError {
    /// The input is not a well-formed sequence of YAML mappings
    #[error("Malformed configuration: {message}")]
    MalformedText { message: String },

    /// A key the schema does not know (strict versions only)
    #[error("Unknown option: '{key}'")]
    UnknownOption { key: String },

    /// A known key carrying a value of the wrong shape or spelling
    #[error("Invalid value for '{field}': {value}")]
    InvalidValue { field: String, value: String },

    /// A document other than the first omits `Language`
    #[error("Document #{index} has no Language; only the first document may omit it")]
    MisplacedDefault { index: usize },

    /// Two documents configure the same language
    #[error("Language {language} is configured more than once")]
    DuplicateLanguage { language: String },

    /// No document applies to the requested language
    #[error("No configuration applies to language {language}")]
    UnsuitableLanguage { language: String },

    /// A named cross-field constraint failed
    #[error("Constraint '{name}' violated: {message}")]
    ConstraintViolation { name: String, message: String },

    /// `BasedOnStyle` or a requested style does not exist in this version
    #[error("Unknown style '{name}' for version {version}")]
    UnknownProfile { name: String, version: String },

    /// The language tag cannot be represented in this version
    #[error("Language {language} is not supported by version {version}")]
    UnsupportedLanguage { language: String, version: String },

    /// A migration step has no usable style in the next version
    #[error("Style '{style}' is not compatible with version {version} (available: {available})")]
    IncompatibleStyle {
        style: String,
        version: String,
        available: String,
    },

    /// An unrecognised version identifier
    #[error("Unknown version: '{version}'")]
    UnknownVersion { version: String },

    /// Batch manifest problems
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Filesystem Error - file operation failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },
}

impl StyleError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::MalformedText { .. } => 1,
            Self::UnknownOption { .. } => 2,
            Self::InvalidValue { .. } => 3,
            Self::MisplacedDefault { .. } => 4,
            Self::DuplicateLanguage { .. } => 5,
            Self::UnsuitableLanguage { .. } => 6,
            Self::ConstraintViolation { .. } => 7,
            Self::UnknownProfile { .. } => 8,
            Self::UnsupportedLanguage { .. } => 9,
            Self::IncompatibleStyle { .. } => 10,
            Self::UnknownVersion { .. } => 11,
            Self::Configuration { .. } => 12,
            Self::Filesystem { .. } => 13,
        }
    }

    /// Create a malformed text error
    #[inline]
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedText {
            message: message.into(),
        }
    }

    /// Create an unknown option error
    #[inline]
    pub fn unknown_option<S: Into<String>>(key: S) -> Self {
        Self::UnknownOption { key: key.into() }
    }

    /// Create an invalid value error
    #[inline]
    pub fn invalid_value<F: Into<String>, V: Into<String>>(field: F, value: V) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a constraint violation error
    #[inline]
    pub fn constraint<N: Into<String>, M: Into<String>>(name: N, message: M) -> Self {
        Self::ConstraintViolation {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }

    /// Name of the violated constraint, if this is a constraint violation
    #[must_use]
    pub fn constraint_name(&self) -> Option<&str> {
        match self {
            Self::ConstraintViolation { name, .. } => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let errors = [
            StyleError::malformed("x"),
            StyleError::unknown_option("x"),
            StyleError::invalid_value("x", "y"),
            StyleError::MisplacedDefault { index: 1 },
            StyleError::DuplicateLanguage {
                language: "Cpp".to_owned(),
            },
            StyleError::UnsuitableLanguage {
                language: "Cpp".to_owned(),
            },
            StyleError::constraint("x", "y"),
            StyleError::UnknownProfile {
                name: "x".to_owned(),
                version: "16".to_owned(),
            },
            StyleError::UnsupportedLanguage {
                language: "Json".to_owned(),
                version: "12".to_owned(),
            },
            StyleError::IncompatibleStyle {
                style: "microsoft".to_owned(),
                version: "3.6".to_owned(),
                available: "llvm".to_owned(),
            },
            StyleError::UnknownVersion {
                version: "2".to_owned(),
            },
            StyleError::configuration("x"),
            StyleError::filesystem("x"),
        ];
        let mut codes: Vec<i32> = errors.iter().map(StyleError::exit_code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn constraint_name_is_exposed() {
        let err = StyleError::constraint("trailing-comma-bin-packing", "nope");
        assert_eq!(err.constraint_name(), Some("trailing-comma-bin-packing"));
        assert_eq!(StyleError::malformed("x").constraint_name(), None);
    }
}
