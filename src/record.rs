//! The resolved style record of one schema version

use crate::error::StyleError;
use crate::schema::value::{FieldDef, Lit, Value, assign, field_index, zero_record};
use crate::schema::{Language, Schema, Version};

/// Fully populated configuration for one language under one version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRecord {
    version: Version,
    language: Language,
    values: Vec<Value>,
    inherits_parent: bool,
}

impl StyleRecord {
    /// Every field at its kind's zero value
    pub(crate) fn zeroed(version: Version, language: Language) -> Self {
        Self {
            version,
            language,
            values: zero_record(version.schema().fields()),
            inherits_parent: false,
        }
    }

    #[must_use]
    pub const fn version(&self) -> Version {
        self.version
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Whether the record came from `BasedOnStyle: InheritParentConfig`
    #[must_use]
    pub const fn inherits_parent(&self) -> bool {
        self.inherits_parent
    }

    #[must_use]
    pub fn schema(&self) -> &'static dyn Schema {
        self.version.schema()
    }

    #[must_use]
    pub fn fields(&self) -> &'static [FieldDef] {
        self.schema().fields()
    }

    pub(crate) fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub(crate) fn set_inherits_parent(&mut self, inherits: bool) {
        self.inherits_parent = inherits;
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        field_index(self.fields(), name).and_then(|i| self.values.get(i))
    }

    /// Look up one sub-field of a record field
    #[must_use]
    pub fn get_nested(&self, name: &str, sub: &str) -> Option<&Value> {
        let field = self.schema().field(name)?;
        let index = field_index(field.kind.sub_fields()?, sub)?;
        self.get(name)?.as_record()?.get(index)
    }

    /// Replace a field's value
    ///
    /// # Errors
    ///
    /// Returns `UnknownOption` for names outside the schema and
    /// `InvalidValue` when the value does not fit the field's kind.
    pub fn set(&mut self, name: &str, value: Value) -> Result<(), StyleError> {
        let index =
            field_index(self.fields(), name).ok_or_else(|| StyleError::unknown_option(name))?;
        let field = self
            .fields()
            .get(index)
            .ok_or_else(|| StyleError::unknown_option(name))?;
        if !field.kind.admits(&value) {
            return Err(StyleError::invalid_value(name, value.to_string()));
        }
        if let Some(slot) = self.values.get_mut(index) {
            *slot = value;
        }
        Ok(())
    }

    /// Apply a table of literal assignments
    ///
    /// # Errors
    ///
    /// Returns an error when a name or literal does not fit the schema.
    pub fn assign(&mut self, pairs: &[(&'static str, Lit)]) -> Result<(), StyleError> {
        assign(self.version.schema().fields(), &mut self.values, pairs)
    }

    /// Fields paired with their values, in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&'static FieldDef, &Value)> {
        self.fields().iter().zip(&self.values)
    }

    /// Field-wise equality, ignoring the language tag and inheritance flag
    #[must_use]
    pub fn same_values(&self, other: &Self) -> bool {
        self.version == other.version && self.values == other.values
    }

    /// Names of the fields whose values differ from `other`
    #[must_use]
    pub fn differing_fields(&self, other: &Self) -> Vec<&'static str> {
        self.iter()
            .zip(&other.values)
            .filter(|((_, mine), theirs)| mine != theirs)
            .map(|((field, _), _)| field.name)
            .collect()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    #[test]
    fn set_checks_kind() {
        let mut record = StyleRecord::zeroed(Version::V16, Language::Cpp);
        record.set("ColumnLimit", Value::Int(100)).unwrap();
        assert_eq!(record.get("ColumnLimit"), Some(&Value::Int(100)));
        assert!(record.set("ColumnLimit", Value::Bool(true)).is_err());
        assert!(record.set("ColumnLimit", Value::Int(-5)).is_err());
        assert!(record.set("NoSuchOption", Value::Int(1)).is_err());
    }

    #[test]
    fn nested_lookup() {
        let mut record = StyleRecord::zeroed(Version::V16, Language::Cpp);
        record
            .assign(&[("BraceWrapping", Lit::Record(&[("AfterClass", Lit::Bool(true))]))])
            .unwrap();
        assert_eq!(
            record.get_nested("BraceWrapping", "AfterClass"),
            Some(&Value::Bool(true))
        );
        assert_eq!(record.get_nested("ColumnLimit", "AfterClass"), None);
    }

    #[test]
    fn differing_fields_lists_names() {
        let base = StyleRecord::zeroed(Version::V12, Language::Cpp);
        let mut other = base.clone();
        other.set("IndentWidth", Value::Int(4)).unwrap();
        assert_eq!(other.differing_fields(&base), vec!["IndentWidth"]);
    }
}
