//! Field type algebra shared by every schema version
//!
//! A record is a flat `Vec<Value>` laid out in the order of its schema's
//! field table. Nested records use the same layout against their own
//! sub-field table, so two records compare structurally with `==`.

use crate::error::StyleError;
use std::fmt;

/// A concrete field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<String>),
    /// Canonical variant name taken from the field's [`EnumDef`]
    Enum(&'static str),
    Record(Vec<Value>),
    Records(Vec<Vec<Value>>),
}

impl Value {
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match *self {
            Self::Bool(b) => Some(b),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match *self {
            Self::Int(i) => Some(i),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_enum(&self) -> Option<&'static str> {
        match *self {
            Self::Enum(v) => Some(v),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_record(&self) -> Option<&[Value]> {
        match self {
            Self::Record(values) => Some(values),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => write!(f, "'{s}'"),
            Self::Enum(v) => f.write_str(v),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
            Self::Record(values) => {
                let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
                write!(f, "{{{}}}", parts.join(", "))
            }
            Self::Records(records) => write!(f, "[{} entries]", records.len()),
        }
    }
}

/// One named field of a schema or nested record
#[derive(Debug)]
pub struct FieldDef {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    #[must_use]
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// The shape of a field
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Bool,
    Int,
    Unsigned,
    /// Signed integer where `-1` marks an unbounded maximum
    Bound,
    Str,
    StrList,
    Enum(&'static EnumDef),
    Record(&'static [FieldDef]),
    /// A record that also accepts scalar shorthand spellings
    Shorthand(&'static ShorthandDef),
    RecordList(&'static [FieldDef]),
}

impl FieldKind {
    /// Sub-field table for record-like kinds
    #[must_use]
    pub const fn sub_fields(self) -> Option<&'static [FieldDef]> {
        match self {
            Self::Record(fields) | Self::RecordList(fields) => Some(fields),
            Self::Shorthand(def) => Some(def.fields),
            _ => None,
        }
    }

    /// Whether `value` has the shape this kind stores
    #[must_use]
    pub fn admits(self, value: &Value) -> bool {
        match (self, value) {
            (Self::Bool, Value::Bool(_))
            | (Self::Int, Value::Int(_))
            | (Self::Str, Value::Str(_))
            | (Self::StrList, Value::List(_)) => true,
            (Self::Unsigned, Value::Int(i)) => *i >= 0,
            (Self::Bound, Value::Int(i)) => *i >= -1,
            (Self::Enum(def), Value::Enum(v)) => def.has_variant(v),
            (Self::Record(fields), Value::Record(values)) => record_admits(fields, values),
            (Self::Shorthand(def), Value::Record(values)) => record_admits(def.fields, values),
            (Self::RecordList(fields), Value::Records(records)) => {
                records.iter().all(|values| record_admits(fields, values))
            }
            _ => false,
        }
    }
}

fn record_admits(fields: &[FieldDef], values: &[Value]) -> bool {
    fields.len() == values.len()
        && fields
            .iter()
            .zip(values)
            .all(|(field, value)| field.kind.admits(value))
}

/// Ordered spelling table of a closed enumeration
///
/// Each entry maps an accepted spelling to a variant. The first spelling of
/// a variant is the one written on output; later ones (including legacy
/// `true`/`false`) are accepted on input only.
#[derive(Debug)]
pub struct EnumDef {
    pub name: &'static str,
    pub spellings: &'static [(&'static str, &'static str)],
}

impl EnumDef {
    #[must_use]
    pub const fn new(
        name: &'static str,
        spellings: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self { name, spellings }
    }

    /// Variant for an input spelling (case-sensitive)
    #[must_use]
    pub fn variant(&self, spelling: &str) -> Option<&'static str> {
        self.spellings
            .iter()
            .find(|(s, _)| *s == spelling)
            .map(|&(_, v)| v)
    }

    /// Output spelling of a variant
    #[must_use]
    pub fn canonical(&self, variant: &str) -> Option<&'static str> {
        self.spellings
            .iter()
            .find(|(_, v)| *v == variant)
            .map(|&(s, _)| s)
    }

    #[must_use]
    pub fn has_variant(&self, variant: &str) -> bool {
        self.spellings.iter().any(|(_, v)| *v == variant)
    }

    /// Variants in declaration order, each once
    #[must_use]
    pub fn variants(&self) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for &(_, v) in self.spellings {
            if !out.contains(&v) {
                out.push(v);
            }
        }
        out
    }

    /// Every spelling accepted for a variant
    pub fn spellings_of<'a>(&'a self, variant: &'a str) -> impl Iterator<Item = &'static str> + 'a {
        self.spellings
            .iter()
            .filter(move |(_, v)| *v == variant)
            .map(|&(s, _)| s)
    }
}

/// A record type with scalar shorthands, each standing for a set of
/// sub-field assignments
#[derive(Debug)]
pub struct ShorthandDef {
    pub name: &'static str,
    pub fields: &'static [FieldDef],
    pub spellings: &'static [(&'static str, &'static [(&'static str, Lit)])],
}

impl ShorthandDef {
    /// Apply a shorthand spelling on top of `base`
    #[must_use]
    pub fn spelled(&self, spelling: &str, base: &[Value]) -> Option<Vec<Value>> {
        let (_, assignments) = self.spellings.iter().find(|(s, _)| *s == spelling)?;
        let mut values = base.to_vec();
        assign(self.fields, &mut values, assignments).ok()?;
        Some(values)
    }

    /// Spellings whose assignments reproduce `values` exactly
    pub fn spellings_matching<'a>(
        &'a self,
        values: &'a [Value],
    ) -> impl Iterator<Item = &'static str> + 'a {
        self.spellings
            .iter()
            .filter(move |(s, _)| self.spelled(s, values).as_deref() == Some(values))
            .map(|&(s, _)| s)
    }
}

/// Const literal used to author profile and rule tables
#[derive(Debug, Clone, Copy)]
pub enum Lit {
    Bool(bool),
    Int(i64),
    Str(&'static str),
    Enum(&'static str),
    List(&'static [&'static str]),
    /// Partial assignment onto the current sub-record
    Record(&'static [(&'static str, Lit)]),
    /// Full list of records, unspecified sub-fields zeroed
    Records(&'static [&'static [(&'static str, Lit)]]),
}

impl Lit {
    /// Build the value this literal denotes for `field`, layered on `current`
    ///
    /// # Errors
    ///
    /// Returns `InvalidValue` when the literal does not fit the field's kind.
    pub fn to_value(&self, field: &FieldDef, current: &Value) -> Result<Value, StyleError> {
        let invalid = || StyleError::invalid_value(field.name, format!("{self:?}"));
        let value = match (*self, field.kind) {
            (Self::Bool(b), FieldKind::Bool) => Value::Bool(b),
            (Self::Int(i), FieldKind::Int | FieldKind::Unsigned | FieldKind::Bound) => Value::Int(i),
            (Self::Str(s), FieldKind::Str) => Value::Str(s.to_owned()),
            (Self::List(items), FieldKind::StrList) => {
                Value::List(items.iter().map(|s| (*s).to_owned()).collect())
            }
            (Self::Enum(v), FieldKind::Enum(def)) if def.has_variant(v) => Value::Enum(v),
            (Self::Enum(s), FieldKind::Shorthand(def)) => {
                let base = current
                    .as_record()
                    .map_or_else(|| zero_record(def.fields), <[Value]>::to_vec);
                Value::Record(def.spelled(s, &base).ok_or_else(invalid)?)
            }
            (Self::Bool(b), FieldKind::Shorthand(def)) => {
                let base = current
                    .as_record()
                    .map_or_else(|| zero_record(def.fields), <[Value]>::to_vec);
                let spelling = if b { "true" } else { "false" };
                Value::Record(def.spelled(spelling, &base).ok_or_else(invalid)?)
            }
            (Self::Record(pairs), FieldKind::Record(_) | FieldKind::Shorthand(_)) => {
                let fields = field.kind.sub_fields().ok_or_else(invalid)?;
                let mut values = current
                    .as_record()
                    .map_or_else(|| zero_record(fields), <[Value]>::to_vec);
                assign(fields, &mut values, pairs)?;
                Value::Record(values)
            }
            (Self::Records(entries), FieldKind::RecordList(fields)) => {
                let mut records = Vec::with_capacity(entries.len());
                for pairs in entries {
                    let mut values = zero_record(fields);
                    assign(fields, &mut values, pairs)?;
                    records.push(values);
                }
                Value::Records(records)
            }
            _ => return Err(invalid()),
        };
        if field.kind.admits(&value) {
            Ok(value)
        } else {
            Err(invalid())
        }
    }

    /// Scalar comparison against a value
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match (*self, value) {
            (Self::Bool(a), Value::Bool(b)) => a == *b,
            (Self::Int(a), Value::Int(b)) => a == *b,
            (Self::Str(a), Value::Str(b)) => a == b,
            (Self::Enum(a), Value::Enum(b)) => a == *b,
            (Self::List(a), Value::List(b)) => a.len() == b.len() && a.iter().zip(b).all(|(x, y)| *x == y.as_str()),
            _ => false,
        }
    }
}

/// Apply `(name, literal)` pairs onto a record laid out against `fields`
///
/// # Errors
///
/// Returns `InvalidValue` for unknown names or literals of the wrong kind.
pub fn assign(
    fields: &[FieldDef],
    values: &mut [Value],
    pairs: &[(&'static str, Lit)],
) -> Result<(), StyleError> {
    for (name, lit) in pairs {
        let index =
            field_index(fields, name).ok_or_else(|| StyleError::unknown_option(*name))?;
        let (Some(field), Some(slot)) = (fields.get(index), values.get_mut(index)) else {
            return Err(StyleError::unknown_option(*name));
        };
        *slot = lit.to_value(field, slot)?;
    }
    Ok(())
}

/// The value a field holds before any table assigns it
#[must_use]
pub fn zero(kind: FieldKind) -> Value {
    match kind {
        FieldKind::Bool => Value::Bool(false),
        FieldKind::Int | FieldKind::Unsigned | FieldKind::Bound => Value::Int(0),
        FieldKind::Str => Value::Str(String::new()),
        FieldKind::StrList => Value::List(Vec::new()),
        FieldKind::Enum(def) => Value::Enum(def.spellings.first().map_or("", |&(_, v)| v)),
        FieldKind::Record(fields) => Value::Record(zero_record(fields)),
        FieldKind::Shorthand(def) => Value::Record(zero_record(def.fields)),
        FieldKind::RecordList(_) => Value::Records(Vec::new()),
    }
}

#[must_use]
pub fn zero_record(fields: &[FieldDef]) -> Vec<Value> {
    fields.iter().map(|field| zero(field.kind)).collect()
}

#[must_use]
pub fn field_index(fields: &[FieldDef], name: &str) -> Option<usize> {
    fields.iter().position(|field| field.name == name)
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    static COLOR: EnumDef = EnumDef::new(
        "Color",
        &[("Red", "Red"), ("true", "Red"), ("Blue", "Blue"), ("false", "Blue")],
    );

    static PAIR: &[FieldDef] = &[
        FieldDef::new("Enabled", FieldKind::Bool),
        FieldDef::new("Width", FieldKind::Unsigned),
    ];

    static PAIR_SHORTHAND: ShorthandDef = ShorthandDef {
        name: "Pair",
        fields: PAIR,
        spellings: &[
            ("On", &[("Enabled", Lit::Bool(true)), ("Width", Lit::Int(1))]),
            ("Off", &[("Enabled", Lit::Bool(false)), ("Width", Lit::Int(0))]),
        ],
    };

    #[test]
    fn canonical_spelling_is_first() {
        assert_eq!(COLOR.variant("true"), Some("Red"));
        assert_eq!(COLOR.canonical("Red"), Some("Red"));
        assert_eq!(COLOR.variants(), vec!["Red", "Blue"]);
        assert_eq!(COLOR.spellings_of("Blue").collect::<Vec<_>>(), vec!["Blue", "false"]);
    }

    #[test]
    fn record_literal_layers_on_current() {
        let field = FieldDef::new("Pair", FieldKind::Record(PAIR));
        let current = Value::Record(vec![Value::Bool(true), Value::Int(3)]);
        let value = Lit::Record(&[("Width", Lit::Int(7))])
            .to_value(&field, &current)
            .unwrap();
        assert_eq!(value, Value::Record(vec![Value::Bool(true), Value::Int(7)]));
    }

    #[test]
    fn enum_literal_must_name_a_variant() {
        let field = FieldDef::new("Color", FieldKind::Enum(&COLOR));
        assert!(Lit::Enum("Green").to_value(&field, &zero(field.kind)).is_err());
        assert_eq!(
            Lit::Enum("Blue").to_value(&field, &zero(field.kind)).unwrap(),
            Value::Enum("Blue")
        );
    }

    #[test]
    fn unsigned_rejects_negative() {
        let field = FieldDef::new("Width", FieldKind::Unsigned);
        assert!(Lit::Int(-1).to_value(&field, &Value::Int(0)).is_err());
        let bound = FieldDef::new("Maximum", FieldKind::Bound);
        assert_eq!(
            Lit::Int(-1).to_value(&bound, &Value::Int(0)).unwrap(),
            Value::Int(-1)
        );
    }

    #[test]
    fn shorthand_spellings_round_trip() {
        let on = PAIR_SHORTHAND.spelled("On", &zero_record(PAIR)).unwrap();
        assert_eq!(on, vec![Value::Bool(true), Value::Int(1)]);
        assert_eq!(
            PAIR_SHORTHAND.spellings_matching(&on).collect::<Vec<_>>(),
            vec!["On"]
        );
        let odd = vec![Value::Bool(true), Value::Int(9)];
        assert_eq!(PAIR_SHORTHAND.spellings_matching(&odd).count(), 0);
    }
}
