//! Conversion of YAML nodes into typed field values

use crate::error::StyleError;
use crate::schema::value::{FieldDef, FieldKind, Value, zero, zero_record};
use serde_yaml::Value as Yaml;
use tracing::warn;

/// Reads nodes against field definitions
#[derive(Debug, Clone, Copy)]
pub(super) struct Reader {
    /// Unknown nested keys are an error rather than ignored
    pub strict: bool,
}

impl Reader {
    /// Read `node` as `field`, layering partial mappings onto `current`
    ///
    /// `path` names the field in error messages (`BraceWrapping.AfterClass`).
    pub(super) fn read(
        self,
        field: &FieldDef,
        node: &Yaml,
        current: &Value,
        path: &str,
    ) -> Result<Value, StyleError> {
        let invalid = || StyleError::invalid_value(path, describe(node));
        let value = match field.kind {
            FieldKind::Bool => Value::Bool(read_bool(node).ok_or_else(invalid)?),
            FieldKind::Unsigned => {
                let n = read_int(node).ok_or_else(invalid)?;
                Value::Int(u32::try_from(n).map(i64::from).map_err(|_| invalid())?)
            }
            FieldKind::Int | FieldKind::Bound => {
                let n = read_int(node).ok_or_else(invalid)?;
                Value::Int(i32::try_from(n).map(i64::from).map_err(|_| invalid())?)
            }
            FieldKind::Str => Value::Str(read_str(node).ok_or_else(invalid)?),
            FieldKind::StrList => {
                let Yaml::Sequence(items) = node else {
                    return Err(invalid());
                };
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    list.push(read_str(item).ok_or_else(invalid)?);
                }
                Value::List(list)
            }
            FieldKind::Enum(def) => {
                let spelling = scalar_text(node).ok_or_else(invalid)?;
                Value::Enum(def.variant(&spelling).ok_or_else(invalid)?)
            }
            FieldKind::Record(fields) => self.read_record(fields, node, current, path)?,
            FieldKind::Shorthand(def) => {
                if let Some(spelling) = scalar_text(node) {
                    let base = current
                        .as_record()
                        .map_or_else(|| zero_record(def.fields), <[Value]>::to_vec);
                    Value::Record(def.spelled(&spelling, &base).ok_or_else(invalid)?)
                } else {
                    self.read_record(def.fields, node, current, path)?
                }
            }
            FieldKind::RecordList(fields) => {
                let Yaml::Sequence(items) = node else {
                    return Err(invalid());
                };
                let mut records = Vec::with_capacity(items.len());
                for item in items {
                    let fresh = Value::Record(zero_record(fields));
                    let Value::Record(values) = self.read_record(fields, item, &fresh, path)? else {
                        return Err(invalid());
                    };
                    records.push(values);
                }
                Value::Records(records)
            }
        };
        if field.kind.admits(&value) {
            Ok(value)
        } else {
            Err(invalid())
        }
    }

    fn read_record(
        self,
        fields: &'static [FieldDef],
        node: &Yaml,
        current: &Value,
        path: &str,
    ) -> Result<Value, StyleError> {
        let Yaml::Mapping(mapping) = node else {
            return Err(StyleError::invalid_value(path, describe(node)));
        };
        let mut values = current
            .as_record()
            .map_or_else(|| zero_record(fields), <[Value]>::to_vec);

        for (key, sub_node) in mapping {
            let key = key
                .as_str()
                .ok_or_else(|| StyleError::malformed(format!("non-string key under {path}")))?;
            let sub_path = format!("{path}.{key}");
            let Some(index) = fields.iter().position(|f| f.name == key) else {
                if self.strict {
                    return Err(StyleError::unknown_option(sub_path));
                }
                warn!("Ignoring unknown option {}", sub_path);
                continue;
            };
            let (Some(sub_field), Some(slot)) = (fields.get(index), values.get_mut(index)) else {
                continue;
            };
            let fallback = zero(sub_field.kind);
            let existing = slot.clone();
            let base = if sub_field.kind.admits(&existing) { &existing } else { &fallback };
            *slot = self.read(sub_field, sub_node, base, &sub_path)?;
        }
        Ok(Value::Record(values))
    }
}

/// Booleans also accept the capitalised spellings YAML 1.1 allowed
pub(super) fn read_bool(node: &Yaml) -> Option<bool> {
    match node {
        Yaml::Bool(b) => Some(*b),
        Yaml::String(s) => match s.as_str() {
            "true" | "True" | "TRUE" => Some(true),
            "false" | "False" | "FALSE" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn read_int(node: &Yaml) -> Option<i64> {
    match node {
        Yaml::Number(n) => n.as_i64(),
        Yaml::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn read_str(node: &Yaml) -> Option<String> {
    match node {
        Yaml::Null => Some(String::new()),
        other => scalar_text(other),
    }
}

/// Plain text of a scalar node
pub(super) fn scalar_text(node: &Yaml) -> Option<String> {
    match node {
        Yaml::String(s) => Some(s.clone()),
        Yaml::Bool(b) => Some(b.to_string()),
        Yaml::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Short rendering of a node for error messages
pub(super) fn describe(node: &Yaml) -> String {
    scalar_text(node).unwrap_or_else(|| {
        serde_yaml::to_string(node).map_or_else(|_| "<unprintable>".to_owned(), |s| s.trim().to_owned())
    })
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::schema::value::{EnumDef, Lit, ShorthandDef};

    static SIDE: EnumDef = EnumDef::new(
        "Side",
        &[("Left", "Left"), ("Right", "Right"), ("true", "Left"), ("false", "Right")],
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

    fn yaml(text: &str) -> Yaml {
        serde_yaml::from_str(text).unwrap()
    }

    const STRICT: Reader = Reader { strict: true };
    const LENIENT: Reader = Reader { strict: false };

    #[test]
    fn booleans_accept_capitalised_strings() {
        let field = FieldDef::new("Flag", FieldKind::Bool);
        for (text, expected) in [("true", true), ("'True'", true), ("FALSE", false)] {
            let value = STRICT.read(&field, &yaml(text), &Value::Bool(false), "Flag").unwrap();
            assert_eq!(value, Value::Bool(expected));
        }
        assert!(STRICT.read(&field, &yaml("yes"), &Value::Bool(false), "Flag").is_err());
    }

    #[test]
    fn unsigned_rejects_negative_numbers() {
        let field = FieldDef::new("Width", FieldKind::Unsigned);
        let err = STRICT.read(&field, &yaml("-3"), &Value::Int(0), "Width").unwrap_err();
        assert_eq!(err, StyleError::invalid_value("Width", "-3"));
        let bound = FieldDef::new("Maximum", FieldKind::Bound);
        assert_eq!(
            STRICT.read(&bound, &yaml("-1"), &Value::Int(0), "Maximum").unwrap(),
            Value::Int(-1)
        );
    }

    #[test]
    fn integers_stay_within_their_native_width() {
        let width = FieldDef::new("Width", FieldKind::Unsigned);
        assert_eq!(
            STRICT.read(&width, &yaml("4294967295"), &Value::Int(0), "Width").unwrap(),
            Value::Int(4_294_967_295)
        );
        let err = STRICT.read(&width, &yaml("99999999999"), &Value::Int(0), "Width").unwrap_err();
        assert_eq!(err, StyleError::invalid_value("Width", "99999999999"));

        let offset = FieldDef::new("Offset", FieldKind::Int);
        assert_eq!(
            STRICT.read(&offset, &yaml("-2147483648"), &Value::Int(0), "Offset").unwrap(),
            Value::Int(-2_147_483_648)
        );
        assert!(STRICT.read(&offset, &yaml("2147483648"), &Value::Int(0), "Offset").is_err());
    }

    #[test]
    fn enums_accept_legacy_boolean_spellings() {
        let field = FieldDef::new("Side", FieldKind::Enum(&SIDE));
        let value = STRICT.read(&field, &yaml("true"), &Value::Enum("Right"), "Side").unwrap();
        assert_eq!(value, Value::Enum("Left"));
        assert!(STRICT.read(&field, &yaml("Middle"), &Value::Enum("Right"), "Side").is_err());
    }

    #[test]
    fn partial_mapping_merges_onto_current() {
        let field = FieldDef::new("Pair", FieldKind::Record(PAIR));
        let current = Value::Record(vec![Value::Bool(true), Value::Int(7)]);
        let value = STRICT.read(&field, &yaml("Width: 3"), &current, "Pair").unwrap();
        assert_eq!(value, Value::Record(vec![Value::Bool(true), Value::Int(3)]));
    }

    #[test]
    fn shorthand_accepts_scalar_or_mapping() {
        let field = FieldDef::new("Pair", FieldKind::Shorthand(&PAIR_SHORTHAND));
        let current = Value::Record(vec![Value::Bool(false), Value::Int(0)]);
        assert_eq!(
            STRICT.read(&field, &yaml("On"), &current, "Pair").unwrap(),
            Value::Record(vec![Value::Bool(true), Value::Int(1)])
        );
        assert_eq!(
            STRICT.read(&field, &yaml("{Width: 4}"), &current, "Pair").unwrap(),
            Value::Record(vec![Value::Bool(false), Value::Int(4)])
        );
    }

    #[test]
    fn unknown_nested_keys_follow_strictness() {
        let field = FieldDef::new("Pair", FieldKind::Record(PAIR));
        let current = Value::Record(vec![Value::Bool(false), Value::Int(0)]);
        let node = yaml("{Enabled: true, Colour: red}");
        let err = STRICT.read(&field, &node, &current, "Pair").unwrap_err();
        assert_eq!(err, StyleError::unknown_option("Pair.Colour"));
        assert_eq!(
            LENIENT.read(&field, &node, &current, "Pair").unwrap(),
            Value::Record(vec![Value::Bool(true), Value::Int(0)])
        );
    }

    #[test]
    fn record_lists_start_each_entry_from_zero() {
        let field = FieldDef::new("Pairs", FieldKind::RecordList(PAIR));
        let node = yaml("- Width: 2\n- Enabled: true\n");
        let value = STRICT.read(&field, &node, &Value::Records(Vec::new()), "Pairs").unwrap();
        assert_eq!(
            value,
            Value::Records(vec![
                vec![Value::Bool(false), Value::Int(2)],
                vec![Value::Bool(true), Value::Int(0)],
            ])
        );
    }
}
