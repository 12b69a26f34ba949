//! Composite preset fields
//!
//! A preset selector (such as `BreakBeforeBraces`) names a full assignment
//! of a nested record plus a few top-level side fields. [`expand`] writes
//! that assignment out; [`collapse`] recognises a `Custom` record that
//! matches exactly one named variant.

use crate::error::StyleError;
use crate::record::StyleRecord;
use crate::schema::table::{Preset, PresetVariant};
use crate::schema::value::{Lit, Value, zero};
use tracing::debug;

/// Write every non-`Custom` preset selection into its sub-record
///
/// Idempotent: expanding an already expanded record changes nothing.
///
/// # Errors
///
/// Returns an error only if a preset table names fields outside its schema.
pub fn expand(record: &StyleRecord) -> Result<StyleRecord, StyleError> {
    let mut out = record.clone();
    for preset in record.schema().presets() {
        let Some(selected) = out.get(preset.selector).and_then(Value::as_enum) else {
            continue;
        };
        if selected == preset.custom {
            continue;
        }
        let Some(variant) = preset.variant(selected) else {
            continue;
        };
        apply(&mut out, preset, variant)?;
    }
    Ok(out)
}

/// Replace `Custom` selections by the unique named variant they equal
///
/// Records matching no variant, or several, keep `Custom`.
///
/// # Errors
///
/// Returns an error only if a preset table names fields outside its schema.
pub fn collapse(record: &StyleRecord) -> Result<StyleRecord, StyleError> {
    let mut out = record.clone();
    for preset in record.schema().presets() {
        if out.get(preset.selector).and_then(Value::as_enum) != Some(preset.custom) {
            continue;
        }
        let mut matching = Vec::new();
        for variant in preset.variants {
            let mut candidate = out.clone();
            candidate.set(preset.selector, Value::Enum(variant.variant))?;
            let mut expanded = candidate.clone();
            apply(&mut expanded, preset, variant)?;
            if expanded == candidate {
                matching.push(variant.variant);
            }
        }
        if let [only] = matching.as_slice() {
            debug!("{} collapses to {}", preset.selector, only);
            out.set(preset.selector, Value::Enum(*only))?;
        }
    }
    Ok(out)
}

fn apply(record: &mut StyleRecord, preset: &Preset, variant: &PresetVariant) -> Result<(), StyleError> {
    let target = record
        .schema()
        .field(preset.target)
        .ok_or_else(|| StyleError::unknown_option(preset.target))?;
    record.set(preset.target, zero(target.kind))?;
    record.assign(&[(preset.target, Lit::Record(preset.reset))])?;
    record.assign(&[(preset.target, Lit::Record(variant.flags))])?;
    record.assign(variant.side)
}
