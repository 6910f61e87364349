use core::fmt;

use crate::Reflect;
use crate::ops::{CastError, Record, ValueRef};

// -----------------------------------------------------------------------------
// Shared record algorithms

/// Applies every field of `src` onto the same-named field of `dst`.
///
/// Fields of `dst` not mentioned by `src` are untouched; fields of `src`
/// unknown to `dst` are ignored. Each matched field is applied tag-checked
/// through [`Reflect::try_apply`], so the first incompatible pair aborts with
/// a [`CastError`], leaving `dst` partially updated.
pub fn record_try_apply(dst: &mut dyn Record, src: &dyn Record) -> Result<(), CastError> {
    for index in 0..src.field_len() {
        let (Some(name), Some(value)) = (src.name_at(index), src.field_at(index)) else {
            continue;
        };
        if let Some(target) = dst.field_mut(name) {
            target.try_apply(&value.to_value())?;
        }
    }
    Ok(())
}

/// Compares two records field-by-field.
///
/// Returns `Some(false)` when `other` is not a record, when the field sets
/// differ, or when any same-named pair compares unequal; returns `None` when
/// a pair does not support comparison.
pub fn record_partial_eq(record: &dyn Record, other: &dyn Reflect) -> Option<bool> {
    let ValueRef::Record(other) = other.reflect_ref() else {
        return Some(false);
    };
    if record.field_len() != other.field_len() {
        return Some(false);
    }
    for index in 0..record.field_len() {
        let (Some(name), Some(value)) = (record.name_at(index), record.field_at(index)) else {
            return Some(false);
        };
        let Some(other_value) = other.field(name) else {
            return Some(false);
        };
        match value.reflect_partial_eq(other_value) {
            Some(true) => {}
            Some(false) => return Some(false),
            None => return None,
        }
    }
    Some(true)
}

/// Debug-formats a record field-by-field.
///
/// The type name comes from the represented [`RecordInfo`] when one is
/// available.
///
/// [`RecordInfo`]: crate::info::RecordInfo
pub fn record_debug(record: &dyn Record, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = record
        .represented_info()
        .map_or("_", crate::info::RecordInfo::type_name);
    let mut debug = f.debug_struct(name);
    for index in 0..record.field_len() {
        if let (Some(field_name), Some(value)) = (record.name_at(index), record.field_at(index)) {
            debug.field(field_name, &value);
        }
    }
    debug.finish()
}
