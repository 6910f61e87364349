use alloc::format;

use serde_core::ser::{self, SerializeMap};
use serde_core::{Serialize, Serializer};

use crate::Reflect;
use crate::ops::ValueRef;

// -----------------------------------------------------------------------------
// SerializeDriver

/// Serializer adapter for reflected values.
///
/// Drives any [`Serializer`] over the reflection kinds:
///
/// - `Bool` / `Int` / `Float` / `Str` serialize as the corresponding
///   primitive (integers as `i64`, floats as `f64`).
/// - `Record` serializes as a map with one entry per named field, in
///   declaration order, recursing per field. Fields holding an opaque value
///   contribute no entry; they are silently omitted, a soft failure.
/// - An opaque value at the root is a serialization error: there is nothing
///   to write for it.
///
/// # Examples
///
/// ```
/// use record_reflect::derive::Record;
/// use record_reflect::serde::SerializeDriver;
///
/// #[derive(Record)]
/// struct Health {
///     current: i32,
///     max: i32,
/// }
///
/// let health = Health { current: 50, max: 100 };
/// let output = serde_json::to_string(&SerializeDriver::new(&health)).unwrap();
///
/// assert_eq!(output, r#"{"current":50,"max":100}"#);
/// ```
pub struct SerializeDriver<'a> {
    value: &'a dyn Reflect,
}

impl<'a> SerializeDriver<'a> {
    /// Creates a driver for `value`.
    #[inline]
    pub const fn new(value: &'a dyn Reflect) -> Self {
        Self { value }
    }
}

impl Serialize for SerializeDriver<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.value.reflect_ref() {
            ValueRef::Bool(v) => serializer.serialize_bool(v),
            ValueRef::Int(v) => serializer.serialize_i64(v),
            ValueRef::Float(v) => serializer.serialize_f64(v),
            ValueRef::Str(v) => serializer.serialize_str(v),
            ValueRef::Record(record) => {
                let mut map = serializer.serialize_map(None)?;
                for index in 0..record.field_len() {
                    let (Some(name), Some(value)) = (record.name_at(index), record.field_at(index))
                    else {
                        continue;
                    };
                    if matches!(value.reflect_ref(), ValueRef::Opaque(_)) {
                        continue;
                    }
                    map.serialize_entry(name, &SerializeDriver::new(value))?;
                }
                map.end()
            }
            ValueRef::Opaque(_) => Err(ser::Error::custom(format!(
                "type `{}` has no serializable representation",
                self.value.type_name(),
            ))),
        }
    }
}
