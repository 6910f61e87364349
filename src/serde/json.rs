use alloc::string::String;
use alloc::vec::Vec;
use std::io;

use serde_core::Serialize;
use serde_json::ser::Formatter;

use crate::Reflect;
use crate::ops::ValueRef;
use crate::serde::SerializeDriver;

// -----------------------------------------------------------------------------
// JsonFormatter

/// The JSON text style used by [`serialize_json`]: fixed-point floats with
/// `PRECISION` fractional digits, object entries separated by `", "`, keys
/// and values separated by `": "`.
///
/// Integers print without a fractional part; booleans and strings use the
/// standard JSON forms.
pub struct JsonFormatter<const PRECISION: usize = 2>;

impl<const PRECISION: usize> JsonFormatter<PRECISION> {
    /// Creates the formatter.
    #[inline]
    pub const fn new() -> Self {
        Self
    }
}

impl<const PRECISION: usize> Formatter for JsonFormatter<PRECISION> {
    #[inline]
    fn write_f32<W>(&mut self, writer: &mut W, value: f32) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        write!(writer, "{:.*}", PRECISION, value)
    }

    #[inline]
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        write!(writer, "{:.*}", PRECISION, value)
    }

    #[inline]
    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first { Ok(()) } else { writer.write_all(b", ") }
    }

    #[inline]
    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

// -----------------------------------------------------------------------------
// serialize_json

/// Renders a reflected value to JSON text with the default precision of two
/// fractional digits.
///
/// Records render as objects with one entry per named field in declaration
/// order; nested records recurse; fields without a serializable
/// representation are silently omitted. Returns `None` ("not serialized",
/// never an error) when the root value itself has no representation.
///
/// # Examples
///
/// ```
/// use record_reflect::derive::Record;
/// use record_reflect::serde::serialize_json;
///
/// #[derive(Record)]
/// struct Player {
///     max_health: i32,
///     damage: f32,
/// }
///
/// let player = Player { max_health: 120, damage: 10.0 };
///
/// assert_eq!(
///     serialize_json(&player).unwrap(),
///     r#"{"max_health": 120, "damage": 10.00}"#,
/// );
/// assert_eq!(serialize_json(&10.5_f64).unwrap(), "10.50");
/// assert_eq!(serialize_json(&"hello").unwrap(), "\"hello\"");
/// ```
#[inline]
pub fn serialize_json(value: &dyn Reflect) -> Option<String> {
    serialize_json_with_precision::<2>(value)
}

/// [`serialize_json`] with an explicit fractional-digit count.
///
/// # Examples
///
/// ```
/// use record_reflect::serde::serialize_json_with_precision;
///
/// assert_eq!(
///     serialize_json_with_precision::<4>(&10.5_f32).unwrap(),
///     "10.5000",
/// );
/// ```
pub fn serialize_json_with_precision<const PRECISION: usize>(
    value: &dyn Reflect,
) -> Option<String> {
    if matches!(value.reflect_ref(), ValueRef::Opaque(_)) {
        return None;
    }
    let mut out = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut out, JsonFormatter::<PRECISION>::new());
    SerializeDriver::new(value).serialize(&mut serializer).ok()?;
    String::from_utf8(out).ok()
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::serialize_json_with_precision;

    #[test]
    fn precision_is_a_type_parameter() {
        assert_eq!(
            serialize_json_with_precision::<0>(&10.5_f64).unwrap(),
            "10"
        );
        assert_eq!(
            serialize_json_with_precision::<3>(&10.5_f64).unwrap(),
            "10.500"
        );
    }

    #[test]
    fn integers_have_no_fractional_part() {
        assert_eq!(serialize_json_with_precision::<2>(&10_i32).unwrap(), "10");
    }
}
