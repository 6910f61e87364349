use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::Reflect;
use crate::ops::DynamicRecord;

// -----------------------------------------------------------------------------
// ValueKind

/// A pure enumeration of the reflected kinds.
///
/// Scalar widths are collapsed: every integer type is `Int`, both float types
/// are `Float`, and both string types are `Str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// `bool`.
    Bool,
    /// Any integer type, widened to `i64`.
    Int,
    /// `f32` or `f64`, widened to `f64`.
    Float,
    /// `String` or `&'static str`.
    Str,
    /// A type implementing [`Record`](crate::ops::Record).
    Record,
    /// A leaf type with no dynamic representation.
    Opaque,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Str => "string",
            ValueKind::Record => "record",
            ValueKind::Opaque => "opaque",
        })
    }
}

// -----------------------------------------------------------------------------
// Value

/// The closed dynamic union over every reflectable kind.
///
/// `Value` is the owned, dynamically-tagged form a field value takes when it
/// leaves its record: [`get_value`] can widen any field into a `Value`,
/// [`get_value_map`] snapshots a whole record into them, and [`set_values`]
/// accepts them as bulk input, extracting each through its active tag.
///
/// # Examples
///
/// ```
/// use record_reflect::{Value, ValueKind};
///
/// let v = Value::from(10_i32);
/// assert_eq!(v.kind(), ValueKind::Int);
/// assert_eq!(v.as_int(), Some(10));
/// assert_eq!(v.as_float(), None); // access is tag-exact
/// ```
///
/// [`get_value`]: crate::access::get_value
/// [`get_value_map`]: crate::access::get_value_map
/// [`set_values`]: crate::access::set_values
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// An integer, widened to `i64`.
    Int(i64),
    /// A float, widened to `f64`.
    Float(f64),
    /// An owned string.
    Str(String),
    /// A record snapshot.
    Record(DynamicRecord),
    /// A boxed opaque value.
    Opaque(Box<dyn Reflect>),
}

impl Value {
    /// Returns the active tag.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::Record(_) => ValueKind::Record,
            Value::Opaque(_) => ValueKind::Opaque,
        }
    }

    /// Returns the boolean payload, if that is the active tag.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the integer payload, if that is the active tag.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the float payload, if that is the active tag.
    #[inline]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the string payload, if that is the active tag.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the record payload, if that is the active tag.
    #[inline]
    pub fn as_record(&self) -> Option<&DynamicRecord> {
        match self {
            Value::Record(v) => Some(v),
            _ => None,
        }
    }

    /// Converts the numeric payload across the `Int`/`Float` boundary to
    /// match `kind`, truncating on the way down.
    ///
    /// Non-numeric values and non-numeric targets pass through unchanged.
    /// This is the silent implicit-conversion step of
    /// [`set_value`](crate::access::set_value) and the plain-scalar caster.
    pub fn coerced_to(self, kind: ValueKind) -> Value {
        match (self, kind) {
            (Value::Int(v), ValueKind::Float) => Value::Float(v as f64),
            (Value::Float(v), ValueKind::Int) => Value::Int(v as i64),
            (value, _) => value,
        }
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        match self {
            Value::Bool(v) => Value::Bool(*v),
            Value::Int(v) => Value::Int(*v),
            Value::Float(v) => Value::Float(*v),
            Value::Str(v) => Value::Str(v.clone()),
            Value::Record(v) => Value::Record(v.clone()),
            Value::Opaque(v) => Value::Opaque(v.clone_value()),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Record(a), Value::Record(b)) => {
                crate::impls::record_partial_eq(a, b).unwrap_or(false)
            }
            (Value::Opaque(a), Value::Opaque(b)) => {
                a.reflect_partial_eq(b.as_ref()).unwrap_or(false)
            }
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Value::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Value::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Value::Str(v) => f.debug_tuple("Str").field(v).finish(),
            Value::Record(v) => f.debug_tuple("Record").field(v).finish(),
            Value::Opaque(v) => f.debug_tuple("Opaque").field(v).finish(),
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

macro_rules! impl_value_from_int {
    ($($ty:ty),* $(,)?) => {
        $(impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Value::Int(value as i64)
            }
        })*
    };
}

impl_value_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl From<DynamicRecord> for Value {
    #[inline]
    fn from(value: DynamicRecord) -> Self {
        Value::Record(value)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{Value, ValueKind};

    #[test]
    fn numeric_coercion() {
        assert_eq!(Value::Int(7).coerced_to(ValueKind::Float), Value::Float(7.0));
        assert_eq!(Value::Float(7.9).coerced_to(ValueKind::Int), Value::Int(7));
        // Non-numeric pairs pass through untouched.
        assert_eq!(
            Value::from("x").coerced_to(ValueKind::Int),
            Value::from("x")
        );
    }

    #[test]
    fn tag_exact_access() {
        assert_eq!(Value::from(2_u8), Value::Int(2));
        assert_eq!(Value::from(2.5_f32).as_float(), Some(2.5));
        assert_eq!(Value::from(true).as_int(), None);
    }
}
