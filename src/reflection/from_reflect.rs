use crate::Reflect;
use crate::Value;
use crate::ops::ValueRef;

// -----------------------------------------------------------------------------
// FromReflect

/// Fallible construction of a concrete value from a reflected one.
///
/// This is the "assignable-from" side of the convertible accessors: a target
/// type declares which reflected kinds it can absorb. The scalar impls accept
/// any numerically convertible kind (an `i32` can be read from a field
/// declared as `f32`, and vice versa); `bool` and `String` are tag-exact;
/// [`Value`] accepts everything (widening into the open dynamic union);
/// `Option<T>` wraps a convertible `T`. Derived records rebuild themselves
/// field-wise by name, so they also accept a [`DynamicRecord`] carrying the
/// same field names.
///
/// It's recommended to use [the derive macro](crate::derive::Record) for
/// record types rather than implementing this trait by hand.
///
/// # Examples
///
/// ```
/// use record_reflect::{FromReflect, Value};
///
/// // Numeric widening from a reflected `i32`.
/// let x = f64::from_reflect(&10_i32).unwrap();
/// assert_eq!(x, 10.0);
///
/// // Widening into the dynamic union.
/// let v = Value::from_reflect(&10_i32).unwrap();
/// assert_eq!(v, Value::Int(10));
///
/// // Tag-exact targets refuse other kinds.
/// assert!(String::from_reflect(&10_i32).is_none());
/// ```
///
/// [`DynamicRecord`]: crate::ops::DynamicRecord
pub trait FromReflect: Sized {
    /// Constructs a concrete instance of `Self` from a reflected value.
    ///
    /// Returns `None` when the reflected kind cannot convert into `Self`.
    fn from_reflect(value: &dyn Reflect) -> Option<Self>;
}

impl FromReflect for Value {
    #[inline]
    fn from_reflect(value: &dyn Reflect) -> Option<Self> {
        Some(value.to_value())
    }
}

impl<T: FromReflect> FromReflect for Option<T> {
    #[inline]
    fn from_reflect(value: &dyn Reflect) -> Option<Self> {
        T::from_reflect(value).map(Some)
    }
}

impl FromReflect for crate::ops::DynamicRecord {
    fn from_reflect(value: &dyn Reflect) -> Option<Self> {
        if let ValueRef::Record(record) = value.reflect_ref() {
            Some(record.to_dynamic_record())
        } else {
            None
        }
    }
}
