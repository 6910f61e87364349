use crate::ops::{AccessError, Record};
use crate::{FromReflect, Reflect};

// -----------------------------------------------------------------------------
// Reading

/// Returns `true` if the record has a named field called `name`.
///
/// Ignored members are invisible, so this is `false` for them.
///
/// # Examples
///
/// ```
/// use record_reflect::access::has_field;
/// use record_reflect::derive::Record;
///
/// #[derive(Record)]
/// struct Player {
///     max_health: i32,
///     #[record(ignore)]
///     cur_health: i32,
/// }
///
/// let player = Player { max_health: 100, cur_health: 50 };
/// assert!(has_field(&player, "max_health"));
/// assert!(!has_field(&player, "cur_health"));
/// ```
#[inline]
pub fn has_field(record: &dyn Record, name: &str) -> bool {
    record.field(name).is_some()
}

/// Returns a copy of the field's value converted into `T`.
///
/// This is the **convertible** read: it succeeds for any named field whose
/// value can be absorbed by `T` under [`FromReflect`]: numerically
/// convertible scalars, widening into [`Value`](crate::Value), or wrapping in
/// `Option<T>`. For an exact-type read use [`get_value_strict`].
///
/// # Errors
///
/// - [`AccessError::FieldNotFound`] if no named field carries `name`.
/// - [`AccessError::TypeMismatch`] if the first field named `name` cannot
///   convert into `T`. The name match dominates: a later field with the same
///   name is never considered.
///
/// # Examples
///
/// ```
/// use record_reflect::access::get_value;
/// use record_reflect::derive::Record;
/// use record_reflect::Value;
///
/// #[derive(Record)]
/// struct Player {
///     max_health: i32,
/// }
///
/// let player = Player { max_health: 100 };
///
/// assert_eq!(get_value::<i32>(&player, "max_health").unwrap(), 100);
/// // Deliberate widening is allowed.
/// assert_eq!(get_value::<f64>(&player, "max_health").unwrap(), 100.0);
/// assert_eq!(get_value::<Value>(&player, "max_health").unwrap(), Value::Int(100));
/// ```
pub fn get_value<T: FromReflect>(record: &dyn Record, name: &str) -> Result<T, AccessError> {
    let field = record
        .field(name)
        .ok_or_else(|| AccessError::field_not_found(name))?;
    T::from_reflect(field).ok_or_else(|| AccessError::type_mismatch(name))
}

/// Returns a copy of the field's value, requiring the declared type to be
/// exactly `T`.
///
/// Unlike [`get_value`], an implicitly compatible type is still a mismatch:
/// reading an `i32` field as `f32` fails even though the conversion exists.
/// Type equality is `TypeId` identity, so distinct same-representation types
/// never match.
///
/// # Errors
///
/// - [`AccessError::FieldNotFound`] if no named field carries `name`.
/// - [`AccessError::TypeMismatch`] if the field's declared type is not `T`.
///
/// # Examples
///
/// ```
/// use record_reflect::access::get_value_strict;
/// use record_reflect::derive::Record;
/// use record_reflect::ops::AccessError;
///
/// #[derive(Record)]
/// struct Player {
///     max_health: i32,
/// }
///
/// let player = Player { max_health: 100 };
///
/// assert_eq!(get_value_strict::<i32>(&player, "max_health").unwrap(), 100);
/// assert!(matches!(
///     get_value_strict::<f32>(&player, "max_health"),
///     Err(AccessError::TypeMismatch { .. }),
/// ));
/// ```
pub fn get_value_strict<T: Reflect + Clone>(
    record: &dyn Record,
    name: &str,
) -> Result<T, AccessError> {
    let field = record
        .field(name)
        .ok_or_else(|| AccessError::field_not_found(name))?;
    field
        .downcast_ref::<T>()
        .cloned()
        .ok_or_else(|| AccessError::type_mismatch(name))
}

/// Non-raising form of [`get_value`].
///
/// Collapses both failure kinds into `None`, losing the distinction between
/// a missing name and a type mismatch.
#[inline]
pub fn try_get_value<T: FromReflect>(record: &dyn Record, name: &str) -> Option<T> {
    get_value(record, name).ok()
}

// -----------------------------------------------------------------------------
// Live field references

/// Returns a live reference to the field named `name`, at its exact declared
/// type `T`.
///
/// The reference aliases the field inside the record.
///
/// # Errors
///
/// Same taxonomy as [`get_value_strict`].
pub fn get_field_with_name<'a, T: Reflect>(
    record: &'a dyn Record,
    name: &str,
) -> Result<&'a T, AccessError> {
    let field = record
        .field(name)
        .ok_or_else(|| AccessError::field_not_found(name))?;
    field
        .downcast_ref::<T>()
        .ok_or_else(|| AccessError::type_mismatch(name))
}

/// Returns a live mutable reference to the field named `name`, at its exact
/// declared type `T`.
///
/// Mutations through the reference mutate the record directly.
///
/// # Errors
///
/// Same taxonomy as [`get_value_strict`].
///
/// # Examples
///
/// ```
/// use record_reflect::access::get_field_with_name_mut;
/// use record_reflect::derive::Record;
///
/// #[derive(Record)]
/// struct Player {
///     max_health: i32,
/// }
///
/// let mut player = Player { max_health: 100 };
/// *get_field_with_name_mut::<i32>(&mut player, "max_health").unwrap() = 120;
/// assert_eq!(player.max_health, 120);
/// ```
pub fn get_field_with_name_mut<'a, T: Reflect>(
    record: &'a mut dyn Record,
    name: &str,
) -> Result<&'a mut T, AccessError> {
    let field = record
        .field_mut(name)
        .ok_or_else(|| AccessError::field_not_found(name))?;
    field
        .downcast_mut::<T>()
        .ok_or_else(|| AccessError::type_mismatch(name))
}

/// Non-raising form of [`get_field_with_name`].
#[inline]
pub fn try_get_field_with_name<'a, T: Reflect>(
    record: &'a dyn Record,
    name: &str,
) -> Option<&'a T> {
    get_field_with_name(record, name).ok()
}

/// Non-raising form of [`get_field_with_name_mut`].
#[inline]
pub fn try_get_field_with_name_mut<'a, T: Reflect>(
    record: &'a mut dyn Record,
    name: &str,
) -> Option<&'a mut T> {
    get_field_with_name_mut(record, name).ok()
}
