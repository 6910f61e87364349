use crate::Value;
use crate::access::{CastSource, Caster};
use crate::ops::{CastError, Record};

// -----------------------------------------------------------------------------
// Writing

/// Assigns `value` to the field named `name`, locating it by name only.
///
/// Returns `true` iff a named field with that name exists; the return value
/// reports the name match, not the assignment. The value is coerced across
/// the numeric kinds first, so an integer can fill a float field and a float
/// an integer field, with silent precision loss; an incompatible non-numeric
/// value leaves the field unchanged (and still returns `true`). No error is
/// ever raised here. Use [`set_values`] for checked bulk assignment.
///
/// # Examples
///
/// ```
/// use record_reflect::access::{get_value, set_value};
/// use record_reflect::derive::Record;
///
/// #[derive(Record)]
/// struct Player {
///     max_health: i32,
///     damage: f32,
/// }
///
/// let mut player = Player { max_health: 100, damage: 10.0 };
///
/// assert!(set_value(&mut player, "max_health", 120));
/// assert_eq!(player.max_health, 120);
///
/// // Implicit numeric conversion, precision loss is silent.
/// assert!(set_value(&mut player, "max_health", 64.9_f64));
/// assert_eq!(player.max_health, 64);
///
/// // Unknown names report false and change nothing.
/// assert!(!set_value(&mut player, "meow", 1));
/// ```
///
/// [`set_values`]: crate::access::set_values
pub fn set_value(record: &mut dyn Record, name: &str, value: impl Into<Value>) -> bool {
    let Some(field) = record.field_mut(name) else {
        return false;
    };
    let value = value.into().coerced_to(field.reflect_ref().kind());
    let _ = field.try_apply(&value);
    true
}

/// Assigns every mapping entry whose key names a field, converting each value
/// through the source type's built-in [`Caster`].
///
/// Returns the number of fields updated. Mapping entries whose key matches no
/// named field are ignored without error; fields absent from the mapping are
/// untouched. A caster failure aborts and propagates as a [`CastError`]
/// (the caster's own taxonomy, never an access error), leaving the record
/// partially updated.
///
/// # Examples
///
/// ```
/// use record_reflect::access::set_values;
/// use record_reflect::derive::Record;
/// use record_reflect::Value;
///
/// #[derive(Record)]
/// struct Player {
///     max_health: i32,
///     damage: f32,
///     name: String,
/// }
///
/// let mut player = Player { max_health: 100, damage: 10.0, name: "Aubrey".into() };
///
/// let updated = set_values(
///     &mut player,
///     [
///         ("max_health", Value::Int(95)),
///         ("name", Value::from("Bob")),
///         ("meow", Value::Int(1)), // unmatched keys are ignored
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(updated, 2);
/// assert_eq!(player.max_health, 95);
/// assert_eq!(player.name, "Bob");
/// assert_eq!(player.damage, 10.0); // unmentioned fields are untouched
/// ```
#[inline]
pub fn set_values<K, S, I>(record: &mut dyn Record, values: I) -> Result<usize, CastError>
where
    K: AsRef<str>,
    S: CastSource,
    I: IntoIterator<Item = (K, S)>,
{
    set_values_with::<S::Caster, K, S, I>(record, values)
}

/// [`set_values`] with an explicit casting strategy.
///
/// `C` overrides the built-in source resolution entirely; it is
/// default-constructed once and used for every entry. See [`Caster`] for a
/// worked custom strategy.
pub fn set_values_with<C, K, S, I>(record: &mut dyn Record, values: I) -> Result<usize, CastError>
where
    C: Caster<S> + Default,
    K: AsRef<str>,
    I: IntoIterator<Item = (K, S)>,
{
    let caster = C::default();
    let mut updated = 0;
    for (name, source) in values {
        let Some(field) = record.field_mut(name.as_ref()) else {
            continue;
        };
        caster.cast(source, field)?;
        updated += 1;
    }
    Ok(updated)
}
