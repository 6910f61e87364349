use alloc::boxed::Box;
use alloc::string::String;

use crate::ops::{CastError, DynamicRecord};
use crate::{Reflect, Value};

// -----------------------------------------------------------------------------
// Caster

/// A strategy converting one dynamically-typed source value into a field's
/// static type.
///
/// Casters are stateless values used only by the bulk setter: for each
/// mapping entry whose key names a field, [`set_values_with`] calls
/// [`cast`](Caster::cast) with the entry's value and the live field. A caster
/// must also be [`Default`]-constructible so the setter can create it.
///
/// Unless a custom strategy is supplied, the source type picks its built-in
/// strategy through [`CastSource`]:
///
/// 1. [`ReflectCaster`] for `Box<dyn Reflect>`: extract the exact payload
///    type, failing when the payload's real type differs.
/// 2. [`ValueCaster`] for [`Value`]: extract through the active tag, failing
///    when the tag differs (widths convert, tags do not).
/// 3. [`ConvertCaster`] for plain scalars: numeric conversion toward the
///    field's kind.
///
/// A caster's failure propagates from [`set_values`] as a [`CastError`],
/// never translated into the access-error taxonomy.
///
/// # Examples
///
/// A custom caster parsing decimal strings into numeric fields:
///
/// ```
/// use record_reflect::access::{set_values_with, Caster};
/// use record_reflect::derive::Record;
/// use record_reflect::ops::CastError;
/// use record_reflect::{Reflect, Value};
///
/// #[derive(Default)]
/// struct ParseCaster;
///
/// impl Caster<&str> for ParseCaster {
///     fn cast(&self, source: &str, target: &mut dyn Reflect) -> Result<(), CastError> {
///         let parsed: f64 = source.parse().map_err(|_| CastError::Unsupported {
///             type_name: "str",
///         })?;
///         let value = Value::Float(parsed).coerced_to(target.reflect_ref().kind());
///         target.try_apply(&value)
///     }
/// }
///
/// #[derive(Record)]
/// struct Player {
///     max_health: i32,
///     damage: f32,
/// }
///
/// let mut player = Player { max_health: 100, damage: 10.0 };
/// let updated = set_values_with::<ParseCaster, _, _, _>(
///     &mut player,
///     [("max_health", "120"), ("damage", "12.5")],
/// )
/// .unwrap();
///
/// assert_eq!(updated, 2);
/// assert_eq!(player.max_health, 120);
/// assert_eq!(player.damage, 12.5);
/// ```
///
/// [`set_values`]: crate::access::set_values
/// [`set_values_with`]: crate::access::set_values_with
pub trait Caster<S> {
    /// Converts `source` and assigns it into `target`.
    fn cast(&self, source: S, target: &mut dyn Reflect) -> Result<(), CastError>;
}

/// Selects the built-in [`Caster`] for a source type.
///
/// Implemented for [`Value`], `Box<dyn Reflect>` and the plain scalar types;
/// [`set_values`](crate::access::set_values) resolves the strategy through
/// this trait at compile time, per mapping value type.
pub trait CastSource: Sized {
    /// The built-in strategy for this source type.
    type Caster: Caster<Self> + Default;
}

// -----------------------------------------------------------------------------
// Built-in casters

/// Extracts the exact payload of a boxed reflected value.
///
/// The payload's concrete type must equal the field's declared type; no
/// conversion is attempted.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflectCaster;

impl Caster<Box<dyn Reflect>> for ReflectCaster {
    fn cast(&self, source: Box<dyn Reflect>, target: &mut dyn Reflect) -> Result<(), CastError> {
        let expected = target.type_name();
        target.set(source).map_err(|payload| CastError::WrongType {
            expected,
            found: payload.type_name(),
        })
    }
}

/// Extracts a [`Value`] through its active tag.
///
/// `Int` applies to every integer field and `Float` to every float field
/// (widths convert); a differing tag fails. This mirrors reading a tagged
/// union through the wrong alternative.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValueCaster;

impl Caster<Value> for ValueCaster {
    #[inline]
    fn cast(&self, source: Value, target: &mut dyn Reflect) -> Result<(), CastError> {
        target.try_apply(&source)
    }
}

/// Converts a plain scalar source toward the field's kind.
///
/// The source is first widened into a [`Value`] and then coerced across the
/// `Int`/`Float` boundary to match the field, so an integer source can fill a
/// float field and vice versa. Precision loss is silent, as with
/// [`set_value`](crate::access::set_value).
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertCaster;

impl<S: Into<Value>> Caster<S> for ConvertCaster {
    fn cast(&self, source: S, target: &mut dyn Reflect) -> Result<(), CastError> {
        let value = source.into().coerced_to(target.reflect_ref().kind());
        target.try_apply(&value)
    }
}

impl CastSource for Value {
    type Caster = ValueCaster;
}

impl CastSource for Box<dyn Reflect> {
    type Caster = ReflectCaster;
}

macro_rules! impl_cast_source_convert {
    ($($ty:ty),* $(,)?) => {$(
        impl CastSource for $ty {
            type Caster = ConvertCaster;
        }
    )*};
}

impl_cast_source_convert!(
    i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool, String, &str,
);

impl CastSource for DynamicRecord {
    type Caster = ValueCaster;
}

impl Caster<DynamicRecord> for ValueCaster {
    #[inline]
    fn cast(&self, source: DynamicRecord, target: &mut dyn Reflect) -> Result<(), CastError> {
        target.try_apply(&Value::Record(source))
    }
}
