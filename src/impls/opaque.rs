// -----------------------------------------------------------------------------
// Opaque leaf types

/// Implements [`Reflect`] and [`FromReflect`] for a leaf type with no dynamic
/// representation.
///
/// An opaque value can live in a named field, be looked up, cloned, replaced
/// and moved through [`Value::Opaque`], but it has no kind the dynamic layer
/// understands: the JSON serializer silently omits it and only exact-typed
/// payloads can be assigned into it.
///
/// The type must implement `Clone` (plus `Send + Sync + 'static`, as every
/// reflectable type must).
///
/// # Examples
///
/// ```
/// use record_reflect::{impl_reflect_opaque, Reflect};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct SpawnPoint {
///     x: f32,
///     y: f32,
/// }
///
/// impl_reflect_opaque!(SpawnPoint);
///
/// let point = SpawnPoint { x: 1.0, y: 2.0 };
/// let copy = point.clone_value();
/// assert_eq!(copy.downcast_ref::<SpawnPoint>(), Some(&point));
/// ```
///
/// [`Reflect`]: crate::Reflect
/// [`FromReflect`]: crate::FromReflect
/// [`Value::Opaque`]: crate::Value::Opaque
#[macro_export]
macro_rules! impl_reflect_opaque {
    ($ty:ty) => {
        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> $crate::ops::ValueRef<'_> {
                $crate::ops::ValueRef::Opaque(self)
            }

            #[inline]
            fn to_value(&self) -> $crate::Value {
                $crate::Value::Opaque($crate::Reflect::clone_value(self))
            }

            #[inline]
            fn clone_value(&self) -> $crate::__macro_exports::Box<dyn $crate::Reflect> {
                $crate::__macro_exports::Box::new(::core::clone::Clone::clone(self))
            }

            fn set(
                &mut self,
                value: $crate::__macro_exports::Box<dyn $crate::Reflect>,
            ) -> ::core::result::Result<(), $crate::__macro_exports::Box<dyn $crate::Reflect>> {
                *self = value.take::<Self>()?;
                ::core::result::Result::Ok(())
            }

            fn try_apply(
                &mut self,
                value: &$crate::Value,
            ) -> ::core::result::Result<(), $crate::ops::CastError> {
                match value {
                    $crate::Value::Opaque(v) => {
                        match <dyn $crate::Reflect>::downcast_ref::<Self>(&**v) {
                            ::core::option::Option::Some(v) => {
                                *self = ::core::clone::Clone::clone(v);
                                ::core::result::Result::Ok(())
                            }
                            ::core::option::Option::None => {
                                ::core::result::Result::Err($crate::ops::CastError::WrongType {
                                    expected: ::core::any::type_name::<Self>(),
                                    found: $crate::Reflect::type_name(&**v),
                                })
                            }
                        }
                    }
                    other => ::core::result::Result::Err($crate::ops::CastError::WrongKind {
                        expected: $crate::ValueKind::Opaque,
                        found: other.kind(),
                    }),
                }
            }
        }

        impl $crate::FromReflect for $ty {
            fn from_reflect(value: &dyn $crate::Reflect) -> ::core::option::Option<Self> {
                <dyn $crate::Reflect>::downcast_ref::<Self>(value).cloned()
            }
        }
    };
}
