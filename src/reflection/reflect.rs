use alloc::boxed::Box;
use core::any::{Any, TypeId};
use core::fmt;

use crate::Value;
use crate::ops::{CastError, ValueRef};

// -----------------------------------------------------------------------------
// Reflect

/// The capability every reflectable field value must provide.
///
/// A type implementing `Reflect` can sit in a record member and be reached
/// through name-based lookup as a `&dyn Reflect`. The trait exposes the
/// value's identity, a [kind view](ValueRef) for inspection, conversion to the
/// dynamic [`Value`] union, and the two assignment paths used by the setters:
/// exact-type replacement ([`set`]) and tag-checked application
/// ([`try_apply`]).
///
/// Implementations are provided for the scalar leaf types (integers, floats,
/// `bool`, `String`, `&'static str`), generated for records by
/// [`derive::Record`], and available for arbitrary `Clone` types through
/// [`impl_reflect_opaque!`].
///
/// # Examples
///
/// ```
/// use record_reflect::Reflect;
/// use record_reflect::ops::ValueRef;
///
/// let x = 32_i32;
/// let r: &dyn Reflect = &x;
///
/// assert!(r.is::<i32>());
/// assert!(matches!(r.reflect_ref(), ValueRef::Int(32)));
/// ```
///
/// [`set`]: Reflect::set
/// [`try_apply`]: Reflect::try_apply
/// [`derive::Record`]: crate::derive::Record
/// [`impl_reflect_opaque!`]: crate::impl_reflect_opaque
pub trait Reflect: Any + Send + Sync {
    /// Returns the [`TypeId`] of the underlying value.
    ///
    /// Calling [`Any::type_id`] on a `Box<dyn Reflect>` yields the type id of
    /// the container rather than the boxed value, which is prone to errors;
    /// this method always refers to the concrete value.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_reflect::Reflect;
    /// use core::any::TypeId;
    ///
    /// let x: Box<dyn Reflect> = Box::new(32_i32);
    /// assert_eq!(x.ty_id(), TypeId::of::<i32>());
    /// ```
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns a diagnostic name for the underlying type.
    #[inline]
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Returns the borrowed [kind view](ValueRef) of this value.
    ///
    /// Scalars are widened on read: every integer width presents as `i64`,
    /// both float widths as `f64`.
    fn reflect_ref(&self) -> ValueRef<'_>;

    /// Returns an owned snapshot of this value as a dynamic [`Value`].
    ///
    /// Records snapshot to [`Value::Record`]; the snapshot has no ownership
    /// link back to this value.
    fn to_value(&self) -> Value;

    /// Returns a boxed clone of this value.
    ///
    /// Scalar and opaque types clone to their own type; records clone to a
    /// [`DynamicRecord`](crate::ops::DynamicRecord) carrying only the named
    /// fields.
    fn clone_value(&self) -> Box<dyn Reflect>;

    /// Performs an exact-type replacement of this value.
    ///
    /// Fails (returning the input unchanged) when the boxed value is not of
    /// this value's concrete type. No conversion is attempted.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_reflect::Reflect;
    ///
    /// let mut x = 1_i32;
    /// x.set(Box::new(7_i32)).unwrap();
    /// assert_eq!(x, 7);
    ///
    /// assert!(x.set(Box::new(1.5_f64)).is_err());
    /// ```
    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>>;

    /// Performs a tag-checked assignment from a dynamic [`Value`].
    ///
    /// The value's active tag must match this type's kind: `Int` applies to
    /// every integer width and `Float` to both float widths (converting
    /// across widths), `Record` applies field-wise. A differing tag is a
    /// [`CastError`] and leaves this value untouched.
    fn try_apply(&mut self, value: &Value) -> Result<(), CastError>;

    /// Returns a "partial equality" comparison result.
    ///
    /// `None` means the underlying type does not support equality testing;
    /// that is the default for opaque types.
    #[inline]
    fn reflect_partial_eq(&self, _other: &dyn Reflect) -> Option<bool> {
        None
    }

    /// Debug formatter for the value.
    ///
    /// The default renders through the kind view, so scalar and record types
    /// need no override; opaque types print as `Opaque(type_name)`.
    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ValueRef::Bool(v) => fmt::Debug::fmt(&v, f),
            ValueRef::Int(v) => fmt::Debug::fmt(&v, f),
            ValueRef::Float(v) => fmt::Debug::fmt(&v, f),
            ValueRef::Str(v) => fmt::Debug::fmt(&v, f),
            ValueRef::Record(v) => crate::impls::record_debug(v, f),
            ValueRef::Opaque(_) => write!(f, "Opaque({})", self.type_name()),
        }
    }
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_reflect::Reflect;
    ///
    /// let x: &dyn Reflect = &10_i32;
    /// assert!(x.is::<i32>());
    /// assert!(!x.is::<u32>());
    /// ```
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    ///
    /// Returns `None` if the underlying value is not of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_reflect::Reflect;
    ///
    /// let x: &dyn Reflect = &10_i32;
    /// assert_eq!(x.downcast_ref::<i32>(), Some(&10));
    /// ```
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T` by mutable reference.
    ///
    /// Returns `None` if the underlying value is not of type `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_reflect::Reflect;
    ///
    /// let mut x = 10_i32;
    /// let r: &mut dyn Reflect = &mut x;
    /// *r.downcast_mut::<i32>().unwrap() += 2;
    ///
    /// assert_eq!(x, 12);
    /// ```
    #[inline]
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        <dyn Any>::downcast_mut(self)
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait
    /// object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use record_reflect::Reflect;
    ///
    /// let x: Box<dyn Reflect> = Box::new(10_i32);
    /// assert_eq!(x.take::<i32>().unwrap(), 10);
    /// ```
    pub fn take<T: Reflect>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        if !self.is::<T>() {
            return Err(self);
        }
        match <Box<dyn Any>>::downcast::<T>(self) {
            Ok(value) => Ok(*value),
            // `is` has already checked the concrete type.
            Err(_) => unreachable!(),
        }
    }
}

impl fmt::Debug for dyn Reflect {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}
