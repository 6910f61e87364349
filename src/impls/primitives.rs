use alloc::borrow::ToOwned;
use alloc::boxed::Box;
use alloc::string::String;

use crate::ops::{CastError, ValueRef};
use crate::{FromReflect, Reflect, Value, ValueKind};

// -----------------------------------------------------------------------------
// Integers

macro_rules! impl_reflect_int {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> ValueRef<'_> {
                ValueRef::Int(*self as i64)
            }

            #[inline]
            fn to_value(&self) -> Value {
                Value::Int(*self as i64)
            }

            #[inline]
            fn clone_value(&self) -> Box<dyn Reflect> {
                Box::new(*self)
            }

            fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
                *self = value.take::<Self>()?;
                Ok(())
            }

            fn try_apply(&mut self, value: &Value) -> Result<(), CastError> {
                match value {
                    Value::Int(v) => {
                        *self = *v as $ty;
                        Ok(())
                    }
                    other => Err(CastError::WrongKind {
                        expected: ValueKind::Int,
                        found: other.kind(),
                    }),
                }
            }

            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                Some(other.downcast_ref::<Self>().is_some_and(|other| self == other))
            }
        }

        impl FromReflect for $ty {
            fn from_reflect(value: &dyn Reflect) -> Option<Self> {
                match value.reflect_ref() {
                    ValueRef::Int(v) => Some(v as $ty),
                    ValueRef::Float(v) => Some(v as $ty),
                    _ => None,
                }
            }
        }
    )*};
}

impl_reflect_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// -----------------------------------------------------------------------------
// Floats

macro_rules! impl_reflect_float {
    ($($ty:ty),* $(,)?) => {$(
        impl Reflect for $ty {
            #[inline]
            fn reflect_ref(&self) -> ValueRef<'_> {
                ValueRef::Float(*self as f64)
            }

            #[inline]
            fn to_value(&self) -> Value {
                Value::Float(*self as f64)
            }

            #[inline]
            fn clone_value(&self) -> Box<dyn Reflect> {
                Box::new(*self)
            }

            fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
                *self = value.take::<Self>()?;
                Ok(())
            }

            fn try_apply(&mut self, value: &Value) -> Result<(), CastError> {
                match value {
                    Value::Float(v) => {
                        *self = *v as $ty;
                        Ok(())
                    }
                    other => Err(CastError::WrongKind {
                        expected: ValueKind::Float,
                        found: other.kind(),
                    }),
                }
            }

            fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
                Some(other.downcast_ref::<Self>().is_some_and(|other| self == other))
            }
        }

        impl FromReflect for $ty {
            fn from_reflect(value: &dyn Reflect) -> Option<Self> {
                match value.reflect_ref() {
                    ValueRef::Int(v) => Some(v as $ty),
                    ValueRef::Float(v) => Some(v as $ty),
                    _ => None,
                }
            }
        }
    )*};
}

impl_reflect_float!(f32, f64);

// -----------------------------------------------------------------------------
// bool

impl Reflect for bool {
    #[inline]
    fn reflect_ref(&self) -> ValueRef<'_> {
        ValueRef::Bool(*self)
    }

    #[inline]
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    #[inline]
    fn clone_value(&self) -> Box<dyn Reflect> {
        Box::new(*self)
    }

    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    fn try_apply(&mut self, value: &Value) -> Result<(), CastError> {
        match value {
            Value::Bool(v) => {
                *self = *v;
                Ok(())
            }
            other => Err(CastError::WrongKind {
                expected: ValueKind::Bool,
                found: other.kind(),
            }),
        }
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        Some(other.downcast_ref::<Self>().is_some_and(|other| self == other))
    }
}

impl FromReflect for bool {
    fn from_reflect(value: &dyn Reflect) -> Option<Self> {
        match value.reflect_ref() {
            ValueRef::Bool(v) => Some(v),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Strings

impl Reflect for String {
    #[inline]
    fn reflect_ref(&self) -> ValueRef<'_> {
        ValueRef::Str(self)
    }

    #[inline]
    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }

    #[inline]
    fn clone_value(&self) -> Box<dyn Reflect> {
        Box::new(self.clone())
    }

    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    fn try_apply(&mut self, value: &Value) -> Result<(), CastError> {
        match value {
            Value::Str(v) => {
                self.clone_from(v);
                Ok(())
            }
            other => Err(CastError::WrongKind {
                expected: ValueKind::Str,
                found: other.kind(),
            }),
        }
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        Some(other.downcast_ref::<Self>().is_some_and(|other| self == other))
    }
}

impl FromReflect for String {
    fn from_reflect(value: &dyn Reflect) -> Option<Self> {
        match value.reflect_ref() {
            ValueRef::Str(v) => Some(v.to_owned()),
            _ => None,
        }
    }
}

impl Reflect for &'static str {
    #[inline]
    fn reflect_ref(&self) -> ValueRef<'_> {
        ValueRef::Str(*self)
    }

    #[inline]
    fn to_value(&self) -> Value {
        Value::Str((*self).to_owned())
    }

    #[inline]
    fn clone_value(&self) -> Box<dyn Reflect> {
        Box::new(*self)
    }

    fn set(&mut self, value: Box<dyn Reflect>) -> Result<(), Box<dyn Reflect>> {
        *self = value.take::<Self>()?;
        Ok(())
    }

    fn try_apply(&mut self, value: &Value) -> Result<(), CastError> {
        // An owned dynamic string cannot be borrowed for 'static.
        match value {
            Value::Str(_) => Err(CastError::Unsupported { type_name: "&str" }),
            other => Err(CastError::WrongKind {
                expected: ValueKind::Str,
                found: other.kind(),
            }),
        }
    }

    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        Some(other.downcast_ref::<Self>().is_some_and(|other| self == other))
    }
}

impl FromReflect for &'static str {
    fn from_reflect(value: &dyn Reflect) -> Option<Self> {
        // Only an exact `&'static str` can be copied out; an owned string
        // cannot be borrowed for 'static.
        value.downcast_ref::<&'static str>().copied()
    }
}
