use core::{error, fmt};

use crate::ValueKind;

// -----------------------------------------------------------------------------
// CastError

/// An extraction failure from a [`Caster`](crate::access::Caster) or one of
/// the dynamic assignment paths ([`Reflect::set`], [`Reflect::try_apply`]).
///
/// This is the caster's own error taxonomy; [`set_values`] propagates it to
/// the caller unconverted, it is never wrapped into [`AccessError`].
///
/// [`Reflect::set`]: crate::Reflect::set
/// [`Reflect::try_apply`]: crate::Reflect::try_apply
/// [`set_values`]: crate::access::set_values
/// [`AccessError`]: crate::ops::AccessError
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastError {
    /// A [`Value`](crate::Value) was extracted through the wrong active tag.
    WrongKind {
        /// The target field's kind.
        expected: ValueKind,
        /// The source value's active tag.
        found: ValueKind,
    },
    /// A boxed payload's concrete type differs from the target's.
    WrongType {
        /// The target field's type.
        expected: &'static str,
        /// The payload's concrete type.
        found: &'static str,
    },
    /// The target type cannot absorb any dynamic value.
    Unsupported {
        /// The target field's type.
        type_name: &'static str,
    },
}

impl fmt::Display for CastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastError::WrongKind { expected, found } => {
                write!(f, "cannot cast a `{found}` value into a `{expected}` field")
            }
            CastError::WrongType { expected, found } => {
                write!(f, "cannot cast a `{found}` payload into a `{expected}` field")
            }
            CastError::Unsupported { type_name } => {
                write!(f, "type `{type_name}` does not accept dynamic values")
            }
        }
    }
}

impl error::Error for CastError {}
