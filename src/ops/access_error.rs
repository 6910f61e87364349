use alloc::borrow::Cow;
use alloc::string::ToString;
use core::{error, fmt};

// -----------------------------------------------------------------------------
// AccessError

/// An error from the name-addressed accessors.
///
/// Exactly two kinds exist:
///
/// - [`FieldNotFound`](AccessError::FieldNotFound): no named field carries
///   the queried name.
/// - [`TypeMismatch`](AccessError::TypeMismatch): a named field carries the
///   name, but its type fails the active constraint (not convertible for
///   [`get_value`], not exactly equal for [`get_value_strict`] and the field
///   reference accessors).
///
/// The non-raising `try_*` accessors collapse both kinds into a single absent
/// result; callers that need to discriminate must use the raising form.
///
/// [`get_value`]: crate::access::get_value
/// [`get_value_strict`]: crate::access::get_value_strict
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// No named field carries this name.
    FieldNotFound {
        /// The queried field name.
        name: Cow<'static, str>,
    },
    /// A named field carries this name, but its type fails the active
    /// constraint.
    TypeMismatch {
        /// The queried field name.
        name: Cow<'static, str>,
    },
}

impl AccessError {
    pub(crate) fn field_not_found(name: &str) -> Self {
        AccessError::FieldNotFound {
            name: Cow::Owned(name.to_string()),
        }
    }

    pub(crate) fn type_mismatch(name: &str) -> Self {
        AccessError::TypeMismatch {
            name: Cow::Owned(name.to_string()),
        }
    }

    /// Returns the field name the failed access queried.
    pub fn name(&self) -> &str {
        match self {
            AccessError::FieldNotFound { name } => name,
            AccessError::TypeMismatch { name } => name,
        }
    }
}

impl fmt::Display for AccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessError::FieldNotFound { name } => {
                write!(f, "field not found: `{name}`")
            }
            AccessError::TypeMismatch { name } => {
                write!(f, "field type mismatch: `{name}`")
            }
        }
    }
}

impl error::Error for AccessError {}
