use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// NamedField

/// The descriptor of one named field: an immutable, compile-time name plus
/// the field's type identity.
///
/// The name is fixed when the descriptor is built (by the derive macro) and
/// never changes for the lifetime of the type. Name equality is exact text
/// comparison. Type identity is held as function pointers so the descriptor
/// stays const-constructible; the `TypeId` is produced on demand.
///
/// # Examples
///
/// ```
/// use record_reflect::info::NamedField;
///
/// let field = NamedField::new::<f32>("damage");
///
/// assert_eq!(field.name(), "damage");
/// assert!(field.type_is::<f32>());
/// ```
#[derive(Clone)]
pub struct NamedField {
    name: &'static str,
    // Evaluated on access; keeping fn pointers keeps `new` a const fn.
    ty_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
}

impl NamedField {
    /// Creates a new descriptor for the field `name` of type `T`.
    pub const fn new<T: Any>(name: &'static str) -> Self {
        Self {
            name,
            ty_id: TypeId::of::<T>,
            type_name: core::any::type_name::<T>,
        }
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the `TypeId` of the field's declared type.
    #[inline]
    pub fn ty_id(&self) -> TypeId {
        (self.ty_id)()
    }

    /// Returns a diagnostic name for the field's declared type.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Checks whether the field's declared type is exactly `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }
}

impl fmt::Debug for NamedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedField")
            .field("name", &self.name)
            .field("type", &self.type_name())
            .finish()
    }
}
