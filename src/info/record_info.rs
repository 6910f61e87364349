use core::fmt;

use crate::info::NamedField;

// -----------------------------------------------------------------------------
// RecordInfo

/// The ordered field registry of a record type.
///
/// Holds the record's named fields in **declaration order**; members hidden
/// with `#[record(ignore)]` never appear here. Lookup by name is a linear
/// first-match scan, mirroring the runtime lookup contract: if two fields
/// share a reflected name, the earliest declared one wins.
///
/// # Examples
///
/// ```
/// use record_reflect::derive::Record;
/// use record_reflect::info::Typed;
///
/// #[derive(Record)]
/// struct Player {
///     max_health: i32,
///     damage: f32,
///     #[record(ignore)]
///     cur_health: i32,
/// }
///
/// let info = Player::record_info();
///
/// assert_eq!(info.type_name(), "Player");
/// assert_eq!(info.field_len(), 2); // `cur_health` is invisible
/// assert!(info.field("max_health").unwrap().type_is::<i32>());
/// assert_eq!(info.index_of("cur_health"), None);
/// ```
#[derive(Debug)]
pub struct RecordInfo {
    type_name: &'static str,
    fields: &'static [NamedField],
}

impl RecordInfo {
    /// Creates a new registry from fields in declaration order.
    pub const fn new(type_name: &'static str, fields: &'static [NamedField]) -> Self {
        Self { type_name, fields }
    }

    /// Returns the record type's name.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the descriptor of the first field named `name`, if present.
    pub fn field(&self, name: &str) -> Option<&NamedField> {
        self.fields.iter().find(|field| field.name() == name)
    }

    /// Returns the descriptor at `index`, if present.
    #[inline]
    pub fn field_at(&self, index: usize) -> Option<&NamedField> {
        self.fields.get(index)
    }

    /// Returns the index of the first field named `name`, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name() == name)
    }

    /// Returns the number of named fields.
    #[inline]
    pub const fn field_len(&self) -> usize {
        self.fields.len()
    }

    /// Returns an iterator over the descriptors in declaration order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &NamedField> {
        self.fields.iter()
    }
}

impl fmt::Display for RecordInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ ", self.type_name)?;
        for (i, field) in self.fields.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", field.name(), field.type_name())?;
        }
        write!(f, " }}")
    }
}
