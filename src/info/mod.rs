//! Compile-time descriptors for records and their named fields.
//!
//! [`NamedField`] is the immutable (name, type) descriptor of one reflectable
//! member; [`RecordInfo`] is the ordered registry of a record type's named
//! fields; [`Typed`] hands out a record type's `&'static RecordInfo`.
//!
//! All of this is const-constructed by [the derive macro](crate::derive::Record);
//! a descriptor never changes after the type is compiled.

mod field_info;
mod record_info;

pub use field_info::NamedField;
pub use record_info::RecordInfo;

// -----------------------------------------------------------------------------
// Typed

/// Static access to a record type's [`RecordInfo`].
///
/// Implemented by [the derive macro](crate::derive::Record) for every derived
/// record. Runtime-built [`DynamicRecord`](crate::ops::DynamicRecord)s do not
/// implement this; they may instead carry the info of the type they represent
/// (see [`Record::represented_info`](crate::ops::Record::represented_info)).
///
/// # Examples
///
/// ```
/// use record_reflect::derive::Record;
/// use record_reflect::info::Typed;
///
/// #[derive(Record)]
/// struct Health {
///     current: i32,
///     max: i32,
/// }
///
/// let info = Health::record_info();
/// assert_eq!(info.field_len(), 2);
/// assert_eq!(info.index_of("max"), Some(1));
/// ```
pub trait Typed {
    /// Returns the compile-time field registry of this record type.
    fn record_info() -> &'static RecordInfo;
}
