use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;

use crate::info::RecordInfo;
use crate::ops::{CastError, ValueRef};
use crate::{Reflect, Value};

// -----------------------------------------------------------------------------
// Record trait

/// Ordered, name-addressable access to a record's named fields.
///
/// This is the decomposition/lookup engine the rest of the crate is built on:
/// the [accessors](crate::access), the map projections, the visitors and the
/// JSON serializer all reach fields exclusively through this trait.
///
/// A record is any plain struct whose non-ignored members, in declaration
/// order, form the field list. Use [the derive macro](crate::derive::Record)
/// to implement this trait; members marked `#[record(ignore)]` are
/// structurally present but invisible to every method here ([`field_len`]
/// does not count them).
///
/// Lookup by name is **first-match in declaration order**: should two fields
/// share a reflected name, the earliest declared one wins and the later one
/// is unreachable by name.
///
/// Nested records held in a named field are opaque record-kind values; they
/// are not flattened, consumers recurse explicitly.
///
/// # Examples
///
/// ```
/// use record_reflect::derive::Record;
/// use record_reflect::ops::Record;
///
/// #[derive(Record)]
/// struct Player {
///     max_health: i32,
///     damage: f32,
///     #[record(ignore)]
///     cur_health: i32,
/// }
///
/// let player = Player { max_health: 100, damage: 10.0, cur_health: 50 };
/// let record: &dyn Record = &player;
///
/// assert_eq!(record.field_len(), 2);
/// assert_eq!(record.name_at(0), Some("max_health"));
/// assert_eq!(record.field_as::<f32>("damage"), Some(&10.0));
/// assert!(record.field("cur_health").is_none());
/// ```
///
/// [`field_len`]: Record::field_len
pub trait Record: Reflect {
    /// Returns the first named field called `name` as a `&dyn Reflect`.
    ///
    /// Returns `None` if no named field carries that name. Cost is linear in
    /// the number of named fields, short-circuiting on the first match.
    fn field(&self, name: &str) -> Option<&dyn Reflect>;

    /// Returns the first named field called `name` as a `&mut dyn Reflect`.
    ///
    /// Returns `None` if no named field carries that name.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect>;

    /// Returns the named field at `index` (declaration order).
    ///
    /// Returns `None` if `index` is out of bounds.
    fn field_at(&self, index: usize) -> Option<&dyn Reflect>;

    /// Returns the named field at `index` mutably.
    ///
    /// Returns `None` if `index` is out of bounds.
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect>;

    /// Returns the name of the field at `index`.
    fn name_at(&self, index: usize) -> Option<&str>;

    /// Returns the number of named fields.
    ///
    /// Ignored members do not count.
    fn field_len(&self) -> usize;

    /// Returns an iterator over the named field values in declaration order.
    fn iter_fields(&self) -> FieldIter<'_>;

    /// Returns the static registry of the record type this value has (or
    /// represents, for a [`DynamicRecord`] built from a typed record).
    ///
    /// Runtime-built records with no represented type return `None`.
    #[inline]
    fn represented_info(&self) -> Option<&'static RecordInfo> {
        None
    }

    /// Snapshots this record into a [`DynamicRecord`].
    ///
    /// The snapshot carries boxed clones of the named fields only and has no
    /// ownership link back to this record.
    fn to_dynamic_record(&self) -> DynamicRecord {
        let mut dynamic = DynamicRecord::with_capacity(self.field_len());
        dynamic.set_represented_info(self.represented_info());
        for index in 0..self.field_len() {
            if let (Some(name), Some(value)) = (self.name_at(index), self.field_at(index)) {
                dynamic.insert_boxed(name.to_string(), value.clone_value());
            }
        }
        dynamic
    }
}

impl dyn Record {
    /// Returns a typed reference to the first field called `name`.
    ///
    /// Returns `None` if the field does not exist **or** its declared type is
    /// not exactly `T`.
    #[inline]
    pub fn field_as<T: Reflect>(&self, name: &str) -> Option<&T> {
        self.field(name).and_then(<dyn Reflect>::downcast_ref)
    }

    /// Returns a typed mutable reference to the first field called `name`.
    ///
    /// Returns `None` if the field does not exist **or** its declared type is
    /// not exactly `T`.
    #[inline]
    pub fn field_mut_as<T: Reflect>(&mut self, name: &str) -> Option<&mut T> {
        self.field_mut(name).and_then(<dyn Reflect>::downcast_mut)
    }
}

// -----------------------------------------------------------------------------
// Field Iterator

/// An iterator over the named field values of a record, in declaration order.
///
/// # Examples
///
/// ```
/// use record_reflect::derive::Record;
/// use record_reflect::ops::Record;
///
/// #[derive(Record)]
/// struct Pair {
///     a: i32,
///     b: i32,
/// }
///
/// let pair = Pair { a: 1, b: 2 };
/// let mut iter = pair.iter_fields();
///
/// assert_eq!(iter.len(), 2);
/// assert_eq!(iter.next().and_then(|v| v.downcast_ref::<i32>()), Some(&1));
/// ```
pub struct FieldIter<'a> {
    record: &'a dyn Record,
    index: usize,
}

impl<'a> FieldIter<'a> {
    /// Creates a new iterator over `record`'s named fields.
    #[inline]
    pub const fn new(record: &'a dyn Record) -> Self {
        FieldIter { record, index: 0 }
    }
}

impl<'a> Iterator for FieldIter<'a> {
    type Item = &'a dyn Reflect;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.record.field_at(self.index);
        self.index += value.is_some() as usize;
        value
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.record.field_len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for FieldIter<'_> {}

// -----------------------------------------------------------------------------
// DynamicRecord

/// A record built at runtime from `(name, boxed value)` pairs.
///
/// `DynamicRecord` is the owned snapshot form of record data: nested records
/// inside a [`Value`] are carried as dynamic records, and
/// [`Record::to_dynamic_record`] produces one from any typed record. It can
/// also be assembled by hand and applied onto a typed record through the
/// setters.
///
/// Field order is insertion order; inserting an existing name overwrites the
/// earliest field with that name in place.
///
/// # Examples
///
/// ```
/// use record_reflect::ops::{DynamicRecord, Record};
///
/// let mut dynamic = DynamicRecord::new();
/// dynamic.insert("max_health", 120_i32);
/// dynamic.insert("damage", 10.0_f32);
///
/// assert_eq!(dynamic.field_len(), 2);
/// assert_eq!(dynamic.index_of("damage"), Some(1));
/// ```
#[derive(Default)]
pub struct DynamicRecord {
    represented: Option<&'static RecordInfo>,
    names: Vec<Cow<'static, str>>,
    fields: Vec<Box<dyn Reflect>>,
}

impl DynamicRecord {
    /// Creates an empty `DynamicRecord`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            represented: None,
            names: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Creates an empty `DynamicRecord` with at least the given capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            represented: None,
            names: Vec::with_capacity(capacity),
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Sets the [`RecordInfo`] of the record type this value represents.
    #[inline]
    pub const fn set_represented_info(&mut self, info: Option<&'static RecordInfo>) {
        self.represented = info;
    }

    /// Appends a boxed value as a field, overwriting an existing field with
    /// the same name.
    pub fn insert_boxed(&mut self, name: impl Into<Cow<'static, str>>, value: Box<dyn Reflect>) {
        let name: Cow<'static, str> = name.into();
        match self.index_of(&name) {
            Some(index) => self.fields[index] = value,
            None => {
                self.names.push(name);
                self.fields.push(value);
            }
        }
    }

    /// Appends a value as a field, overwriting an existing field with the
    /// same name.
    #[inline]
    pub fn insert<T: Reflect>(&mut self, name: impl Into<Cow<'static, str>>, value: T) {
        self.insert_boxed(name, Box::new(value));
    }

    /// Returns the index of the first field called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

impl Record for DynamicRecord {
    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        let index = self.index_of(name)?;
        Some(&*self.fields[index])
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Reflect> {
        let index = self.index_of(name)?;
        Some(&mut *self.fields[index])
    }

    #[inline]
    fn field_at(&self, index: usize) -> Option<&dyn Reflect> {
        self.fields.get(index).map(|field| &**field)
    }

    #[inline]
    fn field_at_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
        self.fields.get_mut(index).map(|field| &mut **field)
    }

    #[inline]
    fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(AsRef::as_ref)
    }

    #[inline]
    fn field_len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    fn iter_fields(&self) -> FieldIter<'_> {
        FieldIter::new(self)
    }

    #[inline]
    fn represented_info(&self) -> Option<&'static RecordInfo> {
        self.represented
    }

    fn to_dynamic_record(&self) -> DynamicRecord {
        self.clone()
    }
}

impl Reflect for DynamicRecord {
    #[inline]
    fn type_name(&self) -> &'static str {
        "record_reflect::ops::DynamicRecord"
    }

    #[inline]
    fn reflect_ref(&self) -> ValueRef<'_> {
        ValueRef::Record(self)
    }

    #[inline]
    fn to_value(&self) -> Value {
        Value::Record(self.clone())
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
            Value::Record(record) => crate::impls::record_try_apply(self, record),
            other => Err(CastError::WrongKind {
                expected: crate::ValueKind::Record,
                found: other.kind(),
            }),
        }
    }

    #[inline]
    fn reflect_partial_eq(&self, other: &dyn Reflect) -> Option<bool> {
        crate::impls::record_partial_eq(self, other)
    }

    fn reflect_debug(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamicRecord(")?;
        crate::impls::record_debug(self, f)?;
        write!(f, ")")
    }
}

impl Clone for DynamicRecord {
    fn clone(&self) -> Self {
        Self {
            represented: self.represented,
            names: self.names.clone(),
            fields: self.fields.iter().map(|field| field.clone_value()).collect(),
        }
    }
}

impl fmt::Debug for DynamicRecord {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.reflect_debug(f)
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::{DynamicRecord, Record};

    #[test]
    fn insert_overwrites_first_match() {
        let mut dynamic = DynamicRecord::new();
        dynamic.insert("a", 1_i32);
        dynamic.insert("b", 2_i32);
        dynamic.insert("a", 3_i32);

        let record: &dyn Record = &dynamic;
        assert_eq!(record.field_len(), 2);
        assert_eq!(record.field_as::<i32>("a"), Some(&3));
        assert_eq!(record.name_at(0), Some("a"));
    }

    #[test]
    fn lookup_is_declaration_order() {
        let mut dynamic = DynamicRecord::new();
        dynamic.insert("x", 1_i32);
        dynamic.insert("y", 2_i32);

        let record: &dyn Record = &dynamic;
        assert_eq!(record.name_at(0), Some("x"));
        assert_eq!(record.name_at(1), Some("y"));
        assert!(record.name_at(2).is_none());
    }
}
