//! The record decomposition/lookup engine and its data types.
//!
//! ## Menu
//!
//! - [`Record`]: the trait giving ordered, name-addressable access to a
//!   record's named fields. Implemented by
//!   [the derive macro](crate::derive::Record).
//! - [`DynamicRecord`]: a runtime-built record, used as the owned snapshot
//!   form of record values.
//! - [`ValueRef`]: the borrowed kind view of a reflected value.
//! - [`FieldIter`]: iterator over a record's field values.
//! - [`AccessError`] / [`CastError`]: the two error taxonomies, name/type
//!   access failures and caster extraction failures. They are deliberately
//!   separate types: a caster's failure is never translated into an access
//!   error.

mod access_error;
mod cast_error;
mod kind;
mod record_ops;

pub use access_error::AccessError;
pub use cast_error::CastError;
pub use kind::ValueRef;
pub use record_ops::{DynamicRecord, FieldIter, Record};
