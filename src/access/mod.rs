//! Name-addressed access to record fields.
//!
//! Every operation here takes a `&dyn Record` (or `&mut dyn Record`) and a
//! field name, and rides on the lookup engine of
//! [`Record`](crate::ops::Record): first-match in declaration order, linear
//! cost, ignored members invisible.
//!
//! ## Menu
//!
//! - Reading: [`get_value`] (convertible), [`get_value_strict`] (exact type),
//!   [`try_get_value`], [`has_field`].
//! - Live references: [`get_field_with_name`] / [`get_field_with_name_mut`]
//!   and their `try_` forms.
//! - Writing: [`set_value`] (single, silently coercing), [`set_values`] /
//!   [`set_values_with`] (bulk, through a [`Caster`]).
//! - Projections: [`get_value_map`], [`get_field_map`].
//! - Traversal: [`visit_fields`], [`visit_values`].

mod caster;
mod get;
mod map;
mod set;
mod visit;

pub use caster::{CastSource, Caster, ConvertCaster, ReflectCaster, ValueCaster};
pub use get::{
    get_field_with_name, get_field_with_name_mut, get_value, get_value_strict, has_field,
    try_get_field_with_name, try_get_field_with_name_mut, try_get_value,
};
pub use map::{get_field_map, get_value_map};
pub use set::{set_value, set_values, set_values_with};
pub use visit::{FieldRef, VisitFlow, visit_fields, visit_values};
