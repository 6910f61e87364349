//! Reflection implementations for leaf types, plus the shared record
//! algorithms.
//!
//! Scalar leaf types (integers, floats, `bool`, `String`, `&'static str`)
//! receive [`Reflect`](crate::Reflect)/[`FromReflect`](crate::FromReflect)
//! implementations here. Other leaf types can opt in as opaque values with
//! [`impl_reflect_opaque!`](crate::impl_reflect_opaque).
//!
//! The `record_*` free functions are the field-wise algorithms shared by
//! derived records and [`DynamicRecord`](crate::ops::DynamicRecord).

mod helpers;
mod opaque;
mod primitives;

pub use helpers::{record_debug, record_partial_eq, record_try_apply};
