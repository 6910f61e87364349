//! Serialization of reflected values.
//!
//! [`SerializeDriver`] is a format-agnostic [`serde_core::Serialize`]
//! adapter driving any serde serializer over the reflection kinds:
//! primitives serialize as themselves, records as maps of their named fields
//! in declaration order.
//!
//! [`serialize_json`] (behind the default `json` feature) renders through
//! `serde_json` with the crate's fixed-precision [`JsonFormatter`]:
//! floats print as fixed-point decimals with a compile-time fractional-digit
//! count (default 2), object entries separate with `", "` and `": "`, and
//! values without a dynamic representation vanish silently.

#[cfg(feature = "json")]
mod json;
mod ser;

#[cfg(feature = "json")]
pub use json::{JsonFormatter, serialize_json, serialize_json_with_precision};
pub use ser::SerializeDriver;
