//! Derive macro for `record_reflect`.
//!
//! See [`Record`].
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static RECORD_ATTRIBUTE_NAME: &str = "record";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;

// -----------------------------------------------------------------------------
// Macros

/// # Record Derivation
///
/// `#[derive(Record)]` turns a plain struct with named fields into a
/// reflectable record by implementing:
///
/// - `Record`: ordered, name-addressable field access,
/// - `Reflect`: the record-kind value capability,
/// - `Typed`: the compile-time field registry (`RecordInfo`),
/// - `FromReflect`: field-wise reconstruction from reflected data.
///
/// Every non-ignored member becomes a named field, in declaration order. The
/// member's type must implement `Reflect` and `FromReflect`: the scalar leaf
/// types work out of the box, nested records derive `Record` themselves, and
/// other leaf types can opt in with `impl_reflect_opaque!`.
///
/// ```rust, ignore
/// #[derive(Record)]
/// struct Player {
///     max_health: i32,
///     damage: f32,
/// }
/// ```
///
/// ## Hiding members
///
/// `#[record(ignore)]` makes a member completely invisible to reflection: it
/// is not part of the registry, `field_len` does not count it, and no
/// accessor, visitor, map or serializer ever reaches it. Because
/// reconstruction cannot see it either, an ignored member's type must
/// implement `Default`.
///
/// ```rust, ignore
/// #[derive(Record)]
/// struct Player {
///     max_health: i32,
///     #[record(ignore)]
///     cur_health: i32, // ordinary data, invisible to reflection
/// }
/// ```
///
/// ## Renaming fields
///
/// `#[record(rename = "...")]` decouples the reflected name from the member
/// identifier:
///
/// ```rust, ignore
/// #[derive(Record)]
/// struct Config {
///     #[record(rename = "max-retries")]
///     max_retries: u32,
/// }
/// ```
///
/// Reflected names are matched first-in-declaration-order; if a rename
/// collides with another field's name, the earliest declared field wins and
/// the later one becomes unreachable by name (the compiler flags the dead
/// match arm).
///
/// ## Unsupported shapes
///
/// Enums, tuple structs, unit structs and generic types are rejected with a
/// compile error; records are concrete data carriers.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    let record = match derive_data::ReflectRecord::parse(&ast) {
        Ok(record) => record,
        Err(err) => return err.into_compile_error().into(),
    };

    impls::expand(&record).into()
}
