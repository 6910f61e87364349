#![doc = include_str!("../README.md")]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self
//
// The derive macro emits absolute `::record_reflect::..` paths. This alias
// lets those paths resolve inside the defining crate as well, so the macro
// can be used from this crate's own tests and doc examples.
extern crate self as record_reflect;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod reflection;
mod value;

pub mod access;
pub mod impls;
pub mod info;
pub mod ops;
pub mod serde;

// -----------------------------------------------------------------------------
// Top-Level exports

/// Re-exports for macro-generated code. Not public API.
#[doc(hidden)]
pub mod __macro_exports {
    pub use alloc::boxed::Box;
}

pub use reflection::{FromReflect, Reflect};
pub use value::{Value, ValueKind};

pub use record_reflect_derive as derive;
