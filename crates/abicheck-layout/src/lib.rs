#![doc = include_str!("../README.md")]

#[macro_use]
extern crate tracing;

#[macro_use]
mod macros;

mod layout;
mod packing;
mod validator;

pub use self::layout::{AbiStruct, CatalogEntry, FieldLayout, StructLayout};
pub use self::packing::Packing;
pub use self::validator::{LayoutMismatch, LayoutReport, LayoutValidator, NonConformant};

#[doc(hidden)]
pub use paste::paste;
