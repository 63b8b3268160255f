//! Export catalog for the target library.
//!
//! An immutable, compile-time table mapping each export name to its calling
//! signature. The table is declarative data: one line per export in
//! [`table`], expanded by a macro into the [`Export`] enum. The binder core
//! consumes the catalog read-only and shares its key space with the symbol
//! cache; nothing here is mutated at runtime.

mod table;
mod types;

pub use table::Export;
pub use types::{Signature, TypeTag};
