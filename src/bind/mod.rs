//! Lazy symbol binding.
//!
//! Resolves catalog exports from the target shared library on first use and
//! memoizes every successful resolution for the remainder of the process.
//!
//! # Architecture
//!
//! ```text
//! typed entry point (crate::wrappers)
//!       │
//!       ▼
//! Binder::resolve(Export)
//!       │
//!       ├─ cache hit ──────────────► BoundSymbol (no loader traffic)
//!       │
//!       └─ cache miss
//!              │
//!              ▼
//!       SymbolSource (SharedLibrary / libloading)
//!              │
//!              ▼
//!       SymbolCache slot (write-once) ──► BoundSymbol
//! ```
//!
//! Each cache slot binds at most once; concurrent callers racing on the
//! same unresolved export serialize on the slot and observe a single
//! resolution. Failures are returned to the caller and never cached, so a
//! later call starts over. [`Binder::resolve_many`] batches the not yet
//! bound subset of a request into one loader round-trip and commits the
//! results all-or-nothing.

mod binder;
mod cache;
mod loader;

pub use binder::Binder;
pub use cache::{BoundSymbol, SymbolCache};
pub use loader::{SharedLibrary, SymbolSource};

pub(crate) use loader::platform_library_name;

use thiserror::Error;

/// Error type for symbol resolution.
///
/// Neither variant is ever cached: a failed resolution leaves the cache
/// slot unbound and the next attempt starts from scratch.
#[derive(Debug, Clone, Error)]
pub enum BindError {
    /// The shared library could not be located or opened. Fatal to every
    /// resolution attempted in the failing call.
    #[error("failed to open library '{library}': {reason}")]
    LibraryOpen {
        /// Library file name or path as requested
        library: String,
        /// Loader error text
        reason: String,
    },

    /// The library opened but the named export is absent.
    #[error("symbol '{name}' not found in '{library}': {reason}")]
    SymbolNotFound {
        /// Catalog name of the missing export
        name: &'static str,
        /// Library the lookup ran against
        library: String,
        /// Loader error text
        reason: String,
    },
}

/// Result type for binding operations.
pub type BindResult<T> = Result<T, BindError>;
