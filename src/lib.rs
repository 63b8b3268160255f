//! Latebind - Lazy Symbol Binding for Native Shared Libraries
//!
//! Binds exported C functions on first use instead of at startup. Every export
//! the crate knows about lives in a typed catalog; the address of each one is
//! fetched from the dynamic linker exactly once, memoized, and reused for the
//! life of the process.
//!
//! # Features
//!
//! - **Typed export catalog**: Every binding site is an enum variant carrying
//!   its C name and signature, checked at compile time
//! - **Lazy resolution**: No symbol is looked up until something calls it
//! - **Write-once cache**: One dynamic-linker interaction per export, shared
//!   across threads without locks on the hot path
//! - **Bulk binding**: Resolve any subset (or all) of the catalog in a single
//!   library round-trip, all-or-nothing
//! - **Non-poisoning failures**: A failed lookup is returned, never cached;
//!   the next call retries from scratch
//! - **Typed entry points**: Safe Rust signatures over the raw addresses for
//!   the whole catalog
//!
//! # Example
//!
//! ```no_run
//! use latebind::wrappers::{process, string};
//! use std::ffi::CString;
//!
//! # fn main() -> Result<(), latebind::BindError> {
//! // First call opens the C runtime and binds `getpid`; later calls reuse
//! // the cached address.
//! let pid = process::getpid()?;
//! println!("running as pid {pid}");
//!
//! let s = CString::new("latebind").unwrap();
//! assert_eq!(string::strlen(&s)?, 8);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │  Typed wrappers  │  getpid(), strlen(&CStr), htons(u16), ...
//! └────────┬─────────┘
//!          │ Export::Getpid, Export::Strlen, ...
//!          ▼
//! ┌──────────────────┐
//! │      Binder      │  per-export once-guard + bulk batching
//! └────────┬─────────┘
//!     ┌────┴─────┐
//!     ▼          ▼
//! ┌────────┐ ┌──────────────┐
//! │ Symbol │ │SharedLibrary │  dlopen/dlsym via libloading
//! │ Cache  │ │(SymbolSource)│
//! └────────┘ └──────────────┘
//! ```

#![warn(clippy::all)]

pub mod bind;
pub mod catalog;
pub mod config;
pub mod wrappers;

use once_cell::sync::Lazy;

// Re-export commonly used types
pub use bind::{
    BindError, BindResult, Binder, BoundSymbol, SharedLibrary, SymbolCache, SymbolSource,
};
pub use catalog::{Export, Signature, TypeTag};
pub use config::{BindConfig, ConfigError, ConfigResult, LibraryConfig, ResolverConfig};

/// Process-wide binder for the platform C runtime.
static C_RUNTIME: Lazy<Binder<SharedLibrary>> =
    Lazy::new(|| Binder::new(SharedLibrary::c_runtime()));

/// The shared binder every typed wrapper goes through.
///
/// Opening the library itself is also lazy, so merely touching this binder
/// performs no dynamic-linker work.
pub fn c_runtime() -> &'static Binder<SharedLibrary> {
    &C_RUNTIME
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
