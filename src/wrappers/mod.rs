//! Typed entry points into the C runtime.
//!
//! One thin function per catalog export, grouped by domain. Each function
//! resolves its export through the process-wide binder, casts the bound
//! address to the concrete `extern "C"` type matching the export's catalog
//! signature, and forwards the caller's arguments. Resolution cost is paid
//! once per export; later calls go straight through the cached symbol.
//!
//! Every function returns `Result` because resolution itself can fail: the
//! target library may be missing or the export absent. A failed call
//! leaves the export unbound, so the next call attempts resolution again.
//!
//! Functions whose C argument contract cannot be expressed safely
//! (`free`, `realloc`) are `unsafe fn`; everything else exposes a safe
//! surface over plain Rust types.

pub mod byteorder;
pub mod ctype;
pub mod math;
pub mod memory;
pub mod process;
pub mod random;
pub mod string;
pub mod time;
