//! Write-once symbol cache.

use std::fmt;

use once_cell::sync::OnceCell;

use crate::catalog::Export;

use super::BindError;

/// A resolved native callable: the address of one export in the loaded
/// library.
///
/// The address stays valid for as long as the originating library handle is
/// alive; the process-wide binder never closes its handle, so symbols it
/// hands out are valid for the remainder of the process. Call sites
/// transmute the address to the concrete `extern "C"` type matching the
/// export's catalog signature.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BoundSymbol {
    addr: *const (),
}

// The address points into a loaded library mapping, not into Rust-managed
// memory; moving it across threads carries no ownership.
unsafe impl Send for BoundSymbol {}
unsafe impl Sync for BoundSymbol {}

impl BoundSymbol {
    pub(crate) fn new(addr: *const ()) -> Self {
        Self { addr }
    }

    /// The raw symbol address.
    pub fn addr(self) -> *const () {
        self.addr
    }
}

impl fmt::Debug for BoundSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BoundSymbol({:p})", self.addr)
    }
}

/// Write-once mapping from export to resolved symbol.
///
/// One slot per catalog export. A slot moves `unbound -> bound` at most
/// once and never back: entries are never replaced or removed, so the set
/// of bound exports only grows over the process lifetime.
pub struct SymbolCache {
    slots: Vec<OnceCell<BoundSymbol>>,
}

impl SymbolCache {
    /// Creates a cache with every slot unbound.
    pub fn new() -> Self {
        Self {
            slots: (0..Export::COUNT).map(|_| OnceCell::new()).collect(),
        }
    }

    /// The cached symbol for `export`, if already bound.
    pub fn get(&self, export: Export) -> Option<BoundSymbol> {
        self.slots[export.index()].get().copied()
    }

    /// Whether `export` has been bound.
    pub fn is_bound(&self, export: Export) -> bool {
        self.slots[export.index()].get().is_some()
    }

    /// Number of bound exports.
    pub fn bound_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }

    /// Binds `export` to `symbol` if its slot is still unbound. The first
    /// write wins; a losing value is dropped and the established binding is
    /// returned unchanged.
    pub(crate) fn bind(&self, export: Export, symbol: BoundSymbol) -> BoundSymbol {
        *self.slots[export.index()].get_or_init(|| symbol)
    }

    /// Binds `export` through `resolve`, running it only if the slot is
    /// unbound. Concurrent callers for the same export serialize on the
    /// slot, so `resolve` runs at most once per successful binding. An
    /// `Err` leaves the slot unbound.
    pub(crate) fn bind_with(
        &self,
        export: Export,
        resolve: impl FnOnce() -> Result<BoundSymbol, BindError>,
    ) -> Result<BoundSymbol, BindError> {
        self.slots[export.index()].get_or_try_init(resolve).copied()
    }
}

impl Default for SymbolCache {
    fn default() -> Self {
        Self::new()
    }
}
