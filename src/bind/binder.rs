//! On-demand binder over a symbol source.

use log::{debug, warn};
use parking_lot::Mutex;

use crate::catalog::Export;

use super::{BindError, BoundSymbol, SymbolCache, SymbolSource};

/// Resolves exports lazily and memoizes every successful resolution.
///
/// A binder owns its source and cache; the library handle inside the
/// production source lives as long as the binder, so symbols handed out by
/// the process-wide binder ([`crate::c_runtime`]) never dangle.
pub struct Binder<S> {
    source: S,
    cache: SymbolCache,
    // Serializes bulk round-trips so overlapping resolve_many calls do not
    // issue duplicate batches. Individual resolves are already at-most-once
    // per export through the cache slots.
    bulk: Mutex<()>,
}

impl<S: SymbolSource> Binder<S> {
    /// Creates a binder with an empty cache.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: SymbolCache::new(),
            bulk: Mutex::new(()),
        }
    }

    /// Resolves one export, from cache when possible.
    ///
    /// The first successful call per export contacts the source; every
    /// later call returns the cached symbol with no loader traffic. A
    /// failure is returned uncached, so the next call tries again.
    pub fn resolve(&self, export: Export) -> Result<BoundSymbol, BindError> {
        self.cache.bind_with(export, || {
            self.source.resolve(export).map_err(|e| {
                warn!("resolution of {} failed: {}", export.name(), e);
                e
            })
        })
    }

    /// Resolves every not yet bound export in `exports` in one source
    /// round-trip and commits the results as one batch.
    ///
    /// Idempotent: already bound exports are skipped, so overlapping calls
    /// only pay for the remainder. If any requested export fails, the whole
    /// call fails and nothing is committed; bindings from earlier calls are
    /// unaffected.
    pub fn resolve_many(&self, exports: &[Export]) -> Result<(), BindError> {
        let _guard = self.bulk.lock();

        let missing: Vec<Export> = exports
            .iter()
            .copied()
            .filter(|&export| !self.cache.is_bound(export))
            .collect();
        if missing.is_empty() {
            return Ok(());
        }

        debug!(
            "resolving {} of {} requested exports from {}",
            missing.len(),
            exports.len(),
            self.source.library_name()
        );

        let symbols = self.source.resolve_batch(&missing).map_err(|e| {
            warn!("batch resolution failed: {}", e);
            e
        })?;
        debug_assert_eq!(symbols.len(), missing.len());

        for (export, symbol) in missing.into_iter().zip(symbols) {
            // First write wins; a racing individual resolve for the same
            // export produced the same address.
            self.cache.bind(export, symbol);
        }
        Ok(())
    }

    /// Resolves the full catalog: every export not already bound.
    pub fn resolve_all(&self) -> Result<(), BindError> {
        self.resolve_many(Export::ALL)
    }

    /// Whether `export` is bound.
    pub fn is_bound(&self, export: Export) -> bool {
        self.cache.is_bound(export)
    }

    /// Number of bound exports.
    pub fn bound_count(&self) -> usize {
        self.cache.bound_count()
    }

    /// The underlying symbol source.
    pub fn source(&self) -> &S {
        &self.source
    }
}
