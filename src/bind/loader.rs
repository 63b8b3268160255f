//! Shared-library symbol sources.
//!
//! [`SharedLibrary`] is the production source: a safe wrapper around
//! `libloading` that opens one named library lazily, on the first
//! resolution, and keeps the handle open for the process lifetime. Tests
//! substitute counting fakes through the [`SymbolSource`] trait.

use std::env;
use std::path::{Path, PathBuf};

use libloading::Library;
use log::debug;
use once_cell::sync::OnceCell;

use crate::catalog::Export;
use crate::config::BindConfig;

use super::{BindError, BoundSymbol};

/// Resolves catalog exports to native symbols.
///
/// An export carries its signature (`Export::signature`); sources that
/// marshal values may consult it, the dynamic-linker-backed source does
/// not interpret it.
pub trait SymbolSource: Send + Sync {
    /// Identity of the backing library, for errors and logs.
    fn library_name(&self) -> &str;

    /// Resolve one export.
    fn resolve(&self, export: Export) -> Result<BoundSymbol, BindError>;

    /// Resolve a set of exports in one pass. Returns exactly one symbol per
    /// requested export, in request order, or the first failure with no
    /// partial results.
    fn resolve_batch(&self, exports: &[Export]) -> Result<Vec<BoundSymbol>, BindError>;
}

/// The production symbol source: one named shared library.
///
/// The handle is opened on first resolution and never closed. An open
/// failure is returned to the caller without being recorded, so a later
/// resolution retries the open.
pub struct SharedLibrary {
    name: String,
    explicit_path: Option<PathBuf>,
    search_paths: Vec<PathBuf>,
    handle: OnceCell<Library>,
}

impl SharedLibrary {
    /// The platform C runtime with default search paths. The
    /// `LATEBIND_LIBRARY` environment variable, when set, is taken as an
    /// explicit path to the library file.
    pub fn c_runtime() -> Self {
        let explicit = env::var_os("LATEBIND_LIBRARY").map(PathBuf::from);
        Self::with_path(platform_library_name(), explicit)
    }

    /// A library identified by its platform file name, located through the
    /// default search paths (and the dynamic linker's own search as a
    /// fallback).
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_path(name, None)
    }

    /// A library with an explicit file path. The path bypasses all search.
    pub fn with_path(name: impl Into<String>, explicit_path: Option<PathBuf>) -> Self {
        Self {
            name: name.into(),
            explicit_path,
            search_paths: default_search_paths(),
            handle: OnceCell::new(),
        }
    }

    /// Builds a source from a `latebind.toml` configuration: library name,
    /// optional explicit path, and extra search directories placed ahead of
    /// the defaults.
    pub fn from_config(config: &BindConfig) -> Self {
        let mut source = Self::with_path(config.library.name.clone(), config.library.path.clone());
        let mut paths = config.resolver.search_paths.clone();
        paths.append(&mut source.search_paths);
        source.search_paths = paths;
        source
    }

    /// Prepends a directory to the search paths.
    pub fn add_search_path(&mut self, path: impl AsRef<Path>) {
        self.search_paths.insert(0, path.as_ref().to_path_buf());
    }

    /// The file that `open` will target: the explicit path if set, else the
    /// first search path containing the named file, else the bare name for
    /// the dynamic linker to locate.
    fn locate(&self) -> PathBuf {
        if let Some(path) = &self.explicit_path {
            return path.clone();
        }
        for dir in &self.search_paths {
            let candidate = dir.join(&self.name);
            if candidate.exists() {
                return candidate;
            }
        }
        PathBuf::from(&self.name)
    }

    fn open(&self) -> Result<Library, BindError> {
        let path = self.locate();
        debug!("opening shared library {}", path.display());

        // Safety: opening a shared library runs its initializers. The
        // caller chose the library; nothing else can be checked here.
        unsafe { Library::new(&path) }.map_err(|e| BindError::LibraryOpen {
            library: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// The open handle, opening it on first use. A failed open leaves the
    /// cell empty and is retried by the next caller.
    fn library(&self) -> Result<&Library, BindError> {
        self.handle.get_or_try_init(|| self.open())
    }

    fn lookup(&self, library: &Library, export: Export) -> Result<BoundSymbol, BindError> {
        let name = export.name();

        // Safety: the symbol is treated as an opaque address here and only
        // called through the concrete type recorded in the catalog.
        let symbol: libloading::Symbol<'_, *const ()> =
            unsafe { library.get(name.as_bytes()) }.map_err(|e| BindError::SymbolNotFound {
                name,
                library: self.name.clone(),
                reason: e.to_string(),
            })?;

        let bound = BoundSymbol::new(*symbol as *const ());
        debug!("bound {} at {:?}", name, bound);
        Ok(bound)
    }
}

impl SymbolSource for SharedLibrary {
    fn library_name(&self) -> &str {
        &self.name
    }

    fn resolve(&self, export: Export) -> Result<BoundSymbol, BindError> {
        let library = self.library()?;
        self.lookup(library, export)
    }

    fn resolve_batch(&self, exports: &[Export]) -> Result<Vec<BoundSymbol>, BindError> {
        let library = self.library()?;
        let mut symbols = Vec::with_capacity(exports.len());
        for &export in exports {
            symbols.push(self.lookup(library, export)?);
        }
        Ok(symbols)
    }
}

/// Platform file name of the C runtime.
pub(crate) fn platform_library_name() -> &'static str {
    #[cfg(target_os = "linux")]
    {
        "libc.so.6"
    }

    #[cfg(target_os = "macos")]
    {
        "libSystem.B.dylib"
    }

    #[cfg(target_os = "windows")]
    {
        "msvcrt.dll"
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        "libc.so"
    }
}

/// Directories searched for the named library before falling back to the
/// dynamic linker's own search.
fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    #[cfg(target_os = "linux")]
    {
        if let Ok(ld_path) = env::var("LD_LIBRARY_PATH") {
            paths.extend(ld_path.split(':').filter(|p| !p.is_empty()).map(PathBuf::from));
        }
        paths.push(PathBuf::from("/usr/local/lib"));
        paths.push(PathBuf::from("/usr/lib"));
        paths.push(PathBuf::from("/usr/lib64"));
        paths.push(PathBuf::from("/lib"));
        paths.push(PathBuf::from("/lib64"));
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(dyld_path) = env::var("DYLD_LIBRARY_PATH") {
            paths.extend(dyld_path.split(':').filter(|p| !p.is_empty()).map(PathBuf::from));
        }
        paths.push(PathBuf::from("/usr/local/lib"));
        paths.push(PathBuf::from("/opt/homebrew/lib"));
        paths.push(PathBuf::from("/usr/lib"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(path) = env::var("PATH") {
            paths.extend(path.split(';').filter(|p| !p.is_empty()).map(PathBuf::from));
        }
        paths.push(PathBuf::from("C:\\Windows\\System32"));
    }

    paths
}
