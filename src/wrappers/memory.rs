//! C heap allocation exports.
//!
//! These operate on the C allocator of the bound library, not the Rust
//! global allocator. Memory obtained here must be released with [`free`]
//! or [`realloc`] from this module, never with Rust's `dealloc`.

use std::ffi::c_void;

use crate::bind::BindError;
use crate::c_runtime;
use crate::catalog::Export;

/// `void *malloc(size_t)`: uninitialized allocation, null on failure.
///
/// Calling is safe; dereferencing the result is not.
pub fn malloc(size: usize) -> Result<*mut c_void, BindError> {
    type Malloc = unsafe extern "C" fn(usize) -> *mut c_void;
    let f: Malloc = unsafe { std::mem::transmute(c_runtime().resolve(Export::Malloc)?.addr()) };
    Ok(unsafe { f(size) })
}

/// `void *calloc(size_t, size_t)`: zero-initialized array allocation.
pub fn calloc(count: usize, size: usize) -> Result<*mut c_void, BindError> {
    type Calloc = unsafe extern "C" fn(usize, usize) -> *mut c_void;
    let f: Calloc = unsafe { std::mem::transmute(c_runtime().resolve(Export::Calloc)?.addr()) };
    Ok(unsafe { f(count, size) })
}

/// `void *realloc(void *, size_t)`: resize an allocation.
///
/// # Safety
///
/// `ptr` must be null or a live pointer returned by [`malloc`], [`calloc`]
/// or `realloc` from this module. On success the old pointer is invalid;
/// on failure (null return) it remains live and owned by the caller.
pub unsafe fn realloc(ptr: *mut c_void, size: usize) -> Result<*mut c_void, BindError> {
    type Realloc = unsafe extern "C" fn(*mut c_void, usize) -> *mut c_void;
    let f: Realloc = std::mem::transmute(c_runtime().resolve(Export::Realloc)?.addr());
    Ok(f(ptr, size))
}

/// `void free(void *)`: release an allocation.
///
/// # Safety
///
/// `ptr` must be null or a live pointer returned by [`malloc`], [`calloc`]
/// or [`realloc`] from this module, and must not be used afterwards.
pub unsafe fn free(ptr: *mut c_void) -> Result<(), BindError> {
    type Free = unsafe extern "C" fn(*mut c_void);
    let f: Free = std::mem::transmute(c_runtime().resolve(Export::Free)?.addr());
    f(ptr);
    Ok(())
}
