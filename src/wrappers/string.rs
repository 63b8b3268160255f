//! String inspection, comparison and numeric conversion.
//!
//! Arguments are `&CStr` so the NUL terminator the C side expects is
//! guaranteed by the type rather than by the caller.

use std::ffi::{c_char, CStr};

use crate::bind::BindError;
use crate::c_runtime;
use crate::catalog::Export;

/// `size_t strlen(const char *)`: bytes before the NUL terminator.
pub fn strlen(s: &CStr) -> Result<usize, BindError> {
    type Strlen = unsafe extern "C" fn(*const c_char) -> usize;
    let f: Strlen = unsafe { std::mem::transmute(c_runtime().resolve(Export::Strlen)?.addr()) };
    Ok(unsafe { f(s.as_ptr()) })
}

/// `size_t strnlen(const char *, size_t)`: like `strlen` but capped at `max`.
pub fn strnlen(s: &CStr, max: usize) -> Result<usize, BindError> {
    type Strnlen = unsafe extern "C" fn(*const c_char, usize) -> usize;
    let f: Strnlen = unsafe { std::mem::transmute(c_runtime().resolve(Export::Strnlen)?.addr()) };
    Ok(unsafe { f(s.as_ptr(), max) })
}

/// `int strcmp(const char *, const char *)`: lexicographic comparison.
///
/// Negative, zero or positive as `a` sorts before, equal to, or after `b`.
pub fn strcmp(a: &CStr, b: &CStr) -> Result<i32, BindError> {
    type Strcmp = unsafe extern "C" fn(*const c_char, *const c_char) -> i32;
    let f: Strcmp = unsafe { std::mem::transmute(c_runtime().resolve(Export::Strcmp)?.addr()) };
    Ok(unsafe { f(a.as_ptr(), b.as_ptr()) })
}

/// `int strncmp(const char *, const char *, size_t)`: compare at most `n` bytes.
pub fn strncmp(a: &CStr, b: &CStr, n: usize) -> Result<i32, BindError> {
    type Strncmp = unsafe extern "C" fn(*const c_char, *const c_char, usize) -> i32;
    let f: Strncmp = unsafe { std::mem::transmute(c_runtime().resolve(Export::Strncmp)?.addr()) };
    Ok(unsafe { f(a.as_ptr(), b.as_ptr(), n) })
}

/// `int strcasecmp(const char *, const char *)`: case-insensitive comparison.
pub fn strcasecmp(a: &CStr, b: &CStr) -> Result<i32, BindError> {
    type Strcasecmp = unsafe extern "C" fn(*const c_char, *const c_char) -> i32;
    let f: Strcasecmp =
        unsafe { std::mem::transmute(c_runtime().resolve(Export::Strcasecmp)?.addr()) };
    Ok(unsafe { f(a.as_ptr(), b.as_ptr()) })
}

/// `int atoi(const char *)`: leading decimal integer, 0 if none.
pub fn atoi(s: &CStr) -> Result<i32, BindError> {
    type Atoi = unsafe extern "C" fn(*const c_char) -> i32;
    let f: Atoi = unsafe { std::mem::transmute(c_runtime().resolve(Export::Atoi)?.addr()) };
    Ok(unsafe { f(s.as_ptr()) })
}

/// `long atol(const char *)`: as `atoi` with `long` range.
pub fn atol(s: &CStr) -> Result<i64, BindError> {
    type Atol = unsafe extern "C" fn(*const c_char) -> i64;
    let f: Atol = unsafe { std::mem::transmute(c_runtime().resolve(Export::Atol)?.addr()) };
    Ok(unsafe { f(s.as_ptr()) })
}

/// `long long atoll(const char *)`: as `atoi` with `long long` range.
pub fn atoll(s: &CStr) -> Result<i64, BindError> {
    type Atoll = unsafe extern "C" fn(*const c_char) -> i64;
    let f: Atoll = unsafe { std::mem::transmute(c_runtime().resolve(Export::Atoll)?.addr()) };
    Ok(unsafe { f(s.as_ptr()) })
}

/// `double atof(const char *)`: leading floating-point number, 0.0 if none.
pub fn atof(s: &CStr) -> Result<f64, BindError> {
    type Atof = unsafe extern "C" fn(*const c_char) -> f64;
    let f: Atof = unsafe { std::mem::transmute(c_runtime().resolve(Export::Atof)?.addr()) };
    Ok(unsafe { f(s.as_ptr()) })
}
