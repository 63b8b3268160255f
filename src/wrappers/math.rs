//! Integer absolute-value exports.
//!
//! Like the C originals, these are undefined for the minimum value of the
//! argument type (there is no positive counterpart).

use crate::bind::BindError;
use crate::c_runtime;
use crate::catalog::Export;

/// `int abs(int)`.
pub fn abs(n: i32) -> Result<i32, BindError> {
    type Abs = unsafe extern "C" fn(i32) -> i32;
    let f: Abs = unsafe { std::mem::transmute(c_runtime().resolve(Export::Abs)?.addr()) };
    Ok(unsafe { f(n) })
}

/// `long labs(long)`.
pub fn labs(n: i64) -> Result<i64, BindError> {
    type Labs = unsafe extern "C" fn(i64) -> i64;
    let f: Labs = unsafe { std::mem::transmute(c_runtime().resolve(Export::Labs)?.addr()) };
    Ok(unsafe { f(n) })
}

/// `long long llabs(long long)`.
pub fn llabs(n: i64) -> Result<i64, BindError> {
    type Llabs = unsafe extern "C" fn(i64) -> i64;
    let f: Llabs = unsafe { std::mem::transmute(c_runtime().resolve(Export::Llabs)?.addr()) };
    Ok(unsafe { f(n) })
}
