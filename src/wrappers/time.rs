//! Wall-clock and CPU-clock exports.

use crate::bind::BindError;
use crate::c_runtime;
use crate::catalog::Export;

/// `time_t time(time_t *)`: seconds since the Unix epoch.
///
/// The out-parameter form is never used; a null pointer is passed so the
/// result arrives only through the return value.
pub fn time() -> Result<i64, BindError> {
    type Time = unsafe extern "C" fn(*mut i64) -> i64;
    let f: Time = unsafe { std::mem::transmute(c_runtime().resolve(Export::Time)?.addr()) };
    Ok(unsafe { f(std::ptr::null_mut()) })
}

/// `clock_t clock(void)`: processor time used, in `CLOCKS_PER_SEC` units.
pub fn clock() -> Result<i64, BindError> {
    type Clock = unsafe extern "C" fn() -> i64;
    let f: Clock = unsafe { std::mem::transmute(c_runtime().resolve(Export::Clock)?.addr()) };
    Ok(unsafe { f() })
}

/// `double difftime(time_t, time_t)`: `end - start` in seconds.
pub fn difftime(end: i64, start: i64) -> Result<f64, BindError> {
    type Difftime = unsafe extern "C" fn(i64, i64) -> f64;
    let f: Difftime = unsafe { std::mem::transmute(c_runtime().resolve(Export::Difftime)?.addr()) };
    Ok(unsafe { f(end, start) })
}
