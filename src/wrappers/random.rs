//! Pseudo-random number exports.
//!
//! `rand` and `srand` share hidden state inside the library, so calls from
//! multiple threads interleave there exactly as they would in C. `rand_r`
//! keeps its state in the caller-provided seed instead.

use crate::bind::BindError;
use crate::c_runtime;
use crate::catalog::Export;

/// `int rand(void)`: next value in `[0, RAND_MAX]`.
pub fn rand() -> Result<i32, BindError> {
    type Rand = unsafe extern "C" fn() -> i32;
    let f: Rand = unsafe { std::mem::transmute(c_runtime().resolve(Export::Rand)?.addr()) };
    Ok(unsafe { f() })
}

/// `void srand(unsigned)`: reseed the `rand` sequence.
pub fn srand(seed: u32) -> Result<(), BindError> {
    type Srand = unsafe extern "C" fn(u32);
    let f: Srand = unsafe { std::mem::transmute(c_runtime().resolve(Export::Srand)?.addr()) };
    unsafe { f(seed) };
    Ok(())
}

/// `int rand_r(unsigned *)`: reentrant `rand`, state lives in `seed`.
pub fn rand_r(seed: &mut u32) -> Result<i32, BindError> {
    type RandR = unsafe extern "C" fn(*mut u32) -> i32;
    let f: RandR = unsafe { std::mem::transmute(c_runtime().resolve(Export::RandR)?.addr()) };
    Ok(unsafe { f(seed as *mut u32) })
}
