//! Character classification and case mapping.
//!
//! The C `<ctype.h>` functions take and return `int`, with the argument
//! required to be representable as `unsigned char` or `EOF`. Taking `u8`
//! here keeps every call in the defined range.

use crate::bind::BindError;
use crate::c_runtime;
use crate::catalog::Export;

fn classify(export: Export, c: u8) -> Result<bool, BindError> {
    type Classifier = unsafe extern "C" fn(i32) -> i32;
    let f: Classifier = unsafe { std::mem::transmute(c_runtime().resolve(export)?.addr()) };
    Ok(unsafe { f(c as i32) } != 0)
}

/// `isalnum`: alphanumeric character.
pub fn isalnum(c: u8) -> Result<bool, BindError> {
    classify(Export::Isalnum, c)
}

/// `isalpha`: alphabetic character.
pub fn isalpha(c: u8) -> Result<bool, BindError> {
    classify(Export::Isalpha, c)
}

/// `iscntrl`: control character.
pub fn iscntrl(c: u8) -> Result<bool, BindError> {
    classify(Export::Iscntrl, c)
}

/// `isdigit`: decimal digit.
pub fn isdigit(c: u8) -> Result<bool, BindError> {
    classify(Export::Isdigit, c)
}

/// `isgraph`: printable character other than space.
pub fn isgraph(c: u8) -> Result<bool, BindError> {
    classify(Export::Isgraph, c)
}

/// `islower`: lowercase letter.
pub fn islower(c: u8) -> Result<bool, BindError> {
    classify(Export::Islower, c)
}

/// `isprint`: printable character including space.
pub fn isprint(c: u8) -> Result<bool, BindError> {
    classify(Export::Isprint, c)
}

/// `ispunct`: punctuation character.
pub fn ispunct(c: u8) -> Result<bool, BindError> {
    classify(Export::Ispunct, c)
}

/// `isspace`: whitespace character.
pub fn isspace(c: u8) -> Result<bool, BindError> {
    classify(Export::Isspace, c)
}

/// `isupper`: uppercase letter.
pub fn isupper(c: u8) -> Result<bool, BindError> {
    classify(Export::Isupper, c)
}

/// `isxdigit`: hexadecimal digit.
pub fn isxdigit(c: u8) -> Result<bool, BindError> {
    classify(Export::Isxdigit, c)
}

/// `tolower`: lowercase mapping of `c`, or `c` itself.
pub fn tolower(c: u8) -> Result<u8, BindError> {
    type Tolower = unsafe extern "C" fn(i32) -> i32;
    let f: Tolower = unsafe { std::mem::transmute(c_runtime().resolve(Export::Tolower)?.addr()) };
    Ok(unsafe { f(c as i32) } as u8)
}

/// `toupper`: uppercase mapping of `c`, or `c` itself.
pub fn toupper(c: u8) -> Result<u8, BindError> {
    type Toupper = unsafe extern "C" fn(i32) -> i32;
    let f: Toupper = unsafe { std::mem::transmute(c_runtime().resolve(Export::Toupper)?.addr()) };
    Ok(unsafe { f(c as i32) } as u8)
}
