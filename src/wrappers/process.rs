//! Process identity exports.

use crate::bind::BindError;
use crate::c_runtime;
use crate::catalog::Export;

/// `pid_t getpid(void)`: process ID of the caller.
pub fn getpid() -> Result<i32, BindError> {
    type Getpid = unsafe extern "C" fn() -> i32;
    let f: Getpid = unsafe { std::mem::transmute(c_runtime().resolve(Export::Getpid)?.addr()) };
    Ok(unsafe { f() })
}

/// `pid_t getppid(void)`: parent process ID.
pub fn getppid() -> Result<i32, BindError> {
    type Getppid = unsafe extern "C" fn() -> i32;
    let f: Getppid = unsafe { std::mem::transmute(c_runtime().resolve(Export::Getppid)?.addr()) };
    Ok(unsafe { f() })
}

/// `uid_t getuid(void)`: real user ID.
pub fn getuid() -> Result<u32, BindError> {
    type Getuid = unsafe extern "C" fn() -> u32;
    let f: Getuid = unsafe { std::mem::transmute(c_runtime().resolve(Export::Getuid)?.addr()) };
    Ok(unsafe { f() })
}

/// `uid_t geteuid(void)`: effective user ID.
pub fn geteuid() -> Result<u32, BindError> {
    type Geteuid = unsafe extern "C" fn() -> u32;
    let f: Geteuid = unsafe { std::mem::transmute(c_runtime().resolve(Export::Geteuid)?.addr()) };
    Ok(unsafe { f() })
}

/// `gid_t getgid(void)`: real group ID.
pub fn getgid() -> Result<u32, BindError> {
    type Getgid = unsafe extern "C" fn() -> u32;
    let f: Getgid = unsafe { std::mem::transmute(c_runtime().resolve(Export::Getgid)?.addr()) };
    Ok(unsafe { f() })
}

/// `gid_t getegid(void)`: effective group ID.
pub fn getegid() -> Result<u32, BindError> {
    type Getegid = unsafe extern "C" fn() -> u32;
    let f: Getegid = unsafe { std::mem::transmute(c_runtime().resolve(Export::Getegid)?.addr()) };
    Ok(unsafe { f() })
}

/// `int getpagesize(void)`: memory page size in bytes.
pub fn getpagesize() -> Result<i32, BindError> {
    type Getpagesize = unsafe extern "C" fn() -> i32;
    let f: Getpagesize =
        unsafe { std::mem::transmute(c_runtime().resolve(Export::Getpagesize)?.addr()) };
    Ok(unsafe { f() })
}

/// `int isatty(int)`: whether `fd` refers to a terminal.
pub fn isatty(fd: i32) -> Result<bool, BindError> {
    type Isatty = unsafe extern "C" fn(i32) -> i32;
    let f: Isatty = unsafe { std::mem::transmute(c_runtime().resolve(Export::Isatty)?.addr()) };
    Ok(unsafe { f(fd) } != 0)
}
