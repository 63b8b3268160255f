//! Host/network byte order conversion.

use crate::bind::BindError;
use crate::c_runtime;
use crate::catalog::Export;

/// `uint16_t htons(uint16_t)`: host to network (big-endian) short.
pub fn htons(host: u16) -> Result<u16, BindError> {
    type Htons = unsafe extern "C" fn(u16) -> u16;
    let f: Htons = unsafe { std::mem::transmute(c_runtime().resolve(Export::Htons)?.addr()) };
    Ok(unsafe { f(host) })
}

/// `uint16_t ntohs(uint16_t)`: network to host short.
pub fn ntohs(net: u16) -> Result<u16, BindError> {
    type Ntohs = unsafe extern "C" fn(u16) -> u16;
    let f: Ntohs = unsafe { std::mem::transmute(c_runtime().resolve(Export::Ntohs)?.addr()) };
    Ok(unsafe { f(net) })
}

/// `uint32_t htonl(uint32_t)`: host to network long.
pub fn htonl(host: u32) -> Result<u32, BindError> {
    type Htonl = unsafe extern "C" fn(u32) -> u32;
    let f: Htonl = unsafe { std::mem::transmute(c_runtime().resolve(Export::Htonl)?.addr()) };
    Ok(unsafe { f(host) })
}

/// `uint32_t ntohl(uint32_t)`: network to host long.
pub fn ntohl(net: u32) -> Result<u32, BindError> {
    type Ntohl = unsafe extern "C" fn(u32) -> u32;
    let f: Ntohl = unsafe { std::mem::transmute(c_runtime().resolve(Export::Ntohl)?.addr()) };
    Ok(unsafe { f(net) })
}
