//! Integration Tests Against the Real C Runtime
//!
//! Exercises the full stack against the platform libc:
//! - Typed wrappers returning the same answers as Rust/std
//! - Lazy binding, bulk binding, and cache accounting
//! - Failure paths against libraries that do not exist
//!
//! Linux-only: the expectations are written against glibc/musl behavior.

#![cfg(target_os = "linux")]

use latebind::wrappers::{byteorder, ctype, math, memory, process, random, string, time};
use latebind::{c_runtime, Binder, Export, SharedLibrary};
use std::ffi::CString;

// =============================================================================
// Process Identity
// =============================================================================

#[test]
fn test_getpid_matches_std() {
    let pid = process::getpid().unwrap();
    assert_eq!(pid as u32, std::process::id());
}

#[test]
fn test_getppid_is_positive() {
    assert!(process::getppid().unwrap() > 0);
}

#[test]
fn test_uid_gid_match_libc() {
    assert_eq!(process::getuid().unwrap(), unsafe { libc::getuid() });
    assert_eq!(process::geteuid().unwrap(), unsafe { libc::geteuid() });
    assert_eq!(process::getgid().unwrap(), unsafe { libc::getgid() });
    assert_eq!(process::getegid().unwrap(), unsafe { libc::getegid() });
}

#[test]
fn test_getpagesize_is_power_of_two() {
    let page = process::getpagesize().unwrap();
    assert!(page > 0);
    assert_eq!(page & (page - 1), 0);
}

#[test]
fn test_isatty_rejects_bad_fd() {
    assert!(!process::isatty(-1).unwrap());
}

// =============================================================================
// Strings and Numeric Parsing
// =============================================================================

#[test]
fn test_strlen_agrees_with_rust() {
    let s = CString::new("latebind").unwrap();
    assert_eq!(string::strlen(&s).unwrap(), 8);

    let empty = CString::new("").unwrap();
    assert_eq!(string::strlen(&empty).unwrap(), 0);
}

#[test]
fn test_strnlen_caps_at_max() {
    let s = CString::new("latebind").unwrap();
    assert_eq!(string::strnlen(&s, 4).unwrap(), 4);
    assert_eq!(string::strnlen(&s, 100).unwrap(), 8);
}

#[test]
fn test_strcmp_ordering() {
    let abc = CString::new("abc").unwrap();
    let abd = CString::new("abd").unwrap();

    assert_eq!(string::strcmp(&abc, &abc).unwrap(), 0);
    assert!(string::strcmp(&abc, &abd).unwrap() < 0);
    assert!(string::strcmp(&abd, &abc).unwrap() > 0);
}

#[test]
fn test_strncmp_stops_at_n() {
    let abcdef = CString::new("abcdef").unwrap();
    let abcxyz = CString::new("abcxyz").unwrap();

    assert_eq!(string::strncmp(&abcdef, &abcxyz, 3).unwrap(), 0);
    assert!(string::strncmp(&abcdef, &abcxyz, 4).unwrap() < 0);
}

#[test]
fn test_strcasecmp_ignores_case() {
    let a = CString::new("Hello").unwrap();
    let b = CString::new("hELLO").unwrap();
    assert_eq!(string::strcasecmp(&a, &b).unwrap(), 0);
}

#[test]
fn test_numeric_parsing() {
    let n = CString::new("42").unwrap();
    assert_eq!(string::atoi(&n).unwrap(), 42);

    let neg = CString::new("  -17junk").unwrap();
    assert_eq!(string::atoi(&neg).unwrap(), -17);

    let big = CString::new("9000000000").unwrap();
    assert_eq!(string::atol(&big).unwrap(), 9_000_000_000);
    assert_eq!(string::atoll(&big).unwrap(), 9_000_000_000);

    let f = CString::new("3.5").unwrap();
    assert_eq!(string::atof(&f).unwrap(), 3.5);

    let not_a_number = CString::new("x").unwrap();
    assert_eq!(string::atoi(&not_a_number).unwrap(), 0);
}

// =============================================================================
// Character Classification
// =============================================================================

#[test]
fn test_ctype_matches_char_methods() {
    for b in 0u8..=127 {
        let c = b as char;
        assert_eq!(ctype::isdigit(b).unwrap(), c.is_ascii_digit(), "{:?}", c);
        assert_eq!(ctype::isalpha(b).unwrap(), c.is_ascii_alphabetic(), "{:?}", c);
        assert_eq!(ctype::isalnum(b).unwrap(), c.is_ascii_alphanumeric(), "{:?}", c);
        assert_eq!(ctype::isupper(b).unwrap(), c.is_ascii_uppercase(), "{:?}", c);
        assert_eq!(ctype::islower(b).unwrap(), c.is_ascii_lowercase(), "{:?}", c);
        assert_eq!(ctype::isxdigit(b).unwrap(), c.is_ascii_hexdigit(), "{:?}", c);
        assert_eq!(ctype::isgraph(b).unwrap(), c.is_ascii_graphic(), "{:?}", c);
        assert_eq!(ctype::ispunct(b).unwrap(), c.is_ascii_punctuation(), "{:?}", c);
        assert_eq!(ctype::iscntrl(b).unwrap(), c.is_ascii_control(), "{:?}", c);
    }
}

#[test]
fn test_isspace_c_definition() {
    // C whitespace: space plus \t \n \v \f \r
    for b in 0u8..=127 {
        let expected = b == 0x20 || (0x09..=0x0d).contains(&b);
        assert_eq!(ctype::isspace(b).unwrap(), expected, "byte {:#04x}", b);
    }
}

#[test]
fn test_isprint_is_graph_or_space() {
    for b in 0u8..=127 {
        let expected = (b as char).is_ascii_graphic() || b == b' ';
        assert_eq!(ctype::isprint(b).unwrap(), expected, "byte {:#04x}", b);
    }
}

#[test]
fn test_case_mapping() {
    assert_eq!(ctype::toupper(b'a').unwrap(), b'A');
    assert_eq!(ctype::tolower(b'Z').unwrap(), b'z');
    // Non-letters map to themselves
    assert_eq!(ctype::toupper(b'7').unwrap(), b'7');
    assert_eq!(ctype::tolower(b'!').unwrap(), b'!');
}

// =============================================================================
// Math and Byte Order
// =============================================================================

#[test]
fn test_abs_family() {
    assert_eq!(math::abs(-5).unwrap(), 5);
    assert_eq!(math::abs(5).unwrap(), 5);
    assert_eq!(math::labs(-9_000_000_000).unwrap(), 9_000_000_000);
    assert_eq!(math::llabs(-9_000_000_000).unwrap(), 9_000_000_000);
    assert_eq!(math::llabs(0).unwrap(), 0);
}

#[test]
fn test_byteorder_matches_to_be() {
    for x in [0u16, 1, 0x1234, 0xfffe] {
        assert_eq!(byteorder::htons(x).unwrap(), x.to_be());
        assert_eq!(byteorder::ntohs(byteorder::htons(x).unwrap()).unwrap(), x);
    }
    for x in [0u32, 1, 0xdead_beef, 0x0102_0304] {
        assert_eq!(byteorder::htonl(x).unwrap(), x.to_be());
        assert_eq!(byteorder::ntohl(byteorder::htonl(x).unwrap()).unwrap(), x);
    }
}

// =============================================================================
// Random and Time
// =============================================================================

#[test]
fn test_rand_r_is_deterministic_per_seed() {
    let mut a = 12345u32;
    let mut b = 12345u32;

    let xs: Vec<i32> = (0..5).map(|_| random::rand_r(&mut a).unwrap()).collect();
    let ys: Vec<i32> = (0..5).map(|_| random::rand_r(&mut b).unwrap()).collect();

    assert_eq!(xs, ys);
    assert_ne!(a, 12345, "seed state should advance");
    for x in xs {
        assert!(x >= 0);
    }
}

#[test]
fn test_rand_in_range() {
    // rand/srand share hidden state with any other thread, so only the
    // output range is asserted here; determinism is covered via rand_r.
    random::srand(7).unwrap();
    for _ in 0..3 {
        assert!(random::rand().unwrap() >= 0);
    }
}

#[test]
fn test_time_is_past_2020() {
    let now = time::time().unwrap();
    assert!(now > 1_577_836_800, "time() returned {}", now);
}

#[test]
fn test_clock_is_nonnegative() {
    assert!(time::clock().unwrap() >= 0);
}

#[test]
fn test_difftime_subtracts() {
    let t = time::time().unwrap();
    assert_eq!(time::difftime(t + 5, t).unwrap(), 5.0);
    assert_eq!(time::difftime(t, t).unwrap(), 0.0);
}

// =============================================================================
// C Heap
// =============================================================================

#[test]
fn test_malloc_write_free() {
    let p = memory::malloc(64).unwrap();
    assert!(!p.is_null());

    unsafe {
        std::ptr::write_bytes(p as *mut u8, 0xab, 64);
        assert_eq!(*(p as *const u8), 0xab);
        assert_eq!(*(p as *const u8).add(63), 0xab);
        memory::free(p).unwrap();
    }
}

#[test]
fn test_calloc_zeroes() {
    let p = memory::calloc(16, 4).unwrap();
    assert!(!p.is_null());

    unsafe {
        let bytes = std::slice::from_raw_parts(p as *const u8, 64);
        assert!(bytes.iter().all(|&b| b == 0));
        memory::free(p).unwrap();
    }
}

#[test]
fn test_realloc_preserves_prefix() {
    let p = memory::malloc(8).unwrap();
    assert!(!p.is_null());

    unsafe {
        for i in 0..8u8 {
            *(p as *mut u8).add(i as usize) = i;
        }
        let bigger = memory::realloc(p, 1024).unwrap();
        assert!(!bigger.is_null());
        for i in 0..8u8 {
            assert_eq!(*(bigger as *const u8).add(i as usize), i);
        }
        memory::free(bigger).unwrap();
    }
}

// =============================================================================
// Binder Behavior Against the Real Library
// =============================================================================

#[test]
fn test_resolve_all_binds_whole_catalog() {
    c_runtime().resolve_all().unwrap();
    assert_eq!(c_runtime().bound_count(), Export::COUNT);

    // A second pass finds everything cached
    c_runtime().resolve_all().unwrap();
    assert_eq!(c_runtime().bound_count(), Export::COUNT);
}

#[test]
fn test_bulk_bind_subset() {
    let binder = Binder::new(SharedLibrary::new("libc.so.6"));
    binder
        .resolve_many(&[Export::Getpid, Export::Strlen])
        .unwrap();

    assert_eq!(binder.bound_count(), 2);
    assert!(binder.is_bound(Export::Getpid));
    assert!(!binder.is_bound(Export::Malloc));

    // Already-bound exports come straight from the cache
    let first = binder.resolve(Export::Getpid).unwrap();
    let second = binder.resolve(Export::Getpid).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_explicit_library_binder() {
    let binder = Binder::new(SharedLibrary::new("libc.so.6"));
    let symbol = binder.resolve(Export::Strlen).unwrap();

    // The library handle lives inside the binder's source, so the address
    // stays valid while `binder` is in scope.
    type Strlen = unsafe extern "C" fn(*const std::ffi::c_char) -> usize;
    let f: Strlen = unsafe { std::mem::transmute(symbol.addr()) };

    let s = CString::new("four").unwrap();
    assert_eq!(unsafe { f(s.as_ptr()) }, 4);
    assert_eq!(binder.bound_count(), 1);
}

#[test]
fn test_missing_library_fails_without_caching() {
    let binder = Binder::new(SharedLibrary::new("liblatebind-no-such-library.so.99"));

    assert!(binder.resolve(Export::Getpid).is_err());
    assert!(binder.resolve(Export::Getpid).is_err());
    assert_eq!(binder.bound_count(), 0);

    assert!(binder.resolve_many(&[Export::Getpid, Export::Strlen]).is_err());
    assert_eq!(binder.bound_count(), 0);
}
