//! The export catalog table.
//!
//! One declarative line per export: catalog name, argument tags, return
//! tag. The `catalog!` macro expands the table into the [`Export`] enum and
//! its compile-time accessors, so call sites name exports as enum variants
//! and never go through a runtime string lookup.
//!
//! Signatures follow the LP64 data model used by the Linux and macOS C
//! runtimes (`long` and `size_t` are 64-bit).

use super::types::{Signature, TypeTag};

/// Expands the catalog table into the `Export` enum plus name, signature,
/// and iteration accessors. Variants are declared in table order; the slot
/// index of a variant is its position in the table.
macro_rules! catalog {
    ($( $variant:ident => $name:literal, [$($arg:ident),*] -> $ret:ident; )+) => {
        /// One variant per export in the catalog.
        ///
        /// The variant is the compile-time association between an export
        /// name and its signature. Typed entry points request resolution by
        /// variant, never by string.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Export {
            $(
                #[allow(missing_docs)]
                $variant,
            )+
        }

        impl Export {
            /// Every export, in table order.
            pub const ALL: &'static [Export] = &[$( Export::$variant, )+];

            /// Number of exports in the catalog.
            pub const COUNT: usize = Export::ALL.len();

            /// The export's name in the library's export table.
            /// Case-sensitive, unique within the catalog.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Export::$variant => $name, )+
                }
            }

            /// The export's calling signature.
            pub const fn signature(self) -> &'static Signature {
                match self {
                    $( Export::$variant => &Signature {
                        args: &[$( TypeTag::$arg ),*],
                        ret: TypeTag::$ret,
                    }, )+
                }
            }
        }
    };
}

catalog! {
    // process identity
    Getpid      => "getpid",      [] -> I32;
    Getppid     => "getppid",     [] -> I32;
    Getuid      => "getuid",      [] -> U32;
    Geteuid     => "geteuid",     [] -> U32;
    Getgid      => "getgid",      [] -> U32;
    Getegid     => "getegid",     [] -> U32;
    Getpagesize => "getpagesize", [] -> I32;
    Isatty      => "isatty",      [I32] -> I32;

    // character classification and conversion
    Isalnum     => "isalnum",     [I32] -> I32;
    Isalpha     => "isalpha",     [I32] -> I32;
    Iscntrl     => "iscntrl",     [I32] -> I32;
    Isdigit     => "isdigit",     [I32] -> I32;
    Isgraph     => "isgraph",     [I32] -> I32;
    Islower     => "islower",     [I32] -> I32;
    Isprint     => "isprint",     [I32] -> I32;
    Ispunct     => "ispunct",     [I32] -> I32;
    Isspace     => "isspace",     [I32] -> I32;
    Isupper     => "isupper",     [I32] -> I32;
    Isxdigit    => "isxdigit",    [I32] -> I32;
    Tolower     => "tolower",     [I32] -> I32;
    Toupper     => "toupper",     [I32] -> I32;

    // strings and numeric parsing
    Strlen      => "strlen",      [Ptr] -> U64;
    Strnlen     => "strnlen",     [Ptr, U64] -> U64;
    Strcmp      => "strcmp",      [Ptr, Ptr] -> I32;
    Strncmp     => "strncmp",     [Ptr, Ptr, U64] -> I32;
    Strcasecmp  => "strcasecmp",  [Ptr, Ptr] -> I32;
    Atoi        => "atoi",        [Ptr] -> I32;
    Atol        => "atol",        [Ptr] -> I64;
    Atoll       => "atoll",       [Ptr] -> I64;
    Atof        => "atof",        [Ptr] -> F64;

    // integer math
    Abs         => "abs",         [I32] -> I32;
    Labs        => "labs",        [I64] -> I64;
    Llabs       => "llabs",       [I64] -> I64;

    // network byte order
    Htons       => "htons",       [U16] -> U16;
    Ntohs       => "ntohs",       [U16] -> U16;
    Htonl       => "htonl",       [U32] -> U32;
    Ntohl       => "ntohl",       [U32] -> U32;

    // pseudo-random numbers
    Rand        => "rand",        [] -> I32;
    Srand       => "srand",       [U32] -> Void;
    RandR       => "rand_r",      [Ptr] -> I32;

    // wall clock and CPU time
    Time        => "time",        [Ptr] -> I64;
    Clock       => "clock",       [] -> I64;
    Difftime    => "difftime",    [I64, I64] -> F64;

    // heap allocation
    Malloc      => "malloc",      [U64] -> Ptr;
    Calloc      => "calloc",      [U64, U64] -> Ptr;
    Realloc     => "realloc",     [Ptr, U64] -> Ptr;
    Free        => "free",        [Ptr] -> Void;
}

impl Export {
    /// Dense index of this export, usable as a cache slot address.
    /// Indices cover `0..COUNT` with no gaps.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up an export by its catalog name. Intended for external input
    /// (CLI arguments, config files); compiled call sites use variants
    /// directly.
    pub fn from_name(name: &str) -> Option<Export> {
        Export::ALL.iter().copied().find(|e| e.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_are_dense() {
        for (i, export) in Export::ALL.iter().enumerate() {
            assert_eq!(export.index(), i);
        }
        assert_eq!(Export::ALL.len(), Export::COUNT);
    }

    #[test]
    fn test_names_are_unique() {
        for (i, a) in Export::ALL.iter().enumerate() {
            for b in &Export::ALL[i + 1..] {
                assert_ne!(a.name(), b.name(), "{:?} and {:?} share a name", a, b);
            }
        }
    }

    #[test]
    fn test_from_name_round_trip() {
        for &export in Export::ALL {
            assert_eq!(Export::from_name(export.name()), Some(export));
        }
        assert_eq!(Export::from_name("no_such_export"), None);
        // Case-sensitive
        assert_eq!(Export::from_name("GETPID"), None);
    }

    #[test]
    fn test_signatures() {
        assert_eq!(Export::Getpid.name(), "getpid");
        assert_eq!(Export::Getpid.signature().to_string(), "() -> i32");

        assert_eq!(Export::Strnlen.signature().to_string(), "(ptr, u64) -> u64");
        assert_eq!(Export::Htons.signature().to_string(), "(u16) -> u16");
        assert_eq!(Export::Srand.signature().to_string(), "(u32) -> void");
        assert_eq!(Export::Difftime.signature().to_string(), "(i64, i64) -> f64");
    }

    #[test]
    fn test_void_only_in_return_position() {
        for &export in Export::ALL {
            for arg in export.signature().args {
                assert_ne!(*arg, crate::catalog::TypeTag::Void, "{:?}", export);
            }
        }
    }
}
