//! Signature type tags.
//!
//! Tags describe the calling convention of an export: one tag per argument
//! plus one for the return value. The binder core treats them opaquely and
//! only makes them available to symbol sources; the typed entry points in
//! [`crate::wrappers`] are where concrete Rust types are chosen.

use std::fmt;

/// Primitive type tag for one argument slot or return value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// No value (return position only)
    Void,
    /// 16-bit signed integer
    I16,
    /// 16-bit unsigned integer
    U16,
    /// 32-bit signed integer
    I32,
    /// 32-bit unsigned integer
    U32,
    /// 64-bit signed integer
    I64,
    /// 64-bit unsigned integer (also `size_t` on LP64)
    U64,
    /// 32-bit floating point
    F32,
    /// 64-bit floating point
    F64,
    /// Pointer (platform word)
    Ptr,
}

impl TypeTag {
    /// Short label used when printing signatures.
    pub const fn label(self) -> &'static str {
        match self {
            TypeTag::Void => "void",
            TypeTag::I16 => "i16",
            TypeTag::U16 => "u16",
            TypeTag::I32 => "i32",
            TypeTag::U32 => "u32",
            TypeTag::I64 => "i64",
            TypeTag::U64 => "u64",
            TypeTag::F32 => "f32",
            TypeTag::F64 => "f64",
            TypeTag::Ptr => "ptr",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Calling signature of one export: ordered argument tags plus a return tag.
///
/// Signatures are defined once, in the catalog table, and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// Argument type tags, in call order
    pub args: &'static [TypeTag],
    /// Return value tag (`Void` for no return value)
    pub ret: TypeTag,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, ") -> {}", self.ret)
    }
}
