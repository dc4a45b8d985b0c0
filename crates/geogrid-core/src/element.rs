//! Matrix element types
//!
//! A [`Matrix`](crate::Matrix) holds a single homogeneous numeric element
//! type. The [`Element`] trait is the bound every such type satisfies; it is
//! implemented for the fixed-width integer types and both float widths.

use std::fmt;

/// Runtime tag for the element type of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementType {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
}

impl ElementType {
    /// Whether the type is a floating-point type
    pub fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Size of one element in bytes
    pub fn size_bytes(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 => 8,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        };
        f.write_str(name)
    }
}

/// A numeric value that can be stored in a [`Matrix`](crate::Matrix).
pub trait Element: Copy + PartialEq + PartialOrd + fmt::Debug + Send + Sync + 'static {
    /// Runtime tag for this type
    const TYPE: ElementType;

    /// The additive identity
    fn zero() -> Self;

    /// Convert to `f64` (nearest representable value for 64-bit integers)
    fn to_f64(self) -> f64;
}

macro_rules! impl_element {
    ($($ty:ty => $tag:ident, $zero:expr;)*) => {
        $(
            impl Element for $ty {
                const TYPE: ElementType = ElementType::$tag;

                #[inline]
                fn zero() -> Self {
                    $zero
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl_element! {
    u8 => U8, 0;
    u16 => U16, 0;
    u32 => U32, 0;
    u64 => U64, 0;
    i8 => I8, 0;
    i16 => I16, 0;
    i32 => I32, 0;
    i64 => I64, 0;
    f32 => F32, 0.0;
    f64 => F64, 0.0;
}
