//! Element trait for mapping Rust types to DType

use super::DType;
use bytemuck::{Pod, Zeroable};
use num_traits::NumCast;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Trait for types that can be values of a sparse container
///
/// This trait connects Rust's type system to sparr's runtime dtype tag.
/// It's implemented for all primitive numeric types.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - Basic trait requirements
/// - `Pod + Zeroable` - Zero-filled bulk allocation of dense buffers (bytemuck)
/// - `Add + Sub + Mul + Div` - Arithmetic operations (Output = Self)
/// - `PartialOrd` - Comparison for min/max operations
/// - `NumCast` - Checked conversions between element types
/// - `Display` - Tagged-literal rendering of containers
///
/// Note: `Neg` is NOT required since unsigned types don't support it.
/// Negation, absolute value, and exponentiation go through the
/// `to_f64`/`from_f64` bridge.
pub trait Element:
    Copy
    + Send
    + Sync
    + Pod
    + Zeroable
    + NumCast
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + PartialOrd
    + fmt::Display
    + fmt::Debug
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for generic numeric operations
    fn to_f64(self) -> f64;

    /// Convert from f64 to this type
    fn from_f64(v: f64) -> Self;

    /// Zero value (the implicit value of absent keys)
    fn zero() -> Self;

    /// One value (the default value of keys constructed without one)
    fn one() -> Self;

    /// Whether this value equals the implicit zero
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::zero()
    }
}

macro_rules! impl_element {
    ($($t:ty => $dtype:ident, $zero:expr, $one:expr;)*) => {
        $(
            impl Element for $t {
                const DTYPE: DType = DType::$dtype;

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $t
                }

                #[inline]
                fn zero() -> Self {
                    $zero
                }

                #[inline]
                fn one() -> Self {
                    $one
                }
            }
        )*
    };
}

impl_element! {
    f64 => F64, 0.0, 1.0;
    f32 => F32, 0.0, 1.0;
    i64 => I64, 0, 1;
    i32 => I32, 0, 1;
    i16 => I16, 0, 1;
    i8  => I8,  0, 1;
    u64 => U64, 0, 1;
    u32 => U32, 0, 1;
    u16 => U16, 0, 1;
    u8  => U8,  0, 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_dtype() {
        assert_eq!(f64::DTYPE, DType::F64);
        assert_eq!(f32::DTYPE, DType::F32);
        assert_eq!(i32::DTYPE, DType::I32);
        assert_eq!(u8::DTYPE, DType::U8);
    }

    #[test]
    fn test_element_conversions() {
        assert_eq!(f32::from_f64(2.5).to_f64(), 2.5f32 as f64);
        assert_eq!(i32::from_f64(42.0), 42);
        assert_eq!(u64::from_f64(7.9), 7);
    }

    #[test]
    fn test_element_zero_one() {
        assert!(f64::zero().is_zero());
        assert!(!f64::one().is_zero());
        assert_eq!(i64::one() + i64::one(), 2);
    }
}
