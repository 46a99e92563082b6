//! Type promotion rules for re-typing containers

use super::DType;

/// Promote two dtypes to a common dtype
///
/// Follows NumPy-like promotion rules:
/// - Floats always win over integers
/// - Larger types win over smaller types
/// - Signed wins over unsigned when mixing
pub fn promote(lhs: DType, rhs: DType) -> DType {
    use DType::*;

    if lhs == rhs {
        return lhs;
    }

    // Promotion priority (higher = wins)
    let priority = |dt: DType| -> u8 {
        match dt {
            F64 => 100,
            F32 => 90,
            I64 => 65,
            U64 => 60,
            I32 => 55,
            U32 => 50,
            I16 => 45,
            U16 => 40,
            I8 => 35,
            U8 => 30,
        }
    };

    // Special case: mixing signed and unsigned integers
    // Promote to a signed type of same or larger size
    if lhs.is_signed_int() && rhs.is_unsigned_int() {
        return match (lhs, rhs) {
            (I64, _) => I64,
            (I32, U64 | U32) => I64,
            (I32, _) => I32,
            (I16, U64 | U32 | U16) => I32,
            (I16, _) => I16,
            (I8, _) => I16,
            _ => unreachable!("lhs is signed int and rhs is unsigned int"),
        };
    }
    if rhs.is_signed_int() && lhs.is_unsigned_int() {
        return promote(rhs, lhs);
    }

    // General case: higher priority wins
    if priority(lhs) >= priority(rhs) {
        lhs
    } else {
        rhs
    }
}

/// Check if a dtype can be cast to another without data loss
///
/// Used by `SparseVector::cast` to decide whether per-value range checks
/// are needed. A cast is safe only when the promoted type is the target
/// and the target can represent every source value exactly.
pub fn can_cast_safely(from: DType, to: DType) -> bool {
    use DType::*;

    if from == to {
        return true;
    }
    if promote(from, to) != to {
        return false;
    }

    match (from, to) {
        // Float widening
        (F32, F64) => true,

        // Small integers fit exactly in floats
        (I8 | U8 | I16 | U16, F32 | F64) => true,
        (I32 | U32, F64) => true,

        // Integer widening
        (I8, I16 | I32 | I64) => true,
        (I16, I32 | I64) => true,
        (I32, I64) => true,
        (U8, U16 | U32 | U64 | I16 | I32 | I64) => true,
        (U16, U32 | U64 | I32 | I64) => true,
        (U32, U64 | I64) => true,

        _ => false,
    }
}
