//! # Extreme values
//!
//! The four bounds of every ordered numeric type. Each function switches on
//! the packed [`Type`](crate::Type) of `T`, builds the exact value in the
//! fixed-width primitive of that class and converts it into `T`. Since the
//! primitive and `T::Repr` share a descriptor, the conversion never loses
//! anything: for `isize` and `usize` it is a widening or narrowing between
//! types of the same size, for everything else it is the identity.
//!
//! Complex types have no extremes, so passing one is a compile error:
//!
//! ```compile_fail
//! use number::prelude::*;
//!
//! let _ = greatest::<Complex<f32>>();
//! ```

#![allow(clippy::inconsistent_digit_grouping)]
use crate::{
    kind::{Numeric, Real},
    reflect::{constants::*, reflect},
};
use num_traits::{NumCast, ToPrimitive};

// 0x1p127 * (1 + (1 - 0x1p-23))
const F32_MAX_BITS: u32 = 0x7f7f_ffff;
const F32_INF_BITS: u32 = 0x7f80_0000;
// 0x1p1023 * (1 + (1 - 0x1p-52))
const F64_MAX_BITS: u64 = 0x7fef_ffff_ffff_ffff;
const F64_INF_BITS: u64 = 0x7ff0_0000_0000_0000;
const SIGN32: u32 = 0x8000_0000;
const SIGN64: u64 = 0x8000_0000_0000_0000;

/// Converts a primitive of the same class as `T` into `T`.
#[inline(always)]
fn cast<T, N>(n: N) -> T
where
    T: Numeric,
    T::Repr: Real,
    N: ToPrimitive,
{
    match <T::Repr as NumCast>::from(n) {
        Some(r) => T::from_repr(r),
        None => unreachable!("number: extreme value does not fit {:?}", reflect::<T>()),
    }
}

/// Returns the value such that `x <= greatest::<T>()` for every non-NaN `x`
/// of type `T`.
///
/// In particular this is `+inf` for `f32` and `f64`. Use [`greatest_finite`]
/// for the largest finite value.
///
/// ```
/// use number::greatest;
///
/// assert_eq!(greatest::<i8>(), 127);
/// assert_eq!(greatest::<f32>(), std::f32::INFINITY);
/// ```
#[inline]
pub fn greatest<T>() -> T
where
    T: Numeric,
    T::Repr: Real,
{
    let typ = reflect::<T>();
    match typ.packed() {
        INT8 => cast(0x7f_i8),
        INT16 => cast(0x7fff_i16),
        INT32 => cast(0x7fff_ffff_i32),
        INT64 => cast(0x7fff_ffff_ffff_ffff_i64),
        INT128 => cast(0x7fff_ffff_ffff_ffff_ffff_ffff_ffff_ffff_i128),
        UINT8 => cast(0xff_u8),
        UINT16 => cast(0xffff_u16),
        UINT32 => cast(0xffff_ffff_u32),
        UINT64 => cast(0xffff_ffff_ffff_ffff_u64),
        UINT128 => cast(0xffff_ffff_ffff_ffff_ffff_ffff_ffff_ffff_u128),
        FLOAT32 => cast(f32::from_bits(F32_INF_BITS)),
        FLOAT64 => cast(f64::from_bits(F64_INF_BITS)),
        _ => unreachable!("number: no greatest value for {:?}", typ),
    }
}

/// Returns the largest finite value of type `T`.
///
/// For integers this is the same as [`greatest`]. For floats it is the
/// largest normal value, `f32::MAX` or `f64::MAX`.
#[inline]
pub fn greatest_finite<T>() -> T
where
    T: Numeric,
    T::Repr: Real,
{
    let typ = reflect::<T>();
    match typ.packed() {
        INT8 => cast(0x7f_i8),
        INT16 => cast(0x7fff_i16),
        INT32 => cast(0x7fff_ffff_i32),
        INT64 => cast(0x7fff_ffff_ffff_ffff_i64),
        INT128 => cast(0x7fff_ffff_ffff_ffff_ffff_ffff_ffff_ffff_i128),
        UINT8 => cast(0xff_u8),
        UINT16 => cast(0xffff_u16),
        UINT32 => cast(0xffff_ffff_u32),
        UINT64 => cast(0xffff_ffff_ffff_ffff_u64),
        UINT128 => cast(0xffff_ffff_ffff_ffff_ffff_ffff_ffff_ffff_u128),
        FLOAT32 => cast(f32::from_bits(F32_MAX_BITS)),
        FLOAT64 => cast(f64::from_bits(F64_MAX_BITS)),
        _ => unreachable!("number: no greatest finite value for {:?}", typ),
    }
}

/// Returns the value such that `least::<T>() <= x` for every non-NaN `x` of
/// type `T`.
///
/// This is zero for unsigned integers and `-inf` for `f32` and `f64`. Use
/// [`least_finite`] for the least finite value.
#[inline]
pub fn least<T>() -> T
where
    T: Numeric,
    T::Repr: Real,
{
    let typ = reflect::<T>();
    match typ.packed() {
        INT8 => cast(-0x80_i8),
        INT16 => cast(-0x8000_i16),
        INT32 => cast(-0x8000_0000_i32),
        INT64 => cast(-0x8000_0000_0000_0000_i64),
        INT128 => cast(-0x8000_0000_0000_0000_0000_0000_0000_0000_i128),
        UINT8 | UINT16 | UINT32 | UINT64 | UINT128 => cast(0_u8),
        FLOAT32 => cast(f32::from_bits(SIGN32 | F32_INF_BITS)),
        FLOAT64 => cast(f64::from_bits(SIGN64 | F64_INF_BITS)),
        _ => unreachable!("number: no least value for {:?}", typ),
    }
}

/// Returns the least finite value of type `T`.
///
/// For integers this is the same as [`least`]. For floats it is the negation
/// of [`greatest_finite`].
#[inline]
pub fn least_finite<T>() -> T
where
    T: Numeric,
    T::Repr: Real,
{
    let typ = reflect::<T>();
    match typ.packed() {
        INT8 => cast(-0x80_i8),
        INT16 => cast(-0x8000_i16),
        INT32 => cast(-0x8000_0000_i32),
        INT64 => cast(-0x8000_0000_0000_0000_i64),
        INT128 => cast(-0x8000_0000_0000_0000_0000_0000_0000_0000_i128),
        UINT8 | UINT16 | UINT32 | UINT64 | UINT128 => cast(0_u8),
        FLOAT32 => cast(f32::from_bits(SIGN32 | F32_MAX_BITS)),
        FLOAT64 => cast(f64::from_bits(SIGN64 | F64_MAX_BITS)),
        _ => unreachable!("number: no least finite value for {:?}", typ),
    }
}
