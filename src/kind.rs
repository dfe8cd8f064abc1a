//! Type identity for the numeric representations this crate understands.
//!
//! A [`Kind`] is a small integer naming a concrete machine representation. It
//! is only meaningful inside the process that produced it: the values are not
//! part of any stable format and must never be persisted or sent elsewhere.

use num_complex::Complex;
use num_traits::NumCast;
use std::{any::Any, fmt};

/// Opaque tag identifying a concrete machine representation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Kind(u8);

impl Kind {
    /// Anything this crate does not recognize.
    pub const INVALID: Kind = Kind(0);
    pub const BOOL: Kind = Kind(1);
    pub const CHAR: Kind = Kind(2);
    pub const I8: Kind = Kind(3);
    pub const I16: Kind = Kind(4);
    pub const I32: Kind = Kind(5);
    pub const I64: Kind = Kind(6);
    pub const I128: Kind = Kind(7);
    pub const ISIZE: Kind = Kind(8);
    pub const U8: Kind = Kind(9);
    pub const U16: Kind = Kind(10);
    pub const U32: Kind = Kind(11);
    pub const U64: Kind = Kind(12);
    pub const U128: Kind = Kind(13);
    pub const USIZE: Kind = Kind(14);
    pub const F32: Kind = Kind(15);
    pub const F64: Kind = Kind(16);
    /// `Complex<f32>`, two 32-bit floats.
    pub const COMPLEX64: Kind = Kind(17);
    /// `Complex<f64>`, two 64-bit floats.
    pub const COMPLEX128: Kind = Kind(18);

    /// Index of this kind in a table covering every possible tag.
    #[inline]
    pub const fn index(self) -> usize { self.0 as usize }

    /// The Rust spelling of the representation.
    pub fn name(self) -> &'static str {
        match self {
            Kind::BOOL => "bool",
            Kind::CHAR => "char",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::I128 => "i128",
            Kind::ISIZE => "isize",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::U128 => "u128",
            Kind::USIZE => "usize",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::COMPLEX64 => "Complex<f32>",
            Kind::COMPLEX128 => "Complex<f64>",
            _ => "invalid",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.write_str(self.name()) }
}

impl fmt::Debug for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Kind({}: {})", self.0, self.name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A built-in numeric representation with a statically known [`Kind`].
///
/// This trait is sealed; use [`Numeric`] to give a user-defined type the
/// classification of one of these.
pub trait Primitive: sealed::Sealed + Copy + 'static {
    const KIND: Kind;
}

/// A primitive whose values are totally ordered (apart from NaN), i.e. every
/// primitive except the complex types.
///
/// Extreme values are only defined for types whose representation is `Real`.
pub trait Real: Primitive + NumCast + PartialOrd {}

/// A type classified by its underlying primitive representation.
///
/// Classification is structural: a newtype over `i16` classifies exactly like
/// `i16` and gets the same extreme values. The impl is usually derived:
///
/// ```
/// use number::prelude::*;
///
/// #[derive(Numeric, Clone, Copy, Debug, PartialEq)]
/// struct Meters(u32);
///
/// assert_eq!(reflect::<Meters>(), reflect::<u32>());
/// assert_eq!(greatest::<Meters>(), Meters(u32::max_value()));
/// ```
///
/// Only structs with exactly one field can derive it:
///
/// ```compile_fail
/// use number::prelude::*;
///
/// #[derive(Numeric, Clone, Copy)]
/// struct Point(i32, i32);
/// ```
pub trait Numeric: Copy + 'static {
    /// The built-in type this one is represented as.
    type Repr: Primitive;

    fn from_repr(r: Self::Repr) -> Self;

    fn into_repr(self) -> Self::Repr;
}

macro_rules! primitive {
    ($t:ty, $kind:expr) => {
        impl sealed::Sealed for $t {}

        impl Primitive for $t {
            const KIND: Kind = $kind;
        }

        impl Numeric for $t {
            type Repr = $t;

            #[inline(always)]
            fn from_repr(r: $t) -> $t { r }

            #[inline(always)]
            fn into_repr(self) -> $t { self }
        }
    };
}

macro_rules! real {
    ($t:ty, $kind:expr) => {
        primitive!($t, $kind);
        impl Real for $t {}
    };
}

real!(i8, Kind::I8);
real!(i16, Kind::I16);
real!(i32, Kind::I32);
real!(i64, Kind::I64);
real!(i128, Kind::I128);
real!(isize, Kind::ISIZE);
real!(u8, Kind::U8);
real!(u16, Kind::U16);
real!(u32, Kind::U32);
real!(u64, Kind::U64);
real!(u128, Kind::U128);
real!(usize, Kind::USIZE);
real!(f32, Kind::F32);
real!(f64, Kind::F64);
primitive!(Complex<f32>, Kind::COMPLEX64);
primitive!(Complex<f64>, Kind::COMPLEX128);

macro_rules! match_type {
    ($x:expr, $($t:ty => $kind:expr),* $(,)*) => {
        $(
            if $x.is::<$t>() {
                return $kind;
            }
        )*
    };
}

/// Recovers the [`Kind`] of a type-erased value, or [`Kind::INVALID`] if its
/// type is not one this crate names.
///
/// Only built-in types are recognized here. A newtype implementing
/// [`Numeric`] erases to its own `TypeId`, so it must be classified through
/// [`reflect`](crate::reflect) or [`type_of`](crate::type_of) instead.
pub fn kind_of_any(x: &dyn Any) -> Kind {
    match_type!(x,
        i8 => Kind::I8,
        i16 => Kind::I16,
        i32 => Kind::I32,
        i64 => Kind::I64,
        i128 => Kind::I128,
        isize => Kind::ISIZE,
        u8 => Kind::U8,
        u16 => Kind::U16,
        u32 => Kind::U32,
        u64 => Kind::U64,
        u128 => Kind::U128,
        usize => Kind::USIZE,
        f32 => Kind::F32,
        f64 => Kind::F64,
        Complex<f32> => Kind::COMPLEX64,
        Complex<f64> => Kind::COMPLEX128,
        bool => Kind::BOOL,
        char => Kind::CHAR,
    );
    Kind::INVALID
}
