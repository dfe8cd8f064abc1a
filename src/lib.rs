//! # number
//!
//! Lightweight reflection on numeric types, and the extreme values that follow
//! from it.
//!
//! # Usage
//!
//! [`reflect`] maps any numeric type to a [`Type`], a one-byte descriptor of
//! its width, signedness, float-ness and orderedness. The lookup is a `const
//! fn`, so it folds away whenever `T` is known.
//!
//! ```
//! use number::prelude::*;
//!
//! let t = reflect::<u16>();
//!
//! assert_eq!(t.bits(), 16);
//! assert!(t.is_unsigned());
//! assert!(!t.is_float());
//! assert!(t.is_ordered());
//! ```
//!
//! The [`greatest`], [`greatest_finite`], [`least`] and [`least_finite`]
//! functions are built on top of it, which makes them handy seeds for folds
//! in generic code:
//!
//! ```
//! use number::prelude::*;
//!
//! fn min<T>(xs: &[T]) -> T
//! where
//!     T: Numeric + PartialOrd,
//!     T::Repr: Real,
//! {
//!     xs.iter().fold(greatest::<T>(), |m, &x| if x < m { x } else { m })
//! }
//!
//! assert_eq!(min(&[1i32, 3, 2]), 1);
//! assert_eq!(min::<i32>(&[]), 2147483647);
//! assert_eq!(min(&[1.5f32]), 1.5);
//! ```
//!
//! # Integers
//!
//! Signed and unsigned integers of 8 to 128 bits are supported. `isize` and
//! `usize` are classified as the fixed-width integer of the same size on the
//! target, decided when the crate is compiled.
//!
//! # Floats
//!
//! `f32` and `f64` are ordered floats: their [`greatest`] is `+inf`, while
//! [`greatest_finite`] is the largest normal value.
//!
//! ```
//! use number::prelude::*;
//!
//! assert_eq!(greatest::<f64>(), std::f64::INFINITY);
//! assert_eq!(greatest_finite::<f64>(), std::f64::MAX);
//! assert_eq!(least_finite::<f32>(), -std::f32::MAX);
//! ```
//!
//! # Complex numbers
//!
//! [`Complex<f32>`](Complex) and [`Complex<f64>`](Complex) are classified as
//! unordered 64 and 128-bit floats. They have no extreme values.
//!
//! # Named types
//!
//! Classification is structural. A newtype deriving [`Numeric`] is described
//! by, and gets the extremes of, the type it wraps:
//!
//! ```
//! use number::prelude::*;
//!
//! #[derive(Numeric, Clone, Copy, Debug, PartialEq)]
//! struct MyInt(i16);
//!
//! assert_eq!(reflect::<MyInt>(), reflect::<i16>());
//! assert_eq!(least::<MyInt>(), MyInt(-32768));
//! ```
//!
//! # Type-erased values
//!
//! [`type_of_any`] classifies a `&dyn Any`, panicking if the value is not a
//! built-in numeric type; [`try_type_of_any`] returns a [`NonNumericError`]
//! instead.

extern crate self as number;

/// Error types.
pub mod errors;
/// Extreme values of ordered numeric types.
pub mod extreme;
/// Type identity of numeric representations.
pub mod kind;
/// Commonly used items.
pub mod prelude;
/// Numeric type descriptors.
pub mod reflect;

pub use crate::{
    errors::NonNumericError,
    extreme::{greatest, greatest_finite, least, least_finite},
    kind::{Kind, Numeric, Primitive, Real},
    reflect::{reflect, try_type_of_any, type_of, type_of_any, Type},
};
pub use num_complex::Complex;
pub use number_derive::Numeric;
