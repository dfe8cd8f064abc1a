//! # Numeric type descriptors
//!
//! A [`Type`] packs what this crate knows about a numeric representation into
//! a single byte:
//!
//! | bits | meaning                                                          |
//! |------|------------------------------------------------------------------|
//! | 0..3 | width class: `001` 8, `010` 16, `011` 32, `100` 64, `101` 128    |
//! | 3    | set if the type is unsigned                                      |
//! | 4    | set if the type is floating point (complex types included)       |
//! | 5    | set if the type is ordered (clear only for complex types)        |
//!
//! All-zero is [`Type::NONE`], the descriptor of anything that is not a
//! recognized numeric type.
//!
//! # Example
//!
//! ```
//! use number::prelude::*;
//!
//! let t = reflect::<u16>();
//! assert_eq!(t.bits(), 16);
//! assert!(t.is_unsigned());
//! assert!(!t.is_float());
//! assert!(t.is_ordered());
//!
//! // the erased entry point only fails for non-numeric values
//! assert_eq!(type_of_any(&3.5f64), reflect::<f64>());
//! assert!(try_type_of_any(&"three").is_err());
//! ```

use crate::{
    errors::NonNumericError,
    kind::{kind_of_any, Kind, Numeric, Primitive},
};
use std::{any::Any, fmt};
use tracing::{debug, error};

pub(crate) mod constants;
use constants::*;

/// Metadata about a numeric type.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Type(u8);

/// Descriptor for every possible [`Kind`], fixed when the crate is compiled.
const TYPES: [Type; 256] = table();

const fn table() -> [Type; 256] {
    let mut t = [Type::NONE; 256];
    t[Kind::I8.index()] = Type(INT8);
    t[Kind::I16.index()] = Type(INT16);
    t[Kind::I32.index()] = Type(INT32);
    t[Kind::I64.index()] = Type(INT64);
    t[Kind::I128.index()] = Type(INT128);
    t[Kind::ISIZE.index()] = Type(ORDERED | WORD);
    t[Kind::U8.index()] = Type(UINT8);
    t[Kind::U16.index()] = Type(UINT16);
    t[Kind::U32.index()] = Type(UINT32);
    t[Kind::U64.index()] = Type(UINT64);
    t[Kind::U128.index()] = Type(UINT128);
    t[Kind::USIZE.index()] = Type(ORDERED | UNSIGNED | WORD);
    t[Kind::F32.index()] = Type(FLOAT32);
    t[Kind::F64.index()] = Type(FLOAT64);
    t[Kind::COMPLEX64.index()] = Type(COMPLEX64);
    t[Kind::COMPLEX128.index()] = Type(COMPLEX128);
    t
}

impl Type {
    /// The sentinel for "not a recognized numeric type".
    pub const NONE: Type = Type(0);

    /// Looks up the descriptor for a kind. Total: unrecognized kinds give
    /// [`Type::NONE`].
    #[inline]
    pub const fn from_kind(kind: Kind) -> Type { TYPES[kind.index()] }

    /// The packed encoding, as described in the [module docs](self).
    #[inline]
    pub const fn packed(self) -> u8 { self.0 }

    /// Size of the type in bits, or 0 for [`Type::NONE`].
    #[inline]
    pub const fn bits(self) -> u32 { BITMAP[(self.0 & MASK_SIZE) as usize] }

    #[inline]
    pub const fn is_unsigned(self) -> bool { self.0 & UNSIGNED != 0 }

    /// Whether the type is floating point. True for complex types as well.
    #[inline]
    pub const fn is_float(self) -> bool { self.0 & FLOAT != 0 }

    #[inline]
    pub const fn is_ordered(self) -> bool { self.0 & ORDERED != 0 }

    #[inline]
    pub const fn is_numeric(self) -> bool { self.0 != 0 }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.is_numeric() {
            return f.write_str("Type(NONE)");
        }
        f.debug_struct("Type")
            .field("bits", &self.bits())
            .field("unsigned", &self.is_unsigned())
            .field("float", &self.is_float())
            .field("ordered", &self.is_ordered())
            .finish()
    }
}

/// Gets the [`Type`] of a numeric type. Usable in constant context.
///
/// ```
/// use number::prelude::*;
///
/// const WORD: Type = reflect::<usize>();
/// assert_eq!(WORD.bits() as usize, 8 * std::mem::size_of::<usize>());
/// ```
#[inline]
pub const fn reflect<T: Numeric>() -> Type {
    Type::from_kind(<T::Repr as Primitive>::KIND)
}

/// Gets the [`Type`] of a numeric value.
#[inline]
pub fn type_of<T: Numeric>(_x: T) -> Type { reflect::<T>() }

/// Gets the [`Type`] of a type-erased value.
///
/// # Panics
///
/// Panics if the dynamic type of `x` is not numeric. See [`try_type_of_any`]
/// for a non-panicking version.
///
/// Note that a `&Box<dyn Any>` coerces to a `&dyn Any` naming the box itself,
/// so pass `&*boxed` to classify the boxed value.
pub fn type_of_any(x: &dyn Any) -> Type {
    let kind = kind_of_any(x);
    let t = Type::from_kind(kind);
    if !t.is_numeric() {
        error!(%kind, "dynamic classification of a non-numeric value");
        panic!("number: non-numeric type");
    }
    t
}

/// Gets the [`Type`] of a type-erased value, failing if its dynamic type is
/// not numeric.
pub fn try_type_of_any(x: &dyn Any) -> Result<Type, NonNumericError> {
    let kind = kind_of_any(x);
    let t = Type::from_kind(kind);
    if t.is_numeric() {
        Ok(t)
    } else {
        debug!(%kind, "rejected non-numeric value");
        Err(NonNumericError::new(kind))
    }
}
