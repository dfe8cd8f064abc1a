pub use crate::{
    errors::NonNumericError,
    extreme::{greatest, greatest_finite, least, least_finite},
    kind::{Kind, Numeric, Primitive, Real},
    reflect::{reflect, try_type_of_any, type_of, type_of_any, Type},
};
pub use num_complex::Complex;
pub use number_derive::Numeric;
